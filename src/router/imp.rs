use super::captures::Captures;
use super::error::RouterError;
use super::node::Node;
use super::{Match, Router};

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Router<T> {
    pub fn new() -> Self {
        Self {
            root: Node::root(),
            len: 0,
        }
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn root(&self) -> &Node<T> {
        &self.root
    }

    pub fn find<'s, 'p>(&'s self, path: &'p str) -> Option<Match<'s, 'p, T>> {
        let mut captures = Captures::new();
        let node = self.find_node(path, &mut captures)?;
        captures.dedup_latest();
        Some(Match { node, captures })
    }

    /// Registers `data` under `pattern`.
    ///
    /// # Panics
    /// Panics if the pattern is malformed or conflicts with an existing route.
    pub fn insert(&mut self, pattern: &str, data: T) -> &mut Self {
        if let Err(e) = self.try_insert(pattern, data) {
            panic!("{}", e);
        }
        self
    }

    pub fn try_insert(&mut self, pattern: &str, data: T) -> Result<&mut Self, RouterError> {
        match self.insert_route(pattern, data) {
            Ok(()) => Ok(self),
            Err(kind) => Err(RouterError::new(kind, pattern)),
        }
    }

    /// Registered patterns, in no particular order.
    pub fn routes(&self) -> impl Iterator<Item = &str> {
        let mut routes = Vec::with_capacity(self.len);
        self.root.collect_routes(&mut routes);
        routes.into_iter()
    }
}
