use crate::router::{Match, Router, RouterError};

use std::collections::HashMap;

use http::Method;

/// One [`Router`] trie per HTTP method, created on first registration.
#[derive(Debug)]
pub struct HttpRouter<T> {
    trees: HashMap<Method, Router<T>>,
}

impl<T> Default for HttpRouter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> HttpRouter<T> {
    pub fn new() -> Self {
        Self {
            trees: HashMap::new(),
        }
    }

    /// Looks up `path` in the trie for `method`.
    ///
    /// A match may land on a node without a bound route; check
    /// [`Match::is_terminal`] before treating it as found.
    pub fn find_route<'s, 'p>(
        &'s self,
        method: &Method,
        path: &'p str,
    ) -> Option<Match<'s, 'p, T>> {
        let ret = self.trees.get(method)?.find(path);
        if ret.is_none() {
            tracing::trace!(%method, path, "no route matched");
        }
        ret
    }

    /// Registers `data` for `method` and `pattern`.
    ///
    /// # Panics
    /// Panics if the pattern is malformed or conflicts with an existing route.
    pub fn add_route(&mut self, method: Method, pattern: &str, data: T) -> &mut Self {
        if let Err(e) = self.try_add_route(method, pattern, data) {
            panic!("{}", e);
        }
        self
    }

    pub fn try_add_route(
        &mut self,
        method: Method,
        pattern: &str,
        data: T,
    ) -> Result<&mut Self, RouterError> {
        tracing::debug!(%method, pattern, "registering route");
        let ret = self
            .access_router(method.clone())
            .try_insert(pattern, data)
            .map(drop);
        if let Err(e) = ret {
            if self.trees.get(&method).map_or(false, Router::is_empty) {
                self.trees.remove(&method);
            }
            return Err(e);
        }
        Ok(self)
    }

    pub fn router(&self, method: &Method) -> Option<&Router<T>> {
        self.trees.get(method)
    }

    pub fn methods(&self) -> impl Iterator<Item = &Method> {
        self.trees.keys()
    }
}

impl<T> HttpRouter<T> {
    fn access_router(&mut self, method: Method) -> &mut Router<T> {
        self.trees.entry(method).or_insert_with(Router::new)
    }
}
