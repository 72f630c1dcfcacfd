mod captures;
mod core;
mod error;
mod imp;
mod node;
mod segment;

pub use self::captures::Captures;
pub use self::error::{ErrorKind, RouterError};
pub use self::node::{Node, SegmentKind};

/// A segment trie for a single HTTP method.
///
/// Patterns are `/`-separated segments where each segment is one of:
///
/// - `user`: a static segment, matched exactly;
/// - `*`: a wildcard, matching the rest of the path;
/// - `:name`: a parameter, capturing one segment;
/// - `:name(regex)`: a parameter that only captures segments matching `regex`.
///
/// The router is built once and then only read, so lookups need no locking.
#[derive(Debug)]
pub struct Router<T> {
    root: Node<T>,
    len: usize,
}

/// The result of a successful lookup.
///
/// The matched node is not necessarily terminal: a path that stops at an
/// intermediate node matches that node even if no route is bound there.
#[derive(Debug)]
pub struct Match<'s, 'p, T> {
    node: &'s Node<T>,
    captures: Captures<'s, 'p>,
}

impl<'s, 'p, T> Match<'s, 'p, T> {
    pub fn node(&self) -> &'s Node<T> {
        self.node
    }

    pub fn data(&self) -> Option<&'s T> {
        self.node.data()
    }

    /// The registered pattern of the matched node, e.g. `"/user/:id"`.
    pub fn route(&self) -> Option<&'s str> {
        self.node.route()
    }

    pub fn is_terminal(&self) -> bool {
        self.node.is_terminal()
    }

    pub fn captures(&self) -> &Captures<'s, 'p> {
        &self.captures
    }

    pub fn into_captures(self) -> Captures<'s, 'p> {
        self.captures
    }
}
