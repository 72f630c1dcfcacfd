use std::collections::HashMap;
use std::fmt;

use regex::Regex;

/// The kind of path segment a [`Node`] was created from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Static,
    Wildcard,
    Param,
    Regex,
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Static => "static",
            Self::Wildcard => "wildcard",
            Self::Param => "param",
            Self::Regex => "regex",
        };
        f.write_str(s)
    }
}

#[derive(Debug)]
pub(super) enum Kind {
    Static,
    Wildcard,
    Param { name: Box<str> },
    Regex { name: Box<str>, regex: Regex },
}

/// One segment position in a method's trie.
///
/// A node owns at most one dynamic child (wildcard, param or regex), so the
/// three special kinds are mutually exclusive among siblings.
#[derive(Debug)]
pub struct Node<T> {
    pub(super) segment: Box<str>,
    pub(super) kind: Kind,
    pub(super) route: Option<Box<str>>,
    pub(super) data: Option<T>,
    pub(super) static_children: HashMap<Box<str>, Node<T>>,
    pub(super) dynamic_child: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    pub(super) fn new(segment: &str, kind: Kind) -> Self {
        Self {
            segment: segment.into(),
            kind,
            route: None,
            data: None,
            static_children: HashMap::new(),
            dynamic_child: None,
        }
    }

    pub(super) fn root() -> Self {
        Self::new("/", Kind::Static)
    }

    /// The raw pattern text this node was created from, e.g. `":id(^[0-9]+$)"`.
    pub fn segment(&self) -> &str {
        &self.segment
    }

    pub fn kind(&self) -> SegmentKind {
        match self.kind {
            Kind::Static => SegmentKind::Static,
            Kind::Wildcard => SegmentKind::Wildcard,
            Kind::Param { .. } => SegmentKind::Param,
            Kind::Regex { .. } => SegmentKind::Regex,
        }
    }

    /// The full pattern bound at this node, if it is terminal.
    pub fn route(&self) -> Option<&str> {
        self.route.as_deref()
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn is_terminal(&self) -> bool {
        self.data.is_some()
    }

    pub fn param_name(&self) -> Option<&str> {
        match self.kind {
            Kind::Param { ref name } | Kind::Regex { ref name, .. } => Some(&**name),
            _ => None,
        }
    }

    pub fn regex(&self) -> Option<&Regex> {
        match self.kind {
            Kind::Regex { ref regex, .. } => Some(regex),
            _ => None,
        }
    }

    pub fn static_child(&self, segment: &str) -> Option<&Node<T>> {
        self.static_children.get(segment)
    }

    pub fn dynamic_child(&self) -> Option<&Node<T>> {
        self.dynamic_child.as_deref()
    }

    pub(super) fn collect_routes<'s>(&'s self, out: &mut Vec<&'s str>) {
        if let Some(route) = self.route() {
            out.push(route);
        }
        for child in self.static_children.values() {
            child.collect_routes(out);
        }
        if let Some(child) = self.dynamic_child.as_deref() {
            child.collect_routes(out);
        }
    }
}
