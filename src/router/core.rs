use super::captures::Captures;
use super::error::ErrorKind;
use super::node::{Kind, Node};
use super::segment::{self, Segment, Segments, SLASH};
use super::Router;

enum Step<'s, T> {
    Static(&'s Node<T>),
    Capture(&'s Node<T>),
    Wildcard(&'s Node<T>),
    Rejected,
    DeadEnd,
}

impl<T> Node<T> {
    /// Child selection in priority order: static, regex, param, wildcard.
    fn select(&self, part: &str) -> Step<'_, T> {
        // registered patterns never contain empty segments
        if part.is_empty() {
            return Step::DeadEnd;
        }
        if let Some(child) = self.static_children.get(part) {
            return Step::Static(child);
        }
        let child = match self.dynamic_child.as_deref() {
            Some(c) => c,
            None => return Step::DeadEnd,
        };
        match child.kind {
            Kind::Regex { ref regex, .. } => {
                if regex.is_match(part) {
                    Step::Capture(child)
                } else {
                    Step::Rejected
                }
            }
            Kind::Param { .. } => Step::Capture(child),
            Kind::Wildcard => Step::Wildcard(child),
            Kind::Static => Step::DeadEnd,
        }
    }

    /// Checks that `segment` may reuse `self` as the dynamic child slot.
    fn check_slot(&self, segment: &Segment<'_>) -> Result<(), ErrorKind> {
        match (&self.kind, segment) {
            (Kind::Wildcard, Segment::Wildcard) => Ok(()),
            (Kind::Param { name }, Segment::Param(n)) if **name == **n => Ok(()),
            (Kind::Regex { name, regex }, Segment::Regex { name: n, regex: r })
                if **name == **n && regex.as_str() == r.as_str() =>
            {
                Ok(())
            }
            (Kind::Param { .. }, Segment::Param(_))
            | (Kind::Regex { .. }, Segment::Regex { .. }) => Err(ErrorKind::ParamMismatch {
                existing: self.segment.clone(),
            }),
            _ => Err(ErrorKind::KindConflict {
                existing: self.kind(),
                inserted: segment.kind(),
            }),
        }
    }
}

impl<T> Router<T> {
    /// Walks the existing trie along `segments` without mutating it.
    fn check_conflicts(&self, segments: &Segments<'_>) -> Result<(), ErrorKind> {
        let mut node = &self.root;
        for (_, segment) in segments.iter() {
            let next = match segment {
                Segment::Static(s) => node.static_children.get(*s),
                _ => match node.dynamic_child.as_deref() {
                    Some(child) => {
                        child.check_slot(segment)?;
                        Some(child)
                    }
                    None => None,
                },
            };
            node = match next {
                Some(n) => n,
                None => return Ok(()),
            };
        }
        if node.is_terminal() {
            return Err(ErrorKind::DuplicateRoute);
        }
        Ok(())
    }

    pub(super) fn insert_route(&mut self, pattern: &str, data: T) -> Result<(), ErrorKind> {
        let segments = segment::parse_pattern(pattern)?;
        self.check_conflicts(&segments)?;

        let mut node = &mut self.root;
        for (raw, segment) in segments {
            node = match segment {
                Segment::Static(s) => node
                    .static_children
                    .entry(s.into())
                    .or_insert_with(|| Node::new(raw, Kind::Static)),
                segment => &mut **node
                    .dynamic_child
                    .get_or_insert_with(|| Box::new(Node::new(raw, segment.into_kind()))),
            };
        }

        node.data = Some(data);
        node.route = Some(pattern.into());
        self.len += 1;
        Ok(())
    }

    pub(super) fn find_node<'s, 'p>(
        &'s self,
        path: &'p str,
        captures: &mut Captures<'s, 'p>,
    ) -> Option<&'s Node<T>> {
        let path = path.trim_matches(SLASH);
        if path.is_empty() {
            return Some(&self.root);
        }

        let parts = match segment::split(path) {
            Ok(parts) => parts,
            Err(e) => {
                tracing::trace!(path, error = %e, "unsplittable request path");
                return None;
            }
        };

        let mut node = &self.root;
        // deepest wildcard on the descent, with the capture count at that point
        let mut wildcard: Option<(&'s Node<T>, usize)> = None;

        for part in parts {
            node = match node.select(part) {
                Step::Static(child) => child,
                Step::Capture(child) => {
                    if let Some(name) = child.param_name() {
                        captures.push(name, part);
                    }
                    child
                }
                Step::Wildcard(child) => {
                    wildcard = Some((child, captures.len()));
                    child
                }
                Step::Rejected => {
                    tracing::trace!(segment = part, "regex constraint rejected segment");
                    return None;
                }
                Step::DeadEnd => {
                    let (w, len) = wildcard?;
                    captures.truncate(len);
                    return Some(w);
                }
            };
        }

        Some(node)
    }
}
