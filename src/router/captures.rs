use std::ops::Deref;
use std::str::FromStr;

use smallvec::SmallVec;

/// Path parameters captured by a lookup, as `(name, value)` pairs.
///
/// Names are unique: a name bound again deeper in the path keeps only the
/// deeper value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captures<'s, 'p> {
    pub(super) buf: SmallVec<[(&'s str, &'p str); 8]>,
}

impl<'s, 'p> Captures<'s, 'p> {
    pub fn get(&self, name: &str) -> Option<&'p str> {
        self.buf
            .iter()
            .find_map(|&(k, v)| if name == k { Some(v) } else { None })
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }
}

impl<'s, 'p> Deref for Captures<'s, 'p> {
    type Target = [(&'s str, &'p str)];
    fn deref(&self) -> &Self::Target {
        &*self.buf
    }
}

impl<'s, 'p> Captures<'s, 'p> {
    pub(super) fn new() -> Self {
        Self {
            buf: SmallVec::new(),
        }
    }

    pub(super) fn push(&mut self, name: &'s str, value: &'p str) {
        self.buf.push((name, value))
    }

    pub(super) fn truncate(&mut self, len: usize) {
        self.buf.truncate(len)
    }

    /// Drops every binding shadowed by a later one with the same name.
    pub(super) fn dedup_latest(&mut self) {
        let mut i = 0;
        while i < self.buf.len() {
            let name = self.buf[i].0;
            if self.buf[i + 1..].iter().any(|&(k, _)| k == name) {
                self.buf.remove(i);
            } else {
                i += 1;
            }
        }
    }
}
