use super::{Context, HandleFunc};

use std::fmt;
use std::sync::Arc;

/// Wraps the next stage of the chain and returns a replacement stage.
///
/// The returned handler decides whether, when and how often to call `next`,
/// and may run code both before and after it. Not calling `next` stops the
/// request from reaching any inner stage.
pub trait Middleware: Send + Sync {
    fn wrap(&self, next: HandleFunc) -> HandleFunc;
}

impl<F> Middleware for F
where
    F: Fn(HandleFunc) -> HandleFunc + Send + Sync,
{
    fn wrap(&self, next: HandleFunc) -> HandleFunc {
        (self)(next)
    }
}

/// An ordered, append-only list of middlewares.
#[derive(Clone, Default)]
pub struct Chain {
    middlewares: Vec<Arc<dyn Middleware>>,
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("middlewares", &self.middlewares.len())
            .finish()
    }
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, middleware: impl Middleware + 'static) -> &mut Self {
        self.middlewares.push(Arc::new(middleware));
        self
    }

    pub fn len(&self) -> usize {
        self.middlewares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.middlewares.is_empty()
    }

    /// Composes `m1(m2(...mn(serve)))` for middlewares `[m1, m2, ..., mn]`.
    pub fn build(&self, serve: HandleFunc) -> HandleFunc {
        self.middlewares
            .iter()
            .rev()
            .fold(serve, |next, m| m.wrap(next))
    }

    /// Like [`Chain::build`], with a final stage around everything that
    /// flushes the response once the whole chain has returned.
    pub fn build_with_flush(&self, serve: HandleFunc) -> HandleFunc {
        let root = self.build(serve);
        Arc::new(move |ctx: &mut Context| {
            root.call(ctx);
            ctx.flush();
        })
    }
}
