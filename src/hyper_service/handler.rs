use super::Context;

use std::sync::Arc;

/// A route handler: reads the request from the context and writes the
/// response status, headers and body back into it.
pub trait Handler: Send + Sync {
    fn call(&self, ctx: &mut Context);
}

pub type HandleFunc = Arc<dyn Handler>;

impl<F> Handler for F
where
    F: Fn(&mut Context) + Send + Sync,
{
    fn call(&self, ctx: &mut Context) {
        (self)(ctx)
    }
}
