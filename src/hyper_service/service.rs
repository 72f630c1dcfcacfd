use super::{Chain, Context, HandleFunc, Handler, Middleware, Params, Request, Response};
use crate::http_router::{HttpRouter, Method};

use std::convert::Infallible;
use std::fmt;
use std::future::{ready, Ready};
use std::sync::Arc;
use std::task::{Context as TaskContext, Poll};

use http::StatusCode;
use hyper::service::Service;

/// Dispatches requests through the middleware chain to the matched handler.
///
/// All state is shared behind `Arc`, so cloning is cheap and every clone
/// serves from the same immutable router.
#[derive(Clone)]
pub struct RouterService {
    router: Arc<HttpRouter<HandleFunc>>,
    chain: Arc<Chain>,
    default: Option<HandleFunc>,
}

impl fmt::Debug for RouterService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouterService")
            .field("methods", &self.router.methods().collect::<Vec<_>>())
            .field("chain", &self.chain)
            .field("default", &self.default.as_ref().map(|_| "..."))
            .finish()
    }
}

impl Service<Request> for RouterService {
    type Response = Response;
    type Error = Infallible;
    type Future = Ready<Result<Response, Infallible>>;

    fn poll_ready(&mut self, _cx: &mut TaskContext<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        ready(Ok(self.handle(req)))
    }
}

impl RouterService {
    pub fn new(router: HttpRouter<HandleFunc>) -> Self {
        Self {
            router: Arc::new(router),
            chain: Arc::new(Chain::new()),
            default: None,
        }
    }

    /// Runs `h` for requests that match no route, after the status is set to 404.
    pub fn with_default(mut self, h: impl Handler + 'static) -> Self {
        self.default = Some(Arc::new(h));
        self
    }

    /// Appends a middleware. The first one added is the outermost.
    pub fn with_middleware(mut self, m: impl Middleware + 'static) -> Self {
        Arc::make_mut(&mut self.chain).push(m);
        self
    }

    pub fn with_middlewares<I, M>(mut self, iter: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Middleware + 'static,
    {
        let chain = Arc::make_mut(&mut self.chain);
        for m in iter {
            chain.push(m);
        }
        self
    }

    pub fn router(&self) -> &HttpRouter<HandleFunc> {
        &self.router
    }

    /// Handles one request synchronously.
    pub fn handle(&self, req: Request) -> Response {
        let mut ctx = Context::new(req);
        let root = self.chain.build_with_flush(self.serve());
        root.call(&mut ctx);
        ctx.into_response()
    }

    fn serve(&self) -> HandleFunc {
        let router = Arc::clone(&self.router);
        let default = self.default.clone();
        Arc::new(move |ctx: &mut Context| dispatch(&router, default.as_ref(), ctx))
    }
}

fn lookup(
    router: &HttpRouter<HandleFunc>,
    method: &Method,
    path: &str,
) -> Option<(HandleFunc, Option<String>, Params)> {
    let m = router.find_route(method, path)?;
    let handler = Arc::clone(m.data()?);
    let route = m.route().map(str::to_owned);
    Some((handler, route, Params::from(m.captures())))
}

fn dispatch(router: &HttpRouter<HandleFunc>, default: Option<&HandleFunc>, ctx: &mut Context) {
    let found = match ctx.decoded_path() {
        Some(path) => lookup(router, ctx.method(), &path),
        None => {
            tracing::trace!(path = ctx.path(), "request path is not valid utf-8");
            None
        }
    };

    match found {
        Some((handler, route, params)) => {
            ctx.set_match(route, params);
            handler.call(ctx);
        }
        None => {
            tracing::debug!(method = %ctx.method(), path = ctx.path(), "route not found");
            ctx.set_status(StatusCode::NOT_FOUND);
            if let Some(h) = default {
                h.call(ctx);
            }
        }
    }
}

impl HttpRouter<HandleFunc> {
    pub fn route(&mut self, method: Method, path: &str, h: impl Handler + 'static) -> &mut Self {
        self.add_route(method, path, Arc::new(h))
    }

    pub fn into_service(self) -> RouterService {
        RouterService::new(self)
    }

    pub fn with_default(self, default: impl Handler + 'static) -> RouterService {
        RouterService::new(self).with_default(default)
    }
}

macro_rules! define_method {
    ($name:tt, $method:tt) => {
        pub fn $name(&mut self, path: &str, h: impl Handler + 'static) -> &mut Self {
            self.route(Method::$method, path, h)
        }
    };
}

impl HttpRouter<HandleFunc> {
    define_method!(get, GET);
    define_method!(post, POST);
    define_method!(put, PUT);
    define_method!(delete, DELETE);
    define_method!(head, HEAD);
    define_method!(options, OPTIONS);
    define_method!(connect, CONNECT);
    define_method!(patch, PATCH);
    define_method!(trace, TRACE);
}
