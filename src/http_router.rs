mod router;
mod router_macro;

pub use self::router::HttpRouter;
pub use http::Method;
