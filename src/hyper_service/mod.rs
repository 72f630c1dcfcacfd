#![forbid(unsafe_code)]

mod context;
mod handler;
mod middleware;
mod params;
mod service;
mod service_macro;

pub use self::context::Context;
pub use self::handler::{HandleFunc, Handler};
pub use self::middleware::{Chain, Middleware};
pub use self::params::Params;
pub use self::service::RouterService;

pub type Request = hyper::Request<hyper::Body>;
pub type Response = hyper::Response<hyper::Body>;
