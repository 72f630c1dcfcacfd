#![deny(unsafe_code)]

mod router;

pub use self::router::{Captures, ErrorKind, Match, Node, Router, RouterError, SegmentKind};

#[cfg(feature = "http-router")]
pub mod http_router;

#[cfg(feature = "http-router")]
pub use self::http_router::{HttpRouter, Method};

#[cfg(feature = "hyper-service")]
pub mod hyper_service;

#[cfg(feature = "hyper-service")]
pub use self::hyper_service::{
    Chain, Context, HandleFunc, Handler, Middleware, Params, RouterService,
};
