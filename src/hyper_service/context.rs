use super::{Params, Request, Response};

use std::borrow::Cow;
use std::mem;
use std::str::FromStr;

use http::header::{HeaderMap, HeaderName, HeaderValue};
use http::{Method, StatusCode};
use hyper::Body;
use percent_encoding::percent_decode_str;

/// Per-request state passed through the middleware chain.
///
/// Handlers never write to the transport directly. They set the response
/// fields here, and the outermost stage of the chain flushes them once.
#[derive(Debug)]
pub struct Context {
    req: Request,
    path_params: Params,
    matched_route: Option<String>,
    resp_status: Option<StatusCode>,
    resp_headers: HeaderMap,
    resp_body: Vec<u8>,
    response: Option<Response>,
}

impl Context {
    pub fn new(req: Request) -> Self {
        Self {
            req,
            path_params: Params::default(),
            matched_route: None,
            resp_status: None,
            resp_headers: HeaderMap::new(),
            resp_body: Vec::new(),
            response: None,
        }
    }

    pub fn request(&self) -> &Request {
        &self.req
    }

    pub fn request_mut(&mut self) -> &mut Request {
        &mut self.req
    }

    pub fn method(&self) -> &Method {
        self.req.method()
    }

    /// The request path as sent, still percent-encoded.
    pub fn path(&self) -> &str {
        self.req.uri().path()
    }

    /// The percent-decoded request path, or `None` if it is not valid UTF-8.
    pub fn decoded_path(&self) -> Option<Cow<'_, str>> {
        percent_decode_str(self.path()).decode_utf8().ok()
    }

    pub fn path_params(&self) -> &Params {
        &self.path_params
    }

    pub fn path_value(&self, name: &str) -> Option<&str> {
        self.path_params.get(name)
    }

    pub fn parse_path_value<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.path_params.parse(name)
    }

    /// The pattern of the route that matched this request, if any.
    pub fn matched_route(&self) -> Option<&str> {
        self.matched_route.as_deref()
    }

    pub fn status(&self) -> Option<StatusCode> {
        self.resp_status
    }

    pub fn set_status(&mut self, status: StatusCode) {
        self.resp_status = Some(status);
    }

    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.resp_headers
    }

    pub fn insert_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.resp_headers.insert(name, value);
    }

    pub fn body(&self) -> &[u8] {
        &self.resp_body
    }

    pub fn set_body(&mut self, body: impl Into<Vec<u8>>) {
        self.resp_body = body.into();
    }

    pub fn write(&mut self, data: &[u8]) {
        self.resp_body.extend_from_slice(data);
    }

    pub fn is_flushed(&self) -> bool {
        self.response.is_some()
    }

    /// Moves the response fields into the outgoing response.
    ///
    /// Only the first call has an effect. Status defaults to `200 OK`.
    pub fn flush(&mut self) {
        if self.response.is_some() {
            return;
        }
        let mut res = Response::new(Body::from(mem::take(&mut self.resp_body)));
        if let Some(status) = self.resp_status {
            *res.status_mut() = status;
        }
        *res.headers_mut() = mem::take(&mut self.resp_headers);
        tracing::trace!(status = %res.status(), "response flushed");
        self.response = Some(res);
    }

    pub fn into_response(mut self) -> Response {
        self.flush();
        self.response.unwrap_or_default()
    }

    pub(super) fn set_match(&mut self, route: Option<String>, params: Params) {
        self.matched_route = route;
        self.path_params = params;
    }
}
