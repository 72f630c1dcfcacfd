#![cfg(feature = "hyper-service")]

use trie_router::hyper_service::{Request, Response};
use trie_router::{router_service, Context, HandleFunc, HttpRouter, Middleware};

use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex};

use http::StatusCode;
use hyper::service::Service;
use hyper::Body;

type Log = Arc<Mutex<Vec<String>>>;

fn request(method: &str, uri: &str) -> Request {
    hyper::Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_string(res: Response) -> String {
    let bytes = hyper::body::to_bytes(res.into_body()).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn around(name: &'static str, log: Log) -> impl Middleware {
    move |next: HandleFunc| -> HandleFunc {
        let log = Arc::clone(&log);
        Arc::new(move |ctx: &mut Context| {
            log.lock().unwrap().push(format!("{}-before", name));
            next.call(ctx);
            log.lock().unwrap().push(format!("{}-after", name));
        })
    }
}

fn stop(name: &'static str, log: Log) -> impl Middleware {
    move |_next: HandleFunc| -> HandleFunc {
        let log = Arc::clone(&log);
        Arc::new(move |ctx: &mut Context| {
            log.lock().unwrap().push(format!("{}-stop", name));
            ctx.set_status(StatusCode::FORBIDDEN);
        })
    }
}

fn hello(ctx: &mut Context) {
    let name = ctx.path_value("name").unwrap_or("nobody").to_owned();
    ctx.set_body(format!("hello, {}!", name));
}

#[tokio::test]
async fn service_dispatches_with_params() {
    let mut svc = router_service! {
        GET "/hello/:name" => hello,
        POST "/values/:id(^[0-9]+$)" => |ctx: &mut Context| {
            let id: i64 = ctx.parse_path_value("id").unwrap().unwrap();
            ctx.set_status(StatusCode::CREATED);
            ctx.set_body(format!("id: {}", id));
        }
    };

    let res = svc.call(request("GET", "/hello/world")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_string(res).await, "hello, world!");

    let res = svc.call(request("POST", "/values/42")).await.unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(body_string(res).await, "id: 42");

    let res = svc.call(request("POST", "/values/abc")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn service_matches_on_decoded_path() {
    let mut svc = router_service! {
        GET "/login/:username" => |ctx: &mut Context| {
            let name = ctx.path_value("username").unwrap_or_default().to_owned();
            ctx.set_body(name);
        }
    };

    let res = svc
        .call(request("GET", "/login/%E7%86%8A%E4%BA%8C"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_string(res).await, "熊二");

    let res = svc.call(request("GET", "/login/a%20b")).await.unwrap();
    assert_eq!(body_string(res).await, "a b");

    // not valid utf-8 once decoded
    let res = svc.call(request("GET", "/login/%FF")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn service_not_found() {
    let mut router: HttpRouter<HandleFunc> = HttpRouter::new();
    router.get("/order/detail", |ctx: &mut Context| ctx.set_body("detail"));
    let mut svc = router.with_default(|ctx: &mut Context| ctx.set_body("404 Not Found"));

    let res = svc.call(request("GET", "/missing")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_string(res).await, "404 Not Found");

    // matches the intermediate "order" node, which has no handler
    let res = svc.call(request("GET", "/order")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = svc.call(request("PUT", "/order/detail")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = svc.call(request("GET", "/order/detail")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_string(res).await, "detail");
}

#[test]
fn middleware_onion_order() {
    let log: Log = Arc::default();
    let handler_log = Arc::clone(&log);

    let mut router: HttpRouter<HandleFunc> = HttpRouter::new();
    router.get("/", move |_: &mut Context| {
        handler_log.lock().unwrap().push("handler".to_owned());
    });
    let svc = router.into_service().with_middlewares(vec![
        around("m1", Arc::clone(&log)),
        around("m2", Arc::clone(&log)),
    ]);

    let res = svc.handle(request("GET", "/"));
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        *log.lock().unwrap(),
        ["m1-before", "m2-before", "handler", "m2-after", "m1-after"]
    );
}

#[test]
fn middleware_short_circuit() {
    let log: Log = Arc::default();
    let handler_log = Arc::clone(&log);

    let mut router: HttpRouter<HandleFunc> = HttpRouter::new();
    router.get("/", move |_: &mut Context| {
        handler_log.lock().unwrap().push("handler".to_owned());
    });
    let svc = router
        .into_service()
        .with_middleware(around("m1", Arc::clone(&log)))
        .with_middleware(stop("m2", Arc::clone(&log)))
        .with_middleware(around("m3", Arc::clone(&log)));

    let res = svc.handle(request("GET", "/"));
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    assert_eq!(*log.lock().unwrap(), ["m1-before", "m2-stop", "m1-after"]);
}

#[test]
fn middleware_sees_matched_route_after_next() {
    let seen: Arc<Mutex<Vec<(Option<String>, Option<StatusCode>)>>> = Arc::default();
    let sink = Arc::clone(&seen);

    let observe = move |next: HandleFunc| -> HandleFunc {
        let sink = Arc::clone(&sink);
        Arc::new(move |ctx: &mut Context| {
            assert!(ctx.matched_route().is_none());
            next.call(ctx);
            let route = ctx.matched_route().map(str::to_owned);
            sink.lock().unwrap().push((route, ctx.status()));
        })
    };

    let svc = router_service! {
        GET "/user/:id" => |ctx: &mut Context| {
            assert_eq!(ctx.path_value("id"), Some("7"));
            assert_eq!(ctx.path_params().len(), 1);
        }
    }
    .with_middleware(observe);

    assert_eq!(svc.handle(request("GET", "/user/7")).status(), StatusCode::OK);
    assert_eq!(svc.handle(request("GET", "/nope")).status(), StatusCode::NOT_FOUND);

    assert_eq!(
        *seen.lock().unwrap(),
        [
            (Some("/user/:id".to_owned()), None),
            (None, Some(StatusCode::NOT_FOUND)),
        ]
    );
}

#[test]
fn response_is_flushed_once() {
    let early_flush = |next: HandleFunc| -> HandleFunc {
        Arc::new(move |ctx: &mut Context| {
            next.call(ctx);
            ctx.flush();
            assert!(ctx.is_flushed());
            ctx.set_status(StatusCode::INTERNAL_SERVER_ERROR);
            ctx.set_body("too late");
        })
    };

    let svc = router_service! {
        GET "/" => |ctx: &mut Context| {
            ctx.set_status(StatusCode::ACCEPTED);
            ctx.write(b"first");
        }
    }
    .with_middleware(early_flush);

    let res = svc.handle(request("GET", "/"));
    assert_eq!(res.status(), StatusCode::ACCEPTED);
}

#[test]
fn handler_panic_propagates() {
    let svc = router_service! {
        GET "/boom" => |_: &mut Context| panic!("user error")
    };

    let ret = panic::catch_unwind(AssertUnwindSafe(|| svc.handle(request("GET", "/boom"))));
    assert!(ret.is_err());
}

#[test]
fn recovery_middleware_can_wrap_the_chain() {
    let recover = |next: HandleFunc| -> HandleFunc {
        Arc::new(move |ctx: &mut Context| {
            let ret = panic::catch_unwind(AssertUnwindSafe(|| next.call(ctx)));
            if ret.is_err() {
                ctx.set_status(StatusCode::INTERNAL_SERVER_ERROR);
                ctx.set_body("server error");
            }
        })
    };

    let svc = router_service! {
        GET "/boom" => |_: &mut Context| panic!("user error")
    }
    .with_middleware(recover);

    let res = svc.handle(request("GET", "/boom"));
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
