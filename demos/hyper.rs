use trie_router::{router_service, Context, HandleFunc};

use std::convert::Infallible as Never;
use std::sync::Arc;
use std::time::Instant;

use hyper::service::make_service_fn;
use tracing_subscriber::EnvFilter;

fn not_found(ctx: &mut Context) {
    ctx.set_body("404 Not Found");
}

fn hello(ctx: &mut Context) {
    let name = ctx.path_value("name").unwrap_or("nobody").to_owned();
    ctx.set_body(format!("hello, {}!", name));
}

fn file(ctx: &mut Context) {
    let path = ctx.request().uri().path().to_owned();
    ctx.set_body(format!("access file: {}", path));
}

fn user(ctx: &mut Context) {
    match ctx.parse_path_value::<u64>("id") {
        Some(Ok(id)) => ctx.set_body(format!("user #{}", id)),
        _ => ctx.set_status(hyper::StatusCode::BAD_REQUEST),
    }
}

fn access_log(next: HandleFunc) -> HandleFunc {
    Arc::new(move |ctx: &mut Context| {
        let start = Instant::now();
        next.call(ctx);
        tracing::info!(
            method = %ctx.method(),
            path = ctx.path(),
            route = ctx.matched_route().unwrap_or("-"),
            status = ?ctx.status(),
            elapsed = ?start.elapsed(),
            "request handled"
        );
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let service = router_service! {
        GET "/hello/:name" => hello,
        GET "/user/:id(^[0-9]+$)" => user,
        GET "/static/*" => file;
        _ => not_found
    }
    .with_middleware(access_log);

    let make = make_service_fn(move |_| {
        let service = service.clone();
        async move { Ok::<_, Never>(service) }
    });

    let addr = ([127, 0, 0, 1], 3000).into();
    let server = hyper::Server::bind(&addr).serve(make);

    println!("Server is listening on: http://{}", addr);
    println!("hello: http://{}/hello/world", addr);
    println!("user: http://{}/user/42", addr);
    println!("static: http://{}/static/path/to/public/file", addr);
    println!("404: http://{}/other/path", addr);
    println!();

    server.await?;
    Ok(())
}
