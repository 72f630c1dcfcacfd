use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use trie_router::Router;

const ROUTES: &[&str] = &[
    "/",
    "/user",
    "/user/home",
    "/user/:id",
    "/user/:id/posts/:post(^[0-9]+$)",
    "/order/detail",
    "/order/*",
    "/static/*",
];

fn build() -> Router<usize> {
    let mut router = Router::new();
    for (i, &p) in ROUTES.iter().enumerate() {
        router.insert(p, i);
    }
    router
}

fn router_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("router-find");

    group.bench_function("single-route", |b| {
        let mut router: Router<usize> = Router::new();
        router.insert("/hello/:name", 1);
        b.iter_with_large_drop(|| router.find("/hello/world"))
    });

    let router = build();
    group.bench_function("static", |b| b.iter(|| router.find("/user/home")));
    group.bench_function("regex", |b| {
        b.iter_with_large_drop(|| router.find("/user/7/posts/42"))
    });
    group.bench_function("wildcard-fallback", |b| {
        b.iter(|| router.find("/static/css/site/main.css"))
    });
    group.bench_function("miss", |b| b.iter(|| router.find("/missing/path")));
}

fn router_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("router-insert");

    group.bench_function("single-route", |b| {
        b.iter_batched_ref(
            Router::new,
            |router: &mut Router<usize>| {
                router.insert("/hello/:name", 1);
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("route-table", |b| b.iter_with_large_drop(build));
}

criterion_group!(benches, router_find, router_insert);
criterion_main!(benches);
