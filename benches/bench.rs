use criterion::{black_box, criterion_group, criterion_main, Criterion};
use crumbtrail::{for_path, label, matches, LazyRegistry, Registry, ResolverModule, SharedResolver};
use std::sync::Arc;

fn lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("Lookup");

    let paths = routes!(literal).to_vec();

    let mut registry = Registry::new();
    for route in routes!(brackets) {
        registry.insert(route, true);
    }
    group.bench_function("registry", |b| {
        b.iter(|| {
            for path in black_box(&paths) {
                let result = black_box(registry.get(path).unwrap());
                assert!(*result);
            }
        });
    });

    let patterns = routes!(brackets);
    group.bench_function("linear scan", |b| {
        b.iter(|| {
            for path in black_box(&paths) {
                let result = black_box(patterns.iter().find(|pattern| matches(pattern, path)));
                assert!(result.is_some());
            }
        });
    });

    let regex_set = regex::RegexSet::new(routes!(regex)).unwrap();
    group.bench_function("regex", |b| {
        b.iter(|| {
            for path in black_box(&paths) {
                let result = black_box(regex_set.matches(path));
                assert!(result.matched_any());
            }
        });
    });

    group.finish();
}

fn compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("Compose");

    let paths = routes!(literal).to_vec();

    let registry: Registry<SharedResolver<()>> = routes!(brackets)
        .into_iter()
        .map(|route| (route, Arc::new(label(route)) as SharedResolver<()>))
        .collect();
    group.bench_function("registry", |b| {
        b.iter(|| {
            futures::executor::block_on(async {
                for path in black_box(&paths) {
                    let entries = black_box(for_path(&registry, path).await.unwrap());
                    assert!(!entries.is_empty());
                }
            })
        });
    });

    // every unit settles during the first iteration, later ones hit the cache
    let mut lazy = LazyRegistry::<()>::new();
    for route in routes!(brackets) {
        lazy.register(route, move || async move {
            Ok::<_, crumbtrail::BoxError>(Some(ResolverModule::single(label(route))))
        });
    }
    group.bench_function("lazy registry", |b| {
        b.iter(|| {
            futures::executor::block_on(async {
                for path in black_box(&paths) {
                    let entries = black_box(for_path(&lazy, path).await.unwrap());
                    assert!(!entries.is_empty());
                }
            })
        });
    });

    group.finish();
}

criterion_group!(benches, lookup, compose);
criterion_main!(benches);

macro_rules! routes {
    (literal) => {{
        routes!(finish => "p1", "p2", "p3", "p4")
    }};
    (brackets) => {{
        routes!(finish => "[p1]", "[p2]", "[p3]", "[...p4]")
    }};
    (regex) => {{
        routes!(finish => "[^/]+", "[^/]+", "[^/]+", ".+")
    }};
    (finish => $p1:literal, $p2:literal, $p3:literal, $p4:literal) => {{
        [
            concat!("/"),
            concat!("/account"),
            concat!("/account/orders"),
            concat!("/account/orders/", $p1),
            concat!("/account/orders/", $p1, "/invoice"),
            concat!("/account/addresses"),
            concat!("/account/addresses/", $p1, "/edit"),
            concat!("/account/wishlist"),
            concat!("/cart"),
            concat!("/checkout/shipping"),
            concat!("/checkout/payment"),
            concat!("/checkout/review"),
            concat!("/categories"),
            concat!("/categories/", $p1),
            concat!("/categories/", $p1, "/", $p2),
            concat!("/categories/", $p1, "/", $p2, "/", $p3),
            concat!("/brands"),
            concat!("/brands/", $p1),
            concat!("/brands/", $p1, "/products"),
            concat!("/products"),
            concat!("/products/", $p1),
            concat!("/products/", $p1, "/reviews"),
            concat!("/products/", $p1, "/reviews/", $p2),
            concat!("/products/", $p1, "/questions"),
            concat!("/products/", $p1, "/variants/", $p2),
            concat!("/sellers/", $p1),
            concat!("/sellers/", $p1, "/products/", $p2),
            concat!("/sellers/", $p1, "/ratings"),
            concat!("/search"),
            concat!("/deals"),
            concat!("/deals/", $p1),
            concat!("/gift-cards"),
            concat!("/gift-cards/", $p1, "/balance"),
            concat!("/stores"),
            concat!("/stores/", $p1),
            concat!("/stores/", $p1, "/events/", $p2),
            concat!("/help"),
            concat!("/help/articles/", $p1),
            concat!("/docs/", $p4),
            concat!("/admin/users/", $p1, "/roles/", $p2),
        ]
    }};
}

use routes;
