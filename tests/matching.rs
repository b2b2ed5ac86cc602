use crumbtrail::{matches, segments};
use proptest::prelude::*;

macro_rules! match_tests {
    ($($name:ident {
        pattern = $pattern:literal,
        $($path:literal => $expected:literal),* $(,)?
    }),* $(,)?) => { $(
        #[test]
        fn $name() {
            $(
                assert_eq!(
                    matches($pattern, $path),
                    $expected,
                    "unexpected result matching '{}' against '{}'",
                    $path,
                    $pattern
                );
            )*
        }
    )* };
}

match_tests! {
    static_route {
        pattern = "/products",
        "/products" => true,
        "/products/" => true,
        "products" => true,
        "/Products" => false,
        "/product" => false,
        "/products/42" => false,
        "/" => false,
    },
    root {
        pattern = "/",
        "/" => true,
        "" => true,
        "//" => true,
        "/a" => false,
    },
    dynamic_segment {
        pattern = "/products/[id]",
        "/products/42" => true,
        "/products/featured" => true,
        "/products" => false,
        "/products/42/edit" => false,
        "/users/42" => false,
    },
    multiple_dynamic_segments {
        pattern = "/org/[orgId]/project/[projectId]",
        "/org/abc/project/xyz" => true,
        "/org/abc/projects/xyz" => false,
        "/org/abc/project" => false,
    },
    leading_dynamic_segment {
        pattern = "/[lang]/about",
        "/en/about" => true,
        "/de/about" => true,
        "/en/contact" => false,
        "/about" => false,
    },
    spread_single_segment {
        pattern = "/spread/[...rest]",
        "/spread/users" => true,
        "/spread/users/42/settings" => true,
        "/spread" => false,
        "/spread/" => false,
        "/other/users" => false,
    },
    root_spread {
        pattern = "/[...path]",
        "/a" => true,
        "/a/b/c" => true,
        "/" => false,
    },
    dynamic_then_spread {
        pattern = "/docs/[version]/[...slug]",
        "/docs/v1/intro" => true,
        "/docs/v1/guide/routing" => true,
        "/docs/v1" => false,
    },
    slashes_are_ignored {
        pattern = "//docs//[id]/",
        "/docs/1" => true,
        "docs/1/" => true,
        "/docs//1" => true,
    },
}

fn segment() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,4}"
}

// A pattern segment is either static, or `[p]` for a dynamic one.
fn pattern_segment() -> impl Strategy<Value = Option<String>> {
    prop_oneof![segment().prop_map(Some), Just(None)]
}

fn render(pattern: &[Option<String>]) -> String {
    let mut out = String::new();
    for segment in pattern {
        out.push('/');
        out.push_str(segment.as_deref().unwrap_or("[p]"));
    }
    out
}

fn join(path: &[String]) -> String {
    format!("/{}", path.join("/"))
}

proptest! {
    #[test]
    fn without_spread(
        pattern in prop::collection::vec(pattern_segment(), 0..5),
        path in prop::collection::vec(segment(), 0..5),
    ) {
        let expected = pattern.len() == path.len()
            && pattern.iter().zip(&path).all(|(p, s)| p.as_ref().map_or(true, |p| p == s));

        prop_assert_eq!(matches(&render(&pattern), &join(&path)), expected);
    }

    #[test]
    fn with_spread(
        prefix in prop::collection::vec(pattern_segment(), 0..4),
        path in prop::collection::vec(segment(), 0..6),
    ) {
        let pattern = format!("{}/[...rest]", render(&prefix));
        let prefix_matches = prefix
            .iter()
            .zip(&path)
            .all(|(p, s)| p.as_ref().map_or(true, |p| p == s));

        prop_assert_eq!(
            matches(&pattern, &join(&path)),
            path.len() > prefix.len() && prefix_matches
        );
    }

    #[test]
    fn paths_match_themselves(path in prop::collection::vec(segment(), 0..6)) {
        let path = join(&path);
        prop_assert!(matches(&path, &path));
        prop_assert_eq!(segments(&path).count(), segments(&path).filter(|s| !s.is_empty()).count());
    }
}
