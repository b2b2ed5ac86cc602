//! Route patterns and the segment matcher.
//!
//! A route pattern is a `/`-separated list of segments. Each segment is one of:
//!
//! ```text
//!  Syntax        Type
//!  products      static segment, matched exactly
//!  [id]          dynamic segment, matches exactly one path segment
//!  [...rest]     spread segment, matches one or more trailing segments
//! ```
//!
//! Dynamic segments match anything until the next `/`:
//!
//! ```text
//!  Pattern: /products/[id]
//!
//!   /products/42              match
//!   /products/42/edit         no match
//!   /products                 no match
//! ```
//!
//! Spread segments match everything until the end of the path. Since they
//! consume all remaining segments they must be the final pattern segment:
//!
//! ```text
//!  Pattern: /docs/[...slug]
//!
//!   /docs/intro               match
//!   /docs/guide/routing       match
//!   /docs                     no match
//! ```

/// A single segment of a route pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment<'a> {
    /// A literal segment that must equal the path segment exactly.
    Static(&'a str),
    /// `[name]`, matching exactly one path segment.
    Dynamic(&'a str),
    /// `[...name]`, matching every remaining path segment.
    Spread(&'a str),
}

impl<'a> Segment<'a> {
    /// Classifies a single pattern segment.
    ///
    /// ```rust
    /// use crumbtrail::Segment;
    ///
    /// assert_eq!(Segment::parse("about"), Segment::Static("about"));
    /// assert_eq!(Segment::parse("[id]"), Segment::Dynamic("id"));
    /// assert_eq!(Segment::parse("[...slug]"), Segment::Spread("slug"));
    /// ```
    pub fn parse(segment: &'a str) -> Segment<'a> {
        match segment
            .strip_prefix('[')
            .and_then(|inner| inner.strip_suffix(']'))
        {
            Some(inner) => match inner.strip_prefix("...") {
                Some(name) => Segment::Spread(name),
                None => Segment::Dynamic(inner),
            },
            None => Segment::Static(segment),
        }
    }

    /// Returns `true` for dynamic and spread segments.
    pub fn is_dynamic(&self) -> bool {
        !matches!(self, Segment::Static(_))
    }
}

/// Splits a pattern or path into its non-empty `/`-separated segments.
///
/// Leading, trailing and repeated slashes produce no segments, so both `""`
/// and `"/"` yield an empty iterator.
pub fn segments(path: &str) -> impl Iterator<Item = &str> + Clone {
    path.split('/').filter(|segment| !segment.is_empty())
}

/// Returns `true` if the pattern contains at least one bracketed segment.
///
/// Patterns without one can only ever match a path by exact string equality.
pub fn is_dynamic(pattern: &str) -> bool {
    segments(pattern).any(|segment| Segment::parse(segment).is_dynamic())
}

/// Tests whether a route pattern matches a concrete path.
///
/// ```rust
/// use crumbtrail::matches;
///
/// assert!(matches("/products/[id]", "/products/42"));
/// assert!(matches("/docs/[...slug]", "/docs/a/b/c"));
/// assert!(!matches("/docs/[...slug]", "/docs"));
/// assert!(!matches("/products/[id]", "/products/42/edit"));
/// ```
pub fn matches(pattern: &str, path: &str) -> bool {
    let path: Vec<&str> = segments(path).collect();
    let mut count = 0;

    for (i, segment) in segments(pattern).enumerate() {
        count = i + 1;

        match Segment::parse(segment) {
            // a spread consumes everything left, but needs at least one segment
            Segment::Spread(_) => return path.len() > i,
            _ if i >= path.len() => return false,
            Segment::Dynamic(_) => continue,
            Segment::Static(literal) => {
                if literal != path[i] {
                    return false;
                }
            }
        }
    }

    path.len() == count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_segments() {
        assert_eq!(Segment::parse(""), Segment::Static(""));
        assert_eq!(Segment::parse("[]"), Segment::Dynamic(""));
        assert_eq!(Segment::parse("[..."), Segment::Static("[..."));
        assert_eq!(Segment::parse("[...]"), Segment::Spread(""));
        assert_eq!(Segment::parse("x[id]"), Segment::Static("x[id]"));
    }

    #[test]
    fn split_segments() {
        assert_eq!(segments("/").count(), 0);
        assert_eq!(segments("").count(), 0);
        assert_eq!(
            segments("//a/b//c/").collect::<Vec<_>>(),
            vec!["a", "b", "c"]
        );
    }

    #[test]
    fn dynamic_patterns() {
        assert!(is_dynamic("/products/[id]"));
        assert!(is_dynamic("/docs/[...slug]"));
        assert!(!is_dynamic("/products/featured"));
        assert!(!is_dynamic("/"));
    }

    #[test]
    fn root() {
        assert!(matches("/", "/"));
        assert!(matches("", "/"));
        assert!(matches("/", ""));
        assert!(!matches("/[id]", "/"));
        assert!(!matches("/[...rest]", "/"));
        assert!(!matches("/", "/a"));
    }

    #[test]
    fn case_sensitive() {
        assert!(!matches("/Products", "/products"));
    }
}
