use crate::pattern;

use std::collections::HashMap;
use std::fmt;

/// A mapping from route patterns to values, such as breadcrumb resolvers.
///
/// Lookups try an exact match on the pattern string first, so a static route
/// always wins over a dynamic route of the same shape. Otherwise, patterns
/// containing `[param]` or `[...rest]` segments are tried in registration
/// order and the first match wins.
///
/// ```rust
/// use crumbtrail::Registry;
///
/// let mut registry = Registry::new();
/// registry.insert("/products/[id]", "product");
/// registry.insert("/products/featured", "featured");
/// registry.insert("/docs/[...slug]", "docs");
///
/// assert_eq!(registry.get("/products/42"), Some(&"product"));
/// assert_eq!(registry.get("/products/featured"), Some(&"featured"));
/// assert_eq!(registry.get("/docs/guide/routing"), Some(&"docs"));
/// assert_eq!(registry.get("/about"), None);
/// ```
#[derive(Clone)]
pub struct Registry<V> {
    routes: Vec<Route<V>>,
    // pattern -> index into `routes`
    exact: HashMap<String, usize>,
}

#[derive(Clone)]
struct Route<V> {
    pattern: String,
    dynamic: bool,
    value: V,
}

impl<V> Registry<V> {
    /// Construct a new, empty registry.
    pub fn new() -> Self {
        Registry {
            routes: Vec::new(),
            exact: HashMap::new(),
        }
    }

    /// Binds a value to a route pattern.
    ///
    /// Registering the same pattern twice replaces the earlier value but keeps
    /// its original registration position. Returns the replaced value, if any.
    pub fn insert(&mut self, pattern: impl Into<String>, value: V) -> Option<V> {
        let pattern = pattern.into();

        if let Some(&i) = self.exact.get(&pattern) {
            return Some(std::mem::replace(&mut self.routes[i].value, value));
        }

        self.exact.insert(pattern.clone(), self.routes.len());
        self.routes.push(Route {
            dynamic: pattern::is_dynamic(&pattern),
            pattern,
            value,
        });

        None
    }

    /// Finds the value bound to a concrete path.
    pub fn get(&self, path: &str) -> Option<&V> {
        self.find(path).map(|route| &route.value)
    }

    /// Finds the pattern and value bound to a concrete path.
    pub fn get_route(&self, path: &str) -> Option<(&str, &V)> {
        self.find(path)
            .map(|route| (route.pattern.as_str(), &route.value))
    }

    fn find(&self, path: &str) -> Option<&Route<V>> {
        if let Some(&i) = self.exact.get(path) {
            return Some(&self.routes[i]);
        }

        self.routes
            .iter()
            .filter(|route| route.dynamic)
            .find(|route| pattern::matches(&route.pattern, path))
    }

    /// Returns the value registered under exactly this pattern.
    pub fn get_exact(&self, pattern: &str) -> Option<&V> {
        self.exact.get(pattern).map(|&i| &self.routes[i].value)
    }

    pub(crate) fn get_exact_mut(&mut self, pattern: &str) -> Option<&mut V> {
        let i = *self.exact.get(pattern)?;
        Some(&mut self.routes[i].value)
    }

    /// Returns the number of registered patterns.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if no patterns are registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Iterates over the registered patterns in registration order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|route| route.pattern.as_str())
    }

    /// Iterates over `(pattern, value)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.routes
            .iter()
            .map(|route| (route.pattern.as_str(), &route.value))
    }
}

impl<V> Default for Registry<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for Registry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.patterns()).finish()
    }
}

impl<P: Into<String>, V> Extend<(P, V)> for Registry<V> {
    fn extend<I: IntoIterator<Item = (P, V)>>(&mut self, iter: I) {
        for (pattern, value) in iter {
            self.insert(pattern, value);
        }
    }
}

impl<P: Into<String>, V> FromIterator<(P, V)> for Registry<V> {
    fn from_iter<I: IntoIterator<Item = (P, V)>>(iter: I) -> Self {
        let mut registry = Registry::new();
        registry.extend(iter);
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrite_keeps_position() {
        let mut registry = Registry::new();
        assert_eq!(registry.insert("/a/[x]", 1), None);
        assert_eq!(registry.insert("/a/[y]", 2), None);
        assert_eq!(registry.insert("/a/[x]", 3), Some(1));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("/a/anything"), Some(&3));
        assert_eq!(registry.patterns().collect::<Vec<_>>(), vec!["/a/[x]", "/a/[y]"]);
    }

    #[test]
    fn exact_lookup_of_dynamic_pattern() {
        let registry: Registry<_> = [("/products/[id]", 1)].into_iter().collect();
        assert_eq!(registry.get_exact("/products/[id]"), Some(&1));
        assert_eq!(registry.get_exact("/products/42"), None);
        assert_eq!(registry.get_route("/products/42"), Some(("/products/[id]", &1)));
    }
}
