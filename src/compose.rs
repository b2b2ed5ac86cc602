use crate::error::Result;
use crate::lookup::Lookup;
use crate::pattern::segments;
use crate::resolver::SharedResolver;

use std::fmt;

/// A resolver bound to the concrete ancestor path it was found for.
pub struct Entry<C> {
    pub path: String,
    pub resolver: SharedResolver<C>,
}

impl<C> Entry<C> {
    pub fn new(path: impl Into<String>, resolver: SharedResolver<C>) -> Self {
        Entry {
            path: path.into(),
            resolver,
        }
    }
}

impl<C> Clone for Entry<C> {
    fn clone(&self) -> Self {
        Entry {
            path: self.path.clone(),
            resolver: self.resolver.clone(),
        }
    }
}

impl<C> fmt::Debug for Entry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Entry").field(&self.path).finish()
    }
}

/// Returns the paths probed for a concrete path, root first.
///
/// ```rust
/// use crumbtrail::ancestors;
///
/// assert_eq!(
///     ancestors("/products/123/edit"),
///     ["/", "/products", "/products/123", "/products/123/edit"]
/// );
/// assert_eq!(ancestors("/"), ["/"]);
/// ```
pub fn ancestors(path: &str) -> Vec<String> {
    let mut paths = vec![String::from("/")];
    let mut current = String::new();

    for segment in segments(path) {
        current.push('/');
        current.push_str(segment);
        paths.push(current.clone());
    }

    paths
}

/// Walks a concrete path from root to leaf, collecting the bound resolvers.
///
/// For `/products/123/edit` the lookup is probed for `/`, `/products`,
/// `/products/123` and `/products/123/edit`, in that order. Levels without a
/// resolver are skipped.
///
/// ```rust
/// use crumbtrail::{for_path, label, Registry, SharedResolver};
/// use std::sync::Arc;
///
/// # futures::executor::block_on(async {
/// let mut registry: Registry<SharedResolver<()>> = Registry::new();
/// registry.insert("/", Arc::new(label("Home")));
/// registry.insert("/products/[id]", Arc::new(label("Product")));
///
/// let entries = for_path(&registry, "/products/42").await.unwrap();
/// let paths: Vec<_> = entries.iter().map(|entry| entry.path.as_str()).collect();
/// assert_eq!(paths, ["/", "/products/42"]);
/// # });
/// ```
pub async fn for_path<C, L>(lookup: &L, path: &str) -> Result<Vec<Entry<C>>>
where
    L: Lookup<C> + ?Sized,
{
    let mut entries = Vec::new();

    for ancestor in ancestors(path) {
        match lookup.lookup(&ancestor).await? {
            Some(resolver) => {
                trace!("`{}` bound for `{}`", ancestor, path);
                entries.push(Entry::new(ancestor, resolver));
            }
            None => trace!("`{}` unbound for `{}`", ancestor, path),
        }
    }

    Ok(entries)
}
