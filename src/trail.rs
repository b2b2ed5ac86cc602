use crate::compose::for_path;
use crate::config::Config;
use crate::error::Result;
use crate::lookup::Lookup;
use crate::resolve::resolve;
use crate::resolver::Breadcrumb;
use crate::snapshot::{Page, PageField, PageSnapshot};

use std::sync::Arc;

/// Resolves breadcrumb trails against a lookup.
///
/// ```rust
/// use crumbtrail::{label, Breadcrumbs, Registry, SharedResolver};
/// use std::sync::Arc;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), crumbtrail::Error> {
/// let mut registry: Registry<SharedResolver<()>> = Registry::new();
/// registry.insert("/", Arc::new(label("Home")));
/// registry.insert("/products", Arc::new(label("Products")));
///
/// let breadcrumbs = Breadcrumbs::new(registry);
/// let trail = breadcrumbs.trail("/products/42", ()).await?;
///
/// let labels: Vec<_> = trail.iter().map(|crumb| crumb.label.as_str()).collect();
/// assert_eq!(labels, ["Home", "Products"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Breadcrumbs<L> {
    lookup: L,
    include: Vec<PageField>,
}

impl<L> Breadcrumbs<L> {
    pub fn new(lookup: L) -> Self {
        Breadcrumbs {
            lookup,
            include: Vec::new(),
        }
    }

    /// Uses the snapshot options of a configuration.
    pub fn with_config(lookup: L, config: &Config) -> Self {
        Breadcrumbs {
            lookup,
            include: config.include.clone(),
        }
    }

    /// Captures these optional page fields in snapshots, in addition to the
    /// core fields.
    pub fn include(mut self, fields: impl IntoIterator<Item = PageField>) -> Self {
        self.include.extend(fields);
        self
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Resolves the trail for a concrete path with an arbitrary context.
    pub async fn trail<C>(&self, path: &str, ctx: impl Into<Arc<C>>) -> Result<Vec<Breadcrumb>>
    where
        L: Lookup<C>,
    {
        let entries = for_path(&self.lookup, path).await?;
        debug!("resolving {} breadcrumbs for `{}`", entries.len(), path);
        resolve(&entries, ctx.into()).await
    }

    /// Snapshots `page` and resolves the trail for its pathname.
    pub async fn for_page(&self, page: &Page) -> Result<Vec<Breadcrumb>>
    where
        L: Lookup<PageSnapshot>,
    {
        let snapshot = PageSnapshot::capture(page, &self.include);
        self.trail::<PageSnapshot>(page.pathname(), Arc::new(snapshot))
            .await
    }
}
