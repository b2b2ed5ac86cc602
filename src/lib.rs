//! Route-pattern matching and lazy, hierarchical breadcrumb resolution.
//!
//! Route patterns are registered with a resolver that produces the label of
//! one breadcrumb. To build the trail for a concrete path, every ancestor of
//! the path is looked up from root to leaf, and the resolvers found are run
//! concurrently against a shared snapshot of the page:
//!
//! ```rust
//! use crumbtrail::{label, BoxError, BreadcrumbData, Breadcrumbs, Registry, SharedResolver};
//! use std::sync::Arc;
//!
//! async fn product(_: Arc<()>, url: String) -> Result<Option<BreadcrumbData>, BoxError> {
//!     let id = url.rsplit('/').next().unwrap_or_default();
//!     Ok(Some(BreadcrumbData::new(format!("Product #{}", id))))
//! }
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), crumbtrail::Error> {
//! let mut registry: Registry<SharedResolver<()>> = Registry::new();
//! registry.insert("/", Arc::new(label("Home")));
//! registry.insert("/products", Arc::new(label("Products")));
//! registry.insert("/products/[id]", Arc::new(product));
//!
//! let trail = Breadcrumbs::new(registry).trail("/products/42", ()).await?;
//!
//! let crumbs: Vec<_> = trail
//!     .iter()
//!     .map(|crumb| (crumb.label.as_str(), crumb.url.as_str()))
//!     .collect();
//!
//! assert_eq!(
//!     crumbs,
//!     [
//!         ("Home", "/"),
//!         ("Products", "/products"),
//!         ("Product #42", "/products/42"),
//!     ]
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Patterns
//!
//! ```text
//!  Syntax        Type
//!  products      static segment
//!  [id]          dynamic segment, exactly one path segment
//!  [...rest]     spread segment, one or more trailing path segments
//! ```
//!
//! A registered pattern that equals the path exactly always wins. Otherwise
//! the first dynamic pattern that matches, in registration order, is used.
//! See [`matches`] for the matching rules.
//!
//! # Lazy acquisition
//!
//! When resolvers are expensive to load, register acquisition units with a
//! [`LazyRegistry`] instead. Units are run on first use and every outcome,
//! including "no resolver here", is memoized per path.
#![deny(clippy::all)]
#![forbid(unsafe_code)]

#[macro_use]
extern crate log;

mod compose;
mod config;
mod discovery;
mod error;
mod loader;
mod lookup;
mod pattern;
mod registry;
mod resolve;
mod resolver;
mod snapshot;
mod trail;

pub use compose::{ancestors, for_path, Entry};
pub use config::Config;
pub use discovery::ModulePaths;
pub use error::{BoxError, ConfigError, Error, Result};
pub use loader::{AcquisitionState, BoxAcquire, LazyRegistry};
pub use lookup::{Lookup, LookupFuture};
pub use pattern::{is_dynamic, matches, segments, Segment};
pub use registry::Registry;
pub use resolve::resolve;
pub use resolver::{
    label, Acquire, AcquireFuture, Breadcrumb, BreadcrumbData, Label, Resolve, ResolveFuture,
    ResolverModule, SharedResolver,
};
pub use snapshot::{Page, PageField, PageSnapshot};
pub use trail::Breadcrumbs;
