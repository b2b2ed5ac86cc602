use crate::error::BoxError;
use crate::registry::Registry;

use futures::future::{BoxFuture, FutureExt};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Resolved data for a single breadcrumb.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreadcrumbData {
    /// The human-readable label.
    pub label: String,
    /// Auxiliary display data, such as an icon name. Opaque to this crate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<serde_json::Value>,
}

impl BreadcrumbData {
    pub fn new(label: impl Into<String>) -> Self {
        BreadcrumbData {
            label: label.into(),
            extra: None,
        }
    }

    /// Attaches auxiliary display data.
    pub fn with_extra(mut self, extra: serde_json::Value) -> Self {
        self.extra = Some(extra);
        self
    }
}

/// A breadcrumb with its resolved data and the path it links to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub label: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<serde_json::Value>,
}

impl Breadcrumb {
    pub(crate) fn new(data: BreadcrumbData, url: String) -> Self {
        Breadcrumb {
            label: data.label,
            url,
            extra: data.extra,
        }
    }
}

/// The future returned by [`Resolve::resolve`].
pub type ResolveFuture = BoxFuture<'static, Result<Option<BreadcrumbData>, BoxError>>;

/// Produces breadcrumb data for one route level.
///
/// A resolver receives the shared context snapshot of the current request and
/// the concrete path it was matched against. Returning `Ok(None)` declines to
/// produce a breadcrumb for that level.
///
/// Resolvers are implemented for any `Fn(Arc<C>, String) -> impl Future`:
///
/// ```rust
/// use crumbtrail::{BoxError, BreadcrumbData, Resolve};
/// use std::sync::Arc;
///
/// async fn product(ctx: Arc<Vec<&'static str>>, url: String) -> Result<Option<BreadcrumbData>, BoxError> {
///     let id: usize = url.rsplit('/').next().unwrap_or_default().parse()?;
///     Ok(ctx.get(id).map(|name| BreadcrumbData::new(*name)))
/// }
///
/// fn assert_resolver<R: Resolve<Vec<&'static str>>>(_: R) {}
/// assert_resolver(product);
/// ```
pub trait Resolve<C>: Send + Sync {
    fn resolve(&self, ctx: Arc<C>, url: String) -> ResolveFuture;
}

impl<C, F, Fut> Resolve<C> for F
where
    F: Fn(Arc<C>, String) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Option<BreadcrumbData>, BoxError>> + Send + 'static,
{
    fn resolve(&self, ctx: Arc<C>, url: String) -> ResolveFuture {
        self(ctx, url).boxed()
    }
}

/// A resolver shared between the registry, the cache and in-flight requests.
pub type SharedResolver<C> = Arc<dyn Resolve<C>>;

/// A resolver that always produces the same label.
///
/// ```rust
/// use crumbtrail::{label, Resolve};
/// use std::sync::Arc;
///
/// # futures::executor::block_on(async {
/// let home = label("Home");
/// let data = Resolve::<()>::resolve(&home, Arc::new(()), "/".to_owned()).await.unwrap();
/// assert_eq!(data.unwrap().label, "Home");
/// # });
/// ```
pub fn label(text: impl Into<String>) -> Label {
    Label(text.into())
}

/// A constant-label resolver, see [`label`].
#[derive(Debug, Clone)]
pub struct Label(String);

impl<C> Resolve<C> for Label {
    fn resolve(&self, _: Arc<C>, _: String) -> ResolveFuture {
        futures::future::ready(Ok(Some(BreadcrumbData::new(self.0.clone())))).boxed()
    }
}

/// What an acquisition unit exposes once loaded.
pub enum ResolverModule<C> {
    /// A single resolver, bound to the route the unit was registered for.
    Single(SharedResolver<C>),
    /// Several resolvers sharing one acquisition, keyed by route pattern.
    Bundle(Registry<SharedResolver<C>>),
}

impl<C> ResolverModule<C> {
    pub fn single(resolver: impl Resolve<C> + 'static) -> Self {
        ResolverModule::Single(Arc::new(resolver))
    }

    /// Builds a bundle from `(pattern, resolver)` pairs.
    pub fn bundle<I, P>(routes: I) -> Self
    where
        I: IntoIterator<Item = (P, SharedResolver<C>)>,
        P: Into<String>,
    {
        ResolverModule::Bundle(routes.into_iter().collect())
    }
}

impl<C> fmt::Debug for ResolverModule<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolverModule::Single(_) => f.write_str("Single"),
            ResolverModule::Bundle(routes) => f
                .debug_tuple("Bundle")
                .field(&routes.patterns().collect::<Vec<_>>())
                .finish(),
        }
    }
}

/// The future returned by [`Acquire::acquire`].
pub type AcquireFuture<C> = BoxFuture<'static, Result<Option<ResolverModule<C>>, BoxError>>;

/// A deferred unit that loads resolvers on demand.
///
/// Returning `Ok(None)` means the unit exists but exposes no breadcrumb data;
/// the loader then moves on to the next unit registered for the same route.
/// Implemented for any `Fn() -> impl Future`.
pub trait Acquire<C>: Send + Sync {
    fn acquire(&self) -> AcquireFuture<C>;
}

impl<C, F, Fut> Acquire<C> for F
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<Option<ResolverModule<C>>, BoxError>> + Send + 'static,
{
    fn acquire(&self) -> AcquireFuture<C> {
        self().boxed()
    }
}
