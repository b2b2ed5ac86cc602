use crate::error::Result;
use crate::registry::Registry;
use crate::resolver::SharedResolver;

use futures::future::{self, BoxFuture, FutureExt};
use std::sync::Arc;

/// The future returned by [`Lookup::lookup`].
pub type LookupFuture<'a, C> = BoxFuture<'a, Result<Option<SharedResolver<C>>>>;

/// Finds the resolver bound to a concrete path.
///
/// Implemented by the eager [`Registry`] and by the lazy
/// [`LazyRegistry`](crate::LazyRegistry), so the composer works with either.
/// `Ok(None)` means no resolver is bound at that level; it is not an error.
pub trait Lookup<C>: Send + Sync {
    fn lookup<'a>(&'a self, path: &'a str) -> LookupFuture<'a, C>;
}

impl<C: 'static> Lookup<C> for Registry<SharedResolver<C>> {
    fn lookup<'a>(&'a self, path: &'a str) -> LookupFuture<'a, C> {
        future::ready(Ok(self.get(path).cloned())).boxed()
    }
}

impl<C, L> Lookup<C> for &L
where
    L: Lookup<C> + ?Sized,
{
    fn lookup<'a>(&'a self, path: &'a str) -> LookupFuture<'a, C> {
        (**self).lookup(path)
    }
}

impl<C, L> Lookup<C> for Arc<L>
where
    L: Lookup<C> + ?Sized,
{
    fn lookup<'a>(&'a self, path: &'a str) -> LookupFuture<'a, C> {
        (**self).lookup(path)
    }
}
