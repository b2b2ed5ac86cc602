use crate::compose::Entry;
use crate::error::{Error, Result};
use crate::resolver::Breadcrumb;

use futures::future::try_join_all;
use std::sync::Arc;

/// Invokes every resolver concurrently and collects the resulting breadcrumbs.
///
/// All resolvers are started together and share the same context snapshot.
/// The output keeps the order of `entries` regardless of which resolver
/// finishes first. Resolvers that return `Ok(None)` are left out, and the
/// first failing resolver fails the whole trail.
pub async fn resolve<C>(entries: &[Entry<C>], ctx: Arc<C>) -> Result<Vec<Breadcrumb>> {
    let pending = entries.iter().map(|entry| {
        let url = entry.path.clone();
        let fut = entry.resolver.resolve(Arc::clone(&ctx), url.clone());

        async move {
            match fut.await {
                Ok(data) => Ok(data.map(|data| Breadcrumb::new(data, url))),
                Err(source) => {
                    debug!("resolver for `{}` failed: {}", url, source);
                    Err(Error::Resolver { url, source })
                }
            }
        }
    });

    let resolved = try_join_all(pending).await?;
    Ok(resolved.into_iter().flatten().collect())
}
