//! Lazily acquired resolvers.
//!
//! A [`LazyRegistry`] maps route patterns to *acquisition units*: deferred
//! procedures that load one or more resolvers on demand, typically by
//! loading the module a route is defined in. Units are only run when a path
//! bound to their pattern is first looked up, and every outcome is memoized:
//!
//! - each concrete path is cached once settled, including negative outcomes,
//!   so a path that has no resolver never triggers acquisition twice;
//! - each unit is acquired at most once, even when its pattern serves many
//!   concrete paths (`/products/[id]` for `/products/1`, `/products/2`, ...);
//! - a unit may yield a bundle of resolvers for several routes, all of which
//!   are cached together. A bundle binds paths already cached as absent,
//!   such as an ancestor probed before the bundle was acquired.
//!
//! Concurrent lookups of the same uncached path never run a unit twice: each
//! pattern group carries an in-flight token which a caller must hold while
//! acquiring, and the cache is checked again once the token is obtained.

use crate::error::{Error, Result};
use crate::lookup::{Lookup, LookupFuture};
use crate::registry::Registry;
use crate::resolver::{Acquire, ResolverModule, SharedResolver};

use futures::future::FutureExt;
use parking_lot::Mutex;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A boxed acquisition unit.
pub type BoxAcquire<C> = Box<dyn Acquire<C>>;

/// A registry of lazily acquired resolvers with per-path memoization.
///
/// ```rust
/// use crumbtrail::{label, BoxError, LazyRegistry, ResolverModule};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), crumbtrail::Error> {
/// let mut registry = LazyRegistry::<()>::new();
/// registry.register("/products/[id]", || async {
///     Ok::<_, BoxError>(Some(ResolverModule::single(label("Product"))))
/// });
///
/// assert!(registry.get("/products/42").await?.is_some());
/// assert!(registry.get("/about").await?.is_none());
/// # Ok(())
/// # }
/// ```
pub struct LazyRegistry<C> {
    groups: Registry<Group<C>>,
    cache: Mutex<HashMap<String, Option<SharedResolver<C>>>>,
}

// All units claiming one pattern, in registration order.
struct Group<C> {
    units: Vec<BoxAcquire<C>>,
    // One slot per unit. Holding the lock is the group's in-flight token.
    slots: tokio::sync::Mutex<Vec<Acquisition<C>>>,
}

enum Acquisition<C> {
    Unsettled,
    Settled(Option<Arc<ResolverModule<C>>>),
}

/// The acquisition state of a pattern group, see [`LazyRegistry::state`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquisitionState {
    /// At least one unit has not been acquired yet, and none is in flight.
    ///
    /// Units are only acquired until one exposes resolver data, so a group
    /// whose later units are never needed stays `Unsettled` even when every
    /// path it serves has a cached outcome.
    Unsettled,
    /// A caller is currently acquiring units of this group.
    InFlight,
    /// Every unit of the group has been acquired.
    Settled,
}

impl<C> LazyRegistry<C> {
    /// Construct a new, empty registry.
    pub fn new() -> Self {
        LazyRegistry {
            groups: Registry::new(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Registers an acquisition unit for a route pattern.
    ///
    /// Several units may claim the same pattern. They are acquired in
    /// registration order until one of them exposes resolver data.
    pub fn register(
        &mut self,
        pattern: impl Into<String>,
        unit: impl Acquire<C> + 'static,
    ) -> &mut Self {
        self.register_boxed(pattern, Box::new(unit))
    }

    /// Registers an already boxed acquisition unit.
    pub fn register_boxed(&mut self, pattern: impl Into<String>, unit: BoxAcquire<C>) -> &mut Self {
        let pattern = pattern.into();

        match self.groups.get_exact_mut(&pattern) {
            Some(group) => {
                group.units.push(unit);
                group.slots.get_mut().push(Acquisition::Unsettled);
            }
            None => {
                self.groups.insert(
                    pattern,
                    Group {
                        units: vec![unit],
                        slots: tokio::sync::Mutex::new(vec![Acquisition::Unsettled]),
                    },
                );
            }
        }

        self
    }

    /// Returns the number of registered patterns.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if no patterns are registered.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterates over the registered patterns in registration order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.groups.patterns()
    }

    /// Returns the acquisition state of the group registered under exactly
    /// this pattern.
    pub fn state(&self, pattern: &str) -> Option<AcquisitionState> {
        let group = self.groups.get_exact(pattern)?;

        let state = match group.slots.try_lock() {
            Err(_) => AcquisitionState::InFlight,
            Ok(slots) => {
                if slots
                    .iter()
                    .all(|slot| matches!(slot, Acquisition::Settled(_)))
                {
                    AcquisitionState::Settled
                } else {
                    AcquisitionState::Unsettled
                }
            }
        };

        Some(state)
    }

    /// Returns the memoized outcome for a concrete path, if it has settled.
    ///
    /// `Some(None)` means the path is known to have no resolver.
    pub fn cached(&self, path: &str) -> Option<Option<SharedResolver<C>>> {
        self.cache.lock().get(path).cloned()
    }

    /// Finds the resolver bound to a concrete path, acquiring it if needed.
    ///
    /// Acquisition failures are propagated and nothing is cached for `path`,
    /// so a later lookup retries the failed unit.
    pub async fn get(&self, path: &str) -> Result<Option<SharedResolver<C>>> {
        if let Some(outcome) = self.cached(path) {
            trace!("cache hit for `{}`", path);
            return Ok(outcome);
        }

        let Some((pattern, group)) = self.groups.get_route(path) else {
            debug!("no acquisition units for `{}`", path);
            return Ok(self.settle(path, None));
        };

        let mut slots = group.slots.lock().await;

        // settled by another caller while we waited for the token
        if let Some(outcome) = self.cached(path) {
            trace!("cache hit for `{}` after waiting on `{}`", path, pattern);
            return Ok(outcome);
        }

        for (unit, slot) in group.units.iter().zip(slots.iter_mut()) {
            let module = match slot {
                Acquisition::Settled(module) => module.clone(),
                Acquisition::Unsettled => {
                    debug!("acquiring resolvers for `{}`", pattern);

                    let module = unit
                        .acquire()
                        .await
                        .map_err(|source| Error::Acquisition {
                            pattern: pattern.to_owned(),
                            source,
                        })?
                        .map(Arc::new);

                    *slot = Acquisition::Settled(module.clone());
                    module
                }
            };

            match module.as_deref() {
                None => continue,
                Some(ResolverModule::Single(resolver)) => {
                    return Ok(self.settle(path, Some(resolver.clone())));
                }
                Some(ResolverModule::Bundle(routes)) => {
                    if let Some(outcome) = self.settle_bundle(path, routes) {
                        return Ok(outcome);
                    }
                }
            }
        }

        debug!("no resolver for `{}`, caching negative result", path);
        Ok(self.settle(path, None))
    }

    // Caches an outcome unless one is already present, and returns the cached one.
    fn settle(&self, path: &str, outcome: Option<SharedResolver<C>>) -> Option<SharedResolver<C>> {
        self.cache
            .lock()
            .entry(path.to_owned())
            .or_insert(outcome)
            .clone()
    }

    // Caches every route of a bundle in one step. Returns the outcome for
    // `path` if the bundle provides one, either by exact key or by pattern.
    fn settle_bundle(
        &self,
        path: &str,
        routes: &Registry<SharedResolver<C>>,
    ) -> Option<Option<SharedResolver<C>>> {
        let mut cache = self.cache.lock();

        for (key, resolver) in routes.iter() {
            match cache.entry(key.to_owned()) {
                Entry::Vacant(entry) => {
                    entry.insert(Some(resolver.clone()));
                }
                Entry::Occupied(mut entry) => {
                    // an absent outcome is upgraded, nothing is re-acquired for it
                    if entry.get().is_none() {
                        trace!("`{}` bound by a bundle after settling absent", key);
                        entry.insert(Some(resolver.clone()));
                    } else if !matches!(entry.get(), Some(cached) if Arc::ptr_eq(cached, resolver)) {
                        warn!("`{}` already settled, ignoring bundled resolver", key);
                    }
                }
            }
        }

        if let Some(outcome) = cache.get(path) {
            return Some(outcome.clone());
        }

        let resolver = routes.get(path)?.clone();
        cache.insert(path.to_owned(), Some(resolver.clone()));
        Some(Some(resolver))
    }
}

impl<C> Default for LazyRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for LazyRegistry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyRegistry")
            .field("patterns", &self.groups)
            .field("cached", &self.cache.lock().len())
            .finish()
    }
}

impl<P: Into<String>, C> Extend<(P, BoxAcquire<C>)> for LazyRegistry<C> {
    fn extend<I: IntoIterator<Item = (P, BoxAcquire<C>)>>(&mut self, iter: I) {
        for (pattern, unit) in iter {
            self.register_boxed(pattern, unit);
        }
    }
}

impl<P: Into<String>, C> FromIterator<(P, BoxAcquire<C>)> for LazyRegistry<C> {
    fn from_iter<I: IntoIterator<Item = (P, BoxAcquire<C>)>>(iter: I) -> Self {
        let mut registry = LazyRegistry::new();
        registry.extend(iter);
        registry
    }
}

impl<C: 'static> Lookup<C> for LazyRegistry<C> {
    fn lookup<'a>(&'a self, path: &'a str) -> LookupFuture<'a, C> {
        self.get(path).boxed()
    }
}
