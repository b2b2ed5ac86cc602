//! Building registries from route modules.
//!
//! Scanning the file tree is left to the host. Given the module paths it
//! found, [`ModulePaths`] turns each into the route pattern it serves:
//!
//! ```text
//!  /src/routes/+page.svelte                        /
//!  /src/routes/products/[id]/+page.svelte          /products/[id]
//!  /src/routes/(app)/settings/+page.svelte         /settings
//!  /src/routes/products/+page@admin.svelte         /products
//! ```
//!
//! Route groups, i.e. `(name)` segments, do not contribute to the URL and
//! are removed, as is a layout reset suffix (`@` or `@name`) on the file.

use crate::config::Config;
use crate::error::ConfigError;
use crate::loader::{BoxAcquire, LazyRegistry};
use crate::registry::Registry;
use crate::resolver::{ResolverModule, SharedResolver};

use regex::Regex;

/// Derives route patterns from module paths.
#[derive(Debug, Clone)]
pub struct ModulePaths {
    root: String,
    page: Regex,
    group: Regex,
}

impl ModulePaths {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let page = format!(r"/{}(@[^/]*)?\.[^/.]+$", regex::escape(&config.page_stem));

        Ok(ModulePaths {
            root: config.routes_root.trim_end_matches('/').to_owned(),
            page: Regex::new(&page)?,
            group: Regex::new(r"/\([^/]*?\)")?,
        })
    }

    /// Returns the route pattern served by a module.
    ///
    /// ```rust
    /// use crumbtrail::{Config, ModulePaths};
    ///
    /// let paths = ModulePaths::new(&Config::default()).unwrap();
    /// assert_eq!(paths.route("/src/routes/(app)/products/+page.svelte"), "/products");
    /// assert_eq!(paths.route("/src/routes/+page.svelte"), "/");
    /// ```
    pub fn route(&self, module_path: &str) -> String {
        let path = module_path.strip_prefix(&self.root).unwrap_or(module_path);
        let path = self.page.replace(path, "");
        let route = self.group.replace_all(&path, "");

        if route.is_empty() {
            String::from("/")
        } else {
            route.into_owned()
        }
    }
}

impl<C> LazyRegistry<C> {
    /// Builds a lazy registry from `(module path, unit)` pairs.
    ///
    /// Modules that serve the same route once groups are stripped, such as
    /// `(app)/about` and `(marketing)/about`, share a pattern and are
    /// acquired in the order given.
    pub fn from_modules<I, S>(paths: &ModulePaths, modules: I) -> Self
    where
        I: IntoIterator<Item = (S, BoxAcquire<C>)>,
        S: AsRef<str>,
    {
        let mut registry = LazyRegistry::new();

        for (module_path, unit) in modules {
            let route = paths.route(module_path.as_ref());
            trace!("`{}` serves `{}`", module_path.as_ref(), route);
            registry.register_boxed(route, unit);
        }

        registry
    }
}

impl<C> Registry<SharedResolver<C>> {
    /// Builds an eager registry from already loaded modules.
    ///
    /// A single resolver is bound to its module's route; every route of a
    /// bundle is added as is. Later modules replace earlier ones for the same
    /// pattern.
    pub fn from_modules<I, S>(paths: &ModulePaths, modules: I) -> Self
    where
        I: IntoIterator<Item = (S, ResolverModule<C>)>,
        S: AsRef<str>,
    {
        let mut registry = Registry::new();

        for (module_path, module) in modules {
            match module {
                ResolverModule::Single(resolver) => {
                    registry.insert(paths.route(module_path.as_ref()), resolver);
                }
                ResolverModule::Bundle(routes) => {
                    registry.extend(
                        routes
                            .iter()
                            .map(|(pattern, resolver)| (pattern.to_owned(), resolver.clone())),
                    );
                }
            }
        }

        registry
    }
}
