use std::path::PathBuf;

/// A type-erased error produced by user code: acquisition units and resolvers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A `Result` alias where the `Err` case is [`crumbtrail::Error`](Error).
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Represents errors that can occur while resolving a breadcrumb trail.
///
/// A path level without a bound resolver is *not* an error: lookups report
/// it as `Ok(None)` and the level is skipped.
///
/// ```
/// use crumbtrail::{label, resolve, BoxError, BreadcrumbData, Entry, Error};
/// use std::sync::Arc;
///
/// # #[tokio::main]
/// # async fn main() {
/// let failing = |_: Arc<()>, _: String| async {
///     Err::<Option<BreadcrumbData>, BoxError>("backend unavailable".into())
/// };
/// let entries = vec![
///     Entry::new("/", Arc::new(label("Home"))),
///     Entry::new("/products", Arc::new(failing)),
/// ];
///
/// match resolve(&entries, Arc::new(())).await {
///     Err(Error::Resolver { url, .. }) => assert_eq!(url, "/products"),
///     other => panic!("unexpected result: {:?}", other),
/// }
/// # }
/// ```
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An acquisition unit failed to produce its module.
    #[error("failed to acquire resolvers for route `{pattern}`")]
    Acquisition {
        /// The route pattern the failing unit was registered under.
        pattern: String,
        /// The underlying failure.
        #[source]
        source: BoxError,
    },
    /// A resolver failed while producing breadcrumb data.
    #[error("breadcrumb resolver for `{url}` failed")]
    Resolver {
        /// The concrete path the resolver was invoked for.
        url: String,
        /// The underlying failure.
        #[source]
        source: BoxError,
    },
}

/// Errors that can occur when loading a [`Config`](crate::Config).
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration file `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The configuration is not valid TOML or has unexpected fields.
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    /// The configured module naming does not form a valid pattern.
    #[error("invalid module naming: {0}")]
    Naming(#[from] regex::Error),
}
