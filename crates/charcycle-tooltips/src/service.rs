//! Tooltip resolution service with a once-per-process library cache.

use std::sync::OnceLock;
use std::time::Duration;

use reqwest::Client;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

use charcycle_core::{icon_key, TooltipContext, TooltipData, TooltipLibrary, ViewContext};

use crate::config::TooltipSourceConfig;
use crate::error::{TooltipError, TooltipResult};

/// Shared empty library handed out when a load fails.
fn empty_library() -> &'static TooltipLibrary {
    static EMPTY: OnceLock<TooltipLibrary> = OnceLock::new();
    EMPTY.get_or_init(TooltipLibrary::empty)
}

/// Resolves icon asset paths and system views into renderable tooltip content.
///
/// One service instance is meant to live for the whole process, mirroring the
/// page-lifetime cache of the viewer: the library is fetched lazily on the
/// first lookup, cached in a [`tokio::sync::OnceCell`], and never reloaded.
/// There is no teardown; dropping the service discards the cache harmlessly.
pub struct TooltipService {
    config: TooltipSourceConfig,
    client: Client,
    library: OnceCell<TooltipLibrary>,
}

impl TooltipService {
    /// Build a service for the given library source.
    pub fn new(config: TooltipSourceConfig) -> Self {
        Self {
            config,
            client: Client::new(),
            library: OnceCell::new(),
        }
    }

    /// Process-wide service with the default source configuration.
    ///
    /// Initialized on first use and never torn down; all callers share one
    /// library cache, so the document is fetched at most once per process.
    pub fn shared() -> &'static TooltipService {
        static SHARED: OnceLock<TooltipService> = OnceLock::new();
        SHARED.get_or_init(|| TooltipService::new(TooltipSourceConfig::default()))
    }

    /// Source configuration this service was built with.
    pub fn config(&self) -> &TooltipSourceConfig {
        &self.config
    }

    /// Whether the library cache has been populated.
    pub fn is_loaded(&self) -> bool {
        self.library.initialized()
    }

    /// Load the tooltip library, fetching it at most once.
    ///
    /// A cache hit returns immediately with no I/O. A failed fetch or parse
    /// does not populate the cache: this call gets the empty library and a
    /// later call retries the fetch. Concurrent first callers are coalesced
    /// onto a single in-flight fetch by the cell.
    pub async fn load_library(&self) -> &TooltipLibrary {
        if let Some(library) = self.library.get() {
            return library;
        }

        match self.library.get_or_try_init(|| self.fetch_library()).await {
            Ok(library) => library,
            Err(err) => {
                warn!(error = %err, "tooltip_library_load_failed");
                empty_library()
            }
        }
    }

    /// Look up the tooltip record for an icon asset path.
    ///
    /// Empty or keyless paths return `None` before the library source is
    /// touched; unknown keys return `None` after a load. A `None` means "no
    /// tooltip available" and should suppress the tooltip UI.
    pub async fn tooltip_for_icon(&self, icon_path: &str) -> Option<&TooltipData> {
        let key = icon_key(icon_path)?;
        self.load_library().await.tooltips.get(&key)
    }

    /// Resolve an icon path for a named system view.
    pub async fn resolve(&self, icon_path: &str, view: ViewContext) -> Option<TooltipContext> {
        self.resolve_named(icon_path, view.as_str()).await
    }

    /// Resolve an icon path for an arbitrary context name.
    ///
    /// Once a record exists for the path, this always yields content via the
    /// fallback chain in [`TooltipData::resolve_context`].
    pub async fn resolve_named(&self, icon_path: &str, context: &str) -> Option<TooltipContext> {
        self.tooltip_for_icon(icon_path)
            .await
            .map(|data| data.resolve_context(context))
    }

    async fn fetch_library(&self) -> TooltipResult<TooltipLibrary> {
        let url = self.config.library_url();
        debug!(%url, "tooltip_library_fetch_start");

        let response = self
            .client
            .get(&url)
            .timeout(Duration::from_secs(self.config.fetch_timeout_secs))
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TooltipError::Status { url, status });
        }

        let body = response.text().await?;
        let library: TooltipLibrary = serde_json::from_str(&body)?;
        debug!(records = library.len(), "tooltip_library_fetch_complete");

        Ok(library)
    }
}
