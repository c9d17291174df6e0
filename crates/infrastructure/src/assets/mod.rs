//! Cache-first static asset store
//!
//! A fixed list of asset paths is read into memory at startup; anything
//! else is read from disk on demand. Missing precache entries are logged
//! and skipped rather than failing startup.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::AssetSettings;

/// One servable asset
#[derive(Debug, Clone)]
pub struct Asset {
    /// File contents
    pub bytes: Arc<Vec<u8>>,
    /// MIME type derived from the file extension
    pub content_type: &'static str,
}

/// Cache-first asset store
#[derive(Debug)]
pub struct AssetCache {
    root: PathBuf,
    cached: HashMap<String, Asset>,
}

impl AssetCache {
    /// Build the cache, loading the configured precache list into memory
    pub async fn preload(settings: &AssetSettings) -> Self {
        let root = PathBuf::from(&settings.root);
        let mut cached = HashMap::new();

        for path in &settings.precache {
            match tokio::fs::read(root.join(path)).await {
                Ok(bytes) => {
                    cached.insert(
                        path.clone(),
                        Asset {
                            bytes: Arc::new(bytes),
                            content_type: content_type_for(path),
                        },
                    );
                },
                Err(e) => warn!(path, error = %e, "Skipping missing precache asset"),
            }
        }

        info!(
            cached = cached.len(),
            configured = settings.precache.len(),
            "Asset cache ready"
        );
        Self { root, cached }
    }

    /// Serve an asset, from memory when pre-cached and from disk otherwise.
    ///
    /// Returns `None` for unknown paths and for paths that try to escape
    /// the asset root.
    pub async fn get(&self, path: &str) -> Option<Asset> {
        if path.split('/').any(|segment| segment == "..") {
            warn!(path, "Rejecting asset path with parent traversal");
            return None;
        }

        if let Some(asset) = self.cached.get(path) {
            debug!(path, "Serving pre-cached asset");
            return Some(asset.clone());
        }

        match tokio::fs::read(self.root.join(path)).await {
            Ok(bytes) => Some(Asset {
                bytes: Arc::new(bytes),
                content_type: content_type_for(path),
            }),
            Err(e) => {
                debug!(path, error = %e, "Asset not found");
                None
            },
        }
    }

    /// Number of assets held in memory
    #[must_use]
    pub fn cached_count(&self) -> usize {
        self.cached.len()
    }
}

/// MIME type for an asset path, by extension
fn content_type_for(path: &str) -> &'static str {
    match path.rsplit('.').next() {
        Some("webp") => "image/webp",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("css") => "text/css",
        Some("js") => "text/javascript",
        Some("html") => "text/html",
        Some("json") => "application/json",
        Some("woff2") => "font/woff2",
        _ => "application/octet-stream",
    }
}
