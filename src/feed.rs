//! Feed retrieval: local files, inline documents and remote feeds with a
//! local download cache.
//!
//! Remote feeds are downloaded on every load and kept in the cache directory
//! so that offline mode can serve the last good copy. Every failure to
//! obtain or parse a feed surfaces as [`LedgerError::SourceUnavailable`].

use crate::config;
use crate::error::{LedgerError, Result};
use crate::models::FeedDocument;
use flate2::read::GzDecoder;
use reqwest::blocking::Client;
use std::fs;
use std::io::{BufReader, Read};
use std::path::{Component, Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

// ---------------------------------------------------------------------------
// FeedSource
// ---------------------------------------------------------------------------

/// One named feed and where to find it.
#[derive(Debug, Clone)]
pub enum FeedSource {
    /// Path relative to the loader's base URL, e.g. `"branch1.json"`.
    Remote { name: String, path: String },
    /// File on the local filesystem; `.gz` files are decompressed.
    File { name: String, path: PathBuf },
    /// Document already in memory.
    Inline { name: String, document: FeedDocument },
}

impl FeedSource {
    /// Remote feed named after its path.
    pub fn remote(path: &str) -> Self {
        FeedSource::Remote {
            name: path.to_string(),
            path: path.to_string(),
        }
    }

    /// Local file named after its file name.
    pub fn file<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();
        FeedSource::File { name, path }
    }

    pub fn inline(name: &str, document: FeedDocument) -> Self {
        FeedSource::Inline {
            name: name.to_string(),
            document,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FeedSource::Remote { name, .. }
            | FeedSource::File { name, .. }
            | FeedSource::Inline { name, .. } => name,
        }
    }
}

// ---------------------------------------------------------------------------
// FeedLoader
// ---------------------------------------------------------------------------

/// Retrieves feed documents for [`FeedSource`]s.
pub struct FeedLoader {
    /// Base URL that remote feed paths are joined onto.
    pub base_url: Option<String>,
    /// Directory where downloaded feeds are stored.
    pub cache_dir: PathBuf,
    /// If true, never download (use cached remote feeds only).
    pub offline: bool,
    timeout: Duration,
    client: Option<Client>,
}

impl FeedLoader {
    /// Create a new loader.
    ///
    /// If `cache_dir` is `None`, uses the platform-appropriate default cache
    /// directory. The directory is created on the first download.
    pub fn new(
        base_url: Option<String>,
        cache_dir: Option<PathBuf>,
        offline: bool,
        timeout: Duration,
    ) -> Self {
        Self {
            base_url,
            cache_dir: cache_dir.unwrap_or_else(config::default_cache_dir),
            offline,
            timeout,
            client: None,
        }
    }

    /// Lazy HTTP client, created on first use.
    fn client(&mut self) -> Result<&Client> {
        if self.client.is_none() {
            let client = Client::builder()
                .timeout(self.timeout)
                .redirect(reqwest::redirect::Policy::limited(10))
                .build()?;
            self.client = Some(client);
        }
        self.client
            .as_ref()
            .ok_or_else(|| LedgerError::InvalidArgument("HTTP client unavailable".into()))
    }

    /// Retrieve and parse one source.
    pub fn fetch(&mut self, source: &FeedSource) -> Result<FeedDocument> {
        let result = match source {
            FeedSource::Inline { document, .. } => Ok(document.clone()),
            FeedSource::File { path, .. } => read_document(path),
            FeedSource::Remote { path, .. } => self.fetch_remote(path),
        };
        result.map_err(|e| match e {
            LedgerError::SourceUnavailable { .. } => e,
            other => LedgerError::unavailable(source.name(), other),
        })
    }

    /// Retrieve every source, in order, without stopping at failures.
    pub fn fetch_all(&mut self, sources: &[FeedSource]) -> Vec<(String, Result<FeedDocument>)> {
        sources
            .iter()
            .map(|s| (s.name().to_string(), self.fetch(s)))
            .collect()
    }

    fn fetch_remote(&mut self, path: &str) -> Result<FeedDocument> {
        let local_path = self.ensure_remote(path)?;
        match read_document(&local_path) {
            Ok(doc) => Ok(doc),
            Err(e) => {
                warn!(path = %local_path.display(), %e, "corrupt cached feed, removing");
                let _ = fs::remove_file(&local_path);
                Err(e)
            }
        }
    }

    /// Ensure a remote feed is cached locally, downloading unless offline.
    ///
    /// Returns the local path of the cached copy.
    pub fn ensure_remote(&mut self, path: &str) -> Result<PathBuf> {
        if !is_relative_feed_path(path) {
            return Err(LedgerError::InvalidArgument(format!(
                "remote feed path '{}' must stay inside the cache directory",
                path
            )));
        }
        let local_path = self.cache_dir.join(path);

        if self.offline {
            if local_path.exists() {
                debug!(path = %local_path.display(), "offline, using cached feed");
                return Ok(local_path);
            }
            return Err(LedgerError::NotFound(format!(
                "Feed {} not cached and offline mode is enabled",
                path
            )));
        }

        self.download_file(path, &local_path)?;
        Ok(local_path)
    }

    /// Download a single feed.
    ///
    /// Downloads to a temp file first and renames on success, so an
    /// interrupted download never replaces the last good copy.
    fn download_file(&mut self, path: &str, dest: &Path) -> Result<()> {
        let base = self.base_url.as_deref().ok_or_else(|| {
            LedgerError::InvalidArgument("no base URL configured for remote feeds".into())
        })?;
        let url = format!("{}/{}", base.trim_end_matches('/'), path);
        info!(%url, "downloading feed");

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_dest = dest.with_extension(format!(
            "{}.tmp",
            dest.extension().and_then(|e| e.to_str()).unwrap_or("")
        ));

        let client = self.client()?.clone();
        let result = (|| -> Result<()> {
            let resp = client.get(&url).send()?.error_for_status()?;
            let bytes = resp.bytes()?;
            fs::write(&tmp_dest, &bytes)?;
            fs::rename(&tmp_dest, dest)?;
            Ok(())
        })();

        if result.is_err() {
            let _ = fs::remove_file(&tmp_dest);
        }

        result
    }

    /// Remove all cached feeds.
    pub fn clear(&self) -> Result<()> {
        if self.cache_dir.exists() {
            fs::remove_dir_all(&self.cache_dir)?;
            fs::create_dir_all(&self.cache_dir)?;
        }
        Ok(())
    }

    /// Close the HTTP client, if open.
    pub fn close(&mut self) {
        self.client = None;
    }
}

/// True when `path` is relative and made only of plain components.
fn is_relative_feed_path(path: &str) -> bool {
    let path = Path::new(path);
    path.components().next().is_some()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// Read and parse a feed file (handles `.gz` transparently).
pub fn read_document(path: &Path) -> Result<FeedDocument> {
    let contents = if path.extension().and_then(|e| e.to_str()) == Some("gz") {
        let file = fs::File::open(path)?;
        let mut reader = BufReader::new(GzDecoder::new(BufReader::new(file)));
        let mut contents = String::new();
        reader.read_to_string(&mut contents)?;
        contents
    } else {
        fs::read_to_string(path)?
    };
    Ok(serde_json::from_str(&contents)?)
}
