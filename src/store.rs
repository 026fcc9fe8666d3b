//! File-backed persistence, one JSON catalog file per provider.

use crate::catalog::VoiceCatalog;
use crate::error::{Error, Result};
use crate::provider::Provider;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Stores each provider's catalog as a pretty-printed JSON file under a base
/// directory. Single-writer, single-reader usage; no locking.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    base_dir: PathBuf,
}

impl CatalogStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Location the provider's catalog is persisted at.
    pub fn path(&self, provider: Provider) -> PathBuf {
        self.base_dir.join(provider.catalog_file_name())
    }

    /// Serialize `catalog` and replace whatever is stored for `provider`,
    /// returning the location written.
    ///
    /// The content goes to a temporary sibling first and is renamed over the
    /// target, so a failed write leaves the previous file untouched.
    pub fn save(&self, provider: Provider, catalog: &VoiceCatalog) -> Result<PathBuf> {
        let path = self.path(provider);
        self.write(&path, catalog).map_err(|source| Error::StoreWrite {
            provider,
            path: path.clone(),
            source,
        })?;
        tracing::debug!(%provider, path = %path.display(), languages = catalog.len(), "catalog saved");
        Ok(path)
    }

    fn write(&self, path: &Path, catalog: &VoiceCatalog) -> io::Result<()> {
        fs::create_dir_all(&self.base_dir)?;
        let json = serde_json::to_vec_pretty(catalog)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, path)
    }

    /// Load the stored catalog for `provider`.
    pub fn load(&self, provider: Provider) -> Result<VoiceCatalog> {
        let path = self.path(provider);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(Error::StoreMissing { provider, path })
            }
            Err(e) => {
                return Err(Error::StoreCorrupt {
                    provider,
                    path,
                    source: serde_json::Error::io(e),
                })
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(catalog) => {
                tracing::debug!(%provider, path = %path.display(), "catalog loaded");
                Ok(catalog)
            }
            Err(source) => Err(Error::StoreCorrupt {
                provider,
                path,
                source,
            }),
        }
    }
}
