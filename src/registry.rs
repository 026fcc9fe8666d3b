//! Process-wide catalog holder and the refresh flow.

use crate::catalog::VoiceCatalog;
use crate::error::{Error, Result};
use crate::provider::{Provider, VoiceSource};
use crate::store::CatalogStore;
use crate::voice::Gender;
use std::collections::HashMap;
use std::path::PathBuf;

/// Owns the persisted store plus the in-memory catalogs that selection
/// queries run against.
///
/// One writer at a time is assumed (a caller-triggered refresh). A refresh
/// builds the replacement catalog completely and persists it before
/// publishing it to the in-memory slot, so queries observe either the old
/// catalog or the new one, never a mix. On any refresh failure the previous
/// catalog, in memory and on disk, stays authoritative.
#[derive(Debug)]
pub struct CatalogRegistry {
    store: CatalogStore,
    catalogs: HashMap<Provider, VoiceCatalog>,
}

impl CatalogRegistry {
    /// Registry over catalog files under `base_dir`. Nothing is loaded yet.
    pub fn open(base_dir: impl Into<PathBuf>) -> Self {
        Self::with_store(CatalogStore::new(base_dir))
    }

    pub fn with_store(store: CatalogStore) -> Self {
        Self {
            store,
            catalogs: HashMap::new(),
        }
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    /// Load one provider's persisted catalog into memory.
    pub fn load(&mut self, provider: Provider) -> Result<&VoiceCatalog> {
        let catalog = self.store.load(provider)?;
        self.catalogs.insert(provider, catalog);
        Ok(&self.catalogs[&provider])
    }

    /// Startup convenience: load whichever catalogs exist on disk and return
    /// the providers that have none stored yet. A corrupt file is surfaced
    /// as an error rather than treated as missing, so the caller can report
    /// it before rebuilding.
    pub fn load_existing(&mut self) -> Result<Vec<Provider>> {
        let mut missing = Vec::new();
        for provider in Provider::ALL {
            match self.store.load(provider) {
                Ok(catalog) => {
                    self.catalogs.insert(provider, catalog);
                }
                Err(Error::StoreMissing { .. }) => missing.push(provider),
                Err(e) => return Err(e),
            }
        }
        Ok(missing)
    }

    /// Rebuild the source's catalog from a live listing, persist it, then
    /// publish it to readers.
    pub fn refresh(&mut self, source: &mut dyn VoiceSource) -> Result<&VoiceCatalog> {
        let provider = source.provider();
        let catalog = VoiceCatalog::from_source(source)?;
        self.store.save(provider, &catalog)?;
        tracing::info!(%provider, languages = catalog.len(), "voice catalog refreshed");
        self.catalogs.insert(provider, catalog);
        Ok(&self.catalogs[&provider])
    }

    /// The in-memory catalog for `provider`, if one has been loaded or
    /// refreshed.
    pub fn catalog(&self, provider: Provider) -> Option<&VoiceCatalog> {
        self.catalogs.get(&provider)
    }

    /// Sorted language codes for `provider`; empty when nothing is loaded.
    pub fn language_codes(&self, provider: Provider) -> Vec<&str> {
        self.catalogs
            .get(&provider)
            .map(VoiceCatalog::language_codes)
            .unwrap_or_default()
    }

    /// Voice names for a provider/language/gender triple; empty when the
    /// catalog, language or bucket is absent.
    pub fn voices(&self, provider: Provider, language_code: &str, gender: Gender) -> &[String] {
        match self.catalogs.get(&provider) {
            Some(catalog) => catalog.voices(language_code, gender),
            None => &[],
        }
    }

    /// Whether `language_code` is known for `provider`. `false` when no
    /// catalog is loaded; callers use this to prompt for a refresh before
    /// querying further.
    pub fn is_known_language(&self, provider: Provider, language_code: &str) -> bool {
        self.catalogs
            .get(&provider)
            .is_some_and(|catalog| catalog.contains_language(language_code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::tests::PagedStub;
    use crate::provider::VoicePage;
    use crate::voice::Voice;
    use tempfile::tempdir;

    fn one_page(voices: Vec<Voice>) -> Vec<VoicePage> {
        vec![VoicePage {
            voices,
            next_token: None,
        }]
    }

    #[test]
    fn refresh_publishes_to_memory_and_disk() {
        let dir = tempdir().unwrap();
        let mut registry = CatalogRegistry::open(dir.path());
        let mut source = PagedStub::new(one_page(vec![
            Voice::new("Joanna", ["en-US"], Gender::Female),
            Voice::new("Matthew", ["en-US"], Gender::Male),
        ]));

        let catalog = registry.refresh(&mut source).unwrap();
        assert_eq!(catalog.voices("en-US", Gender::Female), ["Joanna"]);
        assert!(registry.is_known_language(Provider::Polly, "en-US"));

        // The persisted copy matches what was published.
        let stored = registry.store().load(Provider::Polly).unwrap();
        assert_eq!(Some(&stored), registry.catalog(Provider::Polly));
    }

    #[test]
    fn failed_refresh_keeps_the_previous_catalog() {
        let dir = tempdir().unwrap();
        let mut registry = CatalogRegistry::open(dir.path());

        let mut first = PagedStub::new(one_page(vec![Voice::new(
            "Joanna",
            ["en-US"],
            Gender::Female,
        )]));
        registry.refresh(&mut first).unwrap();

        let mut failing = PagedStub::new(one_page(vec![Voice::new(
            "Matthew",
            ["en-US"],
            Gender::Male,
        )]));
        failing.fail_at = Some(0);
        assert!(registry.refresh(&mut failing).is_err());

        // Old catalog still authoritative, in memory and on disk.
        assert_eq!(
            registry.voices(Provider::Polly, "en-US", Gender::Female),
            ["Joanna"]
        );
        let stored = registry.store().load(Provider::Polly).unwrap();
        assert_eq!(stored.voices("en-US", Gender::Female), ["Joanna"]);
    }

    #[test]
    fn queries_before_any_load_return_empty() {
        let dir = tempdir().unwrap();
        let registry = CatalogRegistry::open(dir.path());
        assert!(registry.catalog(Provider::Gcp).is_none());
        assert!(registry.language_codes(Provider::Gcp).is_empty());
        assert!(registry.voices(Provider::Gcp, "en-US", Gender::Female).is_empty());
        assert!(!registry.is_known_language(Provider::Gcp, "en-US"));
    }

    #[test]
    fn load_existing_reports_missing_providers() {
        let dir = tempdir().unwrap();
        let mut registry = CatalogRegistry::open(dir.path());
        assert_eq!(
            registry.load_existing().unwrap(),
            [Provider::Gcp, Provider::Polly]
        );

        let mut source = PagedStub::new(one_page(vec![Voice::new(
            "Zeina",
            ["arb"],
            Gender::Female,
        )]));
        registry.refresh(&mut source).unwrap();

        let mut fresh = CatalogRegistry::open(dir.path());
        assert_eq!(fresh.load_existing().unwrap(), [Provider::Gcp]);
        assert!(fresh.is_known_language(Provider::Polly, "arb"));
    }

    #[test]
    fn load_existing_surfaces_corrupt_files() {
        let dir = tempdir().unwrap();
        let mut registry = CatalogRegistry::open(dir.path());
        std::fs::write(registry.store().path(Provider::Gcp), b"{oops").unwrap();
        let err = registry.load_existing().unwrap_err();
        assert!(matches!(err, Error::StoreCorrupt { provider: Provider::Gcp, .. }));
    }

    #[test]
    fn load_reads_a_catalog_saved_by_an_earlier_process() {
        let dir = tempdir().unwrap();
        let catalog = VoiceCatalog::build([Voice::new("Ava", ["en-US"], Gender::Female)]);
        CatalogStore::new(dir.path())
            .save(Provider::Gcp, &catalog)
            .unwrap();

        let mut registry = CatalogRegistry::open(dir.path());
        assert_eq!(registry.load(Provider::Gcp).unwrap(), &catalog);
        assert!(matches!(
            registry.load(Provider::Polly).unwrap_err(),
            Error::StoreMissing { provider: Provider::Polly, .. }
        ));
    }
}
