//! The normalized voice catalog: language code -> gender -> voice names.

use crate::error::Result;
use crate::provider::{self, VoiceSource};
use crate::voice::{Gender, Voice};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The two gender buckets kept for every language code in a catalog.
///
/// Both keys are always present in the serialized form, even when empty, so
/// a consumer can index `catalog[lang][gender]` without existence checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenderVoices {
    #[serde(rename = "Female")]
    pub female: Vec<String>,
    #[serde(rename = "Male")]
    pub male: Vec<String>,
}

/// Normalized voice catalog for one provider.
///
/// Serializes as `{"<languageCode>": {"Female": [...], "Male": [...]}}`.
/// Language codes are kept in a [BTreeMap] so iteration order, selector
/// output and the persisted file are all lexicographically sorted and stable.
/// Voice names keep the provider's listing order; a name a provider lists
/// twice is kept twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoiceCatalog(BTreeMap<String, GenderVoices>);

impl VoiceCatalog {
    /// Build a catalog from a flat voice listing.
    ///
    /// Every language code seen on any record gets an entry with both gender
    /// buckets; records with [Gender::Unspecified] still create their
    /// language entries but are never placed in a bucket.
    pub fn build(voices: impl IntoIterator<Item = Voice>) -> Self {
        let mut languages: BTreeMap<String, GenderVoices> = BTreeMap::new();
        for voice in voices {
            for code in &voice.language_codes {
                let bucket = languages.entry(code.clone()).or_default();
                match voice.gender {
                    Gender::Female => bucket.female.push(voice.name.clone()),
                    Gender::Male => bucket.male.push(voice.name.clone()),
                    Gender::Unspecified => {}
                }
            }
        }
        VoiceCatalog(languages)
    }

    /// Fetch every page from `source` and build one catalog from all records.
    pub fn from_source<S: VoiceSource + ?Sized>(source: &mut S) -> Result<Self> {
        Ok(Self::build(provider::collect_voices(source)?))
    }

    /// All language codes present, lexicographically sorted.
    pub fn language_codes(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    /// Voice names for a language/gender pair, in listing order.
    ///
    /// An absent language, an empty bucket and [Gender::Unspecified] all
    /// yield an empty slice; none of them is an error.
    pub fn voices(&self, language_code: &str, gender: Gender) -> &[String] {
        const EMPTY: &[String] = &[];
        match (self.0.get(language_code), gender) {
            (Some(bucket), Gender::Female) => &bucket.female,
            (Some(bucket), Gender::Male) => &bucket.male,
            _ => EMPTY,
        }
    }

    pub fn contains_language(&self, language_code: &str) -> bool {
        self.0.contains_key(language_code)
    }

    /// Number of language codes in the catalog.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
