//! Provider identities and the voice listing seam.

pub mod gcp;
pub mod polly;
mod sigv4;

use crate::constants;
use crate::error::Result;
use crate::voice::Voice;
use std::fmt;

/// The two catalogued speech providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    Gcp,
    Polly,
}

impl Provider {
    pub const ALL: [Provider; 2] = [Provider::Gcp, Provider::Polly];

    /// File name the provider's catalog is persisted under.
    pub fn catalog_file_name(self) -> &'static str {
        match self {
            Provider::Gcp => constants::GCP_CATALOG_FILE,
            Provider::Polly => constants::POLLY_CATALOG_FILE,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Provider::Gcp => "Google Cloud TTS",
            Provider::Polly => "AWS Polly",
        })
    }
}

/// One page of a provider's voice listing.
#[derive(Debug, Default)]
pub struct VoicePage {
    pub voices: Vec<Voice>,
    /// Continuation token; `None` means the listing is complete.
    pub next_token: Option<String>,
}

/// A provider's voice listing endpoint.
pub trait VoiceSource {
    fn provider(&self) -> Provider;

    /// Fetch one page. `token` is the continuation token returned with the
    /// previous page, `None` for the first request.
    fn fetch_page(&mut self, token: Option<&str>) -> Result<VoicePage>;
}

/// Drain every page of `source`, in listing order.
///
/// Keeps requesting while the provider hands back a continuation token and
/// stops as soon as a page comes without one. No retries.
pub fn collect_voices<S: VoiceSource + ?Sized>(source: &mut S) -> Result<Vec<Voice>> {
    let mut voices = Vec::new();
    let mut token: Option<String> = None;
    loop {
        let page = source.fetch_page(token.as_deref())?;
        tracing::debug!(
            provider = %source.provider(),
            records = page.voices.len(),
            more = page.next_token.is_some(),
            "fetched voice listing page"
        );
        voices.extend(page.voices);
        match page.next_token {
            Some(next) => token = Some(next),
            None => break,
        }
    }
    Ok(voices)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::catalog::VoiceCatalog;
    use crate::error::{Error, QueryError};
    use crate::voice::Gender;

    /// Serves scripted pages and records the tokens it was asked for.
    pub(crate) struct PagedStub {
        pages: Vec<VoicePage>,
        pub seen_tokens: Vec<Option<String>>,
        pub fail_at: Option<usize>,
    }

    impl PagedStub {
        pub(crate) fn new(pages: Vec<VoicePage>) -> Self {
            Self {
                pages,
                seen_tokens: Vec::new(),
                fail_at: None,
            }
        }
    }

    impl VoiceSource for PagedStub {
        fn provider(&self) -> Provider {
            Provider::Polly
        }

        fn fetch_page(&mut self, token: Option<&str>) -> Result<VoicePage> {
            let call = self.seen_tokens.len();
            self.seen_tokens.push(token.map(str::to_owned));
            if self.fail_at == Some(call) {
                return Err(Error::ProviderQuery {
                    provider: Provider::Polly,
                    source: QueryError::BadStatus(
                        reqwest::StatusCode::SERVICE_UNAVAILABLE,
                        "throttled".into(),
                    ),
                });
            }
            Ok(self.pages.remove(0))
        }
    }

    fn three_pages() -> Vec<VoicePage> {
        vec![
            VoicePage {
                voices: vec![Voice::new("Joanna", ["en-US"], Gender::Female)],
                next_token: Some("page-2".into()),
            },
            VoicePage {
                voices: vec![Voice::new("Matthew", ["en-US"], Gender::Male)],
                next_token: Some("page-3".into()),
            },
            VoicePage {
                voices: vec![Voice::new("Zeina", ["arb"], Gender::Female)],
                next_token: None,
            },
        ]
    }

    #[test]
    fn collect_voices_follows_tokens_to_completion() {
        let mut source = PagedStub::new(three_pages());
        let voices = collect_voices(&mut source).unwrap();
        assert_eq!(voices.len(), 3);
        assert_eq!(
            source.seen_tokens,
            [None, Some("page-2".to_owned()), Some("page-3".to_owned())]
        );
    }

    #[test]
    fn three_pages_merge_into_one_catalog() {
        let mut source = PagedStub::new(three_pages());
        let catalog = VoiceCatalog::from_source(&mut source).unwrap();
        assert_eq!(catalog.language_codes(), ["arb", "en-US"]);
        assert_eq!(catalog.voices("en-US", Gender::Female), ["Joanna"]);
        assert_eq!(catalog.voices("en-US", Gender::Male), ["Matthew"]);
        assert_eq!(catalog.voices("arb", Gender::Female), ["Zeina"]);
    }

    #[test]
    fn a_failed_page_aborts_the_listing() {
        let mut source = PagedStub::new(three_pages());
        source.fail_at = Some(1);
        let err = collect_voices(&mut source).unwrap_err();
        assert!(matches!(err, Error::ProviderQuery { provider: Provider::Polly, .. }));
    }

    #[test]
    fn provider_file_names_match_the_persisted_layout() {
        assert_eq!(Provider::Gcp.catalog_file_name(), "GCP_VOICES_ALL.json");
        assert_eq!(Provider::Polly.catalog_file_name(), "POLLY_VOICES_ALL.json");
    }
}
