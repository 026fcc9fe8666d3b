//! Google Cloud Text-to-Speech voice listing.
//!
//! The `voices` REST endpoint returns the whole listing in one response, so
//! this source never hands back a continuation token.

use crate::constants;
use crate::error::{Error, QueryError, Result};
use crate::provider::{Provider, VoicePage, VoiceSource};
use crate::voice::{Gender, Voice};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct VoicesResponse {
    #[serde(default)]
    voices: Vec<GcpVoice>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GcpVoice {
    name: String,
    #[serde(default)]
    language_codes: Vec<String>,
    #[serde(default)]
    ssml_gender: String,
}

impl From<GcpVoice> for Voice {
    fn from(raw: GcpVoice) -> Self {
        Voice {
            name: raw.name,
            language_codes: raw.language_codes,
            gender: Gender::from_tag(&raw.ssml_gender),
        }
    }
}

/// Client for the GCP `voices` endpoint, authenticated with an API key.
pub struct GcpVoiceClient {
    http: reqwest::blocking::Client,
    api_key: String,
}

impl GcpVoiceClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Read the API key from `GOOGLE_API_KEY`.
    pub fn from_env() -> Result<Self> {
        match std::env::var(constants::GCP_API_KEY_ENV) {
            Ok(key) if !key.is_empty() => Ok(Self::new(key)),
            _ => Err(Error::ProviderQuery {
                provider: Provider::Gcp,
                source: QueryError::MissingCredential(constants::GCP_API_KEY_ENV),
            }),
        }
    }

    fn list(&self) -> Result<Vec<Voice>, QueryError> {
        let response = self
            .http
            .get(constants::GCP_VOICES_URL)
            .query(&[("key", self.api_key.as_str())])
            .send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(QueryError::BadStatus(status, response.text().unwrap_or_default()));
        }
        let listing: VoicesResponse = response.json()?;
        Ok(listing.voices.into_iter().map(Voice::from).collect())
    }
}

impl VoiceSource for GcpVoiceClient {
    fn provider(&self) -> Provider {
        Provider::Gcp
    }

    fn fetch_page(&mut self, _token: Option<&str>) -> Result<VoicePage> {
        let voices = self.list().map_err(|source| Error::ProviderQuery {
            provider: Provider::Gcp,
            source,
        })?;
        Ok(VoicePage {
            voices,
            next_token: None,
        })
    }
}
