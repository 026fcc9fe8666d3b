//! AWS Polly voice listing via the `DescribeVoices` REST endpoint.
//!
//! Requests are signed with SigV4. The endpoint pages its results; each
//! response may carry a `NextToken` to pass back on the next request.

use crate::constants;
use crate::error::{Error, QueryError, Result};
use crate::provider::sigv4::{self, Credentials};
use crate::provider::{Provider, VoicePage, VoiceSource};
use crate::voice::{Gender, Voice};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct DescribeVoicesResponse {
    #[serde(rename = "Voices", default)]
    voices: Vec<PollyVoice>,
    #[serde(rename = "NextToken")]
    next_token: Option<String>,
}

impl DescribeVoicesResponse {
    fn into_page(self) -> VoicePage {
        VoicePage {
            voices: self.voices.into_iter().map(Voice::from).collect(),
            // Polly signals completion by omitting the token; treat an empty
            // string the same way.
            next_token: self.next_token.filter(|token| !token.is_empty()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct PollyVoice {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "LanguageCode")]
    language_code: String,
    #[serde(rename = "Gender", default)]
    gender: String,
}

impl From<PollyVoice> for Voice {
    fn from(raw: PollyVoice) -> Self {
        Voice {
            name: raw.name,
            language_codes: vec![raw.language_code],
            gender: Gender::from_tag(&raw.gender),
        }
    }
}

/// Client for `DescribeVoices`, authenticated with SigV4 credentials.
pub struct PollyVoiceClient {
    http: reqwest::blocking::Client,
    credentials: Credentials,
    region: String,
}

impl PollyVoiceClient {
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            credentials: Credentials {
                access_key_id: access_key_id.into(),
                secret_access_key: secret_access_key.into(),
            },
            region: region.into(),
        }
    }

    /// Read credentials from `AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY`,
    /// and the region from `AWS_REGION` (default `us-east-1`).
    pub fn from_env() -> Result<Self> {
        let access_key_id = require_env(constants::AWS_ACCESS_KEY_ENV)?;
        let secret_access_key = require_env(constants::AWS_SECRET_KEY_ENV)?;
        let region = std::env::var(constants::AWS_REGION_ENV)
            .ok()
            .filter(|region| !region.is_empty())
            .unwrap_or_else(|| constants::AWS_DEFAULT_REGION.to_owned());
        Ok(Self::new(access_key_id, secret_access_key, region))
    }

    fn host(&self) -> String {
        format!("polly.{}.amazonaws.com", self.region)
    }

    fn describe_voices(&self, token: Option<&str>) -> Result<DescribeVoicesResponse, QueryError> {
        let query: Vec<(&str, &str)> = match token {
            Some(token) => vec![("NextToken", token)],
            None => Vec::new(),
        };
        let host = self.host();
        let signed = sigv4::sign_get(
            &self.credentials,
            &self.region,
            constants::POLLY_SERVICE,
            &host,
            constants::POLLY_VOICES_PATH,
            &query,
            chrono::Utc::now(),
        )?;

        let url = format!(
            "https://{host}{}{}",
            constants::POLLY_VOICES_PATH,
            signed.query_suffix()
        );
        let response = self
            .http
            .get(url)
            .header("X-Amz-Date", &signed.amz_date)
            .header("Authorization", &signed.authorization)
            .send()?;
        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(QueryError::BadStatus(status, body));
        }
        Ok(serde_json::from_str(&body)?)
    }
}

fn require_env(name: &'static str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::ProviderQuery {
            provider: Provider::Polly,
            source: QueryError::MissingCredential(name),
        }),
    }
}

impl VoiceSource for PollyVoiceClient {
    fn provider(&self) -> Provider {
        Provider::Polly
    }

    fn fetch_page(&mut self, token: Option<&str>) -> Result<VoicePage> {
        let listing = self
            .describe_voices(token)
            .map_err(|source| Error::ProviderQuery {
                provider: Provider::Polly,
                source,
            })?;
        Ok(listing.into_page())
    }
}
