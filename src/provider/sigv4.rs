//! AWS Signature Version 4 for empty-body GET requests.
//!
//! Covers exactly what the Polly voice listing needs: a signed GET with
//! `host` and `x-amz-date` as the signed headers and no payload.

use crate::error::QueryError;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

type HmacSha256 = Hmac<Sha256>;

const ALGORITHM: &str = "AWS4-HMAC-SHA256";
/// SHA-256 of the empty string; the GETs signed here carry no body.
const EMPTY_PAYLOAD_HASH: &str =
    "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

#[derive(Debug, Clone)]
pub struct Credentials {
    pub access_key_id: String,
    pub secret_access_key: String,
}

/// Header values and canonical query the caller attaches to the request.
#[derive(Debug)]
pub struct SignedRequest {
    pub amz_date: String,
    pub authorization: String,
    pub canonical_query: String,
}

impl SignedRequest {
    /// `"?<query>"`, or `""` when there are no query parameters.
    pub fn query_suffix(&self) -> String {
        if self.canonical_query.is_empty() {
            String::new()
        } else {
            format!("?{}", self.canonical_query)
        }
    }
}

/// Sign a GET of `https://<host><path>?<query>` at time `now`.
///
/// The request must be sent with the exact `canonical_query` returned here,
/// otherwise the signature will not match on the AWS side.
pub fn sign_get(
    credentials: &Credentials,
    region: &str,
    service: &str,
    host: &str,
    path: &str,
    query: &[(&str, &str)],
    now: DateTime<Utc>,
) -> Result<SignedRequest, QueryError> {
    let amz_date = now.format("%Y%m%dT%H%M%SZ").to_string();
    let date_stamp = now.format("%Y%m%d").to_string();

    // Step 1: canonical request.
    let canonical_query = canonical_query_string(query);
    let canonical_headers = format!("host:{host}\nx-amz-date:{amz_date}\n");
    let signed_headers = "host;x-amz-date";
    let canonical_request = format!(
        "GET\n{path}\n{canonical_query}\n{canonical_headers}\n{signed_headers}\n{EMPTY_PAYLOAD_HASH}"
    );

    // Step 2: string to sign.
    let credential_scope = format!("{date_stamp}/{region}/{service}/aws4_request");
    let hashed_canonical = hex::encode(Sha256::digest(canonical_request.as_bytes()));
    let string_to_sign = format!("{ALGORITHM}\n{amz_date}\n{credential_scope}\n{hashed_canonical}");

    // Step 3: derive the signing key and sign.
    let seed = format!("AWS4{}", credentials.secret_access_key);
    let signing_key = hmac_chain(
        seed.as_bytes(),
        &[
            date_stamp.as_bytes(),
            region.as_bytes(),
            service.as_bytes(),
            b"aws4_request",
        ],
    )?;
    let signature = hex::encode(hmac(&signing_key, string_to_sign.as_bytes())?);

    let authorization = format!(
        "{ALGORITHM} Credential={}/{credential_scope}, SignedHeaders={signed_headers}, Signature={signature}",
        credentials.access_key_id
    );

    Ok(SignedRequest {
        amz_date,
        authorization,
        canonical_query,
    })
}

/// Query pairs sorted by name and RFC 3986 encoded, per the canonical form.
fn canonical_query_string(query: &[(&str, &str)]) -> String {
    let mut pairs: Vec<(String, String)> = query
        .iter()
        .map(|(name, value)| {
            (
                urlencoding::encode(name).into_owned(),
                urlencoding::encode(value).into_owned(),
            )
        })
        .collect();
    pairs.sort();
    pairs
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}

fn hmac(key: &[u8], data: &[u8]) -> Result<Vec<u8>, QueryError> {
    let mut mac =
        HmacSha256::new_from_slice(key).map_err(|e| QueryError::Signing(e.to_string()))?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}

fn hmac_chain(seed: &[u8], parts: &[&[u8]]) -> Result<Vec<u8>, QueryError> {
    let mut key = seed.to_vec();
    for part in parts {
        key = hmac(&key, part)?;
    }
    Ok(key)
}
