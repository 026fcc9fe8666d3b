//! Voice catalogs for **Google Cloud Text-to-Speech** and **AWS Polly**.
//!
//! Both providers report their voices as a flat listing. This crate fetches
//! those listings, normalizes them into a language code -> gender -> voice
//! names table, persists one JSON file per provider and answers the queries
//! a voice picker needs: which languages exist, which voices a language and
//! gender offer, and whether a language is known at all.
//!
//! # How to use
//! 1. Build a [VoiceCatalog](catalog::VoiceCatalog) from any voice listing.
//!    Unspecified/neutral voices are kept out of the gender buckets.
//!     ```rust
//!     use cloud_tts_catalog::catalog::VoiceCatalog;
//!     use cloud_tts_catalog::voice::{Gender, Voice};
//!
//!     let catalog = VoiceCatalog::build([
//!         Voice::new("Ava", ["en-US"], Gender::Female),
//!         Voice::new("Liam", ["en-US"], Gender::Male),
//!         Voice::new("Noor", ["ar-XA"], Gender::Female),
//!     ]);
//!     assert_eq!(catalog.language_codes(), ["ar-XA", "en-US"]);
//!     assert_eq!(catalog.voices("en-US", Gender::Female), ["Ava"]);
//!     assert!(catalog.voices("fr-FR", Gender::Male).is_empty());
//!     ```
//! 2. Hold catalogs in a [CatalogRegistry](registry::CatalogRegistry). It
//!    loads the persisted files at startup and replaces one provider's
//!    catalog wholesale when the caller asks for a refresh; a failed refresh
//!    leaves the previous catalog untouched.
//!     ```rust,no_run
//!     use cloud_tts_catalog::provider::gcp::GcpVoiceClient;
//!     use cloud_tts_catalog::registry::CatalogRegistry;
//!
//!     fn main() -> cloud_tts_catalog::error::Result<()> {
//!         let mut registry = CatalogRegistry::open("All_Lang");
//!         let missing = registry.load_existing()?;
//!         if !missing.is_empty() {
//!             let mut gcp = GcpVoiceClient::from_env()?;
//!             registry.refresh(&mut gcp)?;
//!         }
//!         Ok(())
//!     }
//!     ```
//! 3. The live sources are [GcpVoiceClient](provider::gcp::GcpVoiceClient)
//!    (one page) and [PollyVoiceClient](provider::polly::PollyVoiceClient)
//!    (follows `NextToken` pagination, requests signed with SigV4). Anything
//!    implementing [VoiceSource](provider::VoiceSource) can feed a refresh.

mod constants;

pub mod catalog;
pub mod error;
pub mod format;
pub mod provider;
pub mod registry;
pub mod store;
pub mod voice;
