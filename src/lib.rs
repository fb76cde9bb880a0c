//! # Aviso
//!
//! Checks whether a customs tariff code (a Mexican TIGIE fracción or a U.S.
//! HTSUS code) requires an Aviso Automático for import, by asking a remote
//! lookup service.
//!
//! ## Features
//!
//! - **Code normalization**: 8-digit codes are grouped as `XXXX.XX.XX`
//!   whatever separators the user typed
//! - **Closed outcomes**: every submission ends in exactly one [`api::Outcome`],
//!   failures included, so callers only render
//! - **Configurable wire contract**: query parameter names and the verdict
//!   field are configuration, not code
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use aviso::{
//!     api::{Outcome, VerificationClient, VerificationRequest},
//!     config::ClientConfig,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::from_url("https://northcross-api.onrender.com/consulta")?;
//! let client = VerificationClient::new(config)?;
//!
//! let outcome = client.verify(VerificationRequest::new("acero", "7208 10 00"));
//! if outcome == Outcome::RequiresNotice {
//!     println!("{}", outcome.note());
//! }
//! # Ok(())
//! # }
//! ```

/// Client, request and outcome types for the lookup service
pub mod api;

/// Endpoint and wire-contract settings
pub mod config;

/// Request failure reporting with suggestions
pub mod errors;

/// Tariff code normalization
pub mod tariff_code;
