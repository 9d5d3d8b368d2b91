//! Typed decoding of EVE Online in-game browser (IGB) request headers.
//!
//! The IGB identifies itself through its user agent and, once the player
//! trusts a site, forwards character and location data as `EVE-*` request
//! headers. This crate turns those headers into a typed record:
//! - **Header sources**: [`HeaderSource`] over string maps, [`http::HeaderMap`]
//!   and CGI-style meta variables ([`CgiMeta`])
//! - **Decoding**: [`Decoder`] reads, parses and defaults every field into
//!   [`IgbHeaders`]
//! - **Corp roles**: [`roles_for_mask`] decodes the role bitmask against
//!   [`CORP_ROLES`] or a custom table
//! - **Server config**: [`apache`] generates the directives that forward
//!   underscore-named headers through Apache 2.4
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use igb_headers::{DecodeErrorKind, decode};
//!
//! let mut headers = HashMap::new();
//! headers.insert("User-Agent", "Mozilla/5.0 EVE-IGB");
//! headers.insert("EVE-TRUSTED", "No");
//! headers.insert("EVE-STATIONNAME", "Jita IV - Moon 4 - Caldari Navy Assembly Plant");
//!
//! let record = decode(&headers).expect("well-formed headers");
//! assert!(record.is_embedded_client);
//! assert!(!record.trusted);
//! assert!(record.is_on_station());
//!
//! // A trusted request must carry every trusted field.
//! headers.insert("EVE-TRUSTED", "Yes");
//! let error = decode(&headers).unwrap_err();
//! assert_eq!(error.kind(), DecodeErrorKind::MissingTrustedField);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod apache;
mod config;
mod decoder;
mod error;
pub mod headers;
mod record;
mod roles;
mod source;

#[cfg(test)]
mod test_utils;

pub use config::{EmbeddedDetection, ValuePolicy};
pub use decoder::{Decoder, decode};
pub use error::{DecodeError, DecodeErrorKind};
pub use record::IgbHeaders;
pub use roles::{CORP_ROLES, CorpRole, roles_for_mask};
pub use source::{CgiMeta, HeaderSource, meta_variable};
