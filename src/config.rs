//! Decoder policy choices.
//!
//! Two behaviors of the IGB header protocol are left to the consuming
//! application: how an IGB request is recognised, and what happens to a
//! header value that cannot be decoded. Both are explicit here so a
//! [`Decoder`](crate::Decoder) applies one policy uniformly.

use crate::{HeaderSource, headers};

/// How [`IgbHeaders::is_embedded_client`](crate::IgbHeaders::is_embedded_client) is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmbeddedDetection {
    /// The user agent contains the `EVE-IGB` marker.
    #[default]
    UserAgent,
    /// The `EVE-TRUSTED` header is present, whatever its value.
    TrustHeaderPresent,
    /// Either of the above.
    Either,
}

impl EmbeddedDetection {
    /// Applies this detection rule to `headers`.
    pub fn detect<S: HeaderSource + ?Sized>(self, headers: &S) -> bool {
        let by_agent = || {
            headers
                .header(headers::USER_AGENT)
                .is_some_and(|agent| agent.contains(headers::IGB_USER_AGENT_MARKER))
        };
        let by_trust_header = || headers.header(headers::EVE_TRUSTED).is_some();

        match self {
            Self::UserAgent => by_agent(),
            Self::TrustHeaderPresent => by_trust_header(),
            Self::Either => by_agent() || by_trust_header(),
        }
    }
}

/// What the decoder does with a value it cannot use.
///
/// Applies to present-but-malformed numeric headers and to trusted-only
/// headers missing from a trusted request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValuePolicy {
    /// Fail the decode with a [`DecodeError`](crate::DecodeError).
    #[default]
    Strict,
    /// Substitute the field's zero default and log a warning.
    Lenient,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn source(pairs: &[(&'static str, &'static str)]) -> HashMap<&'static str, &'static str> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn defaults() {
        assert_eq!(EmbeddedDetection::default(), EmbeddedDetection::UserAgent);
        assert_eq!(ValuePolicy::default(), ValuePolicy::Strict);
    }

    #[test]
    fn user_agent_marker() {
        let igb = source(&[("User-Agent", "Mozilla/5.0 EVE-IGB")]);
        let browser = source(&[("User-Agent", "Mozilla/5.0"), ("EVE-TRUSTED", "No")]);

        assert!(EmbeddedDetection::UserAgent.detect(&igb));
        assert!(!EmbeddedDetection::UserAgent.detect(&browser));
    }

    #[test]
    fn marker_is_case_sensitive() {
        let headers = source(&[("User-Agent", "Mozilla/5.0 eve-igb")]);
        assert!(!EmbeddedDetection::UserAgent.detect(&headers));
    }

    #[test]
    fn trust_header_presence_ignores_value() {
        let untrusted = source(&[("EVE-TRUSTED", "No")]);
        let none = source(&[("User-Agent", "Mozilla/5.0 EVE-IGB")]);

        assert!(EmbeddedDetection::TrustHeaderPresent.detect(&untrusted));
        assert!(!EmbeddedDetection::TrustHeaderPresent.detect(&none));
    }

    #[test]
    fn either_accepts_both_signals() {
        let agent_only = source(&[("User-Agent", "EVE-IGB")]);
        let trust_only = source(&[("EVE-TRUSTED", "Yes")]);
        let neither = source(&[]);

        assert!(EmbeddedDetection::Either.detect(&agent_only));
        assert!(EmbeddedDetection::Either.detect(&trust_only));
        assert!(!EmbeddedDetection::Either.detect(&neither));
    }
}
