use std::fmt;

/// Error returned when an IGB header set cannot be decoded.
///
/// The error names the offending header but never carries its raw value,
/// since the value is client-supplied data.
///
/// # Examples
///
/// ```
/// use igb_headers::{DecodeError, DecodeErrorKind};
///
/// let error = DecodeError::new(
///     DecodeErrorKind::MissingTrustedField,
///     "EVE-CHARID",
///     "header absent on a trusted request",
/// );
/// assert_eq!(error.kind(), DecodeErrorKind::MissingTrustedField);
/// assert_eq!(error.header(), "EVE-CHARID");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError {
    kind: DecodeErrorKind,
    header: &'static str,
    message: String,
}

impl DecodeError {
    /// Creates a new decode error.
    pub fn new(kind: DecodeErrorKind, header: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind,
            header,
            message: message.into(),
        }
    }

    pub(crate) fn malformed(header: &'static str, reason: impl fmt::Display) -> Self {
        Self::new(
            DecodeErrorKind::MalformedHeaderValue,
            header,
            format!("expected an unsigned integer: {}", reason),
        )
    }

    pub(crate) fn missing(header: &'static str) -> Self {
        Self::new(
            DecodeErrorKind::MissingTrustedField,
            header,
            "header absent on a trusted request",
        )
    }

    /// Returns the error kind.
    pub fn kind(&self) -> DecodeErrorKind {
        self.kind
    }

    /// Returns the name of the header that failed to decode.
    pub fn header(&self) -> &'static str {
        self.header
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.kind, self.header, self.message)
    }
}

impl std::error::Error for DecodeError {}

/// Kind of decode error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// A present header expected to be numeric failed to parse.
    MalformedHeaderValue,
    /// A header the IGB always sends on trusted requests is absent.
    MissingTrustedField,
}

impl fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedHeaderValue => write!(f, "malformed header value"),
            Self::MissingTrustedField => write!(f, "missing trusted field"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_header() {
        let error = DecodeError::missing("EVE-SHIPID");
        assert_eq!(
            error.to_string(),
            "missing trusted field (EVE-SHIPID): header absent on a trusted request"
        );
    }

    #[test]
    fn malformed_reports_parse_reason() {
        let reason = "abc".parse::<u64>().unwrap_err();
        let error = DecodeError::malformed("EVE-CHARID", reason);

        assert_eq!(error.kind(), DecodeErrorKind::MalformedHeaderValue);
        assert_eq!(error.header(), "EVE-CHARID");
        assert!(error.message().contains("invalid digit"));
    }

    #[test]
    fn error_kind_display() {
        assert_eq!(
            format!("{}", DecodeErrorKind::MalformedHeaderValue),
            "malformed header value"
        );
        assert_eq!(
            format!("{}", DecodeErrorKind::MissingTrustedField),
            "missing trusted field"
        );
    }
}
