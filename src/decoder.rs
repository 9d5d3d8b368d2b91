use crate::{
    HeaderSource,
    config::{EmbeddedDetection, ValuePolicy},
    error::DecodeError,
    headers::*,
    record::IgbHeaders,
    roles::{CORP_ROLES, CorpRole, roles_for_mask},
};

/// Decodes IGB request headers into an [`IgbHeaders`] record.
///
/// A decoder is plain configuration: it holds the detection rule, the value
/// policy and the role table, and keeps no state between calls. Decoding the
/// same headers twice yields equal records.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use igb_headers::{Decoder, EmbeddedDetection, ValuePolicy};
///
/// let mut headers = HashMap::new();
/// headers.insert("EVE-TRUSTED", "No");
/// headers.insert("EVE-CORPROLE", "1");
///
/// let decoder = Decoder::new()
///     .with_embedded_detection(EmbeddedDetection::TrustHeaderPresent)
///     .with_value_policy(ValuePolicy::Strict);
///
/// let record = decoder.decode(&headers).expect("well-formed headers");
/// assert!(record.is_embedded_client);
/// assert!(!record.trusted);
/// assert!(record.has_role("Director"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoder {
    detection: EmbeddedDetection,
    policy: ValuePolicy,
    roles: &'static [CorpRole],
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    /// Creates a decoder with user-agent detection, the strict value policy
    /// and the built-in [`CORP_ROLES`] table.
    pub const fn new() -> Self {
        Self {
            detection: EmbeddedDetection::UserAgent,
            policy: ValuePolicy::Strict,
            roles: CORP_ROLES,
        }
    }

    /// Sets how IGB requests are recognised.
    pub fn with_embedded_detection(mut self, detection: EmbeddedDetection) -> Self {
        self.detection = detection;
        self
    }

    /// Sets what happens to undecodable values.
    pub fn with_value_policy(mut self, policy: ValuePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replaces the role table used to decode `EVE-CORPROLE`.
    pub fn with_roles(mut self, roles: &'static [CorpRole]) -> Self {
        self.roles = roles;
        self
    }

    /// Returns the embedded-client detection rule.
    pub fn embedded_detection(&self) -> EmbeddedDetection {
        self.detection
    }

    /// Returns the value policy.
    pub fn value_policy(&self) -> ValuePolicy {
        self.policy
    }

    /// Returns the role table.
    pub fn roles(&self) -> &'static [CorpRole] {
        self.roles
    }

    /// Decodes `headers`.
    ///
    /// Trusted-only fields are read only when `EVE-TRUSTED` is exactly `Yes`.
    /// Optional fields default to empty or 0 when absent or blank.
    ///
    /// # Errors
    ///
    /// Under [`ValuePolicy::Strict`]:
    /// - `MalformedHeaderValue` if a present numeric header is not an
    ///   unsigned decimal integer
    /// - `MissingTrustedField` if a trusted request lacks one of
    ///   [`TRUSTED_FIELDS`]
    ///
    /// [`ValuePolicy::Lenient`] never fails.
    pub fn decode<S: HeaderSource + ?Sized>(
        &self,
        headers: &S,
    ) -> Result<IgbHeaders, DecodeError> {
        let mut record = IgbHeaders {
            is_embedded_client: self.detection.detect(headers),
            trusted: headers.header(EVE_TRUSTED) == Some(TRUSTED_VALUE),
            ..IgbHeaders::default()
        };

        if record.trusted {
            record.server_ip = self.trusted_text(headers, EVE_SERVERIP)?;
            record.char_name = self.trusted_text(headers, EVE_CHARNAME)?;
            record.char_id = self.trusted_id(headers, EVE_CHARID)?;
            record.corp_name = self.trusted_text(headers, EVE_CORPNAME)?;
            record.corp_id = self.trusted_id(headers, EVE_CORPID)?;
            record.region_name = self.trusted_text(headers, EVE_REGIONNAME)?;
            record.constellation_name = self.trusted_text(headers, EVE_CONSTELLATIONNAME)?;
            record.solar_system_id = self.trusted_id(headers, EVE_SOLARSYSTEMID)?;
            record.solar_system_name = self.trusted_text(headers, EVE_SOLARSYSTEMNAME)?;
            record.ship_id = self.trusted_id(headers, EVE_SHIPID)?;
            record.ship_name = self.trusted_text(headers, EVE_SHIPNAME)?;
            record.ship_type_id = self.trusted_id(headers, EVE_SHIPTYPEID)?;
            record.ship_type_name = self.trusted_text(headers, EVE_SHIPTYPENAME)?;
        }

        record.corp_role_mask = self.optional_id(headers, EVE_CORPROLE)?;
        record.corp_roles = roles_for_mask(record.corp_role_mask, self.roles);
        record.alliance_name = optional_text(headers, EVE_ALLIANCENAME);
        record.alliance_id = self.optional_id(headers, EVE_ALLIANCEID)?;
        record.station_name = optional_text(headers, EVE_STATIONNAME);
        record.station_id = self.optional_id(headers, EVE_STATIONID)?;
        record.war_faction_id = self.optional_id(headers, EVE_WARFACTIONID)?;

        tracing::debug!(
            trusted = record.trusted,
            embedded = record.is_embedded_client,
            roles = record.corp_roles.len(),
            "decoded IGB headers"
        );

        Ok(record)
    }

    /// Decodes `headers`, falling back to [`IgbHeaders::default()`] on error.
    ///
    /// For callers that treat an undecodable header set as an ordinary,
    /// untrusted non-IGB request.
    pub fn decode_or_default<S: HeaderSource + ?Sized>(&self, headers: &S) -> IgbHeaders {
        match self.decode(headers) {
            Ok(record) => record,
            Err(error) => {
                tracing::warn!(
                    header = error.header(),
                    kind = %error.kind(),
                    "IGB headers rejected, treating request as untrusted"
                );
                IgbHeaders::default()
            }
        }
    }

    fn trusted_text<S: HeaderSource + ?Sized>(
        &self,
        headers: &S,
        name: &'static str,
    ) -> Result<String, DecodeError> {
        match headers.header(name) {
            Some(value) => Ok(value.to_owned()),
            None => self.substitute(DecodeError::missing(name)),
        }
    }

    fn trusted_id<S: HeaderSource + ?Sized>(
        &self,
        headers: &S,
        name: &'static str,
    ) -> Result<u64, DecodeError> {
        match headers.header(name) {
            Some(value) => self.parse_id(name, value),
            None => self.substitute(DecodeError::missing(name)),
        }
    }

    fn optional_id<S: HeaderSource + ?Sized>(
        &self,
        headers: &S,
        name: &'static str,
    ) -> Result<u64, DecodeError> {
        match headers.header(name) {
            Some(value) if !value.trim().is_empty() => self.parse_id(name, value),
            _ => Ok(0),
        }
    }

    fn parse_id(&self, name: &'static str, value: &str) -> Result<u64, DecodeError> {
        value
            .trim()
            .parse::<u64>()
            .or_else(|err| self.substitute(DecodeError::malformed(name, err)))
    }

    fn substitute<T: Default>(&self, error: DecodeError) -> Result<T, DecodeError> {
        match self.policy {
            ValuePolicy::Strict => Err(error),
            ValuePolicy::Lenient => {
                tracing::warn!(
                    header = error.header(),
                    kind = %error.kind(),
                    reason = error.message(),
                    "substituting default for undecodable IGB header"
                );
                Ok(T::default())
            }
        }
    }
}

fn optional_text<S: HeaderSource + ?Sized>(headers: &S, name: &str) -> String {
    match headers.header(name) {
        Some(value) if !value.trim().is_empty() => value.to_owned(),
        _ => String::new(),
    }
}

/// Decodes `headers` with the default [`Decoder`].
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
///
/// let headers: HashMap<&str, &str> = HashMap::new();
/// let record = igb_headers::decode(&headers).unwrap();
///
/// assert!(!record.trusted);
/// assert!(record.corp_roles.is_empty());
/// ```
pub fn decode<S: HeaderSource + ?Sized>(headers: &S) -> Result<IgbHeaders, DecodeError> {
    Decoder::new().decode(headers)
}
