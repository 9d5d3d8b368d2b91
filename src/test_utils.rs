//! Shared fixtures and proptest strategies for unit tests.

use std::collections::HashMap;

use proptest::prelude::*;

use crate::headers;

/// Headers of a trusted IGB request docked in Jita, no optional fields.
pub(crate) fn trusted_headers() -> HashMap<String, String> {
    [
        (headers::USER_AGENT, "Mozilla/5.0 (Windows NT 6.1) EVE-IGB"),
        (headers::EVE_TRUSTED, "Yes"),
        (headers::EVE_SERVERIP, "87.237.38.200:26000"),
        (headers::EVE_CHARNAME, "Pilot1"),
        (headers::EVE_CHARID, "12345"),
        (headers::EVE_CORPNAME, "Corp One"),
        (headers::EVE_CORPID, "98000001"),
        (headers::EVE_REGIONNAME, "The Forge"),
        (headers::EVE_CONSTELLATIONNAME, "Kimotoro"),
        (headers::EVE_SOLARSYSTEMID, "30000142"),
        (headers::EVE_SOLARSYSTEMNAME, "Jita"),
        (headers::EVE_SHIPID, "1000000123"),
        (headers::EVE_SHIPNAME, "Pilot1's Rifter"),
        (headers::EVE_SHIPTYPEID, "587"),
        (headers::EVE_SHIPTYPENAME, "Rifter"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

/// Strategy producing printable header text, possibly empty.
pub(crate) fn arb_header_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9 .'-]{0,24}").unwrap()
}

/// Strategy producing any header name the decoder knows, plus the user agent.
pub(crate) fn arb_known_header() -> impl Strategy<Value = &'static str> {
    prop::sample::select(
        headers::ALL
            .iter()
            .copied()
            .chain([headers::USER_AGENT])
            .collect::<Vec<_>>(),
    )
}
