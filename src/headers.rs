//! Header names sent by the EVE in-game browser.
//!
//! Only `EVE-TRUSTED` is sent unconditionally. The thirteen fields in
//! [`TRUSTED_FIELDS`] follow once the player has marked the site as trusted,
//! and the remaining headers appear only when the player has something to
//! report (roles, an alliance, a station, a faction war).

/// Standard user-agent header.
pub const USER_AGENT: &str = "User-Agent";

/// Marker token the IGB places in its user agent.
pub const IGB_USER_AGENT_MARKER: &str = "EVE-IGB";

/// Value of [`EVE_TRUSTED`] on trusted requests.
pub const TRUSTED_VALUE: &str = "Yes";

/// Prefix shared by every IGB header.
pub const EVE_PREFIX: &str = "EVE-";

/// Whether the player trusts this site (`Yes` or `No`).
pub const EVE_TRUSTED: &str = "EVE-TRUSTED";
/// Address of the game server the client is connected to.
pub const EVE_SERVERIP: &str = "EVE-SERVERIP";
/// Character name.
pub const EVE_CHARNAME: &str = "EVE-CHARNAME";
/// Character id.
pub const EVE_CHARID: &str = "EVE-CHARID";
/// Corporation name.
pub const EVE_CORPNAME: &str = "EVE-CORPNAME";
/// Corporation id.
pub const EVE_CORPID: &str = "EVE-CORPID";
/// Region the character is in.
pub const EVE_REGIONNAME: &str = "EVE-REGIONNAME";
/// Constellation the character is in.
pub const EVE_CONSTELLATIONNAME: &str = "EVE-CONSTELLATIONNAME";
/// Solar system id.
pub const EVE_SOLARSYSTEMID: &str = "EVE-SOLARSYSTEMID";
/// Solar system name.
pub const EVE_SOLARSYSTEMNAME: &str = "EVE-SOLARSYSTEMNAME";
/// Id of the ship item the character is flying.
pub const EVE_SHIPID: &str = "EVE-SHIPID";
/// Name given to the current ship.
pub const EVE_SHIPNAME: &str = "EVE-SHIPNAME";
/// Type id of the current ship.
pub const EVE_SHIPTYPEID: &str = "EVE-SHIPTYPEID";
/// Type name of the current ship.
pub const EVE_SHIPTYPENAME: &str = "EVE-SHIPTYPENAME";
/// Corp role bitmask.
pub const EVE_CORPROLE: &str = "EVE-CORPROLE";
/// Alliance name, if the corporation is in one.
pub const EVE_ALLIANCENAME: &str = "EVE-ALLIANCENAME";
/// Alliance id.
pub const EVE_ALLIANCEID: &str = "EVE-ALLIANCEID";
/// Station name, while docked.
pub const EVE_STATIONNAME: &str = "EVE-STATIONNAME";
/// Station id.
pub const EVE_STATIONID: &str = "EVE-STATIONID";
/// Faction id, while enlisted in factional warfare.
pub const EVE_WARFACTIONID: &str = "EVE-WARFACTIONID";

/// Headers guaranteed present when [`EVE_TRUSTED`] is `Yes`.
pub const TRUSTED_FIELDS: [&str; 13] = [
    EVE_SERVERIP,
    EVE_CHARNAME,
    EVE_CHARID,
    EVE_CORPNAME,
    EVE_CORPID,
    EVE_REGIONNAME,
    EVE_CONSTELLATIONNAME,
    EVE_SOLARSYSTEMID,
    EVE_SOLARSYSTEMNAME,
    EVE_SHIPID,
    EVE_SHIPNAME,
    EVE_SHIPTYPEID,
    EVE_SHIPTYPENAME,
];

/// Headers that may be absent or empty regardless of trust.
pub const OPTIONAL_FIELDS: [&str; 6] = [
    EVE_CORPROLE,
    EVE_ALLIANCENAME,
    EVE_ALLIANCEID,
    EVE_STATIONNAME,
    EVE_STATIONID,
    EVE_WARFACTIONID,
];

/// Every IGB header, in the order the IGB documents them.
pub const ALL: [&str; 20] = [
    EVE_TRUSTED,
    EVE_SERVERIP,
    EVE_CHARNAME,
    EVE_CHARID,
    EVE_CORPNAME,
    EVE_CORPID,
    EVE_REGIONNAME,
    EVE_CONSTELLATIONNAME,
    EVE_SOLARSYSTEMID,
    EVE_SOLARSYSTEMNAME,
    EVE_SHIPID,
    EVE_SHIPNAME,
    EVE_SHIPTYPEID,
    EVE_SHIPTYPENAME,
    EVE_CORPROLE,
    EVE_ALLIANCENAME,
    EVE_ALLIANCEID,
    EVE_STATIONNAME,
    EVE_STATIONID,
    EVE_WARFACTIONID,
];

/// Returns the part of an IGB header name after the `EVE-` prefix.
///
/// ```
/// use igb_headers::headers;
///
/// assert_eq!(headers::word(headers::EVE_CHARID), Some("CHARID"));
/// assert_eq!(headers::word("User-Agent"), None);
/// ```
pub fn word(name: &str) -> Option<&str> {
    name.strip_prefix(EVE_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_trust_flag_then_trusted_then_optional() {
        let mut expected = vec![EVE_TRUSTED];
        expected.extend(TRUSTED_FIELDS);
        expected.extend(OPTIONAL_FIELDS);

        assert_eq!(ALL.to_vec(), expected);
    }

    #[test]
    fn every_header_has_a_word() {
        for name in ALL {
            let word = word(name).expect("EVE- prefix");
            assert!(!word.is_empty());
            assert!(!word.contains('-'));
        }
    }
}
