use crate::roles::CorpRole;

/// The decoded IGB header set of one request.
///
/// Trusted-only fields keep their zero defaults unless `trusted` is true.
/// The derived flags are methods over the decoded fields and never consult
/// the original headers.
///
/// `IgbHeaders::default()` is the fully defaulted record: not an IGB
/// request, not trusted, no data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IgbHeaders {
    /// Request came from the in-game browser
    pub is_embedded_client: bool,
    /// Player has marked this site as trusted
    pub trusted: bool,
    /// Address of the game server
    pub server_ip: String,
    /// Character name
    pub char_name: String,
    /// Character id
    pub char_id: u64,
    /// Corporation name
    pub corp_name: String,
    /// Corporation id
    pub corp_id: u64,
    /// Current region
    pub region_name: String,
    /// Current constellation
    pub constellation_name: String,
    /// Current solar system id
    pub solar_system_id: u64,
    /// Current solar system name
    pub solar_system_name: String,
    /// Ship item id
    pub ship_id: u64,
    /// Ship name
    pub ship_name: String,
    /// Ship type id
    pub ship_type_id: u64,
    /// Ship type name
    pub ship_type_name: String,
    /// Raw corp role bitmask
    pub corp_role_mask: u64,
    /// Roles decoded from `corp_role_mask`, in role table order
    pub corp_roles: Vec<CorpRole>,
    /// Alliance name, empty if none
    pub alliance_name: String,
    /// Alliance id, 0 if none
    pub alliance_id: u64,
    /// Station name, empty when in space
    pub station_name: String,
    /// Station id, 0 when in space
    pub station_id: u64,
    /// Faction warfare faction id, 0 if not enlisted
    pub war_faction_id: u64,
}

impl IgbHeaders {
    /// Returns true if the character is docked.
    pub fn is_on_station(&self) -> bool {
        !self.station_name.is_empty()
    }

    /// Returns true if the character is enlisted in factional warfare.
    pub fn is_in_faction_warfare(&self) -> bool {
        self.war_faction_id != 0
    }

    /// Returns true if the corporation belongs to an alliance.
    pub fn has_alliance(&self) -> bool {
        !self.alliance_name.is_empty()
    }

    /// Returns true if the character holds at least one known corp role.
    pub fn has_corp_roles(&self) -> bool {
        !self.corp_roles.is_empty()
    }

    /// Returns true if the character holds the role named `name`.
    pub fn has_role(&self, name: &str) -> bool {
        self.corp_roles.iter().any(|role| role.name == name)
    }
}
