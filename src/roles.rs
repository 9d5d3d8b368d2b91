use std::fmt;

/// A corporation role, identified by its bit in the `EVE-CORPROLE` mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CorpRole {
    /// Bitmask value of the role
    pub id: u64,
    /// Human readable label
    pub name: &'static str,
}

impl CorpRole {
    /// Creates a role entry for a table.
    pub const fn new(id: u64, name: &'static str) -> Self {
        Self { id, name }
    }

    /// Returns true if `mask` grants this role.
    pub const fn is_granted_by(&self, mask: u64) -> bool {
        self.id & mask != 0
    }
}

impl fmt::Display for CorpRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// The corporation roles the IGB reports, in declaration order.
pub const CORP_ROLES: &[CorpRole] = &[
    CorpRole::new(1, "Director"),
    CorpRole::new(1 << 7, "Personnel Manager"),
    CorpRole::new(1 << 8, "Accountant"),
    CorpRole::new(1 << 9, "Security Officer"),
    CorpRole::new(1 << 10, "Factory Manager"),
    CorpRole::new(1 << 11, "Station Manager"),
    CorpRole::new(1 << 12, "Auditor"),
    CorpRole::new(1 << 41, "Equipment Config"),
    CorpRole::new(1 << 49, "Can Rent Office"),
    CorpRole::new(1 << 50, "Can Rent Factory Slot"),
    CorpRole::new(1 << 51, "Can Rent Research Slot"),
    CorpRole::new(1 << 52, "Junior Accountant"),
    CorpRole::new(1 << 53, "Starbase Config"),
    CorpRole::new(1 << 54, "Trader"),
    CorpRole::new(1 << 55, "Communications Officer"),
    CorpRole::new(1 << 56, "Contract Manager"),
    CorpRole::new(1 << 57, "Infrastructure Tactical Officer"),
    CorpRole::new(1 << 58, "Starbase Fuel Technician"),
    CorpRole::new(1 << 59, "Fitting Manager"),
];

/// Returns every entry of `table` whose id intersects `mask`, in table order.
///
/// The check is a bitwise intersection, so entries spanning several bits are
/// selected as soon as one of their bits is set.
///
/// # Examples
///
/// ```
/// use igb_headers::{CorpRole, roles_for_mask};
///
/// let table = [
///     CorpRole::new(1, "A"),
///     CorpRole::new(2, "B"),
///     CorpRole::new(4, "C"),
/// ];
///
/// let names: Vec<_> = roles_for_mask(5, &table).iter().map(|r| r.name).collect();
/// assert_eq!(names, ["A", "C"]);
/// assert!(roles_for_mask(0, &table).is_empty());
/// ```
pub fn roles_for_mask(mask: u64, table: &[CorpRole]) -> Vec<CorpRole> {
    table
        .iter()
        .filter(|role| role.is_granted_by(mask))
        .copied()
        .collect()
}
