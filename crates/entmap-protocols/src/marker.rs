//! Marker kinds recognized during discovery.

use serde::{Deserialize, Serialize};

/// A named tag attached to a type signaling eligibility for discovery.
///
/// Two kinds are recognized. A scan combines the requested kinds with OR:
/// a type qualifies when it carries at least one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    /// Generic persistence-entity marker.
    Persistence,
    /// Framework-specific domain-entity marker.
    Domain,
}

impl MarkerKind {
    /// All recognized marker kinds, in a fixed order.
    pub const ALL: [MarkerKind; 2] = [MarkerKind::Persistence, MarkerKind::Domain];

    /// Stable string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkerKind::Persistence => "persistence",
            MarkerKind::Domain => "domain",
        }
    }
}

impl std::fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
