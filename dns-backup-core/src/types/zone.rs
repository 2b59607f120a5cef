//! Zone identity as used in storage keys and result payloads.

use serde::{Deserialize, Serialize};

use dns_backup_provider::ProviderZone;

/// A hosted zone with normalized identifier and name.
///
/// `id` has any path prefix removed (`/hostedzone/Z1` becomes `Z1`) and
/// `name` has its trailing root dots removed. Several zones may share a
/// name; ids are unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
}

impl Zone {
    /// `"<name> (ID: <id>)"`, as reported in backup results and progress logs.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} (ID: {})", self.name, self.id)
    }
}

impl From<&ProviderZone> for Zone {
    fn from(zone: &ProviderZone) -> Self {
        let id = zone.id.rsplit_once('/').map_or(zone.id.as_str(), |(_, id)| id);
        Self {
            id: id.to_string(),
            name: zone.name.trim_end_matches('.').to_string(),
        }
    }
}
