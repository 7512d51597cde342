// Instance records as served to clients

use std::collections::BTreeMap;
use std::fmt;
use serde::Serialize;

/// Deployment locality of an instance.
///
/// Variant order is alphabetical so that status maps serialize with sorted keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Eu,
    Us,
}

impl Region {
    pub const ALL: [Region; 2] = [Region::Eu, Region::Us];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Eu => "eu",
            Region::Us => "us",
        }
    }

    /// Parses the wire value, `None` for anything outside the closed set
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|region| region.as_str() == value)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionStatus {
    Unready,
    Migrating,
    Ready,
}

/// Who owns an instance and how clients refer to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    #[serde(skip)]
    pub tenant: String,
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstanceStatus {
    pub regions: BTreeMap<Region, RegionStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Connection {
    pub endpoint: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instance {
    #[serde(flatten)]
    pub identity: Identity,
    pub regions: Vec<Region>,
    pub status: InstanceStatus,
    pub connection: Connection,
}

impl Instance {
    pub fn id(&self) -> u64 {
        self.identity.id
    }

    pub fn name(&self) -> &str {
        &self.identity.name
    }
}
