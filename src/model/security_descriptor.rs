use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const OWNER_TAG: &str = "owner";
pub const GROUP_TAG: &str = "group";
pub const DACL_TAG: &str = "dacl";

/// Textual form of a file's security descriptor.
///
/// `owner` and `group` are string SIDs. `dacl` holds the full SDDL text of the
/// descriptor (owner, group and DACL sections), which is what gets applied on
/// restore.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SecurityDescriptor {
    pub owner: String,
    pub group: String,
    pub dacl: String,
}

impl SecurityDescriptor {
    pub fn new(owner: String, group: String, dacl: String) -> Self {
        Self { owner, group, dacl }
    }

    pub fn is_complete(&self) -> bool {
        !self.owner.is_empty() && !self.group.is_empty() && !self.dacl.is_empty()
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        BTreeMap::from([
            (OWNER_TAG.to_string(), self.owner),
            (GROUP_TAG.to_string(), self.group),
            (DACL_TAG.to_string(), self.dacl),
        ])
    }

    pub fn from_map(map: &BTreeMap<String, String>) -> Option<Self> {
        Some(Self {
            owner: map.get(OWNER_TAG)?.clone(),
            group: map.get(GROUP_TAG)?.clone(),
            dacl: map.get(DACL_TAG)?.clone(),
        })
    }
}
