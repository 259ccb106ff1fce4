use crate::model::security_descriptor::SecurityDescriptor;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SecuritySnapshot {
    pub uuid: Uuid,
    pub path: PathBuf,
    pub captured_at: DateTime<Utc>,
    pub descriptor: SecurityDescriptor,
}

impl SecuritySnapshot {
    pub fn new(path: PathBuf, descriptor: SecurityDescriptor) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            path,
            captured_at: Utc::now(),
            descriptor,
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.json", self.uuid)
    }
}
