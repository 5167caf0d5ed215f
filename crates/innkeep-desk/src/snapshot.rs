//! JSON in and out: loading an inventory file, exporting current state.

use std::path::Path;

use innkeep_room::{InventoryConfig, Room, RoomManager};
use serde::{Deserialize, Serialize};

use crate::DeskError;

/// Point-in-time copy of every room, booked or not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventorySnapshot {
    pub rooms: Vec<Room>,
    pub available: usize,
}

impl InventorySnapshot {
    pub fn capture(manager: &RoomManager) -> Self {
        Self {
            rooms: manager.rooms().to_vec(),
            available: manager.available_count(),
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, DeskError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Reads and validates an [`InventoryConfig`] from a JSON file.
pub fn load_inventory(path: impl AsRef<Path>) -> Result<InventoryConfig, DeskError> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path)?;
    let config: InventoryConfig = serde_json::from_str(&data)?;
    config.validate()?;
    tracing::info!(path = %path.display(), rooms = config.rooms.len(), "inventory file read");
    Ok(config)
}
