//! Inventory configuration: which rooms exist and what they cost.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{Room, RoomError, RoomNumber, RoomType};

// ---------------------------------------------------------------------------
// RoomSpec
// ---------------------------------------------------------------------------

/// Static description of one room in the inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomSpec {
    pub room_type: RoomType,
    pub number: RoomNumber,
    pub price_per_day: f64,
}

impl RoomSpec {
    pub fn new(room_type: RoomType, number: u32, price_per_day: f64) -> Self {
        Self {
            room_type,
            number: RoomNumber(number),
            price_per_day,
        }
    }

    /// Builds the available room this spec describes.
    pub fn build(&self) -> Room {
        Room::new(self.room_type, self.price_per_day, self.number)
    }
}

// ---------------------------------------------------------------------------
// InventoryConfig
// ---------------------------------------------------------------------------

/// The fixed room collection a manager is created with.
///
/// Order matters: listings follow the order rooms appear here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryConfig {
    pub rooms: Vec<RoomSpec>,
}

impl Default for InventoryConfig {
    /// Three Single, three Double and three VIP rooms.
    fn default() -> Self {
        Self {
            rooms: vec![
                RoomSpec::new(RoomType::Single, 1, 1525.0),
                RoomSpec::new(RoomType::Single, 3, 1525.0),
                RoomSpec::new(RoomType::Single, 5, 1525.0),
                RoomSpec::new(RoomType::Double, 2, 2500.0),
                RoomSpec::new(RoomType::Double, 4, 2500.0),
                RoomSpec::new(RoomType::Double, 6, 2500.0),
                RoomSpec::new(RoomType::Vip, 8, 4500.0),
                RoomSpec::new(RoomType::Vip, 9, 4500.0),
                RoomSpec::new(RoomType::Vip, 10, 4500.0),
            ],
        }
    }
}

impl InventoryConfig {
    /// Checks that the inventory is non-empty, numbers are unique, and
    /// prices are finite and non-negative.
    pub fn validate(&self) -> Result<(), RoomError> {
        if self.rooms.is_empty() {
            return Err(RoomError::EmptyInventory);
        }
        let mut seen = HashSet::with_capacity(self.rooms.len());
        for spec in &self.rooms {
            if !seen.insert(spec.number) {
                return Err(RoomError::DuplicateRoom(spec.number));
            }
            if !spec.price_per_day.is_finite() || spec.price_per_day < 0.0 {
                return Err(RoomError::InvalidPrice(spec.number));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_inventory_is_valid() {
        let config = InventoryConfig::default();
        assert_eq!(config.rooms.len(), 9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_inventory_has_three_of_each_type() {
        let config = InventoryConfig::default();
        for room_type in [RoomType::Single, RoomType::Double, RoomType::Vip] {
            let count = config
                .rooms
                .iter()
                .filter(|s| s.room_type == room_type)
                .count();
            assert_eq!(count, 3, "{room_type}");
        }
    }

    #[test]
    fn test_validate_rejects_duplicate_numbers() {
        let config = InventoryConfig {
            rooms: vec![
                RoomSpec::new(RoomType::Single, 7, 100.0),
                RoomSpec::new(RoomType::Double, 7, 200.0),
            ],
        };
        assert_eq!(
            config.validate(),
            Err(RoomError::DuplicateRoom(RoomNumber(7)))
        );
    }

    #[test]
    fn test_validate_rejects_bad_prices() {
        for price in [-1.0, f64::NAN, f64::INFINITY] {
            let config = InventoryConfig {
                rooms: vec![RoomSpec::new(RoomType::Single, 1, price)],
            };
            assert_eq!(
                config.validate(),
                Err(RoomError::InvalidPrice(RoomNumber(1)))
            );
        }
    }

    #[test]
    fn test_validate_rejects_empty_inventory() {
        let config = InventoryConfig { rooms: vec![] };
        assert_eq!(config.validate(), Err(RoomError::EmptyInventory));
    }

    #[test]
    fn test_zero_price_is_allowed() {
        let config = InventoryConfig {
            rooms: vec![RoomSpec::new(RoomType::Single, 1, 0.0)],
        };
        assert!(config.validate().is_ok());
    }
}
