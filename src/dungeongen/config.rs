use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::DungeonStyle;

use super::layout::PLACEMENT_HALF_EXTENT;

/// Configuration for one dungeon generation call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DungeonConfig {
    /// Visual style resolved against the style catalog.
    pub style: DungeonStyle,
    /// Target room count; placement starvation may deliver fewer.
    pub room_count: u32,
    /// Minimum room edge length.
    pub room_min_size: f64,
    /// Maximum room edge length.
    pub room_max_size: f64,
    /// Corridor segment width.
    pub corridor_width: f64,
    /// Room wall height.
    pub wall_height: f64,
    pub add_torches: bool,
    pub add_pillars: bool,
    /// Carried for the host configuration surface; produces no props.
    pub add_doorways: bool,
    pub add_treasure: bool,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            style: DungeonStyle::Stone,
            room_count: 8,
            room_min_size: 6.0,
            room_max_size: 12.0,
            corridor_width: 3.0,
            wall_height: 4.0,
            add_torches: true,
            add_pillars: true,
            add_doorways: true,
            add_treasure: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("room size range is inverted: min {min} exceeds max {max}")]
    InvertedRoomSize { min: f64, max: f64 },
    #[error("room max size {size} exceeds the placement area edge of {limit}")]
    RoomTooLarge { size: f64, limit: f64 },
}

impl DungeonConfig {
    /// Reject configurations the sampler cannot honor. `room_min_size ==
    /// room_max_size` is legal and samples that size exactly.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.room_min_size > self.room_max_size {
            return Err(ConfigError::InvertedRoomSize {
                min: self.room_min_size,
                max: self.room_max_size,
            });
        }
        let limit = 2.0 * PLACEMENT_HALF_EXTENT;
        if self.room_max_size > limit {
            return Err(ConfigError::RoomTooLarge {
                size: self.room_max_size,
                limit,
            });
        }
        Ok(())
    }
}
