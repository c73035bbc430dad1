use serde::{Deserialize, Serialize};

use super::geometry::{Footprint, Orientation, Rect, Vec3};
use super::style::{Color, DungeonStyle, StyleColors};

/// Floor slabs sit this thick, with their top face at y = 0.
pub const FLOOR_THICKNESS: f64 = 0.5;

/// Wall slabs are this thick; distinct from the placement margin.
pub const WALL_THICKNESS: f64 = 0.5;

// ---------------------------------------------------------------------------
// Rooms
// ---------------------------------------------------------------------------

/// An accepted rectangular room. `id` is its acceptance order within one
/// generation call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: u32,
    /// Center on the ground plane; y is implicitly 0.
    pub x: f64,
    pub z: f64,
    pub width: f64,
    pub depth: f64,
}

impl Room {
    pub fn center(&self) -> Vec3 {
        Vec3::new(self.x, 0.0, self.z)
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.x, self.z, self.width, self.depth)
    }

    /// One floor slab under the whole room.
    pub fn floor_footprint(&self) -> Footprint {
        Footprint {
            center: Vec3::new(self.x, -FLOOR_THICKNESS / 2.0, self.z),
            size: Vec3::new(self.width, FLOOR_THICKNESS, self.depth),
        }
    }

    /// Four perimeter walls in north/south/east/west order.
    pub fn wall_footprints(&self, wall_height: f64) -> [Footprint; 4] {
        let mid_y = wall_height / 2.0;
        let across_x = Vec3::new(self.width, wall_height, WALL_THICKNESS);
        let across_z = Vec3::new(WALL_THICKNESS, wall_height, self.depth);
        [
            Footprint {
                center: Vec3::new(self.x, mid_y, self.z + self.depth / 2.0),
                size: across_x,
            },
            Footprint {
                center: Vec3::new(self.x, mid_y, self.z - self.depth / 2.0),
                size: across_x,
            },
            Footprint {
                center: Vec3::new(self.x + self.width / 2.0, mid_y, self.z),
                size: across_z,
            },
            Footprint {
                center: Vec3::new(self.x - self.width / 2.0, mid_y, self.z),
                size: across_z,
            },
        ]
    }
}

// ---------------------------------------------------------------------------
// Corridors
// ---------------------------------------------------------------------------

/// One axis-aligned corridor piece. `length` is the raw center-to-center
/// span along its axis; the floor footprint is extended by `width` so it
/// reaches under the room floors it joins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Center on the ground plane.
    pub x: f64,
    pub z: f64,
    pub length: f64,
    pub orientation: Orientation,
    pub width: f64,
}

impl Segment {
    pub fn floor_footprint(&self) -> Footprint {
        let span = self.length + self.width;
        let size = match self.orientation {
            Orientation::Horizontal => Vec3::new(span, FLOOR_THICKNESS, self.width),
            Orientation::Vertical => Vec3::new(self.width, FLOOR_THICKNESS, span),
        };
        Footprint {
            center: Vec3::new(self.x, -FLOOR_THICKNESS / 2.0, self.z),
            size,
        }
    }
}

/// An L-shaped connector between two room centers: 0, 1, or 2 segments,
/// horizontal leg first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Corridor {
    pub segments: Vec<Segment>,
}

// ---------------------------------------------------------------------------
// Decorations
// ---------------------------------------------------------------------------

/// Point-light parameters carried by a torch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TorchLight {
    pub color: Color,
    pub intensity: f32,
    pub range: f32,
}

/// One of the two fixed sub-shapes of a treasure chest, relative to the
/// decoration position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChestPart {
    pub offset: Vec3,
    pub size: Vec3,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DecorationKind {
    Pillar { height: f64, radius: f64 },
    Torch { light: TorchLight },
    TreasureChest { body: ChestPart, lid: ChestPart },
}

/// A kind-tagged prop placed relative to a room.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Decoration {
    /// The room this prop belongs to, for scene-graph grouping.
    pub room_id: u32,
    pub position: Vec3,
    pub kind: DecorationKind,
}

// ---------------------------------------------------------------------------
// Plan
// ---------------------------------------------------------------------------

/// Immutable aggregate output of one generation call. Regeneration replaces
/// the whole plan; it is never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DungeonPlan {
    pub style: DungeonStyle,
    pub colors: StyleColors,
    pub wall_height: f64,
    /// Rooms in acceptance order; a room's index equals its id.
    pub rooms: Vec<Room>,
    /// One corridor per consecutive room pair, in the same order.
    pub corridors: Vec<Corridor>,
    /// Props across all rooms, flattened.
    pub decorations: Vec<Decoration>,
    /// Room slots that exhausted their placement attempts.
    pub rooms_dropped: u32,
}
