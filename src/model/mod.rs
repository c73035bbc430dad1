pub mod geometry;
pub mod plan;
pub mod style;

pub use geometry::{Footprint, Orientation, Rect, Vec3};
pub use plan::{
    ChestPart, Corridor, Decoration, DecorationKind, DungeonPlan, Room, Segment, TorchLight,
};
pub use style::{Color, DungeonStyle, StyleCatalog, StyleColors, StyleEntry};
