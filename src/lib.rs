pub mod dungeongen;
pub mod export;
pub mod materialize;
pub mod model;
pub mod testutil;

pub use dungeongen::{ConfigError, DungeonConfig, generate_dungeon, generate_with_seed};
pub use materialize::{DungeonHandle, Materializer};
pub use model::{
    Corridor, Decoration, DecorationKind, DungeonPlan, DungeonStyle, Room, Segment, StyleCatalog,
    StyleColors,
};
