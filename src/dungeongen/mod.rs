pub mod config;
pub mod decorations;
pub mod layout;

use rand::RngCore;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::model::{DungeonPlan, StyleCatalog};

pub use config::{ConfigError, DungeonConfig};

/// Generate a complete dungeon plan: packed rooms, the corridor chain,
/// decorations, and resolved style colors. All randomness comes from the
/// caller's `rng`; seeding it makes the whole call reproducible.
pub fn generate_dungeon(
    config: &DungeonConfig,
    catalog: &StyleCatalog,
    rng: &mut dyn RngCore,
) -> Result<DungeonPlan, ConfigError> {
    config.validate()?;

    let (rooms, rooms_dropped) = layout::place_rooms(config, rng);
    if rooms_dropped > 0 {
        tracing::warn!(
            requested = config.room_count,
            placed = rooms.len(),
            dropped = rooms_dropped,
            "room placement starved; plan holds fewer rooms than requested"
        );
    }

    let corridors = layout::connect_rooms(&rooms, config.corridor_width);
    let decorations = decorations::plan_decorations(&rooms, config, rng);

    tracing::debug!(
        style = ?config.style,
        rooms = rooms.len(),
        corridors = corridors.len(),
        decorations = decorations.len(),
        "dungeon plan assembled"
    );

    Ok(DungeonPlan {
        style: config.style,
        colors: catalog.colors_for(config.style),
        wall_height: config.wall_height,
        rooms,
        corridors,
        decorations,
        rooms_dropped,
    })
}

/// Generate with a `SmallRng` seeded from `seed`, for reproducible plans.
pub fn generate_with_seed(
    config: &DungeonConfig,
    catalog: &StyleCatalog,
    seed: u64,
) -> Result<DungeonPlan, ConfigError> {
    let mut rng = SmallRng::seed_from_u64(seed);
    generate_dungeon(config, catalog, &mut rng)
}
