use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::dungeongen::DungeonConfig;

/// Seeded RNG for reproducible tests.
pub fn rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Config with every feature toggle off; tests enable only what they probe.
pub fn bare_config() -> DungeonConfig {
    DungeonConfig {
        add_torches: false,
        add_pillars: false,
        add_doorways: false,
        add_treasure: false,
        ..DungeonConfig::default()
    }
}

/// Assert a float is approximately equal, with a named context message.
pub fn assert_approx(actual: f64, expected: f64, tolerance: f64, msg: &str) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "{msg}: expected ~{expected} (+-{tolerance}), got {actual}"
    );
}
