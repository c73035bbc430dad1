use dungeon_gen::testutil::{assert_approx, bare_config, rng};
use dungeon_gen::{
    DecorationKind, DungeonConfig, DungeonStyle, StyleCatalog, generate_dungeon,
    generate_with_seed,
};
use rand::RngCore;

/// Always lands on the midpoint of a uniform float range: the high bit puts
/// the sampled mantissa at exactly one half.
struct MidpointRng;

impl RngCore for MidpointRng {
    fn next_u32(&mut self) -> u32 {
        1 << 31
    }

    fn next_u64(&mut self) -> u64 {
        1 << 63
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }
}

#[test]
fn same_seed_yields_the_same_plan() {
    let config = DungeonConfig::default();
    let catalog = StyleCatalog::builtin();
    let a = generate_with_seed(&config, &catalog, 404).unwrap();
    let b = generate_with_seed(&config, &catalog, 404).unwrap();
    assert_eq!(a, b);
}

#[test]
fn different_seeds_yield_different_plans() {
    let config = DungeonConfig::default();
    let catalog = StyleCatalog::builtin();
    let a = generate_with_seed(&config, &catalog, 1).unwrap();
    let b = generate_with_seed(&config, &catalog, 2).unwrap();
    assert_ne!(a, b);
}

#[test]
fn corridor_count_tracks_accepted_rooms() {
    let catalog = StyleCatalog::builtin();
    for seed in 0..10 {
        let plan = generate_with_seed(&DungeonConfig::default(), &catalog, seed).unwrap();
        assert_eq!(plan.corridors.len(), plan.rooms.len().saturating_sub(1));
    }
}

#[test]
fn starvation_is_counted_not_erred() {
    // Rooms of edge 20 plus margins: a 100x100 area cannot take 20 of them.
    let config = DungeonConfig {
        room_count: 20,
        room_min_size: 20.0,
        room_max_size: 20.0,
        ..DungeonConfig::default()
    };
    let plan = generate_with_seed(&config, &StyleCatalog::builtin(), 8).unwrap();
    assert!(plan.rooms_dropped > 0);
    assert_eq!(
        plan.rooms.len() + plan.rooms_dropped as usize,
        config.room_count as usize
    );
}

#[test]
fn every_room_gets_its_torch_ring() {
    let config = DungeonConfig {
        add_torches: true,
        ..bare_config()
    };
    let plan = generate_with_seed(&config, &StyleCatalog::builtin(), 31).unwrap();
    assert!(!plan.rooms.is_empty());
    for room in &plan.rooms {
        let torches = plan
            .decorations
            .iter()
            .filter(|d| d.room_id == room.id && matches!(d.kind, DecorationKind::Torch { .. }))
            .count();
        assert_eq!(torches, 4, "room {} torch count", room.id);
    }
}

#[test]
fn plan_colors_come_from_the_catalog() {
    let catalog = StyleCatalog::builtin();
    for style in DungeonStyle::ALL {
        let config = DungeonConfig {
            style,
            ..DungeonConfig::default()
        };
        let plan = generate_with_seed(&config, &catalog, 12).unwrap();
        assert_eq!(plan.style, style);
        assert_eq!(plan.colors, catalog.colors_for(style));
    }
}

#[test]
fn inverted_size_range_fails_fast() {
    let config = DungeonConfig {
        room_min_size: 9.0,
        room_max_size: 5.0,
        ..DungeonConfig::default()
    };
    let result = generate_dungeon(&config, &StyleCatalog::builtin(), &mut rng(1));
    assert!(result.is_err());
}

#[test]
fn single_fixed_size_room_at_the_area_center() {
    // An rng that always returns the middle of its range pins the one
    // 6x6 room to the center of the placement area.
    let config = DungeonConfig {
        room_count: 1,
        room_min_size: 6.0,
        room_max_size: 6.0,
        add_pillars: true,
        ..bare_config()
    };
    let plan = generate_dungeon(&config, &StyleCatalog::builtin(), &mut MidpointRng).unwrap();

    assert_eq!(plan.rooms.len(), 1);
    let room = &plan.rooms[0];
    assert_eq!(room.width, 6.0);
    assert_eq!(room.depth, 6.0);
    assert_approx(room.x, 0.0, 0.01, "room center x");
    assert_approx(room.z, 0.0, 0.01, "room center z");

    assert!(plan.corridors.is_empty());
    // 6 is below the pillar threshold of 8, so the toggle places nothing
    assert!(plan.decorations.is_empty());
    assert_eq!(plan.rooms_dropped, 0);
}

#[test]
fn wall_height_flows_through_to_footprints() {
    let config = DungeonConfig {
        wall_height: 7.0,
        ..bare_config()
    };
    let plan = generate_with_seed(&config, &StyleCatalog::builtin(), 2).unwrap();
    for room in &plan.rooms {
        for wall in room.wall_footprints(plan.wall_height) {
            assert_eq!(wall.size.y, 7.0);
        }
    }
}
