use rand::Rng;
use rand::RngCore;

use crate::model::{Corridor, Orientation, Room, Segment};

use super::config::DungeonConfig;

/// Half-extent of the square placement area; rooms pack into [-50, 50] on
/// both ground axes.
pub const PLACEMENT_HALF_EXTENT: f64 = 50.0;

/// Clearance added to every room side before the overlap test.
pub const ROOM_MARGIN: f64 = 3.0;

/// Placement attempts per room slot before the slot is dropped.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 50;

/// Corridor legs at or below this raw length are degenerate slivers and
/// are not emitted.
pub const MIN_SEGMENT_LENGTH: f64 = 0.5;

/// Pack up to `room_count` rooms into the placement area by rejection
/// sampling. Returns the accepted rooms in acceptance order (a room's id is
/// its index) plus the number of slots that starved. Fewer rooms than
/// requested is degraded success, not an error.
pub fn place_rooms(config: &DungeonConfig, rng: &mut dyn RngCore) -> (Vec<Room>, u32) {
    let mut rooms: Vec<Room> = Vec::with_capacity(config.room_count as usize);
    let mut dropped = 0u32;

    for _ in 0..config.room_count {
        let mut placed = false;

        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let width = rng.random_range(config.room_min_size..=config.room_max_size);
            let depth = rng.random_range(config.room_min_size..=config.room_max_size);
            // Sample the minimum corner so the whole room fits in the area.
            let min_x = rng.random_range(-PLACEMENT_HALF_EXTENT..=PLACEMENT_HALF_EXTENT - width);
            let min_z = rng.random_range(-PLACEMENT_HALF_EXTENT..=PLACEMENT_HALF_EXTENT - depth);

            let candidate = Room {
                id: rooms.len() as u32,
                x: min_x + width / 2.0,
                z: min_z + depth / 2.0,
                width,
                depth,
            };

            let expanded = candidate.bounds().expanded(ROOM_MARGIN);
            let overlaps = rooms
                .iter()
                .any(|room| expanded.intersects(&room.bounds().expanded(ROOM_MARGIN)));
            if overlaps {
                continue;
            }

            rooms.push(candidate);
            placed = true;
            break;
        }

        if !placed {
            dropped += 1;
        }
    }

    (rooms, dropped)
}

/// Route an axis-first L between two room centers: the horizontal leg runs
/// from `start` to the corner (end.x, start.z), the vertical leg from the
/// corner to `end`. Legs at or below [`MIN_SEGMENT_LENGTH`] are skipped, so
/// the corridor holds 0, 1, or 2 segments. The route does not avoid
/// unrelated rooms.
pub fn route_corridor(start: (f64, f64), end: (f64, f64), corridor_width: f64) -> Corridor {
    let (start_x, start_z) = start;
    let (end_x, end_z) = end;
    let mut segments = Vec::with_capacity(2);

    let h_length = (end_x - start_x).abs();
    if h_length > MIN_SEGMENT_LENGTH {
        segments.push(Segment {
            x: (start_x + end_x) / 2.0,
            z: start_z,
            length: h_length,
            orientation: Orientation::Horizontal,
            width: corridor_width,
        });
    }

    let v_length = (end_z - start_z).abs();
    if v_length > MIN_SEGMENT_LENGTH {
        segments.push(Segment {
            x: end_x,
            z: (start_z + end_z) / 2.0,
            length: v_length,
            orientation: Orientation::Vertical,
            width: corridor_width,
        });
    }

    Corridor { segments }
}

/// Chain consecutive rooms in acceptance order: room 0 to room 1, room 1 to
/// room 2, and so on. Not a spanning-tree over all pairs.
pub fn connect_rooms(rooms: &[Room], corridor_width: f64) -> Vec<Corridor> {
    rooms
        .windows(2)
        .map(|pair| {
            route_corridor(
                (pair[0].x, pair[0].z),
                (pair[1].x, pair[1].z),
                corridor_width,
            )
        })
        .collect()
}
