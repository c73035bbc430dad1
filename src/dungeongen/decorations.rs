use rand::Rng;
use rand::RngCore;

use crate::model::{ChestPart, Color, Decoration, DecorationKind, Room, TorchLight, Vec3};

use super::config::DungeonConfig;

/// Corner pillars sit this far inside each wall.
const PILLAR_INSET: f64 = 1.5;
const PILLAR_RADIUS: f64 = 0.4;
/// Both room edges must exceed this length for the room to take pillars.
const PILLAR_MIN_ROOM_EDGE: f64 = 8.0;

const TORCH_RING_RADIUS: f64 = 3.0;
const TORCH_ELEVATION: f64 = 2.5;
const TORCH_COLOR: Color = Color::rgb(1.0, 0.7, 0.4);
const TORCH_INTENSITY: f32 = 1.5;
const TORCH_RANGE: f32 = 8.0;

/// Chance that a room holds a treasure chest.
const TREASURE_CHANCE: f64 = 0.6;
/// Chest offset from the room center, per ground axis.
const TREASURE_JITTER: f64 = 2.0;
const CHEST_WOOD: Color = Color::rgb(0.5, 0.35, 0.15);
const CHEST_GOLD: Color = Color::rgb(1.0, 0.85, 0.2);

/// Place props for every room, independently per room. Room order does not
/// affect which props a given room receives, only the rng draw sequence.
pub fn plan_decorations(
    rooms: &[Room],
    config: &DungeonConfig,
    rng: &mut dyn RngCore,
) -> Vec<Decoration> {
    let mut decorations = Vec::new();

    for room in rooms {
        if config.add_pillars {
            place_pillars(room, config.wall_height, &mut decorations);
        }
        if config.add_torches {
            place_torches(room, &mut decorations);
        }
        if config.add_treasure {
            place_treasure(room, rng, &mut decorations);
        }
    }

    decorations
}

/// Four corner pillars, or none at all for rooms below the size threshold.
fn place_pillars(room: &Room, wall_height: f64, out: &mut Vec<Decoration>) {
    if room.width <= PILLAR_MIN_ROOM_EDGE || room.depth <= PILLAR_MIN_ROOM_EDGE {
        return;
    }

    let dx = room.width / 2.0 - PILLAR_INSET;
    let dz = room.depth / 2.0 - PILLAR_INSET;
    for (sx, sz) in [(1.0, 1.0), (-1.0, 1.0), (1.0, -1.0), (-1.0, -1.0)] {
        out.push(Decoration {
            room_id: room.id,
            position: Vec3::new(room.x + sx * dx, 0.0, room.z + sz * dz),
            kind: DecorationKind::Pillar {
                height: wall_height / 2.0,
                radius: PILLAR_RADIUS,
            },
        });
    }
}

/// Four torches on a fixed ring around the room center, one per quarter
/// turn, regardless of room size.
fn place_torches(room: &Room, out: &mut Vec<Decoration>) {
    for quarter in 0..4u32 {
        let angle = f64::from(quarter) * 90.0_f64.to_radians();
        out.push(Decoration {
            room_id: room.id,
            position: Vec3::new(
                room.x + angle.cos() * TORCH_RING_RADIUS,
                TORCH_ELEVATION,
                room.z + angle.sin() * TORCH_RING_RADIUS,
            ),
            kind: DecorationKind::Torch {
                light: TorchLight {
                    color: TORCH_COLOR,
                    intensity: TORCH_INTENSITY,
                    range: TORCH_RANGE,
                },
            },
        });
    }
}

/// At most one chest per room. The body and lid travel together as one
/// decoration.
fn place_treasure(room: &Room, rng: &mut dyn RngCore, out: &mut Vec<Decoration>) {
    if rng.random_range(0.0..1.0) >= TREASURE_CHANCE {
        return;
    }

    let dx = rng.random_range(-TREASURE_JITTER..=TREASURE_JITTER);
    let dz = rng.random_range(-TREASURE_JITTER..=TREASURE_JITTER);
    out.push(Decoration {
        room_id: room.id,
        position: Vec3::new(room.x + dx, 0.0, room.z + dz),
        kind: DecorationKind::TreasureChest {
            body: ChestPart {
                offset: Vec3::new(0.0, 0.3, 0.0),
                size: Vec3::new(0.8, 0.5, 0.5),
                color: CHEST_WOOD,
            },
            lid: ChestPart {
                offset: Vec3::new(0.0, 0.6, 0.0),
                size: Vec3::new(0.85, 0.15, 0.55),
                color: CHEST_GOLD,
            },
        },
    });
}
