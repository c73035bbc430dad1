use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Styles
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DungeonStyle {
    Stone,
    Crypt,
    Mine,
    Temple,
    Sewer,
}

impl DungeonStyle {
    pub const ALL: [DungeonStyle; 5] = [
        DungeonStyle::Stone,
        DungeonStyle::Crypt,
        DungeonStyle::Mine,
        DungeonStyle::Temple,
        DungeonStyle::Sewer,
    ];
}

/// Linear RGB color triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub const GRAY: Color = Color::rgb(0.5, 0.5, 0.5);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
}

/// Resolved palette for one style: floor, wall, and accent surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleColors {
    pub floor: Color,
    pub wall: Color,
    pub accent: Color,
}

/// Palette used when a style has no catalog entry.
pub const NEUTRAL_COLORS: StyleColors = StyleColors {
    floor: Color::GRAY,
    wall: Color::GRAY,
    accent: Color::WHITE,
};

#[derive(Debug, Clone)]
pub struct StyleEntry {
    pub colors: StyleColors,
    pub description: String,
}

/// Associative style table. Lookups never fail: a style without an entry
/// resolves to [`NEUTRAL_COLORS`] and an empty description.
#[derive(Debug, Clone)]
pub struct StyleCatalog {
    entries: HashMap<DungeonStyle, StyleEntry>,
}

impl StyleCatalog {
    /// An empty catalog; every lookup falls back to the neutral palette.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// The five built-in styles.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.insert(
            DungeonStyle::Stone,
            entry(
                (0.3, 0.3, 0.32),
                (0.4, 0.4, 0.42),
                (0.5, 0.5, 0.5),
                "Classic stone dungeon with cobblestone walls",
            ),
        );
        catalog.insert(
            DungeonStyle::Crypt,
            entry(
                (0.2, 0.2, 0.22),
                (0.25, 0.25, 0.28),
                (0.8, 0.8, 0.7),
                "Dark crypt with bone decorations",
            ),
        );
        catalog.insert(
            DungeonStyle::Mine,
            entry(
                (0.35, 0.25, 0.15),
                (0.4, 0.3, 0.2),
                (0.6, 0.45, 0.25),
                "Abandoned mine with wooden supports",
            ),
        );
        catalog.insert(
            DungeonStyle::Temple,
            entry(
                (0.6, 0.55, 0.45),
                (0.5, 0.45, 0.35),
                (0.9, 0.75, 0.3),
                "Ancient temple with golden accents",
            ),
        );
        catalog.insert(
            DungeonStyle::Sewer,
            entry(
                (0.25, 0.3, 0.25),
                (0.3, 0.35, 0.3),
                (0.4, 0.5, 0.4),
                "Underground sewer with water channels",
            ),
        );
        catalog
    }

    pub fn insert(&mut self, style: DungeonStyle, entry: StyleEntry) {
        self.entries.insert(style, entry);
    }

    pub fn colors_for(&self, style: DungeonStyle) -> StyleColors {
        self.entries
            .get(&style)
            .map(|e| e.colors)
            .unwrap_or(NEUTRAL_COLORS)
    }

    pub fn description_for(&self, style: DungeonStyle) -> &str {
        self.entries
            .get(&style)
            .map(|e| e.description.as_str())
            .unwrap_or("")
    }
}

impl Default for StyleCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn entry(
    floor: (f32, f32, f32),
    wall: (f32, f32, f32),
    accent: (f32, f32, f32),
    description: &str,
) -> StyleEntry {
    StyleEntry {
        colors: StyleColors {
            floor: Color::rgb(floor.0, floor.1, floor.2),
            wall: Color::rgb(wall.0, wall.1, wall.2),
            accent: Color::rgb(accent.0, accent.1, accent.2),
        },
        description: description.to_string(),
    }
}
