use dungeon_gen::{DungeonPlan, Materializer};

/// Materializer double that accumulates instead of replacing, so a missing
/// clear() shows up as residue from an earlier plan.
#[derive(Default)]
pub struct RecordingMaterializer {
    pub clear_calls: u32,
    /// Room ids currently instantiated in the fake scene.
    pub live_rooms: Vec<u32>,
    /// Count of floor/wall boxes currently instantiated.
    pub live_footprints: usize,
}

impl Materializer for RecordingMaterializer {
    fn clear(&mut self) {
        self.clear_calls += 1;
        self.live_rooms.clear();
        self.live_footprints = 0;
    }

    fn materialize(&mut self, plan: &DungeonPlan) {
        self.live_rooms.extend(plan.rooms.iter().map(|r| r.id));
        // one floor and four walls per room, one floor per corridor segment
        self.live_footprints += plan.rooms.len() * 5;
        self.live_footprints += plan
            .corridors
            .iter()
            .map(|c| c.segments.len())
            .sum::<usize>();
    }
}
