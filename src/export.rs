use std::io::{self, Write};

use crate::model::DungeonPlan;

/// Write a plan as pretty-printed JSON to the given sink, for host tooling
/// that wants to inspect or archive a generated layout. Never called from
/// the generation path.
pub fn write_plan_json(plan: &DungeonPlan, writer: impl Write) -> io::Result<()> {
    serde_json::to_writer_pretty(writer, plan)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeongen::{DungeonConfig, generate_with_seed};
    use crate::model::StyleCatalog;

    #[test]
    fn exported_plan_round_trips() {
        let plan = generate_with_seed(&DungeonConfig::default(), &StyleCatalog::builtin(), 21)
            .expect("default config generates");

        let mut buffer = Vec::new();
        write_plan_json(&plan, &mut buffer).expect("write to a Vec never fails");

        let restored: DungeonPlan =
            serde_json::from_slice(&buffer).expect("exported JSON deserializes");
        assert_eq!(restored, plan);
    }
}
