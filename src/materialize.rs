use rand::RngCore;

use crate::dungeongen::{self, ConfigError, DungeonConfig};
use crate::model::{DungeonPlan, StyleCatalog};

/// Host-side scene backend, one implementation per target engine. The core
/// never instantiates engine objects itself; it hands over declarative
/// footprints and parameters through this boundary.
pub trait Materializer {
    /// Remove every piece of content previously instantiated for this
    /// handle's container. Must be idempotent: clearing an empty scene is
    /// a no-op.
    fn clear(&mut self);

    /// Instantiate the plan's geometry under this handle's container.
    fn materialize(&mut self, plan: &DungeonPlan);
}

/// Owns a materializer plus the current plan, keeping at most one plan
/// live. Regeneration clears the scene before materializing the
/// replacement, so content never accumulates across calls.
pub struct DungeonHandle<M: Materializer> {
    materializer: M,
    plan: Option<DungeonPlan>,
}

impl<M: Materializer> DungeonHandle<M> {
    pub fn new(materializer: M) -> Self {
        Self {
            materializer,
            plan: None,
        }
    }

    /// The live plan, if one has been generated and not cleared.
    pub fn plan(&self) -> Option<&DungeonPlan> {
        self.plan.as_ref()
    }

    pub fn materializer(&self) -> &M {
        &self.materializer
    }

    /// Replace the live plan wholesale: validate, clear the scene, generate,
    /// materialize, store. An invalid config fails before anything is
    /// cleared, leaving the previous plan untouched.
    pub fn regenerate(
        &mut self,
        config: &DungeonConfig,
        catalog: &StyleCatalog,
        rng: &mut dyn RngCore,
    ) -> Result<&DungeonPlan, ConfigError> {
        config.validate()?;

        self.materializer.clear();
        let plan = dungeongen::generate_dungeon(config, catalog, rng)?;
        self.materializer.materialize(&plan);
        Ok(self.plan.insert(plan))
    }

    /// Drop the live plan and its materialized content. A no-op when
    /// nothing is live.
    pub fn clear(&mut self) {
        self.materializer.clear();
        self.plan = None;
    }

    pub fn into_inner(self) -> M {
        self.materializer
    }
}
