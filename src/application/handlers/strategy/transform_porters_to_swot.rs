//! TransformPortersToSwotHandler - Command handler for the Porter's → SWOT bridge.

use crate::domain::bridge::{PortersSwotBridge, SwotEnhancement};
use crate::domain::framework::{PestleOutput, PortersOutput};

/// Command to derive SWOT items from Porter's forces, optionally enriched
/// with PESTLE findings.
#[derive(Debug, Clone, Default)]
pub struct TransformPortersToSwotCommand {
    pub porters: PortersOutput,
    pub pestle: Option<PestleOutput>,
}

/// Result of the Porter's → SWOT bridge.
pub type TransformPortersToSwotResult = SwotEnhancement;

/// Handler for the Porter's → SWOT bridge.
#[derive(Debug, Clone, Default)]
pub struct TransformPortersToSwotHandler;

impl TransformPortersToSwotHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: TransformPortersToSwotCommand) -> TransformPortersToSwotResult {
        for (force, assessment) in cmd.porters.forces.present() {
            if let Some(score) = assessment.overridden_score() {
                tracing::warn!(
                    force = force.key(),
                    score,
                    level = %assessment.level(),
                    "Force score and level disagree, using level"
                );
            }
        }

        let enhancement = PortersSwotBridge::transform(&cmd.porters, cmd.pestle.as_ref());

        tracing::debug!(
            forces = cmd.porters.forces.present().count(),
            with_pestle = cmd.pestle.is_some(),
            opportunities = enhancement.derived_opportunities.len(),
            threats = enhancement.derived_threats.len(),
            "Porter's to SWOT bridge complete"
        );

        enhancement
    }
}
