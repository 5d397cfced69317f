//! TransformPestleToPortersHandler - Command handler for the PESTLE → Porter's bridge.

use crate::domain::bridge::{BridgeEnhancement, PestlePortersBridge};
use crate::domain::framework::PestleOutput;

/// Command to reorganize PESTLE factors as competitive-force evidence.
#[derive(Debug, Clone, Default)]
pub struct TransformPestleToPortersCommand {
    pub pestle: PestleOutput,
}

/// Result of the PESTLE → Porter's bridge.
pub type TransformPestleToPortersResult = BridgeEnhancement;

/// Handler for the PESTLE → Porter's bridge.
#[derive(Debug, Clone, Default)]
pub struct TransformPestleToPortersHandler;

impl TransformPestleToPortersHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: TransformPestleToPortersCommand) -> TransformPestleToPortersResult {
        let enhancement = PestlePortersBridge::transform(&cmd.pestle);

        tracing::debug!(
            factors = cmd.pestle.factors.len(),
            regulatory_barriers = enhancement.regulatory_barriers.len(),
            buyer_power_indicators = enhancement.buyer_power_indicators.len(),
            substitute_enablers = enhancement.substitute_enablers.len(),
            supplier_power_factors = enhancement.supplier_power_factors.len(),
            growth_signals = enhancement.growth_signals.len(),
            "PESTLE to Porter's bridge complete"
        );

        enhancement
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_pestle_yields_empty_enhancement() {
        let handler = TransformPestleToPortersHandler::new();

        let result = handler.handle(TransformPestleToPortersCommand::default());

        assert_eq!(result, BridgeEnhancement::default());
    }

    #[test]
    fn legal_license_becomes_regulatory_barrier() {
        let pestle: PestleOutput = serde_json::from_value(json!({
            "scope": "UAE retail",
            "factors": {
                "legal": [{
                    "factor": "DED retail license required",
                    "impact": "threat",
                    "magnitude": "high"
                }]
            }
        }))
        .unwrap();
        let handler = TransformPestleToPortersHandler::new();

        let result = handler.handle(TransformPestleToPortersCommand { pestle });

        assert_eq!(result.regulatory_barriers.len(), 1);
        assert_eq!(result.pestle_scope.as_deref(), Some("UAE retail"));
    }
}
