//! AnalyzeStrategyHandler - Runs the full inference pipeline in one call.
//!
//! Both bridges, signal extraction, the extractor's platform gate and the
//! strategy profile. The profile's gate is evaluated independently of the
//! extractor's, so the two answers may differ.

use serde::Serialize;

use crate::domain::bridge::{BridgeEnhancement, SwotEnhancement};
use crate::domain::framework::{BusinessContext, Insight, PestleOutput, PortersOutput};
use crate::domain::profile::StrategyProfile;
use crate::domain::signals::StrategySignals;

use super::build_strategy_profile::BuildStrategyProfileHandler;
use super::extract_signals::{ExtractSignalsCommand, ExtractSignalsHandler};
use super::transform_pestle_to_porters::{
    TransformPestleToPortersCommand, TransformPestleToPortersHandler,
};
use super::transform_porters_to_swot::{
    TransformPortersToSwotCommand, TransformPortersToSwotHandler,
};

/// Command carrying every framework output available for a strategy.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeStrategyCommand {
    pub pestle: Option<PestleOutput>,
    pub porters: Option<PortersOutput>,
    pub insights: Vec<Insight>,
    pub business_context: Option<BusinessContext>,
}

/// Combined output of the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeStrategyResult {
    pub pestle_porters: BridgeEnhancement,
    pub porters_swot: SwotEnhancement,
    pub signals: StrategySignals,
    pub extractor_needs_platform: bool,
    pub profile: StrategyProfile,
}

/// Handler for the full pipeline.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeStrategyHandler {
    pestle_porters: TransformPestleToPortersHandler,
    porters_swot: TransformPortersToSwotHandler,
    extract: ExtractSignalsHandler,
    profile: BuildStrategyProfileHandler,
}

impl AnalyzeStrategyHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&self, cmd: AnalyzeStrategyCommand) -> AnalyzeStrategyResult {
        let pestle_porters = self.pestle_porters.handle(TransformPestleToPortersCommand {
            pestle: cmd.pestle.clone().unwrap_or_default(),
        });

        let porters_swot = self.porters_swot.handle(TransformPortersToSwotCommand {
            porters: cmd.porters.unwrap_or_default(),
            pestle: cmd.pestle,
        });

        let extracted = self.extract.handle(ExtractSignalsCommand {
            insights: cmd.insights,
            business_context: cmd.business_context,
        });

        let profile = self.profile.profile_signals(&extracted.signals);

        if extracted.needs_platform != profile.needs_platform {
            tracing::debug!(
                extractor = extracted.needs_platform,
                profile = profile.needs_platform,
                "Platform gates disagree"
            );
        }

        AnalyzeStrategyResult {
            pestle_porters,
            porters_swot,
            signals: extracted.signals,
            extractor_needs_platform: extracted.needs_platform,
            profile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::Archetype;
    use serde_json::json;

    #[test]
    fn empty_command_degrades_to_empty_results() {
        let handler = AnalyzeStrategyHandler::new();

        let result = handler.handle(AnalyzeStrategyCommand::default());

        assert_eq!(result.pestle_porters, BridgeEnhancement::default());
        assert!(result.porters_swot.derived_opportunities.is_empty());
        assert!(result.porters_swot.derived_threats.is_empty());
        assert_eq!(result.signals, StrategySignals::default());
        assert!(!result.extractor_needs_platform);
        assert_eq!(result.profile.archetype, Archetype::Traditional);
    }

    #[test]
    fn pestle_feeds_both_bridges() {
        let pestle: PestleOutput = serde_json::from_value(json!({
            "factors": {
                "legal": [{
                    "factor": "DED retail license required",
                    "impact": "threat",
                    "magnitude": "high"
                }]
            },
            "opportunities": ["Tourism rebound"],
            "threats": [{"threat": "Rising rents"}]
        }))
        .unwrap();
        let porters: PortersOutput = serde_json::from_value(json!({
            "forces": {"threatOfNewEntrants": 3}
        }))
        .unwrap();
        let handler = AnalyzeStrategyHandler::new();

        let result = handler.handle(AnalyzeStrategyCommand {
            pestle: Some(pestle),
            porters: Some(porters),
            ..Default::default()
        });

        assert_eq!(result.pestle_porters.regulatory_barriers.len(), 1);
        let opportunities: Vec<&str> = result
            .porters_swot
            .derived_opportunities
            .iter()
            .map(|i| i.item.as_str())
            .collect();
        assert_eq!(opportunities, vec!["Protected market position", "Tourism rebound"]);
        assert_eq!(result.porters_swot.derived_threats[0].item, "Rising rents");
    }

    #[test]
    fn serializes_pipeline_keys() {
        let handler = AnalyzeStrategyHandler::new();
        let result = handler.handle(AnalyzeStrategyCommand::default());

        let json = serde_json::to_value(&result).unwrap();

        for key in [
            "pestlePorters",
            "portersSwot",
            "signals",
            "extractorNeedsPlatform",
            "profile",
        ] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
    }
}
