//! ExtractSignalsHandler - Command handler for signal extraction.

use serde::Serialize;

use crate::domain::framework::{BusinessContext, Insight};
use crate::domain::signals::{SignalExtractor, StrategySignals};

/// Command to extract strategic signals from insight snippets.
#[derive(Debug, Clone, Default)]
pub struct ExtractSignalsCommand {
    pub insights: Vec<Insight>,
    pub business_context: Option<BusinessContext>,
}

/// Extracted signals plus the extractor's platform gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractSignalsResult {
    pub signals: StrategySignals,
    pub needs_platform: bool,
}

/// Handler for signal extraction.
#[derive(Debug, Clone, Default)]
pub struct ExtractSignalsHandler;

impl ExtractSignalsHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: ExtractSignalsCommand) -> ExtractSignalsResult {
        let signals = SignalExtractor::extract(&cmd.insights, cmd.business_context.as_ref());
        let needs_platform = SignalExtractor::needs_platform(&signals);

        if signals.skipped_insights > 0 {
            tracing::warn!(
                skipped = signals.skipped_insights,
                total = cmd.insights.len(),
                "Malformed insights skipped during extraction"
            );
        }

        tracing::debug!(
            insights = cmd.insights.len(),
            platform_needs = signals.platform_needs.len(),
            platform_operational = signals.platform_operational_signals.len(),
            platform_ambiguous = signals.platform_ambiguous_signals.len(),
            digital_intensity = signals.digital_intensity.value(),
            needs_platform,
            "Signal extraction complete"
        );

        ExtractSignalsResult {
            signals,
            needs_platform,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consulting_launch_stays_operational() {
        let handler = ExtractSignalsHandler::new();

        let result = handler.handle(ExtractSignalsCommand {
            insights: vec![
                Insight::new(
                    "Launch consulting and implementation services for agentic AI transformation",
                    "value_propositions",
                ),
                Insight::new(
                    "Create reusable platform capabilities to support delivery quality",
                    "key_activities",
                ),
            ],
            business_context: Some(BusinessContext::new("consulting_agency", "service_launch")),
        });

        assert!(result.signals.platform_needs.is_empty());
        assert!(!result.needs_platform);
    }

    #[test]
    fn no_insights_yields_no_platform() {
        let handler = ExtractSignalsHandler::new();

        let result = handler.handle(ExtractSignalsCommand::default());

        assert_eq!(result.signals, StrategySignals::default());
        assert!(!result.needs_platform);
    }
}
