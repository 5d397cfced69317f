//! BuildStrategyProfileHandler - Command handler for strategy profiling.
//!
//! Extracts signals from the insights and profiles them in one step.

use crate::domain::framework::{BusinessContext, Insight};
use crate::domain::profile::{StrategyProfile, StrategyProfiler};
use crate::domain::signals::StrategySignals;

use super::extract_signals::{ExtractSignalsCommand, ExtractSignalsHandler};

/// Command to build a strategy profile from insight snippets.
#[derive(Debug, Clone, Default)]
pub struct BuildStrategyProfileCommand {
    pub insights: Vec<Insight>,
    pub business_context: Option<BusinessContext>,
}

/// Result of strategy profiling.
pub type BuildStrategyProfileResult = StrategyProfile;

/// Handler for strategy profiling.
#[derive(Debug, Clone, Default)]
pub struct BuildStrategyProfileHandler {
    extractor: ExtractSignalsHandler,
}

impl BuildStrategyProfileHandler {
    pub fn new() -> Self {
        Self {
            extractor: ExtractSignalsHandler::new(),
        }
    }

    pub fn handle(&self, cmd: BuildStrategyProfileCommand) -> BuildStrategyProfileResult {
        let extracted = self.extractor.handle(ExtractSignalsCommand {
            insights: cmd.insights,
            business_context: cmd.business_context,
        });

        self.profile_signals(&extracted.signals)
    }

    /// Profiles signals that were already extracted.
    pub fn profile_signals(&self, signals: &StrategySignals) -> BuildStrategyProfileResult {
        let profile = StrategyProfiler::profile(signals);

        tracing::debug!(
            archetype = %profile.archetype,
            digital_intensity = profile.digital_intensity.value(),
            needs_platform = profile.needs_platform,
            categories = profile.recommended_categories.len(),
            "Strategy profile built"
        );

        profile
    }
}
