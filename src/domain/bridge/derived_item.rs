//! DerivedItem - an opportunity or threat inferred from another framework.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;
use crate::domain::framework::Magnitude;

/// Which analysis an item was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceAnalysis {
    Pestle,
    Porters,
    Combined,
}

/// A SWOT item derived from PESTLE factors or Porter's forces.
///
/// Always carries a non-empty `source_reference` pointing back at the
/// originating factor or force.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedItem {
    pub item: String,
    pub description: String,
    pub magnitude: Magnitude,
    pub source_analysis: SourceAnalysis,
    pub source_reference: String,
    /// 1 is most urgent.
    pub priority: u8,
    pub priority_rationale: String,
}

impl DerivedItem {
    /// Creates a derived item, rejecting a blank item or source reference.
    pub fn try_new(
        item: impl Into<String>,
        description: impl Into<String>,
        magnitude: Magnitude,
        source_analysis: SourceAnalysis,
        source_reference: impl Into<String>,
        priority: u8,
        priority_rationale: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let item = item.into();
        let source_reference = source_reference.into();

        if item.trim().is_empty() {
            return Err(ValidationError::empty_field("item"));
        }
        if source_reference.trim().is_empty() {
            return Err(ValidationError::empty_field("sourceReference"));
        }

        Ok(Self {
            item,
            description: description.into(),
            magnitude,
            source_analysis,
            source_reference,
            priority,
            priority_rationale: priority_rationale.into(),
        })
    }

    /// True when the item can be traced back to its origin.
    pub fn has_provenance(&self) -> bool {
        !self.source_reference.trim().is_empty()
    }
}
