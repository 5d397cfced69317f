//! Platform intent classification.
//!
//! A platform-related insight is tested against an ordered chain of
//! predicates; the first one that holds decides the intent. Anything that
//! mentions a platform but passes no predicate is ambiguous.

use serde::{Deserialize, Serialize};

use crate::domain::framework::BusinessContext;

use super::keywords::{
    OPERATIONAL_TOOL_PATTERN, OPERATIONAL_VERB_PATTERN, PLATFORM_KEYWORDS, PRODUCT_BUILD_PATTERN,
    PRODUCT_PHRASE_PATTERN, SERVICE_CONTEXT_MARKERS,
};

/// How a platform mention should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformIntent {
    /// The business builds or sells a software product.
    Product,
    /// Technology supports delivery of a non-software offering.
    Operational,
    /// Mentions a platform without enough evidence either way.
    Ambiguous,
}

type IntentPredicate = fn(&str, Option<&BusinessContext>) -> bool;

/// Evaluated in order; first match wins.
const INTENT_CHAIN: &[(PlatformIntent, IntentPredicate)] = &[
    (PlatformIntent::Product, has_product_intent),
    (PlatformIntent::Operational, has_operational_intent),
];

/// Classifies lower-cased insight content.
///
/// Returns `None` when the content does not mention a platform at all.
pub fn classify_platform_intent(
    content: &str,
    context: Option<&BusinessContext>,
) -> Option<PlatformIntent> {
    if !mentions_platform(content) {
        return None;
    }

    let intent = INTENT_CHAIN
        .iter()
        .find(|(_, predicate)| predicate(content, context))
        .map(|(intent, _)| *intent)
        .unwrap_or(PlatformIntent::Ambiguous);

    Some(intent)
}

pub fn mentions_platform(content: &str) -> bool {
    PLATFORM_KEYWORDS.iter().any(|kw| content.contains(kw))
}

fn has_product_intent(content: &str, _context: Option<&BusinessContext>) -> bool {
    PRODUCT_BUILD_PATTERN.is_match(content) || PRODUCT_PHRASE_PATTERN.is_match(content)
}

fn has_operational_intent(content: &str, context: Option<&BusinessContext>) -> bool {
    OPERATIONAL_TOOL_PATTERN.is_match(content)
        || OPERATIONAL_VERB_PATTERN.is_match(content)
        || context.is_some_and(is_service_context)
}

fn is_service_context(context: &BusinessContext) -> bool {
    context.tags().iter().any(|tag| {
        let bounded: String = format!("_{}_", tag.trim())
            .chars()
            .map(|c| if c == ' ' || c == '-' { '_' } else { c })
            .collect();
        SERVICE_CONTEXT_MARKERS
            .iter()
            .any(|marker| bounded.contains(&format!("_{}_", marker)))
    })
}
