//! Keyword tables for the PESTLE → Porter's bridge.
//!
//! Matching is a case-insensitive substring test against the factor text.

/// Legal factors that read as entry barriers.
pub const REGULATORY_BARRIER_KEYWORDS: &[&str] = &["license", "regulation", "permit", "compliance"];

/// Economic factors that move buyer price sensitivity.
pub const BUYER_POWER_KEYWORDS: &[&str] = &["income", "spending", "disposable", "purchasing"];

/// Economic factors that signal market growth or contraction.
pub const GROWTH_KEYWORDS: &[&str] = &["growth", "market size", "expansion"];

/// Technological factors that enable digital substitutes.
pub const SUBSTITUTE_ENABLER_KEYWORDS: &[&str] = &["platform", "online", "digital", "app", "e-commerce"];

/// Political factors that shift supplier leverage.
pub const SUPPLIER_POWER_KEYWORDS: &[&str] = &["trade", "import", "tariff", "agreement"];

/// True when the lower-cased `text` contains any of `keywords`.
pub fn matches_any(text: &str, keywords: &[&str]) -> bool {
    let lowered = text.to_lowercase();
    keywords.iter().any(|keyword| lowered.contains(keyword))
}
