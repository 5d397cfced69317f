//! Keyword tables for signal extraction.
//!
//! Tables are plain constants so they can be reviewed and extended without
//! touching control flow. The patterns compiled from them match whole words
//! (with an optional plural `s`) so that short terms like `ai` or `app` do not
//! fire inside unrelated words.

use once_cell::sync::Lazy;
use regex::Regex;

/// Any of these (substring, lower-cased) makes an insight platform-related.
pub const PLATFORM_KEYWORDS: &[&str] = &[
    "platform",
    "mobile app",
    "web app",
    "digital platform",
    "software",
    "saas",
];

/// Verbs that express building or selling a product.
pub const PRODUCT_BUILD_VERBS: &[&str] = &[
    "build", "built", "develop", "create", "engineer", "design", "ship", "shipped", "shipping",
    "offer", "launch",
];

/// Objects that make a build verb a product build.
pub const PRODUCT_NOUNS: &[&str] = &[
    "saas",
    "software",
    "application",
    "app",
    "platform product",
    "platform solution",
];

/// Phrases that signal a product build on their own.
pub const PRODUCT_PHRASES: &[&str] = &[
    "saas platform",
    "software product",
    "ai platform",
    "digital product",
    "productized software",
];

/// Operational systems a business uses rather than sells.
pub const OPERATIONAL_TOOL_TERMS: &[&str] = &[
    "pos",
    "point of sale",
    "crm",
    "erp",
    "inventory",
    "booking",
    "scheduling",
    "automation tool",
    "internal system",
    "workflow tool",
];

/// Verbs that put technology in service of operations.
pub const OPERATIONAL_VERBS: &[&str] = &[
    "support",
    "enable",
    "optimize",
    "optimise",
    "streamline",
    "automate",
];

/// What operational verbs act on.
pub const OPERATIONAL_TARGETS: &[&str] =
    &["operation", "delivery", "service", "workflow", "process"];

/// Business-context tags marking a service-led launch.
///
/// Matched against whole `_`-separated tokens of a tag, so `consulting_agency`
/// matches but `food_service` does not.
pub const SERVICE_CONTEXT_MARKERS: &[&str] = &[
    "consulting",
    "agency",
    "implementation",
    "service_launch",
    "services_launch",
];

/// Digital channel terms, checked only for channel insights.
pub const DIGITAL_CHANNEL_KEYWORDS: &[&str] = &[
    "online",
    "digital",
    "website",
    "web",
    "e-commerce",
    "ecommerce",
    "app",
    "mobile app",
    "social media",
    "marketplace",
    "email",
    "platform",
];

/// Digital value proposition terms, checked only for value insights.
pub const DIGITAL_VALUE_KEYWORDS: &[&str] = &[
    "digital",
    "online",
    "automated",
    "automation",
    "ai",
    "real-time",
    "personalized",
    "data-driven",
    "platform",
    "app",
    "software",
];

/// Technology revenue terms, checked only for revenue insights.
pub const TECH_REVENUE_KEYWORDS: &[&str] = &[
    "subscription",
    "saas",
    "licensing",
    "license",
    "transaction fee",
    "platform",
    "in-app",
    "freemium",
    "api",
    "usage-based",
    "recurring",
];

/// Technology resource terms, checked only for resource insights.
pub const TECH_RESOURCE_KEYWORDS: &[&str] = &[
    "software",
    "platform",
    "technology",
    "api",
    "engineering",
    "engineer",
    "developer",
    "data",
    "cloud",
    "algorithm",
    "ai",
    "machine learning",
];

/// Customer technology terms, checked only for customer-relationship insights.
pub const CUSTOMER_TECH_KEYWORDS: &[&str] = &[
    "app",
    "online",
    "digital",
    "self-service",
    "automated",
    "chatbot",
    "portal",
    "crm",
    "platform",
    "personalized",
];

/// Category markers gating each dimension (matched against the normalized category).
pub const CHANNEL_CATEGORY: &str = "channel";
pub const VALUE_CATEGORY: &str = "value";
pub const REVENUE_CATEGORY: &str = "revenue";
pub const RESOURCE_CATEGORY: &str = "resource";
pub const CUSTOMER_RELATIONSHIP_CATEGORY: &str = "customer relationship";

/// Builds `\b(?:kw1|kw2|...)s?\b`, longest keyword first.
pub fn word_pattern(keywords: &[&str]) -> Regex {
    let mut sorted: Vec<&str> = keywords.to_vec();
    sorted.sort_by_key(|k| std::cmp::Reverse(k.len()));
    let alternation = sorted
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\b(?:{})s?\b", alternation)).expect("keyword pattern is valid")
}

/// Regular inflections of a verb: `create` → `creat(?:e|es|ed|ing)`.
fn inflected(verb: &str) -> String {
    match verb.strip_suffix('e') {
        Some(stem) => format!("{}(?:e|es|ed|ing)", regex::escape(stem)),
        None => format!("{}(?:s|es|ed|ing)?", regex::escape(verb)),
    }
}

fn verb_group(verbs: &[&str]) -> String {
    verbs.iter().map(|v| inflected(v)).collect::<Vec<_>>().join("|")
}

fn alternation(terms: &[&str]) -> String {
    let mut sorted: Vec<&str> = terms.to_vec();
    sorted.sort_by_key(|t| std::cmp::Reverse(t.len()));
    sorted.iter().map(|t| regex::escape(t)).collect::<Vec<_>>().join("|")
}

/// Build verb followed by a product noun, allowing one determiner and one modifier.
pub static PRODUCT_BUILD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"\b(?:{})\s+(?:(?:a|an|the|our|its|their|own)\s+)?(?:[a-z0-9-]+\s+)?(?:{})s?\b",
        verb_group(PRODUCT_BUILD_VERBS),
        alternation(PRODUCT_NOUNS)
    ))
    .expect("product build pattern is valid")
});

pub static PRODUCT_PHRASE_PATTERN: Lazy<Regex> = Lazy::new(|| word_pattern(PRODUCT_PHRASES));

pub static OPERATIONAL_TOOL_PATTERN: Lazy<Regex> =
    Lazy::new(|| word_pattern(OPERATIONAL_TOOL_TERMS));

/// Operational verb applied to an operational target, up to two words apart.
pub static OPERATIONAL_VERB_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"\b(?:{})\s+(?:[a-z0-9-]+\s+){{0,2}}(?:{})(?:s|es)?\b",
        verb_group(OPERATIONAL_VERBS),
        alternation(OPERATIONAL_TARGETS)
    ))
    .expect("operational verb pattern is valid")
});

pub static DIGITAL_CHANNEL_PATTERN: Lazy<Regex> =
    Lazy::new(|| word_pattern(DIGITAL_CHANNEL_KEYWORDS));
pub static DIGITAL_VALUE_PATTERN: Lazy<Regex> = Lazy::new(|| word_pattern(DIGITAL_VALUE_KEYWORDS));
pub static TECH_REVENUE_PATTERN: Lazy<Regex> = Lazy::new(|| word_pattern(TECH_REVENUE_KEYWORDS));
pub static TECH_RESOURCE_PATTERN: Lazy<Regex> = Lazy::new(|| word_pattern(TECH_RESOURCE_KEYWORDS));
pub static CUSTOMER_TECH_PATTERN: Lazy<Regex> = Lazy::new(|| word_pattern(CUSTOMER_TECH_KEYWORDS));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_pattern_respects_word_boundaries() {
        let pattern = word_pattern(&["ai", "app"]);
        assert!(pattern.is_match("ai-assisted triage"));
        assert!(pattern.is_match("order through our apps"));
        assert!(!pattern.is_match("maintain quality"));
        assert!(!pattern.is_match("a new approach"));
    }

    #[test]
    fn word_pattern_matches_multi_word_keywords() {
        let pattern = word_pattern(&["social media", "e-commerce"]);
        assert!(pattern.is_match("reach buyers on social media"));
        assert!(pattern.is_match("an e-commerce storefront"));
    }

    #[test]
    fn inflected_handles_silent_e() {
        assert_eq!(inflected("create"), "creat(?:e|es|ed|ing)");
        assert_eq!(inflected("build"), "build(?:s|es|ed|ing)?");
    }

    #[test]
    fn product_build_pattern_needs_adjacency() {
        assert!(PRODUCT_BUILD_PATTERN.is_match("build a saas platform product"));
        assert!(PRODUCT_BUILD_PATTERN.is_match("developing a mobile app for members"));
        assert!(PRODUCT_BUILD_PATTERN.is_match("we will launch the platform solution"));
        assert!(PRODUCT_BUILD_PATTERN.is_match("created proprietary software"));
        assert!(!PRODUCT_BUILD_PATTERN.is_match("create reusable platform capabilities"));
        assert!(!PRODUCT_BUILD_PATTERN.is_match("offer consulting on software"));
    }

    #[test]
    fn product_phrase_pattern_matches_bare_mentions() {
        assert!(PRODUCT_PHRASE_PATTERN.is_match("our ai platform learns from usage"));
        assert!(PRODUCT_PHRASE_PATTERN.is_match("productized software offering"));
        assert!(!PRODUCT_PHRASE_PATTERN.is_match("software architecture"));
    }

    #[test]
    fn operational_patterns() {
        assert!(OPERATIONAL_TOOL_PATTERN.is_match("a pos system for the stores"));
        assert!(OPERATIONAL_TOOL_PATTERN.is_match("online booking and scheduling"));
        assert!(!OPERATIONAL_TOOL_PATTERN.is_match("a possible expansion"));

        assert!(OPERATIONAL_VERB_PATTERN.is_match("support delivery quality"));
        assert!(OPERATIONAL_VERB_PATTERN.is_match("streamline back-office operations"));
        assert!(OPERATIONAL_VERB_PATTERN.is_match("automating the approval processes"));
        assert!(!OPERATIONAL_VERB_PATTERN.is_match("support growth"));
    }
}
