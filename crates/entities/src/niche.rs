//! Niche idea and search entity definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of opportunity a niche idea describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NicheCategory {
    /// Employment-style opportunities.
    Jobs,
    /// Full business ideas.
    Business,
    /// Part-time side hustles.
    SideHustles,
}

impl NicheCategory {
    /// Returns the wire name of this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jobs => "jobs",
            Self::Business => "business",
            Self::SideHustles => "side-hustles",
        }
    }
}

impl std::fmt::Display for NicheCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Up-front investment needed to pursue an idea.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NicheCostLevel {
    Low,
    Medium,
    High,
}

impl NicheCostLevel {
    /// Returns the wire name of this cost level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for NicheCostLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How hard an idea is to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Low,
    Medium,
    High,
}

impl Difficulty {
    /// Returns the wire name of this difficulty.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Platform a supporting source was observed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourcePlatform {
    Reddit,
    Quora,
    Twitter,
    Linkedin,
    Report,
    Other,
}

/// A source backing the insights of an idea.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NicheSource {
    /// Unique identifier.
    pub id: String,
    /// Human-readable label.
    pub label: String,
    /// Optional link to the source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Platform the source comes from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<SourcePlatform>,
}

impl NicheSource {
    /// Creates a source observed on the given platform.
    pub fn new(id: impl Into<String>, label: impl Into<String>, platform: SourcePlatform) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            url: None,
            platform: Some(platform),
        }
    }
}

/// A simulated niche opportunity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NicheIdea {
    /// Unique identifier (stable across searches).
    pub id: String,
    /// Title with the profession substituted in.
    pub title: String,
    /// Category of the idea.
    pub category: NicheCategory,
    /// Entry cost.
    pub cost_level: NicheCostLevel,
    /// Free-text revenue estimate.
    pub estimated_revenue_range: String,
    /// Free-text time to return on investment.
    pub roi_timeline: String,
    /// Execution difficulty.
    pub difficulty: Difficulty,
    /// One-paragraph summary.
    pub summary: String,
    /// Ordered market insights.
    pub insights: Vec<String>,
    /// Ordered launch steps.
    pub steps: Vec<String>,
    /// Ordered supporting sources.
    pub sources: Vec<NicheSource>,
}

impl NicheIdea {
    /// Returns the text used when sharing this idea.
    pub fn share_text(&self) -> String {
        format!("{} – discovered via NicheHunt", self.title)
    }
}

/// Category selection of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryFilter {
    /// Every category.
    #[default]
    All,
    Jobs,
    Business,
    SideHustles,
}

impl CategoryFilter {
    /// Checks if an idea of the given category passes this filter.
    pub fn matches(&self, category: NicheCategory) -> bool {
        match self {
            Self::All => true,
            Self::Jobs => category == NicheCategory::Jobs,
            Self::Business => category == NicheCategory::Business,
            Self::SideHustles => category == NicheCategory::SideHustles,
        }
    }

    /// Returns the wire name of this filter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Jobs => "jobs",
            Self::Business => "business",
            Self::SideHustles => "side-hustles",
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "jobs" => Ok(Self::Jobs),
            "business" => Ok(Self::Business),
            "side-hustles" | "side_hustles" => Ok(Self::SideHustles),
            other => Err(format!("Unknown category: {}", other)),
        }
    }
}

/// Cost-level selection of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CostLevelFilter {
    /// Every cost level.
    #[default]
    Any,
    Low,
    Medium,
    High,
}

impl CostLevelFilter {
    /// Checks if an idea of the given cost level passes this filter.
    pub fn matches(&self, cost_level: NicheCostLevel) -> bool {
        match self {
            Self::Any => true,
            Self::Low => cost_level == NicheCostLevel::Low,
            Self::Medium => cost_level == NicheCostLevel::Medium,
            Self::High => cost_level == NicheCostLevel::High,
        }
    }

    /// Returns the wire name of this filter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for CostLevelFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CostLevelFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "any" => Ok(Self::Any),
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(format!("Unknown cost level: {}", other)),
        }
    }
}

/// Filter selection of a search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NicheSearchFilters {
    /// Category to keep.
    pub category: CategoryFilter,
    /// Cost level to keep; absent behaves like [`CostLevelFilter::Any`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_level: Option<CostLevelFilter>,
}

impl NicheSearchFilters {
    /// Checks if an idea passes both filters.
    pub fn accepts(&self, idea: &NicheIdea) -> bool {
        self.category.matches(idea.category)
            && self
                .cost_level
                .is_none_or(|cost_level| cost_level.matches(idea.cost_level))
    }
}

/// A profession plus filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NicheSearchRequest {
    /// Profession or skill to explore.
    pub profession: String,
    /// Filters to apply to the catalog.
    pub filters: NicheSearchFilters,
}

impl NicheSearchRequest {
    /// Creates a request with no filtering.
    pub fn new(profession: impl Into<String>) -> Self {
        Self {
            profession: profession.into(),
            filters: NicheSearchFilters::default(),
        }
    }

    /// Sets the category filter.
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.filters.category = category;
        self
    }

    /// Sets the cost-level filter.
    pub fn with_cost_level(mut self, cost_level: CostLevelFilter) -> Self {
        self.filters.cost_level = Some(cost_level);
        self
    }
}

/// Envelope returned by a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NicheSearchResult {
    /// Fresh identifier of this search.
    pub request_id: String,
    /// The originating request.
    pub query: NicheSearchRequest,
    /// Matching ideas in catalog order.
    pub ideas: Vec<NicheIdea>,
    /// When the result was produced.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idea(category: NicheCategory, cost_level: NicheCostLevel) -> NicheIdea {
        NicheIdea {
            id: "idea-x".to_string(),
            title: "Test idea".to_string(),
            category,
            cost_level,
            estimated_revenue_range: "$1".to_string(),
            roi_timeline: "1 month".to_string(),
            difficulty: Difficulty::Low,
            summary: String::new(),
            insights: Vec::new(),
            steps: Vec::new(),
            sources: Vec::new(),
        }
    }

    #[test]
    fn test_filters_accept() {
        let business_medium = idea(NicheCategory::Business, NicheCostLevel::Medium);

        assert!(NicheSearchFilters::default().accepts(&business_medium));

        let filters = NicheSearchFilters {
            category: CategoryFilter::Business,
            cost_level: Some(CostLevelFilter::Any),
        };
        assert!(filters.accepts(&business_medium));

        let filters = NicheSearchFilters {
            category: CategoryFilter::All,
            cost_level: Some(CostLevelFilter::Low),
        };
        assert!(!filters.accepts(&business_medium));

        let filters = NicheSearchFilters {
            category: CategoryFilter::Jobs,
            cost_level: None,
        };
        assert!(!filters.accepts(&business_medium));
    }

    #[test]
    fn test_filter_parsing_rejects_unknown_values() {
        assert_eq!("side-hustles".parse(), Ok(CategoryFilter::SideHustles));
        assert_eq!("ANY".parse(), Ok(CostLevelFilter::Any));
        assert!("freelance".parse::<CategoryFilter>().is_err());
        assert!("cheap".parse::<CostLevelFilter>().is_err());
    }

    #[test]
    fn test_request_wire_shape() {
        let request = NicheSearchRequest::new("chef")
            .with_category(CategoryFilter::SideHustles)
            .with_cost_level(CostLevelFilter::Any);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "profession": "chef",
                "filters": { "category": "side-hustles", "costLevel": "any" }
            })
        );

        let parsed: NicheSearchRequest =
            serde_json::from_str(r#"{"profession":"chef","filters":{"category":"jobs"}}"#)
                .unwrap();
        assert_eq!(parsed.filters.category, CategoryFilter::Jobs);
        assert_eq!(parsed.filters.cost_level, None);
    }

    #[test]
    fn test_share_text() {
        let idea = idea(NicheCategory::Jobs, NicheCostLevel::Low);
        assert_eq!(idea.share_text(), "Test idea – discovered via NicheHunt");
    }
}
