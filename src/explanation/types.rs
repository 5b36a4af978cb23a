use crate::recommend::TreasureRecommendation;
use serde::Serialize;

/// Complete explanation for a team
#[derive(Debug, Clone, Serialize)]
pub struct Explanation {
    pub overall: OverallExplanation,
    pub members: Vec<MemberLine>,
    pub benefits: Vec<BenefitCard>,
    pub warnings: Vec<WarningCard>,
    pub metrics_display: MetricsDisplay,
    /// Plain-text synergy analysis
    pub synergy: String,
    pub treasures: Vec<TreasureRecommendation>,
}

/// Overall score interpretation with stars
#[derive(Debug, Clone, Serialize)]
pub struct OverallExplanation {
    pub score: f64,
    pub stars: String, // "★★★★☆"
    pub label: String, // "Excellent" / "Good" / "Fair" / "Weak"
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MemberLine {
    pub name: String,
    pub rarity: String,
    pub role: String,
    pub position: String,
    pub power: f64,
}

/// Benefit card for a strong component
#[derive(Debug, Clone, Serialize)]
pub struct BenefitCard {
    pub benefit_type: String, // "role_diversity", "special_combo", etc.
    pub component_code: String, // "C1".."C6"
    pub title: String,
    pub message: String,
    pub detail: String,
}

/// Warning card for a weak component
#[derive(Debug, Clone, Serialize)]
pub struct WarningCard {
    pub warning_type: String,
    pub severity: Severity,
    pub icon: String,
    pub message: String,
    pub advice: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Component cards: the four core components, then treasure and synergy
#[derive(Debug, Clone, Serialize)]
pub struct MetricsDisplay {
    pub core: Vec<MetricCard>,  // C1-C4
    pub bonus: Vec<MetricCard>, // C5, C6
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricCard {
    pub code: String,
    pub name: String,
    pub score: f64,
    pub max: f64,
    pub interpretation: String,
}

/// Cards contributed by one component
#[derive(Debug, Clone, Default)]
pub struct MetricFragment {
    pub benefit: Option<BenefitCard>,
    pub warning: Option<WarningCard>,
}

impl MetricFragment {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_benefit(benefit: BenefitCard) -> Self {
        Self {
            benefit: Some(benefit),
            warning: None,
        }
    }

    pub fn with_warning(warning: WarningCard) -> Self {
        Self {
            benefit: None,
            warning: Some(warning),
        }
    }
}
