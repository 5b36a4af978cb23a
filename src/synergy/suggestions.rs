//! Partner suggestions for a partially selected team

use crate::model::Cookie;
use crate::synergy::pairwise::pairwise_synergy;
use crate::synergy::role_matrix::{role_compatibility, COMPLEMENT_THRESHOLD};
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::sync::Arc;

pub const DEFAULT_REASON: &str = "Good team fit";

#[derive(Debug, Clone, Serialize)]
pub struct PartnerSuggestion {
    #[serde(serialize_with = "serialize_cookie_name")]
    pub cookie: Arc<Cookie>,
    /// Mean pairwise synergy with the selected cookies (0-12)
    pub score: f64,
    pub reason: String,
}

fn serialize_cookie_name<S: serde::Serializer>(cookie: &Arc<Cookie>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&cookie.name)
}

/// Reason for one (selected, candidate) pair, if anything stands out
fn pair_reason(selected: &Cookie, candidate: &Cookie) -> Option<String> {
    let mut parts: Vec<String> = Vec::new();

    if let (Some(a), Some(b)) = (selected.element.as_deref(), candidate.element.as_deref()) {
        if a == b {
            parts.push(format!("Same element ({})", b));
        }
    }

    if let Some(value) = role_compatibility(selected.role, candidate.role) {
        if value >= COMPLEMENT_THRESHOLD {
            parts.push(format!("{} complements {}", candidate.role.label(), selected.role.label()));
        }
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

/// Rank pool cookies by mean synergy with `selected`
///
/// The reason is the first pair reason found across the selected cookies.
pub fn suggest_partners(
    selected: &[Arc<Cookie>],
    pool: &[Arc<Cookie>],
    top_n: usize,
) -> Vec<PartnerSuggestion> {
    if selected.is_empty() {
        return Vec::new();
    }

    let chosen: FxHashSet<&str> = selected.iter().map(|c| c.name.as_str()).collect();

    let mut suggestions: Vec<PartnerSuggestion> = pool
        .iter()
        .filter(|c| !chosen.contains(c.name.as_str()))
        .map(|candidate| {
            let total: f64 = selected.iter().map(|s| pairwise_synergy(s, candidate)).sum();
            let reason = selected
                .iter()
                .find_map(|s| pair_reason(s, candidate))
                .unwrap_or_else(|| DEFAULT_REASON.to_string());

            PartnerSuggestion {
                cookie: Arc::clone(candidate),
                score: total / selected.len() as f64,
                reason,
            }
        })
        .collect();

    // Stable: equal scores keep pool order
    suggestions.sort_by(|a, b| b.score.total_cmp(&a.score));
    suggestions.truncate(top_n);
    suggestions
}
