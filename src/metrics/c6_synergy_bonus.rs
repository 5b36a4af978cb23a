//! COMPONENT 6: SYNERGY BONUS
//!
//! The 0-110 whole-team synergy total rescaled linearly to 0-20.
//! Zero when the bonus is switched off.

use crate::synergy::{SynergyBreakdown, MAX_TEAM_SYNERGY};

pub const MAX_SYNERGY_BONUS: f64 = 20.0;

#[derive(Debug, Clone)]
pub struct C6Result {
    pub score: f64,
    /// Whole-team synergy total the bonus was scaled from
    pub synergy_total: f64,
    pub enabled: bool,
}

pub fn calculate_c6(synergy: &SynergyBreakdown, enabled: bool) -> C6Result {
    let score = if enabled {
        (synergy.total / MAX_TEAM_SYNERGY * MAX_SYNERGY_BONUS).min(MAX_SYNERGY_BONUS)
    } else {
        0.0
    };

    C6Result {
        score,
        synergy_total: synergy.total,
        enabled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_rescale() {
        let synergy = SynergyBreakdown {
            total: 55.0,
            ..SynergyBreakdown::default()
        };
        assert_relative_eq!(calculate_c6(&synergy, true).score, 10.0);
        assert_eq!(calculate_c6(&synergy, false).score, 0.0);
    }

    #[test]
    fn test_capped_at_twenty() {
        let synergy = SynergyBreakdown {
            total: 140.0,
            ..SynergyBreakdown::default()
        };
        assert_relative_eq!(calculate_c6(&synergy, true).score, 20.0);
    }
}
