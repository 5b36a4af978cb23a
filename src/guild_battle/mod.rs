//! Guild battle team generation
//!
//! Cookies are scored per boss (tier lists, preferred and avoided traits,
//! power) and teams are drawn from the ranking with an exponential bias
//! toward the top. Team scores add synergy, S-tier and trait coverage
//! bonuses on top of the member mean.

pub mod bosses;

pub use bosses::{boss, boss_names, BossProfile, BOSSES};

use crate::error::Result;
use crate::model::{Cookie, Team, TeamSignature};
use crate::search::pool::assemble;
use crate::search::{SearchPool, TeamOptimizer};
use rand::seq::SliceRandom;
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

const NEUTRAL_SCORE: f64 = 50.0;
const S_TIER_BONUS: f64 = 40.0;
const A_TIER_BONUS: f64 = 25.0;
const PREFERRED_BONUS: f64 = 10.0;
const AVOIDED_PENALTY: f64 = 15.0;

/// Ranked cookies eligible for each weighted pick
const PICK_WINDOW: usize = 15;
const ATTEMPTS_PER_TEAM: usize = 10;

#[derive(Debug, Clone, Serialize)]
pub struct BossTeam {
    #[serde(serialize_with = "serialize_names")]
    pub team: Team,
    pub score: f64,
    pub boss: &'static str,
    pub strategy: String,
}

fn serialize_names<S: serde::Serializer>(team: &Team, s: S) -> std::result::Result<S::Ok, S::Error> {
    s.collect_seq(team.names())
}

/// Cookie fitness against a boss (0-100)
pub fn score_cookie_for_boss(cookie: &Cookie, boss: &BossProfile) -> f64 {
    let mut score = NEUTRAL_SCORE;

    if boss.is_s_tier(&cookie.name) {
        score += S_TIER_BONUS;
    } else if boss.is_a_tier(&cookie.name) {
        score += A_TIER_BONUS;
    }

    let preferred = boss.preferred.iter().filter(|t| cookie.traits.has(**t)).count();
    let avoided = boss.avoid.iter().filter(|t| cookie.traits.has(**t)).count();
    score += preferred as f64 * PREFERRED_BONUS;
    score -= avoided as f64 * AVOIDED_PENALTY;

    score += cookie.power() * 2.0;
    score.clamp(0.0, 100.0)
}

/// Team fitness against a boss, capped at 100
pub fn score_team_for_boss(team: &Team, boss: &BossProfile) -> f64 {
    let cookies = team.cookies();
    let mean = cookies
        .iter()
        .map(|c| score_cookie_for_boss(c, boss))
        .sum::<f64>()
        / cookies.len().max(1) as f64;

    let synergy_bonus = f64::min(10.0, team.synergy_score() / 5.0);
    let s_tier = cookies.iter().filter(|c| boss.is_s_tier(&c.name)).count() as f64 * 5.0;
    let coverage = boss
        .preferred
        .iter()
        .filter(|t| cookies.iter().any(|c| c.traits.has(**t)))
        .count() as f64
        * 3.0;

    f64::min(100.0, mean + synergy_bonus + s_tier + coverage)
}

/// One-line battle plan: key S-tier members, then the boss's first tip
pub fn team_strategy(team: &Team, boss: &BossProfile) -> String {
    let s_tier: Vec<&str> = team
        .cookies()
        .iter()
        .map(|c| c.name.as_str())
        .filter(|n| boss.is_s_tier(n))
        .collect();

    let mut parts = Vec::new();
    match s_tier.as_slice() {
        [] => {}
        [only] => parts.push(format!("★ {} is your key damage dealer.", only)),
        many => parts.push(format!("★ Focus on: {}", many[..2].join(", "))),
    }
    if let Some(tip) = boss.tips.first() {
        parts.push(tip.to_string());
    }

    if parts.is_empty() {
        boss.description.to_string()
    } else {
        parts.join(" ")
    }
}

impl TeamOptimizer {
    /// Best `count` teams against a boss, every one holding `required`
    pub fn generate_boss_teams<S: AsRef<str>>(
        &mut self,
        boss_name: &str,
        required: &[S],
        count: usize,
    ) -> Result<Vec<BossTeam>> {
        let boss = boss(boss_name)?;
        let pool = SearchPool::resolve(self.cookies(), required)?;
        pool.ensure_fillable()?;

        let mut ranked: Vec<(Arc<Cookie>, f64)> = pool
            .available
            .iter()
            .map(|c| (Arc::clone(c), score_cookie_for_boss(c, boss)))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        let options = self.team_options();
        let engine = *self.engine();
        let rng = self.rng_mut();

        let mut used: FxHashSet<TeamSignature> = FxHashSet::default();
        let mut teams = Vec::with_capacity(count);

        for _ in 0..count * ATTEMPTS_PER_TEAM {
            if teams.len() >= count {
                break;
            }

            let mut remaining: Vec<&Arc<Cookie>> = ranked.iter().map(|(c, _)| c).collect();
            let mut picked: Vec<Arc<Cookie>> = Vec::with_capacity(pool.slots());
            while picked.len() < pool.slots() && !remaining.is_empty() {
                let window: Vec<usize> = (0..remaining.len().min(PICK_WINDOW)).collect();
                let Ok(&index) = window.choose_weighted(rng, |i| 2f64.powi((PICK_WINDOW - i) as i32)) else {
                    break;
                };
                picked.push(Arc::clone(remaining.remove(index)));
            }

            let cookies = pool.with_required(picked);
            let signature = TeamSignature::from_cookies(&cookies);
            if used.contains(&signature) {
                continue;
            }
            let Some(team) = assemble(cookies, options, &engine) else {
                continue;
            };
            used.insert(signature);

            teams.push(BossTeam {
                score: score_team_for_boss(&team, boss),
                strategy: team_strategy(&team, boss),
                boss: boss.name,
                team,
            });
        }

        if teams.len() < count {
            debug!("{}: only {} distinct teams after all attempts", boss.name, teams.len());
        }
        teams.sort_by(|a, b| b.score.total_cmp(&a.score));
        teams.truncate(count);

        info!("Generated {} teams for {}", teams.len(), boss.name);
        Ok(teams)
    }
}
