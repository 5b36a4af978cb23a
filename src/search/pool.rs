//! Candidate pool resolution, team assembly and ranking

use crate::error::{Result, TeamError};
use crate::model::{Cookie, Team, TeamOptions, TeamSignature, TEAM_SIZE};
use crate::synergy::SynergyEngine;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use std::sync::Arc;

/// A pool split into the required members and everything else
#[derive(Debug, Clone)]
pub struct SearchPool {
    pub required: Vec<Arc<Cookie>>,
    /// Pool minus required members, in pool order
    pub available: Vec<Arc<Cookie>>,
}

impl SearchPool {
    /// Resolve required names against the pool
    ///
    /// Names are deduplicated keeping first occurrence. More than 5 distinct
    /// names, or any name missing from the pool, is a validation error.
    pub fn resolve<S: AsRef<str>>(pool: &[Arc<Cookie>], required_names: &[S]) -> Result<Self> {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let names: Vec<&str> = required_names
            .iter()
            .map(|n| n.as_ref().trim())
            .filter(|n| seen.insert(*n))
            .collect();

        if names.len() > TEAM_SIZE {
            return Err(TeamError::TooManyRequired(names.len()));
        }

        let mut required = Vec::with_capacity(names.len());
        let mut missing = Vec::new();
        for name in &names {
            match pool.iter().find(|c| c.name == *name) {
                Some(cookie) => required.push(Arc::clone(cookie)),
                None => missing.push(name.to_string()),
            }
        }
        if !missing.is_empty() {
            return Err(TeamError::RequiredNotFound(missing));
        }

        let available = pool
            .iter()
            .filter(|c| !seen.contains(c.name.as_str()))
            .cloned()
            .collect();

        Ok(Self { required, available })
    }

    /// Open slots after the required members
    pub fn slots(&self) -> usize {
        TEAM_SIZE - self.required.len()
    }

    /// Fail before sampling when the open slots cannot be filled
    pub fn ensure_fillable(&self) -> Result<()> {
        if self.slots() > self.available.len() {
            return Err(TeamError::InsufficientPool {
                needed: self.slots(),
                available: self.available.len(),
            });
        }
        Ok(())
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|c| c.name == name)
    }

    /// Every cookie in the pool, required first
    pub fn all(&self) -> impl Iterator<Item = &Arc<Cookie>> {
        self.required.iter().chain(self.available.iter())
    }

    /// Required members followed by `picked`
    pub fn with_required(&self, picked: impl IntoIterator<Item = Arc<Cookie>>) -> Vec<Arc<Cookie>> {
        let mut cookies = self.required.clone();
        cookies.extend(picked);
        cookies
    }
}

/// Build a strict team for search; `None` when validation rejects it
pub fn assemble(cookies: Vec<Arc<Cookie>>, options: TeamOptions, engine: &SynergyEngine) -> Option<Team> {
    match Team::new(cookies, Vec::new(), options, engine) {
        Ok(team) => Some(team),
        Err(e) => {
            tracing::debug!("Discarded candidate: {}", e);
            None
        }
    }
}

/// Sort key for ranked output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankKey {
    Composition,
    /// (total synergy, composition), lexicographic
    SynergyFirst,
}

fn compare(a: &Team, b: &Team, key: RankKey) -> Ordering {
    let primary = match key {
        RankKey::Composition => b.composition_score().total_cmp(&a.composition_score()),
        RankKey::SynergyFirst => b
            .total_synergy_score()
            .total_cmp(&a.total_synergy_score())
            .then_with(|| b.composition_score().total_cmp(&a.composition_score())),
    };
    // Name order breaks ties so the result does not depend on generation order
    primary.then_with(|| a.signature().cmp(b.signature()))
}

/// Deduplicate by cookie set, sort descending and truncate
pub fn rank_teams(teams: Vec<Team>, key: RankKey, top_n: usize) -> Vec<Team> {
    let mut seen: FxHashSet<TeamSignature> = FxHashSet::default();
    let mut unique: Vec<Team> = teams
        .into_iter()
        .filter(|t| seen.insert(t.signature().clone()))
        .collect();

    unique.sort_by(|a, b| compare(a, b, key));
    unique.truncate(top_n);
    unique
}
