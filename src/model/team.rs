//! Team: 5 unique cookies (1-5 in relaxed mode) plus 0-3 unique treasures
//!
//! Validation runs before any scoring. Composition score, synergy
//! breakdown and advanced synergy are computed once at construction
//! from the cookie/treasure snapshot and never recomputed.
//!
//! Equality and hashing use the sorted cookie-name set, so the same five
//! cookies in any order are one team.

use crate::error::{Result, TeamError};
use crate::model::{Cookie, Position, Role, Treasure};
use crate::scorer::{CompositionScore, CompositionScorer};
use crate::synergy::{AdvancedSynergy, SynergyBreakdown, SynergyEngine};
use crate::utils::counting::count_by;
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

pub const TEAM_SIZE: usize = 5;
pub const MAX_TREASURES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamOptions {
    /// Exactly 5 cookies when true, 1-5 otherwise
    pub strict: bool,
    /// Add the synergy bonus to the composition score
    pub include_synergy: bool,
}

impl Default for TeamOptions {
    fn default() -> Self {
        Self {
            strict: true,
            include_synergy: true,
        }
    }
}

impl TeamOptions {
    /// Relaxed cardinality for partial or enemy teams
    pub fn relaxed() -> Self {
        Self {
            strict: false,
            include_synergy: true,
        }
    }

    pub fn with_synergy(mut self, include: bool) -> Self {
        self.include_synergy = include;
        self
    }
}

/// Order-independent dedup key: sorted cookie names
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TeamSignature(Box<[String]>);

impl TeamSignature {
    pub fn from_cookies(cookies: &[Arc<Cookie>]) -> Self {
        let mut names: Vec<String> = cookies.iter().map(|c| c.name.clone()).collect();
        names.sort_unstable();
        Self(names.into_boxed_slice())
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.binary_search_by(|n| n.as_str().cmp(name)).is_ok()
    }
}

#[derive(Debug, Clone)]
pub struct Team {
    cookies: SmallVec<[Arc<Cookie>; TEAM_SIZE]>,
    treasures: SmallVec<[Arc<Treasure>; MAX_TREASURES]>,
    options: TeamOptions,
    signature: TeamSignature,
    score: CompositionScore,
    synergy: SynergyBreakdown,
    advanced: AdvancedSynergy,
}

impl Team {
    /// Validate and score a team
    pub fn new(
        cookies: Vec<Arc<Cookie>>,
        treasures: Vec<Arc<Treasure>>,
        options: TeamOptions,
        engine: &SynergyEngine,
    ) -> Result<Self> {
        Self::validate(&cookies, &treasures, options)?;

        let synergy = engine.team_synergy(&cookies);
        let advanced = engine.advanced_synergy(&cookies);
        let score = CompositionScorer::new(options.include_synergy)
            .score(&cookies, &treasures, &synergy);
        let signature = TeamSignature::from_cookies(&cookies);

        Ok(Self {
            cookies: SmallVec::from_vec(cookies),
            treasures: SmallVec::from_vec(treasures),
            options,
            signature,
            score,
            synergy,
            advanced,
        })
    }

    /// Strict 5-cookie team with synergy and no treasures
    pub fn from_cookies(cookies: Vec<Arc<Cookie>>, engine: &SynergyEngine) -> Result<Self> {
        Self::new(cookies, Vec::new(), TeamOptions::default(), engine)
    }

    fn validate(
        cookies: &[Arc<Cookie>],
        treasures: &[Arc<Treasure>],
        options: TeamOptions,
    ) -> Result<()> {
        if options.strict {
            if cookies.len() != TEAM_SIZE {
                return Err(TeamError::TeamSize {
                    expected: "exactly 5",
                    got: cookies.len(),
                });
            }
        } else if cookies.is_empty() || cookies.len() > TEAM_SIZE {
            return Err(TeamError::TeamSize {
                expected: "1-5",
                got: cookies.len(),
            });
        }

        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for cookie in cookies {
            if !seen.insert(cookie.name.as_str()) {
                return Err(TeamError::DuplicateCookie(cookie.name.clone()));
            }
        }

        if treasures.len() > MAX_TREASURES {
            return Err(TeamError::TooManyTreasures(treasures.len()));
        }

        let mut seen_treasures: FxHashSet<&str> = FxHashSet::default();
        for treasure in treasures {
            if !seen_treasures.insert(treasure.name.as_str()) {
                return Err(TeamError::DuplicateTreasure(treasure.name.clone()));
            }
        }

        Ok(())
    }

    pub fn cookies(&self) -> &[Arc<Cookie>] {
        &self.cookies
    }

    pub fn treasures(&self) -> &[Arc<Treasure>] {
        &self.treasures
    }

    pub fn options(&self) -> TeamOptions {
        self.options
    }

    pub fn signature(&self) -> &TeamSignature {
        &self.signature
    }

    pub fn contains(&self, name: &str) -> bool {
        self.signature.contains(name)
    }

    pub fn composition_score(&self) -> f64 {
        self.score.total
    }

    pub fn score_breakdown(&self) -> &CompositionScore {
        &self.score
    }

    pub fn treasure_bonus(&self) -> f64 {
        self.score.treasure_bonus
    }

    pub fn synergy_breakdown(&self) -> &SynergyBreakdown {
        &self.synergy
    }

    /// Whole-team synergy total (0-110)
    pub fn synergy_score(&self) -> f64 {
        self.synergy.total
    }

    pub fn advanced_synergy(&self) -> &AdvancedSynergy {
        &self.advanced
    }

    /// Element + group + special-combo synergy
    pub fn total_synergy_score(&self) -> f64 {
        self.advanced.total
    }

    pub fn role_distribution(&self) -> FxHashMap<Role, usize> {
        count_by(self.cookies.iter().map(|c| c.role))
    }

    pub fn position_distribution(&self) -> FxHashMap<Position, usize> {
        count_by(self.cookies.iter().map(|c| c.position))
    }

    pub fn count_in(&self, position: Position) -> usize {
        self.cookies.iter().filter(|c| c.position == position).count()
    }

    /// Defense or Charge cookie in the Front position
    pub fn has_tank(&self) -> bool {
        self.cookies
            .iter()
            .any(|c| c.position == Position::Front && c.role.is_tank())
    }

    pub fn has_healer(&self) -> bool {
        self.cookies.iter().any(|c| c.role.is_healer())
    }

    pub fn has_damage_dealer(&self) -> bool {
        self.cookies.iter().any(|c| c.role.is_damage())
    }

    pub fn has_summoner(&self) -> bool {
        self.cookies.iter().any(|c| c.is_summoner())
    }

    pub fn names(&self) -> Vec<&str> {
        self.cookies.iter().map(|c| c.name.as_str()).collect()
    }
}

impl PartialEq for Team {
    fn eq(&self, other: &Self) -> bool {
        self.signature == other.signature
    }
}

impl Eq for Team {}

impl Hash for Team {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.signature.hash(state);
    }
}
