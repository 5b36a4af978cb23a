//! Fixed attribute vocabularies: rarity, role, position, treasure tier

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rarity tier, ordered Common < ... < Beast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Rare,
    Special,
    Epic,
    #[serde(rename = "Super Epic")]
    SuperEpic,
    Legendary,
    Dragon,
    Ancient,
    #[serde(rename = "Ancient (Ascended)")]
    AncientAscended,
    Beast,
}

impl Rarity {
    pub const ALL: [Rarity; 10] = [
        Rarity::Common,
        Rarity::Rare,
        Rarity::Special,
        Rarity::Epic,
        Rarity::SuperEpic,
        Rarity::Legendary,
        Rarity::Dragon,
        Rarity::Ancient,
        Rarity::AncientAscended,
        Rarity::Beast,
    ];

    /// Base power weight used by basic-mode scoring
    pub fn weight(self) -> f64 {
        match self {
            Rarity::Beast => 7.0,
            Rarity::AncientAscended => 6.5,
            Rarity::Ancient => 6.0,
            Rarity::Legendary | Rarity::Dragon => 5.0,
            Rarity::SuperEpic => 4.0,
            Rarity::Epic => 3.0,
            Rarity::Special => 2.0,
            Rarity::Rare => 1.0,
            Rarity::Common => 0.5,
        }
    }

    /// Rarities that count toward type synergy
    pub fn is_high_tier(self) -> bool {
        matches!(
            self,
            Rarity::Beast
                | Rarity::Ancient
                | Rarity::AncientAscended
                | Rarity::Legendary
                | Rarity::Dragon
        )
    }

    /// Rarities used to top up counter pools and burst lists
    pub fn is_top_tier(self) -> bool {
        matches!(self, Rarity::Beast | Rarity::Ancient | Rarity::Legendary)
    }

    pub fn label(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Special => "Special",
            Rarity::Epic => "Epic",
            Rarity::SuperEpic => "Super Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Dragon => "Dragon",
            Rarity::Ancient => "Ancient",
            Rarity::AncientAscended => "Ancient (Ascended)",
            Rarity::Beast => "Beast",
        }
    }

    /// Parse a rarity label; accepts the hyphenated and spaced Ascended forms
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized: String = raw
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        match normalized.as_str() {
            "common" => Some(Rarity::Common),
            "rare" => Some(Rarity::Rare),
            "special" => Some(Rarity::Special),
            "epic" => Some(Rarity::Epic),
            "superepic" => Some(Rarity::SuperEpic),
            "legendary" => Some(Rarity::Legendary),
            "dragon" => Some(Rarity::Dragon),
            "ancient" => Some(Rarity::Ancient),
            "ancientascended" => Some(Rarity::AncientAscended),
            "beast" => Some(Rarity::Beast),
            _ => None,
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Combat role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    Defense,
    Charge,
    Healing,
    Support,
    Magic,
    Ranged,
    Bomber,
    Ambush,
    Unknown,
}

impl Role {
    pub const KNOWN: [Role; 8] = [
        Role::Defense,
        Role::Charge,
        Role::Healing,
        Role::Support,
        Role::Magic,
        Role::Ranged,
        Role::Bomber,
        Role::Ambush,
    ];

    /// Defense or Charge
    pub fn is_tank(self) -> bool {
        matches!(self, Role::Defense | Role::Charge)
    }

    /// Healing or Support
    pub fn is_healer(self) -> bool {
        matches!(self, Role::Healing | Role::Support)
    }

    /// Magic, Ranged, Bomber or Ambush
    pub fn is_damage(self) -> bool {
        matches!(self, Role::Magic | Role::Ranged | Role::Bomber | Role::Ambush)
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Defense => "Defense",
            Role::Charge => "Charge",
            Role::Healing => "Healing",
            Role::Support => "Support",
            Role::Magic => "Magic",
            Role::Ranged => "Ranged",
            Role::Bomber => "Bomber",
            Role::Ambush => "Ambush",
            Role::Unknown => "Unknown",
        }
    }

    /// Unrecognised labels become `Role::Unknown`
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        Role::KNOWN
            .iter()
            .copied()
            .find(|role| role.label().eq_ignore_ascii_case(trimmed))
            .unwrap_or(Role::Unknown)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lane assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    Front,
    Middle,
    Rear,
}

impl Position {
    pub const ALL: [Position; 3] = [Position::Front, Position::Middle, Position::Rear];

    pub fn label(self) -> &'static str {
        match self {
            Position::Front => "Front",
            Position::Middle => "Middle",
            Position::Rear => "Rear",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        Position::ALL
            .iter()
            .copied()
            .find(|p| p.label().eq_ignore_ascii_case(trimmed))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Community tier ranking of a treasure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TierRanking {
    C,
    B,
    A,
    S,
    #[serde(rename = "S+")]
    SPlus,
}

impl TierRanking {
    /// Base of the treasure power score
    pub fn power_base(self) -> f64 {
        match self {
            TierRanking::SPlus => 10.0,
            TierRanking::S => 8.5,
            TierRanking::A => 7.0,
            TierRanking::B => 5.5,
            TierRanking::C => 4.0,
        }
    }

    /// Base of treasure recommendation scores
    pub fn recommendation_base(self) -> f64 {
        match self {
            TierRanking::SPlus => 10.0,
            TierRanking::S => 8.0,
            TierRanking::A => 6.0,
            TierRanking::B => 4.0,
            TierRanking::C => 2.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TierRanking::SPlus => "S+",
            TierRanking::S => "S",
            TierRanking::A => "A",
            TierRanking::B => "B",
            TierRanking::C => "C",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "S+" => Some(TierRanking::SPlus),
            "S" => Some(TierRanking::S),
            "A" => Some(TierRanking::A),
            "B" => Some(TierRanking::B),
            "C" => Some(TierRanking::C),
            _ => None,
        }
    }
}

impl fmt::Display for TierRanking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
