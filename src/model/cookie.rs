//! Cookie record
//!
//! One selectable unit. Identity is the name: two cookies compare equal
//! iff their names match, whatever their other attributes.
//!
//! Optional abilities are typed options; the builder normalises the
//! placeholder strings used by the source tables ("None", "N/A") to `None`.

use crate::metrics::c3_power::cookie_power;
use crate::model::attributes::{Position, Rarity, Role};
use crate::model::normalize_tag;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Names whose kits shred DEF
const DEF_SHRED_COOKIES: [&str; 5] = [
    "Dark Choco Cookie",
    "Candy Apple Cookie",
    "Black Lemonade Cookie",
    "Eclair Cookie",
    "Affogato Cookie",
];

const ATTACK_SPEED_COOKIES: [&str; 4] = [
    "Mint Choco Cookie",
    "Star Coral Cookie",
    "Cotton Cookie",
    "Financier Cookie",
];

const DEBUFF_HEAVY_COOKIES: [&str; 5] = [
    "Black Raisin Cookie",
    "Captain Caviar Cookie",
    "Linzer Cookie",
    "Affogato Cookie",
    "Eclair Cookie",
];

/// Optional progression stats; any present value switches power to advanced mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Progression {
    pub cookie_level: Option<f64>,
    pub skill_level: Option<f64>,
    pub topping_quality: Option<f64>,
}

impl Progression {
    pub fn new(cookie_level: f64, skill_level: f64, topping_quality: f64) -> Self {
        Self {
            cookie_level: Some(cookie_level),
            skill_level: Some(skill_level),
            topping_quality: Some(topping_quality),
        }
    }

    /// True when any stat is present and positive; zero counts as unset
    pub fn is_set(&self) -> bool {
        [self.cookie_level, self.skill_level, self.topping_quality]
            .iter()
            .any(|v| v.is_some_and(|x| x > 0.0))
    }
}

/// Guild battle traits a boss can prefer or punish
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattleTrait {
    WaterElement,
    ElectricElement,
    AoeDamage,
    SingleTargetFocus,
    DefShred,
    IndirectDamage,
    AttackSpeedBuff,
    ShieldProvider,
    DebuffHeavy,
}

impl BattleTrait {
    pub fn label(self) -> &'static str {
        match self {
            BattleTrait::WaterElement => "water element",
            BattleTrait::ElectricElement => "electric element",
            BattleTrait::AoeDamage => "AoE damage",
            BattleTrait::SingleTargetFocus => "single-target focus",
            BattleTrait::DefShred => "DEF shred",
            BattleTrait::IndirectDamage => "indirect damage",
            BattleTrait::AttackSpeedBuff => "ATK SPD buff",
            BattleTrait::ShieldProvider => "shield provider",
            BattleTrait::DebuffHeavy => "debuff heavy",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleTraits {
    pub water_element: bool,
    pub electric_element: bool,
    pub aoe_damage: bool,
    pub single_target_focus: bool,
    pub def_shred: bool,
    pub indirect_damage: bool,
    pub attack_speed_buff: bool,
    pub shield_provider: bool,
    pub debuff_heavy: bool,
}

impl BattleTraits {
    /// Derive traits from the cookie's name, element, targeting and abilities
    pub fn detect(cookie: &Cookie) -> Self {
        let element = cookie
            .element
            .as_deref()
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let mechanic = cookie
            .key_mechanic
            .as_deref()
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let target = cookie.target_type.as_deref().unwrap_or("");
        let name = cookie.name.as_str();

        Self {
            water_element: element.contains("water"),
            electric_element: element.contains("electric"),
            aoe_damage: target == "AoE",
            single_target_focus: target.eq_ignore_ascii_case("single")
                || target.eq_ignore_ascii_case("single target"),
            def_shred: DEF_SHRED_COOKIES.contains(&name),
            indirect_damage: cookie.anti_heal
                || mechanic.contains("poison")
                || mechanic.contains("burn"),
            attack_speed_buff: ATTACK_SPEED_COOKIES.contains(&name),
            shield_provider: cookie.provides_shield,
            debuff_heavy: DEBUFF_HEAVY_COOKIES.contains(&name),
        }
    }

    pub fn has(&self, trait_: BattleTrait) -> bool {
        match trait_ {
            BattleTrait::WaterElement => self.water_element,
            BattleTrait::ElectricElement => self.electric_element,
            BattleTrait::AoeDamage => self.aoe_damage,
            BattleTrait::SingleTargetFocus => self.single_target_focus,
            BattleTrait::DefShred => self.def_shred,
            BattleTrait::IndirectDamage => self.indirect_damage,
            BattleTrait::AttackSpeedBuff => self.attack_speed_buff,
            BattleTrait::ShieldProvider => self.shield_provider,
            BattleTrait::DebuffHeavy => self.debuff_heavy,
        }
    }
}

/// A selectable cookie
#[derive(Debug, Clone)]
pub struct Cookie {
    pub name: String,
    pub rarity: Rarity,
    pub role: Role,
    pub position: Position,
    pub element: Option<String>,
    pub progression: Progression,

    pub skill_name: Option<String>,
    pub skill_type: Option<String>,
    /// Crowd-control type inflicted by the skill (Stun, Freeze, ...)
    pub crowd_control: Option<String>,
    /// Immunity type granted to allies
    pub grants_immunity: Option<String>,
    pub provides_healing: bool,
    pub provides_shield: bool,
    pub anti_heal: bool,
    pub anti_tank: bool,
    pub dispel: bool,
    pub target_type: Option<String>,
    pub key_mechanic: Option<String>,

    pub traits: BattleTraits,
    pub synergy_groups: Vec<String>,
    pub special_combos: Vec<String>,
}

impl Cookie {
    pub fn new(name: impl Into<String>, rarity: Rarity, role: Role, position: Position) -> Self {
        Self {
            name: name.into(),
            rarity,
            role,
            position,
            element: None,
            progression: Progression::default(),
            skill_name: None,
            skill_type: None,
            crowd_control: None,
            grants_immunity: None,
            provides_healing: false,
            provides_shield: false,
            anti_heal: false,
            anti_tank: false,
            dispel: false,
            target_type: None,
            key_mechanic: None,
            traits: BattleTraits::default(),
            synergy_groups: Vec::new(),
            special_combos: Vec::new(),
        }
    }

    pub fn with_element(mut self, element: &str) -> Self {
        self.element = normalize_tag(Some(element));
        self
    }

    pub fn with_progression(mut self, progression: Progression) -> Self {
        self.progression = progression;
        self
    }

    pub fn with_skill(mut self, skill_name: &str, skill_type: &str) -> Self {
        self.skill_name = normalize_tag(Some(skill_name));
        self.skill_type = normalize_tag(Some(skill_type));
        self
    }

    pub fn with_crowd_control(mut self, cc: &str) -> Self {
        self.crowd_control = normalize_tag(Some(cc));
        self
    }

    pub fn with_immunity(mut self, immunity: &str) -> Self {
        self.grants_immunity = normalize_tag(Some(immunity));
        self
    }

    pub fn with_healing(mut self) -> Self {
        self.provides_healing = true;
        self
    }

    pub fn with_shield(mut self) -> Self {
        self.provides_shield = true;
        self
    }

    pub fn with_anti_heal(mut self) -> Self {
        self.anti_heal = true;
        self
    }

    pub fn with_anti_tank(mut self) -> Self {
        self.anti_tank = true;
        self
    }

    pub fn with_dispel(mut self) -> Self {
        self.dispel = true;
        self
    }

    pub fn with_target_type(mut self, target: &str) -> Self {
        self.target_type = normalize_tag(Some(target));
        self
    }

    pub fn with_key_mechanic(mut self, mechanic: &str) -> Self {
        self.key_mechanic = normalize_tag(Some(mechanic));
        self
    }

    pub fn with_groups<S: AsRef<str>>(mut self, groups: &[S]) -> Self {
        self.synergy_groups = groups.iter().map(|g| g.as_ref().to_string()).collect();
        self
    }

    pub fn with_combos<S: AsRef<str>>(mut self, combos: &[S]) -> Self {
        self.special_combos = combos.iter().map(|c| c.as_ref().to_string()).collect();
        self
    }

    /// Recompute battle traits from the current attributes
    pub fn with_detected_traits(mut self) -> Self {
        self.traits = BattleTraits::detect(&self);
        self
    }

    pub fn with_traits(mut self, traits: BattleTraits) -> Self {
        self.traits = traits;
        self
    }

    /// Power score; recomputed on every call
    pub fn power(&self) -> f64 {
        cookie_power(self)
    }

    pub fn is_advanced(&self) -> bool {
        self.progression.is_set()
    }

    pub fn has_crowd_control(&self) -> bool {
        self.crowd_control.is_some()
    }

    pub fn has_immunity(&self) -> bool {
        self.grants_immunity.is_some()
    }

    pub fn skill_is(&self, skill_type: &str) -> bool {
        self.skill_type.as_deref() == Some(skill_type)
    }

    /// Skill type "Damage"
    pub fn deals_burst(&self) -> bool {
        self.skill_is("Damage")
    }

    pub fn is_summoner(&self) -> bool {
        self.skill_is("Summon")
    }

    pub fn targets_backline(&self) -> bool {
        self.role == Role::Ambush || self.target_type.as_deref() == Some("Backline")
    }
}

impl PartialEq for Cookie {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Cookie {}

impl Hash for Cookie {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
