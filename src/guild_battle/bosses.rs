//! Guild battle boss profiles

use crate::error::{Result, TeamError};
use crate::model::BattleTrait;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BossProfile {
    pub name: &'static str,
    pub description: &'static str,
    pub mechanics: &'static [&'static str],
    /// First tip is quoted in every team strategy line
    pub tips: &'static [&'static str],
    pub preferred: &'static [BattleTrait],
    pub avoid: &'static [BattleTrait],
    pub s_tier: &'static [&'static str],
    pub a_tier: &'static [&'static str],
}

impl BossProfile {
    pub fn is_s_tier(&self, name: &str) -> bool {
        self.s_tier.contains(&name)
    }

    pub fn is_a_tier(&self, name: &str) -> bool {
        self.a_tier.contains(&name)
    }
}

pub static BOSSES: &[BossProfile] = &[
    BossProfile {
        name: "Red Velvet Dragon",
        description: "75% damage reflection, high DEF. Avoid burst damage, use DEF shred and indirect damage.",
        mechanics: &[
            "Red Dragon's Scales: Reflects 75% of damage back to attacker",
            "Extremely high DEF requiring DEF reduction",
            "Susceptible to most debuffs",
            "Summons Red Velvet Wraiths",
            "Dragon Breath: Continuous damage (350% ATK per hit)",
        ],
        tips: &[
            "Prioritize DEF reduction (Dark Choco, Candy Apple) before deploying high-damage skills",
            "Use indirect damage (poison, electrifying effects) that bypass damage reflection",
            "Employ intangible state skills to avoid reflection damage",
            "Avoid burst-damage specialists unless DEF debuffs are active",
        ],
        preferred: &[BattleTrait::DefShred, BattleTrait::IndirectDamage],
        avoid: &[],
        s_tier: &[
            "Black Sapphire Cookie",
            "Prune Juice Cookie",
            "Shadow Milk Cookie",
            "Candy Apple Cookie",
            "Dark Choco Cookie",
        ],
        a_tier: &[
            "Affogato Cookie",
            "Eclair Cookie",
            "Black Lemonade Cookie",
            "Poison Mushroom Cookie",
            "Vampire Cookie",
        ],
    },
    BossProfile {
        name: "Avatar of Destiny",
        description: "Immune to debuffs (triggers Reversal). Use periodic damage, shields, and ATK SPD buffs.",
        mechanics: &[
            "Destiny: Reversal - Immune to debuffs, stacks counters (3 stacks = 50% max HP damage + stun)",
            "Destiny: Weakness - Takes 45% increased damage",
            "Destiny: Doom - 100% max HP true damage (instant KO without shields)",
            "Summons 5 indestructible Stones of Destiny (33 hit durability each)",
            "Periodic damage (poison/burn) does NOT trigger Reversal counter",
        ],
        tips: &[
            "Use Crème Brûlée Cookie's Accelerando skill (designed for this boss)",
            "Stack ATK SPD buffs (Mint Choco, Star Coral)",
            "Avoid debuff-focused cookies (Black Raisin, Captain Caviar, Linzer)",
            "Use shields to protect against Doom instant-KO (Blackberry, Star Coral)",
            "Multi-hit skills to destroy Stones of Destiny (Pudding à la Mode, Macaron)",
        ],
        preferred: &[
            BattleTrait::AttackSpeedBuff,
            BattleTrait::ShieldProvider,
            BattleTrait::IndirectDamage,
        ],
        avoid: &[BattleTrait::DebuffHeavy],
        s_tier: &[
            "Crème Brûlée Cookie",
            "Pudding à la Mode Cookie",
            "Star Coral Cookie",
            "Cream Ferret Cookie",
            "Mint Choco Cookie",
        ],
        a_tier: &[
            "Twizzly Gummy Cookie",
            "Marshmallow Cookie",
            "Blackberry Cookie",
            "Macaron Cookie",
            "Fire Spirit Cookie",
        ],
    },
    BossProfile {
        name: "Living Abyss",
        description: "95% damage reduction on boss. Target ooze blobs with AOE damage and crowd control.",
        mechanics: &[
            "Chill of the Abyss: Immune to debuffs except Burn and Vampiric Bite",
            "95% damage reduction on boss - direct attacks ineffective",
            "Abyssal Hive: Spawns 8 Licorice Ooze blobs (19.3% damage transfer to boss)",
            "Ooze blobs gain Weakness stacks (up to 50) from incapacitating debuffs",
            "Devour: Swallows highest HP target for 5 seconds",
        ],
        tips: &[
            "Prioritize AOE damage over single-target attacks",
            "Target ooze blobs instead of the boss directly",
            "Use continuous incapacitating abilities to stack Weakness on blobs",
            "Skills scaling with multiple targets are most effective",
        ],
        preferred: &[BattleTrait::AoeDamage],
        avoid: &[BattleTrait::SingleTargetFocus],
        s_tier: &[
            "Blueberry Pie Cookie",
            "Black Forest Cookie",
            "Twizzly Gummy Cookie",
            "Eternal Sugar Cookie",
            "Wedding Cake Cookie",
        ],
        a_tier: &[
            "Black Pearl Cookie",
            "Frost Queen Cookie",
            "Sea Fairy Cookie",
            "Pumpkin Pie Cookie",
            "Espresso Cookie",
        ],
    },
    BossProfile {
        name: "Machine-God of the Eternal Void",
        description: "Water-element focus. Multi-part boss weak to water, immune to electric.",
        mechanics: &[
            "Unstable Engineering: Immune to most debuffs except water-based",
            "Takes extra damage from water-element attacks",
            "Immune to electric damage",
            "Multi-part boss - AOE hits multiple targets simultaneously",
        ],
        tips: &[
            "Use water-element cookies exclusively for optimal damage",
            "Stack water damage buffs (Cream Soda, Frilled Jellyfish)",
            "Sea Fairy Rally Effect: +45% ATK to team",
        ],
        preferred: &[BattleTrait::WaterElement, BattleTrait::AoeDamage],
        avoid: &[BattleTrait::ElectricElement],
        s_tier: &[
            "Menthol Cookie",
            "Seltzer Cookie",
            "Cream Soda Cookie",
            "Frilled Jellyfish Cookie",
            "Sea Fairy Cookie",
        ],
        a_tier: &[
            "Oyster Cookie",
            "Sorbet Shark Cookie",
            "Peppermint Cookie",
            "Squid Ink Cookie",
            "Cream Ferret Cookie",
        ],
    },
];

/// Look up a boss by name, ignoring case and surrounding whitespace
pub fn boss(name: &str) -> Result<&'static BossProfile> {
    let wanted = name.trim();
    BOSSES
        .iter()
        .find(|b| b.name.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| TeamError::UnknownBoss(wanted.to_string()))
}

pub fn boss_names() -> impl Iterator<Item = &'static str> {
    BOSSES.iter().map(|b| b.name)
}
