// Shared fixtures for the integration tests
//
// A small but realistic roster: every role and lane, a few ability
// carriers, two special-combo pairs and a handful of treasures.

#![allow(dead_code)]

use cookie_team_optimizer::{
    Cookie, OptimizerConfig, Position, Rarity, Role, TeamOptimizer, TierRanking, Treasure,
};
use std::fs;
use std::path::PathBuf;

pub fn roster() -> Vec<Cookie> {
    vec![
        Cookie::new("Hollyberry Cookie", Rarity::Ancient, Role::Defense, Position::Front)
            .with_element("Fire")
            .with_skill("Hollyberry Shield", "Shield")
            .with_shield()
            .with_groups(&["Ancient Heroes"]),
        Cookie::new("Pure Vanilla Cookie", Rarity::Ancient, Role::Healing, Position::Rear)
            .with_element("Light")
            .with_skill("Light of Healing", "Heal")
            .with_healing()
            .with_shield()
            .with_dispel()
            .with_groups(&["Ancient Heroes"]),
        Cookie::new("Dark Cacao Cookie", Rarity::Ancient, Role::Charge, Position::Front)
            .with_element("Darkness")
            .with_skill("Dragon Lord's Wrath", "Burst")
            .with_crowd_control("Stun")
            .with_groups(&["Ancient Heroes"]),
        Cookie::new("White Lily Cookie", Rarity::Ancient, Role::Magic, Position::Middle)
            .with_element("Light")
            .with_skill("Wrath of Light", "Burst")
            .with_groups(&["Ancient Heroes"]),
        Cookie::new("Sea Fairy Cookie", Rarity::Legendary, Role::Bomber, Position::Rear)
            .with_element("Water")
            .with_skill("Sea Shard", "Burst")
            .with_crowd_control("Freeze")
            .with_target_type("AoE"),
        Cookie::new("Frost Queen Cookie", Rarity::Legendary, Role::Magic, Position::Middle)
            .with_element("Ice")
            .with_crowd_control("Freeze")
            .with_target_type("AoE"),
        Cookie::new("Moonlight Cookie", Rarity::Legendary, Role::Magic, Position::Rear)
            .with_element("Darkness")
            .with_crowd_control("Sleep"),
        Cookie::new("Wind Archer Cookie", Rarity::Ancient, Role::Ranged, Position::Rear)
            .with_element("Wind")
            .with_skill("Arrow of the Hurricane", "Burst"),
        Cookie::new("Black Pearl Cookie", Rarity::Legendary, Role::Ambush, Position::Rear)
            .with_element("Water")
            .with_skill("Black Tide", "Burst")
            .with_immunity("Debuff"),
        Cookie::new("Poison Mushroom Cookie", Rarity::Epic, Role::Bomber, Position::Rear)
            .with_key_mechanic("Poison")
            .with_anti_heal(),
        Cookie::new("Dark Choco Cookie", Rarity::Epic, Role::Charge, Position::Front)
            .with_element("Darkness")
            .with_anti_tank(),
        Cookie::new("Cream Puff Cookie", Rarity::Epic, Role::Support, Position::Rear)
            .with_dispel(),
        Cookie::new("Espresso Cookie", Rarity::Epic, Role::Magic, Position::Middle)
            .with_element("Fire")
            .with_target_type("AoE"),
        Cookie::new("Latte Cookie", Rarity::Epic, Role::Magic, Position::Rear),
        Cookie::new("Parfait Cookie", Rarity::Epic, Role::Healing, Position::Rear)
            .with_healing(),
        Cookie::new("Madeleine Cookie", Rarity::Epic, Role::Defense, Position::Front)
            .with_shield()
            .with_immunity("Stun"),
        Cookie::new("Knight Cookie", Rarity::Rare, Role::Defense, Position::Front),
        Cookie::new("Custard Cookie III", Rarity::Common, Role::Healing, Position::Rear)
            .with_healing(),
    ]
    .into_iter()
    .map(Cookie::with_detected_traits)
    .collect()
}

pub fn treasures() -> Vec<Treasure> {
    let mut watch = Treasure::new("Squishy Jelly Watch", TierRanking::SPlus).with_archetypes(&["Universal"]);
    watch.cooldown_reduction_max = 15.0;

    let mut scroll = Treasure::new("Old Pilgrim's Scroll", TierRanking::S).with_archetypes(&["Universal"]);
    scroll.revive = true;

    let mut pomegranate = Treasure::new("Sacred Pomegranate", TierRanking::A).with_archetypes(&["Sustain", "Tank"]);
    pomegranate.hp_shield_max = 20.0;
    pomegranate.heal_max = 10.0;

    let mut bracelet = Treasure::new("Vial of the Cursed Flame", TierRanking::B).with_archetypes(&["DPS"]);
    bracelet.atk_boost_max = 12.0;
    bracelet.enemy_debuff = true;

    vec![watch, scroll, pomegranate, bracelet]
}

pub fn config(seed: u64) -> OptimizerConfig {
    OptimizerConfig {
        candidates: 300,
        population_size: 20,
        generations: 15,
        ..OptimizerConfig::default()
    }
    .with_seed(seed)
}

pub fn optimizer(seed: u64) -> TeamOptimizer {
    TeamOptimizer::new(roster(), treasures(), config(seed)).expect("fixture optimizer")
}

/// Write a minimal data directory with the roster, abilities and treasure CSVs
pub fn data_dir(test: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("crk_it_{}_{}", test, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create data dir");

    let mut cookies = String::from("cookie_name,cookie_rarity,cookie_role,cookie_position,cookie_element\n");
    for c in roster() {
        cookies.push_str(&format!(
            "{},{},{},{},{}\n",
            c.name,
            c.rarity,
            c.role,
            c.position,
            c.element.as_deref().unwrap_or("N/A")
        ));
    }
    fs::write(dir.join("crk_cookies.csv"), cookies).expect("write cookies");

    fs::write(
        dir.join("cookie_abilities.csv"),
        "cookie_name,skill_type,crowd_control,provides_healing,provides_shield,anti_heal,dispel,target_type\n\
         Pure Vanilla Cookie,Heal,None,True,True,False,True,Team\n\
         Sea Fairy Cookie,Burst,Freeze,False,False,False,False,AoE\n\
         Poison Mushroom Cookie,Debuff,None,False,False,True,False,AoE\n",
    )
    .expect("write abilities");

    fs::write(
        dir.join("crk_treasures.csv"),
        "treasure_name,rarity,tier_ranking,cooldown_reduction_max,heal_max,revive,recommended_archetypes\n\
         Squishy Jelly Watch,Legendary,S+,15,,False,Universal\n\
         Sacred Pomegranate,Epic,A,,10,False,Sustain|Tank\n",
    )
    .expect("write treasures");

    dir
}
