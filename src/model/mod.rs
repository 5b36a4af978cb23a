//! Entity model: cookies, treasures and teams

pub mod attributes;
pub mod cookie;
pub mod treasure;
pub mod team;

pub use attributes::{Position, Rarity, Role, TierRanking};
pub use cookie::{BattleTrait, BattleTraits, Cookie, Progression};
pub use treasure::{Treasure, UNIVERSAL_ARCHETYPE};
pub use team::{Team, TeamOptions, TeamSignature, MAX_TREASURES, TEAM_SIZE};

/// Trim an optional tag and map the table placeholders to `None`
pub(crate) fn normalize_tag(raw: Option<&str>) -> Option<String> {
    let value = raw?.trim();
    if value.is_empty()
        || value.eq_ignore_ascii_case("none")
        || value.eq_ignore_ascii_case("n/a")
        || value.eq_ignore_ascii_case("nan")
    {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_tag() {
        assert_eq!(normalize_tag(Some(" Fire ")), Some("Fire".to_string()));
        assert_eq!(normalize_tag(Some("N/A")), None);
        assert_eq!(normalize_tag(Some("None")), None);
        assert_eq!(normalize_tag(Some("")), None);
        assert_eq!(normalize_tag(None), None);
    }
}
