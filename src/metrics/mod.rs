//! Composition score components
//!
//! Each component lives in its own module and returns a `CxResult`
//! carrying its capped score plus the raw values behind it.

pub mod c1_role_diversity;
pub mod c2_position_coverage;
pub mod c3_power;
pub mod c4_bonus_modifiers;
pub mod c5_treasure_bonus;
pub mod c6_synergy_bonus;

// Re-export component functions
pub use c1_role_diversity::{calculate_c1, C1Result};
pub use c2_position_coverage::{calculate_c2, C2Result};
pub use c3_power::{calculate_c3, cookie_power, power_mode, treasure_power, C3Result, PowerMode};
pub use c4_bonus_modifiers::{calculate_c4, C4Result};
pub use c5_treasure_bonus::{calculate_c5, C5Result};
pub use c6_synergy_bonus::{calculate_c6, C6Result, MAX_SYNERGY_BONUS};
