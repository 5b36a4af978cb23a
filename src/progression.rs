//! Progression stat updates
//!
//! Stats arrive as `name -> {cookie_level, skill_level, topping_quality}`.
//! Each listed cookie gets all three values replaced (a missing value
//! clears that stat); unlisted cookies are left alone.

use crate::model::{Cookie, Progression};
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Apply stats copy-on-write; returns how many cookies changed
pub fn apply_progression(cookies: &mut [Arc<Cookie>], stats: &HashMap<String, Progression>) -> usize {
    let mut updated = 0;
    for cookie in cookies.iter_mut() {
        if let Some(progression) = stats.get(&cookie.name) {
            Arc::make_mut(cookie).progression = *progression;
            updated += 1;
        }
    }

    let unmatched = stats.len().saturating_sub(updated);
    if unmatched > 0 {
        warn!("{} progression entries matched no cookie", unmatched);
    }
    info!("Updated progression for {} cookies", updated);
    updated
}

/// Load a progression map from JSON
pub fn load_progression(path: &Path) -> Result<HashMap<String, Progression>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read progression stats: {:?}", path))?;
    let stats: HashMap<String, Progression> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse progression stats: {:?}", path))?;
    Ok(stats)
}
