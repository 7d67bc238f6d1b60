//! Data-driven game balance
//!
//! Gameplay tuning only. Runtime concerns (service endpoints, seeds) live in
//! [`crate::settings`].

mod avatar;
mod collectible;
mod hostile;
mod progression;

pub use avatar::AvatarTuning;
pub use collectible::CollectibleTuning;
pub use hostile::HostileTuning;
pub use progression::ProgressionTuning;

use serde::{Deserialize, Serialize};

/// All balance knobs for one run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub avatar: AvatarTuning,
    pub hostile: HostileTuning,
    pub collectible: CollectibleTuning,
    pub progression: ProgressionTuning,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{ "collectible": { "loot_drop_chance": 0.5 } }"#;
        let tuning: Tuning = serde_json::from_str(json).unwrap();
        assert_eq!(tuning.collectible.loot_drop_chance, 0.5);
        assert_eq!(
            tuning.collectible.spawn_chance,
            CollectibleTuning::default().spawn_chance
        );
        assert_eq!(tuning.avatar, AvatarTuning::default());
    }
}
