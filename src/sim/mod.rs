//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (insertion order, entity IDs ascending)
//! - No rendering, timers or network

pub mod avatar;
pub mod collectible;
pub mod collision;
pub mod effect;
pub mod entity;
pub mod hostile;
pub mod projectile;
pub mod starfield;
pub mod state;
pub mod tick;

pub use avatar::{Avatar, MAX_WEAPON_TIER, TickInput};
pub use collectible::{Collectible, CollectibleKind};
pub use collision::{circles_overlap, hits};
pub use effect::{Effect, EffectShape, EffectTint, MAX_EFFECTS};
pub use entity::{Entity, EntityIds};
pub use hostile::{Hostile, HostileKind};
pub use projectile::{Owner, Projectile};
pub use starfield::{Star, StarHue, Starfield};
pub use state::{GameEvent, SimulationState};
pub use tick::{animate_frozen, fire, tick, update_backdrop};
