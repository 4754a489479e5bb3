//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (insertion order for platforms and entities)
//! - No rendering or platform dependencies; sound goes through an injected sink

pub mod autopilot;
pub mod boss;
pub mod collision;
pub mod geom;
pub mod layouts;
pub mod level;
pub mod pickup;
pub mod player;
pub mod robot;
pub mod state;
pub mod tick;
pub mod timers;

pub use autopilot::autopilot_input;
pub use boss::{Boss, BossPattern};
pub use collision::{Axis, AxisResolution, integrate_and_land, resolve_axis};
pub use geom::{Body, Rect};
pub use level::{Level, build_level};
pub use pickup::{Collectible, CollectibleKind};
pub use player::{EffectKind, EffectToken, Player};
pub use robot::{Robot, RobotKind};
pub use state::{GamePhase, GameState, Hud, PhaseEvent, RngState};
pub use tick::{TickInput, tick};
pub use timers::{Countdown, PowerKind, PowerTimers, Stamina};
