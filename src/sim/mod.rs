//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Time enters only as per-tick deltas
//! - Randomness comes from an injected RNG
//! - Stable iteration order (rocks in spawn order)
//! - No rendering, audio or platform dependencies

pub mod clock;
pub mod collision;
pub mod entity;
pub mod obstacle;
pub mod scroll;
pub mod shape;
pub mod state;
pub mod tick;
pub mod vehicle;

pub use clock::{Clock, ManualTimeSource, TimeSource};
pub use collision::{Collision, check_collision, detect};
pub use entity::{DrawRequest, Entity, EntityKind};
pub use obstacle::{Obstacle, Orientation};
pub use scroll::{LayerKind, ScrollLayer};
pub use shape::Silhouette;
pub use state::{Session, SessionEvent, SessionState, SessionView};
pub use tick::{TickInput, tick};
pub use vehicle::Vehicle;
