//! `mmn-core` — foundational types for the `mmn` queue simulator.
//!
//! This crate is a dependency of every other `mmn-*` crate.  It intentionally
//! has no `mmn-*` dependencies and minimal external ones (`rand`,
//! `rand_distr`, and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `CustomerId`, `ServerId`                              |
//! | [`time`]        | `Tick`, `SimClock`, `QueueConfig`                     |
//! | [`rng`]         | `SimRng`, `ServiceTimeDist`                           |
//! | [`error`]       | `MmnError`, `MmnResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{MmnError, MmnResult};
pub use ids::{CustomerId, ServerId};
pub use rng::{ServiceTimeDist, SimRng};
pub use time::{QueueConfig, SimClock, Tick};
