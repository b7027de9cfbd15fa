//! `mmn-sim` — discrete-time M/M/n queue simulation.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.max_ticks:
//!   ① Arrival  — one uniform draw; below arrival_probability → a new
//!                customer joins the tail of the FIFO queue.
//!   ② Servers  — in ascending ServerId order, each server:
//!                  dispatch:   idle && queue non-empty → pop head,
//!                              completion_tick = tick + round(Exp(1/mean))
//!                  completion: busy && tick >= completion_tick → fold
//!                              wait/sojourn into Statistics, go idle
//!   ③ Sample   — record queue length and busy-server count.
//! ```
//!
//! Queue and statistics are owned by [`QueueSim`] and passed by `&mut` to the
//! arrival process and server pool; nothing reaches back into the runner.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs [`run_replications`] on Rayon's thread pool.      |
//! | `serde`    | Derives `Serialize`/`Deserialize` on value types.      |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use mmn_core::QueueConfig;
//! use mmn_sim::SimBuilder;
//!
//! let config = QueueConfig {
//!     arrival_probability: 0.9,
//!     mean_service_time:   0.5,
//!     server_count:        1,
//!     max_ticks:           1_000,
//!     seed:                42,
//! };
//! let metrics = SimBuilder::new(config).build()?.run();
//! println!("{:?}", metrics.to_map());
//! ```

pub mod arrival;
pub mod builder;
pub mod customer;
pub mod error;
pub mod observer;
pub mod queue;
pub mod replication;
pub mod server;
pub mod sim;
pub mod stats;


pub use arrival::ArrivalProcess;
pub use builder::SimBuilder;
pub use customer::{Customer, Departure};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use queue::CustomerQueue;
pub use replication::{ReplicationSummary, run_replications};
pub use server::{Server, ServerPool};
pub use sim::QueueSim;
pub use stats::{Metrics, Statistics, TickSample};
