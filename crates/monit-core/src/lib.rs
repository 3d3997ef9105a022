//! monit core: data points, the sink contract, and the recorder.
//!
//! This crate defines what a measurement looks like and how it travels from
//! application code to a backend. It carries no HTTP or backend dependencies
//! so adapters and request hooks can be layered on top of it.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Recording never fails the caller: sink errors are logged and dropped at the
//! `Recorder` boundary.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod point;
pub mod recorder;
pub mod sink;

/// Shared result type.
pub use error::{MonitError, Result};
pub use point::{DataPoint, FieldValue, Tags};
pub use recorder::Recorder;
pub use sink::{MemorySink, Sink};
