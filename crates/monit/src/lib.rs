//! Top-level facade crate for monit.
//!
//! Re-exports the core types, the InfluxDB backend and the HTTP layer so
//! users can depend on a single crate.

pub mod core {
    pub use monit_core::*;
}

pub mod influx {
    pub use monit_influx::*;
}

pub mod http {
    pub use monit_http::*;
}

pub use monit_core::{DataPoint, FieldValue, Recorder, Sink, Tags};
