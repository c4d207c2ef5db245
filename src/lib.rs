//! Reload KL operators in a running Maya session.
//!
//! Operator names declared in a KL buffer are turned into a small Python
//! script and pushed to Maya's command port, where every Splice node whose
//! entry operator is among them is pointed back at the buffer's file.

pub mod buffer;
pub mod notify;
pub mod reload;
pub mod render;
pub mod scan;
pub mod settings;
pub mod telemetry;
pub mod transmit;

pub type Result<T> = anyhow::Result<T>;
