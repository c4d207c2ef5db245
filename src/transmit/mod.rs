//! Delivery of generated scripts to Maya's command port.

pub mod error;
pub mod port;

pub use error::TransmitError;
pub use port::send_script;
