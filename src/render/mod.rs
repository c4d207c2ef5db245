//! Generation of the Python payload executed by Maya's command port.

pub mod script;

pub use script::{GeneratedScript, operator_list_literal, render_reload_script};
