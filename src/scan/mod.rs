//! Operator extraction from KL source text.

pub mod name;
pub mod parse;

pub use name::OperatorName;
pub use parse::scan_operators;
