//! Small helpers shared by the formkit crates.

pub mod case;
