//! Library side of the `escena` developer CLI.

pub mod logging;
pub mod report;
