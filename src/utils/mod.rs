//! Small helpers shared by the library and the CLI.
//!
//! - [`progress`] - progress bars that vanish without the `progress` feature

pub mod progress;
