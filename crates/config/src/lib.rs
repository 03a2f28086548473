//! Configuration for the SolarBot engine
//!
//! All tunable business values live here as compile-time constants; the
//! engine has no file-based configuration surface.

pub mod constants;
