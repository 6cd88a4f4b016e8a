//! Services layer (ports + adapters).
//!
//! - `ports`: plain settings/config types used by the kernel.
//! - `adapters`: OS/runtime specific implementations (IO/async).

#[cfg(feature = "tui")]
pub mod adapters;
pub mod ports;
