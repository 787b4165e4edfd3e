//! Hardware abstraction layer for DSI panel power sequencing
//!
//! This crate defines the seams between the panel driver and the board: the
//! two supply rails, the optional reset GPIO, and the DSI command transport.
//! Blocking delays come straight from [`embedded_hal::delay::DelayNs`].
//!
//! # Architecture Layers
//!
//! ```text
//! Host glue (DRM bridge, board bring-up code)
//!         ↓
//! Panel driver (panel crate - sequencing and modes)
//!         ↓
//! Platform HAL (this crate - trait abstractions)
//!         ↓
//! Board Layer (vendor HAL GPIOs, regulators, DSI host)
//! ```
//!
//! # Features
//!
//! - `std`: Enable the recording mocks in [`mocks`] (for testing)
//! - `defmt`: Enable defmt derives on platform types
//!
//! # Example
//!
//! ```
//! use platform::{DcsCommand, DsiTransport};
//!
//! fn wake<T: DsiTransport>(dsi: &mut T) -> Result<(), T::Error> {
//!     dsi.write_register(0xE0, 0x00)?;
//!     dsi.dcs_write(DcsCommand::ExitSleepMode)
//! }
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(clippy::unreachable)] // no unreachable!() that isn't documented
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
#![allow(clippy::doc_markdown)] // register names and supply names in doc comments
#![allow(clippy::must_use_candidate)] // hardware accessors: callers decide
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod dsi;
pub mod mocks;
pub mod rail;
pub mod reset;

pub use dsi::{DcsCommand, DsiTransport};
pub use rail::{GpioRail, PowerRail, RailId};
pub use reset::{NoResetPin, ResetLine, ResetPolarity};
