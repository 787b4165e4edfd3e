//! MIPI-DSI Panel Specifications
//!
//! Static descriptors for the panels the `panel` driver can sequence:
//! vendor init command tables, preferred video timings, DSI link parameters
//! and datasheet power-sequencing delays.
//!
//! # Features
//!
//! - **no_std compatible** - all descriptors are `const` data
//! - **Catalog** - the supported Leadtek modules, looked up by compatible string
//! - **Serde support** - optional serialization for tooling (`serde` feature)
//! - **defmt support** - `defmt::Format` on all types (`defmt` feature)
//!
//! # Example
//!
//! ```
//! use panel_specs::catalog::find_profile;
//!
//! let profile = find_profile("leadtek,ltk500hd1829").unwrap();
//! assert_eq!(profile.timing.hdisplay, 720);
//! assert_eq!(profile.timing.refresh_hz(), 60);
//! assert_eq!(profile.commands.len(), 218);
//! ```
//!
//! # Custom Profiles
//!
//! ```
//! use panel_specs::{CommandTable, DisplayTiming, InitCommand, PanelProfile};
//! use panel_specs::catalog::{LEADTEK_LINK, LEADTEK_SEQUENCE};
//!
//! const INIT: &[InitCommand] = &[
//!     InitCommand::new(0xE0, 0x00),
//!     InitCommand::new(0x80, 0x03),
//!     InitCommand::new(0xE0, 0x01),
//! ];
//!
//! const MY_PANEL: PanelProfile = PanelProfile {
//!     name: "Bring-up panel",
//!     compatible: "vendor,bringup",
//!     timing: DisplayTiming {
//!         hdisplay: 480, hsync_start: 490, hsync_end: 500, htotal: 510,
//!         vdisplay: 800, vsync_start: 810, vsync_end: 812, vtotal: 820,
//!         clock_khz: 25_000, width_mm: 52, height_mm: 86,
//!     },
//!     commands: CommandTable::new(INIT),
//!     link: LEADTEK_LINK,
//!     sequence: LEADTEK_SEQUENCE,
//! };
//! assert_eq!(MY_PANEL.commands.page_at(2), Some(0));
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod catalog;
mod command;
mod profile;
mod timing;

pub use command::{CommandTable, InitCommand, PAGE_SELECT};
pub use profile::{DsiLinkConfig, DsiModeFlags, PanelProfile, PixelFormat, SequenceTimings};
pub use timing::DisplayTiming;
