//! Power sequencing and mode reporting for MIPI-DSI panels
//!
//! Drives a panel from unpowered to displaying video and back: two supply
//! rails in a fixed order, a reset pulse, the vendor init table over DSI,
//! sleep-out/display-on, and the reverse on power-down with best-effort
//! teardown.
//!
//! # Architecture
//!
//! ```text
//! Host (DRM bridge, board code)  ── &mut dyn Panel ──┐
//!                                                    ↓
//! PanelLifecycle  (state machine, rollback)   ModeProvider (modes)
//!         ↓                       ↓
//! PowerController (rails, reset)  DsiTransport (platform crate)
//!         ↓
//! PowerRail / ResetLine / DelayNs (platform crate, embedded-hal)
//! ```
//!
//! # Features
//!
//! - `std` - `std::error::Error` for [`PanelError`]
//! - `defmt` - log through defmt (hardware builds)
//! - `tracing` - log through tracing (host builds)
//!
//! # Example
//!
//! ```
//! use panel::{Panel, PanelLifecycle, PanelResources, PowerState};
//! use platform::mocks::{Journal, MockDelay, MockRail, MockResetPin, MockTransport};
//! use platform::{RailId, ResetLine, ResetPolarity};
//!
//! let journal = Journal::new();
//! let resources = PanelResources {
//!     transport: MockTransport::new(&journal),
//!     core: MockRail::new(RailId::Core, &journal),
//!     io: MockRail::new(RailId::Io, &journal),
//!     reset: ResetLine::new(MockResetPin::new(&journal), ResetPolarity::ActiveLow),
//!     delay: MockDelay::new(&journal),
//! };
//!
//! let mut lifecycle = PanelLifecycle::bind("leadtek,ltk500hd1829", resources)?;
//! let panel: &mut dyn Panel = &mut lifecycle;
//! panel.activate()?;
//! assert_eq!(panel.power_state(), PowerState::On);
//! assert_eq!(panel.preferred_mode()?.name.as_str(), "720x1280");
//! panel.deactivate()?;
//! # Ok::<(), panel::PanelError>(())
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // errors are documented on PanelError
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod log;

mod error;
mod lifecycle;
mod mode;
mod panel;
mod power;

pub use error::{PanelError, TeardownReport};
pub use lifecycle::{PanelLifecycle, PanelResources, PowerState};
pub use mode::{DisplayMode, ModeKind, ModeProvider, ModeSink, ProbedModes, MODE_NAME_LEN};
pub use panel::Panel;
pub use power::{PowerController, RailShutdown};
