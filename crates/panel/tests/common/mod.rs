//! Shared fixtures for the panel integration tests.

#![allow(dead_code)]

use panel::{PanelLifecycle, PanelResources};
use panel_specs::catalog::{LEADTEK_LINK, LEADTEK_SEQUENCE, LTK500HD1829};
use panel_specs::{CommandTable, InitCommand, PanelProfile};
use platform::mocks::{Journal, MockDelay, MockRail, MockResetPin, MockTransport};
use platform::{RailId, ResetLine, ResetPolarity};

/// Lifecycle wired entirely to recording mocks.
pub type MockPanel<'a> =
    PanelLifecycle<'a, MockTransport, MockRail, MockRail, MockResetPin, MockDelay>;

/// Resource bundle wired entirely to recording mocks.
pub type MockResources = PanelResources<MockTransport, MockRail, MockRail, MockResetPin, MockDelay>;

/// Three writes: page 0, one register, page 1.
pub static SHORT_TABLE: [InitCommand; 3] = [
    InitCommand::new(0xE0, 0x00),
    InitCommand::new(0x80, 0x03),
    InitCommand::new(0xE0, 0x01),
];

/// LTK500HD1829 geometry with the three-entry table.
pub static SHORT_PROFILE: PanelProfile = PanelProfile {
    name: "short table",
    compatible: "test,short-table",
    timing: LTK500HD1829.timing,
    commands: CommandTable::new(&SHORT_TABLE),
    link: LEADTEK_LINK,
    sequence: LEADTEK_SEQUENCE,
};

/// Mocks that succeed at everything.
pub fn resources(journal: &Journal) -> MockResources {
    PanelResources {
        transport: MockTransport::new(journal),
        core: MockRail::new(RailId::Core, journal),
        io: MockRail::new(RailId::Io, journal),
        reset: ResetLine::new(MockResetPin::new(journal), ResetPolarity::ActiveLow),
        delay: MockDelay::new(journal),
    }
}

/// An `Off` panel for `profile`.
pub fn mock_panel(profile: &PanelProfile, resources: MockResources) -> MockPanel<'_> {
    PanelLifecycle::from_resources(profile, resources)
}

/// Route driver logs to the test output when built with `tracing`.
///
/// Filter with `RUST_LOG`, e.g. `RUST_LOG=panel=trace`.
pub fn init_tracing() {
    #[cfg(feature = "tracing")]
    {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }
}
