//! The host's view of a panel: binding by compatible string, the object-safe
//! `Panel` trait, mode reporting, and unbinding.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

mod common;

use common::{init_tracing, mock_panel, resources, MockPanel, SHORT_PROFILE};
use panel::{
    ModeKind, ModeProvider, Panel, PanelError, PanelLifecycle, PowerState, ProbedModes,
};
use panel_specs::catalog::{LEADTEK_LINK, LTK101B4029W, LTK500HD1829};
use panel_specs::{DsiModeFlags, PixelFormat};
use platform::mocks::{Event, Journal};
use platform::{DcsCommand, PowerRail};

fn bind(compatible: &str, journal: &Journal) -> Result<MockPanel<'static>, PanelError> {
    PanelLifecycle::bind(compatible, resources(journal))
}

// ── Binding ──────────────────────────────────────────────────────────────────

#[test]
fn bind_attaches_with_profile_link() {
    init_tracing();
    let journal = Journal::new();
    let panel = bind("leadtek,ltk500hd1829", &journal).unwrap();

    assert_eq!(panel.profile().name, "Leadtek LTK500HD1829");
    assert_eq!(panel.state(), PowerState::Off);
    assert!(panel.power().is_unpowered());
    assert!(!panel.power().reset().is_asserted());
    assert_eq!(
        journal.events(),
        vec![Event::ResetHigh, Event::Attached(LEADTEK_LINK)]
    );

    let link = LEADTEK_LINK;
    assert_eq!(link.lanes, 4);
    assert_eq!(link.format, PixelFormat::Rgb888);
    assert!(link.mode_flags.contains(
        DsiModeFlags::VIDEO | DsiModeFlags::VIDEO_BURST | DsiModeFlags::LPM | DsiModeFlags::NO_EOT_PACKET
    ));
}

#[test]
fn bind_rejects_unknown_compatible() {
    let journal = Journal::new();
    assert_eq!(
        bind("leadtek,ltk050h3146w", &journal).err(),
        Some(PanelError::UnknownPanel)
    );
    assert_eq!(bind("", &journal).err(), Some(PanelError::UnknownPanel));
}

#[test]
fn bind_reports_attach_failure() {
    let journal = Journal::new();
    let mut res = resources(&journal);
    res.transport.fail_attach = true;

    let result: Result<MockPanel<'static>, _> =
        PanelLifecycle::bind("leadtek,ltk101b4029w", res);
    assert_eq!(result.err(), Some(PanelError::Attach));
}

#[test]
fn unbind_powers_down_and_detaches() {
    let journal = Journal::new();
    let mut panel = bind("leadtek,ltk101b4029w", &journal).unwrap();
    panel.activate().unwrap();
    journal.clear();

    let res = panel.unbind();

    assert_eq!(journal.events().last(), Some(&Event::Detached));
    assert_eq!(
        journal.dcs_commands(),
        vec![DcsCommand::SetDisplayOff, DcsCommand::EnterSleepMode]
    );
    assert!(!res.core.is_enabled());
    assert!(!res.io.is_enabled());
}

#[test]
fn unbind_survives_detach_failure() {
    let journal = Journal::new();
    let mut panel = bind("leadtek,ltk500hd1829", &journal).unwrap();
    panel.transport_mut().fail_detach = true;
    journal.clear();

    let res = panel.unbind();

    // Already off: nothing to power down, and the failed detach is only logged.
    assert!(journal.is_empty());
    assert!(res.reset.is_present());
}

// ── Host trait ───────────────────────────────────────────────────────────────

#[test]
fn host_drives_panel_through_trait_object() {
    let journal = Journal::new();
    let mut lifecycle = bind("leadtek,ltk500hd1829", &journal).unwrap();
    let panel: &mut dyn Panel = &mut lifecycle;

    assert_eq!(panel.power_state(), PowerState::Off);
    panel.activate().unwrap();
    assert_eq!(panel.power_state(), PowerState::On);
    panel.deactivate().unwrap();
    assert_eq!(panel.power_state(), PowerState::Off);
}

#[test]
fn host_can_hold_mixed_panels() {
    let journal = Journal::new();
    let mut wide = bind("leadtek,ltk101b4029w", &journal).unwrap();
    let mut narrow = mock_panel(&SHORT_PROFILE, resources(&journal));
    let panels: [&mut dyn Panel; 2] = [&mut wide, &mut narrow];

    for panel in panels {
        panel.activate().unwrap();
        assert_eq!(panel.power_state(), PowerState::On);
    }
}

// ── Modes ────────────────────────────────────────────────────────────────────

#[test]
fn each_profile_reports_its_own_geometry() {
    let cases = [
        ("leadtek,ltk101b4029w", LTK101B4029W.timing, "800x1280", 67_330),
        ("leadtek,ltk500hd1829", LTK500HD1829.timing, "720x1280", 69_217),
    ];

    for (compatible, timing, name, clock_khz) in cases {
        let journal = Journal::new();
        let panel = bind(compatible, &journal).unwrap();
        let host: &dyn Panel = &panel;

        let mode = host.preferred_mode().unwrap();
        assert_eq!(mode.timing, timing, "{compatible}");
        assert_eq!(mode.name.as_str(), name);
        assert_eq!(mode.timing.clock_khz, clock_khz);
        assert_eq!(mode.vrefresh, 60);
        assert_eq!(mode.kind, ModeKind::DRIVER | ModeKind::PREFERRED);
    }
}

#[test]
fn preferred_mode_has_no_side_effects() {
    let journal = Journal::new();
    let panel = bind("leadtek,ltk500hd1829", &journal).unwrap();
    journal.clear();

    let first = Panel::preferred_mode(&panel).unwrap();
    let second = ModeProvider::preferred_mode(&panel).unwrap();

    assert_eq!(first, second);
    assert!(journal.is_empty());
    assert_eq!(panel.state(), PowerState::Off);
}

#[test]
fn get_modes_fills_connector() {
    let journal = Journal::new();
    let mut panel = bind("leadtek,ltk500hd1829", &journal).unwrap();
    panel.activate().unwrap();

    let mut connector = ProbedModes::<4>::new();
    let host: &dyn Panel = &panel;
    assert_eq!(host.get_modes(&mut connector).unwrap(), 1);

    assert_eq!(connector.physical_size(), (62, 110));
    assert_eq!(connector.modes()[0].name.as_str(), "720x1280");
    assert!(connector.preferred().is_some());
}

#[test]
fn get_modes_into_full_connector_fails() {
    let journal = Journal::new();
    let panel = bind("leadtek,ltk101b4029w", &journal).unwrap();
    let mut connector = ProbedModes::<0>::new();

    assert_eq!(
        Panel::get_modes(&panel, &mut connector),
        Err(PanelError::ResourceExhausted)
    );
}
