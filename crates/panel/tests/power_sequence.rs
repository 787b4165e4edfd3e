//! Power-up / power-down ordering, timing and rollback, observed through the
//! shared mock journal.

#![allow(clippy::unwrap_used)]

mod common;

use std::time::Duration;

use common::{init_tracing, mock_panel, resources, SHORT_PROFILE};
use panel::{PanelError, PowerState};
use panel_specs::catalog::{LTK101B4029W, LTK500HD1829};
use platform::mocks::{Event, Journal, MockRail, MockResetPin, MockTransport};
use platform::{DcsCommand, PowerRail, RailId, ResetLine};

fn us(n: u64) -> Event {
    Event::Delay(Duration::from_micros(n))
}

fn ms(n: u64) -> Event {
    Event::Delay(Duration::from_millis(n))
}

// ── Happy path ───────────────────────────────────────────────────────────────

#[test]
fn power_up_runs_in_datasheet_order() {
    init_tracing();
    let journal = Journal::new();
    let mut panel = mock_panel(&SHORT_PROFILE, resources(&journal));
    journal.clear(); // ResetLine::new drove the line deasserted

    panel.activate().unwrap();

    assert_eq!(
        journal.events(),
        vec![
            Event::RailOn(RailId::Core),
            Event::RailOn(RailId::Io),
            Event::ResetLow,
            us(10),
            Event::ResetHigh,
            us(5000),
            Event::GenericWrite(vec![0xE0, 0x00]),
            Event::GenericWrite(vec![0x80, 0x03]),
            Event::GenericWrite(vec![0xE0, 0x01]),
            Event::Dcs(DcsCommand::ExitSleepMode),
            ms(120),
            Event::Dcs(DcsCommand::SetDisplayOn),
        ]
    );
    assert_eq!(panel.state(), PowerState::On);
}

#[test]
fn power_down_runs_in_datasheet_order() {
    init_tracing();
    let journal = Journal::new();
    let mut panel = mock_panel(&SHORT_PROFILE, resources(&journal));
    panel.activate().unwrap();
    journal.clear();

    panel.deactivate().unwrap();

    assert_eq!(
        journal.events(),
        vec![
            Event::Dcs(DcsCommand::SetDisplayOff),
            Event::Dcs(DcsCommand::EnterSleepMode),
            ms(120),
            Event::RailOff(RailId::Io),
            Event::RailOff(RailId::Core),
        ]
    );
    assert_eq!(panel.state(), PowerState::Off);
    assert!(panel.power().is_unpowered());
}

#[test]
fn delays_are_observed_in_order() {
    let journal = Journal::new();
    let mut panel = mock_panel(&LTK500HD1829, resources(&journal));

    panel.activate().unwrap();
    panel.deactivate().unwrap();

    assert_eq!(
        journal.delays(),
        vec![
            Duration::from_micros(10),
            Duration::from_micros(5000),
            Duration::from_millis(120),
            Duration::from_millis(120),
        ]
    );
}

#[test]
fn whole_catalog_table_is_sent_verbatim() {
    for profile in [&LTK101B4029W, &LTK500HD1829] {
        let journal = Journal::new();
        let mut panel = mock_panel(profile, resources(&journal));
        panel.activate().unwrap();

        let expected: Vec<Vec<u8>> = profile
            .commands
            .iter()
            .map(|cmd| cmd.as_bytes().to_vec())
            .collect();
        assert_eq!(journal.generic_writes(), expected, "{}", profile.name);
    }
}

#[test]
fn missing_reset_gpio_still_waits() {
    let journal = Journal::new();
    let mut res = resources(&journal);
    res.reset = ResetLine::<MockResetPin>::absent();
    let mut panel = mock_panel(&SHORT_PROFILE, res);

    panel.activate().unwrap();

    assert!(journal.position(&Event::ResetLow).is_none());
    assert_eq!(
        journal.delays(),
        vec![
            Duration::from_micros(10),
            Duration::from_micros(5000),
            Duration::from_millis(120),
        ]
    );
}

// ── Idempotence and replay ───────────────────────────────────────────────────

#[test]
fn activate_twice_has_one_set_of_side_effects() {
    let journal = Journal::new();
    let mut panel = mock_panel(&SHORT_PROFILE, resources(&journal));

    panel.activate().unwrap();
    let after_first = journal.len();
    panel.activate().unwrap();

    assert_eq!(journal.len(), after_first);
    assert_eq!(panel.state(), PowerState::On);
    assert_eq!(panel.power().core().enable_count, 1);
}

#[test]
fn deactivate_when_off_touches_nothing() {
    let journal = Journal::new();
    let mut panel = mock_panel(&SHORT_PROFILE, resources(&journal));
    journal.clear();

    panel.deactivate().unwrap();
    panel.activate().unwrap();
    panel.deactivate().unwrap();
    let after_power_down = journal.len();
    panel.deactivate().unwrap();

    assert_eq!(journal.len(), after_power_down);
    assert_eq!(panel.power().io().disable_count, 1);
}

#[test]
fn activate_replays_identical_sequence() {
    let journal = Journal::new();
    let mut panel = mock_panel(&LTK500HD1829, resources(&journal));
    journal.clear();

    panel.activate().unwrap();
    let first = journal.events();
    panel.deactivate().unwrap();
    journal.clear();
    panel.activate().unwrap();

    assert_eq!(journal.events(), first);
}

// ── Power-up failures ────────────────────────────────────────────────────────

#[test]
fn second_write_failure_aborts_and_powers_off() {
    init_tracing();
    let journal = Journal::new();
    let mut res = resources(&journal);
    res.transport = MockTransport::new(&journal).failing_write(1);
    let mut panel = mock_panel(&SHORT_PROFILE, res);

    assert_eq!(panel.activate(), Err(PanelError::CommandWrite { index: 1 }));

    assert_eq!(panel.transport().writes_attempted(), 2);
    assert_eq!(journal.generic_writes(), vec![vec![0xE0, 0x00]]);
    assert!(journal.dcs_commands().is_empty());
    assert_eq!(panel.state(), PowerState::Off);
    assert!(!panel.power().core().is_enabled());
    assert!(!panel.power().io().is_enabled());
    assert_eq!(
        journal.events().last(),
        Some(&Event::RailOff(RailId::Core))
    );
}

#[test]
fn nth_write_failure_stops_transmission() {
    let journal = Journal::new();
    let mut res = resources(&journal);
    res.transport = MockTransport::new(&journal).failing_write(100);
    let mut panel = mock_panel(&LTK500HD1829, res);

    assert_eq!(
        panel.activate(),
        Err(PanelError::CommandWrite { index: 100 })
    );
    assert_eq!(journal.generic_writes().len(), 100);
    assert_eq!(panel.transport().writes_attempted(), 101);
    assert!(panel.power().is_unpowered());
}

#[test]
fn io_supply_failure_leaves_core_off() {
    let journal = Journal::new();
    let mut res = resources(&journal);
    res.io = MockRail::new(RailId::Io, &journal).failing_enable();
    let mut panel = mock_panel(&SHORT_PROFILE, res);
    journal.clear();

    assert_eq!(panel.activate(), Err(PanelError::Supply { rail: RailId::Io }));

    assert_eq!(
        journal.events(),
        vec![
            Event::RailOn(RailId::Core),
            Event::RailFault(RailId::Io),
            Event::RailOff(RailId::Core),
        ]
    );
    assert!(panel.power().is_unpowered());
    assert_eq!(panel.state(), PowerState::Off);
}

#[test]
fn core_supply_failure_touches_nothing_else() {
    let journal = Journal::new();
    let mut res = resources(&journal);
    res.core = MockRail::new(RailId::Core, &journal).failing_enable();
    let mut panel = mock_panel(&SHORT_PROFILE, res);
    journal.clear();

    assert_eq!(
        panel.activate(),
        Err(PanelError::Supply { rail: RailId::Core })
    );
    assert_eq!(journal.events(), vec![Event::RailFault(RailId::Core)]);
    assert_eq!(panel.power().io().enable_count, 0);
}

#[test]
fn activate_can_be_retried_after_failure() {
    let journal = Journal::new();
    let mut res = resources(&journal);
    res.transport = MockTransport::new(&journal).failing_write(2);
    let mut panel = mock_panel(&SHORT_PROFILE, res);

    assert!(panel.activate().is_err());
    // failing_write is one-shot: the retry goes through.
    panel.activate().unwrap();
    assert_eq!(panel.state(), PowerState::On);
    assert!(panel.power().is_powered());
}

// ── Power-down failures ──────────────────────────────────────────────────────

#[test]
fn deactivate_completes_when_every_command_fails() {
    init_tracing();
    let journal = Journal::new();
    let mut panel = mock_panel(&SHORT_PROFILE, resources(&journal));
    panel.activate().unwrap();
    panel.transport_mut().fail_dcs = vec![DcsCommand::SetDisplayOff, DcsCommand::EnterSleepMode];
    journal.clear();

    assert_eq!(panel.deactivate(), Ok(()));

    assert_eq!(panel.state(), PowerState::Off);
    assert!(panel.power().is_unpowered());
    assert_eq!(
        journal.events(),
        vec![
            Event::TransportFault,
            Event::TransportFault,
            ms(120),
            Event::RailOff(RailId::Io),
            Event::RailOff(RailId::Core),
        ]
    );
    let report = panel.last_teardown().unwrap();
    assert!(report.display_off_failed);
    assert!(report.enter_sleep_failed);
    assert!(report.rails_off());
    assert_eq!(
        report.first_failure(),
        Some(PanelError::DisplayCommand {
            command: DcsCommand::SetDisplayOff
        })
    );
}

#[test]
fn failed_enter_sleep_still_powers_down() {
    let journal = Journal::new();
    let mut panel = mock_panel(&LTK101B4029W, resources(&journal));
    panel.activate().unwrap();
    panel.transport_mut().fail_dcs = vec![DcsCommand::EnterSleepMode];

    panel.deactivate().unwrap();

    let report = panel.last_teardown().unwrap();
    assert!(!report.display_off_failed);
    assert!(report.enter_sleep_failed);
    assert!(!report.is_clean());
    assert!(panel.power().is_unpowered());
}
