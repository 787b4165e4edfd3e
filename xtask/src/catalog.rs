use anyhow::{Context, Result};
use colored::Colorize;
use panel::ModeProvider;
use panel_specs::catalog::{self, CATALOG};
use panel_specs::PanelProfile;

pub fn run(compatible: Option<&str>, json: bool) -> Result<()> {
    let profiles: Vec<&PanelProfile> = match compatible {
        Some(key) => vec![catalog::find_profile(key)
            .with_context(|| format!("no panel matches '{key}'"))?],
        None => CATALOG.iter().collect(),
    };

    if json {
        let text = serde_json::to_string_pretty(&profiles).context("Failed to serialise catalog")?;
        println!("{text}");
        return Ok(());
    }

    println!();
    println!("{}", "📟 Panel catalog".cyan().bold());
    println!();
    for profile in profiles {
        print_profile(profile)?;
    }
    Ok(())
}

fn print_profile(profile: &PanelProfile) -> Result<()> {
    let mode = profile
        .preferred_mode()
        .map_err(|e| anyhow::anyhow!("{}: {e}", profile.name))?;
    let timing = &profile.timing;

    println!("  {} {}", profile.name.bold(), format!("({})", profile.compatible).dimmed());
    println!(
        "    mode      {} @ {} Hz, {} kHz pixel clock",
        mode.name, mode.vrefresh, timing.clock_khz
    );
    println!(
        "    totals    {} x {}, size {} x {} mm",
        timing.htotal, timing.vtotal, timing.width_mm, timing.height_mm
    );
    println!(
        "    link      {} lanes, {:?}, flags {:#06x}",
        profile.link.lanes,
        profile.link.format,
        profile.link.mode_flags.bits()
    );
    println!(
        "    init      {} writes, {} page switches",
        profile.commands.len(),
        profile.commands.page_switches()
    );
    let seq = &profile.sequence;
    println!(
        "    sequence  reset {} us + {} us, sleep-out {} ms, sleep-in {} ms",
        seq.reset_pulse_us, seq.reset_settle_us, seq.sleep_out_settle_ms, seq.sleep_in_settle_ms
    );
    if !timing.is_consistent() {
        println!("    {}", "⚠ timing is not monotonic".yellow());
    }
    println!();
    Ok(())
}
