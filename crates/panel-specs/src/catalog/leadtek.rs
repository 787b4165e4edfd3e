//! Leadtek MIPI-DSI panel modules
//!
//! Both modules use a JD9365-class controller and share the same power
//! sequence; they differ in geometry and in the vendor init table. The init
//! tables come from the vendor and are replayed as-is.

use crate::{
    CommandTable, DisplayTiming, DsiLinkConfig, DsiModeFlags, InitCommand, PanelProfile,
    PixelFormat, SequenceTimings,
};

/// Link parameters shared by both modules: 4 lanes, RGB888 burst video,
/// commands in low-power mode, no EOT packets.
pub const LEADTEK_LINK: DsiLinkConfig = DsiLinkConfig {
    lanes: 4,
    format: PixelFormat::Rgb888,
    mode_flags: DsiModeFlags::VIDEO
        .union(DsiModeFlags::VIDEO_BURST)
        .union(DsiModeFlags::LPM)
        .union(DsiModeFlags::NO_EOT_PACKET),
};

/// Datasheet delays shared by both modules.
///
/// - tRW: reset low for at least 10 µs
/// - tRT: at least 5 ms from reset release to the first command
/// - 120 ms for the controller to leave or enter sleep mode
pub const LEADTEK_SEQUENCE: SequenceTimings = SequenceTimings {
    reset_pulse_us: 10,
    reset_settle_us: 5_000,
    sleep_out_settle_ms: 120,
    sleep_in_settle_ms: 120,
};

/// Leadtek LTK101B4029W: 10.1" 800×1280.
pub const LTK101B4029W: PanelProfile = PanelProfile {
    name: "Leadtek LTK101B4029W",
    compatible: "leadtek,ltk101b4029w",
    timing: DisplayTiming {
        hdisplay: 800,
        hsync_start: 800 + 18,
        hsync_end: 800 + 18 + 18,
        htotal: 800 + 18 + 18 + 18,
        vdisplay: 1280,
        vsync_start: 1280 + 24,
        vsync_end: 1280 + 24 + 4,
        vtotal: 1280 + 24 + 4 + 8,
        clock_khz: 67_330,
        width_mm: 136,
        height_mm: 218,
    },
    commands: CommandTable::new(LTK101B4029W_INIT),
    link: LEADTEK_LINK,
    sequence: LEADTEK_SEQUENCE,
};

/// Leadtek LTK500HD1829: 5.0" 720×1280.
pub const LTK500HD1829: PanelProfile = PanelProfile {
    name: "Leadtek LTK500HD1829",
    compatible: "leadtek,ltk500hd1829",
    timing: DisplayTiming {
        hdisplay: 720,
        hsync_start: 720 + 50,
        hsync_end: 720 + 50 + 50,
        htotal: 720 + 50 + 50 + 50,
        vdisplay: 1280,
        vsync_start: 1280 + 30,
        vsync_end: 1280 + 30 + 4,
        vtotal: 1280 + 30 + 4 + 12,
        clock_khz: 69_217,
        width_mm: 62,
        height_mm: 110,
    },
    commands: CommandTable::new(LTK500HD1829_INIT),
    link: LEADTEK_LINK,
    sequence: LEADTEK_SEQUENCE,
};

// Page 0 unlock (E1..E3), 4-lane select (0x80), then VCOM, gamma power,
// gate power, panel/RGB cycle and TCON on page 1, GIP mapping and timing on
// page 2, page 4 tweaks, and back to page 0.
#[rustfmt::skip]
const LTK101B4029W_INIT: &[InitCommand] = &[
    InitCommand::new(0xE0, 0x00),
    InitCommand::new(0xE1, 0x93),
    InitCommand::new(0xE2, 0x65),
    InitCommand::new(0xE3, 0xF8),
    InitCommand::new(0x80, 0x03),
    InitCommand::new(0xE0, 0x01),
    InitCommand::new(0x00, 0x00),
    InitCommand::new(0x01, 0x6F),
    InitCommand::new(0x17, 0x00),
    InitCommand::new(0x18, 0xAF),
    InitCommand::new(0x19, 0x01),
    InitCommand::new(0x1A, 0x00),
    InitCommand::new(0x1B, 0xAF),
    InitCommand::new(0x1C, 0x01),
    InitCommand::new(0x1F, 0x3E),
    InitCommand::new(0x20, 0x28),
    InitCommand::new(0x21, 0x28),
    InitCommand::new(0x22, 0x7E),
    InitCommand::new(0x35, 0x26),
    InitCommand::new(0x37, 0x09),
    InitCommand::new(0x38, 0x04),
    InitCommand::new(0x39, 0x00),
    InitCommand::new(0x3A, 0x01),
    InitCommand::new(0x3C, 0x7C),
    InitCommand::new(0x3D, 0xFF),
    InitCommand::new(0x3E, 0xFF),
    InitCommand::new(0x3F, 0x7F),
    InitCommand::new(0x40, 0x06),
    InitCommand::new(0x41, 0xA0),
    InitCommand::new(0x42, 0x81),
    InitCommand::new(0x43, 0x08),
    InitCommand::new(0x44, 0x0B),
    InitCommand::new(0x45, 0x28),
    InitCommand::new(0x55, 0x0F),
    InitCommand::new(0x57, 0x69),
    InitCommand::new(0x59, 0x0A),
    InitCommand::new(0x5A, 0x28),
    InitCommand::new(0x5B, 0x14),
    InitCommand::new(0x5D, 0x7C),
    InitCommand::new(0x5E, 0x65),
    InitCommand::new(0x5F, 0x55),
    InitCommand::new(0x60, 0x47),
    InitCommand::new(0x61, 0x43),
    InitCommand::new(0x62, 0x32),
    InitCommand::new(0x63, 0x34),
    InitCommand::new(0x64, 0x1C),
    InitCommand::new(0x65, 0x33),
    InitCommand::new(0x66, 0x31),
    InitCommand::new(0x67, 0x30),
    InitCommand::new(0x68, 0x4E),
    InitCommand::new(0x69, 0x3C),
    InitCommand::new(0x6A, 0x44),
    InitCommand::new(0x6B, 0x35),
    InitCommand::new(0x6C, 0x31),
    InitCommand::new(0x6D, 0x23),
    InitCommand::new(0x6E, 0x11),
    InitCommand::new(0x6F, 0x00),
    InitCommand::new(0x70, 0x7C),
    InitCommand::new(0x71, 0x65),
    InitCommand::new(0x72, 0x55),
    InitCommand::new(0x73, 0x47),
    InitCommand::new(0x74, 0x43),
    InitCommand::new(0x75, 0x32),
    InitCommand::new(0x76, 0x34),
    InitCommand::new(0x77, 0x1C),
    InitCommand::new(0x78, 0x33),
    InitCommand::new(0x79, 0x31),
    InitCommand::new(0x7A, 0x30),
    InitCommand::new(0x7B, 0x4E),
    InitCommand::new(0x7C, 0x3C),
    InitCommand::new(0x7D, 0x44),
    InitCommand::new(0x7E, 0x35),
    InitCommand::new(0x7F, 0x31),
    InitCommand::new(0x80, 0x23),
    InitCommand::new(0x81, 0x11),
    InitCommand::new(0x82, 0x00),
    InitCommand::new(0xE0, 0x02),
    InitCommand::new(0x00, 0x1E),
    InitCommand::new(0x01, 0x1E),
    InitCommand::new(0x02, 0x41),
    InitCommand::new(0x03, 0x41),
    InitCommand::new(0x04, 0x43),
    InitCommand::new(0x05, 0x43),
    InitCommand::new(0x06, 0x1F),
    InitCommand::new(0x07, 0x1F),
    InitCommand::new(0x08, 0x35),
    InitCommand::new(0x09, 0x1F),
    InitCommand::new(0x0A, 0x15),
    InitCommand::new(0x0B, 0x15),
    InitCommand::new(0x0C, 0x1F),
    InitCommand::new(0x0D, 0x47),
    InitCommand::new(0x0E, 0x47),
    InitCommand::new(0x0F, 0x45),
    InitCommand::new(0x10, 0x45),
    InitCommand::new(0x11, 0x4B),
    InitCommand::new(0x12, 0x4B),
    InitCommand::new(0x13, 0x49),
    InitCommand::new(0x14, 0x49),
    InitCommand::new(0x15, 0x1F),
    InitCommand::new(0x16, 0x1E),
    InitCommand::new(0x17, 0x1E),
    InitCommand::new(0x18, 0x40),
    InitCommand::new(0x19, 0x40),
    InitCommand::new(0x1A, 0x42),
    InitCommand::new(0x1B, 0x42),
    InitCommand::new(0x1C, 0x1F),
    InitCommand::new(0x1D, 0x1F),
    InitCommand::new(0x1E, 0x35),
    InitCommand::new(0x1F, 0x1F),
    InitCommand::new(0x20, 0x15),
    InitCommand::new(0x21, 0x15),
    InitCommand::new(0x22, 0x1F),
    InitCommand::new(0x23, 0x46),
    InitCommand::new(0x24, 0x46),
    InitCommand::new(0x25, 0x44),
    InitCommand::new(0x26, 0x44),
    InitCommand::new(0x27, 0x4A),
    InitCommand::new(0x28, 0x4A),
    InitCommand::new(0x29, 0x48),
    InitCommand::new(0x2A, 0x48),
    InitCommand::new(0x2B, 0x1F),
    InitCommand::new(0x58, 0x40),
    InitCommand::new(0x5B, 0x30),
    InitCommand::new(0x5C, 0x03),
    InitCommand::new(0x5D, 0x30),
    InitCommand::new(0x5E, 0x01),
    InitCommand::new(0x5F, 0x02),
    InitCommand::new(0x63, 0x14),
    InitCommand::new(0x64, 0x6A),
    InitCommand::new(0x67, 0x73),
    InitCommand::new(0x68, 0x05),
    InitCommand::new(0x69, 0x14),
    InitCommand::new(0x6A, 0x6A),
    InitCommand::new(0x6B, 0x08),
    InitCommand::new(0x6C, 0x00),
    InitCommand::new(0x6D, 0x00),
    InitCommand::new(0x6E, 0x00),
    InitCommand::new(0x6F, 0x88),
    InitCommand::new(0x77, 0xDD),
    InitCommand::new(0x79, 0x0E),
    InitCommand::new(0x7A, 0x03),
    InitCommand::new(0x7D, 0x14),
    InitCommand::new(0x7E, 0x6A),
    InitCommand::new(0xE0, 0x04),
    InitCommand::new(0x09, 0x11),
    InitCommand::new(0x0E, 0x48),
    InitCommand::new(0x2B, 0x2B),
    InitCommand::new(0x2D, 0x03),
    InitCommand::new(0x2E, 0x44),
    InitCommand::new(0xE0, 0x00),
    InitCommand::new(0xE6, 0x02),
    InitCommand::new(0xE7, 0x0C),
];

#[rustfmt::skip]
const LTK500HD1829_INIT: &[InitCommand] = &[
    InitCommand::new(0xE0, 0x00),
    InitCommand::new(0xE1, 0x93),
    InitCommand::new(0xE2, 0x65),
    InitCommand::new(0xE3, 0xF8),
    InitCommand::new(0x80, 0x03),
    InitCommand::new(0xE0, 0x04),
    InitCommand::new(0x2D, 0x03),
    InitCommand::new(0xE0, 0x01),
    InitCommand::new(0x00, 0x00),
    InitCommand::new(0x01, 0xB6),
    InitCommand::new(0x03, 0x00),
    InitCommand::new(0x04, 0xC5),
    InitCommand::new(0x17, 0x00),
    InitCommand::new(0x18, 0xBF),
    InitCommand::new(0x19, 0x01),
    InitCommand::new(0x1A, 0x00),
    InitCommand::new(0x1B, 0xBF),
    InitCommand::new(0x1C, 0x01),
    InitCommand::new(0x1F, 0x7C),
    InitCommand::new(0x20, 0x26),
    InitCommand::new(0x21, 0x26),
    InitCommand::new(0x22, 0x4E),
    InitCommand::new(0x37, 0x09),
    InitCommand::new(0x38, 0x04),
    InitCommand::new(0x39, 0x08),
    InitCommand::new(0x3A, 0x1F),
    InitCommand::new(0x3B, 0x1F),
    InitCommand::new(0x3C, 0x78),
    InitCommand::new(0x3D, 0xFF),
    InitCommand::new(0x3E, 0xFF),
    InitCommand::new(0x3F, 0x00),
    InitCommand::new(0x40, 0x04),
    InitCommand::new(0x41, 0xA0),
    InitCommand::new(0x43, 0x0F),
    InitCommand::new(0x44, 0x0A),
    InitCommand::new(0x45, 0x24),
    InitCommand::new(0x55, 0x01),
    InitCommand::new(0x56, 0x01),
    InitCommand::new(0x57, 0xA5),
    InitCommand::new(0x58, 0x0A),
    InitCommand::new(0x59, 0x4A),
    InitCommand::new(0x5A, 0x38),
    InitCommand::new(0x5B, 0x10),
    InitCommand::new(0x5C, 0x19),
    InitCommand::new(0x5D, 0x7C),
    InitCommand::new(0x5E, 0x64),
    InitCommand::new(0x5F, 0x54),
    InitCommand::new(0x60, 0x48),
    InitCommand::new(0x61, 0x44),
    InitCommand::new(0x62, 0x35),
    InitCommand::new(0x63, 0x3A),
    InitCommand::new(0x64, 0x24),
    InitCommand::new(0x65, 0x3B),
    InitCommand::new(0x66, 0x39),
    InitCommand::new(0x67, 0x37),
    InitCommand::new(0x68, 0x56),
    InitCommand::new(0x69, 0x41),
    InitCommand::new(0x6A, 0x47),
    InitCommand::new(0x6B, 0x2F),
    InitCommand::new(0x6C, 0x23),
    InitCommand::new(0x6D, 0x13),
    InitCommand::new(0x6E, 0x02),
    InitCommand::new(0x6F, 0x08),
    InitCommand::new(0x70, 0x7C),
    InitCommand::new(0x71, 0x64),
    InitCommand::new(0x72, 0x54),
    InitCommand::new(0x73, 0x48),
    InitCommand::new(0x74, 0x44),
    InitCommand::new(0x75, 0x35),
    InitCommand::new(0x76, 0x3A),
    InitCommand::new(0x77, 0x22),
    InitCommand::new(0x78, 0x3B),
    InitCommand::new(0x79, 0x39),
    InitCommand::new(0x7A, 0x38),
    InitCommand::new(0x7B, 0x52),
    InitCommand::new(0x7C, 0x41),
    InitCommand::new(0x7D, 0x47),
    InitCommand::new(0x7E, 0x2F),
    InitCommand::new(0x7F, 0x23),
    InitCommand::new(0x80, 0x13),
    InitCommand::new(0x81, 0x02),
    InitCommand::new(0x82, 0x08),
    InitCommand::new(0xE0, 0x02),
    InitCommand::new(0x00, 0x57),
    InitCommand::new(0x01, 0x77),
    InitCommand::new(0x02, 0x44),
    InitCommand::new(0x03, 0x46),
    InitCommand::new(0x04, 0x48),
    InitCommand::new(0x05, 0x4A),
    InitCommand::new(0x06, 0x4C),
    InitCommand::new(0x07, 0x4E),
    InitCommand::new(0x08, 0x50),
    InitCommand::new(0x09, 0x55),
    InitCommand::new(0x0A, 0x52),
    InitCommand::new(0x0B, 0x55),
    InitCommand::new(0x0C, 0x55),
    InitCommand::new(0x0D, 0x55),
    InitCommand::new(0x0E, 0x55),
    InitCommand::new(0x0F, 0x55),
    InitCommand::new(0x10, 0x55),
    InitCommand::new(0x11, 0x55),
    InitCommand::new(0x12, 0x55),
    InitCommand::new(0x13, 0x40),
    InitCommand::new(0x14, 0x55),
    InitCommand::new(0x15, 0x55),
    InitCommand::new(0x16, 0x57),
    InitCommand::new(0x17, 0x77),
    InitCommand::new(0x18, 0x45),
    InitCommand::new(0x19, 0x47),
    InitCommand::new(0x1A, 0x49),
    InitCommand::new(0x1B, 0x4B),
    InitCommand::new(0x1C, 0x4D),
    InitCommand::new(0x1D, 0x4F),
    InitCommand::new(0x1E, 0x51),
    InitCommand::new(0x1F, 0x55),
    InitCommand::new(0x20, 0x53),
    InitCommand::new(0x21, 0x55),
    InitCommand::new(0x22, 0x55),
    InitCommand::new(0x23, 0x55),
    InitCommand::new(0x24, 0x55),
    InitCommand::new(0x25, 0x55),
    InitCommand::new(0x26, 0x55),
    InitCommand::new(0x27, 0x55),
    InitCommand::new(0x28, 0x55),
    InitCommand::new(0x29, 0x41),
    InitCommand::new(0x2A, 0x55),
    InitCommand::new(0x2B, 0x55),
    InitCommand::new(0x2C, 0x57),
    InitCommand::new(0x2D, 0x77),
    InitCommand::new(0x2E, 0x4F),
    InitCommand::new(0x2F, 0x4D),
    InitCommand::new(0x30, 0x4B),
    InitCommand::new(0x31, 0x49),
    InitCommand::new(0x32, 0x47),
    InitCommand::new(0x33, 0x45),
    InitCommand::new(0x34, 0x41),
    InitCommand::new(0x35, 0x55),
    InitCommand::new(0x36, 0x53),
    InitCommand::new(0x37, 0x55),
    InitCommand::new(0x38, 0x55),
    InitCommand::new(0x39, 0x55),
    InitCommand::new(0x3A, 0x55),
    InitCommand::new(0x3B, 0x55),
    InitCommand::new(0x3C, 0x55),
    InitCommand::new(0x3D, 0x55),
    InitCommand::new(0x3E, 0x55),
    InitCommand::new(0x3F, 0x51),
    InitCommand::new(0x40, 0x55),
    InitCommand::new(0x41, 0x55),
    InitCommand::new(0x42, 0x57),
    InitCommand::new(0x43, 0x77),
    InitCommand::new(0x44, 0x4E),
    InitCommand::new(0x45, 0x4C),
    InitCommand::new(0x46, 0x4A),
    InitCommand::new(0x47, 0x48),
    InitCommand::new(0x48, 0x46),
    InitCommand::new(0x49, 0x44),
    InitCommand::new(0x4A, 0x40),
    InitCommand::new(0x4B, 0x55),
    InitCommand::new(0x4C, 0x52),
    InitCommand::new(0x4D, 0x55),
    InitCommand::new(0x4E, 0x55),
    InitCommand::new(0x4F, 0x55),
    InitCommand::new(0x50, 0x55),
    InitCommand::new(0x51, 0x55),
    InitCommand::new(0x52, 0x55),
    InitCommand::new(0x53, 0x55),
    InitCommand::new(0x54, 0x55),
    InitCommand::new(0x55, 0x50),
    InitCommand::new(0x56, 0x55),
    InitCommand::new(0x57, 0x55),
    InitCommand::new(0x58, 0x40),
    InitCommand::new(0x59, 0x00),
    InitCommand::new(0x5A, 0x00),
    InitCommand::new(0x5B, 0x10),
    InitCommand::new(0x5C, 0x09),
    InitCommand::new(0x5D, 0x30),
    InitCommand::new(0x5E, 0x01),
    InitCommand::new(0x5F, 0x02),
    InitCommand::new(0x60, 0x30),
    InitCommand::new(0x61, 0x03),
    InitCommand::new(0x62, 0x04),
    InitCommand::new(0x63, 0x06),
    InitCommand::new(0x64, 0x6A),
    InitCommand::new(0x65, 0x75),
    InitCommand::new(0x66, 0x0F),
    InitCommand::new(0x67, 0xB3),
    InitCommand::new(0x68, 0x0B),
    InitCommand::new(0x69, 0x06),
    InitCommand::new(0x6A, 0x6A),
    InitCommand::new(0x6B, 0x10),
    InitCommand::new(0x6C, 0x00),
    InitCommand::new(0x6D, 0x04),
    InitCommand::new(0x6E, 0x04),
    InitCommand::new(0x6F, 0x88),
    InitCommand::new(0x70, 0x00),
    InitCommand::new(0x71, 0x00),
    InitCommand::new(0x72, 0x06),
    InitCommand::new(0x73, 0x7B),
    InitCommand::new(0x74, 0x00),
    InitCommand::new(0x75, 0xBC),
    InitCommand::new(0x76, 0x00),
    InitCommand::new(0x77, 0x05),
    InitCommand::new(0x78, 0x2E),
    InitCommand::new(0x79, 0x00),
    InitCommand::new(0x7A, 0x00),
    InitCommand::new(0x7B, 0x00),
    InitCommand::new(0x7C, 0x00),
    InitCommand::new(0x7D, 0x03),
    InitCommand::new(0x7E, 0x7B),
    InitCommand::new(0xE0, 0x04),
    InitCommand::new(0x09, 0x10),
    InitCommand::new(0x2B, 0x2B),
    InitCommand::new(0x2E, 0x44),
    InitCommand::new(0xE0, 0x00),
    InitCommand::new(0xE6, 0x02),
    InitCommand::new(0xE7, 0x02),
    InitCommand::new(0x35, 0x00),
];
