//! Video timing descriptor
//!
//! Field layout follows the usual "display / sync start / sync end / total"
//! convention so porches and sync widths can be derived instead of stored.

/// Active area, blanking intervals, pixel clock and physical size of a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayTiming {
    /// Active pixels per line.
    pub hdisplay: u16,
    /// First pixel of the horizontal sync pulse.
    pub hsync_start: u16,
    /// Last pixel of the horizontal sync pulse.
    pub hsync_end: u16,
    /// Total pixels per line including blanking.
    pub htotal: u16,
    /// Active lines per frame.
    pub vdisplay: u16,
    /// First line of the vertical sync pulse.
    pub vsync_start: u16,
    /// Last line of the vertical sync pulse.
    pub vsync_end: u16,
    /// Total lines per frame including blanking.
    pub vtotal: u16,
    /// Pixel clock in kHz.
    pub clock_khz: u32,
    /// Physical width of the active area in millimetres.
    pub width_mm: u16,
    /// Physical height of the active area in millimetres.
    pub height_mm: u16,
}

impl DisplayTiming {
    /// Horizontal front porch in pixels.
    pub const fn h_front_porch(&self) -> u16 {
        self.hsync_start.saturating_sub(self.hdisplay)
    }

    /// Horizontal sync pulse width in pixels.
    pub const fn h_sync_width(&self) -> u16 {
        self.hsync_end.saturating_sub(self.hsync_start)
    }

    /// Horizontal back porch in pixels.
    pub const fn h_back_porch(&self) -> u16 {
        self.htotal.saturating_sub(self.hsync_end)
    }

    /// Vertical front porch in lines.
    pub const fn v_front_porch(&self) -> u16 {
        self.vsync_start.saturating_sub(self.vdisplay)
    }

    /// Vertical sync pulse width in lines.
    pub const fn v_sync_width(&self) -> u16 {
        self.vsync_end.saturating_sub(self.vsync_start)
    }

    /// Vertical back porch in lines.
    pub const fn v_back_porch(&self) -> u16 {
        self.vtotal.saturating_sub(self.vsync_end)
    }

    /// Pixel clock in Hz.
    pub const fn pixel_clock_hz(&self) -> u64 {
        (self.clock_khz as u64).saturating_mul(1000)
    }

    /// Vertical refresh rate in Hz, rounded to the nearest integer.
    ///
    /// Returns 0 for a degenerate mode with a zero total.
    pub fn refresh_hz(&self) -> u32 {
        let pixels_per_frame = u64::from(self.htotal).saturating_mul(u64::from(self.vtotal));
        let half = pixels_per_frame / 2;
        self.pixel_clock_hz()
            .saturating_add(half)
            .checked_div(pixels_per_frame)
            .and_then(|hz| u32::try_from(hz).ok())
            .unwrap_or(0)
    }

    /// Returns `true` if both axes are ordered
    /// `display <= sync_start <= sync_end <= total` and the mode is non-empty.
    pub const fn is_consistent(&self) -> bool {
        self.hdisplay > 0
            && self.vdisplay > 0
            && self.hdisplay <= self.hsync_start
            && self.hsync_start <= self.hsync_end
            && self.hsync_end <= self.htotal
            && self.vdisplay <= self.vsync_start
            && self.vsync_start <= self.vsync_end
            && self.vsync_end <= self.vtotal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODE: DisplayTiming = DisplayTiming {
        hdisplay: 720,
        hsync_start: 770,
        hsync_end: 820,
        htotal: 870,
        vdisplay: 1280,
        vsync_start: 1310,
        vsync_end: 1314,
        vtotal: 1326,
        clock_khz: 69_217,
        width_mm: 62,
        height_mm: 110,
    };

    #[test]
    fn test_porches() {
        assert_eq!(MODE.h_front_porch(), 50);
        assert_eq!(MODE.h_sync_width(), 50);
        assert_eq!(MODE.h_back_porch(), 50);
        assert_eq!(MODE.v_front_porch(), 30);
        assert_eq!(MODE.v_sync_width(), 4);
        assert_eq!(MODE.v_back_porch(), 12);
    }

    #[test]
    fn test_refresh_rounds_to_nearest() {
        // 69 217 000 / (870 * 1326) = 59.999...
        assert_eq!(MODE.refresh_hz(), 60);
        let slow = DisplayTiming {
            clock_khz: 34_000,
            ..MODE
        };
        // 34 000 000 / 1 153 620 = 29.47
        assert_eq!(slow.refresh_hz(), 29);
    }

    #[test]
    fn test_degenerate_mode() {
        let empty = DisplayTiming {
            htotal: 0,
            ..MODE
        };
        assert_eq!(empty.refresh_hz(), 0);
        assert!(!empty.is_consistent());
        assert!(MODE.is_consistent());
    }
}
