//! Catalog of supported panels
//!
//! A fixed, read-only table built at compile time. Hosts select an entry once
//! at bind time by its compatible string; there is no runtime registration.

pub mod leadtek;

pub use leadtek::{LEADTEK_LINK, LEADTEK_SEQUENCE, LTK101B4029W, LTK500HD1829};

use crate::PanelProfile;

/// Every panel this driver knows how to sequence.
pub static CATALOG: &[PanelProfile] = &[LTK101B4029W, LTK500HD1829];

/// Look up a panel by its compatible string.
///
/// Matching is exact; returns `None` for an unknown key.
pub fn find_profile(compatible: &str) -> Option<&'static PanelProfile> {
    CATALOG.iter().find(|profile| profile.compatible == compatible)
}

/// Compatible strings of all catalog entries, in catalog order.
pub fn compatibles() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|profile| profile.compatible)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_compatible() {
        let wide = find_profile("leadtek,ltk101b4029w").unwrap();
        assert_eq!(wide.timing.hdisplay, 800);
        assert_eq!(wide.timing.clock_khz, 67_330);

        let narrow = find_profile("leadtek,ltk500hd1829").unwrap();
        assert_eq!(narrow.timing.hdisplay, 720);
        assert_eq!(narrow.timing.clock_khz, 69_217);
    }

    #[test]
    fn test_unknown_key() {
        assert!(find_profile("leadtek,ltk050h3146w").is_none());
        assert!(find_profile("").is_none());
        assert!(find_profile("LEADTEK,LTK500HD1829").is_none(), "match is exact");
    }

    #[test]
    fn test_compatibles_are_unique() {
        let keys: Vec<&str> = compatibles().collect();
        assert_eq!(keys, vec!["leadtek,ltk101b4029w", "leadtek,ltk500hd1829"]);
    }
}
