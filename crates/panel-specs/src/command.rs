//! Vendor initialisation commands
//!
//! A panel is configured by replaying a fixed list of `(address, value)`
//! register writes after reset. The list is ordered: later writes to the same
//! address win, and writes to [`PAGE_SELECT`] switch the register bank that
//! subsequent addresses refer to.

/// Vendor register that selects the active register page.
///
/// The JD9365-class controllers on the Leadtek modules expose several banks of
/// registers behind the same 8-bit address space.
pub const PAGE_SELECT: u8 = 0xE0;

/// One `(address, value)` register write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InitCommand {
    /// Register address.
    pub address: u8,
    /// Value written to the register.
    pub value: u8,
}

impl InitCommand {
    /// Create a register write.
    pub const fn new(address: u8, value: u8) -> Self {
        Self { address, value }
    }

    /// Wire payload: exactly two bytes, address first.
    pub const fn as_bytes(&self) -> [u8; 2] {
        [self.address, self.value]
    }

    /// Returns `true` if this write switches the register page.
    pub const fn is_page_select(&self) -> bool {
        self.address == PAGE_SELECT
    }
}

/// Immutable, ordered initialisation sequence for one panel variant.
///
/// The table is never reordered or deduplicated; it is replayed verbatim on
/// every power-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CommandTable {
    entries: &'static [InitCommand],
}

impl CommandTable {
    /// Wrap a static command list.
    pub const fn new(entries: &'static [InitCommand]) -> Self {
        Self { entries }
    }

    /// Number of register writes in the table.
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table holds no writes.
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The write at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&'static InitCommand> {
        self.entries.get(index)
    }

    /// All writes, in transmission order.
    pub const fn as_slice(&self) -> &'static [InitCommand] {
        self.entries
    }

    /// Iterate over the writes in transmission order.
    pub fn iter(&self) -> core::slice::Iter<'static, InitCommand> {
        self.entries.iter()
    }

    /// Register page in effect when the write at `index` is transmitted.
    ///
    /// Page 0 is active after reset. A page-select write itself is reported
    /// with the page that was active *before* it. Returns `None` when `index`
    /// is out of range.
    pub fn page_at(&self, index: usize) -> Option<u8> {
        let preceding = self.entries.get(..index)?;
        if index >= self.entries.len() {
            return None;
        }
        Some(
            preceding
                .iter()
                .rev()
                .find(|cmd| cmd.is_page_select())
                .map_or(0, |cmd| cmd.value),
        )
    }

    /// Number of page-select writes in the table.
    pub fn page_switches(&self) -> usize {
        self.entries.iter().filter(|cmd| cmd.is_page_select()).count()
    }
}

impl<'a> IntoIterator for &'a CommandTable {
    type Item = &'static InitCommand;
    type IntoIter = core::slice::Iter<'static, InitCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
