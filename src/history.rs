//! In-memory scrollback for the terminal widget
//!
//! Raw data storage with no formatting. Entries are immutable once pushed;
//! the buffer grows by append only and shrinks from the oldest end.

/// What kind of content an entry holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A single line of output or command echo
    Line,
    /// A pre-formatted multi-line block (ASCII banner)
    Banner,
}

/// A single entry in the scrollback
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    kind: EntryKind,
    text: String,
    /// Display weight in visible units. Lines count 1, banners count their
    /// line height.
    weight: usize,
}

impl HistoryEntry {
    /// Create a plain line entry with weight 1
    pub fn line(text: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::Line,
            text: text.into(),
            weight: 1,
        }
    }

    /// Create a banner entry weighted by its line count
    pub fn banner(text: impl Into<String>) -> Self {
        let text = text.into();
        let weight = text.lines().count().max(1);
        Self {
            kind: EntryKind::Banner,
            text,
            weight,
        }
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn weight(&self) -> usize {
        self.weight
    }
}

/// Append-only scrollback bounded by weighted size
///
/// Trimming is hysteretic: nothing is evicted until the effective size
/// exceeds twice `max_visible`, then the oldest entries go until the size is
/// back under `max_visible`. Reads use [`HistoryBuffer::visible`], which
/// never mutates storage.
pub struct HistoryBuffer {
    entries: Vec<HistoryEntry>,
    max_visible: usize,
}

impl HistoryBuffer {
    /// Create a buffer seeded with initial entries
    pub fn new(initial: Vec<HistoryEntry>, max_visible: usize) -> Self {
        let mut buffer = Self {
            entries: initial,
            max_visible: max_visible.max(1),
        };
        buffer.trim();
        buffer
    }

    /// Append one entry, trimming if the hard bound is exceeded
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
        self.trim();
    }

    /// Drop everything and start over with a single entry
    pub fn replace_all(&mut self, entry: HistoryEntry) {
        self.entries.clear();
        self.entries.push(entry);
    }

    /// Weighted size of the stored buffer
    pub fn effective_size(&self) -> usize {
        self.entries.iter().map(HistoryEntry::weight).sum()
    }

    /// Maximal suffix whose weighted size fits in `max_visible`
    ///
    /// Read-time view: between trims the stored buffer may hold more than
    /// fits on screen, and this walks back from the newest entry until the
    /// next one would overflow.
    pub fn visible(&self) -> &[HistoryEntry] {
        let mut size = 0;
        let mut start = self.entries.len();
        for (i, entry) in self.entries.iter().enumerate().rev() {
            if size + entry.weight() > self.max_visible {
                break;
            }
            size += entry.weight();
            start = i;
        }
        &self.entries[start..]
    }

    /// All stored entries, oldest first
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Hysteresis trim: over 2x the soft limit, evict oldest down to the
    /// soft limit in one pass
    fn trim(&mut self) {
        if self.effective_size() > self.max_visible * 2 {
            while self.effective_size() > self.max_visible {
                self.entries.remove(0);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(n: usize) -> Vec<HistoryEntry> {
        (0..n).map(|i| HistoryEntry::line(format!("line {}", i))).collect()
    }

    #[test]
    fn test_entry_weights() {
        assert_eq!(HistoryEntry::line("hello").weight(), 1);
        assert_eq!(HistoryEntry::banner("a\nb\nc").weight(), 3);
        // A banner never weighs zero, even when empty
        assert_eq!(HistoryEntry::banner("").weight(), 1);
    }

    #[test]
    fn test_push_below_hard_limit_keeps_everything() {
        let mut buffer = HistoryBuffer::new(Vec::new(), 10);
        for entry in lines(20) {
            buffer.push(entry);
        }
        // 20 entries = 2x the limit exactly, not over it
        assert_eq!(buffer.len(), 20);
    }

    #[test]
    fn test_hysteresis_trims_to_soft_limit() {
        let mut buffer = HistoryBuffer::new(Vec::new(), 10);
        for entry in lines(21) {
            buffer.push(entry);
        }
        // Crossing 2x trims all the way back down to max_visible
        assert_eq!(buffer.effective_size(), 10);
        // Oldest went first; survivors keep their order
        assert_eq!(buffer.entries()[0].text(), "line 11");
        assert_eq!(buffer.entries()[9].text(), "line 20");
    }

    #[test]
    fn test_effective_size_never_exceeds_hard_after_mutation() {
        let mut buffer = HistoryBuffer::new(Vec::new(), 5);
        for entry in lines(100) {
            buffer.push(entry);
            assert!(buffer.effective_size() <= 10);
        }
    }

    #[test]
    fn test_banner_counts_at_full_weight() {
        let mut buffer = HistoryBuffer::new(Vec::new(), 10);
        buffer.push(HistoryEntry::banner("1\n2\n3\n4\n5\n6"));
        for entry in lines(15) {
            buffer.push(entry);
        }
        // 6 + 15 = 21 > 20 triggers the trim, which must evict the banner
        // before the size can drop to 10
        assert_eq!(buffer.effective_size(), 10);
        assert!(buffer.entries().iter().all(|e| e.kind() == EntryKind::Line));
    }

    #[test]
    fn test_visible_is_bounded_suffix() {
        let mut buffer = HistoryBuffer::new(Vec::new(), 5);
        for entry in lines(8) {
            buffer.push(entry);
        }
        // Stored 8 (under hard limit), visible only the newest 5
        assert_eq!(buffer.len(), 8);
        let visible = buffer.visible();
        assert_eq!(visible.len(), 5);
        assert_eq!(visible[0].text(), "line 3");
        assert_eq!(visible[4].text(), "line 7");
    }

    #[test]
    fn test_visible_stops_at_heavy_entry() {
        let mut buffer = HistoryBuffer::new(Vec::new(), 5);
        buffer.push(HistoryEntry::banner("1\n2\n3\n4"));
        buffer.push(HistoryEntry::line("after"));
        // Banner (4) + line (1) = 5 fits exactly
        assert_eq!(buffer.visible().len(), 2);

        buffer.push(HistoryEntry::line("one more"));
        // Now the banner would overflow; only the lines behind it show
        let visible = buffer.visible();
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].text(), "after");
    }

    #[test]
    fn test_replace_all() {
        let mut buffer = HistoryBuffer::new(lines(7), 10);
        buffer.replace_all(HistoryEntry::line("fresh start"));
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.entries()[0].text(), "fresh start");
    }

    #[test]
    fn test_seed_is_trimmed() {
        let buffer = HistoryBuffer::new(lines(30), 10);
        assert_eq!(buffer.effective_size(), 10);
    }
}
