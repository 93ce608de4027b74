use super::node::FootnoteEntry;

/// Append-only sink for footnote references encountered while formatting.
///
/// The sink is injected per call and owned by whoever renders the whole
/// message, so a consolidated footnote list can be built elsewhere. The
/// formatter only ever appends; it never reads entries back.
pub trait FootnoteSink {
    fn record(&mut self, entry: FootnoteEntry);
}

impl FootnoteSink for Vec<FootnoteEntry> {
    fn record(&mut self, entry: FootnoteEntry) {
        self.push(entry);
    }
}
