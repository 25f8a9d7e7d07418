use std::collections::HashSet;

/// Browser family an artifact's table set belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserKind {
    Chromium,
    Firefox,
    Unknown,
}

impl BrowserKind {
    pub fn label(&self) -> &'static str {
        match self {
            BrowserKind::Chromium => "chromium",
            BrowserKind::Firefox => "firefox",
            BrowserKind::Unknown => "unknown",
        }
    }
}

/// Classify an artifact from the set of table names it contains.
///
/// Checked in priority order; a database carrying both layouts (never
/// observed in the wild) classifies as Chromium.
pub fn detect_browser(tables: &HashSet<String>) -> BrowserKind {
    if tables.contains("urls") && tables.contains("visits") {
        BrowserKind::Chromium
    } else if tables.contains("moz_places") && tables.contains("moz_historyvisits") {
        BrowserKind::Firefox
    } else {
        BrowserKind::Unknown
    }
}
