// crates/domain/src/sources.rs
use leadlens_shared_kernel::SourceCode;

/// Built-in CRM source codes and their display names. Exports routinely carry
/// codes outside this table (custom sources); those fall back to the raw code.
const SOURCE_NAMES: &[(&str, &str)] = &[
    ("CALL", "Call"),
    ("EMAIL", "E-Mail"),
    ("WEB", "Website"),
    ("ADVERTISING", "Advertising"),
    ("PARTNER", "Existing Client"),
    ("RECOMMENDATION", "Recommendation"),
    ("TRADE_SHOW", "Trade Show"),
    ("WEBFORM", "CRM Form"),
    ("CALLBACK", "Callback"),
    ("STORE", "Online Store"),
    ("REPEAT_SALE", "Repeat Sale"),
    ("OTHER", "Other"),
];

/// Display name for a known source code.
pub fn display_name(code: &SourceCode) -> Option<&'static str> {
    SOURCE_NAMES
        .iter()
        .find(|(known, _)| *known == code.as_str())
        .map(|(_, name)| *name)
}

/// Display name with the raw code as fallback for custom sources.
pub fn friendly_name(code: &SourceCode) -> &str {
    match display_name(code) {
        Some(name) => name,
        None => code.as_str(),
    }
}
