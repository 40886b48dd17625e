use std::collections::BTreeMap;

/// Non-printing character fed to the field when a selection exists but the
/// user has not typed anything. A truly empty value collapses the field's
/// filled styling even though the selected chips are layered on top of it.
pub const FILLED_PLACEHOLDER: char = '\u{a0}';

/// Compute the text the field should display.
///
/// Raw typed text always wins (the user is composing a query). With no raw
/// text the value is the placeholder when at least one subject is selected,
/// otherwise the empty string.
pub fn derive_value(selection: &BTreeMap<String, bool>, raw: &str) -> String {
    if !raw.is_empty() {
        return raw.to_string();
    }
    if selection.values().any(|selected| *selected) {
        FILLED_PLACEHOLDER.to_string()
    } else {
        String::new()
    }
}

#[cfg(test)]
#[path = "display_value_tests.rs"]
mod display_value_tests;
