//! Help text for registered commands.

/// Formats the help listing for `(name, description)` pairs.
///
/// Entries are printed in the order given, with names padded to a common
/// width.
pub fn format_help<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    let entries: Vec<_> = entries.into_iter().collect();
    if entries.is_empty() {
        return "No commands registered.".to_string();
    }

    let width = entries
        .iter()
        .map(|(name, _)| name.chars().count() + 1)
        .max()
        .unwrap_or(0);

    let mut text = String::from("Available commands:");
    for (name, description) in entries {
        text.push_str(&format!("\n  {:<width$}  - {}", format!("/{name}"), description));
    }
    text
}
