//! Utility functions for user-facing messages.

/// Summarise a removal for the log, listing at most five ids.
pub fn format_removal_message(ids: &[String]) -> String {
    let mut message = format!("Removing {} image(s):", ids.len());
    for id in ids.iter().take(5) {
        message.push_str(&format!("\n  {id}"));
    }
    if ids.len() > 5 {
        message.push_str(&format!("\n  ... and {} more", ids.len() - 5));
    }
    message
}
