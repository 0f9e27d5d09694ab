//! Address normalization for text typed into the address bar or landing search.

/// Prefixes `https://` unless the input already carries an http(s) scheme.
///
/// Nothing else is validated; a malformed address is handed to the webview,
/// which shows its own error page.
pub fn normalize_url(input: &str) -> String {
    if input.starts_with("http://") || input.starts_with("https://") {
        input.to_string()
    } else {
        format!("https://{}", input)
    }
}
