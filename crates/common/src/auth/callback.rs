//! Redirect URL parsing for the manual consent flow

use url::Url;

/// Extract the `code` query parameter from a pasted redirect URL.
///
/// Accepts absolute URLs (`http://localhost?code=...`) as well as the
/// scheme-less form browsers sometimes show (`localhost?code=...`). Returns
/// `None` when no non-empty `code` parameter is present.
pub fn extract_authorization_code(redirect_url: &str) -> Option<String> {
    let trimmed = redirect_url.trim();
    let url = Url::parse(trimmed)
        .or_else(|_| Url::parse("http://localhost/").and_then(|base| base.join(trimmed)))
        .ok()?;

    url.query_pairs()
        .find(|(key, _)| key == "code")
        .map(|(_, value)| value.into_owned())
        .filter(|code| !code.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_code_from_absolute_url() {
        let code = extract_authorization_code("http://localhost/?code=abc-123&state=xyz");
        assert_eq!(code.as_deref(), Some("abc-123"));
    }

    #[test]
    fn extracts_code_without_scheme() {
        let code = extract_authorization_code("  localhost?code=na1-xyz  ");
        assert_eq!(code.as_deref(), Some("na1-xyz"));
    }

    #[test]
    fn decodes_percent_encoding() {
        let code = extract_authorization_code("http://localhost?code=a%2Fb");
        assert_eq!(code.as_deref(), Some("a/b"));
    }

    #[test]
    fn missing_code_returns_none() {
        assert_eq!(extract_authorization_code("http://localhost?error=access_denied"), None);
        assert_eq!(extract_authorization_code("http://localhost?code="), None);
        assert_eq!(extract_authorization_code(""), None);
    }
}
