//! Stateful toolkit wrapper over the pure parse/validate/format functions.

use crate::conn_string::{connection_string, ConnStringOptions};
use crate::error::{Result, UrlToolError};
use crate::parse::{parse_url, ParsedUrl};
use crate::validate::is_valid_url;

/// A URL toolkit instance holding a current URL and its last parse snapshot.
///
/// Operations taking `Option<&str>` fall back to the stored URL when given
/// `None`; an explicitly supplied empty string counts as no URL at all.
/// A failed parse leaves the stored URL and snapshot untouched.
///
/// Not synchronized: callers sharing one instance across threads must
/// serialize access themselves (a `parse` followed by `components` is not
/// atomic).
#[derive(Debug, Clone, Default)]
pub struct UrlTool {
    url: Option<String>,
    parsed: Option<ParsedUrl>,
}

impl UrlTool {
    /// An empty toolkit with no URL and no parse state.
    pub fn new() -> Self {
        Self::default()
    }

    /// A toolkit seeded with `url`, parsed immediately.
    pub fn with_url(url: &str) -> Result<Self> {
        let mut tool = Self::new();
        tool.parse(Some(url))?;
        Ok(tool)
    }

    /// The stored URL, if any.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Parses `url`, or the stored URL when `None`.
    ///
    /// On success the stored URL and snapshot are replaced and the new
    /// snapshot is returned. Fails with [`UrlToolError::EmptyInput`] when no
    /// non-empty URL is available from either source.
    pub fn parse(&mut self, url: Option<&str>) -> Result<&ParsedUrl> {
        let target = self.target_url(url)?;
        let parsed = parse_url(&target)?;
        self.url = Some(target);
        Ok(self.parsed.insert(parsed))
    }

    /// The most recent parse snapshot.
    ///
    /// Fails with [`UrlToolError::NotParsed`] before the first successful
    /// parse.
    pub fn components(&self) -> Result<&ParsedUrl> {
        self.parsed.as_ref().ok_or(UrlToolError::NotParsed)
    }

    /// Validates `url`, or the stored URL when `None`.
    ///
    /// Malformed input yields `Ok(false)`; only the no-URL-available case is
    /// an error. Does not touch the stored state.
    pub fn validate(&self, url: Option<&str>) -> Result<bool> {
        let target = self.target_url(url)?;
        Ok(is_valid_url(&target))
    }

    /// Renders the last parse snapshot as a connection string.
    ///
    /// Fails with [`UrlToolError::NotParsed`] before the first successful
    /// parse.
    pub fn connection_string(&self, options: &ConnStringOptions) -> Result<String> {
        Ok(connection_string(self.components()?, options))
    }

    fn target_url(&self, url: Option<&str>) -> Result<String> {
        let target = match url {
            Some(explicit) => explicit,
            None => self.url.as_deref().unwrap_or(""),
        };
        if target.is_empty() {
            return Err(UrlToolError::EmptyInput);
        }
        Ok(target.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_before_parse_is_an_error() {
        let tool = UrlTool::new();
        assert_eq!(tool.components().unwrap_err(), UrlToolError::NotParsed);
    }

    #[test]
    fn connection_string_before_parse_is_an_error() {
        let tool = UrlTool::new();
        assert_eq!(
            tool.connection_string(&ConnStringOptions::default())
                .unwrap_err(),
            UrlToolError::NotParsed
        );
    }

    #[test]
    fn with_url_parses_immediately() {
        let tool = UrlTool::with_url("https://example.com/a?x=1").unwrap();
        let parsed = tool.components().unwrap();
        assert_eq!(parsed.scheme, "https");
        assert_eq!(parsed.path, "/a");
        assert_eq!(tool.url(), Some("https://example.com/a?x=1"));
    }

    #[test]
    fn parse_with_no_url_anywhere_is_empty_input() {
        let mut tool = UrlTool::new();
        assert_eq!(tool.parse(None).unwrap_err(), UrlToolError::EmptyInput);
    }

    #[test]
    fn explicit_empty_string_is_empty_input() {
        let mut tool = UrlTool::with_url("https://example.com").unwrap();
        assert_eq!(tool.parse(Some("")).unwrap_err(), UrlToolError::EmptyInput);
        assert_eq!(
            tool.validate(Some("")).unwrap_err(),
            UrlToolError::EmptyInput
        );
    }

    #[test]
    fn reparse_replaces_the_snapshot() {
        let mut tool = UrlTool::with_url("https://first.example.com").unwrap();
        tool.parse(Some("http://second.example.com/x")).unwrap();
        let parsed = tool.components().unwrap();
        assert_eq!(parsed.hostname.as_deref(), Some("second.example.com"));
        assert_eq!(tool.url(), Some("http://second.example.com/x"));
    }

    #[test]
    fn failed_parse_keeps_the_previous_snapshot() {
        let mut tool = UrlTool::with_url("https://good.example.com").unwrap();
        assert!(tool.parse(Some("http://host:abc/")).is_err());
        assert_eq!(
            tool.components().unwrap().hostname.as_deref(),
            Some("good.example.com")
        );
        assert_eq!(tool.url(), Some("https://good.example.com"));
    }

    #[test]
    fn validate_uses_the_stored_url() {
        let tool = UrlTool::with_url("https://www.google.com").unwrap();
        assert!(tool.validate(None).unwrap());
    }

    #[test]
    fn validate_reports_false_without_erroring() {
        let tool = UrlTool::new();
        assert!(!tool.validate(Some("invalid-string")).unwrap());
    }

    #[test]
    fn validate_without_any_url_is_empty_input() {
        let tool = UrlTool::new();
        assert_eq!(tool.validate(None).unwrap_err(), UrlToolError::EmptyInput);
    }
}
