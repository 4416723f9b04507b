use clap::Parser;

/// Turns any URL into a ridiculously long one
#[derive(Debug, Parser)]
#[command(name = "long-url-generator", version, about)]
pub struct Cli {
    /// The URL to decorate, e.g. https://example.com
    ///
    /// Optional here so a missing URL prints the tool's own usage text.
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_single_url() {
        let cli = Cli::try_parse_from(["long-url-generator", "https://example.com"]).unwrap();
        assert_eq!(cli.url.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_url_may_be_missing() {
        let cli = Cli::try_parse_from(["long-url-generator"]).unwrap();
        assert!(cli.url.is_none());
    }

    #[test]
    fn test_rejects_extra_arguments() {
        assert!(Cli::try_parse_from(["long-url-generator", "https://a.com", "https://b.com"]).is_err());
    }
}
