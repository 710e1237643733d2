//! Cleanup transforms and dispatch

use crate::cleaner::error::{CleanerError, CleanerResult};
use crate::cleaner::operation::Operation;
use crate::cleaner::parsed::ParsedUrl;

/// Substring that identifies a host as belonging to the byfood domain
/// family (regional subdomains included).
const DOMAIN_TOKEN: &str = "byfood";

/// The production host every redirection resolves to.
const CANONICAL_HOST: &str = "www.byfood.com";

/// Cleans `link` up according to `operation` and returns the resulting URL
/// as a string.
///
/// The operation selector is validated before the URL, so an unrecognized
/// operation fails with [`CleanerError::InvalidOperation`] no matter what
/// the URL looks like.
pub fn clean_url(link: &str, operation: &str) -> CleanerResult<String> {
    let operation: Operation = operation.parse()?;
    let url = ParsedUrl::parse(link)?;

    let cleaned = match operation {
        Operation::Canonical => canonical_clean_up(&url)?,
        Operation::Redirection => redirection_clean_up(&url)?,
        Operation::All => {
            // Order matters: canonical strips the query and fragment, so
            // redirection rewrites the already-stripped URL.
            let canonical = canonical_clean_up(&url)?;
            redirection_clean_up(&canonical)?
        }
    };

    Ok(cleaned.to_string())
}

/// Reduces a URL to `scheme://host` plus the escaped path.
///
/// Query and fragment are discarded; host and path casing are preserved
/// exactly as given.
pub fn canonical_clean_up(url: &ParsedUrl) -> CleanerResult<ParsedUrl> {
    let assembled = format!("{}://{}{}", url.scheme(), url.host(), url.path());
    reparse(&assembled)
}

/// Rewrites a URL to the canonical production host, lower-casing the whole
/// resulting string. Path, query and fragment are kept.
///
/// The full-string case fold (not host-only) matches the long-standing
/// behavior of this endpoint and also folds query values and path segments.
pub fn redirection_clean_up(url: &ParsedUrl) -> CleanerResult<ParsedUrl> {
    // "fail" fast
    if !url.host().to_lowercase().contains(DOMAIN_TOKEN) {
        return Err(CleanerError::InvalidDomain(url.host().to_string()));
    }

    let rewritten = url.with_host(CANONICAL_HOST);
    reparse(&rewritten.to_string().to_lowercase())
}

/// Re-parses a transform's assembled output, converting a parse failure
/// into the internal [`CleanerError::Reparse`] variant. Assembled URLs are
/// built from already-validated components, so this failing means a bug in
/// the transform, not in the caller's input.
fn reparse(assembled: &str) -> CleanerResult<ParsedUrl> {
    ParsedUrl::parse(assembled).map_err(|err| match err {
        CleanerError::MalformedUrl(source) => CleanerError::Reparse(source),
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_url_all() {
        let got = clean_url("https://BYFOOD.com/food-EXPeriences?query=abc/", "all").unwrap();
        assert_eq!(got, "https://www.byfood.com/food-experiences");
    }

    #[test]
    fn test_clean_url_canonical() {
        let got = clean_url(
            "https://BYFOOD.com/food-EXPeriences?query=abc/",
            "canonical",
        )
        .unwrap();
        assert_eq!(got, "https://BYFOOD.com/food-EXPeriences");
    }

    #[test]
    fn test_clean_url_redirection() {
        let got = clean_url(
            "https://BYFOOD.com/food-EXPeriences?query=abc/",
            "redirection",
        )
        .unwrap();
        assert_eq!(got, "https://www.byfood.com/food-experiences?query=abc/");
    }

    #[test]
    fn test_canonical_strips_query_and_fragment() {
        let url = ParsedUrl::parse("https://byfood.com/a?x=1#frag").unwrap();
        let got = canonical_clean_up(&url).unwrap();
        assert_eq!(got.query(), None);
        assert_eq!(got.fragment(), None);
        assert_eq!(got.to_string(), "https://byfood.com/a");
    }

    #[test]
    fn test_redirection_accepts_regional_subdomains() {
        let got = clean_url("https://TR.byfood.com/Kitchens?Page=2", "redirection").unwrap();
        assert_eq!(got, "https://www.byfood.com/kitchens?page=2");
    }

    #[test]
    fn test_redirection_rejects_foreign_domain() {
        let err = clean_url("https://example.com/x", "redirection").unwrap_err();
        assert_eq!(err, CleanerError::InvalidDomain("example.com".to_string()));
    }

    #[test]
    fn test_all_rejects_foreign_domain_even_though_canonical_succeeds() {
        let url = ParsedUrl::parse("https://example.com/x?q=1").unwrap();
        assert!(canonical_clean_up(&url).is_ok());

        let err = clean_url("https://example.com/x?q=1", "all").unwrap_err();
        assert!(matches!(err, CleanerError::InvalidDomain(_)));
    }

    #[test]
    fn test_all_equals_redirection_of_canonical() {
        let link = "https://Api.BYFOOD.com/Partners/List?sort=Name#Results";
        let url = ParsedUrl::parse(link).unwrap();
        let composed = redirection_clean_up(&canonical_clean_up(&url).unwrap())
            .unwrap()
            .to_string();
        assert_eq!(clean_url(link, "all").unwrap(), composed);
    }

    #[test]
    fn test_malformed_url_is_rejected_for_every_operation() {
        for operation in ["canonical", "redirection", "all"] {
            let err = clean_url("not a url", operation).unwrap_err();
            assert!(matches!(err, CleanerError::MalformedUrl(_)));
        }
    }

    #[test]
    fn test_invalid_operation_wins_over_invalid_url() {
        // The selector is checked first, so even an unparsable URL reports
        // the unknown operation.
        let err = clean_url("not a url", "unknown").unwrap_err();
        assert_eq!(err, CleanerError::InvalidOperation("unknown".to_string()));

        let err = clean_url("https://byfood.com/a", "unknown").unwrap_err();
        assert_eq!(err, CleanerError::InvalidOperation("unknown".to_string()));
    }

    #[test]
    fn test_operation_case_does_not_change_result() {
        let link = "https://byfood.com/food-experiences?query=abc/";
        let lower = clean_url(link, "all").unwrap();
        let upper = clean_url(link, "ALL").unwrap();
        let mixed = clean_url(link, "All").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower, mixed);
    }

    #[test]
    fn test_redirection_preserves_query_while_folding_case() {
        let got = clean_url("https://byfood.com/Deals?Code=ABC123", "redirection").unwrap();
        // Deliberate: the fold applies to the whole string, query included.
        assert_eq!(got, "https://www.byfood.com/deals?code=abc123");
    }
}
