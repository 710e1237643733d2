//! URL cleanup engine integration tests
//!
//! Exercises the public cleanup API end to end: the three operations,
//! their composition, and every error path a caller can trigger.

use byfood_app::cleaner::{
    canonical_clean_up, clean_url, redirection_clean_up, CleanerError, ParsedUrl,
};

#[test]
fn test_clean_url_operations() {
    let cases = [
        (
            "success cleanup url - operation: all",
            "https://BYFOOD.com/food-EXPeriences?query=abc/",
            "all",
            "https://www.byfood.com/food-experiences",
        ),
        (
            "success cleanup url - operation: canonical",
            "https://BYFOOD.com/food-EXPeriences?query=abc/",
            "canonical",
            "https://BYFOOD.com/food-EXPeriences",
        ),
        (
            "success cleanup url - operation: redirection",
            "https://BYFOOD.com/food-EXPeriences?query=abc/",
            "redirection",
            "https://www.byfood.com/food-experiences?query=abc/",
        ),
    ];

    for (name, link, operation, want) in cases {
        let got = clean_url(link, operation).unwrap();
        assert_eq!(got, want, "{}", name);
    }
}

#[test]
fn test_canonical_keeps_scheme_host_path_exactly() {
    let inputs = [
        "https://BYFOOD.com/A/B?q=1#frag",
        "http://tr.byfood.com/Deneyimler?x=Y",
        "https://example.org:8080/Mixed/Case?z=0",
    ];

    for input in inputs {
        let parsed = ParsedUrl::parse(input).unwrap();
        let canonical = canonical_clean_up(&parsed).unwrap();

        assert_eq!(canonical.scheme(), parsed.scheme(), "{}", input);
        assert_eq!(canonical.host(), parsed.host(), "{}", input);
        assert_eq!(canonical.path(), parsed.path(), "{}", input);
        assert_eq!(canonical.query(), None, "{}", input);
        assert_eq!(canonical.fragment(), None, "{}", input);
    }
}

#[test]
fn test_redirection_targets_production_host_and_lower_cases_everything() {
    let inputs = [
        "https://BYFOOD.com/food-EXPeriences?query=abc/",
        "https://api.Byfood.com:9000/V2/Menu?Lang=EN#Top",
        "http://byfood.co.uk/Offers",
    ];

    for input in inputs {
        let parsed = ParsedUrl::parse(input).unwrap();
        let redirected = redirection_clean_up(&parsed).unwrap();

        assert_eq!(redirected.host(), "www.byfood.com", "{}", input);
        let rendered = redirected.to_string();
        assert_eq!(rendered, rendered.to_lowercase(), "{}", input);
        assert_eq!(redirected.query(), parsed.query().map(str::to_lowercase).as_deref(), "{}", input);
    }
}

#[test]
fn test_redirection_rejects_hosts_outside_the_domain_family() {
    // The token check only looks at the host, never the path or query.
    for link in [
        "https://example.com/x",
        "https://www.google.com/search?q=byfood",
        "https://notbyf00d.com/byfood/menu",
    ] {
        assert!(
            matches!(
                clean_url(link, "redirection"),
                Err(CleanerError::InvalidDomain(_))
            ),
            "{}",
            link
        );
    }
}

#[test]
fn test_all_matches_manual_composition() {
    let link = "https://Api.BYFOOD.com/Partners/List?sort=Name#Results";
    let parsed = ParsedUrl::parse(link).unwrap();

    let composed = redirection_clean_up(&canonical_clean_up(&parsed).unwrap())
        .unwrap()
        .to_string();

    assert_eq!(clean_url(link, "all").unwrap(), composed);
    assert_eq!(composed, "https://www.byfood.com/partners/list");
}

#[test]
fn test_all_fails_on_foreign_domain_even_where_canonical_succeeds() {
    let link = "https://example.com/x?q=1";
    assert!(clean_url(link, "canonical").is_ok());
    assert!(matches!(
        clean_url(link, "all"),
        Err(CleanerError::InvalidDomain(_))
    ));
}

#[test]
fn test_operation_is_matched_case_insensitively() {
    let link = "https://byfood.com/food-experiences?query=abc/";
    let want = clean_url(link, "all").unwrap();

    for operation in ["ALL", "All", "aLL"] {
        assert_eq!(clean_url(link, operation).unwrap(), want);
    }
}

#[test]
fn test_malformed_urls_are_rejected() {
    for link in ["not a url", "", "http//missing.scheme", "/books/1"] {
        for operation in ["canonical", "redirection", "all"] {
            assert!(
                matches!(
                    clean_url(link, operation),
                    Err(CleanerError::MalformedUrl(_))
                ),
                "link {:?} operation {}",
                link,
                operation
            );
        }
    }
}

#[test]
fn test_unknown_operation_fails_regardless_of_url() {
    for link in ["https://byfood.com/a", "not a url"] {
        assert_eq!(
            clean_url(link, "unknown"),
            Err(CleanerError::InvalidOperation("unknown".to_string())),
            "{}",
            link
        );
    }
}
