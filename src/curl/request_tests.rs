//! Tests for `RequestSpec` and `Verb`.

use super::{CurlError, RequestSpec, Verb};
use crate::header::{HeaderEntry, HeaderSpec};

mod verb {
    use super::*;

    #[test]
    fn methods_are_explicit() {
        assert_eq!(Verb::Get.method(), http::Method::GET);
        assert_eq!(Verb::Post.method(), http::Method::POST);
        assert_eq!(Verb::Put.method(), http::Method::PUT);
    }

    #[test]
    fn only_uploads_require_body() {
        assert!(!Verb::Get.requires_body());
        assert!(Verb::Post.requires_body());
        assert!(Verb::Put.requires_body());
    }

    #[test]
    fn display_uses_method_name() {
        assert_eq!(Verb::Put.to_string(), "PUT");
    }
}

mod request_spec {
    use super::*;

    #[test]
    fn post_without_body_is_caller_error() {
        let result = RequestSpec::new(Verb::Post, HeaderSpec::default(), None, "http://x/");

        let err = result.unwrap_err();
        assert!(err.is_caller_error());
        assert!(matches!(err, CurlError::MissingBody { verb: Verb::Post }));
    }

    #[test]
    fn put_without_body_is_caller_error() {
        let result = RequestSpec::new(Verb::Put, HeaderSpec::default(), None, "http://x/");
        assert!(matches!(result, Err(CurlError::MissingBody { verb: Verb::Put })));
    }

    #[test]
    fn missing_body_message_names_the_data_parameter() {
        let err = RequestSpec::new(Verb::Put, HeaderSpec::default(), None, "http://x/").unwrap_err();

        assert!(
            err.to_string()
                .starts_with("You must specify data that will be sent to the endpoint")
        );
    }

    #[test]
    fn empty_body_is_allowed() {
        let spec = RequestSpec::new(Verb::Post, HeaderSpec::default(), Some(""), "http://x/").unwrap();
        assert_eq!(spec.body(), Some(""));
    }

    #[test]
    fn get_without_body_is_fine() {
        let spec = RequestSpec::new(Verb::Get, HeaderSpec::default(), None, "http://x/").unwrap();
        assert_eq!(spec.verb(), Verb::Get);
    }

    #[test]
    fn get_drops_body() {
        let spec =
            RequestSpec::new(Verb::Get, HeaderSpec::default(), Some("ignored"), "http://x/").unwrap();
        assert_eq!(spec.body(), None);
    }

    #[test]
    fn headers_are_parsed_at_construction() {
        let spec = RequestSpec::new(
            Verb::Put,
            HeaderSpec::new(Some("Content-Type: Text/Plain; X-Trace: abc")),
            Some("x"),
            "http://x/a b",
        )
        .unwrap();

        assert_eq!(spec.url(), "http://x/a b");
        assert_eq!(
            spec.headers(),
            [
                HeaderEntry::ContentType("text/plain".to_string()),
                HeaderEntry::Raw("X-Trace: abc".to_string()),
            ]
        );
    }

    #[test]
    fn get_constructor_has_no_body() {
        let spec = RequestSpec::get(HeaderSpec::new(Some("Accept: */*")), "http://x/");

        assert_eq!(spec.verb(), Verb::Get);
        assert_eq!(spec.body(), None);
        assert_eq!(spec.headers().len(), 1);
    }
}
