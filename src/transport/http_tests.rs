//! Tests for HTTP request/response types.

use super::{HttpRequest, HttpResponse};

mod http_request {
    use super::*;

    #[test]
    fn new_creates_request_with_method_and_url() {
        let url = url::Url::parse("https://example.com/api").unwrap();
        let req = HttpRequest::new(http::Method::PUT, url.clone());

        assert_eq!(req.method, http::Method::PUT);
        assert_eq!(req.url, url);
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn with_body_sets_body() {
        let url = url::Url::parse("https://example.com/").unwrap();
        let req = HttpRequest::new(http::Method::POST, url).with_body(b"test body".to_vec());

        assert_eq!(req.body.as_deref(), Some(b"test body".as_slice()));
    }

    #[test]
    fn with_header_appends_multiple_values_for_same_name() {
        let url = url::Url::parse("https://example.com/").unwrap();
        let req = HttpRequest::new(http::Method::GET, url)
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("text/html"),
            )
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("application/json"),
            );

        assert_eq!(req.headers.get_all(http::header::ACCEPT).iter().count(), 2);
    }

    #[test]
    fn with_replaced_header_drops_earlier_values() {
        let url = url::Url::parse("https://example.com/").unwrap();
        let req = HttpRequest::new(http::Method::POST, url)
            .with_header(
                http::header::CONTENT_TYPE,
                http::HeaderValue::from_static("text/plain"),
            )
            .with_replaced_header(
                http::header::CONTENT_TYPE,
                http::HeaderValue::from_static("application/json"),
            );

        let values: Vec<_> = req.headers.get_all(http::header::CONTENT_TYPE).iter().collect();
        assert_eq!(values, ["application/json"]);
    }
}

mod http_response {
    use super::*;

    fn response(status: u16, body: &[u8]) -> HttpResponse {
        HttpResponse::new(
            http::StatusCode::from_u16(status).unwrap(),
            http::HeaderMap::new(),
            body.to_vec(),
        )
    }

    #[test]
    fn is_success_for_2xx() {
        assert!(response(200, b"").is_success());
        assert!(response(204, b"").is_success());
    }

    #[test]
    fn is_not_success_for_other_statuses() {
        assert!(!response(301, b"").is_success());
        assert!(!response(404, b"").is_success());
        assert!(!response(500, b"").is_success());
    }

    #[test]
    fn body_text_returns_valid_utf8() {
        assert_eq!(response(200, b"hello").body_text(), Some("hello"));
    }

    #[test]
    fn body_text_returns_none_for_invalid_utf8() {
        assert_eq!(response(200, &[0xff, 0xfe]).body_text(), None);
    }

    #[test]
    fn into_text_returns_body() {
        assert_eq!(response(200, "héllo".as_bytes()).into_text(), "héllo");
    }

    #[test]
    fn into_text_replaces_invalid_sequences() {
        let text = response(200, &[b'a', 0xff, b'b']).into_text();
        assert_eq!(text, "a\u{FFFD}b");
    }
}
