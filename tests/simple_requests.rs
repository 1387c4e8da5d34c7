mod common;

use bunner_cors_decorator::constants::{header, method};
use bunner_cors_decorator::AllowOrigin;
use common::asserts::{assert_not_applicable, assert_simple};
use common::builders::{base_response, decorator, simple_request};
use common::headers::{ALWAYS_PRESENT, PREFLIGHT_ONLY, has_header, header_value};

mod check {
    use super::*;

    #[test]
    fn should_return_not_applicable_when_request_has_no_origin() {
        let decorator = decorator().origin(AllowOrigin::any()).build();

        let decision = simple_request().check(&decorator);

        assert_not_applicable(decision);
    }

    #[test]
    fn should_return_not_applicable_when_origin_is_empty() {
        let decorator = decorator().origin(AllowOrigin::any()).build();

        let decision = simple_request().origin("").check(&decorator);

        assert_not_applicable(decision);
    }

    #[test]
    fn should_emit_every_common_header_when_origin_present() {
        let decorator = decorator().build();

        let headers = assert_simple(simple_request().origin("https://app.test").check(&decorator));

        for name in ALWAYS_PRESENT {
            assert!(has_header(&headers, name), "{name} should be present");
        }
        assert_eq!(headers.len(), ALWAYS_PRESENT.len());
    }

    #[test]
    fn should_omit_preflight_only_headers_for_non_options_methods() {
        let decorator = decorator()
            .methods([method::GET, method::POST])
            .exposed_headers(["X-Trace"])
            .build();

        for verb in [method::GET, method::POST, method::PUT, method::DELETE, method::PATCH, method::HEAD] {
            let headers = assert_simple(
                simple_request()
                    .method(verb)
                    .origin("https://app.test")
                    .check(&decorator),
            );

            for name in PREFLIGHT_ONLY {
                assert!(!has_header(&headers, name), "{name} should be absent for {verb}");
            }
        }
    }

    #[test]
    fn should_render_credentials_as_true_or_false() {
        let enabled = decorator().credentials(true).build();
        let disabled = decorator().credentials(false).build();

        let enabled_headers =
            assert_simple(simple_request().origin("https://app.test").check(&enabled));
        let disabled_headers =
            assert_simple(simple_request().origin("https://app.test").check(&disabled));

        assert_eq!(
            header_value(&enabled_headers, header::ACCESS_CONTROL_ALLOW_CREDENTIALS),
            Some("true"),
        );
        assert_eq!(
            header_value(&disabled_headers, header::ACCESS_CONTROL_ALLOW_CREDENTIALS),
            Some("false"),
        );
    }

    #[test]
    fn should_apply_documented_defaults_when_policy_is_empty() {
        let decorator = decorator().build();

        let headers = assert_simple(simple_request().origin("https://app.test").check(&decorator));

        assert_eq!(header_value(&headers, header::ACCESS_CONTROL_MAX_AGE), Some("0"));
        assert_eq!(header_value(&headers, header::X_FRAME_OPTIONS), Some("ALLOW"));
        assert_eq!(
            header_value(&headers, header::X_XSS_PROTECTION),
            Some("1 ;mode=block"),
        );
        assert_eq!(header_value(&headers, header::X_CONTENT_TYPE_OPTIONS), Some(""));
    }
}

mod decorate {
    use super::*;

    #[test]
    fn should_return_handler_response_unchanged_without_origin() {
        let decorator = decorator()
            .origin(AllowOrigin::any())
            .credentials(true)
            .max_age(600)
            .build();

        let response = simple_request().decorate(&decorator);

        assert_eq!(response, base_response());
    }

    #[test]
    fn should_keep_handler_headers_and_body() {
        let decorator = decorator().origin(AllowOrigin::any()).build();

        let response = simple_request().origin("https://app.test").decorate(&decorator);

        assert_eq!(*response.body(), "handler body");
        assert_eq!(response.status(), 200);
        assert_eq!(response.headers().get("content-type"), Some("text/plain"));
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some("https://app.test"),
        );
    }
}
