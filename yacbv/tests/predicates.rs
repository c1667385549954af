//! Parameter and custom predicate tests.

use yacbv::{
    ClassView, Context, RegistryBuilder, SimpleRequest, UrlArgs, ViewConfig, ViewError,
    ViewRequest, predicates::ParamSource, testing::CallLog,
};

mod common;
use common::{Response, SearchView};

#[test]
fn test_param_predicate_selects_candidate() {
    let log = CallLog::new();
    let handler = SearchView::as_view(log.clone());

    let response = handler
        .handle(&SimpleRequest::get().with_query("q=anything"), &UrlArgs::new())
        .unwrap();
    assert_eq!(
        response.template().map(|t| t.template_name()),
        Some("results.html")
    );

    let response = handler
        .handle(&SimpleRequest::get(), &UrlArgs::new())
        .unwrap();
    assert_eq!(response.template().map(|t| t.template_name()), Some("form.html"));

    assert_eq!(log.calls(), vec!["results", "form"]);
}

#[test]
fn test_param_present_but_method_wrong() {
    let log = CallLog::new();
    let handler = SearchView::as_view(log.clone());

    let err = handler
        .handle(&SimpleRequest::post().with_body("q=rust"), &UrlArgs::new())
        .unwrap_err();

    assert!(err.is_not_found());
    assert!(log.is_empty());
}

#[test]
fn test_param_from_body_counts() {
    struct BodyOnly;

    impl yacbv::View for BodyOnly {
        type Request = SimpleRequest;
        type Response = String;

        fn template_response(_req: &SimpleRequest, t: yacbv::TemplateResponse) -> String {
            t.template_name().to_owned()
        }
    }

    let registry = RegistryBuilder::<BodyOnly>::new()
        .register(
            ViewConfig::new()
                .method("post")
                .param_in("token", ParamSource::Body)
                .template("ok.html"),
            |_: &BodyOnly, _: &SimpleRequest, _: &UrlArgs| Context::new(),
        )
        .build();

    let in_body = SimpleRequest::post().with_body("token=abc");
    let in_query = SimpleRequest::post().with_query("token=abc");

    assert_eq!(
        registry.dispatch(&BodyOnly, &in_body, &UrlArgs::new()).unwrap(),
        "ok.html"
    );
    assert!(
        registry
            .dispatch(&BodyOnly, &in_query, &UrlArgs::new())
            .unwrap_err()
            .is_not_found()
    );
}

#[test]
fn test_pass_through_response_ignores_template() {
    let handler = SearchView::as_view(CallLog::new());

    let response = handler
        .handle(&SimpleRequest::get().with_query("search=old"), &UrlArgs::new())
        .unwrap();
    assert_eq!(response, Response::Redirect("/search?q=old".to_owned()));
}

#[test]
fn test_handler_error_propagates_unmodified() {
    let log = CallLog::new();
    let handler = SearchView::as_view(log.clone());

    let err = handler
        .handle(&SimpleRequest::get().with_query("q="), &UrlArgs::new())
        .unwrap_err();

    let ViewError::Handler(source) = &err else {
        panic!("expected a handler error, got {err:?}");
    };
    assert_eq!(source.to_string(), "search failed: empty query");
    assert!(source.downcast_ref::<common::SearchError>().is_some());
    // The failing candidate matched, so later candidates were not tried.
    assert_eq!(log.calls(), vec!["results"]);
}

#[test]
fn test_custom_predicate() {
    struct Ajax;

    impl yacbv::View for Ajax {
        type Request = SimpleRequest;
        type Response = &'static str;

        fn template_response(_req: &SimpleRequest, _t: yacbv::TemplateResponse) -> &'static str {
            "page"
        }
    }

    let registry = RegistryBuilder::<Ajax>::new()
        .register(
            ViewConfig::new().predicate(|req: &SimpleRequest| req.param("format") == Some("json")),
            |_: &Ajax, _: &SimpleRequest, _: &UrlArgs| yacbv::ViewOutput::Response("json"),
        )
        .register(
            ViewConfig::new(),
            |_: &Ajax, _: &SimpleRequest, _: &UrlArgs| yacbv::ViewOutput::Response("html"),
        )
        .build();

    let json = SimpleRequest::get().with_query("format=json");
    assert_eq!(registry.dispatch(&Ajax, &json, &UrlArgs::new()).unwrap(), "json");
    assert_eq!(
        registry
            .dispatch(&Ajax, &SimpleRequest::get(), &UrlArgs::new())
            .unwrap(),
        "html"
    );
    assert_eq!(json.method(), "GET");
}
