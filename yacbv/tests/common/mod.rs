#![allow(dead_code)]

use yacbv::{
    BoxError, ClassView, Context, RegistryBuilder, SimpleRequest, TemplateResponse, UrlArgs, View,
    ViewConfig, ViewOutput, ViewRequest, testing::CallLog,
};

// ============================================================================
// Test Response Type
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Template {
        method: String,
        template: TemplateResponse,
    },
    Redirect(String),
    Text(String),
}

impl Response {
    pub fn template(&self) -> Option<&TemplateResponse> {
        match self {
            Response::Template { template, .. } => Some(template),
            _ => None,
        }
    }
}

fn template_response(request: &SimpleRequest, template: TemplateResponse) -> Response {
    Response::Template {
        method: request.method().to_owned(),
        template,
    }
}

// ============================================================================
// Dashboard View: one action, answered per method
// ============================================================================

pub struct DashboardView {
    pub log: CallLog,
}

impl DashboardView {
    pub fn get_view(&self, _request: &SimpleRequest, _args: &UrlArgs) -> Context {
        self.log.record("get_view");
        Context::new().with("word", "hello")
    }

    pub fn post_view(&self, _request: &SimpleRequest, _args: &UrlArgs) -> Context {
        self.log.record("post_view");
        Context::new().with("word", "posted")
    }
}

impl View for DashboardView {
    type Request = SimpleRequest;
    type Response = Response;

    fn template_response(request: &SimpleRequest, template: TemplateResponse) -> Response {
        template_response(request, template)
    }
}

impl ClassView for DashboardView {
    type Init = CallLog;

    fn create(log: &CallLog) -> Self {
        DashboardView { log: log.clone() }
    }

    fn configure(views: &mut RegistryBuilder<Self>) {
        views
            .register_mut(
                ViewConfig::new().method("get").template("index.html"),
                Self::get_view,
            )
            .register_mut(
                ViewConfig::new().method("post").template("index.html"),
                Self::post_view,
            );
    }
}

// ============================================================================
// Search View: parameter predicates, pass-through and failures
// ============================================================================

#[derive(Debug)]
pub struct SearchError(pub String);

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "search failed: {}", self.0)
    }
}

impl std::error::Error for SearchError {}

pub struct SearchView {
    pub log: CallLog,
}

impl SearchView {
    pub fn results(&self, request: &SimpleRequest, _args: &UrlArgs) -> Result<Context, SearchError> {
        self.log.record("results");
        match request.param("q") {
            Some("") => Err(SearchError("empty query".to_owned())),
            Some(q) => Ok(Context::new().with("q", q)),
            None => Err(SearchError("no query".to_owned())),
        }
    }

    pub fn legacy(&self, request: &SimpleRequest, _args: &UrlArgs) -> ViewOutput<Response> {
        self.log.record("legacy");
        let q = request.param("search").unwrap_or_default();
        ViewOutput::Response(Response::Redirect(format!("/search?q={q}")))
    }

    pub fn form(&self, _request: &SimpleRequest, _args: &UrlArgs) -> Result<Context, BoxError> {
        self.log.record("form");
        Ok(Context::new())
    }
}

impl View for SearchView {
    type Request = SimpleRequest;
    type Response = Response;

    fn template_response(request: &SimpleRequest, template: TemplateResponse) -> Response {
        template_response(request, template)
    }
}

impl ClassView for SearchView {
    type Init = CallLog;

    fn create(log: &CallLog) -> Self {
        SearchView { log: log.clone() }
    }

    fn configure(views: &mut RegistryBuilder<Self>) {
        views
            .register_mut(
                ViewConfig::new().param("q").template("results.html"),
                Self::results,
            )
            .register_mut(
                ViewConfig::new().param("search").template("results.html"),
                Self::legacy,
            )
            .register_mut(ViewConfig::new().template("form.html"), Self::form);
    }
}

// ============================================================================
// Empty View
// ============================================================================

pub struct EmptyView;

impl View for EmptyView {
    type Request = SimpleRequest;
    type Response = Response;

    fn template_response(request: &SimpleRequest, template: TemplateResponse) -> Response {
        template_response(request, template)
    }
}

impl ClassView for EmptyView {
    type Init = ();

    fn create(_init: &()) -> Self {
        EmptyView
    }

    fn configure(_views: &mut RegistryBuilder<Self>) {}
}
