//! Testing utilities for yacbv.
//!
//! This module provides helpers for testing views, predicates and wrappers.
//!
//! # Features
//!
//! - [`CallLog`]: Records which handlers ran, in order
//! - [`CountingPredicate`]: A predicate with a fixed answer that counts its evaluations
//! - [`StaticEngine`]: An in-memory template engine with `{key}` substitution

use std::{
    collections::BTreeMap,
    sync::{
        Arc, Mutex, MutexGuard, PoisonError,
        atomic::{AtomicUsize, Ordering},
    },
};
use yacbv_core::{BoxError, Context, Predicate, TemplateEngine};

// ============================================================================
// Call Log
// ============================================================================

/// A shared log of handler invocations.
///
/// # Example
///
/// ```rust,ignore
/// let log = CallLog::new();
/// let view = MyView { log: log.clone() };
///
/// handler.handle(&request, &UrlArgs::new())?;
/// assert_eq!(log.calls(), vec!["show"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<String>>>,
}

impl CallLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a call.
    pub fn record(&self, name: impl Into<String>) {
        self.lock().push(name.into());
    }

    /// Get a copy of the recorded calls.
    pub fn calls(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// Get the number of recorded calls.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Clear all recorded calls.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// ============================================================================
// Counting Predicate
// ============================================================================

/// A predicate that always gives the same answer and counts how often it
/// was asked.
///
/// Clones share the counter.
#[derive(Debug, Clone)]
pub struct CountingPredicate {
    answer: bool,
    count: Arc<AtomicUsize>,
}

impl CountingPredicate {
    /// Create a predicate answering `answer`.
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get the number of evaluations.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl<Req: ?Sized> Predicate<Req> for CountingPredicate {
    fn test(&self, _request: &Req) -> bool {
        self.count.fetch_add(1, Ordering::SeqCst);
        self.answer
    }
}

// ============================================================================
// Static Template Engine
// ============================================================================

/// An in-memory template engine.
///
/// Templates are plain strings where `{key}` is replaced by the context
/// value for `key`. String values are inserted without quotes; other values
/// use their JSON form. Unknown templates fail to render.
#[derive(Debug, Clone, Default)]
pub struct StaticEngine {
    templates: BTreeMap<String, String>,
}

impl StaticEngine {
    /// Create an engine with no templates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a template.
    pub fn with_template(mut self, name: impl Into<String>, source: impl Into<String>) -> Self {
        self.templates.insert(name.into(), source.into());
        self
    }
}

impl TemplateEngine for StaticEngine {
    fn render(&self, template_name: &str, context: &Context) -> Result<String, BoxError> {
        let source = self
            .templates
            .get(template_name)
            .ok_or_else(|| format!("template `{template_name}` not found"))?;

        let mut rendered = String::with_capacity(source.len());
        let mut rest = source.as_str();
        while let Some(open) = rest.find('{') {
            rendered.push_str(&rest[..open]);
            let tail = &rest[open..];
            let Some(close) = tail.find('}') else {
                rest = tail;
                break;
            };
            let key = &tail[1..close];
            match context.get(key) {
                Some(value) => match value.as_str() {
                    Some(s) => rendered.push_str(s),
                    None => rendered.push_str(&value.to_string()),
                },
                None => rendered.push_str(&tail[..=close]),
            }
            rest = &tail[close + 1..];
        }
        rendered.push_str(rest);
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_log_shared() {
        let log = CallLog::new();
        let clone = log.clone();
        clone.record("show");
        log.record("update");

        assert_eq!(log.calls(), vec!["show", "update"]);
        log.clear();
        assert!(clone.is_empty());
    }

    #[test]
    fn test_static_engine() {
        let engine = StaticEngine::new().with_template("index.html", "<p>{word} x{count}</p>");
        let context = Context::new().with("word", "hello").with("count", 2);

        assert_eq!(engine.render("index.html", &context).unwrap(), "<p>hello x2</p>");
        assert!(engine.render("missing.html", &context).is_err());
    }

    #[test]
    fn test_static_engine_inserts_values_verbatim() {
        let engine = StaticEngine::new().with_template("profile.html", "{name}|{posts}");
        let context = Context::new().with("name", "{posts}").with("posts", 3);

        assert_eq!(engine.render("profile.html", &context).unwrap(), "{posts}|3");
    }

    #[test]
    fn test_static_engine_keeps_unknown_placeholders() {
        let engine = StaticEngine::new().with_template("page.html", "{missing} {word} {");
        let context = Context::new().with("word", "hi");

        assert_eq!(engine.render("page.html", &context).unwrap(), "{missing} hi {");
    }

    #[test]
    fn test_counting_predicate_reset() {
        let predicate = CountingPredicate::new(true);
        assert!(Predicate::<str>::test(&predicate, "anything"));
        assert!(Predicate::<str>::test(&predicate.clone(), "again"));
        assert_eq!(predicate.count(), 2);

        predicate.reset();
        assert_eq!(predicate.count(), 0);
    }
}
