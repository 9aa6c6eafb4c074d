// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Capture the spans emitted by the code under test.
//!
//! # Example
//! ```
//! use cloud_sdk_test_utils::span_capture::SpanCapture;
//! let capture = SpanCapture::new();
//! let _guard = capture.set_default();
//! let _span = tracing::info_span!("test_span", answer = 42).entered();
//! let spans = capture.spans();
//! assert_eq!(spans[0].name, "test_span");
//! assert_eq!(spans[0].attributes.get("answer").map(String::as_str), Some("42"));
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{Subscriber, field, span};
use tracing_subscriber::{Layer, layer::Context, prelude::*};

/// A captured tracing span with its attributes.
#[derive(Debug, Clone)]
pub struct CapturedSpan {
    /// The unique ID of the span.
    pub id: span::Id,
    /// The name of the span.
    pub name: String,
    /// The recorded attributes, converted to strings.
    ///
    /// Fields declared as `field::Empty` appear only after they are recorded.
    pub attributes: HashMap<String, String>,
}

struct Visitor<'a>(&'a mut HashMap<String, String>);

impl field::Visit for Visitor<'_> {
    fn record_str(&mut self, field: &field::Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &field::Field, value: &dyn std::fmt::Debug) {
        self.0
            .insert(field.name().to_string(), format!("{value:?}"));
    }

    fn record_i64(&mut self, field: &field::Field, value: i64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_u64(&mut self, field: &field::Field, value: u64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_bool(&mut self, field: &field::Field, value: bool) {
        self.0.insert(field.name().to_string(), value.to_string());
    }
}

/// A tracing layer storing every span created while it is the default
/// subscriber.
///
/// The layer is installed for the current thread only, tests using it can run
/// in parallel. Use a `current_thread` runtime in async tests.
#[derive(Clone, Debug, Default)]
pub struct SpanCapture {
    spans: Arc<Mutex<Vec<CapturedSpan>>>,
}

impl SpanCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the layer as the default subscriber for the current thread.
    pub fn set_default(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::registry().with(self.clone());
        tracing::subscriber::set_default(subscriber)
    }

    /// Returns a snapshot of the spans captured so far, in creation order.
    pub fn spans(&self) -> Vec<CapturedSpan> {
        self.spans.lock().unwrap().clone()
    }

    /// Returns the captured spans named `name`.
    pub fn spans_named(&self, name: &str) -> Vec<CapturedSpan> {
        self.spans()
            .into_iter()
            .filter(|s| s.name == name)
            .collect()
    }
}

impl<S: Subscriber> Layer<S> for SpanCapture {
    fn on_new_span(&self, attrs: &span::Attributes<'_>, id: &span::Id, _ctx: Context<'_, S>) {
        let mut attributes = HashMap::new();
        attrs.record(&mut Visitor(&mut attributes));
        self.spans.lock().unwrap().push(CapturedSpan {
            id: id.clone(),
            name: attrs.metadata().name().to_string(),
            attributes,
        });
    }

    fn on_record(&self, id: &span::Id, values: &span::Record<'_>, _ctx: Context<'_, S>) {
        let mut spans = self.spans.lock().unwrap();
        if let Some(span) = spans.iter_mut().rev().find(|s| &s.id == id) {
            values.record(&mut Visitor(&mut span.attributes));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn captures_new_and_recorded_fields() {
        let capture = SpanCapture::new();
        let _guard = capture.set_default();
        let span = tracing::info_span!(
            "request",
            method = "GET",
            status = field::Empty,
            ok = field::Empty
        );
        span.record("status", 404_i64);
        span.record("ok", false);

        let spans = capture.spans();
        assert_eq!(spans.len(), 1, "{spans:?}");
        let want: HashMap<String, String> = [("method", "GET"), ("status", "404"), ("ok", "false")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(spans[0].attributes, want);
    }

    #[test]
    fn filters_by_name() {
        let capture = SpanCapture::new();
        let _guard = capture.set_default();
        let _a = tracing::info_span!("a");
        let _b = tracing::info_span!("b");
        let _c = tracing::info_span!("a");
        assert_eq!(capture.spans().len(), 3);
        assert_eq!(capture.spans_named("a").len(), 2);
        assert!(capture.spans_named("missing").is_empty());
    }

    #[test]
    fn thread_local() {
        let capture = SpanCapture::new();
        {
            let _guard = capture.set_default();
            let _span = tracing::info_span!("inside");
        }
        let _span = tracing::info_span!("outside");
        let names: Vec<_> = capture.spans().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["inside".to_string()]);
    }
}
