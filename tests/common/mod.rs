#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use approx::assert_relative_eq;
use neo_orbit::{LookupTransport, OrbitError, OrbitalElements};
use serde_json::Value;

pub fn assert_elements_close(actual: &OrbitalElements, expected: &OrbitalElements, epsilon: f64) {
    assert_eq!(actual.name(), expected.name());
    assert_relative_eq!(
        actual.semi_major_axis(),
        expected.semi_major_axis(),
        epsilon = epsilon
    );
    assert_relative_eq!(
        actual.eccentricity(),
        expected.eccentricity(),
        epsilon = epsilon
    );
    assert_relative_eq!(
        actual.period_days(),
        expected.period_days(),
        epsilon = epsilon
    );
    assert_relative_eq!(
        actual.base_velocity(),
        expected.base_velocity(),
        epsilon = epsilon
    );
}

/// In-memory transport: answers every query with the same JSON, or fails when `answer` is
/// `None`. Calls and received queries are recorded for later inspection.
#[derive(Clone, Default)]
pub struct MockTransport {
    answer: Option<Value>,
    calls: Arc<AtomicUsize>,
    queries: Arc<Mutex<Vec<String>>>,
}

impl MockTransport {
    pub fn answering(answer: Value) -> Self {
        MockTransport {
            answer: Some(answer),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        MockTransport::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

impl LookupTransport for MockTransport {
    fn label(&self) -> &str {
        "mock"
    }

    async fn fetch(&self, query: &str) -> Result<Value, OrbitError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.to_string());
        self.answer
            .clone()
            .ok_or_else(|| OrbitError::Transport("connection refused".into()))
    }
}
