//! Mock [`RiskModel`] implementations for testing.
//!
//! [`ScriptedModel`] replays pre-loaded results and records every feature row
//! it receives, so tests can assert exactly what a model was shown.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use crate::application::registry::{ModelRegistry, ModelRegistryBuilder};
use crate::domain::RiskKind;
use crate::port::outbound::model::{ModelError, RawPrediction, RiskModel};

/// How a strict model reports rows of the wrong width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MismatchStyle {
    /// [`ModelError::ShapeMismatch`].
    Structured,
    /// [`ModelError::Value`] with an `"expected N, got M"` message.
    Message,
}

/// A mock model with scripted results and call recording.
///
/// Each call to `predict()` pops the next scripted result; once the queue is
/// exhausted the fallback result is returned.
pub struct ScriptedModel {
    width: Option<usize>,
    strict: Option<(usize, MismatchStyle)>,
    results: Mutex<VecDeque<Result<RawPrediction, ModelError>>>,
    fallback: Result<RawPrediction, ModelError>,
    calls: Arc<Mutex<Vec<Vec<f64>>>>,
}

impl ScriptedModel {
    pub fn new() -> Self {
        Self {
            width: None,
            strict: None,
            results: Mutex::new(VecDeque::new()),
            fallback: Ok(RawPrediction::Number(50.0)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A model that always predicts `value`.
    pub fn constant(value: f64) -> Self {
        Self::new().with_fallback(Ok(RawPrediction::Number(value)))
    }

    /// Advertise `width` through `expected_input_width()`.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Reject rows whose length is not `width`, without advertising it.
    pub fn strict(mut self, width: usize, style: MismatchStyle) -> Self {
        self.strict = Some((width, style));
        self
    }

    pub fn with_results(self, results: Vec<Result<RawPrediction, ModelError>>) -> Self {
        *lock(&self.results) = results.into();
        self
    }

    pub fn with_fallback(mut self, result: Result<RawPrediction, ModelError>) -> Self {
        self.fallback = result;
        self
    }

    /// Shared handle to the rows this model has received.
    pub fn calls(&self) -> Arc<Mutex<Vec<Vec<f64>>>> {
        self.calls.clone()
    }

    fn check_width(&self, row: &[f64]) -> Result<(), ModelError> {
        match self.strict {
            Some((width, _)) if width == row.len() => Ok(()),
            Some((width, MismatchStyle::Structured)) => Err(ModelError::ShapeMismatch {
                expected: width,
                got: row.len(),
            }),
            Some((width, MismatchStyle::Message)) => Err(ModelError::Value(format!(
                "Input shape mismatch: expected {width}, got {}",
                row.len()
            ))),
            None => Ok(()),
        }
    }
}

impl Default for ScriptedModel {
    fn default() -> Self {
        Self::new()
    }
}

impl RiskModel for ScriptedModel {
    fn kind(&self) -> &'static str {
        "scripted"
    }

    fn expected_input_width(&self) -> Option<usize> {
        self.width
    }

    fn predict(&self, batch: &[Vec<f64>]) -> Result<Vec<RawPrediction>, ModelError> {
        let mut out = Vec::with_capacity(batch.len());
        for row in batch {
            lock(&self.calls).push(row.clone());
            self.check_width(row)?;
            let next = lock(&self.results)
                .pop_front()
                .unwrap_or_else(|| self.fallback.clone());
            out.push(next?);
        }
        Ok(out)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A registry where every risk predicts the same constant.
pub fn constant_registry(value: f64) -> ModelRegistry {
    registry_with(|_| Arc::new(ScriptedModel::constant(value)))
}

/// A registry built from a per-risk model factory.
pub fn registry_with<F>(mut factory: F) -> ModelRegistry
where
    F: FnMut(RiskKind) -> Arc<dyn RiskModel>,
{
    RiskKind::ALL
        .into_iter()
        .fold(ModelRegistryBuilder::new(), |builder, kind| {
            builder.model(kind, factory(kind))
        })
        .build()
        .unwrap_or_else(|err| panic!("testkit registry must be complete: {err}"))
}
