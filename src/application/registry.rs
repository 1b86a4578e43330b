//! Registry of loaded risk models.
//!
//! Holds exactly one model per [`RiskKind`] and iterates them in the fixed
//! risk order.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::RiskKind;
use crate::error::StartupError;
use crate::port::outbound::model::RiskModel;

/// Immutable set of loaded models, one per risk.
///
/// Built once during startup and shared read-only by every request.
/// Use [`ModelRegistryBuilder`] to construct one.
pub struct ModelRegistry {
    models: Vec<(RiskKind, Arc<dyn RiskModel>)>,
}

impl ModelRegistry {
    /// Create a builder for assembling a registry.
    #[must_use]
    pub fn builder() -> ModelRegistryBuilder {
        ModelRegistryBuilder::new()
    }

    /// Get the model registered for `kind`.
    #[must_use]
    pub fn get(&self, kind: RiskKind) -> Option<&Arc<dyn RiskModel>> {
        self.models
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, model)| model)
    }

    /// Iterate models in [`RiskKind::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (RiskKind, &Arc<dyn RiskModel>)> {
        self.models.iter().map(|(kind, model)| (*kind, model))
    }

    /// Number of registered models.
    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Check if registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Registered risks, in response order.
    #[must_use]
    pub fn risks(&self) -> Vec<RiskKind> {
        self.models.iter().map(|(kind, _)| *kind).collect()
    }
}

impl std::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.models.iter().map(|(kind, model)| (kind.name(), model.kind())))
            .finish()
    }
}

/// Builder for constructing a [`ModelRegistry`].
///
/// # Example
///
/// ```ignore
/// let registry = ModelRegistry::builder()
///     .model(RiskKind::Phishing, phishing)
///     .model(RiskKind::WeakPassword, weak_password)
///     // ...
///     .build()?;
/// ```
#[derive(Default)]
pub struct ModelRegistryBuilder {
    models: BTreeMap<RiskKind, Arc<dyn RiskModel>>,
}

impl ModelRegistryBuilder {
    /// Create a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the model for `kind`, replacing any earlier registration.
    #[must_use]
    pub fn model(mut self, kind: RiskKind, model: Arc<dyn RiskModel>) -> Self {
        self.models.insert(kind, model);
        self
    }

    /// Build the registry.
    ///
    /// # Errors
    ///
    /// Returns [`StartupError::MissingModel`] for the first risk without a model.
    pub fn build(mut self) -> Result<ModelRegistry, StartupError> {
        let mut models = Vec::with_capacity(RiskKind::ALL.len());
        for kind in RiskKind::ALL {
            let model = self
                .models
                .remove(&kind)
                .ok_or(StartupError::MissingModel(kind))?;
            models.push((kind, model));
        }
        Ok(ModelRegistry { models })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::model::ScriptedModel;

    fn full_builder() -> ModelRegistryBuilder {
        RiskKind::ALL
            .into_iter()
            .fold(ModelRegistry::builder(), |builder, kind| {
                builder.model(kind, Arc::new(ScriptedModel::constant(1.0)))
            })
    }

    #[test]
    fn build_requires_every_risk() {
        let err = ModelRegistry::builder()
            .model(RiskKind::Phishing, Arc::new(ScriptedModel::constant(1.0)))
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            StartupError::MissingModel(RiskKind::WeakPassword)
        ));
    }

    #[test]
    fn models_iterate_in_response_order() {
        let registry = full_builder().build().unwrap();
        assert_eq!(registry.len(), 5);
        assert_eq!(registry.risks(), RiskKind::ALL.to_vec());
    }

    #[test]
    fn later_registration_replaces_earlier() {
        let registry = full_builder()
            .model(RiskKind::Oversharing, Arc::new(ScriptedModel::constant(9.0)))
            .build()
            .unwrap();
        let model = registry.get(RiskKind::Oversharing).unwrap();
        let out = model.predict(&[vec![0.0; 5]]).unwrap();
        assert_eq!(out[0].to_f64(), Some(9.0));
    }
}
