//! Concrete [`RiskModel`](crate::port::outbound::model::RiskModel) adapters
//! and the artifact loader that builds them.

pub mod artifact;
pub mod linear;
pub mod metadata;
pub mod tree;

pub use artifact::{load_model, ModelArtifact};
pub use linear::LinearModel;
pub use metadata::WidthMetadata;
pub use tree::{TreeModel, TreeNode};
