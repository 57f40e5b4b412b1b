pub mod error;
pub mod metadata;
pub mod model;
pub mod network;
pub mod spec;

pub use error::ModelError;
pub use model::{Model, ModelLayer};
pub use network::Network;
pub use spec::{NetworkSpec, LayerSpec};
