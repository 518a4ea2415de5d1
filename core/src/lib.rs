pub mod artist;
pub mod error;
pub mod inference;
pub mod registry;
pub mod storage;

// Re-export commonly used items
pub use artist::{Artist, Status};
pub use error::RegistryError;
pub use inference::{InferenceReport, StatusChange, run_cycle};
pub use registry::Registry;
pub use storage::{load_registry, save_potentials, save_registry};
