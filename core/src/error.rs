use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Artist '{0}' is not in the registry")]
    UnknownArtist(String),
}
