pub mod app;
pub mod args;
pub mod auth;
pub mod colors;
pub mod display;
pub mod prompt;
pub mod service;
pub mod session;
pub mod spotify;

// Re-export commonly used items
pub use app::{ArtistriageApp, StorePaths};
pub use args::Args;
pub use service::{ArtistProfile, MusicService, ServiceError};
pub use session::{ClassifyOutcome, ImportSummary, RelatedRefresh, Session, SessionError};
