// Nested profile overlay navigation for post detail views

#[macro_use]
pub mod logging;

pub mod args;
pub mod config;
pub mod controller;
pub mod error;
pub mod overlay;
pub mod stack;

pub use args::PostDetailArgs;
pub use config::NavigationConfig;
pub use controller::{PostDetailController, PostNavigation, ProfileOpenOutcome, RejectReason};
pub use error::{ArgsError, ConfigError};
pub use overlay::{OverlayIndicator, ProfileOverlay, PREVIEW_POST_LIMIT};
pub use stack::{NavigationStack, MAX_DEPTH};
