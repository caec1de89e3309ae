//! # MyndStrong
//!
//! A mental health companion: crisis lines, curated resources, community
//! support and a personal profile, delivered as a single-page app.
//!
//! ## Modules
//!
//! - [`navigation`]: the five top-level views and the navigator that selects one
//! - [`content`]: compile-time content tables for every view
//! - [`profile`]: the profile record and its edit/staging state machine
//!
//! With the default `server` feature:
//!
//! - `config`: TOML configuration with environment overrides
//! - `logging`: tracing subscriber setup
//! - `api`: Axum host for the front-end bundle and the catalog JSON
//! - `audit`: outbound link checks over the content tables
//!
//! The front-end crate builds this library with `default-features = false`
//! and only sees the first three modules.
//!
//! ## Quick Start
//!
//! ```rust
//! use myndstrong::{Catalog, Navigator, ProfileEditor, ProfileField, View};
//!
//! let mut nav = Navigator::new();
//! nav.navigate(View::Crisis);
//! assert_eq!(nav.current(), View::Crisis);
//!
//! let hotlines = Catalog::get().crisis.hotlines;
//! assert!(!hotlines.is_empty());
//!
//! let mut editor = ProfileEditor::default();
//! editor.begin_edit().unwrap();
//! editor.set_field(ProfileField::Phone, "(555) 010-0199").unwrap();
//! editor.cancel().unwrap();
//! assert_eq!(editor.canonical().phone, "+1 (555) 123-4567");
//! ```

pub mod content;
pub mod navigation;
pub mod profile;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod audit;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod logging;

// Re-export top-level types for convenience
pub use navigation::{Navigator, UnknownView, View};

pub use content::{Catalog, LinkRef, ViewContent};

pub use profile::{
    Change, EditState, NotificationKind, NotificationPrefs, Profile, ProfileEditor, ProfileError,
    ProfileField, ProfileResult, SaveOutcome,
};

#[cfg(feature = "server")]
pub use api::{build_router, serve, ApiError, AppState};

#[cfg(feature = "server")]
pub use audit::{AuditReport, HttpProbe, LinkProbe, LinkStatus};

#[cfg(feature = "server")]
pub use config::{AuditConfig, Config, ConfigError, ConfigOrigin, LoggingConfig, ServerConfig};
