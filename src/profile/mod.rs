//! User Profile
//!
//! The profile view owns one [`Profile`] record for the lifetime of the page.
//! Edits happen in a staging copy held by [`ProfileEditor`]; nothing is
//! persisted.
//!
//! # Example
//!
//! ```rust
//! use myndstrong::profile::{NotificationKind, ProfileEditor, ProfileField};
//!
//! let mut editor = ProfileEditor::default();
//! editor.begin_edit().unwrap();
//! editor.set_field(ProfileField::Location, "Portland, OR").unwrap();
//! editor.set_notification(NotificationKind::Community, true).unwrap();
//!
//! let outcome = editor.save().unwrap();
//! assert_eq!(outcome.changed.len(), 2);
//! assert_eq!(editor.canonical().location, "Portland, OR");
//! ```

pub mod editor;
pub mod record;

pub use editor::{EditState, ProfileEditor, SaveOutcome};
pub use record::{Change, NotificationKind, NotificationPrefs, Profile, ProfileField};

use thiserror::Error;

/// Rejected profile editor actions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// Save, cancel or a field write arrived outside an edit session
    #[error("Profile is not being edited")]
    NotEditing,

    /// Edit was requested while a session is already open
    #[error("Profile is already being edited")]
    AlreadyEditing,

    /// The field is display-only
    #[error("Field is read-only: {0}")]
    ReadOnlyField(ProfileField),
}

/// Result type alias for profile editor operations
pub type ProfileResult<T> = Result<T, ProfileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ProfileError::NotEditing.to_string(),
            "Profile is not being edited"
        );
        assert_eq!(
            ProfileError::ReadOnlyField(ProfileField::JoinDate).to_string(),
            "Field is read-only: Member Since"
        );
    }
}
