//! Profile edit session
//!
//! ```text
//!            begin_edit (staging = canonical)
//!   Viewing ─────────────────────────────────▶ Editing
//!      ▲                                          │
//!      └───────── save (canonical = staging) ─────┤
//!      └───────── cancel (staging dropped) ───────┘
//! ```
//!
//! The staging copy exists only inside [`EditState::Editing`], so a commit or
//! discard replaces the whole record at once.

use serde::Serialize;

use super::record::{Change, NotificationKind, Profile, ProfileField};
use super::{ProfileError, ProfileResult};

/// Whether the profile is being displayed or edited
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Viewing,
    Editing {
        staging: Profile,
    },
}

/// Result of committing an edit session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveOutcome {
    /// Fields and flags whose committed value differs from before the session
    pub changed: Vec<Change>,
}

impl SaveOutcome {
    pub fn is_unchanged(&self) -> bool {
        self.changed.is_empty()
    }
}

/// Canonical profile plus the current edit state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileEditor {
    canonical: Profile,
    state: EditState,
}

impl ProfileEditor {
    /// Start in the viewing state with `canonical` on display
    pub fn new(canonical: Profile) -> Self {
        Self {
            canonical,
            state: EditState::Viewing,
        }
    }

    pub fn canonical(&self) -> &Profile {
        &self.canonical
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, EditState::Editing { .. })
    }

    /// The staging copy, if an edit session is open
    pub fn staging(&self) -> Option<&Profile> {
        match &self.state {
            EditState::Viewing => None,
            EditState::Editing { staging } => Some(staging),
        }
    }

    /// The record the view binds to: staging while editing, canonical otherwise
    pub fn displayed(&self) -> &Profile {
        self.staging().unwrap_or(&self.canonical)
    }

    pub fn field_value(&self, field: ProfileField) -> &str {
        self.displayed().get(field)
    }

    /// Checkbox state for a notification flag
    pub fn notification_checked(&self, kind: NotificationKind) -> bool {
        self.displayed().notifications.get(kind)
    }

    /// Open an edit session seeded from the canonical record
    pub fn begin_edit(&mut self) -> ProfileResult<()> {
        if self.is_editing() {
            return Err(ProfileError::AlreadyEditing);
        }

        self.state = EditState::Editing {
            staging: self.canonical.clone(),
        };
        tracing::debug!("profile edit session opened");
        Ok(())
    }

    /// Write a text field of the staging copy
    pub fn set_field(
        &mut self,
        field: ProfileField,
        value: impl Into<String>,
    ) -> ProfileResult<()> {
        if !field.is_editable() {
            return Err(ProfileError::ReadOnlyField(field));
        }

        let staging = self.staging_mut()?;
        *staging.slot_mut(field) = value.into();
        Ok(())
    }

    /// Toggle a notification flag of the staging copy.
    ///
    /// Rejected while viewing, which leaves the flag as it was.
    pub fn set_notification(&mut self, kind: NotificationKind, enabled: bool) -> ProfileResult<()> {
        let staging = self.staging_mut()?;
        staging.notifications.set(kind, enabled);
        Ok(())
    }

    /// Differences the open session would commit
    pub fn pending_changes(&self) -> Vec<Change> {
        match &self.state {
            EditState::Viewing => Vec::new(),
            EditState::Editing { staging } => self.canonical.diff(staging),
        }
    }

    /// Commit the staging copy and return to viewing
    pub fn save(&mut self) -> ProfileResult<SaveOutcome> {
        match std::mem::take(&mut self.state) {
            EditState::Viewing => Err(ProfileError::NotEditing),
            EditState::Editing { staging } => {
                let changed = self.canonical.diff(&staging);
                self.canonical = staging;
                tracing::debug!(changed = changed.len(), "profile saved");
                Ok(SaveOutcome { changed })
            }
        }
    }

    /// Drop the staging copy and return to viewing
    pub fn cancel(&mut self) -> ProfileResult<()> {
        match std::mem::take(&mut self.state) {
            EditState::Viewing => Err(ProfileError::NotEditing),
            EditState::Editing { staging } => {
                tracing::debug!(
                    discarded = self.canonical.diff(&staging).len(),
                    "profile edit cancelled"
                );
                Ok(())
            }
        }
    }

    fn staging_mut(&mut self) -> ProfileResult<&mut Profile> {
        match &mut self.state {
            EditState::Viewing => Err(ProfileError::NotEditing),
            EditState::Editing { staging } => Ok(staging),
        }
    }
}

impl Default for ProfileEditor {
    fn default() -> Self {
        Self::new(Profile::seed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_viewing() {
        let editor = ProfileEditor::default();
        assert!(!editor.is_editing());
        assert_eq!(editor.state(), &EditState::Viewing);
        assert!(editor.staging().is_none());
        assert_eq!(editor.displayed(), &Profile::seed());
    }

    #[test]
    fn test_begin_edit_seeds_staging_from_canonical() {
        let mut editor = ProfileEditor::default();
        editor.begin_edit().unwrap();

        assert!(editor.is_editing());
        assert_eq!(editor.staging(), Some(editor.canonical()));
    }

    #[test]
    fn test_cancel_restores_canonical() {
        let mut editor = ProfileEditor::default();
        let before = editor.canonical().clone();

        editor.begin_edit().unwrap();
        for field in ProfileField::ALL.into_iter().filter(|f| f.is_editable()) {
            editor.set_field(field, "changed").unwrap();
        }
        for kind in NotificationKind::ALL {
            let current = editor.notification_checked(kind);
            editor.set_notification(kind, !current).unwrap();
        }
        assert_eq!(editor.field_value(ProfileField::Name), "changed");

        editor.cancel().unwrap();

        assert!(!editor.is_editing());
        assert_eq!(editor.canonical(), &before);
        assert_eq!(editor.displayed(), &before);
    }

    #[test]
    fn test_save_commits_only_mutated_fields() {
        let mut editor = ProfileEditor::default();
        let before = editor.canonical().clone();

        editor.begin_edit().unwrap();
        editor.set_field(ProfileField::Email, "alex@example.org").unwrap();
        editor
            .set_notification(NotificationKind::Community, true)
            .unwrap();

        let outcome = editor.save().unwrap();
        assert_eq!(
            outcome.changed,
            vec![
                Change::Field(ProfileField::Email),
                Change::Notification(NotificationKind::Community),
            ]
        );

        let after = editor.canonical();
        assert_eq!(after.email, "alex@example.org");
        assert!(after.notifications.community);

        assert_eq!(after.name, before.name);
        assert_eq!(after.phone, before.phone);
        assert_eq!(after.location, before.location);
        assert_eq!(after.join_date, before.join_date);
        assert_eq!(after.emergency_contact, before.emergency_contact);
        assert_eq!(after.preferred_therapist, before.preferred_therapist);
        assert_eq!(
            after.notifications.appointments,
            before.notifications.appointments
        );
        assert_eq!(after.notifications.wellness, before.notifications.wellness);
    }

    #[test]
    fn test_save_without_changes() {
        let mut editor = ProfileEditor::default();
        editor.begin_edit().unwrap();
        let outcome = editor.save().unwrap();

        assert!(outcome.is_unchanged());
        assert_eq!(editor.canonical(), &Profile::seed());
    }

    #[test]
    fn test_set_back_to_original_is_not_a_change() {
        let mut editor = ProfileEditor::default();
        editor.begin_edit().unwrap();
        editor.set_field(ProfileField::Name, "Sam").unwrap();
        editor.set_field(ProfileField::Name, "Alex Johnson").unwrap();

        assert!(editor.pending_changes().is_empty());
    }

    #[test]
    fn test_notifications_frozen_while_viewing() {
        let mut editor = ProfileEditor::default();

        let err = editor
            .set_notification(NotificationKind::Community, true)
            .unwrap_err();
        assert_eq!(err, ProfileError::NotEditing);
        assert!(!editor.notification_checked(NotificationKind::Community));
        assert!(!editor.canonical().notifications.community);
    }

    #[test]
    fn test_notifications_toggle_freely_while_editing() {
        let mut editor = ProfileEditor::default();
        editor.begin_edit().unwrap();

        for _ in 0..3 {
            let now = editor.notification_checked(NotificationKind::Wellness);
            editor
                .set_notification(NotificationKind::Wellness, !now)
                .unwrap();
            assert_eq!(
                editor.notification_checked(NotificationKind::Wellness),
                !now
            );
        }
        // The canonical flag is untouched until save
        assert!(editor.canonical().notifications.wellness);
    }

    #[test]
    fn test_text_fields_rejected_while_viewing() {
        let mut editor = ProfileEditor::default();
        assert_eq!(
            editor.set_field(ProfileField::Name, "Sam"),
            Err(ProfileError::NotEditing)
        );
        assert_eq!(editor.canonical().name, "Alex Johnson");
    }

    #[test]
    fn test_join_date_is_read_only() {
        let mut editor = ProfileEditor::default();
        editor.begin_edit().unwrap();
        assert_eq!(
            editor.set_field(ProfileField::JoinDate, "March 2020"),
            Err(ProfileError::ReadOnlyField(ProfileField::JoinDate))
        );
        assert_eq!(editor.field_value(ProfileField::JoinDate), "January 2024");
    }

    #[test]
    fn test_illegal_transitions() {
        let mut editor = ProfileEditor::default();
        assert_eq!(editor.save(), Err(ProfileError::NotEditing));
        assert_eq!(editor.cancel(), Err(ProfileError::NotEditing));
        assert!(!editor.is_editing());

        editor.begin_edit().unwrap();
        editor.set_field(ProfileField::Location, "Denver, CO").unwrap();
        assert_eq!(editor.begin_edit(), Err(ProfileError::AlreadyEditing));
        // A rejected begin_edit keeps the open session intact
        assert_eq!(editor.field_value(ProfileField::Location), "Denver, CO");
    }

    #[test]
    fn test_each_session_reseeds_from_latest_canonical() {
        let mut editor = ProfileEditor::default();

        editor.begin_edit().unwrap();
        editor.set_field(ProfileField::Phone, "555-0100").unwrap();
        editor.save().unwrap();

        editor.begin_edit().unwrap();
        assert_eq!(editor.staging().unwrap().phone, "555-0100");
        editor.set_field(ProfileField::Phone, "555-0199").unwrap();
        editor.cancel().unwrap();

        assert_eq!(editor.canonical().phone, "555-0100");
    }
}
