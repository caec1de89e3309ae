//! Profile record types

use serde::{Deserialize, Serialize};
use std::fmt;

/// The user's profile as shown on the profile view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    /// Display-only, e.g. "January 2024"
    pub join_date: String,
    /// Free text, "Name - Phone Number"
    pub emergency_contact: String,
    pub preferred_therapist: String,
    pub notifications: NotificationPrefs,
}

impl Profile {
    /// The fixed record every profile view mounts with
    pub fn seed() -> Self {
        Self {
            name: "Alex Johnson".to_string(),
            email: "alex.johnson@email.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            location: "San Francisco, CA".to_string(),
            join_date: "January 2024".to_string(),
            emergency_contact: "Sarah Johnson - (555) 987-6543".to_string(),
            preferred_therapist: "Dr. Emily Chen".to_string(),
            notifications: NotificationPrefs {
                appointments: true,
                wellness: true,
                community: false,
            },
        }
    }

    /// Read a text field
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Email => &self.email,
            ProfileField::Phone => &self.phone,
            ProfileField::Location => &self.location,
            ProfileField::JoinDate => &self.join_date,
            ProfileField::EmergencyContact => &self.emergency_contact,
            ProfileField::PreferredTherapist => &self.preferred_therapist,
        }
    }

    pub(crate) fn slot_mut(&mut self, field: ProfileField) -> &mut String {
        match field {
            ProfileField::Name => &mut self.name,
            ProfileField::Email => &mut self.email,
            ProfileField::Phone => &mut self.phone,
            ProfileField::Location => &mut self.location,
            ProfileField::JoinDate => &mut self.join_date,
            ProfileField::EmergencyContact => &mut self.emergency_contact,
            ProfileField::PreferredTherapist => &mut self.preferred_therapist,
        }
    }

    /// Every field and flag that differs between `self` and `other`
    pub fn diff(&self, other: &Profile) -> Vec<Change> {
        let fields = ProfileField::ALL
            .into_iter()
            .filter(|f| self.get(*f) != other.get(*f))
            .map(Change::Field);

        let flags = NotificationKind::ALL
            .into_iter()
            .filter(|k| self.notifications.get(*k) != other.notifications.get(*k))
            .map(Change::Notification);

        fields.chain(flags).collect()
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::seed()
    }
}

/// Which reminders the user wants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPrefs {
    pub appointments: bool,
    pub wellness: bool,
    pub community: bool,
}

impl NotificationPrefs {
    pub fn get(&self, kind: NotificationKind) -> bool {
        match kind {
            NotificationKind::Appointments => self.appointments,
            NotificationKind::Wellness => self.wellness,
            NotificationKind::Community => self.community,
        }
    }

    pub fn set(&mut self, kind: NotificationKind, enabled: bool) {
        match kind {
            NotificationKind::Appointments => self.appointments = enabled,
            NotificationKind::Wellness => self.wellness = enabled,
            NotificationKind::Community => self.community = enabled,
        }
    }
}

/// Text fields of a [`Profile`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    Name,
    Email,
    Phone,
    Location,
    JoinDate,
    EmergencyContact,
    PreferredTherapist,
}

impl ProfileField {
    pub const ALL: [ProfileField; 7] = [
        ProfileField::Name,
        ProfileField::Email,
        ProfileField::Phone,
        ProfileField::Location,
        ProfileField::JoinDate,
        ProfileField::EmergencyContact,
        ProfileField::PreferredTherapist,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::Name => "Name",
            ProfileField::Email => "Email",
            ProfileField::Phone => "Phone",
            ProfileField::Location => "Location",
            ProfileField::JoinDate => "Member Since",
            ProfileField::EmergencyContact => "Emergency Contact",
            ProfileField::PreferredTherapist => "Preferred Therapist",
        }
    }

    /// Whether an edit session can change this field
    pub fn is_editable(&self) -> bool {
        !matches!(self, ProfileField::JoinDate)
    }

    /// HTML input type for the edit control
    pub fn input_type(&self) -> &'static str {
        match self {
            ProfileField::Email => "email",
            ProfileField::Phone => "tel",
            _ => "text",
        }
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            ProfileField::EmergencyContact => Some("Name - Phone Number"),
            _ => None,
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Notification flags of a [`Profile`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Appointments,
    Wellness,
    Community,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 3] = [
        NotificationKind::Appointments,
        NotificationKind::Wellness,
        NotificationKind::Community,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NotificationKind::Appointments => "Appointment reminders",
            NotificationKind::Wellness => "Wellness tips and resources",
            NotificationKind::Community => "Community updates",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One difference between two profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum Change {
    Field(ProfileField),
    Notification(NotificationKind),
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Change::Field(field) => field.fmt(f),
            Change::Notification(kind) => kind.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_values() {
        let p = Profile::seed();
        assert_eq!(p.name, "Alex Johnson");
        assert_eq!(p.email, "alex.johnson@email.com");
        assert_eq!(p.join_date, "January 2024");
        assert_eq!(p.preferred_therapist, "Dr. Emily Chen");
        assert!(p.notifications.appointments);
        assert!(p.notifications.wellness);
        assert!(!p.notifications.community);
    }

    #[test]
    fn test_get_matches_struct_fields() {
        let p = Profile::seed();
        assert_eq!(p.get(ProfileField::Phone), "+1 (555) 123-4567");
        assert_eq!(p.get(ProfileField::Location), "San Francisco, CA");
        assert_eq!(
            p.get(ProfileField::EmergencyContact),
            "Sarah Johnson - (555) 987-6543"
        );
    }

    #[test]
    fn test_diff() {
        let a = Profile::seed();
        assert!(a.diff(&a.clone()).is_empty());

        let mut b = a.clone();
        b.location = "Oakland, CA".to_string();
        b.notifications.community = true;

        assert_eq!(
            a.diff(&b),
            vec![
                Change::Field(ProfileField::Location),
                Change::Notification(NotificationKind::Community),
            ]
        );
    }

    #[test]
    fn test_only_join_date_is_read_only() {
        let read_only: Vec<_> = ProfileField::ALL
            .into_iter()
            .filter(|f| !f.is_editable())
            .collect();
        assert_eq!(read_only, vec![ProfileField::JoinDate]);
    }

    #[test]
    fn test_input_types() {
        assert_eq!(ProfileField::Email.input_type(), "email");
        assert_eq!(ProfileField::Phone.input_type(), "tel");
        assert_eq!(ProfileField::Name.input_type(), "text");
    }
}
