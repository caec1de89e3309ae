//! Content record types
//!
//! Every entry the front-end renders is one of these records. They are built
//! as `&'static` tables at compile time and never change at runtime:
//! - `ToolLink`, `SelfCareLink`: a titled outbound link
//! - `Article`: an outbound link with an estimated read time
//! - `CopingStrategy`: an in-page technique, no link
//! - `Hotline`, `EmergencyContact`: a literal phone or text contact
//! - `SupportGroup`, `OnlineCommunity`, `LocalResource`: community entries
//! - `QuickAction`: a home-page button that switches views

use serde::Serialize;

use crate::navigation::View;

/// Glyphs referenced by the content tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Brain,
    Heart,
    Users,
    BookOpen,
    Phone,
    MessageCircle,
    User,
    Shield,
    Lightbulb,
    Target,
}

/// Colour family used for a card or section accent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Red,
    Blue,
    Green,
    Purple,
}

/// How a person reaches a hotline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ContactMethod {
    /// Dial a number
    Call { number: &'static str },
    /// Send `keyword` as a text message to `number`
    Text {
        keyword: &'static str,
        number: &'static str,
    },
}

impl ContactMethod {
    /// The literal string shown to the user
    pub fn display(&self) -> String {
        match self {
            ContactMethod::Call { number } => (*number).to_string(),
            ContactMethod::Text { keyword, number } => format!("Text {} to {}", keyword, number),
        }
    }

    /// A `tel:` or `sms:` URI for the contact
    pub fn href(&self) -> String {
        match self {
            ContactMethod::Call { number } => format!("tel:{}", digits(number)),
            ContactMethod::Text { keyword, number } => {
                format!("sms:{}?&body={}", digits(number), keyword)
            }
        }
    }
}

fn digits(number: &str) -> String {
    number.chars().filter(char::is_ascii_digit).collect()
}

/// A titled outbound link with a glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolLink {
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    pub icon: Icon,
}

/// An educational article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Article {
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    pub read_time: &'static str,
}

/// A coping technique rendered in place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CopingStrategy {
    pub title: &'static str,
    pub description: &'static str,
    pub technique: &'static str,
}

/// A crisis hotline with its own website
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hotline {
    pub name: &'static str,
    pub contact: ContactMethod,
    pub description: &'static str,
    pub link: &'static str,
}

/// A headline emergency number shown in the emergency panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmergencyContact {
    pub title: &'static str,
    pub contact: ContactMethod,
    pub caption: &'static str,
}

/// A self-care link without a glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelfCareLink {
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
}

/// A peer support group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SupportGroup {
    pub name: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    /// Meeting format tag, e.g. "In-person & Online"
    pub format: &'static str,
    pub icon: Icon,
}

/// An online community
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OnlineCommunity {
    pub name: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    pub members: &'static str,
}

/// A local service finder with a call-to-action label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocalResource {
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    pub action: &'static str,
}

/// A home-page button that switches to another view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickAction {
    pub title: &'static str,
    pub description: &'static str,
    pub target: View,
    pub icon: Icon,
    pub accent: Accent,
}

/// An outbound link located in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LinkRef {
    pub view: View,
    pub section: &'static str,
    pub title: &'static str,
    pub url: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_contact() {
        let contact = ContactMethod::Call {
            number: "1-800-662-4357",
        };
        assert_eq!(contact.display(), "1-800-662-4357");
        assert_eq!(contact.href(), "tel:18006624357");
    }

    #[test]
    fn test_text_contact() {
        let contact = ContactMethod::Text {
            keyword: "HOME",
            number: "741741",
        };
        assert_eq!(contact.display(), "Text HOME to 741741");
        assert_eq!(contact.href(), "sms:741741?&body=HOME");
    }

    #[test]
    fn test_contact_serializes_tagged() {
        let json = serde_json::to_value(ContactMethod::Call { number: "911" }).unwrap();
        assert_eq!(json["kind"], "call");
        assert_eq!(json["number"], "911");
    }
}
