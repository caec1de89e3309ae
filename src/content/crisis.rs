//! Crisis content
//!
//! The contact strings below are user-facing safety information. They are
//! asserted verbatim by tests; change them only against the providers' own
//! published numbers.

use super::types::{ContactMethod, CopingStrategy, EmergencyContact, Hotline};

/// 988 Suicide & Crisis Lifeline
pub const CRISIS_LIFELINE_NUMBER: &str = "988";
/// Crisis Text Line keyword
pub const CRISIS_TEXT_KEYWORD: &str = "HOME";
/// Crisis Text Line short code
pub const CRISIS_TEXT_NUMBER: &str = "741741";
/// Emergency services
pub const EMERGENCY_NUMBER: &str = "911";
/// SAMHSA National Helpline
pub const SAMHSA_HELPLINE_NUMBER: &str = "1-800-662-4357";

pub const LIFELINE: ContactMethod = ContactMethod::Call {
    number: CRISIS_LIFELINE_NUMBER,
};

pub const TEXT_LINE: ContactMethod = ContactMethod::Text {
    keyword: CRISIS_TEXT_KEYWORD,
    number: CRISIS_TEXT_NUMBER,
};

pub const EMERGENCY: ContactMethod = ContactMethod::Call {
    number: EMERGENCY_NUMBER,
};

pub const SAMHSA: ContactMethod = ContactMethod::Call {
    number: SAMHSA_HELPLINE_NUMBER,
};

pub const DANGER_NOTICE: &str = "If you're in immediate danger or having thoughts of self-harm, \
                                 please reach out for help immediately.";

/// Shown in the home-page emergency panel and at the top of the crisis view
pub static EMERGENCY_CONTACTS: &[EmergencyContact] = &[
    EmergencyContact {
        title: "Crisis Lifeline",
        contact: LIFELINE,
        caption: "24/7 suicide prevention",
    },
    EmergencyContact {
        title: "Crisis Text Line",
        contact: TEXT_LINE,
        caption: "24/7 text support",
    },
    EmergencyContact {
        title: "Emergency",
        contact: EMERGENCY,
        caption: "Immediate danger",
    },
];

/// Hotline directory, shared by the crisis and resources views
pub static HOTLINES: &[Hotline] = &[
    Hotline {
        name: "National Suicide Prevention Lifeline",
        contact: LIFELINE,
        description: "24/7 crisis support",
        link: "https://suicidepreventionlifeline.org",
    },
    Hotline {
        name: "Crisis Text Line",
        contact: TEXT_LINE,
        description: "24/7 text-based crisis support",
        link: "https://crisistextline.org",
    },
    Hotline {
        name: "SAMHSA National Helpline",
        contact: SAMHSA,
        description: "Treatment referral and information service",
        link: "https://www.samhsa.gov/find-help/national-helpline",
    },
];

/// Grounding techniques for someone waiting to connect
pub fn grounding() -> &'static [CopingStrategy] {
    &super::home::STRATEGIES[..2]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contractual_numbers() {
        assert_eq!(LIFELINE.display(), "988");
        assert_eq!(TEXT_LINE.display(), "Text HOME to 741741");
        assert_eq!(EMERGENCY.display(), "911");
        assert_eq!(SAMHSA.display(), "1-800-662-4357");
    }

    #[test]
    fn test_emergency_panel_order() {
        let titles: Vec<_> = EMERGENCY_CONTACTS.iter().map(|c| c.title).collect();
        assert_eq!(titles, ["Crisis Lifeline", "Crisis Text Line", "Emergency"]);

        let shown: Vec<_> = EMERGENCY_CONTACTS
            .iter()
            .map(|c| c.contact.display())
            .collect();
        assert_eq!(shown, ["988", "Text HOME to 741741", "911"]);
    }

    #[test]
    fn test_grounding_is_breathing_and_senses() {
        let titles: Vec<_> = grounding().iter().map(|s| s.title).collect();
        assert_eq!(titles, ["5-4-3-2-1 Grounding", "Box Breathing"]);
    }

    #[test]
    fn test_hotline_contacts() {
        let shown: Vec<_> = HOTLINES.iter().map(|h| h.contact.display()).collect();
        assert_eq!(shown, ["988", "Text HOME to 741741", "1-800-662-4357"]);
    }
}
