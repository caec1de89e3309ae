//! Profile view content

use super::types::{Icon, ToolLink};

pub static QUICK_ACCESS: &[ToolLink] = &[
    ToolLink {
        title: "Crisis Hotlines",
        description: "24/7 emergency mental health support",
        link: "https://suicidepreventionlifeline.org",
        icon: Icon::Phone,
    },
    ToolLink {
        title: "Find a Therapist",
        description: "Locate mental health professionals near you",
        link: "https://www.psychologytoday.com/us/therapists",
        icon: Icon::User,
    },
    ToolLink {
        title: "Mental Health Screening",
        description: "Free, confidential mental health assessments",
        link: "https://screening.mhanational.org/screening-tools",
        icon: Icon::Heart,
    },
];
