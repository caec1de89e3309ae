//! Resources view content

use super::types::{Icon, SelfCareLink, ToolLink};

pub use super::crisis::{DANGER_NOTICE, HOTLINES};

pub static DIRECTORIES: &[ToolLink] = &[
    ToolLink {
        title: "Psychology Today",
        description: "Find therapists, psychiatrists, and support groups",
        link: "https://www.psychologytoday.com",
        icon: Icon::Users,
    },
    ToolLink {
        title: "NAMI (National Alliance on Mental Illness)",
        description: "Education, support, and advocacy",
        link: "https://www.nami.org",
        icon: Icon::Heart,
    },
    ToolLink {
        title: "Mental Health America",
        description: "Screening tools and resources",
        link: "https://www.mhanational.org",
        icon: Icon::Shield,
    },
    ToolLink {
        title: "Headspace",
        description: "Meditation and mindfulness app",
        link: "https://www.headspace.com",
        icon: Icon::BookOpen,
    },
];

pub static SELF_CARE: &[SelfCareLink] = &[
    SelfCareLink {
        title: "Mindfulness Exercises",
        description: "Free guided meditations and breathing exercises",
        link: "https://www.mindful.org/meditation/mindfulness-getting-started",
    },
    SelfCareLink {
        title: "Mood Tracking Apps",
        description: "Track your mental health progress",
        link: "https://www.healthline.com/health/mental-health/top-mood-tracking-apps",
    },
    SelfCareLink {
        title: "Sleep Hygiene Guide",
        description: "Tips for better sleep and mental health",
        link: "https://www.sleepfoundation.org/how-sleep-works/sleep-hygiene",
    },
];
