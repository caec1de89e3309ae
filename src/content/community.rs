//! Community view content

use super::types::{Icon, LocalResource, OnlineCommunity, SupportGroup};

pub const ENCOURAGEMENT_LABEL: &str = "Remember:";
pub const ENCOURAGEMENT: &str = "You're not alone in your mental health journey. \
                                 Connecting with others who understand can provide valuable support and encouragement.";

pub const SAFETY_NOTICE: &str = "When participating in online communities, protect your privacy and be cautious \
                                 about sharing personal information. If you encounter harmful content or behavior, \
                                 report it to the platform moderators.";

pub static SUPPORT_GROUPS: &[SupportGroup] = &[
    SupportGroup {
        name: "NAMI Support Groups",
        description: "Peer-led support groups for individuals and families",
        link: "https://www.nami.org/Support-Education/Support-Groups",
        format: "In-person & Online",
        icon: Icon::Users,
    },
    SupportGroup {
        name: "Depression and Bipolar Support Alliance",
        description: "Support groups for mood disorders",
        link: "https://www.dbsalliance.org/support/chapters-support-groups",
        format: "In-person & Online",
        icon: Icon::Heart,
    },
    SupportGroup {
        name: "Anxiety and Depression Association",
        description: "Online support groups and resources",
        link: "https://adaa.org/finding-help/treatment/peer-to-peer-support",
        format: "Online",
        icon: Icon::MessageCircle,
    },
];

pub static ONLINE_COMMUNITIES: &[OnlineCommunity] = &[
    OnlineCommunity {
        name: "7 Cups",
        description: "Free emotional support and online therapy",
        link: "https://www.7cups.com",
        members: "40M+ users",
    },
    OnlineCommunity {
        name: "Mental Health America Community",
        description: "Online forums and peer support",
        link: "https://www.mhanational.org/online-support-communities",
        members: "Active community",
    },
    OnlineCommunity {
        name: "Reddit Mental Health Communities",
        description: "Various subreddits for mental health support",
        link: "https://www.reddit.com/r/mentalhealth",
        members: "1M+ members",
    },
    OnlineCommunity {
        name: "Mighty",
        description: "Health-focused social network",
        link: "https://themighty.com",
        members: "3M+ users",
    },
];

pub static LOCAL_RESOURCES: &[LocalResource] = &[
    LocalResource {
        title: "Find Local Support Groups",
        description: "Search for in-person support groups in your area",
        link: "https://www.psychologytoday.com/us/groups",
        action: "Search Now",
    },
    LocalResource {
        title: "Community Mental Health Centers",
        description: "Locate community mental health services",
        link: "https://findtreatment.samhsa.gov",
        action: "Find Centers",
    },
    LocalResource {
        title: "Peer Support Programs",
        description: "Connect with trained peer supporters",
        link: "https://www.namiillinois.org/peer-support",
        action: "Learn More",
    },
];
