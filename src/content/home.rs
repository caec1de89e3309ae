//! Home view content

use super::types::{Accent, Article, CopingStrategy, Icon, QuickAction, ToolLink};
use crate::navigation::View;

pub const APP_NAME: &str = "MyndStrong";
pub const TAGLINE: &str = "Your Mental Health Companion";

pub const HERO_TITLE: &str = "You're Not Alone in This Journey";
pub const HERO_TEXT: &str = "Access mental health resources, connect with supportive communities, \
                             and take control of your wellbeing with tools designed to help you thrive.";

pub const CRISIS_BANNER_LABEL: &str = "Crisis Support:";
pub const CRISIS_BANNER: &str =
    "If you're in immediate danger, call 988 (Suicide & Crisis Lifeline) or 911";

pub static QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction {
        title: "Crisis Support",
        description: "Immediate help and emergency resources",
        target: View::Crisis,
        icon: Icon::Phone,
        accent: Accent::Red,
    },
    QuickAction {
        title: "Find Resources",
        description: "Mental health tools and information",
        target: View::Resources,
        icon: Icon::BookOpen,
        accent: Accent::Blue,
    },
    QuickAction {
        title: "Join Community",
        description: "Connect with supportive peers",
        target: View::Community,
        icon: Icon::Users,
        accent: Accent::Green,
    },
    QuickAction {
        title: "My Profile",
        description: "Manage your account and preferences",
        target: View::Profile,
        icon: Icon::User,
        accent: Accent::Purple,
    },
];

pub static TOOLS: &[ToolLink] = &[
    ToolLink {
        title: "Mood Tracker",
        description: "Track your daily emotions and identify patterns",
        link: "https://www.moodpath.com",
        icon: Icon::Heart,
    },
    ToolLink {
        title: "Meditation Guide",
        description: "Free guided meditations for stress relief",
        link: "https://www.headspace.com/meditation",
        icon: Icon::Brain,
    },
    ToolLink {
        title: "Breathing Exercises",
        description: "Simple techniques to manage anxiety",
        link: "https://www.calm.com/breathe",
        icon: Icon::Lightbulb,
    },
    ToolLink {
        title: "Sleep Hygiene",
        description: "Tips for better sleep and mental health",
        link: "https://www.sleepfoundation.org/how-sleep-works/sleep-hygiene",
        icon: Icon::Target,
    },
];

pub static ARTICLES: &[Article] = &[
    Article {
        title: "Understanding Anxiety",
        description: "Learn about anxiety symptoms and management",
        link: "https://www.nimh.nih.gov/health/topics/anxiety-disorders",
        read_time: "5 min read",
    },
    Article {
        title: "Depression: Signs and Support",
        description: "Recognizing depression and finding help",
        link: "https://www.nimh.nih.gov/health/topics/depression",
        read_time: "7 min read",
    },
    Article {
        title: "Building Resilience",
        description: "Strategies for mental strength and recovery",
        link: "https://www.apa.org/topics/resilience",
        read_time: "6 min read",
    },
    Article {
        title: "Stress Management",
        description: "Effective ways to cope with daily stress",
        link: "https://www.mayoclinic.org/healthy-lifestyle/stress-management/basics/stress-basics/hlv-20049495",
        read_time: "4 min read",
    },
];

pub static STRATEGIES: &[CopingStrategy] = &[
    CopingStrategy {
        title: "5-4-3-2-1 Grounding",
        description: "Use your senses to stay present during anxiety",
        technique: "Name 5 things you see, 4 you can touch, 3 you hear, 2 you smell, 1 you taste",
    },
    CopingStrategy {
        title: "Box Breathing",
        description: "Calm your nervous system with controlled breathing",
        technique: "Inhale for 4, hold for 4, exhale for 4, hold for 4. Repeat.",
    },
    CopingStrategy {
        title: "Progressive Muscle Relaxation",
        description: "Release physical tension throughout your body",
        technique: "Tense and release each muscle group, starting from your toes",
    },
    CopingStrategy {
        title: "Mindful Observation",
        description: "Focus your attention to reduce racing thoughts",
        technique: "Choose an object and observe it closely for 2-3 minutes",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_actions_cover_every_sub_view() {
        let targets: Vec<_> = QUICK_ACTIONS.iter().map(|a| a.target).collect();
        assert_eq!(
            targets,
            [View::Crisis, View::Resources, View::Community, View::Profile]
        );
    }

    #[test]
    fn test_crisis_banner_mentions_numbers() {
        assert!(CRISIS_BANNER.contains("988"));
        assert!(CRISIS_BANNER.contains("911"));
    }

    #[test]
    fn test_crisis_banner_label() {
        assert_eq!(CRISIS_BANNER_LABEL, "Crisis Support:");
        assert!(CRISIS_BANNER.starts_with("If you're in immediate danger"));
    }
}
