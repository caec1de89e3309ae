//! Glyph Component
//!
//! The content tables name their icons; this maps each one to an emoji.

use leptos::*;
use myndstrong::content::Icon;

/// Emoji shown for an icon
pub fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Brain => "🧠",
        Icon::Heart => "❤️",
        Icon::Users => "👥",
        Icon::BookOpen => "📖",
        Icon::Phone => "📞",
        Icon::MessageCircle => "💬",
        Icon::User => "👤",
        Icon::Shield => "🛡️",
        Icon::Lightbulb => "💡",
        Icon::Target => "🎯",
    }
}

#[component]
pub fn Glyph(
    icon: Icon,
    #[prop(default = "text-2xl")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <span class=class aria-hidden="true">{glyph(icon)}</span>
    }
}
