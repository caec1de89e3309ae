//! Card Components
//!
//! Building blocks shared by every content page: section titles, outbound
//! link cards and coloured notices.

use leptos::*;
use myndstrong::content::Accent;

/// Tailwind classes for a quick-action button of the given accent
pub fn accent_classes(accent: Accent) -> &'static str {
    match accent {
        Accent::Red => "bg-red-500 hover:bg-red-600",
        Accent::Blue => "bg-blue-500 hover:bg-blue-600",
        Accent::Green => "bg-green-500 hover:bg-green-600",
        Accent::Purple => "bg-purple-500 hover:bg-purple-600",
    }
}

#[component]
pub fn SectionTitle(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <h3 class="text-2xl font-bold text-gray-800 mb-6">{title}</h3>
    }
}

/// A card that opens `href` in a new tab
#[component]
pub fn ExternalCard(
    href: &'static str,
    #[prop(default = "bg-white p-6 rounded-xl shadow-md hover:shadow-lg transition-shadow border border-gray-200 group block")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <a href=href target="_blank" rel="noopener noreferrer" class=class>
            {children()}
        </a>
    }
}

/// Notice colour
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeTone {
    Warning,
    Danger,
    Info,
}

impl NoticeTone {
    fn classes(self) -> &'static str {
        match self {
            NoticeTone::Warning => "bg-yellow-50 border-l-4 border-yellow-400 text-yellow-800",
            NoticeTone::Danger => "bg-red-50 border-l-4 border-red-400 text-red-800",
            NoticeTone::Info => "bg-blue-50 border-l-4 border-blue-400 text-blue-800",
        }
    }
}

/// A highlighted paragraph
#[component]
pub fn Notice(
    tone: NoticeTone,
    #[prop(optional)]
    title: Option<&'static str>,
    /// Bold label run into the start of the text
    #[prop(optional)]
    lead: Option<&'static str>,
    #[prop(into)]
    text: String,
) -> impl IntoView {
    view! {
        <div class=format!("{} p-4 rounded-r-lg mb-8", tone.classes())>
            {title.map(|t| view! { <h4 class="font-semibold mb-1">{t}</h4> })}
            <p>
                {lead.map(|l| view! { <strong>{l}</strong> " " })}
                {text}
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_classes() {
        assert!(accent_classes(Accent::Red).starts_with("bg-red-500"));
        assert!(accent_classes(Accent::Purple).contains("hover:bg-purple-600"));
    }

    #[test]
    fn test_notice_tones_differ() {
        assert_ne!(NoticeTone::Warning.classes(), NoticeTone::Danger.classes());
    }
}
