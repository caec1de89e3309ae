//! Home Page
//!
//! Hero, quick actions into the other views, tools, articles, coping
//! strategies and the emergency panel.

use leptos::*;
use myndstrong::content::{home, Catalog, Icon, QuickAction};

use crate::components::cards::accent_classes;
use crate::components::{EmergencyPanel, ExternalCard, Glyph, Notice, NoticeTone, SectionTitle};
use crate::state::use_ui_state;

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    let emergency = Catalog::get().home.emergency;

    view! {
        <div>
            // Hero
            <div class="text-center mb-12">
                <h2 class="text-4xl font-bold text-gray-800 mb-4">{home::HERO_TITLE}</h2>
                <p class="text-xl text-gray-600 max-w-3xl mx-auto mb-8">{home::HERO_TEXT}</p>
                <div class="max-w-2xl mx-auto text-left">
                    <Notice tone=NoticeTone::Warning lead=home::CRISIS_BANNER_LABEL text=home::CRISIS_BANNER />
                </div>
            </div>

            // Quick actions
            <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6 mb-12">
                {home::QUICK_ACTIONS
                    .iter()
                    .map(|action| view! { <QuickActionButton action=*action /> })
                    .collect_view()}
            </div>

            <ToolsSection />
            <ArticlesSection />
            <StrategiesSection />

            <EmergencyPanel contacts=emergency />
        </div>
    }
}

#[component]
fn QuickActionButton(action: QuickAction) -> impl IntoView {
    let state = use_ui_state();

    view! {
        <button
            class=format!(
                "{} text-white p-6 rounded-xl shadow-lg transition-all duration-200 \
                 transform hover:scale-105 group",
                accent_classes(action.accent)
            )
            on:click=move |_| state.navigate(action.target)
        >
            <div class="flex flex-col items-center text-center">
                <Glyph icon=action.icon class="text-4xl mb-4" />
                <h3 class="text-lg font-semibold mb-2">{action.title}</h3>
                <p class="text-sm opacity-90">{action.description}</p>
                <span class="mt-3">"→"</span>
            </div>
        </button>
    }
}

#[component]
fn ToolsSection() -> impl IntoView {
    view! {
        <section class="mb-12">
            <SectionTitle title="Mental Health Tools" />
            <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                {home::TOOLS
                    .iter()
                    .map(|tool| view! {
                        <ExternalCard href=tool.link>
                            <div class="flex items-center justify-between mb-4 text-indigo-600">
                                <Glyph icon=tool.icon />
                                <span class="text-gray-400">"↗"</span>
                            </div>
                            <h4 class="font-semibold text-gray-800 mb-2 group-hover:text-indigo-600 transition-colors">
                                {tool.title}
                            </h4>
                            <p class="text-gray-600 text-sm">{tool.description}</p>
                        </ExternalCard>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ArticlesSection() -> impl IntoView {
    view! {
        <section class="mb-12">
            <SectionTitle title="Educational Articles" />
            <div class="grid md:grid-cols-2 gap-6">
                {home::ARTICLES
                    .iter()
                    .map(|article| view! {
                        <ExternalCard href=article.link>
                            <div class="flex justify-between items-start mb-3">
                                <h4 class="font-semibold text-gray-800 group-hover:text-indigo-600 transition-colors">
                                    {article.title}
                                </h4>
                                <span class="text-gray-400 ml-2">"↗"</span>
                            </div>
                            <p class="text-gray-600 text-sm mb-3">{article.description}</p>
                            <span class="text-xs text-indigo-600 font-medium">{article.read_time}</span>
                        </ExternalCard>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn StrategiesSection() -> impl IntoView {
    view! {
        <section class="mb-12">
            <h3 class="text-2xl font-bold text-gray-800 mb-6 flex items-center">
                <Glyph icon=Icon::Lightbulb class="text-2xl mr-2" />
                "Quick Coping Strategies"
            </h3>
            <div class="grid md:grid-cols-2 gap-6">
                {home::STRATEGIES
                    .iter()
                    .map(|s| view! {
                        <div class="bg-gradient-to-br from-green-50 to-blue-50 p-6 rounded-xl border border-green-200">
                            <h4 class="font-semibold text-gray-800 mb-2">{s.title}</h4>
                            <p class="text-gray-600 text-sm mb-3">{s.description}</p>
                            <div class="bg-white/70 p-3 rounded-lg">
                                <p class="text-sm text-gray-700 italic">{s.technique}</p>
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
