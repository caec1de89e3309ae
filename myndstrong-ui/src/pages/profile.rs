//! Profile Page
//!
//! Renders the profile record read-only, or as inputs bound to the staging
//! copy while editing. All transitions go through [`ProfileEditor`]; a
//! rejected transition is logged and the controls re-render from the editor.

use leptos::logging::warn;
use leptos::*;
use myndstrong::content::{profile as content, Icon};
use myndstrong::profile::{
    NotificationKind, ProfileEditor, ProfileError, ProfileField, SaveOutcome,
};

use crate::components::{BackButton, ExternalCard, Glyph, SectionTitle};
use crate::state::use_ui_state;

/// Toast text after a save
pub fn save_message(outcome: &SaveOutcome) -> String {
    match outcome.changed.len() {
        0 => "No changes to save".to_string(),
        1 => "Profile updated (1 change)".to_string(),
        n => format!("Profile updated ({} changes)", n),
    }
}

/// Initials for the avatar bubble
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Tracks only the Viewing/Editing switch, so staging writes don't re-render
/// the branches that depend on it
fn edit_mode(editor: RwSignal<ProfileEditor>) -> Memo<bool> {
    create_memo(move |_| editor.with(ProfileEditor::is_editing))
}

fn report(action: &str, result: Result<(), ProfileError>) {
    if let Err(e) = result {
        warn!("profile {} rejected: {}", action, e);
    }
}

#[component]
pub fn Profile(on_back: Callback<()>) -> impl IntoView {
    let editor = create_rw_signal(ProfileEditor::default());

    view! {
        <div>
            <BackButton on_back=on_back />

            <div class="grid lg:grid-cols-3 gap-8">
                <div class="lg:col-span-2 space-y-8">
                    <ProfileCard editor=editor />
                    <NotificationSettings editor=editor />
                </div>
                <QuickAccess />
            </div>
        </div>
    }
}

#[component]
fn ProfileCard(editor: RwSignal<ProfileEditor>) -> impl IntoView {
    let state = use_ui_state();
    let editing = edit_mode(editor);
    let name = move || editor.with(|e| e.canonical().name.clone());

    let on_edit = move |_| {
        let result = editor.try_update(ProfileEditor::begin_edit);
        report("edit", result.unwrap_or(Ok(())));
    };

    let on_save = move |_| match editor.try_update(ProfileEditor::save) {
        Some(Ok(outcome)) => state.show_success(&save_message(&outcome)),
        Some(Err(e)) => warn!("profile save rejected: {}", e),
        None => {}
    };

    let on_cancel = move |_| {
        let result = editor.try_update(ProfileEditor::cancel);
        report("cancel", result.unwrap_or(Ok(())));
    };

    view! {
        <section class="bg-white rounded-xl shadow-md border border-gray-200 p-6">
            // Header with avatar and actions
            <div class="flex items-center justify-between mb-6">
                <div class="flex items-center space-x-4">
                    <div class="w-16 h-16 bg-indigo-600 rounded-full flex items-center justify-center text-white text-xl font-bold">
                        {move || initials(&name())}
                    </div>
                    <div>
                        <h2 class="text-2xl font-bold text-gray-800">{name}</h2>
                        <p class="text-gray-600">
                            "Member since " {move || editor.with(|e| e.canonical().join_date.clone())}
                        </p>
                    </div>
                </div>

                {move || {
                    if editing.get() {
                        view! {
                            <div class="flex items-center space-x-2">
                                <span class="text-sm text-gray-500">
                                    {move || pending_label(editor.with(|e| e.pending_changes().len()))}
                                </span>
                                <button
                                    class="px-4 py-2 bg-green-600 hover:bg-green-700 text-white rounded-lg transition-colors"
                                    on:click=on_save
                                >
                                    "Save"
                                </button>
                                <button
                                    class="px-4 py-2 bg-gray-200 hover:bg-gray-300 text-gray-800 rounded-lg transition-colors"
                                    on:click=on_cancel
                                >
                                    "Cancel"
                                </button>
                            </div>
                        }
                        .into_view()
                    } else {
                        view! {
                            <button
                                class="px-4 py-2 bg-indigo-600 hover:bg-indigo-700 text-white rounded-lg transition-colors"
                                on:click=on_edit
                            >
                                "Edit Profile"
                            </button>
                        }
                        .into_view()
                    }
                }}
            </div>

            // Fields
            <div class="grid md:grid-cols-2 gap-6">
                {ProfileField::ALL
                    .into_iter()
                    .map(|field| view! { <FieldRow editor=editor field=field /> })
                    .collect_view()}
            </div>
        </section>
    }
}

fn pending_label(count: usize) -> String {
    match count {
        0 => String::new(),
        1 => "1 unsaved change".to_string(),
        n => format!("{} unsaved changes", n),
    }
}

#[component]
fn FieldRow(editor: RwSignal<ProfileEditor>, field: ProfileField) -> impl IntoView {
    let value = move || editor.with(|e| e.field_value(field).to_string());
    let editing = edit_mode(editor);
    let show_input = move || field.is_editable() && editing.get();
    let input_type = field.input_type();
    let placeholder = field.placeholder().unwrap_or_default();

    view! {
        <div>
            <label class="block text-sm font-medium text-gray-500 mb-1">{field.label()}</label>
            {move || {
                if show_input() {
                    view! {
                        <input
                            type=input_type
                            placeholder=placeholder
                            prop:value=value
                            on:input=move |ev| {
                                let text = event_target_value(&ev);
                                let result = editor.try_update(|e| e.set_field(field, text));
                                report("field write", result.unwrap_or(Ok(())));
                            }
                            class="w-full px-3 py-2 border border-gray-300 rounded-lg
                                   focus:ring-2 focus:ring-indigo-500 focus:border-transparent"
                        />
                    }
                    .into_view()
                } else {
                    view! { <p class="text-gray-800">{value}</p> }.into_view()
                }
            }}
        </div>
    }
}

#[component]
fn NotificationSettings(editor: RwSignal<ProfileEditor>) -> impl IntoView {
    view! {
        <section class="bg-white rounded-xl shadow-md border border-gray-200 p-6">
            <h3 class="text-xl font-bold text-gray-800 mb-4">"Notification Preferences"</h3>
            <div class="space-y-3">
                {NotificationKind::ALL
                    .into_iter()
                    .map(|kind| view! { <NotificationToggle editor=editor kind=kind /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn NotificationToggle(editor: RwSignal<ProfileEditor>, kind: NotificationKind) -> impl IntoView {
    let checked = move || editor.with(|e| e.notification_checked(kind));
    let editing = edit_mode(editor);

    let on_change = move |ev| {
        let enabled = event_target_checked(&ev);
        match editor.try_update(|e| e.set_notification(kind, enabled)) {
            Some(Err(e)) => {
                warn!("profile notification change rejected: {}", e);
                // Re-apply the frozen value to the checkbox
                editor.update(|_| {});
            }
            Some(Ok(())) | None => {}
        }
    };

    view! {
        <label class="flex items-center space-x-3">
            <input
                type="checkbox"
                class="w-4 h-4 text-indigo-600 rounded"
                prop:checked=checked
                disabled=move || !editing.get()
                on:change=on_change
            />
            <span class="text-gray-700">{kind.label()}</span>
        </label>
    }
}

#[component]
fn QuickAccess() -> impl IntoView {
    view! {
        <aside>
            <section class="bg-white rounded-xl shadow-md border border-gray-200 p-6">
                <SectionTitle title="Quick Access Resources" />
                <div class="space-y-4">
                    {content::QUICK_ACCESS
                        .iter()
                        .map(|r| view! {
                            <ExternalCard
                                href=r.link
                                class="flex items-start space-x-3 p-3 rounded-lg hover:bg-indigo-50 transition-colors group"
                            >
                                <div class="text-indigo-600"><Glyph icon=r.icon class="text-xl" /></div>
                                <div>
                                    <h4 class="font-semibold text-gray-800 group-hover:text-indigo-600">{r.title}</h4>
                                    <p class="text-gray-600 text-sm">{r.description}</p>
                                </div>
                            </ExternalCard>
                        })
                        .collect_view()}
                </div>
            </section>

            <div class="mt-6 bg-indigo-50 border border-indigo-200 rounded-xl p-4 text-sm text-indigo-800 flex items-start space-x-2">
                <Glyph icon=Icon::Shield class="text-lg" />
                <p>"Your profile stays on this device and is cleared when you leave the page."</p>
            </div>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use myndstrong::profile::Change;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_save_message() {
        let none = SaveOutcome { changed: vec![] };
        assert_eq!(save_message(&none), "No changes to save");

        let two = SaveOutcome {
            changed: vec![
                Change::Field(ProfileField::Location),
                Change::Notification(NotificationKind::Community),
            ],
        };
        assert_eq!(save_message(&two), "Profile updated (2 changes)");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Alex Johnson"), "AJ");
        assert_eq!(initials("  sam  "), "S");
        assert_eq!(initials("Mary Ann Smith"), "MA");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_edit_mode_only_changes_on_transitions() {
        let runtime = create_runtime();
        let editor = create_rw_signal(ProfileEditor::default());
        let editing = edit_mode(editor);

        let runs = Rc::new(Cell::new(0));
        let counter = Rc::clone(&runs);
        create_effect(move |_| {
            editing.get();
            counter.set(counter.get() + 1);
        });
        assert_eq!(runs.get(), 1);

        editor.update(|e| e.begin_edit().unwrap());
        assert_eq!(runs.get(), 2);
        assert!(editing.get_untracked());

        // Keystrokes write the staging copy but leave the mode alone
        for text in ["S", "Se", "Sea"] {
            editor.update(|e| e.set_field(ProfileField::Location, text).unwrap());
        }
        assert_eq!(runs.get(), 2);
        assert_eq!(
            editor.with_untracked(|e| e.field_value(ProfileField::Location).to_string()),
            "Sea"
        );

        editor.update(|e| {
            e.save().unwrap();
        });
        assert_eq!(runs.get(), 3);
        assert!(!editing.get_untracked());

        runtime.dispose();
    }

    #[test]
    fn test_pending_label() {
        assert_eq!(pending_label(0), "");
        assert_eq!(pending_label(1), "1 unsaved change");
        assert_eq!(pending_label(3), "3 unsaved changes");
    }
}
