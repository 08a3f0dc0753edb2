//! Settings Page
//!
//! API key form (validated and logged only) and the résumé parser choice,
//! which is saved to the backend on change.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{get_settings, save_settings};
use crate::context::use_app_context;
use crate::models::{DEFAULT_PARSER, PARSER_OPTIONS};

/// Third-party credentials entered on the settings form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiKeys {
    pub monster_id: String,
    pub monster_secret: String,
    pub indeed_key: String,
    pub doc_ai_id: String,
}

impl ApiKeys {
    /// Labels of the fields left blank
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("Monster Client ID", &self.monster_id),
            ("Monster Client Secret", &self.monster_secret),
            ("Indeed API Key", &self.indeed_key),
            ("GCP Document AI Processor ID", &self.doc_ai_id),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| label)
        .collect()
    }
}

fn mask(secret: &str) -> String {
    format!("<{} chars>", secret.chars().count())
}

#[component]
fn KeyField(
    id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    #[prop(into)] invalid: Signal<bool>,
    #[prop(optional)] secret: bool,
) -> impl IntoView {
    let input_type = if secret { "password" } else { "text" };

    view! {
        <div class="form-field">
            <label for=id>{label}</label>
            <input
                id=id
                type=input_type
                aria-invalid=move || invalid.get().to_string()
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <Show when=move || invalid.get()>
                <span class="field-error">"This field is required"</span>
            </Show>
        </div>
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let ctx = use_app_context();

    let monster_id = RwSignal::new(String::new());
    let monster_secret = RwSignal::new(String::new());
    let indeed_key = RwSignal::new(String::new());
    let doc_ai_id = RwSignal::new(String::new());
    let (missing, set_missing) = signal(Vec::<&'static str>::new());

    let parser = RwSignal::new(DEFAULT_PARSER.to_string());
    let (loading, set_loading) = signal(true);

    let api = ctx.api();
    spawn_local(async move {
        match get_settings(&api).await {
            Ok(settings) => {
                parser.try_set(settings.parser);
            }
            Err(err) => ctx.report("Error", "Failed to load settings. Please try again.", &err),
        }
        set_loading.try_set(false);
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let keys = ApiKeys {
            monster_id: monster_id.get_untracked(),
            monster_secret: monster_secret.get_untracked(),
            indeed_key: indeed_key.get_untracked(),
            doc_ai_id: doc_ai_id.get_untracked(),
        };
        let blank = keys.missing_fields();
        if blank.is_empty() {
            log::info!(
                "[SETTINGS] API keys: monster_id={} monster_secret={} indeed_key={} doc_ai_id={}",
                keys.monster_id,
                mask(&keys.monster_secret),
                mask(&keys.indeed_key),
                keys.doc_ai_id
            );
        }
        set_missing.set(blank);
    };

    let on_parser_change = move |value: &'static str| {
        parser.set(value.to_string());
        let api = ctx.api();
        spawn_local(async move {
            match save_settings(&api, value).await {
                Ok(()) => {
                    log::info!("[SETTINGS] Parser set to {}", value);
                    ctx.toaster.success("Success", "Parser settings saved successfully!");
                }
                Err(err) => ctx.report("Error", "Failed to save settings. Please try again.", &err),
            }
        });
    };

    let is_missing = move |label: &'static str| Signal::derive(move || missing.with(|m| m.contains(&label)));

    view! {
        <div class="page settings-page">
            <h2>"Settings"</h2>

            <section class="card" aria-labelledby="api-keys-heading">
                <h3 id="api-keys-heading">"API Keys"</h3>
                <form class="settings-form" on:submit=on_submit novalidate=true>
                    <KeyField id="monsterId" label="Monster Client ID" value=monster_id
                        invalid=is_missing("Monster Client ID") />
                    <KeyField id="monsterSecret" label="Monster Client Secret" value=monster_secret
                        invalid=is_missing("Monster Client Secret") secret=true />
                    <KeyField id="indeedKey" label="Indeed API Key" value=indeed_key
                        invalid=is_missing("Indeed API Key") secret=true />
                    <KeyField id="docAiId" label="GCP Document AI Processor ID" value=doc_ai_id
                        invalid=is_missing("GCP Document AI Processor ID") />
                    <button type="submit" class="btn btn-primary">"Save API Keys"</button>
                </form>
            </section>

            <section class="card" aria-labelledby="parser-choice-heading">
                <h3 id="parser-choice-heading">"Resume Parser"</h3>
                <fieldset class="parser-options" disabled=move || loading.get()>
                    {PARSER_OPTIONS.iter().map(|&(value, label)| view! {
                        <label class="radio-option">
                            <input
                                type="radio"
                                name="parser"
                                value=value
                                prop:checked=move || parser.with(|p| p == value)
                                on:change=move |_| on_parser_change(value)
                            />
                            <span>{label}</span>
                        </label>
                    }).collect_view()}
                </fieldset>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fields_required() {
        let keys = ApiKeys::default();
        assert_eq!(keys.missing_fields().len(), 4);

        let keys = ApiKeys {
            monster_id: "id".into(),
            monster_secret: "  ".into(),
            indeed_key: "k".into(),
            doc_ai_id: "proc".into(),
        };
        assert_eq!(keys.missing_fields(), vec!["Monster Client Secret"]);
    }

    #[test]
    fn test_mask_hides_secret() {
        assert_eq!(mask("s3cr3t"), "<6 chars>");
    }
}
