//! Modal form collecting placeholder values for a document template.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered while `DocumentFillState` has an open episode. Submitting runs the
//! generation request; success appends a `document_generated` message to the
//! transcript and closes the form, failure keeps it open with the error.

#[cfg(test)]
#[path = "document_fill_modal_test.rs"]
mod document_fill_modal_test;

use leptos::prelude::*;

use crate::config::WidgetConfig;
use crate::net::api;
use crate::net::types::Placeholder;
use crate::state::chat::ChatState;
use crate::state::document::DocumentFillState;

const NO_PLACEHOLDERS_TEXT: &str =
    "No specific placeholders found for this document type. Proceeding with general generation.";

/// DOM id for a form field.
///
/// Placeholder names come straight from template brackets and may hold
/// spaces or punctuation; anything outside `[A-Za-z0-9_-]` becomes `_`, and
/// the field index keeps ids unique after that folding.
fn field_dom_id(index: usize, name: &str) -> String {
    let slug: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
        .collect();
    format!("document-field-{index}-{slug}")
}

/// Document-fill modal. Escape, the close button and Cancel all discard the form.
#[component]
pub fn DocumentFillModal() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let document = expect_context::<RwSignal<DocumentFillState>>();
    let config = expect_context::<WidgetConfig>();
    let base_url = StoredValue::new(config.api_base_url);

    // Only changes when a new episode opens, so typing does not rebuild the inputs.
    let fields = Memo::new(move |_| {
        document.with(|d| d.episode().map(|e| (e.id, e.placeholders.clone())))
    });

    let on_cancel = Callback::new(move |()| document.update(DocumentFillState::cancel));

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_cancel.run(());
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some((episode_id, request)) = document.try_update(DocumentFillState::begin_generate).flatten() else {
            return;
        };
        let base_url = base_url.get_value();
        leptos::task::spawn_local(async move {
            let result = api::generate_document(&base_url, &request).await;
            if let Some(reply) = document.try_update(|d| d.complete_generate(episode_id, result)).flatten() {
                chat.update(|c| c.append_generated(reply));
            }
        });
    };

    let title = move || {
        document.with(|d| {
            let doc_type = d.episode().map_or("", |e| e.document_type.as_str());
            format!("Fill Out {doc_type} Template")
        })
    };
    let generating = move || document.with(|d| d.generating);

    view! {
        <Show when=move || document.with(DocumentFillState::is_open)>
            <div class="document-modal__backdrop">
                <div class="document-modal" role="dialog" aria-modal="true" on:keydown=on_keydown tabindex="0">
                    <div class="document-modal__header">
                        <h2 class="document-modal__title">{title}</h2>
                        <button
                            type="button"
                            class="document-modal__close"
                            title="Close"
                            on:click=move |_| on_cancel.run(())
                        >
                            "×"
                        </button>
                    </div>
                    <form class="document-modal__form" on:submit=on_submit>
                        <p class="document-modal__intro">"Please provide the following details:"</p>
                        <div class="document-modal__fields">
                            {move || {
                                let placeholders = fields.get().map(|(_, p)| p).unwrap_or_default();
                                if placeholders.is_empty() {
                                    return view! {
                                        <p class="document-modal__empty">{NO_PLACEHOLDERS_TEXT}</p>
                                    }
                                        .into_any();
                                }
                                placeholders
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, p)| {
                                        view! { <PlaceholderField index=index placeholder=p document=document/> }
                                    })
                                    .collect::<Vec<_>>()
                                    .into_any()
                            }}
                        </div>

                        {move || {
                            document.with(|d| d.error.clone())
                                .map(|error| view! { <div class="document-modal__error" role="alert">{error}</div> })
                        }}

                        <div class="document-modal__actions">
                            <button type="button" class="btn" on:click=move |_| on_cancel.run(())>
                                "Cancel"
                            </button>
                            <button type="submit" class="btn btn--primary" disabled=generating>
                                {move || if generating() { "Generating..." } else { "Generate Document" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

/// One required text input bound to a placeholder value.
#[component]
fn PlaceholderField(
    index: usize,
    placeholder: Placeholder,
    document: RwSignal<DocumentFillState>,
) -> impl IntoView {
    let name = StoredValue::new(placeholder.name.clone());
    let label = placeholder.label().to_owned();
    let field_id = field_dom_id(index, &placeholder.name);

    view! {
        <div class="document-modal__field">
            <label class="document-modal__label" for=field_id.clone()>
                {label}
                " "
                <span class="document-modal__required">"*"</span>
            </label>
            <input
                class="document-modal__input"
                type="text"
                id=field_id
                name=placeholder.name
                required=true
                prop:value=move || {
                    document.with(|d| {
                        name.with_value(|n| d.episode().map(|e| e.value(n).to_owned()).unwrap_or_default())
                    })
                }
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    name.with_value(|n| document.update(|d| d.set_value(n, value)));
                }
            />
        </div>
    }
}
