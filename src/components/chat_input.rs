//! Message composer: auto-growing textarea plus Send button.
//!
//! SYSTEM CONTEXT
//! ==============
//! Drives the chat send flow: `ChatState::begin_send` guards and records the
//! user message, the request runs on the local task queue, and
//! `ChatState::complete_send` applies the reply (opening the document form
//! when the server asks for one).

use leptos::prelude::*;

use crate::config::WidgetConfig;
use crate::net::api;
use crate::state::chat::ChatState;
use crate::state::document::DocumentFillState;

/// Grow the textarea to fit its content.
#[cfg(feature = "csr")]
fn fit_to_content(el: &web_sys::HtmlTextAreaElement) {
    let style = el.style();
    let _ = style.set_property("height", "auto");
    let _ = style.set_property("height", &format!("{}px", el.scroll_height()));
}

/// Chat input row. Enter sends; Shift+Enter inserts a newline.
#[component]
pub fn ChatInput() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let document = expect_context::<RwSignal<DocumentFillState>>();
    let config = expect_context::<WidgetConfig>();
    let base_url = StoredValue::new(config.api_base_url);

    let input = RwSignal::new(String::new());
    let input_ref = NodeRef::<leptos::html::Textarea>::new();

    Effect::new(move || {
        #[cfg(feature = "csr")]
        {
            if let Some(el) = input_ref.get() {
                let _ = el.focus();
            }
        }
    });

    let do_send = move || {
        let modal_open = document.with_untracked(DocumentFillState::is_open);
        let text = input.get_untracked();
        let Some(question) = chat.try_update(|c| c.begin_send(&text, modal_open)).flatten() else {
            return;
        };
        input.set(String::new());

        #[cfg(feature = "csr")]
        {
            if let Some(el) = input_ref.get_untracked() {
                let _ = el.style().set_property("height", "auto");
            }
        }

        let base_url = base_url.get_value();
        leptos::task::spawn_local(async move {
            let result = api::send_chat(&base_url, &question).await;
            if let Some(prompt) = chat.try_update(|c| c.complete_send(result)).flatten() {
                document.update(|d| d.open(prompt));
            }
        });
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let busy = move || chat.with(|c| c.loading) || document.with(DocumentFillState::is_open);
    let can_send = move || {
        let modal_open = document.with(DocumentFillState::is_open);
        input.with(|text| chat.with(|c| c.can_send(text, modal_open)))
    };

    view! {
        <div class="chat-input">
            <textarea
                class="chat-input__textarea"
                placeholder="Type your message..."
                rows="1"
                node_ref=input_ref
                disabled=busy
                prop:value=move || input.get()
                on:input=move |ev| {
                    input.set(event_target_value(&ev));
                    #[cfg(feature = "csr")]
                    {
                        if let Some(el) = input_ref.get_untracked() {
                            fit_to_content(&el);
                        }
                    }
                }
                on:keydown=on_keydown
            ></textarea>
            <button class="btn btn--primary chat-input__send" on:click=on_click disabled=move || !can_send()>
                "Send"
            </button>
        </div>
    }
}
