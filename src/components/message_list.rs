//! Scrolling conversation transcript.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure projection of `ChatState` messages. Assistant text goes through the
//! Markdown renderer (raw HTML stripped); user text is rendered as escaped
//! plain text.

#[cfg(test)]
#[path = "message_list_test.rs"]
mod message_list_test;

use leptos::prelude::*;

use crate::config::WidgetConfig;
use crate::net::types::Source;
use crate::state::chat::{ChatState, Message, Sender};
use crate::util::markdown::render_markdown_html;

const PREVIEW_NOTE: &str = "(Document saved in the server's document templates folder)";

fn sender_label(sender: Sender, assistant_name: &str) -> &str {
    match sender {
        Sender::User => "You",
        Sender::Assistant => assistant_name,
    }
}

fn message_key(msg: &Message) -> String {
    msg.id.clone()
}

fn start_index_text(source: &Source) -> String {
    format!("(Start Index: {})", source.start_index_label())
}

fn snippet_text(source: &Source) -> String {
    format!("\"{}\"", source.snippet_label())
}

/// Message history keyed by message id; scrolls to the newest entry whenever one is appended.
#[component]
pub fn MessageList() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let config = expect_context::<WidgetConfig>();
    let assistant_name = StoredValue::new(config.assistant_name);

    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = chat.with(ChatState::len);

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    view! {
        <div class="chat-messages" node_ref=messages_ref>
            // Messages never change once appended, so keyed rendering only
            // builds the newly appended entries.
            <For
                each=move || chat.with(|c| c.messages().to_vec())
                key=message_key
                children=move |msg: Message| render_message(&msg, &assistant_name.get_value())
            />
        </div>
    }
}

fn render_message(msg: &Message, assistant_name: &str) -> impl IntoView + use<> {
    let is_user = msg.sender == Sender::User;
    let is_assistant = !is_user;
    let label = sender_label(msg.sender, assistant_name).to_owned();
    let text = msg.text.clone();
    let sources = msg.sources().to_vec();
    let preview = msg.document_preview().map(str::to_owned);

    view! {
        <div class="chat-message" class:chat-message--user=is_user class:chat-message--assistant=is_assistant>
            <div class="chat-message__bubble">
                <p class="chat-message__sender">{label}</p>
                {if is_user {
                    view! { <div class="chat-message__text">{text}</div> }.into_any()
                } else {
                    let rendered = render_markdown_html(&text);
                    view! { <div class="chat-message__text chat-message__markdown" inner_html=rendered></div> }
                        .into_any()
                }}

                {(!sources.is_empty())
                    .then(|| {
                        view! {
                            <div class="chat-message__sources">
                                <p class="chat-message__sources-title">"Sources:"</p>
                                <ul class="chat-message__sources-list">
                                    {sources
                                        .iter()
                                        .map(|source| {
                                            view! {
                                                <li>
                                                    <strong>{source.source_label()}</strong>
                                                    " "
                                                    {start_index_text(source)}
                                                    <br/>
                                                    <span class="chat-message__snippet">{snippet_text(source)}</span>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })}

                {preview
                    .map(|preview| {
                        view! {
                            <div class="chat-message__preview">
                                <p class="chat-message__preview-title">"Generated Document Preview:"</p>
                                <pre class="chat-message__preview-body">{preview}</pre>
                                <p class="chat-message__preview-note">{PREVIEW_NOTE}</p>
                            </div>
                        }
                    })}
            </div>
        </div>
    }
}
