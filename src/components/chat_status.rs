//! Loading indicator and chat error banner.

use leptos::prelude::*;

use crate::state::chat::ChatState;

#[component]
pub fn ChatStatus() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    view! {
        {move || {
            chat.with(|c| c.loading)
                .then(|| view! { <div class="chat-status__loading" aria-live="polite">"Thinking..."</div> })
        }}
        {move || {
            chat.with(|c| c.error.clone())
                .map(|error| {
                    view! {
                        <div class="chat-status__error" role="alert">
                            "Error: "
                            <span class="chat-status__error-message">{error}</span>
                        </div>
                    }
                })
        }}
    }
}
