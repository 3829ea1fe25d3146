//! Root widget component with context providers.

use leptos::prelude::*;

use crate::components::chat_input::ChatInput;
use crate::components::chat_status::ChatStatus;
use crate::components::document_fill_modal::DocumentFillModal;
use crate::components::message_list::MessageList;
use crate::config::WidgetConfig;
use crate::state::chat::ChatState;
use crate::state::document::DocumentFillState;

/// Root application component.
///
/// Provides the conversation, document-form and configuration contexts, then
/// lays out the transcript, composer, status line and document modal.
#[component]
pub fn App(config: WidgetConfig) -> impl IntoView {
    let chat = RwSignal::new(ChatState::new(&config.greeting));
    let document = RwSignal::new(DocumentFillState::default());

    provide_context(chat);
    provide_context(document);
    provide_context(config);

    view! {
        <div class="aleks-chat">
            <MessageList/>
            <ChatInput/>
            <ChatStatus/>
            <DocumentFillModal/>
        </div>
    }
}
