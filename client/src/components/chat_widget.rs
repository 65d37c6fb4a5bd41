//! Floating "Vibe Architect" chat widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ChatState::begin_send` gates and records the user turn; the relay call
//! runs in a local task and `ChatState::complete` records the reply. The
//! task holds only the signal, so a reply that lands after the panel closed
//! is still appended to the transcript.

use leptos::prelude::*;

use crate::state::chat::{ChatRole, ChatState};

#[component]
pub fn ChatWidget() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = chat.with(|c| (c.messages.len(), c.awaiting, c.open));

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let text = input.get_untracked();
        let Some(outbound) = chat.try_update(|c| c.begin_send(&text)).flatten() else {
            return;
        };
        input.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let reply = crate::net::api::send_chat(outbound).await;
            chat.update(|c| c.complete(&reply));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = outbound;
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || chat.with(|c| c.can_send(&input.get()));
    let is_open = move || chat.with(|c| c.open);

    view! {
        <div class="chat-widget">
            {move || {
                is_open()
                    .then(|| {
                        view! {
                            <div class="chat-widget__panel">
                                <div class="chat-widget__header">
                                    <div class="chat-widget__title">
                                        <span class="chat-widget__pulse"></span>
                                        <h3>"Vibe Architect"</h3>
                                    </div>
                                    <button
                                        class="chat-widget__close"
                                        on:click=move |_| chat.update(|c| c.open = false)
                                    >
                                        "✕"
                                    </button>
                                </div>

                                <div class="chat-widget__messages" node_ref=messages_ref>
                                    {move || {
                                        chat.with(|c| {
                                            c.messages
                                                .iter()
                                                .map(|msg| {
                                                    let is_user = msg.role == ChatRole::User;
                                                    let is_error = msg.is_error;
                                                    let text = msg.text.clone();
                                                    view! {
                                                        <div
                                                            class="chat-widget__message"
                                                            class:chat-widget__message--user=is_user
                                                            class:chat-widget__message--model={!is_user}
                                                            class:chat-widget__message--error=is_error
                                                        >
                                                            {(!is_user)
                                                                .then(|| view! { <span class="chat-widget__glyph">"◈"</span> })}
                                                            <span class="chat-widget__text">{text}</span>
                                                        </div>
                                                    }
                                                })
                                                .collect_view()
                                        })
                                    }}
                                    {move || {
                                        chat.with(|c| c.awaiting)
                                            .then(|| view! { <div class="chat-widget__loading">"TRANSMITTING..."</div> })
                                    }}
                                </div>

                                <div class="chat-widget__input-row">
                                    <input
                                        class="chat-widget__input"
                                        type="text"
                                        placeholder="Describe your mood..."
                                        prop:value=move || input.get()
                                        on:input=move |ev| input.set(event_target_value(&ev))
                                        on:keydown=on_keydown
                                    />
                                    <button
                                        class="chat-widget__send"
                                        on:click=move |_| do_send()
                                        disabled=move || !can_send()
                                    >
                                        "⌘"
                                    </button>
                                </div>
                            </div>
                        }
                    })
            }}

            <button class="chat-widget__toggle" on:click=move |_| chat.update(ChatState::toggle_open)>
                {move || if is_open() { "✕" } else { "◈" }}
            </button>
        </div>
    }
}
