//! Pointer-following cursor ring. Not rendered when motion is reduced.

use leptos::prelude::*;

use crate::state::cursor::CursorState;
use crate::state::ui::UiState;

#[component]
pub fn CustomCursor() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let cursor = RwSignal::new(CursorState::default());

    #[cfg(feature = "hydrate")]
    {
        let _ = window_event_listener(leptos::ev::pointermove, move |ev| {
            cursor.update(|c| c.move_to(f64::from(ev.client_x()), f64::from(ev.client_y())));
        });
        let _ = window_event_listener(leptos::ev::pointerover, move |ev| {
            let interactive = targets_interactive(ev.target());
            cursor.update(|c| c.pointer_over(interactive));
        });
        let _ = window_event_listener(leptos::ev::pointerout, move |ev| {
            let interactive = targets_interactive(ev.target());
            cursor.update(|c| c.pointer_out(interactive));
        });
    }

    move || {
        ui.with(|u| u.motion.is_animated()).then(|| {
            view! {
                <div class="custom-cursor" style:transform=move || cursor.with(CursorState::transform)>
                    <div
                        class="custom-cursor__ring"
                        class:custom-cursor__ring--hover=move || cursor.with(|c| c.hovering)
                        style:width=move || format!("{}px", cursor.with(CursorState::size_px))
                        style:height=move || format!("{}px", cursor.with(CursorState::size_px))
                    >
                        <span class="custom-cursor__label">"View"</span>
                    </div>
                </div>
            }
        })
    }
}

#[cfg(feature = "hydrate")]
fn targets_interactive(target: Option<web_sys::EventTarget>) -> bool {
    use wasm_bindgen::JsCast;

    target
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(crate::state::cursor::INTERACTIVE_SELECTOR).ok().flatten())
        .is_some()
}
