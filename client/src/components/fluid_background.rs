//! Ambient background: drifting blobs, grain and vignette.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// The blobs only drift in `MotionMode::Animated`; otherwise they sit still.
#[component]
pub fn FluidBackground() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let animated = move || ui.with(|u| u.motion.is_animated());

    view! {
        <div class="fluid-background" aria-hidden="true">
            <div
                class="fluid-background__blob fluid-background__blob--aura"
                class:fluid-background__blob--drift=animated
            ></div>
            <div
                class="fluid-background__blob fluid-background__blob--halo"
                class:fluid-background__blob--sway=animated
            ></div>
            <div class="fluid-background__grain"></div>
            <div class="fluid-background__vignette"></div>
        </div>
    }
}
