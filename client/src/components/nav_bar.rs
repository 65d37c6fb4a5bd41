//! Fixed top navigation with section links.

use leptos::prelude::*;

use crate::state::ui::{NAV_SECTIONS, Section};
use crate::util::scroll::scroll_to_section;

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <div class="nav-bar__brand">"AURA"</div>

            <div class="nav-bar__links">
                {NAV_SECTIONS
                    .iter()
                    .map(|&section| {
                        view! {
                            <button class="nav-bar__link" on:click=move |_| scroll_to_section(section)>
                                {section.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <button class="nav-bar__shop" on:click=move |_| scroll_to_section(Section::Catalog)>
                <span>"Shop"</span>
            </button>
        </nav>
    }
}
