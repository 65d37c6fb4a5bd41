//! Landing page: hero, catalog grid, craft story and footer.
//!
//! ARCHITECTURE
//! ============
//! The page owns the selection callback handed to every card and mounts the
//! acquisition modal, chat widget and ambient layers once.

use leptos::prelude::*;

use crate::components::acquisition_modal::AcquisitionModal;
use crate::components::chat_widget::ChatWidget;
use crate::components::custom_cursor::CustomCursor;
use crate::components::fluid_background::FluidBackground;
use crate::components::nav_bar::NavBar;
use crate::components::product_card::ProductCard;
use crate::state::acquisition::AcquisitionState;
use crate::state::catalog::{self, Product};
use crate::state::ui::{Section, UiState, hero_transform};

const CRAFT_FEATURES: [(&str, &str); 3] = [
    ("Multi-Phase Textiles", "Fabrics that change density based on ambient moisture and heat."),
    ("Signal Isolation", "Integrated faraday pockets for true digital privacy on the move."),
    ("Bio-Circular", "Every piece is 100% compostable or infinitely recyclable."),
];

const FOOTER_LINKS: [&str; 3] = ["Newsletter", "Stockists", "Sustainability Report"];

#[component]
pub fn ShowcasePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let acquisition = expect_context::<RwSignal<AcquisitionState>>();

    let on_select = Callback::new(move |product: &'static Product| {
        acquisition.update(|a| a.open(product));
    });

    let scroll = RwSignal::new(0.0_f64);
    #[cfg(feature = "hydrate")]
    {
        let _ = window_event_listener(leptos::ev::scroll, move |_| {
            scroll.set(crate::util::scroll::page_progress());
        });
    }
    let hero_style = move || hero_transform(ui.with(|u| u.motion), scroll.get());

    view! {
        <div class=move || format!("showcase {}", ui.with(|u| u.motion.class()))>
            <CustomCursor/>
            <FluidBackground/>
            <ChatWidget/>
            <NavBar/>

            <header id=Section::Hero.anchor() class="hero">
                <div class="hero__content" style:transform=hero_style>
                    <div class="hero__badge">"Spring / Summer Collective 2025"</div>
                    <h1 class="hero__title">"FUTURE"</h1>
                    <h1 class="hero__title hero__title--dim">"HUMAN"</h1>
                    <p class="hero__tagline">
                        "Limitless garments for the digital vanguard. Designed in Tokyo, forged for the void."
                    </p>
                </div>
                <div class="hero__fade"></div>
            </header>

            <section id=Section::Catalog.anchor() class="catalog">
                <div class="catalog__heading">
                    <h2 class="catalog__title">"Archive"</h2>
                    <div class="catalog__meta">
                        <span class="catalog__season">"S/S 2025"</span>
                        <span class="catalog__status">"Construction in progress"</span>
                    </div>
                </div>

                <div class="catalog-grid">
                    {catalog::grid()
                        .map(|slot| {
                            view! {
                                <div class=format!("catalog-grid__cell catalog-grid__cell--span-{}", slot.span)>
                                    <ProductCard product=slot.product on_select=on_select/>
                                    {slot
                                        .with_lab_panel
                                        .then(|| {
                                            view! {
                                                <div class="lab-panel">
                                                    <p class="lab-panel__code">"Aura Materials Lab / 092-X"</p>
                                                    <h4 class="lab-panel__title">"MULTI-PHASE TEXTILE SYSTEMS"</h4>
                                                </div>
                                            }
                                        })}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section id=Section::Craft.anchor() class="craft">
                <div class="craft__story">
                    <h2 class="craft__title">"The " <span class="craft__title--muted">"Tactile"</span> " Digital."</h2>
                    <div class="craft__features">
                        {CRAFT_FEATURES
                            .iter()
                            .map(|(title, desc)| {
                                view! {
                                    <div class="craft__feature">
                                        <h4 class="craft__feature-title">{*title}</h4>
                                        <p class="craft__feature-desc">{*desc}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="craft__image-frame">
                    <img
                        class="craft__image"
                        src="https://images.unsplash.com/photo-1549174291-58230778a45a?q=80&w=1000&auto=format&fit=crop"
                        alt="Craftsmanship"
                    />
                </div>
            </section>

            <footer class="footer">
                <div class="footer__brand">"AURA"</div>
                <div class="footer__links">
                    {FOOTER_LINKS.iter().map(|label| view! { <a href="#" class="footer__link">{*label}</a> }).collect_view()}
                    <p class="footer__legal">"© 2025 AURA COLLECTIVE / HUMAN CENTRIC DIGITAL WEAR"</p>
                </div>
            </footer>

            <AcquisitionModal/>
        </div>
    }
}
