//! Catalog card revealing price and call-to-action on hover or tap.

use leptos::prelude::*;

use crate::state::catalog::Product;
use crate::state::ui::CardPhase;

/// One product tile. Clicking reports the product to `on_select`; that is
/// the card's only effect outside itself.
#[component]
pub fn ProductCard(product: &'static Product, on_select: Callback<&'static Product>) -> impl IntoView {
    let phase = RwSignal::new(CardPhase::Rest);
    let active = move || phase.get() == CardPhase::Active;

    // Touch pointers fire enter/leave around every tap; only the tap toggles.
    let on_pointerenter = move |ev: leptos::ev::PointerEvent| {
        if ev.pointer_type() != "touch" {
            phase.set(CardPhase::Active);
        }
    };
    let on_pointerleave = move |ev: leptos::ev::PointerEvent| {
        if ev.pointer_type() != "touch" {
            phase.set(CardPhase::Rest);
        }
    };
    let on_pointerdown = move |ev: leptos::ev::PointerEvent| {
        if ev.pointer_type() == "touch" {
            phase.update(|p| *p = p.tapped());
        }
    };

    view! {
        <div
            class="product-card"
            class:product-card--active=active
            data-hover="true"
            on:pointerenter=on_pointerenter
            on:pointerleave=on_pointerleave
            on:pointerdown=on_pointerdown
            on:click=move |_| on_select.run(product)
        >
            <div class="product-card__media">
                <img class="product-card__image" src=product.image alt=product.name/>
                <div class="product-card__shade"></div>
            </div>

            <div class="product-card__overlay">
                <div class="product-card__top">
                    <span class="product-card__category">{product.category}</span>
                    <span class="product-card__cta">"↗"</span>
                </div>
                <div class="product-card__bottom">
                    <h3 class="product-card__name">{product.name}</h3>
                    <div class="product-card__price-row">
                        <p class="product-card__price">{product.price}</p>
                        <div class="product-card__rule"></div>
                    </div>
                </div>
            </div>
        </div>
    }
}
