//! Product detail modal driving the simulated purchase.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders whenever `AcquisitionState` has a selection. Confirming starts a
//! scan and schedules its completion after `SCAN_DURATION`; the ticket
//! returned by `confirm` keeps a late timer from completing a purchase in a
//! modal that was closed or reopened meanwhile.

use leptos::prelude::*;

use crate::state::acquisition::{AcquisitionState, PurchaseStep};

#[component]
pub fn AcquisitionModal() -> impl IntoView {
    let acquisition = expect_context::<RwSignal<AcquisitionState>>();
    let selected = Memo::new(move |_| acquisition.with(AcquisitionState::selected));
    let step = Memo::new(move |_| acquisition.with(AcquisitionState::step));

    let close = move || acquisition.update(AcquisitionState::close);

    let on_confirm = move |_| {
        let Some(ticket) = acquisition.try_update(AcquisitionState::confirm).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(crate::state::acquisition::SCAN_DURATION).await;
            acquisition.update(|a| {
                a.finish_scan(ticket, &mut crate::state::acquisition::RandomTransactionIds);
            });
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = ticket;
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close();
        }
    };

    move || {
        selected.get().map(|product| {
            view! {
                <div class="acquisition-modal__backdrop" on:click=move |_| close()>
                    <div
                        class="acquisition-modal"
                        tabindex="0"
                        on:click=move |ev| ev.stop_propagation()
                        on:keydown=on_keydown
                    >
                        <button class="acquisition-modal__close" on:click=move |_| close() title="Close">
                            "✕"
                        </button>

                        <div class="acquisition-modal__media">
                            <img class="acquisition-modal__image" src=product.image alt=product.name/>
                        </div>

                        <div class="acquisition-modal__content">
                            <div class="acquisition-modal__detail">
                                <span class="acquisition-modal__category">{product.category}</span>
                                <h3 class="acquisition-modal__name">{product.name}</h3>
                                <p class="acquisition-modal__description">{product.description}</p>
                                <div class="acquisition-modal__materials">
                                    {product
                                        .materials
                                        .iter()
                                        .map(|m| view! { <div class="acquisition-modal__material">{*m}</div> })
                                        .collect_view()}
                                </div>
                            </div>

                            <div class="acquisition-modal__purchase">
                                <div class="acquisition-modal__price-row">
                                    <span class="acquisition-modal__price-label">"Acquisition Price"</span>
                                    <span class="acquisition-modal__price">{product.price}</span>
                                </div>

                                <button
                                    class="acquisition-modal__confirm"
                                    class:acquisition-modal__confirm--scanning=move || step.get() == PurchaseStep::Scanning
                                    class:acquisition-modal__confirm--complete=move || step.get() == PurchaseStep::Complete
                                    disabled=move || step.get() != PurchaseStep::Idle
                                    on:click=on_confirm
                                >
                                    {move || step.get().label()}
                                </button>

                                {move || {
                                    acquisition
                                        .with(|a| a.transaction_id().map(str::to_owned))
                                        .map(|id| {
                                            view! {
                                                <p class="acquisition-modal__receipt">
                                                    "TRANSACTION RECORDED IN AURA ARCHIVE // ID: " {id}
                                                </p>
                                            }
                                        })
                                }}
                            </div>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
