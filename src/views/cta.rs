// ============================================================================
// CTA VIEW - Contadores + botón Connect / Mint
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::config::AppConfig;
use crate::dom::{set_disabled, ElementBuilder, ListenerBag};
use crate::models::{SessionSnapshot, SupplyCounter};
use crate::state::AppState;
use crate::viewmodels::MintPageViewModel;

pub fn render_cta_block(
    state: &AppState,
    vm: &Rc<MintPageViewModel>,
    config: &AppConfig,
    listeners: &ListenerBag,
) -> Result<Element, JsValue> {
    let supply = state.supply.get();
    let minted = if state.supply.is_loaded() {
        supply.label()
    } else {
        format!("?/{}", supply.max_count)
    };

    let total = ElementBuilder::new("div")?
        .class("sub-text benefit_1")
        .child(
            ElementBuilder::new("div")?
                .class("big-number")
                .text(&format!("{} toadz", config.total_mint_count))
                .build(),
        )?
        .append_text("are entering the portal")?
        .build();

    let progress = ElementBuilder::new("div")?
        .class("sub-text benefit_2")
        .child(ElementBuilder::new("div")?.class("big-number").text(&minted).build())?
        .append_text("NFTs made it through")?
        .build();

    let button_wrap = ElementBuilder::new("div")?
        .class("cta-button-wrap")
        .child(render_mint_button(state, vm, listeners)?)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("cta-block")
        .child(ElementBuilder::new("p")?.class("header gradient-text").text("by NNN").build())?
        .child(total)?
        .child(progress)?
        .child(button_wrap)?
        .build())
}

/// Acción del botón principal según la sesión
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtaAction {
    Connect,
    Mint,
    SoldOut,
}

/// Clase, texto y estado del botón principal (sin DOM)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtaButton {
    pub class: &'static str,
    pub label: &'static str,
    pub disabled: bool,
    pub action: CtaAction,
}

impl CtaButton {
    /// Sin cuenta → "Connect to Wallet"; con cuenta → "Mint NFT".
    /// Mientras conecta o mina pasa a `button--loading`; agotado solo si el contador ya se leyó.
    pub fn for_state(session: &SessionSnapshot, supply: &SupplyCounter, supply_loaded: bool) -> Self {
        let connected = session.is_connected();
        let sold_out = connected && supply_loaded && supply.is_sold_out();

        let class = if session.is_busy() {
            "cta-button button--loading"
        } else if sold_out {
            "cta-button sold-out-button"
        } else if connected {
            "cta-button mint-button"
        } else {
            "cta-button connect-wallet-button"
        };
        let label = if sold_out {
            "Sold Out"
        } else if connected {
            "Mint NFT"
        } else {
            "Connect to Wallet"
        };
        let action = if sold_out {
            CtaAction::SoldOut
        } else if connected {
            CtaAction::Mint
        } else {
            CtaAction::Connect
        };

        Self {
            class,
            label,
            disabled: session.is_busy() || sold_out,
            action,
        }
    }
}

fn render_mint_button(state: &AppState, vm: &Rc<MintPageViewModel>, listeners: &ListenerBag) -> Result<Element, JsValue> {
    let session = state.session.snapshot();
    let button_state = CtaButton::for_state(&session, &state.supply.get(), state.supply.is_loaded());

    let button = ElementBuilder::new("button")?
        .class(button_state.class)
        .child(ElementBuilder::new("span")?.class("button__text").text(button_state.label).build())?
        .build();

    if let Some(short) = session.short_account() {
        button.set_attribute("title", &short)?;
    }
    set_disabled(&button, button_state.disabled)?;

    let vm = vm.clone();
    listeners.on_click(&button, move |_e| {
        let vm = vm.clone();
        match button_state.action {
            CtaAction::Mint => {
                log::info!("🖱️ [CTA] Click en Mint NFT");
                spawn_local(async move {
                    let outcome = vm.mint().await;
                    log::info!("🐸 [CTA] Resultado del mint: {:?}", outcome);
                });
            }
            CtaAction::Connect => {
                log::info!("🖱️ [CTA] Click en Connect to Wallet");
                spawn_local(async move {
                    vm.connect().await;
                });
            }
            CtaAction::SoldOut => log::info!("🖱️ [CTA] Colección agotada, click ignorado"),
        }
    })?;

    Ok(button)
}
