// ============================================================================
// MINING MODAL VIEW - Overlay mientras la tx espera confirmación
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::AppConfig;
use crate::dom::ElementBuilder;
use crate::state::AppState;

pub fn render_mining_modal(state: &AppState, config: &AppConfig) -> Result<Element, JsValue> {
    let content = ElementBuilder::new("div")?
        .class("modal-content")
        .child(ElementBuilder::new("div")?.class("mining-animation").build())?
        .child(ElementBuilder::new("h2")?.text("Mining... please wait").build())?
        .build();

    if let Some(tx) = state.get_last_transaction() {
        let link = ElementBuilder::new("a")?
            .class("tx-link")
            .external_link(&config.transaction_url(&tx.tx_hash))?
            .text("View transaction")
            .build();
        content.append_child(&link)?;
    }

    Ok(ElementBuilder::new("div")?
        .id("mining-modal")?
        .class("modal active")
        .child(content)?
        .build())
}
