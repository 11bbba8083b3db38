// ============================================================================
// APP VIEW - Página completa de mint
// ============================================================================
// Solo composición: los datos vienen de AppState y las acciones van al
// MintPageViewModel.
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::AppConfig;
use crate::dom::{append_child, ElementBuilder, ListenerBag};
use crate::state::AppState;
use crate::viewmodels::MintPageViewModel;
use crate::views::{
    render_about, render_cta_block, render_footer, render_header, render_intro, render_mining_modal, render_team,
    render_vibemap,
};

/// Renderizar la aplicación completa
pub fn render_app(
    state: &AppState,
    vm: &Rc<MintPageViewModel>,
    config: &AppConfig,
    listeners: &ListenerBag,
) -> Result<Element, JsValue> {
    let app = ElementBuilder::new("div")?.class("App").build();

    // Modal de minado encima de todo mientras la tx espera confirmación
    if state.session.is_mint_in_progress() {
        append_child(&app, &render_mining_modal(state, config)?)?;
    }

    let container = ElementBuilder::new("div")?.class("container").build();

    let header = render_header(config)?;
    append_child(&header, &render_cta_block(state, vm, config, listeners)?)?;
    append_child(&container, &header)?;

    append_child(&container, &render_intro()?)?;
    append_child(&container, &render_about()?)?;
    append_child(&container, &render_vibemap()?)?;
    append_child(&container, &render_team()?)?;
    append_child(&container, &render_footer(config)?)?;

    append_child(&app, &container)?;
    Ok(app)
}
