// ============================================================================
// TOADVERSE MINT - FRONTEND MVVM (RUST PURO)
// ============================================================================
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Sesión de wallet, red, mint, supply y eventos
// - Services: SOLO comunicación con la wallet / nodo (EIP-1193, JSON-RPC)
// - State: State Management con Rc<RefCell>
// - Models: Tipos de dominio y errores
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod viewmodels;
pub mod state;
pub mod utils;
mod dom;
mod views;
mod app;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_logger::Config;
use crate::app::App;
use crate::config::CONFIG;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    wasm_logger::init(Config::new(level));
    log::info!(
        "🚀 Toadverse Mint - Rust Puro + MVVM ({} / chain {})",
        CONFIG.network_name,
        CONFIG.chain_id
    );

    let app = App::new()?;
    app.render()?;
    app.bootstrap();

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Re-render completo de la app
pub fn rerender_app() {
    APP.with(|app_cell| match app_cell.try_borrow() {
        Ok(app) => match app.as_ref() {
            Some(app) => {
                if let Err(e) = app.render() {
                    log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
                } else {
                    log::debug!(
                        "✅ [RERENDER] {} | minted {}",
                        app.state().session.snapshot().short_account().unwrap_or_else(|| "sin cuenta".to_string()),
                        app.state().supply.get().label()
                    );
                }
            }
            None => log::warn!("⚠️ [RERENDER] App no está inicializada"),
        },
        Err(_) => log::warn!("⚠️ [RERENDER] App ocupada, re-render omitido"),
    });
}

/// Función pública WASM para re-renderizar la app (llamable desde JavaScript)
#[wasm_bindgen]
pub fn rerender_app_wasm() {
    rerender_app();
}
