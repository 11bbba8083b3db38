// ============================================================================
// NOTIFIER - Avisos bloqueantes al usuario (window.alert)
// ============================================================================

use wasm_bindgen::JsValue;

pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Implementación de navegador: alert() bloqueante
#[derive(Clone, Default)]
pub struct BrowserNotifier;

impl BrowserNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for BrowserNotifier {
    fn notify(&self, message: &str) {
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.alert_with_message(message) {
                    log::error!("❌ [NOTIFIER] alert() falló: {:?}", e);
                }
            }
            None => {
                web_sys::console::warn_1(&JsValue::from_str(&format!(
                    "⚠️ [NOTIFIER] Sin window, aviso descartado: {}",
                    message
                )));
            }
        }
    }
}
