// ============================================================================
// APP - Aplicación principal (monta la página de mint en #app)
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::{AppConfig, CONFIG};
use crate::dom::{append_child, get_element_by_id, set_inner_html, ListenerBag};
use crate::services::{BrowserNotifier, Eip1193Provider, WalletEvent, WalletEventHandler};
use crate::state::AppState;
use crate::viewmodels::MintPageViewModel;
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    state: AppState,
    vm: Rc<MintPageViewModel>,
    config: Rc<AppConfig>,
    root: Element,
    /// Listeners de click del último render
    listeners: ListenerBag,
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let config = Rc::new(CONFIG.clone());
        let state = AppState::new(config.total_mint_count);
        let provider = Rc::new(Eip1193Provider::detect(&config));
        let notifier = Rc::new(BrowserNotifier::new());
        let vm = Rc::new(MintPageViewModel::new(provider, notifier, config.clone(), state.clone()));

        // Suscribirse a cambios de estado para re-renderizar automáticamente
        state.subscribe_to_changes(move || {
            // Usar gloo_timers para batchear múltiples updates
            use gloo_timers::callback::Timeout;
            Timeout::new(0, move || {
                crate::rerender_app();
            })
            .forget();
        });

        Ok(Self {
            state,
            vm,
            config,
            root,
            listeners: ListenerBag::new(),
        })
    }

    /// Carga inicial en segundo plano: sesión + totalSupply, y eventos de la wallet
    pub fn bootstrap(&self) {
        // Weak: los closures viven dentro del provider, que a su vez cuelga del ViewModel
        let weak_vm = Rc::downgrade(&self.vm);
        let dispatch: WalletEventHandler = Rc::new(move |event: WalletEvent| {
            if let Some(vm) = weak_vm.upgrade() {
                wasm_bindgen_futures::spawn_local(async move {
                    vm.wallet.handle_wallet_event(event).await;
                });
            }
        });
        if self.vm.wallet.watch_wallet_events(dispatch) {
            log::info!("👂 [APP] Eventos de wallet registrados");
        }

        let vm = self.vm.clone();
        wasm_bindgen_futures::spawn_local(async move {
            vm.on_page_load().await;
        });
    }

    /// Renderizar aplicación (re-render completo)
    pub fn render(&self) -> Result<(), JsValue> {
        log::debug!("🎬 [APP] render()");
        set_inner_html(&self.root, "");
        self.listeners.clear();
        let view = render_app(&self.state, &self.vm, &self.config, &self.listeners)?;
        log::debug!("🎬 [APP] {} listeners activos", self.listeners.len());
        append_child(&self.root, &view)
    }

    /// Obtener referencia al estado
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
