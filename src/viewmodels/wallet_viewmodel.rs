// ============================================================================
// WALLET VIEWMODEL - Sesión de wallet (detectar, restaurar, conectar)
// ============================================================================
// Lógica de sesión: actualiza AppState y notifica; las vistas solo llaman.
// ============================================================================

use std::rc::Rc;

use crate::models::WalletError;
use crate::services::{Notifier, WalletEvent, WalletEventHandler, WalletProvider};
use crate::state::AppState;
use crate::utils::messages;
use crate::viewmodels::mint_events::MintEventSubscriber;
use crate::viewmodels::network_guard::NetworkGuard;

pub struct WalletViewModel {
    provider: Rc<dyn WalletProvider>,
    notifier: Rc<dyn Notifier>,
    state: AppState,
    guard: Rc<NetworkGuard>,
    events: Rc<MintEventSubscriber>,
}

impl WalletViewModel {
    pub fn new(
        provider: Rc<dyn WalletProvider>,
        notifier: Rc<dyn Notifier>,
        state: AppState,
        guard: Rc<NetworkGuard>,
        events: Rc<MintEventSubscriber>,
    ) -> Self {
        Self {
            provider,
            notifier,
            state,
            guard,
            events,
        }
    }

    /// Al cargar: buscar wallet y cuenta ya autorizada, sin prompt
    pub async fn detect_and_restore_session(&self) -> Option<String> {
        let session = &self.state.session;

        if !self.provider.is_available() {
            log::warn!("⚠️ [WALLET] Make sure you have Metamask!");
            session.set_wallet_available(false);
            self.state.notify_subscribers();
            self.notifier.notify(messages::WALLET_MISSING_ON_LOAD);
            return None;
        }

        log::info!("🦊 [WALLET] We have the ethereum object");
        session.set_wallet_available(true);

        match self.provider.chain_id().await {
            Ok(chain_id) => session.set_network_id(Some(chain_id)),
            Err(e) => log::warn!("⚠️ [WALLET] No se pudo leer el chain id: {}", e),
        }

        let accounts = match self.provider.authorized_accounts().await {
            Ok(accounts) => accounts,
            Err(e) => {
                log::error!("❌ [WALLET] eth_accounts falló: {}", e);
                self.state.notify_subscribers();
                return None;
            }
        };

        let account = match accounts.into_iter().next() {
            Some(account) => account,
            None => {
                log::info!("🔒 [WALLET] No authorized account found");
                self.state.notify_subscribers();
                return None;
            }
        };

        log::info!("✅ [WALLET] Found an authorized account: {}", account);
        session.set_connected_account(Some(account.clone()));
        self.state.notify_subscribers();
        self.attach_listener().await;

        Some(account)
    }

    /// Botón "Connect to Wallet": red correcta y luego prompt de cuentas
    pub async fn request_connection(&self) -> Option<String> {
        let session = &self.state.session;

        if !self.provider.is_available() {
            session.set_wallet_available(false);
            self.notifier.notify(messages::WALLET_MISSING_ON_CONNECT);
            return None;
        }

        match self.guard.ensure_required_network(session).await {
            Ok(()) => {}
            Err(WalletError::NetworkMismatch { .. }) => {
                log::warn!("⚠️ [WALLET] Make sure you are on the correct network!");
                self.state.notify_subscribers();
                return None;
            }
            Err(e) => {
                log::error!("❌ [WALLET] Error comprobando la red: {}", e);
                self.notifier.notify(&messages::connection_failed(&e.to_string()));
                return None;
            }
        }

        session.set_connecting(true);
        self.state.notify_subscribers();

        let result = self.provider.request_accounts().await;

        session.set_connecting(false);

        let account = match result {
            Ok(accounts) => accounts.into_iter().next(),
            Err(e) => {
                log::error!("❌ [WALLET] eth_requestAccounts falló: {}", e);
                self.state.notify_subscribers();
                if e.is_user_rejection() {
                    self.notifier.notify(messages::CONNECTION_REJECTED);
                } else {
                    self.notifier.notify(&messages::connection_failed(&e.to_string()));
                }
                return None;
            }
        };

        let account = match account {
            Some(account) => account,
            None => {
                log::warn!("⚠️ [WALLET] La wallet no devolvió cuentas");
                self.state.notify_subscribers();
                return None;
            }
        };

        log::info!("✅ [WALLET] Connected {}", account);
        session.set_connected_account(Some(account.clone()));
        self.state.notify_subscribers();
        self.attach_listener().await;

        Some(account)
    }

    /// Olvidar la cuenta y soltar el listener de eventos
    pub async fn disconnect(&self) {
        if let Err(e) = self.events.detach().await {
            log::error!("❌ [WALLET] Error cancelando suscripción: {}", e);
        }
        self.state.session.clear();
        self.state.notify_subscribers();
        log::info!("👋 [WALLET] Sesión desconectada");
    }

    /// Registrar los eventos de la wallet (una vez por provider).
    /// `dispatch` decide cómo ejecutar `handle_wallet_event` (spawn_local en la app).
    pub fn watch_wallet_events(&self, dispatch: WalletEventHandler) -> bool {
        if !self.provider.is_available() {
            return false;
        }
        match self.provider.watch_wallet_events(dispatch) {
            Ok(registered) => registered,
            Err(e) => {
                log::error!("❌ [WALLET] No se pudieron registrar los eventos de la wallet: {}", e);
                false
            }
        }
    }

    /// Reaccionar a cambios hechos desde la propia wallet
    pub async fn handle_wallet_event(&self, event: WalletEvent) {
        let session = &self.state.session;
        match event {
            WalletEvent::AccountsChanged(accounts) => match accounts.into_iter().next() {
                None => {
                    log::info!("🔒 [WALLET] La wallet ya no expone cuentas");
                    self.disconnect().await;
                }
                Some(account) => {
                    if session.get_connected_account().as_deref() == Some(account.as_str()) {
                        return;
                    }
                    log::info!("🔄 [WALLET] Cuenta activa: {}", account);
                    session.set_connected_account(Some(account));
                    self.state.notify_subscribers();
                    self.attach_listener().await;
                }
            },
            WalletEvent::ChainChanged(chain_id) => {
                log::info!("🔄 [WALLET] Chain activo: {}", chain_id);
                session.set_network_id(Some(chain_id));
                self.state.notify_subscribers();
            }
            WalletEvent::Disconnected => {
                log::warn!("⚠️ [WALLET] El provider se desconectó");
                self.disconnect().await;
            }
        }
    }

    async fn attach_listener(&self) {
        if let Err(e) = self.events.attach().await {
            log::error!("❌ [WALLET] No se pudo registrar el listener de mint: {}", e);
        }
    }
}
