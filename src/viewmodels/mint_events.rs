// ============================================================================
// MINT EVENT SUBSCRIBER - Evento NewEpicNFTMinted del contrato
// ============================================================================
// Par explícito subscribe/unsubscribe atado a la conexión: como máximo UNA
// suscripción activa por sesión (attach() repetido no duplica listeners).
// ============================================================================

use std::rc::Rc;

use crate::config::AppConfig;
use crate::models::{MintCompletedEvent, RawLog, WalletError};
use crate::services::contract_abi;
use crate::services::{LogFilter, Notifier, SubscriptionId, WalletProvider};
use crate::state::SessionState;
use crate::utils::messages;

pub type MintEventHandler = Rc<dyn Fn(MintCompletedEvent)>;

pub struct MintEventSubscriber {
    provider: Rc<dyn WalletProvider>,
    notifier: Rc<dyn Notifier>,
    config: Rc<AppConfig>,
    session: SessionState,
}

impl MintEventSubscriber {
    pub fn new(
        provider: Rc<dyn WalletProvider>,
        notifier: Rc<dyn Notifier>,
        config: Rc<AppConfig>,
        session: SessionState,
    ) -> Self {
        Self {
            provider,
            notifier,
            config,
            session,
        }
    }

    /// Registrar `handler` para cada evento de mint del contrato
    pub async fn on_mint_completed(&self, handler: MintEventHandler) -> Result<SubscriptionId, WalletError> {
        let filter = LogFilter {
            address: self.config.contract_address()?,
            topic0: contract_abi::mint_completed_topic(),
        };

        let log_handler = Rc::new(move |raw_log: RawLog| match contract_abi::decode_mint_completed(&raw_log) {
            Ok(event) => {
                log::info!("🐸 [EVENTS] Mint completado: from={} tokenId={}", event.from, event.token_id);
                handler(event);
            }
            Err(e) => log::error!("❌ [EVENTS] Log de mint no decodificable: {}", e),
        });

        self.provider.subscribe_logs(filter, log_handler).await
    }

    /// Handler por defecto: aviso con el enlace al marketplace
    pub fn notification_handler(&self) -> MintEventHandler {
        let notifier = self.notifier.clone();
        let config = self.config.clone();
        Rc::new(move |event: MintCompletedEvent| {
            let token_id = match event.token_id_u64() {
                Some(id) => id,
                None => {
                    log::error!("❌ [EVENTS] tokenId fuera de rango: {}", event.token_id);
                    return;
                }
            };
            notifier.notify(&messages::mint_success(&config.marketplace_url(token_id)));
        })
    }

    /// Adjuntar el listener si no hay uno activo. Devuelve true si se registró.
    pub async fn attach(&self) -> Result<bool, WalletError> {
        if self.session.has_mint_subscription() {
            log::info!("👂 [EVENTS] Listener ya activo, no se duplica");
            return Ok(false);
        }

        let id = self.on_mint_completed(self.notification_handler()).await?;

        // Otro attach() pudo terminar mientras esperábamos
        if self.session.has_mint_subscription() {
            self.provider.unsubscribe(&id).await?;
            return Ok(false);
        }

        log::info!("✅ [EVENTS] Setup event listener! ({})", id);
        self.session.set_mint_subscription(Some(id));
        Ok(true)
    }

    /// Cancelar la suscripción activa, si existe
    pub async fn detach(&self) -> Result<(), WalletError> {
        let id = self.session.get_mint_subscription();
        if let Some(id) = id {
            self.session.set_mint_subscription(None);
            self.provider.unsubscribe(&id).await?;
        }
        Ok(())
    }
}
