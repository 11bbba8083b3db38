// ============================================================================
// MINT PAGE VIEWMODEL - Fachada que usan las vistas
// ============================================================================
// Construye los cinco componentes sobre el mismo provider / notifier / estado.
// ============================================================================

use std::rc::Rc;

use crate::config::AppConfig;
use crate::services::{Notifier, WalletProvider};
use crate::state::AppState;
use crate::viewmodels::mint_events::MintEventSubscriber;
use crate::viewmodels::mint_viewmodel::{MintOutcome, MintViewModel};
use crate::viewmodels::network_guard::NetworkGuard;
use crate::viewmodels::supply_viewmodel::SupplyViewModel;
use crate::viewmodels::wallet_viewmodel::WalletViewModel;

pub struct MintPageViewModel {
    pub wallet: WalletViewModel,
    pub minter: MintViewModel,
    pub supply: SupplyViewModel,
    pub guard: Rc<NetworkGuard>,
    pub events: Rc<MintEventSubscriber>,
}

impl MintPageViewModel {
    pub fn new(
        provider: Rc<dyn WalletProvider>,
        notifier: Rc<dyn Notifier>,
        config: Rc<AppConfig>,
        state: AppState,
    ) -> Self {
        let guard = Rc::new(NetworkGuard::new(
            provider.clone(),
            notifier.clone(),
            config.network_requirement(),
        ));
        let events = Rc::new(MintEventSubscriber::new(
            provider.clone(),
            notifier.clone(),
            config.clone(),
            state.session.clone(),
        ));

        Self {
            wallet: WalletViewModel::new(
                provider.clone(),
                notifier.clone(),
                state.clone(),
                guard.clone(),
                events.clone(),
            ),
            minter: MintViewModel::new(provider.clone(), notifier, config.clone(), state.clone(), guard.clone()),
            supply: SupplyViewModel::new(provider, config, state),
            guard,
            events,
        }
    }

    /// Carga inicial: restaurar sesión y leer el contador una vez
    pub async fn on_page_load(&self) {
        log::info!("🚀 [PAGE] Carga inicial");
        self.wallet.detect_and_restore_session().await;

        if let Err(e) = self.supply.refresh_supply().await {
            log::error!("❌ [PAGE] No se pudo leer totalSupply: {}", e);
        }
    }

    pub async fn connect(&self) -> Option<String> {
        self.wallet.request_connection().await
    }

    pub async fn mint(&self) -> MintOutcome {
        self.minter.mint().await
    }

    pub async fn disconnect(&self) {
        self.wallet.disconnect().await;
    }
}
