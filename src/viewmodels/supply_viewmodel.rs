// ============================================================================
// SUPPLY VIEWMODEL - Lectura de totalSupply() una vez por carga
// ============================================================================
// Solo se lee a través de la wallet si está en la red requerida; si no, el
// contrato de esa dirección sería otro (o ninguno) y se usa el RPC público.
// ============================================================================

use std::rc::Rc;

use crate::config::AppConfig;
use crate::models::WalletError;
use crate::services::contract_abi;
use crate::services::WalletProvider;
use crate::state::AppState;

pub struct SupplyViewModel {
    provider: Rc<dyn WalletProvider>,
    config: Rc<AppConfig>,
    state: AppState,
}

impl SupplyViewModel {
    pub fn new(provider: Rc<dyn WalletProvider>, config: Rc<AppConfig>, state: AppState) -> Self {
        Self {
            provider,
            config,
            state,
        }
    }

    /// Leer el contador del contrato y guardarlo en `minted_count`
    pub async fn refresh_supply(&self) -> Result<u64, WalletError> {
        let contract = self.config.contract_address()?;
        let calldata = contract_abi::encode_total_supply();
        let output = if self.wallet_on_required_network().await {
            self.provider.call(contract, calldata).await?
        } else {
            log::info!("🌐 [SUPPLY] Leyendo totalSupply vía {}", self.config.rpc_url);
            self.provider.read_only_call(contract, calldata).await?
        };
        let minted = contract_abi::decode_total_supply(&output)?;

        if minted > self.config.total_mint_count {
            // El contrato manda; solo se registra
            log::warn!(
                "⚠️ [SUPPLY] totalSupply {} supera el máximo configurado {}",
                minted,
                self.config.total_mint_count
            );
        }

        self.state.supply.set_minted_count(minted);
        self.state.notify_subscribers();
        log::info!("🧮 [SUPPLY] {}", self.state.supply.get().label());
        Ok(minted)
    }

    async fn wallet_on_required_network(&self) -> bool {
        if !self.provider.is_available() {
            return false;
        }
        match self.provider.chain_id().await {
            Ok(chain_id) => chain_id == self.config.chain_id,
            Err(e) => {
                log::warn!("⚠️ [SUPPLY] No se pudo leer el chain id: {}", e);
                false
            }
        }
    }
}
