// ============================================================================
// NETWORK GUARD - Comprobación de red requerida
// ============================================================================
// Compara el chain id de la wallet con el requerido. Nunca cambia de red
// automáticamente ni reintenta.
// ============================================================================

use std::rc::Rc;

use crate::models::{NetworkRequirement, WalletError};
use crate::services::{Notifier, WalletProvider};
use crate::state::SessionState;
use crate::utils::messages;

pub struct NetworkGuard {
    provider: Rc<dyn WalletProvider>,
    notifier: Rc<dyn Notifier>,
    requirement: NetworkRequirement,
}

impl NetworkGuard {
    pub fn new(provider: Rc<dyn WalletProvider>, notifier: Rc<dyn Notifier>, requirement: NetworkRequirement) -> Self {
        Self {
            provider,
            notifier,
            requirement,
        }
    }

    /// ¿La wallet está en la red requerida? Sin efectos secundarios.
    pub async fn is_on_required_network(&self) -> Result<bool, WalletError> {
        let chain_id = self.provider.chain_id().await?;
        Ok(self.requirement.is_satisfied_by(chain_id))
    }

    /// Aviso síncrono nombrando la red requerida
    pub fn prompt_network_mismatch(&self) {
        self.notifier.notify(&messages::network_mismatch(&self.requirement.name));
    }

    /// Leer chain id, guardarlo en la sesión y avisar si no coincide.
    /// Devuelve `NetworkMismatch` después de avisar al usuario.
    pub async fn ensure_required_network(&self, session: &SessionState) -> Result<(), WalletError> {
        let chain_id = self.provider.chain_id().await?;
        session.set_network_id(Some(chain_id));

        if self.requirement.is_satisfied_by(chain_id) {
            return Ok(());
        }

        log::warn!(
            "⚠️ [NETWORK] Wallet en chain {}, se requiere {} ({})",
            chain_id,
            self.requirement.chain_id,
            self.requirement.name
        );
        self.prompt_network_mismatch();
        Err(WalletError::NetworkMismatch {
            expected: self.requirement.chain_id,
            actual: chain_id,
        })
    }
}
