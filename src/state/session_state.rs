// ============================================================================
// SESSION STATE - Estado de la sesión de wallet
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::SessionSnapshot;
use crate::services::SubscriptionId;

/// Estado de sesión de wallet (compartido, Rc<RefCell>)
#[derive(Clone)]
pub struct SessionState {
    pub connected_account: Rc<RefCell<Option<String>>>,
    pub current_network_id: Rc<RefCell<Option<u64>>>,
    pub is_mint_in_progress: Rc<RefCell<bool>>,
    /// Entre la red comprobada y el hash devuelto por la wallet
    pub is_submitting: Rc<RefCell<bool>>,
    pub is_connecting: Rc<RefCell<bool>>,
    /// None hasta que se comprueba window.ethereum
    pub wallet_available: Rc<RefCell<Option<bool>>>,
    /// Suscripción activa al evento de mint (una por conexión)
    pub mint_subscription: Rc<RefCell<Option<SubscriptionId>>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            connected_account: Rc::new(RefCell::new(None)),
            current_network_id: Rc::new(RefCell::new(None)),
            is_mint_in_progress: Rc::new(RefCell::new(false)),
            is_submitting: Rc::new(RefCell::new(false)),
            is_connecting: Rc::new(RefCell::new(false)),
            wallet_available: Rc::new(RefCell::new(None)),
            mint_subscription: Rc::new(RefCell::new(None)),
        }
    }

    pub fn set_connected_account(&self, account: Option<String>) {
        *self.connected_account.borrow_mut() = account;
    }

    pub fn get_connected_account(&self) -> Option<String> {
        self.connected_account.borrow().clone()
    }

    pub fn set_network_id(&self, chain_id: Option<u64>) {
        *self.current_network_id.borrow_mut() = chain_id;
    }

    pub fn get_network_id(&self) -> Option<u64> {
        *self.current_network_id.borrow()
    }

    pub fn set_mint_in_progress(&self, in_progress: bool) {
        *self.is_mint_in_progress.borrow_mut() = in_progress;
    }

    pub fn is_mint_in_progress(&self) -> bool {
        *self.is_mint_in_progress.borrow()
    }

    pub fn set_submitting(&self, submitting: bool) {
        *self.is_submitting.borrow_mut() = submitting;
    }

    pub fn is_submitting(&self) -> bool {
        *self.is_submitting.borrow()
    }

    pub fn set_connecting(&self, connecting: bool) {
        *self.is_connecting.borrow_mut() = connecting;
    }

    pub fn is_connecting(&self) -> bool {
        *self.is_connecting.borrow()
    }

    pub fn set_wallet_available(&self, available: bool) {
        *self.wallet_available.borrow_mut() = Some(available);
    }

    pub fn get_wallet_available(&self) -> Option<bool> {
        *self.wallet_available.borrow()
    }

    pub fn set_mint_subscription(&self, id: Option<SubscriptionId>) {
        *self.mint_subscription.borrow_mut() = id;
    }

    pub fn get_mint_subscription(&self) -> Option<SubscriptionId> {
        self.mint_subscription.borrow().clone()
    }

    pub fn has_mint_subscription(&self) -> bool {
        self.mint_subscription.borrow().is_some()
    }

    /// Foto inmutable para vistas y tests
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            connected_account: self.get_connected_account(),
            current_network_id: self.get_network_id(),
            is_mint_in_progress: self.is_mint_in_progress(),
            is_submitting: self.is_submitting(),
            is_connecting: self.is_connecting(),
        }
    }

    /// Desconexión: limpiar cuenta y suscripción (el flag de mint lo gestiona su flujo)
    pub fn clear(&self) {
        self.set_connected_account(None);
        self.set_network_id(None);
        self.set_mint_subscription(None);
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_cells() {
        let state = SessionState::new();
        let other = state.clone();
        other.set_connected_account(Some("0xabc".to_string()));
        other.set_mint_in_progress(true);

        let snapshot = state.snapshot();
        assert_eq!(snapshot.connected_account.as_deref(), Some("0xabc"));
        assert!(snapshot.is_mint_in_progress);
    }

    #[test]
    fn test_submitting_counts_as_busy() {
        let state = SessionState::new();
        assert!(!state.snapshot().is_busy());

        state.set_submitting(true);
        assert!(state.snapshot().is_submitting);
        assert!(state.snapshot().is_busy());
    }

    #[test]
    fn test_clear_keeps_flags() {
        let state = SessionState::new();
        state.set_connected_account(Some("0xabc".to_string()));
        state.set_mint_subscription(Some("0xsub".to_string()));
        state.set_connecting(true);
        state.clear();

        assert!(state.get_connected_account().is_none());
        assert!(!state.has_mint_subscription());
        assert!(state.is_connecting());
    }
}
