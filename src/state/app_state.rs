// ============================================================================
// APP STATE - Estado global de la página de mint
// ============================================================================
// Lo posee App y se pasa a vistas y viewmodels (nada de globals ambientales).
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::MintTransaction;
use crate::state::{SessionState, SupplyState};

#[derive(Clone)]
pub struct AppState {
    pub session: SessionState,
    pub supply: SupplyState,

    /// Última transacción de mint enviada en esta sesión
    pub last_transaction: Rc<RefCell<Option<MintTransaction>>>,

    // Reactivity: callbacks para notificar cambios (Rc para poder compartir)
    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    pub fn new(max_supply: u64) -> Self {
        Self {
            session: SessionState::new(),
            supply: SupplyState::new(max_supply),
            last_transaction: Rc::new(RefCell::new(None)),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn set_last_transaction(&self, transaction: Option<MintTransaction>) {
        *self.last_transaction.borrow_mut() = transaction;
    }

    pub fn get_last_transaction(&self) -> Option<MintTransaction> {
        self.last_transaction.borrow().clone()
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers (App decide cómo re-renderizar)
    pub fn notify_subscribers(&self) {
        // Copiar la lista: un callback puede suscribir otro sin pánico de RefCell
        let subscribers: Vec<Rc<dyn Fn()>> = self.change_subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_notify_reaches_all_subscribers() {
        let state = AppState::new(369);
        let hits = Rc::new(Cell::new(0));

        for _ in 0..2 {
            let hits = hits.clone();
            state.subscribe_to_changes(move || hits.set(hits.get() + 1));
        }
        state.clone().notify_subscribers();

        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn test_supply_starts_at_zero() {
        let state = AppState::new(369);
        let counter = state.supply.get();
        assert_eq!(counter.minted_count, 0);
        assert_eq!(counter.max_count, 369);
        assert!(!state.supply.is_loaded());
    }
}
