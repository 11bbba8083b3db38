// ============================================================================
// SUPPLY STATE - Contador de tokens minteados
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::SupplyCounter;

#[derive(Clone)]
pub struct SupplyState {
    pub counter: Rc<RefCell<SupplyCounter>>,
    /// Ya se leyó totalSupply() en esta carga de página
    pub loaded: Rc<RefCell<bool>>,
}

impl SupplyState {
    pub fn new(max_count: u64) -> Self {
        Self {
            counter: Rc::new(RefCell::new(SupplyCounter::new(max_count))),
            loaded: Rc::new(RefCell::new(false)),
        }
    }

    pub fn set_minted_count(&self, minted: u64) {
        self.counter.borrow_mut().minted_count = minted;
        *self.loaded.borrow_mut() = true;
    }

    pub fn get(&self) -> SupplyCounter {
        *self.counter.borrow()
    }

    pub fn is_loaded(&self) -> bool {
        *self.loaded.borrow()
    }
}
