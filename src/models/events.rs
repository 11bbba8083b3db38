use alloy_primitives::{Address, U256};

/// Evento de mint completado, ya decodificado
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintCompletedEvent {
    pub from: Address,
    pub token_id: U256,
}

impl MintCompletedEvent {
    /// Token id como u64; la colección nunca pasa de unos miles
    pub fn token_id_u64(&self) -> Option<u64> {
        u64::try_from(self.token_id).ok()
    }
}
