use serde::{Deserialize, Serialize};

/// Contador de tokens minteados frente al máximo de la colección.
/// `minted_count <= max_count` se espera pero no se impone aquí: la fuente
/// de verdad es el contrato.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyCounter {
    pub minted_count: u64,
    pub max_count: u64,
}

impl SupplyCounter {
    pub fn new(max_count: u64) -> Self {
        Self {
            minted_count: 0,
            max_count,
        }
    }

    pub fn is_sold_out(&self) -> bool {
        self.minted_count >= self.max_count
    }

    /// Texto "minted/max" del bloque principal
    pub fn label(&self) -> String {
        format!("{}/{}", self.minted_count, self.max_count)
    }
}
