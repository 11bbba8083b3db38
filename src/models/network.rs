use serde::{Deserialize, Serialize};

/// Red requerida: chain id + nombre legible
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkRequirement {
    pub chain_id: u64,
    pub name: String,
}

impl NetworkRequirement {
    pub fn new(chain_id: u64, name: &str) -> Self {
        Self {
            chain_id,
            name: name.to_string(),
        }
    }

    /// Comparación exacta de enteros
    pub fn is_satisfied_by(&self, chain_id: u64) -> bool {
        self.chain_id == chain_id
    }
}

/// Parsear el chain id que devuelve `eth_chainId` ("0x89") o un decimal ("137")
pub fn parse_chain_id(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => raw.parse().ok(),
    }
}
