use alloy_primitives::{Address, Bytes, B256, U256};
use serde::{Deserialize, Serialize};

/// Transacción de mint pendiente: se crea al enviar y se resuelve antes de
/// que `mint()` termine. Nunca se reintenta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintTransaction {
    pub tx_hash: String,
    pub has_confirmed: bool,
}

impl MintTransaction {
    pub fn submitted(tx_hash: String) -> Self {
        Self {
            tx_hash,
            has_confirmed: false,
        }
    }

    pub fn confirm(&mut self) {
        self.has_confirmed = true;
    }
}

/// Petición `eth_sendTransaction`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRequest {
    pub from: Address,
    pub to: Address,
    pub value: U256,
    pub data: Bytes,
}

/// Recibo mínimo de una transacción minada
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionReceipt {
    pub tx_hash: String,
    pub block_number: Option<u64>,
    pub success: bool,
}

/// Log tal como lo entrega el nodo, sin decodificar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLog {
    pub address: Address,
    pub topics: Vec<B256>,
    pub data: Bytes,
}
