// ============================================================================
// ERRORES DE WALLET / CADENA
// ============================================================================

use thiserror::Error;

/// Código EIP-1193 cuando el usuario rechaza la petición en la wallet
pub const USER_REJECTED_CODE: i64 = 4001;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// No hay wallet inyectada en la página
    #[error("no injected wallet available")]
    EnvironmentUnavailable,

    #[error("wallet is on chain {actual}, expected {expected}")]
    NetworkMismatch { expected: u64, actual: u64 },

    /// El usuario rechazó el acceso a cuentas o la firma
    #[error("request rejected by user: {0}")]
    UserRejected(String),

    /// Revert del contrato, error del nodo o del transporte
    #[error("chain call failed: {0}")]
    ChainCallFailure(String),

    #[error("transaction {tx_hash} not confirmed after {seconds}s")]
    ConfirmationTimeout { tx_hash: String, seconds: u32 },

    #[error("no connected account")]
    NoAccount,

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl WalletError {
    /// Clasificar un error JSON-RPC / EIP-1193 por su código
    pub fn from_rpc(code: Option<i64>, message: impl Into<String>) -> Self {
        let message = message.into();
        match code {
            Some(USER_REJECTED_CODE) => WalletError::UserRejected(message),
            _ => WalletError::ChainCallFailure(message),
        }
    }

    pub fn is_user_rejection(&self) -> bool {
        matches!(self, WalletError::UserRejected(_))
    }
}
