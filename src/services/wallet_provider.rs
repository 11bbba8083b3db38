// ============================================================================
// WALLET PROVIDER - Capacidad inyectada por el navegador (trait)
// ============================================================================
// El resto de la app solo consume esta superficie; la implementación real es
// Eip1193Provider (window.ethereum) y en tests MockProvider.
// ============================================================================

use std::rc::Rc;

use alloy_primitives::{Address, Bytes, B256};
use async_trait::async_trait;

use crate::models::{RawLog, TransactionReceipt, TransactionRequest, WalletError};

/// Callback para logs entregados por una suscripción
pub type LogHandler = Rc<dyn Fn(RawLog)>;

/// Identificador opaco de una suscripción activa
pub type SubscriptionId = String;

/// Filtro de logs: contrato + topic 0
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFilter {
    pub address: Address,
    pub topic0: B256,
}

/// Eventos que la wallet emite por su cuenta (EIP-1193)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletEvent {
    /// `accountsChanged`; lista vacía = el usuario desconectó la página
    AccountsChanged(Vec<String>),
    /// `chainChanged` ya parseado
    ChainChanged(u64),
    /// `disconnect` del provider
    Disconnected,
}

pub type WalletEventHandler = Rc<dyn Fn(WalletEvent)>;

#[async_trait(?Send)]
pub trait WalletProvider {
    /// ¿Hay wallet inyectada?
    fn is_available(&self) -> bool;

    /// Cuentas ya autorizadas, sin mostrar prompt (`eth_accounts`)
    async fn authorized_accounts(&self) -> Result<Vec<String>, WalletError>;

    /// Pedir acceso a cuentas al usuario (`eth_requestAccounts`)
    async fn request_accounts(&self) -> Result<Vec<String>, WalletError>;

    /// Chain id activo en la wallet
    async fn chain_id(&self) -> Result<u64, WalletError>;

    /// Cuenta con la que se firmarán las transacciones
    async fn signer(&self) -> Result<Address, WalletError>;

    /// Enviar transacción firmada por la wallet; devuelve el hash
    async fn send_transaction(&self, request: TransactionRequest) -> Result<String, WalletError>;

    /// Esperar a que la transacción entre en un bloque
    async fn wait_for_confirmation(&self, tx_hash: &str) -> Result<TransactionReceipt, WalletError>;

    /// Llamada de solo lectura (`eth_call`) en la red activa de la wallet
    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes, WalletError>;

    /// `eth_call` contra el RPC público de la red requerida, sin pasar por la wallet
    async fn read_only_call(&self, to: Address, data: Bytes) -> Result<Bytes, WalletError>;

    /// Registrar UNA vez los listeners de accountsChanged / chainChanged /
    /// disconnect. Devuelve false si ya estaban registrados.
    fn watch_wallet_events(&self, handler: WalletEventHandler) -> Result<bool, WalletError>;

    /// Suscribirse a logs; el handler vive hasta `unsubscribe`
    async fn subscribe_logs(&self, filter: LogFilter, handler: LogHandler) -> Result<SubscriptionId, WalletError>;

    async fn unsubscribe(&self, id: &SubscriptionId) -> Result<(), WalletError>;
}
