// ============================================================================
// TESTING - Wallet y notifier simulados (solo tests nativos)
// ============================================================================

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolValue;
use async_trait::async_trait;

use crate::models::{RawLog, TransactionReceipt, TransactionRequest, WalletError};
use crate::services::notifier::Notifier;
use crate::services::wallet_provider::{
    LogFilter, LogHandler, SubscriptionId, WalletEvent, WalletEventHandler, WalletProvider,
};

pub const TEST_ACCOUNT: &str = "0x1111111111111111111111111111111111111111";
pub const TEST_TX_HASH: &str = "0xfeedfacefeedfacefeedfacefeedfacefeedfacefeedfacefeedfacefeedface";

/// Future que cede el control una vez (simula latencia de red)
struct YieldOnce(bool);

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

/// Wallet simulada con respuestas configurables y registro de llamadas
pub struct MockProvider {
    available: bool,
    chain_id: Cell<u64>,
    authorized: RefCell<Vec<String>>,
    requested: RefCell<Result<Vec<String>, WalletError>>,
    signer: RefCell<Result<Address, WalletError>>,
    send_result: RefCell<Result<String, WalletError>>,
    confirm_result: RefCell<Result<(), WalletError>>,
    confirmation_delay: Cell<usize>,
    total_supply: RefCell<U256>,
    logs_on_confirm: RefCell<Vec<RawLog>>,
    on_confirmation_wait: RefCell<Option<Box<dyn Fn()>>>,
    subscriptions: RefCell<HashMap<SubscriptionId, (LogFilter, LogHandler)>>,
    next_subscription: Cell<u32>,
    wallet_events: RefCell<Option<WalletEventHandler>>,
    calls: RefCell<Vec<&'static str>>,
    sent: RefCell<Vec<TransactionRequest>>,
}

impl MockProvider {
    /// Wallet presente en `chain_id`, sin cuentas autorizadas todavía
    pub fn on_chain(chain_id: u64) -> Self {
        let account: Address = TEST_ACCOUNT.parse().expect("cuenta de test válida");
        Self {
            available: true,
            chain_id: Cell::new(chain_id),
            authorized: RefCell::new(Vec::new()),
            requested: RefCell::new(Ok(vec![TEST_ACCOUNT.to_string()])),
            signer: RefCell::new(Ok(account)),
            send_result: RefCell::new(Ok(TEST_TX_HASH.to_string())),
            confirm_result: RefCell::new(Ok(())),
            confirmation_delay: Cell::new(0),
            total_supply: RefCell::new(U256::ZERO),
            logs_on_confirm: RefCell::new(Vec::new()),
            on_confirmation_wait: RefCell::new(None),
            subscriptions: RefCell::new(HashMap::new()),
            next_subscription: Cell::new(0),
            wallet_events: RefCell::new(None),
            calls: RefCell::new(Vec::new()),
            sent: RefCell::new(Vec::new()),
        }
    }

    /// Navegador sin wallet inyectada
    pub fn without_wallet() -> Self {
        Self {
            available: false,
            ..Self::on_chain(137)
        }
    }

    pub fn with_authorized(self, accounts: &[&str]) -> Self {
        *self.authorized.borrow_mut() = accounts.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn with_total_supply(self, supply: U256) -> Self {
        *self.total_supply.borrow_mut() = supply;
        self
    }

    pub fn rejecting_connection(self) -> Self {
        *self.requested.borrow_mut() = Err(WalletError::UserRejected("User rejected the request.".to_string()));
        self
    }

    /// La wallet aprueba la conexión pero no devuelve ninguna cuenta
    pub fn approving_without_accounts(self) -> Self {
        *self.requested.borrow_mut() = Ok(Vec::new());
        self
    }

    /// La transacción nunca llega a un bloque dentro del plazo
    pub fn timing_out(self, seconds: u32) -> Self {
        *self.confirm_result.borrow_mut() = Err(WalletError::ConfirmationTimeout {
            tx_hash: TEST_TX_HASH.to_string(),
            seconds,
        });
        self
    }

    pub fn rejecting_signature(self) -> Self {
        *self.send_result.borrow_mut() =
            Err(WalletError::UserRejected("User denied transaction signature.".to_string()));
        self
    }

    pub fn reverting(self) -> Self {
        *self.confirm_result.borrow_mut() = Err(WalletError::ChainCallFailure("execution reverted".to_string()));
        self
    }

    /// Cuántas veces cede el control la espera de confirmación
    pub fn with_confirmation_delay(self, ticks: usize) -> Self {
        self.confirmation_delay.set(ticks);
        self
    }

    /// Logs que se emiten a los suscriptores tras confirmar
    pub fn emit_on_confirm(self, log: RawLog) -> Self {
        self.logs_on_confirm.borrow_mut().push(log);
        self
    }

    /// Hook ejecutado mientras la transacción espera confirmación
    pub fn on_confirmation_wait(&self, hook: impl Fn() + 'static) {
        *self.on_confirmation_wait.borrow_mut() = Some(Box::new(hook));
    }

    pub fn set_chain_id(&self, chain_id: u64) {
        self.chain_id.set(chain_id);
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self, method: &str) -> usize {
        self.calls.borrow().iter().filter(|m| **m == method).count()
    }

    pub fn sent_transactions(&self) -> Vec<TransactionRequest> {
        self.sent.borrow().clone()
    }

    pub fn active_subscriptions(&self) -> usize {
        self.subscriptions.borrow().len()
    }

    /// Entregar un log a los suscriptores cuyo filtro coincide
    pub fn emit_log(&self, log: RawLog) {
        let handlers: Vec<LogHandler> = self
            .subscriptions
            .borrow()
            .values()
            .filter(|(filter, _)| filter.address == log.address && log.topics.first() == Some(&filter.topic0))
            .map(|(_, handler)| handler.clone())
            .collect();
        for handler in handlers {
            handler(log.clone());
        }
    }

    /// Simular un evento emitido por la wallet (accountsChanged, chainChanged...)
    pub fn emit_wallet_event(&self, event: WalletEvent) {
        if let WalletEvent::ChainChanged(chain_id) = event {
            self.chain_id.set(chain_id);
        }
        let handler = self.wallet_events.borrow().clone();
        if let Some(handler) = handler {
            handler(event);
        }
    }

    fn record(&self, method: &'static str) {
        self.calls.borrow_mut().push(method);
    }

    // Solo se simula totalSupply()
    fn total_supply_output(&self, data: &Bytes) -> Result<Bytes, WalletError> {
        if data[..] != [0x18, 0x16, 0x0d, 0xdd] {
            return Err(WalletError::ChainCallFailure("unknown selector".to_string()));
        }
        Ok(Bytes::from(self.total_supply.borrow().abi_encode()))
    }
}

#[async_trait(?Send)]
impl WalletProvider for MockProvider {
    fn is_available(&self) -> bool {
        self.available
    }

    async fn authorized_accounts(&self) -> Result<Vec<String>, WalletError> {
        self.record("eth_accounts");
        YieldOnce(false).await;
        Ok(self.authorized.borrow().clone())
    }

    async fn request_accounts(&self) -> Result<Vec<String>, WalletError> {
        self.record("eth_requestAccounts");
        YieldOnce(false).await;
        let result = self.requested.borrow().clone();
        if let Ok(accounts) = &result {
            *self.authorized.borrow_mut() = accounts.clone();
        }
        result
    }

    async fn chain_id(&self) -> Result<u64, WalletError> {
        self.record("eth_chainId");
        Ok(self.chain_id.get())
    }

    async fn signer(&self) -> Result<Address, WalletError> {
        self.record("signer");
        self.signer.borrow().clone()
    }

    async fn send_transaction(&self, request: TransactionRequest) -> Result<String, WalletError> {
        self.record("eth_sendTransaction");
        self.sent.borrow_mut().push(request);
        YieldOnce(false).await;
        self.send_result.borrow().clone()
    }

    async fn wait_for_confirmation(&self, tx_hash: &str) -> Result<TransactionReceipt, WalletError> {
        self.record("eth_getTransactionReceipt");
        if let Some(hook) = self.on_confirmation_wait.borrow().as_ref() {
            hook();
        }
        for _ in 0..self.confirmation_delay.get() {
            YieldOnce(false).await;
        }

        self.confirm_result.borrow().clone()?;

        let logs: Vec<RawLog> = self.logs_on_confirm.borrow_mut().drain(..).collect();
        for log in logs {
            self.emit_log(log);
        }

        Ok(TransactionReceipt {
            tx_hash: tx_hash.to_string(),
            block_number: Some(1),
            success: true,
        })
    }

    async fn call(&self, _to: Address, data: Bytes) -> Result<Bytes, WalletError> {
        self.record("eth_call");
        self.total_supply_output(&data)
    }

    async fn read_only_call(&self, _to: Address, data: Bytes) -> Result<Bytes, WalletError> {
        self.record("rpc_eth_call");
        self.total_supply_output(&data)
    }

    fn watch_wallet_events(&self, handler: WalletEventHandler) -> Result<bool, WalletError> {
        self.record("watch_wallet_events");
        if !self.available {
            return Err(WalletError::EnvironmentUnavailable);
        }
        if self.wallet_events.borrow().is_some() {
            return Ok(false);
        }
        *self.wallet_events.borrow_mut() = Some(handler);
        Ok(true)
    }

    async fn subscribe_logs(&self, filter: LogFilter, handler: LogHandler) -> Result<SubscriptionId, WalletError> {
        self.record("eth_subscribe");
        let id = format!("0xsub{}", self.next_subscription.get());
        self.next_subscription.set(self.next_subscription.get() + 1);
        self.subscriptions.borrow_mut().insert(id.clone(), (filter, handler));
        Ok(id)
    }

    async fn unsubscribe(&self, id: &SubscriptionId) -> Result<(), WalletError> {
        self.record("eth_unsubscribe");
        self.subscriptions.borrow_mut().remove(id);
        Ok(())
    }
}

/// Notifier que guarda los mensajes en lugar de mostrar alert()
#[derive(Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn count_containing(&self, needle: &str) -> usize {
        self.messages.borrow().iter().filter(|m| m.contains(needle)).count()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
