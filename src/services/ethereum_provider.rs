// ============================================================================
// EIP-1193 PROVIDER - window.ethereum (MetaMask y compatibles)
// ============================================================================
// SOLO comunicación con la wallet: request({ method, params }) + eventos.
// GESTIÓN DE LISTENERS:
// - Cada suscripción registra UN listener "message" en window.ethereum.
// - El Closure se guarda en `listeners` y se libera en unsubscribe(), así no
//   se acumulan listeners entre reconexiones. Aquí NO se usa forget().
// - accountsChanged / chainChanged / disconnect se registran una sola vez
//   (flag `watching_wallet`) y viven lo que vive el provider.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::str::FromStr;

use alloy_primitives::{hex, Address, Bytes, B256};
use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use js_sys::{Function, Promise, Reflect};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::config::AppConfig;
use crate::models::network::parse_chain_id;
use crate::models::{RawLog, TransactionReceipt, TransactionRequest, WalletError};
use crate::services::confirmation::{self, ConfirmationPolicy};
use crate::services::rpc_client::{decode_hex_bytes, JsonRpcClient};
use crate::services::wallet_provider::{
    LogFilter, LogHandler, SubscriptionId, WalletEvent, WalletEventHandler, WalletProvider,
};

#[derive(Serialize)]
struct RequestArguments<'a> {
    method: &'a str,
    params: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReceiptDto {
    transaction_hash: String,
    block_number: Option<String>,
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LogDto {
    address: String,
    topics: Vec<String>,
    data: String,
}

#[derive(Debug, Deserialize)]
struct SubscriptionData {
    subscription: String,
    result: LogDto,
}

#[derive(Debug, Deserialize)]
struct ProviderMessage {
    #[serde(rename = "type")]
    kind: String,
    data: SubscriptionData,
}

/// Provider EIP-1193 sobre el objeto inyectado `window.ethereum`
pub struct Eip1193Provider {
    ethereum: Option<JsValue>,
    read_only: JsonRpcClient,
    policy: ConfirmationPolicy,
    listeners: RefCell<HashMap<SubscriptionId, Closure<dyn FnMut(JsValue)>>>,
    wallet_listeners: RefCell<Vec<Closure<dyn FnMut(JsValue)>>>,
    watching_wallet: Cell<bool>,
}

impl Eip1193Provider {
    /// Buscar la wallet inyectada; si no existe el provider queda en modo solo lectura
    pub fn detect(config: &AppConfig) -> Self {
        let ethereum = web_sys::window()
            .and_then(|window| Reflect::get(&window, &JsValue::from_str("ethereum")).ok())
            .filter(|value| !value.is_undefined() && !value.is_null());

        if ethereum.is_some() {
            log::info!("🦊 [PROVIDER] window.ethereum detectado");
        } else {
            log::warn!("⚠️ [PROVIDER] Sin wallet inyectada, solo lectura vía {}", config.rpc_url);
        }

        Self {
            ethereum,
            read_only: JsonRpcClient::new(&config.rpc_url),
            policy: ConfirmationPolicy::new(config.receipt_poll_interval_ms, config.confirmation_timeout_seconds),
            listeners: RefCell::new(HashMap::new()),
            wallet_listeners: RefCell::new(Vec::new()),
            watching_wallet: Cell::new(false),
        }
    }

    fn ethereum(&self) -> Result<&JsValue, WalletError> {
        self.ethereum.as_ref().ok_or(WalletError::EnvironmentUnavailable)
    }

    /// ethereum.request({ method, params }) → JsValue
    async fn raw_request(&self, method: &str, params: Value) -> Result<JsValue, WalletError> {
        let ethereum = self.ethereum()?;

        let args = RequestArguments { method, params }
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| WalletError::InvalidResponse(format!("Serialization error: {}", e)))?;

        let request_fn = Reflect::get(ethereum, &JsValue::from_str("request"))
            .ok()
            .and_then(|value| value.dyn_into::<Function>().ok())
            .ok_or_else(|| WalletError::InvalidResponse("ethereum.request no es una función".to_string()))?;

        let result = request_fn.call1(ethereum, &args).map_err(js_error)?;
        let promise = result
            .dyn_into::<Promise>()
            .map_err(|_| WalletError::InvalidResponse(format!("{} no devolvió una promesa", method)))?;

        JsFuture::from(promise).await.map_err(js_error)
    }

    async fn request<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T, WalletError> {
        let value = self.raw_request(method, params).await?;
        serde_wasm_bindgen::from_value(value)
            .map_err(|e| WalletError::InvalidResponse(format!("{}: {}", method, e)))
    }

    fn call_listener_method(&self, method: &str, event: &str, closure: &Closure<dyn FnMut(JsValue)>) -> Result<(), WalletError> {
        let ethereum = self.ethereum()?;
        let function = Reflect::get(ethereum, &JsValue::from_str(method))
            .ok()
            .and_then(|value| value.dyn_into::<Function>().ok())
            .ok_or_else(|| WalletError::InvalidResponse(format!("ethereum.{} no disponible", method)))?;
        function
            .call2(ethereum, &JsValue::from_str(event), closure.as_ref().unchecked_ref())
            .map(|_| ())
            .map_err(js_error)
    }

    async fn fetch_receipt(&self, tx_hash: &str) -> Result<Option<TransactionReceipt>, WalletError> {
        let receipt: Option<ReceiptDto> = self
            .request("eth_getTransactionReceipt", json!([tx_hash]))
            .await?;
        Ok(receipt.map(|receipt| TransactionReceipt {
            success: receipt.status.as_deref() != Some("0x0"),
            block_number: receipt
                .block_number
                .as_deref()
                .and_then(|n| u64::from_str_radix(n.trim_start_matches("0x"), 16).ok()),
            tx_hash: receipt.transaction_hash,
        }))
    }

    /// Registrar un listener de evento de la wallet y guardarlo
    fn listen_wallet_event(
        &self,
        event: &str,
        handler: WalletEventHandler,
        parse: fn(JsValue) -> Option<WalletEvent>,
    ) -> Result<(), WalletError> {
        let name = event.to_string();
        let closure = Closure::wrap(Box::new(move |payload: JsValue| match parse(payload) {
            Some(event) => handler(event),
            None => log::warn!("⚠️ [PROVIDER] Payload de {} no reconocido", name),
        }) as Box<dyn FnMut(JsValue)>);
        self.call_listener_method("on", event, &closure)?;
        self.wallet_listeners.borrow_mut().push(closure);
        Ok(())
    }
}

fn parse_accounts_changed(payload: JsValue) -> Option<WalletEvent> {
    serde_wasm_bindgen::from_value::<Vec<String>>(payload)
        .ok()
        .map(WalletEvent::AccountsChanged)
}

fn parse_chain_changed(payload: JsValue) -> Option<WalletEvent> {
    payload
        .as_string()
        .and_then(|raw| parse_chain_id(&raw))
        .map(WalletEvent::ChainChanged)
}

fn parse_disconnect(_payload: JsValue) -> Option<WalletEvent> {
    Some(WalletEvent::Disconnected)
}

/// Traducir un error JS ({ code, message }) a WalletError
fn js_error(error: JsValue) -> WalletError {
    let code = Reflect::get(&error, &JsValue::from_str("code"))
        .ok()
        .and_then(|value| value.as_f64())
        .map(|code| code as i64);
    let message = Reflect::get(&error, &JsValue::from_str("message"))
        .ok()
        .and_then(|value| value.as_string())
        .unwrap_or_else(|| format!("{:?}", error));
    WalletError::from_rpc(code, message)
}

fn parse_address(raw: &str) -> Result<Address, WalletError> {
    Address::from_str(raw).map_err(|e| WalletError::InvalidResponse(format!("dirección inválida '{}': {}", raw, e)))
}

fn parse_raw_log(dto: LogDto) -> Result<RawLog, WalletError> {
    let topics = dto
        .topics
        .iter()
        .map(|topic| {
            B256::from_str(topic).map_err(|e| WalletError::InvalidResponse(format!("topic inválido '{}': {}", topic, e)))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(RawLog {
        address: parse_address(&dto.address)?,
        topics,
        data: decode_hex_bytes(&dto.data)?,
    })
}

#[async_trait(?Send)]
impl WalletProvider for Eip1193Provider {
    fn is_available(&self) -> bool {
        self.ethereum.is_some()
    }

    async fn authorized_accounts(&self) -> Result<Vec<String>, WalletError> {
        self.request("eth_accounts", json!([])).await
    }

    async fn request_accounts(&self) -> Result<Vec<String>, WalletError> {
        self.request("eth_requestAccounts", json!([])).await
    }

    async fn chain_id(&self) -> Result<u64, WalletError> {
        let raw: String = self.request("eth_chainId", json!([])).await?;
        parse_chain_id(&raw).ok_or_else(|| WalletError::InvalidResponse(format!("chain id inválido: {}", raw)))
    }

    async fn signer(&self) -> Result<Address, WalletError> {
        let accounts = self.authorized_accounts().await?;
        let account = accounts.first().ok_or(WalletError::NoAccount)?;
        parse_address(account)
    }

    async fn send_transaction(&self, request: TransactionRequest) -> Result<String, WalletError> {
        let params = json!([{
            "from": request.from.to_string(),
            "to": request.to.to_string(),
            "value": format!("{:#x}", request.value),
            "data": hex::encode_prefixed(&request.data),
        }]);
        self.request("eth_sendTransaction", params).await
    }

    async fn wait_for_confirmation(&self, tx_hash: &str) -> Result<TransactionReceipt, WalletError> {
        confirmation::wait_for_receipt(
            &self.policy,
            tx_hash,
            || self.fetch_receipt(tx_hash),
            |ms| TimeoutFuture::new(ms),
        )
        .await
    }

    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes, WalletError> {
        if self.ethereum.is_none() {
            return self.read_only.eth_call(to, &data).await;
        }
        let params = json!([{ "to": to.to_string(), "data": hex::encode_prefixed(&data) }, "latest"]);
        let raw: String = self.request("eth_call", params).await?;
        decode_hex_bytes(&raw)
    }

    async fn read_only_call(&self, to: Address, data: Bytes) -> Result<Bytes, WalletError> {
        self.read_only.eth_call(to, &data).await
    }

    fn watch_wallet_events(&self, handler: WalletEventHandler) -> Result<bool, WalletError> {
        if self.watching_wallet.get() {
            log::warn!("⚠️ [PROVIDER] Eventos de wallet ya registrados, ignorando llamada duplicada");
            return Ok(false);
        }
        self.ethereum()?;

        self.listen_wallet_event("accountsChanged", handler.clone(), parse_accounts_changed)?;
        self.listen_wallet_event("chainChanged", handler.clone(), parse_chain_changed)?;
        self.listen_wallet_event("disconnect", handler, parse_disconnect)?;
        self.watching_wallet.set(true);

        log::info!("👂 [PROVIDER] Escuchando accountsChanged / chainChanged / disconnect");
        Ok(true)
    }

    async fn subscribe_logs(&self, filter: LogFilter, handler: LogHandler) -> Result<SubscriptionId, WalletError> {
        let params = json!(["logs", {
            "address": filter.address.to_string(),
            "topics": [filter.topic0.to_string()],
        }]);
        let subscription_id: String = self.request("eth_subscribe", params).await?;

        let expected = subscription_id.clone();
        let closure = Closure::wrap(Box::new(move |message: JsValue| {
            let message: ProviderMessage = match serde_wasm_bindgen::from_value(message) {
                Ok(message) => message,
                // Otros mensajes del provider (no son logs)
                Err(_) => return,
            };
            if message.kind != "eth_subscription" || message.data.subscription != expected {
                return;
            }
            match parse_raw_log(message.data.result) {
                Ok(raw_log) => handler(raw_log),
                Err(e) => log::error!("❌ [PROVIDER] Log inválido en suscripción {}: {}", expected, e),
            }
        }) as Box<dyn FnMut(JsValue)>);

        self.call_listener_method("on", "message", &closure)?;
        self.listeners.borrow_mut().insert(subscription_id.clone(), closure);

        log::info!("👂 [PROVIDER] Suscripción de logs activa: {}", subscription_id);
        Ok(subscription_id)
    }

    async fn unsubscribe(&self, id: &SubscriptionId) -> Result<(), WalletError> {
        let closure = self.listeners.borrow_mut().remove(id);
        if let Some(closure) = closure {
            self.call_listener_method("removeListener", "message", &closure)?;
        }
        let _: bool = self.request("eth_unsubscribe", json!([id])).await?;
        log::info!("🔌 [PROVIDER] Suscripción {} cancelada", id);
        Ok(())
    }
}

impl Drop for Eip1193Provider {
    fn drop(&mut self) {
        log::info!(
            "🔌 [PROVIDER] Provider dropped ({} suscripciones, {} listeners de wallet)",
            self.listeners.borrow().len(),
            self.wallet_listeners.borrow().len()
        );
    }
}
