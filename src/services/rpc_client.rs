// ============================================================================
// RPC CLIENT - JSON-RPC de solo lectura por HTTP (Stateless)
// ============================================================================
// Se usa para leer el contrato cuando no hay wallet inyectada.
// ============================================================================

use alloy_primitives::{hex, Address, Bytes};
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::models::WalletError;

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Value,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorBody>,
}

#[derive(Clone)]
pub struct JsonRpcClient {
    url: String,
}

impl JsonRpcClient {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
        }
    }

    async fn request<T: for<'de> Deserialize<'de>>(
        &self,
        method: &str,
        params: Value,
    ) -> Result<T, WalletError> {
        let body = RpcRequest {
            jsonrpc: "2.0",
            id: 1,
            method,
            params,
        };

        let response = Request::post(&self.url)
            .json(&body)
            .map_err(|e| WalletError::ChainCallFailure(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| WalletError::ChainCallFailure(format!("Network error: {}", e)))?;

        if !response.ok() {
            return Err(WalletError::ChainCallFailure(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )));
        }

        let parsed = response
            .json::<RpcResponse<T>>()
            .await
            .map_err(|e| WalletError::InvalidResponse(format!("Parse error: {}", e)))?;

        if let Some(error) = parsed.error {
            return Err(WalletError::from_rpc(Some(error.code), error.message));
        }
        parsed
            .result
            .ok_or_else(|| WalletError::InvalidResponse(format!("{}: respuesta sin result", method)))
    }

    /// `eth_call` contra el último bloque
    pub async fn eth_call(&self, to: Address, data: &Bytes) -> Result<Bytes, WalletError> {
        let params = json!([{ "to": to.to_string(), "data": hex::encode_prefixed(data) }, "latest"]);
        let raw: String = self.request("eth_call", params).await?;
        decode_hex_bytes(&raw)
    }
}

/// "0x…" → Bytes
pub fn decode_hex_bytes(raw: &str) -> Result<Bytes, WalletError> {
    hex::decode(raw)
        .map(Bytes::from)
        .map_err(|e| WalletError::InvalidResponse(format!("hex inválido '{}': {}", raw, e)))
}
