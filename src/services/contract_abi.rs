// ============================================================================
// CONTRACT ABI - Codificación / decodificación de llamadas y eventos
// ============================================================================
// Interfaz publicada del contrato de Toadz. Sin lógica, solo ABI.
// ============================================================================

use alloy_primitives::{Address, Bytes, B256, U256};
use alloy_sol_types::{sol, SolCall, SolEvent};

use crate::models::{MintCompletedEvent, RawLog, TransactionRequest, WalletError};

sol! {
    function mint(uint256 quantity) external payable;
    function totalSupply() external view returns (uint256 supply);
    event NewEpicNFTMinted(address sender, uint256 tokenId);
}

/// Cantidad fija por mint
pub const MINT_QUANTITY: u64 = 1;

/// Topic 0 del evento de mint (keccak de la firma)
pub fn mint_completed_topic() -> B256 {
    NewEpicNFTMinted::SIGNATURE_HASH
}

/// Construir la transacción de mint con el pago adjunto
pub fn build_mint_request(from: Address, contract: Address, price: U256) -> TransactionRequest {
    let call = mintCall {
        quantity: U256::from(MINT_QUANTITY),
    };
    TransactionRequest {
        from,
        to: contract,
        value: price,
        data: Bytes::from(call.abi_encode()),
    }
}

/// Calldata de `totalSupply()`
pub fn encode_total_supply() -> Bytes {
    Bytes::from(totalSupplyCall {}.abi_encode())
}

/// Decodificar el uint256 devuelto por `totalSupply()` sin pérdida de precisión
pub fn decode_total_supply(output: &[u8]) -> Result<u64, WalletError> {
    let decoded = totalSupplyCall::abi_decode_returns(output, true)
        .map_err(|e| WalletError::InvalidResponse(format!("totalSupply: {}", e)))?;
    u64::try_from(decoded.supply).map_err(|_| {
        WalletError::InvalidResponse(format!("totalSupply fuera de rango: {}", decoded.supply))
    })
}

/// Decodificar un log del evento de mint. El topic 0 debe ser la firma del
/// evento: el decodificador de alloy solo mira la forma de los datos.
pub fn decode_mint_completed(log: &RawLog) -> Result<MintCompletedEvent, WalletError> {
    match log.topics.first() {
        Some(topic) if *topic == NewEpicNFTMinted::SIGNATURE_HASH => {}
        Some(topic) => {
            return Err(WalletError::InvalidResponse(format!(
                "NewEpicNFTMinted: topic 0 inesperado {}",
                topic
            )))
        }
        None => return Err(WalletError::InvalidResponse("NewEpicNFTMinted: log sin topics".to_string())),
    }
    let event = NewEpicNFTMinted::decode_raw_log(log.topics.iter().copied(), &log.data, true)
        .map_err(|e| WalletError::InvalidResponse(format!("NewEpicNFTMinted: {}", e)))?;
    Ok(MintCompletedEvent {
        from: event.sender,
        token_id: event.tokenId,
    })
}

/// Codificar un log del evento (lo usan los mocks de tests)
pub fn encode_mint_completed(contract: Address, from: Address, token_id: u64) -> RawLog {
    let event = NewEpicNFTMinted {
        sender: from,
        tokenId: U256::from(token_id),
    };
    let data = event.encode_log_data();
    RawLog {
        address: contract,
        topics: data.topics().to_vec(),
        data: data.data,
    }
}
