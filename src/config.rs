use std::str::FromStr;

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::models::network::NetworkRequirement;
use crate::models::WalletError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub chain_id: u64,
    pub network_name: String,
    pub rpc_url: String,
    pub contract_address: String,
    pub mint_price_wei: u128,
    pub total_mint_count: u64,
    pub marketplace_host: String,
    pub scanner_host: String,
    pub confirmation_timeout_seconds: u32,
    pub receipt_poll_interval_ms: u32,
    pub enable_logging: bool,
    pub links: LinksConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            chain_id: 137,
            network_name: "Polygon".to_string(),
            rpc_url: "https://polygon-rpc.com".to_string(),
            contract_address: "0x49717D37804016f5bb64dF57f229BfBb640C6Ae2".to_string(),
            mint_price_wei: 6_900_000_000_000_000,
            total_mint_count: 369,
            marketplace_host: "testnets.opensea.io".to_string(),
            scanner_host: "polygonscan.com".to_string(),
            confirmation_timeout_seconds: 600,
            receipt_poll_interval_ms: 2000,
            enable_logging: true,
            links: LinksConfig::default(),
        }
    }
}

/// Enlaces estáticos de la página (redes sociales, colección, web)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinksConfig {
    pub twitter_handle: String,
    pub opensea_collection_url: String,
    pub discord_url: String,
    pub website_url: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            twitter_handle: "toadverseNFT".to_string(),
            opensea_collection_url: "https://opensea.io/collection/toadverse-0-by-nnn".to_string(),
            discord_url: "https://discord.gg/cryptoadz".to_string(),
            website_url: "https://toadverse.io".to_string(),
        }
    }
}

impl LinksConfig {
    pub fn twitter_url(&self) -> String {
        format!("https://twitter.com/{}", self.twitter_handle)
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let links = LinksConfig::default();

        Self {
            chain_id: option_env!("CHAIN_ID")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.chain_id),
            network_name: option_env!("NETWORK_NAME")
                .map(str::to_string)
                .unwrap_or(defaults.network_name),
            rpc_url: option_env!("RPC_URL")
                .map(str::to_string)
                .unwrap_or(defaults.rpc_url),
            contract_address: option_env!("CONTRACT_ADDRESS")
                .map(str::to_string)
                .unwrap_or(defaults.contract_address),
            mint_price_wei: option_env!("MINT_PRICE_WEI")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.mint_price_wei),
            total_mint_count: option_env!("TOTAL_MINT_COUNT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.total_mint_count),
            marketplace_host: option_env!("MARKETPLACE_HOST")
                .map(str::to_string)
                .unwrap_or(defaults.marketplace_host),
            scanner_host: option_env!("SCANNER_HOST")
                .map(str::to_string)
                .unwrap_or(defaults.scanner_host),
            confirmation_timeout_seconds: option_env!("CONFIRMATION_TIMEOUT_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.confirmation_timeout_seconds),
            receipt_poll_interval_ms: option_env!("RECEIPT_POLL_INTERVAL_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.receipt_poll_interval_ms),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            links: LinksConfig {
                twitter_handle: option_env!("TWITTER_HANDLE")
                    .map(str::to_string)
                    .unwrap_or(links.twitter_handle),
                opensea_collection_url: option_env!("OPENSEA_COLLECTION_URL")
                    .map(str::to_string)
                    .unwrap_or(links.opensea_collection_url),
                discord_url: option_env!("DISCORD_URL")
                    .map(str::to_string)
                    .unwrap_or(links.discord_url),
                website_url: option_env!("WEBSITE_URL")
                    .map(str::to_string)
                    .unwrap_or(links.website_url),
            },
        }
    }

    /// Red en la que debe estar la wallet para conectar y mintear
    pub fn network_requirement(&self) -> NetworkRequirement {
        NetworkRequirement::new(self.chain_id, &self.network_name)
    }

    /// Dirección del contrato parseada
    pub fn contract_address(&self) -> Result<Address, WalletError> {
        Address::from_str(&self.contract_address).map_err(|e| {
            WalletError::InvalidResponse(format!(
                "CONTRACT_ADDRESS inválida '{}': {}",
                self.contract_address, e
            ))
        })
    }

    /// Precio del mint en la unidad mínima de la cadena (wei)
    pub fn mint_price(&self) -> U256 {
        U256::from(self.mint_price_wei)
    }

    /// Enlace al token en el marketplace: https://<host>/assets/<contrato>/<tokenId>
    pub fn marketplace_url(&self, token_id: u64) -> String {
        format!(
            "https://{}/assets/{}/{}",
            self.marketplace_host, self.contract_address, token_id
        )
    }

    /// Enlace a la transacción en el explorador de bloques
    pub fn transaction_url(&self, tx_hash: &str) -> String {
        format!("https://{}/tx/{}", self.scanner_host, tx_hash)
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
