use std::env;
use std::fs;
use std::path::Path;

// Claves que AppConfig::from_env() lee con option_env!
const CONFIG_KEYS: &[&str] = &[
    "CHAIN_ID",
    "NETWORK_NAME",
    "RPC_URL",
    "CONTRACT_ADDRESS",
    "MINT_PRICE_WEI",
    "TOTAL_MINT_COUNT",
    "MARKETPLACE_HOST",
    "SCANNER_HOST",
    "TWITTER_HANDLE",
    "OPENSEA_COLLECTION_URL",
    "DISCORD_URL",
    "WEBSITE_URL",
    "CONFIRMATION_TIMEOUT_SECONDS",
    "RECEIPT_POLL_INTERVAL_MS",
    "ENABLE_LOGGING",
];

fn main() {
    // Cargar variables de entorno desde .env si existe
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim();

                    if !CONFIG_KEYS.contains(&key) {
                        println!("cargo:warning=Clave desconocida en .env: {}", key);
                        continue;
                    }

                    // Solo configurar si no está ya definida en el entorno
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found. Using default mint constants (Polygon / 369 toadz). Copy .env.example to .env to override.");
    }

    // Un cambio en el entorno del shell también debe recompilar
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
}
