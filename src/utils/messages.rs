// ============================================================================
// MESSAGES - Textos de los avisos al usuario
// ============================================================================

pub const WALLET_MISSING_ON_LOAD: &str = "Check your Metamask!";

pub const WALLET_MISSING_ON_CONNECT: &str = "Get Metamask!";

pub const CONNECTION_REJECTED: &str =
    "The connection request was rejected in your wallet. Press \"Connect to Wallet\" to try again.";

pub const MINT_REJECTED: &str =
    "Mint cancelled: the transaction was rejected in your wallet. No NFT was minted.";

pub fn network_mismatch(network_name: &str) -> String {
    format!(
        "Hello there, This app is built on the {name} and it looks like you are on a different EVM network. Please switch to the {name} to continue",
        name = network_name
    )
}

pub fn mint_success(marketplace_url: &str) -> String {
    format!(
        "Hey! We've minted your NFT and sent it to your wallet. It may be blank right now. It can take a max of 10 min to show up on OpenSea. Here's the link: {}",
        marketplace_url
    )
}

pub fn connection_failed(reason: &str) -> String {
    format!("Could not connect to your wallet: {}", reason)
}

pub fn mint_failed(reason: &str) -> String {
    format!("Mint failed: {}. No NFT was minted, please try again.", reason)
}
