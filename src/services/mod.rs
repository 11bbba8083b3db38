pub mod wallet_provider;
pub mod ethereum_provider;
pub mod rpc_client;
pub mod confirmation;
pub mod contract_abi;
pub mod notifier;

#[cfg(test)]
pub mod testing;

pub use wallet_provider::{LogFilter, LogHandler, SubscriptionId, WalletEvent, WalletEventHandler, WalletProvider};
pub use ethereum_provider::Eip1193Provider;
pub use rpc_client::JsonRpcClient;
pub use notifier::{BrowserNotifier, Notifier};
