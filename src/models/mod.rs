pub mod error;
pub mod session;
pub mod supply;
pub mod network;
pub mod transaction;
pub mod events;

pub use error::WalletError;
pub use session::SessionSnapshot;
pub use supply::SupplyCounter;
pub use network::NetworkRequirement;
pub use transaction::{MintTransaction, RawLog, TransactionReceipt, TransactionRequest};
pub use events::MintCompletedEvent;
