pub mod network_guard;
pub mod mint_events;
pub mod wallet_viewmodel;
pub mod mint_viewmodel;
pub mod supply_viewmodel;
pub mod page_viewmodel;

pub use network_guard::NetworkGuard;
pub use mint_events::{MintEventHandler, MintEventSubscriber};
pub use wallet_viewmodel::WalletViewModel;
pub use mint_viewmodel::{MintOutcome, MintViewModel};
pub use supply_viewmodel::SupplyViewModel;
pub use page_viewmodel::MintPageViewModel;
