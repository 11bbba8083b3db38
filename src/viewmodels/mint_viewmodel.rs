// ============================================================================
// MINT VIEWMODEL - Orquestación del mint pagado
// ============================================================================
// Red → signer → mint(1) con pago → flag en curso → confirmación → flag off.
// `is_submitting` cubre la espera de la firma y `is_mint_in_progress` la del
// recibo; cualquiera de los dos bloquea un segundo mint.
// ============================================================================

use std::rc::Rc;

use crate::config::AppConfig;
use crate::models::{MintTransaction, WalletError};
use crate::services::contract_abi;
use crate::services::{Notifier, WalletProvider};
use crate::state::AppState;
use crate::utils::messages;
use crate::viewmodels::network_guard::NetworkGuard;

/// Resultado de un intento de mint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MintOutcome {
    Confirmed(MintTransaction),
    NetworkMismatch,
    WalletMissing,
    AlreadyInProgress,
    Failed(WalletError),
}

pub struct MintViewModel {
    provider: Rc<dyn WalletProvider>,
    notifier: Rc<dyn Notifier>,
    config: Rc<AppConfig>,
    state: AppState,
    guard: Rc<NetworkGuard>,
}

impl MintViewModel {
    pub fn new(
        provider: Rc<dyn WalletProvider>,
        notifier: Rc<dyn Notifier>,
        config: Rc<AppConfig>,
        state: AppState,
        guard: Rc<NetworkGuard>,
    ) -> Self {
        Self {
            provider,
            notifier,
            config,
            state,
            guard,
        }
    }

    pub async fn mint(&self) -> MintOutcome {
        let session = &self.state.session;

        if !self.provider.is_available() {
            log::warn!("⚠️ [MINT] Ethereum object doesn't exist!");
            return MintOutcome::WalletMissing;
        }

        if session.is_mint_in_progress() || session.is_submitting() {
            log::warn!("⏳ [MINT] Ya hay un mint en curso, se ignora el click");
            return MintOutcome::AlreadyInProgress;
        }
        // Sin await entre la comprobación y el set
        session.set_submitting(true);

        match self.guard.ensure_required_network(session).await {
            Ok(()) => {}
            Err(WalletError::NetworkMismatch { .. }) => {
                session.set_submitting(false);
                self.state.notify_subscribers();
                return MintOutcome::NetworkMismatch;
            }
            Err(e) => return self.fail(e),
        }

        // La animación de carga empieza cuando la red ya es la correcta
        self.state.notify_subscribers();

        let from = match self.provider.signer().await {
            Ok(from) => from,
            Err(e) => return self.fail(e),
        };
        let contract = match self.config.contract_address() {
            Ok(contract) => contract,
            Err(e) => return self.fail(e),
        };

        log::info!("💸 [MINT] Going to pop wallet now to pay gas...");
        let request = contract_abi::build_mint_request(from, contract, self.config.mint_price());
        let tx_hash = match self.provider.send_transaction(request).await {
            Ok(hash) => hash,
            Err(e) => return self.fail(e),
        };

        let mut transaction = MintTransaction::submitted(tx_hash.clone());
        self.state.set_last_transaction(Some(transaction.clone()));
        session.set_mint_in_progress(true);
        session.set_submitting(false);
        self.state.notify_subscribers();
        log::info!("⛏️ [MINT] Mining... {}", tx_hash);

        let confirmation = self.provider.wait_for_confirmation(&tx_hash).await;

        session.set_mint_in_progress(false);

        let receipt = match confirmation {
            Ok(receipt) => receipt,
            Err(e) => return self.fail(e),
        };

        transaction.confirm();
        self.state.set_last_transaction(Some(transaction.clone()));
        self.state.notify_subscribers();
        log::info!(
            "✅ [MINT] Mined (bloque {:?}), see transaction: {}",
            receipt.block_number,
            self.config.transaction_url(&receipt.tx_hash)
        );

        MintOutcome::Confirmed(transaction)
    }

    /// Registrar, avisar y dejar el flag limpio
    fn fail(&self, error: WalletError) -> MintOutcome {
        log::error!("❌ [MINT] {}", error);
        self.state.session.set_submitting(false);
        self.state.session.set_mint_in_progress(false);
        self.state.notify_subscribers();

        if error.is_user_rejection() {
            self.notifier.notify(messages::MINT_REJECTED);
        } else {
            self.notifier.notify(&messages::mint_failed(&error.to_string()));
        }
        MintOutcome::Failed(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{MockProvider, RecordingNotifier, TEST_ACCOUNT, TEST_TX_HASH};
    use crate::viewmodels::mint_events::MintEventSubscriber;
    use alloy_primitives::Address;
    use futures::executor::block_on;
    use futures::future::join;
    use std::cell::Cell;

    struct Fixture {
        provider: Rc<MockProvider>,
        notifier: Rc<RecordingNotifier>,
        config: Rc<AppConfig>,
        state: AppState,
        vm: MintViewModel,
    }

    fn fixture(provider: MockProvider) -> Fixture {
        let provider = Rc::new(provider);
        let notifier = Rc::new(RecordingNotifier::default());
        let config = Rc::new(AppConfig::default());
        let state = AppState::new(config.total_mint_count);
        let guard = Rc::new(NetworkGuard::new(provider.clone(), notifier.clone(), config.network_requirement()));
        let vm = MintViewModel::new(provider.clone(), notifier.clone(), config.clone(), state.clone(), guard);
        Fixture {
            provider,
            notifier,
            config,
            state,
            vm,
        }
    }

    #[test]
    fn test_required_network_reaches_signing() {
        let f = fixture(MockProvider::on_chain(137));

        let outcome = block_on(f.vm.mint());

        assert!(matches!(outcome, MintOutcome::Confirmed(ref tx) if tx.has_confirmed));
        assert_eq!(f.provider.call_count("signer"), 1);
        assert_eq!(f.provider.call_count("eth_sendTransaction"), 1);

        let sent = f.provider.sent_transactions();
        assert_eq!(sent[0].value, f.config.mint_price());
        assert_eq!(sent[0].to, f.config.contract_address().unwrap());
        assert_eq!(sent[0].from, TEST_ACCOUNT.parse::<Address>().unwrap());
    }

    #[test]
    fn test_other_networks_short_circuit_before_signing() {
        for chain_id in [1u64, 5, 80001, 31337] {
            let f = fixture(MockProvider::on_chain(chain_id));
            let flag_changes = Rc::new(Cell::new(0));
            let counter = flag_changes.clone();
            let session = f.state.session.clone();
            f.state.subscribe_to_changes(move || {
                if session.is_mint_in_progress() {
                    counter.set(counter.get() + 1);
                }
            });

            let outcome = block_on(f.vm.mint());

            assert_eq!(outcome, MintOutcome::NetworkMismatch);
            assert_eq!(f.provider.call_count("signer"), 0);
            assert_eq!(flag_changes.get(), 0);
            assert!(!f.state.session.is_mint_in_progress());
            assert!(!f.state.session.snapshot().is_busy());
        }
    }

    #[test]
    fn test_connect_then_wrong_network_prompts_once_without_contract_calls() {
        let f = fixture(MockProvider::on_chain(137));
        f.provider.set_chain_id(1);

        block_on(f.vm.mint());

        assert_eq!(f.notifier.messages().len(), 1);
        assert_eq!(f.notifier.count_containing("Polygon"), 1);
        assert_eq!(f.provider.call_count("eth_sendTransaction"), 0);
        assert_eq!(f.provider.call_count("eth_call"), 0);
    }

    #[test]
    fn test_flag_reset_after_success() {
        let f = fixture(MockProvider::on_chain(137));
        assert!(!f.state.session.is_mint_in_progress());

        block_on(f.vm.mint());

        assert!(!f.state.session.is_mint_in_progress());
        assert_eq!(
            f.state.get_last_transaction(),
            Some(MintTransaction {
                tx_hash: TEST_TX_HASH.to_string(),
                has_confirmed: true,
            })
        );
    }

    #[test]
    fn test_flag_reset_after_signing_rejection() {
        let f = fixture(MockProvider::on_chain(137).rejecting_signature());
        assert!(!f.state.session.is_mint_in_progress());

        let outcome = block_on(f.vm.mint());

        assert!(matches!(outcome, MintOutcome::Failed(WalletError::UserRejected(_))));
        assert!(!f.state.session.is_mint_in_progress());
        assert_eq!(f.notifier.messages(), vec![messages::MINT_REJECTED.to_string()]);
    }

    #[test]
    fn test_revert_is_surfaced_and_flag_cleared() {
        let f = fixture(MockProvider::on_chain(137).reverting());

        let outcome = block_on(f.vm.mint());

        assert!(matches!(outcome, MintOutcome::Failed(WalletError::ChainCallFailure(_))));
        assert!(!f.state.session.is_mint_in_progress());
        assert_eq!(f.notifier.count_containing("execution reverted"), 1);
    }

    #[test]
    fn test_confirmation_timeout_clears_flag_and_notifies() {
        let f = fixture(MockProvider::on_chain(137).timing_out(600));

        let outcome = block_on(f.vm.mint());

        assert_eq!(
            outcome,
            MintOutcome::Failed(WalletError::ConfirmationTimeout {
                tx_hash: TEST_TX_HASH.to_string(),
                seconds: 600,
            })
        );
        assert!(!f.state.session.is_mint_in_progress());
        assert!(!f.state.session.snapshot().is_busy());
        assert_eq!(f.notifier.count_containing("not confirmed after 600s"), 1);
        assert_eq!(
            f.state.get_last_transaction(),
            Some(MintTransaction::submitted(TEST_TX_HASH.to_string()))
        );
    }

    #[test]
    fn test_concurrent_mints_send_a_single_transaction() {
        let f = fixture(MockProvider::on_chain(137));

        let (first, second) = block_on(join(f.vm.mint(), f.vm.mint()));

        assert!(matches!(first, MintOutcome::Confirmed(_)));
        assert_eq!(second, MintOutcome::AlreadyInProgress);
        assert_eq!(f.provider.call_count("eth_sendTransaction"), 1);
        assert!(!f.state.session.snapshot().is_busy());
    }

    #[test]
    fn test_submitting_flag_cleared_after_signing_rejection() {
        let f = fixture(MockProvider::on_chain(137).rejecting_signature());
        let seen_submitting = Rc::new(Cell::new(false));
        let seen = seen_submitting.clone();
        let session = f.state.session.clone();
        f.state.subscribe_to_changes(move || {
            if session.is_submitting() {
                seen.set(true);
            }
        });

        block_on(f.vm.mint());

        assert!(seen_submitting.get());
        assert!(!f.state.session.is_submitting());
    }

    #[test]
    fn test_flag_set_while_waiting_for_confirmation() {
        let f = fixture(MockProvider::on_chain(137));
        let seen = Rc::new(Cell::new(false));
        let seen_in_hook = seen.clone();
        let session = f.state.session.clone();
        f.provider.on_confirmation_wait(move || seen_in_hook.set(session.is_mint_in_progress()));

        block_on(f.vm.mint());

        assert!(seen.get());
        assert!(!f.state.session.is_mint_in_progress());
        assert!(!f.state.session.is_submitting());
    }

    #[test]
    fn test_second_mint_while_in_progress_is_ignored() {
        let f = fixture(MockProvider::on_chain(137));
        f.state.session.set_mint_in_progress(true);

        assert_eq!(block_on(f.vm.mint()), MintOutcome::AlreadyInProgress);
        assert!(f.provider.calls().is_empty());
    }

    #[test]
    fn test_mint_without_wallet() {
        let f = fixture(MockProvider::without_wallet());
        assert_eq!(block_on(f.vm.mint()), MintOutcome::WalletMissing);
        assert!(f.provider.calls().is_empty());
    }

    #[test]
    fn test_end_to_end_mint_event_notifies_marketplace_link() {
        let config = AppConfig::default();
        let contract = config.contract_address().unwrap();
        let minter: Address = TEST_ACCOUNT.parse().unwrap();
        let f = fixture(
            MockProvider::on_chain(137)
                .with_confirmation_delay(3)
                .emit_on_confirm(contract_abi::encode_mint_completed(contract, minter, 7)),
        );
        let events = MintEventSubscriber::new(
            f.provider.clone(),
            f.notifier.clone(),
            f.config.clone(),
            f.state.session.clone(),
        );
        block_on(events.attach()).unwrap();

        let outcome = block_on(f.vm.mint());

        assert!(matches!(outcome, MintOutcome::Confirmed(_)));
        let expected = format!("/assets/{}/7", f.config.contract_address);
        assert_eq!(f.notifier.count_containing(&expected), 1);
        assert!(!f.state.session.is_mint_in_progress());
    }
}
