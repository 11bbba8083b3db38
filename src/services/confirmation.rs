// ============================================================================
// CONFIRMATION - Espera de recibo con polling y timeout
// ============================================================================
// Independiente del transporte: `fetch` pide el recibo y `sleep` espera entre
// intentos. Eip1193Provider pasa eth_getTransactionReceipt + TimeoutFuture.
// ============================================================================

use std::future::Future;

use crate::models::{TransactionReceipt, WalletError};

/// Intervalo mínimo entre consultas al nodo
pub const MIN_POLL_INTERVAL_MS: u32 = 250;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmationPolicy {
    pub poll_interval_ms: u32,
    pub timeout_seconds: u32,
}

impl ConfirmationPolicy {
    pub fn new(poll_interval_ms: u32, timeout_seconds: u32) -> Self {
        Self {
            poll_interval_ms: poll_interval_ms.max(MIN_POLL_INTERVAL_MS),
            timeout_seconds,
        }
    }

    fn timeout_ms(&self) -> u64 {
        u64::from(self.timeout_seconds) * 1000
    }
}

/// Consultar hasta que haya recibo, el recibo indique revert o se agote el tiempo
pub async fn wait_for_receipt<F, Fut, S, SFut>(
    policy: &ConfirmationPolicy,
    tx_hash: &str,
    mut fetch: F,
    mut sleep: S,
) -> Result<TransactionReceipt, WalletError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<TransactionReceipt>, WalletError>>,
    S: FnMut(u32) -> SFut,
    SFut: Future<Output = ()>,
{
    let mut waited_ms: u64 = 0;

    loop {
        if let Some(receipt) = fetch().await? {
            if !receipt.success {
                return Err(WalletError::ChainCallFailure(format!(
                    "transaction {} reverted",
                    receipt.tx_hash
                )));
            }
            return Ok(receipt);
        }

        if waited_ms >= policy.timeout_ms() {
            log::warn!("⏱️ [CONFIRMATION] {} sin recibo tras {}s", tx_hash, policy.timeout_seconds);
            return Err(WalletError::ConfirmationTimeout {
                tx_hash: tx_hash.to_string(),
                seconds: policy.timeout_seconds,
            });
        }

        sleep(policy.poll_interval_ms).await;
        waited_ms += u64::from(policy.poll_interval_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::ready;
    use std::cell::{Cell, RefCell};

    fn receipt(success: bool) -> TransactionReceipt {
        TransactionReceipt {
            tx_hash: "0xabc".to_string(),
            block_number: Some(10),
            success,
        }
    }

    #[test]
    fn test_interval_has_a_floor() {
        assert_eq!(ConfirmationPolicy::new(10, 600).poll_interval_ms, MIN_POLL_INTERVAL_MS);
        assert_eq!(ConfirmationPolicy::new(2000, 600).poll_interval_ms, 2000);
    }

    #[test]
    fn test_receipt_after_a_few_polls() {
        let policy = ConfirmationPolicy::new(2000, 600);
        let polls = Cell::new(0);
        let sleeps = RefCell::new(Vec::new());

        let result = block_on(wait_for_receipt(
            &policy,
            "0xabc",
            || {
                polls.set(polls.get() + 1);
                ready(Ok(if polls.get() < 3 { None } else { Some(receipt(true)) }))
            },
            |ms| {
                sleeps.borrow_mut().push(ms);
                ready(())
            },
        ));

        assert_eq!(result, Ok(receipt(true)));
        assert_eq!(polls.get(), 3);
        assert_eq!(*sleeps.borrow(), vec![2000, 2000]);
    }

    #[test]
    fn test_times_out_without_receipt() {
        // 1s con el intervalo mínimo: 4 esperas de 250ms y un último intento
        let policy = ConfirmationPolicy::new(1, 1);
        let polls = Cell::new(0);
        let sleeps = RefCell::new(Vec::new());

        let result = block_on(wait_for_receipt(
            &policy,
            "0xabc",
            || {
                polls.set(polls.get() + 1);
                ready(Ok(None))
            },
            |ms| {
                sleeps.borrow_mut().push(ms);
                ready(())
            },
        ));

        assert_eq!(
            result,
            Err(WalletError::ConfirmationTimeout {
                tx_hash: "0xabc".to_string(),
                seconds: 1,
            })
        );
        assert_eq!(polls.get(), 5);
        assert_eq!(*sleeps.borrow(), vec![250, 250, 250, 250]);
    }

    #[test]
    fn test_reverted_receipt_is_a_chain_failure() {
        let policy = ConfirmationPolicy::new(2000, 600);
        let result = block_on(wait_for_receipt(&policy, "0xabc", || ready(Ok(Some(receipt(false)))), |_| ready(())));
        assert!(matches!(result, Err(WalletError::ChainCallFailure(_))));
    }

    #[test]
    fn test_fetch_error_propagates() {
        let policy = ConfirmationPolicy::new(2000, 600);
        let result = block_on(wait_for_receipt(
            &policy,
            "0xabc",
            || ready(Err(WalletError::ChainCallFailure("node down".to_string()))),
            |_| ready(()),
        ));
        assert_eq!(result, Err(WalletError::ChainCallFailure("node down".to_string())));
    }
}
