//! The Balance Refresher.

use crate::token::Token;
use futures::future::join_all;
use tl_api_types::{AccountAddress, ChainId};
use tl_chain_client::{BalanceRequest, BalanceSource};
use tracing::{info, warn};

/// Re-fetch every token's balance for `account` on `chain`.
///
/// All lookups are issued concurrently and awaited jointly; results come
/// back in token order, one entry per input token. With no connected
/// account every token passes through unchanged. A failed lookup logs a
/// warning and keeps that token's previous quantity; a single failure never
/// aborts the refresh.
pub async fn refresh_balances<S: BalanceSource>(
    source: &S,
    account: Option<&AccountAddress>,
    chain: ChainId,
    tokens: &[Token],
) -> Vec<Token> {
    let lookups = tokens.iter().map(|token| async move {
        let mut token = token.clone();

        let Some(account) = account else {
            info!(symbol = %token.symbol, "not connected to a wallet");
            return token;
        };

        let request = BalanceRequest {
            account: account.clone(),
            contract: token.addresses.resolve(chain).map(str::to_owned),
            chain,
        };

        match source.fetch_balance(request).await {
            Ok(balance) => token.quantity = balance.formatted,
            Err(error) => {
                warn!(symbol = %token.symbol, %error, "could not get balance");
            }
        }

        token
    });

    join_all(lookups).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use anyhow::{Result, anyhow};
    use async_trait::async_trait;
    use std::cell::RefCell;
    use tl_chain_client::BalanceResult;

    struct FixedSource(&'static str);

    #[async_trait(?Send)]
    impl BalanceSource for FixedSource {
        async fn fetch_balance(&self, req: BalanceRequest) -> Result<BalanceResult> {
            Ok(BalanceResult {
                account: req.account,
                chain: req.chain,
                formatted: self.0.to_owned(),
            })
        }
    }

    struct FailingSource;

    #[async_trait(?Send)]
    impl BalanceSource for FailingSource {
        async fn fetch_balance(&self, _req: BalanceRequest) -> Result<BalanceResult> {
            Err(anyhow!("rpc unreachable"))
        }
    }

    /// Records the contract of every request, in arrival order.
    #[derive(Default)]
    struct RecordingSource {
        contracts: RefCell<Vec<Option<String>>>,
    }

    #[async_trait(?Send)]
    impl BalanceSource for RecordingSource {
        async fn fetch_balance(&self, req: BalanceRequest) -> Result<BalanceResult> {
            self.contracts.borrow_mut().push(req.contract.clone());
            Ok(BalanceResult {
                account: req.account,
                chain: req.chain,
                formatted: "1".to_owned(),
            })
        }
    }

    fn account() -> AccountAddress {
        AccountAddress("0x1111111111111111111111111111111111111111".to_owned())
    }

    #[tokio::test]
    async fn no_account_passes_every_token_through_unchanged() {
        let mut tokens = catalog::default_tokens();
        tokens[0].quantity = "7.5".to_owned();

        let refreshed =
            refresh_balances(&FixedSource("99"), None, ChainId(1), &tokens).await;

        assert_eq!(refreshed.len(), tokens.len());
        assert_eq!(refreshed[0].quantity, "7.5");
        assert!(refreshed[1..].iter().all(|token| token.quantity == "0"));
    }

    #[tokio::test]
    async fn failed_lookups_preserve_the_previous_quantity() {
        let mut tokens = catalog::default_tokens();
        for token in &mut tokens {
            token.quantity = "3.25".to_owned();
        }

        let refreshed =
            refresh_balances(&FailingSource, Some(&account()), ChainId(1), &tokens).await;

        assert!(refreshed.iter().all(|token| token.quantity == "3.25"));
    }

    #[tokio::test]
    async fn refresh_yields_one_entry_per_token_in_declared_order() {
        let tokens = catalog::default_tokens();

        let refreshed =
            refresh_balances(&FixedSource("2"), Some(&account()), ChainId(1), &tokens).await;

        let symbols: Vec<&str> = refreshed.iter().map(|t| t.symbol.0.as_str()).collect();
        assert_eq!(symbols, ["USDT", "DAI", "USDC", "ETH", "WETH", "ARB"]);
        assert!(refreshed.iter().all(|token| token.quantity == "2"));
    }

    #[tokio::test]
    async fn contracts_are_resolved_for_the_active_chain() {
        let tokens = catalog::default_tokens();
        let source = RecordingSource::default();

        refresh_balances(&source, Some(&account()), crate::chains::ARBITRUM, &tokens).await;

        let contracts = source.contracts.borrow();
        // Native ETH goes without a contract, everything else gets its
        // Arbitrum address.
        assert_eq!(contracts.len(), tokens.len());
        for (token, contract) in tokens.iter().zip(contracts.iter()) {
            if token.addresses.is_native() {
                assert_eq!(contract, &None);
            } else {
                assert_eq!(
                    contract.as_deref(),
                    token.addresses.resolve(crate::chains::ARBITRUM)
                );
            }
        }
    }
}
