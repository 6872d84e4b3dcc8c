use anyhow::Result;
use async_trait::async_trait;
use tl_api_types::{AccountAddress, ChainId};

/// One balance lookup: an account, an optional token contract, a chain.
/// `contract: None` queries the chain's native asset.
#[derive(Debug, Clone)]
pub struct BalanceRequest {
    pub account: AccountAddress,
    pub contract: Option<String>,
    pub chain: ChainId,
}

/// A resolved balance, already scaled to a human decimal string
/// (the wire format of the upstream balance API).
#[derive(Debug, Clone)]
pub struct BalanceResult {
    pub account: AccountAddress,
    pub chain: ChainId,
    pub formatted: String,
}

/// Read-only balance API. Consumed, not implemented: adapters wrap whatever
/// RPC the deployment points at.
///
/// `?Send` because the browser event loop is single threaded and wasm
/// adapter futures are not `Send`.
#[async_trait(?Send)]
pub trait BalanceSource {
    async fn fetch_balance(&self, req: BalanceRequest) -> Result<BalanceResult>;
}

/// Notifications published by the wallet-connection library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    AccountConnected,
    AccountDisconnected,
    ModalClosed,
    ChainChanged,
}

impl SessionEvent {
    /// Parse the upstream event name. Unknown names are ignored by callers.
    pub fn parse(name: &str) -> Option<SessionEvent> {
        match name {
            "ACCOUNT_CONNECTED" => Some(SessionEvent::AccountConnected),
            "ACCOUNT_DISCONNECTED" => Some(SessionEvent::AccountDisconnected),
            "MODAL_CLOSED" => Some(SessionEvent::ModalClosed),
            "CHAIN_CHANGED" => Some(SessionEvent::ChainChanged),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_session_events() {
        assert_eq!(
            SessionEvent::parse("ACCOUNT_CONNECTED"),
            Some(SessionEvent::AccountConnected)
        );
        assert_eq!(
            SessionEvent::parse("MODAL_CLOSED"),
            Some(SessionEvent::ModalClosed)
        );
        assert_eq!(SessionEvent::parse("SOMETHING_ELSE"), None);
    }
}
