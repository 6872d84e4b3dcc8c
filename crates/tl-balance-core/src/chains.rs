use tl_api_types::ChainId;

pub const MAINNET: ChainId = ChainId(1);
pub const GOERLI: ChainId = ChainId(5);
pub const ARBITRUM: ChainId = ChainId(42161);

/// Metadata for one configured network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainInfo {
    pub id: ChainId,
    pub name: &'static str,
    pub explorer_url: &'static str,
    pub icon: &'static str,
    pub native_symbol: &'static str,
}

/// Every network offered in the switcher, in display order.
pub const DIRECTORY: &[ChainInfo] = &[
    ChainInfo {
        id: MAINNET,
        name: "Ethereum",
        explorer_url: "https://etherscan.io",
        icon: "assets/Ethereum.svg",
        native_symbol: "ETH",
    },
    ChainInfo {
        id: GOERLI,
        name: "Goerli",
        explorer_url: "https://goerli.etherscan.io",
        icon: "assets/Ethereum-ETH-icon.png",
        native_symbol: "ETH",
    },
    ChainInfo {
        id: ARBITRUM,
        name: "Arbitrum One",
        explorer_url: "https://arbiscan.io",
        icon: "assets/arbitrum.png",
        native_symbol: "ETH",
    },
];

pub fn chain_info(id: ChainId) -> Option<&'static ChainInfo> {
    DIRECTORY.iter().find(|chain| chain.id == id)
}

/// Transient record of the wallet-reported network.
///
/// `chain_id()` is the address-lookup key and falls back to mainnet when the
/// wallet reports nothing. Display metadata comes only from an actually
/// reported, known chain: anything else surfaces as "Unknown" instead of
/// being silently remapped.
#[derive(Debug, Clone, Default)]
pub struct ChainTracker {
    reported: Option<ChainId>,
}

impl ChainTracker {
    /// Re-derive the current chain from what the wallet reports. Called on
    /// modal close and on network-change notifications.
    pub fn reset(&mut self, reported: Option<ChainId>) {
        self.reported = reported;
    }

    pub fn chain_id(&self) -> ChainId {
        self.reported.unwrap_or(MAINNET)
    }

    pub fn info(&self) -> Option<&'static ChainInfo> {
        self.reported.and_then(chain_info)
    }

    pub fn display_name(&self) -> &'static str {
        self.info().map(|chain| chain.name).unwrap_or("Unknown")
    }

    pub fn explorer_url(&self) -> Option<&'static str> {
        self.info().map(|chain| chain.explorer_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_mainnet_when_nothing_is_reported() {
        let tracker = ChainTracker::default();
        assert_eq!(tracker.chain_id(), MAINNET);
        assert_eq!(tracker.display_name(), "Unknown");
        assert_eq!(tracker.explorer_url(), None);
    }

    #[test]
    fn tracks_a_reported_known_chain() {
        let mut tracker = ChainTracker::default();
        tracker.reset(Some(ARBITRUM));
        assert_eq!(tracker.chain_id(), ARBITRUM);
        assert_eq!(tracker.display_name(), "Arbitrum One");
        assert_eq!(tracker.explorer_url(), Some("https://arbiscan.io"));
    }

    #[test]
    fn surfaces_unknown_for_off_directory_chains() {
        let mut tracker = ChainTracker::default();
        tracker.reset(Some(ChainId(10)));
        // The id is kept for address lookups, the name is not guessed.
        assert_eq!(tracker.chain_id(), ChainId(10));
        assert_eq!(tracker.display_name(), "Unknown");
    }

    #[test]
    fn reset_clears_a_previous_chain() {
        let mut tracker = ChainTracker::default();
        tracker.reset(Some(GOERLI));
        tracker.reset(None);
        assert_eq!(tracker.chain_id(), MAINNET);
        assert_eq!(tracker.display_name(), "Unknown");
    }
}
