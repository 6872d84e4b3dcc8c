//! The static token list rendered by the UI.
//!
//! Declaration order is render order. Contract addresses cover the three
//! directory chains; ETH is the native coin and has none.

use crate::chains::{ARBITRUM, GOERLI, MAINNET};
use crate::token::{AddressBook, Token};
use std::collections::HashMap;
use tl_api_types::ChainId;

fn per_chain(entries: [(ChainId, &str); 3]) -> AddressBook {
    AddressBook::PerChain(HashMap::from(
        entries.map(|(chain, address)| (chain, address.to_owned())),
    ))
}

pub fn default_tokens() -> Vec<Token> {
    vec![
        Token::new(
            "USDT",
            "Tether USD",
            per_chain([
                (MAINNET, "0xdAC17F958D2ee523a2206206994597C13D831ec7"),
                (GOERLI, "0xdAC17F958D2ee523a2206206994597C13D831ec7"),
                (ARBITRUM, "0xFd086bC7CD5C481DCC9C85ebE478A1C0b69FCbb9"),
            ]),
            ethplorer_token_image("tether"),
        ),
        Token::new(
            "DAI",
            "Dai Stablecoin",
            per_chain([
                (MAINNET, "0x6B175474E89094C44Da98b954EedeAC495271d0F"),
                (GOERLI, "0x6B175474E89094C44Da98b954EedeAC495271d0F"),
                (ARBITRUM, "0xDA10009cBd5D07dd0CeCc66161FC93D7c9000da1"),
            ]),
            ethplorer_token_image("mcd-dai"),
        ),
        Token::new(
            "USDC",
            "USD Coin",
            per_chain([
                (MAINNET, "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"),
                (GOERLI, "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"),
                (ARBITRUM, "0xFF970A61A04b1cA14834A43f5dE4533eBDDB5CC8"),
            ]),
            ethplorer_token_image("usdc"),
        ),
        Token::new(
            "ETH",
            "Ethereum",
            AddressBook::Native,
            ethplorer_token_image("eth"),
        ),
        Token::new(
            "WETH",
            "Wrapped Ether",
            per_chain([
                (MAINNET, "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
                (GOERLI, "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
                (ARBITRUM, "0x82aF49447D8a07e3bd95BD0d56f35241523fBab1"),
            ]),
            etherscan_token_image("weth_28"),
        ),
        Token::new(
            "ARB",
            "Arbitrum",
            per_chain([
                (MAINNET, "0xB50721BCf8d664c30412Cfbc6cf7a15145234ad1"),
                (GOERLI, "0xB50721BCf8d664c30412Cfbc6cf7a15145234ad1"),
                (ARBITRUM, "0x912CE59144191C1204E64559FE8253a0e49E6548"),
            ]),
            etherscan_token_image("arbitrumone2_32"),
        ),
    ]
}

pub fn etherscan_token_image(name: &str) -> String {
    format!("https://etherscan.io/token/images/{name}.png")
}

pub fn ethplorer_token_image(name: &str) -> String {
    format!("https://ethplorer.io/images/{name}.png")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_order_is_stable() {
        let symbols: Vec<String> = default_tokens()
            .iter()
            .map(|token| token.symbol.0.clone())
            .collect();
        assert_eq!(symbols, ["USDT", "DAI", "USDC", "ETH", "WETH", "ARB"]);
    }

    #[test]
    fn only_eth_is_native() {
        for token in default_tokens() {
            assert_eq!(token.addresses.is_native(), token.symbol.0 == "ETH");
        }
    }

    #[test]
    fn every_contract_token_resolves_on_the_directory_chains() {
        for token in default_tokens() {
            if token.addresses.is_native() {
                continue;
            }
            for chain in [MAINNET, GOERLI, ARBITRUM] {
                assert!(
                    token.addresses.resolve(chain).is_some(),
                    "{} has no address on chain {chain}",
                    token.symbol
                );
            }
        }
    }

    #[test]
    fn quantities_start_at_zero() {
        assert!(default_tokens().iter().all(|token| token.quantity == "0"));
    }
}
