use std::collections::HashMap;
use tl_api_types::{ChainId, TokenSymbol};

/// Where a token's contract lives, per chain.
///
/// One lookup covers the three historical cases: the native coin (no
/// contract anywhere), a contract deployed at the same address on every
/// supported chain, and a contract whose address differs per chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressBook {
    /// The chain's base currency; balance queries go without a contract.
    Native,
    /// Same contract address on every supported chain.
    Fixed(String),
    /// Contract address keyed by chain id. Chains not in the map resolve to
    /// `None`, which falls back to a native-asset lookup.
    PerChain(HashMap<ChainId, String>),
}

impl AddressBook {
    pub fn resolve(&self, chain: ChainId) -> Option<&str> {
        match self {
            AddressBook::Native => None,
            AddressBook::Fixed(address) => Some(address),
            AddressBook::PerChain(map) => map.get(&chain).map(String::as_str),
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, AddressBook::Native)
    }
}

/// One catalog entry with its last known balance.
#[derive(Debug, Clone)]
pub struct Token {
    pub symbol: TokenSymbol,
    pub long_name: String,
    pub addresses: AddressBook,
    /// Formatted decimal balance. Starts at `"0"` and is overwritten in
    /// place on every refresh; a failed lookup leaves it untouched.
    pub quantity: String,
    pub image: String,
}

impl Token {
    pub fn new(
        symbol: &str,
        long_name: &str,
        addresses: AddressBook,
        image: String,
    ) -> Token {
        Token {
            symbol: TokenSymbol::from(symbol),
            long_name: long_name.to_owned(),
            addresses,
            quantity: "0".to_owned(),
            image,
        }
    }
}
