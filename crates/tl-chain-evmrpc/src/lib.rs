//! Ethereum JSON-RPC balance adapter.
//!
//! Implements `BalanceSource` against plain `eth_getBalance` /
//! `eth_call` requests. `reqwest` drives HTTP both natively and on
//! wasm32, where it compiles down to `fetch`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use tl_api_types::{AccountAddress, ChainId};
use tl_chain_client::{BalanceRequest, BalanceResult, BalanceSource};
use tracing::debug;

/// `balanceOf(address)` selector.
const BALANCE_OF: &str = "70a08231";
/// `decimals()` selector.
const DECIMALS: &str = "313ce567";

/// Decimals of every chain's base currency.
pub const NATIVE_DECIMALS: u32 = 18;

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("no RPC endpoint configured for chain {0}")]
    UnknownChain(ChainId),
    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },
    #[error("malformed response: {0}")]
    Malformed(String),
}

#[derive(Debug, Serialize)]
struct RpcCall<'a> {
    jsonrpc: &'static str,
    id: u32,
    method: &'a str,
    params: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct RpcReply {
    result: Option<String>,
    error: Option<RpcReplyError>,
}

#[derive(Debug, Deserialize)]
struct RpcReplyError {
    code: i64,
    message: String,
}

/// Read-only balance client with one RPC endpoint per chain.
pub struct EvmRpcSource {
    endpoints: HashMap<ChainId, String>,
    http: reqwest::Client,
}

impl Default for EvmRpcSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EvmRpcSource {
    /// Public endpoints for the three directory chains.
    pub fn new() -> Self {
        Self::with_endpoints(HashMap::from([
            (ChainId(1), "https://cloudflare-eth.com".to_owned()),
            (ChainId(5), "https://rpc.ankr.com/eth_goerli".to_owned()),
            (ChainId(42161), "https://arb1.arbitrum.io/rpc".to_owned()),
        ]))
    }

    pub fn with_endpoints(endpoints: HashMap<ChainId, String>) -> Self {
        Self {
            endpoints,
            http: reqwest::Client::new(),
        }
    }

    pub fn set_endpoint(&mut self, chain: ChainId, url: impl Into<String>) {
        self.endpoints.insert(chain, url.into());
    }

    fn endpoint(&self, chain: ChainId) -> Result<&str, RpcError> {
        self.endpoints
            .get(&chain)
            .map(String::as_str)
            .ok_or(RpcError::UnknownChain(chain))
    }

    async fn call(
        &self,
        chain: ChainId,
        method: &str,
        params: serde_json::Value,
    ) -> Result<String, RpcError> {
        let endpoint = self.endpoint(chain)?;
        debug!(%chain, method, "rpc call");

        let reply: RpcReply = self
            .http
            .post(endpoint)
            .json(&RpcCall {
                jsonrpc: "2.0",
                id: 1,
                method,
                params,
            })
            .send()
            .await?
            .json()
            .await?;

        if let Some(error) = reply.error {
            return Err(RpcError::Rpc {
                code: error.code,
                message: error.message,
            });
        }
        reply
            .result
            .ok_or_else(|| RpcError::Malformed("neither result nor error".to_owned()))
    }

    async fn eth_call(
        &self,
        chain: ChainId,
        contract: &str,
        data: String,
    ) -> Result<String, RpcError> {
        self.call(
            chain,
            "eth_call",
            serde_json::json!([{ "to": contract, "data": data }, "latest"]),
        )
        .await
    }

    async fn erc20_decimals(&self, chain: ChainId, contract: &str) -> Result<u32, RpcError> {
        let raw = self
            .eth_call(chain, contract, format!("0x{DECIMALS}"))
            .await?;
        Ok(parse_hex_quantity(&raw)? as u32)
    }

    async fn erc20_balance(
        &self,
        chain: ChainId,
        contract: &str,
        account: &AccountAddress,
    ) -> Result<(u128, u32), RpcError> {
        let decimals = self.erc20_decimals(chain, contract).await?;
        let raw = self
            .eth_call(chain, contract, balance_of_calldata(&account.0))
            .await?;
        Ok((parse_hex_quantity(&raw)?, decimals))
    }

    async fn native_balance(
        &self,
        chain: ChainId,
        account: &AccountAddress,
    ) -> Result<(u128, u32), RpcError> {
        let raw = self
            .call(
                chain,
                "eth_getBalance",
                serde_json::json!([account.0, "latest"]),
            )
            .await?;
        Ok((parse_hex_quantity(&raw)?, NATIVE_DECIMALS))
    }
}

#[async_trait(?Send)]
impl BalanceSource for EvmRpcSource {
    async fn fetch_balance(&self, req: BalanceRequest) -> anyhow::Result<BalanceResult> {
        let (raw, decimals) = match &req.contract {
            Some(contract) => self.erc20_balance(req.chain, contract, &req.account).await?,
            None => self.native_balance(req.chain, &req.account).await?,
        };

        Ok(BalanceResult {
            account: req.account,
            chain: req.chain,
            formatted: format_units(raw, decimals),
        })
    }
}

/// ABI-encode a `balanceOf(address)` call: selector plus the address
/// left-padded to 32 bytes.
fn balance_of_calldata(account: &str) -> String {
    let bare = account
        .strip_prefix("0x")
        .unwrap_or(account)
        .to_lowercase();
    format!("0x{BALANCE_OF}{bare:0>64}")
}

fn parse_hex_quantity(hex: &str) -> Result<u128, RpcError> {
    let bare = hex.strip_prefix("0x").unwrap_or(hex);
    if bare.is_empty() {
        return Ok(0);
    }
    // eth_call returns a 32-byte word; keep the low 16 bytes.
    let bare = if bare.len() > 32 {
        let (high, low) = bare.split_at(bare.len() - 32);
        if high.bytes().any(|b| b != b'0') {
            return Err(RpcError::Malformed(format!("quantity overflows u128: {hex}")));
        }
        low
    } else {
        bare
    };
    u128::from_str_radix(bare, 16)
        .map_err(|_| RpcError::Malformed(format!("not a hex quantity: {hex}")))
}

/// Scale a raw integer amount down by `decimals`, trimming the fraction.
fn format_units(raw: u128, decimals: u32) -> String {
    // u128 holds 10^38.
    let decimals = decimals.min(38);
    if decimals == 0 {
        return raw.to_string();
    }
    let scale = 10u128.pow(decimals);
    let whole = raw / scale;
    let fraction = raw % scale;
    if fraction == 0 {
        return whole.to_string();
    }
    let fraction = format!("{fraction:0width$}", width = decimals as usize);
    format!("{whole}.{}", fraction.trim_end_matches('0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_of_calldata_pads_the_address() {
        let data = balance_of_calldata("0xdAC17F958D2ee523a2206206994597C13D831ec7");
        assert_eq!(
            data,
            "0x70a08231000000000000000000000000dac17f958d2ee523a2206206994597c13d831ec7"
        );
        assert_eq!(data.len(), 2 + 8 + 64);
    }

    #[test]
    fn hex_quantities_parse() {
        assert_eq!(parse_hex_quantity("0x0").unwrap(), 0);
        assert_eq!(parse_hex_quantity("0x").unwrap(), 0);
        assert_eq!(parse_hex_quantity("0xde0b6b3a7640000").unwrap(), 10u128.pow(18));
        assert!(parse_hex_quantity("0xnope").is_err());
    }

    #[test]
    fn call_words_keep_the_low_sixteen_bytes() {
        let word = format!("0x{:0>64}", "de0b6b3a7640000");
        assert_eq!(parse_hex_quantity(&word).unwrap(), 10u128.pow(18));

        let overflow = format!("0x1{:0>63}", "0");
        assert!(matches!(
            parse_hex_quantity(&overflow),
            Err(RpcError::Malformed(_))
        ));
    }

    #[test]
    fn units_scale_and_trim() {
        assert_eq!(format_units(1_234_500_000_000_000_000, 18), "1.2345");
        assert_eq!(format_units(0, 18), "0");
        assert_eq!(format_units(5, 0), "5");
        assert_eq!(format_units(1, 6), "0.000001");
        assert_eq!(format_units(1_000_000, 6), "1");
    }

    #[test]
    fn unknown_chains_have_no_endpoint() {
        let source = EvmRpcSource::new();
        assert!(source.endpoint(ChainId(1)).is_ok());
        assert!(matches!(
            source.endpoint(ChainId(123_456)),
            Err(RpcError::UnknownChain(_))
        ));
    }

    #[test]
    fn endpoints_can_be_overridden() {
        let mut source = EvmRpcSource::new();
        source.set_endpoint(ChainId(1), "http://localhost:8545");
        assert_eq!(source.endpoint(ChainId(1)).unwrap(), "http://localhost:8545");
    }
}
