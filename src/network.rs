//! Supported EVM networks
//!
//! The set is closed: every network the builder can target has a row in
//! [`NETWORKS`], and lookups for anything else fail with
//! [`WasmEvmError::UnsupportedNetwork`].

use crate::error::WasmEvmError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Network identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Network {
    EthereumMainnet,
    EthereumSepolia,
    MonadTestnet,
    SomniaTestnet,
}

/// Fixed per-network constants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkParams {
    pub network: Network,
    /// EIP-155 chain id
    pub chain_id: u64,
    /// Display name (e.g., "Ethereum Mainnet")
    pub chain_name: &'static str,
    /// Native currency symbol (e.g., "ETH")
    pub currency: &'static str,
    /// Decimal exponent between the display unit and the smallest unit
    pub decimals: u32,
    pub testnet: bool,
    /// Name of the LLM tool that targets this network
    pub tool_name: &'static str,
}

pub const NETWORKS: [NetworkParams; 4] = [
    NetworkParams {
        network: Network::EthereumMainnet,
        chain_id: 1,
        chain_name: "Ethereum Mainnet",
        currency: "ETH",
        decimals: 18,
        testnet: false,
        tool_name: "transferethereummainnet",
    },
    NetworkParams {
        network: Network::EthereumSepolia,
        chain_id: 11_155_111,
        chain_name: "Ethereum Sepolia",
        currency: "ETH",
        decimals: 18,
        testnet: true,
        tool_name: "transferethereumsepolia",
    },
    NetworkParams {
        network: Network::MonadTestnet,
        chain_id: 10_143,
        chain_name: "Monad Testnet",
        currency: "MON",
        decimals: 18,
        testnet: true,
        tool_name: "transfermonadtestnet",
    },
    NetworkParams {
        network: Network::SomniaTestnet,
        chain_id: 50_312,
        chain_name: "Somnia Testnet",
        currency: "STT",
        decimals: 18,
        testnet: true,
        tool_name: "transfersomniatestnet",
    },
];

impl Network {
    pub const ALL: [Network; 4] = [
        Network::EthereumMainnet,
        Network::EthereumSepolia,
        Network::MonadTestnet,
        Network::SomniaTestnet,
    ];

    /// Get the constant table row for this network
    pub fn params(self) -> &'static NetworkParams {
        match self {
            Network::EthereumMainnet => &NETWORKS[0],
            Network::EthereumSepolia => &NETWORKS[1],
            Network::MonadTestnet => &NETWORKS[2],
            Network::SomniaTestnet => &NETWORKS[3],
        }
    }

    pub fn chain_id(self) -> u64 {
        self.params().chain_id
    }

    pub fn chain_name(self) -> &'static str {
        self.params().chain_name
    }

    pub fn currency(self) -> &'static str {
        self.params().currency
    }

    pub fn decimals(self) -> u32 {
        self.params().decimals
    }

    /// Camel-case slug used in JSON (e.g., "ethereumMainnet")
    pub fn slug(self) -> &'static str {
        match self {
            Network::EthereumMainnet => "ethereumMainnet",
            Network::EthereumSepolia => "ethereumSepolia",
            Network::MonadTestnet => "monadTestnet",
            Network::SomniaTestnet => "somniaTestnet",
        }
    }

    pub fn from_chain_id(chain_id: u64) -> Result<Self, WasmEvmError> {
        NETWORKS
            .iter()
            .find(|p| p.chain_id == chain_id)
            .map(|p| p.network)
            .ok_or_else(|| WasmEvmError::UnsupportedNetwork(format!("chain id {}", chain_id)))
    }

    pub fn from_tool_name(name: &str) -> Result<Self, WasmEvmError> {
        NETWORKS
            .iter()
            .find(|p| p.tool_name == name)
            .map(|p| p.network)
            .ok_or_else(|| WasmEvmError::UnsupportedNetwork(name.to_string()))
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.chain_name())
    }
}

/// Accepts a slug (`ethereumMainnet`), a tool name (`transferethereummainnet`)
/// or a decimal chain id (`"1"`).
impl FromStr for Network {
    type Err = WasmEvmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(network) = Network::ALL.iter().find(|n| n.slug() == s) {
            return Ok(*network);
        }
        if let Ok(chain_id) = s.parse::<u64>() {
            return Network::from_chain_id(chain_id);
        }
        Network::from_tool_name(s)
    }
}
