use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use figment::{
    providers::{Format, Toml},
    Figment,
};
use serde::Deserialize;
use solana_sdk::{native_token::LAMPORTS_PER_SOL, pubkey::Pubkey};

use crate::error::Error;

/// Name of the local TOML file containing client config.
/// Adjust this if you store it in another place/name.
pub const CLIENT_CONFIG_FILE_NAME: &str = "nft-client.toml";

/// Solana cluster the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cluster {
    Devnet,
    Testnet,
    MainnetBeta,
    Localnet,
}

impl Cluster {
    /// Public RPC URL for this cluster.
    pub fn rpc_url(&self) -> &'static str {
        match self {
            Cluster::Devnet => "https://api.devnet.solana.com",
            Cluster::Testnet => "https://api.testnet.solana.com",
            Cluster::MainnetBeta => "https://api.mainnet-beta.solana.com",
            Cluster::Localnet => "http://127.0.0.1:8899",
        }
    }

    /// Value of the `?cluster=` query parameter on explorer links.
    /// Mainnet is the explorer default and takes no parameter.
    pub fn explorer_query(&self) -> Option<&'static str> {
        match self {
            Cluster::Devnet => Some("devnet"),
            Cluster::Testnet => Some("testnet"),
            Cluster::MainnetBeta => None,
            Cluster::Localnet => Some("custom"),
        }
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Cluster::Devnet => "devnet",
            Cluster::Testnet => "testnet",
            Cluster::MainnetBeta => "mainnet-beta",
            Cluster::Localnet => "localnet",
        };
        f.write_str(name)
    }
}

/// Parameters for one NFT to be minted into the collection.
#[derive(Debug, Clone, Deserialize)]
pub struct NftSpec {
    pub name: String,
    pub uri: String,
    /// Seller fee in basis points (100 = 1%).
    #[serde(default)]
    pub royalty_bps: u16,
}

/// Full client configuration. Every field has a default matching the
/// devnet walkthrough, so the config file is optional and may be partial.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Cluster to mint on.
    pub cluster: Cluster,
    /// Path to the user keypair file. Defaults to the standard CLI
    /// location under the home directory when unset.
    pub keypair_path: Option<PathBuf>,
    /// Base58 address of the pre-existing collection NFT.
    pub collection: String,
    /// Lamports requested from the faucet when the balance is low.
    pub airdrop_lamports: u64,
    /// Balance below which an airdrop is requested.
    pub minimum_balance_lamports: u64,
    /// NFTs to mint, in order.
    pub nfts: Vec<NftSpec>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            cluster: Cluster::Devnet,
            keypair_path: None,
            collection: "5f24TwSEAnWdkF4mcthLfFdytq8m9koNM7oKDbxvrSg2".to_string(),
            airdrop_lamports: LAMPORTS_PER_SOL,
            minimum_balance_lamports: LAMPORTS_PER_SOL / 2,
            nfts: vec![
                NftSpec {
                    name: "NFT 1".to_string(),
                    uri: "https://raw.githubusercontent.com/nestord23/new_nfts/main/nft1.json"
                        .to_string(),
                    royalty_bps: 0,
                },
                NftSpec {
                    name: "NFT 2".to_string(),
                    uri: "https://raw.githubusercontent.com/nestord23/new_nfts/main/nfts2.json"
                        .to_string(),
                    royalty_bps: 0,
                },
            ],
        }
    }
}

impl Config {
    /// Loads the config from a TOML file, falling back to the built-in
    /// defaults when the file does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Config::default());
        }
        Figment::from(Toml::file(path))
            .extract()
            .map_err(|source| Error::Config {
                path: path.to_path_buf(),
                source,
            })
    }

    /// The collection address parsed into a `Pubkey`.
    pub fn collection_pubkey(&self) -> Result<Pubkey, Error> {
        Pubkey::from_str(&self.collection).map_err(|_| Error::InvalidAddress {
            field: "collection",
            value: self.collection.clone(),
        })
    }
}
