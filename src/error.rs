use std::path::PathBuf;

use solana_sdk::pubkey::Pubkey;

/// Everything that can go wrong while minting. Each variant maps to one
/// failure source: local configuration, local key material, the RPC
/// endpoint, the devnet faucet, or the fetched metadata account.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not load config from {path}: {source}")]
    Config {
        path: PathBuf,
        source: figment::Error,
    },

    #[error("invalid {field} address `{value}`")]
    InvalidAddress { field: &'static str, value: String },

    #[error("failed to read keypair file {path}: {message}")]
    Keypair { path: PathBuf, message: String },

    #[error("rpc request failed: {0}")]
    Rpc(#[from] solana_client::client_error::ClientError),

    #[error("airdrop of {lamports} lamports to {account} did not confirm in time")]
    AirdropUnconfirmed { account: Pubkey, lamports: u64 },

    #[error("metadata account {address} could not be decoded: {source}")]
    MetadataDecode {
        address: Pubkey,
        source: std::io::Error,
    },
}
