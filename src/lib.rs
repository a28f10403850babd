//! Client for minting NFTs into an existing Metaplex collection on a
//! Solana cluster. The heavy lifting (signing, transaction encoding, RPC
//! transport, Token Metadata program semantics) is delegated to
//! `solana-sdk`, `solana-client`, and `mpl-token-metadata`; this crate
//! orchestrates the flow: connect, fund, mint each configured NFT in
//! order, and report explorer links.

pub mod config;
pub mod error;
pub mod explorer;
pub mod funding;
pub mod keys;
pub mod mint;
pub mod pipeline;
pub mod rpc;

pub use config::{Cluster, Config, NftSpec};
pub use error::Error;
pub use pipeline::{run, MintReport, PipelineOutcome};
pub use rpc::{LedgerRpc, RpcLedger};
