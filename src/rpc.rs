use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig, hash::Hash, pubkey::Pubkey, signature::Signature,
    transaction::Transaction,
};
use tokio::time::Duration;

use crate::{config::Cluster, error::Error};

/// How long to poll for an airdrop signature before giving up.
const AIRDROP_POLL_ATTEMPTS: usize = 30;
const AIRDROP_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// The cluster operations the mint pipeline needs. One production
/// implementation wraps the Solana RPC client; tests substitute their own
/// to observe call ordering and inject faucet or submission failures.
#[async_trait]
pub trait LedgerRpc {
    /// Current balance of `account` in lamports.
    async fn balance(&self, account: &Pubkey) -> Result<u64, Error>;

    /// Requests `lamports` from the cluster faucet and waits until the
    /// airdrop transaction confirms.
    async fn request_airdrop(&self, account: &Pubkey, lamports: u64) -> Result<(), Error>;

    /// A recent blockhash for signing a new transaction.
    async fn latest_blockhash(&self) -> Result<Hash, Error>;

    /// Submits a signed transaction and waits for confirmation.
    async fn send_and_confirm(&self, transaction: &Transaction) -> Result<Signature, Error>;

    /// Raw account data at `address`.
    async fn account_data(&self, address: &Pubkey) -> Result<Vec<u8>, Error>;
}

/// Production `LedgerRpc` backed by a single nonblocking RPC handle at
/// confirmed commitment. Created once at startup and held for the whole
/// process; errors are not retried here.
pub struct RpcLedger {
    client: RpcClient,
}

impl RpcLedger {
    pub fn connect(cluster: Cluster) -> Self {
        let client = RpcClient::new_with_commitment(
            cluster.rpc_url().to_string(),
            CommitmentConfig::confirmed(),
        );
        RpcLedger { client }
    }
}

#[async_trait]
impl LedgerRpc for RpcLedger {
    async fn balance(&self, account: &Pubkey) -> Result<u64, Error> {
        Ok(self.client.get_balance(account).await?)
    }

    async fn request_airdrop(&self, account: &Pubkey, lamports: u64) -> Result<(), Error> {
        let signature = self.client.request_airdrop(account, lamports).await?;
        for _ in 0..AIRDROP_POLL_ATTEMPTS {
            if self.client.confirm_transaction(&signature).await? {
                return Ok(());
            }
            tokio::time::sleep(AIRDROP_POLL_INTERVAL).await;
        }
        Err(Error::AirdropUnconfirmed {
            account: *account,
            lamports,
        })
    }

    async fn latest_blockhash(&self) -> Result<Hash, Error> {
        Ok(self.client.get_latest_blockhash().await?)
    }

    async fn send_and_confirm(&self, transaction: &Transaction) -> Result<Signature, Error> {
        Ok(self.client.send_and_confirm_transaction(transaction).await?)
    }

    async fn account_data(&self, address: &Pubkey) -> Result<Vec<u8>, Error> {
        Ok(self.client.get_account(address).await?.data)
    }
}
