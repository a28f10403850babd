use solana_sdk::pubkey::Pubkey;

use crate::{error::Error, rpc::LedgerRpc};

/// Tops up `account` from the cluster faucet when its balance is below
/// `minimum_balance` lamports, waiting for the airdrop to confirm.
/// Returns the balance after any top-up. Only works on clusters with a
/// faucet; elsewhere the airdrop request fails and the error propagates.
pub async fn airdrop_if_required<R: LedgerRpc>(
    rpc: &R,
    account: &Pubkey,
    airdrop_lamports: u64,
    minimum_balance: u64,
) -> Result<u64, Error> {
    let balance = rpc.balance(account).await?;
    if balance >= minimum_balance {
        return Ok(balance);
    }
    rpc.request_airdrop(account, airdrop_lamports).await?;
    rpc.balance(account).await
}
