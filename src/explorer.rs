use solana_sdk::pubkey::Pubkey;

use crate::config::Cluster;

/// Browsable Solana Explorer link for an account address on `cluster`.
pub fn address_url(cluster: Cluster, address: &Pubkey) -> String {
    match cluster.explorer_query() {
        Some(query) => format!("https://explorer.solana.com/address/{address}?cluster={query}"),
        None => format!("https://explorer.solana.com/address/{address}"),
    }
}
