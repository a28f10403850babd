use solana_nft_client::{
    config::{Config, CLIENT_CONFIG_FILE_NAME},
    keys::{default_keypair_path, load_keypair},
    pipeline, Error, RpcLedger,
};
use solana_sdk::signer::Signer;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // -------------------------------------------------------------------------
    // Load config and connect to the cluster
    // -------------------------------------------------------------------------
    let config = Config::load(CLIENT_CONFIG_FILE_NAME)?;
    let rpc = RpcLedger::connect(config.cluster);
    println!("Connected to {} at {}", config.cluster, config.cluster.rpc_url());

    // -------------------------------------------------------------------------
    // Load the user keypair
    // -------------------------------------------------------------------------
    let keypair_path = config
        .keypair_path
        .clone()
        .unwrap_or_else(default_keypair_path);
    let user = load_keypair(&keypair_path)?;
    println!("Loaded user {}", user.pubkey());

    // -------------------------------------------------------------------------
    // Fund the user and mint every configured NFT, strictly in order
    // -------------------------------------------------------------------------
    let outcome = pipeline::run(&rpc, &config, &user).await;
    if let Some(err) = outcome.failure {
        return Err(err);
    }

    println!("Minted {} NFTs into collection {}", outcome.minted.len(), config.collection);
    Ok(())
}
