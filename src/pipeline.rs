use solana_sdk::{pubkey::Pubkey, signature::Keypair, signer::Signer};

use crate::{
    config::Config,
    error::Error,
    explorer,
    funding::airdrop_if_required,
    mint::mint_nft,
    rpc::LedgerRpc,
};

/// One successfully minted NFT, as reported to the user.
#[derive(Debug, Clone)]
pub struct MintReport {
    pub name: String,
    pub address: Pubkey,
    pub explorer_url: String,
}

/// Result of a full pipeline run. A failure aborts the run but does not
/// undo earlier mints, so `minted` can be non-empty alongside `failure`.
pub struct PipelineOutcome {
    pub minted: Vec<MintReport>,
    pub failure: Option<Error>,
}

impl PipelineOutcome {
    fn failed(minted: Vec<MintReport>, failure: Error) -> Self {
        PipelineOutcome {
            minted,
            failure: Some(failure),
        }
    }

    /// Collapses the outcome for callers that only care about full success.
    pub fn into_result(self) -> Result<Vec<MintReport>, Error> {
        match self.failure {
            Some(err) => Err(err),
            None => Ok(self.minted),
        }
    }
}

/// Runs the whole flow: ensure the user is funded, then mint each
/// configured NFT strictly in order. The next mint is not submitted until
/// the previous one has confirmed and its asset record has been fetched.
pub async fn run<R: LedgerRpc>(rpc: &R, config: &Config, user: &Keypair) -> PipelineOutcome {
    let collection = match config.collection_pubkey() {
        Ok(collection) => collection,
        Err(err) => return PipelineOutcome::failed(Vec::new(), err),
    };

    match airdrop_if_required(
        rpc,
        &user.pubkey(),
        config.airdrop_lamports,
        config.minimum_balance_lamports,
    )
    .await
    {
        Ok(balance) => println!("Balance: {} lamports", balance),
        Err(err) => return PipelineOutcome::failed(Vec::new(), err),
    }

    let mut minted = Vec::with_capacity(config.nfts.len());
    for spec in &config.nfts {
        println!("Creating {}...", spec.name);

        // Fresh keypair per NFT; its public key becomes the mint address.
        let mint_signer = Keypair::new();
        match mint_nft(rpc, user, &mint_signer, spec, &collection).await {
            Ok(created) => {
                let explorer_url = explorer::address_url(config.cluster, &created.mint);
                println!("Created {}! Address is {}", spec.name, explorer_url);
                minted.push(MintReport {
                    name: spec.name.clone(),
                    address: created.mint,
                    explorer_url,
                });
            }
            Err(err) => return PipelineOutcome::failed(minted, err),
        }
    }

    PipelineOutcome {
        minted,
        failure: None,
    }
}
