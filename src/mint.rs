use mpl_token_metadata::{
    accounts::{MasterEdition, Metadata},
    instructions::CreateV1Builder,
    types::{Collection, PrintSupply, TokenStandard},
};
use solana_sdk::{
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
    transaction::Transaction,
};

use crate::{config::NftSpec, error::Error, rpc::LedgerRpc};

/// A confirmed mint: the new token's address, the transaction signature,
/// and the metadata account fetched back from the chain.
pub struct CreatedNft {
    pub mint: Pubkey,
    pub signature: Signature,
    pub metadata: Metadata,
}

/// Builds the Token Metadata `CreateV1` instruction for one NFT.
///
/// Collection membership is submitted unverified; verifying it is a
/// separate instruction signed by the collection authority and is not
/// part of this flow.
pub fn create_nft_instruction(
    spec: &NftSpec,
    mint: &Pubkey,
    payer: &Pubkey,
    collection: &Pubkey,
) -> Instruction {
    let (metadata_pda, _) = Metadata::find_pda(mint);
    let (master_edition_pda, _) = MasterEdition::find_pda(mint);

    CreateV1Builder::new()
        .metadata(metadata_pda)
        .master_edition(Some(master_edition_pda))
        .mint(*mint, true)
        .authority(*payer)
        .payer(*payer)
        .update_authority(*payer, true)
        .is_mutable(true)
        .primary_sale_happened(false)
        .name(spec.name.clone())
        .uri(spec.uri.clone())
        .seller_fee_basis_points(spec.royalty_bps)
        .token_standard(TokenStandard::NonFungible)
        .collection(Collection {
            verified: false,
            key: *collection,
        })
        .print_supply(PrintSupply::Zero)
        .instruction()
}

/// Mints one NFT: sign with the payer and the fresh mint keypair, submit,
/// wait for confirmation, then fetch the resulting metadata account.
pub async fn mint_nft<R: LedgerRpc>(
    rpc: &R,
    payer: &Keypair,
    mint_signer: &Keypair,
    spec: &NftSpec,
    collection: &Pubkey,
) -> Result<CreatedNft, Error> {
    let mint = mint_signer.pubkey();
    let instruction = create_nft_instruction(spec, &mint, &payer.pubkey(), collection);

    let blockhash = rpc.latest_blockhash().await?;
    let transaction = Transaction::new_signed_with_payer(
        &[instruction],
        Some(&payer.pubkey()),
        &[payer, mint_signer],
        blockhash,
    );
    let signature = rpc.send_and_confirm(&transaction).await?;

    let metadata = fetch_digital_asset(rpc, &mint).await?;
    Ok(CreatedNft {
        mint,
        signature,
        metadata,
    })
}

/// Fetches and decodes the metadata account for `mint`.
pub async fn fetch_digital_asset<R: LedgerRpc>(rpc: &R, mint: &Pubkey) -> Result<Metadata, Error> {
    let (metadata_pda, _) = Metadata::find_pda(mint);
    let data = rpc.account_data(&metadata_pda).await?;
    Metadata::safe_deserialize(&data).map_err(|source| Error::MetadataDecode {
        address: metadata_pda,
        source,
    })
}
