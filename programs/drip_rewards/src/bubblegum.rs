//! Bubblegum glue shared by the instructions that move cNFT leaves.

use anchor_lang::prelude::*;
use mpl_bubblegum::hash::hash_metadata;
use mpl_bubblegum::instructions::{TransferCpi, TransferCpiAccounts, TransferInstructionArgs};
use mpl_bubblegum::types::MetadataArgs;

use crate::errors::DripError;
use crate::state::AnchorMetadataArgs;

/// Rehash the caller-supplied metadata and check it against the leaf's data
/// hash, then check its collection against the pool's allow list.
///
/// A pool with a non-empty allow list only takes leaves whose collection is
/// verified and listed. A pool with an empty list takes any leaf, but a
/// collection claim must still be verified.
pub fn verify_leaf_metadata(
    metadata: AnchorMetadataArgs,
    data_hash: &[u8; 32],
    collections: &[Pubkey],
) -> Result<()> {
    let metadata: MetadataArgs = metadata.into();

    let incoming = hash_metadata(&metadata).map_err(|_| error!(DripError::InvalidDataHash))?;
    require!(incoming == *data_hash, DripError::InvalidDataHash);

    match &metadata.collection {
        Some(collection) => require!(
            collection.verified
                && (collections.is_empty() || collections.contains(&collection.key)),
            DripError::InvalidCollection
        ),
        None => require!(collections.is_empty(), DripError::InvalidCollection),
    }
    Ok(())
}

/// Accounts every Bubblegum transfer needs besides the two owners.
pub struct TreeAccounts<'info> {
    pub bubblegum_program: AccountInfo<'info>,
    pub tree_config: AccountInfo<'info>,
    pub merkle_tree: AccountInfo<'info>,
    pub log_wrapper: AccountInfo<'info>,
    pub compression_program: AccountInfo<'info>,
    pub system_program: AccountInfo<'info>,
}

/// Transfer a leaf from `leaf_owner` to `new_leaf_owner`. Proof nodes are
/// forwarded from `proof`. Pass `signer_seeds` when the owner is a PDA.
pub fn transfer_leaf<'info>(
    tree: &TreeAccounts<'info>,
    leaf_owner: &AccountInfo<'info>,
    new_leaf_owner: &AccountInfo<'info>,
    args: TransferInstructionArgs,
    proof: &[AccountInfo<'info>],
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let proof_accounts = proof
        .iter()
        .map(|account| (account, false, false))
        .collect::<Vec<_>>();

    TransferCpi::new(
        &tree.bubblegum_program,
        TransferCpiAccounts {
            tree_config: &tree.tree_config,
            leaf_owner: (leaf_owner, true),
            leaf_delegate: (leaf_owner, false),
            new_leaf_owner,
            merkle_tree: &tree.merkle_tree,
            log_wrapper: &tree.log_wrapper,
            compression_program: &tree.compression_program,
            system_program: &tree.system_program,
        },
        args,
    )
    .invoke_signed_with_remaining_accounts(signer_seeds, &proof_accounts)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Collection, Creator, TokenProgramVersion, TokenStandard};
    use anchor_lang::error::{Error, ERROR_CODE_OFFSET};

    fn metadata(collection: Option<Pubkey>) -> AnchorMetadataArgs {
        with_collection(collection.map(|key| Collection { verified: true, key }))
    }

    fn with_collection(collection: Option<Collection>) -> AnchorMetadataArgs {
        AnchorMetadataArgs {
            name: "Drip".to_string(),
            symbol: "DRP".to_string(),
            uri: "https://example.com/drip.json".to_string(),
            seller_fee_basis_points: 0,
            primary_sale_happened: false,
            is_mutable: false,
            edition_nonce: None,
            token_standard: Some(TokenStandard::NonFungible),
            collection,
            uses: None,
            token_program_version: TokenProgramVersion::Original,
            creators: vec![Creator {
                address: Pubkey::new_unique(),
                verified: false,
                share: 100,
            }],
        }
    }

    fn hash_of(args: &AnchorMetadataArgs) -> [u8; 32] {
        hash_metadata(&MetadataArgs::from(args.clone())).unwrap()
    }

    fn code(err: Error) -> u32 {
        match err {
            Error::AnchorError(e) => e.error_code_number,
            Error::ProgramError(e) => panic!("unexpected program error: {e:?}"),
        }
    }

    #[test]
    fn accepts_matching_hash_in_allowed_collection() {
        let key = Pubkey::new_unique();
        let args = metadata(Some(key));
        let hash = hash_of(&args);
        verify_leaf_metadata(args, &hash, &[Pubkey::new_unique(), key]).unwrap();
    }

    #[test]
    fn open_pool_accepts_leaf_without_collection() {
        let args = metadata(None);
        let hash = hash_of(&args);
        verify_leaf_metadata(args, &hash, &[]).unwrap();
    }

    #[test]
    fn rejects_unverified_claim_of_allowed_collection() {
        let allowed = Pubkey::new_unique();
        let args = with_collection(Some(Collection { verified: false, key: allowed }));
        let hash = hash_of(&args);

        let err = verify_leaf_metadata(args.clone(), &hash, &[allowed]).unwrap_err();
        assert_eq!(code(err), ERROR_CODE_OFFSET + DripError::InvalidCollection as u32);

        let err = verify_leaf_metadata(args, &hash, &[]).unwrap_err();
        assert_eq!(code(err), ERROR_CODE_OFFSET + DripError::InvalidCollection as u32);
    }

    #[test]
    fn restricted_pool_rejects_leaf_without_collection() {
        let args = metadata(None);
        let hash = hash_of(&args);

        let err = verify_leaf_metadata(args, &hash, &[Pubkey::new_unique()]).unwrap_err();
        assert_eq!(code(err), ERROR_CODE_OFFSET + DripError::InvalidCollection as u32);
    }

    #[test]
    fn rejects_tampered_metadata() {
        let key = Pubkey::new_unique();
        let args = metadata(Some(key));
        let hash = hash_of(&args);
        let mut tampered = args;
        tampered.name = "Not Drip".to_string();

        let err = verify_leaf_metadata(tampered, &hash, &[key]).unwrap_err();
        assert_eq!(code(err), ERROR_CODE_OFFSET + DripError::InvalidDataHash as u32);
    }

    #[test]
    fn rejects_foreign_collection() {
        let args = metadata(Some(Pubkey::new_unique()));
        let hash = hash_of(&args);

        let err = verify_leaf_metadata(args, &hash, &[Pubkey::new_unique()]).unwrap_err();
        assert_eq!(code(err), ERROR_CODE_OFFSET + DripError::InvalidCollection as u32);
    }
}
