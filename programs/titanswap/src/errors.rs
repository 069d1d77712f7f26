use anchor_lang::prelude::*;

#[error_code]
pub enum AmmError {
    #[msg("Asset identifier is the zero address.")]
    ZeroAddress,
    #[msg("Both legs of the pair refer to the same asset.")]
    IdenticalAssets,
    #[msg("Pair legs must be supplied in canonical order.")]
    UnsortedAssets,
    #[msg("A pool for this asset pair already exists.")]
    PairAlreadyExists,
    #[msg("No pool registered for this asset pair.")]
    PairNotFound,
    #[msg("Amount must be a nonzero integer.")]
    InvalidAmount,
    #[msg("Share balance is smaller than the requested amount.")]
    InsufficientShares,
    #[msg("Swap produces zero output.")]
    InsufficientOutput,
    #[msg("Asset does not belong to this pair.")]
    UnknownAsset,
    #[msg("Price query against an empty reserve.")]
    InvalidState,
    #[msg("Pool needs at least three historical stakers before withdrawal.")]
    InsufficientStakerQuorum,
    #[msg("Caller has never deposited into this pool.")]
    StakerNotFound,
    #[msg("Staking pool does not exist.")]
    PoolNotFound,
    #[msg("Caller is not the staking administrator.")]
    NotAuthorized,
    #[msg("Asset transfer failed.")]
    TransferFailed,
    #[msg("Math operation overflow.")]
    MathOverflow,
    #[msg("Vault account does not match the pair leg.")]
    InvalidVault,
    #[msg("Staker registry capacity reached.")]
    StakerRegistryFull,
}
