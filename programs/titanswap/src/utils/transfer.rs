use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::token::{self, Transfer};

use crate::errors::AmmError;
use crate::state::LegKind;

/// Pulls `amount` of one leg from the caller into the pool's vault.
/// Ledger legs move through the token program with the caller as authority;
/// native legs move lamports from the caller's system account.
pub fn pull_leg<'info>(
    kind: LegKind,
    amount: u64,
    source: &AccountInfo<'info>,
    vault: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
    token_program: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
) -> Result<()> {
    match kind {
        LegKind::Ledger => token::transfer(
            CpiContext::new(
                token_program.clone(),
                Transfer {
                    from: source.clone(),
                    to: vault.clone(),
                    authority: authority.clone(),
                },
            ),
            amount,
        ),
        LegKind::Native => system_program::transfer(
            CpiContext::new(
                system_program.clone(),
                system_program::Transfer {
                    from: authority.clone(),
                    to: vault.clone(),
                },
            ),
            amount,
        ),
    }
}

/// Pushes `amount` of one leg from the pool's vault to a recipient.
/// Callers must have already debited their own accounting; this is the
/// outgoing, potentially re-entrant step and runs last.
pub fn push_leg<'info>(
    kind: LegKind,
    amount: u64,
    vault: &AccountInfo<'info>,
    destination: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
    token_program: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    match kind {
        LegKind::Ledger => token::transfer(
            CpiContext::new_with_signer(
                token_program.clone(),
                Transfer {
                    from: vault.clone(),
                    to: destination.clone(),
                    authority: authority.clone(),
                },
                signer_seeds,
            ),
            amount,
        ),
        LegKind::Native => {
            require!(vault.lamports() >= amount, AmmError::TransferFailed);
            system_program::transfer(
                CpiContext::new_with_signer(
                    system_program.clone(),
                    system_program::Transfer {
                        from: vault.clone(),
                        to: destination.clone(),
                    },
                    signer_seeds,
                ),
                amount,
            )
        }
    }
}
