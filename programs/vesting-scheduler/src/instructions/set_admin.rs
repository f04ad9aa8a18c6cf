use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::Registry;

pub fn set_admin(ctx: Context<SetAdmin>, new_admin: Pubkey) -> Result<()> {
    require!(new_admin != Pubkey::default(), VestingError::InvalidPubkey);

    let registry = &mut ctx.accounts.registry;
    require_keys_eq!(
        ctx.accounts.admin.key(),
        registry.admin,
        VestingError::UnauthorizedAdmin
    );

    let old = registry.admin;
    registry.admin = new_admin;

    emit!(AdminChanged {
        old_admin: old,
        new_admin,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetAdmin<'info> {
    #[account(mut, seeds = [b"registry"], bump)]
    pub registry: Account<'info, Registry>,

    pub admin: Signer<'info>,
}

#[event]
pub struct AdminChanged {
    pub old_admin: Pubkey,
    pub new_admin: Pubkey,
}
