use anchor_lang::prelude::*;
use crate::state::*;
use crate::errors::ErrorCode;

/// Cancel an open listing
#[derive(Accounts)]
pub struct CancelListing<'info> {
    #[account(
        mut,
        close = seller,
        constraint = listing.seller == seller.key() @ ErrorCode::Unauthorized,
        constraint = listing.is_open() @ ErrorCode::AlreadySold
    )]
    pub listing: Account<'info, Listing>,

    #[account(mut)]
    pub seller: Signer<'info>,
}

pub fn cancel_listing(_ctx: Context<CancelListing>) -> Result<()> {
    msg!("Listing cancelled");

    // Listing account is closed via the close constraint, which refunds
    // the rent deposit to the seller

    Ok(())
}
