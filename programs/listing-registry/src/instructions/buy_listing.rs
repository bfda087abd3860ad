use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};
use crate::state::*;
use crate::errors::ErrorCode;

/// Buy an open listing
#[derive(Accounts)]
pub struct BuyListing<'info> {
    #[account(
        mut,
        constraint = listing.seller == seller.key() @ ErrorCode::SellerMismatch,
        constraint = listing.is_open() @ ErrorCode::AlreadySold
    )]
    pub listing: Account<'info, Listing>,

    #[account(mut)]
    pub buyer: Signer<'info>,

    /// CHECK: Seller receives the payment; verified against listing.seller
    #[account(mut)]
    pub seller: AccountInfo<'info>,

    pub system_program: Program<'info, System>,
}

pub fn buy_listing(ctx: Context<BuyListing>) -> Result<()> {
    let price = ctx.accounts.listing.price;

    // Surface the obviously underfunded case as a program error; the
    // System Program enforces the exact transferable amount on the CPI.
    require!(
        ctx.accounts.buyer.lamports() >= price,
        ErrorCode::InsufficientFunds
    );

    // 1. Transfer the price to the seller
    let transfer_ctx = CpiContext::new(
        ctx.accounts.system_program.to_account_info(),
        Transfer {
            from: ctx.accounts.buyer.to_account_info(),
            to: ctx.accounts.seller.to_account_info(),
        },
    );
    system_program::transfer(transfer_ctx, price)?;

    // 2. Mark sold and record the buyer
    let listing = &mut ctx.accounts.listing;
    listing.sold = true;
    listing.buyer = Some(ctx.accounts.buyer.key());

    msg!("Listing sold for {} lamports", price);

    Ok(())
}
