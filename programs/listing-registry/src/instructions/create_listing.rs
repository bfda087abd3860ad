use anchor_lang::prelude::*;
use crate::state::*;

/// Create a sale listing
#[derive(Accounts)]
pub struct CreateListing<'info> {
    #[account(
        init,
        payer = seller,
        space = Listing::SIZE,
        seeds = [Listing::SEED_PREFIX, seller.key().as_ref()],
        bump
    )]
    pub listing: Account<'info, Listing>,

    #[account(mut)]
    pub seller: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn create_listing(
    ctx: Context<CreateListing>,
    price: u64,
    description: String,
) -> Result<()> {
    Listing::validate(price, &description)?;

    let clock = Clock::get()?;

    let listing = &mut ctx.accounts.listing;
    listing.seller = ctx.accounts.seller.key();
    listing.buyer = None;
    listing.price = price;
    listing.description = description;
    listing.sold = false;
    listing.listed_at = clock.unix_timestamp;
    listing.bump = ctx.bumps.listing;

    msg!("Listing created at price: {}", price);

    Ok(())
}
