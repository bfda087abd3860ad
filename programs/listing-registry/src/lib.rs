use anchor_lang::prelude::*;

pub mod state;
pub mod instructions;
pub mod errors;

use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod listing_registry {
    use super::*;

    // ==================== Listing Lifecycle ====================

    /// Create a sale listing owned by the seller
    pub fn create_listing(
        ctx: Context<CreateListing>,
        price: u64,
        description: String,
    ) -> Result<()> {
        instructions::create_listing::create_listing(ctx, price, description)
    }

    /// Pay the listed price and take ownership of the listing
    pub fn buy_listing(ctx: Context<BuyListing>) -> Result<()> {
        instructions::buy_listing::buy_listing(ctx)
    }

    /// Withdraw an unsold listing and reclaim its rent deposit
    pub fn cancel_listing(ctx: Context<CancelListing>) -> Result<()> {
        instructions::cancel_listing::cancel_listing(ctx)
    }
}
