use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Unauthorized access")]
    Unauthorized,

    #[msg("Seller does not match the listing")]
    SellerMismatch,

    #[msg("Listing has already been sold")]
    AlreadySold,

    #[msg("Insufficient funds to cover the listing price")]
    InsufficientFunds,

    #[msg("Listing price must be greater than zero")]
    InvalidPrice,

    #[msg("Description exceeds the maximum length")]
    DescriptionTooLong,
}
