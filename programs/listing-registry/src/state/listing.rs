use anchor_lang::prelude::*;
use crate::errors::ErrorCode;

#[account]
pub struct Listing {
    /// Seller who receives payment and the rent refund on cancel
    pub seller: Pubkey,

    /// Buyer who completed the purchase, set on sale
    pub buyer: Option<Pubkey>,

    /// Sale price in lamports
    pub price: u64,

    /// Item description (max 200 bytes)
    pub description: String,

    /// Sold status, flips to true exactly once
    pub sold: bool,

    /// Listed timestamp
    pub listed_at: i64,

    /// PDA bump
    pub bump: u8,
}

impl Listing {
    pub const SEED_PREFIX: &'static [u8] = b"listing";

    pub const MAX_DESCRIPTION_LEN: usize = 200;

    // 32 + 33 + 8 + (4 + 200) + 1 + 8 + 1 = 287 bytes
    pub const SIZE: usize = 8 + 287;

    pub fn is_open(&self) -> bool {
        !self.sold
    }

    pub fn validate(price: u64, description: &str) -> Result<()> {
        require!(price > 0, ErrorCode::InvalidPrice);
        require!(
            description.len() <= Listing::MAX_DESCRIPTION_LEN,
            ErrorCode::DescriptionTooLong
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing_with_description(description: String) -> Listing {
        Listing {
            seller: Pubkey::new_unique(),
            buyer: Some(Pubkey::new_unique()),
            price: u64::MAX,
            description,
            sold: true,
            listed_at: i64::MAX,
            bump: 255,
        }
    }

    #[test]
    fn size_covers_max_description() {
        let listing =
            listing_with_description("x".repeat(Listing::MAX_DESCRIPTION_LEN));
        let serialized = listing.try_to_vec().unwrap();
        // 8-byte discriminator comes on top of the borsh payload
        assert_eq!(serialized.len() + 8, Listing::SIZE);
    }

    #[test]
    fn shorter_description_fits_in_size() {
        let listing = listing_with_description("Test Property".to_string());
        let serialized = listing.try_to_vec().unwrap();
        assert!(serialized.len() + 8 < Listing::SIZE);
    }

    #[test]
    fn pda_is_deterministic_per_seller() {
        let seller = Pubkey::new_unique();
        let (first, first_bump) = Pubkey::find_program_address(
            &[Listing::SEED_PREFIX, seller.as_ref()],
            &crate::ID,
        );
        let (second, second_bump) = Pubkey::find_program_address(
            &[Listing::SEED_PREFIX, seller.as_ref()],
            &crate::ID,
        );
        assert_eq!(first, second);
        assert_eq!(first_bump, second_bump);
    }

    #[test]
    fn pda_differs_across_sellers() {
        let (first, _) = Pubkey::find_program_address(
            &[Listing::SEED_PREFIX, Pubkey::new_unique().as_ref()],
            &crate::ID,
        );
        let (second, _) = Pubkey::find_program_address(
            &[Listing::SEED_PREFIX, Pubkey::new_unique().as_ref()],
            &crate::ID,
        );
        assert_ne!(first, second);
    }

    #[test]
    fn validate_rejects_zero_price() {
        let err = Listing::validate(0, "Test Property").unwrap_err();
        assert_eq!(err, ErrorCode::InvalidPrice.into());
    }

    #[test]
    fn validate_rejects_oversized_description() {
        let description = "x".repeat(Listing::MAX_DESCRIPTION_LEN + 1);
        let err = Listing::validate(1_000_000_000, &description).unwrap_err();
        assert_eq!(err, ErrorCode::DescriptionTooLong.into());
    }

    #[test]
    fn validate_accepts_description_at_the_bound() {
        let description = "x".repeat(Listing::MAX_DESCRIPTION_LEN);
        assert!(Listing::validate(1, &description).is_ok());
    }

    #[test]
    fn open_until_sold() {
        let mut listing = listing_with_description(String::new());
        listing.sold = false;
        assert!(listing.is_open());
        listing.sold = true;
        assert!(!listing.is_open());
    }
}
