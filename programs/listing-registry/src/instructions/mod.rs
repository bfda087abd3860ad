pub mod create_listing;
pub mod buy_listing;
pub mod cancel_listing;

pub use create_listing::*;
pub use buy_listing::*;
pub use cancel_listing::*;
