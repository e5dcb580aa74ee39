pub mod a002_account;
pub mod a003_listing;
pub mod a004_listing_product;
pub mod a005_unmanaged_listing;
pub mod action_response;
pub mod channel_urls;
pub mod snapshots;
pub mod sync;
pub mod system_log;
