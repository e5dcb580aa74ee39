pub mod common;

pub mod a001_marketplace;
pub mod a002_account;
pub mod a003_listing;
pub mod a004_listing_product;
pub mod a005_unmanaged_listing;
pub mod a006_listing_log;
