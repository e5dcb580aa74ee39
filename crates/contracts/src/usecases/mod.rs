pub mod u501_process_action_response;
pub mod u502_sync_marketplace;
pub mod u503_sync_unmanaged_listings;
