pub mod executor;

pub use executor::UnmanagedListingsSynchronization;
