pub mod initialization;
pub mod locks;
pub mod tasks;
pub mod tracing;
