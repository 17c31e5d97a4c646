pub mod adapters;
pub mod coordinator;
pub mod registry;
pub mod sdk;
