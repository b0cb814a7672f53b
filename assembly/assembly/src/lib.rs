pub mod configuration;
pub mod criteria;
pub mod processor;
