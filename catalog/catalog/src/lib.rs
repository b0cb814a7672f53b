//! The part catalog.
//!
//! Part descriptors declare what a bicycle is made of; building them produces the ordered
//! list of parts used for configuration matching and the spares listing.
pub mod builder;
pub mod descriptor;
pub mod spares;
