pub mod gearing;
pub mod part;
