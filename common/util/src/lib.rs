pub mod assert;
pub mod source;
