pub mod parts_builder;
