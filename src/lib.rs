pub mod output;
pub mod quiz;
pub mod store;
