pub mod ranking;
pub mod similarity;
pub mod store;
