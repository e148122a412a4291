pub mod listing;
pub mod manual;
pub mod query;
