pub mod show_collection;

pub use show_collection::{show_collection_get, show_collection_query};
