pub mod friend_set;
pub mod ports;
pub mod profile;
pub mod resources;
pub mod search_results;
