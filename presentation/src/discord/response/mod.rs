pub mod invalid_steam_ids;
pub mod too_many_steam_ids;
pub mod unavailable;
