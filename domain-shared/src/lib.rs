pub mod discord;
pub mod steam;
