pub mod friends_search;
