pub mod friend_list;
pub mod friends_search;
pub mod mutual_friends;
pub mod profile;

#[cfg(test)]
mod test_support;
