use domain_shared::steam::SteamId;
use std::collections::HashSet;
use tracing::instrument;

/// Friends of one account, remembering the order Steam listed them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FriendSet {
    ordered: Vec<SteamId>,
    members: HashSet<SteamId>,
}

impl FriendSet {
    pub fn new(friends: impl IntoIterator<Item = SteamId>) -> Self {
        let mut ordered = Vec::new();
        let mut members = HashSet::new();
        for friend in friends {
            if members.insert(friend) {
                ordered.push(friend);
            }
        }

        Self { ordered, members }
    }

    pub fn contains(&self, steam_id: &SteamId) -> bool {
        self.members.contains(steam_id)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SteamId> {
        self.ordered.iter()
    }
}

/// Accounts present in every set, in the iteration order of the first one.
///
/// A single set yields all its members, no sets yield nothing.
#[instrument(level = "debug", skip_all, fields(sets = friend_sets.len()))]
pub fn intersect(friend_sets: &[FriendSet]) -> Vec<SteamId> {
    let Some((first, rest)) = friend_sets.split_first() else {
        return Vec::new();
    };

    first
        .iter()
        .filter(|steam_id| rest.iter().all(|set| set.contains(steam_id)))
        .copied()
        .collect()
}
