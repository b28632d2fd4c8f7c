use fnv::FnvHashMap;

#[cfg(test)]
use mockall::automock;

use crate::availability::{Profile, UserId};

/// Looks up members on the chat platform.
#[cfg_attr(test, automock)]
pub trait Directory {
    fn profile(&self, id: &UserId) -> anyhow::Result<Profile>;
}

/// A directory of members known up front.
#[derive(Debug, Default, Clone)]
pub struct StaticDirectory {
    members: FnvHashMap<UserId, Profile>,
}

impl StaticDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, profile: Profile) {
        self.members.insert(profile.id.clone(), profile);
    }
}

impl FromIterator<Profile> for StaticDirectory {
    fn from_iter<I: IntoIterator<Item = Profile>>(iter: I) -> Self {
        let mut directory = Self::new();
        for profile in iter {
            directory.add(profile);
        }
        directory
    }
}

impl Directory for StaticDirectory {
    fn profile(&self, id: &UserId) -> anyhow::Result<Profile> {
        self.members
            .get(id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("unknown member {}", id))
    }
}
