//! JSON scenario files: a list of users plus the friendships between them.
//!
//! ```json
//! {
//!   "settings": { "capacity": 101 },
//!   "users": [ { "name": "Ada", "status": "hello" } ],
//!   "friendships": [ [0, 1] ]
//! }
//! ```
//!
//! Friendship entries are positions in `users`, not network ids; duplicate
//! users are skipped by the network, so the two can differ.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::error::{NetworkError, Result};
use crate::network::SocialNetwork;
use crate::profile::{Profile, UserId};
use crate::settings::NetworkSettings;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserEntry {
    pub name: String,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default)]
    pub settings: NetworkSettings,
    #[serde(default)]
    pub users: Vec<UserEntry>,
    #[serde(default)]
    pub friendships: Vec<(usize, usize)>,
}

/// A network built from a scenario, plus the id each `users` entry got.
/// `ids[i]` is None when entry `i` duplicated an earlier user.
#[derive(Debug)]
pub struct LoadedScenario {
    pub network: SocialNetwork,
    pub ids: Vec<Option<UserId>>,
}

impl Scenario {
    pub fn from_json(text: &str) -> Result<Self> {
        let scenario: Scenario = serde_json::from_str(text)?;
        scenario.settings.validate()?;
        Ok(scenario)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| NetworkError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Build the network. Every friendship index is checked before any
    /// user is added.
    pub fn build(&self) -> Result<LoadedScenario> {
        let user_count = self.users.len();
        for (index, &(a, b)) in self.friendships.iter().enumerate() {
            if let Some(user) = [a, b].into_iter().find(|&u| u >= user_count) {
                return Err(NetworkError::UnknownUser {
                    index,
                    user,
                    user_count,
                });
            }
        }

        let mut network = SocialNetwork::with_settings(&self.settings);
        let ids: Vec<Option<UserId>> = self
            .users
            .iter()
            .map(|u| network.add_user(Profile::new(u.name.as_str(), u.status.as_str())))
            .collect();

        for &(a, b) in &self.friendships {
            let (Some(ia), Some(ib)) = (ids[a], ids[b]) else {
                warn!(a, b, "scenario: friendship with a skipped duplicate user ignored");
                continue;
            };
            if !network.create_friendship(ia, ib) {
                warn!(a, b, "scenario: friendship rejected");
            }
        }

        info!(
            users = network.user_count(),
            friendships = network.friendship_count(),
            "scenario: network built"
        );
        Ok(LoadedScenario { network, ids })
    }
}
