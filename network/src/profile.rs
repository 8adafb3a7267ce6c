use std::fmt;
use std::io::{self, Write};

use serde::Serialize;

/// Identifier the network assigns to a profile on insertion.
pub type UserId = u32;

/// A user record: name, status line, and friend list.
///
/// The friend list holds ids, not profiles, and only the owning
/// `SocialNetwork` changes it, always together with the graph edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    id: Option<UserId>,
    name: String,
    status: String,
    friends: Vec<UserId>,
}

impl Profile {
    pub fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            status: status.into(),
            friends: Vec::new(),
        }
    }

    /// None until the profile has been added to a network.
    pub fn id(&self) -> Option<UserId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the display name from its parts, joined by a single space.
    pub fn set_name(&mut self, first: &str, last: &str) {
        self.name = format!("{} {}", first, last);
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Friend ids in the order the friendships were created.
    pub fn friends(&self) -> &[UserId] {
        &self.friends
    }

    pub fn friend_count(&self) -> usize {
        self.friends.len()
    }

    pub(crate) fn assign_id(&mut self, id: UserId) {
        self.id = Some(id);
    }

    /// Drop every friend id. A profile entering a network starts with no
    /// friendships there.
    pub(crate) fn clear_friends(&mut self) {
        self.friends.clear();
    }

    /// Add `friend` unless it is this profile or already listed.
    pub(crate) fn add_friend(&mut self, friend: UserId) -> bool {
        if self.id == Some(friend) || self.friends.contains(&friend) {
            return false;
        }
        self.friends.push(friend);
        true
    }

    pub(crate) fn remove_friend(&mut self, friend: UserId) -> bool {
        match self.friends.iter().position(|&f| f == friend) {
            Some(idx) => {
                self.friends.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Write the long form: summary lines followed by one friend name per line.
    pub fn render<'a, W, I>(&self, friend_names: I, out: &mut W) -> io::Result<()>
    where
        W: Write,
        I: IntoIterator<Item = &'a str>,
    {
        writeln!(out, "Name: {}", self.name)?;
        writeln!(out, "\tStatus: {}", self.status)?;
        writeln!(out, "\tNumber of friend profiles: {}", self.friend_count())?;
        writeln!(out, "Friends:")?;
        for name in friend_names {
            writeln!(out, "\t{}", name)?;
        }
        Ok(())
    }
}

/// Short form. Two profiles with the same short form are treated as the same
/// person when added to a network.
impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}\n\tStatus: {}\n\tNumber of friend profiles: {}\n",
            self.name,
            self.status,
            self.friend_count()
        )
    }
}
