use std::collections::HashMap;
use std::io::{self, Write};

use social_graph_core::{breadth_first_traversal, second_degree_neighbors, shortest_path, Graph};
use tracing::{debug, info};

use crate::profile::{Profile, UserId};
use crate::settings::NetworkSettings;

/// Users as vertices, friendships as undirected edges.
///
/// Owns both the graph and the profiles. Every friendship change goes
/// through the graph first and touches the profiles' friend lists only when
/// the graph accepted it, so the two always agree.
#[derive(Debug, Clone)]
pub struct SocialNetwork {
    graph: Graph<UserId>,
    profiles: HashMap<UserId, Profile>,
    next_id: UserId,
}

impl SocialNetwork {
    pub fn new() -> Self {
        Self::with_settings(&NetworkSettings::default())
    }

    pub fn with_settings(settings: &NetworkSettings) -> Self {
        Self {
            graph: Graph::with_capacity(settings.capacity),
            profiles: HashMap::with_capacity(settings.capacity),
            next_id: 0,
        }
    }

    /// Add a user and return the id assigned to it.
    ///
    /// Any friend ids the profile carries in are dropped: the new vertex has
    /// no edges yet. If a stored profile then has the same short form (name,
    /// status, friend count) the call does nothing and returns None.
    pub fn add_user(&mut self, mut profile: Profile) -> Option<UserId> {
        profile.clear_friends();
        let key = profile.to_string();
        if self.profiles.values().any(|p| p.to_string() == key) {
            debug!(name = profile.name(), "network: duplicate profile ignored");
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.graph.add_vertex(id);
        profile.assign_id(id);
        self.profiles.insert(id, profile);
        debug!(id, "network: user added");
        Some(id)
    }

    /// Remove a user, its friendships, and its id from every former
    /// friend's list.
    pub fn remove_user(&mut self, id: UserId) -> Option<Profile> {
        let profile = self.profiles.remove(&id)?;
        if let Some(vertex) = self.graph.remove_vertex(&id) {
            for friend in vertex.neighbors() {
                if let Some(p) = self.profiles.get_mut(friend) {
                    p.remove_friend(id);
                }
            }
        }
        info!(id, friendships = self.graph.edge_count(), "network: user removed");
        Some(profile)
    }

    /// Befriend two distinct, known users. False if either is unknown, they
    /// are the same user, or they are already friends.
    pub fn create_friendship(&mut self, a: UserId, b: UserId) -> bool {
        if a == b || !self.exists(a) || !self.exists(b) {
            return false;
        }
        if !self.graph.add_edge(&a, &b) {
            return false;
        }
        if let Some(p) = self.profiles.get_mut(&a) {
            p.add_friend(b);
        }
        if let Some(p) = self.profiles.get_mut(&b) {
            p.add_friend(a);
        }
        true
    }

    pub fn remove_friendship(&mut self, a: UserId, b: UserId) -> bool {
        if !self.graph.remove_edge(&a, &b) {
            return false;
        }
        if let Some(p) = self.profiles.get_mut(&a) {
            p.remove_friend(b);
        }
        if let Some(p) = self.profiles.get_mut(&b) {
            p.remove_friend(a);
        }
        true
    }

    pub fn has_friendship(&self, a: UserId, b: UserId) -> bool {
        self.graph.has_edge(&a, &b)
    }

    pub fn exists(&self, id: UserId) -> bool {
        self.profiles.contains_key(&id)
    }

    pub fn profile(&self, id: UserId) -> Option<&Profile> {
        self.profiles.get(&id)
    }

    pub fn user_count(&self) -> usize {
        self.profiles.len()
    }

    pub fn friendship_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Friends of friends who are not already friends, each listed once,
    /// in friend-list order.
    ///
    /// None if the user is unknown or there is nobody to suggest.
    pub fn friend_suggestion(&mut self, id: UserId) -> Option<Vec<&Profile>> {
        if !self.exists(id) {
            return None;
        }
        let candidates = second_degree_neighbors(&mut self.graph, &id)?;
        if candidates.is_empty() {
            return None;
        }
        Some(
            candidates
                .iter()
                .filter_map(|c| self.profiles.get(c))
                .collect(),
        )
    }

    /// Fewest friendship hops between two users, 0 for the same user.
    ///
    /// Returns -1 if either user is unknown or they are not connected.
    pub fn friendship_distance(&mut self, a: UserId, b: UserId) -> i32 {
        if !self.exists(a) || !self.exists(b) {
            return -1;
        }
        shortest_path(&mut self.graph, &a, &b).hops()
    }

    /// Profiles in breadth-first order from `start`, or None if unknown.
    pub fn traverse(&mut self, start: UserId) -> Option<Vec<&Profile>> {
        let order = breadth_first_traversal(&mut self.graph, &start)?;
        Some(order.iter().filter_map(|id| self.profiles.get(id)).collect())
    }

    /// Write each profile reached from `start`, in breadth-first order, in
    /// its long form followed by a blank line. Returns how many were written.
    pub fn display_traversal<W: Write>(&mut self, start: UserId, out: &mut W) -> io::Result<usize> {
        let Some(order) = breadth_first_traversal(&mut self.graph, &start) else {
            return Ok(0);
        };
        let mut written = 0;
        for id in &order {
            let Some(profile) = self.profiles.get(id) else {
                continue;
            };
            let names = profile
                .friends()
                .iter()
                .filter_map(|f| self.profiles.get(f))
                .map(Profile::name);
            profile.render(names, out)?;
            writeln!(out)?;
            written += 1;
        }
        Ok(written)
    }
}

impl Default for SocialNetwork {
    fn default() -> Self {
        Self::new()
    }
}
