//! social-graph-network: a social network on top of social-graph-core.
//!
//! Profiles become vertices keyed by an integer `UserId` the network
//! assigns; friendships are undirected edges. Friend suggestion and
//! friendship distance are the core's BFS primitives seen through profiles.
//! Scenario files (JSON) seed a network for demos and benchmarks.

mod error;
mod network;
mod profile;
mod scenario;
mod settings;

pub use error::{NetworkError, Result};
pub use network::SocialNetwork;
pub use profile::{Profile, UserId};
pub use scenario::{LoadedScenario, Scenario, UserEntry};
pub use settings::{NetworkSettings, DEFAULT_CAPACITY};
