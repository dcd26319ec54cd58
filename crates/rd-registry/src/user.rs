//! Users (drivers and passengers) and their running ratings.

use rd_core::UserId;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{RegistryError, RegistryResult};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    Driver,
    #[default]
    Passenger,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Driver => "driver",
            Role::Passenger => "passenger",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered user.
///
/// `rating` is the cumulative mean over `ride_count`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct User {
    pub id:         UserId,
    pub name:       String,
    pub role:       Role,
    pub rating:     f64,
    pub ride_count: u32,
}

impl User {
    /// A user with no rides and a rating of `0.0`.
    pub fn new(id: impl Into<UserId>, name: impl Into<String>, role: Role) -> Self {
        Self { id: id.into(), name: name.into(), role, rating: 0.0, ride_count: 0 }
    }

    /// Fold `rating` into the running mean over `ride_count` samples and
    /// count the ride.
    pub fn update_rating(&mut self, rating: f64) {
        let total = self.rating * self.ride_count as f64;
        self.ride_count += 1;
        self.rating = (total + rating) / self.ride_count as f64;
    }

    /// Count a ride without a rating sample (the passenger side of a trip).
    pub fn increment_ride_count(&mut self) {
        self.ride_count += 1;
    }
}

/// Users keyed by id.
#[derive(Debug, Default, Clone)]
pub struct UserRegistry {
    users: FxHashMap<UserId, User>,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a user.  Returns the replaced record, if any.
    pub fn add(&mut self, user: User) -> Option<User> {
        debug!(user = %user.id, role = %user.role, "user registered");
        self.users.insert(user.id.clone(), user)
    }

    pub fn remove(&mut self, id: &UserId) -> RegistryResult<User> {
        self.users
            .remove(id)
            .ok_or_else(|| RegistryError::UserNotFound(id.clone()))
    }

    pub fn get(&self, id: &UserId) -> Option<&User> {
        self.users.get(id)
    }

    pub fn get_mut(&mut self, id: &UserId) -> Option<&mut User> {
        self.users.get_mut(id)
    }

    /// Like [`get`](Self::get) but fails with [`RegistryError::UserNotFound`].
    pub fn require(&self, id: &UserId) -> RegistryResult<&User> {
        self.users
            .get(id)
            .ok_or_else(|| RegistryError::UserNotFound(id.clone()))
    }

    pub fn contains(&self, id: &UserId) -> bool {
        self.users.contains_key(id)
    }

    /// Users in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &User> + '_ {
        self.users.values()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
