//! First-in first-out queue of ride requests no vehicle could serve yet.

use std::collections::VecDeque;

use rd_core::UserId;

use crate::RideRequest;

/// Unserved requests, oldest at the front.
#[derive(Debug, Default, Clone)]
pub struct PendingRequests {
    queue: VecDeque<RideRequest>,
}

impl PendingRequests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `request` behind every request already waiting.
    pub fn push(&mut self, request: RideRequest) {
        self.queue.push_back(request);
    }

    /// Put `request` back at the front after a retry failed, so it keeps its
    /// place in line.
    pub fn requeue(&mut self, request: RideRequest) {
        self.queue.push_front(request);
    }

    /// Take the oldest waiting request.
    pub fn pop(&mut self) -> Option<RideRequest> {
        self.queue.pop_front()
    }

    pub fn peek(&self) -> Option<&RideRequest> {
        self.queue.front()
    }

    /// Drop every request made by `user`.  Returns how many were removed.
    pub fn remove_for(&mut self, user: &UserId) -> usize {
        let before = self.queue.len();
        self.queue.retain(|r| &r.user != user);
        before - self.queue.len()
    }

    /// Waiting requests, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &RideRequest> + '_ {
        self.queue.iter()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
