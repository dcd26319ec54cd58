//! `Dispatcher` — matches ride requests to vehicles and tracks rides.
//!
//! # Dispatch cycle
//!
//! ```text
//! request_ride(user, pickup, destination, category)
//!   │
//!   ├─ 1. validate user + coordinates, mint RequestId, advance clock
//!   ├─ 2. clear the priority queue
//!   ├─ 3. for each available vehicle (registration order):
//!   │        score = distance(vehicle, pickup) + delay(vehicle) - urgency(request)
//!   │        queue.upsert(handle, score)
//!   ├─ 4. queue.extract_min()
//!   │        None → NoAvailability, request joins the pending queue
//!   └─ 5. vehicle.assign(destination); ongoing[vehicle] = request
//! ```
//!
//! Candidates whose score is not finite are skipped.  Ending a ride reverses
//! step 5, logs the ride and updates user statistics.  Requests left in the
//! pending queue are retried, oldest first, by
//! [`Dispatcher::dispatch_next_pending`].

use rd_core::{
    DispatchConfig, EventClock, GeoPoint, Place, RequestId, RideId, Tick, UserId, VehicleCategory,
    VehicleHandle, VehicleId,
};
use rd_queue::IndexedPriorityQueue;
use rd_registry::{
    Fleet, PendingRequests, RegistryError, RideHistory, RideLog, RideRequest, RideSearchIndex,
    SearchCriteria, TrafficTable, User, UserRegistry, Vehicle, VehicleUpdate,
};
use rd_spatial::{DijkstraRouter, GraphRouter, Route, Router};
use rustc_hash::FxHashMap;
use tracing::{debug, info, warn};

use crate::leaderboard::Leaderboard;
use crate::scoring::pickup_distance;
use crate::{
    Assignment, DispatchError, DispatchOutcome, DispatchResult, RandomUrgency, RankBy,
    RideCompletion, ScoreBreakdown, UrgencyModel,
};

/// The dispatch engine.
///
/// Owns every piece of mutable state: fleet, users, traffic delays, road
/// graph, ride history and the per-cycle priority queue.  All operations run
/// to completion on the caller's thread.
///
/// Build one with [`DispatcherBuilder`](crate::DispatcherBuilder) or
/// [`Dispatcher::new`].
pub struct Dispatcher<U: UrgencyModel = RandomUrgency, R: Router = DijkstraRouter> {
    pub(crate) config:       DispatchConfig,
    pub(crate) fleet:        Fleet,
    pub(crate) users:        UserRegistry,
    pub(crate) traffic:      TrafficTable,
    pub(crate) nav:          GraphRouter<R>,
    pub(crate) urgency:      U,
    pub(crate) queue:        IndexedPriorityQueue<VehicleHandle>,
    pub(crate) ongoing:      FxHashMap<VehicleId, RideRequest>,
    pub(crate) pending:      PendingRequests,
    pub(crate) history:      RideHistory,
    pub(crate) search:       RideSearchIndex,
    pub(crate) leaderboard:  Leaderboard,
    pub(crate) clock:        EventClock,
    pub(crate) next_request: u32,
    pub(crate) next_ride:    u32,
}

impl Dispatcher {
    /// Dispatcher with random urgency seeded from `config` and Dijkstra
    /// routing over an empty graph.
    pub fn new(config: DispatchConfig) -> DispatchResult<Self> {
        crate::DispatcherBuilder::new(config).build()
    }
}

impl<U: UrgencyModel, R: Router> Dispatcher<U, R> {
    // ── Users and vehicles ────────────────────────────────────────────────

    /// Register (or replace) a user.  Returns the replaced record.
    pub fn register_user(&mut self, user: User) -> Option<User> {
        self.leaderboard.invalidate();
        self.users.add(user)
    }

    /// Remove a user and drop any of their requests still waiting for a
    /// vehicle.  Rides already in progress run to completion.
    pub fn remove_user(&mut self, id: &UserId) -> DispatchResult<User> {
        let user = self.users.remove(id).map_err(not_found)?;
        let dropped = self.pending.remove_for(id);
        self.leaderboard.invalidate();
        debug!(user = %id, dropped, "user removed");
        Ok(user)
    }

    pub fn add_vehicle(&mut self, vehicle: Vehicle) -> DispatchResult<VehicleHandle> {
        Ok(self.fleet.add(vehicle)?)
    }

    /// Remove an idle vehicle.  A vehicle serving a ride must finish it first.
    pub fn remove_vehicle(&mut self, id: &VehicleId) -> DispatchResult<Vehicle> {
        if self.ongoing.contains_key(id) {
            return Err(DispatchError::VehicleBusy(id.clone()));
        }
        let vehicle = self.fleet.remove(id).map_err(not_found)?;
        self.traffic.remove(id);
        Ok(vehicle)
    }

    pub fn update_vehicle(&mut self, id: &VehicleId, update: VehicleUpdate) -> DispatchResult<()> {
        self.fleet.update(id, update).map_err(not_found)
    }

    /// Record a traffic delay for a registered vehicle.
    pub fn update_traffic(&mut self, vehicle: &VehicleId, delay: f64) -> DispatchResult<()> {
        if !self.fleet.contains(vehicle) {
            return Err(DispatchError::VehicleNotFound(vehicle.clone()));
        }
        self.traffic.update(vehicle, delay)?;
        Ok(())
    }

    // ── Roads ─────────────────────────────────────────────────────────────

    pub fn add_road(&mut self, a: &str, b: &str, weight: f64) -> DispatchResult<()> {
        Ok(self.nav.add_road(a, b, weight)?)
    }

    pub fn shortest_path(&self, start: &str, end: &str) -> Route {
        self.nav.shortest_path(start, end)
    }

    // ── Dispatch ──────────────────────────────────────────────────────────

    /// Submit a ride request and run one dispatch cycle for it.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::UserNotFound`] if `user` is not registered.
    /// - [`DispatchError::Registry`] with `InvalidLocation` for out-of-range
    ///   coordinates.
    ///
    /// Running out of vehicles is not an error; see
    /// [`DispatchOutcome::NoAvailability`].  Such a request waits in
    /// [`pending_requests`](Self::pending_requests).
    pub fn request_ride(
        &mut self,
        user:        &UserId,
        pickup:      Place,
        destination: Place,
        category:    VehicleCategory,
    ) -> DispatchResult<DispatchOutcome> {
        self.users.require(user).map_err(not_found)?;
        check_geo(pickup.geo)?;
        check_geo(destination.geo)?;

        let id = RequestId(self.next_request);
        self.next_request += 1;
        self.clock.advance();

        let request = RideRequest::new(id, user.clone(), pickup, destination, category);
        match self.try_assign(request) {
            Ok(assignment) => Ok(DispatchOutcome::Assigned(assignment)),
            Err(request) => {
                let id = request.id;
                self.pending.push(request);
                Ok(DispatchOutcome::NoAvailability { request: id })
            }
        }
    }

    /// Retry the oldest pending request.
    ///
    /// Returns `None` when nothing is waiting.  A request that still finds no
    /// vehicle stays at the front of the queue.
    pub fn dispatch_next_pending(&mut self) -> Option<DispatchOutcome> {
        let request = self.pending.pop()?;
        self.clock.advance();
        match self.try_assign(request) {
            Ok(assignment) => Some(DispatchOutcome::Assigned(assignment)),
            Err(request) => {
                let id = request.id;
                self.pending.requeue(request);
                Some(DispatchOutcome::NoAvailability { request: id })
            }
        }
    }

    /// Requests still waiting for a vehicle, oldest first.
    pub fn pending_requests(&self) -> impl Iterator<Item = &RideRequest> + '_ {
        self.pending.iter()
    }

    /// Score every eligible vehicle for `request` and commit the best one.
    /// Hands the request back when no vehicle could be scored.
    fn try_assign(&mut self, request: RideRequest) -> Result<Assignment, RideRequest> {
        self.queue.clear();
        let mut breakdowns: FxHashMap<VehicleHandle, ScoreBreakdown> = FxHashMap::default();

        for handle in self.fleet.available() {
            let Some(vehicle) = self.fleet.get_by_handle(handle) else {
                continue;
            };
            if self.config.require_category_match && vehicle.category != request.category {
                continue;
            }
            let Some(distance) =
                pickup_distance(self.config.distance_metric, &self.nav, vehicle, &request)
            else {
                debug!(vehicle = %vehicle.id, pickup = %request.pickup.name, "no road to pickup");
                continue;
            };
            let breakdown = ScoreBreakdown {
                distance,
                delay: self.traffic.delay(&vehicle.id),
                urgency: self.urgency.urgency(&request),
            };
            if !breakdown.total().is_finite() {
                warn!(
                    request = %request.id,
                    vehicle = %vehicle.id,
                    distance = breakdown.distance,
                    delay = breakdown.delay,
                    urgency = breakdown.urgency,
                    "non-finite score; candidate skipped"
                );
                continue;
            }
            debug!(
                request = %request.id,
                vehicle = %vehicle.id,
                distance = breakdown.distance,
                delay = breakdown.delay,
                urgency = breakdown.urgency,
                score = breakdown.total(),
                "candidate scored"
            );
            self.queue.upsert(handle, breakdown.total());
            breakdowns.insert(handle, breakdown);
        }

        let scored = breakdowns.len();
        let Some((handle, score)) = self.queue.extract_min() else {
            warn!(request = %request.id, user = %request.user, "no vehicle available");
            return Err(request);
        };
        let (Some(vehicle), Some(breakdown)) =
            (self.fleet.get_by_handle_mut(handle), breakdowns.remove(&handle))
        else {
            return Err(request);
        };

        vehicle.assign(request.destination.clone());
        let vehicle_id = vehicle.id.clone();
        info!(
            request = %request.id,
            user = %request.user,
            vehicle = %vehicle_id,
            score,
            scored,
            "vehicle assigned"
        );

        let assignment = Assignment {
            request: request.id,
            vehicle: vehicle_id.clone(),
            handle,
            score,
            breakdown,
            scored,
        };
        self.ongoing.insert(vehicle_id, request);
        Ok(assignment)
    }

    /// Complete the ride served by `vehicle`.
    ///
    /// The vehicle moves to the booked destination (when `arrived`) or to the
    /// reported current location, becomes available, and the ride is logged.
    /// The driver's rating absorbs the ride's rating; the rider's ride count
    /// goes up.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// [`VehicleNotFound`](DispatchError::VehicleNotFound),
    /// [`NoOngoingRide`](DispatchError::NoOngoingRide),
    /// [`IncompleteInput`](DispatchError::IncompleteInput),
    /// then coordinate and rating range checks.  Nothing is modified on error.
    pub fn end_ride(
        &mut self,
        vehicle:    &VehicleId,
        completion: RideCompletion,
    ) -> DispatchResult<RideLog> {
        let handle = self
            .fleet
            .handle(vehicle)
            .ok_or_else(|| DispatchError::VehicleNotFound(vehicle.clone()))?;
        let Some(request) = self.ongoing.get(vehicle) else {
            return Err(DispatchError::NoOngoingRide(vehicle.clone()));
        };

        let end = if completion.arrived {
            self.fleet
                .get_by_handle(handle)
                .and_then(|v| v.pending.clone())
                .unwrap_or_else(|| request.destination.clone())
        } else {
            completion
                .reported_place()
                .ok_or_else(|| DispatchError::IncompleteInput(vehicle.clone()))?
        };
        check_geo(end.geo)?;
        let rating = completion.rating.unwrap_or(self.config.default_rating);
        if !(0.0..=5.0).contains(&rating) {
            return Err(DispatchError::InvalidRating(rating));
        }

        // ── Commit ────────────────────────────────────────────────────────
        let Some(request) = self.ongoing.remove(vehicle) else {
            return Err(DispatchError::NoOngoingRide(vehicle.clone()));
        };
        let Some(v) = self.fleet.get_by_handle_mut(handle) else {
            return Err(DispatchError::VehicleNotFound(vehicle.clone()));
        };
        v.release(end.clone());
        let driver = v.driver.clone();
        let category = v.category;

        match self.users.get_mut(&driver) {
            Some(d) => d.update_rating(rating),
            None => warn!(vehicle = %vehicle, %driver, "driver not registered; rating dropped"),
        }
        if let Some(rider) = self.users.get_mut(&request.user) {
            rider.increment_ride_count();
        }
        self.leaderboard.invalidate();

        let log = RideLog {
            ride: RideId(self.next_ride),
            user: request.user.clone(),
            vehicle: vehicle.clone(),
            end_location: end.name,
            category,
            rating,
            completed_at: self.clock.advance(),
            request,
        };
        self.next_ride += 1;
        info!(
            ride = %log.ride,
            vehicle = %vehicle,
            user = %log.user,
            end = %log.end_location,
            rating,
            "ride ended"
        );
        self.history.push(log.clone());
        self.search.add(log.clone());
        Ok(log)
    }

    /// Submit `user`'s most recent completed trip again.
    pub fn rebook_last_ride(&mut self, user: &UserId) -> DispatchResult<DispatchOutcome> {
        let last = self
            .history
            .last_for(user)
            .ok_or_else(|| DispatchError::NoHistory(user.clone()))?;
        let RideRequest { pickup, destination, category, .. } = last.request.clone();
        debug!(%user, ride = %last.ride, "rebooking");
        self.request_ride(user, pickup, destination, category)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Completed rides matching `criteria`, in completion order.
    pub fn search_rides(&self, criteria: &SearchCriteria) -> Vec<&RideLog> {
        self.search.search(criteria)
    }

    /// `user`'s completed rides, most recent first.
    pub fn view_ride_history(&self, user: &UserId) -> Vec<&RideLog> {
        self.history.view(user)
    }

    /// Users ordered by `by`, lowest first.  Equal keys keep user-id order.
    ///
    /// The ranking tree is rebuilt only when user statistics changed since
    /// the last call or a different statistic is requested.
    pub fn leaderboard(&mut self, by: RankBy) -> Vec<&User> {
        self.leaderboard.refresh(by, &self.users);
        self.leaderboard
            .ascending()
            .into_iter()
            .filter_map(|id| self.users.get(id))
            .collect()
    }

    /// Users ordered by `by`, highest first.  Equal keys keep user-id order.
    pub fn top_users(&mut self, by: RankBy) -> Vec<&User> {
        self.leaderboard.refresh(by, &self.users);
        self.leaderboard
            .descending()
            .into_iter()
            .filter_map(|id| self.users.get(id))
            .collect()
    }

    /// Rides currently in progress, keyed by vehicle.
    pub fn ongoing_rides(&self) -> impl Iterator<Item = (&VehicleId, &RideRequest)> + '_ {
        self.ongoing.iter()
    }

    pub fn ongoing_ride(&self, vehicle: &VehicleId) -> Option<&RideRequest> {
        self.ongoing.get(vehicle)
    }

    pub fn vehicle(&self, id: &VehicleId) -> Option<&Vehicle> {
        self.fleet.get(id)
    }

    pub fn user(&self, id: &UserId) -> Option<&User> {
        self.users.get(id)
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn users(&self) -> &UserRegistry {
        &self.users
    }

    pub fn traffic(&self) -> &TrafficTable {
        &self.traffic
    }

    pub fn history(&self) -> &RideHistory {
        &self.history
    }

    pub fn router(&self) -> &GraphRouter<R> {
        &self.nav
    }

    pub fn router_mut(&mut self) -> &mut GraphRouter<R> {
        &mut self.nav
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    pub fn now(&self) -> Tick {
        self.clock.now()
    }
}

fn check_geo(geo: GeoPoint) -> DispatchResult<()> {
    if geo.is_valid() {
        Ok(())
    } else {
        Err(RegistryError::InvalidLocation(geo).into())
    }
}

/// Surface the registry's not-found kind as the dispatcher's own.
fn not_found(err: RegistryError) -> DispatchError {
    match err {
        RegistryError::VehicleNotFound(id) => DispatchError::VehicleNotFound(id),
        RegistryError::UserNotFound(id) => DispatchError::UserNotFound(id),
        other => DispatchError::Registry(other),
    }
}
