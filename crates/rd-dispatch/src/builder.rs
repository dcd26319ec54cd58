//! Fluent builder for constructing a [`Dispatcher`].

use rd_core::{DispatchConfig, EventClock};
use rd_queue::IndexedPriorityQueue;
use rd_registry::{
    Fleet, PendingRequests, RideHistory, RideSearchIndex, TrafficTable, User, UserRegistry, Vehicle,
};
use rd_spatial::{DijkstraRouter, GraphRouter, RoadGraph, Router};
use rustc_hash::FxHashMap;
use tracing::info;

use crate::leaderboard::Leaderboard;
use crate::{DispatchResult, Dispatcher, RandomUrgency, UrgencyModel};

/// Fluent builder for [`Dispatcher<U, R>`].
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                       |
/// |-----------------|-----------------------------------------------|
/// | `.urgency(u)`   | `RandomUrgency` seeded from `config.seed`     |
/// | `.router(r)`    | `DijkstraRouter`                              |
/// | `.graph(g)`     | Empty `RoadGraph`                             |
/// | `.user(u)`      | No users                                      |
/// | `.vehicle(v)`   | No vehicles                                   |
///
/// # Example
///
/// ```
/// use rd_core::{DispatchConfig, Place, VehicleCategory};
/// use rd_dispatch::{DispatcherBuilder, FixedUrgency};
/// use rd_registry::{Role, User, Vehicle};
///
/// let mut dispatcher = DispatcherBuilder::new(DispatchConfig::default())
///     .urgency(FixedUrgency(1.0))
///     .user(User::new("d1", "Ali", Role::Driver))
///     .user(User::new("p1", "Sara", Role::Passenger))
///     .vehicle(Vehicle::new(
///         "V001",
///         VehicleCategory::Car,
///         "d1",
///         Place::new("Burj Khalifa", (25.1972, 55.2744)),
///     ))
///     .build()
///     .unwrap();
///
/// let outcome = dispatcher
///     .request_ride(
///         &"p1".into(),
///         Place::new("Dubai Mall", (25.1975, 55.2790)),
///         Place::new("Marina", (25.0772, 55.1330)),
///         VehicleCategory::Car,
///     )
///     .unwrap();
/// assert_eq!(outcome.assignment().unwrap().vehicle.as_str(), "V001");
/// ```
pub struct DispatcherBuilder<U: UrgencyModel, R: Router> {
    config:   DispatchConfig,
    urgency:  U,
    router:   R,
    graph:    Option<RoadGraph>,
    users:    Vec<User>,
    vehicles: Vec<Vehicle>,
}

impl DispatcherBuilder<RandomUrgency, DijkstraRouter> {
    pub fn new(config: DispatchConfig) -> Self {
        let urgency = RandomUrgency::from_config(&config);
        Self {
            config,
            urgency,
            router:   DijkstraRouter,
            graph:    None,
            users:    Vec::new(),
            vehicles: Vec::new(),
        }
    }
}

impl<U: UrgencyModel, R: Router> DispatcherBuilder<U, R> {
    /// Replace the urgency model.
    pub fn urgency<U2: UrgencyModel>(self, urgency: U2) -> DispatcherBuilder<U2, R> {
        DispatcherBuilder {
            config:   self.config,
            urgency,
            router:   self.router,
            graph:    self.graph,
            users:    self.users,
            vehicles: self.vehicles,
        }
    }

    /// Replace the routing algorithm.
    pub fn router<R2: Router>(self, router: R2) -> DispatcherBuilder<U, R2> {
        DispatcherBuilder {
            config:   self.config,
            urgency:  self.urgency,
            router,
            graph:    self.graph,
            users:    self.users,
            vehicles: self.vehicles,
        }
    }

    /// Start from a pre-built road graph (e.g. from `load_roads_csv`).
    pub fn graph(mut self, graph: RoadGraph) -> Self {
        self.graph = Some(graph);
        self
    }

    pub fn user(mut self, user: User) -> Self {
        self.users.push(user);
        self
    }

    pub fn vehicle(mut self, vehicle: Vehicle) -> Self {
        self.vehicles.push(vehicle);
        self
    }

    /// Validate the configuration, register users and vehicles, and return a
    /// ready [`Dispatcher`].
    pub fn build(self) -> DispatchResult<Dispatcher<U, R>> {
        self.config.validate()?;

        let mut users = UserRegistry::new();
        for user in self.users {
            users.add(user);
        }
        let mut fleet = Fleet::new();
        for vehicle in self.vehicles {
            fleet.add(vehicle)?;
        }
        let graph = self.graph.unwrap_or_default();

        info!(
            seed = self.config.seed,
            metric = ?self.config.distance_metric,
            users = users.len(),
            vehicles = fleet.len(),
            locations = graph.node_count(),
            "dispatcher ready"
        );

        Ok(Dispatcher {
            queue:        IndexedPriorityQueue::with_compaction_ratio(self.config.compaction_ratio),
            config:       self.config,
            fleet,
            users,
            traffic:      TrafficTable::new(),
            nav:          GraphRouter::with_graph(graph, self.router),
            urgency:      self.urgency,
            ongoing:      FxHashMap::default(),
            pending:      PendingRequests::new(),
            history:      RideHistory::new(),
            search:       RideSearchIndex::new(),
            leaderboard:  Leaderboard::default(),
            clock:        EventClock::new(),
            next_request: 0,
            next_ride:    0,
        })
    }
}
