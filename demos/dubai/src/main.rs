//! dubai — a short walkthrough of the ride_dispatch engine.
//!
//! Registers four drivers and three passengers, places one vehicle at each
//! of four Dubai landmarks, then books, completes and rebooks rides.  Output
//! goes to `output/dubai/{rides,leaderboard}.csv`.
//!
//! Usage: `dubai [config.json]`.  Set `RUST_LOG=debug` to see every scored
//! candidate.

mod roads;

use std::path::Path;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use rd_core::{DispatchConfig, DistanceMetric, Place, VehicleCategory};
use rd_dispatch::{DispatchOutcome, Dispatcher, DispatcherBuilder, RankBy, RideCompletion};
use rd_output::{CsvWriter, export};
use rd_registry::{Role, SearchCriteria, SortBy, User, Vehicle, sort_rides};

use roads::build_roads;

const OUTPUT_DIR: &str = "output/dubai";

// ── Setup ─────────────────────────────────────────────────────────────────────

fn load_config() -> Result<DispatchConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(DispatchConfig { seed: 42, ..DispatchConfig::default() });
    };
    let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let config = serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?;
    Ok(config)
}

fn place(name: &str, lat: f64, lon: f64) -> Place {
    Place::new(name, (lat, lon))
}

fn build_dispatcher(config: DispatchConfig) -> Result<Dispatcher> {
    let dispatcher = DispatcherBuilder::new(config)
        .graph(build_roads()?)
        .user(User::new("1", "Ali", Role::Driver))
        .user(User::new("2", "Mohammed", Role::Driver))
        .user(User::new("3", "Fatma", Role::Driver))
        .user(User::new("4", "Yousef", Role::Driver))
        .user(User::new("5", "Sara", Role::Passenger))
        .user(User::new("6", "Nassir", Role::Passenger))
        .user(User::new("7", "Abd", Role::Passenger))
        .vehicle(Vehicle::new("1", VehicleCategory::Car, "1", place("Burj Khalifa", 25.1972, 55.2744)))
        .vehicle(Vehicle::new("2", VehicleCategory::Bike, "2", place("Dubai Marina", 25.0772, 55.1330)))
        .vehicle(Vehicle::new(
            "3",
            VehicleCategory::Bus,
            "3",
            place("Burjuman Metro Station", 25.2528, 55.3032),
        ))
        .vehicle(Vehicle::new("4", VehicleCategory::Car, "4", place("Dubai Mall", 25.1985, 55.2796)))
        .build()?;
    Ok(dispatcher)
}

fn report(outcome: &DispatchOutcome) {
    match outcome {
        DispatchOutcome::Assigned(a) => println!(
            "  request {} → vehicle {} (score {:.2}: {:.2} km + {:.2} delay − {:.2} urgency, {} scored)",
            a.request, a.vehicle, a.score, a.breakdown.distance, a.breakdown.delay, a.breakdown.urgency, a.scored
        ),
        DispatchOutcome::NoAvailability { request } => {
            println!("  request {request} → no vehicle available")
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = load_config()?;
    println!("=== dubai — ride_dispatch walkthrough ===");
    println!(
        "Seed: {}  |  Metric: {:?}  |  Max urgency: {}",
        config.seed, config.distance_metric, config.max_urgency
    );
    let metric = config.distance_metric;
    let mut dispatcher = build_dispatcher(config)?;
    println!(
        "Fleet: {} vehicles  |  Users: {}  |  Road graph: {} locations, {} roads",
        dispatcher.fleet().len(),
        dispatcher.users().len(),
        dispatcher.router().graph().node_count(),
        dispatcher.router().graph().edge_count() / 2,
    );
    println!();

    // 1. Traffic on the Dubai Mall car.
    dispatcher.update_traffic(&"4".into(), 2.5)?;

    // 2. Sara rides from JBR to Mall of the Emirates.
    println!("Sara: JBR → Mall of the Emirates");
    let jbr = place("JBR", 25.0773, 55.1344);
    let moe = place("Mall of the Emirates", 25.1180, 55.2000);
    let sara = "5".into();
    let outcome = dispatcher.request_ride(&sara, jbr.clone(), moe.clone(), VehicleCategory::Car)?;
    report(&outcome);

    // 3. Nassir rides from Dubai Mall to Burj Khalifa.
    println!("Nassir: Dubai Mall → Burj Khalifa");
    let nassir = "6".into();
    let mall = place("Dubai Mall", 25.1975, 55.2790);
    let burj = place("Burj Khalifa", 25.1972, 55.2744);
    let second = dispatcher.request_ride(&nassir, mall, burj, VehicleCategory::Car)?;
    report(&second);

    // 4. Both rides end; Nassir's stops short at Dubai Mall.
    if let Some(a) = outcome.assignment() {
        let log = dispatcher.end_ride(&a.vehicle, RideCompletion::arrived().with_rating(4.5))?;
        println!("  ride {} ended at {} (rating {})", log.ride, log.end_location, log.rating);
    }
    if let Some(a) = second.assignment() {
        let stop = place("Dubai Mall", 25.1985, 55.2796);
        let log = dispatcher.end_ride(&a.vehicle, RideCompletion::stopped_at(stop))?;
        println!("  ride {} ended at {} (rating {})", log.ride, log.end_location, log.rating);
    }

    // 5. Ending a ride twice is reported, not ignored.
    if let Some(a) = outcome.assignment()
        && let Err(e) = dispatcher.end_ride(&a.vehicle, RideCompletion::arrived())
    {
        println!("  second end_ride: {e}");
    }

    // 6. Sara rebooks her last trip.
    println!("Sara rebooks");
    let rebooked = dispatcher.rebook_last_ride(&sara)?;
    report(&rebooked);
    if let Some(a) = rebooked.assignment() {
        dispatcher.end_ride(&a.vehicle, RideCompletion::arrived().with_rating(3.0))?;
    }

    // Retry anything that found no vehicle earlier, oldest first.
    while let Some(retry) = dispatcher.dispatch_next_pending() {
        report(&retry);
        if !retry.is_assigned() {
            break;
        }
    }

    // 7. History and search.
    println!();
    println!("Sara's rides (latest first):");
    for log in dispatcher.view_ride_history(&sara) {
        println!("  {} {} → {} at {}", log.ride, log.request.pickup.name, log.end_location, log.completed_at);
    }
    let found = dispatcher.search_rides(&SearchCriteria::at("Mall of the Emirates").min_rating(3.0));
    println!("Rides ending at Mall of the Emirates rated ≥ 3.0, by rating:");
    for log in sort_rides(found, SortBy::Rating) {
        println!("  {} vehicle {} rating {}", log.ride, log.vehicle, log.rating);
    }

    // 8. Routing.
    let route = dispatcher.shortest_path("JBR", "Burj Khalifa");
    println!();
    println!("Route JBR → Burj Khalifa: {:.1} km via {}", route.distance, route.path.join(" → "));
    if metric == DistanceMetric::Haversine {
        println!("(scores above use great-circle distance; set \"distance_metric\": \"Road\" to use this graph)");
    }

    // 9. Leaderboard.
    println!();
    println!("{:<6} {:<10} {:<10} {:>6} {:>6}", "Rank", "Name", "Role", "Rating", "Rides");
    println!("{}", "-".repeat(42));
    for (i, user) in dispatcher.top_users(RankBy::Rating).into_iter().enumerate() {
        println!(
            "{:<6} {:<10} {:<10} {:>6.2} {:>6}",
            i + 1,
            user.name,
            user.role,
            user.rating,
            user.ride_count
        );
    }

    // 10. Export.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let mut writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let summary = export(&mut dispatcher, RankBy::Rating, &mut writer)?;
    println!();
    println!("Wrote {} rides and {} users to {OUTPUT_DIR}/", summary.rides, summary.users);

    Ok(())
}
