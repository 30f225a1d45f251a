//! End-to-end tests for route planning.

use super::*;
use crate::domain::{Network, NetworkBuilder, Point, Speed, Station, StationId};

fn endpoints(builder: &mut NetworkBuilder, start: (f64, f64), dest: (f64, f64)) {
    let s = builder.add_station(Station::start(Point::new(start.0, start.1)));
    let d = builder.add_station(Station::destination(Point::new(dest.0, dest.1)));
    builder.start(s).destination(d);
}

fn plan(network: &Network) -> RouteResult {
    Planner::new(&PlannerConfig::default()).plan(network).unwrap()
}

#[test]
fn walking_only_two_stations() {
    let mut builder = Network::builder();
    endpoints(&mut builder, (0.0, 0.0), (0.0, 60.0));
    let network = builder
        .walking_speed(Speed::metres_per_minute(166.67))
        .cart_speed(Speed::kilometres_per_hour(20.0))
        .build()
        .unwrap();

    let result = plan(&network);
    let segments = result.itinerary.segments();

    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].mode, TravelMode::Walk);
    assert!((segments[0].duration_minutes - 60.0 / 166.67).abs() < 1e-12);
    assert!((segments[0].duration_minutes - 0.36).abs() < 0.005);
    assert_eq!(segments[0].line, None);
}

#[test]
fn cart_edge_replaces_walk_even_when_slower() {
    let mut builder = Network::builder();
    let a = builder.add_station(Station::start(Point::new(0.0, 0.0)));
    let b = builder.add_station(Station::destination(Point::new(0.0, 1000.0)));
    builder
        .add_line("Shuttle", vec![a, b])
        .start(a)
        .destination(b)
        .walking_speed(Speed::walking())
        .cart_speed(Speed::metres_per_minute(30.0));
    let network = builder.build().unwrap();

    let graph = RoutingGraph::build(&network);
    assert_eq!(graph.weights.get(a, b), Some(1000.0 / 30.0));

    let result = plan(&network);
    let segments = result.itinerary.segments();
    assert_eq!(segments.len(), 1);
    assert!(segments[0].is_transit());
    assert_eq!(segments[0].duration_minutes, 1000.0 / 30.0);
}

#[test]
fn rides_cart_between_walks() {
    // Walk to the first stop, ride two hops, walk to the destination.
    let mut builder = Network::builder();
    endpoints(&mut builder, (0.0, 0.0), (0.0, 5100.0));
    builder
        .add_line_stops(
            "Express",
            [
                Point::new(0.0, 100.0),
                Point::new(0.0, 2500.0),
                Point::new(0.0, 5000.0),
            ],
        )
        .cart_speed(Speed::kilometres_per_hour(60.0));
    let network = builder.build().unwrap();

    let result = plan(&network);
    let modes: Vec<_> = result.itinerary.segments().iter().map(|s| s.mode).collect();
    assert_eq!(
        modes,
        vec![
            TravelMode::Walk,
            TravelMode::Cart,
            TravelMode::Cart,
            TravelMode::Walk
        ]
    );

    let labels: Vec<_> = result
        .itinerary
        .segments()
        .iter()
        .map(|s| s.to_label.as_str())
        .collect();
    assert_eq!(
        labels,
        vec![
            "Express Station 1",
            "Express Station 2",
            "Express Station 3",
            "Final Destination"
        ]
    );
    assert_eq!(result.itinerary.segments()[1].line.as_deref(), Some("Express"));

    // 100 m + 100 m walking at 1000/6 m/min, 4900 m by cart at 1000 m/min.
    let expected = 200.0 / (1000.0 / 6.0) + 4.9;
    assert!((result.itinerary.total_minutes() - expected).abs() < 1e-9);
}

#[test]
fn non_consecutive_stops_are_not_cart_linked() {
    let mut builder = Network::builder();
    endpoints(&mut builder, (0.0, 0.0), (0.0, 10.0));
    builder
        .add_line_stops(
            "Loop",
            [Point::new(0.0, 0.0), Point::new(500.0, 0.0), Point::new(0.0, 10.0)],
        )
        .cart_speed(Speed::metres_per_minute(1.0e6));
    let network = builder.build().unwrap();
    let graph = RoutingGraph::build(&network);

    let stops = &network.lines()[0].stops;
    assert!(graph.transit.is_transit(stops[0], stops[1]));
    assert!(!graph.transit.is_transit(stops[0], stops[2]));
}

#[test]
fn start_equals_destination_is_empty() {
    let mut builder = Network::builder();
    let here = builder.add_station(Station::start(Point::new(3.0, 4.0)));
    builder
        .add_line_stops("Red", [Point::new(0.0, 0.0), Point::new(9.0, 9.0)])
        .start(here)
        .destination(here)
        .cart_speed(Speed::metres_per_minute(10.0));
    let network = builder.build().unwrap();

    let result = plan(&network);
    assert!(result.itinerary.is_empty());
    assert_eq!(result.itinerary.total_minutes(), 0.0);
    assert_eq!(result.distance_minutes, 0.0);
}

/// Plans over `network` as if no edge reached its destination.
fn plan_without_edges(network: &Network, config: &PlannerConfig) -> Result<RouteResult, PlanError> {
    let graph = RoutingGraph::build(network);
    let paths = shortest_paths(
        &graph.stations,
        &EdgeWeightTable::new(),
        network.start(),
        None,
    );
    Planner::new(config).route_from(network, &graph, &paths)
}

fn two_station_network() -> Network {
    let mut builder = Network::builder();
    endpoints(&mut builder, (0.0, 0.0), (300.0, 400.0));
    builder
        .cart_speed(Speed::metres_per_minute(10.0))
        .build()
        .unwrap()
}

#[test]
fn unreachable_destination_gives_empty_itinerary() {
    let network = two_station_network();
    let result = plan_without_edges(&network, &PlannerConfig::default()).unwrap();

    assert!(result.itinerary.is_empty());
    assert_eq!(result.itinerary.total_minutes(), 0.0);
    assert!(result.distance_minutes.is_infinite());
    assert_eq!(
        Directions(&result.itinerary).to_string(),
        "The fastest route takes 0 minute(s).\nDirections\n----------\n"
    );
}

#[test]
fn unreachable_destination_is_error_when_required() {
    let network = two_station_network();
    let err = plan_without_edges(&network, &PlannerConfig::strict()).unwrap_err();

    assert_eq!(
        err,
        PlanError::Unreachable {
            start: "Starting Point".into(),
            destination: "Final Destination".into(),
        }
    );
    assert_eq!(
        err.to_string(),
        "destination Final Destination is unreachable from Starting Point"
    );
}

#[test]
fn reachable_destination_passes_strict_mode() {
    let network = two_station_network();
    let result = Planner::new(&PlannerConfig::strict()).plan(&network).unwrap();

    assert_eq!(result.itinerary.len(), 1);
    assert!((result.distance_minutes - 3.0).abs() < 1e-9);
}

#[test]
fn exact_tie_durations_print_rounded_up() {
    let text = "starting_point = (0, 0)\n\
                destination_point = (0, 125)\n\
                average_cart_speed = 20\n\
                average_walking_speed = 60\n";
    let network = crate::loader::parse_network(text).unwrap();
    let result = plan(&network);

    assert_eq!(result.itinerary.segments()[0].duration_minutes, 0.125);
    assert!(
        Directions(&result.itinerary)
            .to_string()
            .contains("1. Walk from \"Starting Point\" to \"Final Destination\" for 0.13 minutes.")
    );
}

#[test]
fn early_exit_gives_same_itinerary() {
    let mut builder = Network::builder();
    endpoints(&mut builder, (0.0, 0.0), (800.0, 900.0));
    builder
        .add_line_stops("Red", [Point::new(10.0, 10.0), Point::new(700.0, 850.0)])
        .add_line_stops("Blue", [Point::new(50.0, 0.0), Point::new(900.0, 100.0)])
        .cart_speed(Speed::kilometres_per_hour(25.0));
    let network = builder.build().unwrap();

    let full = plan(&network);
    let config = PlannerConfig::new(true, false);
    let early = Planner::new(&config).plan(&network).unwrap();

    assert_eq!(full.itinerary, early.itinerary);
}

#[test]
fn shared_stop_lets_lines_connect() {
    let mut builder = Network::builder();
    let start = builder.add_station(Station::start(Point::new(0.0, 0.0)));
    let dest = builder.add_station(Station::destination(Point::new(2000.0, 2000.0)));
    let west = builder.add_station(Station::new(Point::new(0.0, 10.0), "West Gate"));
    let hub = builder.add_station(Station::new(Point::new(0.0, 2000.0), "Hub"));
    let east = builder.add_station(Station::new(Point::new(1990.0, 2000.0), "East Gate"));
    builder
        .add_line("North", vec![west, hub])
        .add_line("Cross", vec![hub, east])
        .start(start)
        .destination(dest)
        .cart_speed(Speed::kilometres_per_hour(60.0));
    let network = builder.build().unwrap();

    let result = plan(&network);
    let rides: Vec<_> = result
        .itinerary
        .segments()
        .iter()
        .filter_map(|s| s.line.as_deref())
        .collect();
    assert_eq!(rides, vec!["North", "Cross"]);
    assert_eq!(result.itinerary.segments()[2].from, hub);
}

#[test]
fn rendered_directions_for_planned_route() {
    let mut builder = Network::builder();
    endpoints(&mut builder, (0.0, 0.0), (0.0, 1000.0));
    let network = builder
        .cart_speed(Speed::kilometres_per_hour(20.0))
        .build()
        .unwrap();

    let result = plan(&network);
    assert_eq!(
        Directions(&result.itinerary).to_string(),
        "The fastest route takes 6 minute(s).\n\
         Directions\n\
         ----------\n\
         1. Walk from \"Starting Point\" to \"Final Destination\" for 6.00 minutes.\n"
    );
}

#[test]
fn reconstructed_path_starts_at_start() {
    let mut builder = Network::builder();
    endpoints(&mut builder, (0.0, 0.0), (40.0, 30.0));
    let network = builder
        .cart_speed(Speed::metres_per_minute(5.0))
        .build()
        .unwrap();
    let graph = RoutingGraph::build(&network);
    let paths = shortest_paths(&graph.stations, &graph.weights, network.start(), None);

    let path = reconstruct_path(&paths, network.destination());
    assert_eq!(path.first(), Some(&network.start()));
    assert_eq!(path.last(), Some(&network.destination()));
    assert_eq!(paths.predecessor(network.start()), None::<StationId>);
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn point() -> impl Strategy<Value = Point> {
        (0.0..5000.0f64, 0.0..5000.0f64).prop_map(|(x, y)| Point::new(x, y))
    }

    fn network() -> impl Strategy<Value = Network> {
        (
            point(),
            point(),
            prop::collection::vec(prop::collection::vec(point(), 1..6), 0..4),
            1.0..80.0f64,
            1.0..20.0f64,
        )
            .prop_map(|(start, dest, lines, cart_kmh, walk_kmh)| {
                let mut builder = Network::builder();
                let s = builder.add_station(Station::start(start));
                let d = builder.add_station(Station::destination(dest));
                for (i, stops) in lines.into_iter().enumerate() {
                    builder.add_line_stops(format!("Line {i}"), stops);
                }
                builder
                    .start(s)
                    .destination(d)
                    .walking_speed(Speed::kilometres_per_hour(walk_kmh))
                    .cart_speed(Speed::kilometres_per_hour(cart_kmh))
                    .build()
                    .expect("generated network is valid")
            })
    }

    proptest! {
        /// Walking joins every pair, so every station has a finite distance
        #[test]
        fn every_station_reachable(network in network()) {
            let graph = RoutingGraph::build(&network);
            let paths = shortest_paths(&graph.stations, &graph.weights, network.start(), None);
            for station in &graph.stations {
                prop_assert!(paths.is_reachable(*station));
            }
        }

        /// Hop durations add up to the search distance
        #[test]
        fn segments_sum_to_distance(network in network()) {
            let result = Planner::new(&PlannerConfig::default()).plan(&network).unwrap();
            let total = result.itinerary.total_minutes();
            prop_assert!((total - result.distance_minutes).abs() < 1e-6);
        }

        /// Planning twice gives the same answer
        #[test]
        fn planning_is_idempotent(network in network()) {
            let planner_config = PlannerConfig::default();
            let planner = Planner::new(&planner_config);
            let first = planner.plan(&network).unwrap();
            let second = planner.plan(&network).unwrap();
            prop_assert_eq!(first.itinerary, second.itinerary);
        }

        /// Never slower than walking straight there
        #[test]
        fn no_slower_than_direct_walk(network in network()) {
            let result = Planner::new(&PlannerConfig::default()).plan(&network).unwrap();
            let direct = network
                .walking_speed()
                .minutes_for(network.distance(network.start(), network.destination()).unwrap());
            prop_assert!(result.itinerary.total_minutes() <= direct + 1e-9);
        }

        /// Every cart hop joins consecutive stops of some line
        #[test]
        fn cart_hops_follow_lines(network in network()) {
            let result = Planner::new(&PlannerConfig::default()).plan(&network).unwrap();
            for segment in result.itinerary.segments().iter().filter(|s| s.is_transit()) {
                let on_line = network.lines().iter().any(|line| {
                    line.hops().any(|(a, b)| {
                        (a, b) == (segment.from, segment.to) || (b, a) == (segment.from, segment.to)
                    })
                });
                prop_assert!(on_line);
            }
        }
    }
}
