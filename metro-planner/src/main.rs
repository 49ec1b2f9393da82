use metro_planner::domain::StationId;
use metro_planner::network::ankara_network;
use metro_planner::planner::Planner;
use metro_planner::render::{describe_route, describe_timed_route};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let network = match ankara_network() {
        Ok(network) => network,
        Err(error) => {
            eprintln!("Failed to build sample network: {error}");
            std::process::exit(1);
        }
    };

    let planner = Planner::new(&network);

    let scenarios = [
        ("AŞTİ to OSB", "M1", "K4"),
        ("Batıkent to Keçiören", "T1", "T4"),
        ("Keçiören to AŞTİ", "T4", "M1"),
    ];

    println!("=== Ankara metro scenarios ===");
    for (index, (label, start, target)) in scenarios.iter().enumerate() {
        let start = StationId::new(*start);
        let target = StationId::new(*target);

        println!();
        println!("{}. {label}:", index + 1);

        match planner.fewest_transfers(&start, &target) {
            Some(route) => println!("Fewest-stops route: {}", describe_route(&route)),
            None => println!("Fewest-stops route: none found"),
        }

        match planner.fastest_route(&start, &target) {
            Some(timed) => println!("Fastest route: {}", describe_timed_route(&timed)),
            None => println!("Fastest route: none found"),
        }
    }
}
