use fountain::cluster::{self, ClusterConfig};

fn flag_value(args: &[String], name: &str) -> Option<usize> {
    let index = args.iter().position(|a| a == name)?;
    args.get(index + 1)?.parse().ok()
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if let Some(followers) = flag_value(&args, "--replicas") {
        let config = ClusterConfig {
            followers,
            frames: flag_value(&args, "--frames").map(|f| f as u32).unwrap_or(600),
            ..ClusterConfig::default()
        };
        println!(
            "Starting replicated session: {} followers, {} frames",
            config.followers, config.frames
        );
        let report = cluster::run(&config).unwrap();
        let converged = report
            .followers
            .iter()
            .all(|pool| *pool == report.authoritative);
        println!(
            "Cleaning up. {} particles per display, followers {}",
            report.authoritative.len(),
            if converged { "in lockstep" } else { "DIVERGED" }
        );
    } else {
        println!("Starting up main loop");
        fountain::app::run().unwrap();
        println!("Cleaning up.");
    }
}
