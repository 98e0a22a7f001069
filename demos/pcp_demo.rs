// Demonstration: run the predator-capture-prey environment and evaluate a baseline policy.
//
// Build/run from this repo root:
//   RUST_LOG=pcp_arena=info cargo run --example pcp_demo -- --policy pursuit --episodes 20

use std::env;

use pcp_arena::env::{
    EvaluationMetrics, PcpConfig, PcpEnvironment, Policy, PursuitPolicy, RandomPolicy,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    let policy_name = arg_value(&args, "--policy").unwrap_or("pursuit");
    let episodes: usize = arg_value(&args, "--episodes")
        .and_then(|s| s.parse().ok())
        .unwrap_or(20);
    let seed: u64 = arg_value(&args, "--seed")
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);

    let config = PcpConfig::default();
    let mut env = PcpEnvironment::kinematic(config.clone(), seed)?;

    let mut policy: Box<dyn Policy> = match policy_name {
        "random" => Box::new(RandomPolicy::new(seed)),
        "pursuit" => Box::new(PursuitPolicy::new(config)),
        other => {
            eprintln!("Unknown --policy '{}'; expected 'pursuit' or 'random'.", other);
            std::process::exit(2);
        }
    };

    let metrics = EvaluationMetrics::evaluate(&mut env, policy.as_mut(), episodes)?;
    println!("Policy: {}", policy.name());
    println!("{}", metrics);
    Ok(())
}

fn arg_value<'a>(args: &'a [String], key: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}
