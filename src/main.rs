use ant_tour::graph::cities;
use ant_tour::utils::config::{Arguments, Config};
use ant_tour::utils::yaml;
use ant_tour::Runner;
use std::process;
use std::sync::atomic::Ordering;

const RANDOM_SEED: u64 = 42;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args: Arguments = argh::from_env();
    if let Err(err) = solve(args) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn solve(args: Arguments) -> ant_tour::Result<()> {
    let mut config: Config = yaml::load_config(&args.config)?;
    config.override_from_args(&args);
    config.parameters.validate()?;

    let distances = match (&args.problem, args.random) {
        (Some(path), _) => yaml::load_problem(path)?,
        (None, Some(count)) => {
            let seed = config.random_seed.unwrap_or(RANDOM_SEED);
            cities::euclidean(&cities::random_cities(count, 0.0..100.0, 0.0..100.0, seed))?
        }
        (None, None) => yaml::load_problem("data/problems/square.yaml")?,
    };

    let mut runner = Runner::new(distances, config)?;
    let interruption = runner.interruption();
    ctrlc::set_handler(move || interruption.store(true, Ordering::Relaxed))
        .expect("cannot set interruption handler");

    let (result, elapsed) = runner.run();
    print!("{}", runner.show_results(&result));
    println!("--- computing time: {} μs ---", elapsed);

    if let Some(path) = args.history {
        yaml::dump_history(&path, &result.history)?;
    }
    Ok(())
}
