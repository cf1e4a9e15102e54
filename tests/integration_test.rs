use ant_tour::algorithm::Colony;
use ant_tour::graph::{cities, ZeroDistance};
use ant_tour::utils::config::{EliteTour, Elitist, StartPolicy};
use ant_tour::utils::yaml;
use ant_tour::{run, DistanceMatrix, Error, Parameters, Runner, Termination};

fn unit_square() -> DistanceMatrix {
    yaml::load_problem("data/problems/square.yaml").unwrap()
}

#[test]
fn it_runs_the_default_config() {
    let config = yaml::load_config("data/config/default.yaml").unwrap();
    let mut runner = Runner::new(unit_square(), config).unwrap();
    let (result, _) = runner.run();
    assert!(result.tour.is_valid_for(4));
    assert!((result.best_length() - 4.0).abs() < 1e-9);
}

#[test]
fn it_runs_the_elitist_config() {
    let config = yaml::load_config("data/config/elitist.yaml").unwrap();
    let dm = cities::euclidean(&cities::random_cities(15, 0.0..100.0, 0.0..100.0, 42)).unwrap();
    let mut runner = Runner::new(dm.clone(), config).unwrap();
    let (result, _) = runner.run();
    assert!(result.tour.is_valid_for(15));
    assert_eq!(result.best_length(), dm.tour_length(result.tour.nodes()));
    assert!(result.best_length() <= dm.nearest_neighbour_length() * 1.25);
}

#[test]
fn it_returns_the_round_trip_for_two_nodes() {
    let pair = yaml::load_problem("data/problems/pair.yaml").unwrap();
    for (alpha, beta, rho) in [(1.0, 0.0, 0.0), (3.0, 5.0, 1.0), (0.5, 2.0, 0.5)].iter().copied() {
        let parameters = Parameters { alpha, beta, rho, num_ants: 3, max_iterations: 5, ..Default::default() };
        let result = run(pair.clone(), parameters, Some(1)).unwrap();
        assert_eq!(result.best_length(), 10.0);
        assert!(result.tour.is_valid_for(2));
    }
}

#[test]
fn it_finds_the_square_perimeter() {
    let parameters = Parameters { num_ants: 4, max_iterations: 10, ..Default::default() };
    let result = run(unit_square(), parameters, Some(2024)).unwrap();
    assert!((result.best_length() - 4.0).abs() < 1e-9);
    let first_hit = result.history.iter()
        .position(|summary| (summary.best_so_far - 4.0).abs() < 1e-9)
        .unwrap();
    assert!(first_hit < 5);
}

#[test]
fn it_stops_on_stagnation() {
    // every tour of a triangle has the same length, so only iteration 1 improves
    let triangle = cities::euclidean(&[(0.0, 0.0), (3.0, 0.0), (3.0, 4.0)]).unwrap();
    let parameters = Parameters { stagnation_limit: Some(5), max_iterations: 100, ..Default::default() };
    let result = run(triangle, parameters, Some(3)).unwrap();
    assert_eq!(result.termination, Termination::Stagnation);
    assert_eq!(result.iterations(), 6);
    assert_eq!(result.best_length(), 12.0);
}

#[test]
fn it_applies_the_zero_distance_policy() {
    let rows = vec![
        vec![0.0, 0.0, 1.0, 1.0],
        vec![0.0, 0.0, 1.0, 1.0],
        vec![1.0, 1.0, 0.0, 2.0],
        vec![1.0, 1.0, 2.0, 0.0],
    ];
    let dm = DistanceMatrix::from_rows(rows).unwrap();
    match run(dm.clone(), Parameters::default(), Some(1)) {
        Err(Error::CoincidentNodes(0, 1)) => {}
        other => panic!("expected coincident nodes error, got {:?}", other.map(|r| r.termination)),
    }
    let parameters = Parameters { zero_distance: ZeroDistance::Sentinel(1e3), max_iterations: 20, ..Default::default() };
    let result = run(dm, parameters, Some(1)).unwrap();
    assert!(result.tour.is_valid_for(4));
    assert_eq!(result.best_length(), 4.0);
}

#[test]
fn it_rejects_invalid_input_before_running() {
    assert!(matches!(DistanceMatrix::from_rows(vec![vec![0.0, 1.0, 2.0], vec![1.0, 0.0, 1.0]]),
                     Err(Error::NotSquare(0, 3, 2))));
    let parameters = Parameters { rho: -0.1, ..Default::default() };
    assert!(matches!(run(unit_square(), parameters, None), Err(Error::InvalidParameter("rho", _, _))));
    let parameters = Parameters { start_policy: StartPolicy::Fixed(9), ..Default::default() };
    assert!(matches!(run(unit_square(), parameters, None), Err(Error::StartOutOfRange(9, 4))));
}

#[test]
fn it_only_accumulates_without_evaporation() {
    let dm = cities::euclidean(&cities::random_cities(8, 0.0..10.0, 0.0..10.0, 5)).unwrap();
    let parameters = Parameters { rho: 0.0, num_ants: 1, ..Default::default() };
    let mut colony = Colony::new(dm, parameters, Some(6)).unwrap();
    let mut before: Vec<f64> = colony.pheromone().off_diagonal().collect();
    for _ in 0..25 {
        colony.step();
        let after: Vec<f64> = colony.pheromone().off_diagonal().collect();
        assert!(before.iter().zip(after.iter()).all(|(b, a)| a >= b));
        assert!(after.iter().sum::<f64>() > before.iter().sum::<f64>());
        before = after;
    }
}

#[test]
fn it_reproduces_runs_with_a_seed() {
    let dm = cities::euclidean(&cities::random_cities(20, 0.0..100.0, 0.0..100.0, 11)).unwrap();
    let parameters = Parameters {
        max_iterations: 30,
        elitist: Some(Elitist { tour: EliteTour::IterationBest, weight: 2.0 }),
        ..Default::default()
    };
    let first = run(dm.clone(), parameters.clone(), Some(99)).unwrap();
    let second = run(dm, parameters, Some(99)).unwrap();
    assert_eq!(first.tour, second.tour);
    assert_eq!(first.history, second.history);
    assert_eq!(serde_yaml::to_string(&first.history).unwrap(), serde_yaml::to_string(&second.history).unwrap());
}
