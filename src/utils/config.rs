use serde::{Deserialize, Serialize};
use argh::FromArgs;
use crate::graph::ZeroDistance;
use super::error::{Error, Result};

/// Ant colony optimization for the travelling salesman problem
#[derive(FromArgs)]
pub struct Arguments {
    /// problem file with `cities` or `distances`
    #[argh(positional)]
    pub problem: Option<String>,
    /// path to configuration file
    #[argh(option, short='c', default="String::from(\"data/config/default.yaml\")")]
    pub config: String,
    /// scatter this many random cities instead of reading a problem file
    #[argh(option, short='r')]
    pub random: Option<usize>,
    /// write the iteration history as yaml to this path
    #[argh(option)]
    pub history: Option<String>,
    /// override number of ants per iteration
    #[argh(option, short='m')]
    pub ants: Option<usize>,
    /// override maximum number of iterations
    #[argh(option, short='i')]
    pub iterations: Option<usize>,
    /// override pheromone influence
    #[argh(option)]
    pub alpha: Option<f64>,
    /// override heuristic influence
    #[argh(option)]
    pub beta: Option<f64>,
    /// override evaporation rate
    #[argh(option)]
    pub rho: Option<f64>,
    /// override random seed
    #[argh(option, short='s')]
    pub seed: Option<u64>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Config {
    pub name: String,
    #[serde(default)]
    pub random_seed: Option<u64>,
    /// wall-clock limit in milliseconds
    #[serde(default)]
    pub timeout: Option<u64>,
    #[serde(default)]
    pub parameters: Parameters,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Parameters {
    pub alpha: f64,
    pub beta: f64,
    pub rho: f64,
    pub num_ants: usize,
    #[serde(alias = "Q")]
    pub q: f64,
    pub max_iterations: usize,
    pub stagnation_limit: Option<usize>,
    pub target_length: Option<f64>,
    pub start_policy: StartPolicy,
    pub elitist: Option<Elitist>,
    pub pheromone_bounds: Option<[f64; 2]>,
    pub initial_pheromone: InitialPheromone,
    pub zero_distance: ZeroDistance,
    pub parallel: bool,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum StartPolicy {
    /// every ant starts on the same node
    Fixed(usize),
    /// each ant draws its own start node
    Random,
    /// ant k starts on node k mod n
    RoundRobin,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum EliteTour {
    IterationBest,
    GlobalBest,
}

/// Restricts the deposit to a single elite tour, scaled by `weight`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Elitist {
    pub tour: EliteTour,
    #[serde(default = "Elitist::default_weight")]
    pub weight: f64,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum InitialPheromone {
    /// m / Σ d(i, j)
    AntsOverTotalDistance,
    /// 1 / (n · L_nn)
    NearestNeighbour,
    Constant(f64),
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            alpha: 1.0,
            beta: 2.0,
            rho: 0.5,
            num_ants: 20,
            q: 100.0,
            max_iterations: 100,
            stagnation_limit: None,
            target_length: None,
            start_policy: StartPolicy::Random,
            elitist: None,
            pheromone_bounds: None,
            initial_pheromone: InitialPheromone::AntsOverTotalDistance,
            zero_distance: ZeroDistance::Reject,
            parallel: true,
        }
    }
}

impl Elitist {
    fn default_weight() -> f64 {
        1.0
    }
}

impl Parameters {
    pub fn validate(&self) -> Result<()> {
        if !(self.alpha > 0.0 && self.alpha.is_finite()) {
            return Err(Error::InvalidParameter("alpha", self.alpha, "(0, inf)"));
        }
        if !(self.beta >= 0.0 && self.beta.is_finite()) {
            return Err(Error::InvalidParameter("beta", self.beta, "[0, inf)"));
        }
        if !(0.0..=1.0).contains(&self.rho) {
            return Err(Error::InvalidParameter("rho", self.rho, "[0, 1]"));
        }
        if self.num_ants < 1 {
            return Err(Error::InvalidParameter("num_ants", self.num_ants as f64, "[1, inf)"));
        }
        if !(self.q > 0.0 && self.q.is_finite()) {
            return Err(Error::InvalidParameter("q", self.q, "(0, inf)"));
        }
        if self.max_iterations < 1 {
            return Err(Error::InvalidParameter("max_iterations", self.max_iterations as f64, "[1, inf)"));
        }
        if let Some(limit) = self.stagnation_limit {
            if limit < 1 {
                return Err(Error::InvalidParameter("stagnation_limit", limit as f64, "[1, inf)"));
            }
        }
        if let Some(target) = self.target_length {
            if target.is_nan() {
                return Err(Error::InvalidParameter("target_length", target, "a number"));
            }
        }
        if let Some(elitist) = self.elitist {
            if !(elitist.weight > 0.0 && elitist.weight.is_finite()) {
                return Err(Error::InvalidParameter("elitist.weight", elitist.weight, "(0, inf)"));
            }
        }
        if let Some([min, max]) = self.pheromone_bounds {
            if !(min > 0.0 && min <= max && max.is_finite()) {
                return Err(Error::InvalidBounds(min, max));
            }
        }
        if let InitialPheromone::Constant(tau0) = self.initial_pheromone {
            if !(tau0 > 0.0 && tau0.is_finite()) {
                return Err(Error::InvalidParameter("initial_pheromone", tau0, "(0, inf)"));
            }
        }
        Ok(())
    }
}

impl Config {
    pub fn new(name: &str, parameters: Parameters) -> Self {
        Config { name: name.to_owned(), random_seed: None, timeout: None, parameters }
    }
    pub fn override_from_args(&mut self, args: &Arguments) {
        let parameters = &mut self.parameters;
        if let Some(ants) = args.ants {
            parameters.num_ants = ants;
        }
        if let Some(iterations) = args.iterations {
            parameters.max_iterations = iterations;
        }
        if let Some(alpha) = args.alpha {
            parameters.alpha = alpha;
        }
        if let Some(beta) = args.beta {
            parameters.beta = beta;
        }
        if let Some(rho) = args.rho {
            parameters.rho = rho;
        }
        if let Some(seed) = args.seed {
            self.random_seed = Some(seed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_accepts_defaults() {
        assert!(Parameters::default().validate().is_ok());
    }

    #[test]
    fn it_rejects_out_of_domain_parameters() {
        fn check(f: impl Fn(&mut Parameters), name: &str) {
            let mut parameters = Parameters::default();
            f(&mut parameters);
            match parameters.validate() {
                Err(Error::InvalidParameter(got, _, _)) => assert_eq!(got, name),
                other => panic!("expected {} violation, got {:?}", name, other),
            }
        }
        check(|p| p.alpha = 0.0, "alpha");
        check(|p| p.beta = -0.5, "beta");
        check(|p| p.rho = 1.5, "rho");
        check(|p| p.num_ants = 0, "num_ants");
        check(|p| p.q = 0.0, "q");
        check(|p| p.max_iterations = 0, "max_iterations");
        check(|p| p.stagnation_limit = Some(0), "stagnation_limit");
        check(|p| p.initial_pheromone = InitialPheromone::Constant(0.0), "initial_pheromone");
        check(|p| p.elitist = Some(Elitist { tour: EliteTour::GlobalBest, weight: 0.0 }), "elitist.weight");
    }

    #[test]
    fn it_rejects_out_of_range_overrides() {
        let args = Arguments::from_args(&["ant-tour"], &["--rho", "1.5", "-m", "4"]).unwrap();
        let mut config = Config::new("override", Parameters::default());
        config.override_from_args(&args);
        assert_eq!(config.parameters.num_ants, 4);
        assert_eq!(config.parameters.rho, 1.5);
        match config.parameters.validate() {
            Err(Error::InvalidParameter(name, value, _)) => {
                assert_eq!(name, "rho");
                assert_eq!(value, 1.5);
            }
            other => panic!("expected rho violation, got {:?}", other),
        }
    }

    #[test]
    fn it_rejects_inverted_bounds() {
        let parameters = Parameters { pheromone_bounds: Some([2.0, 1.0]), ..Default::default() };
        assert!(matches!(parameters.validate(), Err(Error::InvalidBounds(_, _))));
    }

    #[test]
    fn it_parses_yaml_parameters() {
        let text = r#"
name: sample
random_seed: 42
parameters:
  alpha: 1.5
  Q: 10.0
  num_ants: 8
  start_policy:
    fixed: 2
  elitist:
    tour: global-best
    weight: 2.0
  pheromone_bounds: [0.01, 5.0]
  zero_distance:
    sentinel: 1000000.0
"#;
        let config: Config = serde_yaml::from_str(text).unwrap();
        assert_eq!(config.random_seed, Some(42));
        let parameters = config.parameters;
        assert_eq!(parameters.alpha, 1.5);
        assert_eq!(parameters.q, 10.0);
        assert_eq!(parameters.num_ants, 8);
        assert_eq!(parameters.beta, 2.0);
        assert_eq!(parameters.start_policy, StartPolicy::Fixed(2));
        assert_eq!(parameters.elitist, Some(Elitist { tour: EliteTour::GlobalBest, weight: 2.0 }));
        assert_eq!(parameters.pheromone_bounds, Some([0.01, 5.0]));
        assert_eq!(parameters.zero_distance, ZeroDistance::Sentinel(1e6));
        assert!(parameters.validate().is_ok());
    }
}
