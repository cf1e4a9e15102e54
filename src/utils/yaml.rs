use std::fs;

use serde::{Deserialize, Serialize};

use super::config::Config;
use super::error::{Error, Result};
use crate::component::IterationSummary;
use crate::graph::cities::{self, City};
use crate::graph::DistanceMatrix;

#[derive(Deserialize)]
struct ProblemYaml {
    #[serde(default)]
    cities: Option<Vec<[f64; 2]>>,
    #[serde(default)]
    distances: Option<Vec<Vec<f64>>>,
}

#[derive(Serialize)]
struct HistoryYaml<'a> {
    history: &'a [IterationSummary],
}

pub fn load_config(path: &str) -> Result<Config> {
    let text = fs::read_to_string(path)?;
    parse_config(&text)
}

pub fn parse_config(text: &str) -> Result<Config> {
    let config: Config = serde_yaml::from_str(text)?;
    config.parameters.validate()?;
    Ok(config)
}

pub fn load_problem(path: &str) -> Result<DistanceMatrix> {
    let text = fs::read_to_string(path)?;
    parse_problem(&text)
}

/// Explicit `distances` win over `cities` when both are given.
pub fn parse_problem(text: &str) -> Result<DistanceMatrix> {
    let yaml: ProblemYaml = serde_yaml::from_str(text)?;
    match (yaml.distances, yaml.cities) {
        (Some(rows), _) => DistanceMatrix::from_rows(rows),
        (None, Some(points)) => {
            let points: Vec<City> = points.into_iter()
                .map(|[x, y]| (x, y))
                .collect();
            cities::euclidean(&points)
        }
        (None, None) => Err(Error::EmptyProblem),
    }
}

pub fn dump_history(path: &str, history: &[IterationSummary]) -> Result<()> {
    let text = serde_yaml::to_string(&HistoryYaml { history })?;
    fs::write(path, text)?;
    Ok(())
}
