use std::fmt::Display;
use std::str::FromStr;

use super::error::Error;
use super::graph::Graph;
use super::model::Action;
use super::pathing::BreadthFirstPlanner;

/// Decides each turn where to place beacons.
///
/// The graph is lent for the duration of a call only, since it is updated in place between turns.
pub trait PathPlanner {
    fn find_best_actions(&mut self, graph: &Graph, source: usize) -> Vec<Action>;

    /// Actions issued on the most recent turn, kept for strategies that build on earlier commitments
    fn previous_actions(&self) -> &[Action];
}

#[derive(Copy,Clone,Debug,PartialEq,Eq)]
pub enum StrategyKind {
    BreadthFirst,
}
impl FromStr for StrategyKind {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Self::BreadthFirst),
            _ => Err(Error::UnsupportedStrategy(name.to_string())),
        }
    }
}
impl Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyKind::BreadthFirst => write!(f, "bfs"),
        }
    }
}

pub fn create_planner(kind: StrategyKind) -> Box<dyn PathPlanner> {
    match kind {
        StrategyKind::BreadthFirst => Box::new(BreadthFirstPlanner::new()),
    }
}
