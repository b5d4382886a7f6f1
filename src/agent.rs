use std::time::Instant;

use super::graph::Graph;
use super::model::Action;
use super::planning::{self, PathPlanner, StrategyKind};

pub struct Agent {
    planner: Box<dyn PathPlanner>,
    tick: u32,
}
impl Agent {
    pub fn new(strategy: StrategyKind) -> Self {
        Self {
            planner: planning::create_planner(strategy),
            tick: 0,
        }
    }

    /// Plans from the first of our bases only
    pub fn act(&mut self, graph: &Graph, my_bases: &[usize]) -> Vec<Action> {
        self.tick += 1;
        tracing::info!("Tick {}: crystals={}, eggs={}", self.tick, graph.total_crystals(), graph.total_eggs());
        tracing::info!("Ants: me={}, enemy={}", graph.own_total_army(), graph.opponent_total_army());

        let source = match my_bases.first() {
            Some(&base) => base,
            None => {
                tracing::warn!("no base to plan from, waiting");
                return Vec::new();
            },
        };

        let start = Instant::now();
        let actions = self.planner.find_best_actions(graph, source);
        tracing::info!("found {} beacons from {} in {:.0} ms", actions.len(), source, start.elapsed().as_secs_f64() * 1000.0);

        actions
    }

    pub fn previous_actions(&self) -> &[Action] {
        self.planner.previous_actions()
    }
}
