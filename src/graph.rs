use super::diagnostics::GraphDump;
use super::error::{Error, Result};
use super::model::*;

/// Every cell of the map, indexed by its id in `0..cell_count()`.
///
/// Edges are stored exactly as inserted: `add_directed_edge(a, b)` does not imply `b -> a`.
/// Whoever loads the topology is responsible for inserting both directions.
///
/// Aggregates are never cached, each query rescans the cells so it always reflects the latest update.
#[derive(Debug)]
pub struct Graph {
    cells: Vec<Cell>,
}
impl Graph {
    pub fn new(num_cells: usize) -> Self {
        let mut cells = Vec::new();
        cells.resize_with(num_cells, Cell::default);
        Self { cells }
    }

    pub fn cell(&self, id: usize) -> Option<&Cell> {
        let cell = self.lookup(id);
        if cell.is_none() {
            tracing::warn!(id, num_cells = self.cells.len(), "lookup of unknown cell");
        }
        cell
    }

    /// Same as `cell` but without reporting absent ids
    pub(crate) fn lookup(&self, id: usize) -> Option<&Cell> {
        self.cells.get(id)
    }

    pub fn add_directed_edge(&mut self, source: usize, target: usize) -> Result<()> {
        let num_cells = self.cells.len();
        if target >= num_cells {
            tracing::warn!(source, target, num_cells, "edge to unknown cell ignored");
            return Err(Error::UnknownCell { id: target });
        }

        let cell = match self.cells.get_mut(source) {
            Some(cell) => cell,
            None => {
                tracing::warn!(source, target, num_cells, "edge from unknown cell ignored");
                return Err(Error::UnknownCell { id: source });
            },
        };

        if !cell.neighbors.contains(&target) {
            cell.neighbors.push(target);
        }
        Ok(())
    }

    pub fn update_cell(&mut self, id: usize, update: CellUpdate) -> Result<()> {
        let num_cells = self.cells.len();
        match self.cells.get_mut(id) {
            Some(cell) => {
                update.apply(cell);
                Ok(())
            },
            None => {
                tracing::warn!(id, num_cells, "update of unknown cell ignored");
                Err(Error::UnknownCell { id })
            },
        }
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> impl ExactSizeIterator<Item=&Cell> + '_ {
        self.cells.iter()
    }

    pub fn total_crystals(&self) -> u64 {
        self.total_resources(ResourceType::Crystal)
    }

    pub fn total_eggs(&self) -> u64 {
        self.total_resources(ResourceType::Egg)
    }

    fn total_resources(&self, resource_type: ResourceType) -> u64 {
        self.cells.iter()
            .filter(|cell| cell.resource_type == resource_type)
            .map(|cell| cell.resources as u64)
            .sum()
    }

    pub fn own_total_army(&self) -> u64 {
        self.cells.iter().map(|cell| cell.own_army as u64).sum()
    }

    pub fn opponent_total_army(&self) -> u64 {
        self.cells.iter().map(|cell| cell.opponent_army as u64).sum()
    }

    /// Writes a snapshot of the topology and resources to the diagnostics target
    pub fn dump(&self) {
        GraphDump::capture(self).emit();
    }
}

#[cfg(test)]
mod tests {
    use super::Graph;
    use crate::error::Error;
    use crate::model::*;
    use crate::testing::CapturedLogs;
    use proptest::prelude::*;

    fn line(num_cells: usize) -> Graph {
        let mut graph = Graph::new(num_cells);
        for i in 1..num_cells {
            graph.add_directed_edge(i - 1, i).unwrap();
            graph.add_directed_edge(i, i - 1).unwrap();
        }
        graph
    }

    #[test]
    fn new_cells_are_empty() {
        let graph = Graph::new(3);
        assert_eq!(graph.cell_count(), 3);
        for cell in graph.cells() {
            assert_eq!(*cell, Cell::default());
        }
        assert_eq!(graph.total_crystals(), 0);
        assert_eq!(graph.own_total_army(), 0);
    }

    #[test]
    fn edges_are_directed() {
        let mut graph = Graph::new(2);
        graph.add_directed_edge(0, 1).unwrap();
        assert_eq!(graph.cell(0).unwrap().neighbors, vec![1]);
        assert!(graph.cell(1).unwrap().neighbors.is_empty());
    }

    #[test]
    fn duplicate_edges_are_kept_once_in_insertion_order() {
        let mut graph = Graph::new(4);
        graph.add_directed_edge(0, 3).unwrap();
        graph.add_directed_edge(0, 1).unwrap();
        graph.add_directed_edge(0, 3).unwrap();
        assert_eq!(graph.cell(0).unwrap().neighbors, vec![3, 1]);
    }

    #[test]
    fn unknown_ids_are_reported_and_ignored() {
        let mut graph = line(3);
        assert!(graph.cell(3).is_none());
        assert!(matches!(graph.add_directed_edge(0, 7), Err(Error::UnknownCell { id: 7 })));
        assert!(matches!(graph.add_directed_edge(9, 0), Err(Error::UnknownCell { id: 9 })));
        assert!(matches!(graph.update_cell(3, CellUpdate::turn(10, 10, 10)), Err(Error::UnknownCell { id: 3 })));

        assert_eq!(graph.cell(0).unwrap().neighbors, vec![1]);
        assert_eq!(graph.cell_count(), 3);
        assert_eq!(graph.own_total_army(), 0);
        assert_eq!(graph.total_crystals(), 0);
    }

    #[test]
    fn each_unknown_id_logs_one_warning() {
        let mut graph = line(3);

        let logs = CapturedLogs::default();
        logs.capture(|| graph.update_cell(3, CellUpdate::turn(1, 1, 1))).unwrap_err();
        let warnings = logs.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("update of unknown cell ignored"));
        assert!(warnings[0].contains("id=3"));

        let logs = CapturedLogs::default();
        logs.capture(|| graph.add_directed_edge(0, 5)).unwrap_err();
        assert_eq!(logs.warnings().len(), 1);

        let logs = CapturedLogs::default();
        logs.capture(|| graph.add_directed_edge(5, 0)).unwrap_err();
        assert_eq!(logs.warnings().len(), 1);

        let logs = CapturedLogs::default();
        assert!(logs.capture(|| graph.cell(3).is_none()));
        assert_eq!(logs.warnings().len(), 1);
    }

    #[test]
    fn known_ids_log_nothing() {
        let mut graph = line(3);
        let logs = CapturedLogs::default();
        logs.capture(|| {
            graph.update_cell(1, CellUpdate::turn(1, 1, 1)).unwrap();
            graph.add_directed_edge(0, 2).unwrap();
            assert!(graph.cell(2).is_some());
        });
        assert!(logs.lines().is_empty());
    }

    #[test]
    fn army_totals_do_not_overflow() {
        let mut graph = Graph::new(2);
        graph.update_cell(0, CellUpdate::turn(0, u32::MAX, u32::MAX)).unwrap();
        graph.update_cell(1, CellUpdate::turn(0, 1, 1)).unwrap();
        assert_eq!(graph.own_total_army(), u32::MAX as u64 + 1);
        assert_eq!(graph.opponent_total_army(), u32::MAX as u64 + 1);
    }

    #[test]
    fn aggregates_reflect_latest_update() {
        let mut graph = line(3);
        graph.update_cell(0, CellUpdate::layout(ResourceType::Egg, 4)).unwrap();
        graph.update_cell(2, CellUpdate::layout(ResourceType::Crystal, 10)).unwrap();
        graph.update_cell(1, CellUpdate::turn(0, 6, 2)).unwrap();
        assert_eq!(graph.total_eggs(), 4);
        assert_eq!(graph.total_crystals(), 10);
        assert_eq!(graph.own_total_army(), 6);
        assert_eq!(graph.opponent_total_army(), 2);

        graph.update_cell(2, CellUpdate::turn(3, 1, 0)).unwrap();
        graph.update_cell(1, CellUpdate::turn(0, 0, 0)).unwrap();
        assert_eq!(graph.total_crystals(), 3);
        assert_eq!(graph.own_total_army(), 1);
        assert_eq!(graph.opponent_total_army(), 0);
        assert_eq!(graph.cell(2).unwrap().neighbors, vec![1]);
    }

    proptest! {
        #[test]
        fn unknown_ids_never_mutate(num_cells in 1usize..8, offset in 0usize..100, army in 0u32..50) {
            let mut graph = line(num_cells);
            graph.update_cell(0, CellUpdate::turn(1, 2, 3)).unwrap();
            let before: Vec<Cell> = graph.cells().cloned().collect();

            let unknown = num_cells + offset;
            prop_assert!(graph.cell(unknown).is_none());
            prop_assert!(graph.add_directed_edge(unknown, 0).is_err());
            prop_assert!(graph.add_directed_edge(0, unknown).is_err());
            prop_assert!(graph.update_cell(unknown, CellUpdate::turn(army, army, army)).is_err());

            let after: Vec<Cell> = graph.cells().cloned().collect();
            prop_assert_eq!(before, after);
        }
    }
}
