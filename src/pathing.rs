use std::collections::VecDeque;

use super::graph::Graph;
use super::model::*;
use super::planning::PathPlanner;

/// A cell frozen at the moment it was appended to a path.
/// Later updates to the graph do not change it; the neighbor list is shared with the graph.
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub struct CellSnapshot<'g> {
    pub id: usize,
    pub resource_type: ResourceType,
    pub resources: u32,
    /// Army counts are not scored by the breadth-first planner, they are kept for strategies that weigh army presence
    pub own_army: u32,
    pub opponent_army: u32,
    pub neighbors: &'g [usize],
}
impl<'g> CellSnapshot<'g> {
    pub fn capture(id: usize, cell: &'g Cell) -> Self {
        Self {
            id,
            resource_type: cell.resource_type,
            resources: cell.resources,
            own_army: cell.own_army,
            opponent_army: cell.opponent_army,
            neighbors: &cell.neighbors,
        }
    }

    pub fn crystal_value(&self) -> u32 {
        crystal_value(self.resource_type, self.resources)
    }
}

/// One candidate path, stored as its last vertex plus a link to the candidate it was extended from
struct PathNode<'g> {
    vertex: CellSnapshot<'g>,
    parent: Option<usize>,
    length: usize,
    crystals: u64,
}

/// Arena of every candidate path found during one search, in the order they were found.
/// Extending a path pushes a new node and leaves its parent in place as a candidate of its own.
struct CandidatePaths<'g> {
    nodes: Vec<PathNode<'g>>,
}
impl<'g> CandidatePaths<'g> {
    fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn seed(&mut self, vertex: CellSnapshot<'g>) {
        self.nodes.push(PathNode {
            crystals: vertex.crystal_value() as u64,
            vertex,
            parent: None,
            length: 1,
        });
    }

    fn extend(&mut self, parent: usize, vertex: CellSnapshot<'g>) {
        let (length, crystals) = {
            let parent = &self.nodes[parent];
            (parent.length + 1, parent.crystals + vertex.crystal_value() as u64)
        };
        self.nodes.push(PathNode {
            vertex,
            parent: Some(parent),
            length,
            crystals,
        });
    }

    /// Extends every existing candidate whose last vertex lists the new vertex as a neighbor.
    /// Returns false if there were none.
    fn extend_adjacent(&mut self, vertex: CellSnapshot<'g>) -> bool {
        let num_existing = self.nodes.len();
        let mut extended = false;
        for index in 0..num_existing {
            if self.nodes[index].vertex.neighbors.contains(&vertex.id) {
                self.extend(index, vertex);
                extended = true;
            }
        }
        extended
    }

    /// Highest crystal total among paths of at most `max_length` vertices, earliest found wins ties
    fn select_best(&self, max_length: usize) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (index, node) in self.nodes.iter().enumerate() {
            if node.length > max_length { continue }

            let is_better = match best {
                Some(best) => self.nodes[best].crystals < node.crystals,
                None => true,
            };
            if is_better {
                best = Some(index);
            }
        }
        best
    }

    fn vertices(&self, tail: usize) -> Vec<CellSnapshot<'g>> {
        let mut vertices = Vec::with_capacity(self.nodes[tail].length);
        let mut current = Some(tail);
        while let Some(index) = current {
            let node = &self.nodes[index];
            vertices.push(node.vertex);
            current = node.parent;
        }
        vertices.reverse();
        vertices
    }
}

pub struct BestPath<'g> {
    pub cells: Vec<CellSnapshot<'g>>,
    pub crystals: u64,
}

#[derive(Clone,Copy,Debug,Default,PartialEq,Eq)]
pub struct SearchStats {
    pub num_visited: usize,
    pub num_candidates: usize,
}

/// Finds the path from the source that collects the most crystals and spreads every ant evenly along it
pub struct BreadthFirstPlanner {
    previous_actions: Vec<Action>,
}
impl BreadthFirstPlanner {
    pub fn new() -> Self {
        Self {
            previous_actions: Vec::new(),
        }
    }

    /// Walks the graph outwards from the source, growing candidate paths one cell at a time.
    /// Dominated candidates are never discarded, so the candidate count can grow quickly on dense maps.
    pub fn search<'g>(graph: &'g Graph, source: usize) -> (Option<BestPath<'g>>, SearchStats) {
        let num_cells = graph.cell_count();
        let mut candidates = CandidatePaths::new();
        let mut stats = SearchStats::default();

        let mut visited = vec![false; num_cells];
        let mut queue = VecDeque::new();
        queue.push_back(source);
        if source < num_cells {
            visited[source] = true;
        }

        while let Some(id) = queue.pop_front() {
            let cell = match graph.lookup(id) {
                Some(cell) => cell,
                None => continue, // silently skip cells that do not exist
            };
            stats.num_visited += 1;

            let vertex = CellSnapshot::capture(id, cell);
            if !candidates.extend_adjacent(vertex) {
                candidates.seed(vertex);
            }

            for &neighbor in cell.neighbors.iter() {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    queue.push_back(neighbor);
                }
            }
        }
        stats.num_candidates = candidates.len();

        let best = candidates.select_best(num_cells).map(|tail| BestPath {
            cells: candidates.vertices(tail),
            crystals: candidates.nodes[tail].crystals,
        });
        (best, stats)
    }
}
impl Default for BreadthFirstPlanner {
    fn default() -> Self {
        Self::new()
    }
}
impl PathPlanner for BreadthFirstPlanner {
    fn find_best_actions(&mut self, graph: &Graph, source: usize) -> Vec<Action> {
        let (best, stats) = Self::search(graph, source);
        tracing::debug!(source, visited = stats.num_visited, candidates = stats.num_candidates, "breadth-first search complete");

        let actions = match best {
            Some(path) => {
                tracing::debug!(length = path.cells.len(), crystals = path.crystals, "selected path");
                spread_army_along(&path.cells, graph.own_total_army())
            },
            None => Vec::new(),
        };

        self.previous_actions = actions.clone();
        actions
    }

    fn previous_actions(&self) -> &[Action] {
        &self.previous_actions
    }
}

/// One beacon per path cell, all with the same strength
pub fn spread_army_along(path: &[CellSnapshot], total_army: u64) -> Vec<Action> {
    if path.is_empty() { return Vec::new() }

    let per_cell = total_army / path.len() as u64; // intentional integer division since ants can't be split
    let strength = u32::try_from(per_cell).unwrap_or(u32::MAX);
    path.iter().map(|vertex| Action::Beacon { cell: vertex.id, strength }).collect()
}
