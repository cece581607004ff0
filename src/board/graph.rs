use std::collections::{HashSet, VecDeque};

use petgraph::graphmap::{DiGraphMap, UnGraphMap};

use crate::board::ids::CellId;

/// A single `(cell, value)` pair, the node type of the forcing and contradiction graphs.
///
/// Ported from the original Python source's `(cell, value)` tuples used as `networkx` node
/// keys in `Constraint.initialise_seen_graph`/`Board.update_candidate_links`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Candidate {
    pub cell: CellId,
    pub value: u8
}

impl Candidate {
    pub fn new(cell: CellId, value: u8) -> Candidate {
        Candidate { cell, value }
    }
}

/// The three auxiliary graphs a [`crate::board::Board`] maintains alongside its cell arena.
///
/// `petgraph` is new to this crate's dependency stack (the teacher has no graph library at
/// all) but is already used elsewhere in the example pack for exactly this kind of
/// node/edge bookkeeping, so it's reused here instead of hand-rolled.
#[derive(Debug, Clone, Default)]
pub struct CandidateGraphs {
    /// `a -> b` when assigning candidate `a` would force candidate `b`.
    pub forcing_values: DiGraphMap<Candidate, ()>,
    /// Undirected edge between `a` and `b` when they can never both hold in a solution.
    pub contradiction_graph: UnGraphMap<Candidate, ()>,
    /// Undirected edge between two cells that some uniqueness constraint requires to differ.
    pub seen_graph: UnGraphMap<CellId, ()>
}

impl CandidateGraphs {
    pub fn new() -> CandidateGraphs {
        CandidateGraphs::default()
    }

    pub fn add_seen(&mut self, a: CellId, b: CellId) {
        if a != b {
            self.seen_graph.add_edge(a, b, ());
        }
    }

    pub fn sees(&self, a: CellId, b: CellId) -> bool {
        self.seen_graph.contains_edge(a, b)
    }

    pub fn add_forcing(&mut self, from: Candidate, to: Candidate) {
        self.forcing_values.add_edge(from, to, ());
    }

    pub fn add_contradiction(&mut self, a: Candidate, b: Candidate) {
        if a != b {
            self.contradiction_graph.add_edge(a, b, ());
        }
    }

    pub fn contradicts(&self, a: Candidate, b: Candidate) -> bool {
        self.contradiction_graph.contains_edge(a, b)
    }

    /// Candidates directly forced by assigning `candidate`.
    pub fn forced_by(&self, candidate: Candidate) -> impl Iterator<Item = Candidate> + '_ {
        self.forcing_values.neighbors(candidate)
    }

    /// Every candidate reachable from `start` by following directed `forcing_values` edges,
    /// including `start` itself: the set of holdings that assigning `start` would force.
    pub fn forcing_reachable(&self, start: Candidate) -> HashSet<Candidate> {
        let mut seen = HashSet::new();
        let mut queue = VecDeque::new();
        seen.insert(start);
        queue.push_back(start);

        while let Some(node) = queue.pop_front() {
            for next in self.forcing_values.neighbors(node) {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        seen
    }

    /// Whether any two distinct candidates in `reachable` mutually contradict, i.e. the
    /// induced subgraph of `reachable` in `contradiction_graph` has an edge.
    pub fn reachable_set_self_contradicts(&self, reachable: &HashSet<Candidate>) -> bool {
        reachable.iter().any(|&a| reachable.iter().any(|&b| a != b && self.contradicts(a, b)))
    }

    /// Removes every edge touching a candidate on this cell other than `keep`, called once a
    /// cell is finalised and its other candidates' graph entries are no longer meaningful.
    pub fn retain_only(&mut self, cell: CellId, keep: u8) {
        let stale: Vec<Candidate> = self
            .forcing_values
            .nodes()
            .chain(self.contradiction_graph.nodes())
            .filter(|c| c.cell == cell && c.value != keep)
            .collect();

        for candidate in stale {
            self.forcing_values.remove_node(candidate);
            self.contradiction_graph.remove_node(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forcing_edge_is_directed() {
        let mut graphs = CandidateGraphs::new();
        let a = Candidate::new(CellId::new(0), 1);
        let b = Candidate::new(CellId::new(1), 2);
        graphs.add_forcing(a, b);
        assert_eq!(graphs.forced_by(a).collect::<Vec<_>>(), vec![b]);
        assert_eq!(graphs.forced_by(b).count(), 0);
    }

    #[test]
    fn contradiction_edge_is_undirected() {
        let mut graphs = CandidateGraphs::new();
        let a = Candidate::new(CellId::new(0), 1);
        let b = Candidate::new(CellId::new(1), 2);
        graphs.add_contradiction(a, b);
        assert!(graphs.contradicts(a, b));
        assert!(graphs.contradicts(b, a));
    }

    #[test]
    fn seen_graph_ignores_self_loops() {
        let mut graphs = CandidateGraphs::new();
        let cell = CellId::new(0);
        graphs.add_seen(cell, cell);
        assert!(!graphs.sees(cell, cell));
    }

    #[test]
    fn forcing_chain_to_a_contradiction_is_detected() {
        let mut graphs = CandidateGraphs::new();
        let a = Candidate::new(CellId::new(0), 1);
        let b = Candidate::new(CellId::new(1), 2);
        let c = Candidate::new(CellId::new(2), 3);
        graphs.add_forcing(a, b);
        graphs.add_forcing(b, c);
        graphs.add_contradiction(b, c);

        let reachable = graphs.forcing_reachable(a);
        assert!(reachable.contains(&b));
        assert!(reachable.contains(&c));
        assert!(graphs.reachable_set_self_contradicts(&reachable));
    }

    #[test]
    fn forcing_chain_without_contradiction_is_clean() {
        let mut graphs = CandidateGraphs::new();
        let a = Candidate::new(CellId::new(0), 1);
        let b = Candidate::new(CellId::new(1), 2);
        graphs.add_forcing(a, b);

        let reachable = graphs.forcing_reachable(a);
        assert!(!graphs.reachable_set_self_contradicts(&reachable));
    }
}
