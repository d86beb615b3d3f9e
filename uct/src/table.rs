use rustc_hash::FxHashMap;

use crate::{
    error::{Result, SearchError},
    game::GameState,
};

/// Search rounds are numbered from 1.
pub type Round = u32;

/// Statistics of one action tried from one state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub utility: i32,
    pub visits: u32,
    /// The last round that created or touched this edge.
    pub round: Round,
}

impl Edge {
    pub fn new(utility: i8, round: Round) -> Self {
        Edge {
            utility: utility.into(),
            visits: 1,
            round,
        }
    }

    pub fn mean(&self) -> f64 {
        f64::from(self.utility) / f64::from(self.visits)
    }
}

/// All the edges tried from a single state.
#[derive(Clone, Debug)]
pub struct Node<A> {
    edges: Vec<(A, Edge)>,
}

impl<A> Default for Node<A> {
    fn default() -> Self {
        Node { edges: Vec::new() }
    }
}

impl<A: Copy + PartialEq> Node<A> {
    pub fn edges(&self) -> &[(A, Edge)] {
        &self.edges
    }

    pub fn tried(&self) -> impl Iterator<Item = A> + '_ {
        self.edges.iter().map(|(action, _)| *action)
    }

    pub fn get(&self, action: A) -> Option<&Edge> {
        self.edges
            .iter()
            .find(|(a, _)| *a == action)
            .map(|(_, edge)| edge)
    }

    fn get_mut(&mut self, action: A) -> Option<&mut Edge> {
        self.edges
            .iter_mut()
            .find(|(a, _)| *a == action)
            .map(|(_, edge)| edge)
    }

    /// Replace the edge for `action` or append it. Returns whether it was new.
    fn upsert(&mut self, action: A, edge: Edge) -> bool {
        if let Some(old) = self.get_mut(action) {
            *old = edge;
            false
        } else {
            self.edges.push((action, edge));
            true
        }
    }
}

/// The persistent statistics of the search, one [`Edge`] per `(state, action)`.
pub struct Table<S: GameState> {
    nodes: FxHashMap<S, Node<S::Action>>,
    len: usize,
    // Edges stamped with `latest`, so the current round can be
    // backed up without scanning the whole table.
    latest: Round,
    stamped: Vec<(S, S::Action)>,
}

impl<S: GameState> Default for Table<S> {
    fn default() -> Self {
        Table {
            nodes: FxHashMap::default(),
            len: 0,
            latest: 0,
            stamped: Vec::new(),
        }
    }
}

impl<S: GameState> Table<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn node(&self, state: &S) -> Option<&Node<S::Action>> {
        self.nodes.get(state)
    }

    /// Actions that already have an edge from `state`.
    pub fn find_tried(&self, state: &S) -> Vec<S::Action> {
        self.nodes
            .get(state)
            .map(|node| node.tried().collect())
            .unwrap_or_default()
    }

    pub fn find_edge(&self, state: &S, action: S::Action) -> Option<&Edge> {
        self.nodes.get(state).and_then(|node| node.get(action))
    }

    /// Only the utility may be changed through this, the round is tracked by the table.
    pub(crate) fn find_edge_mut(&mut self, state: &S, action: S::Action) -> Option<&mut Edge> {
        self.nodes.get_mut(state).and_then(|node| node.get_mut(action))
    }

    /// Store `edge` for `(state, action)`, replacing any previous edge.
    pub fn insert(&mut self, state: S, action: S::Action, edge: Edge) {
        self.stamp(&state, action, edge.round);
        if self.nodes.entry(state).or_default().upsert(action, edge) {
            self.len += 1;
        }
    }

    /// Count another visit of an existing edge during `round`.
    pub fn touch(&mut self, state: &S, action: S::Action, round: Round) -> Result<()> {
        let edge = self
            .find_edge_mut(state, action)
            .ok_or(SearchError::Unexplored)?;
        edge.visits += 1;
        edge.round = round;
        self.stamp(state, action, round);
        Ok(())
    }

    fn stamp(&mut self, state: &S, action: S::Action, round: Round) {
        if round > self.latest {
            self.latest = round;
            self.stamped.clear();
        }
        if round == self.latest && !self.stamped.iter().any(|(s, a)| *a == action && s == state) {
            self.stamped.push((state.clone(), action));
        }
    }

    /// Every `(state, action)` whose edge was last created or touched in `round`.
    pub fn records_in_round(&self, round: Round) -> Vec<(S, S::Action)> {
        if round == self.latest {
            self.stamped
                .iter()
                .filter(|(state, action)| {
                    self.find_edge(state, *action)
                        .map_or(false, |edge| edge.round == round)
                })
                .cloned()
                .collect()
        } else {
            self.records()
                .filter(|(_, _, edge)| edge.round == round)
                .map(|(state, action, _)| (state.clone(), action))
                .collect()
        }
    }

    /// Iterate over every edge in the table.
    pub fn records(&self) -> impl Iterator<Item = (&S, S::Action, &Edge)> + '_ {
        self.nodes
            .iter()
            .flat_map(|(state, node)| node.edges().iter().map(move |(action, edge)| (state, *action, edge)))
    }
}
