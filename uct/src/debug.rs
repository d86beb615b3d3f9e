use crate::{game::GameState, table::Table};

impl<S: GameState> Table<S> {
    /// A table of the edges from `state`, most visited first.
    pub fn debug(&self, state: &S, limit: Option<usize>) -> String {
        const MAX_CONTINUATION_LEN: usize = 8;
        let mut out = String::from("action      visits  utility     mean | continuation\n");
        let mut edges = match self.node(state) {
            Some(node) => node.edges().to_vec(),
            None => return out,
        };
        edges.sort_by_key(|(_, edge)| edge.visits);
        edges.reverse();

        for (action, edge) in edges.into_iter().take(limit.unwrap_or(usize::MAX)) {
            let continuation = self
                .continuation(&state.result(action), MAX_CONTINUATION_LEN)
                .into_iter()
                .map(|a| format!("{a:?}"))
                .collect::<Vec<_>>()
                .join(" ");
            out.push_str(&format!(
                "{: <10} {: >7} {: >8} {: >8.4} | {}\n",
                format!("{action:?}"),
                edge.visits,
                edge.utility,
                edge.mean(),
                continuation,
            ));
        }
        out
    }

    /// Follow the most visited edges from `state`.
    pub fn continuation(&self, state: &S, depth: usize) -> Vec<S::Action> {
        let mut line = Vec::new();
        let mut state = state.clone();
        while line.len() < depth {
            let best = self
                .node(&state)
                .and_then(|node| node.edges().iter().max_by_key(|(_, edge)| edge.visits));
            match best {
                Some((action, _)) => {
                    line.push(*action);
                    state = state.result(*action);
                }
                None => break,
            }
        }
        line
    }
}
