use std::{error::Error, fmt::Display};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchError {
    TerminalRoot,
    Unexplored,
    ZeroRound,
    NoLegalActions,
}

impl Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            SearchError::TerminalRoot => "cannot search from a terminal state",
            SearchError::Unexplored => "no action has been tried from this state",
            SearchError::ZeroRound => "rounds are counted from 1",
            SearchError::NoLegalActions => "non-terminal state has no legal actions",
        })
    }
}

impl Error for SearchError {}

pub type Result<T> = std::result::Result<T, SearchError>;
