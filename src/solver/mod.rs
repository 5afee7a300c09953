//! Candidate elimination and ranking
//!
//! Feedback is folded into a `ConstraintState`, the candidate set is
//! filtered against it, and survivors are ranked for the next guess.

mod constraints;
pub mod engine;
mod filter;
pub mod ranking;
mod session;

pub use constraints::ConstraintState;
pub use engine::{Outcome, Prompter, run};
pub use filter::{filter, is_consistent};
pub use ranking::{FrequencyTables, RankedWord, RankingModel};
pub use session::{
    Rejection, RoundReport, Session, SessionError, SessionState, SolverConfig,
};
