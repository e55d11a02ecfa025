//! Game rules for tic-tac-toe.
//!
//! Pure functions over the board: line predicates and win/draw detection.
//! Rules are kept apart from board storage so the engine and the strategy
//! share one definition of a line.

pub mod line;
pub mod win;

pub use line::{
    LineCounts, LineId, LineKind, check_win, count_by, fork_branch, has_two_blanks_one_mark,
    has_two_marks_one_blank,
};
pub use win::{Outcome, WinLine, detect, winning_line};
