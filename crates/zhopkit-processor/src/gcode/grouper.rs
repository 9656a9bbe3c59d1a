//! Travel run look-ahead
//!
//! A run is a maximal block of consecutive hop candidates. Its length is
//! counted once, from the run's first line, and then fixed while the main
//! pass walks through the same lines.

use super::is_hop_candidate;

/// Count the hop candidates starting at `start_index`.
///
/// The count includes the line at `start_index` and stops at the first line
/// that is not a candidate or at the end of input. Returns 0 when the start
/// line itself is not a candidate or is out of range.
pub fn open_run<S: AsRef<str>>(lines: &[S], start_index: usize) -> usize {
    lines
        .get(start_index..)
        .map(|tail| {
            tail.iter()
                .take_while(|line| is_hop_candidate(line.as_ref()))
                .count()
        })
        .unwrap_or(0)
}

/// Progress through one open travel run
#[derive(Debug, Clone, PartialEq)]
pub struct TravelRun {
    run_length: usize,
    moves_emitted: usize,
    target_hop_height: f64,
}

impl TravelRun {
    /// Start a run of `run_length` moves
    pub fn new(run_length: usize) -> Self {
        Self {
            run_length,
            moves_emitted: 0,
            target_hop_height: 0.0,
        }
    }

    /// Number of travel moves in the run
    pub fn run_length(&self) -> usize {
        self.run_length
    }

    /// Moves already synthesized
    pub fn moves_emitted(&self) -> usize {
        self.moves_emitted
    }

    /// True before the first move has been synthesized
    pub fn is_first_move(&self) -> bool {
        self.moves_emitted == 0
    }

    /// Hop height fixed by the run's first move
    pub fn target_hop_height(&self) -> f64 {
        self.target_hop_height
    }

    pub(crate) fn set_target_hop_height(&mut self, height: f64) {
        self.target_hop_height = height;
    }

    /// Record one synthesized move; returns true when the run is finished
    pub fn advance(&mut self) -> bool {
        self.moves_emitted += 1;
        self.is_complete()
    }

    /// All moves of the run have been synthesized
    pub fn is_complete(&self) -> bool {
        self.moves_emitted >= self.run_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|l| format!("{l}\n")).collect()
    }

    #[test]
    fn test_counts_consecutive_travel_moves() {
        let input = lines(&[
            "G1 X1 Y1 E0.5",
            "G1 X5 Y0 F3000",
            "G1 X10 Y0",
            "G1 Y4",
            "G1 X12 Y4 E1.2",
            "G1 X20 Y0",
        ]);
        assert_eq!(open_run(&input, 1), 3);
        assert_eq!(open_run(&input, 2), 2);
        assert_eq!(open_run(&input, 5), 1);
    }

    #[test]
    fn test_non_candidate_start_and_out_of_range() {
        let input = lines(&["G1 X1 Y1 E0.5", "G1 X5 Y0"]);
        assert_eq!(open_run(&input, 0), 0);
        assert_eq!(open_run(&input, 2), 0);
        assert_eq!(open_run(&input, 99), 0);
    }

    #[test]
    fn test_z_only_and_comments_end_a_run() {
        let input = lines(&["G1 X5 Y0", "G1 Z0.6", "G1 X6 Y0"]);
        assert_eq!(open_run(&input, 0), 1);

        let input = lines(&["G1 X5 Y0", ";LAYER:2", "G1 X6 Y0"]);
        assert_eq!(open_run(&input, 0), 1);
    }

    #[test]
    fn test_synthesized_lines_end_a_run() {
        let input = lines(&["G1 X5 Y0", "G1 X3.5 Y0.0 Z0.2 F3000 ; custom zhop"]);
        assert_eq!(open_run(&input, 0), 1);
    }

    #[test]
    fn test_travel_run_lifecycle() {
        let mut run = TravelRun::new(2);
        assert!(run.is_first_move());
        assert!(!run.advance());
        assert!(!run.is_first_move());
        assert_eq!(run.moves_emitted(), 1);
        assert!(run.advance());
        assert!(run.is_complete());
    }
}
