//! Z-hop pipeline
//!
//! One pass over the lines of a file. Each line is tokenized and fed to the
//! position tracker; hop candidates open (or continue) a travel run and are
//! replaced by synthesized lines, everything else is copied through.

use serde::Serialize;
use zhopkit_settings::HopSettings;

use super::{
    is_synthesized, is_travel_move, open_run, parse_motion, HopSynthesizer, PositionTracker,
    TravelRun,
};

/// Counters for one processing run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProcessingStats {
    /// Lines read
    pub input_lines: usize,
    /// Lines produced
    pub output_lines: usize,
    /// Travel moves replaced by a hop
    pub travel_moves: usize,
    /// Travel runs opened
    pub runs: usize,
    /// Hop lines written
    pub hop_lines: usize,
    /// Descent lines written
    pub descent_lines: usize,
    /// `G1` lines skipped because a number failed to parse
    pub malformed_lines: usize,
    /// Lines from an earlier pass, left as they are
    pub already_hopped_lines: usize,
}

impl std::fmt::Display for ProcessingStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} lines in, {} lines out, {} travel moves in {} runs ({} hops, {} descents), {} malformed, {} already hopped",
            self.input_lines,
            self.output_lines,
            self.travel_moves,
            self.runs,
            self.hop_lines,
            self.descent_lines,
            self.malformed_lines,
            self.already_hopped_lines
        )
    }
}

/// Rewrites travel moves of a G-code program into hop/descent pairs
///
/// # Example
/// ```
/// use zhopkit_processor::HopPipeline;
/// use zhopkit_settings::HopSettings;
///
/// let mut pipeline = HopPipeline::new(HopSettings::new(0.2, 1.0, 20.0, 6000, 0.3));
/// let output = pipeline.process(&["G1 X10 Y0 F3000\n"]);
/// assert_eq!(output.len(), 2);
/// ```
#[derive(Debug)]
pub struct HopPipeline {
    synthesizer: HopSynthesizer,
    tracker: PositionTracker,
    run: Option<TravelRun>,
    stats: ProcessingStats,
}

impl HopPipeline {
    /// Create a pipeline for the given settings
    pub fn new(settings: HopSettings) -> Self {
        Self {
            synthesizer: HopSynthesizer::new(settings),
            tracker: PositionTracker::new(),
            run: None,
            stats: ProcessingStats::default(),
        }
    }

    /// Counters accumulated so far
    pub fn stats(&self) -> &ProcessingStats {
        &self.stats
    }

    /// Tracker state after the lines processed so far
    pub fn tracker(&self) -> &PositionTracker {
        &self.tracker
    }

    /// Process a whole program and return the rewritten lines.
    ///
    /// Lines keep their own terminators. Synthesized lines end in `\n`, or
    /// `\r\n` when the travel line they replace does.
    pub fn process<S: AsRef<str>>(&mut self, lines: &[S]) -> Vec<String> {
        let mut output = Vec::with_capacity(lines.len() + lines.len() / 4);

        for (index, raw) in lines.iter().enumerate() {
            let line = raw.as_ref();
            self.stats.input_lines += 1;

            let params = match parse_motion(line) {
                Ok(params) => params,
                Err(e) => {
                    tracing::warn!("{}; line left unchanged", e.at_line(index + 1));
                    self.stats.malformed_lines += 1;
                    self.abandon_run(index);
                    output.push(line.to_string());
                    continue;
                }
            };

            let motion = match params {
                Some(params) => self.tracker.update(&params),
                None => self.tracker.snapshot(),
            };

            if !is_travel_move(line) {
                if is_synthesized(line) {
                    self.stats.already_hopped_lines += 1;
                }
                self.abandon_run(index);
                output.push(line.to_string());
                continue;
            }

            if self.run.is_none() {
                let run_length = open_run(lines, index);
                tracing::debug!(line = index + 1, run_length, "Opening travel run");
                self.stats.runs += 1;
                self.run = Some(TravelRun::new(run_length));
            }

            if let Some(run) = self.run.as_mut() {
                let synthesized = self.synthesizer.synthesize(run, &motion);
                self.stats.travel_moves += 1;
                self.stats.hop_lines += 1;
                if synthesized.descent.is_some() {
                    self.stats.descent_lines += 1;
                }
                let crlf = line.ends_with("\r\n");
                output.extend(synthesized.into_lines().map(|synth| {
                    if crlf {
                        synth.replace('\n', "\r\n")
                    } else {
                        synth
                    }
                }));

                if run.is_complete() {
                    self.run = None;
                }
            }
        }

        self.abandon_run(lines.len());
        self.stats.output_lines += output.len();
        output
    }

    /// Drop an open run without its descent
    fn abandon_run(&mut self, index: usize) {
        if let Some(run) = self.run.take() {
            tracing::warn!(
                line = index + 1,
                moves_emitted = run.moves_emitted(),
                run_length = run.run_length(),
                "Travel run interrupted before its descent"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipeline() -> HopPipeline {
        HopPipeline::new(HopSettings::new(0.2, 1.0, 20.0, 6000, 0.3))
    }

    #[test]
    fn test_non_travel_lines_pass_through() {
        let input = [";LAYER:0\n", "G1 Z0.4 F3000\n", "G1 X10 Y0 E1 F1200\n", "M107"];
        let mut p = pipeline();
        let output = p.process(&input);
        assert_eq!(output, input.to_vec());
        assert_eq!(p.stats().travel_moves, 0);
        assert_eq!(p.stats().output_lines, 4);
    }

    #[test]
    fn test_two_move_run_produces_three_lines() {
        let mut p = pipeline();
        let output = p.process(&["G1 X5 Y0 F3000\n", "G1 X10 Y0 F3000\n"]);
        assert_eq!(
            output,
            vec![
                "G1 X3.5 Y0.0 Z0.0 F3000 ; custom zhop\n".to_string(),
                // target is 0.0 + (5 of 20mm -> 0.4); ramp halfway -> 0.2
                "G1 X8.5 Y0.0 Z0.2 F3000 ; custom zhop\n".to_string(),
                "G1 X10.0 Y0.0 Z0.0 F6000 ; custom zhop lower\n".to_string(),
            ]
        );
        assert_eq!(p.stats().runs, 1);
        assert_eq!(p.stats().descent_lines, 1);
    }

    #[test]
    fn test_malformed_line_is_copied() {
        let mut p = pipeline();
        let output = p.process(&["G1 X1.2.3 Y4\n"]);
        assert_eq!(output, vec!["G1 X1.2.3 Y4\n".to_string()]);
        assert_eq!(p.stats().malformed_lines, 1);
        assert_eq!(p.tracker().position().x, 0.0);
    }

    #[test]
    fn test_stats_display() {
        let stats = ProcessingStats {
            input_lines: 3,
            output_lines: 4,
            travel_moves: 1,
            runs: 1,
            hop_lines: 1,
            descent_lines: 1,
            malformed_lines: 0,
            already_hopped_lines: 0,
        };
        assert_eq!(
            stats.to_string(),
            "3 lines in, 4 lines out, 1 travel moves in 1 runs (1 hops, 1 descents), 0 malformed, 0 already hopped"
        );
    }
}
