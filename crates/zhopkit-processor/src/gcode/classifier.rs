//! Line classification
//!
//! Two independent questions are asked of every line:
//! - does it start with a `G1` command, and which X/Y/Z/F words follow it
//!   ([`parse_motion`])
//! - is it a travel move, judged on the raw text ([`is_travel_move`])
//!
//! The parameter words are only recognised in the fixed order X, Y, Z, F,
//! each introduced by a single space. Slicers emit `G1` lines in exactly
//! this shape; anything else on the line is ignored.

use zhopkit_core::{GcodeError, PartialPosition};

/// Command that carries motion parameters
pub const MOTION_COMMAND: &str = "G1";

/// Comment tag carried by every synthesized line
pub const HOP_MARKER: &str = "; custom zhop";

/// Parameters found on a `G1` line; every field is absent unless the line
/// spells it out.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionParams {
    /// X/Y/Z words
    pub position: PartialPosition,
    /// F word
    pub feed_rate: Option<u64>,
}

struct WordCursor<'a> {
    rest: &'a str,
}

impl<'a> WordCursor<'a> {
    /// Consume ` <letter><literal>` if it is next; the cursor does not move
    /// otherwise.
    fn take_word(&mut self, letter: char, accept: fn(char) -> bool) -> Option<&'a str> {
        let after = self.rest.strip_prefix(' ')?.strip_prefix(letter)?;
        let len = after.find(|c: char| !accept(c)).unwrap_or(after.len());
        if len == 0 {
            return None;
        }
        let (literal, rest) = after.split_at(len);
        self.rest = rest;
        Some(literal)
    }

    fn decimal(&mut self, letter: char) -> Result<Option<f64>, GcodeError> {
        self.take_word(letter, |c| c.is_ascii_digit() || c == '.')
            .map(|literal| literal.parse::<f64>().map_err(|_| invalid(letter, literal)))
            .transpose()
    }

    fn integer(&mut self, letter: char) -> Result<Option<u64>, GcodeError> {
        self.take_word(letter, |c| c.is_ascii_digit())
            .map(|literal| literal.parse::<u64>().map_err(|_| invalid(letter, literal)))
            .transpose()
    }
}

fn invalid(param: char, literal: &str) -> GcodeError {
    GcodeError::InvalidNumber {
        line_number: 0,
        param,
        literal: literal.to_string(),
    }
}

/// Extract the motion parameters of a line.
///
/// Returns `Ok(None)` when the line does not start with `G1`, and
/// `Ok(Some(..))` (possibly with every field empty) when it does. A literal
/// that is not a valid number fails the whole line; the returned error has
/// line number 0, see [`GcodeError::at_line`].
pub fn parse_motion(line: &str) -> Result<Option<MotionParams>, GcodeError> {
    let Some(rest) = line.strip_prefix(MOTION_COMMAND) else {
        return Ok(None);
    };

    let mut cursor = WordCursor { rest };
    let x = cursor.decimal('X')?;
    let y = cursor.decimal('Y')?;
    let z = cursor.decimal('Z')?;
    let feed_rate = cursor.integer('F')?;

    Ok(Some(MotionParams {
        position: PartialPosition { x, y, z },
        feed_rate,
    }))
}

/// True for lines produced by the hop synthesizer
pub fn is_synthesized(line: &str) -> bool {
    line.contains(HOP_MARKER)
}

/// Raw-text travel test: a `G1` without any `E`, mentioning X or Y.
///
/// Lines tagged with [`HOP_MARKER`] are never travel moves, so output of a
/// previous run is left alone.
pub fn is_travel_move(line: &str) -> bool {
    line.contains(MOTION_COMMAND)
        && !line.contains('E')
        && (line.contains('X') || line.contains('Y'))
        && !is_synthesized(line)
}

/// Travel move whose parameters also parse; only these get hopped.
pub fn is_hop_candidate(line: &str) -> bool {
    is_travel_move(line) && parse_motion(line).is_ok()
}
