//! Hop and descent synthesis
//!
//! Each travel move of a run is replaced by a move to its peak: part of the
//! way along the XY travel, lifted to the hop height. The last move of a run
//! is followed by a descent to the real target at the pre-hop Z.
//!
//! The hop height of a run is chosen once, from the first move's travel
//! distance, blending between `min_hop` and `max_hop`. In a run of several
//! moves the height ramps from the current Z towards that target as the run
//! progresses. The ramp is evaluated at `moves_emitted / run_length`, so the
//! last move of a multi-move run stops one step short of the target height.
//! Existing output depends on that, so it is kept.

use zhopkit_settings::HopSettings;

use super::format::format_coordinate;
use super::{MotionSnapshot, TravelRun, HOP_MARKER};

/// Linear blend of `value` from `[minimum, maximum]` onto `[start, end]`,
/// clamped at both ends.
pub fn interpolate(value: f64, minimum: f64, maximum: f64, start: f64, end: f64) -> f64 {
    if value >= maximum {
        return end;
    }
    if value <= minimum {
        return start;
    }
    let normalized = (value - minimum) / (maximum - minimum);
    start + (end - start) * normalized
}

/// Lines produced for one travel move
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesizedMove {
    /// Move to the peak
    pub hop: String,
    /// Descent after the last move of a run
    pub descent: Option<String>,
}

impl SynthesizedMove {
    /// Lines in output order
    pub fn into_lines(self) -> impl Iterator<Item = String> {
        std::iter::once(self.hop).chain(self.descent)
    }
}

/// Builds replacement lines for travel moves
#[derive(Debug, Clone)]
pub struct HopSynthesizer {
    settings: HopSettings,
}

impl HopSynthesizer {
    /// Create a synthesizer for the given settings
    pub fn new(settings: HopSettings) -> Self {
        Self { settings }
    }

    /// Absolute hop height for a run whose first move covers `distance`
    pub fn run_target_height(&self, distance: f64, current_z: f64) -> f64 {
        current_z
            + interpolate(
                distance,
                0.0,
                self.settings.max_hop_distance_threshold,
                self.settings.min_hop,
                self.settings.max_hop,
            )
    }

    /// Hop height of the run's next move
    pub fn hop_height(&self, run: &TravelRun, current_z: f64) -> f64 {
        if run.run_length() > 1 {
            interpolate(
                run.moves_emitted() as f64,
                0.0,
                run.run_length() as f64,
                current_z,
                run.target_hop_height(),
            )
        } else {
            run.target_hop_height()
        }
    }

    /// XY point where the hop peaks
    pub fn peak(&self, motion: &MotionSnapshot) -> (f64, f64) {
        let peak = motion
            .previous()
            .lerp_xy(&motion.target(), self.settings.peak_fraction());
        (peak.x, peak.y)
    }

    /// Produce the lines for the run's next move and advance the run.
    ///
    /// The descent is present exactly when this move completes the run.
    pub fn synthesize(&self, run: &mut TravelRun, motion: &MotionSnapshot) -> SynthesizedMove {
        if run.is_first_move() {
            let distance = motion.travel_distance();
            run.set_target_hop_height(self.run_target_height(distance, motion.current_z));
        }

        let height = self.hop_height(run, motion.current_z);
        let (peak_x, peak_y) = self.peak(motion);
        let hop = format!(
            "G1 X{} Y{} Z{} F{} {}\n",
            format_coordinate(peak_x),
            format_coordinate(peak_y),
            format_coordinate(height),
            motion.feed_rate,
            HOP_MARKER
        );

        let descent = run.advance().then(|| {
            format!(
                "G1 X{} Y{} Z{} F{} {} lower\n",
                format_coordinate(motion.target_x),
                format_coordinate(motion.target_y),
                format_coordinate(motion.current_z),
                self.settings.z_lower_feedrate,
                HOP_MARKER
            )
        });

        SynthesizedMove { hop, descent }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> HopSettings {
        HopSettings::new(0.2, 1.0, 20.0, 6000, 0.3)
    }

    fn motion(prev: (f64, f64), target: (f64, f64), z: f64, feed: u64) -> MotionSnapshot {
        MotionSnapshot {
            prev_x: prev.0,
            prev_y: prev.1,
            target_x: target.0,
            target_y: target.1,
            current_z: z,
            feed_rate: feed,
        }
    }

    #[test]
    fn test_interpolate_clamps_and_blends() {
        assert_eq!(interpolate(-1.0, 0.0, 10.0, 2.0, 4.0), 2.0);
        assert_eq!(interpolate(0.0, 0.0, 10.0, 2.0, 4.0), 2.0);
        assert_eq!(interpolate(5.0, 0.0, 10.0, 2.0, 4.0), 3.0);
        assert_eq!(interpolate(10.0, 0.0, 10.0, 2.0, 4.0), 4.0);
        assert_eq!(interpolate(50.0, 0.0, 10.0, 2.0, 4.0), 4.0);
    }

    #[test]
    fn test_peak_at_seventy_percent() {
        let synth = HopSynthesizer::new(settings());
        let (x, y) = synth.peak(&motion((0.0, 0.0), (10.0, 0.0), 0.2, 3000));
        assert!((x - 7.0).abs() < 1e-12);
        assert_eq!(y, 0.0);
    }

    #[test]
    fn test_single_move_run_long_travel() {
        let synth = HopSynthesizer::new(settings());
        let mut run = TravelRun::new(1);
        let out = synth.synthesize(&mut run, &motion((0.0, 0.0), (30.0, 40.0), 0.2, 3000));

        assert_eq!(out.hop, "G1 X21.0 Y28.0 Z1.2 F3000 ; custom zhop\n");
        assert_eq!(
            out.descent.as_deref(),
            Some("G1 X30.0 Y40.0 Z0.2 F6000 ; custom zhop lower\n")
        );
        assert!(run.is_complete());
    }

    #[test]
    fn test_single_move_run_short_travel() {
        let synth = HopSynthesizer::new(settings());
        let mut run = TravelRun::new(1);
        let out = synth.synthesize(&mut run, &motion((0.0, 0.0), (10.0, 0.0), 0.0, 3000));
        // 10mm of a 20mm threshold: halfway between 0.2 and 1.0
        assert_eq!(out.hop, "G1 X7.0 Y0.0 Z0.6 F3000 ; custom zhop\n");
    }

    #[test]
    fn test_zero_length_travel_still_hops() {
        let synth = HopSynthesizer::new(settings());
        let mut run = TravelRun::new(1);
        let out = synth.synthesize(&mut run, &motion((5.0, 5.0), (5.0, 5.0), 1.0, 3000));
        assert_eq!(out.hop, "G1 X5.0 Y5.0 Z1.2 F3000 ; custom zhop\n");
        assert!(out.descent.is_some());
    }

    #[test]
    fn test_multi_move_run_ramps_heights() {
        let synth = HopSynthesizer::new(settings());
        let mut run = TravelRun::new(2);

        let first = synth.synthesize(&mut run, &motion((0.0, 0.0), (20.0, 0.0), 0.2, 3000));
        assert_eq!(run.target_hop_height(), 1.2);
        // first move of a multi-move run sits at the current Z
        assert_eq!(first.hop, "G1 X14.0 Y0.0 Z0.2 F3000 ; custom zhop\n");
        assert!(first.descent.is_none());

        let second = synth.synthesize(&mut run, &motion((20.0, 0.0), (30.0, 0.0), 0.2, 3000));
        // halfway up the ramp, never the full target
        assert_eq!(second.hop, "G1 X27.0 Y0.0 Z0.7 F3000 ; custom zhop\n");
        assert_eq!(
            second.descent.as_deref(),
            Some("G1 X30.0 Y0.0 Z0.2 F6000 ; custom zhop lower\n")
        );
    }

    #[test]
    fn test_target_height_fixed_by_first_move() {
        let synth = HopSynthesizer::new(settings());
        let mut run = TravelRun::new(3);
        synth.synthesize(&mut run, &motion((0.0, 0.0), (1.0, 0.0), 0.0, 3000));
        let fixed = run.target_hop_height();
        synth.synthesize(&mut run, &motion((1.0, 0.0), (100.0, 0.0), 0.0, 3000));
        assert_eq!(run.target_hop_height(), fixed);
    }

    #[test]
    fn test_into_lines_order() {
        let synthesized = SynthesizedMove {
            hop: "a".to_string(),
            descent: Some("b".to_string()),
        };
        let lines: Vec<String> = synthesized.into_lines().collect();
        assert_eq!(lines, vec!["a".to_string(), "b".to_string()]);
    }
}
