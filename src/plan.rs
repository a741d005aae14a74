use crate::error::{EndrollError, EndrollResult};

/// Transition shape applied between keyframe stops.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TimingFunction {
    /// Uniform motion, used for continuous scroll.
    Linear,
    /// Cubic ease-out, used to decelerate into the stop position.
    EaseOut,
}

impl TimingFunction {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOut => 1.0 - (1.0 - t).powi(3),
        }
    }

    /// Identifier used in a CSS `animation` shorthand.
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseOut => "ease-out",
        }
    }
}

/// A fully-specified vertical scroll animation: where the content starts,
/// where it ends, how long the travel takes, and where deceleration begins.
///
/// Plans are immutable values derived once per start invocation; installing a
/// new plan fully discards the previous one (see [`crate::stage::PlanSlot`]).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationPlan {
    /// Initial translation: one full viewport below the fold.
    pub start_offset_px: f64,
    /// Translation at animation completion.
    pub end_offset_px: f64,
    /// Percentage of progress at which motion transitions from uniform
    /// scroll toward the end offset. Near-terminal marker (99.9) in
    /// continuous mode.
    pub ease_point_percent: f64,
    pub duration_seconds: f64,
    pub timing: TimingFunction,
}

impl AnimationPlan {
    pub fn validate(&self) -> EndrollResult<()> {
        if !self.duration_seconds.is_finite() || self.duration_seconds <= 0.0 {
            return Err(EndrollError::plan(format!(
                "duration must be finite and > 0 (got {})",
                self.duration_seconds
            )));
        }
        if !(0.0..=100.0).contains(&self.ease_point_percent) {
            return Err(EndrollError::plan(format!(
                "ease point must lie in 0..=100 (got {})",
                self.ease_point_percent
            )));
        }
        if !self.start_offset_px.is_finite() || !self.end_offset_px.is_finite() {
            return Err(EndrollError::plan("offsets must be finite"));
        }
        Ok(())
    }

    /// Planned translation at wall-clock time `seconds`.
    ///
    /// Samples the keyframe stops the plan materializes into: the timing
    /// function shapes the segment from 0% to the ease point, and the end
    /// offset holds from the ease point onward. Clamped at both ends.
    pub fn offset_at(&self, seconds: f64) -> f64 {
        let progress = (seconds / self.duration_seconds).clamp(0.0, 1.0) * 100.0;
        if progress >= self.ease_point_percent {
            return self.end_offset_px;
        }
        let local = progress / self.ease_point_percent;
        let t = self.timing.apply(local);
        self.start_offset_px + (self.end_offset_px - self.start_offset_px) * t
    }
}
