//! The timing/positioning engine: derives a complete [`AnimationPlan`] from
//! rendered geometry and a requested speed.
//!
//! The requested duration is defined as "seconds to scroll exactly one
//! viewport height"; total duration scales with how many viewport heights
//! must be traversed. Two modes exist, selected by whether a final message
//! entry is present:
//!
//! - **continuous scroll**: the block scrolls fully off the top of the
//!   screen at uniform speed.
//! - **stop at message**: the block decelerates and permanently halts with
//!   the final message's vertical center aligned to the viewport's center.

use crate::{
    error::{EndrollError, EndrollResult},
    geometry::GeometrySnapshot,
    plan::{AnimationPlan, TimingFunction},
};

/// Ease-point marker for continuous scroll; motion is linear throughout and
/// this value is a near-terminal placeholder only.
pub const CONTINUOUS_EASE_POINT: f64 = 99.9;

/// Default floor for the stop-at-message ease point: deceleration never
/// begins before this much progress, guaranteeing a visible uniform-scroll
/// phase even when the message sits near the top of short content.
pub const DEFAULT_EASE_FLOOR_PERCENT: f64 = 90.0;

/// Derives scroll animation plans. Pure and deterministic; failure always
/// means a caller contract violation (bad duration, unmeasurable viewport,
/// or stop mode requested without message geometry).
#[derive(Clone, Copy, Debug)]
pub struct ScrollPlanner {
    ease_floor_percent: f64,
}

impl Default for ScrollPlanner {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollPlanner {
    pub fn new() -> Self {
        Self {
            ease_floor_percent: DEFAULT_EASE_FLOOR_PERCENT,
        }
    }

    /// Override the deceleration floor. A tunable constant, not a derived
    /// invariant; the stock value is [`DEFAULT_EASE_FLOOR_PERCENT`].
    pub fn with_ease_floor(mut self, percent: f64) -> Self {
        self.ease_floor_percent = percent;
        self
    }

    /// Compute the plan for the given post-layout geometry.
    ///
    /// `requested_duration_seconds` is seconds per viewport height of travel.
    /// `has_final_message` selects stop-at-message mode and requires
    /// `geometry.final_message` to be present.
    #[tracing::instrument(skip(self, geometry))]
    pub fn plan(
        &self,
        geometry: &GeometrySnapshot,
        requested_duration_seconds: f64,
        has_final_message: bool,
    ) -> EndrollResult<AnimationPlan> {
        if !requested_duration_seconds.is_finite() || requested_duration_seconds <= 0.0 {
            return Err(EndrollError::validation(format!(
                "requested duration must be finite and > 0 (got {requested_duration_seconds})"
            )));
        }
        geometry.validate()?;

        let viewport = geometry.viewport_height_px;
        let plan = if has_final_message {
            let Some(msg) = geometry.final_message else {
                return Err(EndrollError::geometry(
                    "stop-at-message mode requires final message geometry",
                ));
            };

            // Translation that brings the message's center to the viewport's
            // center; negative whenever the message's natural position lies
            // below center.
            let final_target_y = viewport / 2.0 - (msg.top_px + msg.height_px / 2.0);
            // Travel from the fully-below-the-fold start to the resting
            // translation.
            let total_scroll_px = viewport - final_target_y;
            let seconds_per_px = requested_duration_seconds / viewport;

            // Estimated progress at which the message first enters the
            // viewport, floored so deceleration stays a terminal phase.
            let entry_percent = (msg.top_px - viewport) / total_scroll_px * 100.0;
            let ease_point = entry_percent.max(self.ease_floor_percent).min(100.0);

            AnimationPlan {
                start_offset_px: viewport,
                end_offset_px: final_target_y,
                ease_point_percent: ease_point,
                duration_seconds: total_scroll_px * seconds_per_px,
                timing: TimingFunction::EaseOut,
            }
        } else {
            // One full screen past the fold on both ends, so the last line
            // fully exits view.
            let travel = geometry.content_height_px + viewport;
            AnimationPlan {
                start_offset_px: viewport,
                end_offset_px: -travel,
                ease_point_percent: CONTINUOUS_EASE_POINT,
                duration_seconds: travel / viewport * requested_duration_seconds,
                timing: TimingFunction::Linear,
            }
        };

        tracing::debug!(
            start = plan.start_offset_px,
            end = plan.end_offset_px,
            ease_point = plan.ease_point_percent,
            duration = plan.duration_seconds,
            "planned scroll"
        );
        Ok(plan)
    }
}
