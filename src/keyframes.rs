//! Materializes an [`AnimationPlan`] as CSS text the rendering collaborator
//! can install verbatim: an `@keyframes` block with three stops and a
//! matching `animation` shorthand.

use crate::plan::{AnimationPlan, TimingFunction};

/// `@keyframes` block for `plan` under the given animation name.
///
/// Three stops: the start offset at 0%, the end offset at the ease point,
/// and the end offset again at 100% so the content rests there. Pixel and
/// percentage values are written with two decimals.
pub fn css_keyframes(plan: &AnimationPlan, name: &str) -> String {
    format!(
        "@keyframes {name} {{\n    \
            0% {{ transform: translateY({start:.2}px); }}\n    \
            {ease:.2}% {{ transform: translateY({end:.2}px); }}\n    \
            100% {{ transform: translateY({end:.2}px); }}\n\
         }}\n",
        start = plan.start_offset_px,
        ease = plan.ease_point_percent,
        end = plan.end_offset_px,
    )
}

/// `animation` shorthand for `plan`. Stop-at-message plans keep their final
/// keyframe applied (`forwards`) so the halt is permanent; continuous plans
/// simply run out.
pub fn css_animation(plan: &AnimationPlan, name: &str) -> String {
    let timing = plan.timing.css_name();
    match plan.timing {
        TimingFunction::EaseOut => {
            format!("{name} {dur:.2}s {timing} forwards", dur = plan.duration_seconds)
        }
        TimingFunction::Linear => {
            format!("{name} {dur:.2}s {timing}", dur = plan.duration_seconds)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop_plan() -> AnimationPlan {
        AnimationPlan {
            start_offset_px: 1000.0,
            end_offset_px: -2550.0,
            ease_point_percent: 90.0,
            duration_seconds: 7.1,
            timing: TimingFunction::EaseOut,
        }
    }

    fn continuous_plan() -> AnimationPlan {
        AnimationPlan {
            start_offset_px: 1000.0,
            end_offset_px: -5000.0,
            ease_point_percent: 99.9,
            duration_seconds: 10.0,
            timing: TimingFunction::Linear,
        }
    }

    #[test]
    fn keyframes_have_three_stops_with_two_decimal_pixels() {
        let css = css_keyframes(&stop_plan(), "credits-scroll");
        assert!(css.starts_with("@keyframes credits-scroll {"));
        assert!(css.contains("0% { transform: translateY(1000.00px); }"));
        assert!(css.contains("90.00% { transform: translateY(-2550.00px); }"));
        assert!(css.contains("100% { transform: translateY(-2550.00px); }"));
        assert_eq!(css.matches("transform:").count(), 3);
    }

    #[test]
    fn continuous_keyframes_mark_the_near_terminal_ease_point() {
        let css = css_keyframes(&continuous_plan(), "credits-scroll");
        assert!(css.contains("99.90% { transform: translateY(-5000.00px); }"));
    }

    #[test]
    fn stop_shorthand_is_ease_out_forwards() {
        let anim = css_animation(&stop_plan(), "credits-scroll");
        assert_eq!(anim, "credits-scroll 7.10s ease-out forwards");
    }

    #[test]
    fn continuous_shorthand_is_linear_without_fill() {
        let anim = css_animation(&continuous_plan(), "credits-scroll");
        assert_eq!(anim, "credits-scroll 10.00s linear");
        assert!(!anim.contains("forwards"));
    }
}
