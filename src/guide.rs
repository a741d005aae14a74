//! # Endroll guide
//!
//! This module is a standalone walkthrough of Endroll's architecture and
//! public API. If you are looking for copy/paste commands, start with the
//! repository `README.md`; if you are implementing new features, start here.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`Row`](crate::Row): one parsed input record, fields in parse order
//! - [`CreditsTable`](crate::CreditsTable): the finalized, ordered credit roll
//! - [`GeometrySnapshot`](crate::GeometrySnapshot): pixel measurements taken after layout
//! - [`ScrollPlanner`](crate::ScrollPlanner): derives the animation from geometry
//! - [`AnimationPlan`](crate::AnimationPlan): start/end offsets, duration, ease point
//! - [`PlanSlot`](crate::PlanSlot): owner of the single active plan
//!
//! The pipeline is explicitly staged, and the stages must run in order:
//!
//! 1. Build the table: [`CreditsTable::build`](crate::CreditsTable::build)
//! 2. Render and measure (externally): produce a [`GeometrySnapshot`](crate::GeometrySnapshot)
//! 3. Plan: [`ScrollPlanner::plan`](crate::ScrollPlanner::plan)
//! 4. Install: [`PlanSlot::install`](crate::PlanSlot::install)
//!
//! Step 2 belongs to the rendering collaborator. Geometry depends on rendered
//! text, so the table must exist (and be drawn) before anything can be
//! measured; the planner only ever sees numbers.
//!
//! ---
//!
//! ## "No IO in the core" (and why)
//!
//! Building and planning are pure, synchronous arithmetic: deterministic,
//! testable, portable. The only seam to the outside is
//! [`KeyframeSink`](crate::KeyframeSink), which receives finished CSS text
//! ([`css_keyframes`](crate::css_keyframes) /
//! [`css_animation`](crate::css_animation)) and owns wherever that text
//! lives. A DOM `<style>` tag, a file, and an in-memory test recorder are all
//! valid sinks.
//!
//! ---
//!
//! ## The two planning modes
//!
//! The requested duration means "seconds to scroll one viewport height", so
//! total duration always scales with the distance traversed.
//!
//! Without a final message the content starts one viewport below the fold
//! and travels until it is one viewport above it, linearly.
//!
//! With a final message the travel ends where the message's center meets the
//! viewport's center, and an ease-out keyframe at the plan's ease point makes
//! the halt gradual. The ease point estimates when the message enters the
//! viewport but never drops below the planner's floor (90% stock), so a
//! visible uniform-scroll phase is guaranteed even for short content. For
//! short content the actual deceleration window is therefore wider than the
//! entry estimate suggests; that is intended behavior.
//!
//! ---
//!
//! ## Replacing a running animation
//!
//! "Which plan is active" is process-wide state, owned by a
//! [`PlanSlot`](crate::PlanSlot) rather than an ambient global. Installing a
//! new plan removes the previous keyframe definition from the sink before
//! writing the new one, so two plans never animate the content at once.
//! There is no cancellation token: an in-flight animation either runs out or
//! is superseded by the next install.
