//! Ownership of the single active animation.
//!
//! At most one plan ever animates the content: installing a new plan tears
//! the previous keyframe definition down first, then installs the new one.
//! The slot is an explicit owned resource handed to callers, never an
//! ambient global.

use crate::{
    error::EndrollResult,
    keyframes::{css_animation, css_keyframes},
    plan::AnimationPlan,
};

/// Seam to the rendering collaborator: somewhere keyframe CSS can be
/// installed under a name and later removed. The core performs no IO of its
/// own; implementations own the style surface (a `<style>` tag, a test
/// recorder, a file).
pub trait KeyframeSink {
    fn install(&mut self, name: &str, css: &str) -> EndrollResult<()>;
    fn remove(&mut self, name: &str) -> EndrollResult<()>;
}

/// A plan that is currently installed in a sink.
#[derive(Clone, Debug)]
pub struct InstalledPlan {
    pub name: String,
    pub plan: AnimationPlan,
    /// The `animation` shorthand the renderer applies to the content.
    pub animation: String,
}

/// Holds at most one installed plan.
#[derive(Debug, Default)]
pub struct PlanSlot {
    active: Option<InstalledPlan>,
}

impl PlanSlot {
    pub fn new() -> Self {
        Self { active: None }
    }

    /// Install `plan` under `name`, atomically replacing any previous
    /// installation. The old keyframe definition is removed from the sink
    /// before the new one is written; the old plan is discarded, never
    /// merged.
    pub fn install(
        &mut self,
        sink: &mut dyn KeyframeSink,
        name: &str,
        plan: AnimationPlan,
    ) -> EndrollResult<&InstalledPlan> {
        plan.validate()?;
        if let Some(prev) = self.active.take() {
            sink.remove(&prev.name)?;
        }
        sink.install(name, &css_keyframes(&plan, name))?;
        Ok(self.active.insert(InstalledPlan {
            name: name.to_string(),
            animation: css_animation(&plan, name),
            plan,
        }))
    }

    /// Remove the installed plan, if any, without replacement.
    pub fn clear(&mut self, sink: &mut dyn KeyframeSink) -> EndrollResult<()> {
        if let Some(prev) = self.active.take() {
            sink.remove(&prev.name)?;
        }
        Ok(())
    }

    pub fn active(&self) -> Option<&InstalledPlan> {
        self.active.as_ref()
    }
}
