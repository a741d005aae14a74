#![forbid(unsafe_code)]

pub mod error;
pub mod geometry;
pub mod guide;
pub mod keyframes;
pub mod model;
pub mod plan;
pub mod planner;
pub mod stage;

pub use error::{EndrollError, EndrollResult};
pub use geometry::{GeometrySnapshot, MessageExtent};
pub use keyframes::{css_animation, css_keyframes};
pub use model::{CreditEntry, CreditsTable, Row};
pub use plan::{AnimationPlan, TimingFunction};
pub use planner::{CONTINUOUS_EASE_POINT, DEFAULT_EASE_FLOOR_PERCENT, ScrollPlanner};
pub use stage::{InstalledPlan, KeyframeSink, PlanSlot};
