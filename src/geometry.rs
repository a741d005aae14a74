use crate::error::{EndrollError, EndrollResult};

/// Rendered position of the final message block inside the content, in px
/// from the content's top edge.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MessageExtent {
    pub top_px: f64,
    pub height_px: f64,
}

/// Pixel measurements captured by the rendering collaborator strictly after
/// layout. Read-only input to [`crate::ScrollPlanner::plan`]; the planner
/// never touches rendering APIs itself.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GeometrySnapshot {
    pub viewport_height_px: f64,
    /// Full rendered height of the credits block.
    pub content_height_px: f64,
    /// Present iff the table carries a final message.
    pub final_message: Option<MessageExtent>,
}

impl GeometrySnapshot {
    pub fn validate(&self) -> EndrollResult<()> {
        if !self.viewport_height_px.is_finite() || self.viewport_height_px <= 0.0 {
            return Err(EndrollError::geometry(format!(
                "viewport height must be finite and > 0 (got {})",
                self.viewport_height_px
            )));
        }
        if !self.content_height_px.is_finite() || self.content_height_px < 0.0 {
            return Err(EndrollError::geometry(format!(
                "content height must be finite and >= 0 (got {})",
                self.content_height_px
            )));
        }
        if let Some(msg) = &self.final_message {
            if !msg.top_px.is_finite() || msg.top_px < 0.0 {
                return Err(EndrollError::geometry(format!(
                    "final message top must be finite and >= 0 (got {})",
                    msg.top_px
                )));
            }
            if !msg.height_px.is_finite() || msg.height_px < 0.0 {
                return Err(EndrollError::geometry(format!(
                    "final message height must be finite and >= 0 (got {})",
                    msg.height_px
                )));
            }
        }
        Ok(())
    }
}
