//! Display implementations for domain models.
//!
//! All output is markdown, rendered by the CLI's terminal renderer.

use std::fmt;

use super::{datetime::BackendTime, payload::Payload};
use crate::models::{Plan, PlanStatus, Task, TaskStatus, TaskVisualization};

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `current/total`, or `-` for tasks without declared steps.
pub(crate) fn progress(current: u32, total: u32) -> String {
    if total == 0 {
        "-".to_string()
    } else {
        format!("{current}/{total}")
    }
}

/// Writes a payload section, skipping empty payloads.
fn payload_section(f: &mut fmt::Formatter<'_>, heading: &str, raw: &str) -> fmt::Result {
    let payload = Payload(raw);
    if payload.is_empty() {
        return Ok(());
    }
    writeln!(f, "{heading}")?;
    writeln!(f)?;
    write!(f, "{payload}")?;
    writeln!(f)
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} ({})", self.name, self.tid)?;
        writeln!(f)?;

        writeln!(f, "- Status: {}", self.status.with_icon())?;
        writeln!(f, "- Type: {}", self.types)?;
        if !self.current_state.is_empty() {
            writeln!(f, "- State: {}", self.current_state)?;
        }
        writeln!(
            f,
            "- Progress: {}",
            progress(self.current_step, self.total_steps)
        )?;
        if self.retry_count > 0 {
            writeln!(f, "- Retries: {}", self.retry_count)?;
        }
        if self.duration > 0 {
            writeln!(f, "- Duration: {}ms", self.duration)?;
        }
        writeln!(f, "- Created: {}", BackendTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", BackendTime(&self.updated_at))?;
        writeln!(f)?;

        payload_section(f, "## Params", &self.params)?;
        payload_section(f, "## Result", &self.result)?;
        payload_section(f, "## Error", &self.error)?;
        payload_section(f, "## Extend", &self.extend)?;

        Ok(())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            self.index,
            self.name,
            self.status.with_icon()
        )?;
        writeln!(f)?;
        writeln!(f, "- ID: {}", self.pid)?;
        writeln!(f, "- Duration: {}ms", self.duration)?;
        writeln!(f, "- Created: {}", BackendTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", BackendTime(&self.updated_at))?;
        writeln!(f)?;

        payload_section(f, "#### Params", &self.params)?;
        payload_section(f, "#### Result", &self.result)?;
        payload_section(f, "#### Error", &self.error)?;

        Ok(())
    }
}

impl fmt::Display for TaskVisualization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} ({})", self.name, self.tid)?;
        writeln!(f)?;
        writeln!(f, "- Status: {}", self.status.with_icon())?;
        writeln!(f, "- Type: {}", self.types)?;
        if !self.current_state.is_empty() {
            writeln!(f, "- State: {}", self.current_state)?;
        }
        writeln!(
            f,
            "- Progress: {}",
            progress(self.current_step, self.total_steps)
        )?;
        writeln!(f, "- Updated: {}", BackendTime(&self.updated_at))?;

        if self.plans.is_empty() {
            writeln!(f, "\nNo plans reported for this task.")?;
            return Ok(());
        }

        writeln!(f, "\n## Plans")?;
        writeln!(f)?;
        for (position, plan) in self.plans.iter().enumerate() {
            writeln!(
                f,
                "{}. {} **{}** `{}` {}ms",
                position + 1,
                plan.status.with_icon(),
                plan.name,
                plan.pid,
                plan.duration
            )?;
        }

        Ok(())
    }
}
