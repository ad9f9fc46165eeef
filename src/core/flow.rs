use crate::core::step_path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Pending,
    Active,
    Done,
}

/// One-based position in a fixed-length flow. Navigation here is only an
/// instruction to load another step's page; the tracker never gates on
/// validation, it just refuses to walk off either end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepTracker {
    current: u32,
    total: u32,
}

impl StepTracker {
    pub fn new(total: u32) -> Self {
        Self {
            current: 1,
            total: total.max(1),
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Progress-bar status: steps behind the cursor are done, the cursor
    /// itself is active, everything ahead is pending.
    pub fn status_at(&self, step: u32) -> StepStatus {
        if step == self.current {
            StepStatus::Active
        } else if step >= 1 && step < self.current {
            StepStatus::Done
        } else {
            StepStatus::Pending
        }
    }

    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total
    }

    /// Step back one page; `None` when already at the first step.
    pub fn back(&mut self) -> Option<String> {
        if !self.has_prev() {
            return None;
        }
        self.current -= 1;
        Some(step_path(self.current))
    }

    /// Advance one page; `None` when already at the last step.
    pub fn forward(&mut self) -> Option<String> {
        if !self.has_next() {
            return None;
        }
        self.current += 1;
        Some(step_path(self.current))
    }

    /// Jump to an arbitrary step. Out-of-range requests land on step 1,
    /// matching the route handler this tracker drives.
    pub fn go_to(&mut self, step: u32) -> String {
        let step = if step >= 1 && step <= self.total {
            step
        } else {
            tracing::debug!(step, total = self.total, "out-of-range step, landing on 1");
            1
        };
        self.current = step;
        step_path(step)
    }
}
