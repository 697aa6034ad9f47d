//! Selection cache for the plan shown in detail.

use crate::models::Plan;

/// Outcome of re-resolving a selection against a fresh plan list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciled {
    /// The plan was found and the copy replaced with its latest fields.
    Refreshed,
    /// The plan is gone; the previous copy is kept and flagged stale.
    Stale,
}

/// The plan currently displayed, held by value.
///
/// After a poll the selection is re-pointed at the plan with the same `pid`.
/// If that plan disappeared, the old copy stays on screen with the `stale`
/// flag set rather than silently switching to another plan. The flag clears
/// if the plan shows up again.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    plan: Plan,
    stale: bool,
}

impl Selection {
    pub fn new(plan: Plan) -> Self {
        Self { plan, stale: false }
    }

    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    pub fn pid(&self) -> &str {
        &self.plan.pid
    }

    /// Whether the last applied poll no longer contained this plan.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Re-resolve against `plans` by identifier.
    pub fn reconcile(&mut self, plans: &[Plan]) -> Reconciled {
        match plans.iter().find(|plan| plan.pid == self.plan.pid) {
            Some(fresh) => {
                if *fresh != self.plan {
                    self.plan = fresh.clone();
                }
                self.stale = false;
                Reconciled::Refreshed
            }
            None => {
                if !self.stale {
                    log::debug!("Selected plan {} no longer reported", self.plan.pid);
                }
                self.stale = true;
                Reconciled::Stale
            }
        }
    }
}
