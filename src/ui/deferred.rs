//! Deferred UI actions
//!
//! One-shot actions scheduled for a later frame. The frame loop drains the
//! ones that are due before anything else runs.

/// An action to run once its due time passes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    /// Expand the menu panel
    ExpandMenu,
    /// Collapse the menu panel unless the user already closed it
    CollapseMenuIfExpanded,
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    due_ms: f64,
    action: DeferredAction,
}

/// Queue of pending deferred actions
#[derive(Debug, Clone, Default)]
pub struct DeferredQueue {
    pending: Vec<Pending>,
}

impl DeferredQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` to run `delay_ms` after `now_ms`
    pub fn schedule(&mut self, now_ms: f64, delay_ms: f64, action: DeferredAction) {
        log::debug!("Scheduled {:?} in {} ms", action, delay_ms);
        self.pending.push(Pending {
            due_ms: now_ms + delay_ms,
            action,
        });
    }

    /// Remove and return every action due at `now_ms`, earliest first
    pub fn drain_due(&mut self, now_ms: f64) -> Vec<DeferredAction> {
        let (mut due, rest): (Vec<Pending>, Vec<Pending>) =
            self.pending.drain(..).partition(|p| p.due_ms <= now_ms);
        self.pending = rest;
        due.sort_by(|a, b| a.due_ms.total_cmp(&b.due_ms));
        due.into_iter().map(|p| p.action).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
