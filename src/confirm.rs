//! Delete Confirmation Gate
//!
//! One-shot yes/no prompt guarding a destructive action.
//! `Idle -> Pending -> Idle`, where leaving `Pending` consumes the
//! responder, so every request resolves exactly once.

use futures::channel::oneshot;

/// Gate state
#[derive(Debug)]
pub enum ConfirmState<T> {
    Idle,
    Pending {
        subject: T,
        responder: oneshot::Sender<bool>,
    },
}

/// Holds at most one pending confirmation
#[derive(Debug)]
pub struct ConfirmGate<T> {
    state: ConfirmState<T>,
}

impl<T> Default for ConfirmGate<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Awaitable side of one request
#[derive(Debug)]
pub struct ConfirmRequest {
    rx: oneshot::Receiver<bool>,
}

impl ConfirmRequest {
    /// Wait for the answer. A responder dropped without answering counts as "no".
    pub async fn outcome(self) -> bool {
        self.rx.await.unwrap_or(false)
    }
}

impl<T> ConfirmGate<T> {
    pub fn new() -> Self {
        Self {
            state: ConfirmState::Idle,
        }
    }

    /// Open a prompt for `subject`.
    ///
    /// Returns `None` while another prompt is pending; that trigger is ignored.
    pub fn request(&mut self, subject: T) -> Option<ConfirmRequest> {
        if self.is_pending() {
            return None;
        }
        let (responder, rx) = oneshot::channel();
        self.state = ConfirmState::Pending { subject, responder };
        Some(ConfirmRequest { rx })
    }

    /// Answer the pending prompt and return to idle.
    ///
    /// Returns the subject that was answered, or `None` when nothing was pending.
    pub fn resolve(&mut self, confirmed: bool) -> Option<T> {
        match std::mem::replace(&mut self.state, ConfirmState::Idle) {
            ConfirmState::Idle => None,
            ConfirmState::Pending { subject, responder } => {
                // Receiver gone means the waiting task was dropped; nothing to do
                let _ = responder.send(confirmed);
                Some(subject)
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, ConfirmState::Pending { .. })
    }

    #[cfg(test)]
    pub fn subject(&self) -> Option<&T> {
        match &self.state {
            ConfirmState::Idle => None,
            ConfirmState::Pending { subject, .. } => Some(subject),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_yes_resolves_true() {
        let mut gate = ConfirmGate::new();
        let request = gate.request(4u32).unwrap();
        assert!(gate.is_pending());
        assert_eq!(gate.subject(), Some(&4));

        assert_eq!(gate.resolve(true), Some(4));
        assert!(!gate.is_pending());
        assert!(block_on(request.outcome()));
    }

    #[test]
    fn test_no_resolves_false() {
        let mut gate = ConfirmGate::new();
        let request = gate.request(4u32).unwrap();
        assert_eq!(gate.resolve(false), Some(4));
        assert!(!block_on(request.outcome()));
    }

    #[test]
    fn test_second_request_ignored_while_pending() {
        let mut gate = ConfirmGate::new();
        let first = gate.request(1u32).unwrap();
        assert!(gate.request(2).is_none());
        assert_eq!(gate.subject(), Some(&1));

        assert_eq!(gate.resolve(true), Some(1));
        assert!(block_on(first.outcome()));
    }

    #[test]
    fn test_resolves_exactly_once() {
        let mut gate = ConfirmGate::new();
        let _request = gate.request(1u32).unwrap();
        assert_eq!(gate.resolve(true), Some(1));
        assert_eq!(gate.resolve(true), None);
        assert_eq!(gate.resolve(false), None);
    }

    #[test]
    fn test_dropped_gate_counts_as_no() {
        let mut gate = ConfirmGate::new();
        let request = gate.request(1u32).unwrap();
        drop(gate);
        assert!(!block_on(request.outcome()));
    }

    #[test]
    fn test_gate_reusable_after_resolution() {
        let mut gate = ConfirmGate::new();
        let first = gate.request(1u32).unwrap();
        gate.resolve(false);
        let second = gate.request(2).unwrap();
        assert_eq!(gate.resolve(true), Some(2));

        assert!(!block_on(first.outcome()));
        assert!(block_on(second.outcome()));
    }

    #[test]
    fn test_answer_after_waiter_dropped() {
        let mut gate = ConfirmGate::new();
        let request = gate.request(9u32).unwrap();
        drop(request);
        assert_eq!(gate.resolve(true), Some(9));
        assert!(!gate.is_pending());
    }
}
