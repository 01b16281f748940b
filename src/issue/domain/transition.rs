//! Issue status state machine.
//!
//! Every permitted lifecycle step is a row of [`STATUS_TRANSITIONS`]. An
//! issue advances one row at a time; statuses without a row (only
//! [`IssueStatus::New`]) cannot be advanced and must be assigned instead.

use super::{Capability, IssueStatus};

/// Side effect applied together with a status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionEffect {
    /// Only the status changes.
    None,
    /// The acting user is recorded as the issue's fixer.
    RecordFixer,
}

/// One edge of the issue lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTransition {
    /// Status the issue must currently be in.
    pub from: IssueStatus,
    /// Capability the acting user must hold.
    pub required: Capability,
    /// Status after the transition.
    pub to: IssueStatus,
    /// Additional change applied with the transition.
    pub effect: TransitionEffect,
}

/// The complete lifecycle transition table.
pub static STATUS_TRANSITIONS: [StatusTransition; 5] = [
    StatusTransition {
        from: IssueStatus::Assigned,
        required: Capability::ChangeAssignedToFixed,
        to: IssueStatus::Fixed,
        effect: TransitionEffect::RecordFixer,
    },
    StatusTransition {
        from: IssueStatus::Fixed,
        required: Capability::ChangeFixedToResolved,
        to: IssueStatus::Resolved,
        effect: TransitionEffect::None,
    },
    StatusTransition {
        from: IssueStatus::Resolved,
        required: Capability::ChangeResolvedToClosed,
        to: IssueStatus::Close,
        effect: TransitionEffect::None,
    },
    StatusTransition {
        from: IssueStatus::Reopened,
        required: Capability::ChangeResolvedToClosed,
        to: IssueStatus::Close,
        effect: TransitionEffect::None,
    },
    StatusTransition {
        from: IssueStatus::Close,
        required: Capability::ChangeResolvedToClosed,
        to: IssueStatus::Reopened,
        effect: TransitionEffect::None,
    },
];

impl IssueStatus {
    /// Returns the transition leaving this status, or `None` when the status
    /// cannot be advanced directly.
    #[must_use]
    pub fn transition(self) -> Option<&'static StatusTransition> {
        STATUS_TRANSITIONS.iter().find(|edge| edge.from == self)
    }
}
