//! SessionStatus enum for tracking the lifecycle of a placement session.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Lifecycle status of a placement session.
///
/// ```text
/// Idle -> Loading -> Loaded -> Showing -> Shown -> Dismissed
///            |                    |
///            v                    v
///        LoadFailed           ShowFailed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Showing,
    Shown,
    Dismissed,
    LoadFailed,
    ShowFailed,
}

impl SessionStatus {
    /// Returns true once presentation has been requested and not failed.
    ///
    /// Click and reward notifications are only meaningful in these states.
    pub fn is_presenting(&self) -> bool {
        matches!(
            self,
            SessionStatus::Showing | SessionStatus::Shown | SessionStatus::Dismissed
        )
    }
}

impl StateMachine for SessionStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SessionStatus::*;
        matches!(
            (self, target),
            (Idle, Loading)
                | (Loading, Loaded)
                | (Loading, LoadFailed)
                | (Loaded, Showing)
                | (Showing, Shown)
                | (Showing, ShowFailed)
                | (Shown, Dismissed)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SessionStatus::*;
        match self {
            Idle => vec![Loading],
            Loading => vec![Loaded, LoadFailed],
            Loaded => vec![Showing],
            Showing => vec![Shown, ShowFailed],
            Shown => vec![Dismissed],
            Dismissed | LoadFailed | ShowFailed => vec![],
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionStatus::Idle => "idle",
            SessionStatus::Loading => "loading",
            SessionStatus::Loaded => "loaded",
            SessionStatus::Showing => "showing",
            SessionStatus::Shown => "shown",
            SessionStatus::Dismissed => "dismissed",
            SessionStatus::LoadFailed => "load_failed",
            SessionStatus::ShowFailed => "show_failed",
        };
        write!(f, "{}", s)
    }
}
