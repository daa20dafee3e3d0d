//! Values exchanged when a lifecycle step completes.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Extra key/value details attached to successful outcomes and notifications.
pub type EventDetails = HashMap<String, String>;

/// Snapshot of what the partner placement reports about its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContentReadiness {
    pub ready: bool,
    pub available: bool,
}

impl ContentReadiness {
    pub fn new(ready: bool, available: bool) -> Self {
        Self { ready, available }
    }

    /// Content can be presented only when it is both ready and available.
    pub fn is_showable(&self) -> bool {
        self.ready && self.available
    }
}

/// Reward information as delivered by the partner SDK.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RewardPayload {
    pub item_id: Option<String>,
    pub quantity: Option<i32>,
}

/// Reward forwarded to the session observer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub amount: u32,
    pub label: Option<String>,
}

impl Reward {
    pub const DEFAULT_AMOUNT: u32 = 1;
}

impl Default for Reward {
    fn default() -> Self {
        Self {
            amount: Self::DEFAULT_AMOUNT,
            label: None,
        }
    }
}

impl From<RewardPayload> for Reward {
    fn from(payload: RewardPayload) -> Self {
        let amount = payload
            .quantity
            .and_then(|q| u32::try_from(q).ok())
            .filter(|q| *q > 0)
            .unwrap_or(Self::DEFAULT_AMOUNT);
        Self {
            amount,
            label: payload.item_id.filter(|id| !id.is_empty()),
        }
    }
}
