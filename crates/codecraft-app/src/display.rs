//! Selection of the turns shown in the guidance panel.

use codecraft_ai::Role;

use crate::transcript::Turn;

/// The most recent exchange, in render order: assistant first, then user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatestExchange<'a> {
    pub assistant: Option<&'a Turn>,
    pub user: Option<&'a Turn>,
}

/// Pick which turns the guidance panel renders.
///
/// Scans newest-first for the latest turn of each role. The user turn is
/// included only when it sits strictly after the chosen assistant turn in
/// transcript order (or when there is no assistant turn at all): a user turn
/// that already received its reply is superseded by that reply. The panel
/// shows at most one exchange, so the view stays focused instead of
/// re-rendering an ever-growing history.
pub fn latest_exchange(turns: &[Turn]) -> LatestExchange<'_> {
    let mut assistant_idx = None;
    let mut user_idx = None;

    for (idx, turn) in turns.iter().enumerate().rev() {
        match turn.role {
            Role::Assistant if assistant_idx.is_none() => assistant_idx = Some(idx),
            Role::User if user_idx.is_none() => user_idx = Some(idx),
            _ => {}
        }
        if assistant_idx.is_some() && user_idx.is_some() {
            break;
        }
    }

    let user_idx = match (assistant_idx, user_idx) {
        (None, Some(user)) => Some(user),
        (Some(assistant), Some(user)) if user > assistant => Some(user),
        _ => None,
    };

    LatestExchange {
        assistant: assistant_idx.map(|i| &turns[i]),
        user: user_idx.map(|i| &turns[i]),
    }
}
