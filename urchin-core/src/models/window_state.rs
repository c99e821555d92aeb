use serde::{Deserialize, Serialize};

/// The protocol level state of a client, as in `WM_STATE`.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum WindowState {
    Normal,
    Iconic,
    Withdrawn,
}
