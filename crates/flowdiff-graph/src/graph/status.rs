use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a node or connection after two graphs have been compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeStatus {
    /// Present only in the compare graph
    Added,
    /// Present only in the base graph
    Removed,
    /// Present in both graphs with different attributes
    Modified,
    /// Present in both graphs with identical attributes
    Unmodified,
}

impl ChangeStatus {
    /// Every status, in the order the combined graph lays nodes out
    pub const ALL: [ChangeStatus; 4] = [
        ChangeStatus::Added,
        ChangeStatus::Removed,
        ChangeStatus::Modified,
        ChangeStatus::Unmodified,
    ];

    /// True for every status except `Unmodified`
    pub fn is_change(&self) -> bool {
        !matches!(self, ChangeStatus::Unmodified)
    }
}

impl fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ChangeStatus::Added => "added",
            ChangeStatus::Removed => "removed",
            ChangeStatus::Modified => "modified",
            ChangeStatus::Unmodified => "unmodified",
        };
        f.write_str(label)
    }
}
