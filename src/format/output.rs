use serde::{Deserialize, Serialize};

/// JSON result of a delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResult {
    pub id: i64,
    pub deleted: bool,
}
