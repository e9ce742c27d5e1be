use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Answers, FormId};

/// Proof of a recorded submission, shown to the respondent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub form_id: FormId,

    /// Per-form serial number, starting at 1.
    pub serial: u64,

    pub submitted_at: DateTime<Utc>,
}

/// A submitted response as kept by a response sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredResponse {
    #[serde(flatten)]
    pub receipt: Receipt,

    pub answers: Answers,
}

impl StoredResponse {
    pub fn serial(&self) -> u64 {
        self.receipt.serial
    }
}
