//! In-memory response store.

use std::collections::HashMap;
use std::convert::Infallible;

use chrono::Utc;

use crate::{Answers, FormId, Receipt, ResponseSink, StoredResponse};

/// Keeps submitted responses in memory, numbered per form.
///
/// Serial numbers start at 1 for each form and increase by one per submission.
#[derive(Debug, Clone, Default)]
pub struct ResponseLedger {
    responses: HashMap<FormId, Vec<StoredResponse>>,
}

impl ResponseLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// All responses recorded for `form`, oldest first.
    pub fn responses(&self, form: &FormId) -> &[StoredResponse] {
        self.responses.get(form).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of responses recorded for `form`.
    pub fn count(&self, form: &FormId) -> usize {
        self.responses(form).len()
    }

    /// Look up a response by its serial number.
    pub fn get(&self, form: &FormId, serial: u64) -> Option<&StoredResponse> {
        self.responses(form).iter().find(|r| r.serial() == serial)
    }

    fn next_serial(&self, form: &FormId) -> u64 {
        self.responses(form)
            .last()
            .map_or(1, |latest| latest.serial() + 1)
    }
}

impl ResponseSink for ResponseLedger {
    type Error = Infallible;

    fn record(&mut self, form: &FormId, answers: Answers) -> Result<Receipt, Self::Error> {
        let receipt = Receipt {
            form_id: form.clone(),
            serial: self.next_serial(form),
            submitted_at: Utc::now(),
        };
        tracing::debug!(form = %form, serial = receipt.serial, answers = answers.len(), "response stored");

        self.responses
            .entry(form.clone())
            .or_default()
            .push(StoredResponse {
                receipt: receipt.clone(),
                answers,
            });
        Ok(receipt)
    }
}
