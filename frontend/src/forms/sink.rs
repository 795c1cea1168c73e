use log::{info, warn};

use super::payload::LeadPayload;

/// Receives payloads of successful submissions. There is no transport yet;
/// hosts log them or hand them to a callback.
pub trait SubmissionSink {
    fn submit(&mut self, payload: &LeadPayload);
}

/// Prints the payload to the console log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn submit(&mut self, payload: &LeadPayload) {
        match serde_json::to_string(payload) {
            Ok(json) => info!("Form submitted: {}", json),
            Err(e) => warn!("Form submitted, payload not printable: {}", e),
        }
    }
}

impl<F> SubmissionSink for F
where
    F: FnMut(&LeadPayload),
{
    fn submit(&mut self, payload: &LeadPayload) {
        self(payload)
    }
}
