//! S3 key/path conventions.
//!
//! Pure string functions with no AWS SDK dependency. These define the canonical
//! layout of session objects in the intake S3 bucket.

pub fn interview_state(session_id: &str) -> String {
    format!("sessions/{session_id}/interview.json")
}

pub fn symptoms(session_id: &str) -> String {
    format!("sessions/{session_id}/symptoms.json")
}
