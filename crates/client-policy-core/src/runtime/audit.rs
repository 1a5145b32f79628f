// crates/client-policy-core/src/runtime/audit.rs
// ============================================================================
// Module: Policy Audit Sinks
// Description: Stock sinks for executor evaluation audit events.
// Purpose: Emit JSON-line audit logs without hard dependencies.
// Dependencies: crate::{core, interfaces}, serde_json
// ============================================================================

//! ## Overview
//! Sinks serialize [`PolicyAuditEvent`] records as JSON lines. Write failures
//! are dropped: audit output must never change a policy verdict.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::File;
use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::sync::PoisonError;

use crate::core::PolicyAuditEvent;
use crate::interfaces::PolicyAuditSink;

// ============================================================================
// SECTION: Sinks
// ============================================================================

/// Audit sink that logs JSON lines to stderr.
pub struct StderrAuditSink;

impl PolicyAuditSink for StderrAuditSink {
    fn record(&self, event: &PolicyAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// Audit sink that logs JSON lines to a file.
pub struct FileAuditSink {
    /// File handle used for append-only logging.
    file: Mutex<File>,
}

impl FileAuditSink {
    /// Opens the audit log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl PolicyAuditSink for FileAuditSink {
    fn record(&self, event: &PolicyAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut file) = self.file.lock()
        {
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}

/// No-op audit sink.
pub struct NoopAuditSink;

impl PolicyAuditSink for NoopAuditSink {
    fn record(&self, _event: &PolicyAuditEvent) {}
}

/// Audit sink that keeps events in memory, in arrival order.
#[derive(Default)]
pub struct RecordingAuditSink {
    /// Recorded events.
    events: Mutex<Vec<PolicyAuditEvent>>,
}

impl RecordingAuditSink {
    /// Creates an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of recorded events.
    #[must_use]
    pub fn events(&self) -> Vec<PolicyAuditEvent> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl PolicyAuditSink for RecordingAuditSink {
    fn record(&self, event: &PolicyAuditEvent) {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).push(event.clone());
    }
}
