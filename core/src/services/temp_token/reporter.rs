//! Side channel for failures the service swallows

use crate::errors::DomainError;

/// Receives failures of best-effort cleanup
///
/// Validation of an expired token deletes it; if that delete fails the
/// caller still gets "token expired" and the failure goes here instead.
pub trait CleanupReporter: Send + Sync {
    fn report_cleanup_failure(&self, token: &str, error: &DomainError);
}

/// Reports cleanup failures as structured `tracing` warnings
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingCleanupReporter;

impl CleanupReporter for TracingCleanupReporter {
    fn report_cleanup_failure(&self, token: &str, error: &DomainError) {
        tracing::warn!(
            token = token,
            error = %error,
            event = "expired_temp_token_cleanup_failed",
            "Failed to delete expired temp token"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fmt;
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    type Captured = Arc<Mutex<Vec<HashMap<String, String>>>>;

    // Records the fields of every event it sees
    struct CaptureLayer {
        events: Captured,
    }

    struct FieldMap(HashMap<String, String>);

    impl Visit for FieldMap {
        fn record_str(&mut self, field: &Field, value: &str) {
            self.0.insert(field.name().to_string(), value.to_string());
        }

        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.0.insert(field.name().to_string(), format!("{:?}", value));
        }
    }

    impl<S: tracing::Subscriber> Layer<S> for CaptureLayer {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = FieldMap(HashMap::new());
            event.record(&mut fields);
            fields
                .0
                .insert("level".to_string(), event.metadata().level().to_string());
            self.events.lock().unwrap().push(fields.0);
        }
    }

    #[test]
    fn test_tracing_reporter_emits_structured_warning() {
        let events: Captured = Arc::default();
        let subscriber = tracing_subscriber::registry().with(CaptureLayer {
            events: events.clone(),
        });

        tracing::subscriber::with_default(subscriber, || {
            TracingCleanupReporter
                .report_cleanup_failure("tok-1", &DomainError::internal("database unavailable"));
        });

        let events = events.lock().unwrap();
        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event["level"], "WARN");
        assert_eq!(event["event"], "expired_temp_token_cleanup_failed");
        assert_eq!(event["token"], "tok-1");
        assert_eq!(event["error"], "Internal error: database unavailable");
        assert_eq!(event["message"], "Failed to delete expired temp token");
    }
}
