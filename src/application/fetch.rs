// SPDX-License-Identifier: MPL-2.0
//! OSM label fetch use case.
//!
//! Runs one backend call for an AOI and reduces its result to the optional
//! payload kept by the list. Failures are logged and swallowed: nothing is
//! surfaced to the user and nothing is retried.

use crate::application::port::{FetchOutcome, LabelsBackend, LabelsResult};
use crate::domain::layer::AoiId;
use serde_json::Value;
use std::future::Future;

/// Issues a single label fetch for `aoi_id`.
///
/// The backend is asked for the request immediately; the returned future
/// only awaits its completion.
pub fn fetch_osm_labels<B: LabelsBackend>(
    backend: &B,
    aoi_id: AoiId,
) -> impl Future<Output = LabelsResult<FetchOutcome>> + Send + 'static + use<B> {
    tracing::info!(aoi_id = %aoi_id, "requesting OSM label fetch");
    backend.fetch_labels(aoi_id)
}

/// Reduces a fetch result to its payload, logging the failure cases.
#[must_use]
pub fn settle(aoi_id: &AoiId, result: LabelsResult<FetchOutcome>) -> Option<Value> {
    match result {
        Ok(FetchOutcome::Fetched(payload)) => {
            tracing::info!(aoi_id = %aoi_id, "OSM label fetch completed");
            Some(payload)
        }
        Ok(FetchOutcome::Rejected(message)) => {
            tracing::warn!(aoi_id = %aoi_id, error = %message, "backend rejected OSM label fetch");
            None
        }
        Err(err) => {
            tracing::warn!(aoi_id = %aoi_id, error = %err, "OSM label fetch failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::LabelsError;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, Default)]
    struct RecordingBackend {
        calls: Arc<AtomicUsize>,
        last_id: Arc<Mutex<Option<AoiId>>>,
    }

    impl LabelsBackend for RecordingBackend {
        fn fetch_labels(
            &self,
            aoi_id: AoiId,
        ) -> impl Future<Output = LabelsResult<FetchOutcome>> + Send + 'static + use<> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_id.lock().unwrap() = Some(aoi_id.clone());
            async move { Ok(FetchOutcome::Fetched(json!({ "aoi": aoi_id.as_str() }))) }
        }
    }

    #[tokio::test]
    async fn fetch_calls_backend_once_for_the_aoi() {
        let backend = RecordingBackend::default();

        let result = fetch_osm_labels(&backend, AoiId::new("31")).await;

        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
        assert_eq!(*backend.last_id.lock().unwrap(), Some(AoiId::new("31")));
        assert_eq!(
            settle(&AoiId::new("31"), result),
            Some(json!({ "aoi": "31" }))
        );
    }

    #[tokio::test]
    async fn pending_fetch_outlives_the_backend_handle() {
        let backend = RecordingBackend::default();
        let calls = Arc::clone(&backend.calls);

        let pending = fetch_osm_labels(&backend, AoiId::new("8"));
        drop(backend);
        let handle = tokio::spawn(pending);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        let result = handle.await.expect("fetch task completes");
        assert_eq!(
            settle(&AoiId::new("8"), result),
            Some(json!({ "aoi": "8" }))
        );
    }

    #[test]
    fn settle_keeps_successful_payload() {
        let payload = json!({"features": 12});
        let result = Ok(FetchOutcome::Fetched(payload.clone()));
        assert_eq!(settle(&AoiId::new("1"), result), Some(payload));
    }

    #[test]
    fn settle_swallows_rejection() {
        let result = Ok(FetchOutcome::Rejected("quota exceeded".into()));
        assert_eq!(settle(&AoiId::new("1"), result), None);
    }

    #[test]
    fn settle_swallows_transport_failure() {
        let result = Err(LabelsError::Transport("connection refused".into()));
        assert_eq!(settle(&AoiId::new("1"), result), None);
    }
}
