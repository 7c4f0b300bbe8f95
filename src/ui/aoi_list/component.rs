// SPDX-License-Identifier: MPL-2.0
//! AOI list component encapsulating state and update logic.

use crate::application::editor_links::{Editor, EditorLinks, Imagery};
use crate::application::fetch;
use crate::application::port::{FetchOutcome, LabelsBackend, LabelsResult};
use crate::application::query::{filter_aois, PageInfo, Paginator};
use crate::application::single_flight::SingleFlight;
use crate::domain::layer::{centroid, AoiId, LatLng, Layer, LayerId, ZOOM_TO_LAYER_LEVEL};
use crate::domain::ui::{PageNumber, PageSize};
use iced::Task;
use serde_json::Value;
use url::Url;

/// Messages emitted by the AOI list widgets.
#[derive(Debug, Clone)]
pub enum Message {
    /// A page of the pagination control was selected.
    PageSelected(PageNumber),
    /// Open the AOI in an external editor.
    OpenEditor { editor: Editor, aoi_id: AoiId },
    /// Ask the backend to fetch OSM labels inside the AOI.
    FetchLabels(AoiId),
    /// A label fetch finished.
    FetchCompleted {
        aoi_id: AoiId,
        result: LabelsResult<FetchOutcome>,
    },
    /// Center the map on a layer.
    ZoomTo(LayerId),
}

/// Events the parent should act upon after handling a message.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// Open the URL in a new browsing context.
    OpenUrl(Url),
    /// Recenter the map viewport.
    ZoomTo { center: LatLng, zoom: u8 },
}

/// Complete AOI list state.
#[derive(Debug, Clone)]
pub struct State {
    layers: Vec<Layer>,
    paginator: Paginator,
    imagery: Option<Imagery>,
    links: EditorLinks,
    in_flight: SingleFlight<AoiId>,
    last_fetch_result: Option<Value>,
}

impl State {
    #[must_use]
    pub fn new(links: EditorLinks, page_size: PageSize) -> Self {
        Self {
            layers: Vec::new(),
            paginator: Paginator::new(page_size),
            imagery: None,
            links,
            in_flight: SingleFlight::new(),
            last_fetch_result: None,
        }
    }

    /// Replaces the layer collection, keeping the current page in range.
    pub fn set_layers(&mut self, layers: Vec<Layer>) {
        self.layers = layers;
        let aoi_count = self.aoi_count();
        if self.paginator.clamp_to(aoi_count) {
            tracing::debug!(page = self.paginator.page().value(), "page clamped after layers changed");
        }
    }

    pub fn set_imagery(&mut self, imagery: Option<Imagery>) {
        self.imagery = imagery;
    }

    /// Number of AOI layers in the collection.
    #[must_use]
    pub fn aoi_count(&self) -> usize {
        self.layers.iter().filter(|layer| layer.is_aoi()).count()
    }

    /// AOI layers on the current page.
    #[must_use]
    pub fn visible_aois(&self) -> Vec<&Layer> {
        let aois = filter_aois(&self.layers);
        self.paginator.current_items(&aois).to_vec()
    }

    #[must_use]
    pub fn page_info(&self) -> PageInfo {
        self.paginator.info(self.aoi_count())
    }

    #[must_use]
    pub fn is_fetching(&self, aoi_id: &AoiId) -> bool {
        self.in_flight.is_in_flight(aoi_id)
    }

    /// Payload of the last successful label fetch.
    #[must_use]
    pub fn last_fetch_result(&self) -> Option<&Value> {
        self.last_fetch_result.as_ref()
    }

    pub fn update<B: LabelsBackend>(
        &mut self,
        message: Message,
        backend: &B,
    ) -> (Event, Task<Message>) {
        match message {
            Message::PageSelected(page) => {
                self.paginator.jump(page);
                (Event::None, Task::none())
            }
            Message::OpenEditor { editor, aoi_id } => {
                let url = self.links.url_for(editor, &aoi_id, self.imagery.as_ref());
                tracing::debug!(aoi_id = %aoi_id, ?editor, "opening editor");
                (Event::OpenUrl(url), Task::none())
            }
            Message::FetchLabels(aoi_id) => {
                if !self.in_flight.try_begin(&aoi_id) {
                    tracing::debug!(aoi_id = %aoi_id, "OSM label fetch already in flight, ignoring");
                    return (Event::None, Task::none());
                }
                let completed_id = aoi_id.clone();
                let task = Task::perform(
                    fetch::fetch_osm_labels(backend, aoi_id),
                    move |result| Message::FetchCompleted {
                        aoi_id: completed_id,
                        result,
                    },
                );
                (Event::None, task)
            }
            Message::FetchCompleted { aoi_id, result } => {
                self.in_flight.finish(&aoi_id);
                if let Some(payload) = fetch::settle(&aoi_id, result) {
                    self.last_fetch_result = Some(payload);
                }
                (Event::None, Task::none())
            }
            Message::ZoomTo(layer_id) => {
                let aois = filter_aois(&self.layers);
                let Some(layer) = aois.into_iter().find(|layer| layer.id == layer_id) else {
                    tracing::debug!(layer_id = %layer_id, "zoom requested for unknown AOI");
                    return (Event::None, Task::none());
                };
                let event = Event::ZoomTo {
                    center: centroid(&layer.latlngs),
                    zoom: ZOOM_TO_LAYER_LEVEL,
                };
                (event, Task::none())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::LabelsError;
    use crate::test_utils::{aoi_layer, aoi_layers, assert_abs_diff_eq, label_layer, F64_EPSILON};
    use serde_json::json;
    use std::future::Future;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Debug, Clone)]
    struct NoopBackend;

    impl LabelsBackend for NoopBackend {
        fn fetch_labels(
            &self,
            _aoi_id: AoiId,
        ) -> impl Future<Output = LabelsResult<FetchOutcome>> + Send + 'static + use<> {
            async { Ok(FetchOutcome::Fetched(Value::Null)) }
        }
    }

    /// Counts the requests issued to it.
    #[derive(Debug, Clone, Default)]
    struct CountingBackend {
        requests: Arc<AtomicUsize>,
    }

    impl CountingBackend {
        fn requests(&self) -> usize {
            self.requests.load(Ordering::SeqCst)
        }
    }

    impl LabelsBackend for CountingBackend {
        fn fetch_labels(
            &self,
            _aoi_id: AoiId,
        ) -> impl Future<Output = LabelsResult<FetchOutcome>> + Send + 'static + use<> {
            self.requests.fetch_add(1, Ordering::SeqCst);
            async { Ok(FetchOutcome::Fetched(Value::Null)) }
        }
    }

    fn state() -> State {
        let links = EditorLinks::new(
            "https://rapideditor.org/rapid",
            "https://www.openstreetmap.org/edit",
            "https://fair-dev.hotosm.org/api/v1",
        )
        .expect("valid urls");
        State::new(links, PageSize::default())
    }

    #[test]
    fn visible_aois_skip_other_layers() {
        let mut state = state();
        state.set_layers(vec![
            label_layer("a"),
            aoi_layer("b", "1"),
            label_layer("c"),
            aoi_layer("d", "2"),
        ]);

        let ids: Vec<_> = state.visible_aois().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["b", "d"]);
        assert_eq!(state.aoi_count(), 2);
        assert!(!state.page_info().show_controls);
    }

    #[test]
    fn selecting_a_page_changes_the_slice() {
        let mut state = state();
        state.set_layers(aoi_layers(12));

        let _ = state.update(Message::PageSelected(PageNumber::new(3)), &NoopBackend);

        let ids: Vec<_> = state.visible_aois().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["10", "11"]);
        assert!(state.page_info().show_controls);
    }

    #[test]
    fn shrinking_layers_clamps_the_page() {
        let mut state = state();
        state.set_layers(aoi_layers(12));
        let _ = state.update(Message::PageSelected(PageNumber::new(3)), &NoopBackend);

        state.set_layers(aoi_layers(6));

        assert_eq!(state.page_info().page, PageNumber::new(2));
        assert_eq!(state.visible_aois().len(), 1);
    }

    #[test]
    fn open_editor_emits_url() {
        let mut state = state();
        let (event, _) = state.update(
            Message::OpenEditor {
                editor: Editor::OsmId,
                aoi_id: AoiId::new("9"),
            },
            &NoopBackend,
        );
        match event {
            Event::OpenUrl(url) => {
                assert_eq!(url.host_str(), Some("www.openstreetmap.org"));
                assert!(url.fragment().unwrap_or_default().contains("aoi/gpx/9"));
            }
            other => panic!("expected OpenUrl, got {:?}", other),
        }
    }

    #[test]
    fn second_fetch_for_same_aoi_is_ignored_while_in_flight() {
        let mut state = state();
        let aoi_id = AoiId::new("5");

        let _ = state.update(Message::FetchLabels(aoi_id.clone()), &NoopBackend);
        assert!(state.is_fetching(&aoi_id));

        let (event, _) = state.update(Message::FetchLabels(aoi_id.clone()), &NoopBackend);
        assert_eq!(event, Event::None);
        assert!(state.is_fetching(&aoi_id));

        let _ = state.update(Message::FetchLabels(AoiId::new("6")), &NoopBackend);
        assert!(state.is_fetching(&AoiId::new("6")));
    }

    #[test]
    fn repeated_clicks_issue_one_request_until_completion() {
        let mut state = state();
        let backend = CountingBackend::default();
        let aoi_id = AoiId::new("5");

        let _ = state.update(Message::FetchLabels(aoi_id.clone()), &backend);
        let _ = state.update(Message::FetchLabels(aoi_id.clone()), &backend);
        let _ = state.update(Message::FetchLabels(aoi_id.clone()), &backend);
        assert_eq!(backend.requests(), 1);

        let _ = state.update(
            Message::FetchCompleted {
                aoi_id: aoi_id.clone(),
                result: Ok(FetchOutcome::Fetched(Value::Null)),
            },
            &backend,
        );
        let _ = state.update(Message::FetchLabels(aoi_id), &backend);
        assert_eq!(backend.requests(), 2);

        let _ = state.update(Message::FetchLabels(AoiId::new("6")), &backend);
        assert_eq!(backend.requests(), 3);
    }

    #[test]
    fn completed_fetch_stores_payload_and_releases_guard() {
        let mut state = state();
        let aoi_id = AoiId::new("5");
        let _ = state.update(Message::FetchLabels(aoi_id.clone()), &NoopBackend);

        let payload = json!({"osm": "queued"});
        let _ = state.update(
            Message::FetchCompleted {
                aoi_id: aoi_id.clone(),
                result: Ok(FetchOutcome::Fetched(payload.clone())),
            },
            &NoopBackend,
        );

        assert!(!state.is_fetching(&aoi_id));
        assert_eq!(state.last_fetch_result(), Some(&payload));
    }

    #[test]
    fn failed_fetch_keeps_previous_payload() {
        let mut state = state();
        let aoi_id = AoiId::new("5");
        let payload = json!({"first": true});
        let _ = state.update(Message::FetchLabels(aoi_id.clone()), &NoopBackend);
        let _ = state.update(
            Message::FetchCompleted {
                aoi_id: aoi_id.clone(),
                result: Ok(FetchOutcome::Fetched(payload.clone())),
            },
            &NoopBackend,
        );

        let _ = state.update(Message::FetchLabels(aoi_id.clone()), &NoopBackend);
        let _ = state.update(
            Message::FetchCompleted {
                aoi_id: aoi_id.clone(),
                result: Err(LabelsError::Transport("reset".into())),
            },
            &NoopBackend,
        );

        assert!(!state.is_fetching(&aoi_id));
        assert_eq!(state.last_fetch_result(), Some(&payload));
    }

    #[test]
    fn zoom_to_emits_centroid_at_fixed_zoom() {
        let mut state = state();
        state.set_layers(vec![aoi_layer("a", "1")]);

        let (event, _) = state.update(Message::ZoomTo(LayerId::new("a")), &NoopBackend);

        let Event::ZoomTo { center, zoom } = event else {
            panic!("expected ZoomTo, got {:?}", event);
        };
        assert_eq!(zoom, 17);
        assert_abs_diff_eq!(center.lat, 0.5, epsilon = F64_EPSILON);
        assert_abs_diff_eq!(center.lng, 0.5, epsilon = F64_EPSILON);
    }

    #[test]
    fn zoom_to_prefers_the_aoi_over_a_label_with_the_same_id() {
        let mut state = state();
        let mut label = label_layer("a");
        label.latlngs = vec![LatLng::new(40.0, 40.0)];
        state.set_layers(vec![label, aoi_layer("a", "1")]);

        let (event, _) = state.update(Message::ZoomTo(LayerId::new("a")), &NoopBackend);

        let Event::ZoomTo { center, .. } = event else {
            panic!("expected ZoomTo, got {:?}", event);
        };
        assert_abs_diff_eq!(center.lat, 0.5, epsilon = F64_EPSILON);
        assert_abs_diff_eq!(center.lng, 0.5, epsilon = F64_EPSILON);
    }

    #[test]
    fn zoom_to_non_aoi_layer_does_nothing() {
        let mut state = state();
        state.set_layers(vec![label_layer("x")]);
        let (event, _) = state.update(Message::ZoomTo(LayerId::new("x")), &NoopBackend);
        assert_eq!(event, Event::None);
    }

    #[test]
    fn zoom_to_unknown_layer_does_nothing() {
        let mut state = state();
        let (event, _) = state.update(Message::ZoomTo(LayerId::new("ghost")), &NoopBackend);
        assert_eq!(event, Event::None);
    }
}
