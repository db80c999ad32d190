//! Ciclos completos do widget sobre HTTP real (wiremock).

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use curious_cats_core::model::ui::{UiEvent, ALERT_COLOR, ERROR_TEXT};
use curious_cats_core::widget::{MemorySurface, WidgetSnapshot};
use curious_cats_core::{FactWidget, HttpFactSource, TranslationTable, WidgetConfig, WidgetHandle};

fn fast_config(url: String) -> WidgetConfig {
    WidgetConfig {
        api_url: url,
        initial_fetch_ms: 3_600_000,
        fade_ms: 10,
        error_restore_ms: 50,
        typewriter_start_ms: 1,
        typewriter_interval_ms: 1,
    }
}

fn start(server: &MockServer) -> (WidgetHandle, MemorySurface) {
    let config = fast_config(server.uri());
    let source = Arc::new(HttpFactSource::new(config.api_url.clone()).unwrap());
    let surface = MemorySurface::new();
    let (widget, handle) = FactWidget::new(
        config,
        TranslationTable::portuguese().unwrap(),
        source,
        Box::new(surface.clone()),
    );
    widget.spawn();
    (handle, surface)
}

async fn wait_idle(handle: &WidgetHandle) -> WidgetSnapshot {
    for _ in 0..200 {
        let snap = handle.snapshot().await.unwrap();
        if !snap.busy {
            return snap;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("fetch cycle never finished");
}

fn slot_texts(surface: &MemorySurface) -> Vec<(usize, String)> {
    let mut texts: Vec<(usize, String)> = surface
        .events()
        .into_iter()
        .filter_map(|e| match e {
            UiEvent::SlotText { slot, text } => Some((slot, text)),
            _ => None,
        })
        .collect();
    texts.sort();
    texts
}

#[tokio::test]
async fn cycle_fetches_three_facts_and_translates_them() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": ["A cat's whiskers help it sense objects in the dark at night."] })),
        )
        .expect(3)
        .mount(&server)
        .await;

    let (handle, surface) = start(&server);
    assert!(handle.trigger().await.unwrap());

    let snap = wait_idle(&handle).await;
    assert_eq!(snap.facts.len(), 3);

    tokio::time::sleep(Duration::from_millis(100)).await;
    let expected = "A gato's bigodes help it sense objects in the dark at noite.".to_string();
    assert_eq!(
        slot_texts(&surface),
        vec![(0, expected.clone()), (1, expected.clone()), (2, expected)]
    );
}

#[tokio::test]
async fn one_failing_request_fails_the_whole_cycle() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": ["Cats purr."] })))
        .up_to_n_times(2)
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .with_priority(2)
        .mount(&server)
        .await;

    let (handle, surface) = start(&server);
    assert!(handle.trigger().await.unwrap());

    let snap = wait_idle(&handle).await;
    assert!(snap.facts.is_empty());

    let texts = slot_texts(&surface);
    assert_eq!(texts.len(), 3);
    assert!(texts.iter().all(|(_, t)| t == ERROR_TEXT));
    assert!(surface.events().contains(&UiEvent::SlotBackground {
        slot: 1,
        color: ALERT_COLOR.to_string(),
    }));

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 3);

    // o usuário pode tentar de novo
    assert!(handle.trigger().await.unwrap());
    wait_idle(&handle).await;
}
