#![allow(dead_code)]

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use axum_test::TestServer;
use std::io;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;
use user_service::i18n::Translations;
use user_service::logging::{self, LogFormat, LogLevel};
use user_service::routes::router;
use user_service::state::AppState;

pub const API_KEY: &str = "test-api-key";

pub fn create_test_state() -> AppState {
    create_test_state_with_language("en")
}

pub fn create_test_state_with_language(default_language: &str) -> AppState {
    AppState::new(API_KEY, Translations::new(default_language))
}

pub fn test_server() -> TestServer {
    TestServer::new(router(create_test_state())).unwrap()
}

/// In-memory log sink shared between the subscriber and the test.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

impl LogCapture {
    pub fn lines(&self) -> Vec<String> {
        let buf = self.0.lock().unwrap();
        String::from_utf8_lossy(&buf)
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Lines tagged with `level` (e.g. `"ERROR"`) that contain `needle`.
    pub fn matching(&self, level: &str, needle: &str) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|line| line.contains(level) && line.contains(needle))
            .collect()
    }
}

/// Routes this thread's log output into a capture buffer until the guard drops.
///
/// Works with `#[tokio::test]`, which runs everything on the current thread.
pub fn capture_logs(level: LogLevel) -> (LogCapture, DefaultGuard) {
    let capture = LogCapture::default();
    let guard = tracing::subscriber::set_default(logging::subscriber(
        logging::filter(level, None),
        LogFormat::Text,
        capture.clone(),
        false,
    ));
    (capture, guard)
}

/// Sends one request through the full router on the current task.
pub async fn send(state: AppState, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = router(state).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}
