//! Shared test fixtures
//!
//! Not every test binary uses every fixture.
#![allow(dead_code)]

use std::collections::VecDeque;

use alegre_scene::audio::{AudioSink, SinkError};
use async_trait::async_trait;

/// Scriptable playback element.
///
/// `play_results` is consumed front to back; once drained, further attempts
/// succeed. Every `set_source` is recorded so tests can assert the load
/// sequence and its bound.
#[derive(Debug, Default)]
pub struct FakeSink {
    pub sources: Vec<String>,
    pub paused: bool,
    pub play_attempts: usize,
    pub play_results: VecDeque<Result<(), SinkError>>,
}

impl FakeSink {
    pub fn new() -> Self {
        Self {
            paused: true,
            ..Default::default()
        }
    }

    pub fn with_play_results(results: Vec<Result<(), SinkError>>) -> Self {
        Self {
            paused: true,
            play_results: results.into(),
            ..Default::default()
        }
    }

    pub fn current_source(&self) -> Option<&str> {
        self.sources.last().map(String::as_str)
    }
}

#[async_trait]
impl AudioSink for FakeSink {
    fn set_source(&mut self, url: &str) {
        self.sources.push(url.to_string());
        self.paused = true;
    }

    async fn play(&mut self) -> Result<(), SinkError> {
        self.play_attempts += 1;
        match self.play_results.pop_front() {
            Some(Ok(())) | None => {
                self.paused = false;
                Ok(())
            }
            Some(Err(e)) => Err(e),
        }
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }
}

/// One-time tracing setup so failing tests show the engine's own logs.
pub fn init_tracing() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "debug".into()),
            )
            .with_test_writer()
            .try_init();
    });
}
