//! Walkthrough of the playback controller against an in-memory engine.
//!
//! Run with:
//!
//! ```sh
//! cargo run -p core-player --example player_demo
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use bridge_traits::engine::{EngineStatus, MediaEngine, MediaItem, SeekCompletion};
use bridge_traits::executor::InlineExecutor;
use bridge_traits::loader::{AssetLocator, AssetProperty, AssetPropertyLoader, ResolvedAsset};
use bridge_traits::observer::{PlaybackObserver, StatusHandler, StoppedHandler, TickHandler};
use core_player::{PlaybackContext, PlaybackDelegate, PlaybackRate, PlayerConfig, RemoteAudioPlayer};
use core_runtime::logging::{init_logging, LoggingConfig};
use tracing::info;

#[derive(Default)]
struct EngineState {
    item: Option<MediaItem>,
    rate_setting: f32,
    playing: bool,
    position: f64,
    pending_seeks: VecDeque<(f64, SeekCompletion)>,
}

/// Minimal in-memory engine; the demo advances its clock by hand.
struct DemoEngine {
    state: Mutex<EngineState>,
}

impl DemoEngine {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(EngineState {
                rate_setting: 1.0,
                ..EngineState::default()
            }),
        })
    }

    fn advance(&self, seconds: f64) {
        let mut state = self.state.lock().unwrap();
        if state.playing {
            state.position += seconds * f64::from(state.rate_setting);
        }
    }

    fn finish_pending_seek(&self) {
        let pending = self.state.lock().unwrap().pending_seeks.pop_front();
        if let Some((target, completion)) = pending {
            self.state.lock().unwrap().position = target;
            completion(true);
        }
    }
}

impl MediaEngine for DemoEngine {
    fn play(&self) {
        self.state.lock().unwrap().playing = true;
    }

    fn pause(&self) {
        self.state.lock().unwrap().playing = false;
    }

    fn set_rate(&self, rate: f32) {
        self.state.lock().unwrap().rate_setting = rate;
    }

    fn replace_item(&self, item: Option<MediaItem>) {
        let mut state = self.state.lock().unwrap();
        state.item = item;
        state.position = 0.0;
    }

    fn seek(&self, seconds: f64, _tolerance: Duration, completion: SeekCompletion) {
        self.state
            .lock()
            .unwrap()
            .pending_seeks
            .push_back((seconds, completion));
    }

    fn current_item(&self) -> Option<MediaItem> {
        self.state.lock().unwrap().item.clone()
    }

    fn position_seconds(&self) -> f64 {
        self.state.lock().unwrap().position
    }

    fn rate(&self) -> f32 {
        let state = self.state.lock().unwrap();
        if state.playing {
            state.rate_setting
        } else {
            0.0
        }
    }
}

#[derive(Default)]
struct DemoObserver {
    tick: Mutex<Option<TickHandler>>,
    status: Mutex<Option<StatusHandler>>,
    stopped: Mutex<Option<StoppedHandler>>,
}

impl DemoObserver {
    fn tick(&self) {
        if let Some(handler) = self.tick.lock().unwrap().as_ref() {
            handler();
        }
    }

    fn status(&self, status: EngineStatus) {
        if let Some(handler) = self.status.lock().unwrap().as_ref() {
            handler(status);
        }
    }
}

impl PlaybackObserver for DemoObserver {
    fn add_periodic_time_observer(&self, _interval: Duration, handler: TickHandler) {
        *self.tick.lock().unwrap() = Some(handler);
    }

    fn add_time_control_status_observer(&self, handler: StatusHandler) {
        *self.status.lock().unwrap() = Some(handler);
    }

    fn add_stopped_playback_observer(&self, handler: StoppedHandler) {
        *self.stopped.lock().unwrap() = Some(handler);
    }
}

/// Resolves every locator to a fixed three-minute asset.
struct DemoLoader;

#[async_trait]
impl AssetPropertyLoader for DemoLoader {
    async fn load_properties(
        &self,
        _properties: &[AssetProperty],
        locator: &AssetLocator,
    ) -> bridge_traits::Result<ResolvedAsset> {
        tokio::time::sleep(Duration::from_millis(50)).await;
        Ok(ResolvedAsset {
            locator: locator.clone(),
            duration: Duration::from_secs(180),
        })
    }
}

struct PrintingDelegate;

impl PlaybackDelegate for PrintingDelegate {
    fn playback_context_updated(&self, context: &PlaybackContext) {
        info!(
            state = ?context.state,
            time = context.current_time,
            duration = context.duration,
            rate = context.rate.as_f32(),
            seeking = context.is_seeking,
            "context updated"
        );
    }
}

#[tokio::main]
async fn main() {
    init_logging(LoggingConfig::default()).expect("logging init");

    let engine = DemoEngine::new();
    let observer = Arc::new(DemoObserver::default());
    let player = RemoteAudioPlayer::new(
        engine.clone(),
        Arc::new(DemoLoader),
        observer.clone(),
        Arc::new(InlineExecutor),
        PlayerConfig::default(),
    )
    .expect("valid config");

    let delegate: Arc<dyn PlaybackDelegate> = Arc::new(PrintingDelegate);

    info!("loading episode");
    player.load_asset(
        "https://cdn.example.com/episodes/42.mp3".into(),
        Arc::downgrade(&delegate),
    );
    tokio::time::sleep(Duration::from_millis(200)).await;

    info!("engine confirms playback");
    observer.status(EngineStatus::Playing);
    for _ in 0..3 {
        engine.advance(1.0);
        observer.tick();
    }

    info!("doubling the rate");
    player.update_rate(PlaybackRate::NORMAL.next());
    engine.advance(1.0);
    observer.tick();

    info!("seeking to 90s");
    player.seek(90.0);
    engine.finish_pending_seek();
    observer.status(EngineStatus::Playing);
    engine.advance(1.0);
    observer.tick();

    info!("stopping");
    player.stop();
}
