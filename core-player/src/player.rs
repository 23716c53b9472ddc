//! # Remote Audio Player
//!
//! [`RemoteAudioPlayer`] wraps a native media engine and exposes a
//! simplified, thread-safe, observable playback state. Commands may be
//! issued from any thread; engine callbacks (ticks, status changes,
//! end-of-playback) arrive on arbitrary threads; everything is reconciled
//! into [`PlaybackContext`] commits behind a single writer gate.
//!
//! ## Commit discipline
//!
//! A commit is an atomic wholesale replacement of the context followed by
//! exactly one delegate notification. Two locks implement it:
//!
//! - the **value cell** holds the context itself and is locked only for the
//!   read-modify-write, so readers are never blocked by a slow delegate;
//! - the **commit gate** serializes writers and stays held through the
//!   notification, so notifications are delivered in commit order.
//!
//! ## Threading
//!
//! Engine control primitives (play/pause/seek/replace-item) only run on the
//! primary execution context; any path needing them redispatches through the
//! injected [`MainExecutor`]. Commands never block the calling thread
//! waiting for engine confirmation — the confirmation arrives later through
//! the observer streams. `stop` is the one command whose context effect is
//! visible before it returns.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use bridge_traits::engine::{EngineStatus, MediaEngine, MediaItem};
use bridge_traits::executor::MainExecutor;
use bridge_traits::loader::{AssetLocator, AssetProperty, AssetPropertyLoader, ResolvedAsset};
use bridge_traits::observer::PlaybackObserver;
use parking_lot::Mutex;
use tracing::{debug, error, info};

use crate::config::PlayerConfig;
use crate::context::{PlaybackContext, PlaybackRate, PlaybackState};
use crate::error::{PlayerError, Result};

/// Receives one notification per committed context mutation.
///
/// The player holds the delegate weakly; once the delegate is dropped,
/// notifications become no-ops. Notifications are delivered in commit order
/// while the player's writer gate is held, so implementations should record
/// or forward the snapshot rather than synchronously calling back into
/// mutating player commands.
pub trait PlaybackDelegate: Send + Sync {
    /// A new context has been committed.
    fn playback_context_updated(&self, context: &PlaybackContext);
}

/// Playback controller wrapping a native media engine.
///
/// Construct with [`RemoteAudioPlayer::new`] inside a tokio runtime; asset
/// loading completions are driven by spawned tasks.
pub struct RemoteAudioPlayer {
    engine: Arc<dyn MediaEngine>,
    loader: Arc<dyn AssetPropertyLoader>,
    main: Arc<dyn MainExecutor>,
    config: PlayerConfig,
    /// Writer serialization; held through the delegate notification so
    /// notifications cannot be reordered across commits.
    commit_gate: Mutex<()>,
    /// The committed context value. Locked only for read-modify-write.
    context: Mutex<PlaybackContext>,
    delegate: Mutex<Option<Weak<dyn PlaybackDelegate>>>,
    /// Generation counters for supersession: a completion is applied only
    /// if its generation is still the latest issued one.
    load_generation: AtomicU64,
    seek_generation: AtomicU64,
}

impl RemoteAudioPlayer {
    /// Create a player and register its observers on the engine's event
    /// streams.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::InvalidConfig`] when `config` fails
    /// validation.
    pub fn new(
        engine: Arc<dyn MediaEngine>,
        loader: Arc<dyn AssetPropertyLoader>,
        observer: Arc<dyn PlaybackObserver>,
        main: Arc<dyn MainExecutor>,
        config: PlayerConfig,
    ) -> Result<Arc<Self>> {
        config.validate().map_err(PlayerError::InvalidConfig)?;

        let player = Arc::new(Self {
            engine,
            loader,
            main,
            config,
            commit_gate: Mutex::new(()),
            context: Mutex::new(PlaybackContext::not_loaded()),
            delegate: Mutex::new(None),
            load_generation: AtomicU64::new(0),
            seek_generation: AtomicU64::new(0),
        });
        player.register_observers(observer.as_ref());

        Ok(player)
    }

    /// The committed context for `locator`, or a fresh not-loaded context
    /// when `locator` is not the currently installed item. Pure read.
    pub fn playback_context(&self, locator: &AssetLocator) -> PlaybackContext {
        match self.engine.current_item() {
            Some(item) if item.matches(locator) => self.context.lock().clone(),
            _ => PlaybackContext::not_loaded(),
        }
    }

    /// Load the asset behind `locator` and adopt `delegate` as the
    /// notification target.
    ///
    /// The delegate is adopted synchronously and receives one immediate
    /// notification with the context as it stands, before any asynchronous
    /// work begins. When `locator` is already the installed item, playback
    /// is resumed (paused), restarted (stopped), or left untouched
    /// (playing/loading). Switching to a different locator force-stops the
    /// previous item first, so the previous delegate observes a terminal
    /// stopped context before it is replaced.
    pub fn load_asset(self: &Arc<Self>, locator: AssetLocator, delegate: Weak<dyn PlaybackDelegate>) {
        if let Some(current) = self.engine.current_item() {
            if current.matches(&locator) {
                self.reload_current_item(current, delegate);
                return;
            }
        }

        self.stop();
        self.dispatch_engine(|engine| engine.replace_item(None));

        self.adopt_delegate(delegate);
        self.commit(|context| context.state = PlaybackState::Loading);

        let generation = self.load_generation.fetch_add(1, Ordering::SeqCst) + 1;
        info!(%locator, "loading asset");

        let player = Arc::downgrade(self);
        let loader = Arc::clone(&self.loader);
        tokio::spawn(async move {
            let result = loader
                .load_properties(&[AssetProperty::Duration], &locator)
                .await;
            if let Some(player) = player.upgrade() {
                player.finish_loading(generation, locator, result);
            }
        });
    }

    /// Forward a play command to the engine. The context updates once the
    /// engine confirms the status change.
    pub fn play(&self) {
        self.dispatch_engine(|engine| engine.play());
    }

    /// Forward a pause command to the engine. The context updates once the
    /// engine confirms the status change.
    pub fn pause(&self) {
        self.dispatch_engine(|engine| engine.pause());
    }

    /// Stop playback.
    ///
    /// The engine has no stop primitive, so the engine side is a pause; the
    /// stopped context (position reset to zero) is committed authoritatively
    /// before this call returns, without waiting for confirmation.
    pub fn stop(&self) {
        self.dispatch_engine(|engine| engine.pause());
        self.commit(|context| *context = PlaybackContext::stopped(context.duration));
    }

    /// Forward a playback-rate change to the engine. The committed rate
    /// catches up on the next periodic tick.
    pub fn update_rate(&self, rate: PlaybackRate) {
        self.dispatch_engine(move |engine| engine.set_rate(rate.as_f32()));
    }

    /// Seek the loaded asset's timeline to `time` seconds.
    ///
    /// The engine is paused, `current_time` and `is_seeking` are committed
    /// optimistically, and an asynchronous engine seek is issued. Playback
    /// resumes when the seek completes. A newer seek supersedes an
    /// in-flight one: the stale completion is detected and dropped.
    pub fn seek(self: &Arc<Self>, time: f64) {
        let generation = self.seek_generation.fetch_add(1, Ordering::SeqCst) + 1;

        let player = Arc::clone(self);
        self.main.dispatch(Box::new(move || {
            if !player.context.lock().state.can_seek() {
                debug!(time, "ignoring seek with no seekable asset");
                return;
            }

            player.engine.pause();
            player.commit(|context| {
                context.current_time = time;
                context.is_seeking = true;
            });
            player.execute_seek(generation, time);
        }));
    }

    // ------------------------------------------------------------------
    // Commit machinery
    // ------------------------------------------------------------------

    /// Apply `mutate` to a copy of the committed context, store it, and
    /// notify the delegate with the new snapshot. Returning `false` from
    /// `mutate` abandons the commit: no write, no notification.
    fn try_commit<F>(&self, mutate: F) -> bool
    where
        F: FnOnce(&mut PlaybackContext) -> bool,
    {
        let _gate = self.commit_gate.lock();
        let snapshot = {
            let mut context = self.context.lock();
            let mut next = context.clone();
            if !mutate(&mut next) {
                return false;
            }
            *context = next;
            context.clone()
        };
        self.notify_delegate(&snapshot);
        true
    }

    fn commit<F>(&self, mutate: F)
    where
        F: FnOnce(&mut PlaybackContext),
    {
        self.try_commit(|context| {
            mutate(context);
            true
        });
    }

    fn notify_delegate(&self, context: &PlaybackContext) {
        let delegate = self.delegate.lock().clone();
        if let Some(delegate) = delegate.and_then(|weak| weak.upgrade()) {
            delegate.playback_context_updated(context);
        }
    }

    /// Install a new delegate and fire the immediate notification with the
    /// context as it stands. Serialized through the commit gate so the
    /// adoption notification cannot interleave with a commit's.
    fn adopt_delegate(&self, delegate: Weak<dyn PlaybackDelegate>) {
        let _gate = self.commit_gate.lock();
        *self.delegate.lock() = Some(delegate);
        let snapshot = self.context.lock().clone();
        self.notify_delegate(&snapshot);
    }

    // ------------------------------------------------------------------
    // Command helpers
    // ------------------------------------------------------------------

    /// Run an engine control primitive on the primary execution context.
    fn dispatch_engine<F>(&self, action: F)
    where
        F: FnOnce(&dyn MediaEngine) + Send + 'static,
    {
        let engine = Arc::clone(&self.engine);
        self.main.dispatch(Box::new(move || action(engine.as_ref())));
    }

    /// Reconcile a repeated load of the already-installed item.
    fn reload_current_item(&self, current: MediaItem, delegate: Weak<dyn PlaybackDelegate>) {
        self.adopt_delegate(delegate);

        let state = self.context.lock().state;
        match state {
            PlaybackState::Paused => {
                // Same item, currently held: resume without re-resolving.
                self.dispatch_engine(|engine| engine.play());
            }
            PlaybackState::Stopped => {
                // Re-submitting the same item restarts from position zero
                // and re-arms the engine's per-item observers.
                self.dispatch_engine(move |engine| {
                    engine.replace_item(Some(current));
                    engine.play();
                });
            }
            _ => {
                // Already playing (or still resolving): the adoption
                // notification above is all a newly attached delegate
                // needs; starting playback again would double-start it.
                debug!(?state, "load of active item, delegate re-notified only");
            }
        }
    }

    /// Handle the loader's completion for load `generation`.
    fn finish_loading(
        self: Arc<Self>,
        generation: u64,
        locator: AssetLocator,
        result: bridge_traits::Result<ResolvedAsset>,
    ) {
        // Loader completions may arrive on any thread; installing the item
        // is a control primitive and must run on the primary context.
        let player = Arc::clone(&self);
        self.main.dispatch(Box::new(move || {
            if generation != player.load_generation.load(Ordering::SeqCst) {
                debug!(%locator, generation, "dropping superseded load completion");
                return;
            }

            match result {
                Ok(asset) => player.install_resolved_asset(asset),
                Err(source) => {
                    // Terminal for this attempt: reset and wait for the
                    // caller to re-issue the load.
                    error!(%locator, error = %PlayerError::AssetResolution(source), "asset load failed");
                    player.commit(|context| *context = PlaybackContext::not_loaded());
                }
            }
        }));
    }

    /// Install a resolved asset into the engine and start playback. Runs on
    /// the primary context.
    fn install_resolved_asset(&self, asset: ResolvedAsset) {
        let duration = asset.duration.as_secs_f64();
        let item = MediaItem::new(asset.locator.clone(), asset.duration);

        self.engine.replace_item(Some(item));
        self.commit(|context| {
            context.duration = duration;
            context.current_time = 0.0;
            context.rate = PlaybackRate::ZERO;
            context.is_seeking = false;
        });

        // Playback starts immediately; the loading -> playing edge lands
        // when the engine reports its status change.
        self.engine.play();
        info!(locator = %asset.locator, duration, "asset resolved, playback started");
    }

    /// Issue the engine seek for seek `generation`. Runs on the primary
    /// context.
    fn execute_seek(self: &Arc<Self>, generation: u64, time: f64) {
        if !self.context.lock().is_seeking || self.engine.current_item().is_none() {
            return;
        }

        let weak = Arc::downgrade(self);
        let tolerance = self.config.seek_tolerance;
        self.engine.seek(
            time,
            tolerance,
            Box::new(move |finished| {
                if !finished {
                    // The engine gave up; the next tick re-synchronizes
                    // from its ground truth.
                    return;
                }
                if let Some(player) = weak.upgrade() {
                    player.finish_seek(generation);
                }
            }),
        );
    }

    /// Apply a finished seek, unless a newer seek has superseded it.
    fn finish_seek(self: Arc<Self>, generation: u64) {
        let applied = self.try_commit(|context| {
            if generation != self.seek_generation.load(Ordering::SeqCst) || !context.is_seeking {
                return false;
            }
            context.is_seeking = false;
            true
        });

        if applied {
            // Seek completion always resumes playback.
            self.play();
        } else {
            debug!(generation, "dropping stale seek completion");
        }
    }

    // ------------------------------------------------------------------
    // Event reconciliation
    // ------------------------------------------------------------------

    fn register_observers(self: &Arc<Self>, observer: &dyn PlaybackObserver) {
        let weak = Arc::downgrade(self);
        observer.add_periodic_time_observer(
            self.config.tick_interval,
            Box::new(move || {
                if let Some(player) = weak.upgrade() {
                    player.reconcile_tick();
                }
            }),
        );

        let weak = Arc::downgrade(self);
        observer.add_time_control_status_observer(Box::new(move |status| {
            if let Some(player) = weak.upgrade() {
                player.reconcile_status(status);
            }
        }));

        let weak = Arc::downgrade(self);
        observer.add_stopped_playback_observer(Box::new(move |item| {
            if let Some(player) = weak.upgrade() {
                player.reconcile_playback_ended(item);
            }
        }));
    }

    /// Refresh position and rate from the engine on a periodic tick. Ticks
    /// are discarded while a seek is in flight: the seek is authoritative
    /// over stale progress reports.
    fn reconcile_tick(&self) {
        let applied = self.try_commit(|context| {
            if context.is_seeking {
                return false;
            }

            let position = self.engine.position_seconds();
            context.current_time = if position.is_finite() {
                position.max(0.0)
            } else {
                0.0
            };
            context.is_seeking = false;

            let rate = self.engine.rate();
            context.state = if rate != 0.0 {
                PlaybackState::Playing
            } else {
                PlaybackState::Paused
            };
            context.rate = PlaybackRate::new(rate);
            true
        });

        if !applied {
            debug!("discarding periodic tick while a seek is in flight");
        }
    }

    /// Reconcile a reported engine status against the committed state.
    fn reconcile_status(&self, status: EngineStatus) {
        self.commit(|context| match (status, context.state) {
            (EngineStatus::Playing, PlaybackState::Playing)
            | (EngineStatus::Paused, PlaybackState::Paused) => {}
            (EngineStatus::Paused, PlaybackState::Playing)
            | (EngineStatus::Paused, PlaybackState::Loading) => {
                context.state = PlaybackState::Paused;
                context.rate = PlaybackRate::ZERO;
            }
            (EngineStatus::Playing, PlaybackState::Paused)
            | (EngineStatus::Playing, PlaybackState::Stopped)
            | (EngineStatus::Playing, PlaybackState::Loading) => {
                context.state = PlaybackState::Playing;
            }
            (status, state) => {
                // Unreachable under correct engine behavior; log and move on.
                debug!(?status, ?state, "no reconciliation for status transition");
            }
        });
    }

    /// Reconcile a natural end-of-playback notification. Only accepted when
    /// the reporting item is still the installed one, guarding against
    /// notifications from a just-replaced item.
    fn reconcile_playback_ended(&self, item: MediaItem) {
        match self.engine.current_item() {
            Some(current) if current.matches(&item.locator) => {}
            _ => {
                debug!(locator = %item.locator, "ignoring end-of-playback for replaced item");
                return;
            }
        }

        self.commit(|context| {
            context.state = PlaybackState::Stopped;
            context.current_time = 0.0;
            context.rate = PlaybackRate::ZERO;
            context.is_seeking = false;
        });
    }
}
