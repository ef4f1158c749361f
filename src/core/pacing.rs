//! Presentation pacing.
//!
//! A turn pauses after every square stepped and around a snake/ladder jump
//! so the walk can be animated. Pauses never change where a token ends up.
//! Tests use [`NoPacing`]; the terminal front end uses [`SleepPacer`].

use serde::{Deserialize, Serialize};
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::Duration;

use super::config::PacingConfig;

/// Points in a turn where the driver may wait.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pause {
    /// After the token moved one square.
    Step,
    /// After the walk, before the jump is shown.
    BeforeTransform,
    /// After the jump is shown.
    AfterTransform,
}

/// What the driver wants after a pause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pacing {
    Continue,
    /// Abandon the turn. The engine resets the game.
    Abort,
}

/// Injectable delay between turn stages.
pub trait Pacer {
    /// Wait out `pause`, then say whether to keep going.
    fn pause(&mut self, pause: Pause) -> Pacing;
}

/// Resolves turns without waiting.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPacing;

impl Pacer for NoPacing {
    fn pause(&mut self, _pause: Pause) -> Pacing {
        Pacing::Continue
    }
}

/// Blocks the thread for the configured duration of each pause.
///
/// With an abort channel attached, a message arriving during a pause ends
/// the turn in flight, which resets the game.
#[derive(Debug)]
pub struct SleepPacer {
    config: PacingConfig,
    abort: Option<Receiver<()>>,
}

impl SleepPacer {
    pub fn new(config: PacingConfig) -> Self {
        Self { config, abort: None }
    }

    /// Abort at the next pause once something arrives on `abort`.
    #[must_use]
    pub fn with_abort(mut self, abort: Receiver<()>) -> Self {
        self.abort = Some(abort);
        self
    }

    /// Drop abort requests that arrived after the last turn finished.
    pub fn discard_pending_aborts(&mut self) {
        if let Some(abort) = &self.abort {
            while abort.try_recv().is_ok() {}
        }
    }
}

impl Pacer for SleepPacer {
    fn pause(&mut self, pause: Pause) -> Pacing {
        let duration = self.config.duration(pause);
        let Some(abort) = &self.abort else {
            if !duration.is_zero() {
                std::thread::sleep(duration);
            }
            return Pacing::Continue;
        };

        match abort.recv_timeout(duration) {
            Ok(()) => Pacing::Abort,
            Err(RecvTimeoutError::Timeout) => Pacing::Continue,
            Err(RecvTimeoutError::Disconnected) => {
                // Nobody can abort any more
                self.abort = None;
                std::thread::sleep(duration);
                Pacing::Continue
            }
        }
    }
}

impl<P: Pacer + ?Sized> Pacer for &mut P {
    fn pause(&mut self, pause: Pause) -> Pacing {
        (**self).pause(pause)
    }
}

impl PacingConfig {
    /// Wall-clock length of a pause.
    #[must_use]
    pub fn duration(&self, pause: Pause) -> Duration {
        let ms = match pause {
            Pause::Step => self.step_ms,
            Pause::BeforeTransform => self.before_transform_ms,
            Pause::AfterTransform => self.after_transform_ms,
        };
        Duration::from_millis(ms)
    }
}
