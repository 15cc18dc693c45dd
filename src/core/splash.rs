use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at, sleep};
use tracing::debug;

pub const PROGRESS_MAX: u8 = 100;

/// Hand-tuned so the bar lands near 100% around the time the fade starts.
/// The two timers are not synchronized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplashSchedule {
    pub progress_step: u8,
    pub progress_interval: Duration,
    pub fade_delay: Duration,
    pub fade_duration: Duration,
}

impl Default for SplashSchedule {
    fn default() -> Self {
        Self {
            progress_step: 2,
            progress_interval: Duration::from_millis(160),
            fade_delay: Duration::from_millis(8000),
            fade_duration: Duration::from_millis(500),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashEvent {
    Progress(u8),
    FadeOut,
    Completed,
}

/// Owns the progress ticker and the fade timer.
///
/// Dropping the guard aborts both, so the completion callback can never run
/// after the owner is gone.
#[derive(Debug)]
pub struct SplashTimers {
    progress: JoinHandle<()>,
    fade: JoinHandle<()>,
}

impl SplashTimers {
    /// Spawns both timers on the current tokio runtime.
    pub fn start<F>(
        schedule: SplashSchedule,
        events: mpsc::UnboundedSender<SplashEvent>,
        on_complete: F,
    ) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let progress = tokio::spawn(run_progress(schedule, events.clone()));
        let fade = tokio::spawn(run_fade(schedule, events, on_complete));

        Self { progress, fade }
    }
}

impl Drop for SplashTimers {
    fn drop(&mut self) {
        self.progress.abort();
        self.fade.abort();
    }
}

async fn run_progress(schedule: SplashSchedule, events: mpsc::UnboundedSender<SplashEvent>) {
    let step = schedule.progress_step.max(1);
    let period = schedule.progress_interval.max(Duration::from_millis(1));
    let mut ticker = interval_at(Instant::now() + period, period);
    let mut progress = 0u8;

    while progress < PROGRESS_MAX {
        ticker.tick().await;
        progress = progress.saturating_add(step).min(PROGRESS_MAX);

        if events.send(SplashEvent::Progress(progress)).is_err() {
            debug!("Splash listener gone, stopping progress");
            return;
        }
    }
}

async fn run_fade<F>(
    schedule: SplashSchedule,
    events: mpsc::UnboundedSender<SplashEvent>,
    on_complete: F,
) where
    F: FnOnce(),
{
    sleep(schedule.fade_delay).await;
    // A listener that already left still gets its completion.
    let _ = events.send(SplashEvent::FadeOut);
    drop(events);

    sleep(schedule.fade_duration).await;
    on_complete();
}

/// Consumer side of the splash: folds timer events into display state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SplashSequence {
    progress: u8,
    fading: bool,
    completed: bool,
}

impl SplashSequence {
    /// Returns `true` exactly once, for the first completion seen.
    pub fn apply(&mut self, event: SplashEvent) -> bool {
        if self.completed {
            return false;
        }

        match event {
            SplashEvent::Progress(progress) => {
                self.progress = self.progress.max(progress.min(PROGRESS_MAX));
                false
            }
            SplashEvent::FadeOut => {
                self.fading = true;
                false
            }
            SplashEvent::Completed => {
                self.fading = true;
                self.completed = true;
                true
            }
        }
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn is_fading(&self) -> bool {
        self.fading
    }
}
