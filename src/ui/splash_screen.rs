use iced::animation;
use iced::futures::{Stream, stream};
use iced::task;
use iced::time::Instant;
use iced::widget::{center, column, container, mouse_area, progress_bar, text};
use iced::{Animation, Center, Element, Task};
use tokio::sync::mpsc;
use tracing::debug;

use super::invitation::Message;
use super::{BLUSH, ROSE, faded};
use crate::content::SiteContent;
use crate::core::{SplashEvent, SplashSchedule, SplashSequence, SplashTimers};

const MESSAGES: [&str; 2] = [
    "Behind the scenes, something beautiful is gently coming together, woven with love, \
     dreams, and shared moments. This space is being shaped with care, patience, and \
     heartfelt intention.",
    "Please hold on for just a moment as we reveal something special, made not just to be \
     seen, but to be felt.",
];

pub struct SplashScreen {
    sequence: SplashSequence,
    fade_out: Animation<bool>,
    timers: Option<task::Handle>,
}

impl SplashScreen {
    pub fn new(schedule: SplashSchedule) -> Self {
        Self {
            sequence: SplashSequence::default(),
            fade_out: Animation::new(false)
                .duration(schedule.fade_duration)
                .easing(animation::Easing::EaseInOut),
            timers: None,
        }
    }

    /// Starts the progress and fade timers. They are torn down when the
    /// splash completes, is dismissed, or is dropped.
    pub fn start(&mut self, schedule: SplashSchedule) -> Task<SplashEvent> {
        let (task, handle) = Task::run(timer_events(schedule), |event| event).abortable();
        self.timers = Some(handle.abort_on_drop());
        task
    }

    /// Returns `true` once, when the splash completes.
    pub fn update(&mut self, event: SplashEvent) -> bool {
        let was_fading = self.sequence.is_fading();
        let completed = self.sequence.apply(event);

        if !was_fading && self.sequence.is_fading() {
            self.fade_out.go_mut(true);
        }

        if completed {
            self.timers = None;
            debug!(progress = self.sequence.progress(), "Splash finished");
        }

        completed
    }

    pub fn dismiss(&mut self) -> bool {
        self.update(SplashEvent::Completed)
    }

    pub fn is_running(&self) -> bool {
        self.timers.is_some()
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.fade_out.is_animating(now)
    }

    pub fn view<'a>(&self, content: &'a SiteContent, now: Instant) -> Element<'a, Message> {
        let opacity = self.fade_out.interpolate(1.0, 0.0, now);
        let progress = self.sequence.progress();

        let messages = column(
            MESSAGES
                .iter()
                .map(|message| text(*message).size(14).color(faded(ROSE, opacity)).into()),
        )
        .spacing(16);

        let body = column![
            text(content.couple_names()).size(28).color(faded(ROSE, opacity)),
            messages,
            progress_bar(0.0..=100.0, f32::from(progress)),
            text(format!("{progress}%"))
                .size(10)
                .color(faded(ROSE, 0.7 * opacity)),
        ]
        .spacing(24)
        .align_x(Center)
        .max_width(560);

        mouse_area(
            center(body)
                .padding(32)
                .style(move |_theme| container::Style::default().background(faded(BLUSH, opacity))),
        )
        .on_press(Message::SkipSplash)
        .into()
    }
}

enum TimerState {
    Idle(SplashSchedule),
    Running(SplashTimers, mpsc::UnboundedReceiver<SplashEvent>),
}

/// Timer events as a stream. The timers live inside the stream, so dropping
/// it cancels both.
fn timer_events(schedule: SplashSchedule) -> impl Stream<Item = SplashEvent> {
    stream::unfold(TimerState::Idle(schedule), |state| async move {
        let (timers, mut events) = match state {
            TimerState::Idle(schedule) => {
                let (sender, events) = mpsc::unbounded_channel();
                let completion = sender.clone();
                let timers = SplashTimers::start(schedule, sender, move || {
                    let _ = completion.send(SplashEvent::Completed);
                });
                (timers, events)
            }
            TimerState::Running(timers, events) => (timers, events),
        };

        let event = events.recv().await?;
        Some((event, TimerState::Running(timers, events)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::futures::StreamExt;
    use std::time::Duration;

    fn quick_schedule() -> SplashSchedule {
        SplashSchedule {
            progress_step: 25,
            progress_interval: Duration::from_millis(100),
            fade_delay: Duration::from_millis(1000),
            fade_duration: Duration::from_millis(200),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_stream_completes_once() {
        let events: Vec<_> = timer_events(quick_schedule()).collect().await;

        let completions = events
            .iter()
            .filter(|event| **event == SplashEvent::Completed)
            .count();
        let fade = events.iter().position(|event| *event == SplashEvent::FadeOut);
        let done = events.iter().position(|event| *event == SplashEvent::Completed);

        assert_eq!(completions, 1);
        assert!(fade.is_some());
        assert!(fade < done);
        assert!(events.contains(&SplashEvent::Progress(100)));
    }

    #[test]
    fn test_dismiss_tears_down_timers_once() {
        let schedule = SplashSchedule::default();
        let mut splash = SplashScreen::new(schedule);
        let _task = splash.start(schedule);
        assert!(splash.is_running());

        assert!(splash.dismiss());
        assert!(!splash.is_running());
        assert!(!splash.dismiss());
        assert!(!splash.update(SplashEvent::Completed));
    }

    #[test]
    fn test_fade_out_starts_animation() {
        let mut splash = SplashScreen::new(SplashSchedule::default());

        assert!(!splash.update(SplashEvent::Progress(98)));
        assert!(!splash.update(SplashEvent::FadeOut));

        assert!(splash.is_animating(Instant::now()));
    }
}
