use iced::event::{self, Event};
use iced::keyboard::{self, Key, key::Named};
use iced::time::Instant;
use iced::widget::{button, column, container, horizontal_space, row, text};
use iced::window;
use iced::{Center, Element, Fill, Subscription, Task, Theme};
use tracing::info;

use super::gallery::{self, Gallery};
use super::guest_info::{self, AttireImages};
use super::splash_screen::SplashScreen;
use super::{BLUSH, SALMON, WINE};
use crate::config::AppConfig;
use crate::core::SplashEvent;

pub struct Invitation {
    config: AppConfig,
    screen: Screen,
    page: Page,
    gallery: Gallery,
    attire: AttireImages,
    now: Instant,
}

enum Screen {
    Splash(SplashScreen),
    Main,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    GuestInformation,
    Gallery,
}

#[derive(Debug, Clone)]
pub enum Message {
    Splash(SplashEvent),
    SkipSplash,
    PageSelected(Page),
    Gallery(gallery::Message),
    Animate(Instant),
}

impl Invitation {
    pub fn new(config: AppConfig) -> (Self, Task<Message>) {
        let gallery = Gallery::new(config.asset_root.clone(), &config.gallery, &config.content);
        let attire = AttireImages::discover(&config.asset_root);

        let mut invitation = Self {
            screen: Screen::Main,
            page: Page::GuestInformation,
            gallery,
            attire,
            now: Instant::now(),
            config,
        };

        let task = if invitation.config.splash.enabled {
            let schedule = invitation.config.splash.schedule();
            let mut splash = SplashScreen::new(schedule);
            let timers = splash.start(schedule).map(Message::Splash);
            invitation.screen = Screen::Splash(splash);
            timers
        } else {
            Task::none()
        };

        (invitation, task)
    }

    pub fn title(&self) -> String {
        format!("{} | Wedding Invitation", self.config.content.couple_names())
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }

    pub fn subscription(&self) -> Subscription<Message> {
        match &self.screen {
            Screen::Splash(splash) if splash.is_animating(self.now) => Subscription::batch([
                window::frames().map(Message::Animate),
                splash_keys(),
            ]),
            Screen::Splash(_) => splash_keys(),
            Screen::Main if self.page == Page::Gallery => {
                self.gallery.subscription().map(Message::Gallery)
            }
            Screen::Main => Subscription::none(),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Splash(event) => {
                self.now = Instant::now();
                let Screen::Splash(splash) = &mut self.screen else {
                    return Task::none();
                };

                if splash.update(event) {
                    self.finish_splash()
                } else {
                    Task::none()
                }
            }
            Message::SkipSplash => {
                let Screen::Splash(splash) = &mut self.screen else {
                    return Task::none();
                };

                if splash.dismiss() {
                    info!("Splash dismissed");
                    self.finish_splash()
                } else {
                    Task::none()
                }
            }
            Message::PageSelected(page) => {
                self.page = page;
                self.enter_page()
            }
            Message::Gallery(message) => self.gallery.update(message).map(Message::Gallery),
            Message::Animate(now) => {
                self.now = now;
                Task::none()
            }
        }
    }

    /// Swaps the splash for the main view. Dropping the splash cancels
    /// whatever timer is still pending.
    fn finish_splash(&mut self) -> Task<Message> {
        self.screen = Screen::Main;
        self.enter_page()
    }

    fn enter_page(&mut self) -> Task<Message> {
        match self.page {
            Page::Gallery => self.gallery.visit().map(Message::Gallery),
            Page::GuestInformation => Task::none(),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        if let Screen::Splash(splash) = &self.screen {
            return splash.view(&self.config.content, self.now);
        }

        let body = match self.page {
            Page::GuestInformation => guest_info::view(&self.config.content, &self.attire),
            Page::Gallery => self.gallery.view().map(Message::Gallery),
        };

        let background = if self.page == Page::Gallery { BLUSH } else { SALMON };

        container(column![self.navigation(), body].spacing(8))
            .width(Fill)
            .height(Fill)
            .style(move |_theme| container::Style::default().background(background))
            .into()
    }

    fn navigation(&self) -> Element<'_, Message> {
        let tab = |label: &'static str, page: Page| {
            button(text(label).size(14))
                .on_press_maybe((self.page != page).then_some(Message::PageSelected(page)))
                .style(if self.page == page {
                    button::primary
                } else {
                    button::secondary
                })
        };

        row![
            text(self.config.content.couple_names()).size(18).color(WINE),
            horizontal_space(),
            tab("Guest Information", Page::GuestInformation),
            tab("Gallery", Page::Gallery),
        ]
        .spacing(12)
        .padding(12)
        .align_y(Center)
        .into()
    }
}

fn splash_keys() -> Subscription<Message> {
    event::listen_with(|event, _status, _window| match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) if dismisses_splash(&key) => {
            Some(Message::SkipSplash)
        }
        _ => None,
    })
}

fn dismisses_splash(key: &Key) -> bool {
    matches!(key, Key::Named(Named::Enter | Named::Escape))
}
