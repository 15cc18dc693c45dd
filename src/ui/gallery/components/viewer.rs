use crate::core::{Id, Rgba};
use iced::animation;
use iced::time::Instant;
use iced::widget::{column, container, horizontal_space, image, mouse_area, opaque, text};
use iced::{Animation, Center, Color, Element, Fill, color};

use crate::ui::gallery::Message;

/// Full-screen view of one photo, opened from a gallery card.
pub struct Viewer {
    image: Option<image::Handle>,
    background_fade_in: Animation<bool>,
    image_fade_in: Animation<bool>,
    current: Option<Id>,
}

impl Viewer {
    pub fn new() -> Self {
        Self {
            image: None,
            background_fade_in: Animation::new(false)
                .quick()
                .easing(animation::Easing::EaseInOut),
            image_fade_in: Animation::new(false)
                .quick()
                .easing(animation::Easing::EaseInOut),
            current: None,
        }
    }

    pub fn current(&self) -> Option<Id> {
        self.current
    }

    pub fn is_open(&self, now: Instant) -> bool {
        self.background_fade_in.interpolate(0.0, 0.8, now) > 0.0
    }

    pub fn open(&mut self, id: Id) {
        self.image = None;
        self.current = Some(id);
        self.image_fade_in.go_mut(false);
        self.background_fade_in.go_mut(true);
    }

    /// Shows decoded pixels, unless the viewer has moved on to another photo.
    pub fn show(&mut self, id: Id, rgba: Rgba) -> bool {
        if self.current != Some(id) {
            return false;
        }

        self.image = Some(image::Handle::from_rgba(rgba.width, rgba.height, rgba.pixels));
        self.background_fade_in.go_mut(true);
        self.image_fade_in.go_mut(true);
        true
    }

    pub fn close(&mut self) {
        self.background_fade_in.go_mut(false);
        self.image_fade_in.go_mut(false);
        self.current = None;
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.background_fade_in.is_animating(now) || self.image_fade_in.is_animating(now)
    }

    pub fn view(&self, caption: String, now: Instant) -> Element<'_, Message> {
        let opacity = self.background_fade_in.interpolate(0.0, 0.8, now);

        let image: Element<'_, _> = if let Some(handle) = &self.image {
            image(handle)
                .width(Fill)
                .height(Fill)
                .opacity(self.image_fade_in.interpolate(0.0, 1.0, now))
                .scale(self.image_fade_in.interpolate(1.5, 1.0, now))
                .into()
        } else {
            horizontal_space().into()
        };

        if opacity > 0.0 {
            let caption = text(caption).size(14).color(Color::WHITE);

            opaque(
                mouse_area(
                    container(column![image, caption].spacing(12).align_x(Center))
                        .center(Fill)
                        .style(move |_theme| {
                            container::Style::default().background(color!(0x000000, opacity))
                        })
                        .padding(20),
                )
                .on_press(Message::Close),
            )
        } else {
            horizontal_space().into()
        }
    }
}
