use crate::core::{ImageData, Rgba};
use iced::animation;
use iced::time::Instant;
use iced::widget::{button, container, horizontal_space, image, mouse_area, pop};
use iced::{Animation, ContentFit, Element, Fill};

use crate::ui::gallery::Message;

pub fn card<'a>(
    metadata: &'a ImageData,
    preview: Option<&'a Preview>,
    now: Instant,
) -> Element<'a, Message> {
    let image: Element<'_, _> = if let Some(Preview::Ready { thumbnail }) = preview {
        image(&thumbnail.handle)
            .width(Fill)
            .height(Fill)
            .content_fit(ContentFit::Cover)
            .opacity(thumbnail.fade_in.interpolate(0.0, 1.0, now))
            .scale(thumbnail.zoom.interpolate(1.0, 1.05, now))
            .into()
    } else {
        horizontal_space().into()
    };

    let height = preview.map_or(Preview::WIDTH, Preview::height);

    let card = mouse_area(
        container(image)
            .width(Preview::WIDTH)
            .height(height)
            .style(container::dark),
    )
    .on_enter(Message::ThumbnailHovered(metadata.id, true))
    .on_exit(Message::ThumbnailHovered(metadata.id, false));

    if let Some(preview) = preview {
        let is_thumbnail = matches!(preview, Preview::Ready { .. });

        button(card)
            .on_press_maybe(is_thumbnail.then_some(Message::Open(metadata.id)))
            .padding(0)
            .style(button::text)
            .into()
    } else {
        pop(card)
            .on_show(|_| Message::ImagePoppedIn(metadata.id))
            .into()
    }
}

#[derive(Debug, Clone)]
pub enum Preview {
    Loading,
    Ready { thumbnail: Thumbnail },
}

#[derive(Debug, Clone)]
pub struct Thumbnail {
    pub handle: image::Handle,
    pub fade_in: Animation<bool>,
    pub zoom: Animation<bool>,
    aspect_ratio: f32,
}

impl Preview {
    pub const WIDTH: u32 = 320;
    pub const HEIGHT: u32 = 480;

    pub fn ready(rgba: Rgba) -> Self {
        Self::Ready {
            thumbnail: Thumbnail::new(rgba),
        }
    }

    pub fn aspect_ratio(&self) -> f32 {
        match self {
            Self::Ready { thumbnail } => thumbnail.aspect_ratio,
            Self::Loading => 1.0,
        }
    }

    /// Card height at `WIDTH`, following the photo's proportions.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn height(&self) -> u32 {
        let aspect_ratio = self.aspect_ratio();
        if aspect_ratio.is_finite() && aspect_ratio > 0.0 {
            (Self::WIDTH as f32 / aspect_ratio).round() as u32
        } else {
            Self::WIDTH
        }
    }

    pub fn toggle_zoom(&mut self, enabled: bool) {
        if let Self::Ready { thumbnail } = self {
            thumbnail.zoom.go_mut(enabled);
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        match self {
            Self::Ready { thumbnail } => {
                thumbnail.fade_in.is_animating(now) || thumbnail.zoom.is_animating(now)
            }
            Self::Loading => false,
        }
    }
}

impl Thumbnail {
    pub fn new(rgba: Rgba) -> Self {
        let aspect_ratio = rgba.aspect_ratio();

        Self {
            handle: image::Handle::from_rgba(rgba.width, rgba.height, rgba.pixels),
            fade_in: Animation::new(false).quick().go(true),
            zoom: Animation::new(false)
                .quick()
                .easing(animation::Easing::EaseInOut),
            aspect_ratio,
        }
    }
}
