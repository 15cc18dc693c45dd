pub mod components;
pub mod masonry;

use crate::config::GalleryConfig;
use crate::content::SiteContent;
use crate::core::{Category, Error, Id, ImageData, ImageReference, Rgba, Size, list_images};
use crate::ui::WINE;
use components::{Preview, Viewer, card};

use iced::event::{self, Event as IcedEvent};
use iced::keyboard::Event;
use iced::keyboard::key::{Key, Named};
use iced::time::Instant;
use iced::widget::{center_x, column, row, scrollable, stack, text};
use iced::window;
use iced::{Center, Element, Subscription, Task};
use tracing::{debug, info, warn};

use std::collections::HashMap;
use std::path::PathBuf;

const SPACING: u16 = 8;

pub struct Gallery {
    root: PathBuf,
    directory: String,
    category: Category,
    relist_on_visit: bool,
    columns: usize,
    subtitle: String,
    images: Vec<ImageData>,
    previews: HashMap<Id, Preview>,
    viewer: Viewer,
    listed: bool,
    listing: u64,
    now: Instant,
}

#[derive(Debug, Clone)]
pub enum Message {
    ImagesListed(Vec<ImageReference>),
    ImagePoppedIn(Id),
    ImageDownloaded(Id, Result<Rgba, Error>),
    ThumbnailDownloaded(u64, Id, Result<Rgba, Error>),
    ThumbnailHovered(Id, bool),
    Open(Id),
    Close,
    Animate(Instant),
    KeyPressed(Event),
}

impl Gallery {
    pub fn new(root: PathBuf, config: &GalleryConfig, content: &SiteContent) -> Self {
        Self {
            root,
            directory: config.directory.clone(),
            category: config.category(),
            relist_on_visit: config.relist_on_visit,
            columns: config.columns,
            subtitle: format!(
                "Every photograph tells a story of {}'s journey to forever",
                content.bride_and_groom()
            ),
            images: Vec::new(),
            previews: HashMap::new(),
            viewer: Viewer::new(),
            listed: false,
            listing: 0,
            now: Instant::now(),
        }
    }

    /// Called every time the gallery page is shown.
    pub fn visit(&mut self) -> Task<Message> {
        if !self.needs_listing() {
            return Task::none();
        }

        let root = self.root.clone();
        let directory = self.directory.clone();
        let category = self.category.clone();

        Task::perform(
            async move { list_images(&root, &directory, &category).await },
            Message::ImagesListed,
        )
    }

    fn needs_listing(&self) -> bool {
        !self.listed || self.relist_on_visit
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let is_animating = self
            .previews
            .values()
            .any(|preview| preview.is_animating(self.now))
            || self.viewer.is_animating(self.now);

        let keyboard = event::listen_with(|event, _status, _window| match event {
            IcedEvent::Keyboard(keyboard_event) => Some(Message::KeyPressed(keyboard_event)),
            _ => None,
        });

        if is_animating {
            Subscription::batch([window::frames().map(Message::Animate), keyboard])
        } else {
            keyboard
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        // Animations started below are measured from here until frames arrive.
        if !matches!(message, Message::Animate(_)) {
            self.now = Instant::now();
        }

        match message {
            Message::ImagesListed(references) => {
                self.listed = true;

                let unchanged = self.images.len() == references.len()
                    && self
                        .images
                        .iter()
                        .zip(&references)
                        .all(|(image, reference)| image.reference() == reference);

                if unchanged {
                    debug!(count = references.len(), "Gallery listing unchanged");
                    return Task::none();
                }

                info!(count = references.len(), "Gallery listing changed");
                self.images = ImageData::from_references(&self.root, references);
                self.previews.clear();
                self.viewer.close();
                self.listing += 1;
                Task::none()
            }
            Message::ImagePoppedIn(id) => {
                let Some(image) = self.image(id).cloned() else {
                    return Task::none();
                };

                let _ = self.previews.insert(id, Preview::Loading);
                let listing = self.listing;

                Task::perform(
                    image.load(Size::Thumbnail {
                        width: Preview::WIDTH,
                        height: Preview::HEIGHT,
                    }),
                    move |result| Message::ThumbnailDownloaded(listing, id, result),
                )
            }
            Message::ImageDownloaded(id, Ok(rgba)) => {
                if !self.viewer.show(id, rgba) {
                    debug!(?id, "Dropping pixels for a photo no longer shown");
                }
                Task::none()
            }
            Message::ThumbnailDownloaded(listing, id, Ok(rgba)) => {
                if listing == self.listing {
                    let _ = self.previews.insert(id, Preview::ready(rgba));
                }
                Task::none()
            }
            Message::ThumbnailHovered(id, is_hovered) => {
                if let Some(preview) = self.previews.get_mut(&id) {
                    preview.toggle_zoom(is_hovered);
                }
                Task::none()
            }
            Message::Open(id) => self.open(id),
            Message::Close => {
                self.viewer.close();
                Task::none()
            }
            Message::Animate(now) => {
                self.now = now;
                Task::none()
            }
            Message::KeyPressed(Event::KeyPressed { key, .. }) if self.viewer.is_open(self.now) => {
                match key {
                    Key::Named(Named::ArrowLeft) => self.step(false),
                    Key::Named(Named::ArrowRight) => self.step(true),
                    Key::Named(Named::Escape) => {
                        self.viewer.close();
                        Task::none()
                    }
                    _ => Task::none(),
                }
            }
            Message::KeyPressed(_) => Task::none(),
            Message::ImageDownloaded(id, Err(error))
            | Message::ThumbnailDownloaded(_, id, Err(error)) => {
                warn!(?id, %error, "Failed to load image");
                Task::none()
            }
        }
    }

    fn image(&self, id: Id) -> Option<&ImageData> {
        self.images.get(id.index()).filter(|image| image.id == id)
    }

    fn open(&mut self, id: Id) -> Task<Message> {
        let Some(image) = self.image(id).cloned() else {
            return Task::none();
        };

        self.viewer.open(id);
        Task::perform(image.load(Size::Original), move |result| {
            Message::ImageDownloaded(id, result)
        })
    }

    fn step(&mut self, forward: bool) -> Task<Message> {
        let Some(current) = self.viewer.current() else {
            return Task::none();
        };

        let index = if forward {
            current.index().checked_add(1)
        } else {
            current.index().checked_sub(1)
        };

        match index.and_then(|index| self.images.get(index)) {
            Some(image) => {
                debug!(path = image.reference().path(), "Viewing neighbour");
                let id = image.id;
                self.open(id)
            }
            None => Task::none(),
        }
    }

    fn caption(&self) -> String {
        self.viewer
            .current()
            .and_then(|id| self.image(id))
            .map(|image| {
                format!(
                    "{} / {}  {}",
                    image.id.index() + 1,
                    self.images.len(),
                    image.reference().file_name()
                )
            })
            .unwrap_or_default()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let header = column![
            text("Our Love Story Gallery").size(40).color(WINE),
            text(&self.subtitle).size(14).color(WINE),
        ]
        .spacing(8)
        .align_x(Center);

        let body: Element<'_, Message> = if self.images.is_empty() {
            let hint = if self.listed {
                format!(
                    "No images found. Add files to {}.",
                    self.root.join(&self.directory).display()
                )
            } else {
                "Loading photos...".to_string()
            };

            text(hint).size(14).color(WINE).into()
        } else {
            let aspect_ratios: Vec<f32> = self
                .images
                .iter()
                .map(|image| {
                    self.previews
                        .get(&image.id)
                        .map_or(1.0, Preview::aspect_ratio)
                })
                .collect();

            row(masonry::distribute(&aspect_ratios, self.columns)
                .into_iter()
                .map(|indices| {
                    column(
                        indices
                            .into_iter()
                            .filter_map(|index| self.images.get(index))
                            .map(|image| card(image, self.previews.get(&image.id), self.now)),
                    )
                    .spacing(SPACING)
                    .into()
                }))
            .spacing(SPACING)
            .into()
        };

        let content = scrollable(
            center_x(column![header, body].spacing(24).align_x(Center)).padding(SPACING),
        )
        .spacing(4);

        let viewer = self.viewer.view(self.caption(), self.now);

        stack![content, viewer].into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn gallery(relist_on_visit: bool) -> Gallery {
        let config = GalleryConfig {
            relist_on_visit,
            ..GalleryConfig::default()
        };
        Gallery::new(PathBuf::from("public"), &config, &SiteContent::default())
    }

    fn references(names: &[&str]) -> Vec<ImageReference> {
        names
            .iter()
            .map(|name| ImageReference::new(format!("/gallery/{name}"), Category::new("gallery")))
            .collect()
    }

    fn pixel() -> Rgba {
        Rgba {
            width: 1,
            height: 1,
            pixels: Bytes::from_static(&[0, 0, 0, 255]),
        }
    }

    fn id_at(gallery: &Gallery, index: usize) -> Id {
        gallery.images[index].id
    }

    #[test]
    fn test_subtitle_names_bride_first() {
        let gallery = gallery(false);

        assert_eq!(
            gallery.subtitle,
            "Every photograph tells a story of Rizchelle & Denmark's journey to forever"
        );
    }

    #[test]
    fn test_listing_once_without_relist() {
        let mut gallery = gallery(false);
        assert!(gallery.needs_listing());

        let _ = gallery.update(Message::ImagesListed(Vec::new()));

        assert!(!gallery.needs_listing());
    }

    #[test]
    fn test_relist_on_visit_always_lists() {
        let mut gallery = gallery(true);

        let _ = gallery.update(Message::ImagesListed(Vec::new()));

        assert!(gallery.needs_listing());
    }

    #[test]
    fn test_unchanged_listing_keeps_thumbnails() {
        let mut gallery = gallery(true);
        let _ = gallery.update(Message::ImagesListed(references(&["a (1).jpg", "b (2).jpg"])));
        let first = id_at(&gallery, 0);
        let _ = gallery.update(Message::ThumbnailDownloaded(gallery.listing, first, Ok(pixel())));

        let _ = gallery.update(Message::ImagesListed(references(&["a (1).jpg", "b (2).jpg"])));

        assert!(gallery.previews.contains_key(&first));
    }

    #[test]
    fn test_changed_listing_drops_stale_thumbnails() {
        let mut gallery = gallery(true);
        let _ = gallery.update(Message::ImagesListed(references(&["a (1).jpg"])));
        let first = id_at(&gallery, 0);
        let stale = gallery.listing;

        let _ = gallery.update(Message::ImagesListed(references(&["a (1).jpg", "c (3).jpg"])));
        let _ = gallery.update(Message::ThumbnailDownloaded(stale, first, Ok(pixel())));

        assert_eq!(gallery.images.len(), 2);
        assert!(gallery.previews.is_empty());
    }

    #[test]
    fn test_step_stays_within_listing() {
        let mut gallery = gallery(true);
        let _ = gallery.update(Message::ImagesListed(references(&["a (1).jpg", "b (2).jpg"])));
        let first = id_at(&gallery, 0);
        let second = id_at(&gallery, 1);

        let _ = gallery.update(Message::Open(second));
        let _ = gallery.step(true);
        assert_eq!(gallery.viewer.current(), Some(second));

        let _ = gallery.step(false);
        assert_eq!(gallery.viewer.current(), Some(first));

        let _ = gallery.step(false);
        assert_eq!(gallery.viewer.current(), Some(first));
        assert_eq!(gallery.caption(), "1 / 2  a (1).jpg");
    }
}
