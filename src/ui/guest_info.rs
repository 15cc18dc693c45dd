use iced::widget::{Column, column, container, horizontal_space, image, row, scrollable, text};
use iced::{Border, Center, Color, Element, Fill};

use std::path::Path;

use super::invitation::Message;
use super::{WINE, faded};
use crate::content::SiteContent;

const SPONSORS_ATTIRE: &str = "Details/sponsors.png";
const GUEST_ATTIRE: &str = "Details/guestattire.png";

const PUNCTUALITY: &str = "Your punctuality means so much to us, and don't forget to have a \
                           light snack beforehand so you can enjoy the celebration comfortably!";
const RECEPTION: &str = "The seating will be formal, RSVP-style. That's why we're asking you to \
                         fill out this invitation form to secure your spot. Kindly do not bring \
                         plus ones unless explicitly stated in your invitation.";
const PARKING: &str =
    "Parking is available at the venue. Please arrive early to find a comfortable spot.";
const TRANSPORTATION: &str = "Private vehicles and local transport are welcome. Coordinate with \
                              friends or family and plan your route ahead of time.";
const TIPS: [&str; 3] = [
    "Plan your route ahead to avoid unexpected delays.",
    "Please avoid walking during the ceremony. Approach the coordinator or wait to be guided.",
    "Coordinate carpooling with friends or family when possible.",
];

/// Attire illustrations, present only when the asset root ships them.
#[derive(Debug, Clone, Default)]
pub struct AttireImages {
    sponsors: Option<image::Handle>,
    guests: Option<image::Handle>,
}

impl AttireImages {
    pub fn discover(root: &Path) -> Self {
        let handle = |relative: &str| {
            let path = root.join(relative);
            path.is_file().then(|| image::Handle::from_path(path))
        };

        Self {
            sponsors: handle(SPONSORS_ATTIRE),
            guests: handle(GUEST_ATTIRE),
        }
    }
}

pub fn view<'a>(content: &'a SiteContent, attire: &'a AttireImages) -> Element<'a, Message> {
    let header = column![
        text("IMPORTANT GUIDELINES").size(12).color(Color::WHITE),
        text("Guest Information").size(40).color(Color::WHITE),
        text("Everything you need to know to make your experience smooth and enjoyable")
            .size(14)
            .color(Color::WHITE),
    ]
    .spacing(8)
    .align_x(Center);

    let sections = column![
        attire_card(content, attire),
        card(
            "ARRIVAL TIME",
            column![
                paragraph(format!(
                    "Kindly arrive by {} so we can begin the wedding ceremony promptly at exactly {}.",
                    content.ceremony.guests_time, content.ceremony.time
                )),
                paragraph(PUNCTUALITY),
            ]
            .spacing(8),
        ),
        card("RECEPTION GUIDELINES", paragraph(RECEPTION)),
        card("PARKING & TRAVEL", travel()),
    ]
    .spacing(16);

    scrollable(
        container(column![header, sections].spacing(32).max_width(800))
            .center_x(Fill)
            .padding(24),
    )
    .into()
}

fn attire_card<'a>(content: &'a SiteContent, attire: &'a AttireImages) -> Element<'a, Message> {
    let dress_code = &content.dress_code;

    let sponsors = Column::with_children(
        dress_code
            .sponsors
            .iter()
            .map(|line| paragraph(format!("{}: {}", line.role, line.attire))),
    )
    .spacing(4);

    let body = column![
        text(&dress_code.note).size(14).color(WINE),
        paragraph(
            "Please dress within our wedding colors to help create a soft, elegant romantic celebration."
        ),
        subheading("Principal Sponsors Attire"),
        paragraph("Kindly align attire below."),
        illustration(attire.sponsors.as_ref()),
        sponsors,
        subheading("Wedding Guests"),
        illustration(attire.guests.as_ref()),
        text(&dress_code.guests).size(14).color(WINE),
        paragraph(&dress_code.palette),
    ]
    .spacing(8);

    card("ATTIRE & MOTIF", body)
}

fn travel<'a>() -> Element<'a, Message> {
    let tips = Column::with_children(
        TIPS.iter()
            .map(|tip| row![paragraph("•"), paragraph(*tip)].spacing(8).into()),
    )
    .spacing(4);

    column![
        subheading("Parking Available"),
        paragraph(PARKING),
        subheading("Transportation"),
        paragraph(TRANSPORTATION),
        subheading("Quick Tips"),
        tips,
    ]
    .spacing(8)
    .into()
}

fn card<'a>(title: &'a str, body: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    let body: Element<'a, Message> = body.into();

    container(column![text(title).size(14).color(WINE), body].spacing(12))
        .width(Fill)
        .padding(20)
        .style(|_theme| {
            container::Style::default()
                .background(faded(Color::WHITE, 0.95))
                .border(Border {
                    color: faded(WINE, 0.4),
                    width: 1.0,
                    radius: 16.0.into(),
                })
        })
        .into()
}

fn illustration<'a>(handle: Option<&image::Handle>) -> Element<'a, Message> {
    match handle {
        Some(handle) => image(handle.clone()).width(Fill).height(240).into(),
        None => horizontal_space().into(),
    }
}

fn subheading<'a>(label: &'a str) -> Element<'a, Message> {
    text(label).size(13).color(WINE).into()
}

fn paragraph<'a>(body: impl text::IntoFragment<'a>) -> Element<'a, Message> {
    text(body).size(13).color(faded(WINE, 0.9)).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discover_only_present_illustrations() {
        let root = tempfile::tempdir().expect("tempdir");
        std::fs::create_dir_all(root.path().join("Details")).expect("dir");
        std::fs::write(root.path().join(SPONSORS_ATTIRE), b"png").expect("write");

        let attire = AttireImages::discover(root.path());

        assert!(attire.sponsors.is_some());
        assert!(attire.guests.is_none());
    }
}
