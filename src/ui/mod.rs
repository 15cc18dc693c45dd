pub mod gallery;
pub mod guest_info;
pub mod invitation;
pub mod splash_screen;

pub use invitation::{Invitation, Message};

use iced::Color;

pub const BLUSH: Color = Color::from_rgb8(0xF3, 0xD1, 0xC8);
pub const SALMON: Color = Color::from_rgb8(0xFA, 0xB1, 0xAA);
pub const WINE: Color = Color::from_rgb8(0x8B, 0x30, 0x36);
pub const ROSE: Color = Color::from_rgb8(0xBC, 0x67, 0x7C);

pub fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}
