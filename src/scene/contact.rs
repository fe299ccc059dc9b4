// Contact link dispatch and click ripple geometry.

use super::state::Rect;
use glam::Vec2;

/// What clicking a contact entry does, derived from its visible text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactAction {
    Mail(String),
    /// External profile opened in a new tab.
    Profile(String),
    Phone(String),
    None,
}

impl ContactAction {
    /// Classifies the trimmed text; the link target is its last word.
    pub fn classify(text: &str) -> Self {
        let text = text.trim();
        let Some(last) = text.split_whitespace().last() else {
            return ContactAction::None;
        };
        let last = last.to_string();
        if text.contains('@') {
            ContactAction::Mail(last)
        } else if text.contains("linkedin") {
            ContactAction::Profile(last)
        } else if text.chars().any(|c| c.is_ascii_digit()) {
            ContactAction::Phone(last)
        } else {
            ContactAction::None
        }
    }

    pub fn href(&self) -> Option<String> {
        match self {
            ContactAction::Mail(addr) => Some(format!("mailto:{}", addr)),
            ContactAction::Profile(url) => Some(format!("https://{}", url)),
            ContactAction::Phone(num) => Some(format!("tel:{}", num)),
            ContactAction::None => None,
        }
    }

    /// Profiles open in a new tab; everything else navigates in place.
    #[inline]
    pub fn opens_new_tab(&self) -> bool {
        matches!(self, ContactAction::Profile(_))
    }
}

/// Square ripple centered on the click, relative to the clicked element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub size: f32,
    pub left: f32,
    pub top: f32,
}

pub fn ripple_at(click: Vec2, rect: &Rect) -> Ripple {
    let size = rect.width.max(rect.height);
    let local = click - rect.origin() - Vec2::splat(size * 0.5);
    Ripple {
        size,
        left: local.x,
        top: local.y,
    }
}

pub const RIPPLE_KEYFRAMES: &str = "@keyframes ripple { to { transform: scale(4); opacity: 0; } }";
