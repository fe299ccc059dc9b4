// Input state shared by every effect.
//
// Nothing here touches the DOM: the web layer converts raw event values
// into these types and hands them to the updater. Keeping the pure types
// separate lets host tests drive the formulas directly.

use glam::Vec2;

/// Largest normalized pointer offset from the viewport center.
pub const POINTER_LIMIT: f32 = 0.5;

#[inline]
fn finite_or(v: f32, fallback: f32) -> f32 {
    if v.is_finite() {
        v
    } else {
        fallback
    }
}

/// Pointer offset from the viewport center, each axis in [-0.5, 0.5].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    offset: Vec2,
}

impl PointerState {
    pub const CENTER: PointerState = PointerState { offset: Vec2::ZERO };

    /// Builds a state from already-normalized offsets, clamping each axis.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            offset: Vec2::new(
                finite_or(x, 0.0).clamp(-POINTER_LIMIT, POINTER_LIMIT),
                finite_or(y, 0.0).clamp(-POINTER_LIMIT, POINTER_LIMIT),
            ),
        }
    }

    /// Normalizes a client-space pointer position by the current viewport.
    ///
    /// A collapsed viewport (zero or negative extent) yields the centered
    /// state on that axis instead of dividing by zero.
    pub fn from_client(client: Vec2, viewport: Vec2) -> Self {
        let x = if viewport.x > 0.0 {
            client.x / viewport.x - POINTER_LIMIT
        } else {
            0.0
        };
        let y = if viewport.y > 0.0 {
            client.y / viewport.y - POINTER_LIMIT
        } else {
            0.0
        };
        Self::new(x, y)
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.offset.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.offset.y
    }

    /// Euclidean distance from the viewport center in normalized units.
    #[inline]
    pub fn distance(&self) -> f32 {
        self.offset.length()
    }
}

/// Pixels scrolled from the top of the page. Never negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct ScrollOffset(f32);

impl ScrollOffset {
    pub const TOP: ScrollOffset = ScrollOffset(0.0);

    /// Overscroll bounce can report negative offsets; those clamp to the top.
    pub fn new(px: f32) -> Self {
        Self(finite_or(px, 0.0).max(0.0))
    }

    #[inline]
    pub fn px(&self) -> f32 {
        self.0
    }
}

/// Client-space rectangle, mirroring `DOMRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    #[inline]
    pub fn half_size(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    #[inline]
    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Everything the updater reads, replaced as one value on each input event
/// so a frame never observes x from one event and y from another.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputSnapshot {
    pub pointer: PointerState,
    /// Last raw pointer position in client pixels; hover cards compare it
    /// against their live bounding boxes.
    pub client: Vec2,
    /// False until the first pointer move and again after the pointer leaves
    /// the page.
    pub inside: bool,
    pub scroll: ScrollOffset,
}

impl InputSnapshot {
    pub fn with_pointer(self, client: Vec2, viewport: Vec2) -> Self {
        Self {
            pointer: PointerState::from_client(client, viewport),
            client,
            inside: true,
            ..self
        }
    }

    /// Pointer left the page; its last position no longer leans anything.
    pub fn with_pointer_left(self) -> Self {
        Self {
            inside: false,
            ..self
        }
    }

    pub fn with_scroll(self, scroll: ScrollOffset) -> Self {
        Self { scroll, ..self }
    }
}
