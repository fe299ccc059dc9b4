// Pointer-driven parallax formulas.

use super::state::{PointerState, Rect};
use super::transform::{Transform, TransformOp};
use super::tuning::{CardTuning, PointerTuning};
use glam::Vec2;

/// Background layer: shifts with the pointer and leans towards it.
pub fn background_layer(p: PointerState, t: &PointerTuning) -> Transform {
    Transform::identity()
        .then(TransformOp::Translate3d(
            p.x() * t.background_shift,
            p.y() * t.background_shift,
            0.0,
        ))
        .then(TransformOp::RotateY(p.x() * t.background_tilt))
        .then(TransformOp::RotateX(-p.y() * t.background_tilt))
}

/// Photo frame tilt when only the pointer is considered.
pub fn photo_frame_tilt(p: PointerState, t: &PointerTuning) -> Transform {
    Transform::identity()
        .then(TransformOp::TranslateY(0.0))
        .then(TransformOp::RotateX(-p.y() * t.frame_tilt))
        .then(TransformOp::RotateY(p.x() * t.frame_tilt))
        .then(TransformOp::TranslateZ(t.frame_depth))
}

/// Photo zoom grows with pointer distance from center, capped at
/// `photo_zoom_max`.
#[inline]
pub fn photo_zoom(p: PointerState, t: &PointerTuning) -> f32 {
    (1.0 + p.distance() * t.photo_zoom).clamp(1.0, t.photo_zoom_max)
}

pub fn photo_image(p: PointerState, t: &PointerTuning) -> Transform {
    Transform::identity()
        .then(TransformOp::TranslateZ(t.photo_depth))
        .then(TransformOp::Scale(photo_zoom(p, t)))
}

#[inline]
pub fn cube_intensity(index: usize, t: &PointerTuning) -> f32 {
    t.cube_base + index as f32 * t.cube_step
}

#[inline]
pub fn sphere_intensity(index: usize, t: &PointerTuning) -> f32 {
    t.sphere_base + index as f32 * t.sphere_step
}

/// Floating cube: translates and spins by the same per-index intensity.
pub fn floating_cube(p: PointerState, index: usize, t: &PointerTuning) -> Transform {
    let k = cube_intensity(index, t);
    Transform::identity()
        .then(TransformOp::Translate3d(p.x() * k, p.y() * k, 0.0))
        .then(TransformOp::RotateX(p.y() * k))
        .then(TransformOp::RotateY(p.x() * k))
}

/// Floating sphere: translate only.
pub fn floating_sphere(p: PointerState, index: usize, t: &PointerTuning) -> Transform {
    let k = sphere_intensity(index, t);
    Transform::identity().then(TransformOp::Translate3d(p.x() * k, p.y() * k, 0.0))
}

/// Pointer offset from the card center in half-card units.
///
/// Returns `None` for a card without area (hidden or collapsed), which has
/// no meaningful center to lean towards.
pub fn card_delta(client: Vec2, rect: &Rect) -> Option<Vec2> {
    if !rect.has_area() {
        return None;
    }
    Some((client - rect.center()) / rect.half_size())
}

/// Hover card lean. Identity once the pointer is outside the influence
/// radius, so the stylesheet's own transform comes back.
pub fn hover_card(client: Vec2, rect: &Rect, t: &CardTuning) -> Transform {
    let Some(delta) = card_delta(client, rect) else {
        return Transform::identity();
    };
    let distance = delta.length();
    if distance >= t.radius {
        return Transform::identity();
    }
    Transform::identity()
        .then(TransformOp::Perspective(t.perspective))
        .then(TransformOp::RotateX(-delta.y * t.tilt))
        .then(TransformOp::RotateY(delta.x * t.tilt))
        .then(TransformOp::TranslateZ(
            (t.lift - distance * t.lift_falloff).max(0.0),
        ))
        .then(TransformOp::Scale(1.0 + (1.0 - distance) * t.zoom))
}
