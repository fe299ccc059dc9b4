// Scroll-driven formulas. Each one is a pure function of the scroll offset
// (and, for the photo frame and floating shapes, the pointer as well).

use super::parallax;
use super::state::{InputSnapshot, ScrollOffset};
use super::transform::{Presentation, Transform, TransformOp};
use super::tuning::{ScrollTuning, Tuning};

/// Photo frame blending scroll sway with the pointer tilt.
///
/// Every sinusoidal term is zero at the top of the page, so with a centered
/// pointer the frame rests at `translateZ(frame_depth)` and unit scale.
pub fn photo_frame_composite(input: &InputSnapshot, t: &Tuning) -> Transform {
    let s = input.scroll.px();
    let p = input.pointer;
    let st = &t.scroll;
    let tilt = t.pointer.frame_tilt;
    Transform::identity()
        .then(TransformOp::TranslateY(s * st.frame_drift))
        .then(TransformOp::TranslateX(st.frame_sway.sin(s, 0.0)))
        .then(TransformOp::RotateY(st.frame_yaw.sin(s, 0.0) + p.x() * tilt))
        .then(TransformOp::RotateX(
            st.frame_pitch.cos_from_rest(s) - p.y() * tilt,
        ))
        .then(TransformOp::RotateZ(st.frame_roll.sin(s, 0.0)))
        .then(TransformOp::TranslateZ(
            t.pointer.frame_depth + st.frame_depth.sin(s, 0.0),
        ))
        .then(TransformOp::Scale(1.0 + st.frame_pulse.sin(s, 0.0)))
}

/// Slow breathing and spin of the photo inside its frame.
pub fn photo_image_drift(scroll: ScrollOffset, t: &Tuning) -> Transform {
    let s = scroll.px();
    Transform::identity()
        .then(TransformOp::TranslateZ(t.pointer.photo_depth))
        .then(TransformOp::Scale(1.0 + t.scroll.photo_breathe.cos(s)))
        .then(TransformOp::Rotate(t.scroll.photo_spin.sin(s, 0.0)))
}

/// Raw glow intensity, in [glow_floor, glow_floor + amp] before clamping.
#[inline]
pub fn glow_intensity(scroll: ScrollOffset, t: &ScrollTuning) -> f32 {
    t.glow.pulse(scroll.px(), 0.0, t.glow_floor)
}

pub fn photo_glow(scroll: ScrollOffset, t: &ScrollTuning) -> Presentation {
    let s = scroll.px();
    Presentation::transform(
        Transform::identity().then(TransformOp::Scale(1.0 + t.glow_scale.sin(s, 0.0))),
    )
    .with_opacity(glow_intensity(scroll, t))
}

/// Opacity of code particle `index`; always within
/// [particle_fade_floor, particle_fade_floor + amp].
#[inline]
pub fn code_particle_opacity(scroll: ScrollOffset, index: usize, t: &ScrollTuning) -> f32 {
    t.particle_fade
        .pulse(scroll.px(), index as f32, t.particle_fade_floor)
        .clamp(0.0, 1.0)
}

/// Code particle `index` orbiting on a flattened ellipse; later particles
/// orbit wider and faster.
pub fn code_particle(scroll: ScrollOffset, index: usize, t: &ScrollTuning) -> Presentation {
    let s = scroll.px();
    let i = index as f32;
    let angle = s * (t.orbit_freq + i * t.orbit_freq_step);
    let radius = t.orbit_radius + i * t.orbit_radius_step;
    let transform = Transform::identity()
        .then(TransformOp::TranslateY(angle.sin() * radius * t.orbit_flatten))
        .then(TransformOp::TranslateX(angle.cos() * radius))
        .then(TransformOp::TranslateZ(t.particle_depth.sin(s, i)))
        .then(TransformOp::Rotate(s * (t.particle_spin + i * t.particle_spin_step)))
        .then(TransformOp::Scale(1.0 + t.particle_scale.sin(s, i)));
    Presentation::transform(transform).with_opacity(code_particle_opacity(scroll, index, t))
}

/// Vertical drift appended to floating shape `ordinal`, where cubes are
/// counted first and spheres continue after them.
#[inline]
pub fn float_drift(scroll: ScrollOffset, ordinal: usize, t: &ScrollTuning) -> TransformOp {
    TransformOp::TranslateY(scroll.px() * (t.float_drift + ordinal as f32 * t.float_drift_step))
}

pub fn floating_cube(input: &InputSnapshot, index: usize, t: &Tuning) -> Transform {
    parallax::floating_cube(input.pointer, index, &t.pointer)
        .then(float_drift(input.scroll, index, &t.scroll))
}

pub fn floating_sphere(
    input: &InputSnapshot,
    index: usize,
    cube_count: usize,
    t: &Tuning,
) -> Transform {
    parallax::floating_sphere(input.pointer, index, &t.pointer)
        .then(float_drift(input.scroll, cube_count + index, &t.scroll))
}

pub fn neural_node(scroll: ScrollOffset, index: usize, t: &ScrollTuning) -> Transform {
    let sway = t.node_sway.sin(scroll.px(), index as f32);
    Transform::identity().then(TransformOp::Translate(sway, sway * t.node_y_ratio))
}

#[inline]
pub fn neural_link_opacity(scroll: ScrollOffset, index: usize, t: &ScrollTuning) -> f32 {
    t.link_fade
        .pulse(scroll.px(), index as f32, t.link_fade_floor)
        .clamp(0.0, 1.0)
}

pub const HEADER_BACKDROP: &str = "blur(20px)";

/// Header look for a given scroll position.
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderStyle {
    pub background: &'static str,
    pub backdrop_filter: &'static str,
    pub transform: Transform,
}

pub fn header_style(scroll: ScrollOffset, t: &ScrollTuning) -> HeaderStyle {
    if scroll.px() > t.header_threshold {
        HeaderStyle {
            background: "rgba(10, 10, 10, 0.95)",
            backdrop_filter: HEADER_BACKDROP,
            transform: Transform::identity().then(TransformOp::TranslateZ(10.0)),
        }
    } else {
        HeaderStyle {
            background: "rgba(10, 10, 10, 0.8)",
            backdrop_filter: HEADER_BACKDROP,
            transform: Transform::identity().then(TransformOp::TranslateZ(0.0)),
        }
    }
}
