// Host-side tests for the scroll-driven formulas.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod scene {
    pub mod state {
        include!("../src/scene/state.rs");
    }
    pub mod transform {
        include!("../src/scene/transform.rs");
    }
    pub mod tuning {
        include!("../src/scene/tuning.rs");
    }
    pub mod parallax {
        include!("../src/scene/parallax.rs");
    }
    pub mod scroll {
        include!("../src/scene/scroll.rs");
    }
}

use glam::Vec2;
use scene::scroll::*;
use scene::state::{InputSnapshot, ScrollOffset};
use scene::transform::{Transform, TransformOp};
use scene::tuning::Tuning;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn scrolled(px: f32) -> InputSnapshot {
    InputSnapshot::default().with_scroll(ScrollOffset::new(px))
}

#[test]
fn scroll_offset_clamps_overscroll() {
    assert_eq!(ScrollOffset::new(-35.0), ScrollOffset::TOP);
    assert_eq!(ScrollOffset::new(f32::NAN), ScrollOffset::TOP);
    assert_eq!(ScrollOffset::new(420.0).px(), 420.0);
}

#[test]
fn photo_frame_rests_at_top_with_centered_pointer() {
    let t = Tuning::default();
    let out = photo_frame_composite(&InputSnapshot::default(), &t);
    let expected = Transform::identity()
        .then(TransformOp::TranslateY(0.0))
        .then(TransformOp::TranslateX(0.0))
        .then(TransformOp::RotateY(0.0))
        .then(TransformOp::RotateX(0.0))
        .then(TransformOp::RotateZ(0.0))
        .then(TransformOp::TranslateZ(20.0))
        .then(TransformOp::Scale(1.0));
    assert_eq!(out, expected);
}

#[test]
fn photo_frame_blends_pointer_into_rotation() {
    let t = Tuning::default();
    let input = InputSnapshot::default()
        .with_pointer(Vec2::new(1000.0, 0.0), Vec2::new(1000.0, 1000.0)) // (0.5, -0.5)
        .with_scroll(ScrollOffset::TOP);
    let out = photo_frame_composite(&input, &t);
    let ry = out.ops().iter().find_map(|op| match op {
        TransformOp::RotateY(a) => Some(*a),
        _ => None,
    });
    let rx = out.ops().iter().find_map(|op| match op {
        TransformOp::RotateX(a) => Some(*a),
        _ => None,
    });
    assert!(approx(ry.unwrap(), 7.5));
    assert!(approx(rx.unwrap(), 7.5));
}

#[test]
fn photo_frame_follows_scroll() {
    let t = Tuning::default();
    let s = 250.0f32;
    let out = photo_frame_composite(&scrolled(s), &t);
    match out.ops() {
        [TransformOp::TranslateY(ty), TransformOp::TranslateX(tx), TransformOp::RotateY(ry), TransformOp::RotateX(rx), TransformOp::RotateZ(rz), TransformOp::TranslateZ(tz), TransformOp::Scale(sc)] =>
        {
            assert!(approx(*ty, s * 0.08));
            assert!(approx(*tx, (s * 0.006).sin() * 10.0));
            assert!(approx(*ry, (s * 0.012).sin() * 15.0));
            assert!(approx(*rx, ((s * 0.01).cos() - 1.0) * 8.0));
            assert!(approx(*rz, (s * 0.015).sin() * 5.0));
            assert!(approx(*tz, 20.0 + (s * 0.01).sin() * 10.0));
            assert!(approx(*sc, 1.0 + (s * 0.008).sin() * 0.1));
        }
        other => panic!("unexpected ops {:?}", other),
    }
}

#[test]
fn code_particle_opacity_stays_in_range() {
    let t = Tuning::default();
    for index in 0..12 {
        let mut s = 0.0f32;
        while s < 20_000.0 {
            let o = code_particle_opacity(ScrollOffset::new(s), index, &t.scroll);
            assert!((0.4..=1.0).contains(&o), "opacity {} at s={} i={}", o, s, index);
            s += 13.7;
        }
    }
}

#[test]
fn code_particle_orbits_wider_for_later_indices() {
    let t = Tuning::default();
    // At s=0 the orbit angle is zero, so translateX equals the radius.
    for (index, radius) in [(0usize, 25.0f32), (1, 35.0), (4, 65.0)] {
        let out = code_particle(ScrollOffset::TOP, index, &t.scroll);
        let transform = out.transform.expect("particles always carry a transform");
        match transform.ops()[1] {
            TransformOp::TranslateX(x) => assert!(approx(x, radius)),
            other => panic!("unexpected op {:?}", other),
        }
        assert!(out.opacity.is_some());
    }
}

#[test]
fn code_particle_orbit_is_flattened_ellipse() {
    let t = Tuning::default();
    let index = 2usize;
    let s = 123.0f32;
    let out = code_particle(ScrollOffset::new(s), index, &t.scroll);
    let ops = out.transform.unwrap();
    let (ty, tx) = match (ops.ops()[0], ops.ops()[1]) {
        (TransformOp::TranslateY(y), TransformOp::TranslateX(x)) => (y, x),
        other => panic!("unexpected ops {:?}", other),
    };
    let r = 25.0 + 10.0 * index as f32;
    // (x / r)^2 + (y / 0.6r)^2 == 1
    let e = (tx / r).powi(2) + (ty / (0.6 * r)).powi(2);
    assert!(approx(e, 1.0), "ellipse residual {}", e);
}

#[test]
fn photo_glow_opacity_is_clamped_to_css_range() {
    let t = Tuning::default();
    let mut s = 0.0f32;
    while s < 2_000.0 {
        let raw = glow_intensity(ScrollOffset::new(s), &t.scroll);
        assert!((0.3..=1.2 + 1e-6).contains(&raw));
        let out = photo_glow(ScrollOffset::new(s), &t.scroll);
        let o = out.opacity.unwrap();
        assert!((0.3..=1.0).contains(&o));
        s += 7.0;
    }
    let top = photo_glow(ScrollOffset::TOP, &t.scroll);
    assert_eq!(top.opacity, Some(0.3));
    assert_eq!(top.transform.unwrap().scale_factor(), Some(1.0));
}

#[test]
fn neural_nodes_sway_with_half_vertical_amplitude() {
    let t = Tuning::default();
    let s = ScrollOffset::new(77.0);
    for index in 0..5 {
        let out = neural_node(s, index, &t.scroll);
        match out.ops() {
            [TransformOp::Translate(x, y)] => {
                assert!(approx(*x, (77.0f32 * 0.01 + index as f32).sin() * 10.0));
                assert!(approx(*y, *x * 0.5));
            }
            other => panic!("unexpected ops {:?}", other),
        }
    }
}

#[test]
fn neural_link_opacity_stays_in_range() {
    let t = Tuning::default();
    for index in 0..8 {
        for step in 0..500 {
            let o = neural_link_opacity(ScrollOffset::new(step as f32 * 11.0), index, &t.scroll);
            assert!((0.2..=1.0).contains(&o));
        }
    }
}

#[test]
fn floating_shapes_drift_down_with_scroll() {
    let t = Tuning::default();
    let input = scrolled(100.0);

    let cube = floating_cube(&input, 1, &t);
    match cube.ops().last() {
        Some(TransformOp::TranslateY(y)) => assert!(approx(*y, 100.0 * 0.4)),
        other => panic!("unexpected op {:?}", other),
    }

    // Spheres continue the ordinal after the cubes
    let sphere = floating_sphere(&input, 0, 3, &t);
    match sphere.ops().last() {
        Some(TransformOp::TranslateY(y)) => assert!(approx(*y, 100.0 * 0.6)),
        other => panic!("unexpected op {:?}", other),
    }
}

#[test]
fn floating_shapes_have_no_drift_at_top() {
    let t = Tuning::default();
    let input = InputSnapshot::default();
    let cube = floating_cube(&input, 2, &t);
    assert_eq!(cube.ops().last(), Some(&TransformOp::TranslateY(0.0)));
}

#[test]
fn header_switches_style_past_threshold() {
    let t = Tuning::default();
    let resting = header_style(ScrollOffset::new(100.0), &t.scroll);
    assert_eq!(resting.background, "rgba(10, 10, 10, 0.8)");
    assert_eq!(resting.transform.to_css(), "translateZ(0px)");

    let raised = header_style(ScrollOffset::new(100.5), &t.scroll);
    assert_eq!(raised.background, "rgba(10, 10, 10, 0.95)");
    assert_eq!(raised.transform.to_css(), "translateZ(10px)");
    assert_eq!(raised.backdrop_filter, resting.backdrop_filter);
}
