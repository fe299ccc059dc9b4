// Visual tuning for the transform formulas.
//
// Every coefficient here was picked by eye. They are grouped per input
// family and exposed as plain data so a page can override any of them
// before handing the tuning to the updater.

/// Pointer-driven parallax coefficients.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerTuning {
    pub background_shift: f32, // px per unit pointer offset
    pub background_tilt: f32,  // deg per unit pointer offset
    pub frame_tilt: f32,
    pub frame_depth: f32, // resting translateZ of the photo frame
    pub photo_depth: f32, // translateZ of the photo inside the frame
    pub photo_zoom: f32,  // scale gained per unit pointer distance
    pub photo_zoom_max: f32,
    pub cube_base: f32,
    pub cube_step: f32, // each later cube reacts a little harder
    pub sphere_base: f32,
    pub sphere_step: f32,
}

impl Default for PointerTuning {
    fn default() -> Self {
        Self {
            background_shift: 20.0,
            background_tilt: 5.0,
            frame_tilt: 15.0,
            frame_depth: 20.0,
            photo_depth: 50.0,
            photo_zoom: 0.1,
            photo_zoom_max: 1.15,
            cube_base: 15.0,
            cube_step: 5.0,
            sphere_base: 10.0,
            sphere_step: 3.0,
        }
    }
}

/// Hover-card tilt coefficients.
#[derive(Clone, Debug, PartialEq)]
pub struct CardTuning {
    /// Influence radius in half-card units; beyond it the card is untouched.
    pub radius: f32,
    pub tilt: f32,
    pub lift: f32,
    pub lift_falloff: f32,
    pub zoom: f32,
    pub perspective: f32,
}

impl Default for CardTuning {
    fn default() -> Self {
        Self {
            radius: 1.5,
            tilt: 10.0,
            lift: 20.0,
            lift_falloff: 10.0,
            zoom: 0.05,
            perspective: 1000.0,
        }
    }
}

/// A sinusoid `sin(s * freq + phase) * amp` of the scroll offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wave {
    pub freq: f32,
    pub amp: f32,
}

impl Wave {
    pub const fn new(freq: f32, amp: f32) -> Self {
        Self { freq, amp }
    }

    #[inline]
    pub fn sin(&self, s: f32, phase: f32) -> f32 {
        (s * self.freq + phase).sin() * self.amp
    }

    /// Cosine referenced to zero at `s = 0`.
    #[inline]
    pub fn cos_from_rest(&self, s: f32) -> f32 {
        ((s * self.freq).cos() - 1.0) * self.amp
    }

    #[inline]
    pub fn cos(&self, s: f32) -> f32 {
        (s * self.freq).cos() * self.amp
    }

    /// `|sin(s * freq + phase)| * amp + floor`.
    #[inline]
    pub fn pulse(&self, s: f32, phase: f32, floor: f32) -> f32 {
        (s * self.freq + phase).sin().abs() * self.amp + floor
    }
}

/// Scroll-driven coefficients.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollTuning {
    pub frame_drift: f32, // translateY px per scrolled px
    pub frame_sway: Wave,
    pub frame_yaw: Wave,
    pub frame_pitch: Wave,
    pub frame_roll: Wave,
    pub frame_depth: Wave,
    pub frame_pulse: Wave,

    pub photo_breathe: Wave,
    pub photo_spin: Wave,

    pub glow: Wave,
    pub glow_floor: f32,
    pub glow_scale: Wave,

    pub orbit_freq: f32,
    pub orbit_freq_step: f32,
    pub orbit_radius: f32,
    pub orbit_radius_step: f32,
    pub orbit_flatten: f32, // vertical squash of the orbit ellipse
    pub particle_depth: Wave,
    pub particle_spin: f32, // deg per scrolled px
    pub particle_spin_step: f32,
    pub particle_scale: Wave,
    pub particle_fade: Wave,
    pub particle_fade_floor: f32,

    pub float_drift: f32,
    pub float_drift_step: f32,

    pub node_sway: Wave,
    pub node_y_ratio: f32,
    pub link_fade: Wave,
    pub link_fade_floor: f32,

    /// Scroll offset past which the header switches to its raised style.
    pub header_threshold: f32,
}

impl Default for ScrollTuning {
    fn default() -> Self {
        Self {
            frame_drift: 0.08,
            frame_sway: Wave::new(0.006, 10.0),
            frame_yaw: Wave::new(0.012, 15.0),
            frame_pitch: Wave::new(0.01, 8.0),
            frame_roll: Wave::new(0.015, 5.0),
            frame_depth: Wave::new(0.01, 10.0),
            frame_pulse: Wave::new(0.008, 0.1),

            photo_breathe: Wave::new(0.007, 0.08),
            photo_spin: Wave::new(0.005, 3.0),

            glow: Wave::new(0.015, 0.9),
            glow_floor: 0.3,
            glow_scale: Wave::new(0.02, 0.15),

            orbit_freq: 0.025,
            orbit_freq_step: 0.015,
            orbit_radius: 25.0,
            orbit_radius_step: 10.0,
            orbit_flatten: 0.6,
            particle_depth: Wave::new(0.01, 20.0),
            particle_spin: 0.8,
            particle_spin_step: 0.3,
            particle_scale: Wave::new(0.012, 0.3),
            particle_fade: Wave::new(0.008, 0.6),
            particle_fade_floor: 0.4,

            float_drift: 0.3,
            float_drift_step: 0.1,

            node_sway: Wave::new(0.01, 10.0),
            node_y_ratio: 0.5,
            link_fade: Wave::new(0.005, 0.8),
            link_fade_floor: 0.2,

            header_threshold: 100.0,
        }
    }
}

/// Complete formula configuration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tuning {
    pub pointer: PointerTuning,
    pub card: CardTuning,
    pub scroll: ScrollTuning,
}
