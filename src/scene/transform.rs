use smallvec::SmallVec;
use std::fmt;

/// One CSS transform function. Lengths are pixels, angles are degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformOp {
    Perspective(f32),
    Translate(f32, f32),
    Translate3d(f32, f32, f32),
    TranslateX(f32),
    TranslateY(f32),
    TranslateZ(f32),
    RotateX(f32),
    RotateY(f32),
    RotateZ(f32),
    Rotate(f32),
    Scale(f32),
}

impl fmt::Display for TransformOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TransformOp::Perspective(d) => write!(f, "perspective({}px)", d),
            TransformOp::Translate(x, y) => write!(f, "translate({}px, {}px)", x, y),
            TransformOp::Translate3d(x, y, z) => {
                write!(f, "translate3d({}px, {}px, {}px)", x, y, z)
            }
            TransformOp::TranslateX(v) => write!(f, "translateX({}px)", v),
            TransformOp::TranslateY(v) => write!(f, "translateY({}px)", v),
            TransformOp::TranslateZ(v) => write!(f, "translateZ({}px)", v),
            TransformOp::RotateX(a) => write!(f, "rotateX({}deg)", a),
            TransformOp::RotateY(a) => write!(f, "rotateY({}deg)", a),
            TransformOp::RotateZ(a) => write!(f, "rotateZ({}deg)", a),
            TransformOp::Rotate(a) => write!(f, "rotate({}deg)", a),
            TransformOp::Scale(s) => write!(f, "scale({})", s),
        }
    }
}

/// Ordered list of transform functions applied to one element.
///
/// The empty list is the identity; it renders as an empty string, which
/// clears the element's inline transform and lets the stylesheet take over.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transform {
    ops: SmallVec<[TransformOp; 8]>,
}

impl Transform {
    #[inline]
    pub fn identity() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        self.ops.is_empty()
    }

    /// Builder-style append.
    #[inline]
    pub fn then(mut self, op: TransformOp) -> Self {
        self.ops.push(op);
        self
    }

    #[inline]
    pub fn ops(&self) -> &[TransformOp] {
        &self.ops
    }

    /// Factor of the last `scale()` op, if any.
    pub fn scale_factor(&self) -> Option<f32> {
        self.ops.iter().rev().find_map(|op| match op {
            TransformOp::Scale(s) => Some(*s),
            _ => None,
        })
    }

    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, op) in self.ops.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", op)?;
        }
        Ok(())
    }
}

/// The two presentation attributes an effect may write. `None` leaves the
/// attribute untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Presentation {
    pub transform: Option<Transform>,
    pub opacity: Option<f32>,
}

impl Presentation {
    pub fn transform(transform: Transform) -> Self {
        Self {
            transform: Some(transform),
            opacity: None,
        }
    }

    pub fn opacity(opacity: f32) -> Self {
        Self {
            transform: None,
            opacity: Some(opacity.clamp(0.0, 1.0)),
        }
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity.clamp(0.0, 1.0));
        self
    }
}
