// Pointer/scroll-driven transform updater.
//
// The updater owns the latest [`InputSnapshot`] and the [`Tuning`], and on
// each frame walks a static rule table (category → formula) for the
// triggering input family. It never owns the targets: a [`TargetSink`]
// reports how many targets each category currently has and receives the
// computed presentation for each of them.

use super::parallax;
use super::scroll;
use super::state::{InputSnapshot, Rect, ScrollOffset};
use super::transform::{Presentation, Transform};
use super::tuning::Tuning;
use glam::Vec2;

/// Decorative target groups, in the order their rules run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Background,
    PhotoFrame,
    Photo,
    PhotoGlow,
    Cube,
    Sphere,
    Card,
    CodeParticle,
    NeuralNode,
    NeuralLink,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Background,
        Category::PhotoFrame,
        Category::Photo,
        Category::PhotoGlow,
        Category::Cube,
        Category::Sphere,
        Category::Card,
        Category::CodeParticle,
        Category::NeuralNode,
        Category::NeuralLink,
    ];

    /// Selector used to discover the category's elements.
    pub fn selector(self) -> &'static str {
        match self {
            Category::Background => ".hero-bg-3d",
            Category::PhotoFrame => ".photo-frame",
            Category::Photo => ".profile-photo-3d",
            Category::PhotoGlow => ".photo-glow",
            Category::Cube => ".floating-cube",
            Category::Sphere => ".floating-sphere",
            Category::Card => ".skill-category-3d, .project-card-3d, .hologram-card",
            Category::CodeParticle => ".code-particle",
            Category::NeuralNode => ".neural-node",
            Category::NeuralLink => ".neural-connection",
        }
    }

    /// Singletons only ever use their first match.
    pub fn is_singleton(self) -> bool {
        matches!(
            self,
            Category::Background | Category::PhotoFrame | Category::Photo | Category::PhotoGlow
        )
    }
}

/// Which input family caused a recomputation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    Pointer,
    Scroll,
}

/// Where computed presentations go.
pub trait TargetSink {
    /// Number of targets currently registered for `category`.
    fn count(&self, category: Category) -> usize;

    fn apply(&mut self, category: Category, index: usize, out: &Presentation);

    /// Current bounding box of hover card `index`, read fresh per frame.
    fn card_rect(&self, index: usize) -> Option<Rect>;
}

/// Inputs a rule may read besides the target index.
pub struct FrameCtx<'a> {
    pub input: InputSnapshot,
    pub tuning: &'a Tuning,
    /// Floating spheres continue the scroll-drift ordinal after the cubes.
    pub cube_count: usize,
}

struct Rule {
    category: Category,
    trigger: Trigger,
    eval: fn(&FrameCtx<'_>, usize) -> Presentation,
}

const RULES: &[Rule] = &[
    // pointer family
    Rule {
        category: Category::Background,
        trigger: Trigger::Pointer,
        eval: |cx, _| {
            Presentation::transform(parallax::background_layer(
                cx.input.pointer,
                &cx.tuning.pointer,
            ))
        },
    },
    Rule {
        category: Category::PhotoFrame,
        trigger: Trigger::Pointer,
        eval: |cx, _| {
            Presentation::transform(parallax::photo_frame_tilt(
                cx.input.pointer,
                &cx.tuning.pointer,
            ))
        },
    },
    Rule {
        category: Category::Photo,
        trigger: Trigger::Pointer,
        eval: |cx, _| {
            Presentation::transform(parallax::photo_image(cx.input.pointer, &cx.tuning.pointer))
        },
    },
    Rule {
        category: Category::Cube,
        trigger: Trigger::Pointer,
        eval: |cx, i| Presentation::transform(scroll::floating_cube(&cx.input, i, cx.tuning)),
    },
    Rule {
        category: Category::Sphere,
        trigger: Trigger::Pointer,
        eval: |cx, i| {
            Presentation::transform(scroll::floating_sphere(
                &cx.input,
                i,
                cx.cube_count,
                cx.tuning,
            ))
        },
    },
    // scroll family
    Rule {
        category: Category::PhotoFrame,
        trigger: Trigger::Scroll,
        eval: |cx, _| Presentation::transform(scroll::photo_frame_composite(&cx.input, cx.tuning)),
    },
    Rule {
        category: Category::Photo,
        trigger: Trigger::Scroll,
        eval: |cx, _| Presentation::transform(scroll::photo_image_drift(cx.input.scroll, cx.tuning)),
    },
    Rule {
        category: Category::PhotoGlow,
        trigger: Trigger::Scroll,
        eval: |cx, _| scroll::photo_glow(cx.input.scroll, &cx.tuning.scroll),
    },
    Rule {
        category: Category::CodeParticle,
        trigger: Trigger::Scroll,
        eval: |cx, i| scroll::code_particle(cx.input.scroll, i, &cx.tuning.scroll),
    },
    Rule {
        category: Category::Cube,
        trigger: Trigger::Scroll,
        eval: |cx, i| Presentation::transform(scroll::floating_cube(&cx.input, i, cx.tuning)),
    },
    Rule {
        category: Category::Sphere,
        trigger: Trigger::Scroll,
        eval: |cx, i| {
            Presentation::transform(scroll::floating_sphere(
                &cx.input,
                i,
                cx.cube_count,
                cx.tuning,
            ))
        },
    },
    Rule {
        category: Category::NeuralNode,
        trigger: Trigger::Scroll,
        eval: |cx, i| {
            Presentation::transform(scroll::neural_node(cx.input.scroll, i, &cx.tuning.scroll))
        },
    },
    Rule {
        category: Category::NeuralLink,
        trigger: Trigger::Scroll,
        eval: |cx, i| {
            Presentation::opacity(scroll::neural_link_opacity(
                cx.input.scroll,
                i,
                &cx.tuning.scroll,
            ))
        },
    },
];

/// Categories the given trigger recomputes, hover cards excluded.
pub fn categories_for(trigger: Trigger) -> impl Iterator<Item = Category> {
    RULES
        .iter()
        .filter(move |r| r.trigger == trigger)
        .map(|r| r.category)
}

#[derive(Clone, Debug, Default)]
pub struct TransformUpdater {
    input: InputSnapshot,
    tuning: Tuning,
}

impl TransformUpdater {
    pub fn new(tuning: Tuning) -> Self {
        Self {
            input: InputSnapshot::default(),
            tuning,
        }
    }

    #[inline]
    pub fn input(&self) -> InputSnapshot {
        self.input
    }

    #[inline]
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Records a pointer move in client pixels against the current viewport.
    pub fn set_pointer(&mut self, client: Vec2, viewport: Vec2) {
        self.input = self.input.with_pointer(client, viewport);
    }

    pub fn pointer_left(&mut self) {
        self.input = self.input.with_pointer_left();
    }

    pub fn set_scroll(&mut self, px: f32) {
        self.input = self.input.with_scroll(ScrollOffset::new(px));
    }

    /// Runs every rule of `trigger` against the current snapshot.
    pub fn run<S: TargetSink + ?Sized>(&self, trigger: Trigger, sink: &mut S) {
        let cx = FrameCtx {
            input: self.input,
            tuning: &self.tuning,
            cube_count: sink.count(Category::Cube),
        };
        for rule in RULES.iter().filter(|r| r.trigger == trigger) {
            let n = sink.count(rule.category);
            for i in 0..n {
                let out = (rule.eval)(&cx, i);
                sink.apply(rule.category, i, &out);
            }
        }
    }

    /// Pointer frame: pointer rules plus hover cards.
    pub fn on_pointer_frame<S: TargetSink + ?Sized>(&self, sink: &mut S) {
        self.run(Trigger::Pointer, sink);
        self.update_cards(sink);
    }

    pub fn on_scroll_frame<S: TargetSink + ?Sized>(&self, sink: &mut S) {
        self.run(Trigger::Scroll, sink);
    }

    /// Leans every hover card against its current bounding box. A card whose
    /// box cannot be read is reset, and all of them are while the pointer is
    /// outside the page.
    pub fn update_cards<S: TargetSink + ?Sized>(&self, sink: &mut S) {
        if !self.input.inside {
            self.reset_cards(sink);
            return;
        }
        for i in 0..sink.count(Category::Card) {
            let transform = match sink.card_rect(i) {
                Some(rect) => parallax::hover_card(self.input.client, &rect, &self.tuning.card),
                None => Transform::identity(),
            };
            sink.apply(Category::Card, i, &Presentation::transform(transform));
        }
    }

    /// Pointer left the document: every hover card goes back to identity.
    pub fn reset_cards<S: TargetSink + ?Sized>(&self, sink: &mut S) {
        let identity = Presentation::transform(Transform::identity());
        for i in 0..sink.count(Category::Card) {
            sink.apply(Category::Card, i, &identity);
        }
    }
}
