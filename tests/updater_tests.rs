// Host-side tests for the rule-table updater, driven through a recording sink.

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
    pub mod updater {
        include!("../src/scene/updater.rs");
    }
}

use fnv::FnvHashMap;
use glam::Vec2;
use scene::state::Rect;
use scene::transform::{Presentation, TransformOp};
use scene::tuning::Tuning;
use scene::updater::*;

/// Stands in for the DOM registry: fixed counts, fixed card boxes, and a log
/// of every presentation written.
#[derive(Default)]
struct RecordingSink {
    counts: FnvHashMap<Category, usize>,
    cards: Vec<Option<Rect>>,
    writes: Vec<(Category, usize, Presentation)>,
}

impl RecordingSink {
    fn with(mut self, category: Category, n: usize) -> Self {
        self.counts.insert(category, n);
        self
    }

    fn with_cards(mut self, cards: Vec<Option<Rect>>) -> Self {
        self.counts.insert(Category::Card, cards.len());
        self.cards = cards;
        self
    }

    fn written(&self, category: Category) -> Vec<&Presentation> {
        self.writes
            .iter()
            .filter(|(c, _, _)| *c == category)
            .map(|(_, _, p)| p)
            .collect()
    }

    fn last(&self, category: Category, index: usize) -> Option<&Presentation> {
        self.writes
            .iter()
            .rev()
            .find(|(c, i, _)| *c == category && *i == index)
            .map(|(_, _, p)| p)
    }
}

impl TargetSink for RecordingSink {
    fn count(&self, category: Category) -> usize {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    fn apply(&mut self, category: Category, index: usize, out: &Presentation) {
        self.writes.push((category, index, out.clone()));
    }

    fn card_rect(&self, index: usize) -> Option<Rect> {
        self.cards.get(index).copied().flatten()
    }
}

fn full_page() -> RecordingSink {
    RecordingSink::default()
        .with(Category::Background, 1)
        .with(Category::PhotoFrame, 1)
        .with(Category::Photo, 1)
        .with(Category::PhotoGlow, 1)
        .with(Category::Cube, 3)
        .with(Category::Sphere, 2)
        .with(Category::CodeParticle, 4)
        .with(Category::NeuralNode, 5)
        .with(Category::NeuralLink, 4)
        .with_cards(vec![Some(Rect::new(0.0, 0.0, 200.0, 100.0))])
}

#[test]
fn empty_page_writes_nothing() {
    let mut updater = TransformUpdater::default();
    let mut sink = RecordingSink::default();
    updater.set_pointer(Vec2::new(10.0, 20.0), Vec2::new(800.0, 600.0));
    updater.set_scroll(300.0);
    updater.on_pointer_frame(&mut sink);
    updater.on_scroll_frame(&mut sink);
    assert!(sink.writes.is_empty());
}

#[test]
fn missing_categories_are_skipped() {
    let updater = TransformUpdater::default();
    let mut sink = RecordingSink::default().with(Category::Cube, 2);
    updater.on_pointer_frame(&mut sink);
    assert_eq!(sink.writes.len(), 2);
    assert!(sink.writes.iter().all(|(c, _, _)| *c == Category::Cube));
}

#[test]
fn pointer_frame_touches_pointer_categories_only() {
    let mut updater = TransformUpdater::default();
    let mut sink = full_page();
    updater.set_pointer(Vec2::new(100.0, 50.0), Vec2::new(1000.0, 800.0));
    updater.on_pointer_frame(&mut sink);

    let pointer: Vec<Category> = categories_for(Trigger::Pointer).collect();
    for (category, _, _) in &sink.writes {
        assert!(
            pointer.contains(category) || *category == Category::Card,
            "{:?} written on a pointer frame",
            category
        );
    }
    assert!(sink.written(Category::CodeParticle).is_empty());
    assert!(sink.written(Category::NeuralLink).is_empty());
    assert_eq!(sink.written(Category::Card).len(), 1);
}

#[test]
fn scroll_frame_leaves_background_and_cards_alone() {
    let mut updater = TransformUpdater::default();
    let mut sink = full_page();
    updater.set_scroll(640.0);
    updater.on_scroll_frame(&mut sink);

    assert!(sink.written(Category::Background).is_empty());
    assert!(sink.written(Category::Card).is_empty());
    assert_eq!(sink.written(Category::CodeParticle).len(), 4);
    assert_eq!(sink.written(Category::NeuralNode).len(), 5);
}

#[test]
fn each_target_is_written_once_per_frame() {
    let mut updater = TransformUpdater::default();
    let mut sink = full_page();
    updater.set_scroll(120.0);
    updater.on_scroll_frame(&mut sink);

    let mut seen = FnvHashMap::default();
    for (category, index, _) in &sink.writes {
        *seen.entry((*category, *index)).or_insert(0) += 1;
    }
    assert!(seen.values().all(|&n| n == 1));
}

#[test]
fn neural_links_only_change_opacity() {
    let mut updater = TransformUpdater::default();
    let mut sink = full_page();
    updater.set_scroll(90.0);
    updater.on_scroll_frame(&mut sink);

    for out in sink.written(Category::NeuralLink) {
        assert!(out.transform.is_none());
        let o = out.opacity.unwrap();
        assert!((0.2..=1.0).contains(&o));
    }
}

#[test]
fn spheres_drift_after_the_cubes() {
    let mut updater = TransformUpdater::default();
    let mut sink = full_page();
    updater.set_scroll(100.0);
    updater.on_scroll_frame(&mut sink);

    // 3 cubes, so the first sphere uses ordinal 3: 100 * (0.3 + 0.3)
    let sphere = sink.last(Category::Sphere, 0).unwrap();
    match sphere.transform.as_ref().unwrap().ops().last() {
        Some(TransformOp::TranslateY(y)) => assert!((y - 60.0).abs() < 1e-3),
        other => panic!("unexpected op {:?}", other),
    }
}

#[test]
fn frames_are_idempotent_for_unchanged_input() {
    let mut updater = TransformUpdater::default();
    updater.set_pointer(Vec2::new(700.0, 90.0), Vec2::new(1000.0, 800.0));
    updater.set_scroll(333.0);

    let mut first = full_page();
    updater.on_pointer_frame(&mut first);
    updater.on_scroll_frame(&mut first);
    let n = first.writes.len();
    assert!(n > 0);

    // Replaying the same frames on the same sink repeats the writes exactly
    let mut second = full_page();
    updater.on_pointer_frame(&mut second);
    updater.on_scroll_frame(&mut second);
    updater.on_pointer_frame(&mut second);
    updater.on_scroll_frame(&mut second);

    assert_eq!(second.writes.len(), 2 * n);
    assert_eq!(second.writes[..n], first.writes[..]);
    assert_eq!(second.writes[n..], first.writes[..]);
}

#[test]
fn cards_reset_when_pointer_leaves() {
    let mut updater = TransformUpdater::default();
    let mut sink = full_page();
    // pointer on the card center leans it
    updater.set_pointer(Vec2::new(100.0, 50.0), Vec2::new(1000.0, 800.0));
    updater.on_pointer_frame(&mut sink);
    let leaned = sink.last(Category::Card, 0).unwrap().clone();
    assert!(!leaned.transform.unwrap().is_identity());

    // a frame scheduled before the leave still runs after it
    updater.pointer_left();
    updater.on_pointer_frame(&mut sink);
    let reset = sink.last(Category::Card, 0).unwrap();
    assert!(reset.transform.as_ref().unwrap().is_identity());
}

#[test]
fn cards_stay_identity_before_first_pointer_move() {
    let updater = TransformUpdater::default();
    let mut sink = full_page();
    updater.update_cards(&mut sink);
    let out = sink.last(Category::Card, 0).unwrap();
    assert!(out.transform.as_ref().unwrap().is_identity());
}

#[test]
fn unreadable_card_box_resets_that_card() {
    let mut updater = TransformUpdater::default();
    let mut sink = RecordingSink::default().with_cards(vec![
        Some(Rect::new(0.0, 0.0, 100.0, 100.0)),
        None,
    ]);
    updater.set_pointer(Vec2::new(50.0, 50.0), Vec2::new(1000.0, 800.0));
    updater.update_cards(&mut sink);

    assert!(!sink.last(Category::Card, 0).unwrap().transform.as_ref().unwrap().is_identity());
    assert!(sink.last(Category::Card, 1).unwrap().transform.as_ref().unwrap().is_identity());
}

#[test]
fn reset_cards_writes_identity_for_every_card() {
    let updater = TransformUpdater::default();
    let mut sink = RecordingSink::default().with_cards(vec![None, None, None]);
    updater.reset_cards(&mut sink);
    let cards = sink.written(Category::Card);
    assert_eq!(cards.len(), 3);
    assert!(cards
        .iter()
        .all(|p| p.transform.as_ref().is_some_and(|t| t.to_css().is_empty())));
}

#[test]
fn initial_scroll_frame_rests_the_photo_frame() {
    let updater = TransformUpdater::new(Tuning::default());
    let mut sink = full_page();
    updater.on_scroll_frame(&mut sink);
    let frame = sink.last(Category::PhotoFrame, 0).unwrap();
    assert_eq!(
        frame.transform.as_ref().unwrap().to_css(),
        "translateY(0px) translateX(0px) rotateY(0deg) rotateX(0deg) rotateZ(0deg) translateZ(20px) scale(1)"
    );
}

#[test]
fn singleton_and_selector_table_is_consistent() {
    for category in Category::ALL {
        assert!(!category.selector().is_empty());
    }
    let singletons: Vec<_> = Category::ALL
        .iter()
        .filter(|c| c.is_singleton())
        .collect();
    assert_eq!(singletons.len(), 4);
    assert!(!Category::Card.is_singleton());
    assert_eq!(
        Category::Card.selector(),
        ".skill-category-3d, .project-card-3d, .hologram-card"
    );
}
