use crate::dom;
use crate::scene::{Category, Presentation, Rect, TargetSink};
use fnv::FnvHashMap;
use web_sys as web;

/// Decorative elements discovered once at start-up, grouped by category.
#[derive(Default)]
pub struct TargetRegistry {
    by_category: FnvHashMap<Category, Vec<web::HtmlElement>>,
}

impl TargetRegistry {
    pub fn discover(document: &web::Document) -> Self {
        let mut by_category = FnvHashMap::default();
        for category in Category::ALL {
            let mut found = dom::query_all(document, category.selector());
            if category.is_singleton() {
                found.truncate(1);
            }
            if !found.is_empty() {
                by_category.insert(category, found);
            }
        }
        let registry = Self { by_category };
        log::info!(
            "[fx] targets: cubes={} spheres={} cards={} code_particles={} nodes={} links={}",
            registry.count(Category::Cube),
            registry.count(Category::Sphere),
            registry.count(Category::Card),
            registry.count(Category::CodeParticle),
            registry.count(Category::NeuralNode),
            registry.count(Category::NeuralLink),
        );
        registry
    }

    fn get(&self, category: Category, index: usize) -> Option<&web::HtmlElement> {
        self.by_category.get(&category).and_then(|v| v.get(index))
    }
}

impl TargetSink for TargetRegistry {
    fn count(&self, category: Category) -> usize {
        self.by_category.get(&category).map_or(0, Vec::len)
    }

    fn apply(&mut self, category: Category, index: usize, out: &Presentation) {
        let Some(el) = self.get(category, index) else {
            return;
        };
        if let Some(transform) = &out.transform {
            dom::set_style(el, "transform", &transform.to_css());
        }
        if let Some(opacity) = out.opacity {
            dom::set_style(el, "opacity", &opacity.to_string());
        }
    }

    fn card_rect(&self, index: usize) -> Option<Rect> {
        self.get(Category::Card, index).map(|el| dom::rect_of(el))
    }
}
