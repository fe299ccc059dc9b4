pub mod pointer;
pub mod scroll;

pub use pointer::wire_pointer_handlers;
pub use scroll::wire_scroll_handlers;

use crate::scene::{FrameGate, TransformUpdater};
use crate::targets::TargetRegistry;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared state the input handlers close over.
#[derive(Clone)]
pub struct FxWiring {
    pub updater: Rc<RefCell<TransformUpdater>>,
    pub targets: Rc<RefCell<TargetRegistry>>,
    pub pointer_gate: Rc<RefCell<FrameGate>>,
    pub scroll_gate: Rc<RefCell<FrameGate>>,
}

impl FxWiring {
    pub fn new(updater: TransformUpdater, targets: TargetRegistry) -> Self {
        Self {
            updater: Rc::new(RefCell::new(updater)),
            targets: Rc::new(RefCell::new(targets)),
            pointer_gate: Rc::new(RefCell::new(FrameGate::default())),
            scroll_gate: Rc::new(RefCell::new(FrameGate::default())),
        }
    }
}
