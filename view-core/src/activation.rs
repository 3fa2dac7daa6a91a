use std::cell::Cell;
use std::rc::Rc;

/// Liveness handle for one activation of a view.
///
/// The view keeps a clone and calls [`Activation::dispose`] on teardown;
/// controllers check [`Activation::is_live`] before applying async results.
#[derive(Debug, Clone, Default)]
pub struct Activation {
    disposed: Rc<Cell<bool>>,
}

impl Activation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispose(&self) {
        self.disposed.set(true);
    }

    pub fn is_live(&self) -> bool {
        !self.disposed.get()
    }
}
