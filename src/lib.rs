use std::cell::RefCell;

mod feedback;
pub use feedback::{FeedbackKind, NotificationKind, Position};

mod haptics;
pub use haptics::{CanvasEngine, HapticFeedback, ImpactEngine, NotificationEngine, SelectionEngine};

pub mod driver;

mod logger;
pub use logger::Logger;

thread_local! {
    static HAPTIC_FEEDBACK: RefCell<HapticFeedback> = RefCell::new(HapticFeedback::new());
}

///Process-wide handle to the native interaction drivers, built lazily on the
///main interaction thread. Meant for top-level wiring; components should take
///a `&mut HapticFeedback` instead of reaching for this.
pub struct InteractionTools;

impl InteractionTools {
    pub fn haptic_feedback(kind: FeedbackKind) {
        HAPTIC_FEEDBACK.with(|feedback| feedback.borrow_mut().trigger(kind));
    }
}

pub mod prelude {
    pub use crate::*;
}
