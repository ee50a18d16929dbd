use objc2::rc::Retained;
use objc2::MainThreadMarker;
use objc2_core_foundation::CGPoint;
use objc2_ui_kit::{
    UICanvasFeedbackGenerator, UIImpactFeedbackGenerator, UINotificationFeedbackGenerator,
    UINotificationFeedbackType, UISelectionFeedbackGenerator,
};

use crate::feedback::{NotificationKind, Position};
use crate::haptics::{CanvasEngine, ImpactEngine, NotificationEngine, SelectionEngine};

///Location-aware generator calls shipped with iOS 17.5.
pub fn supports_coordinate_feedback() -> bool {
    objc2::available!(ios = 17.5, ..)
}

fn point((x, y): Position) -> CGPoint {
    CGPoint::new(x, y)
}

pub struct Impact(Retained<UIImpactFeedbackGenerator>);

impl Impact {
    pub fn new() -> Self {
        let mtm = MainThreadMarker::new().expect("must be on the main thread");
        Impact(unsafe { UIImpactFeedbackGenerator::new(mtm) })
    }
}

impl ImpactEngine for Impact {
    fn prepare(&mut self) {
        unsafe { self.0.prepare(); }
    }
    fn fire(&mut self, intensity: f64) {
        unsafe { self.0.impactOccurredWithIntensity(intensity); }
    }
    fn fire_at(&mut self, intensity: f64, position: Position) {
        unsafe { self.0.impactOccurredWithIntensity_atLocation(intensity, point(position)); }
    }
}

pub struct Selection(Retained<UISelectionFeedbackGenerator>);

impl Selection {
    pub fn new() -> Self {
        let mtm = MainThreadMarker::new().expect("must be on the main thread");
        Selection(unsafe { UISelectionFeedbackGenerator::new(mtm) })
    }
}

impl SelectionEngine for Selection {
    fn prepare(&mut self) {
        unsafe { self.0.prepare(); }
    }
    fn fire(&mut self) {
        unsafe { self.0.selectionChanged(); }
    }
    fn fire_at(&mut self, position: Position) {
        unsafe { self.0.selectionChangedAtLocation(point(position)); }
    }
}

pub struct Notification(Retained<UINotificationFeedbackGenerator>);

impl Notification {
    pub fn new() -> Self {
        let mtm = MainThreadMarker::new().expect("must be on the main thread");
        Notification(unsafe { UINotificationFeedbackGenerator::new(mtm) })
    }

    fn feedback_type(kind: NotificationKind) -> UINotificationFeedbackType {
        match kind {
            NotificationKind::Success => UINotificationFeedbackType::Success,
            NotificationKind::Warning => UINotificationFeedbackType::Warning,
            NotificationKind::Error => UINotificationFeedbackType::Error,
        }
    }
}

impl NotificationEngine for Notification {
    fn prepare(&mut self) {
        unsafe { self.0.prepare(); }
    }
    fn fire(&mut self, kind: NotificationKind) {
        unsafe { self.0.notificationOccurred(Self::feedback_type(kind)); }
    }
    fn fire_at(&mut self, kind: NotificationKind, position: Position) {
        unsafe { self.0.notificationOccurred_atLocation(Self::feedback_type(kind), point(position)); }
    }
}

//UICanvasFeedbackGenerator does not exist below iOS 17.5, so the handle is
//only instantiated once the availability check passes.
pub struct Canvas(Option<Retained<UICanvasFeedbackGenerator>>);

impl Canvas {
    pub fn new() -> Self {
        if supports_coordinate_feedback() {
            let mtm = MainThreadMarker::new().expect("must be on the main thread");
            Canvas(Some(unsafe { UICanvasFeedbackGenerator::new(mtm) }))
        } else {
            Canvas(None)
        }
    }
}

impl CanvasEngine for Canvas {
    fn prepare(&mut self) {
        if let Some(generator) = &self.0 {
            unsafe { generator.prepare(); }
        }
    }
    fn alignment_occurred_at(&mut self, position: Position) {
        if let Some(generator) = &self.0 {
            unsafe { generator.alignmentOccurredAtLocation(point(position)); }
        }
    }
    fn path_completed_at(&mut self, position: Position) {
        if let Some(generator) = &self.0 {
            unsafe { generator.pathCompletedAtLocation(point(position)); }
        }
    }
}
