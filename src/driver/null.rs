//Haptics are only wired up for mobile targets; everywhere else the engines
//accept every call and do nothing.

use crate::feedback::{NotificationKind, Position};
use crate::haptics::{CanvasEngine, ImpactEngine, NotificationEngine, SelectionEngine};

pub fn supports_coordinate_feedback() -> bool {
    false
}

pub struct Impact;

impl Impact {
    pub fn new() -> Self {
        Impact
    }
}

impl ImpactEngine for Impact {
    fn prepare(&mut self) {}
    fn fire(&mut self, _intensity: f64) {}
    fn fire_at(&mut self, _intensity: f64, _position: Position) {}
}

pub struct Selection;

impl Selection {
    pub fn new() -> Self {
        Selection
    }
}

impl SelectionEngine for Selection {
    fn prepare(&mut self) {}
    fn fire(&mut self) {}
    fn fire_at(&mut self, _position: Position) {}
}

pub struct Notification;

impl Notification {
    pub fn new() -> Self {
        Notification
    }
}

impl NotificationEngine for Notification {
    fn prepare(&mut self) {}
    fn fire(&mut self, _kind: NotificationKind) {}
    fn fire_at(&mut self, _kind: NotificationKind, _position: Position) {}
}

pub struct Canvas;

impl Canvas {
    pub fn new() -> Self {
        Canvas
    }
}

impl CanvasEngine for Canvas {
    fn prepare(&mut self) {}
    fn alignment_occurred_at(&mut self, _position: Position) {}
    fn path_completed_at(&mut self, _position: Position) {}
}
