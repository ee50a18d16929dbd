use crate::driver;
use crate::feedback::{FeedbackKind, NotificationKind, Position};

const HEAVY: f64 = 0.9;
const MEDIUM: f64 = 0.6;
const RIGID: f64 = 0.75;
const LIGHT: f64 = 0.4;
const SOFT: f64 = 0.25;

///Impact generator: one tap of a fixed intensity in [0, 1].
pub trait ImpactEngine {
    fn prepare(&mut self);
    fn fire(&mut self, intensity: f64);
    fn fire_at(&mut self, intensity: f64, position: Position);
}

///Selection generator: the tick played while a picker value changes.
pub trait SelectionEngine {
    fn prepare(&mut self);
    fn fire(&mut self);
    fn fire_at(&mut self, position: Position);
}

///Notification generator: success/warning/error patterns.
pub trait NotificationEngine {
    fn prepare(&mut self);
    fn fire(&mut self, kind: NotificationKind);
    fn fire_at(&mut self, kind: NotificationKind, position: Position);
}

///Canvas generator: pencil-aware drawing feedback. Location-only, no plain
///counterpart exists in the OS.
pub trait CanvasEngine {
    fn prepare(&mut self);
    fn alignment_occurred_at(&mut self, position: Position);
    fn path_completed_at(&mut self, position: Position);
}

///Maps a `FeedbackKind` onto exactly one native generator call. Each of the
///four generators keeps its own prepare cache, so they are never shared
///across categories.
pub struct HapticFeedback<
    I = driver::Impact,
    S = driver::Selection,
    N = driver::Notification,
    C = driver::Canvas,
> {
    impact: I,
    selection: S,
    notification: N,
    canvas: C,
    coordinate_feedback: bool,
}

impl HapticFeedback {
    ///Fresh dispatcher over the platform's native generators. Must be called
    ///on the main interaction thread.
    pub fn new() -> Self {
        let coordinate_feedback = driver::supports_coordinate_feedback();
        log::debug!("coordinate haptic feedback supported: {}", coordinate_feedback);
        Self::with_engines(
            driver::Impact::new(),
            driver::Selection::new(),
            driver::Notification::new(),
            driver::Canvas::new(),
            coordinate_feedback,
        )
    }
}

impl Default for HapticFeedback {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: ImpactEngine, S: SelectionEngine, N: NotificationEngine, C: CanvasEngine>
    HapticFeedback<I, S, N, C>
{
    ///Dispatcher over caller-supplied engines. Meant for automated tests;
    ///production code goes through `new`.
    pub fn with_engines(
        impact: I, selection: S, notification: N, canvas: C, coordinate_feedback: bool
    ) -> Self {
        HapticFeedback{impact, selection, notification, canvas, coordinate_feedback}
    }

    ///Fire-and-forget. Location-carrying kinds are skipped entirely when the
    ///running OS predates location-aware generators.
    pub fn trigger(&mut self, kind: FeedbackKind) {
        log::trace!("haptic feedback: {:?}", kind);
        match kind {
            FeedbackKind::Heavy => self.fire_impact(HEAVY, None),
            FeedbackKind::Light => self.fire_impact(LIGHT, None),
            FeedbackKind::Medium => self.fire_impact(MEDIUM, None),
            FeedbackKind::Rigid => self.fire_impact(RIGID, None),
            FeedbackKind::Soft => self.fire_impact(SOFT, None),
            FeedbackKind::HeavyAt(position) => self.fire_impact(HEAVY, Some(position)),
            FeedbackKind::LightAt(position) => self.fire_impact(LIGHT, Some(position)),
            FeedbackKind::MediumAt(position) => self.fire_impact(MEDIUM, Some(position)),
            FeedbackKind::RigidAt(position) => self.fire_impact(RIGID, Some(position)),
            FeedbackKind::SoftAt(position) => self.fire_impact(SOFT, Some(position)),
            FeedbackKind::SelectionChange => {
                self.selection.prepare();
                self.selection.fire();
            },
            FeedbackKind::SelectionChangeAt(position) => if self.coordinate_feedback {
                self.selection.prepare();
                self.selection.fire_at(position);
            },
            FeedbackKind::Success => self.fire_notification(NotificationKind::Success, None),
            FeedbackKind::Warning => self.fire_notification(NotificationKind::Warning, None),
            FeedbackKind::Error => self.fire_notification(NotificationKind::Error, None),
            FeedbackKind::SuccessAt(position) => {
                self.fire_notification(NotificationKind::Success, Some(position))
            },
            FeedbackKind::WarningAt(position) => {
                self.fire_notification(NotificationKind::Warning, Some(position))
            },
            FeedbackKind::ErrorAt(position) => {
                self.fire_notification(NotificationKind::Error, Some(position))
            },
            FeedbackKind::AlignmentOccurredAt(position) => if self.coordinate_feedback {
                self.canvas.prepare();
                self.canvas.alignment_occurred_at(position);
            },
            FeedbackKind::PathCompletedAt(position) => if self.coordinate_feedback {
                self.canvas.prepare();
                self.canvas.path_completed_at(position);
            },
        }
    }

    fn fire_impact(&mut self, intensity: f64, position: Option<Position>) {
        match position {
            None => {
                self.impact.prepare();
                self.impact.fire(intensity);
            },
            Some(position) if self.coordinate_feedback => {
                self.impact.prepare();
                self.impact.fire_at(intensity, position);
            },
            Some(_) => {}
        }
    }

    fn fire_notification(&mut self, kind: NotificationKind, position: Option<Position>) {
        match position {
            None => {
                self.notification.prepare();
                self.notification.fire(kind);
            },
            Some(position) if self.coordinate_feedback => {
                self.notification.prepare();
                self.notification.fire_at(kind, position);
            },
            Some(_) => {}
        }
    }
}
