#[cfg(target_os = "ios")]
mod ios;
#[cfg(target_os = "ios")]
pub use ios::{Canvas, Impact, Notification, Selection, supports_coordinate_feedback};

#[cfg(not(target_os = "ios"))]
mod null;
#[cfg(not(target_os = "ios"))]
pub use null::{Canvas, Impact, Notification, Selection, supports_coordinate_feedback};
