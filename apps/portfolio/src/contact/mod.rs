// Contact pipeline: validation, per-session recording, outbound notification.
// Submissions are always recorded before the notification email is attempted.

pub mod flow;
pub mod handlers;
pub mod notifier;
pub mod session;
pub mod store;
pub mod validation;
