// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for load warnings and clipboard confirmations.
//!
//! - [`Notification`] carries a severity and an i18n message key
//! - [`Manager`] shows at most three toasts and queues the rest
//! - [`Toast`] renders them in the bottom-right corner
//!
//! ```ignore
//! let mut manager = Manager::new();
//! manager.push(Notification::success("notification-copied").with_arg("target", email));
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
