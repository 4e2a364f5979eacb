//! System notifications via freedesktop D-Bus.

use std::collections::HashMap;
use zbus::{Connection, proxy};

/// D-Bus interface for freedesktop Notifications.
#[proxy(
    interface = "org.freedesktop.Notifications",
    default_service = "org.freedesktop.Notifications",
    default_path = "/org/freedesktop/Notifications"
)]
trait Notifications {
    /// Send a notification.
    ///
    /// # Returns
    /// Notification ID
    fn notify(
        &self,
        app_name: &str,
        replaces_id: u32,
        app_icon: &str,
        summary: &str,
        body: &str,
        actions: Vec<&str>,
        hints: HashMap<&str, zbus::zvariant::Value<'_>>,
        expire_timeout: i32,
    ) -> zbus::Result<u32>;
}

/// Send a system notification.
///
/// # Arguments
/// * `summary` - Notification title
/// * `body` - Notification body text
/// * `icon` - Optional icon name (defaults to "image-x-generic")
pub async fn send_notification(summary: &str, body: &str, icon: Option<&str>) -> Result<(), String> {
    let connection = Connection::session()
        .await
        .map_err(|e| format!("Failed to connect to session bus: {}", e))?;

    let proxy = NotificationsProxy::new(&connection)
        .await
        .map_err(|e| format!("Failed to create notifications proxy: {}", e))?;

    let icon = icon.unwrap_or("image-x-generic");
    let hints = HashMap::new();

    proxy
        .notify(
            "Sketchpad",
            0,
            icon,
            summary,
            body,
            vec![],
            hints,
            3000, // matches the in-app notice duration
        )
        .await
        .map_err(|e| format!("Failed to send notification: {}", e))?;

    Ok(())
}

/// Send a notification in the background (non-blocking).
///
/// Spawns a tokio task to send the notification and logs errors. The runtime
/// must outlive the spawned task, so this is only suitable for long-lived
/// drivers; a short-lived process should await [`send_notification`] before
/// dropping its runtime.
pub fn send_notification_async(
    runtime_handle: &tokio::runtime::Handle,
    summary: String,
    body: String,
    icon: Option<String>,
) {
    runtime_handle.spawn(async move {
        let icon_ref = icon.as_deref();
        if let Err(e) = send_notification(&summary, &body, icon_ref).await {
            log::warn!("Failed to send notification: {}", e);
        }
    });
}
