//! Transient notifications for the viewer (saved, exported, failed, ...)

use eframe::egui::{self, Color32};
use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Instant,
    pub duration: Duration,
    pub sticky: bool,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        let duration = match kind {
            NotificationKind::Error => Duration::from_secs(10),
            _ => Duration::from_secs(4),
        };
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
            duration,
            sticky: false,
        }
    }

    pub fn is_expired(&self) -> bool {
        !self.sticky && self.created_at.elapsed() > self.duration
    }

    fn color(&self) -> Color32 {
        match self.kind {
            NotificationKind::Success => Color32::from_rgb(80, 200, 120),
            NotificationKind::Error => Color32::from_rgb(230, 90, 90),
            NotificationKind::Info => Color32::from_rgb(100, 160, 230),
        }
    }
}

/// Holds active notifications and draws them stacked in a corner window
#[derive(Default)]
pub struct NotificationManager {
    notifications: Vec<Notification>,
}

impl NotificationManager {
    pub fn success(&mut self, message: impl Into<String>) {
        self.notifications
            .push(Notification::new(message, NotificationKind::Success));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        let mut n = Notification::new(message, NotificationKind::Error);
        n.sticky = true; // errors stay until dismissed
        self.notifications.push(n);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.notifications
            .push(Notification::new(message, NotificationKind::Info));
    }

    pub fn has_notifications(&self) -> bool {
        !self.notifications.is_empty()
    }

    pub fn dismiss_all(&mut self) {
        self.notifications.clear();
    }

    pub fn render(&mut self, ui: &mut egui::Ui) {
        self.notifications.retain(|n| !n.is_expired());

        let mut dismissed: Option<usize> = None;
        for (index, notification) in self.notifications.iter().enumerate() {
            egui::Frame::default()
                .fill(Color32::from_rgb(28, 28, 32))
                .stroke(egui::Stroke::new(1.0, notification.color()))
                .inner_margin(egui::Margin::symmetric(10, 6))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(&notification.message)
                                .color(notification.color()),
                        );
                        if notification.sticky && ui.small_button("✕").clicked() {
                            dismissed = Some(index);
                        }
                    });
                });
            ui.add_space(4.0);
        }
        if let Some(index) = dismissed {
            self.notifications.remove(index);
        }
    }
}
