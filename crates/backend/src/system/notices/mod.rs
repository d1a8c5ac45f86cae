pub mod reporter;

use crate::shared::platform::{NoticeBoard, NoticeCallback};

/// Уведомления админки, отложенные до отрисовки страницы.
///
/// Callbacks run only from [`AdminNotices::render_all`], which the admin
/// shell calls while it renders a page.
#[derive(Default)]
pub struct AdminNotices {
    callbacks: Vec<NoticeCallback>,
}

impl AdminNotices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render_all(&self) -> String {
        self.callbacks.iter().map(|callback| callback()).collect()
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl NoticeBoard for AdminNotices {
    fn register_deferred_notice(&mut self, callback: NoticeCallback) {
        self.callbacks.push(callback);
    }
}
