use contracts::domain::a001_category::validation::{RemovedCategory, ValidationResult};

use crate::shared::html::plain_text;
use crate::shared::platform::NoticeBoard;

const NOTICE_INTRO: &str = "One or more of your categories are missing or configured incorrectly for this plugin. Please ensure you have these: ";

/// Текст уведомления: только удалённые категории, с исходными именами.
pub fn build_notice_message(removed: &[RemovedCategory]) -> String {
    let mut message = String::from(NOTICE_INTRO);
    for category in removed {
        message.push_str(&format!(
            r#"<br>"{}" with a slug of "{}""#,
            plain_text(&category.display_name),
            plain_text(&category.slug)
        ));
    }
    message
}

pub fn render_notice(message: &str) -> String {
    format!(r#"<div class="notice notice-error"><p>{}</p></div>"#, message)
}

/// Schedules one error notice when validation removed anything.
/// The markup is produced later, when the admin shell renders.
pub fn report(result: &ValidationResult, board: &mut dyn NoticeBoard) {
    if !result.any_invalid() {
        return;
    }

    tracing::warn!(
        "Admin notice scheduled for {} invalid categories",
        result.removed.len()
    );

    let removed = result.removed.clone();
    board.register_deferred_notice(Box::new(move || {
        render_notice(&build_notice_message(&removed))
    }));
}
