use chrono::NaiveDateTime;
use contracts::domain::a002_content_item::aggregate::PUBLISHED_AT_FORMAT;

use crate::shared::html::{plain_text, sanitize_inline};

/// One table row: a content item with its author already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRow {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub published_at: NaiveDateTime,
}

const TABLE_HEAD: &str = concat!(
    r#"<table class="wp-list-table widefat fixed striped posts"><thead><tr>"#,
    r#"<th scope="col" id="title" class="manage-column column-title column-primary">Title</th>"#,
    r#"<th scope="col" id="author" class="manage-column column-author">Author</th>"#,
    r#"<th scope="col" id="date" class="manage-column column-date">Date</th>"#,
    r#"</tr></thead><tbody id="the-list">"#,
);

const TABLE_FOOT: &str = concat!(
    r#"</tbody><tfoot><tr>"#,
    r#"<th scope="col" class="manage-column column-title column-primary">Title</th>"#,
    r#"<th scope="col" class="manage-column column-author">Author</th>"#,
    r#"<th scope="col" class="manage-column column-date">Date</th>"#,
    r#"</tr></tfoot></table>"#,
);

/// Страница категории: заголовок и таблица материалов либо заглушка.
///
/// Rows are written in the order given.
pub fn render_category_posts(display_name: &str, rows: &[ContentRow]) -> String {
    let name = plain_text(display_name);
    let mut output = format!("<h1>{} Content</h1>", name);

    if rows.is_empty() {
        output.push_str(&format!(
            "<h3>There are no {} posts. Check back later.</h3>",
            name
        ));
        return output;
    }

    output.push_str(TABLE_HEAD);
    for row in rows {
        output.push_str(&format!(
            r#"<tr id="post-{}" class="type-post status-publish entry"><td>{}</td><td>{}</td><td>{}</td></tr>"#,
            row.id,
            sanitize_inline(&row.title),
            plain_text(&row.author),
            row.published_at.format(PUBLISHED_AT_FORMAT)
        ));
    }
    output.push_str(TABLE_FOOT);

    output
}
