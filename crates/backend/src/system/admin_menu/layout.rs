use contracts::system::admin_menu::AdminMenuEntry;

use crate::shared::html::plain_text;

/// Оболочка страницы админки: меню, уведомления, затем тело страницы.
pub fn render_admin_shell(
    title: &str,
    menu: &[AdminMenuEntry],
    notices_html: &str,
    body: &str,
) -> String {
    let mut nav = String::new();
    for entry in menu {
        nav.push_str(&format!(
            r#"<li><a href="{}">{}</a></li>"#,
            entry.url,
            plain_text(&entry.menu_title)
        ));
    }

    format!(
        concat!(
            "<!DOCTYPE html>",
            "<html><head><meta charset=\"utf-8\"><title>{title}</title></head>",
            "<body><nav id=\"adminmenu\"><ul>{nav}</ul></nav>",
            "<div class=\"wrap\">{notices}{body}</div>",
            "</body></html>"
        ),
        title = plain_text(title),
        nav = nav,
        notices = notices_html,
        body = body,
    )
}

pub fn render_index_body(menu: &[AdminMenuEntry]) -> String {
    if menu.is_empty() {
        return "<h1>Categories</h1><p>No category pages are registered.</p>".to_string();
    }

    let items: String = menu
        .iter()
        .map(|entry| {
            format!(
                r#"<li><a href="{}">{}</a></li>"#,
                entry.url,
                plain_text(&entry.title)
            )
        })
        .collect();

    format!("<h1>Categories</h1><ul>{}</ul>", items)
}
