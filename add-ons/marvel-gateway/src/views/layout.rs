//! Document shell: header, navigation, footer.

use super::{html_escape, Page};
use axum::response::{Html, IntoResponse, Response};
use marvel_core::CoreConfig;

const NAV: [(&str, &str); 5] = [
    ("/", "Home"),
    ("/characters", "Characters"),
    ("/compare", "Compare"),
    ("/about", "About"),
    ("/contact", "Contact"),
];

const STYLE: &str = "body{margin:0;font-family:system-ui,sans-serif}\
.app-header{background:#202020;color:#fff;text-align:center;padding:1rem 0}\
.app-nav a{color:#fff;margin:0 .75rem;text-decoration:none}\
.app-content{padding:1.5rem}\
.app-footer{text-align:center;padding:1rem;color:#777}\
.sort-controls{display:flex;gap:1rem;align-items:center;margin-bottom:1rem}\
.chart-legend{list-style:none;padding:0}\
.swatch{display:inline-block;width:12px;height:12px;margin-right:6px}";

/// Full HTML document for `page`.
pub fn render_document(config: &CoreConfig, page: &Page) -> String {
    let nav: String = NAV
        .iter()
        .map(|(href, text)| format!(r#"<a href="{}">{}</a>"#, href, text))
        .collect();
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{style}</style>
</head>
<body>
<div class="app-layout">
<header class="app-header">
  <h1>{app_name}</h1>
  <nav class="app-nav"><div class="nav-inner">{nav}</div></nav>
</header>
<main class="app-content">
{body}
</main>
<footer class="app-footer">© {app_name}</footer>
</div>
</body>
</html>"#,
        title = html_escape(&page.title),
        style = STYLE,
        app_name = html_escape(&config.app_name),
        nav = nav,
        body = page.body,
    )
}

/// Response with the page's status and the rendered document.
pub fn respond(config: &CoreConfig, page: Page) -> Response {
    (page.status, Html(render_document(config, &page))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views;

    #[test]
    fn document_carries_title_nav_and_footer() {
        let config = CoreConfig::default();
        let page = Page::ok(config.page_title("Characters"), views::home());
        let html = render_document(&config, &page);
        assert!(html.contains("<title>Characters | Marvel App</title>"));
        assert!(html.contains("<h1>Marvel App</h1>"));
        assert!(html.contains(r#"<a href="/about">About</a>"#));
        assert!(html.contains("© Marvel App"));
        assert!(html.contains("Welcome to the Marvel App."));
    }
}
