//! Server-side HTML rendering. Every page is a [`Page`] value; the layout turns it
//! into a full document, so no view touches global state such as the document title.

pub mod charts;
pub mod detail;
pub mod layout;
pub mod list;
pub mod query;
pub mod sort_controls;

use axum::http::StatusCode;

/// A rendered page body plus the effects the shell applies: title and status.
#[derive(Debug, Clone)]
pub struct Page {
    pub title: String,
    pub status: StatusCode,
    pub body: String,
}

impl Page {
    pub fn ok(title: impl Into<String>, body: String) -> Self {
        Self {
            title: title.into(),
            status: StatusCode::OK,
            body,
        }
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }
}

/// Simple HTML escaping for text and attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Static pages.
pub fn home() -> String {
    r#"<section>
  <h2>Home</h2>
  <p>Welcome to the Marvel App.</p>
</section>"#
        .to_string()
}

pub fn about() -> String {
    r#"<section>
  <h2>About</h2>
  <p>We are a team of marvel fans who love to create some awesome apps !</p>
</section>"#
        .to_string()
}

pub fn contact() -> String {
    r#"<section>
  <h2>Contact Us</h2>
  <p>Feel free to contact us at marvelApp@gmail.com</p>
</section>"#
        .to_string()
}

pub fn not_found() -> String {
    r#"<section class="not-found">
  <h1>404</h1>
  <h2>Page not found</h2>
  <p>The requested page does not exist. <a href="/">Back to home</a></p>
</section>"#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            html_escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#x27;Jerry&#x27;&lt;/b&gt;"
        );
    }

    #[test]
    fn page_status_defaults_to_ok() {
        let page = Page::ok("Home", home());
        assert_eq!(page.status, StatusCode::OK);
        assert_eq!(page.with_status(StatusCode::NOT_FOUND).status, StatusCode::NOT_FOUND);
    }
}
