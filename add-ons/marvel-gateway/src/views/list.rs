//! Character list and count.

use super::html_escape;
use marvel_core::Character;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub const EMPTY_MESSAGE: &str = "There is no character";

/// Everything but RFC 3986 unreserved characters is escaped inside a path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// `/characters/{id}` with `id` encoded as a single path segment.
pub fn character_href(id: &str) -> String {
    format!("/characters/{}", utf8_percent_encode(id, PATH_SEGMENT))
}

/// `<ul id="characters">` with a link per record that has an id.
pub fn characters_list(characters: &[Character]) -> String {
    if characters.is_empty() {
        return format!(r#"<ul id="characters"><li>{}</li></ul>"#, EMPTY_MESSAGE);
    }
    let items: String = characters
        .iter()
        .map(|c| {
            let label = html_escape(&c.display_label());
            match c.link_id() {
                Some(id) => format!(
                    r#"<li><a href="{}" class="character-link">{}</a></li>"#,
                    html_escape(&character_href(&id)),
                    label
                ),
                None => format!("<li>{}</li>", label),
            }
        })
        .collect();
    format!(r#"<ul id="characters">{}</ul>"#, items)
}

/// "There is no character" / "There is 1 character" / "There are N characters".
pub fn count_phrase(count: usize) -> String {
    match count {
        0 => EMPTY_MESSAGE.to_string(),
        1 => "There is 1 character".to_string(),
        n => format!("There are {} characters", n),
    }
}

pub fn number_of_characters(characters: &[Character]) -> String {
    format!("<div>{}</div>", count_phrase(characters.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(value: serde_json::Value) -> Vec<Character> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn empty_list_shows_placeholder() {
        assert_eq!(
            characters_list(&[]),
            r#"<ul id="characters"><li>There is no character</li></ul>"#
        );
    }

    #[test]
    fn records_with_id_are_linked() {
        let html = characters_list(&records(json!([
            { "id": 1, "name": "Thor" },
            { "_id": "x1", "title": "Mongo Title" },
            { "name": "No Link" },
            "Bare",
        ])));
        assert!(html.contains(r#"<a href="/characters/1" class="character-link">Thor</a>"#));
        assert!(html.contains("<li>Mongo Title</li>"));
        assert!(!html.contains("/characters/x1"));
        assert!(html.contains("<li>No Link</li>"));
        assert!(html.contains("<li>Bare</li>"));
    }

    #[test]
    fn non_record_entries_show_their_json_text() {
        let html = characters_list(&records(json!([null, 42, { "id": 1, "name": "Thor" }])));
        assert!(html.starts_with(r#"<ul id="characters"><li>null</li><li>42</li>"#));
        assert!(!html.contains("<li></li>"));
    }

    #[test]
    fn ids_are_encoded_as_one_path_segment() {
        assert_eq!(character_href("a/b"), "/characters/a%2Fb");
        assert_eq!(character_href("Spider-Man 2099"), "/characters/Spider-Man%202099");
        assert_eq!(character_href("1009664"), "/characters/1009664");
        let html = characters_list(&records(json!([{ "id": "a/b", "name": "Slash" }])));
        assert!(html.contains(r#"<a href="/characters/a%2Fb" class="character-link">Slash</a>"#));
    }

    #[test]
    fn labels_are_escaped() {
        let html = characters_list(&records(json!([{ "id": 2, "name": "<script>" }])));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn count_phrasing() {
        assert_eq!(count_phrase(0), "There is no character");
        assert_eq!(count_phrase(1), "There is 1 character");
        assert_eq!(count_phrase(3), "There are 3 characters");
        let three = records(json!(["a", "b", "c"]));
        assert_eq!(number_of_characters(&three), "<div>There are 3 characters</div>");
    }
}
