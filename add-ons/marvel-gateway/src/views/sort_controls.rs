//! Sort controls for the character list. All state lives in the query string.

use super::html_escape;
use super::query::QueryParams;

const SORT_CHOICES: [(&str, &str); 2] = [("name", "Name"), ("modified", "Modified Date")];
const ORDER_CHOICES: [(&str, &str); 2] = [("asc", "Ascending"), ("desc", "Descending")];

pub struct SortControls<'a> {
    path: &'a str,
    query: &'a QueryParams,
}

impl<'a> SortControls<'a> {
    pub fn new(path: &'a str, query: &'a QueryParams) -> Self {
        Self { path, query }
    }

    /// Selected sort as read from the URL; `"name"` when absent.
    pub fn current_sort(&self) -> &str {
        self.query.get("sort").filter(|s| !s.is_empty()).unwrap_or("name")
    }

    /// Selected order as read from the URL; `"asc"` when absent.
    pub fn current_order(&self) -> &str {
        self.query.get("order").filter(|s| !s.is_empty()).unwrap_or("asc")
    }

    fn select(&self, id: &str, param: &str, label: &str, current: &str, choices: &[(&str, &str)]) -> String {
        let options: String = choices
            .iter()
            .map(|(value, text)| {
                format!(
                    r#"<option value="{value}" data-href="{href}"{selected}>{text}</option>"#,
                    value = value,
                    href = html_escape(&self.query.href_with(self.path, param, value)),
                    selected = if *value == current { " selected" } else { "" },
                    text = text,
                )
            })
            .collect();
        format!(
            r#"<div>
    <label for="{id}">{label}</label>
    <select id="{id}" name="{param}" onchange="window.location.assign(this.selectedOptions[0].dataset.href)">{options}</select>
  </div>"#,
            id = id,
            label = label,
            param = param,
            options = options,
        )
    }

    pub fn render(&self) -> String {
        // Without script the selects submit as a form; other params ride along as hidden inputs.
        let hidden: String = self
            .query
            .pairs()
            .iter()
            .filter(|(k, _)| k != "sort" && k != "order")
            .map(|(k, v)| {
                format!(
                    r#"<input type="hidden" name="{}" value="{}">"#,
                    html_escape(k),
                    html_escape(v)
                )
            })
            .collect();
        format!(
            r#"<form class="sort-controls" method="get" action="{action}">
  {sort}
  {order}
  {hidden}<noscript><button type="submit">Apply</button></noscript>
</form>"#,
            action = html_escape(self.path),
            sort = self.select("sort-select", "sort", "Sort by:", self.current_sort(), &SORT_CHOICES),
            order = self.select("order-select", "order", "Order:", self.current_order(), &ORDER_CHOICES),
            hidden = hidden,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(raw: &[(&str, &str)]) -> QueryParams {
        QueryParams::new(raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect())
    }

    #[test]
    fn defaults_to_name_ascending() {
        let q = QueryParams::default();
        let controls = SortControls::new("/characters", &q);
        assert_eq!(controls.current_sort(), "name");
        assert_eq!(controls.current_order(), "asc");
        let html = controls.render();
        assert!(html.contains(r#"<option value="name" data-href="/characters?sort=name" selected>Name</option>"#));
        assert!(html.contains(r#"<option value="asc" data-href="/characters?order=asc" selected>Ascending</option>"#));
    }

    #[test]
    fn option_links_rewrite_only_their_parameter() {
        let q = params(&[("order", "desc"), ("page", "2")]);
        let html = SortControls::new("/characters", &q).render();
        assert!(html.contains(r#"data-href="/characters?order=desc&amp;page=2&amp;sort=modified""#));
        assert!(html.contains(r#"data-href="/characters?order=asc&amp;page=2""#));
        assert!(html.contains(r#"<option value="desc" data-href="/characters?order=desc&amp;page=2" selected>"#));
    }

    #[test]
    fn unrelated_params_survive_form_submission() {
        let q = params(&[("sort", "modified"), ("page", "2")]);
        let html = SortControls::new("/characters", &q).render();
        assert!(html.contains(r#"<input type="hidden" name="page" value="2">"#));
        assert!(!html.contains(r#"name="sort" value="#));
    }
}
