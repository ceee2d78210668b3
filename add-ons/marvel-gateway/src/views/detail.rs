//! Character detail and comparison views.

use super::charts;
use super::html_escape;
use super::query::QueryParams;
use marvel_core::{prepare_data, radar_series, Character};

/// Name, picture, description, id and modification date.
pub fn character_detail(character: &Character) -> String {
    let name = html_escape(&character.label());
    let image = character
        .thumbnail_url()
        .map(|src| {
            format!(
                r#"<img src="{}" alt="{}" style="max-width: 320px; width: 100%; border-radius: 8px">"#,
                html_escape(&src),
                name
            )
        })
        .unwrap_or_default();
    format!(
        r#"<section>
  <p><a href="/characters">← Back to characters</a></p>
  <h2>{name}</h2>
  {image}
  <p>{description}</p>
  <p><small>ID: {id} · Modified: {modified}</small></p>
</section>"#,
        name = name,
        image = image,
        description = html_escape(&character.description()),
        id = html_escape(&character.id().unwrap_or_default()),
        modified = html_escape(&character.modified().unwrap_or_default()),
    )
}

/// Detail plus both capacity pies, fed the same prepared data.
pub fn character_page(character: &Character) -> String {
    let data = prepare_data(character.capacities().as_ref());
    format!(
        r#"{detail}
<h2>Capacities</h2>
<div style="display: flex">
  <div style="flex: 50%">
    <h3>Using SVG</h3>
    {svg}
  </div>
  <div style="flex: 50%">
    <h3>Using CSS</h3>
    {conic}
  </div>
</div>"#,
        detail = character_detail(character),
        svg = charts::svg_pie(&data),
        conic = charts::conic_pie(&data),
    )
}

fn selector(
    param: &str,
    label: &str,
    characters: &[Character],
    selected: Option<&str>,
    query: &QueryParams,
) -> String {
    let placeholder_selected = if selected.is_none() { " selected" } else { "" };
    let options: String = characters
        .iter()
        .filter_map(|c| c.link_id().map(|id| (id, c.label())))
        .map(|(id, name)| {
            format!(
                r#"<option value="{v}" data-href="{href}"{sel}>{name}</option>"#,
                v = html_escape(&id),
                href = html_escape(&query.href_with("/compare", param, &id)),
                sel = if selected == Some(id.as_str()) { " selected" } else { "" },
                name = html_escape(&name),
            )
        })
        .collect();
    format!(
        r#"<div class="selector-container">
    <label for="{param}-select">{label}</label>
    <select id="{param}-select" name="{param}" onchange="window.location.assign(this.selectedOptions[0].dataset.href)">
      <option value="" disabled{placeholder_selected}>Select a character</option>{options}
    </select>
  </div>"#,
        param = param,
        label = label,
        placeholder_selected = placeholder_selected,
        options = options,
    )
}

/// Comparison page. `left`/`right` are the resolved selections, if any.
pub fn compare_page(
    characters: &[Character],
    query: &QueryParams,
    left: Option<&Character>,
    right: Option<&Character>,
) -> String {
    let chart = match (left, right) {
        (Some(l), Some(r)) => radar_series(l, r).map(|series| charts::radar(&series)),
        _ => None,
    }
    .unwrap_or_else(|| format!("<p>{}</p>", charts::COMPARE_PLACEHOLDER));

    format!(
        r#"<div class="compare-page">
<h2>Character Comparison</h2>
<form class="selectors" method="get" action="/compare">
  {left}
  {right}
  <noscript><button type="submit">Compare</button></noscript>
</form>
<div class="chart-container">{chart}</div>
</div>"#,
        left = selector("left", "Choose Character 1:", characters, query.get("left"), query),
        right = selector("right", "Choose Character 2:", characters, query.get("right"), query),
        chart = chart,
    )
}
