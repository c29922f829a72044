//! HTML export serialization
//!
//! Pipeline: FormDocument → (snapshot, rendered pages) → script literals → HTML document

use super::ExportOptions;
use crate::error::FormatError;
use crate::markup::escape_text;
use crate::render::{render_empty_state, render_page};
use formsmith_model::{FormDocument, Page};
use serde::Serialize;
use tracing::debug;

const EXPORT_CSS: &str = include_str!("../../../css/export.css");
const PAGER_JS: &str = include_str!("../../../js/pager.js");

/// The document as embedded in the artifact
#[derive(Serialize)]
struct Snapshot<'a> {
    title: &'a str,
    pages: &'a [Page],
}

/// Serialize a document into the standalone HTML artifact
pub fn export_html(doc: &FormDocument, options: &ExportOptions) -> Result<String, FormatError> {
    let title = if doc.title.is_empty() {
        options.default_title.as_str()
    } else {
        doc.title.as_str()
    };

    let page_markup = doc
        .pages
        .iter()
        .map(render_page)
        .collect::<Result<Vec<_>, _>>()?;

    let snapshot = Snapshot {
        title,
        pages: &doc.pages,
    };

    let html = wrap_in_document(
        &escape_text(title)?,
        &script_json(&snapshot)?,
        &script_json(&page_markup)?,
        &script_json(&render_empty_state()?)?,
        &script_json(&options.completion_notice)?,
    );

    debug!(pages = doc.page_count(), bytes = html.len(), "html export produced");
    Ok(html)
}

/// JSON that is safe to place inside a `<script>` element
///
/// `<`, `>` and `&` can only occur inside JSON strings, where their `\u` escapes mean the same
/// thing; escaping them keeps `</script>` and `<!--` out of the script body. U+2028 and U+2029
/// are escaped for pre-ES2019 engines, where they end a string literal.
pub fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String, FormatError> {
    let json = serde_json::to_string(value)
        .map_err(|e| FormatError::SerializationError(e.to_string()))?;

    let mut escaped = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => escaped.push_str("\\u003c"),
            '>' => escaped.push_str("\\u003e"),
            '&' => escaped.push_str("\\u0026"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            other => escaped.push(other),
        }
    }
    Ok(escaped)
}

fn wrap_in_document(
    title: &str,
    form_data: &str,
    page_markup: &str,
    empty_markup: &str,
    completion_notice: &str,
) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta name="generator" content="formsmith">
<title>{title}</title>
<style>
{css}</style>
</head>
<body>
<form class="fs-form" onsubmit="return false">
<h1 class="fs-form-title">{title}</h1>
<div class="fs-progress"><div id="progFill" class="fs-progress-fill"></div></div>
<div id="formPages"></div>
<div class="fs-nav">
<button type="button" onclick="prevPage()">Back</button>
<div id="counter" class="fs-counter"></div>
<button type="button" onclick="nextPage()">Next</button>
</div>
</form>
<script>
const formData = {form_data};
const pageMarkup = {page_markup};
const emptyMarkup = {empty_markup};
const completionNotice = {completion_notice};
{pager}</script>
</body>
</html>
"#,
        title = title,
        css = EXPORT_CSS,
        form_data = form_data,
        page_markup = page_markup,
        empty_markup = empty_markup,
        completion_notice = completion_notice,
        pager = PAGER_JS,
    )
}
