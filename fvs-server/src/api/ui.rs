//! Survey page
//!
//! One parameterized page for every survey variant. The HTML is rendered
//! once from the [`SurveyConfig`] at startup; interaction lives in `app.js`.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use fvs_common::form::ResponderField;
use fvs_common::survey::{RatingCategory, SurveyConfig, RATING_VALUES};

use crate::AppState;

const APP_JS: &str = include_str!("../../ui/app.js");

/// GET /
pub async fn serve_index(State(state): State<AppState>) -> Html<String> {
    Html(state.index_html.to_string())
}

/// GET /static/app.js
pub async fn serve_app_js() -> Response {
    (
        StatusCode::OK,
        [("content-type", "application/javascript")],
        APP_JS,
    )
        .into_response()
}

/// Render the full survey page for `survey`
pub fn render_index(survey: &SurveyConfig) -> String {
    let mut html = String::with_capacity(32 * 1024);
    let title = escape_html(&survey.title);

    html.push_str(&format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
  body {{ font-family: system-ui, sans-serif; background: #f9fafb; margin: 0; padding: 2rem 1rem; color: #1f2937; }}
  main {{ max-width: 56rem; margin: 0 auto; }}
  h1 {{ text-align: center; }}
  .intro {{ text-align: center; color: #4b5563; }}
  .card {{ background: #fff; padding: 1.5rem; border-radius: .5rem; box-shadow: 0 1px 3px rgba(0,0,0,.1); margin-bottom: 2rem; }}
  .card label {{ display: block; font-size: .875rem; font-weight: 500; margin: .75rem 0 .25rem; }}
  .card input, .card textarea {{ width: 100%; box-sizing: border-box; padding: .5rem .75rem; border: 1px solid #d1d5db; border-radius: .375rem; }}
  .categories {{ display: grid; grid-template-columns: repeat(auto-fit, minmax(11rem, 1fr)); gap: 1rem; }}
  .rating {{ padding: .5rem .75rem; margin-right: .5rem; border: 1px solid #d1d5db; border-radius: .375rem; background: #fff; cursor: pointer; }}
  .rating.selected {{ background: {accent}; border-color: {accent}; color: #fff; }}
  .actions {{ text-align: center; }}
  #submit {{ padding: .75rem 1.5rem; background: {accent}; color: #fff; border: none; border-radius: .375rem; font-weight: 500; cursor: pointer; }}
  #submit:hover {{ background: {accent_hover}; }}
  #submit:disabled {{ opacity: .5; }}
  #status {{ margin-top: 2rem; padding: 1rem; border-radius: .375rem; }}
  #status.success {{ background: #dcfce7; color: #166534; }}
  #status.error {{ background: #fee2e2; color: #991b1b; }}
</style>
</head>
<body>
<main>
<h1>{title}</h1>
<p class="intro">{intro}</p>
<form id="survey" data-question-count="{count}" data-categories="{categories}" novalidate>
<section class="card">
<h2>Responder Information</h2>
"#,
        title = title,
        intro = escape_html(&survey.intro_text),
        accent = survey.theme.accent(),
        accent_hover = survey.theme.accent_hover(),
        count = survey.question_count(),
        categories = RatingCategory::ALL
            .iter()
            .map(RatingCategory::as_str)
            .collect::<Vec<_>>()
            .join(","),
    ));

    for field in ResponderField::ALL {
        let control = match field {
            ResponderField::Name | ResponderField::Experience => format!(
                r#"<input type="text" id="{key}" name="{key}" data-responder="{key}" required>"#,
                key = field.key()
            ),
            ResponderField::Qualifications | ResponderField::ExpertiseReason => format!(
                r#"<textarea id="{key}" name="{key}" data-responder="{key}" rows="3" required></textarea>"#,
                key = field.key()
            ),
        };
        html.push_str(&format!(
            "<label for=\"{key}\">{label}</label>{control}\n",
            key = field.key(),
            label = escape_html(field.label()),
            control = control
        ));
    }
    html.push_str("</section>\n");

    for (index, question) in survey.questions.iter().enumerate() {
        html.push_str(&format!(
            "<section class=\"card question\" data-question=\"{index}\"><h2>{text}</h2><div class=\"categories\">\n",
            index = index,
            text = escape_html(question)
        ));
        for category in RatingCategory::ALL {
            html.push_str(&format!("<div><label>{}</label>", category.label()));
            for value in RATING_VALUES {
                html.push_str(&format!(
                    r#"<button type="button" class="rating" data-question="{index}" data-category="{category}" data-value="{value}">{value}</button>"#,
                    index = index,
                    category = category.as_str(),
                    value = value
                ));
            }
            html.push_str("</div>");
        }
        html.push_str("</div></section>\n");
    }

    html.push_str(
        r#"<div class="actions"><button type="submit" id="submit">Submit Assessment</button></div>
</form>
<div id="status" hidden></div>
</main>
<script src="/static/app.js"></script>
</body>
</html>
"#,
    );

    html
}

/// Minimal escaping for text and attribute content
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
