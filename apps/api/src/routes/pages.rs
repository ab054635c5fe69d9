//! The web page: an embedded single-page UI whose upload form also works
//! without JavaScript, via a plain form POST back to `/`.

use axum::{
    extract::{Multipart, State},
    response::{Html, IntoResponse, Response},
};

use crate::errors::AppError;
use crate::roast::handlers::read_upload;
use crate::roast::service::{resume_text_from, ResumeSource};
use crate::roast::tone::RoastTone;
use crate::state::AppState;

const INDEX_HTML: &str = include_str!("../ui/index.html");

/// GET /
/// Serves the upload page with an empty result slot.
pub async fn serve_index() -> Html<String> {
    Html(render_page(""))
}

/// POST /
/// Form-posted upload. Renders the roast, or the error, back into the page;
/// error pages keep the status code the API would have used.
pub async fn handle_form(State(state): State<AppState>, multipart: Multipart) -> Response {
    match roast_from_form(&state, multipart).await {
        Ok((roast, tone)) => Html(render_page(&result_block(&roast, tone))).into_response(),
        Err(err) => {
            let status = err.status_code();
            (status, Html(render_page(&error_block(&err)))).into_response()
        }
    }
}

async fn roast_from_form(
    state: &AppState,
    multipart: Multipart,
) -> Result<(String, RoastTone), AppError> {
    let (document, roast_type) = read_upload(multipart).await?;
    let tone = RoastTone::from_param(roast_type.as_deref());
    let text = resume_text_from(&state.config, ResumeSource::Document(document)).await?;
    let roast = state.roaster.roast(&text, tone).await?;
    Ok((roast, tone))
}

fn render_page(result: &str) -> String {
    INDEX_HTML.replace("{{result}}", result)
}

fn result_block(roast: &str, tone: RoastTone) -> String {
    format!(
        "<section class=\"result\"><h2>Your {} roast</h2><pre>{}</pre></section>",
        tone.as_str(),
        escape_html(roast)
    )
}

fn error_block(err: &AppError) -> String {
    format!(
        "<section class=\"result error\"><p>{}</p></section>",
        escape_html(&err.public_message())
    )
}

/// Minimal HTML escaping for model output interpolated into the page.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_html_metacharacters() {
        assert_eq!(
            escape_html(r#"<b>"roast" & 'spice'</b>"#),
            "&lt;b&gt;&quot;roast&quot; &amp; &#39;spice&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_escape_order_does_not_double_escape() {
        assert_eq!(escape_html("<"), "&lt;");
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_page_template_has_exactly_one_result_slot() {
        assert_eq!(INDEX_HTML.matches("{{result}}").count(), 1);
    }

    #[test]
    fn test_rendered_page_embeds_the_result_block() {
        let page = render_page(&result_block("Well <roasted>.", RoastTone::Savage));
        assert!(page.contains("Your savage roast"));
        assert!(page.contains("Well &lt;roasted&gt;."));
        assert!(!page.contains("{{result}}"));
    }
}
