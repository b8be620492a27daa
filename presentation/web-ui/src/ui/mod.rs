use poem::handler;
use poem::web::Html;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// Serves the scan page.
#[handler]
pub fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
