use askama::Template;
use askama_web::WebTemplate;

#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Cleaned snapshot, pre-serialized for the map script.
    pub balloons_json: String,
}
