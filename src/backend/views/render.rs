/**
 * Template Rendering
 *
 * Every `.html` file under the template directory is parsed once at
 * start-up and shared between requests behind an `Arc`. Page templates
 * extend `base.html`.
 *
 * # Filters
 *
 * - `human_date` - formats an RFC 3339 timestamp as `02 Jan 2006 at 15:04` (UTC)
 */

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use axum::response::Html;
use chrono::{DateTime, Utc};
use tera::{Context, Tera, Value};

use crate::backend::auth::sessions::AppSession;
use crate::backend::error::BackendError;
use crate::backend::views::data::HtmlData;

const HUMAN_DATE_FORMAT: &str = "%d %b %Y at %H:%M";

/// The loaded template set
#[derive(Clone)]
pub struct Templates {
    tera: Arc<Tera>,
}

impl Templates {
    /// Parse every template under `dir`
    pub fn load(dir: &Path) -> Result<Self, tera::Error> {
        let pattern = format!("{}/**/*.html", dir.display());
        let mut tera = Tera::new(&pattern)?;
        tera.register_filter("human_date", human_date);

        tracing::info!(
            "Loaded {} templates from {}",
            tera.get_template_names().count(),
            dir.display()
        );

        Ok(Self { tera: Arc::new(tera) })
    }

    /// Render `page` with `data`
    pub fn render(&self, page: &str, data: &HtmlData) -> Result<String, BackendError> {
        let context = Context::from_serialize(data)?;
        Ok(self.tera.render(page, &context)?)
    }

    /// Fill the per-request part of the envelope and render `page`
    ///
    /// Consumes the session's flash message.
    pub async fn render_page(
        &self,
        session: &mut AppSession,
        path: &str,
        page: &str,
        data: HtmlData,
    ) -> Result<Html<String>, BackendError> {
        let flash = session.pop_flash().await?;
        let csrf_token = session.ensure_csrf_token().await?;

        let data = HtmlData {
            csrf_token,
            flash,
            logged_in: session.snapshot().is_logged_in(),
            path: path.to_string(),
            ..data
        };

        self.render(page, &data).map(Html)
    }
}

impl std::fmt::Debug for Templates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Templates")
            .field("names", &self.tera.get_template_names().collect::<Vec<_>>())
            .finish()
    }
}

fn human_date(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let raw = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("human_date expects a timestamp string"))?;

    let parsed = DateTime::parse_from_rfc3339(raw)
        .map_err(|e| tera::Error::msg(format!("human_date: {}", e)))?;

    Ok(Value::String(
        parsed.with_timezone(&Utc).format(HUMAN_DATE_FORMAT).to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn template_dir(files: &[(&str, &str)]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (name, body) in files {
            fs::write(dir.path().join(name), body).unwrap();
        }
        dir
    }

    #[test]
    fn test_human_date() {
        let created = Utc.with_ymd_and_hms(2024, 3, 7, 17, 5, 0).unwrap();
        let value = serde_json::to_value(created).unwrap();

        let formatted = human_date(&value, &HashMap::new()).unwrap();
        assert_eq!(formatted, Value::String("07 Mar 2024 at 17:05".to_string()));
    }

    #[test]
    fn test_human_date_rejects_non_strings() {
        assert!(human_date(&Value::Bool(true), &HashMap::new()).is_err());
    }

    #[test]
    fn test_render_with_base_layout() {
        let dir = template_dir(&[
            ("base.html", "<main>{% block main %}{% endblock %}</main>"),
            (
                "home.page.html",
                "{% extends \"base.html\" %}{% block main %}{{ snippets | length }} {{ flash }}{% endblock %}",
            ),
        ]);
        let templates = Templates::load(dir.path()).unwrap();

        let data = HtmlData {
            flash: Some("Saved".to_string()),
            ..HtmlData::default()
        };
        let html = templates.render("home.page.html", &data).unwrap();
        assert_eq!(html, "<main>0 Saved</main>");
    }

    #[test]
    fn test_render_escapes_html() {
        let dir = template_dir(&[("show.page.html", "{{ flash }}")]);
        let templates = Templates::load(dir.path()).unwrap();

        let data = HtmlData {
            flash: Some("<script>".to_string()),
            ..HtmlData::default()
        };
        assert_eq!(templates.render("show.page.html", &data).unwrap(), "&lt;script&gt;");
    }

    #[test]
    fn test_unknown_page_is_server_error() {
        let dir = template_dir(&[("base.html", "")]);
        let templates = Templates::load(dir.path()).unwrap();

        let err = templates.render("missing.page.html", &HtmlData::default()).unwrap_err();
        assert!(err.is_server_error());
    }

    #[test]
    fn test_parse_error_fails_load() {
        let dir = template_dir(&[("broken.html", "{% if %}")]);
        assert!(Templates::load(dir.path()).is_err());
    }
}
