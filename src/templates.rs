//! Embedded template registration.
//!
//! Both page templates are compiled into the binary and registered with Tera
//! at startup; there is no template directory at runtime. Registration
//! failure is a startup error.

use tera::Tera;

use crate::error::AppError;

/// Landing page
const INDEX_HTML: &str = include_str!("../templates/index.html");

/// Counter page
const VISITS_HTML: &str = include_str!("../templates/visits.html");

/// Initialize the Tera template engine with all embedded templates.
pub fn init_templates() -> Result<Tera, AppError> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("index.html", INDEX_HTML),
        ("visits.html", VISITS_HTML),
    ])?;
    Ok(tera)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_renders_page_data() {
        let tera = init_templates().unwrap();
        let mut context = tera::Context::new();
        context.insert(
            "page",
            &serde_json::json!({
                "version": "3.1.4",
                "environment": "staging",
            }),
        );

        let html = tera.render("index.html", &context).unwrap();
        assert!(html.contains("3.1.4"));
        assert!(html.contains("staging"));
    }

    #[test]
    fn visits_renders_count() {
        let tera = init_templates().unwrap();
        let mut context = tera::Context::new();
        context.insert("count", &7u64);

        let html = tera.render("visits.html", &context).unwrap();
        assert!(html.contains("Visits: 7"));
    }

    #[test]
    fn unknown_template_is_an_error() {
        let tera = init_templates().unwrap();
        let context = tera::Context::new();
        assert!(tera.render("missing.html", &context).is_err());
    }
}
