//! Server-side rendering of the task list page.

use anyhow::Result;
use minijinja::{Environment, context};
use serde::Serialize;

use todos::session::Session;

const INDEX_TEMPLATE: &str = include_str!("templates/index.html");

/// One list row, pre-resolved for the template.
///
/// `editing` compares against the session marker per row, so duplicated ids
/// mark every matching row. That mirrors the id-reuse behavior of the store
/// and is intentional.
#[derive(Debug, Clone, Serialize)]
struct RowContext {
    id: i64,
    text: String,
    editing: bool,
}

/// Template engine wrapper around minijinja.
///
/// The `.html` template name keeps auto-escaping on, so task text cannot
/// inject markup.
struct PageEngine {
    env: Environment<'static>,
}

impl PageEngine {
    fn new() -> Self {
        let mut env = Environment::new();
        env.add_template("index.html", INDEX_TEMPLATE)
            .expect("index template should be valid");
        Self { env }
    }

    fn render_index(&self, session: &Session) -> Result<String> {
        let rows: Vec<RowContext> = session
            .tasks()
            .iter()
            .map(|task| RowContext {
                id: task.id,
                text: task.text.clone(),
                editing: session.editing() == Some(task.id),
            })
            .collect();

        let template = self.env.get_template("index.html")?;
        let rendered = template.render(context! {
            rows => rows,
            draft => session.draft(),
            edit_text => session.edit_text(),
        })?;
        Ok(rendered)
    }
}

/// Render the task list page for the current session state.
pub fn page(session: &Session) -> Result<String> {
    PageEngine::new().render_index(session)
}
