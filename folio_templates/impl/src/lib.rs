use std::sync::Arc;

use folio_templates_contracts::{Template, TemplateService, TEMPLATES};
use tera::Tera;

#[derive(Debug, Clone)]
pub struct TemplateServiceImpl {
    state: State,
}

impl TemplateServiceImpl {
    pub fn new() -> Self {
        Self {
            state: State::default(),
        }
    }
}

impl Default for TemplateServiceImpl {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
struct State(Arc<Tera>);

impl Default for State {
    fn default() -> Self {
        let mut tera = Tera::default();
        // template values come straight from the contact form
        tera.autoescape_on(vec![""]);

        for &(name, template) in TEMPLATES {
            tera.add_raw_template(name, template).unwrap();
        }

        Self(tera.into())
    }
}

impl TemplateService for TemplateServiceImpl {
    fn render<T: Template>(&self, template: &T) -> anyhow::Result<String> {
        let context = tera::Context::from_serialize(template)?;
        self.state.0.render(T::NAME, &context).map_err(Into::into)
    }
}
