//! Template renderer
//!
//! Fills a text template with a serializable model and writes the result
//! into a file. Templates are parsed once at construction; a template that
//! does not parse is a programming error and aborts startup.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;
use tracing::debug;

use crate::error::{FabgenError, FabgenResult};

/// A named helper available to templates as a filter (`{{ x | to_lower }}`)
pub type Helper = fn(&str) -> String;

/// Enumerated helper table handed to a renderer
pub type HelperTable = &'static [(&'static str, Helper)];

/// A parsed template plus the helpers it may call
pub struct TemplateRenderer {
    name: &'static str,
    env: Environment<'static>,
}

impl std::fmt::Debug for TemplateRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateRenderer")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl TemplateRenderer {
    /// Parse `source` and register `helpers`
    ///
    /// Undefined values are strict errors so a field missing from the model
    /// fails rendering instead of producing an empty string.
    pub fn new(name: &'static str, source: &'static str, helpers: HelperTable) -> FabgenResult<Self> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);

        for &(helper_name, helper) in helpers {
            env.add_filter(helper_name, move |value: String| helper(&value));
        }

        env.add_template(name, source)
            .map_err(|source| FabgenError::TemplateSyntax {
                template: name.to_string(),
                source,
            })?;

        Ok(Self { name, env })
    }

    /// Template name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Create or truncate `path` and render `model` into it
    ///
    /// Parent directories are not created. If rendering fails the created
    /// file is left in place, empty.
    pub fn render<S: Serialize>(&self, path: &Path, model: &S) -> FabgenResult<()> {
        let template = self.template()?;

        let file = File::create(path).map_err(|source| FabgenError::FileCreate {
            path: path.to_path_buf(),
            source,
        })?;
        let rendered = template
            .render(model)
            .map_err(|source| self.execution_error(path, source))?;

        let mut writer = BufWriter::new(file);
        writer.write_all(rendered.as_bytes())?;
        writer.flush()?;

        debug!(template = self.name, path = %path.display(), "rendered template");
        Ok(())
    }

    /// Render `model` into a string
    pub fn render_to_string<S: Serialize>(&self, model: &S) -> FabgenResult<String> {
        self.template()?
            .render(model)
            .map_err(|source| self.execution_error(&PathBuf::from(format!("<{}>", self.name)), source))
    }

    fn template(&self) -> FabgenResult<minijinja::Template<'_, '_>> {
        self.env
            .get_template(self.name)
            .map_err(|source| FabgenError::TemplateSyntax {
                template: self.name.to_string(),
                source,
            })
    }

    fn execution_error(&self, path: &Path, source: minijinja::Error) -> FabgenError {
        FabgenError::TemplateExecution {
            template: self.name.to_string(),
            path: path.to_path_buf(),
            source,
        }
    }
}
