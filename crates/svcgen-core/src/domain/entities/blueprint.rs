use std::borrow::Cow;
use std::collections::HashSet;

use crate::domain::{entities::common::RelativePath, error::DomainError};

/// One file of a blueprint: where it goes and what it contains before
/// rendering.
///
/// `source` is `Cow` so the built-in templates stay zero-copy
/// `&'static str` while tests can build owned ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTemplate {
    pub path: RelativePath,
    pub source: Cow<'static, str>,
    /// One-line description shown by `svcgen list`.
    pub purpose: Cow<'static, str>,
}

impl FileTemplate {
    pub fn new(
        path: impl Into<RelativePath>,
        source: impl Into<Cow<'static, str>>,
        purpose: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            path: path.into(),
            source: source.into(),
            purpose: purpose.into(),
        }
    }
}

/// The ordered, fixed set of files generated for a service.
///
/// Order only affects the order of writes and of listings; every template
/// writes to its own path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blueprint {
    name: Cow<'static, str>,
    version: Cow<'static, str>,
    templates: Vec<FileTemplate>,
}

impl Blueprint {
    pub fn new(name: impl Into<Cow<'static, str>>, version: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            templates: Vec::new(),
        }
    }

    pub fn with_template(mut self, template: FileTemplate) -> Self {
        self.templates.push(template);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// `name@version`.
    pub fn id(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }

    pub fn templates(&self) -> impl Iterator<Item = &FileTemplate> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.templates.is_empty() {
            return Err(DomainError::EmptyBlueprint {
                blueprint: self.id(),
            });
        }

        let mut seen = HashSet::new();
        for template in &self.templates {
            if !seen.insert(template.path.as_path()) {
                return Err(DomainError::DuplicatePath {
                    path: template.path.to_string(),
                });
            }
        }

        Ok(())
    }
}
