use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{
    entities::{blueprint::Blueprint, render_context::RenderContext},
    error::DomainError,
};

/// Rendered files ready to be written.
///
/// This is the output of rendering a blueprint. It holds no behaviour
/// beyond validation; writing it is the application layer's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    root: PathBuf,
    files: Vec<RenderedFile>,
}

impl GenerationPlan {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            files: Vec::new(),
        }
    }

    /// Render every template of `blueprint` with `ctx`, rooted at `root`.
    pub fn render(
        blueprint: &Blueprint,
        ctx: &RenderContext,
        root: impl Into<PathBuf>,
    ) -> Result<Self, DomainError> {
        blueprint.validate()?;

        let mut plan = Self::new(root);
        for template in blueprint.templates() {
            let content = ctx.render(&template.source).map_err(|e| {
                DomainError::InvalidTemplate(format!("{}: {}", template.path, e))
            })?;
            debug!(path = %template.path, bytes = content.len(), "Template rendered");
            plan.add_file(template.path.as_path(), content);
        }

        plan.validate()?;
        Ok(plan)
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: String) {
        self.files.push(RenderedFile {
            path: path.into(),
            content,
        });
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: String) -> Self {
        self.add_file(path, content);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.files.is_empty() {
            return Err(DomainError::InvalidTemplate(
                "Generation plan is empty".into(),
            ));
        }

        let mut seen = HashSet::new();
        for file in &self.files {
            if file.path.has_root() {
                return Err(DomainError::AbsolutePathNotAllowed {
                    path: file.path.display().to_string(),
                });
            }

            if !seen.insert(file.path.as_path()) {
                return Err(DomainError::DuplicatePath {
                    path: file.path.display().to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn files(&self) -> impl Iterator<Item = &RenderedFile> {
        self.files.iter()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Full path of `file` under the plan root.
    pub fn target_path(&self, file: &RenderedFile) -> PathBuf {
        self.root.join(&file.path)
    }
}

/// A file whose content has been fully rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Relative to the plan root.
    pub path: PathBuf,
    pub content: String,
}

impl RenderedFile {
    pub fn size(&self) -> usize {
        self.content.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        ClusterSettings, FileTemplate, NamePolicy, ServiceName,
    };

    fn ctx() -> RenderContext {
        let name = ServiceName::parse("billing", NamePolicy::Strict).unwrap();
        RenderContext::new(&name, &ClusterSettings::default())
    }

    #[test]
    fn renders_every_template_in_order() {
        let blueprint = Blueprint::new("test", "0.1.0")
            .with_template(FileTemplate::new("a.txt", "{{SERVICE_NAME}}", "a"))
            .with_template(FileTemplate::new("k8s/b.yaml", "ns: {{NAMESPACE}}", "b"));

        let plan = GenerationPlan::render(&blueprint, &ctx(), "apps/billing").unwrap();

        let files: Vec<_> = plan.files().collect();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].path, PathBuf::from("a.txt"));
        assert_eq!(files[0].content, "billing");
        assert_eq!(files[1].content, "ns: core");
        assert_eq!(
            plan.target_path(files[1]),
            PathBuf::from("apps/billing/k8s/b.yaml")
        );
    }

    #[test]
    fn unresolved_placeholder_names_the_template() {
        let blueprint = Blueprint::new("test", "0.1.0")
            .with_template(FileTemplate::new("a.txt", "{{NOPE}}", "a"));

        let err = GenerationPlan::render(&blueprint, &ctx(), "apps/billing").unwrap_err();
        match err {
            DomainError::InvalidTemplate(msg) => {
                assert!(msg.contains("a.txt"));
                assert!(msg.contains("NOPE"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_plan_is_invalid() {
        assert!(GenerationPlan::new("apps/x").validate().is_err());
    }

    #[test]
    fn duplicate_files_are_invalid() {
        let plan = GenerationPlan::new("apps/x")
            .with_file("main.py", String::new())
            .with_file("main.py", String::new());
        assert!(matches!(
            plan.validate(),
            Err(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn absolute_files_are_invalid() {
        let plan = GenerationPlan::new("apps/x").with_file("/etc/passwd", String::new());
        assert!(matches!(
            plan.validate(),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }
}
