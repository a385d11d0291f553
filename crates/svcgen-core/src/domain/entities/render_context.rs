//! Placeholder substitution.
//!
//! Templates reference values as `{{KEY}}`, where `KEY` is
//! `SCREAMING_SNAKE_CASE`. Rendering is a pure function of the template text
//! and the context, so it is tested without touching any filesystem.

use std::collections::BTreeMap;

use crate::domain::{
    entities::settings::ClusterSettings, error::DomainError, value_objects::ServiceName,
};

/// Version written into generated package manifests.
pub const APP_VERSION: &str = "0.1.0";

/// Context for template rendering.
///
/// ## Built-in Variables
///
/// | Variable | Default value |
/// |----------|---------------|
/// | `SERVICE_NAME` | user input |
/// | `NAMESPACE` | `core` |
/// | `DOMAIN` | `homelab.lan` |
/// | `IMAGE_REGISTRY` | `ghcr.io/your` |
/// | `INGRESS_CLASS` | `traefik` |
/// | `CONTAINER_PORT` | `8080` |
/// | `SERVICE_PORT` | `80` |
/// | `OTEL_ENDPOINT` | in-cluster collector |
/// | `SECRET_STORE` | `vault-kv` |
/// | `KV_PREFIX` | `kv/apps` |
/// | `REFRESH_INTERVAL` | `1h` |
/// | `APP_VERSION` | `0.1.0` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    variables: BTreeMap<String, String>,
}

impl RenderContext {
    pub fn new(name: &ServiceName, settings: &ClusterSettings) -> Self {
        let vars = [
            ("SERVICE_NAME", name.as_str().to_string()),
            ("NAMESPACE", settings.namespace.clone()),
            ("DOMAIN", settings.domain.clone()),
            ("IMAGE_REGISTRY", settings.image_registry.clone()),
            ("INGRESS_CLASS", settings.ingress_class.clone()),
            ("CONTAINER_PORT", settings.container_port.to_string()),
            ("SERVICE_PORT", ClusterSettings::SERVICE_PORT.to_string()),
            ("OTEL_ENDPOINT", settings.otel_endpoint.clone()),
            ("SECRET_STORE", settings.secret_store.clone()),
            ("KV_PREFIX", settings.kv_prefix.trim_end_matches('/').to_string()),
            ("REFRESH_INTERVAL", settings.refresh_interval.clone()),
            ("APP_VERSION", APP_VERSION.to_string()),
        ];

        Self {
            variables: vars.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Replace every `{{KEY}}` in `template`.
    ///
    /// The template is scanned once, left to right, and substituted values
    /// are never scanned again.
    ///
    /// # Edge Cases
    ///
    /// - `{{UNKNOWN}}` → `DomainError::UnresolvedPlaceholder`
    /// - `{ app: x }` (single braces) → copied verbatim
    /// - `{{{SERVICE_NAME}}}` → outer braces preserved, inner replaced
    /// - `{{not a key}}` → copied verbatim
    pub fn render(&self, template: &str) -> Result<String, DomainError> {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];

            match after.find("}}") {
                Some(end) if is_placeholder_key(&after[..end]) => {
                    let key = &after[..end];
                    let value = self.variables.get(key).ok_or_else(|| {
                        DomainError::UnresolvedPlaceholder {
                            key: key.to_string(),
                        }
                    })?;
                    out.push_str(value);
                    rest = &after[end + 2..];
                }
                _ => {
                    // Emit one brace and rescan from the next one.
                    out.push('{');
                    rest = &rest[start + 1..];
                }
            }
        }

        out.push_str(rest);
        Ok(out)
    }
}

fn is_placeholder_key(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::NamePolicy;

    fn ctx(name: &str) -> RenderContext {
        let name = ServiceName::parse(name, NamePolicy::Permissive).unwrap();
        RenderContext::new(&name, &ClusterSettings::default())
    }

    #[test]
    fn standard_variables() {
        let ctx = ctx("billing");
        assert_eq!(ctx.get("SERVICE_NAME"), Some("billing"));
        assert_eq!(ctx.get("NAMESPACE"), Some("core"));
        assert_eq!(ctx.get("CONTAINER_PORT"), Some("8080"));
        assert_eq!(ctx.get("SERVICE_PORT"), Some("80"));
        assert_eq!(ctx.get("APP_VERSION"), Some("0.1.0"));
    }

    #[test]
    fn replaces_every_occurrence() {
        let out = ctx("billing")
            .render("{{SERVICE_NAME}}-{{SERVICE_NAME}}.{{DOMAIN}}")
            .unwrap();
        assert_eq!(out, "billing-billing.homelab.lan");
    }

    #[test]
    fn single_braces_are_untouched() {
        let out = ctx("billing")
            .render("selector: { matchLabels: { app: {{SERVICE_NAME}} } }")
            .unwrap();
        assert_eq!(out, "selector: { matchLabels: { app: billing } }");
    }

    #[test]
    fn triple_braces_keep_outer_pair() {
        let out = ctx("billing").render("{{{SERVICE_NAME}}}").unwrap();
        assert_eq!(out, "{billing}");
    }

    #[test]
    fn non_key_text_is_copied() {
        let out = ctx("billing").render("{{ not a key }} and {{").unwrap();
        assert_eq!(out, "{{ not a key }} and {{");
    }

    #[test]
    fn unknown_key_is_an_error() {
        let err = ctx("billing").render("{{MISSING}}").unwrap_err();
        assert_eq!(
            err,
            DomainError::UnresolvedPlaceholder {
                key: "MISSING".into()
            }
        );
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let out = ctx("{{NAMESPACE}}").render("name: {{SERVICE_NAME}}").unwrap();
        assert_eq!(out, "name: {{NAMESPACE}}");
    }

    #[test]
    fn rendering_is_deterministic() {
        let template = "{{SERVICE_NAME}} {{NAMESPACE}} {{OTEL_ENDPOINT}}";
        assert_eq!(
            ctx("billing").render(template).unwrap(),
            ctx("billing").render(template).unwrap()
        );
    }
}
