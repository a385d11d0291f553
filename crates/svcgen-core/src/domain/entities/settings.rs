use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, value_objects::is_dns_label};

/// `true` if `s` is a DNS-1123 subdomain: dot-separated labels, 253 chars max.
fn is_dns_subdomain(s: &str) -> bool {
    !s.is_empty() && s.len() <= ClusterSettings::MAX_DOMAIN_LEN && s.split('.').all(is_dns_label)
}

/// Cluster-side values interpolated next to the service name.
///
/// The defaults describe the homelab cluster: a `core` namespace behind
/// Traefik, OTLP traffic going to the in-cluster collector, and secrets
/// synced from Vault through External Secrets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterSettings {
    /// Namespace every generated object lives in.
    pub namespace: String,
    /// Ingress hosts are `<service>.<domain>`.
    pub domain: String,
    /// Images are `<registry>/<service>:latest`.
    pub image_registry: String,
    pub ingress_class: String,
    pub container_port: u16,
    pub otel_endpoint: String,
    /// `ClusterSecretStore` the ExternalSecret reads from.
    pub secret_store: String,
    /// Secret keys are `<kv_prefix>/<service>/APP_SECRET`.
    pub kv_prefix: String,
    pub refresh_interval: String,
}

impl ClusterSettings {
    /// Port the generated Service exposes inside the cluster.
    pub const SERVICE_PORT: u16 = 80;

    /// Longest DNS-1123 subdomain Kubernetes accepts.
    pub const MAX_DOMAIN_LEN: usize = 253;

    /// Check every value before it is interpolated into YAML.
    ///
    /// Free-form values may not contain whitespace or control characters,
    /// since a newline would start a new YAML key.
    pub fn validate(&self) -> Result<(), DomainError> {
        fn invalid(field: &'static str, reason: String) -> Result<(), DomainError> {
            Err(DomainError::InvalidSettings { field, reason })
        }

        if !is_dns_label(&self.namespace) {
            return invalid(
                "namespace",
                format!("'{}' is not a valid DNS label", self.namespace),
            );
        }
        if !is_dns_subdomain(&self.domain) {
            return invalid(
                "domain",
                format!("'{}' is not a valid DNS subdomain", self.domain.escape_debug()),
            );
        }
        if self.container_port == 0 {
            return invalid("container_port", "port must be between 1 and 65535".into());
        }

        let free_form = [
            ("image_registry", &self.image_registry),
            ("ingress_class", &self.ingress_class),
            ("otel_endpoint", &self.otel_endpoint),
            ("secret_store", &self.secret_store),
            ("kv_prefix", &self.kv_prefix),
            ("refresh_interval", &self.refresh_interval),
        ];
        for (field, value) in free_form {
            if value.is_empty() {
                return invalid(field, "value cannot be empty".into());
            }
            if let Some(bad) = value
                .chars()
                .find(|c| c.is_whitespace() || c.is_control())
            {
                return invalid(
                    field,
                    format!(
                        "'{}' contains whitespace or control character {:?}",
                        value.escape_debug(),
                        bad
                    ),
                );
            }
        }

        Ok(())
    }

    /// Key the secret store entry for `service` must live under.
    pub fn secret_key(&self, service: &str) -> String {
        format!(
            "{}/{}/APP_SECRET",
            self.kv_prefix.trim_end_matches('/'),
            service
        )
    }
}

impl Default for ClusterSettings {
    fn default() -> Self {
        Self {
            namespace: "core".into(),
            domain: "homelab.lan".into(),
            image_registry: "ghcr.io/your".into(),
            ingress_class: "traefik".into(),
            container_port: 8080,
            otel_endpoint: "http://otel-collector.observability.svc.cluster.local:4318".into(),
            secret_store: "vault-kv".into(),
            kv_prefix: "kv/apps".into(),
            refresh_interval: "1h".into(),
        }
    }
}
