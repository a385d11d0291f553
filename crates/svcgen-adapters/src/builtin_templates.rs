//! Built-in service blueprint.
//!
//! Every generated service receives the same five files: a FastAPI entry
//! point, its package manifest, a container build file, and two Kubernetes
//! manifests. The templates are compiled into the binary so generation
//! never depends on anything outside the target directory.
//!
//! # Placeholders
//!
//! Templates use `{{KEY}}` placeholders resolved by
//! [`RenderContext`](svcgen_core::domain::RenderContext). YAML flow mappings
//! (`{ app: x }`) use single braces and are copied verbatim.

use tracing::{debug, instrument};

use svcgen_core::{
    application::ports::BlueprintSource,
    domain::{Blueprint, FileTemplate},
    error::SvcgenResult,
};

/// Name reported by `svcgen list`.
pub const BLUEPRINT_NAME: &str = "fastapi-service";

/// Bumped whenever the generated output changes.
pub const BLUEPRINT_VERSION: &str = "0.1.0";

// ── Templates ─────────────────────────────────────────────────────────────────

const MAIN_PY: &str = r#"from fastapi import FastAPI
app = FastAPI()
@app.get("/")
def hello():
    return {"service":"{{SERVICE_NAME}}","status":"ok"}
"#;

const PYPROJECT_TOML: &str = r#"[project]
name = "{{SERVICE_NAME}}"
version = "{{APP_VERSION}}"
dependencies = ["fastapi","uvicorn[standard]","opentelemetry-sdk","opentelemetry-instrumentation-fastapi"]
"#;

const DOCKERFILE: &str = r#"FROM python:3.12-slim
WORKDIR /app
COPY pyproject.toml .
RUN pip install --no-cache-dir fastapi uvicorn[standard] opentelemetry-sdk opentelemetry-instrumentation-fastapi
COPY . .
CMD ["uvicorn","main:app","--host","0.0.0.0","--port","{{CONTAINER_PORT}}"]
"#;

const DEPLOYMENT_YAML: &str = r#"apiVersion: apps/v1
kind: Deployment
metadata:
  name: {{SERVICE_NAME}}
  namespace: {{NAMESPACE}}
spec:
  replicas: 1
  selector: { matchLabels: { app: {{SERVICE_NAME}} } }
  template:
    metadata: { labels: { app: {{SERVICE_NAME}} } }
    spec:
      containers:
        - name: {{SERVICE_NAME}}
          image: {{IMAGE_REGISTRY}}/{{SERVICE_NAME}}:latest
          ports: [{ containerPort: {{CONTAINER_PORT}} }]
          env:
            - name: OTEL_EXPORTER_OTLP_ENDPOINT
              value: {{OTEL_ENDPOINT}}
          envFrom:
            - secretRef: { name: {{SERVICE_NAME}}-secrets }
---
apiVersion: v1
kind: Service
metadata: { name: {{SERVICE_NAME}}, namespace: {{NAMESPACE}} }
spec:
  selector: { app: {{SERVICE_NAME}} }
  ports: [{ port: {{SERVICE_PORT}}, targetPort: {{CONTAINER_PORT}} }]
---
apiVersion: networking.k8s.io/v1
kind: Ingress
metadata:
  name: {{SERVICE_NAME}}
  namespace: {{NAMESPACE}}
  annotations: { kubernetes.io/ingress.class: {{INGRESS_CLASS}} }
spec:
  rules:
    - host: {{SERVICE_NAME}}.{{DOMAIN}}
      http:
        paths:
          - path: /
            pathType: Prefix
            backend: { service: { name: {{SERVICE_NAME}}, port: { number: {{SERVICE_PORT}} } } }
  tls:
    - hosts: [{{SERVICE_NAME}}.{{DOMAIN}}]
      secretName: {{SERVICE_NAME}}-tls
"#;

const EXTERNALSECRET_YAML: &str = r#"apiVersion: external-secrets.io/v1beta1
kind: ExternalSecret
metadata:
  name: {{SERVICE_NAME}}-externalsecret
  namespace: {{NAMESPACE}}
spec:
  refreshInterval: {{REFRESH_INTERVAL}}
  secretStoreRef: { kind: ClusterSecretStore, name: {{SECRET_STORE}} }
  target: { name: {{SERVICE_NAME}}-secrets }
  data:
    - secretKey: APP_SECRET
      remoteRef: { key: {{KV_PREFIX}}/{{SERVICE_NAME}}/APP_SECRET }
"#;

// ── Public API ────────────────────────────────────────────────────────────────

/// The blueprint shipped with svcgen.
pub fn fastapi_service() -> Blueprint {
    Blueprint::new(BLUEPRINT_NAME, BLUEPRINT_VERSION)
        .with_template(FileTemplate::new(
            "main.py",
            MAIN_PY,
            "FastAPI app answering GET / with the service name",
        ))
        .with_template(FileTemplate::new(
            "pyproject.toml",
            PYPROJECT_TOML,
            "Python package manifest",
        ))
        .with_template(FileTemplate::new(
            "Dockerfile",
            DOCKERFILE,
            "Container image build",
        ))
        .with_template(FileTemplate::new(
            "k8s/deployment.yaml",
            DEPLOYMENT_YAML,
            "Deployment, Service and Ingress",
        ))
        .with_template(FileTemplate::new(
            "k8s/externalsecret.yaml",
            EXTERNALSECRET_YAML,
            "ExternalSecret syncing APP_SECRET from the secret store",
        ))
}

/// [`BlueprintSource`] backed by the compiled-in templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinBlueprint;

impl BuiltinBlueprint {
    pub fn new() -> Self {
        Self
    }
}

impl BlueprintSource for BuiltinBlueprint {
    #[instrument(skip(self))]
    fn load(&self) -> SvcgenResult<Blueprint> {
        let blueprint = fastapi_service();
        debug!(blueprint = %blueprint.id(), templates = blueprint.len(), "Loaded built-in blueprint");
        Ok(blueprint)
    }
}
