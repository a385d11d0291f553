//! Domain value objects: ServiceName and NamePolicy.
//!
//! # Design
//!
//! A service name ends up in four places at once: a directory under the apps
//! root, a container image tag, an ingress hostname and the `metadata.name`
//! of several Kubernetes objects. The strictest of those is the Service
//! name, which must be a DNS-1035 label (a DNS-1123 label that starts with a
//! letter), so that is what `NamePolicy::Strict` enforces.
//!
//! `NamePolicy::Permissive` interpolates whatever it is given. It only
//! refuses names that would resolve outside the apps directory.

use std::fmt;
use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

// ── NamePolicy ───────────────────────────────────────────────────────────────

/// How strictly a requested service name is checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamePolicy {
    /// Name must be a DNS-1035 label.
    #[default]
    Strict,
    /// Any text is accepted and interpolated verbatim.
    Permissive,
}

impl NamePolicy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Permissive => "permissive",
        }
    }
}

impl fmt::Display for NamePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ServiceName ──────────────────────────────────────────────────────────────

/// A service name that has passed the checks of a [`NamePolicy`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ServiceName(String);

impl ServiceName {
    /// Longest name Kubernetes accepts for a DNS label.
    pub const MAX_LEN: usize = 63;

    /// Check `raw` against `policy`.
    pub fn parse(raw: impl Into<String>, policy: NamePolicy) -> Result<Self, DomainError> {
        let raw = raw.into();
        let check = match policy {
            NamePolicy::Strict => service_label_violation(&raw),
            NamePolicy::Permissive => path_escape_violation(&raw),
        };

        match check {
            Some(reason) => Err(DomainError::InvalidServiceName { name: raw, reason }),
            None => Ok(Self(raw)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `true` if `s` is a valid DNS-1123 label.
pub(crate) fn is_dns_label(s: &str) -> bool {
    dns_label_violation(s).is_none()
}

fn dns_label_violation(s: &str) -> Option<String> {
    if s.is_empty() {
        return Some("name cannot be empty".into());
    }
    if s.len() > ServiceName::MAX_LEN {
        return Some(format!(
            "name is {} characters long, the limit is {}",
            s.len(),
            ServiceName::MAX_LEN
        ));
    }
    if let Some(bad) = s
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
    {
        return Some(format!(
            "character '{bad}' is not allowed (lowercase letters, digits and '-' only)"
        ));
    }
    if s.starts_with('-') || s.ends_with('-') {
        return Some("name must start and end with a letter or digit".into());
    }
    None
}

/// DNS-1035: a DNS-1123 label that also starts with a letter.
fn service_label_violation(s: &str) -> Option<String> {
    dns_label_violation(s).or_else(|| {
        s.starts_with(|c: char| !c.is_ascii_lowercase())
            .then(|| "name must start with a lowercase letter".into())
    })
}

fn path_escape_violation(s: &str) -> Option<String> {
    let path = Path::new(s);
    if path.has_root() {
        return Some("absolute paths would escape the apps directory".into());
    }
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Some("'..' would escape the apps directory".into());
    }
    None
}
