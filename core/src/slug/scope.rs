use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// What to do when two labels under the same parent path normalize to the
/// same slug.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Emit the duplicate slug as-is.
    Preserve,
    /// Emit the duplicate slug as-is and log a warning.
    Warn,
    /// Suffix later occurrences with `-2`, `-3`, ... and log a warning.
    #[default]
    Disambiguate,
}

/// Slugs already emitted under one parent path.
#[derive(Debug)]
pub struct SlugScope {
    parent: String,
    policy: CollisionPolicy,
    taken: BTreeSet<String>,
    collisions: usize,
}

impl SlugScope {
    pub fn new(parent: impl Into<String>, policy: CollisionPolicy) -> Self {
        Self {
            parent: parent.into(),
            policy,
            taken: BTreeSet::new(),
            collisions: 0,
        }
    }

    /// Returns the path segment to emit for `slug`. Always yields exactly one
    /// segment per call.
    pub fn claim(&mut self, slug: String) -> String {
        if self.taken.insert(slug.clone()) {
            return slug;
        }
        self.collisions += 1;

        match self.policy {
            CollisionPolicy::Preserve => slug,
            CollisionPolicy::Warn => {
                tracing::warn!(parent = %self.parent, slug = %slug, "duplicate slug emitted");
                slug
            }
            CollisionPolicy::Disambiguate => {
                let mut n: usize = 2;
                let segment = loop {
                    let candidate = if slug.is_empty() {
                        n.to_string()
                    } else {
                        format!("{}-{}", slug, n)
                    };
                    if self.taken.insert(candidate.clone()) {
                        break candidate;
                    }
                    n += 1;
                };
                tracing::warn!(
                    parent = %self.parent,
                    slug = %slug,
                    replacement = %segment,
                    "duplicate slug disambiguated"
                );
                segment
            }
        }
    }

    pub fn collisions(&self) -> usize {
        self.collisions
    }
}
