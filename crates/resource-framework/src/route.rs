//! # Route Templates & Path Resolution
//!
//! A [`RouteTemplate`] is a path such as `projects/:project_id/comments` with
//! zero or more `:name` placeholders. [`PathResolver`] substitutes those
//! placeholders from a resource's attributes.
//!
//! Resolution is a single left-to-right scan that stops at the first
//! placeholder it cannot fill. The outcome is a [`ResolvedPath`]: either the
//! full path, or [`ResolvedPath::Unresolved`] naming that first missing
//! parameter. A missing parameter is an ordinary outcome, not an error.
//!
//! ## Lookup order for `:name`
//!
//! 1. attribute `name`
//! 2. attribute `_name`
//! 3. the caller-supplied parent scope (`name`, then `_name`)
//!
//! Null and `false` values count as missing, so `false` falls through to
//! `_name`. Lists and nested resources never fill a placeholder. Substituted
//! values are percent-encoded.

use crate::attributes::Attributes;
use crate::class::ResourceClass;
use crate::value::Value;
use std::fmt::{self, Display};
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A parsed route template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTemplate {
    raw: String,
    segments: Vec<Segment>,
}

impl RouteTemplate {
    /// Parses `template`. A `:` not followed by a word character stays literal.
    pub fn parse(template: impl Into<String>) -> Self {
        let raw = template.into();
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = raw.char_indices().peekable();

        while let Some((_, c)) = chars.next() {
            let starts_param = c == ':' && chars.peek().is_some_and(|&(_, next)| is_param_char(next));
            if !starts_param {
                literal.push(c);
                continue;
            }
            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            let mut name = String::new();
            while let Some(&(_, next)) = chars.peek() {
                if !is_param_char(next) {
                    break;
                }
                name.push(next);
                chars.next();
            }
            segments.push(Segment::Param(name));
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self { raw, segments }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Placeholder names in template order.
    pub fn params(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Appends `/:param` to the template.
    pub fn with_member_param(&self, param: &str) -> Self {
        let base = self.raw.trim_end_matches('/');
        Self::parse(format!("{base}/:{param}"))
    }

    /// Renames placeholders called `from` that make up a whole path segment.
    ///
    /// Used to point a literal `:id` in a member template at the class's
    /// primary key.
    pub fn rename_segment_param(&self, from: &str, to: &str) -> Self {
        if from == to {
            return self.clone();
        }
        let rewritten: Vec<String> = self
            .raw
            .split('/')
            .map(|part| {
                if part.strip_prefix(':') == Some(from) {
                    format!(":{to}")
                } else {
                    part.to_string()
                }
            })
            .collect();
        Self::parse(rewritten.join("/"))
    }
}

impl Display for RouteTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for RouteTemplate {
    fn from(template: &str) -> Self {
        Self::parse(template)
    }
}

impl From<String> for RouteTemplate {
    fn from(template: String) -> Self {
        Self::parse(template)
    }
}

fn is_param_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Outcome of resolving a template against attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedPath {
    Resolved(String),
    Unresolved { missing: String },
}

impl ResolvedPath {
    pub fn is_resolved(&self) -> bool {
        matches!(self, ResolvedPath::Resolved(_))
    }

    pub fn missing(&self) -> Option<&str> {
        match self {
            ResolvedPath::Resolved(_) => None,
            ResolvedPath::Unresolved { missing } => Some(missing),
        }
    }
}

impl Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedPath::Resolved(path) => f.write_str(path),
            ResolvedPath::Unresolved { missing } => {
                write!(f, "<unknown path, missing `{missing}`>")
            }
        }
    }
}

/// Substitutes route placeholders. Stateless; all methods are pure.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathResolver;

impl PathResolver {
    pub fn resolve(template: &RouteTemplate, attributes: &Attributes) -> ResolvedPath {
        Self::resolve_scoped(template, attributes, None)
    }

    /// Like [`resolve`](Self::resolve), falling back to `scope` for parameters
    /// the attributes do not carry.
    pub fn resolve_scoped(
        template: &RouteTemplate,
        attributes: &Attributes,
        scope: Option<&Attributes>,
    ) -> ResolvedPath {
        let mut path = String::with_capacity(template.raw.len() + 8);
        for segment in &template.segments {
            match segment {
                Segment::Literal(text) => path.push_str(text),
                Segment::Param(name) => {
                    let value = lookup(attributes, name)
                        .or_else(|| scope.and_then(|scope| lookup(scope, name)));
                    match value {
                        Some(value) => path.push_str(&urlencoding::encode(&value)),
                        None => {
                            trace!(template = %template, missing = %name, "Placeholder missing");
                            return ResolvedPath::Unresolved {
                                missing: name.clone(),
                            };
                        }
                    }
                }
            }
        }
        ResolvedPath::Resolved(path)
    }

    /// Request path for an instance of `class`.
    ///
    /// The member template is tried when the primary key is set; when it does
    /// not resolve (or the key is absent) the collection template decides the
    /// outcome.
    pub fn request_path(
        class: &ResourceClass,
        attributes: &Attributes,
        scope: Option<&Attributes>,
    ) -> ResolvedPath {
        let has_primary_key = matches!(
            attributes.get(class.primary_key()),
            Some(value) if !value.is_null() && value.as_list().is_none()
        );
        if has_primary_key {
            let member = Self::resolve_scoped(class.resource_path(), attributes, scope);
            if member.is_resolved() {
                return member;
            }
        }
        Self::resolve_scoped(class.collection_path(), attributes, scope)
    }
}

fn lookup(attributes: &Attributes, name: &str) -> Option<String> {
    attributes
        .get(name)
        .and_then(Value::to_path_param)
        .or_else(|| {
            attributes
                .get(&format!("_{name}"))
                .and_then(Value::to_path_param)
        })
}
