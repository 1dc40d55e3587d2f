//! Small English inflection helpers used to derive default collection paths
//! (`Foo::AccessRecord` → `access_records`) and default association targets
//! (`comments` → `Comment`). Case conversion is delegated to `heck`; only the
//! regular plural rules are covered.

use heck::{ToSnakeCase, ToUpperCamelCase};

/// `AccessRecord` → `access_record`, `HTTPLog` → `http_log`.
pub fn underscore(name: &str) -> String {
    name.to_snake_case()
}

/// `access_record` → `AccessRecord`.
pub fn camelize(name: &str) -> String {
    name.to_upper_camel_case()
}

pub fn pluralize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }
    if let Some(stem) = word.strip_suffix('y') {
        if !stem.ends_with(is_vowel) {
            return format!("{stem}ies");
        }
    }
    if ["s", "x", "z", "ch", "sh"].iter().any(|suffix| word.ends_with(suffix)) {
        return format!("{word}es");
    }
    format!("{word}s")
}

pub fn singularize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ies") {
        if !stem.is_empty() {
            return format!("{stem}y");
        }
    }
    for suffix in ["ches", "shes", "sses", "xes", "zes"] {
        if word.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }
    if word.ends_with("ss") {
        return word.to_string();
    }
    word.strip_suffix('s').unwrap_or(word).to_string()
}

/// Class name for an association name: `comments` → `Comment`, `role` → `Role`.
pub fn classify(name: &str) -> String {
    camelize(&singularize(name))
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}
