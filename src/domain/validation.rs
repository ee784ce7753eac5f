use std::fmt;

/// Errors raised by value constructors (credentials, phone numbers).
///
/// Request graphs are not checked by constructors; they are walked by
/// [`Walker`] and reported as a [`ValidationResult`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidPhoneNumber { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// A single declarative constraint attached to a field.
///
/// Bounds are inclusive on both ends. Lengths are counted in Unicode scalar
/// values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    /// Value must be present and not blank.
    Required,
    /// String length must be within `min..=max`.
    Length { min: usize, max: usize },
    /// Number must be within `min..=max`.
    Range { min: f64, max: f64 },
    /// Collection must hold `min..=max` elements.
    Count { min: usize, max: usize },
}

/// One failed check: where it happened and what went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Ordered list of every violation found in one validation pass.
///
/// An empty result means the object graph is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    violations: Vec<Violation>,
}

impl ValidationResult {
    /// `true` when no check failed.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violations in traversal order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    /// Field paths in traversal order (a path repeats when several rules failed).
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.violations.iter().map(|v| v.path.as_str())
    }

    /// Returns `true` if some violation is reported at `path`.
    ///
    /// Collection indices are ignored when `path` has none, so
    /// `Content.Contacts.Name.FirstName` matches
    /// `Content.Contacts[0].Name.FirstName`.
    pub fn contains_path(&self, path: &str) -> bool {
        self.paths()
            .any(|p| p == path || (!path.contains('[') && strip_indices(p) == path))
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, violation) in self.violations.iter().enumerate() {
            if idx > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ValidationResult {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

fn strip_indices(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut in_index = false;
    for ch in path.chars() {
        match ch {
            '[' => in_index = true,
            ']' => in_index = false,
            _ if !in_index => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Types whose fields carry client-side constraints.
///
/// Implementations visit their own scalar fields first, then nested objects,
/// then collections.
pub trait Validate {
    fn validate(&self, walker: &mut Walker);

    /// Walk `self` from the root and collect every violation.
    fn validation_result(&self) -> ValidationResult {
        let mut walker = Walker::new();
        self.validate(&mut walker);
        walker.finish()
    }
}

impl<T: Validate + ?Sized> Validate for Box<T> {
    fn validate(&self, walker: &mut Walker) {
        (**self).validate(walker);
    }
}

/// Depth-first walker that evaluates rule lists and records violations.
#[derive(Debug, Default)]
pub struct Walker {
    segments: Vec<String>,
    result: ValidationResult,
}

impl Walker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> ValidationResult {
        self.result
    }

    /// Check a required string field.
    pub fn text(&mut self, field: &str, value: &str, rules: &[Rule]) {
        self.optional_text(field, Some(value), rules);
    }

    /// Check a string field that may be absent. Absent values only fail `Required`.
    pub fn optional_text(&mut self, field: &str, value: Option<&str>, rules: &[Rule]) {
        for rule in rules {
            match *rule {
                Rule::Required => {
                    if value.is_none_or(|v| v.trim().is_empty()) {
                        self.report(field, format!("{field} is required"));
                    }
                }
                Rule::Length { min, max } => {
                    let Some(value) = value else { continue };
                    let len = value.chars().count();
                    if len > max {
                        self.report(
                            field,
                            format!(
                                "Invalid value for {field}, length must be less than or equal to {max}."
                            ),
                        );
                    }
                    if len < min {
                        self.report(
                            field,
                            format!(
                                "Invalid value for {field}, length must be greater than or equal to {min}."
                            ),
                        );
                    }
                }
                Rule::Range { .. } | Rule::Count { .. } => {}
            }
        }
    }

    /// Check a numeric field that may be absent.
    pub fn number(&mut self, field: &str, value: Option<f64>, rules: &[Rule]) {
        for rule in rules {
            match *rule {
                Rule::Required => {
                    if value.is_none() {
                        self.report(field, format!("{field} is required"));
                    }
                }
                Rule::Range { min, max } => {
                    let Some(value) = value else { continue };
                    if !(min..=max).contains(&value) {
                        self.report(
                            field,
                            format!("Invalid value for {field}, must be a value between {min} and {max}."),
                        );
                    }
                }
                Rule::Length { .. } | Rule::Count { .. } => {}
            }
        }
    }

    /// Descend into a required nested object.
    pub fn nested<T: Validate + ?Sized>(&mut self, field: &str, value: &T) {
        self.segments.push(field.to_owned());
        value.validate(self);
        self.segments.pop();
    }

    /// Descend into an optional nested object; absent objects only fail `Required`.
    pub fn optional_nested<T: Validate>(&mut self, field: &str, value: Option<&T>, rules: &[Rule]) {
        match value {
            Some(value) => self.nested(field, value),
            None => {
                if rules.contains(&Rule::Required) {
                    self.report(field, format!("{field} is required"));
                }
            }
        }
    }

    /// Check collection-level rules, then walk every element in index order.
    pub fn list<T: Validate>(&mut self, field: &str, items: &[T], rules: &[Rule]) {
        self.count(field, items.len(), rules);
        for (idx, item) in items.iter().enumerate() {
            self.nested(&format!("{field}[{idx}]"), item);
        }
    }

    /// Check collection-level rules, then per-element string rules.
    pub fn texts(&mut self, field: &str, items: &[String], rules: &[Rule], item_rules: &[Rule]) {
        self.count(field, items.len(), rules);
        for (idx, item) in items.iter().enumerate() {
            self.text(&format!("{field}[{idx}]"), item, item_rules);
        }
    }

    fn count(&mut self, field: &str, len: usize, rules: &[Rule]) {
        for rule in rules {
            match *rule {
                Rule::Required => {
                    if len == 0 {
                        self.report(field, format!("{field} is required"));
                    }
                }
                Rule::Count { min, max } => {
                    if len < min || len > max {
                        self.report(
                            field,
                            format!("{field} must contain between {min} and {max} items, got {len}."),
                        );
                    }
                }
                Rule::Length { .. } | Rule::Range { .. } => {}
            }
        }
    }

    fn report(&mut self, field: &str, message: String) {
        let mut path = self.segments.join(".");
        if !path.is_empty() {
            path.push('.');
        }
        path.push_str(field);
        self.result.violations.push(Violation { path, message });
    }
}
