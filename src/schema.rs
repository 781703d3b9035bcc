//! Client-side validation of the word/synonym form.
//!
//! A submission is accepted in one of three shapes. The shape is picked by
//! which fields were left empty, and errors are reported against it:
//!
//! 1. [`FormShape::Both`]: word and synonym both valid.
//! 2. [`FormShape::WordOnly`]: word valid, synonym exactly `""`.
//! 3. [`FormShape::SynonymOnly`]: synonym valid (up to 50 characters),
//!    word exactly `""`.
//!
//! A field is valid when, after lowercasing and then trimming, it is between
//! one and the shape's maximum length and does not read as a number. The
//! "exactly `""`" test looks at the raw input, so a field holding only
//! whitespace counts as filled: `("   ", "")` selects `WordOnly` and fails
//! the minimum length there.
//!
//! # Examples
//!
//! ```
//! use wordsyn::schema::{validate, FormShape};
//! use wordsyn::types::FormData;
//!
//! let form = validate(&FormData::new("  Cat ", "")).unwrap();
//! assert_eq!(form.shape(), FormShape::WordOnly);
//! assert_eq!(form.word(), Some("cat"));
//! assert_eq!(form.synonym(), None);
//! ```

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::FormData;

/// Maximum length of a field in the `Both` and `WordOnly` shapes.
pub const MAX_LENGTH: usize = 45;

/// Maximum length of the synonym in the `SynonymOnly` shape.
pub const SYNONYM_ONLY_MAX_LENGTH: usize = 50;

lazy_static! {
    static ref DECIMAL_LITERAL: Regex =
        Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$").unwrap();
    static ref RADIX_LITERAL: Regex =
        Regex::new(r"^0(?:[xX][0-9a-fA-F]+|[oO][0-7]+|[bB][01]+)$").unwrap();
    static ref INFINITY_LITERAL: Regex = Regex::new(r"^[+-]?Infinity$").unwrap();
}

/// One of the two form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Word,
    Synonym,
}

impl Field {
    /// Get the field name as used in messages and JSON.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Word => "word",
            Field::Synonym => "synonym",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The rule a field violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Constraint {
    Required,
    Type,
    MinLength,
    MaxLength,
    Numeric,
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: Field,
    pub constraint: Constraint,
    pub message: String,
}

impl FieldError {
    fn new<S: Into<String>>(field: Field, constraint: Constraint, message: S) -> Self {
        FieldError {
            field,
            constraint,
            message: message.into(),
        }
    }
}

/// The errors reported for a rejected form, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Keep the first error seen for each field, in field order.
    fn first_per_field(all: Vec<FieldError>) -> Self {
        let errors = [Field::Word, Field::Synonym]
            .into_iter()
            .filter_map(|field| all.iter().find(|e| e.field == field).cloned())
            .collect();
        ValidationErrors { errors }
    }

    /// Get the error reported for `field`, if any.
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    /// Iterate over the errors in field order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Get the number of fields with an error.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether no field has an error.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Which of the accepted shapes a form matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormShape {
    Both,
    WordOnly,
    SynonymOnly,
}

/// A form that passed validation, holding the normalized values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedForm {
    shape: FormShape,
    word: String,
    synonym: String,
}

impl ValidatedForm {
    /// Get the shape the form matched.
    pub fn shape(&self) -> FormShape {
        self.shape
    }

    /// The normalized word, or `None` in the synonym-only shape.
    pub fn word(&self) -> Option<&str> {
        match self.shape {
            FormShape::SynonymOnly => None,
            _ => Some(&self.word),
        }
    }

    /// The normalized synonym, or `None` in the word-only shape.
    pub fn synonym(&self) -> Option<&str> {
        match self.shape {
            FormShape::WordOnly => None,
            _ => Some(&self.synonym),
        }
    }

    /// The normalized values as a request body.
    pub fn to_form_data(&self) -> FormData {
        FormData::new(self.word.clone(), self.synonym.clone())
    }
}

/// A field as found in untyped input.
#[derive(Debug, Clone, Copy)]
enum RawField<'a> {
    Missing,
    NotString,
    Text(&'a str),
}

impl<'a> RawField<'a> {
    fn from_value(value: Option<&'a Value>) -> Self {
        match value {
            None => RawField::Missing,
            Some(Value::String(s)) => RawField::Text(s),
            Some(_) => RawField::NotString,
        }
    }
}

/// Whitespace as a browser's `String.prototype.trim` and `Number()` see it.
///
/// Unicode `White_Space` plus U+FEFF, minus U+0085.
pub fn is_browser_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

fn browser_trim(value: &str) -> &str {
    value.trim_matches(is_browser_whitespace)
}

/// Lowercase, then trim.
pub fn normalize(raw: &str) -> String {
    browser_trim(&raw.to_lowercase()).to_string()
}

/// Whether `value` converts to a number the way a browser's `Number()` does.
///
/// The empty string converts to zero and therefore counts as numeric.
pub fn is_numeric(value: &str) -> bool {
    let value = browser_trim(value);
    value.is_empty()
        || DECIMAL_LITERAL.is_match(value)
        || RADIX_LITERAL.is_match(value)
        || INFINITY_LITERAL.is_match(value)
}

/// Length in UTF-16 code units, as the browser counts it.
fn text_length(value: &str) -> usize {
    value.encode_utf16().count()
}

fn max_length_message(field: Field, max: usize) -> String {
    if max == SYNONYM_ONLY_MAX_LENGTH && field == Field::Synonym {
        format!("{field} must be maximum {max} characters")
    } else {
        format!("String must contain at most {max} character(s)")
    }
}

/// Check a field that must hold a valid term. Returns the normalized value.
fn check_term(
    field: Field,
    raw: RawField<'_>,
    max: usize,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let text = match raw {
        RawField::Missing => {
            errors.push(FieldError::new(
                field,
                Constraint::Required,
                format!("{field} is required"),
            ));
            return None;
        }
        RawField::NotString => {
            errors.push(FieldError::new(
                field,
                Constraint::Type,
                format!("{field} must be a string"),
            ));
            return None;
        }
        RawField::Text(text) => text,
    };

    let value = normalize(text);
    let before = errors.len();
    let length = text_length(&value);

    if length < 1 {
        errors.push(FieldError::new(
            field,
            Constraint::MinLength,
            format!("{field} must be minimum 1 character"),
        ));
    }
    if length > max {
        errors.push(FieldError::new(
            field,
            Constraint::MaxLength,
            max_length_message(field, max),
        ));
    }
    if is_numeric(&value) {
        errors.push(FieldError::new(
            field,
            Constraint::Numeric,
            "value should not be a number",
        ));
    }

    (errors.len() == before).then_some(value)
}

impl FormShape {
    /// The shape a submission is judged against: a field left exactly empty
    /// selects the single-field shape for the other one.
    fn select(word: RawField<'_>, synonym: RawField<'_>) -> Self {
        match (word, synonym) {
            (RawField::Text(""), RawField::Text(s)) if !s.is_empty() => FormShape::SynonymOnly,
            (RawField::Text(w), RawField::Text("")) if !w.is_empty() => FormShape::WordOnly,
            _ => FormShape::Both,
        }
    }
}

fn validate_raw(
    word: RawField<'_>,
    synonym: RawField<'_>,
) -> Result<ValidatedForm, ValidationErrors> {
    let shape = FormShape::select(word, synonym);
    let mut errors = Vec::new();

    let (word, synonym) = match shape {
        FormShape::Both => (
            check_term(Field::Word, word, MAX_LENGTH, &mut errors),
            check_term(Field::Synonym, synonym, MAX_LENGTH, &mut errors),
        ),
        FormShape::WordOnly => (
            check_term(Field::Word, word, MAX_LENGTH, &mut errors),
            Some(String::new()),
        ),
        FormShape::SynonymOnly => (
            Some(String::new()),
            check_term(Field::Synonym, synonym, SYNONYM_ONLY_MAX_LENGTH, &mut errors),
        ),
    };

    match (word, synonym) {
        (Some(word), Some(synonym)) => Ok(ValidatedForm {
            shape,
            word,
            synonym,
        }),
        _ => Err(ValidationErrors::first_per_field(errors)),
    }
}

/// Validate typed form input.
pub fn validate(data: &FormData) -> Result<ValidatedForm, ValidationErrors> {
    validate_raw(RawField::Text(&data.word), RawField::Text(&data.synonym))
}

/// Validate untyped JSON input.
///
/// Missing fields report `Required`, non-string fields report `Type`. A
/// value that is not an object is treated as having neither field.
pub fn validate_value(value: &Value) -> Result<ValidatedForm, ValidationErrors> {
    let object = value.as_object();
    let word = RawField::from_value(object.and_then(|o| o.get("word")));
    let synonym = RawField::from_value(object.and_then(|o| o.get("synonym")));
    validate_raw(word, synonym)
}
