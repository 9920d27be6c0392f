//! Urlencoded form decoding for the customer forms.
//!
//! The `employee_id` field can arrive zero, one, or many times depending on
//! how many checkboxes were ticked. Decoding normalizes it into an explicit
//! ordered `Vec<i32>` (empty when absent) before anything downstream sees
//! it, so the creation operation never has to distinguish scalar from array.

use thiserror::Error;
use url::form_urlencoded;

/// Errors produced while decoding a customer form submission.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("missing form field '{0}'")]
    MissingField(&'static str),
    #[error("invalid value '{value}' for form field '{field}'")]
    InvalidNumber { field: &'static str, value: String },
}

/// Decoded customer form, shared by the create and edit submissions.
///
/// The edit form carries no employee checkboxes; for it `employee_ids`
/// decodes to the empty vec and is ignored by the update operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerForm {
    pub first_name: String,
    pub last_name: String,
    pub rating: i32,
    pub company_id: Option<i32>,
    pub employee_ids: Vec<i32>,
}

impl CustomerForm {
    /// Decode an `application/x-www-form-urlencoded` body.
    ///
    /// Repeated scalar fields keep their last occurrence; `employee_id`
    /// accumulates every occurrence in submission order. An empty
    /// `company_id` decodes to `None` (the "no company" option).
    pub fn parse(body: &[u8]) -> Result<Self, FormError> {
        let mut first_name = None;
        let mut last_name = None;
        let mut rating = None;
        let mut company_id = None;
        let mut employee_ids = Vec::new();

        for (key, value) in form_urlencoded::parse(body) {
            match key.as_ref() {
                "first_name" => first_name = Some(value.into_owned()),
                "last_name" => last_name = Some(value.into_owned()),
                "rating" => rating = Some(parse_number("rating", &value)?),
                "company_id" => {
                    company_id = if value.is_empty() {
                        None
                    } else {
                        Some(parse_number("company_id", &value)?)
                    };
                }
                "employee_id" => employee_ids.push(parse_number("employee_id", &value)?),
                _ => {}
            }
        }

        Ok(Self {
            first_name: first_name.ok_or(FormError::MissingField("first_name"))?,
            last_name: last_name.ok_or(FormError::MissingField("last_name"))?,
            rating: rating.ok_or(FormError::MissingField("rating"))?,
            company_id,
            employee_ids,
        })
    }
}

fn parse_number(field: &'static str, value: &str) -> Result<i32, FormError> {
    value.parse().map_err(|_| FormError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}
