use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};
use validator::{ValidationError, ValidationErrors};

use super::profile::{ActivityLevel, DietaryPreference, FocusArea, PrimaryGoal, Sex, WorkoutLocation};

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Field a choice validator can inspect. Absent values pass; `required`
/// handles those.
pub trait ChoiceField {
    fn choice(&self) -> Option<&str>;
}

impl ChoiceField for str {
    fn choice(&self) -> Option<&str> {
        Some(self)
    }
}

impl ChoiceField for String {
    fn choice(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: ChoiceField> ChoiceField for Option<T> {
    fn choice(&self) -> Option<&str> {
        self.as_ref().and_then(ChoiceField::choice)
    }
}

// The derive hands unwrapped `Option` fields over as `&&T`
impl<T: ChoiceField + ?Sized> ChoiceField for &T {
    fn choice(&self) -> Option<&str> {
        (**self).choice()
    }
}

/// List field checked element by element
pub trait ChoiceList {
    fn choices(&self) -> &[String];
}

impl ChoiceList for [String] {
    fn choices(&self) -> &[String] {
        self
    }
}

impl ChoiceList for Vec<String> {
    fn choices(&self) -> &[String] {
        self.as_slice()
    }
}

impl<T: ChoiceList> ChoiceList for Option<T> {
    fn choices(&self) -> &[String] {
        self.as_ref().map_or(&[], ChoiceList::choices)
    }
}

impl<T: ChoiceList + ?Sized> ChoiceList for &T {
    fn choices(&self) -> &[String] {
        (**self).choices()
    }
}

fn check_choice<T, V>(
    value: &T,
    parse: fn(&str) -> Option<V>,
    code: &'static str,
    message: &'static str,
) -> Result<(), ValidationError>
where
    T: ChoiceField + ?Sized,
{
    match value.choice() {
        Some(text) if parse(text).is_none() => Err(invalid(code, message)),
        _ => Ok(()),
    }
}

pub fn validate_gender<T: ChoiceField + ?Sized>(value: &T) -> Result<(), ValidationError> {
    check_choice(value, Sex::parse, "gender", "Invalid gender")
}

pub fn validate_activity_level<T: ChoiceField + ?Sized>(value: &T) -> Result<(), ValidationError> {
    check_choice(value, ActivityLevel::parse, "activity_level", "Invalid activity level")
}

pub fn validate_primary_goal<T: ChoiceField + ?Sized>(value: &T) -> Result<(), ValidationError> {
    check_choice(value, PrimaryGoal::parse, "primary_goal", "Invalid primary goal")
}

pub fn validate_workout_location<T: ChoiceField + ?Sized>(value: &T) -> Result<(), ValidationError> {
    check_choice(value, WorkoutLocation::parse, "workout_location", "Invalid workout location")
}

pub fn validate_dietary_preference<T: ChoiceField + ?Sized>(
    value: &T,
) -> Result<(), ValidationError> {
    check_choice(
        value,
        DietaryPreference::parse,
        "dietary_preference",
        "Invalid dietary preference",
    )
}

pub fn validate_focus_areas<T: ChoiceList + ?Sized>(values: &T) -> Result<(), ValidationError> {
    if values.choices().iter().all(|value| FocusArea::parse(value).is_some()) {
        Ok(())
    } else {
        Err(invalid("focus_areas", "Invalid focus area"))
    }
}

/// Flatten validation errors into one client-facing sentence.
///
/// Fields listed in `order` come first, in that order; anything else follows
/// alphabetically so the output is stable.
pub fn validation_message(errors: &ValidationErrors, order: &[&str]) -> String {
    let field_errors = errors.field_errors();

    let mut fields: Vec<String> = field_errors.keys().map(|field| field.to_string()).collect();
    fields.sort_by_key(|field| {
        let rank = order
            .iter()
            .position(|name| *name == field.as_str())
            .unwrap_or(order.len());
        (rank, field.clone())
    });

    let mut messages: Vec<String> = Vec::new();
    for field in &fields {
        if let Some(errors) = field_errors.get(field.as_str()) {
            for error in errors.iter() {
                let message = error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| format!("Invalid {}", field));
                if !messages.contains(&message) {
                    messages.push(message);
                }
            }
        }
    }

    messages.join(", ")
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

impl NumberOrText {
    /// Blank or unparseable text reads as missing, so range checks report it
    fn into_f64(self) -> Option<f64> {
        match self {
            NumberOrText::Number(value) => Some(value),
            NumberOrText::Text(text) => text.trim().parse::<f64>().ok(),
        }
    }
}

/// Accepts `72.5`, `"72.5"`, `""` or `null`
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberOrText>::deserialize(deserializer)?;
    Ok(value.and_then(NumberOrText::into_f64).filter(|value| value.is_finite()))
}

/// Like [`lenient_f64`], truncating any fractional part
pub fn lenient_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = lenient_f64(deserializer)?;
    Ok(value
        .map(f64::trunc)
        .filter(|value| *value >= f64::from(i32::MIN) && *value <= f64::from(i32::MAX))
        .map(|value| value as i32))
}

/// Accepts a calendar date (`2024-03-01`) or a full RFC 3339 timestamp
pub fn lenient_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    let Some(text) = value.map(|text| text.trim().to_string()).filter(|text| !text.is_empty()) else {
        return Ok(None);
    };

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(&text) {
        return Ok(Some(timestamp.with_timezone(&Utc)));
    }

    NaiveDate::parse_from_str(&text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| Some(midnight.and_utc()))
        .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {}", text)))
}
