use std::collections::HashMap;
use std::str::FromStr;

use chrono::NaiveDate;
use serde_json::Value;

use crate::pages::escape;
use crate::server::validation::is_valid_email;
use crate::store::Row;
use crate::types::{Icon, Table};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    LongText,
    Integer,
    Flag,
    /// `YYYY-MM-DD`.
    Date,
    Url,
    Email,
    Icon,
    Choice(&'static [&'static str]),
    /// Optional id of a row in another table, labelled by one of its columns.
    Reference { table: Table, label: &'static str },
}

#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl Field {
    const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
        }
    }

    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub const fn long(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::LongText)
    }

    pub const fn int(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Integer)
    }

    pub const fn flag(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Flag)
    }

    pub const fn date(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Date)
    }

    pub const fn url(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Url)
    }

    pub const fn email(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Email)
    }

    pub const fn icon(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Icon)
    }

    pub const fn choice(name: &'static str, label: &'static str, options: &'static [&'static str]) -> Self {
        Self::new(name, label, FieldKind::Choice(options))
    }

    pub const fn reference(name: &'static str, label: &'static str, table: Table, column: &'static str) -> Self {
        Self::new(name, label, FieldKind::Reference { table, label: column })
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

pub const DISPLAY_ORDER: Field = Field::int("display_order", "Display Order");
pub const IS_ACTIVE: Field = Field::flag("is_active", "Active");

/// Select options for reference fields, keyed by field name.
pub type Choices = HashMap<&'static str, Vec<(i64, String)>>;

/// Converts submitted form values into a row for `fields`. Blank optional
/// values become NULL; an unchecked flag is `false`.
pub fn parse_form(fields: &[Field], form: &HashMap<String, String>) -> Result<Row, String> {
    let mut row = Row::new();

    for field in fields {
        let raw = form.get(field.name).map(|v| v.trim()).unwrap_or_default();

        if field.kind == FieldKind::Flag {
            row.insert(field.name.into(), Value::Bool(matches!(raw, "on" | "true" | "1")));
            continue;
        }

        if raw.is_empty() {
            if field.required {
                return Err(format!("{} is required.", field.label));
            }
            let empty = match field.kind {
                FieldKind::Integer => Value::from(0),
                _ => Value::Null,
            };
            row.insert(field.name.into(), empty);
            continue;
        }

        let value = match field.kind {
            FieldKind::Integer | FieldKind::Reference { .. } => raw
                .parse::<i64>()
                .map(Value::from)
                .map_err(|_| format!("{} must be a whole number.", field.label))?,
            FieldKind::Date => {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map_err(|_| format!("{} must be a date (YYYY-MM-DD).", field.label))?;
                Value::from(raw)
            }
            FieldKind::Email if !is_valid_email(raw) => {
                return Err("Please enter a valid email address.".into());
            }
            FieldKind::Icon => {
                Icon::from_str(raw).map_err(|e| e.to_string())?;
                Value::from(raw)
            }
            FieldKind::Choice(options) if !options.contains(&raw) => {
                return Err(format!("{} must be one of: {}.", field.label, options.join(", ")));
            }
            _ => Value::from(raw),
        };
        row.insert(field.name.into(), value);
    }

    Ok(row)
}

fn value_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn select(name: &str, current: &str, options: impl Iterator<Item = (String, String)>, blank: bool) -> String {
    let mut html = format!(r#"<select name="{name}">"#);
    if blank {
        html.push_str(r#"<option value="">None</option>"#);
    }
    for (value, label) in options {
        let selected = if value == current { " selected" } else { "" };
        html.push_str(&format!(
            r#"<option value="{}"{selected}>{}</option>"#,
            escape(&value),
            escape(&label)
        ));
    }
    html.push_str("</select>");
    html
}

/// Renders labelled inputs for `fields`, seeded from `values` when editing.
pub fn render_inputs(fields: &[Field], values: Option<&Row>, choices: &Choices) -> String {
    let mut html = String::new();

    for field in fields {
        let current = value_text(values.and_then(|v| v.get(field.name)));
        let required = if field.required { " required" } else { "" };
        let star = if field.required { " *" } else { "" };
        let name = field.name;

        let input = match field.kind {
            FieldKind::Flag => {
                let checked = match values.and_then(|v| v.get(name)) {
                    Some(Value::Bool(b)) => *b,
                    None => true,
                    _ => false,
                };
                format!(
                    r#"<label class="check"><input type="checkbox" name="{name}"{}> {}</label>"#,
                    if checked { " checked" } else { "" },
                    field.label
                )
            }
            FieldKind::LongText => format!(
                r#"<label>{}{star}<textarea name="{name}" rows="5"{required}>{}</textarea></label>"#,
                field.label,
                escape(&current)
            ),
            FieldKind::Icon => format!(
                "<label>{}{star}{}</label>",
                field.label,
                select(
                    name,
                    &current,
                    Icon::ALL.iter().map(|i| (i.name().to_string(), format!("{} {}", i.glyph(), i.name()))),
                    !field.required,
                )
            ),
            FieldKind::Choice(options) => format!(
                "<label>{}{star}{}</label>",
                field.label,
                select(
                    name,
                    &current,
                    options.iter().map(|o| (o.to_string(), o.to_string())),
                    !field.required,
                )
            ),
            FieldKind::Reference { .. } => {
                let options = choices.get(name).cloned().unwrap_or_default();
                format!(
                    "<label>{}{star}{}</label>",
                    field.label,
                    select(
                        name,
                        &current,
                        options.into_iter().map(|(id, label)| (id.to_string(), label)),
                        !field.required,
                    )
                )
            }
            kind => {
                let input_type = match kind {
                    FieldKind::Integer => "number",
                    FieldKind::Date => "date",
                    FieldKind::Url => "url",
                    FieldKind::Email => "email",
                    _ => "text",
                };
                format!(
                    r#"<label>{}{star}<input type="{input_type}" name="{name}" value="{}"{required}></label>"#,
                    field.label,
                    escape(&current)
                )
            }
        };
        html.push_str(&input);
    }

    html
}
