use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A fully parsed form description.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct FormDocument {
    pub title: String,
    pub style: Style,
    pub output: OutputFormat,
    pub rows: Vec<InputRow>,
    pub sections: Vec<Section>,
}

/// A named group of input rows nested under the form.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub rows: Vec<InputRow>,
}

/// One physical line's worth of fields, rendered side by side.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct InputRow {
    pub fields: Vec<Field>,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Field {
    pub label: String,
    pub kind: FieldKind,
    pub attributes: BTreeMap<String, String>,
    pub options: Vec<String>,
}

impl Field {
    pub fn new(label: String, kind: FieldKind) -> Self {
        Self {
            label,
            kind,
            attributes: BTreeMap::new(),
            options: Vec::new(),
        }
    }
}

/// The widget kind behind a field declaration.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum FieldKind {
    #[default]
    Text,
    RichText,
    Integer,
    Double,
    Phone,
    Email,
    Dropdown,
    Date,
    DateRange,
    Time,
    Checkbox,
    TriStateCheckbox,
    FileUpload,
    ImageUpload,
    Slider,
    Captcha,
    Color,
    CreditCard,
    Address,
    SearchAndSelect,
    ProgressBar,
}

impl FieldKind {
    /// Looks up a type token. Tokens are trimmed and lowercased before the
    /// match, so `" Date Range "` and `"date range"` resolve identically.
    pub fn from_name(name: &str) -> Option<FieldKind> {
        let kind = match name.trim().to_lowercase().as_str() {
            "text" => FieldKind::Text,
            "rich text" => FieldKind::RichText,
            "int" => FieldKind::Integer,
            "double" => FieldKind::Double,
            "phone" => FieldKind::Phone,
            "email" => FieldKind::Email,
            "dropdown" => FieldKind::Dropdown,
            "date" => FieldKind::Date,
            "date range" => FieldKind::DateRange,
            "time" => FieldKind::Time,
            "checkbox" => FieldKind::Checkbox,
            "tri-state box" => FieldKind::TriStateCheckbox,
            "files" => FieldKind::FileUpload,
            "images" => FieldKind::ImageUpload,
            "slider" => FieldKind::Slider,
            "captcha" => FieldKind::Captcha,
            "color" => FieldKind::Color,
            "credit card" => FieldKind::CreditCard,
            "address" => FieldKind::Address,
            "search and select" => FieldKind::SearchAndSelect,
            "progress bar" => FieldKind::ProgressBar,
            _ => return None,
        };
        Some(kind)
    }
}

/// Visual style requested by a `style:` directive.
///
/// Unrecognized directive values are carried through as `Other` rather than
/// rejected at parse time.
#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum Style {
    #[default]
    Material,
    Mac,
    Windows,
    Other(String),
}

impl Style {
    pub fn from_name(name: &str) -> Style {
        match name {
            "Material" => Style::Material,
            "Mac" => Style::Mac,
            "Windows" => Style::Windows,
            other => Style::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Style::Material => "Material",
            Style::Mac => "Mac",
            Style::Windows => "Windows",
            Style::Other(name) => name,
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Target language requested by an `output:` directive.
#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    Flutter,
    Html,
    Other(String),
}

impl OutputFormat {
    pub fn from_name(name: &str) -> OutputFormat {
        match name {
            "Flutter" => OutputFormat::Flutter,
            "HTML" => OutputFormat::Html,
            other => OutputFormat::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            OutputFormat::Flutter => "Flutter",
            OutputFormat::Html => "HTML",
            OutputFormat::Other(name) => name,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
