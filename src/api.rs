use crate::ast::FormDocument;
use crate::codegen;
use crate::error::FormError;
use crate::parser::Parser;
use log::info;
use std::fs;
use std::path::Path;

/// Parses a sheepform source string into a [`FormDocument`].
///
/// This is the primary entry point for processing form descriptions.
///
/// # Arguments
///
/// * `source` - The form description as a string.
/// * `file_name` - The name of the file being parsed (used for error reporting).
///
/// # Errors
///
/// Returns a `FormError` if parsing fails.
pub fn parse(source: &str, file_name: &str) -> Result<FormDocument, FormError> {
    let parser = Parser::new_with_name(source, file_name.to_string());
    Ok(parser.parse_document()?)
}

/// Reads and parses every file in `paths`, in order, stopping at the first
/// file that cannot be read or parsed.
///
/// # Errors
///
/// Returns a `FormError` carrying the failing path or parse diagnostic.
pub fn parse_files<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<FormDocument>, FormError> {
    let mut forms = Vec::with_capacity(paths.len());
    for path in paths {
        let name = path.as_ref().display().to_string();
        let source = fs::read_to_string(path).map_err(|source| FormError::Read {
            path: name.clone(),
            source,
        })?;
        forms.push(parse(&source, &name)?);
    }

    Ok(forms)
}

/// Runs the code generator over every form, stopping at the first failure.
///
/// The emitters are not wired to disk yet, so `out_dir` only shows up in the
/// logs; generated bytes are discarded.
///
/// # Errors
///
/// Returns a `FormError` naming the index and title of the failing form.
pub fn convert_forms(forms: &[FormDocument], out_dir: &Path) -> Result<(), FormError> {
    for (index, form) in forms.iter().enumerate() {
        let bytes = codegen::generate(form, &form.output).map_err(|source| FormError::Convert {
            index,
            title: form.title.clone(),
            source,
        })?;
        info!(
            "generated {} bytes for {} under {}",
            bytes.len(),
            form.title,
            out_dir.display()
        );
    }

    Ok(())
}

impl FormDocument {
    /// Serializes the form into a pretty-printed JSON string.
    ///
    /// # Errors
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Serializes the form into a YAML string.
    ///
    /// # Errors
    /// Returns a `serde_yaml::Error` if serialization fails.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}
