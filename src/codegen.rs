use crate::ast::{FormDocument, OutputFormat};
use crate::error::CodegenError;
use log::info;

/// Renders a parsed form as source code for the requested output format.
///
/// # Errors
///
/// Returns a `CodegenError` when `output` is not a supported format.
pub fn generate(form: &FormDocument, output: &OutputFormat) -> Result<Vec<u8>, CodegenError> {
    info!("converting {} to {}", form.title, output);

    match output {
        OutputFormat::Flutter => generate_flutter(form),
        OutputFormat::Html => generate_html(form),
        OutputFormat::Other(name) => Err(CodegenError::UnsupportedOutput { name: name.clone() }),
    }
}

fn generate_flutter(_form: &FormDocument) -> Result<Vec<u8>, CodegenError> {
    Ok(Vec::new())
}

fn generate_html(_form: &FormDocument) -> Result<Vec<u8>, CodegenError> {
    Ok(Vec::new())
}
