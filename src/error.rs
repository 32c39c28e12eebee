use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum FormError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parser(#[from] ParserError),

    #[error("failed to read {path}")]
    #[diagnostic(
        code(io::read_failed),
        help("Check that the file exists and is readable.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("form #{index} ({title}) failed to convert")]
    #[diagnostic(code(convert::form_failed))]
    Convert {
        index: usize,
        title: String,
        #[source]
        #[diagnostic_source]
        source: CodegenError,
    },
}

#[derive(Error, Debug, Diagnostic, Clone)]
pub enum ParserError {
    #[error("line #{line}: unrecognized field type `{token}`")]
    #[diagnostic(
        code(parser::unrecognized_field_type),
        help("Field types are matched case-insensitively against the fixed type table, e.g. `text`, `int`, `dropdown`, `date range`.")
    )]
    UnrecognizedFieldType {
        #[source_code]
        src: NamedSource<String>,
        #[label("this line declares a field with an unknown type")]
        span: SourceSpan,
        line: usize,
        token: String,
    },

    #[error("line #{line}: option lines are ambiguous after a row with more than one field")]
    #[diagnostic(
        code(parser::ambiguous_options),
        help("Give each field that takes options its own line so every option has a single owner.")
    )]
    AmbiguousOptions {
        #[source_code]
        src: NamedSource<String>,
        #[label("cannot tell which field this option belongs to")]
        span: SourceSpan,
        line: usize,
    },

    #[error("line #{line}: indented line has nothing to attach to")]
    #[diagnostic(
        code(parser::orphaned_line),
        help("Indented lines belong to the field row or section declared above them.")
    )]
    OrphanedLine {
        #[source_code]
        src: NamedSource<String>,
        #[label("no preceding row or section owns this line")]
        span: SourceSpan,
        line: usize,
    },
}

#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum CodegenError {
    #[error("unrecognized output format `{name}`")]
    #[diagnostic(
        code(codegen::unsupported_output),
        help("Supported output formats are `Flutter` and `HTML`.")
    )]
    UnsupportedOutput { name: String },
}
