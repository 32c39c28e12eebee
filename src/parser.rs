use crate::ast::{Field, FieldKind, FormDocument, InputRow, OutputFormat, Section, Style};
use crate::error::ParserError;
use log::info;
use miette::{GraphicalReportHandler, NamedSource, Report, SourceSpan};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

/// One physical line of the source, with its byte offset retained for
/// diagnostics.
#[derive(Debug, Clone, Copy)]
struct Line<'a> {
    text: &'a str,
    offset: usize,
}

/// A line-oriented parser for the sheepform language. Every line is
/// classified by its leading marker and folded into the document in a single
/// forward pass.
#[derive(Debug)]
pub struct Parser<'a> {
    source: Arc<NamedSource<String>>,
    lines: Vec<Line<'a>>,
}

impl<'a> Parser<'a> {
    pub fn new(source_text: &'a str) -> Self {
        Self::new_with_name(source_text, "source.sheepform".to_string())
    }

    pub fn new_with_name(source_text: &'a str, name: String) -> Self {
        let source = Arc::new(NamedSource::new(name, source_text.to_string()));
        let mut lines = Vec::new();
        let mut offset = 0;
        for text in source_text.split('\n') {
            lines.push(Line { text, offset });
            offset += text.len() + 1;
        }

        Self { source, lines }
    }

    /// Classifies every line and assembles the document.
    ///
    /// Lines resolve in a fixed priority: blank, `style:`/`output:`
    /// directive, title or section header, root field row, tab-indented
    /// option or section row, double-tab section option, and finally a bare
    /// section header.
    pub fn parse_document(&self) -> Result<FormDocument, ParserError> {
        let mut style_value: Option<&str> = None;
        let mut output_value: Option<&str> = None;
        let mut title = String::new();
        let mut rows: Vec<InputRow> = Vec::new();
        let mut sections: Vec<Section> = Vec::new();
        // True while the most recent structural line declared or extended a
        // root row, so a following `\t<` line reads as one of its options
        // rather than as a section row.
        let mut root_run = false;

        let last = self.lines.len().saturating_sub(1);
        for (idx, line) in self.lines.iter().enumerate() {
            let text = line.text;

            // Blank lines never break an option run.
            if text.is_empty() || text == "\r" {
                continue;
            }

            // Directives are matched anywhere in the line and only until the
            // first hit; later occurrences fall through as structural text.
            if style_value.is_none() {
                if let Some(found) = style_pattern().captures(text).and_then(|c| c.get(1)) {
                    info!("using provided style: {}", found.as_str());
                    style_value = Some(found.as_str());
                    root_run = false;
                    continue;
                }
            }

            if output_value.is_none() {
                if let Some(found) = output_pattern().captures(text).and_then(|c| c.get(1)) {
                    info!("using provided output format: {}", found.as_str());
                    output_value = Some(found.as_str());
                    root_run = false;
                    continue;
                }
            }

            // The title always precedes sections and inputs, so only look
            // for it while nothing structural has been consumed. A line that
            // opens a run of `\t<` rows is a section header, not the title.
            if title.is_empty()
                && sections.is_empty()
                && rows.is_empty()
                && !is_field_line(text)
            {
                if idx == last {
                    title = text.to_string();
                    root_run = false;
                    continue;
                }

                if self.lines[idx + 1].text.starts_with("\t<") {
                    sections.push(Section {
                        title: text.to_string(),
                        rows: Vec::new(),
                    });
                } else {
                    title = text.to_string();
                }
                root_run = false;
                continue;
            }

            // Root-level field rows.
            if text.starts_with('<') {
                let fields = self.parse_fields(text, idx)?;
                if !fields.is_empty() {
                    rows.push(InputRow { fields });
                }
                root_run = true;
                continue;
            }

            // A `\t<` line is an option for the newest root field while a
            // root run is open, and a row of the newest section otherwise.
            if text.starts_with("\t<") {
                if root_run {
                    let row = rows.last_mut().ok_or_else(|| self.orphaned(idx))?;
                    let field = row.fields.last_mut().ok_or_else(|| self.orphaned(idx))?;
                    field.options.push(option_text(text));
                    continue;
                }

                let section = sections.last_mut().ok_or_else(|| self.orphaned(idx))?;
                let fields = self.parse_fields(text.trim_matches('\t'), idx)?;
                if !fields.is_empty() {
                    section.rows.push(InputRow { fields });
                }
                continue;
            }

            // A `\t\t<` line is an option for the newest section row. A row
            // holding more than one field leaves no single owner for it.
            if text.starts_with("\t\t<") {
                let section = sections.last_mut().ok_or_else(|| self.orphaned(idx))?;
                let row = section.rows.last_mut().ok_or_else(|| self.orphaned(idx))?;
                if row.fields.len() > 1 {
                    return Err(self.ambiguous(idx));
                }
                let field = row.fields.last_mut().ok_or_else(|| self.orphaned(idx))?;
                field.options.push(option_text(text));
                root_run = false;
                continue;
            }

            // Anything left opens a new section.
            sections.push(Section {
                title: text.to_string(),
                rows: Vec::new(),
            });
            root_run = false;
        }

        let style = match style_value {
            Some(name) => Style::from_name(name),
            None => {
                let style = Style::default();
                info!("no style provided, using default ({style})");
                style
            }
        };

        let output = match output_value {
            Some(name) => OutputFormat::from_name(name),
            None => {
                let output = OutputFormat::default();
                info!("no output format provided, using default ({output})");
                output
            }
        };

        Ok(FormDocument {
            title,
            style,
            output,
            rows,
            sections,
        })
    }

    /// Parses every `<...>` declaration packed into one line, in order.
    fn parse_fields(&self, text: &str, idx: usize) -> Result<Vec<Field>, ParserError> {
        let mut fields = Vec::new();
        for raw in text.split('<') {
            let fragment = raw
                .trim_start_matches([' ', '<'])
                .trim_end_matches(['>', ' ', '\t', '\r', '\n']);
            if fragment.is_empty() {
                continue;
            }

            let segments: Vec<&str> = fragment.split(',').collect();
            let field = match segments.as_slice() {
                [] => continue,
                [label] => Field::new(label.to_string(), FieldKind::Text),
                [label, kind] => {
                    Field::new(label.to_string(), self.resolve_field_type(kind, idx)?)
                }
                [label, kind, rest @ ..] => {
                    let mut field =
                        Field::new(label.to_string(), self.resolve_field_type(kind, idx)?);
                    field.attributes = parse_attributes(rest);
                    field
                }
            };
            fields.push(field);
        }

        Ok(fields)
    }

    fn resolve_field_type(&self, token: &str, idx: usize) -> Result<FieldKind, ParserError> {
        let lowered = token.trim().to_lowercase();
        FieldKind::from_name(&lowered).ok_or_else(|| ParserError::UnrecognizedFieldType {
            src: (*self.source).clone(),
            span: self.line_span(idx),
            line: idx,
            token: lowered,
        })
    }

    fn orphaned(&self, idx: usize) -> ParserError {
        ParserError::OrphanedLine {
            src: (*self.source).clone(),
            span: self.line_span(idx),
            line: idx,
        }
    }

    fn ambiguous(&self, idx: usize) -> ParserError {
        ParserError::AmbiguousOptions {
            src: (*self.source).clone(),
            span: self.line_span(idx),
            line: idx,
        }
    }

    fn line_span(&self, idx: usize) -> SourceSpan {
        let line = &self.lines[idx];
        (line.offset, line.text.len()).into()
    }
}

// Field and option lines never become titles or section headers.
fn is_field_line(text: &str) -> bool {
    text.starts_with('<') || text.starts_with("\t<") || text.starts_with("\t\t<")
}

fn option_text(text: &str) -> String {
    text.trim_matches(['\r', '\n', '\t', '<', '>']).to_string()
}

// TODO: decode the key=value pairs these trailing segments may carry
fn parse_attributes(_segments: &[&str]) -> BTreeMap<String, String> {
    BTreeMap::new()
}

fn style_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i:style):([A-Za-z]+)").expect("style pattern compiles"))
}

fn output_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i:output):([A-Za-z]+)").expect("output pattern compiles"))
}

// internal debug function for eyeballing reports during development
#[allow(dead_code)]
fn pretty_result(out: Result<FormDocument, ParserError>) -> String {
    match out {
        Ok(doc) => format!("{doc:#?}"),
        Err(err) => {
            let report: Report = Report::new(err);
            let handler = GraphicalReportHandler::new();
            let mut buffer = String::new();
            handler.render_report(&mut buffer, &*report).unwrap();
            buffer
        }
    }
}
