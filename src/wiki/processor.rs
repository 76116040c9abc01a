//! File processing API for the infobox wiki format
//!
//! This module provides an extensible API for processing infobox sources
//! with different stages (lines, doc) and formats (simple, json).
//!
//! Format strings combine a stage and a format, e.g. `lines-simple` dumps
//! the classified lines of the lexer stage, `doc-json` serializes the
//! parsed, filtered document.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::wiki::ast::{ArrayItem, Infobox, SyntaxError, Value};
use crate::wiki::lexer::{lex, Line};
use crate::wiki::parser;

/// Represents the processing stage (what data to extract)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Lines,
    Doc,
}

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
}

/// Represents a complete processing specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "doc-json" or "lines-simple"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let Some((stage, format)) = format_str.split_once('-') else {
            return Err(ProcessingError::InvalidFormat(format_str.to_string()));
        };

        let stage = match stage {
            "lines" => ProcessingStage::Lines,
            "doc" => ProcessingStage::Doc,
            _ => return Err(ProcessingError::InvalidStage(stage.to_string())),
        };

        let format = match format {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            _ => return Err(ProcessingError::InvalidFormat(format.to_string())),
        };

        Ok(ProcessingSpec { stage, format })
    }

    /// Get all available processing specifications
    pub fn available_specs() -> Vec<ProcessingSpec> {
        vec![
            ProcessingSpec {
                stage: ProcessingStage::Lines,
                format: OutputFormat::Simple,
            },
            ProcessingSpec {
                stage: ProcessingStage::Lines,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Doc,
                format: OutputFormat::Simple,
            },
            ProcessingSpec {
                stage: ProcessingStage::Doc,
                format: OutputFormat::Json,
            },
        ]
    }

    fn format_string(&self) -> String {
        let stage = match self.stage {
            ProcessingStage::Lines => "lines",
            ProcessingStage::Doc => "doc",
        };
        let format = match self.format {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
        };
        format!("{}-{}", stage, format)
    }
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    InvalidFormat(String),
    InvalidStage(String),
    IoError(String),
    Syntax(SyntaxError),
}

impl std::error::Error for ProcessingError {}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::InvalidFormat(format) => write!(f, "Invalid format: {}", format),
            ProcessingError::InvalidStage(stage) => write!(f, "Invalid stage: {}", stage),
            ProcessingError::IoError(msg) => write!(f, "IO error: {}", msg),
            ProcessingError::Syntax(err) => write!(f, "Syntax error: {}", err),
        }
    }
}

/// Process an infobox file according to the given specification
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
) -> Result<String, ProcessingError> {
    let content = fs::read_to_string(file_path.as_ref())
        .map_err(|e| ProcessingError::IoError(e.to_string()))?;
    process_source(&content, spec)
}

/// Process infobox source text according to the given specification
pub fn process_source(source: &str, spec: &ProcessingSpec) -> Result<String, ProcessingError> {
    match spec.stage {
        ProcessingStage::Lines => {
            let lines = lex(source);
            format_lines(&lines, spec.format)
        }
        ProcessingStage::Doc => {
            let infobox = parser::parse(source).map_err(ProcessingError::Syntax)?;
            format_infobox(&infobox, spec.format)
        }
    }
}

/// Format classified lines according to the specified format
fn format_lines(lines: &[Line], format: OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => {
            let mut result = String::new();
            for line in lines {
                result.push_str(&format!(
                    "{:>4}  {:<10}  {}\n",
                    line.number,
                    format!("{:?}", line.kind),
                    line.text
                ));
            }
            Ok(result)
        }
        OutputFormat::Json => serde_json::to_string_pretty(lines)
            .map_err(|e| ProcessingError::IoError(e.to_string())),
    }
}

/// Format a parsed document according to the specified format
fn format_infobox(infobox: &Infobox, format: OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => {
            let mut result = String::new();
            if let Some(subject) = &infobox.subject_type {
                result.push_str(&format!("subject_type: {}\n", subject));
            }
            for entry in infobox.entries() {
                match &entry.value {
                    Value::Scalar(Some(v)) => {
                        result.push_str(&format!("{}: {}\n", entry.key, v));
                    }
                    Value::Scalar(None) => {}
                    Value::Array(items) => {
                        result.push_str(&format!("{}:\n", entry.key));
                        for item in items {
                            match item {
                                ArrayItem::Simple(v) => {
                                    result.push_str(&format!("  - {}\n", v));
                                }
                                ArrayItem::Keyed { key, value } => {
                                    result.push_str(&format!("  - {}: {}\n", key, value));
                                }
                            }
                        }
                    }
                }
            }
            Ok(result)
        }
        OutputFormat::Json => serde_json::to_string_pretty(infobox)
            .map_err(|e| ProcessingError::IoError(e.to_string())),
    }
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .into_iter()
        .map(|spec| spec.format_string())
        .collect()
}
