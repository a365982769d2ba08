use tracing::{info, warn};

use crate::error::{ImportError, Result};

/// Highest valid Unicode scalar value.
const MAX_CODEPOINT: u32 = 0x10FFFF;

/// One character entry parsed out of the names list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub codepoint: u32,
    pub description: String,
    /// Name of the enclosing Unicode block; empty before the first
    /// block header has been seen.
    pub block: String,
}

enum Line {
    /// `@@\t<start>\t<name>\t<end>`, switches the current block.
    BlockHeader(String),
    /// Comment, sub-entry, cross-reference, or a `<control>`-style
    /// pseudo-name.
    Skip,
    Data { codepoint: u32, description: String },
}

fn classify(raw: &str, line_no: usize) -> Result<Line> {
    let line = raw.trim_end_matches(['\r', '\n']);

    if let Some(rest) = line.strip_prefix("@@\t") {
        // remaining fields: start of range, block name, end of range
        let name = rest.split('\t').nth(1).ok_or_else(|| ImportError::Malformed {
            line: line_no,
            reason: "block header missing its name field".into(),
        })?;
        return Ok(Line::BlockHeader(name.to_string()));
    }

    if line.starts_with(['\t', '@', ';']) {
        return Ok(Line::Skip);
    }

    let mut fields = line.split('\t');
    let code_field = fields.next().unwrap_or_default();
    let description = fields.next().ok_or_else(|| ImportError::Malformed {
        line: line_no,
        reason: "data line missing its description field".into(),
    })?;
    if description.starts_with('<') {
        return Ok(Line::Skip);
    }

    let codepoint = u32::from_str_radix(code_field, 16).map_err(|_| ImportError::Malformed {
        line: line_no,
        reason: format!("code point field {:?} is not hexadecimal", code_field),
    })?;
    if codepoint > MAX_CODEPOINT {
        return Err(ImportError::Malformed {
            line: line_no,
            reason: format!("code point U+{:X} is outside the Unicode range", codepoint),
        });
    }

    Ok(Line::Data {
        codepoint,
        description: description.to_string(),
    })
}

/// Lazy, single-pass record stream over a line stream.
///
/// The current block name is the only carried state: block headers update
/// it, data lines inherit it, skip lines emit nothing.
pub struct Records<I> {
    lines: I,
    current_block: String,
    line_no: usize,
    lenient: bool,
}

/// Wrap a line stream in the names-list classification rules.
///
/// With `lenient` set, malformed lines are logged and skipped instead of
/// ending the run.
pub fn records<I>(lines: I, lenient: bool) -> Records<I>
where
    I: Iterator<Item = Result<String>>,
{
    Records {
        lines,
        current_block: String::new(),
        line_no: 0,
        lenient,
    }
}

impl<I> Iterator for Records<I>
where
    I: Iterator<Item = Result<String>>,
{
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let raw = match self.lines.next()? {
                Ok(raw) => raw,
                Err(e) => return Some(Err(e)),
            };
            self.line_no += 1;

            match classify(&raw, self.line_no) {
                Ok(Line::BlockHeader(name)) => {
                    info!("Reading block {}...", name);
                    self.current_block = name;
                }
                Ok(Line::Skip) => {}
                Ok(Line::Data {
                    codepoint,
                    description,
                }) => {
                    return Some(Ok(Record {
                        codepoint,
                        description,
                        block: self.current_block.clone(),
                    }))
                }
                Err(e) if self.lenient => warn!("Skipping: {}", e),
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

// ── Tests ──
