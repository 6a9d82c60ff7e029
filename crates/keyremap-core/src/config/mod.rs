//! Lenient line-oriented config parser.
//!
//! Each logical entry is one line of the shape
//!
//! ```text
//! "<keycode>": ["<modifier-spec>", "<output-text>"]
//! ```
//!
//! or, with no modifier requirement,
//!
//! ```text
//! "<keycode>": ["<output-text>"]
//! ```
//!
//! # Why not a JSON parser?
//!
//! The format cosmetically resembles JSON but is **not** JSON: trailing
//! commas and duplicate keys are both used intentionally (duplicate key
//! codes accumulate alternatives rather than overwriting – that is how a
//! shift-aware line and a bare fallback line coexist for the same physical
//! key).  A strict JSON library would either reject the file or collapse the
//! duplicates, so the parser scans lines by hand.
//!
//! # Leniency
//!
//! The parser is lenient by design, not strict: a config author who typos a
//! line loses that single mapping rather than the whole file failing to
//! load.  Malformed lines are recovered locally by skipping them (reported
//! at `debug!` level); an empty resulting table is a legitimate outcome, not
//! an error.
//!
//! # Modifier spec matching
//!
//! The modifier field is free text matched by **substring containment**, not
//! exact tokenization: a field containing `shift` anywhere raises the shift
//! requirement.  Recognised substrings: `shift`, `control`/`ctrl`,
//! `command`/`cmd`, `option`/`alt`.  `"shift+command"` therefore works, and
//! so does `"Shift and Command"` as long as the casing matches – matching is
//! case-sensitive, exactly as documented in the default config template.

use thiserror::Error;
use tracing::debug;

use crate::domain::table::{CandidateMapping, KeyCode, MappingTable, ModifierSet};

/// Characters stripped from the ends of quoted fields inside an entry.
const FIELD_TRIM: &[char] = &[' ', '\t', '"'];

/// Why a non-skippable line could not be turned into a mapping.
///
/// Never surfaced as a failure of the whole load; the parser recovers by
/// dropping the offending line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MalformedLine {
    /// No quoted key code was found at the start of the line.
    #[error("no quoted keycode")]
    MissingKeycode,

    /// The quoted key code is not a decimal integer.
    #[error("keycode {0:?} is not a decimal integer")]
    InvalidKeycode(String),

    /// The bracketed candidate list is missing or unterminated.
    #[error("no bracketed candidate list")]
    MissingBrackets,
}

/// Parses config text into a [`MappingTable`].
///
/// Infallible over text: unusable lines are skipped (see [`MalformedLine`])
/// and the table may legitimately end up empty.  Opening the source is the
/// caller's concern.
pub fn parse(source: &str) -> MappingTable {
    let mut table = MappingTable::new();

    for (number, raw) in source.lines().enumerate() {
        match parse_line(raw) {
            Ok(Some((key_code, candidate))) => table.insert(key_code, candidate),
            Ok(None) => {}
            Err(reason) => {
                debug!(line = number + 1, %reason, "skipping malformed config line");
            }
        }
    }

    table
}

/// Parses a single line.
///
/// Returns `Ok(None)` for lines that carry no entry (blank lines, comments,
/// object delimiters) and `Err` for lines that look like entries but cannot
/// be parsed.
fn parse_line(raw: &str) -> Result<Option<(KeyCode, CandidateMapping)>, MalformedLine> {
    let line = raw.trim();

    // Blank lines, `//` comments, and the `{` / `}` of the surrounding
    // object shape are all structural noise.
    if line.is_empty() || line.starts_with('/') || line.starts_with('{') || line.starts_with('}') {
        return Ok(None);
    }

    // Key code: the text between the first two double quotes, as a decimal
    // integer.
    let first_quote = line.find('"').ok_or(MalformedLine::MissingKeycode)?;
    let after_first = &line[first_quote + 1..];
    let second_quote = after_first.find('"').ok_or(MalformedLine::MissingKeycode)?;
    let keycode_str = &after_first[..second_quote];
    let key_code: KeyCode = keycode_str
        .parse()
        .map_err(|_| MalformedLine::InvalidKeycode(keycode_str.to_string()))?;

    // Candidate list: the text between the first `[` and the first `]`.
    let bracket_start = line.find('[').ok_or(MalformedLine::MissingBrackets)?;
    let bracket_end = line.find(']').ok_or(MalformedLine::MissingBrackets)?;
    if bracket_end < bracket_start {
        return Err(MalformedLine::MissingBrackets);
    }
    let content = &line[bracket_start + 1..bracket_end];

    // Two-element form splits on the *first* comma: modifier spec left,
    // output text right.  One-element form is an unconditional output.
    let candidate = match content.find(',') {
        Some(comma) => {
            let spec = content[..comma].trim_matches(FIELD_TRIM);
            let output = content[comma + 1..].trim_matches(FIELD_TRIM);
            CandidateMapping {
                required: modifier_spec(spec),
                output: output.to_string(),
            }
        }
        None => CandidateMapping::unconditional(content.trim_matches(FIELD_TRIM)),
    };

    Ok(Some((key_code, candidate)))
}

/// Raises requirement flags by substring containment over the modifier spec.
fn modifier_spec(spec: &str) -> ModifierSet {
    ModifierSet {
        shift: spec.contains("shift"),
        control: spec.contains("control") || spec.contains("ctrl"),
        command: spec.contains("command") || spec.contains("cmd"),
        option: spec.contains("option") || spec.contains("alt"),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
