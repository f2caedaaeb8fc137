//! # Header Classification
//!
//! The first row of a training log names one column per machine, with the
//! date always in column 0 (whatever its label says). Two header
//! conventions exist in exported logs:
//!
//! 1. **Sparse**: a machine's paired duration column carries a blank
//!    header (or a bare duration marker such as `sec`) immediately after
//!    the machine's own header.
//! 2. **Fully labeled**: every column has a name, and duration columns
//!    are recognizable by a duration-marker substring in their label.
//!    These are dropped from the machine set entirely.
//!
//! The convention is detected once from the header shape; downstream
//! components only ever see the uniform [`MachineColumn`] list.

/// Substrings (lowercase) that mark a column as duration data.
const DURATION_MARKERS: &[&str] = &["sec", "duration"];

/// Trailing weight-unit suffixes stripped from machine display names.
const WEIGHT_SUFFIXES: &[&str] = &["lbs", "kg"];

/// One machine column discovered in the header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineColumn {
    /// Display name, trimmed and with any weight-unit suffix removed.
    pub name: String,
    /// Position of the primary value column in the header row.
    pub index: usize,
    /// Position of the paired duration column, when one exists.
    pub duration_index: Option<usize>,
}

/// Which header convention the classifier detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderConvention {
    /// Blank (or bare-marker) columns pair durations to the machine on
    /// their left.
    SparsePaired,
    /// Every column is named; duration-named columns are filtered out.
    FullyLabeled,
}

/// Result of classifying a header row.
#[derive(Debug, Clone)]
pub struct HeaderLayout {
    /// Index of the date column. Always 0 for this format.
    pub date_index: usize,
    /// Machine columns in source order.
    pub machines: Vec<MachineColumn>,
    /// Convention detected from the header shape.
    pub convention: HeaderConvention,
}

fn is_duration_header(header: &str) -> bool {
    let lowered = header.trim().to_lowercase();
    !lowered.is_empty() && DURATION_MARKERS.iter().any(|m| lowered.contains(m))
}

/// Strip a trailing, case-insensitive weight-unit suffix from a header.
fn strip_weight_suffix(header: &str) -> String {
    let trimmed = header.trim();
    for suffix in WEIGHT_SUFFIXES {
        if let Some(base) = strip_suffix_ignore_case(trimmed, suffix) {
            return base.trim().to_string();
        }
    }
    trimmed.to_string()
}

/// Case-insensitive `strip_suffix` that walks characters from the end,
/// so the cut index is always a char boundary of the original string.
/// Only ASCII case variants match; lookalikes such as U+212A KELVIN
/// SIGN are left alone.
fn strip_suffix_ignore_case<'a>(s: &'a str, suffix: &str) -> Option<&'a str> {
    let mut end = s.len();
    let mut chars = s.chars().rev();
    for expected in suffix.chars().rev() {
        let c = chars.next()?;
        if !c.eq_ignore_ascii_case(&expected) {
            return None;
        }
        end -= c.len_utf8();
    }
    Some(&s[..end])
}

/// Classify a header row into the date column and the machine column set.
///
/// Column 0 is the date column regardless of its label. The remaining
/// columns are scanned left to right; the pairing rules depend on the
/// detected [`HeaderConvention`].
pub fn classify(header: &[String]) -> HeaderLayout {
    let has_blanks = header.iter().skip(1).any(|h| h.trim().is_empty());
    let convention = if has_blanks {
        HeaderConvention::SparsePaired
    } else {
        HeaderConvention::FullyLabeled
    };

    let machines = match convention {
        HeaderConvention::SparsePaired => classify_sparse(header),
        HeaderConvention::FullyLabeled => classify_labeled(header),
    };

    log::debug!(
        "classified {} machine columns ({:?} convention)",
        machines.len(),
        convention
    );

    HeaderLayout {
        date_index: 0,
        machines,
        convention,
    }
}

fn classify_sparse(header: &[String]) -> Vec<MachineColumn> {
    let mut machines = Vec::new();
    let mut i = 1;
    while i < header.len() {
        let cell = header[i].trim();
        // Blank or duration-marker columns without a machine on their
        // left carry no usable data.
        if cell.is_empty() || is_duration_header(cell) {
            i += 1;
            continue;
        }

        let name = strip_weight_suffix(cell);
        // A header that is nothing but a unit suffix names no machine.
        if name.is_empty() {
            i += 1;
            continue;
        }

        let mut machine = MachineColumn {
            name,
            index: i,
            duration_index: None,
        };

        if let Some(next) = header.get(i + 1) {
            if next.trim().is_empty() || is_duration_header(next) {
                machine.duration_index = Some(i + 1);
                i += 1;
            }
        }

        machines.push(machine);
        i += 1;
    }
    machines
}

fn classify_labeled(header: &[String]) -> Vec<MachineColumn> {
    header
        .iter()
        .enumerate()
        .skip(1)
        .filter(|(_, h)| !h.trim().is_empty() && !is_duration_header(h))
        .filter_map(|(i, h)| {
            let name = strip_weight_suffix(h);
            (!name.is_empty()).then_some(MachineColumn {
                name,
                index: i,
                duration_index: None,
            })
        })
        .collect()
}
