use crate::error::{SvnError, SvnResult};
use regex::Regex;
use std::sync::LazyLock;

/// Horizontal-rule line svn log prints between entries: one or more `-`
/// occupying a whole line, consumed together with its line ending.
static RECORD_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^-+\r?$\n?").unwrap());

/// Trailing "N line(s)" annotation svn appends to the log header line,
/// removed together with the newline that follows it.
static LINE_COUNT_ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+\d+\s+lines?[ \t]*\r?\n").unwrap());

/// Numeric suffix of an `rN` revision marker.
static REVISION_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"r(\d+)").unwrap());

const LAST_CHANGED_LABEL: &str = "Last Changed Rev: ";

/// Represents one commit from svn log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// Numeric revision text, leading `r` marker stripped
    pub revision: String,
    /// Author with all whitespace removed
    pub author: String,
    /// Raw date field, exactly as the tool printed it
    pub date: String,
    /// Commit message, possibly empty, internal newlines preserved
    pub message: String,
}

/// File lists produced by one checkout run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutReport {
    pub new_files: Vec<String>,
    pub deleted_files: Vec<String>,
    pub changed_files: Vec<String>,
}

/// Lazy stream of commits out of one `svn log` invocation
///
/// Chunks are parsed one at a time as the iterator advances; records
/// come back in the order the tool printed them (newest first). The
/// stream is finite and cannot be restarted.
#[derive(Debug)]
pub struct Commits {
    chunks: std::vec::IntoIter<String>,
}

impl Commits {
    fn new(raw_log: &str) -> Self {
        // A chunk without a field separator is a splitting artifact
        // (leading/trailing emptiness), never a record
        let chunks: Vec<String> = RECORD_SEPARATOR
            .split(raw_log)
            .filter(|chunk| chunk.contains('|'))
            .map(str::to_owned)
            .collect();

        Self {
            chunks: chunks.into_iter(),
        }
    }
}

impl Iterator for Commits {
    type Item = Commit;

    fn next(&mut self) -> Option<Commit> {
        self.chunks.next().map(|chunk| parse_log_entry(&chunk))
    }
}

/// Parse raw `svn log` output into a lazy stream of commits
pub fn parse_log(raw_log: &str) -> Commits {
    Commits::new(raw_log)
}

/// Parse one separator-delimited chunk of `svn log` output
///
/// The chunk looks like:
///
/// ```text
/// r42 | jdoe | 2024-05-01 10:00:00 +0000 (Wed, 01 May 2024) | 2 lines
///
/// Fix the frobnicator
/// by refactoring it
/// ```
///
/// The trailing line-count annotation goes first, then the single
/// newline separating header from body is collapsed so the chunk splits
/// on `|` as one logical line; newlines inside a multi-line message stay
/// verbatim. Extraction is best-effort: missing fields come back empty
/// rather than failing the chunk.
pub fn parse_log_entry(chunk: &str) -> Commit {
    let cleaned = LINE_COUNT_ANNOTATION.replace(chunk, "");
    let cleaned = cleaned.replacen('\n', "", 1);

    let mut fields = cleaned.splitn(4, '|');

    let revision = fields.next().unwrap_or("").trim();
    let revision = revision.strip_prefix('r').unwrap_or(revision).to_string();
    let author: String = fields.next().unwrap_or("").split_whitespace().collect();
    let date = fields.next().unwrap_or("").to_string();
    let message = fields.next().unwrap_or("").to_string();

    Commit {
        revision,
        author,
        date,
        message,
    }
}

/// Extract the numeric revision id from `svn log -r HEAD` output
pub fn parse_head_revision(raw_log: &str) -> SvnResult<String> {
    let chunk = RECORD_SEPARATOR
        .split(raw_log)
        .find(|chunk| chunk.contains('|'))
        .ok_or_else(|| SvnError::Parse("no log entry in HEAD revision output".to_string()))?;

    let cleaned = LINE_COUNT_ANNOTATION.replace(chunk, "");
    let cleaned = cleaned.replacen('\n', "", 1);
    let field = cleaned.split('|').next().unwrap_or("");

    let captures = REVISION_MARKER.captures(field).ok_or_else(|| {
        SvnError::Parse(format!(
            "revision marker not found in {:?}",
            field.trim()
        ))
    })?;

    Ok(captures[1].to_string())
}

/// Scan `svn info` output for the last-changed revision field
///
/// Returns `"0"` when the label is absent; pollers treat that as
/// "nothing known yet" rather than a hard failure. The text after the
/// label is returned raw, trailing content included.
pub fn parse_last_changed_revision(raw_info: &str) -> String {
    raw_info
        .lines()
        .find_map(|line| line.strip_prefix(LAST_CHANGED_LABEL))
        .map(str::to_string)
        .unwrap_or_else(|| "0".to_string())
}

/// Classify checkout output lines by their status column
///
/// `A`/`D`/`U` entries carry a path starting at a fixed offset past the
/// status padding; every other line (summary, "Checked out revision N")
/// is ignored.
pub fn parse_checkout(output: &str) -> CheckoutReport {
    const PATH_OFFSET: usize = 5;

    let mut report = CheckoutReport::default();

    for line in output.lines() {
        let bucket = if line.starts_with("A ") {
            &mut report.new_files
        } else if line.starts_with("D ") {
            &mut report.deleted_files
        } else if line.starts_with("U ") {
            &mut report.changed_files
        } else {
            continue;
        };

        bucket.push(line.get(PATH_OFFSET..).unwrap_or("").to_string());
    }

    report
}
