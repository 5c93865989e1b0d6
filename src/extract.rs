//! Frontmatter block extraction.
//!
//! A frontmatter block is the run of lines between an opening `---` on the
//! very first line of the file and the next `---` line. Delimiter lines are
//! compared after trimming surrounding whitespace.

/// Marker line that opens and closes a frontmatter block.
pub const DELIMITER: &str = "---";

/// Returns the text strictly between the opening and closing delimiters.
///
/// The result is empty when the file does not start with `---`, when no
/// closing delimiter exists, or when the block itself has no content. An
/// empty result means "no frontmatter"; this function never fails.
///
/// # Examples
///
/// ```
/// use validate_frontmatter::extract::extract_frontmatter;
///
/// let text = "---\nname: foo-bar\ndescription: hello\n---\n# Body\n";
/// assert_eq!(extract_frontmatter(text), "name: foo-bar\ndescription: hello");
/// assert_eq!(extract_frontmatter("# No frontmatter\n"), "");
/// ```
pub fn extract_frontmatter(text: &str) -> String {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.lines();

    match lines.next() {
        Some(first) if first.trim() == DELIMITER => {}
        _ => return String::new(),
    }

    let mut block: Vec<&str> = Vec::new();
    for line in lines {
        if line.trim() == DELIMITER {
            return block.join("\n");
        }
        block.push(line);
    }

    // Unterminated block.
    String::new()
}
