use crate::scan::name::OperatorName;
use regex::Regex;

/// Collect operator names declared in KL source text, in line order.
///
/// Only lines whose first characters are `operator` followed by whitespace are
/// considered. A declaration whose name does not look like an identifier
/// (e.g. `operator 123abc`) is skipped. Duplicates are kept.
///
/// Example:
/// operator deform(io Vec3 v) {   =>  deform
pub fn scan_operators(text: &str) -> Result<Vec<OperatorName>, regex::Error> {
    // Capture:
    // 1) rest: everything after the keyword and its whitespace
    const DECLARATION_RE: &str = r"^operator\s+(.*)$";
    // 1) name: identifier at the start of the rest
    const NAME_RE: &str = r"^([A-Za-z_][A-Za-z0-9_]*)";
    let declaration = Regex::new(DECLARATION_RE)?;
    let name_re = Regex::new(NAME_RE)?;

    let mut out = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let Some(rest) = declaration.captures(line).and_then(|c| c.get(1)) else {
            continue;
        };

        match name_re.captures(rest.as_str()).and_then(|c| c.get(1)) {
            Some(name) => out.push(OperatorName::new(name.as_str())),
            None => {
                tracing::trace!(line = lineno + 1, "operator declaration without identifier");
            }
        }
    }

    Ok(out)
}
