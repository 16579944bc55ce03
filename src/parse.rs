/// Split a user-supplied command line into argv form.
///
/// Deliberately naive: tokens are separated by runs of whitespace and there
/// is no quoting or escape mechanism, so an argument containing a space
/// cannot be expressed. Kept for compatibility with the historical
/// behaviour; callers wanting shell semantics can measure `sh -c ...`
/// at the cost of also measuring the shell.
pub fn tokenize_command(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}
