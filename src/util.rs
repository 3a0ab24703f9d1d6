/// Removes every whitespace character from `source`.
///
/// The parser has no separate tokenizer, so whitespace is dropped before
/// parsing starts. This also joins identifier fragments: `s i n(0)` reads as
/// `sin(0)`.
///
/// # Example
/// ```
/// use complexpr::util::strip_whitespace;
///
/// assert_eq!(strip_whitespace(" 3 + 2 i\t* x\n"), "3+2i*x");
/// ```
#[must_use]
pub fn strip_whitespace(source: &str) -> String {
    source.chars().filter(|c| !c.is_whitespace()).collect()
}
