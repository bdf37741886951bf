//! Console prompt for the documentation question

use std::io::{self, BufRead, Write};

/// The only answer that excludes documentation, matched case-insensitively.
const NEGATIVE_ANSWER: &str = "нет";

/// Interpret the operator's answer to «включать документацию?».
///
/// Only the literal «нет» declines; anything else, including an empty
/// answer, keeps documentation in the tree.
pub fn parse_answer(answer: &str) -> bool {
    answer.trim().to_lowercase() != NEGATIVE_ANSWER
}

/// Ask whether documentation rows should be included.
///
/// Reads one line from `input`; end of input counts as an empty answer and
/// therefore includes documentation.
pub fn ask_include_documentation(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<bool> {
    write!(output, "Включать документацию в дерево? (да/нет): ")?;
    output.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(parse_answer(&answer))
}
