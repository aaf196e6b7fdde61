//! Interactive lookup session over a `Dictionary`.

use crate::dictionary::Dictionary;
use std::io::{self, BufRead, Write};

/// Inputs that end the lookup loop.
pub const EXIT_COMMANDS: [&str; 2] = ["exit", "выход"];

/// Answers accepted as "yes" by `offer_dump`.
pub const YES_ANSWERS: [&str; 3] = ["yes", "y", "да"];

const PROMPT: &str = "Enter a word ('exit' or 'выход' to quit): ";

// Returns `None` at end of input.
fn read_answer<R>(input: &mut R) -> io::Result<Option<String>>
where
    R: BufRead,
{
    let mut buffer = String::new();
    if input.read_line(&mut buffer)? == 0 {
        return Ok(None);
    }
    Ok(Some(buffer.trim().to_string()))
}

/// Prints the height of both trees of `dictionary`.
pub fn report_heights<W>(dictionary: &Dictionary, output: &mut W) -> io::Result<()>
where
    W: Write,
{
    let (forward, reverse) = dictionary.heights();
    writeln!(output, "Forward tree height: {}", forward)?;
    writeln!(output, "Reverse tree height: {}", reverse)
}

/// Reads words from `input` and prints their translations until an exit command or the end of
/// input. Returns the number of words looked up.
pub fn lookup_loop<R, W>(dictionary: &Dictionary, mut input: R, output: &mut W) -> io::Result<usize>
where
    R: BufRead,
    W: Write,
{
    let mut lookups = 0;
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let word = match read_answer(&mut input)? {
            Some(word) => word,
            None => break,
        };
        if word.is_empty() {
            continue;
        }
        if EXIT_COMMANDS.contains(&word.as_str()) {
            break;
        }

        lookups += 1;
        match dictionary.translate(&word) {
            Some(translation) => writeln!(output, "Translation: {}", translation)?,
            None => {
                debug!("No translation for {:?}.", word);
                writeln!(output, "Word not found.")?
            },
        }
    }
    Ok(lookups)
}

/// Asks whether to print both trees and prints them if the answer is one of `YES_ANSWERS`.
/// Returns `true` if the trees were printed.
pub fn offer_dump<R, W>(dictionary: &Dictionary, mut input: R, output: &mut W) -> io::Result<bool>
where
    R: BufRead,
    W: Write,
{
    write!(output, "Show the trees? (yes/no) > ")?;
    output.flush()?;

    let answer = read_answer(&mut input)?.unwrap_or_default();
    if YES_ANSWERS.contains(&answer.to_lowercase().as_str()) {
        dictionary.write_trees(output)?;
        Ok(true)
    } else {
        writeln!(output, "Thanks for looking!")?;
        Ok(false)
    }
}
