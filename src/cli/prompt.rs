// batch-resizer/src/cli/prompt.rs
use crate::core::{ResizeError, Result};
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Line-oriented question/answer over any reader and writer.
///
/// Every question accepts an empty answer as "use the default". End of
/// input is treated as the operator walking away: `ResizeError::Cancelled`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    pub fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ResizeError::Cancelled);
        }

        let answer = line.trim();
        if answer.is_empty() {
            Ok(None)
        } else {
            Ok(Some(answer.to_string()))
        }
    }

    pub fn ask_or(&mut self, question: &str, default: &str) -> Result<String> {
        Ok(self.ask(question)?.unwrap_or_else(|| default.to_string()))
    }

    pub fn ask_number<T: FromStr>(&mut self, question: &str, default: T) -> Result<T> {
        match self.ask(question)? {
            None => Ok(default),
            Some(answer) => answer
                .parse()
                .map_err(|_| ResizeError::InvalidNumber(answer)),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn empty_answer_falls_back_to_default() {
        let mut p = prompter("\n   \n");
        assert_eq!(p.ask_or("Folder: ", "input_images").unwrap(), "input_images");
        assert_eq!(p.ask_number("Width: ", 800u32).unwrap(), 800);
    }

    #[test]
    fn answers_are_trimmed() {
        let mut p = prompter("  photos  \n 1024 \n");
        assert_eq!(p.ask_or("Folder: ", "x").unwrap(), "photos");
        assert_eq!(p.ask_number("Width: ", 800u32).unwrap(), 1024);
    }

    #[test]
    fn question_is_written_to_output() {
        let mut p = prompter("x\n");
        p.ask("Folder: ").unwrap();
        assert_eq!(String::from_utf8(p.into_output()).unwrap(), "Folder: ");
    }

    #[test]
    fn non_numeric_answer_is_rejected() {
        let mut p = prompter("wide\n");
        let err = p.ask_number("Width: ", 800u32).unwrap_err();
        assert!(matches!(err, ResizeError::InvalidNumber(ref s) if s == "wide"));
    }

    #[test]
    fn negative_number_is_rejected() {
        let mut p = prompter("-5\n");
        assert!(matches!(
            p.ask_number("Width: ", 800u32),
            Err(ResizeError::InvalidNumber(_))
        ));
    }

    #[test]
    fn end_of_input_cancels() {
        let mut p = prompter("");
        assert!(matches!(p.ask("Folder: "), Err(ResizeError::Cancelled)));
    }
}
