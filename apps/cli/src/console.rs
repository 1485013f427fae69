//! Console prompts and the optional text-to-speech hook.

use chrono::{Local, TimeZone};
use serious_core::{Outcome, Prompter, QuestionReply, ReviewCard};
use std::io::{self, BufRead, Write};
use std::process::{Command, Stdio};

/// Pipes prompt text to an external speech program.
#[derive(Debug, Clone)]
pub struct Speaker {
    program: String,
}

impl Speaker {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Run `sh -c <program>` with `text` on stdin and wait for it.
    ///
    /// The child is always reaped, even when it stops reading early.
    pub fn speak(&self, text: &str) -> io::Result<()> {
        let mut child = Command::new("sh")
            .arg("-c")
            .arg(&self.program)
            .stdin(Stdio::piped())
            .spawn()?;
        // Stdin is dropped at the end of the match so the child sees EOF.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };
        let status = child.wait()?;
        written?;
        if !status.success() {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!("`{}` exited with {status}", self.program),
            ));
        }
        Ok(())
    }
}

pub fn parse_question_reply(input: &str) -> Option<QuestionReply> {
    match input.trim() {
        "a" => Some(QuestionReply::Reveal),
        "q" => Some(QuestionReply::Quit),
        _ => None,
    }
}

pub fn parse_judgment(input: &str) -> Option<Outcome> {
    match input.trim() {
        "r" => Some(Outcome::Recalled),
        "f" => Some(Outcome::Forgot),
        _ => None,
    }
}

/// Line-based prompter over any reader/writer pair.
pub struct ConsolePrompter<R, W> {
    input: R,
    output: W,
    speaker: Option<Speaker>,
}

impl ConsolePrompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio(speaker: Option<Speaker>) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), speaker)
    }
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    pub fn new(input: R, output: W, speaker: Option<Speaker>) -> Self {
        Self {
            input,
            output,
            speaker,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt`, speak `spoken` and read one line. `None` on end of input.
    fn ask(&mut self, prompt: &str, spoken: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        if let Some(speaker) = &self.speaker {
            if let Err(e) = speaker.speak(spoken) {
                tracing::warn!(error = %e, "text-to-speech failed");
            }
        }

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

impl<R: BufRead, W: Write> Prompter for ConsolePrompter<R, W> {
    fn present_question(&mut self, card: &ReviewCard) -> io::Result<QuestionReply> {
        let prompt = format!(
            "{}\nQ: {}\nreveal [a]nswer, [q]uit: ",
            card.status_line(),
            card.question
        );
        loop {
            let Some(line) = self.ask(&prompt, &card.question)? else {
                writeln!(self.output)?;
                return Ok(QuestionReply::Quit);
            };
            if let Some(reply) = parse_question_reply(&line) {
                return Ok(reply);
            }
        }
    }

    fn present_answer(&mut self, card: &ReviewCard) -> io::Result<Outcome> {
        let prompt = format!("A: {}\n[r]ecalled, [f]orgot: ", card.answer);
        loop {
            let Some(line) = self.ask(&prompt, &card.answer)? else {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before the recall judgment",
                ));
            };
            if let Some(outcome) = parse_judgment(&line) {
                writeln!(self.output)?;
                return Ok(outcome);
            }
        }
    }
}

/// Local time in `ctime` style, e.g. `Sat Oct 18 14:03:09 2026`.
pub fn format_review_time(secs: i64) -> String {
    match Local.timestamp_opt(secs, 0).single() {
        Some(time) => time.format("%a %b %e %H:%M:%S %Y").to_string(),
        None => secs.to_string(),
    }
}
