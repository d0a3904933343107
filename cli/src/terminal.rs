//! Terminal stand-ins for the alert box and the input form.

use std::io::{self, BufRead, Write};

use todo_core::{Notification, Notifier};

/// Prints notifications on stdout, one per line.
#[derive(Debug, Default)]
pub struct PrintNotifier;

impl Notifier for PrintNotifier {
    fn notify(&self, notification: Notification) {
        println!("{notification}");
    }
}

/// Ask for one field. An empty answer keeps `current`, which is how a
/// value preserved after a failed create gets submitted again.
///
/// Returns `None` once the input is exhausted.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    current: &str,
) -> io::Result<Option<String>> {
    if current.is_empty() {
        write!(output, "{label}: ")?;
    } else {
        write!(output, "{label} [{current}]: ")?;
    }
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let answer = line.trim_end_matches(['\r', '\n']);
    if answer.is_empty() {
        Ok(Some(current.to_string()))
    } else {
        Ok(Some(answer.to_string()))
    }
}
