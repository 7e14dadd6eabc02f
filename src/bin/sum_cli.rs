// ============================================================================
// Interactive Summation CLI
// Prompts for a count, then that many numeric tokens, and prints the sum
// ============================================================================

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::Arc;
use sum_engine::prelude::*;

enum Outcome {
    Done,
    Cancelled,
    InputError(SumError),
    Unexpected(String),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    // Ctrl-C during a prompt is a cancellation, not a crash
    if let Err(error) = ctrlc::set_handler(|| {
        println!("\nOperation cancelled.");
        std::process::exit(0);
    }) {
        tracing::warn!(error = %error, "interrupt handler not installed");
    }

    let engine = SumEngine::new(SumConfig::new(), Arc::new(LoggingEventHandler));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcome = run(&engine, &mut stdin.lock(), &mut stdout.lock());

    match outcome {
        Outcome::Done => ExitCode::SUCCESS,
        Outcome::Cancelled => {
            println!("\nOperation cancelled.");
            ExitCode::SUCCESS
        },
        Outcome::InputError(error) => {
            println!("Input error: {}", error);
            ExitCode::from(1)
        },
        Outcome::Unexpected(detail) => {
            tracing::error!(error = %detail, "unexpected CLI failure");
            println!("Unexpected error: {}", detail);
            ExitCode::from(2)
        },
    }
}

fn run<R: BufRead, W: Write>(engine: &SumEngine, input: &mut R, output: &mut W) -> Outcome {
    let count = match read_count(input, output) {
        Ok(Some(count)) => count,
        Ok(None) => return Outcome::Cancelled,
        Err(error) => return io_outcome(error),
    };

    let mut values = Vec::with_capacity(count);
    for index in 1..=count {
        match read_value(input, output, index) {
            Ok(Some(value)) => values.push(value),
            Ok(None) => return Outcome::Cancelled,
            Err(error) => return io_outcome(error),
        }
    }

    match engine.sum_with_default(&values) {
        Ok(result) => {
            let _ = writeln!(output, "\n--- Result ---");
            let _ = writeln!(output, "Count   : {}", result.count);
            let _ = writeln!(output, "Strategy: {}", result.strategy);
            let _ = writeln!(output, "Sum     : {}", result.sum);
            Outcome::Done
        },
        Err(error @ SumError::InvalidNumber(_)) => Outcome::InputError(error),
        Err(other) => Outcome::Unexpected(other.to_string()),
    }
}

/// Prompt for the element count until a valid positive integer arrives.
/// Returns None when the input source is exhausted or interrupted.
fn read_count<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<Option<usize>> {
    loop {
        prompt(output, "How many numbers do you want to add? ")?;
        let line = match read_line(input)? {
            Some(line) => line,
            None => return Ok(None),
        };

        match parse_count(&line) {
            Ok(count) => return Ok(Some(count)),
            Err(error) => {
                let _ = writeln!(output, "Invalid input: {}", error);
            },
        }
    }
}

/// Prompt for one numeric token, re-prompting while the line is empty.
/// Parsing is deferred to the engine so the strategy decides the
/// conversion; only emptiness is rejected here.
fn read_value<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    index: usize,
) -> io::Result<Option<NumericInput>> {
    loop {
        prompt(output, &format!("Enter number {}: ", index))?;
        let line = match read_line(input)? {
            Some(line) => line,
            None => return Ok(None),
        };

        if line.is_empty() {
            let _ = writeln!(output, "Invalid input: empty input is not allowed");
            continue;
        }

        return Ok(Some(NumericInput::from(line)));
    }
}

fn prompt<W: Write>(output: &mut W, text: &str) -> io::Result<()> {
    write!(output, "{}", text)?;
    output.flush()
}

/// Read one trimmed line; None signals end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    if read == 0 {
        Ok(None)
    } else {
        Ok(Some(line.trim().to_string()))
    }
}

fn io_outcome(error: io::Error) -> Outcome {
    if error.kind() == io::ErrorKind::Interrupted {
        Outcome::Cancelled
    } else {
        Outcome::Unexpected(error.to_string())
    }
}
