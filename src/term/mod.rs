/*!
## Terminal front end

Runs a program from a file, or from lines typed in until `RUN`.

*/

extern crate ansi_term;
extern crate linefeed;
use crate::lang::Error;
use crate::mach::{Console, Runtime};
use ansi_term::Style;
use clap::Parser;
use linefeed::{Interface, ReadResult, Signal, Terminal};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "basic", version, about = "Run a line-numbered BASIC program")]
struct Args {
    /// Program to run; type one in when omitted
    file: Option<PathBuf>,

    /// Print [line] before each numbered statement
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum TermError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Basic(#[from] Error),
}

pub fn main() {
    let args = Args::parse();
    if let Err(error) = main_loop(args) {
        eprintln!("{}", Style::new().bold().paint(format!("?{}", error)));
        std::process::exit(1);
    }
}

fn main_loop(args: Args) -> Result<(), TermError> {
    let interface = Interface::new("BASIC")?;
    interface.set_report_signal(Signal::Interrupt, true);
    let source = match &args.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => read_program(&interface)?,
    };
    let mut runtime: Runtime = source.parse()?;
    runtime.set_trace(args.trace);
    let mut console = LineConsole {
        interface: &interface,
    };
    runtime.run(&mut console)?;
    Ok(())
}

fn read_program<T: Terminal>(interface: &Interface<T>) -> std::io::Result<String> {
    let mut source = String::new();
    loop {
        match interface.read_line()? {
            ReadResult::Input(line) => {
                if line.trim().eq_ignore_ascii_case("RUN") {
                    break;
                }
                source.push_str(&line);
                source.push('\n');
                interface.add_history_unique(line);
            }
            ReadResult::Signal(_) | ReadResult::Eof => break,
        }
    }
    Ok(source)
}

struct LineConsole<'a, T: Terminal> {
    interface: &'a Interface<T>,
}

impl<T: Terminal> Console for LineConsole<'_, T> {
    fn print(&mut self, s: &str) -> Result<(), Error> {
        match self.interface.write_fmt(format_args!("{}", s)) {
            Ok(()) => Ok(()),
            Err(_) => Err(crate::error!(InternalError; "CONSOLE WRITE FAILED")),
        }
    }

    fn input(&mut self, prompt: &str) -> Result<String, Error> {
        if self.interface.set_prompt(prompt).is_err() {
            return Err(crate::error!(InternalError; "CONSOLE WRITE FAILED"));
        }
        match self.interface.read_line() {
            Ok(ReadResult::Input(line)) => Ok(line),
            Ok(ReadResult::Signal(_)) | Ok(ReadResult::Eof) => Err(crate::error!(InputPastEnd)),
            Err(_) => Err(crate::error!(InternalError; "CONSOLE READ FAILED")),
        }
    }
}
