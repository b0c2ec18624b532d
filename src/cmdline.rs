use crate::environment::Environment;
use crate::interpreter;
use ansi_term::Colour::Red;
use linefeed::{DefaultTerminal, Interface, ReadResult, Terminal};
use std::fmt;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::rc::Rc;

const PROMPT: &str = ">>> ";

#[derive(Debug)]
pub enum Error {
    IO(io::Error),
    TooManyArguments(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IO(e) => write!(f, "io error: {}", e),
            Error::TooManyArguments(n) => {
                write!(f, "usage: golp [FILE] (received {} arguments)", n)
            }
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::IO(e)
    }
}

pub fn setup() -> io::Result<Interface<DefaultTerminal>> {
    let interface = linefeed::Interface::new("golp")?;
    interface.set_prompt(PROMPT)?;
    if let Some(path) = history_path() {
        interface.load_history(path).ok();
    };
    Ok(interface)
}

fn history_path() -> Option<PathBuf> {
    match dirs::data_dir() {
        Some(mut path) => {
            path.push(".golp_history");
            Some(path)
        }
        None => None,
    }
}

pub fn save_history<T: Terminal>(interface: &Interface<T>) -> io::Result<()> {
    match history_path() {
        Some(path) => interface.save_history(path),
        None => Ok(()),
    }
}

pub fn process(line: &str, env: &Rc<Environment>, colour: bool) -> Option<String> {
    if line.trim().is_empty() {
        return None;
    }
    let rendered = match interpreter::rep(line, env) {
        Ok(output) => output,
        Err(e) if colour => Red.paint(e.to_string()).to_string(),
        Err(e) => e.to_string(),
    };
    Some(rendered)
}

pub fn repl<T: Terminal>(interface: &Interface<T>, mut processor: impl FnMut(&str) -> Option<String>) {
    loop {
        match interface.read_line() {
            Ok(ReadResult::Eof) => break,
            Ok(ReadResult::Signal(sig)) => {
                writeln!(interface, "Received signal {:?}", sig).ok();
            }
            Ok(ReadResult::Input(line)) => {
                interface.add_history_unique(line.clone());
                if let Some(output) = processor(&line) {
                    writeln!(interface, "{}", output).ok();
                }
            }
            Err(e) => {
                writeln!(interface, "Error: {}", e).ok();
                break;
            }
        }
    }
}

pub fn run_lines(input: impl BufRead, env: &Rc<Environment>) -> io::Result<()> {
    let colour = atty::is(atty::Stream::Stdout);
    for line in input.lines() {
        if let Some(output) = process(&line?, env, colour) {
            println!("{}", output);
        }
    }
    Ok(())
}

pub fn launch(args: Vec<String>, env: &Rc<Environment>) -> Result<(), Error> {
    match args.len() {
        0 | 1 if atty::is(atty::Stream::Stdin) => {
            let interface = setup()?;
            let colour = atty::is(atty::Stream::Stdout);
            repl(&interface, |line| process(line, env, colour));
            save_history(&interface)?;
        }
        0 | 1 => {
            let stdin = io::stdin();
            run_lines(stdin.lock(), env)?;
        }
        2 => {
            log::info!("Evaluating {}", args[1]);
            let file = std::fs::File::open(&args[1])?;
            run_lines(io::BufReader::new(file), env)?;
        }
        n => return Err(Error::TooManyArguments(n - 1)),
    }
    Ok(())
}
