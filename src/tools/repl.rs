//! The interactive command loop.
//!
//! Reads one line per command, splits it on whitespace, validates the
//! argument count and hands the arguments to the registry. Every error is
//! printed on its own line and the loop keeps going; only end of input
//! stops it. Generic over the streams so tests can drive it with buffers.

use std::io::{BufRead, Write};

use log::debug;
use thiserror::Error;

use crate::error::RegistryError;
use crate::registry::Registry;

use super::text_io::{self, IoError, Sink, Source};

/// Everything a single command can fail with.
#[derive(Debug, Error)]
enum CommandError {
    #[error("{0}: parameter missing")]
    MissingArgument(&'static str),

    #[error("{0}: too many parameters")]
    TooManyArguments(&'static str),

    #[error("unknown command \"{0}\"")]
    UnknownCommand(String),

    #[error("{0}")]
    State(#[from] RegistryError),

    #[error("{0}")]
    Io(#[from] IoError),
}

/// Run the command loop until the input stream ends.
pub fn run<R: BufRead, W: Write>(
    registry: &mut Registry,
    input: &mut R,
    output: &mut W,
) -> std::io::Result<()> {
    let mut line = String::new();
    loop {
        write!(output, "cmd: ")?;
        output.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Err(e) = dispatch(line, registry, input, output) {
            writeln!(output, "{}", e)?;
        }
    }
    Ok(())
}

/// Split one command line and run it against the registry.
fn dispatch<R: BufRead, W: Write>(
    line: &str,
    registry: &mut Registry,
    input: &mut R,
    output: &mut W,
) -> Result<(), CommandError> {
    let mut words = line.split_whitespace();
    let cmd = match words.next() {
        Some(cmd) => cmd,
        None => return Ok(()),
    };
    let args: Vec<&str> = words.collect();
    debug!("command {} with {} arguments", cmd, args.len());

    match cmd {
        "help" => {
            help(output).map_err(IoError::from)?;
        }
        "read" => match args.as_slice() {
            &[name] | &[name, _] => {
                // Refuse the name before prompting for any text.
                if registry.contains(name) {
                    return Err(RegistryError::AlreadyExists(name.to_string()).into());
                }
                let source = match args.as_slice() {
                    &[_, file] => Source::File(file),
                    _ => Source::Line,
                };
                let text = text_io::read_source(source, input, output)?;
                registry.insert(name, text)?;
            }
            [] => return Err(CommandError::MissingArgument("read")),
            _ => return Err(CommandError::TooManyArguments("read")),
        },
        "flush" => match args.as_slice() {
            &[name] => {
                let value = registry.value(name)?;
                text_io::write_sink(value, Sink::Console, output)?;
            }
            &[name, file] => {
                let value = registry.value(name)?;
                text_io::write_sink(value, Sink::File(file), output)?;
            }
            [] => return Err(CommandError::MissingArgument("flush")),
            _ => return Err(CommandError::TooManyArguments("flush")),
        },
        "encode" => match args.as_slice() {
            &[src, dst] => registry.encode(src, dst)?,
            [] | [_] => return Err(CommandError::MissingArgument("encode")),
            _ => return Err(CommandError::TooManyArguments("encode")),
        },
        "decode" => match args.as_slice() {
            &[src, dst] => registry.decode(src, dst)?,
            [] | [_] => return Err(CommandError::MissingArgument("decode")),
            _ => return Err(CommandError::TooManyArguments("decode")),
        },
        "equals" => match args.as_slice() {
            &[a, b] => {
                let equal = registry.equals(a, b)?;
                writeln!(
                    output,
                    "these data are {}equal",
                    if equal { "" } else { "not " }
                )
                .map_err(IoError::from)?;
            }
            [] | [_] => return Err(CommandError::MissingArgument("equals")),
            _ => return Err(CommandError::TooManyArguments("equals")),
        },
        "concat" => match args.as_slice() {
            &[a, b, dst] => registry.concat(a, b, dst)?,
            [] | [_] | [_, _] => return Err(CommandError::MissingArgument("concat")),
            _ => return Err(CommandError::TooManyArguments("concat")),
        },
        "merge" => match args.as_slice() {
            &[a, b, dst] => registry.merge(a, b, dst)?,
            [] | [_] | [_, _] => return Err(CommandError::MissingArgument("merge")),
            _ => return Err(CommandError::TooManyArguments("merge")),
        },
        "inspect" => match args.as_slice() {
            &[name] => {
                let report = registry.inspect(name)?;
                writeln!(output, "{}", report).map_err(IoError::from)?;
            }
            [] => return Err(CommandError::MissingArgument("inspect")),
            _ => return Err(CommandError::TooManyArguments("inspect")),
        },
        "list" => match args.as_slice() {
            [] => {
                let names = registry.list()?;
                writeln!(output, "{}", names).map_err(IoError::from)?;
            }
            _ => return Err(CommandError::TooManyArguments("list")),
        },
        "drop" => match args.as_slice() {
            [] => registry.drop_all(),
            &[name] => registry.drop_entry(name)?,
            _ => return Err(CommandError::TooManyArguments("drop")),
        },
        other => return Err(CommandError::UnknownCommand(other.to_string())),
    }
    Ok(())
}

/// Print the command summary.
fn help<W: Write>(output: &mut W) -> std::io::Result<()> {
    writeln!(
        output,
        "
huffzip - compresses text using the Huffman algorithm.
Supported commands:
  read    <name>          read one line of text into <name>
  read    <name> <file>   read the contents of <file> into <name>
  flush   <name>          write the raw value of <name> to the terminal
  flush   <name> <file>   write the raw value of <name> to <file>
  encode  <src> <dst>     Huffman-encode the text <src> into <dst>
  decode  <src> <dst>     decode the encoded text <src> into <dst>
  inspect <name>          show the alphabet and compression of <name>
  equals  <a> <b>         compare the raw values of <a> and <b>
  merge   <a> <b> <dst>   fold two identical entries into <dst>
  concat  <a> <b> <dst>   join the values of <a> and <b> into <dst>
  list                    show all stored names
  drop                    delete everything
  drop    <name>          delete <name>
  ctrl+D                  exit the program
"
    )
}
