//! Interactive stack calculator driven by the charcomb combinators.
//!
//! Each input line is tokenized with a composed parser: a word is one or
//! more non-whitespace characters, and a line is a whitespace-separated
//! list of words. Tokens that parse as integers are pushed onto the data
//! stack; everything else is looked up in the command dictionary.

use std::collections::HashMap;
use std::io::{self, BufRead, Write};

use charcomb::from_fn::from_fn;
use charcomb::map::MapExt;
use charcomb::separated_list::separated_list;
use charcomb::some::some;
use charcomb::whitespace::many_whitespace;
use charcomb::{ParseError, Parser, StrCursor};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

#[derive(Debug, clap::Parser)]
#[command(
    name = "rpncalc",
    version,
    about = "A toy stack calculator built on the charcomb parser combinators."
)]
struct Args {
    /// Evaluate a single line and exit instead of starting the interactive loop.
    #[arg(short, long)]
    command: Option<String>,
}

/// Split a line into whitespace-separated words using the combinator engine
fn tokenize(line: &str) -> Result<Vec<String>, ParseError> {
    let word = some(from_fn(|cursor: StrCursor<'_>| match cursor.value() {
        Ok(ch) if !ch.is_ascii_whitespace() => Ok((ch, cursor.next())),
        _ => Err(ParseError::new("Expected non-whitespace character.")),
    }))
    .map(|chars| chars.into_iter().collect::<String>());

    let words = separated_list(word, many_whitespace());
    let (tokens, _) = words.parse_str(line)?;
    Ok(tokens)
}

#[derive(Debug, Copy, Clone)]
enum Word {
    Print,
    Add,
    Sub,
}

/// The data stack and the command dictionary
struct Machine {
    stack: Vec<i64>,
    words: HashMap<String, Word>,
}

impl Machine {
    fn new() -> Self {
        let mut machine = Machine {
            stack: Vec::new(),
            words: HashMap::new(),
        };
        machine.register("PRINT", Word::Print);
        machine.register("ADD", Word::Add);
        machine.register("SUB", Word::Sub);
        machine.alias("PRINT", "P");
        machine.alias("ADD", "+");
        machine.alias("SUB", "-");
        machine
    }

    /// Register a command under its given, lowercase, and uppercase names
    fn register(&mut self, name: &str, word: Word) {
        self.words.insert(name.to_string(), word);
        self.words.insert(name.to_lowercase(), word);
        self.words.insert(name.to_uppercase(), word);
    }

    fn alias(&mut self, existing: &str, alias: &str) {
        if let Some(word) = self.words.get(existing).copied() {
            self.words.insert(alias.to_string(), word);
        }
    }

    fn eval_line(&mut self, line: &str, out: &mut StandardStream) {
        match tokenize(line) {
            Ok(tokens) => {
                for token in tokens {
                    // A token that reads as an integer is pushed; anything
                    // else is treated as a command name.
                    match token.parse::<i64>() {
                        Ok(value) => self.stack.push(value),
                        Err(_) => self.execute_word(&token, out),
                    }
                }
            }
            Err(error) => {
                paint(out, Color::Red, false, "Parse error: ");
                let _ = writeln!(out, "{}", error);
            }
        }
    }

    fn execute_word(&mut self, word: &str, out: &mut StandardStream) {
        match self.words.get(word).copied() {
            Some(Word::Print) => self.print_stack(out),
            Some(Word::Add) => self.binary_op("ADD", |a, b| a + b, out),
            Some(Word::Sub) => self.binary_op("SUB", |a, b| a - b, out),
            None => paintln(
                out,
                Color::Red,
                &format!("Error: Unknown command '{}'", word),
            ),
        }
    }

    fn binary_op(&mut self, name: &str, op: fn(i64, i64) -> i64, out: &mut StandardStream) {
        if self.stack.len() < 2 {
            paintln(
                out,
                Color::Red,
                &format!("Error: {} requires at least two values on the stack.", name),
            );
            return;
        }
        if let (Some(b), Some(a)) = (self.stack.pop(), self.stack.pop()) {
            self.stack.push(op(a, b));
        }
    }

    fn print_stack(&self, out: &mut StandardStream) {
        paint(out, Color::Green, false, "Stack: ");
        let rendered: Vec<String> = self.stack.iter().map(|value| value.to_string()).collect();
        let _ = writeln!(out, "{}", rendered.join(" "));
    }
}

fn paint(out: &mut StandardStream, color: Color, bold: bool, text: &str) {
    let _ = out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(bold));
    let _ = write!(out, "{}", text);
    let _ = out.reset();
}

fn paintln(out: &mut StandardStream, color: Color, text: &str) {
    paint(out, color, false, text);
    let _ = writeln!(out);
}

fn print_banner(out: &mut StandardStream) {
    paintln(out, Color::Cyan, "========================================");
    paint(out, Color::Green, true, "  rpncalc");
    let _ = writeln!(out, " - a tiny stack calculator");
    paintln(out, Color::Cyan, "========================================");
    paintln(
        out,
        Color::Yellow,
        "Type 'EXIT' to quit or 'PRINT' to see the stack.",
    );
    let _ = writeln!(out);
}

fn main() {
    let args = <Args as clap::Parser>::parse();
    let mut machine = Machine::new();
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);

    if let Some(line) = args.command {
        machine.eval_line(&line, &mut stdout);
        return;
    }

    print_banner(&mut stdout);

    let stdin = io::stdin();
    let mut input = String::new();
    loop {
        paint(&mut stdout, Color::Blue, false, "rpncalc> ");
        let _ = stdout.flush();

        input.clear();
        match stdin.lock().read_line(&mut input) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let line = input.trim_end_matches(['\r', '\n']);
        if line == "EXIT" {
            paintln(&mut stdout, Color::Green, "Goodbye!");
            break;
        }

        machine.eval_line(line, &mut stdout);
    }
}
