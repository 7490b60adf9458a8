use crate::error::SyntaxError;
use crate::syntax::ast::Instruction;
use crate::syntax::lexer::Lexer;
use crate::syntax::token::{ArgKind, CommandKind, toggle_value};

/// Tokenize and validate one line. Pure: the same line always yields the same result.
pub fn parse(line: &str) -> Result<Instruction, SyntaxError> {
    Parser::new(Lexer::new(line.trim()).tokenize()).parse()
}

/// A validated argument value, before it is placed into an `Instruction`.
#[derive(Debug, Clone, PartialEq)]
enum Arg {
    Float(f64),
    Name(String),
    Toggle(bool),
}

pub struct Parser<'a> {
    words: Vec<&'a str>,
}

impl<'a> Parser<'a> {
    pub fn new(words: Vec<&'a str>) -> Self {
        Self { words }
    }

    pub fn parse(self) -> Result<Instruction, SyntaxError> {
        let Some((head, rest)) = self.words.split_first() else {
            return Err(SyntaxError::EmptyLine);
        };

        let command = CommandKind::from_keyword(head)
            .ok_or_else(|| SyntaxError::UnknownCommand { name: head.to_string() })?;

        let signature = command.signature();
        if rest.len() != signature.len() {
            return Err(SyntaxError::ArityMismatch {
                command,
                expected: signature.len(),
                found: rest.len(),
            });
        }

        let args = rest.iter()
            .zip(signature)
            .enumerate()
            .map(|(index, (word, kind))| {
                parse_arg(*kind, word).ok_or_else(|| SyntaxError::InvalidArgument {
                    command,
                    index,
                    raw: word.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(build(command, args))
    }
}

fn parse_arg(kind: ArgKind, raw: &str) -> Option<Arg> {
    match kind {
        ArgKind::Float => raw.parse::<f64>().ok()
            .filter(|v| v.is_finite())
            .map(Arg::Float),
        ArgKind::ColorName => raw.chars().all(|c| c.is_ascii_alphabetic())
            .then(|| Arg::Name(raw.to_ascii_lowercase())),
        ArgKind::Toggle => toggle_value(raw).map(Arg::Toggle),
    }
}

/// Assemble an instruction from arguments already checked against the grammar table.
fn build(command: CommandKind, args: Vec<Arg>) -> Instruction {
    let f = |i: usize| match args.get(i) {
        Some(Arg::Float(v)) => *v,
        _ => 0.0,
    };

    match command {
        CommandKind::MoveTo => Instruction::MoveTo { x: f(0), y: f(1) },
        CommandKind::DrawTo => Instruction::DrawTo { x: f(0), y: f(1) },
        CommandKind::Clear  => Instruction::Clear,
        CommandKind::Rectangle => Instruction::Rectangle {
            x: f(0), y: f(1), width: f(2), height: f(3),
        },
        CommandKind::Circle => Instruction::Circle { radius: f(0) },
        CommandKind::Triangle => Instruction::Triangle {
            points: [(f(0), f(1)), (f(2), f(3)), (f(4), f(5))],
        },
        CommandKind::Color => {
            let name = match args.into_iter().next() {
                Some(Arg::Name(n)) => n,
                _ => String::new(),
            };
            Instruction::SetColor { name }
        }
        CommandKind::Fill => {
            let enabled = matches!(args.first(), Some(Arg::Toggle(true)));
            Instruction::SetFill { enabled }
        }
    }
}
