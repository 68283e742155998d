mod error;
mod lexer;
mod parser;

pub use error::{LexError, ParseError, ParseErrorKind, SourcePosition};
pub use lexer::{Token, Tokenizer};
pub use parser::{Application, Instruction, Parser};

/// Compiles an expression into its postfix program.
///
/// Case is not significant; each call lexes a private lowercase copy of the input.
///
/// # Examples
/// ```
/// # use slash_roll::parse::{parse, Instruction};
/// let program = parse("2D6 + 1").unwrap();
/// assert_eq!(program.len(), 5);
/// assert_eq!(program[0], Instruction::Push(2));
/// ```
pub fn parse(s: &str) -> crate::Result<Vec<Instruction>> {
    let source = s.to_ascii_lowercase();
    Parser::new(&source).parse()
}
