//! Tokenizing arithmetic expressions
//!
//! Shows how digit runs, operators, and whitespace compose from the
//! pattern combinators, and how illegal input degrades gracefully.

use scandium::{CharReader, Pattern, ScannerBuilder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tok {
    Number,
    Plus,
    Minus,
    Star,
    Slash,
    Whitespace,
    Illegal,
    Eof,
}

fn digit() -> Pattern<char> {
    Pattern::any_of(('0'..='9').map(|d| Pattern::literal([d])))
}

fn main() {
    let scanner = ScannerBuilder::new()
        .pattern(Pattern::repeat_at_least(1, digit()), Tok::Number)
        .pattern(Pattern::literal(['+']), Tok::Plus)
        .pattern(Pattern::literal(['-']), Tok::Minus)
        .pattern(Pattern::literal(['*']), Tok::Star)
        .pattern(Pattern::literal(['/']), Tok::Slash)
        .pattern(
            Pattern::repeat_at_least(1, Pattern::literal([' '])),
            Tok::Whitespace,
        )
        .build(Tok::Illegal, Tok::Eof);

    let inputs = ["42", "10 + 20", "5*3 - 1", "100 / 2", "7 % 2"];

    for input in inputs {
        print!("{input:12} =>");
        let mut reader = CharReader::from_text(input);
        loop {
            let token = scanner.next_token(&mut reader);
            if token == Tok::Eof {
                break;
            }
            if token != Tok::Whitespace {
                print!(" {token:?}");
            }
        }
        println!();
    }
}
