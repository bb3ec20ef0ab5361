//! Longest match and pattern priority
//!
//! `=` vs `==` demonstrates longest match; two patterns matching the same
//! text demonstrate insertion-order priority.

use scandium::{CharReader, Pattern, ScannerBuilder};

fn main() {
    let scanner = ScannerBuilder::new()
        .pattern(Pattern::literal(['=']), "ASSIGN")
        .pattern(Pattern::literal(['=', '=']), "EQUALS")
        .pattern(
            Pattern::any_of([
                Pattern::literal("if".chars()),
                Pattern::literal("If".chars()),
                Pattern::literal("IF".chars()),
            ]),
            "KW_IF",
        )
        .pattern(Pattern::literal("if".chars()), "NEVER_WINS")
        .pattern(
            Pattern::repeat_at_least(1, Pattern::literal([' '])),
            "SPACE",
        )
        .build("ILLEGAL", "EOF");

    // `==` prefers the longer match even though ASSIGN was added first;
    // `if` goes to KW_IF because NEVER_WINS was added later.
    let mut reader = CharReader::from_text("== = if IF");
    loop {
        let token = scanner.next_token(&mut reader);
        if token == "EOF" {
            break;
        }
        if token != "SPACE" {
            println!("{token}");
        }
    }
}
