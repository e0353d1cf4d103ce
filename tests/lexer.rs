use sdbexpr::{
    error::LexError,
    interpreter::{
        lexer::{Token, tokenize},
        limits::Limits,
        unary_context::resolve_unary_context,
    },
};

fn lex(input: &str) -> Result<Vec<Token>, LexError> {
    tokenize(input, &Limits::default())
}

fn num(text: &str) -> Token {
    Token::Number(text.to_string())
}

fn resolved(input: &str) -> Vec<Token> {
    let mut tokens = lex(input).unwrap();
    resolve_unary_context(&mut tokens);
    tokens
}

#[test]
fn operators_and_numbers() {
    assert_eq!(lex("1+2*3").unwrap(),
               vec![num("1"), Token::Plus, num("2"), Token::Star, num("3")]);
    assert_eq!(lex("1 == 2 != 3 && 4 || !5 % 6 / 7").unwrap(),
               vec![num("1"),
                    Token::EqualEqual,
                    num("2"),
                    Token::BangEqual,
                    num("3"),
                    Token::AndAnd,
                    num("4"),
                    Token::PipePipe,
                    Token::Bang,
                    num("5"),
                    Token::Percent,
                    num("6"),
                    Token::Slash,
                    num("7")]);
}

#[test]
fn hex_needs_digits() {
    assert_eq!(lex("0x1F").unwrap(), vec![num("0x1F")]);
    assert!(lex("0x").is_err());
}

#[test]
fn whitespace_is_dropped() {
    assert_eq!(lex(" \t( $a0 )\n").unwrap(),
               vec![Token::LParen, Token::Register("$a0".to_string()), Token::RParen]);
    assert!(lex("   ").unwrap().is_empty());
}

#[test]
fn unknown_character_reports_position() {
    assert_eq!(lex("1 + @"),
               Err(LexError::UnrecognizedInput { position: 4,
                                                 text:     "@".to_string(), }));
    assert!(matches!(lex("$"), Err(LexError::UnrecognizedInput { position: 0, .. })));
}

#[test]
fn limits_are_enforced() {
    let limits = Limits { max_tokens: 3,
                          ..Limits::default() };
    assert!(tokenize("1+2", &limits).is_ok());
    assert_eq!(tokenize("1+2+3", &limits), Err(LexError::TooManyTokens { limit: 3 }));

    let long = format!("${}", "a".repeat(32));
    assert!(matches!(lex(&long), Err(LexError::NameTooLong { len: 32, limit: 31, .. })));
    assert!(lex(&format!("${}", "a".repeat(31))).is_ok());
}

#[test]
fn caret_counts_characters() {
    let err = LexError::NameTooLong { position: 7,
                                      len:      40,
                                      limit:    31, };
    let shown = err.render("éé + $reg");
    assert!(shown.ends_with("éé + $reg\n     ^"));

    let err = LexError::UnrecognizedInput { position: 4,
                                            text:     "@".to_string(), };
    assert!(err.render("1 + @").ends_with("1 + @\n    ^"));
}

#[test]
fn infix_stays_binary() {
    assert_eq!(resolved("4-3")[1], Token::Minus);
    assert_eq!(resolved("$a*2")[1], Token::Star);
    assert_eq!(resolved("(1)-2")[3], Token::Minus);
}

#[test]
fn prefix_becomes_unary() {
    let tokens = resolved("--*(-1)");
    assert_eq!(&tokens[..5],
               &[Token::Neg, Token::Neg, Token::Deref, Token::LParen, Token::Neg]);
    assert_eq!(resolved("1*-2")[2], Token::Neg);
    assert_eq!(resolved("!*$sp")[1], Token::Deref);
    assert_eq!(resolved("1 == -1")[2], Token::Neg);
}
