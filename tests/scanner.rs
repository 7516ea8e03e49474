use formulex::{
    error::{ConfigError, ScanError},
    scan,
    scanner::{
        config::{Mode, ScannerConfig},
        core::Scanner,
        token::{Operator, Token, TokenKind, TokenValue},
    },
};
use ordered_float::OrderedFloat;

fn int(value: i64, start: usize, length: usize) -> Token {
    Token::new(TokenValue::Integer(value), start, length)
}

fn float(value: f64, start: usize, length: usize) -> Token {
    Token::new(TokenValue::FloatingPoint(OrderedFloat(value)), start, length)
}

fn ident(name: &str, start: usize, length: usize) -> Token {
    Token::new(TokenValue::Identifier(name.to_string()), start, length)
}

fn op(symbol: char, start: usize) -> Token {
    let operator = Operator::from_symbol(symbol).unwrap_or_else(|| panic!("not an operator: {symbol}"));
    Token::new(TokenValue::Operator(operator), start, 1)
}

fn strict() -> Scanner {
    Scanner::new(ScannerConfig::default().with_mode(Mode::Strict))
}

fn assert_scans(src: &str, expected: &[Token]) {
    match scan(src) {
        Ok(tokens) => assert_eq!(tokens, expected, "scanning {src:?}"),
        Err(e) => panic!("Scanning {src:?} failed: {e}"),
    }
}

#[test]
fn simple_addition() {
    assert_scans("1+2", &[int(1, 0, 1), op('+', 1), int(2, 2, 1)]);
}

#[test]
fn leading_minus_fuses_into_literal() {
    assert_scans("-3*4", &[int(-3, 0, 2), op('*', 2), int(4, 3, 1)]);
    assert_scans("2 * -3", &[int(2, 0, 1), op('*', 2), int(-3, 4, 2)]);
    assert_scans("(-2)",
                 &[Token::new(TokenValue::LeftBracket, 0, 1),
                   int(-2, 1, 2),
                   Token::new(TokenValue::RightBracket, 3, 1)]);
}

#[test]
fn minus_after_operand_is_binary() {
    assert_scans("3-4", &[int(3, 0, 1), op('-', 1), int(4, 2, 1)]);
    assert_scans("1 -2", &[int(1, 0, 1), op('-', 2), int(2, 3, 1)]);
    assert_scans("x-1", &[ident("x", 0, 1), op('-', 1), int(1, 2, 1)]);
    assert_scans("(1)-1",
                 &[Token::new(TokenValue::LeftBracket, 0, 1),
                   int(1, 1, 1),
                   Token::new(TokenValue::RightBracket, 2, 1),
                   op('-', 3),
                   int(1, 4, 1)]);
}

#[test]
fn lone_minus_becomes_operator() {
    assert_scans("-x", &[op('-', 0), ident("x", 1, 1)]);
    assert_scans("--3", &[op('-', 0), op('-', 1), int(3, 2, 1)]);
    assert_scans("-", &[op('-', 0)]);
}

#[test]
fn floating_point_literals() {
    assert_scans("2.5", &[float(2.5, 0, 3)]);
    assert_scans(".5", &[float(0.5, 0, 2)]);
    assert_scans("5.", &[float(5.0, 0, 2)]);
    assert_scans("-0.25", &[float(-0.25, 0, 5)]);
}

#[test]
fn integer_overflow_falls_back_to_floating_point() {
    assert_scans("9223372036854775807", &[int(i64::MAX, 0, 19)]);
    assert_scans("-9223372036854775808", &[int(i64::MIN, 0, 20)]);
    assert_scans("9223372036854775808", &[float(9_223_372_036_854_775_808.0, 0, 19)]);
}

#[test]
fn identifiers() {
    assert_scans("x1+x2", &[ident("x1", 0, 2), op('+', 2), ident("x2", 3, 2)]);
    assert_scans("sin(Theta)",
                 &[ident("sin", 0, 3),
                   Token::new(TokenValue::LeftBracket, 3, 1),
                   ident("Theta", 4, 5),
                   Token::new(TokenValue::RightBracket, 9, 1)]);
}

#[test]
fn literal_directly_followed_by_identifier_or_symbol() {
    assert_scans("2x", &[int(2, 0, 1), ident("x", 1, 1)]);
    assert_scans("2x3", &[int(2, 0, 1), ident("x3", 1, 2)]);
    assert_scans("3)", &[int(3, 0, 1), Token::new(TokenValue::RightBracket, 1, 1)]);
    assert_scans("1.5y^2", &[float(1.5, 0, 3), ident("y", 3, 1), op('^', 4), int(2, 5, 1)]);
}

#[test]
fn separator_after_identifier_is_skipped() {
    assert_scans("x.5", &[ident("x", 0, 1), int(5, 2, 1)]);
}

#[test]
fn all_operators() {
    assert_scans("1+2-3*4/5^6%7",
                 &[int(1, 0, 1),
                   op('+', 1),
                   int(2, 2, 1),
                   op('-', 3),
                   int(3, 4, 1),
                   op('*', 5),
                   int(4, 6, 1),
                   op('/', 7),
                   int(5, 8, 1),
                   op('^', 9),
                   int(6, 10, 1),
                   op('%', 11),
                   int(7, 12, 1)]);
}

#[test]
fn empty_input_is_error() {
    assert_eq!(scan(""), Err(ScanError::EmptyInput));
    assert_eq!(Scanner::default().scan_opt(None), Err(ScanError::EmptyInput));
    assert_eq!(Scanner::default().scan_opt(Some("7")), Ok(vec![int(7, 0, 1)]));
    assert_eq!(strict().scan(""), Err(ScanError::EmptyInput));
}

#[test]
fn whitespace_only_scans_to_nothing() {
    assert_scans("   ", &[]);
    assert_scans(" \t\n", &[]);
}

#[test]
fn unrecognized_characters_are_skipped() {
    assert_scans("1@2", &[int(1, 0, 1), int(2, 2, 1)]);
    assert_scans("π*2", &[op('*', 1), int(2, 2, 1)]);
    assert_scans("a_b", &[ident("a", 0, 1), ident("b", 2, 1)]);
}

#[test]
fn malformed_literals_are_skipped() {
    assert_scans("1.2.3+4", &[op('+', 5), int(4, 6, 1)]);
    assert_scans(".", &[]);
    assert_scans("-.", &[]);
}

#[test]
fn strict_mode_reports_unexpected_characters() {
    assert_eq!(strict().scan("1@2"),
               Err(ScanError::UnexpectedCharacter { character: '@',
                                                    position:  1, }));
    assert_eq!(strict().scan("x.5"),
               Err(ScanError::UnexpectedCharacter { character: '.',
                                                    position:  1, }));
}

#[test]
fn strict_mode_reports_malformed_numbers() {
    let error = strict().scan("1+2.3.4").unwrap_err();
    assert_eq!(error,
               ScanError::MalformedNumber { text:     "2.3.4".to_string(),
                                            position: 2, });
    assert_eq!(error.position(), Some(2));
    assert_eq!(error.to_string(), "Error at position 2: Malformed number '2.3.4'.");
}

#[test]
fn strict_mode_accepts_well_formed_formulas() {
    assert_eq!(strict().scan("-3 * (x1 + 2.5)").map(|tokens| tokens.len()), Ok(7));
    assert_eq!(strict().scan("-"), Ok(vec![op('-', 0)]));
}

#[test]
fn comma_decimal_separator() {
    let scanner = Scanner::with_decimal_separator(',').unwrap();
    assert_eq!(scanner.scan("2,5*-1,5"),
               Ok(vec![float(2.5, 0, 3), op('*', 3), float(-1.5, 4, 4)]));
    // A dot is an ordinary unrecognized character here.
    assert_eq!(scanner.scan("2.5"), Ok(vec![int(2, 0, 1), int(5, 2, 1)]));
}

#[test]
fn non_ascii_decimal_separator() {
    let scanner = Scanner::with_decimal_separator('\u{66b}').unwrap();
    assert_eq!(scanner.scan("1\u{66b}25+x"),
               Ok(vec![float(1.25, 0, 4), op('+', 4), ident("x", 5, 1)]));
}

#[test]
fn invalid_decimal_separators_are_rejected() {
    for separator in ['-', '+', '(', ')', 'a', '7', ' ', '\n'] {
        assert_eq!(Scanner::with_decimal_separator(separator),
                   Err(ConfigError::InvalidDecimalSeparator { separator }));
    }
}

#[test]
fn locale_presets() {
    let separator = |tag: &str| ScannerConfig::for_locale(tag).map(|c| c.decimal_separator());
    assert_eq!(separator("en-US"), Ok('.'));
    assert_eq!(separator("C"), Ok('.'));
    assert_eq!(separator("de-DE"), Ok(','));
    assert_eq!(separator("fr_FR.UTF-8"), Ok(','));
    assert_eq!(separator("PT"), Ok(','));
    assert_eq!(separator("xx-YY"), Err(ConfigError::UnknownLocale { tag: "xx-YY".to_string() }));
    assert_eq!(ScannerConfig::for_locale("de").map(|c| c.mode()), Ok(Mode::Lenient));
}

#[test]
fn token_accessors_and_display() {
    let tokens = scan("-3*(x+2.5)").unwrap();
    let kinds: Vec<TokenKind> = tokens.iter().map(Token::kind).collect();
    assert_eq!(kinds,
               [TokenKind::Integer,
                TokenKind::Operator,
                TokenKind::LeftBracket,
                TokenKind::Identifier,
                TokenKind::Operator,
                TokenKind::FloatingPoint,
                TokenKind::RightBracket]);
    assert!(tokens[0].kind().is_operand());
    assert!(!tokens[1].kind().is_operand());
    assert_eq!(tokens[0].span(), 0..2);
    assert_eq!(tokens[1].value.symbol(), Some('*'));
    assert_eq!(tokens[2].value.symbol(), Some('('));
    assert_eq!(tokens[3].value.symbol(), None);

    let rendered: Vec<String> = tokens.iter().map(ToString::to_string).collect();
    assert_eq!(rendered,
               ["Integer(-3) @ 0..2",
                "Operator(*) @ 2..3",
                "LeftBracket(() @ 3..4",
                "Identifier(x) @ 4..5",
                "Operator(+) @ 5..6",
                "FloatingPoint(2.5) @ 6..9",
                "RightBracket()) @ 9..10"]);
}

#[test]
fn rescanning_is_idempotent() {
    let src = "-1.5*(alpha2 - 3)^-2 % 7 @ 1.2.3";
    let first = Scanner::with_decimal_separator('.').unwrap().scan(src);
    let second = Scanner::with_decimal_separator('.').unwrap().scan(src);
    assert_eq!(first, second);

    let scanner = Scanner::default();
    assert_eq!(scanner.scan(src), scanner.scan(src));
}

#[test]
fn scanner_is_shareable_across_threads() {
    let scanner = Scanner::default();
    let expected = scanner.scan("a+1.5*b").unwrap();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| scanner.scan("a+1.5*b"))).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().as_ref(), Ok(&expected));
        }
    });
}

/// Minimal xorshift generator so the input sweep is reproducible.
struct XorShift(u64);

impl XorShift {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }
}

#[test]
fn random_inputs_yield_ordered_disjoint_tokens() {
    const ALPHABET: &[char] = &['0', '1', '9', '.', ',', '-', '+', '*', '/', '^', '%', '(', ')',
                                ' ', 'x', 'y', 'Z', '@', '_', 'π'];
    let mut rng = XorShift(0x2545_f491_4f6c_dd1d);

    for separator in ['.', ','] {
        let scanner = Scanner::with_decimal_separator(separator).unwrap();
        for _ in 0..2000 {
            let len = (rng.next() % 24) as usize + 1;
            let src: String = (0..len).map(|_| {
                                          let i = (rng.next() % ALPHABET.len() as u64) as usize;
                                          ALPHABET[i]
                                      })
                                      .collect();
            let chars: Vec<char> = src.chars().collect();

            let tokens = scanner.scan(&src)
                                .unwrap_or_else(|e| panic!("Scanning {src:?} failed: {e}"));

            let mut end = 0;
            for token in &tokens {
                assert!(token.start >= end, "{src:?}: {token} overlaps its predecessor");
                assert!(token.length > 0, "{src:?}: {token} is empty");
                assert!(token.end() <= chars.len(), "{src:?}: {token} runs past the input");
                end = token.end();

                let text: String = chars[token.span()].iter().collect();
                match &token.value {
                    TokenValue::Identifier(name) => assert_eq!(&text, name),
                    TokenValue::Operator(_) | TokenValue::LeftBracket | TokenValue::RightBracket => {
                        assert_eq!(text.chars().next(), token.value.symbol());
                    },
                    TokenValue::Integer(n) => assert_eq!(text.parse::<i64>().ok(), Some(*n)),
                    TokenValue::FloatingPoint(_) => {
                        assert!(text.chars()
                                    .all(|c| c.is_ascii_digit() || c == '-' || c == separator));
                    },
                }
            }
        }
    }
}
