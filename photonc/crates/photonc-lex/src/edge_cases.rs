//! Edge case and invariant tests for photonc-lex.

#[cfg(test)]
mod tests {
    use crate::{LexEngine, Lexer, LexerOptions, Token, TokenKind, Tokenizer};
    use photonc_util::{Arena, FileId, SourceManager};

    fn lex_all<'a>(arena: &'a Arena, source: &'a str) -> Vec<Token<'a>> {
        let lexer = Lexer::new(source, FileId(0), arena, LexerOptions::default());
        lexer.map(|r| r.unwrap()).collect()
    }

    fn lex_everything<'a>(arena: &'a Arena, source: &'a str) -> Vec<Token<'a>> {
        let options = LexerOptions {
            preserve_whitespace: true,
            preserve_comments: true,
            ..Default::default()
        };
        let mut lexer = Lexer::new(source, FileId(0), arena, options);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token().unwrap();
            let at_end = token.kind == TokenKind::Eof;
            tokens.push(token);
            if at_end {
                break;
            }
        }
        tokens
    }

    /// With all trivia preserved, the emitted spans tile the buffer
    /// exactly: no byte is skipped and none is counted twice.
    fn assert_full_coverage(source: &str, tokens: &[Token<'_>]) {
        let mut expected = 0u32;
        for token in tokens {
            assert_eq!(
                token.location.offset, expected,
                "gap or overlap before {:?} in {:?}",
                token, source
            );
            expected = token.location.end();
        }
        assert_eq!(expected as usize, source.len(), "tail not covered in {:?}", source);
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_empty_source() {
        let arena = Arena::new();
        let tokens = lex_everything(&arena, "");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
        assert_eq!(tokens[0].location.offset, 0);
        assert_eq!(tokens[0].location.len, 0);
    }

    #[test]
    fn test_whitespace_only() {
        let arena = Arena::new();
        assert!(lex_all(&arena, "   \t  ").is_empty());
    }

    #[test]
    fn test_long_identifier() {
        let arena = Arena::new();
        let name = "a".repeat(10_000);
        let source = format!("let {} = 1;", name);
        let lexer = Lexer::new(&source, FileId(0), &arena, LexerOptions::default());
        let tokens: Vec<_> = lexer.map(|r| r.unwrap()).collect();
        assert_eq!(tokens[1].text(), Some(name.as_str()));
    }

    #[test]
    fn test_case_sensitivity() {
        let arena = Arena::new();
        let tokens = lex_all(&arena, "Fn fn");
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].kind, TokenKind::KwFn);
    }

    #[test]
    fn test_crlf_line_endings() {
        let arena = Arena::new();
        let tokens = lex_all(&arena, "a\r\nb");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::Newline,
                TokenKind::Identifier,
            ]
        );
        // The Newline token covers only the line feed; the carriage
        // return is whitespace.
        assert_eq!(tokens[1].location.len, 1);
    }

    #[test]
    fn test_nested_delimiters() {
        let arena = Arena::new();
        let tokens = lex_all(&arena, "((()))");
        assert_eq!(
            tokens.iter().filter(|t| t.kind == TokenKind::LeftParen).count(),
            3
        );
        assert_eq!(
            tokens.iter().filter(|t| t.kind == TokenKind::RightParen).count(),
            3
        );
    }

    // ==================== SPEC SCENARIOS ====================

    #[test]
    fn test_scenario_let_with_suffix() {
        let arena = Arena::new();
        let tokens = lex_all(&arena, "let x = 0xFF_u;");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::KwLet,
                TokenKind::Identifier,
                TokenKind::Assign,
                TokenKind::IntegerLiteral,
                TokenKind::Identifier,
                TokenKind::Semicolon,
            ]
        );
        assert_eq!(tokens[3].value.as_integer(), Some(255));
        assert_eq!(tokens[4].text(), Some("_u"));
    }

    #[test]
    fn test_scenario_string_escape() {
        let arena = Arena::new();
        let tokens = lex_all(&arena, "\"hi\\n\"");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
        assert_eq!(tokens[0].text(), Some("hi\n"));
    }

    #[test]
    fn test_scenario_float_exponent() {
        let arena = Arena::new();
        let tokens = lex_all(&arena, "3.14e2");
        assert_eq!(tokens[0].value.as_float(), Some(314.0));
    }

    #[test]
    fn test_scenario_nested_comment() {
        let arena = Arena::new();
        let tokens = lex_all(&arena, "/* a /* b */ c */ 1");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].value.as_integer(), Some(1));
    }

    #[test]
    fn test_scenario_raw_string_roundtrip() {
        let arena = Arena::new();
        let tokens = lex_all(&arena, "r\"\\n\"");
        // Two characters: backslash and 'n', not a newline.
        assert_eq!(tokens[0].text(), Some("\\n"));
        assert_eq!(tokens[0].text().unwrap().len(), 2);
    }

    #[test]
    fn test_scenario_shift_assign_munch() {
        let arena = Arena::new();
        let tokens = lex_all(&arena, "<<=");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::LeftShiftAssign);
    }

    // ==================== INVARIANTS ====================

    #[test]
    fn test_byte_coverage_with_trivia() {
        let arena = Arena::new();
        let source = "fn main() { // greet\n    let s = \"hi\";\n    s + 1.5\n}\n";
        let tokens = lex_everything(&arena, source);
        assert_full_coverage(source, &tokens);
    }

    #[test]
    fn test_monotone_ordering() {
        let arena = Arena::new();
        let source = "let a=0x1F; let b = a <=> 2; /* c */ b..=9";
        let tokens = lex_all(&arena, source);
        for pair in tokens.windows(2) {
            assert!(
                pair[0].location.end() <= pair[1].location.offset,
                "{:?} then {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_exactly_one_trailing_eof() {
        let mut sources = SourceManager::new();
        let arena = Arena::new();
        let mut engine = LexEngine::new(LexerOptions::default());
        let stream = engine
            .tokenize_text(&mut sources, &arena, "e.pt", "a b c")
            .unwrap();
        let eof_count = stream
            .iter()
            .filter(|t| t.kind == TokenKind::Eof)
            .count();
        assert_eq!(eof_count, 1);
        let last = stream.tokens().last().unwrap();
        assert_eq!(last.kind, TokenKind::Eof);
        assert_eq!(last.location.offset, 5);
        assert_eq!(last.location.len, 0);
    }

    #[test]
    fn test_recovered_errors_keep_order() {
        let mut sources = SourceManager::new();
        let arena = Arena::new();
        let mut engine = LexEngine::new(LexerOptions {
            strict_mode: false,
            ..Default::default()
        });
        let stream = engine
            .tokenize_text(&mut sources, &arena, "r.pt", "a § b § c")
            .unwrap();
        for pair in stream.tokens().windows(2) {
            assert!(pair[0].location.end() <= pair[1].location.offset);
        }
        assert_eq!(stream.errors().len(), 2);
        assert!(stream.errors()[0].location.offset < stream.errors()[1].location.offset);
    }

    #[test]
    fn test_value_variant_matches_kind() {
        let arena = Arena::new();
        let source = "ident 42 3.5 \"s\" 'c' true fn + ( ;";
        for token in lex_all(&arena, source) {
            use crate::TokenValue;
            match token.kind {
                TokenKind::IntegerLiteral => {
                    assert!(matches!(token.value, TokenValue::Integer(_)))
                }
                TokenKind::FloatLiteral => {
                    assert!(matches!(token.value, TokenValue::Float(_)))
                }
                TokenKind::StringLiteral | TokenKind::CharLiteral | TokenKind::Identifier => {
                    assert!(matches!(token.value, TokenValue::Text(_)))
                }
                TokenKind::BoolLiteral => {
                    assert!(matches!(token.value, TokenValue::Bool(_)))
                }
                _ => assert!(matches!(token.value, TokenValue::None)),
            }
        }
    }

    // ==================== PROPERTY TESTS ====================

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn atom() -> impl Strategy<Value = &'static str> {
            proptest::sample::select(vec![
                "fn", "let", "while", "ident", "x1", "_private", "Self", "42", "0xFF",
                "0b101", "0o17", "1_000", "3.14", "1e9", "0x1p4", "\"text\"",
                "\"a\\tb\"", "r\"raw\"", "'c'", "+", "-", "**", "<<=", "<=>", "..=",
                "::", "->", "(", ")", "{", "}", "[", "]", ",", ";", "@", "/* c */",
                "// line\n", "\n", "\t", "  ",
            ])
        }

        proptest! {
            /// With trivia preserved, token spans tile the whole buffer
            /// with no gaps and no overlap.
            #[test]
            fn prop_byte_coverage(atoms in proptest::collection::vec(atom(), 0..40)) {
                let source = atoms.join(" ");
                let arena = Arena::new();
                let tokens = lex_everything(&arena, &source);
                assert_full_coverage(&source, &tokens);
            }

            /// Emitted spans are strictly monotone in byte order.
            #[test]
            fn prop_monotone_order(atoms in proptest::collection::vec(atom(), 0..40)) {
                let source = atoms.join(" ");
                let arena = Arena::new();
                let tokens = lex_all(&arena, &source);
                for pair in tokens.windows(2) {
                    prop_assert!(pair[0].location.end() <= pair[1].location.offset);
                }
            }

            /// Re-tokenizing an identifier's text yields one identifier
            /// of the same kind.
            #[test]
            fn prop_identifier_idempotence(atoms in proptest::collection::vec(atom(), 0..40)) {
                let source = atoms.join(" ");
                let arena = Arena::new();
                let idents: Vec<String> = lex_all(&arena, &source)
                    .iter()
                    .filter(|t| t.kind == TokenKind::Identifier)
                    .map(|t| t.text().unwrap().to_string())
                    .collect();
                for text in idents {
                    let arena2 = Arena::new();
                    let again = lex_all(&arena2, &text);
                    prop_assert_eq!(again.len(), 1);
                    prop_assert_eq!(again[0].kind, TokenKind::Identifier);
                }
            }
        }
    }
}
