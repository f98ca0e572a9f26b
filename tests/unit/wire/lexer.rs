use super::*;

fn kinds(src: &str) -> Vec<TokenKind> {
    lex(src).unwrap().into_iter().map(|t| t.kind).collect()
}

#[test]
fn lexes_a_guarded_clause() {
    assert_eq!(
        kinds("portrait?left=id2.right+16"),
        vec![
            TokenKind::Ident("portrait".into()),
            TokenKind::Question,
            TokenKind::Ident("left".into()),
            TokenKind::Eq,
            TokenKind::Ident("id2".into()),
            TokenKind::Dot,
            TokenKind::Ident("right".into()),
            TokenKind::Plus,
            TokenKind::Number(16.0),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn numbers_keep_fractions_and_units_split_off() {
    assert_eq!(
        kinds("0.5s,.25"),
        vec![
            TokenKind::Number(0.5),
            TokenKind::Ident("s".into()),
            TokenKind::Comma,
            TokenKind::Number(0.25),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn spans_point_into_source() {
    let tokens = lex("width>gap").unwrap();
    assert_eq!(tokens[0].span, Span { start: 0, end: 5 });
    assert_eq!(tokens[2].span, Span { start: 6, end: 9 });
    assert_eq!(tokens[3].span, Span { start: 9, end: 9 });
}

#[test]
fn rejects_unknown_characters_with_offset() {
    match lex("left=#") {
        Err(Ui4Error::Parse { offset, message }) => {
            assert_eq!(offset, 5);
            assert!(message.contains('#'));
        }
        other => panic!("unexpected {other:?}"),
    }
}
