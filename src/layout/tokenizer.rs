use crate::layout::token::{Token, TokenKind};

/// Characters after which a line may be broken, besides whitespace
const BREAK_AFTER: [char; 6] = ['-', '@', ',', '.', ':', ';'];

/// Decides where a run of plain text may be broken.
///
/// The returned pieces must concatenate back to the input; a line may break
/// after any piece. Any `Fn(&str) -> Vec<String>` closure is a wrapping function.
pub trait WrappingFunction {
    fn split(&self, text: &str) -> Vec<String>;
}

impl<F> WrappingFunction for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn split(&self, text: &str) -> Vec<String> {
        self(text)
    }
}

/// Turn paragraph markup into a token stream.
///
/// The recognised tags are `b`, `i`, `p`, `br`, `ul`, `ol` and `li`, matched
/// case-sensitively and without attributes. Anything else that looks like a tag
/// is kept as literal text. Plain text is split into [`TokenKind::Text`] pieces,
/// each followed by a [`TokenKind::PossibleWrapPoint`] when a break is allowed
/// after it: after whitespace, `-`, `@`, `,`, `.`, `:` or `;`, or at the
/// boundaries returned by `wrapping` when one is supplied.
///
/// `None` produces no tokens at all, whereas an empty string produces a single
/// empty text token.
pub fn tokenize(text: Option<&str>, wrapping: Option<&dyn WrappingFunction>) -> Vec<Token> {
    let Some(text) = text else {
        return Vec::new();
    };
    if text.is_empty() {
        return vec![Token::text("")];
    }

    let mut tokens: Vec<Token> = Vec::new();
    let mut run = String::new();
    let mut rest = text;

    while let Some(start) = rest.find('<') {
        let (before, tag_start) = rest.split_at(start);
        run.push_str(before);

        match parse_tag(tag_start) {
            Some((tag, consumed)) => {
                push_run(&mut tokens, &run, wrapping);
                run.clear();
                tokens.push(tag);
                rest = &tag_start[consumed..];
            }
            None => {
                log::trace!("keeping unrecognised markup as text: {tag_start:?}");
                run.push('<');
                rest = &tag_start[1..];
            }
        }
    }
    run.push_str(rest);
    push_run(&mut tokens, &run, wrapping);

    // the final text piece must still be checked against the line width
    if matches!(tokens.last(), Some(t) if t.kind() == TokenKind::Text && !t.data().is_empty()) {
        tokens.push(Token::new(TokenKind::PossibleWrapPoint, ""));
    }

    tokens
}

/// Parse a recognised tag at the start of `s` (which begins with `<`), returning
/// its token and the number of bytes it spans
fn parse_tag(s: &str) -> Option<(Token, usize)> {
    let end = s.find('>')?;
    let name = &s[1..end];
    let token = match name {
        "b" | "i" | "p" | "ul" | "ol" => Token::new(TokenKind::OpenTag, name),
        "/b" | "/i" | "/p" | "/ul" | "/ol" | "/li" => Token::new(TokenKind::CloseTag, &name[1..]),
        "li" => Token::new(TokenKind::WrapPoint, "li"),
        "br" | "br/" | "br /" => Token::new(TokenKind::WrapPoint, "br"),
        _ => return None,
    };
    Some((token, end + 1))
}

fn push_run(tokens: &mut Vec<Token>, run: &str, wrapping: Option<&dyn WrappingFunction>) {
    if run.is_empty() {
        return;
    }

    if let Some(wrapping) = wrapping {
        for piece in wrapping.split(run).into_iter().filter(|p| !p.is_empty()) {
            tokens.push(Token::text(piece));
            tokens.push(Token::new(TokenKind::PossibleWrapPoint, ""));
        }
        return;
    }

    let mut start = 0;
    for (idx, ch) in run.char_indices() {
        if ch.is_whitespace() || BREAK_AFTER.contains(&ch) {
            let end = idx + ch.len_utf8();
            tokens.push(Token::text(&run[start..end]));
            tokens.push(Token::new(TokenKind::PossibleWrapPoint, ""));
            start = end;
        }
    }
    if start < run.len() {
        tokens.push(Token::text(&run[start..]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TokenKind::*;

    fn summary(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
        tokens.iter().map(|t| (t.kind(), t.data())).collect()
    }

    #[test]
    fn missing_text_has_no_tokens() {
        assert!(tokenize(None, None).is_empty());
    }

    #[test]
    fn empty_text_is_one_empty_text_token() {
        let tokens = tokenize(Some(""), None);
        assert_eq!(summary(&tokens), vec![(Text, "")]);
    }

    #[test]
    fn plain_text_breaks_after_spaces_and_punctuation() {
        let tokens = tokenize(Some("Hello world, x@y.z well-known"), None);
        assert_eq!(
            summary(&tokens),
            vec![
                (Text, "Hello "),
                (PossibleWrapPoint, ""),
                (Text, "world,"),
                (PossibleWrapPoint, ""),
                (Text, " "),
                (PossibleWrapPoint, ""),
                (Text, "x@"),
                (PossibleWrapPoint, ""),
                (Text, "y."),
                (PossibleWrapPoint, ""),
                (Text, "z "),
                (PossibleWrapPoint, ""),
                (Text, "well-"),
                (PossibleWrapPoint, ""),
                (Text, "known"),
                (PossibleWrapPoint, ""),
            ]
        );
    }

    #[test]
    fn recognised_tags_become_tag_tokens() {
        let tokens = tokenize(Some("<b>bold</b><br><ol><li>one</li></ol><p>x</p>"), None);
        assert_eq!(
            summary(&tokens),
            vec![
                (OpenTag, "b"),
                (Text, "bold"),
                (CloseTag, "b"),
                (WrapPoint, "br"),
                (OpenTag, "ol"),
                (WrapPoint, "li"),
                (Text, "one"),
                (CloseTag, "li"),
                (CloseTag, "ol"),
                (OpenTag, "p"),
                (Text, "x"),
                (CloseTag, "p"),
            ]
        );
    }

    #[test]
    fn self_closing_line_breaks_are_recognised() {
        let tokens = tokenize(Some("a<br/>b<br />c"), None);
        let breaks = tokens.iter().filter(|t| t.kind() == WrapPoint).count();
        assert_eq!(breaks, 2);
    }

    #[test]
    fn unknown_and_malformed_tags_are_literal_text() {
        let tokens = tokenize(Some("a < b <B>c</B> <span>"), None);
        assert!(tokens
            .iter()
            .all(|t| matches!(t.kind(), Text | PossibleWrapPoint)));
        let text: String = tokens.iter().map(|t| t.data()).collect();
        assert_eq!(text, "a < b <B>c</B> <span>");
    }

    #[test]
    fn unterminated_tag_is_literal_text() {
        let tokens = tokenize(Some("x <b"), None);
        let text: String = tokens.iter().map(|t| t.data()).collect();
        assert_eq!(text, "x <b");
    }

    #[test]
    fn custom_wrapping_function_sets_the_break_points() {
        let by_pairs = |text: &str| -> Vec<String> {
            let chars: Vec<char> = text.chars().collect();
            chars.chunks(2).map(|c| c.iter().collect()).collect()
        };
        let tokens = tokenize(Some("abcde"), Some(&by_pairs));
        assert_eq!(
            summary(&tokens),
            vec![
                (Text, "ab"),
                (PossibleWrapPoint, ""),
                (Text, "cd"),
                (PossibleWrapPoint, ""),
                (Text, "e"),
                (PossibleWrapPoint, ""),
            ]
        );
    }

    #[test]
    fn multibyte_text_splits_on_char_boundaries() {
        let tokens = tokenize(Some("naïve café"), None);
        assert_eq!(
            summary(&tokens),
            vec![
                (Text, "naïve "),
                (PossibleWrapPoint, ""),
                (Text, "café"),
                (PossibleWrapPoint, ""),
            ]
        );
    }

    #[test]
    fn tokenizing_is_deterministic() {
        let text = "<ul><li>a, b</li><li><i>c</i></li></ul>";
        assert_eq!(tokenize(Some(text), None), tokenize(Some(text), None));
    }
}
