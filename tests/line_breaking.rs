//! Line breaking behaviour of paragraphs, measured with fixed-advance metrics
//! (5pt per character at 10pt) so expected widths are exact.

use pdf_tables::layout::{HorizontalAlignment, Paragraph, TokenKind};
use pdf_tables::testing::MonospaceMetrics;
use pdf_tables::{FontBook, FontFamily, Pt};
use rstest::rstest;

const SIZE: Pt = Pt(10.0);

fn book() -> (FontBook, FontFamily) {
    let mut book = FontBook::new();
    let fonts = book.add_family(
        MonospaceMetrics::new(500.0),
        MonospaceMetrics::new(550.0),
        MonospaceMetrics::new(500.0),
        MonospaceMetrics::new(550.0),
    );
    (book, fonts)
}

fn line_texts(paragraph: &Paragraph, book: &FontBook) -> Vec<String> {
    paragraph
        .lines(book)
        .iter()
        .map(|line| line.text.clone())
        .collect()
}

#[test]
fn equal_inputs_break_identically() {
    let (book, fonts) = book();
    let text = format!("<b>{}</b> {}", lipsum::lipsum(12), lipsum::lipsum(40));
    let first = Paragraph::new(text.as_str(), fonts, SIZE, Pt(180.0));
    let second = Paragraph::new(text.as_str(), fonts, SIZE, Pt(180.0));

    assert_eq!(first.lines(&book), second.lines(&book));
    assert_eq!(first.height(&book), second.height(&book));
}

#[test]
fn repeated_queries_return_the_cached_lines() {
    let (book, fonts) = book();
    let paragraph = Paragraph::new(lipsum::lipsum(30), fonts, SIZE, Pt(150.0));

    let first = paragraph.lines(&book);
    let second = paragraph.lines(&book);
    assert!(std::ptr::eq(first, second));
}

#[rstest]
#[case(Pt(60.0))]
#[case(Pt(100.0))]
#[case(Pt(250.0))]
#[case(Pt(400.0))]
fn lines_never_overflow(#[case] width: Pt) {
    let (book, fonts) = book();
    let paragraph = Paragraph::new(lipsum::lipsum(80), fonts, SIZE, width);

    let lines = paragraph.lines(&book);
    assert!(lines.len() > 1);
    for line in lines {
        assert!(line.width <= width, "{:?} is wider than {}", line.text, width);
    }
    assert!(paragraph.max_line_width(&book) <= width);
}

#[rstest]
#[case("Line1<br>Line2<br>Line3", 3)]
#[case("A<br>B<br>C<br>D", 4)]
#[case("A<br/>B<br />C", 3)]
fn forced_breaks_start_new_lines(#[case] text: &str, #[case] expected: usize) {
    let (book, fonts) = book();
    let paragraph = Paragraph::new(text, fonts, SIZE, Pt(400.0));
    assert!(paragraph.lines(&book).len() >= expected);
}

#[test]
fn three_item_ordered_list() {
    let (book, fonts) = book();
    let paragraph = Paragraph::new(
        "<ol><li>First</li><li>Second</li><li>Third</li></ol>",
        fonts,
        SIZE,
        Pt(400.0),
    );
    let lines = line_texts(&paragraph, &book);
    assert!(lines[0].contains("1."));
    assert!(lines[1].contains("2."));
    assert!(lines[2].contains("3."));
}

#[test]
fn twenty_item_ordered_list_has_no_gaps() {
    let (book, fonts) = book();
    let items: String = (1..=20).map(|i| format!("<li>Item {i}</li>")).collect();
    let paragraph = Paragraph::new(format!("<ol>{items}</ol>"), fonts, SIZE, Pt(400.0));

    let labels: Vec<String> = paragraph
        .lines(&book)
        .iter()
        .flat_map(|line| line.tokens.iter())
        .filter(|token| token.kind() == TokenKind::Ordering)
        .map(|token| token.data().trim_end().to_string())
        .collect();
    let expected: Vec<String> = (1..=20).map(|i| format!("{i}.")).collect();
    assert_eq!(labels, expected);
}

#[test]
fn sibling_lists_count_independently() {
    let (book, fonts) = book();
    let paragraph = Paragraph::new(
        "<ol><li>a</li><li>b</li></ol><ol><li>c</li></ol>",
        fonts,
        SIZE,
        Pt(400.0),
    );
    let lines = line_texts(&paragraph, &book);
    assert_eq!(lines, vec!["1. a", "2. b", " ", "1. c", " "]);
}

#[rstest]
#[case(Pt(100.0), Pt(400.0))]
#[case(Pt(60.0), Pt(61.0))]
#[case(Pt(200.0), Pt(1000.0))]
fn narrower_paragraphs_wrap_more(#[case] narrow: Pt, #[case] wide: Pt) {
    let (book, fonts) = book();
    let text = lipsum::lipsum(60);
    let narrow = Paragraph::new(text.as_str(), fonts, SIZE, narrow);
    let wide = Paragraph::new(text.as_str(), fonts, SIZE, wide);

    assert!(narrow.lines(&book).len() >= wide.lines(&book).len());
}

#[rstest]
#[case(Pt(37.0), 7)]
#[case(Pt(5.5), 1)]
#[case(Pt(100.0), 20)]
fn oversized_words_split_into_fitting_pieces(#[case] width: Pt, #[case] per_line: usize) {
    let (book, fonts) = book();
    let word = "x".repeat(203);
    let paragraph = Paragraph::new(word.as_str(), fonts, SIZE, width);

    let lines = paragraph.lines(&book);
    assert_eq!(lines.len(), 203usize.div_ceil(per_line));
    assert!(lines.iter().all(|line| line.width <= width));
    let joined: String = lines.iter().map(|line| line.text.as_str()).collect();
    assert_eq!(joined, word);
}

#[test]
fn unsplittable_words_stay_whole_on_tiny_widths() {
    let (book, fonts) = book();
    let paragraph = Paragraph::new("abc def", fonts, SIZE, Pt(2.0));
    assert_eq!(line_texts(&paragraph, &book), vec!["abc", "def"]);
}

#[test]
fn right_aligned_lists_are_plain_lines() {
    let (book, fonts) = book();
    let mut paragraph = Paragraph::new("<ul><li>one</li><li>two</li></ul>", fonts, SIZE, Pt(400.0));
    paragraph.set_align(HorizontalAlignment::Right);

    assert_eq!(line_texts(&paragraph, &book), vec!["one", "two", " "]);
    assert_eq!(paragraph.line_width(&book, 0), Some(Pt(20.0 + 15.0)));
}

#[test]
fn bold_runs_are_measured_in_the_bold_face() {
    let (book, fonts) = book();
    let paragraph = Paragraph::new("<b>abcd</b>", fonts, SIZE, Pt(400.0));
    // 550 units per character in the bold face
    assert_eq!(paragraph.max_line_width(&book), Pt(22.0));
}
