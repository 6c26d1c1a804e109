//! Paged A4 text layout and PDF emission.
//!
//! Layout is planned first as plain data ([`PagePlan`]) and only then drawn with
//! `printpdf`, so page breaks can be checked without parsing PDF output.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

pub const PAGE_WIDTH_PT: f32 = 595.0;
pub const PAGE_HEIGHT_PT: f32 = 842.0;
pub const MARGIN_LEFT_PT: f32 = 50.0;
pub const MARGIN_TOP_PT: f32 = 60.0;
pub const MARGIN_BOTTOM_PT: f32 = 50.0;
pub const TITLE_SIZE_PT: f32 = 18.0;
pub const BODY_SIZE_PT: f32 = 11.0;
pub const LINE_GAP_PT: f32 = 16.0;
pub const WRAP_CHARS: usize = 95;

const TITLE_GAP_PT: f32 = 30.0;
const TITLE_Y_PT: f32 = PAGE_HEIGHT_PT - MARGIN_TOP_PT;
const FIRST_LINE_Y_PT: f32 = TITLE_Y_PT - TITLE_GAP_PT;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("'{document}' contains {character:?} which the built-in PDF font cannot encode")]
    UnsupportedCharacter { document: String, character: char },
    #[error("pdf rendering failed for '{document}': {message}")]
    Pdf { document: String, message: String },
    #[error("register workbook could not be written: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
}

/// One body line positioned on a page, `y` measured from the bottom edge in points.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageLayout {
    pub lines: Vec<PlacedLine>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PagePlan {
    pub title: String,
    pub pages: Vec<PageLayout>,
}

/// Hard-wrap at [`WRAP_CHARS`] characters with no regard for word boundaries.
/// An empty line stays a single empty chunk so paragraph gaps survive.
pub fn wrap(line: &str) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    if chars.is_empty() {
        return vec![String::new()];
    }
    chars
        .chunks(WRAP_CHARS)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Place every wrapped chunk top to bottom, opening a new page (with the title
/// redrawn) whenever the cursor has dropped below the bottom margin.
pub fn paginate(title: &str, lines: &[String]) -> PagePlan {
    let mut pages = vec![PageLayout::default()];
    let mut y = FIRST_LINE_Y_PT;

    for chunk in lines.iter().flat_map(|line| wrap(line)) {
        if y < MARGIN_BOTTOM_PT {
            pages.push(PageLayout::default());
            y = FIRST_LINE_Y_PT;
        }
        if let Some(page) = pages.last_mut() {
            page.lines.push(PlacedLine { text: chunk, y });
        }
        y -= LINE_GAP_PT;
    }

    PagePlan {
        title: title.to_string(),
        pages,
    }
}

/// Whether the built-in Helvetica (WinAnsi encoding) can show `c`.
pub fn is_winansi(c: char) -> bool {
    matches!(c, ' '..='~' | '\u{a0}'..='\u{ff}')
        || matches!(
            c,
            '€' | '‚'
                | 'ƒ'
                | '„'
                | '…'
                | '†'
                | '‡'
                | 'ˆ'
                | '‰'
                | 'Š'
                | '‹'
                | 'Œ'
                | 'Ž'
                | '\u{2018}'
                | '\u{2019}'
                | '\u{201c}'
                | '\u{201d}'
                | '•'
                | '\u{2013}'
                | '\u{2014}'
                | '˜'
                | '™'
                | 'š'
                | '›'
                | 'œ'
                | 'ž'
                | 'Ÿ'
        )
}

fn ensure_encodable(document: &str, text: &str) -> Result<(), RenderError> {
    match text.chars().find(|c| !is_winansi(*c)) {
        Some(character) => Err(RenderError::UnsupportedCharacter {
            document: document.to_string(),
            character,
        }),
        None => Ok(()),
    }
}

fn pt(value: f32) -> Mm {
    Mm(value * 25.4 / 72.0)
}

/// Render `lines` under `title` into PDF bytes.
///
/// Any character outside the font's encoding fails the whole document.
pub fn render_pdf(title: &str, lines: &[String]) -> Result<Vec<u8>, RenderError> {
    ensure_encodable(title, title)?;
    for line in lines {
        ensure_encodable(title, line)?;
    }

    let plan = paginate(title, lines);
    let pdf_error = |err: printpdf::Error| RenderError::Pdf {
        document: title.to_string(),
        message: format!("{err:?}"),
    };

    let (doc, first_page, first_layer) = PdfDocument::new(
        title,
        pt(PAGE_WIDTH_PT),
        pt(PAGE_HEIGHT_PT),
        "Page 1",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(pdf_error)?;

    for (index, page) in plan.pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) = doc.add_page(
                pt(PAGE_WIDTH_PT),
                pt(PAGE_HEIGHT_PT),
                format!("Page {}", index + 1),
            );
            doc.get_page(page_index).get_layer(layer_index)
        };
        draw_page(&layer, &font, &plan.title, page);
    }

    doc.save_to_bytes().map_err(pdf_error)
}

fn draw_page(layer: &PdfLayerReference, font: &IndirectFontRef, title: &str, page: &PageLayout) {
    layer.use_text(title, TITLE_SIZE_PT, pt(MARGIN_LEFT_PT), pt(TITLE_Y_PT), font);
    for line in &page.lines {
        layer.use_text(
            line.text.as_str(),
            BODY_SIZE_PT,
            pt(MARGIN_LEFT_PT),
            pt(line.y),
            font,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("line {i}")).collect()
    }

    #[test]
    fn wrap_splits_mid_word_at_fixed_width() {
        let long = "a".repeat(WRAP_CHARS * 2 + 3);
        let chunks = wrap(&long);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].chars().count(), WRAP_CHARS);
        assert_eq!(chunks[2], "aaa");

        assert_eq!(wrap(""), vec![String::new()]);
        assert_eq!(wrap(&"b".repeat(WRAP_CHARS)).len(), 1);
    }

    #[test]
    fn wrap_counts_characters_not_bytes() {
        let umlauts = "ü".repeat(WRAP_CHARS);
        assert_eq!(wrap(&umlauts).len(), 1);
    }

    #[test]
    fn forty_four_lines_fill_exactly_one_page() {
        let plan = paginate("Title", &lines(44));
        assert_eq!(plan.pages.len(), 1);
        let page = &plan.pages[0];
        assert_eq!(page.lines[0].y, 752.0);
        assert_eq!(page.lines[43].y, 64.0);
    }

    #[test]
    fn overflow_starts_a_new_page_at_the_top() {
        let plan = paginate("Title", &lines(45));
        assert_eq!(plan.pages.len(), 2);
        assert_eq!(plan.pages[1].lines.len(), 1);
        assert_eq!(plan.pages[1].lines[0].text, "line 44");
        assert_eq!(plan.pages[1].lines[0].y, 752.0);
    }

    #[test]
    fn wrapped_chunks_count_towards_page_capacity() {
        let mut input = lines(43);
        input.push("x".repeat(WRAP_CHARS + 1));
        let plan = paginate("Title", &input);
        assert_eq!(plan.pages.len(), 2);
        assert_eq!(plan.pages[1].lines[0].text, "x");
    }

    #[test]
    fn pagination_is_deterministic() {
        let input = lines(130);
        assert_eq!(paginate("T", &input), paginate("T", &input));
        assert_eq!(paginate("T", &input).pages.len(), 3);
    }

    #[test]
    fn german_text_and_dashes_are_encodable() {
        assert!("Übersicht — Maßnahmen „Prüfung“ 10 €"
            .chars()
            .all(is_winansi));
        assert!(!is_winansi('\u{4e2d}'));
        assert!(!is_winansi('\n'));
    }

    #[test]
    fn unsupported_characters_fail_rendering() {
        let result = render_pdf("Policy", &["Tool: 中文".to_string()]);
        match result {
            Err(RenderError::UnsupportedCharacter { character, .. }) => {
                assert_eq!(character, '中')
            }
            other => panic!("expected unsupported character, got {other:?}"),
        }
    }

    #[test]
    fn renders_pdf_bytes() {
        let bytes = render_pdf("AI Use Policy", &lines(60)).expect("pdf renders");
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn title_is_redrawn_on_every_page() {
        use printpdf::lopdf::content::Content;
        use printpdf::lopdf::{Document, Object};

        let bytes = render_pdf("AI Use Policy", &lines(100)).expect("pdf renders");
        let pdf = Document::load_mem(&bytes).expect("pdf parses");
        let pages = pdf.get_pages();
        assert_eq!(pages.len(), 3);

        for (number, page_id) in pages {
            let content = pdf.get_page_content(page_id).expect("page content");
            let operations = Content::decode(&content)
                .expect("content stream decodes")
                .operations;
            let shows_title = operations.iter().any(|op| {
                op.operator == "Tj"
                    && matches!(
                        op.operands.first(),
                        Some(Object::String(text, _)) if text.as_slice() == b"AI Use Policy"
                    )
            });
            assert!(shows_title, "page {number} lacks the title");
        }
    }
}
