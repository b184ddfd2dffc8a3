use anyhow::Result;

use genko_tex::{
    output::EventRecorder,
    scanner::{run, step, RenderEvent, ScanState},
};

fn scan(input: &str) -> Result<Vec<RenderEvent>> {
    let mut recorder = EventRecorder::new();
    run(input, &mut recorder)?;
    Ok(recorder.events)
}

fn chars(s: &str) -> Vec<RenderEvent> {
    s.chars()
        .map(|c| RenderEvent::Character {
            text: c.to_string(),
        })
        .collect()
}

fn character(text: &str) -> RenderEvent {
    RenderEvent::Character {
        text: text.to_owned(),
    }
}

use RenderEvent::{BeginDocument, BeginLine, Break, EndLine, Eof, NewLine};

#[test]
fn test_empty() -> Result<()> {
    assert_eq!(scan("")?, vec![BeginDocument, Eof]);
    Ok(())
}

#[test]
fn test_chapter_then_unindented_line() -> Result<()> {
    let mut expected = vec![
        BeginDocument,
        RenderEvent::Chapter {
            glyphs: "Ⅲ".to_owned(),
        },
        NewLine,
    ];
    expected.extend(chars("本文"));
    expected.push(Eof);

    assert_eq!(scan("　　III\n本文")?, expected);
    Ok(())
}

#[test]
fn test_chapter_swallows_blank_lines() -> Result<()> {
    assert_eq!(
        scan("　　IV\r\n\n\n　本")?,
        vec![
            BeginDocument,
            RenderEvent::Chapter {
                glyphs: "Ⅳ".to_owned()
            },
            BeginLine,
            character("本"),
            Eof,
        ]
    );
    Ok(())
}

#[test]
fn test_chapter_only_at_line_start() -> Result<()> {
    assert_eq!(
        scan("本　　III\n")?,
        vec![
            BeginDocument,
            NewLine,
            character("本"),
            character("　"),
            character("　"),
            character("III"),
            EndLine,
            Eof,
        ]
    );
    Ok(())
}

#[test]
fn test_blank_lines_are_separate_breaks() -> Result<()> {
    assert_eq!(scan("\n\n")?, vec![BeginDocument, Break, Break, Eof]);
    Ok(())
}

#[test]
fn test_indented_paragraph() -> Result<()> {
    let mut expected = vec![BeginDocument, BeginLine];
    expected.extend(chars("段落"));
    expected.push(Eof);

    assert_eq!(scan("　段落")?, expected);
    Ok(())
}

#[test]
fn test_only_one_ideographic_space_is_indent() -> Result<()> {
    let mut expected = vec![BeginDocument, BeginLine];
    expected.extend(chars("　本"));
    expected.push(Eof);

    assert_eq!(scan("　　本")?, expected);
    Ok(())
}

#[test]
fn test_crlf_lines() -> Result<()> {
    assert_eq!(
        scan("本\r\n\r\n文")?,
        vec![
            BeginDocument,
            NewLine,
            character("本"),
            EndLine,
            Break,
            NewLine,
            character("文"),
            Eof,
        ]
    );
    Ok(())
}

#[test]
fn test_math_assignment() -> Result<()> {
    let mut expected = vec![
        BeginDocument,
        BeginLine,
        RenderEvent::Math {
            text: "x = y ".to_owned(),
        },
    ];
    expected.extend(chars("+ 1"));
    expected.extend([EndLine, Eof]);

    assert_eq!(scan("　x = y + 1\n")?, expected);
    Ok(())
}

#[test]
fn test_math_normalizes_full_width_and_lambda() -> Result<()> {
    assert_eq!(
        scan("　y = f（λ）｛x｝\n")?,
        vec![
            BeginDocument,
            BeginLine,
            RenderEvent::Math {
                text: "y = f(\\lambda ){x}".to_owned()
            },
            EndLine,
            Eof,
        ]
    );
    Ok(())
}

#[test]
fn test_ruby() -> Result<()> {
    let mut expected = vec![
        BeginDocument,
        BeginLine,
        RenderEvent::Ruby {
            base: "日本".to_owned(),
            annotation: "にほん".to_owned(),
        },
    ];
    expected.extend(chars("です"));
    expected.push(Eof);

    assert_eq!(scan("　#{日本}{にほん}です")?, expected);
    Ok(())
}

#[test]
fn test_unterminated_ruby_is_literal() -> Result<()> {
    let mut expected = vec![BeginDocument, NewLine];
    expected.extend(chars("#{日本}{にほ"));
    expected.push(Eof);

    assert_eq!(scan("#{日本}{にほ")?, expected);
    Ok(())
}

#[test]
fn test_bom() -> Result<()> {
    // 行頭の BOM は捨てる
    assert_eq!(
        scan("\u{feff}本")?,
        vec![BeginDocument, NewLine, character("本"), Eof]
    );
    assert_eq!(
        scan("本\n\u{feff}文")?,
        vec![
            BeginDocument,
            NewLine,
            character("本"),
            EndLine,
            NewLine,
            character("文"),
            Eof,
        ]
    );

    // それ以外は普通の文字
    assert_eq!(
        scan("本\u{feff}")?,
        vec![
            BeginDocument,
            NewLine,
            character("本"),
            character("\u{feff}"),
            Eof,
        ]
    );
    assert_eq!(
        scan("　\u{feff}")?,
        vec![BeginDocument, BeginLine, character("\u{feff}"), Eof]
    );
    Ok(())
}

#[test]
fn test_words_and_short_math() -> Result<()> {
    assert_eq!(
        scan("  Rust製の10^12個")?,
        vec![
            BeginDocument,
            BeginLine,
            character("Rust"),
            character("製"),
            character("の"),
            RenderEvent::ShortMath {
                text: "10^12".to_owned()
            },
            character("個"),
            Eof,
        ]
    );
    Ok(())
}

#[test]
fn test_no_indent_does_not_consume() -> Result<()> {
    let mut recorder = EventRecorder::new();

    let (state, rest) = step(ScanState::LineStart, "本文", &mut recorder)?;
    assert_eq!((state, rest), (ScanState::InLine, "本文"));

    let (state, rest) = step(state, rest, &mut recorder)?;
    assert_eq!((state, rest), (ScanState::InLine, "文"));

    assert_eq!(recorder.events, vec![NewLine, character("本")]);
    Ok(())
}

#[test]
fn test_bom_emits_nothing() -> Result<()> {
    let mut recorder = EventRecorder::new();
    let (state, rest) = step(ScanState::LineStart, "\u{feff}本", &mut recorder)?;
    assert_eq!((state, rest), (ScanState::LineStart, "本"));
    assert!(recorder.events.is_empty());
    Ok(())
}
