// 規則表
//
// 上から順に試し，最初に一致したものを採用する (後の規則は試さない)．
// パターンはすべて入力の先頭に固定した前方一致．

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    roman_numeral,
    scanner::{event::RenderEvent, state::ScanState},
};

/// What applying a rule does: skip `consumed` bytes, emit `event`, move to `next`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub consumed: usize,
    pub event: Option<RenderEvent>,
    pub next: ScanState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    Any,
    LineStart,
    InLine,
}

impl Guard {
    pub fn admits(self, state: ScanState) -> bool {
        match self {
            Guard::Any => true,
            Guard::LineStart => state == ScanState::LineStart,
            Guard::InLine => state == ScanState::InLine,
        }
    }
}

pub struct Rule {
    pub name: &'static str,
    pub guard: Guard,
    pub matcher: fn(&str) -> Option<Transition>,
}

pub static RULES: [Rule; 12] = [
    Rule {
        name: "bom",
        guard: Guard::LineStart,
        matcher: match_bom,
    },
    Rule {
        name: "chapter",
        guard: Guard::LineStart,
        matcher: match_chapter,
    },
    Rule {
        name: "break",
        guard: Guard::LineStart,
        matcher: match_blank_line,
    },
    Rule {
        name: "endline",
        guard: Guard::Any,
        matcher: match_end_of_line,
    },
    Rule {
        name: "beginline",
        guard: Guard::LineStart,
        matcher: match_indent,
    },
    Rule {
        name: "newline",
        guard: Guard::LineStart,
        matcher: match_no_indent,
    },
    Rule {
        name: "shortmath",
        guard: Guard::InLine,
        matcher: match_short_math,
    },
    Rule {
        name: "math",
        guard: Guard::InLine,
        matcher: match_math,
    },
    Rule {
        name: "ruby",
        guard: Guard::InLine,
        matcher: match_ruby,
    },
    Rule {
        name: "word",
        guard: Guard::InLine,
        matcher: match_word,
    },
    Rule {
        name: "character",
        guard: Guard::Any,
        matcher: match_character,
    },
    Rule {
        name: "eof",
        guard: Guard::Any,
        matcher: match_eof,
    },
];

// 改行は CR+LF と LF のどちらもありうる
static REGEX_EOL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\r?\n").unwrap());

// "　　III" のような章見出し．全角の "Ｉ" も 1 章として受け付ける
static REGEX_CHAPTER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^　　(I|II|III|IV|V|VI|VII|VIII|IX|X|XI|XII|Ｉ)(?:\r?\n)+").unwrap()
});

// 段落字下げ
static REGEX_INDENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:　| +)").unwrap());

// 10^12, א_0 など
static REGEX_SHORT_MATH: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9א]+[_^][0-9]+").unwrap());

// E = mc^2 など
static REGEX_MATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[-a-zA-Z^/λ ]+ *= *[-0-9a-zA-Z^/λ= (){}（）｛｝]+").unwrap()
});

// #{漢字}{るび}
static REGEX_RUBY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#\{([^}]*)\}\{([^}]*)\}").unwrap());

// 英単語，略語
static REGEX_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z][-a-zA-Z_0-9]{2,}").unwrap());

fn match_bom(input: &str) -> Option<Transition> {
    // 捨てる
    input.starts_with('\u{feff}').then(|| Transition {
        consumed: '\u{feff}'.len_utf8(),
        event: None,
        next: ScanState::LineStart,
    })
}

fn match_chapter(input: &str) -> Option<Transition> {
    let caps = REGEX_CHAPTER.captures(input)?;
    Some(Transition {
        consumed: caps[0].len(),
        event: Some(RenderEvent::Chapter {
            glyphs: roman_numeral::normalize(&caps[1]).to_owned(),
        }),
        next: ScanState::LineStart,
    })
}

fn match_blank_line(input: &str) -> Option<Transition> {
    let eol = REGEX_EOL.find(input)?;
    Some(Transition {
        consumed: eol.end(),
        event: Some(RenderEvent::Break),
        next: ScanState::LineStart,
    })
}

fn match_end_of_line(input: &str) -> Option<Transition> {
    let eol = REGEX_EOL.find(input)?;
    Some(Transition {
        consumed: eol.end(),
        event: Some(RenderEvent::EndLine),
        next: ScanState::LineStart,
    })
}

fn match_indent(input: &str) -> Option<Transition> {
    let indent = REGEX_INDENT.find(input)?;
    Some(Transition {
        consumed: indent.end(),
        event: Some(RenderEvent::BeginLine),
        next: ScanState::InLine,
    })
}

// 字下げの無い行．何も消費せずに状態だけ変え，先頭の文字は InLine で読み直す
fn match_no_indent(input: &str) -> Option<Transition> {
    (!input.is_empty()).then_some(Transition {
        consumed: 0,
        event: Some(RenderEvent::NewLine),
        next: ScanState::InLine,
    })
}

fn match_short_math(input: &str) -> Option<Transition> {
    let m = REGEX_SHORT_MATH.find(input)?;
    Some(Transition {
        consumed: m.end(),
        event: Some(RenderEvent::ShortMath {
            text: m.as_str().to_owned(),
        }),
        next: ScanState::InLine,
    })
}

fn match_math(input: &str) -> Option<Transition> {
    let m = REGEX_MATH.find(input)?;
    Some(Transition {
        consumed: m.end(),
        event: Some(RenderEvent::Math {
            text: normalize_math(m.as_str()),
        }),
        next: ScanState::InLine,
    })
}

// 全角括弧を半角に，λ を \lambda に
fn normalize_math(expr: &str) -> String {
    expr.chars()
        .map(|c| match c {
            '（' => '(',
            '）' => ')',
            '｛' => '{',
            '｝' => '}',
            c => c,
        })
        .collect::<String>()
        .replace('λ', "\\lambda ")
}

fn match_ruby(input: &str) -> Option<Transition> {
    let caps = REGEX_RUBY.captures(input)?;
    Some(Transition {
        consumed: caps[0].len(),
        event: Some(RenderEvent::Ruby {
            base: caps[1].to_owned(),
            annotation: caps[2].to_owned(),
        }),
        next: ScanState::InLine,
    })
}

fn match_word(input: &str) -> Option<Transition> {
    let m = REGEX_WORD.find(input)?;
    Some(Transition {
        consumed: m.end(),
        event: Some(RenderEvent::Character {
            text: m.as_str().to_owned(),
        }),
        next: ScanState::InLine,
    })
}

fn match_character(input: &str) -> Option<Transition> {
    let c = input.chars().next()?;
    Some(Transition {
        consumed: c.len_utf8(),
        event: Some(RenderEvent::Character {
            text: c.to_string(),
        }),
        next: ScanState::InLine,
    })
}

fn match_eof(input: &str) -> Option<Transition> {
    input.is_empty().then_some(Transition {
        consumed: 0,
        event: Some(RenderEvent::Eof),
        next: ScanState::Done,
    })
}
