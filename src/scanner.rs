// 原稿テキストの字句走査
//
// 入力の先頭から規則表 (rule.rs) を優先順に試し，最初に一致した規則で
// 入力を消費してイベントを 1 つ出力する．状態は行頭 (LineStart)，
// 行中 (InLine)，終端 (Done) の 3 つ．

pub mod event;
pub mod rule;
mod state;
mod step;

use anyhow::Result;

pub use event::{Output, RenderEvent};
pub use state::ScanState;
pub use step::{step, transition};

/// Scans the whole manuscript, sending every recognized unit to `out`.
pub fn run<O: Output + ?Sized>(input: &str, out: &mut O) -> Result<()> {
    out.begin_document()?;

    let mut state = ScanState::LineStart;
    let mut input = input;
    while state != ScanState::Done {
        (state, input) = step(state, input, out)?;
    }

    Ok(())
}
