// Output の実装
//
// - recorder: イベントをそのまま記録する (テスト用)
// - debug: 1 イベント 1 行で書き出す
// - json: 1 イベント 1 行の JSON
// - latex: 組版用の LaTeX

pub mod debug;
pub mod json;
pub mod latex;
pub mod recorder;

pub use debug::DebugOutput;
pub use json::JsonLinesOutput;
pub use latex::LaTeXOutput;
pub use recorder::EventRecorder;
