#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    LineStart, // 行頭．この行にはまだ何も出力していない
    InLine,    // 行中
    Done,      // 入力の終わり
}
