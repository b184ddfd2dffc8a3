use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "type")]
pub enum RenderEvent {
    BeginDocument,
    Chapter { glyphs: String },
    Break,     // 空行
    BeginLine, // 字下げのある行
    NewLine,   // 字下げの無い行
    EndLine,   // 行末
    Character { text: String },
    ShortMath { text: String }, // 10^12 など
    Math { text: String },
    Ruby { base: String, annotation: String },
    Eof,
}

/// Receiver of the event stream, called strictly in scan order.
pub trait Output {
    fn begin_document(&mut self) -> Result<()>;
    fn chapter(&mut self, glyphs: &str) -> Result<()>;
    fn r#break(&mut self) -> Result<()>;
    fn begin_line(&mut self) -> Result<()>;
    fn newline(&mut self) -> Result<()>;
    fn end_line(&mut self) -> Result<()>;
    fn character(&mut self, text: &str) -> Result<()>;
    fn short_math(&mut self, text: &str) -> Result<()>;
    fn math(&mut self, text: &str) -> Result<()>;
    fn ruby(&mut self, base: &str, annotation: &str) -> Result<()>;
    fn eof(&mut self) -> Result<()>;

    /// Flushes whatever the backend buffers. Called once after the scan.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }

    fn emit(&mut self, event: &RenderEvent) -> Result<()> {
        match event {
            RenderEvent::BeginDocument => self.begin_document(),
            RenderEvent::Chapter { glyphs } => self.chapter(glyphs),
            RenderEvent::Break => self.r#break(),
            RenderEvent::BeginLine => self.begin_line(),
            RenderEvent::NewLine => self.newline(),
            RenderEvent::EndLine => self.end_line(),
            RenderEvent::Character { text } => self.character(text),
            RenderEvent::ShortMath { text } => self.short_math(text),
            RenderEvent::Math { text } => self.math(text),
            RenderEvent::Ruby { base, annotation } => self.ruby(base, annotation),
            RenderEvent::Eof => self.eof(),
        }
    }
}
