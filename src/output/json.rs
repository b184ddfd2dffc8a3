use std::io::Write;

use anyhow::Result;

use crate::scanner::{Output, RenderEvent};

// 1 イベントを 1 行の JSON として書き出す
pub struct JsonLinesOutput<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesOutput<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write(&mut self, event: RenderEvent) -> Result<()> {
        serde_json::to_writer(&mut self.out, &event)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }
}

impl<W: Write> Output for JsonLinesOutput<W> {
    fn begin_document(&mut self) -> Result<()> {
        self.write(RenderEvent::BeginDocument)
    }

    fn chapter(&mut self, glyphs: &str) -> Result<()> {
        self.write(RenderEvent::Chapter {
            glyphs: glyphs.to_owned(),
        })
    }

    fn r#break(&mut self) -> Result<()> {
        self.write(RenderEvent::Break)
    }

    fn begin_line(&mut self) -> Result<()> {
        self.write(RenderEvent::BeginLine)
    }

    fn newline(&mut self) -> Result<()> {
        self.write(RenderEvent::NewLine)
    }

    fn end_line(&mut self) -> Result<()> {
        self.write(RenderEvent::EndLine)
    }

    fn character(&mut self, text: &str) -> Result<()> {
        self.write(RenderEvent::Character {
            text: text.to_owned(),
        })
    }

    fn short_math(&mut self, text: &str) -> Result<()> {
        self.write(RenderEvent::ShortMath {
            text: text.to_owned(),
        })
    }

    fn math(&mut self, text: &str) -> Result<()> {
        self.write(RenderEvent::Math {
            text: text.to_owned(),
        })
    }

    fn ruby(&mut self, base: &str, annotation: &str) -> Result<()> {
        self.write(RenderEvent::Ruby {
            base: base.to_owned(),
            annotation: annotation.to_owned(),
        })
    }

    fn eof(&mut self) -> Result<()> {
        self.write(RenderEvent::Eof)
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
