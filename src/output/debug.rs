use std::io::Write;

use anyhow::Result;

use crate::scanner::Output;

pub struct DebugOutput<W: Write> {
    out: W,
}

impl<W: Write> DebugOutput<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Output for DebugOutput<W> {
    fn begin_document(&mut self) -> Result<()> {
        writeln!(self.out, "begindocument")?;
        Ok(())
    }

    fn chapter(&mut self, glyphs: &str) -> Result<()> {
        writeln!(self.out, "chapter {:?}", glyphs)?;
        Ok(())
    }

    fn r#break(&mut self) -> Result<()> {
        writeln!(self.out, "break")?;
        Ok(())
    }

    fn begin_line(&mut self) -> Result<()> {
        writeln!(self.out, "beginline")?;
        Ok(())
    }

    fn newline(&mut self) -> Result<()> {
        writeln!(self.out, "newline")?;
        Ok(())
    }

    fn end_line(&mut self) -> Result<()> {
        writeln!(self.out, "endline")?;
        Ok(())
    }

    fn character(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "character {:?}", text)?;
        Ok(())
    }

    fn short_math(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "shortmath {:?}", text)?;
        Ok(())
    }

    fn math(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "math {:?}", text)?;
        Ok(())
    }

    fn ruby(&mut self, base: &str, annotation: &str) -> Result<()> {
        writeln!(self.out, "ruby {:?}, {:?}", base, annotation)?;
        Ok(())
    }

    fn eof(&mut self) -> Result<()> {
        writeln!(self.out, "eof")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
