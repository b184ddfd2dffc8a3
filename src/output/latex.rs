use std::io::Write;

use anyhow::Result;

use crate::{config::DocumentConfig, scanner::Output};

pub struct LaTeXOutput<W: Write> {
    out: W,
    config: DocumentConfig,
}

impl<W: Write> LaTeXOutput<W> {
    pub fn new(out: W, config: DocumentConfig) -> Self {
        Self { out, config }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

// 地の文の特殊文字．数式やルビはそのまま出す
pub fn escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '%' => escaped.push_str("\\%"),
            '\\' => escaped.push_str("\\textbackslash "),
            '_' => escaped.push_str("\\_"),
            '&' => escaped.push_str("\\&"),
            c => escaped.push(c),
        }
    }
    escaped
}

impl<W: Write> Output for LaTeXOutput<W> {
    fn begin_document(&mut self) -> Result<()> {
        writeln!(
            self.out,
            "\\documentclass[{}]{{{}}}",
            self.config.document_options, self.config.document_style
        )?;
        self.out.write_all(self.config.preamble.as_bytes())?;
        self.out.write_all(b"\\begin{document}\n")?;
        Ok(())
    }

    fn chapter(&mut self, glyphs: &str) -> Result<()> {
        writeln!(self.out, "\\chapter{{{}}}", escape(glyphs))?;
        Ok(())
    }

    fn r#break(&mut self) -> Result<()> {
        self.out.write_all(b"\\bigbreak\n")?;
        Ok(())
    }

    // 字下げは LaTeX の段落に任せる
    fn begin_line(&mut self) -> Result<()> {
        Ok(())
    }

    fn newline(&mut self) -> Result<()> {
        self.out.write_all(b"\\noindent\\null ")?;
        Ok(())
    }

    fn end_line(&mut self) -> Result<()> {
        self.out.write_all(b"\n\n")?;
        Ok(())
    }

    fn character(&mut self, text: &str) -> Result<()> {
        self.out.write_all(escape(text).as_bytes())?;
        Ok(())
    }

    fn short_math(&mut self, text: &str) -> Result<()> {
        write!(self.out, "\\mbox{{\\yoko ${}$}}", text)?;
        Ok(())
    }

    fn math(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "${}$", text)?;
        Ok(())
    }

    fn ruby(&mut self, base: &str, annotation: &str) -> Result<()> {
        write!(self.out, "\\ruby{{{}}}{{{}}}", base, annotation)?;
        Ok(())
    }

    fn eof(&mut self) -> Result<()> {
        self.out.write_all(b"\\end{document}\n")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
