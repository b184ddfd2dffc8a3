use anyhow::Result;

use crate::scanner::{Output, RenderEvent};

#[derive(Debug, Default)]
pub struct EventRecorder {
    pub events: Vec<RenderEvent>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, event: RenderEvent) -> Result<()> {
        self.events.push(event);
        Ok(())
    }
}

impl Output for EventRecorder {
    fn begin_document(&mut self) -> Result<()> {
        self.push(RenderEvent::BeginDocument)
    }

    fn chapter(&mut self, glyphs: &str) -> Result<()> {
        self.push(RenderEvent::Chapter {
            glyphs: glyphs.to_owned(),
        })
    }

    fn r#break(&mut self) -> Result<()> {
        self.push(RenderEvent::Break)
    }

    fn begin_line(&mut self) -> Result<()> {
        self.push(RenderEvent::BeginLine)
    }

    fn newline(&mut self) -> Result<()> {
        self.push(RenderEvent::NewLine)
    }

    fn end_line(&mut self) -> Result<()> {
        self.push(RenderEvent::EndLine)
    }

    fn character(&mut self, text: &str) -> Result<()> {
        self.push(RenderEvent::Character {
            text: text.to_owned(),
        })
    }

    fn short_math(&mut self, text: &str) -> Result<()> {
        self.push(RenderEvent::ShortMath {
            text: text.to_owned(),
        })
    }

    fn math(&mut self, text: &str) -> Result<()> {
        self.push(RenderEvent::Math {
            text: text.to_owned(),
        })
    }

    fn ruby(&mut self, base: &str, annotation: &str) -> Result<()> {
        self.push(RenderEvent::Ruby {
            base: base.to_owned(),
            annotation: annotation.to_owned(),
        })
    }

    fn eof(&mut self) -> Result<()> {
        self.push(RenderEvent::Eof)
    }
}
