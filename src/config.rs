use std::{fs, path::Path};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

// LaTeX 文書の設定
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentConfig {
    pub document_style: String,   // \documentclass{...}
    pub document_options: String, // \documentclass[...]
    pub preamble: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            document_style: "treport".to_owned(),
            document_options: "a5j".to_owned(),
            preamble: "\\usepackage{okumacro}\n".to_owned(),
        }
    }
}

// 単行本の版面
static TANKOBON_PREAMBLE: &str = r"\usepackage{okumacro}
\setlength\textheight{18\Cvs}
\setlength\textwidth{43\Cwd}
\setlength\bigskipamount{1\Cvs}
\makeatletter
\def\@makechapterhead#1{\hbox{}%
  \vskip1\Cvs
  {\parindent\z@
   \raggedright
   \leavevmode
   \null\hskip10\Cwd#1\relax}\nobreak\vskip2\Cvs}
\makeatother
";

impl DocumentConfig {
    pub fn tankobon() -> Self {
        Self {
            preamble: TANKOBON_PREAMBLE.to_owned(),
            ..Self::default()
        }
    }

    /// Reads a JSON config file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Plain,
    Tankobon, // 単行本
}

impl Preset {
    pub fn of(name: &str) -> Result<Self> {
        match name {
            "plain" => Ok(Self::Plain),
            "tankobon" => Ok(Self::Tankobon),
            name => bail!("Unknown preset: {}", name),
        }
    }

    pub fn config(self) -> DocumentConfig {
        match self {
            Self::Plain => DocumentConfig::default(),
            Self::Tankobon => DocumentConfig::tankobon(),
        }
    }
}
