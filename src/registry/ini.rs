use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    Entry { key: String, value: String },
    Comment(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    lines: Vec<Line>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Keys compare ASCII case-insensitively; the first match wins.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.lines.iter().find_map(|line| match line {
            Line::Entry { key: k, value } if k.eq_ignore_ascii_case(key) => Some(value.as_str()),
            _ => None,
        })
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        let existing = self.lines.iter_mut().find_map(|line| match line {
            Line::Entry { key: k, value: v } if k.eq_ignore_ascii_case(key) => Some(v),
            _ => None,
        });
        if let Some(slot) = existing {
            *slot = value;
            return;
        }

        self.lines.push(Line::Entry {
            key: key.to_string(),
            value,
        });
    }

    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }
}

/// An INI file kept in source order so that a rewrite only changes what was edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniDocument {
    /// Comment lines ahead of the first section header.
    preamble: Vec<String>,
    sections: Vec<Section>,
}

impl IniDocument {
    pub fn parse(input: &str) -> AppResult<Self> {
        let mut preamble = Vec::new();
        let mut sections: Vec<Section> = Vec::new();

        for (index, raw) in input.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(header) = line.strip_prefix('[') {
                let name = header.strip_suffix(']').ok_or_else(|| {
                    AppError::Registry(format!("line {}: unterminated section header", index + 1))
                })?;
                sections.push(Section::new(name.trim()));
                continue;
            }

            let is_comment = line.starts_with(';') || line.starts_with('#');
            let Some(section) = sections.last_mut() else {
                if is_comment {
                    preamble.push(line.to_string());
                    continue;
                }
                return Err(AppError::Registry(format!(
                    "line {}: entry outside of any section",
                    index + 1
                )));
            };

            if is_comment {
                section.lines.push(Line::Comment(line.to_string()));
                continue;
            }

            let (key, value) = line.split_once('=').ok_or_else(|| {
                AppError::Registry(format!("line {}: expected `key=value`", index + 1))
            })?;
            section.lines.push(Line::Entry {
                key: key.trim().to_string(),
                value: value.trim().to_string(),
            });
        }

        Ok(Self { preamble, sections })
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for comment in &self.preamble {
            out.push_str(comment);
            out.push('\n');
        }
        for section in &self.sections {
            out.push('[');
            out.push_str(&section.name);
            out.push_str("]\n");
            for line in &section.lines {
                match line {
                    Line::Entry { key, value } => {
                        out.push_str(key);
                        out.push('=');
                        out.push_str(value);
                    }
                    Line::Comment(text) => out.push_str(text),
                }
                out.push('\n');
            }
            out.push('\n');
        }
        out
    }

    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn sections_mut(&mut self) -> impl Iterator<Item = &mut Section> {
        self.sections.iter_mut()
    }

    pub fn push_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Removes the first section matching `predicate`, leaving the rest in order.
    pub fn remove_first(&mut self, predicate: impl Fn(&Section) -> bool) -> Option<Section> {
        let index = self.sections.iter().position(predicate)?;
        Some(self.sections.remove(index))
    }
}
