use text_size::{TextRange, TextSize};

/// A single text edit attached to a diagnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fix {
    label: String,
    range: TextRange,
    replacement: String,
}

impl Fix {
    pub fn insert(offset: TextSize, text: impl Into<String>, label: impl Into<String>) -> Self {
        Self { label: label.into(), range: TextRange::empty(offset), replacement: text.into() }
    }

    pub fn delete(range: TextRange, label: impl Into<String>) -> Self {
        Self { label: label.into(), range, replacement: String::new() }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }
}

/// Applies `fixes` to `text` in offset order and returns the new text along
/// with the number of fixes applied.
///
/// A fix that overlaps one already applied is skipped.
pub fn apply_fixes<'a>(text: &str, fixes: impl IntoIterator<Item = &'a Fix>) -> (String, usize) {
    let mut fixes = fixes.into_iter().collect::<Vec<_>>();
    fixes.sort_by_key(|fix| (fix.range.start(), fix.range.end()));

    let mut output = String::with_capacity(text.len());
    let mut copied = TextSize::new(0);
    let mut applied = 0;

    for fix in fixes {
        if fix.range.start() < copied {
            continue;
        }

        output.push_str(&text[TextRange::new(copied, fix.range.start())]);
        output.push_str(&fix.replacement);
        copied = fix.range.end();
        applied += 1;
    }

    output.push_str(&text[TextRange::new(copied, TextSize::of(text))]);
    (output, applied)
}
