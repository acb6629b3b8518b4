//! The natural-language request handed to a generative conversion tool.

use std::fmt;

/// Files the conversion is asked to produce, with what each one holds.
pub const CONVERSION_TARGETS: [(&str, &str); 3] = [
    (
        "PROMPT.md",
        "development instructions for the autonomous agent: project context, \
         working principles and the current objectives",
    ),
    (
        "@fix_plan.md",
        "a prioritized task list as markdown checkboxes, grouped into high, \
         medium and low priority",
    ),
    (
        "specs/requirements.md",
        "a requirements specification covering functional and non-functional \
         requirements, constraints and acceptance criteria",
    ),
];

/// What the conversion has to pull out of the source document.
pub const EXTRACTION_GOALS: [&str; 5] = [
    "project objectives",
    "key features",
    "technical constraints",
    "priorities",
    "success criteria",
];

/// A complete conversion instruction: the fixed request followed by the
/// verbatim source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionInstruction {
    text: String,
}

impl ConversionInstruction {
    /// Build the instruction for one document.
    ///
    /// `file_name` tags the appended content so the generator can refer
    /// to the original document by name.
    pub fn for_document(file_name: &str, content: &str) -> Self {
        let mut text = String::new();
        text.push_str("# Ralph Conversion Request\n\n");
        text.push_str(
            "Convert the source document below into the Ralph project format. \
             Write the following files in the current directory:\n\n",
        );
        for (file, purpose) in CONVERSION_TARGETS {
            text.push_str(&format!("- `{file}`: {purpose}\n"));
        }
        text.push_str("\nExtract from the document:\n\n");
        for goal in EXTRACTION_GOALS {
            text.push_str(&format!("- {goal}\n"));
        }
        text.push_str(
            "\nKeep the wording of the source where it is precise. Where the \
             document is silent, leave a clearly marked TODO instead of \
             inventing requirements.\n",
        );
        text.push_str(&format!("\n## Source document: {file_name}\n\n"));
        text.push_str(content);
        if !content.ends_with('\n') {
            text.push('\n');
        }

        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for ConversionInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
