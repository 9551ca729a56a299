//! Diagnostics collected during a run and their workflow-summary rendering.
//!
//! Problems come in two severities: errors reject the run, warnings are
//! advisory and the run continues. Both are aggregated rather than
//! short-circuited so the user sees every problem in one pass. Infos are the
//! next-steps entries shown after a successful run.

use std::fmt;

/// A user-facing message with a short summary and a details paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub summary: String,
    pub details: String,
}

impl Diagnostic {
    pub fn new(summary: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            details: details.into(),
        }
    }
}

/// A hard failure that terminates the run, carrying the same two-part
/// message as a [`Diagnostic`]. Convertible into `anyhow::Error` and
/// recoverable from one via downcast.
#[derive(Debug, Clone)]
pub struct Fault {
    pub summary: String,
    pub details: String,
}

impl Fault {
    pub fn new(summary: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            details: details.into(),
        }
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        Diagnostic {
            summary: self.summary,
            details: self.details,
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary)
    }
}

impl std::error::Error for Fault {}

/// Accumulator for everything a run wants to tell the user.
#[derive(Debug, Default)]
pub struct Report {
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
    pub infos: Vec<Diagnostic>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, summary: impl Into<String>, details: impl Into<String>) {
        self.errors.push(Diagnostic::new(summary, details));
    }

    pub fn warning(&mut self, summary: impl Into<String>, details: impl Into<String>) {
        self.warnings.push(Diagnostic::new(summary, details));
    }

    pub fn info(&mut self, summary: impl Into<String>, details: impl Into<String>) {
        self.infos.push(Diagnostic::new(summary, details));
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Record a terminated run. A [`Fault`] keeps its two-part message,
    /// anything else becomes a bare error line. Ensures at least one error
    /// ends up in the report.
    pub fn absorb_failure(&mut self, error: anyhow::Error) {
        match error.downcast::<Fault>() {
            Ok(fault) => self.errors.push(fault.into_diagnostic()),
            Err(other) => self.error(other.to_string(), String::new()),
        }
        if self.errors.is_empty() {
            self.error(
                "An unknown error occurred",
                "This should not have happened. Please try again. If the error persists, \
                 please report it.",
            );
        }
    }

    /// All errors as workflow-summary markdown, one table block per error.
    pub fn render_errors(&self) -> String {
        self.errors
            .iter()
            .map(|e| {
                format!(
                    "<table><tr><td width=\"2000\"><sub><kbd>:x: Error</kbd></sub>\
                     <h3>{}</h3><i>{}</i><br /></td></tr></table>",
                    e.summary, e.details
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// All warnings as GitHub warning blockquotes.
    pub fn render_warnings(&self) -> String {
        self.warnings
            .iter()
            .map(|w| format!("> [!WARNING]\n> ### {}\n> <i>{}</i>", w.summary, w.details))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// All infos as numbered sections. Empty when the run failed.
    pub fn render_infos(&self, patch_name: &str) -> String {
        if self.has_errors() {
            return String::new();
        }
        let numbered = self
            .infos
            .iter()
            .enumerate()
            .map(|(idx, i)| format!("<h3>{} {}</h3>{}", emoji_digit(idx), i.summary, i.details))
            .collect::<Vec<_>>()
            .join("\n\n");
        format!("{}{}", success_header(patch_name), numbered)
    }
}

fn emoji_digit(index: usize) -> &'static str {
    const DIGITS: [&str; 10] = [
        ":one:",
        ":two:",
        ":three:",
        ":four:",
        ":five:",
        ":six:",
        ":seven:",
        ":eight:",
        ":nine:",
        ":keycap_ten:",
    ];
    DIGITS.get(index).copied().unwrap_or(":hash:")
}

/// Celebration block heading the next-steps section of the summary.
fn success_header(patch_name: &str) -> String {
    let name = if patch_name.is_empty() {
        "Success"
    } else {
        patch_name
    };
    format!(
        "\n---\n\n<table><tr><td width=\"2000\" align=\"center\">\n\n\
         # \u{1F389} {name} \u{1F389}\n\n\
         #### You are now ready to start working on your Gothic patch. \
         The following steps are recommended to get you started.\n\n\
         <br /></td></tr></table>\n\n\
         > [!TIP]\n\
         > A VM script was created with which you can create the VDF using \
         [GothicVDFS](http://www.bendlins.de/nico/gothic2/)\n\n\
         ## Next Steps\n\n"
    )
}
