//! Terminal output for the playground CLI
//!
//! Every status line goes through [`Output::status`], which renders a colored
//! glyph or, with `--no-color`, a bracketed tag that is easy to grep in scripts.

use owo_colors::OwoColorize;

/// Width of the key column in `kv` lines and of each table cell
const COLUMN_WIDTH: usize = 22;

/// Kind of status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Ok,
    Info,
    Warn,
    Error,
    Created,
    Skipped,
}

impl Status {
    fn tag(self) -> &'static str {
        match self {
            Status::Ok => "[OK]",
            Status::Info => "[INFO]",
            Status::Warn => "[WARN]",
            Status::Error => "[ERROR]",
            Status::Created => "[CREATED]",
            Status::Skipped => "[SKIPPED]",
        }
    }

    fn glyph(self) -> String {
        match self {
            Status::Ok | Status::Created => "+".green().bold().to_string(),
            Status::Info => "-".blue().to_string(),
            Status::Warn => "!".yellow().bold().to_string(),
            Status::Error => "x".red().bold().to_string(),
            Status::Skipped => "~".dimmed().to_string(),
        }
    }
}

/// Output style configuration
pub struct Output {
    /// Whether to use colored output
    pub colored: bool,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    /// Colored output
    pub fn new() -> Self {
        Self { colored: true }
    }

    /// Plain output with bracketed tags
    pub fn no_color() -> Self {
        Self { colored: false }
    }

    fn status(&self, status: Status, message: &str) {
        let line = if self.colored {
            format!("  {} {}", status.glyph(), message)
        } else {
            format!("  {} {}", status.tag(), message)
        };

        if status == Status::Error {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }

    /// Tool name, version and the service it talks to
    pub fn banner(&self) {
        let version = concat!("v", env!("CARGO_PKG_VERSION"));
        if self.colored {
            println!(
                "\n  {} {} {}\n",
                "bedrock-playground".bright_cyan().bold(),
                version.dimmed(),
                "(AWS Bedrock Runtime)".dimmed()
            );
        } else {
            println!("\n  bedrock-playground {} (AWS Bedrock Runtime)\n", version);
        }
    }

    /// Print a completed step
    pub fn success(&self, message: &str) {
        self.status(Status::Ok, message);
    }

    /// Print an informational line
    pub fn info(&self, message: &str) {
        self.status(Status::Info, message);
    }

    /// Print a warning
    pub fn warning(&self, message: &str) {
        self.status(Status::Warn, message);
    }

    /// Print an error to stderr
    pub fn error(&self, message: &str) {
        self.status(Status::Error, message);
    }

    /// Report a written file
    pub fn created(&self, file_type: &str, path: &str) {
        self.status(Status::Created, &format!("{} {}", path, file_type));
    }

    /// Report a file left untouched
    pub fn skipped(&self, path: &str, reason: &str) {
        self.status(Status::Skipped, &format!("{} ({})", path, reason));
    }

    /// Section title
    pub fn header(&self, title: &str) {
        if self.colored {
            println!("\n  {}", title.bold().underline());
        } else {
            println!("\n  # {}", title);
        }
    }

    /// Aligned `key  value` line
    pub fn kv(&self, key: &str, value: &str) {
        let key = format!("{:<width$}", key, width = COLUMN_WIDTH);
        if self.colored {
            println!("    {}{}", key.dimmed(), value);
        } else {
            println!("    {}{}", key, value);
        }
    }

    /// Suggestion shown after a warning
    pub fn hint(&self, message: &str) {
        if self.colored {
            println!("  {}", message.italic().dimmed());
        } else {
            println!("  hint: {}", message);
        }
    }

    /// Shell command the user can copy
    pub fn command(&self, cmd: &str) {
        if self.colored {
            println!("      {} {}", "$".dimmed(), cmd.cyan());
        } else {
            println!("      $ {}", cmd);
        }
    }

    /// Table column titles followed by a rule
    pub fn table_header(&self, columns: &[&str]) {
        let header = Self::pad_row(columns);
        let rule = "-".repeat(header.trim_end().len());
        if self.colored {
            println!("    {}\n    {}", header.bold(), rule.dimmed());
        } else {
            println!("    {}\n    {}", header, rule);
        }
    }

    /// One table row
    pub fn table_row(&self, values: &[&str]) {
        println!("    {}", Self::pad_row(values));
    }

    /// Agent name, then the reply text exactly as returned
    pub fn reply(&self, agent: &str, text: &str) {
        if self.colored {
            println!("{}", format!("[{}]", agent).bright_cyan().bold());
        } else {
            println!("[{}]", agent);
        }
        println!("{}", text);
    }

    fn pad_row(values: &[&str]) -> String {
        values
            .iter()
            .map(|v| format!("{:<width$}", v, width = COLUMN_WIDTH))
            .collect::<String>()
    }
}
