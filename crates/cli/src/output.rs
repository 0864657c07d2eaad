//! Writes command results to stdout as text lines or pretty JSON.

use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub struct Printer {
    json: bool,
}

impl Printer {
    pub const fn new(json: bool) -> Self {
        Self { json }
    }

    /// Print `value` as JSON, or the lines `render` produces for it.
    #[allow(clippy::print_stdout)] // stdout is this CLI's output channel
    pub fn emit<T: Serialize>(
        self,
        value: &T,
        render: impl FnOnce(&T) -> Vec<String>,
    ) -> Result<(), serde_json::Error> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            for line in render(value) {
                println!("{line}");
            }
        }
        Ok(())
    }
}
