//! Console progress reporting via `indicatif`.

use indicatif::{ProgressBar, ProgressStyle};

use attrex_model::ExtractProgress;

/// One bar across every table of every document; the message tracks the
/// document currently being scanned. Hidden automatically when stderr is
/// not a terminal.
pub struct ConsoleProgress {
    bar: ProgressBar,
}

impl ConsoleProgress {
    pub fn new(total_tables: u64) -> Self {
        let bar = ProgressBar::new(total_tables);
        bar.set_style(
            ProgressStyle::with_template("{msg:<48} {bar:40} {percent:>3}%")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Self { bar }
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl ExtractProgress for ConsoleProgress {
    fn document_started(&mut self, document: &str, _tables: usize) {
        self.bar.set_message(format!("Processing {document} ..."));
    }

    fn table_scanned(&mut self) {
        self.bar.inc(1);
    }
}
