use std::path::{Path, PathBuf};

use chrono::Local;
use crossterm::event::KeyCode;
use tagsight_core::{
    apply, distinct_files, distinct_tags, summarize, FilterSelection, SummaryRow, TagValue,
};
use tagsight_export::{ExportMeta, CSV_FILENAME, PNG_FILENAME};
use tagsight_ingest::{ingest_files, IngestBatch};
use tagsight_runtime_config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Chart,
    Data,
}

#[derive(Debug, Clone)]
pub struct StatusLine {
    pub text: String,
    pub is_error: bool,
}

impl StatusLine {
    fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// All TUI state. Summary, filter options, and the filtered view are pure
/// recomputations from the log and the selection — nothing is cached across
/// state changes.
pub struct App {
    pub paths: Vec<PathBuf>,
    pub batch: IngestBatch,
    pub summary: Vec<SummaryRow>,
    pub tag_options: Vec<TagValue>,
    pub file_options: Vec<String>,
    pub selection: FilterSelection,
    pub tab: Tab,
    pub log_scroll: usize,
    pub status: Option<StatusLine>,
    pub config: Config,
}

impl App {
    pub fn new(paths: Vec<PathBuf>, config: Config) -> Self {
        let mut app = Self {
            paths,
            batch: IngestBatch::default(),
            summary: Vec::new(),
            tag_options: Vec::new(),
            file_options: Vec::new(),
            selection: FilterSelection::default(),
            tab: Tab::Chart,
            log_scroll: 0,
            status: None,
            config,
        };
        app.reload();
        app
    }

    /// Re-ingest the same file set. The filter selection is kept: a value
    /// no longer present simply matches nothing.
    pub fn reload(&mut self) {
        self.batch = ingest_files(&self.paths);
        self.summary = summarize(&self.batch.log);
        self.tag_options = distinct_tags(&self.batch.log);
        self.file_options = distinct_files(&self.batch.log);
        self.log_scroll = 0;
    }

    /// Current filtered view of the summary.
    pub fn filtered_summary(&self) -> Vec<SummaryRow> {
        apply(&self.summary, &self.selection)
    }

    pub fn cycle_tag(&mut self, forward: bool) {
        self.selection.tag = cycle(&self.tag_options, &self.selection.tag, forward);
    }

    pub fn cycle_file(&mut self, forward: bool) {
        self.selection.source_file = cycle(&self.file_options, &self.selection.source_file, forward);
    }

    /// Handle one key press. Returns true when the app should quit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Tab => {
                self.tab = match self.tab {
                    Tab::Chart => Tab::Data,
                    Tab::Data => Tab::Chart,
                };
            }
            KeyCode::Char('1') => self.tab = Tab::Chart,
            KeyCode::Char('2') => self.tab = Tab::Data,
            KeyCode::Char('t') => self.cycle_tag(true),
            KeyCode::Char('T') => self.cycle_tag(false),
            KeyCode::Char('f') => self.cycle_file(true),
            KeyCode::Char('F') => self.cycle_file(false),
            KeyCode::Char('r') => {
                self.reload();
                self.status = Some(StatusLine::ok(format!(
                    "reloaded {} file(s), {} entries",
                    self.paths.len(),
                    self.batch.log.len()
                )));
            }
            KeyCode::Char('p') => self.export_png(&cwd()),
            KeyCode::Char('d') => self.export_pdf(&cwd()),
            KeyCode::Char('c') => self.export_csv(&cwd()),
            KeyCode::Down | KeyCode::Char('j') => {
                if self.log_scroll + 1 < self.batch.log.len() {
                    self.log_scroll += 1;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.log_scroll = self.log_scroll.saturating_sub(1);
            }
            _ => {}
        }
        false
    }

    /// Export the current chart as PNG into `dir`.
    pub fn export_png(&mut self, dir: &Path) {
        let rows = self.filtered_summary();
        let chart = &self.config.chart;
        let result = tagsight_export::chart_png(&rows, chart.width, chart.height)
            .and_then(|bytes| {
                let path = dir.join(PNG_FILENAME);
                std::fs::write(&path, bytes)?;
                Ok(path)
            });
        self.finish_export(result);
    }

    /// Export the current chart as a branded PDF report into `dir`.
    pub fn export_pdf(&mut self, dir: &Path) {
        let rows = self.filtered_summary();
        let meta = self.export_meta();
        let chart = &self.config.chart;
        let filename = tagsight_export::pdf_filename(&meta.user_id);
        let result = tagsight_export::chart_pdf(&rows, &meta, chart.width, chart.height)
            .and_then(|bytes| {
                let path = dir.join(filename);
                std::fs::write(&path, bytes)?;
                Ok(path)
            });
        self.finish_export(result);
    }

    /// Export the current filtered summary as CSV into `dir`.
    pub fn export_csv(&mut self, dir: &Path) {
        let rows = self.filtered_summary();
        let result = tagsight_export::summary_csv(&rows).and_then(|bytes| {
            let path = dir.join(CSV_FILENAME);
            std::fs::write(&path, bytes)?;
            Ok(path)
        });
        self.finish_export(result);
    }

    fn export_meta(&self) -> ExportMeta {
        ExportMeta::new(self.config.identity.user_id.clone(), Local::now())
            .with_logo(self.config.branding.logo_path.clone())
    }

    fn finish_export(&mut self, result: Result<PathBuf, tagsight_export::ExportError>) {
        self.status = Some(match result {
            Ok(path) => StatusLine::ok(format!("wrote {}", path.display())),
            Err(err) => StatusLine::error(format!("export failed: {err}")),
        });
    }
}

fn cwd() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Step through `All` + the options list. A stale selection (value not in
/// the options) restarts from `All`.
fn cycle<T: PartialEq + Clone>(options: &[T], current: &Option<T>, forward: bool) -> Option<T> {
    let len = options.len() + 1;
    let pos = match current {
        None => 0,
        Some(value) => options.iter().position(|o| o == value).map_or(0, |i| i + 1),
    };
    let next = if forward {
        (pos + 1) % len
    } else {
        (pos + len - 1) % len
    };
    if next == 0 {
        None
    } else {
        Some(options[next - 1].clone())
    }
}
