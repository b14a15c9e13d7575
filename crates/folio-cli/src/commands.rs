use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow, bail};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use serde::Serialize;
use tracing::info;

use folio_prefs::{
    AcceptAnyLanguage, DocumentHistory, DocumentRecord, GlobalSettings, PrefsError, PrefsFile,
    ZOOM_FIT_PAGE, default_prefs_path,
};

/// Preferences read from disk, or defaults when there is no file yet.
#[derive(Debug, Serialize)]
pub struct LoadedPrefs {
    pub path: PathBuf,
    /// No file (or an empty one) was found; the state holds defaults.
    pub first_run: bool,
    pub settings: GlobalSettings,
    pub history: DocumentHistory,
}

/// Outcome of `compact`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompactSummary {
    pub path: PathBuf,
    pub entries_before: usize,
    pub entries_written: usize,
    pub global_prefs_only: bool,
}

/// Use `path`, or the platform default location when none is given.
pub fn resolve_path(path: Option<&Path>) -> PathBuf {
    path.map_or_else(default_prefs_path, Path::to_path_buf)
}

/// Load the preferences at `path` into default-initialized structures.
pub fn load_state(path: &Path) -> Result<LoadedPrefs> {
    let mut file = PrefsFile::new(path);
    let mut settings = GlobalSettings::default();
    let mut history = DocumentHistory::new();

    let first_run = match file.load(&mut settings, &mut history, &mut AcceptAnyLanguage) {
        Ok(()) => false,
        Err(err) if err.is_first_run() => true,
        Err(err) => return Err(describe(err)),
    };

    Ok(LoadedPrefs {
        path: path.to_path_buf(),
        first_run,
        settings,
        history,
    })
}

pub fn run_show(path: Option<&Path>, json: bool) -> Result<()> {
    let state = load_state(&resolve_path(path))?;
    println!("{}", render_show(&state, json)?);
    Ok(())
}

/// Render the loaded state as text tables or JSON.
pub fn render_show(state: &LoadedPrefs, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(state)?);
    }

    let mut out = format!("Preferences: {}\n", state.path.display());
    if state.first_run {
        out.push_str("No preferences file yet; showing defaults.\n");
    }
    out.push_str(&settings_table(&state.settings).to_string());
    out.push('\n');
    if state.history.is_empty() {
        out.push_str("History: empty");
    } else {
        out.push_str(&history_table(&state.history).to_string());
    }
    Ok(out)
}

/// Load, optionally switch to globals-only mode, and save back.
pub fn run_compact(path: Option<&Path>, globals_only: bool) -> Result<CompactSummary> {
    let path = resolve_path(path);
    let mut state = load_state(&path)?;
    if state.first_run {
        bail!("no preferences file at {}", path.display());
    }

    if globals_only {
        state.settings.global_prefs_only = true;
    }
    let file = PrefsFile::new(&path);
    file.save(&state.settings, &state.history).map_err(describe)?;

    let entries_before = state.history.len();
    let entries_written = if state.settings.global_prefs_only {
        state.history.recent().len()
    } else {
        entries_before
    };
    info!(entries_before, entries_written, "Compacted {}", path.display());

    Ok(CompactSummary {
        path,
        entries_before,
        entries_written,
        global_prefs_only: state.settings.global_prefs_only,
    })
}

pub fn print_compact_summary(summary: &CompactSummary) {
    println!("Rewrote {}", summary.path.display());
    println!(
        "History entries: {} -> {}{}",
        summary.entries_before,
        summary.entries_written,
        if summary.global_prefs_only {
            " (globals only)"
        } else {
            ""
        }
    );
}

pub fn run_path() {
    println!("{}", default_prefs_path().display());
}

fn describe(err: PrefsError) -> anyhow::Error {
    let message = match err.suggestion() {
        Some(hint) => format!("{} {}", err.user_message(), hint),
        None => err.user_message(),
    };
    anyhow!(err).context(message)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

fn zoom_label(zoom: f32) -> String {
    if zoom == ZOOM_FIT_PAGE {
        "fit page".to_string()
    } else {
        format!("{zoom}%")
    }
}

fn last_update_label(settings: &GlobalSettings) -> String {
    match (settings.last_update(), &settings.last_update_time) {
        (Some(stamp), _) => stamp.format("%Y-%m-%d %H:%M UTC").to_string(),
        (None, Some(raw)) => raw.clone(),
        (None, None) => "never".to_string(),
    }
}

fn settings_table(settings: &GlobalSettings) -> Table {
    let pos = &settings.window_pos;
    let rows: Vec<(&str, String)> = vec![
        ("Display mode", settings.default_display_mode.to_string()),
        ("Zoom", zoom_label(settings.default_zoom)),
        ("Toolbar", yes_no(settings.show_toolbar).to_string()),
        ("Table of contents", yes_no(settings.show_toc).to_string()),
        ("Background", format!("#{:06X}", settings.bg_color)),
        ("Language", settings.ui_language.clone()),
        ("Window", format!("{} at {},{} {}x{}", settings.window_state, pos.x, pos.y, pos.dx, pos.dy)),
        ("Remember files", yes_no(settings.remember_opened_files).to_string()),
        ("Globals only", yes_no(settings.global_prefs_only).to_string()),
        ("Auto update", yes_no(settings.enable_auto_update).to_string()),
        ("Last update check", last_update_label(settings)),
        (
            "Skipped version",
            settings.version_to_skip.clone().unwrap_or_default(),
        ),
        (
            "Inverse search",
            settings.inverse_search_cmd_line.clone().unwrap_or_default(),
        ),
    ];

    let mut table = Table::new();
    table.set_header(vec!["Setting", "Value"]);
    apply_table_style(&mut table);
    for (name, value) in rows {
        table.add_row(vec![Cell::new(name), Cell::new(value)]);
    }
    table
}

fn history_table(history: &DocumentHistory) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "File", "Page", "Mode", "Zoom", "Rotation", "Global"]);
    apply_table_style(&mut table);
    for (index, record) in history.iter().enumerate() {
        table.add_row(history_row(index, record));
    }
    for column in [0, 2, 4, 5] {
        if let Some(col) = table.column_mut(column) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
    table
}

fn history_row(index: usize, record: &DocumentRecord) -> Vec<Cell> {
    if record.use_global_values {
        return vec![
            Cell::new(index + 1),
            Cell::new(&record.file_path),
            Cell::new("-"),
            Cell::new("-"),
            Cell::new("-"),
            Cell::new("-"),
            Cell::new("yes"),
        ];
    }
    vec![
        Cell::new(index + 1),
        Cell::new(&record.file_path),
        Cell::new(record.page_no),
        Cell::new(record.display_mode),
        Cell::new(zoom_label(record.zoom_virtual)),
        Cell::new(record.rotation),
        Cell::new("no"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_path() {
        let explicit = Path::new("/tmp/custom.dat");
        assert_eq!(resolve_path(Some(explicit)), explicit.to_path_buf());
        assert_eq!(resolve_path(None), default_prefs_path());
    }

    #[test]
    fn test_zoom_label() {
        assert_eq!(zoom_label(ZOOM_FIT_PAGE), "fit page");
        assert_eq!(zoom_label(125.0), "125%");
    }

    #[test]
    fn test_last_update_label() {
        let mut settings = GlobalSettings::default();
        assert_eq!(last_update_label(&settings), "never");

        settings.last_update_time = Some("2024-03-05T10:20:00Z".to_string());
        assert_eq!(last_update_label(&settings), "2024-03-05 10:20 UTC");

        settings.last_update_time = Some("0x01d9".to_string());
        assert_eq!(last_update_label(&settings), "0x01d9");
    }

    #[test]
    fn test_history_row_for_global_record() {
        let record = DocumentRecord::new("/a.pdf").with_global_values();
        let row = history_row(0, &record);
        assert_eq!(row.len(), 7);
    }
}
