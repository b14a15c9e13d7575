//! Save/load round-trip tests through the public API.

use folio_prefs::{
    AcceptAnyLanguage, DisplayMode, DocumentHistory, DocumentRecord, ForwardSearchHighlight,
    GlobalSettings, MAX_RECENT_FILES_IN_MENU, PrefsError, PrefsFile, ScrollPos, WindowRect,
    parse_prefs_bytes, serialize_prefs, window_state,
};
use proptest::prelude::*;
use tempfile::tempdir;

fn load(bytes: &[u8]) -> (GlobalSettings, DocumentHistory) {
    let mut settings = GlobalSettings::default();
    let mut history = DocumentHistory::new();
    parse_prefs_bytes(bytes, &mut settings, &mut history, &mut AcceptAnyLanguage).unwrap();
    (settings, history)
}

fn arb_display_mode() -> impl Strategy<Value = DisplayMode> {
    proptest::sample::select(DisplayMode::all())
}

fn arb_rect() -> impl Strategy<Value = WindowRect> {
    (any::<i32>(), any::<i32>(), any::<i32>(), any::<i32>())
        .prop_map(|(x, y, dx, dy)| WindowRect::new(x, y, dx, dy))
}

fn arb_text() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[a-zA-Z0-9 ./:%\"-]{1,24}")
}

fn arb_settings() -> impl Strategy<Value = GlobalSettings> {
    (
        (any::<bool>(), any::<bool>(), any::<i32>(), any::<bool>(), any::<bool>()),
        (any::<u32>(), any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()),
        (arb_display_mode(), -3.0f32..6400.0, 1i32..=4, arb_rect()),
        (arb_text(), any::<bool>(), arb_text(), arb_text(), "[a-z]{2}"),
        (any::<i32>(), any::<u32>(), any::<i32>(), any::<bool>()),
    )
        .prop_map(|(panes, flags, view, texts, fwd)| GlobalSettings {
            show_toolbar: panes.0,
            show_toc: panes.1,
            toc_dx: panes.2,
            pdf_associate_dont_ask_again: panes.3,
            pdf_associate_should_associate: panes.4,
            bg_color: flags.0,
            esc_to_exit: flags.1,
            enable_auto_update: flags.2,
            remember_opened_files: flags.3,
            global_prefs_only: flags.4,
            default_display_mode: view.0,
            default_zoom: view.1,
            window_state: view.2,
            window_pos: view.3,
            inverse_search_cmd_line: texts.0,
            enable_tex_enhancements: texts.1,
            version_to_skip: texts.2,
            last_update_time: texts.3,
            ui_language: texts.4,
            fwdsearch: ForwardSearchHighlight {
                offset: fwd.0,
                color: fwd.1,
                width: fwd.2,
                permanent: fwd.3,
            },
        })
}

fn arb_record() -> impl Strategy<Value = DocumentRecord> {
    (
        ("/[a-z]{1,8}/[a-z0-9 _]{1,12}\\.pdf", arb_text()),
        (arb_display_mode(), 1i32..5000, prop_oneof![Just(0), Just(90), Just(180), Just(270)]),
        (any::<i32>(), any::<i32>(), 0.0f32..6400.0),
        (1i32..=4, arb_rect(), any::<bool>(), 0i32..2000),
        proptest::collection::vec(any::<i32>(), 0..8),
    )
        .prop_map(|(id, view, scroll, window, toc_state)| DocumentRecord {
            file_path: id.0,
            decryption_key: id.1,
            use_global_values: false,
            display_mode: view.0,
            page_no: view.1,
            rotation: view.2,
            scroll_pos: ScrollPos::new(scroll.0, scroll.1),
            zoom_virtual: scroll.2,
            window_state: window.0,
            window_pos: window.1,
            show_toc: window.2,
            toc_dx: window.3,
            toc_state,
        })
}

proptest! {
    #[test]
    fn settings_round_trip(settings in arb_settings()) {
        let bytes = serialize_prefs(&settings, &DocumentHistory::new()).unwrap();
        let (loaded, _) = load(&bytes);

        prop_assert!((loaded.default_zoom - settings.default_zoom).abs() <= 1e-4);
        let aligned = GlobalSettings {
            default_zoom: settings.default_zoom,
            ..loaded
        };
        prop_assert_eq!(aligned, settings);
    }

    #[test]
    fn history_round_trip(records in proptest::collection::vec(arb_record(), 0..16)) {
        let history = DocumentHistory::from(records);
        let bytes = serialize_prefs(&GlobalSettings::default(), &history).unwrap();
        let (_, loaded) = load(&bytes);

        prop_assert_eq!(loaded.len(), history.len());
        for (got, want) in loaded.iter().zip(history.iter()) {
            prop_assert!((got.zoom_virtual - want.zoom_virtual).abs() <= 1e-4);
            let aligned = DocumentRecord {
                zoom_virtual: want.zoom_virtual,
                ..got.clone()
            };
            prop_assert_eq!(&aligned, want);
        }
    }

    #[test]
    fn globals_only_keeps_abbreviated_prefix(records in proptest::collection::vec(arb_record(), 0..30)) {
        let settings = GlobalSettings {
            global_prefs_only: true,
            ..GlobalSettings::default()
        };
        let history = DocumentHistory::from(records);
        let bytes = serialize_prefs(&settings, &history).unwrap();
        let (_, loaded) = load(&bytes);

        let expected: Vec<DocumentRecord> = history
            .iter()
            .take(MAX_RECENT_FILES_IN_MENU)
            .map(DocumentRecord::abbreviated)
            .collect();
        prop_assert_eq!(loaded, DocumentHistory::from(expected));
    }
}

#[test]
fn test_display_mode_zoom_window_state_scenario() {
    let settings = GlobalSettings {
        default_display_mode: DisplayMode::SinglePage,
        default_zoom: 1.0005,
        window_state: window_state::MAXIMIZED,
        ..GlobalSettings::default()
    };
    let bytes = serialize_prefs(&settings, &DocumentHistory::new()).unwrap();

    let mut loaded = GlobalSettings {
        default_display_mode: DisplayMode::Automatic,
        default_zoom: 0.0,
        window_state: 0,
        ..GlobalSettings::default()
    };
    let mut history = DocumentHistory::new();
    parse_prefs_bytes(&bytes, &mut loaded, &mut history, &mut AcceptAnyLanguage).unwrap();

    assert_eq!(loaded.default_display_mode, DisplayMode::SinglePage);
    assert!((loaded.default_zoom - 1.0005).abs() < 1e-4);
    assert_eq!(loaded.window_state, 2);
}

#[test]
fn test_empty_input_leaves_state_unchanged() {
    let mut settings = GlobalSettings {
        show_toolbar: false,
        toc_dx: 321,
        ..GlobalSettings::default()
    };
    let before = settings.clone();
    let mut history = DocumentHistory::new();
    history.append(DocumentRecord::new("/kept.pdf"));

    let err = parse_prefs_bytes(b"", &mut settings, &mut history, &mut AcceptAnyLanguage)
        .unwrap_err();

    assert!(matches!(err, PrefsError::EmptyFile));
    assert_eq!(settings, before);
    assert_eq!(history.len(), 1);
}

#[test]
fn test_toc_state_order_preserved() {
    let mut record = DocumentRecord::new("/book.pdf");
    record.toc_state = vec![42, 7, 19, 3];
    let history = DocumentHistory::from(vec![record]);

    let bytes = serialize_prefs(&GlobalSettings::default(), &history).unwrap();
    let (_, loaded) = load(&bytes);
    assert_eq!(loaded.get(0).unwrap().toc_state, vec![42, 7, 19, 3]);
}

#[test]
fn test_session_workflow() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config").join("folio-prefs.dat");

    // First session: nothing on disk yet.
    let mut first = PrefsFile::new(&path);
    let mut settings = GlobalSettings::default();
    let mut history = DocumentHistory::new();
    let err = first
        .load(&mut settings, &mut history, &mut AcceptAnyLanguage)
        .unwrap_err();
    assert!(err.is_first_run());

    settings.default_display_mode = DisplayMode::ContinuousFacing;
    settings.mark_update_checked();
    history.mark_opened(DocumentRecord::new("/docs/thesis.pdf").with_decryption_key("s3cret"));
    history.mark_opened(DocumentRecord::new("/docs/slides.pdf"));
    history.find_mut("/docs/thesis.pdf").unwrap().page_no = 88;
    first.save(&settings, &history).unwrap();

    // Second session picks the state back up.
    let mut second = PrefsFile::new(&path);
    let mut restored = GlobalSettings::default();
    let mut restored_history = DocumentHistory::new();
    second
        .load(&mut restored, &mut restored_history, &mut AcceptAnyLanguage)
        .unwrap();

    assert_eq!(restored.default_display_mode, DisplayMode::ContinuousFacing);
    let paths: Vec<&str> = restored_history
        .iter()
        .map(|r| r.file_path.as_str())
        .collect();
    assert_eq!(paths, vec!["/docs/slides.pdf", "/docs/thesis.pdf"]);
    let thesis = restored_history.find("/docs/thesis.pdf").unwrap();
    assert_eq!(thesis.page_no, 88);
    assert_eq!(thesis.decryption_key.as_deref(), Some("s3cret"));
    assert_eq!(restored.last_update(), settings.last_update());
}

#[test]
fn test_unsupported_language_keeps_default() {
    let settings = GlobalSettings {
        ui_language: "xx".to_string(),
        ..GlobalSettings::default()
    };
    let bytes = serialize_prefs(&settings, &DocumentHistory::new()).unwrap();

    let mut selector = folio_prefs::SupportedLanguages::new(["en", "de"]);
    let mut loaded = GlobalSettings::default();
    let mut history = DocumentHistory::new();
    parse_prefs_bytes(&bytes, &mut loaded, &mut history, &mut selector).unwrap();

    assert_eq!(loaded.ui_language, "en");
    assert_eq!(selector.active(), None);
}

#[test]
fn test_stored_paths_survive_load() {
    let bytes = b"d12:File Historyld4:File6:/\xE9.pdfed4:File0:4:Pagei4eed4:Pagei9eee2:gpdee";
    let (_, history) = load(bytes);

    let paths: Vec<&str> = history.iter().map(|r| r.file_path.as_str()).collect();
    assert_eq!(paths, vec!["/\u{FFFD}.pdf", ""]);
    assert_eq!(history.get(1).unwrap().page_no, 4);
}

#[test]
fn test_empty_path_record_saved_with_globals() {
    let settings = GlobalSettings {
        bg_color: 0x11_22_33,
        ..GlobalSettings::default()
    };
    let mut history = DocumentHistory::new();
    history.append(DocumentRecord::new("/docs/a.pdf"));
    history.append(DocumentRecord::default());

    let bytes = serialize_prefs(&settings, &history).unwrap();
    let (loaded, loaded_history) = load(&bytes);

    assert_eq!(loaded.bg_color, 0x11_22_33);
    assert_eq!(loaded_history, history);
}
