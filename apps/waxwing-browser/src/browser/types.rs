struct ShellApp {
    store: Arc<BrowserStore>,
    use_cases: SessionUseCases,
    toolbar: BrowserToolbar,
    session: SessionStore,
    saved_change_count: u64,
    status_line: String,
    last_error: Option<String>,
}

/// Snapshot of one tab-strip entry, taken once per frame so the strip can
/// render without holding the store lock.
#[derive(Debug, Clone)]
struct TabStripEntry {
    id: String,
    label: String,
    selected: bool,
}
