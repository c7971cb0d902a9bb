use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;
use url::Url;
use wx_state::BrowserStore;
use wx_state::TabState;
use wx_state::TargetTab;

static NEXT_TAB_SEQ: AtomicU64 = AtomicU64::new(0);

/// Navigation use cases shared by the toolbar and the shell.
///
/// The toolbar never writes to the store directly; committed URLs flow
/// through [`load_url`] so normalization happens in exactly one place.
///
/// [`load_url`]: SessionUseCases::load_url
#[derive(Debug, Clone)]
pub struct SessionUseCases {
    store: Arc<BrowserStore>,
}

impl SessionUseCases {
    pub fn new(store: Arc<BrowserStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &BrowserStore {
        &self.store
    }

    /// Normalizes raw address-bar input and loads it into the target tab.
    ///
    /// Returns `false` when the input is empty or the target resolves to
    /// no tab; both are silent no-ops, not errors.
    pub fn load_url(&self, text: &str, target: &TargetTab) -> bool {
        let Some(url) = normalize_input_url(text) else {
            return false;
        };
        self.store.update_url(target, &url)
    }

    /// Opens and selects a fresh regular tab, returning its id.
    pub fn new_tab(&self, text: &str) -> String {
        let url = normalize_input_url(text).unwrap_or_else(|| "about:blank".to_owned());
        let id = generate_tab_id();
        self.store.add_tab(TabState::new(url, id.clone()), true);
        id
    }

    /// Opens and selects a fresh private tab, returning its id.
    pub fn new_private_tab(&self, text: &str) -> String {
        let url = normalize_input_url(text).unwrap_or_else(|| "about:blank".to_owned());
        let id = generate_tab_id();
        self.store
            .add_tab(TabState::new_private(url, id.clone()), true);
        id
    }
}

/// Turns address-bar input into a loadable URL.
///
/// Input without a scheme defaults to `https://`, except for
/// local-network hosts which get `http://`. Blank input yields `None`.
pub fn normalize_input_url(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.contains("://") || trimmed.starts_with("about:") {
        return Some(trimmed.to_owned());
    }

    let scheme = if is_local_network_input(trimmed) {
        "http"
    } else {
        "https"
    };
    Some(format!("{scheme}://{trimmed}"))
}

fn is_local_network_input(input: &str) -> bool {
    let Ok(parsed) = Url::parse(&format!("http://{input}")) else {
        return false;
    };
    parsed.host_str().is_some_and(is_local_network_host)
}

fn is_local_network_host(host: &str) -> bool {
    let normalized = host.trim_end_matches('.').to_ascii_lowercase();
    if normalized == "localhost"
        || normalized.ends_with(".localhost")
        || normalized.ends_with(".local")
    {
        return true;
    }

    let Ok(ip) = normalized.parse::<std::net::IpAddr>() else {
        return false;
    };
    match ip {
        std::net::IpAddr::V4(v4) => v4.is_loopback() || v4.is_private() || v4.is_link_local(),
        std::net::IpAddr::V6(v6) => v6.is_loopback() || v6.is_unique_local(),
    }
}

fn generate_tab_id() -> String {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_nanos())
        .unwrap_or_default();
    let seq = NEXT_TAB_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("tab-{stamp:x}-{seq}")
}

#[cfg(test)]
mod tests {
    use super::SessionUseCases;
    use super::normalize_input_url;
    use std::sync::Arc;
    use wx_state::BrowserStore;
    use wx_state::TabState;
    use wx_state::TargetTab;

    fn use_cases_with_tabs() -> SessionUseCases {
        let store = BrowserStore::default();
        store.add_tab(TabState::new("https://www.mozilla.org", "mozilla"), true);
        store.add_custom_tab(TabState::new("https://www.reddit.com/r/firefox/", "reddit"));
        SessionUseCases::new(Arc::new(store))
    }

    #[test]
    fn defaults_https_scheme() {
        assert_eq!(
            normalize_input_url("example.com/docs?a=1").as_deref(),
            Some("https://example.com/docs?a=1")
        );
    }

    #[test]
    fn keeps_explicit_schemes() {
        assert_eq!(
            normalize_input_url("http://example.com/").as_deref(),
            Some("http://example.com/")
        );
        assert_eq!(
            normalize_input_url("about:blank").as_deref(),
            Some("about:blank")
        );
    }

    #[test]
    fn local_hosts_default_to_http() {
        assert_eq!(
            normalize_input_url("localhost:3000/docs").as_deref(),
            Some("http://localhost:3000/docs")
        );
        assert_eq!(
            normalize_input_url("192.168.1.25:8080/status").as_deref(),
            Some("http://192.168.1.25:8080/status")
        );
    }

    #[test]
    fn blank_input_yields_nothing() {
        assert!(normalize_input_url("   ").is_none());
    }

    #[test]
    fn load_url_writes_into_the_selected_tab() {
        let use_cases = use_cases_with_tabs();
        assert!(use_cases.load_url("mozilla.org/firefox", &TargetTab::Selected));
        use_cases.store().with_state(|state| {
            assert_eq!(
                state.selected_tab().map(|tab| tab.content.url.as_str()),
                Some("https://mozilla.org/firefox")
            );
        });
    }

    #[test]
    fn load_url_into_custom_target_leaves_regular_tabs_alone() {
        let use_cases = use_cases_with_tabs();
        assert!(use_cases.load_url(
            "https://www.reddit.com/r/rust/",
            &TargetTab::Custom("reddit".to_owned())
        ));
        use_cases.store().with_state(|state| {
            assert_eq!(
                state
                    .find_custom_tab("reddit")
                    .map(|tab| tab.content.url.as_str()),
                Some("https://www.reddit.com/r/rust/")
            );
            assert_eq!(
                state.find_tab("mozilla").map(|tab| tab.content.url.as_str()),
                Some("https://www.mozilla.org")
            );
        });
    }

    #[test]
    fn load_url_misses_silently() {
        let use_cases = use_cases_with_tabs();
        assert!(!use_cases.load_url("example.com", &TargetTab::Pinned("unknown".to_owned())));
        assert!(!use_cases.load_url("   ", &TargetTab::Selected));
    }

    #[test]
    fn new_tab_is_created_and_selected() {
        let use_cases = use_cases_with_tabs();
        let id = use_cases.new_tab("example.com");
        use_cases.store().with_state(|state| {
            assert_eq!(state.selected_tab_id.as_deref(), Some(id.as_str()));
            assert_eq!(
                state.selected_tab().map(|tab| tab.content.url.as_str()),
                Some("https://example.com")
            );
        });
    }

    #[test]
    fn new_private_tab_flags_content() {
        let use_cases = use_cases_with_tabs();
        let id = use_cases.new_private_tab("");
        use_cases.store().with_state(|state| {
            let tab = state.find_tab(&id).map(|tab| &tab.content);
            assert!(tab.is_some_and(|content| content.private));
            assert_eq!(tab.map(|content| content.url.as_str()), Some("about:blank"));
        });
    }

    #[test]
    fn generated_tab_ids_are_unique() {
        let use_cases = use_cases_with_tabs();
        let first = use_cases.new_tab("example.com");
        let second = use_cases.new_tab("example.com");
        assert_ne!(first, second);
    }
}
