const DEFAULT_URL: &str = "https://www.mozilla.org/";
const TAB_LABEL_MAX_CHARS: usize = 24;
const PRIVATE_TAB_SUFFIX: &str = " (private)";
