#![cfg(test)]
//! A language switch must re-render the report in place. Keying the routed
//! subtree on the language code would remount `Report` and drop its chart
//! activation state, so both launchers are checked for that pattern.

const DESKTOP_MAIN: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/src/main.rs"));
const WEB_MAIN: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../web/src/main.rs"));

#[test]
fn launchers_do_not_remount_on_language_change() {
    for (name, src) in [("desktop", DESKTOP_MAIN), ("web", WEB_MAIN)] {
        assert!(
            !src.contains("key: \"{lang_code()}\""),
            "{name} launcher keys its subtree on the language code"
        );
        assert!(
            src.contains("use_context_provider(|| lang_code)"),
            "{name} launcher no longer provides the language code signal"
        );
    }
}
