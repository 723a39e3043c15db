#![cfg(test)]
/*!
Selector lint for the shared report theme.

The report components emit these classes; packaged desktop builds only get the
inlined `ui/assets/theme/main.css`, so a renamed selector would silently leave
part of the page unstyled. Substring checks are enough as an early warning.

When a component's markup changes, adjust REQUIRED_SELECTORS with it.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Layout
    ":root",
    ".report {",
    ".report__body",
    ".report__hero",
    ".report__footer",
    ".report-section",
    // Charts
    ".chart-grid",
    ".chart-card",
    ".chart-card--wide",
    ".chart-container",
    ".chart-animate",
    ".chart-animate.animated",
    ".chart-canvas",
    ".chart-placeholder",
    // Theme switch
    ".dark-mode",
    ".theme-toggle",
];

const NAVBAR_SELECTORS: &[&str] = &[
    ".navbar {",
    ".navbar__toggle",
    ".navbar__toggle--active",
    ".navbar__links",
    ".navbar__links--open",
    ".navbar__link",
    ".visually-hidden",
];

fn missing<'a>(css: &str, selectors: &[&'a str]) -> Vec<&'a str> {
    selectors
        .iter()
        .copied()
        .filter(|sel| !css.contains(sel))
        .collect()
}

#[test]
fn theme_contains_required_selectors() {
    let missing = missing(THEME_CSS, REQUIRED_SELECTORS);
    assert!(
        missing.is_empty(),
        "Theme CSS missing required selectors:\n  {}",
        missing.join("\n  ")
    );
}

#[test]
fn navbar_contains_required_selectors() {
    let missing = missing(NAVBAR_CSS, NAVBAR_SELECTORS);
    assert!(
        missing.is_empty(),
        "Navbar CSS missing required selectors:\n  {}",
        missing.join("\n  ")
    );
}

#[test]
fn dark_mode_overrides_core_tokens() {
    let start = THEME_CSS
        .find(".dark-mode {")
        .expect("dark-mode block present");
    let block = &THEME_CSS[start..];
    let end = block.find('}').expect("dark-mode block closed");
    let block = &block[..end];
    for token in ["--color-bg", "--color-text", "--color-card"] {
        assert!(block.contains(token), "dark mode does not override {token}");
    }
}
