//! Loading and error markup builders
//!
//! Both builders are pure. The retry button in the error panel only reloads
//! the page once the returned markup is mounted and clicked.

use super::escape::escape_html;
use super::icons::{IconRegistry, ERROR_ICON};

/// Inline warning-triangle icon used when the registry has no `"error"` entry.
pub const DEFAULT_ERROR_ICON: &str = r#"<svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 9v2m0 4h.01m-6.938 4h13.856c1.54 0 2.502-1.667 1.732-3L13.732 4c-.77-1.333-2.694-1.333-3.464 0L3.34 16c-.77 1.333.192 3 1.732 3z" /></svg>"#;

/// Title shown above the error message.
pub const ERROR_TITLE: &str = "Unable to Load Content";

const LOADING_HTML: &str = r#"
<div class="flex items-center justify-center py-12">
    <div class="text-center">
        <div class="inline-block w-12 h-12 border-4 spinner-brand rounded-full animate-spin"></div>
        <p class="mt-4 text-gray-600">Loading...</p>
    </div>
</div>
"#;

/// Centered spinner with a "Loading..." label.
pub fn loading_html() -> String {
    LOADING_HTML.to_string()
}

/// Alert panel with a title, `message`, an icon and a retry button.
///
/// `message` is inserted verbatim and is NOT escaped. Pass it through
/// [`escape_html`] first, or use [`error_html_escaped`], when it can contain
/// untrusted text.
pub fn error_html(message: &str, icons: &IconRegistry) -> String {
    let icon = icons.get(ERROR_ICON).unwrap_or(DEFAULT_ERROR_ICON);
    format!(
        r#"
<div class="bg-red-50 border-l-4 border-red-500 p-6 rounded-lg shadow-md" role="alert">
    <div class="flex items-start">
        <div class="flex-shrink-0 text-red-600">
            {icon}
        </div>
        <div class="ml-3 flex-1">
            <h3 class="text-lg font-semibold text-red-800">{ERROR_TITLE}</h3>
            <p class="mt-2 text-red-700">{message}</p>
            <button onclick="location.reload()"
                    class="mt-4 px-4 py-2 bg-red-600 text-white font-semibold rounded-lg hover:bg-red-700 transition-colors focus:outline-none focus:ring-2 focus:ring-red-500 focus:ring-offset-2">
                Retry
            </button>
        </div>
    </div>
</div>
"#
    )
}

/// [`error_html`] with `message` escaped first.
pub fn error_html_escaped(message: &str, icons: &IconRegistry) -> String {
    error_html(&escape_html(message), icons)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_html_is_constant() {
        let first = loading_html();
        assert_eq!(first, loading_html());
        assert!(first.contains("Loading..."));
        assert!(first.contains("animate-spin"));
    }

    #[test]
    fn test_error_html_embeds_message_verbatim() {
        let html = error_html("Network failed", &IconRegistry::new());
        assert!(html.contains("Network failed"));
        assert!(html.contains(ERROR_TITLE));
        assert!(html.contains(r#"role="alert""#));
    }

    #[test]
    fn test_error_html_does_not_escape() {
        let html = error_html("<b>Network</b> failed", &IconRegistry::new());
        assert!(html.contains("<b>Network</b> failed"));
    }

    #[test]
    fn test_error_html_falls_back_to_default_icon() {
        let html = error_html("Network failed", &IconRegistry::new());
        assert!(html.contains(DEFAULT_ERROR_ICON));
    }

    #[test]
    fn test_error_html_uses_registry_icon() {
        let icons = IconRegistry::new().with_icon(ERROR_ICON, "<i class=\"icon-error\"></i>");
        let html = error_html("Network failed", &icons);
        assert!(html.contains("<i class=\"icon-error\"></i>"));
        assert!(!html.contains(DEFAULT_ERROR_ICON));
    }

    #[test]
    fn test_unrelated_icons_are_ignored() {
        let icons = IconRegistry::new().with_icon("info", "<i>i</i>");
        let html = error_html("oops", &icons);
        assert!(html.contains(DEFAULT_ERROR_ICON));
    }

    #[test]
    fn test_retry_button_reloads() {
        let html = error_html("oops", &IconRegistry::new());
        assert!(html.contains(r#"onclick="location.reload()""#));
        assert!(html.contains("Retry"));
    }

    #[test]
    fn test_error_html_escaped() {
        let html = error_html_escaped("<script>x</script>", &IconRegistry::new());
        assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
