//! Toast notifications shown in the `#toast-area` container

use super::layout::escape;

/// Renders a dismissible notification toast.
///
/// Kinds: success, error, info. Anything else gets neutral styling.
pub fn notification_toast(message: &str, toast_type: &str) -> String {
    let (bg_class, border_class, icon) = match toast_type {
        "success" => ("bg-green-800", "border-green-600", "✓"),
        "error" => ("bg-red-800", "border-red-600", "✗"),
        "info" => ("bg-blue-800", "border-blue-600", "▶"),
        _ => ("bg-gray-800", "border-gray-600", "•"),
    };

    format!(
        r#"<div class="flex items-center p-4 border rounded-lg {bg_class} {border_class} fadeInDown" role="status">
            <span class="mr-3">{icon}</span>
            <span class="flex-1 text-sm text-white">{}</span>
            <button type="button" class="ml-4 text-gray-400 hover:text-white" aria-label="Dismiss" onclick="this.parentElement.remove()">✕</button>
        </div>"#,
        escape(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_escapes_message() {
        let html = notification_toast("Playing: <b>Dune</b>", "info");
        assert!(html.contains("Playing: &lt;b&gt;Dune&lt;/b&gt;"));
        assert!(html.contains("bg-blue-800"));
    }
}
