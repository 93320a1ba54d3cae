//! Layout components - headers, buttons, inputs and text escaping

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Renders a page header with title and optional subtitle.
///
/// Used at the top of main content areas to establish page context.
pub fn page_header(title: &str, subtitle: Option<&str>) -> String {
    let subtitle_html = subtitle
        .map(|s| format!(r#"<p class="text-gray-400 mt-2">{}</p>"#, escape(s)))
        .unwrap_or_default();

    format!(
        r#"<div class="mb-8">
            <h1 class="text-4xl font-bold text-white">{}</h1>
            {subtitle_html}
        </div>"#,
        escape(title)
    )
}

/// Renders a button with Tailwind styling.
///
/// Variants: primary, secondary, ghost. `text` is inserted as-is so callers
/// can pass markup; escape user text before passing it in.
pub fn button(text: &str, variant: &str, attributes: Option<&str>) -> String {
    let base_classes = "px-4 py-2 rounded-lg font-medium transition-colors focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-offset-gray-900 disabled:opacity-50 disabled:cursor-not-allowed";

    let variant_classes = match variant {
        "primary" => "movie-gradient text-white focus:ring-movie-primary",
        "secondary" => "bg-gray-700 hover:bg-gray-600 text-white focus:ring-gray-500",
        "ghost" => "text-gray-300 hover:text-white hover:bg-gray-700 focus:ring-gray-500",
        _ => "bg-gray-600 hover:bg-gray-700 text-white focus:ring-gray-500",
    };

    let attrs = attributes.unwrap_or("");

    format!(r#"<button class="{base_classes} {variant_classes}" {attrs}>{text}</button>"#)
}

/// Renders a text input with the search styling.
pub fn input(name: &str, placeholder: &str, value: &str, attributes: Option<&str>) -> String {
    let attrs = attributes.unwrap_or("");

    format!(
        r#"<input type="text" name="{name}" placeholder="{}" value="{}"
                  class="w-full pl-12 pr-28 py-3 text-lg bg-movie-light/10 border border-gray-700/50 rounded-lg text-white placeholder-gray-400 focus:outline-none focus:border-movie-primary"
                  {attrs} />"#,
        escape(placeholder),
        escape(value)
    )
}
