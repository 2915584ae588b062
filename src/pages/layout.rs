/// Shared HTML document shell. Styling comes from the Tailwind CDN build.
pub fn page_shell(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>{title}</title>
    <script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="bg-black">
{body}
</body>
</html>"#,
        title = html_escape(title),
        body = body,
    )
}

/// Plain text page used by contact, refunds and terms.
pub fn text_page(title: &str, content_html: &str) -> String {
    let body = format!(
        r#"<main class="min-h-screen bg-black text-white p-8">
    <h1 class="text-2xl font-bold mb-4">{title}</h1>
    {content}
    <p class="mt-8 text-xs text-zinc-500"><a href="/" class="underline">Back to the God Candle</a></p>
</main>"#,
        title = html_escape(title),
        content = content_html,
    );
    page_shell(&format!("{} · God Candle", title), &body)
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
