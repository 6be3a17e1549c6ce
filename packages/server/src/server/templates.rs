use crate::domains::batch::{BatchReport, OutcomeStatus};

/// Render the entry form with `rows` (name, website) pairs.
pub fn render_form(rows: usize) -> String {
    let mut fields = String::new();
    for n in 1..=rows {
        fields.push_str(&format!(
            r#"<div class="row">
    <input type="text" name="company_{n}" placeholder="Company Name {n}">
    <input type="url" name="website_{n}" placeholder="Website URL {n}">
</div>
"#
        ));
    }

    let content = format!(
        r#"<div class="container">
<h2>Company Spotlight Generator</h2>
<p class="hint">Enter up to {rows} companies. Blank rows are ignored.</p>
<form method="post" action="/generate">
{fields}<button type="submit">Generate Posts</button>
</form>
</div>"#
    );

    build_page("Generate", &content)
}

/// Render the outcome of a batch, one line per company.
pub fn render_results(report: &BatchReport) -> String {
    let mut items = String::new();

    if report.outcomes.is_empty() {
        items.push_str(&format!(
            r#"<p class="empty">{}</p>"#,
            html_escape(&report.summary())
        ));
    }

    for outcome in &report.outcomes {
        let class = match outcome.status {
            OutcomeStatus::Done { .. } => "done",
            OutcomeStatus::Skipped { .. } => "skipped",
        };
        items.push_str(&format!(
            r#"<li class="{class}">{}</li>"#,
            html_escape(&outcome.message())
        ));
    }

    let content = format!(
        r#"<div class="container">
<h2>Results</h2>
<p class="hint">{ok} succeeded, {skipped} skipped</p>
<ul>{items}</ul>
<a href="/">Back</a>
</div>"#,
        ok = report.succeeded(),
        skipped = report.skipped(),
    );

    build_page("Results", &content)
}

// --- Helpers ---

fn build_page(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} - Spotlight</title>
<style>
*{{margin:0;padding:0;box-sizing:border-box;}}
body{{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;color:#1a1a1a;background:#fafafa;}}
.container{{max-width:760px;margin:0 auto;padding:24px;}}
h2{{margin-bottom:12px;}}
.hint{{color:#666;font-size:14px;margin-bottom:16px;}}
.row{{display:flex;gap:8px;margin-bottom:8px;}}
.row input{{flex:1;padding:6px 8px;border:1px solid #ccc;border-radius:4px;}}
button{{margin-top:12px;padding:8px 20px;background:#0066cc;color:#fff;border:none;border-radius:4px;font-size:14px;}}
li{{list-style:none;padding:8px 12px;margin-bottom:6px;border-radius:4px;font-size:14px;}}
li.done{{background:#e8f5e9;color:#2e7d32;}}
li.skipped{{background:#fce4ec;color:#c62828;}}
.empty{{color:#888;padding:24px 0;}}
a{{display:inline-block;margin-top:16px;color:#0066cc;}}
</style>
</head>
<body>
{content}
</body>
</html>"#,
        title = html_escape(title),
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
