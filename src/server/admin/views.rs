use axum::response::Html;

use crate::pages::escape;
use crate::pages::layout::SCHOOL_NAME;
use crate::types::AdminUser;

pub const NAV: &[(&str, &[(&str, &str)])] = &[
    ("Overview", &[("dashboard", "Dashboard")]),
    (
        "Home Page",
        &[
            ("hero", "Hero Section"),
            ("hero-images", "Hero Images"),
            ("notices", "Notices"),
            ("stats", "Stats"),
            ("highlights", "Highlights"),
        ],
    ),
    (
        "Content",
        &[
            ("news", "News"),
            ("circulars", "Circulars"),
            ("faculty", "Faculty"),
            ("gallery", "Gallery Photos"),
            ("gallery-categories", "Gallery Categories"),
        ],
    ),
    (
        "Pages",
        &[
            ("about", "About Page"),
            ("academics", "Academics Page"),
            ("students-page", "Students Page"),
            ("downloads", "Student Downloads"),
            ("elibrary", "E-Library"),
            ("achievements", "Achievements"),
            ("alumni", "Alumni Stats"),
        ],
    ),
    (
        "Site",
        &[
            ("navbar", "Navbar"),
            ("footer", "Footer"),
            ("menu", "Menu Items"),
            ("contact-info", "Contact Info"),
        ],
    ),
    (
        "Inbox",
        &[("contacts", "Contact Messages"), ("admissions", "Admissions")],
    ),
];

const ADMIN_STYLE: &str = r#"
*{margin:0;padding:0;box-sizing:border-box;}
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;color:#1f2937;background:#f3f4f6;display:flex;min-height:100vh;}
a{color:#15803d;text-decoration:none;}
aside{width:240px;background:#14532d;color:#d1fae5;padding:20px 0;flex-shrink:0;}
aside h1{font-size:16px;padding:0 20px 16px;color:#fff;}
aside h2{font-size:11px;text-transform:uppercase;letter-spacing:.08em;padding:12px 20px 4px;color:#86efac;}
aside a{display:block;padding:6px 20px;color:#d1fae5;font-size:14px;}
aside a.active{background:#166534;color:#fff;}
aside form{padding:16px 20px;}
main{flex:1;padding:32px;max-width:1100px;}
main h1{font-size:24px;margin-bottom:20px;}
.card{background:#fff;border-radius:8px;padding:20px;margin-bottom:16px;box-shadow:0 1px 2px rgba(0,0,0,.05);}
.counts{display:grid;grid-template-columns:repeat(auto-fill,minmax(180px,1fr));gap:16px;}
.counts strong{display:block;font-size:28px;color:#15803d;}
table{width:100%;border-collapse:collapse;background:#fff;}
th,td{padding:10px;border-bottom:1px solid #e5e7eb;text-align:left;font-size:14px;vertical-align:top;}
th{background:#f0fdf4;}
form.editor{display:grid;gap:14px;}
form.editor label{display:grid;gap:4px;font-size:14px;font-weight:600;}
form.editor label.check{display:flex;gap:8px;align-items:center;}
input,textarea,select{padding:8px;border:1px solid #d1d5db;border-radius:6px;font:inherit;font-weight:400;}
button,.button{background:#16a34a;color:#fff;border:none;border-radius:6px;padding:8px 14px;font-size:14px;cursor:pointer;display:inline-block;}
button.danger{background:#dc2626;}
button.quiet{background:#e5e7eb;color:#111827;}
.actions{display:flex;gap:6px;flex-wrap:wrap;}
.actions form{display:inline;}
.pill{display:inline-block;border-radius:10px;padding:1px 8px;font-size:12px;background:#e5e7eb;}
.pill.on{background:#dcfce7;color:#166534;}
.alert{background:#fee2e2;color:#991b1b;padding:12px 16px;border-radius:6px;margin-bottom:16px;}
.saved{background:#dcfce7;color:#166534;padding:12px 16px;border-radius:6px;margin-bottom:16px;}
.login{margin:auto;width:360px;}
"#;

fn sidebar(current: &str) -> String {
    let mut html = format!("<aside><h1>{SCHOOL_NAME}</h1>");
    for (group, links) in NAV {
        html.push_str(&format!("<h2>{group}</h2>"));
        for (slug, label) in *links {
            let active = if *slug == current { r#" class="active""# } else { "" };
            html.push_str(&format!(r#"<a href="/admin/{slug}"{active}>{label}</a>"#));
        }
    }
    html.push_str(
        r#"<form method="post" action="/admin/logout"><button class="quiet" type="submit">Sign out</button></form></aside>"#,
    );
    html
}

pub fn admin_page(admin: &AdminUser, title: &str, current: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | Admin</title>
<style>{ADMIN_STYLE}</style>
</head>
<body>
{sidebar}
<main>
<p class="muted" style="float:right;font-size:13px;">{who}</p>
<h1>{title}</h1>
{body}
</main>
</body>
</html>"#,
        title = escape(title),
        sidebar = sidebar(current),
        who = escape(&admin.email),
    ))
}

pub fn login_page(error: Option<&str>, email: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Admin Login | {SCHOOL_NAME}</title>
<style>{ADMIN_STYLE}</style>
</head>
<body>
<main class="login">
<div class="card">
<h1>Admin Login</h1>
{alert}
<form class="editor" method="post" action="/admin/login">
<label>Email<input type="email" name="email" value="{email}" required></label>
<label>Password<input type="password" name="password" required></label>
<button type="submit">Sign in</button>
</form>
</div>
</main>
</body>
</html>"#,
        alert = error.map(alert).unwrap_or_default(),
        email = escape(email),
    ))
}

/// Blocking failure message shown above a list or form.
pub fn alert(message: &str) -> String {
    format!(r#"<div class="alert" role="alertdialog" aria-live="assertive">{}</div>"#, escape(message))
}

pub fn saved(message: &str) -> String {
    format!(r#"<div class="saved" role="status">{}</div>"#, escape(message))
}

pub fn delete_button(action: &str) -> String {
    format!(
        r#"<form method="post" action="{action}" onsubmit="return confirm('Are you sure you want to delete this item?');"><button class="danger" type="submit">Delete</button></form>"#
    )
}

pub fn toggle_button(action: &str, active: bool) -> String {
    format!(
        r#"<form method="post" action="{action}"><button class="quiet" type="submit">{}</button></form>"#,
        if active { "Deactivate" } else { "Activate" }
    )
}

pub fn active_pill(active: bool) -> &'static str {
    if active {
        r#"<span class="pill on">Active</span>"#
    } else {
        r#"<span class="pill">Inactive</span>"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_is_blocking_dialog() {
        let html = alert("Failed to delete <item>");
        assert!(html.contains(r#"role="alertdialog""#));
        assert!(html.contains("&lt;item&gt;"));
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let html = delete_button("/admin/news/3/delete");
        assert!(html.contains("return confirm("));
        assert!(html.contains(r#"action="/admin/news/3/delete""#));
    }

    #[test]
    fn test_sidebar_marks_current() {
        let html = sidebar("faculty");
        assert!(html.contains(r#"<a href="/admin/faculty" class="active">Faculty</a>"#));
        assert_eq!(html.matches(r#"class="active""#).count(), 1);
    }
}
