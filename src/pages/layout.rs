use chrono::{Datelike, Utc};

use super::fallback::{rows_or, single_or};
use super::html::escape;
use crate::content::ContentRepo;
use crate::types::{FooterInfo, MenuItem, NavbarInfo, Table};

pub const SCHOOL_NAME: &str = "Hilltop Educational Institute";

#[derive(Debug, Clone)]
pub struct NavbarView {
    pub school_name: String,
    pub tagline: String,
    pub logo_text: String,
    pub phone: String,
    pub email: String,
    pub address_short: String,
}

#[derive(Debug, Clone)]
pub struct FooterView {
    pub school_name: String,
    pub tagline: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub youtube_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLink {
    pub label: String,
    pub href: String,
}

/// Navbar, footer and menu shared by every public page.
#[derive(Debug, Clone)]
pub struct Chrome {
    pub navbar: NavbarView,
    pub footer: FooterView,
    pub menu: Vec<MenuLink>,
}

impl From<NavbarInfo> for NavbarView {
    fn from(n: NavbarInfo) -> Self {
        Self {
            school_name: n.school_name,
            tagline: n.tagline,
            logo_text: n.logo_text,
            phone: n.phone,
            email: n.email,
            address_short: n.address_short,
        }
    }
}

impl From<FooterInfo> for FooterView {
    fn from(f: FooterInfo) -> Self {
        Self {
            school_name: f.school_name,
            tagline: f.tagline,
            address: f.address,
            phone: f.phone,
            email: f.email,
            facebook_url: f.facebook_url,
            instagram_url: f.instagram_url,
            youtube_url: f.youtube_url,
        }
    }
}

impl From<MenuItem> for MenuLink {
    fn from(m: MenuItem) -> Self {
        Self {
            label: m.label,
            href: m.href,
        }
    }
}

pub fn default_navbar() -> NavbarView {
    NavbarView {
        school_name: SCHOOL_NAME.into(),
        tagline: "Empowering Minds, Building Futures".into(),
        logo_text: "HEI".into(),
        phone: "+91 98765 43210".into(),
        email: "info@hilltop.edu".into(),
        address_short: "Darend, Ganderbal - 191201".into(),
    }
}

pub fn default_footer() -> FooterView {
    FooterView {
        school_name: SCHOOL_NAME.into(),
        tagline: "Providing quality education with modern facilities and experienced faculty since 1995."
            .into(),
        address: "Darend, Ganderbal, Jammu & Kashmir - 191201".into(),
        phone: "+91 98765 43210".into(),
        email: "info@hilltop.edu".into(),
        facebook_url: None,
        instagram_url: None,
        youtube_url: None,
    }
}

pub fn default_menu() -> Vec<MenuLink> {
    [
        ("Home", "/"),
        ("About", "/about"),
        ("Academics", "/academics"),
        ("Admissions", "/admissions"),
        ("Faculty", "/faculty"),
        ("Students", "/students"),
        ("Activities", "/activities"),
        ("Gallery", "/gallery"),
        ("Contact", "/contact"),
    ]
    .into_iter()
    .map(|(label, href)| MenuLink {
        label: label.into(),
        href: href.into(),
    })
    .collect()
}

impl Chrome {
    pub async fn load(repo: &ContentRepo) -> Self {
        let (navbar, footer, menu) = tokio::join!(
            repo.single_active::<NavbarInfo>(),
            repo.single_active::<FooterInfo>(),
            repo.active::<MenuItem>(),
        );

        Self {
            navbar: single_or(Table::NavbarInfo, navbar, NavbarView::from, default_navbar),
            footer: single_or(Table::FooterInfo, footer, FooterView::from, default_footer),
            menu: rows_or(Table::MenuItems, menu, MenuLink::from, default_menu),
        }
    }

    #[must_use]
    pub fn fallback() -> Self {
        Self {
            navbar: default_navbar(),
            footer: default_footer(),
            menu: default_menu(),
        }
    }
}

pub fn tel_href(phone: &str) -> String {
    let digits: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{digits}")
}

fn is_current(href: &str, path: &str) -> bool {
    if href == "/" {
        path == "/"
    } else {
        path == href || path.starts_with(&format!("{href}/"))
    }
}

fn render_header(navbar: &NavbarView, menu: &[MenuLink], path: &str) -> String {
    let links: String = menu
        .iter()
        .map(|link| {
            let class = if is_current(&link.href, path) {
                r#" class="active""#
            } else {
                ""
            };
            format!(
                r#"<a href="{}"{class}>{}</a>"#,
                escape(&link.href),
                escape(&link.label)
            )
        })
        .collect();

    format!(
        r#"<div class="topbar">
    <span><a href="{tel}">{phone}</a></span>
    <span><a href="mailto:{email}">{email}</a></span>
    <span>{address}</span>
</div>
<header class="header">
    <a class="brand" href="/">
        <span class="logo">{logo}</span>
        <span><strong>{name}</strong><small>{tagline}</small></span>
    </a>
    <nav>{links}</nav>
</header>"#,
        tel = tel_href(&navbar.phone),
        phone = escape(&navbar.phone),
        email = escape(&navbar.email),
        address = escape(&navbar.address_short),
        logo = escape(&navbar.logo_text),
        name = escape(&navbar.school_name),
        tagline = escape(&navbar.tagline),
    )
}

fn render_footer(footer: &FooterView, menu: &[MenuLink]) -> String {
    let socials: String = [
        ("Facebook", &footer.facebook_url),
        ("Instagram", &footer.instagram_url),
        ("YouTube", &footer.youtube_url),
    ]
    .into_iter()
    .filter_map(|(label, url)| {
        url.as_deref().map(|url| {
            format!(
                r#"<a href="{}" target="_blank" rel="noopener">{label}</a>"#,
                escape(url)
            )
        })
    })
    .collect();

    let quick_links: String = menu
        .iter()
        .map(|link| {
            format!(
                r#"<li><a href="{}">{}</a></li>"#,
                escape(&link.href),
                escape(&link.label)
            )
        })
        .collect();

    format!(
        r#"<footer class="footer">
    <div class="footer-grid">
        <div><h3>{name}</h3><p>{tagline}</p><div class="socials">{socials}</div></div>
        <div><h3>Quick Links</h3><ul>{quick_links}</ul></div>
        <div><h3>Contact Us</h3><ul>
            <li>{address}</li>
            <li><a href="{tel}">{phone}</a></li>
            <li><a href="mailto:{email}">{email}</a></li>
        </ul></div>
    </div>
    <p class="copyright">&copy; {year} {name}. All rights reserved.</p>
</footer>"#,
        name = escape(&footer.school_name),
        tagline = escape(&footer.tagline),
        address = escape(&footer.address),
        tel = tel_href(&footer.phone),
        phone = escape(&footer.phone),
        email = escape(&footer.email),
        year = Utc::now().year(),
    )
}

/// Wraps page content in the full public document.
pub fn render_page(chrome: &Chrome, title: &str, path: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | {school}</title>
<style>{STYLE}</style>
</head>
<body>
{header}
<main>
{content}
</main>
{footer}
</body>
</html>"#,
        title = escape(title),
        school = escape(&chrome.navbar.school_name),
        header = render_header(&chrome.navbar, &chrome.menu, path),
        footer = render_footer(&chrome.footer, &chrome.menu),
    )
}

const STYLE: &str = r#"
*{margin:0;padding:0;box-sizing:border-box;}
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;color:#1f2937;background:#fff;line-height:1.6;}
a{color:#15803d;text-decoration:none;}
.topbar{background:#14532d;color:#d1fae5;font-size:13px;display:flex;gap:24px;justify-content:center;padding:6px 16px;}
.topbar a{color:#d1fae5;}
.header{display:flex;justify-content:space-between;align-items:center;padding:12px 24px;border-bottom:1px solid #e5e7eb;position:sticky;top:0;background:#fff;z-index:10;}
.brand{display:flex;gap:12px;align-items:center;color:#14532d;}
.brand small{display:block;color:#6b7280;font-size:12px;}
.logo{background:#16a34a;color:#fff;border-radius:50%;width:44px;height:44px;display:flex;align-items:center;justify-content:center;font-weight:700;}
.header nav a{margin-left:16px;color:#374151;font-size:14px;}
.header nav a.active{color:#16a34a;font-weight:600;}
main section{padding:48px 24px;max-width:1120px;margin:0 auto;}
.page-hero{background:linear-gradient(135deg,#14532d,#16a34a);color:#fff;text-align:center;max-width:none!important;}
.page-hero h1{font-size:40px;margin-bottom:8px;}
h2{font-size:28px;color:#14532d;margin-bottom:16px;text-align:center;}
.grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(240px,1fr));gap:20px;}
.card{border:1px solid #e5e7eb;border-radius:10px;padding:20px;background:#fff;}
.card h3{font-size:18px;margin-bottom:6px;color:#111827;}
.muted{color:#6b7280;font-size:14px;}
.badge{display:inline-block;background:#dcfce7;color:#166534;border-radius:12px;padding:2px 10px;font-size:12px;font-weight:600;}
.icon{font-size:28px;display:inline-block;margin-bottom:8px;}
.bullets{list-style:none;}
.bullets li::before{content:"• ";color:#16a34a;}
table{width:100%;border-collapse:collapse;}
th,td{padding:10px;border-bottom:1px solid #e5e7eb;text-align:left;}
th{background:#f0fdf4;}
form.public-form{display:grid;gap:12px;max-width:640px;margin:0 auto;}
form.public-form input,form.public-form textarea{padding:10px;border:1px solid #d1d5db;border-radius:6px;font:inherit;}
button,.button{background:#16a34a;color:#fff;border:none;border-radius:6px;padding:10px 18px;font-size:15px;cursor:pointer;display:inline-block;}
.chips{display:flex;flex-wrap:wrap;gap:8px;justify-content:center;margin-bottom:24px;}
.chip{border:1px solid #16a34a;border-radius:16px;padding:4px 14px;font-size:14px;}
.chip-active{background:#16a34a;color:#fff;}
.stack{display:grid;gap:16px;}
.card.row{display:flex;align-items:center;gap:16px;}
.card.row>div{flex:1;}
.photo img{width:100%;height:200px;object-fit:cover;border-radius:6px;}
.placeholder{background:#f0fdf4;min-height:160px;display:flex;flex-direction:column;align-items:center;justify-content:center;border-radius:6px;}
form.inline{grid-template-columns:1fr auto;}
.banner{padding:12px 16px;border-radius:6px;margin:0 auto 16px;max-width:640px;}
.banner-success{background:#dcfce7;color:#166534;}
.banner-error{background:#fee2e2;color:#991b1b;}
.hero{position:relative;min-height:480px;color:#fff;display:flex;align-items:center;justify-content:center;text-align:center;overflow:hidden;max-width:none!important;background:linear-gradient(135deg,#14532d,#16a34a);}
.hero .slide{position:absolute;inset:0;background-size:cover;background-position:center;opacity:0;transition:opacity 1s;}
.hero .slide.active{opacity:1;}
.hero .slide::after{content:"";position:absolute;inset:0;background:rgba(0,0,0,.5);}
.hero .hero-text{position:relative;max-width:760px;}
.hero h1{font-size:44px;margin-bottom:12px;}
.notice-board{background:#fef9c3;display:flex;align-items:center;gap:12px;padding:10px 16px!important;max-width:none!important;overflow:hidden;}
.marquee{overflow:hidden;flex:1;}
.marquee-track{display:inline-flex;gap:48px;white-space:nowrap;animation:marquee 30s linear infinite;}
@keyframes marquee{from{transform:translateX(0);}to{transform:translateX(-50%);}}
.stats{display:grid;grid-template-columns:repeat(auto-fit,minmax(180px,1fr));gap:20px;text-align:center;}
.stats strong{display:block;font-size:32px;color:#15803d;}
.footer{background:#111827;color:#d1d5db;padding:40px 24px 16px;}
.footer a{color:#d1d5db;}
.footer h3{color:#fff;margin-bottom:10px;}
.footer ul{list-style:none;}
.footer-grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(220px,1fr));gap:24px;max-width:1120px;margin:0 auto;}
.socials a{margin-right:12px;}
.copyright{text-align:center;margin-top:24px;font-size:13px;color:#9ca3af;}
"#;
