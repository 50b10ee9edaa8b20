use leptos::prelude::*;

pub const STYLESHEET_PATH: &str = "/static/app.css";

pub const STYLESHEET: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: #f3f4f6; color: #111827; }
a { color: #4f46e5; }
.layout { display: flex; min-height: 100vh; }
.sidebar { width: 16rem; background: #1f2937; color: #d1d5db; padding: 1.25rem; box-sizing: border-box; }
.sidebar h1 { color: #fff; font-size: 1.5rem; margin: 0 0 1.5rem; border-bottom: 2px solid #374151; padding-bottom: .5rem; }
.sidebar a { display: block; padding: .5rem .75rem; border-radius: .5rem; color: #d1d5db; text-decoration: none; margin-bottom: .25rem; }
.sidebar a:hover { background: #374151; }
.sidebar a.active { background: #4f46e5; color: #fff; }
.sidebar .logout { margin-top: 1rem; padding-top: 1rem; border-top: 1px solid #374151; }
.sidebar .logout a { color: #f87171; }
main.content { flex: 1; padding: 2rem; }
main.centered { display: flex; min-height: 100vh; align-items: center; justify-content: center; }
.card { background: #fff; padding: 2rem; border-radius: .5rem; box-shadow: 0 1px 3px rgba(0,0,0,.15); max-width: 32rem; width: 100%; box-sizing: border-box; }
form.card { margin: 0 auto 2rem; }
label { display: block; font-size: .875rem; font-weight: 500; margin: 1rem 0 .25rem; }
input { width: 100%; padding: .5rem .75rem; border: 1px solid #d1d5db; border-radius: .375rem; box-sizing: border-box; }
.prefixed { display: flex; }
.prefixed span { padding: .5rem .75rem; background: #f9fafb; border: 1px solid #d1d5db; border-right: 0; border-radius: .375rem 0 0 .375rem; color: #6b7280; }
.prefixed input { border-radius: 0 .375rem .375rem 0; }
button { margin-top: 1.25rem; width: 100%; padding: .5rem 1rem; border: 0; border-radius: .375rem; background: #4f46e5; color: #fff; font-weight: 500; cursor: pointer; }
button.danger { background: #dc2626; width: auto; margin: 0; padding: .25rem .75rem; }
form.inline { display: inline; }
.hint, .muted { font-size: .8rem; color: #6b7280; }
.notice { margin-top: 1rem; padding: .75rem; border-radius: .375rem; font-size: .875rem; }
.notice.error { background: #fee2e2; color: #b91c1c; }
.notice.success { background: #dcfce7; color: #15803d; }
table { width: 100%; border-collapse: collapse; background: #fff; box-shadow: 0 1px 3px rgba(0,0,0,.15); }
th { text-align: left; font-size: .75rem; text-transform: uppercase; color: #6b7280; background: #f9fafb; padding: .75rem 1rem; }
td { padding: .75rem 1rem; border-top: 1px solid #e5e7eb; font-size: .875rem; }
td.truncate { max-width: 20rem; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }
td.empty { text-align: center; color: #6b7280; }
.badge { padding: 0 .5rem; border-radius: 9999px; font-size: .75rem; font-weight: 600; }
.badge.active { background: #15803d; color: #dcfce7; }
.badge.inactive { background: #b91c1c; color: #fee2e2; }
.qr { text-align: center; }
.qr svg { max-width: 100%; height: auto; }
"#;

const LINKS: &[(&str, &str, bool)] = &[
    ("/dashboard", "Dashboard", false),
    ("/dashboard/my-urls", "My URLs", false),
    ("/dashboard/shorten-url", "Shorten URL", false),
    ("/dashboard/qr-code", "QR Code", false),
    ("/dashboard/manage-urls", "Manage URLs", true),
    ("/dashboard/manage-users", "Manage Users", true),
];

/// Sidebar state: which route is current and whether admin links show up.
#[derive(Debug, Clone)]
pub struct Nav {
    pub current: String,
    pub is_admin: bool,
}

impl Nav {
    pub fn new(current: impl Into<String>, is_admin: bool) -> Self {
        Nav {
            current: current.into(),
            is_admin,
        }
    }
}

#[component]
pub fn Sidebar(nav: Nav) -> impl IntoView {
    let links = LINKS
        .iter()
        .filter(|(_, _, admin_only)| nav.is_admin || !admin_only)
        .map(|(href, label, _)| {
            let class = if nav.current == *href { "active" } else { "" };
            view! { <a href=*href class=class>{*label}</a> }
        })
        .collect_view();

    view! {
        <aside class="sidebar">
            <h1>"Skylapp"</h1>
            <nav>
                {links}
                <div class="logout">
                    <a href="/logout">"Logout"</a>
                </div>
            </nav>
        </aside>
    }
}

/// Renders a full HTML document around `body`.
pub fn render_document<F, V>(title: &str, body: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView + 'static,
{
    let title = format!("{title} · Skylapp");
    let owner = Owner::new_root(None);
    owner.with(|| {
        view! {
            <!DOCTYPE html>
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <link rel="stylesheet" href=STYLESHEET_PATH/>
                    <title>{title}</title>
                </head>
                <body>{body()}</body>
            </html>
        }
        .to_html()
    })
}

/// A document with the sidebar on the left and `content` on the right.
pub fn dashboard_page<F, V>(nav: &Nav, title: &str, content: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView + 'static,
{
    let nav = nav.clone();
    render_document(title, move || {
        view! {
            <div class="layout">
                <Sidebar nav=nav/>
                <main class="content">{content()}</main>
            </div>
        }
    })
}
