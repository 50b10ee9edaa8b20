use leptos::prelude::*;
use skylapp_client::{qr::short_link, UrlRecord};
use ::url::Url;

use super::{dashboard_page, encode_component, Nav, Notice, NoticeBanner};

/// Which of the two URL tables is being rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UrlListKind {
    Mine,
    All,
}

impl UrlListKind {
    fn title(self) -> &'static str {
        match self {
            UrlListKind::Mine => "My URLs",
            UrlListKind::All => "Manage All URLs",
        }
    }

    fn empty_message(self) -> &'static str {
        match self {
            UrlListKind::Mine => "You haven't created any URLs yet.",
            UrlListKind::All => "No URLs found.",
        }
    }

    fn columns(self) -> &'static str {
        match self {
            UrlListKind::Mine => "5",
            UrlListKind::All => "6",
        }
    }
}

#[derive(Debug, Default)]
pub struct ShortenForm {
    pub url: String,
    pub alias: String,
    pub error: Option<String>,
    pub created_alias: Option<String>,
    pub success: bool,
}

/// Returns `raw` when it is safe to use as a link target.
fn http_link(raw: &str) -> Option<String> {
    Url::parse(raw)
        .ok()
        .filter(|url| matches!(url.scheme(), "http" | "https"))
        .map(|_| raw.to_string())
}

pub fn shorten_page(nav: &Nav, short_base: &str, prefix: &str, form: &ShortenForm) -> String {
    let url = form.url.clone();
    let alias = form.alias.clone();
    let prefix = prefix.to_string();
    let error = form.error.clone().map(Notice::Error);
    // Some(None): shortened, but the API returned no alias to link to.
    let created = form.success.then(|| {
        form.created_alias
            .as_deref()
            .filter(|alias| !alias.is_empty())
            .map(|alias| (short_link(short_base, alias), format!("{prefix}{alias}")))
    });

    dashboard_page(nav, "Shorten URL", move || {
        let outcome = created.map(|link| match link {
            Some((href, label)) => view! {
                <div class="notice success">
                    "URL shortened successfully! Your new link is: "
                    <a href=href target="_blank" rel="noopener noreferrer">{label}</a>
                </div>
            }
            .into_any(),
            None => view! {
                <NoticeBanner notice=Notice::Success("URL shortened successfully!".into())/>
            }
            .into_any(),
        });

        view! {
            <h1>"Shorten a New URL"</h1>
            <form class="card" method="post" action="/dashboard/shorten-url">
                <label for="url">"Original URL " <span class="required">"*"</span></label>
                <input
                    id="url"
                    name="url"
                    type="url"
                    required=true
                    value=url
                    placeholder="https://example.com/very/long/url/to/shorten"
                />
                <label for="alias">"Custom Alias (Optional)"</label>
                <div class="prefixed">
                    <span>{prefix}</span>
                    <input id="alias" name="alias" type="text" value=alias placeholder="my-custom-link"/>
                </div>
                <p class="hint">"Leave blank for a random alias. No spaces allowed."</p>
                {error.map(|notice| view! { <NoticeBanner notice=notice/> })}
                {outcome}
                <button type="submit">"Shorten URL"</button>
            </form>
        }
    })
}

pub fn url_list_page(
    nav: &Nav,
    kind: UrlListKind,
    short_base: &str,
    urls: Result<&[UrlRecord], String>,
    notice: Option<Notice>,
) -> String {
    let urls = urls.map(<[UrlRecord]>::to_vec);
    let short_base = short_base.to_string();

    dashboard_page(nav, kind.title(), move || {
        let body = match urls {
            Err(message) => view! { <p class="notice error">{format!("Error: {message}")}</p> }.into_any(),
            Ok(urls) => url_table(kind, &short_base, urls).into_any(),
        };

        view! {
            <h1>{kind.title()}</h1>
            {notice.map(|notice| view! { <NoticeBanner notice=notice/> })}
            {body}
        }
    })
}

fn url_table(kind: UrlListKind, short_base: &str, urls: Vec<UrlRecord>) -> impl IntoView {
    let head = match kind {
        UrlListKind::Mine => view! {
            <tr>
                <th>"Alias"</th>
                <th>"URL"</th>
                <th>"Clicks"</th>
                <th>"Expires"</th>
                <th>"Actions"</th>
            </tr>
        }
        .into_any(),
        UrlListKind::All => view! {
            <tr>
                <th>"Alias"</th>
                <th>"Original URL"</th>
                <th>"Clicks"</th>
                <th>"Created By"</th>
                <th>"Expires"</th>
                <th>"Actions"</th>
            </tr>
        }
        .into_any(),
    };

    let rows = if urls.is_empty() {
        let columns = kind.columns();
        view! {
            <tr>
                <td colspan=columns class="empty">{kind.empty_message()}</td>
            </tr>
        }
        .into_any()
    } else {
        urls.into_iter()
            .map(|url| url_row(kind, short_base, url))
            .collect_view()
            .into_any()
    };

    view! {
        <table>
            <thead>{head}</thead>
            <tbody>{rows}</tbody>
        </table>
    }
}

fn url_row(kind: UrlListKind, short_base: &str, record: UrlRecord) -> AnyView {
    let clicks = record.click_count.to_string();
    let expires = record.expiration_label();
    let creator = record.creator_label();
    let id = record.id;
    let UrlRecord { url: target, alias, .. } = record;

    match kind {
        UrlListKind::Mine => {
            let short = short_link(short_base, &alias);
            let qr = format!("/dashboard/qr-code?target={}", encode_component(&alias));
            let edit = format!("/dashboard/my-urls/{id}/edit");
            let delete = format!("/dashboard/my-urls/{id}/delete");
            let title = target.clone();
            view! {
                <tr>
                    <td><a href=short target="_blank">{alias}</a></td>
                    <td class="truncate" title=title>{target}</td>
                    <td>{clicks}</td>
                    <td>{expires}</td>
                    <td>
                        <a href=qr>"QR"</a>
                        <a href=edit>"Edit"</a>
                        <form class="inline" method="post" action=delete>
                            <button class="danger" type="submit">"Delete"</button>
                        </form>
                    </td>
                </tr>
            }
            .into_any()
        }
        UrlListKind::All => {
            let destination = match http_link(&target) {
                Some(href) => view! {
                    <a href=href target="_blank" rel="noopener noreferrer">{target.clone()}</a>
                }
                .into_any(),
                None => view! { <span>{target.clone()}</span> }.into_any(),
            };
            let delete = format!("/dashboard/manage-urls/{id}/delete");
            view! {
                <tr>
                    <td>{alias}</td>
                    <td class="truncate" title=target>{destination}</td>
                    <td>{clicks}</td>
                    <td>{creator}</td>
                    <td>{expires}</td>
                    <td>
                        <form class="inline" method="post" action=delete>
                            <button class="danger" type="submit">"Delete"</button>
                        </form>
                    </td>
                </tr>
            }
            .into_any()
        }
    }
}

pub fn edit_page(
    nav: &Nav,
    prefix: &str,
    record: &UrlRecord,
    url: &str,
    alias: &str,
    error: Option<&str>,
) -> String {
    let heading = format!("Edit {}", record.alias);
    let action = format!("/dashboard/my-urls/{}/edit", record.id);
    let summary = format!(
        "Clicks so far: {}. Expires: {}.",
        record.click_count,
        record.expiration_label()
    );
    let url = url.to_string();
    let alias = alias.to_string();
    let prefix = prefix.to_string();
    let error = error.map(|message| Notice::Error(message.to_string()));

    dashboard_page(nav, "Edit URL", move || {
        view! {
            <h1>{heading}</h1>
            <form class="card" method="post" action=action>
                <label for="url">"Destination URL " <span class="required">"*"</span></label>
                <input id="url" name="url" type="url" required=true value=url/>
                <label for="alias">"Alias"</label>
                <div class="prefixed">
                    <span>{prefix}</span>
                    <input id="alias" name="alias" type="text" value=alias/>
                </div>
                <p class="hint">{summary}</p>
                {error.map(|notice| view! { <NoticeBanner notice=notice/> })}
                <button type="submit">"Save changes"</button>
            </form>
            <p><a href="/dashboard/my-urls">"Back to My URLs"</a></p>
        }
    })
}

/// Edit page for when the link itself could not be loaded.
pub fn edit_unavailable_page(nav: &Nav, message: &str) -> String {
    let message = format!("Error: {message}");
    dashboard_page(nav, "Edit URL", move || {
        view! {
            <h1>"Edit URL"</h1>
            <p class="notice error">{message}</p>
            <p><a href="/dashboard/my-urls">"Back to My URLs"</a></p>
        }
    })
}
