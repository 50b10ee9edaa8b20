use leptos::prelude::*;

use super::{dashboard_page, Nav, Notice, NoticeBanner};

/// A generated code, ready to embed.
pub struct QrResult {
    pub data: String,
    pub svg: String,
    pub download: Option<String>,
}

pub fn qr_page(nav: &Nav, target: &str, result: Option<QrResult>, notice: Option<Notice>) -> String {
    let target = target.to_string();

    dashboard_page(nav, "QR Code", move || {
        let code = result.map(|result| {
            let svg = inline_svg(&result.svg).to_string();
            let download = result.download.map(|href| {
                view! {
                    <p><a href=href download="">"Download SVG"</a></p>
                }
            });
            view! {
                <div class="card qr">
                    <div inner_html=svg></div>
                    <p class="muted">{result.data}</p>
                    {download}
                </div>
            }
        });

        view! {
            <h1>"QR Code"</h1>
            <form class="card" method="get" action="/dashboard/qr-code">
                <label for="target">"Alias or URL"</label>
                <input id="target" name="target" type="text" required=true value=target placeholder="my-custom-link"/>
                <p class="hint">"An alias is expanded to its short link."</p>
                {notice.map(|notice| view! { <NoticeBanner notice=notice/> })}
                <button type="submit">"Generate QR Code"</button>
            </form>
            {code}
        }
    })
}

// The renderer emits a standalone XML document; only the <svg> element belongs inline.
fn inline_svg(svg: &str) -> &str {
    svg.find("<svg").map(|start| &svg[start..]).unwrap_or(svg)
}
