use leptos::prelude::*;
use skylapp_client::{NewUser, UserRecord};

use super::{dashboard_page, Nav, Notice, NoticeBanner};

pub fn manage_users_page(
    nav: &Nav,
    users: Result<&[UserRecord], String>,
    form: &NewUser,
    notice: Option<Notice>,
) -> String {
    let users = match users {
        Ok(users) => users.to_vec(),
        Err(message) => {
            let message = format!("Error fetching users: {message}");
            return dashboard_page(nav, "Manage Users", move || {
                view! {
                    <h1>"Manage Users"</h1>
                    <p class="notice error">{message}</p>
                }
            });
        }
    };

    // The password is never echoed back into the form.
    let first_name = form.first_name.clone();
    let last_name = form.last_name.clone();
    let email = form.email.clone();

    dashboard_page(nav, "Manage Users", move || {
        let rows = users.into_iter().map(user_row).collect_view();

        view! {
            <h1>"Manage Users"</h1>
            <form class="card" method="post" action="/dashboard/manage-users">
                <h2>"Create New User"</h2>
                <label for="firstName">"First Name"</label>
                <input id="firstName" name="firstName" type="text" value=first_name/>
                <label for="lastName">"Last Name"</label>
                <input id="lastName" name="lastName" type="text" value=last_name/>
                <label for="email">"Email*"</label>
                <input id="email" name="email" type="email" required=true value=email/>
                <label for="password">"Password*"</label>
                <input id="password" name="password" type="password" required=true/>
                <button type="submit">"Create User"</button>
                {notice.map(|notice| view! { <NoticeBanner notice=notice/> })}
            </form>
            <h2>"Current Users"</h2>
            <table>
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Username"</th>
                        <th>"Status"</th>
                        <th>"Roles"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        }
    })
}

fn user_row(user: UserRecord) -> impl IntoView {
    let badge = if user.enabled { "badge active" } else { "badge inactive" };
    let id = user.id.to_string();
    let name = user.display_name();
    let status = user.status_label();
    let roles = user.roles_label();
    let delete = format!("/dashboard/manage-users/{}/delete", user.id);

    view! {
        <tr>
            <td>{id}</td>
            <td>{name}</td>
            <td>{user.email}</td>
            <td>{user.username}</td>
            <td><span class=badge>{status}</span></td>
            <td>{roles}</td>
            <td>
                <form class="inline" method="post" action=delete>
                    <button class="danger" type="submit">"Delete"</button>
                </form>
            </td>
        </tr>
    }
}
