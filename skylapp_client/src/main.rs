use clap::{Parser, Subcommand};
use dotenv::dotenv;
use skylapp_client::client::DEFAULT_API_URL;
use skylapp_client::qr::{self, DEFAULT_SHORT_BASE};
use skylapp_client::{
    normalize_alias, utils, ApiClient, Credentials, NewUser, ShortenRequest, ShortenerApi,
    UrlRecord, UrlUpdate, UserRecord,
};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Command line access to the Skylapp shortener API", long_about = None)]
struct Args {
    /// Base URL of the shortener API
    #[arg(long, env = "SKYLAPP_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Bearer token returned by `login`
    #[arg(long, env = "SKYLAPP_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and print the bearer token
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },
    /// Shorten a URL, optionally with a custom alias
    Shorten {
        #[arg(short, long)]
        url: String,
        #[arg(short, long)]
        alias: Option<String>,
        #[arg(long, env = "SKYLAPP_SHORT_BASE", default_value = DEFAULT_SHORT_BASE)]
        short_base: String,
    },
    /// List the URLs you created
    MyUrls {
        /// Save the list as JSON instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List every URL (admin only)
    AllUrls {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Change the destination or alias of a URL
    UpdateUrl {
        #[arg(long)]
        id: i64,
        #[arg(short, long)]
        url: String,
        #[arg(short, long)]
        alias: Option<String>,
    },
    /// Delete a URL
    DeleteUrl {
        #[arg(long)]
        id: i64,
    },
    /// List user accounts (admin only)
    Users {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Create a user account (admin only)
    Register {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
        #[arg(long, default_value = "")]
        first_name: String,
        #[arg(long, default_value = "")]
        last_name: String,
    },
    /// Delete a user account (admin only)
    DeleteUser {
        #[arg(long)]
        id: i64,
    },
    /// Write a QR code for an alias or URL as SVG
    Qr {
        /// Alias or absolute URL
        target: String,
        #[arg(short, long, default_value = "qr.svg")]
        output: PathBuf,
        #[arg(long, default_value_t = 256)]
        size: u32,
        #[arg(long, env = "SKYLAPP_SHORT_BASE", default_value = DEFAULT_SHORT_BASE)]
        short_base: String,
    },
}

fn require_token(token: &Option<String>) -> Result<&str, Box<dyn std::error::Error>> {
    token
        .as_deref()
        .ok_or_else(|| "Authentication token not found. Run `skylapp login` and set SKYLAPP_TOKEN.".into())
}

fn print_urls(urls: &[UrlRecord]) {
    if urls.is_empty() {
        println!("No URLs found.");
        return;
    }
    println!("{:<8} {:<20} {:>8} {:<12} {:<20} URL", "ID", "ALIAS", "CLICKS", "EXPIRES", "CREATED BY");
    for url in urls {
        println!(
            "{:<8} {:<20} {:>8} {:<12} {:<20} {}",
            url.id,
            url.alias,
            url.click_count,
            url.expiration_label(),
            url.creator_label(),
            url.url
        );
    }
}

fn print_users(users: &[UserRecord]) {
    println!("{:<6} {:<24} {:<30} {:<9} ROLES", "ID", "NAME", "EMAIL", "STATUS");
    for user in users {
        println!(
            "{:<6} {:<24} {:<30} {:<9} {}",
            user.id,
            user.display_name(),
            user.email,
            user.status_label(),
            user.roles_label()
        );
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "skylapp=info,skylapp_client=info".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let api = ApiClient::new(&args.api_url, Duration::from_secs(args.timeout))?;

    match args.command {
        Command::Login { email, password } => {
            let token = api.login(&Credentials { email, password }).await?;
            println!("{token}");
        }
        Command::Shorten {
            url,
            alias,
            short_base,
        } => {
            let request = ShortenRequest {
                url,
                alias: alias.as_deref().and_then(normalize_alias),
            };
            let record = api.shorten(require_token(&args.token)?, &request).await?;
            println!("{}", qr::short_link(&short_base, &record.alias));
        }
        Command::MyUrls { output } => {
            let urls = api.user_urls(require_token(&args.token)?).await?;
            match output {
                Some(path) => utils::save_json(&urls, &path)?,
                None => print_urls(&urls),
            }
        }
        Command::AllUrls { output } => {
            let urls = api.all_urls(require_token(&args.token)?).await?;
            match output {
                Some(path) => utils::save_json(&urls, &path)?,
                None => print_urls(&urls),
            }
        }
        Command::UpdateUrl { id, url, alias } => {
            let update = UrlUpdate {
                url,
                alias: alias.as_deref().and_then(normalize_alias),
            };
            api.update_url(require_token(&args.token)?, id, &update).await?;
            println!("URL {id} updated.");
        }
        Command::DeleteUrl { id } => {
            api.delete_url(require_token(&args.token)?, id).await?;
            println!("URL {id} deleted.");
        }
        Command::Users { output } => {
            let users = api.users(require_token(&args.token)?).await?;
            match output {
                Some(path) => utils::save_json(&users, &path)?,
                None => print_users(&users),
            }
        }
        Command::Register {
            email,
            password,
            first_name,
            last_name,
        } => {
            let user = NewUser {
                first_name,
                last_name,
                email,
                password,
            };
            api.register_user(require_token(&args.token)?, &user).await?;
            println!("User {} created.", user.email);
        }
        Command::DeleteUser { id } => {
            api.delete_user(require_token(&args.token)?, id).await?;
            println!("User {id} deleted.");
        }
        Command::Qr {
            target,
            output,
            size,
            short_base,
        } => {
            let data = qr::qr_target(&target, &short_base).ok_or("Nothing to encode.")?;
            let svg = qr::render_svg(&data, size)?;
            utils::save_text(&svg, &output)?;
            println!("QR code for {data} saved to {}", output.display());
        }
    }

    Ok(())
}
