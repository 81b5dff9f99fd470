//! This is the http front end for the account pages,
//! the pages a user reaches through links in account emails.

#![deny(missing_docs)]
#![deny(warnings)]
#![deny(clippy::nursery)]
#![deny(clippy::all)]

pub(crate) mod confirm_delete;
pub(crate) mod html;
pub(crate) mod pages;
pub(crate) mod password_reset;
pub(crate) mod shared;

#[cfg(test)]
mod tests;

use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
    str::FromStr,
    sync::Arc,
    time::Duration,
};

use account_client::interface::Io;
use anyhow::anyhow;
use axum::{
    extract::{Path, RawQuery},
    Form, Router,
};
use clap::{command, Arg, ArgAction};
use client_reqwest::client::{AccountApiUrls, ClientReqwest};
use confirm_delete::{cancel_request, confirm_request, deletion_page, deletion_page_view};
use pages::Pages;
use password_reset::{password_reset_page, password_reset_request};
use serde::{Deserialize, Serialize};
use shared::Shared;
use tokio::net::{TcpListener, TcpSocket};
use url::Url;

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::LOCALHOST)
}

const fn default_request_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct HttpServerDetails {
    #[serde(default = "default_host")]
    host: IpAddr,
    port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AccountApiDetails {
    /// Base url of the account api, e.g. `https://api.mydomain.org/`.
    url: Url,
    /// If the password reset is served by a different host,
    /// otherwise [`AccountApiDetails::url`] is used.
    #[serde(default)]
    password_reset_url: Option<Url>,
    #[serde(default = "default_request_timeout_secs")]
    request_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PagesDetails {
    /// How long an opened deletion page stays usable.
    lifetime_secs: u64,
}

impl Default for PagesDetails {
    fn default() -> Self {
        Self {
            lifetime_secs: 30 * 60,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Details {
    http: HttpServerDetails,
    account_api: AccountApiDetails,
    #[serde(default)]
    pages: PagesDetails,
}

pub(crate) fn prepare_io(details: &AccountApiDetails) -> anyhow::Result<Arc<dyn Io>> {
    let urls = match &details.password_reset_url {
        Some(password_reset_url) => {
            AccountApiUrls::with_password_reset(details.url.clone(), password_reset_url.clone())
        }
        None => AccountApiUrls::new(details.url.clone()),
    };
    let client: Arc<dyn Io> =
        ClientReqwest::new(urls, Duration::from_secs(details.request_timeout_secs))?;
    Ok(client)
}

pub(crate) async fn prepare_http(
    details: &HttpServerDetails,
    pages: &PagesDetails,
    io: Arc<dyn Io>,
) -> anyhow::Result<(TcpListener, Router, Arc<Shared>)> {
    let shared = Arc::new(Shared {
        io,
        pages: Pages::new(Duration::from_secs(pages.lifetime_secs)),
    });

    // prepare socket
    let addr = SocketAddr::new(details.host, details.port);
    let tcp_socket = if addr.is_ipv4() {
        TcpSocket::new_v4()?
    } else {
        TcpSocket::new_v6()?
    };
    tcp_socket.set_reuseaddr(true)?;
    tcp_socket.bind(addr)?;

    let listener = tcp_socket.listen(1024)?;

    // build http server
    let mut app = axum::Router::new();

    let shared_clone = shared.clone();
    app = app.route(
        "/",
        axum::routing::get(password_reset_page).post(move |payload: Form<_>| {
            password_reset_request(shared_clone, payload)
        }),
    );
    let shared_clone = shared.clone();
    app = app.route(
        "/confirmdelete",
        axum::routing::get(move |RawQuery(query): RawQuery| deletion_page(shared_clone, query)),
    );
    let shared_clone = shared.clone();
    app = app.route(
        "/confirmdelete/:page_id",
        axum::routing::get(move |Path(page_id): Path<String>| {
            deletion_page_view(shared_clone, page_id)
        }),
    );
    let shared_clone = shared.clone();
    app = app.route(
        "/confirmdelete/:page_id/confirm",
        axum::routing::post(move |Path(page_id): Path<String>| {
            confirm_request(shared_clone, page_id)
        }),
    );
    let shared_clone = shared.clone();
    app = app.route(
        "/confirmdelete/:page_id/cancel",
        axum::routing::post(move |Path(page_id): Path<String>| {
            cancel_request(shared_clone, page_id)
        }),
    );

    Ok((listener, app, shared))
}

pub(crate) async fn prepare(details: &Details) -> anyhow::Result<(TcpListener, Router)> {
    let io = prepare_io(&details.account_api)?;
    let (listener, app, _) = prepare_http(&details.http, &details.pages, io).await?;

    Ok((listener, app))
}

pub(crate) async fn run(listener: TcpListener, app: Router) -> anyhow::Result<()> {
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let mut cmd = command!()
        .about("Serves the account pages (password reset & account deletion) over http.")
        .arg(
            Arg::new("settings")
                .long("settings")
                .help("Path to the settings file.")
                .required(false)
                .default_value("settings.json")
                .action(ArgAction::Set),
        );
    cmd.build();
    let m = cmd.get_matches();
    let settings_path = m
        .get_one::<String>("settings")
        .map(PathBuf::from)
        .ok_or_else(|| anyhow!("no settings path given"))?;

    let print_settings_err = || -> anyhow::Result<()> {
        log::error!(
            "a settings.json looks like this\n{}",
            serde_json::to_string_pretty(&Details {
                http: HttpServerDetails {
                    host: default_host(),
                    port: 3001,
                },
                account_api: AccountApiDetails {
                    url: Url::from_str("http://localhost:3002/")?,
                    password_reset_url: None,
                    request_timeout_secs: default_request_timeout_secs(),
                },
                pages: Default::default(),
            })?
        );
        Ok(())
    };

    let Ok(cfg) = tokio::fs::read(&settings_path).await else {
        log::error!("no {} found, please create one.", settings_path.display());
        print_settings_err()?;

        return Err(anyhow!(
            "failed to find {}, see log for more information",
            settings_path.display()
        ));
    };

    let details = match serde_json::from_slice::<Details>(&cfg) {
        Ok(details) => details,
        Err(err) => {
            log::error!("{} was invalid: {err}", settings_path.display());
            print_settings_err()?;

            return Err(anyhow!(
                "settings were not a valid json file, see log for more information"
            ));
        }
    };

    let (listener, app) = prepare(&details).await?;
    log::info!(
        "serving account pages on {}, account api at {}",
        listener.local_addr()?,
        details.account_api.url
    );
    run(listener, app).await
}
