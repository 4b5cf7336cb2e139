use std::net::{Ipv4Addr, SocketAddr};

use log::info;
use server::{app::app, utils};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let port = utils::env::resolve_port().expect("PORT must be a valid TCP port number");
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind port");
    info!("Running axum on http://localhost:{port}");

    axum::serve(listener, app())
        .with_graceful_shutdown(utils::shutdown::shutdown_signal())
        .await
        .unwrap();
}
