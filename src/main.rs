use axum::extract::Request;
use axum::ServiceExt;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;
use tower_http::services::ServeDir;

mod blog;
mod routes;
mod state;
mod templates;

#[tokio::main]
async fn main() {
    let state = std::sync::Arc::new(state::State::new());

    // Static assets resolve only after no page route matches, like
    // express.static on the original.
    let app = NormalizePathLayer::trim_trailing_slash().layer(
        routes::route()
            .fallback_service(ServeDir::new(blog::PUBLIC_PATH))
            .with_state(state),
    );

    let addr = std::net::SocketAddr::from(blog::BIND_ADDR);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Error binding to local port");

    println!("Server is running on local port {}.", addr.port());

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .await
        .expect("Error serving app")
}
