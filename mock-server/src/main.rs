use tokio::net::TcpListener;

/// Serves the seeded catalog fixtures on `127.0.0.1:{PORT}` (default 8000,
/// matching the real backend's development port).
#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let port = std::env::var("PORT").unwrap_or_else(|_| "8000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    println!("mock catalog backend listening on {addr}");
    mock_server::run(listener).await
}
