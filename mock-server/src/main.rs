use mock_server::MockApi;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

fn demo_api() -> MockApi {
    let api = MockApi::new();
    api.respond("GET", "time", 200, Some(r#""2024-01-01 00:00:00""#))
        .respond("GET", "time/iso", 200, Some(r#""2024-01-01T00:00:00+0100""#))
        .respond(
            "GET",
            "user",
            200,
            Some(r#"{"id":1,"username":"demo","email":"demo@example.com","points":100,"type":"premium"}"#),
        )
        .respond("GET", "hosts/domains", 200, Some(r#"["1fichier.com","mega.nz","rapidgator.net"]"#))
        .respond("GET", "torrents", 200, Some("[]"))
        .respond("GET", "disable_access_token", 204, None);
    api
}

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("listening on http://{addr}{}", mock_server::API_PREFIX);
    mock_server::run(listener, demo_api()).await
}
