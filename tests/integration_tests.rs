use games_hub::{
    catalog::{CatalogClient, CatalogSource, GameId},
    config::Config,
    overlay::OverlayState,
    state::{HubEvent, HubState, LOAD_ERROR_MESSAGE},
    Error,
};
use std::fs;
use std::time::Duration;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const CATALOG_JSON: &str = r#"[
    {
        "id": "chess",
        "title": "Chess",
        "description": "The classic game of kings",
        "thumbnail": "https://example.com/chess.png",
        "url": "https://example.com/play/chess"
    },
    {
        "id": "checkers",
        "title": "Checkers",
        "description": "Jump your way to victory",
        "thumbnail": "https://example.com/checkers.png",
        "url": "https://example.com/play/checkers"
    },
    {
        "id": 3,
        "title": "Snake",
        "description": "Eat apples, grow longer",
        "thumbnail": "https://example.com/snake.png",
        "url": "https://example.com/play/snake"
    }
]"#;

fn client() -> CatalogClient {
    CatalogClient::new(Duration::from_secs(5)).unwrap()
}

/// Answer a single HTTP request with a canned response, returning the URL to fetch
async fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut request: Vec<u8> = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
    });

    format!("http://{}/games.json", addr)
}

/// Missing config files are created with defaults
#[test]
fn test_config_created_when_missing() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("nested").join("config.toml");

    let config = Config::load_from(&config_path).unwrap();

    assert!(config_path.exists());
    assert_eq!(config.catalog, "games.json");
    assert_eq!(config.log_level, "info");
}

/// A saved config round-trips through disk
#[test]
fn test_config_save_and_load() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let config = Config {
        catalog: "https://example.com/games.json".to_string(),
        log_level: "debug".to_string(),
        ..Config::default()
    };
    config.save_to(&config_path).unwrap();

    let loaded = Config::load_from(&config_path).unwrap();
    assert_eq!(loaded.catalog, config.catalog);
    assert_eq!(loaded.log_level, "debug");
}

/// Old files without a version are migrated and rewritten
#[test]
fn test_config_migration_rewrites_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "catalog = \"mine.json\"\nrequest_timeout_secs = 0\n").unwrap();

    let config = Config::load_from(&config_path).unwrap();
    assert_eq!(config.catalog, "mine.json");
    assert_eq!(config.request_timeout_secs, 30);
    assert_eq!(config.config_version, 1);

    let rewritten = fs::read_to_string(&config_path).unwrap();
    assert!(rewritten.contains("config_version = 1"));
}

/// Unparsable values fall back to defaults while keeping recognisable keys
#[test]
fn test_config_with_bad_types_is_merged() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        "catalog = \"remote.json\"\nwindow_width = \"wide\"\n",
    )
    .unwrap();

    let config = Config::load_from(&config_path).unwrap();
    assert_eq!(config.catalog, "remote.json");
    assert_eq!(config.window_width, 1200.0);
}

/// Invalid values are reported, not silently replaced
#[test]
fn test_config_invalid_log_level() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "log_level = \"loud\"\nconfig_version = 1\n").unwrap();

    assert!(matches!(Config::load_from(&config_path), Err(Error::Config(_))));
}

#[tokio::test]
async fn test_fetch_catalog_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("games.json");
    fs::write(&path, CATALOG_JSON).unwrap();

    let source = CatalogSource::parse(path.to_str().unwrap());
    let catalog = client().fetch(&source).await.unwrap();

    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.entries()[2].id, GameId::new("3"));
}

#[tokio::test]
async fn test_fetch_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let source = CatalogSource::Local(temp_dir.path().join("nope.json"));

    assert!(matches!(client().fetch(&source).await, Err(Error::Io(_))));
}

#[tokio::test]
async fn test_fetch_duplicate_ids_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("games.json");
    fs::write(
        &path,
        r#"[
            {"id": 1, "title": "A", "description": "", "thumbnail": "", "url": "a"},
            {"id": "1", "title": "B", "description": "", "thumbnail": "", "url": "b"}
        ]"#,
    )
    .unwrap();

    let result = client().fetch(&CatalogSource::Local(path)).await;
    assert!(matches!(result, Err(Error::Catalog(_))));
}

#[tokio::test]
async fn test_fetch_catalog_over_http() {
    let url = serve_once("200 OK", CATALOG_JSON).await;
    let source = CatalogSource::parse(&url);
    assert!(matches!(source, CatalogSource::Remote(_)));

    let catalog = client().fetch(&source).await.unwrap();
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.entries()[0].title, "Chess");
}

/// A non-success status is a failed load, whatever the body says
#[tokio::test]
async fn test_fetch_http_error_status_fails() {
    let url = serve_once("404 Not Found", CATALOG_JSON).await;

    let result = client().fetch(&CatalogSource::parse(&url)).await;
    assert!(matches!(result, Err(Error::Catalog(_))));
}

#[tokio::test]
async fn test_fetch_http_malformed_body_fails() {
    let url = serve_once("200 OK", r#"{"games": []}"#).await;

    let result = client().fetch(&CatalogSource::parse(&url)).await;
    assert!(matches!(result, Err(Error::Json(_))));
}

/// Load, search, open, go fullscreen, dismiss: the whole session flow
#[tokio::test]
async fn test_browse_session() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("games.json");
    fs::write(&path, CATALOG_JSON).unwrap();

    let mut state = HubState::new();
    let loaded = client().fetch(&CatalogSource::Local(path)).await;
    state.handle(HubEvent::CatalogLoaded(loaded));

    state.handle(HubEvent::QueryChanged("CHE".to_string()));
    let titles: Vec<_> = state.visible().iter().map(|g| g.title.as_str()).collect();
    assert_eq!(titles, vec!["Chess", "Checkers"]);

    state.handle(HubEvent::QueryChanged("xyz".to_string()));
    assert!(state.show_no_results());

    state.handle(HubEvent::QueryChanged(String::new()));
    assert_eq!(state.visible().len(), 3);

    state.handle(HubEvent::CardClicked(GameId::new("3")));
    assert_eq!(state.overlay().state(), OverlayState::Open);
    assert_eq!(
        state.overlay().frame().src(),
        Some("https://example.com/play/snake")
    );

    state.handle(HubEvent::FullscreenToggled);
    assert_eq!(state.overlay().state(), OverlayState::OpenFullscreen);

    state.handle(HubEvent::BackdropClicked);
    assert_eq!(state.overlay().state(), OverlayState::Closed);
    assert_eq!(state.overlay().frame().src(), None);
}

#[tokio::test]
async fn test_failed_load_shows_static_message() {
    let temp_dir = TempDir::new().unwrap();
    let mut state = HubState::new();

    let loaded = client()
        .fetch(&CatalogSource::Local(temp_dir.path().join("missing.json")))
        .await;
    state.handle(HubEvent::CatalogLoaded(loaded));

    assert_eq!(state.error_message(), Some(LOAD_ERROR_MESSAGE));
    assert!(state.visible().is_empty());
}
