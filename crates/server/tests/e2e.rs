use std::net::SocketAddr;

use axum::Router;
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode as HttpStatusCode;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::routes;
use server::startup::build_state;

const USER: &str = "admin";
const PASS: &str = "password";

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    // 不读 config.toml，凭据用测试内置的 admin/password
    let cfg = configs::AppConfig::default();
    let state = build_state(&cfg);

    let app: Router = routes::build_router(CorsLayer::very_permissive(), state);
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_movies_require_basic_auth() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    // 无凭据与错误凭据都拒绝
    let res = c.get(format!("{}/movies", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::UNAUTHORIZED);
    assert!(res.headers().get("www-authenticate").is_some());

    let res = c
        .get(format!("{}/movies", app.base_url))
        .basic_auth(USER, Some("wrong"))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::UNAUTHORIZED);

    let res = c
        .get(format!("{}/movies", app.base_url))
        .basic_auth(USER, Some(PASS))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn e2e_list_and_get() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c
        .get(format!("{}/movies", app.base_url))
        .basic_auth(USER, Some(PASS))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let list = res.json::<serde_json::Value>().await?;
    assert_eq!(list.as_array().map(|a| a.len()), Some(5));

    let res = c
        .get(format!("{}/movies/1", app.base_url))
        .basic_auth(USER, Some(PASS))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let movie = res.json::<serde_json::Value>().await?;
    assert_eq!(movie["title"], "Casablanca");

    let res = c
        .get(format!("{}/movies/999", app.base_url))
        .basic_auth(USER, Some(PASS))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_put_updates_poster_and_genre() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    // poster 文件名成为新的 poster 值；genre 留空时不覆盖原值
    let form = Form::new()
        .text("genre", "")
        .part("poster", Part::bytes(vec![0u8; 16]).file_name("out.gif"));
    let res = c
        .put(format!("{}/movies/5", app.base_url))
        .basic_auth(USER, Some(PASS))
        .multipart(form)
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let merged = res.json::<serde_json::Value>().await?;
    assert_eq!(merged["poster"], "out.gif");
    assert_eq!(merged["genre"], "Thriller");
    assert_eq!(merged["title"], "North by Northwest");

    // 缺少 poster 文件域 -> 400
    let form = Form::new().text("genre", "Drama");
    let res = c
        .put(format!("{}/movies/5", app.base_url))
        .basic_auth(USER, Some(PASS))
        .multipart(form)
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    // 更新不存在的 id -> 404
    let form = Form::new()
        .text("genre", "Drama")
        .part("poster", Part::bytes(vec![0u8; 4]).file_name("x.jpg"));
    let res = c
        .put(format!("{}/movies/999", app.base_url))
        .basic_auth(USER, Some(PASS))
        .multipart(form)
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_delete_movie() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c
        .delete(format!("{}/movies/2", app.base_url))
        .basic_auth(USER, Some(PASS))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["deleted_id"], 2);

    // 已删除之后再删与再查都 404
    let res = c
        .delete(format!("{}/movies/2", app.base_url))
        .basic_auth(USER, Some(PASS))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    let res = c
        .get(format!("{}/movies/2", app.base_url))
        .basic_auth(USER, Some(PASS))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}
