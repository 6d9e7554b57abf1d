//! Shared fixtures for unit tests: mock Steam responses and client setup

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::client::WorkshopClient;
use crate::config::Config;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_KEY: &str = "TESTKEY";
pub const CREATOR: u64 = 76561198000000001;
pub const DETAILS_PATH: &str = "/IPublishedFileService/GetDetails/v1/";
pub const PLAYERS_PATH: &str = "/ISteamUser/GetPlayerSummaries/v2/";

/// Run blocking client code off the async test runtime
pub async fn blocking<F, R>(f: F) -> R
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .expect("blocking task panicked")
}

/// Client pointed at a mock server for both API and community URLs
pub fn test_client(uri: &str) -> WorkshopClient {
    let config = Config {
        api_base_url: uri.to_string(),
        community_base_url: "https://steamcommunity.com".to_string(),
        ..Config::new(TEST_KEY)
    };
    WorkshopClient::new(config).expect("test client")
}

/// A successful GetDetails body for `id`
pub fn details_body(id: u64, file_url: Option<&str>) -> Value {
    details_body_with(id, |record| {
        record["file_url"] = file_url.map_or(json!(""), |url| json!(url));
    })
}

/// A successful GetDetails body for `id`, with the record edited by `edit`
pub fn details_body_with(id: u64, edit: impl FnOnce(&mut Value)) -> Value {
    let mut record = json!({
        "publishedfileid": id.to_string(),
        "result": 1,
        "creator": CREATOR.to_string(),
        "creator_appid": 730,
        "file_size": "11",
        "filename": "maps/de_testmap.bsp",
        "file_url": "",
        "preview_url": "https://cdn.example.com/preview/1.jpg",
        "title": "Test Map",
        "file_description": "A map for testing",
        "time_created": 1672531200,
        "time_updated": 1675209600,
        "tags": [{"tag": "Fun"}, {"tag": "Competitive"}],
        "views": 1200,
        "followers": 34,
        "subscriptions": 56
    });
    edit(&mut record);
    json!({"response": {"result": 1, "resultcount": 1, "publishedfiledetails": [record]}})
}

/// Mount a GetDetails mock for `id`
pub async fn mount_details(server: &MockServer, id: u64, file_url: Option<&str>) {
    Mock::given(method("GET"))
        .and(path(DETAILS_PATH))
        .and(query_param("publishedfileids[0]", id.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(details_body(id, file_url)))
        .mount(server)
        .await;
}

/// A GetPlayerSummaries body listing one player
pub fn player_body(name: &str, real_name: Option<&str>) -> Value {
    let mut player = json!({
        "steamid": CREATOR.to_string(),
        "personaname": name,
        "avatarfull": "https://avatars.example.com/full.jpg"
    });
    if let Some(real_name) = real_name {
        player["realname"] = json!(real_name);
    }
    json!({"response": {"players": [player]}})
}
