//! Mock Steam Web API responses

use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creator SteamID64 used by every fixture
pub const CREATOR: u64 = 76561198000000002;

/// Workshop URL for an item ID
pub fn workshop_url(id: u64) -> String {
    format!("https://steamcommunity.com/sharedfiles/filedetails/?id={id}&searchtext=")
}

/// A successful GetDetails body
pub fn details_body(id: u64, filename: &str, file_url: &str) -> Value {
    json!({
        "response": {
            "result": 1,
            "resultcount": 1,
            "publishedfiledetails": [{
                "publishedfileid": id.to_string(),
                "result": 1,
                "creator": CREATOR.to_string(),
                "creator_appid": 4000,
                "file_size": "5",
                "filename": filename,
                "file_url": file_url,
                "preview_url": "",
                "title": format!("Item {id}"),
                "file_description": "",
                "time_created": 1700000000,
                "time_updated": 1700000600,
                "tags": [{"tag": "Map"}],
                "views": 1,
                "followers": 2,
                "subscriptions": 3
            }]
        }
    })
}

/// Mount GetDetails and the file download for one item
pub async fn mount_item(server: &MockServer, id: u64, filename: &str, body: &'static [u8]) {
    let file_path = format!("/ugc/{id}");
    let file_url = format!("{}{}", server.uri(), file_path);

    Mock::given(method("GET"))
        .and(path("/IPublishedFileService/GetDetails/v1/"))
        .and(query_param("publishedfileids[0]", id.to_string()))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(details_body(id, filename, &file_url)),
        )
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(file_path))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body))
        .expect(1)
        .mount(server)
        .await;
}

/// Mount a GetDetails failure (result code 9, "file not found") for one item
pub async fn mount_missing_item(server: &MockServer, id: u64) {
    Mock::given(method("GET"))
        .and(path("/IPublishedFileService/GetDetails/v1/"))
        .and(query_param("publishedfileids[0]", id.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": {"publishedfiledetails": [{"publishedfileid": id.to_string(), "result": 9}]}
        })))
        .mount(server)
        .await;
}

/// Mount GetDetails for an item without a direct file URL
pub async fn mount_item_without_file(server: &MockServer, id: u64) {
    Mock::given(method("GET"))
        .and(path("/IPublishedFileService/GetDetails/v1/"))
        .and(query_param("publishedfileids[0]", id.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(details_body(id, "", "")))
        .mount(server)
        .await;
}
