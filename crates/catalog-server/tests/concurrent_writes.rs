#[allow(dead_code)]
mod common;

use futures::future::join_all;

use common::{TestServer, game_body};

#[tokio::test]
async fn concurrent_creates_same_editor_only_one_wins() {
    let server = TestServer::empty().await;
    let client = reqwest::Client::new();

    let requests = (0..16).map(|i| {
        let client = client.clone();
        let url = server.games_url();
        async move {
            client
                .post(url)
                .json(&game_body(&format!("Racer {i}"), "Codemasters"))
                .send()
                .await
                .unwrap()
                .status()
        }
    });
    let statuses = join_all(requests).await;

    let created = statuses.iter().filter(|s| s.as_u16() == 201).count();
    let rejected = statuses.iter().filter(|s| s.as_u16() == 400).count();
    assert_eq!(created, 1);
    assert_eq!(rejected, 15);

    let body: serde_json::Value = reqwest::get(server.games_url())
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn concurrent_creates_get_distinct_ids() {
    let server = TestServer::empty().await;
    let client = reqwest::Client::new();

    let requests = (0..16).map(|i| {
        let client = client.clone();
        let url = server.games_url();
        async move {
            let body: serde_json::Value = client
                .post(url)
                .json(&game_body(&format!("Game {i}"), &format!("Studio {i}")))
                .send()
                .await
                .unwrap()
                .json()
                .await
                .unwrap();
            body["id"].as_u64().unwrap()
        }
    });
    let mut ids = join_all(requests).await;
    ids.sort_unstable();

    assert_eq!(ids, (0..16).collect::<Vec<u64>>());
}
