use super::ChainClient;

#[test]
fn test_base_url_trailing_slash_normalized() {
    let client = ChainClient::new("http://127.0.0.1:8000/").unwrap();
    assert_eq!(client.base_url(), "http://127.0.0.1:8000");

    let client = ChainClient::new("http://127.0.0.1:8000").unwrap();
    assert_eq!(client.base_url(), "http://127.0.0.1:8000");
}

#[test]
fn test_url_building() {
    let client = ChainClient::new("http://localhost:8000").unwrap();

    assert_eq!(
        client.url("api/chain/"),
        "http://localhost:8000/blockchain/api/chain/"
    );
    assert_eq!(
        client.url("api/balance/abc123/"),
        "http://localhost:8000/blockchain/api/balance/abc123/"
    );
    assert_eq!(client.url("mine/"), "http://localhost:8000/blockchain/mine/");
}

#[tokio::test]
async fn test_get_balance_rejects_empty_address() {
    let client = ChainClient::new("http://localhost:8000").unwrap();
    let err = client.get_balance("  ").await.unwrap_err();
    assert!(err.to_string().contains("address must not be empty"));
}

#[tokio::test]
async fn test_mine_block_rejects_empty_address() {
    let client = ChainClient::new("http://localhost:8000").unwrap();
    let err = client.mine_block("").await.unwrap_err();
    assert!(err.to_string().contains("miner address must not be empty"));
}
