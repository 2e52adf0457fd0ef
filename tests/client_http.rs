//! JSON-path integration tests against a local mock server.

use drinks_net::models::DrinkPage;
use drinks_net::{Endpoint, NetworkClient, NetworkError};

const RANDOM_BODY: &str = r#"{
    "drinks": [{
        "idDrink": "11007",
        "strDrink": "Margarita",
        "strCategory": "Ordinary Drink",
        "strAlcoholic": "Alcoholic",
        "strGlass": "Cocktail glass",
        "strInstructions": "Rub the rim of the glass with the lime slice.",
        "strDrinkThumb": "https://www.thecocktaildb.com/images/media/drink/5noda61589575158.jpg"
    }]
}"#;

fn client() -> NetworkClient {
    NetworkClient::builder()
        .api_key("1")
        .build()
        .expect("client should build")
}

/// A local port with nothing listening on it.
fn refused_base() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

#[tokio::test]
async fn decodes_typed_response() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/1/random.php")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(RANDOM_BODY)
        .create_async()
        .await;

    let page: DrinkPage = client()
        .request(&Endpoint::get(server.url(), "random.php"))
        .await
        .unwrap();

    assert_eq!(page.drinks.len(), 1);
    assert_eq!(page.drinks[0].name, "Margarita");
    mock.assert_async().await;
}

#[tokio::test]
async fn schema_mismatch_is_a_decoding_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/1/random.php")
        .with_status(200)
        .with_body(r#"{"drinks": "nope"}"#)
        .create_async()
        .await;

    let err = client()
        .request::<DrinkPage>(&Endpoint::get(server.url(), "random.php"))
        .await
        .unwrap_err();
    assert!(matches!(err, NetworkError::Decoding(_)));
}

#[tokio::test]
async fn empty_body_is_unknown() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/1/random.php")
        .with_status(200)
        .with_body("")
        .create_async()
        .await;

    let err = client()
        .request::<DrinkPage>(&Endpoint::get(server.url(), "random.php"))
        .await
        .unwrap_err();
    assert!(matches!(err, NetworkError::Unknown));
}

#[tokio::test]
async fn construction_failure_skips_the_network() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let err = client()
        .request::<DrinkPage>(&Endpoint::get("not a url", "random.php"))
        .await
        .unwrap_err();

    assert!(matches!(err, NetworkError::MissingUrl));
    mock.assert_async().await;
}

#[tokio::test]
async fn connection_failure_passes_through_as_transport_error() {
    let err = client()
        .request::<DrinkPage>(&Endpoint::get(refused_base(), "random.php"))
        .await
        .unwrap_err();
    assert!(matches!(err, NetworkError::Transport(_)));
}

#[tokio::test]
async fn http_status_is_not_interpreted() {
    // An error page that fails schema decoding surfaces as a decoding
    // failure, not a transport one.
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/1/random.php")
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let err = client()
        .request::<DrinkPage>(&Endpoint::get(server.url(), "random.php"))
        .await
        .unwrap_err();
    assert!(matches!(err, NetworkError::Decoding(_)));
}
