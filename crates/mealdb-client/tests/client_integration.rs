//! Integration tests for the recipe service client
//!
//! These tests use wiremock to stand in for TheMealDB and exercise the full
//! request/response cycle: envelope decoding, the `meals: null` no-match
//! signal, and every error path the client can take.

use mealdb_client::{Error, MealDbClient, MealDbConfig};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> MealDbClient {
    MealDbClient::new(MealDbConfig::new(server.uri()))
}

// =============================================================================
// Category Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_categories_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/categories.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&serde_json::json!({
            "categories": [
                {
                    "idCategory": "1",
                    "strCategory": "Beef",
                    "strCategoryThumb": "https://www.themealdb.com/images/category/beef.png",
                    "strCategoryDescription": "Beef is the culinary name for meat from cattle."
                },
                {
                    "idCategory": "8",
                    "strCategory": "Seafood",
                    "strCategoryThumb": "https://www.themealdb.com/images/category/seafood.png",
                    "strCategoryDescription": "Seafood is any form of sea life regarded as food."
                }
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let categories = client.categories().await.unwrap();

    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].str_category, "Beef");
    assert_eq!(categories[1].id_category, "8");
}

#[tokio::test]
async fn test_categories_absent_field_reads_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/categories.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&serde_json::json!({})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let categories = client.categories().await.unwrap();

    assert!(categories.is_empty());
}

// =============================================================================
// Filter and Search Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_filter_by_category() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/filter.php"))
        .and(query_param("c", "Seafood"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&serde_json::json!({
            "meals": [
                {
                    "strMeal": "Baked salmon with fennel & tomatoes",
                    "strMealThumb": "https://www.themealdb.com/images/media/meals/1548772327.jpg",
                    "idMeal": "52959"
                },
                {
                    "strMeal": "Escovitch Fish",
                    "strMealThumb": "https://www.themealdb.com/images/media/meals/1520084413.jpg",
                    "idMeal": "52944"
                }
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let meals = client.filter_by_category("Seafood").await.unwrap();

    assert_eq!(meals.len(), 2);
    assert_eq!(meals[0].id_meal, "52959");
    assert_eq!(meals[1].str_meal, "Escovitch Fish");
}

#[tokio::test]
async fn test_filter_unknown_category_null_meals() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/filter.php"))
        .and(query_param("c", "NoSuchCategory"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&serde_json::json!({
            "meals": null
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let meals = client.filter_by_category("NoSuchCategory").await.unwrap();

    assert!(meals.is_empty());
}

#[tokio::test]
async fn test_search_by_name() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.php"))
        .and(query_param("s", "Arrabiata"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&serde_json::json!({
            "meals": [
                {
                    "strMeal": "Spicy Arrabiata Penne",
                    "strMealThumb": "https://www.themealdb.com/images/media/meals/ustsqw1468250014.jpg",
                    "idMeal": "52771"
                }
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let meals = client.search_by_name("Arrabiata").await.unwrap();

    assert_eq!(meals.len(), 1);
    assert_eq!(meals[0].str_meal, "Spicy Arrabiata Penne");
}

#[tokio::test]
async fn test_search_no_matches_null_meals() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.php"))
        .and(query_param("s", "zzzzzz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&serde_json::json!({
            "meals": null
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let meals = client.search_by_name("zzzzzz").await.unwrap();

    assert!(meals.is_empty());
}

// =============================================================================
// Lookup Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_lookup_full_detail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/lookup.php"))
        .and(query_param("i", "52772"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&serde_json::json!({
            "meals": [
                {
                    "idMeal": "52772",
                    "strMeal": "Teriyaki Chicken Casserole",
                    "strCategory": "Chicken",
                    "strArea": "Japanese",
                    "strInstructions": "Preheat oven to 350 degrees F. Spray a 9x13-inch baking pan.",
                    "strMealThumb": "https://www.themealdb.com/images/media/meals/wvpsxx1468256321.jpg",
                    "strIngredient1": "soy sauce",
                    "strIngredient2": "water",
                    "strIngredient3": "brown sugar",
                    "strIngredient4": "ground ginger",
                    "strIngredient5": "",
                    "strMeasure1": "3/4 cup",
                    "strMeasure2": "1/2 cup",
                    "strMeasure3": "1/4 cup",
                    "strMeasure4": "1/2 teaspoon",
                    "strMeasure5": ""
                }
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let detail = client.lookup("52772").await.unwrap().unwrap();

    assert_eq!(detail.str_meal, "Teriyaki Chicken Casserole");
    assert!(detail
        .str_instructions
        .as_deref()
        .unwrap()
        .starts_with("Preheat oven"));
    assert_eq!(
        detail.ingredient_lines(),
        vec![
            "3/4 cup soy sauce",
            "1/2 cup water",
            "1/4 cup brown sugar",
            "1/2 teaspoon ground ginger"
        ]
    );
}

#[tokio::test]
async fn test_lookup_unknown_id_returns_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/lookup.php"))
        .and(query_param("i", "99999999"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&serde_json::json!({
            "meals": null
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let detail = client.lookup("99999999").await.unwrap();

    assert!(detail.is_none());
}

// =============================================================================
// Error Handling Tests
// =============================================================================

#[tokio::test]
async fn test_404_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/categories.php"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.categories().await;

    match result {
        Err(Error::Api { status, body }) => {
            assert_eq!(status, 404);
            assert_eq!(body, "not found");
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_500_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.php"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.search_by_name("anything").await;

    match result {
        Err(Error::Api { status, .. }) => assert_eq!(status, 500),
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_json_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/lookup.php"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not valid json"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.lookup("52772").await;

    assert!(matches!(result, Err(Error::Json(_))));
}

#[tokio::test]
async fn test_connection_failure() {
    // Port 0 is never routable, so the request fails before any response
    let client = MealDbClient::new(MealDbConfig::new("http://127.0.0.1:0"));
    let result = client.categories().await;

    assert!(matches!(result, Err(Error::Network(_))));
}

// =============================================================================
// Request Shape Tests
// =============================================================================

#[tokio::test]
async fn test_user_agent_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/categories.php"))
        .and(header("user-agent", "TestAgent/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&serde_json::json!({
            "categories": []
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = MealDbConfig::new(mock_server.uri()).with_user_agent("TestAgent/1.0");
    let client = MealDbClient::new(config);

    let categories = client.categories().await.unwrap();
    assert!(categories.is_empty());
}

#[tokio::test]
async fn test_search_text_sent_verbatim() {
    let mock_server = MockServer::start().await;

    // Spaces and accents must survive into the query string
    Mock::given(method("GET"))
        .and(path("/search.php"))
        .and(query_param("s", "chicken soup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&serde_json::json!({
            "meals": null
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let meals = client.search_by_name("chicken soup").await.unwrap();

    assert!(meals.is_empty());
}
