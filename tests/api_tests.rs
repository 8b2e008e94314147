//! API integration tests
//!
//! These run against a live server with a migrated database:
//! `cargo test -- --ignored`. The admin tests expect a seeded
//! admin account (admin / admin12345).

use reqwest::Client;
use serde_json::{json, Value};
use std::time::{SystemTime, UNIX_EPOCH};

const BASE_URL: &str = "http://localhost:8080/api/v1";

fn unique_username(prefix: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Clock before epoch")
        .as_nanos();
    format!("{}_{}", prefix, nanos)
}

/// Register a fresh librarian account and return (token, username, user_id)
async fn register_user(client: &Client, prefix: &str) -> (String, String, i64) {
    let username = unique_username(prefix);
    let response = client
        .post(format!("{}/auth/register", BASE_URL))
        .json(&json!({
            "username": username,
            "email": format!("{}@example.com", username),
            "firstname": "Test",
            "lastname": "User",
            "password": "password123"
        }))
        .send()
        .await
        .expect("Failed to send register request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse register response");
    let token = body["token"].as_str().expect("No token in response").to_string();
    let user_id = body["user"]["id"].as_i64().expect("No user id");
    (token, username, user_id)
}

async fn create_book(client: &Client, token: &str, title: &str, author: &str) -> i64 {
    let response = client
        .post(format!("{}/books", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "title": title, "author": author }))
        .send()
        .await
        .expect("Failed to send create book request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse book response");
    body["id"].as_i64().expect("No book id")
}

async fn admin_token(client: &Client) -> String {
    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "username": "admin",
            "password": "admin12345"
        }))
        .send()
        .await
        .expect("Failed to send login request");

    let body: Value = response.json().await.expect("Failed to parse login response");
    body["token"].as_str().expect("No token in response").to_string()
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
#[ignore]
async fn test_register_and_login() {
    let client = Client::new();
    let (_, username, _) = register_user(&client, "reg").await;

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({ "username": username, "password": "password123" }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["token"].is_string());
    assert_eq!(body["token_type"], "Bearer");
    // Registered users become librarians
    assert_eq!(body["user"]["role"], "librarian");
    assert_eq!(body["user"]["catalog_public"], false);
}

#[tokio::test]
#[ignore]
async fn test_login_invalid_credentials() {
    let client = Client::new();
    let (_, username, _) = register_user(&client, "badpw").await;

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({ "username": username, "password": "wrong-password" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_empty_query_returns_full_catalog_newest_first() {
    let client = Client::new();
    let (token, _, _) = register_user(&client, "search").await;

    create_book(&client, &token, "1984", "Orwell").await;
    create_book(&client, &token, "Brave New World", "Huxley").await;
    create_book(&client, &token, "Fahrenheit 451", "Bradbury").await;

    let response = client
        .get(format!("{}/books", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let books: Value = response.json().await.expect("Failed to parse response");
    let books = books.as_array().expect("Expected array");
    assert_eq!(books.len(), 3);
    assert_eq!(books[0]["title"], "Fahrenheit 451");
    assert_eq!(books[2]["title"], "1984");

    // Case-insensitive substring match over title, author, ISBN
    let response = client
        .get(format!("{}/books?query=orw", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    let books: Value = response.json().await.expect("Failed to parse response");
    let books = books.as_array().expect("Expected array");
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["title"], "1984");
}

#[tokio::test]
#[ignore]
async fn test_search_treats_like_metacharacters_literally() {
    let client = Client::new();
    let (token, _, _) = register_user(&client, "literal").await;

    create_book(&client, &token, "100 years of solitude", "García Márquez").await;
    create_book(&client, &token, "100% wool", "Anonymous").await;

    // "%" must only match itself, never act as a wildcard
    let response = client
        .get(format!("{}/books?query=100%25", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    let books: Value = response.json().await.expect("Failed to parse response");
    let books = books.as_array().expect("Expected array");
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["title"], "100% wool");

    // A plain prefix still matches both
    let response = client
        .get(format!("{}/books?query=100", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    let books: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(books.as_array().expect("Expected array").len(), 2);
}

#[tokio::test]
#[ignore]
async fn test_book_year_validation() {
    let client = Client::new();
    let (token, _, _) = register_user(&client, "year").await;

    let response = client
        .post(format!("{}/books", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "title": "Ancient Scrolls", "author": "Unknown", "publication_year": 999 }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_review_upsert_keeps_single_review() {
    let client = Client::new();
    let (token, _, _) = register_user(&client, "review").await;
    let book_id = create_book(&client, &token, "1984", "Orwell").await;

    // First review with score 4
    let response = client
        .put(format!("{}/books/{}/review", BASE_URL, book_id))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "score": 4, "comment": "Bleak but brilliant" }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    // Update to score 5: must update in place, never duplicate
    let response = client
        .put(format!("{}/books/{}/review", BASE_URL, book_id))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "score": 5, "comment": "A masterpiece on re-read" }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let response = client
        .get(format!("{}/books/{}", BASE_URL, book_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    let details: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(details["review"]["score"], 5);
    assert_eq!(details["review"]["book_id"], book_id);
}

#[tokio::test]
#[ignore]
async fn test_review_score_out_of_range() {
    let client = Client::new();
    let (token, _, _) = register_user(&client, "badscore").await;
    let book_id = create_book(&client, &token, "1984", "Orwell").await;

    for score in [0, 6] {
        let response = client
            .put(format!("{}/books/{}/review", BASE_URL, book_id))
            .header("Authorization", format!("Bearer {}", token))
            .json(&json!({ "score": score, "comment": "out of range" }))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), 400);
    }
}

#[tokio::test]
#[ignore]
async fn test_loan_return_is_owner_only() {
    let client = Client::new();
    let (owner_token, _, _) = register_user(&client, "lender").await;
    let (visitor_token, _, _) = register_user(&client, "borrower").await;
    let book_id = create_book(&client, &owner_token, "Dune", "Herbert").await;

    // Owner records the loan; actual return date starts null
    let response = client
        .post(format!("{}/books/{}/loans", BASE_URL, book_id))
        .header("Authorization", format!("Bearer {}", owner_token))
        .json(&json!({ "borrower_name": "Ana", "loan_date": "2024-03-01" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let loan: Value = response.json().await.expect("Failed to parse response");
    let loan_id = loan["id"].as_i64().expect("No loan id");
    assert!(loan["actual_return_date"].is_null());

    // Non-owner return attempt must fail Forbidden, not NotFound
    let response = client
        .post(format!("{}/loans/{}/return", BASE_URL, loan_id))
        .header("Authorization", format!("Bearer {}", visitor_token))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 403);

    // Owner return sets today's date
    let response = client
        .post(format!("{}/loans/{}/return", BASE_URL, loan_id))
        .header("Authorization", format!("Bearer {}", owner_token))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let returned: Value = response.json().await.expect("Failed to parse response");
    assert!(returned["actual_return_date"].is_string());

    // Returning twice is a conflict
    let response = client
        .post(format!("{}/loans/{}/return", BASE_URL, loan_id))
        .header("Authorization", format!("Bearer {}", owner_token))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);
}

#[tokio::test]
#[ignore]
async fn test_private_catalog_is_forbidden() {
    let client = Client::new();
    let (owner_token, owner_name, _) = register_user(&client, "private").await;
    let (viewer_token, _, _) = register_user(&client, "viewer").await;
    create_book(&client, &owner_token, "Secret Diary", "Anonymous").await;

    // Catalogs start private; a query string must not change the outcome
    for url in [
        format!("{}/catalogs/{}/books", BASE_URL, owner_name),
        format!("{}/catalogs/{}/books?query=secret", BASE_URL, owner_name),
    ] {
        let response = client
            .get(url)
            .header("Authorization", format!("Bearer {}", viewer_token))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), 403);
    }

    // Owner toggles visibility; the viewer can now browse
    let response = client
        .post(format!("{}/account/visibility", BASE_URL))
        .header("Authorization", format!("Bearer {}", owner_token))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let response = client
        .get(format!("{}/catalogs/{}/books", BASE_URL, owner_name))
        .header("Authorization", format!("Bearer {}", viewer_token))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
}

#[tokio::test]
#[ignore]
async fn test_admin_toggles_catalog_visibility() {
    let client = Client::new();
    let admin = admin_token(&client).await;
    let (_, owner_name, owner_id) = register_user(&client, "toggled").await;
    let (viewer_token, _, _) = register_user(&client, "onlooker").await;

    // Non-admins may not use the admin toggle
    let response = client
        .post(format!("{}/users/{}/visibility", BASE_URL, owner_id))
        .header("Authorization", format!("Bearer {}", viewer_token))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 403);

    // Admin flips the flag from false to true
    let response = client
        .post(format!("{}/users/{}/visibility", BASE_URL, owner_id))
        .header("Authorization", format!("Bearer {}", admin))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let user: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(user["catalog_public"], true);

    // Any viewer may now browse
    let response = client
        .get(format!("{}/catalogs/{}/books", BASE_URL, owner_name))
        .header("Authorization", format!("Bearer {}", viewer_token))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
}

#[tokio::test]
#[ignore]
async fn test_book_mutation_is_owner_only() {
    let client = Client::new();
    let (owner_token, _, _) = register_user(&client, "author").await;
    let (other_token, _, _) = register_user(&client, "intruder").await;
    let book_id = create_book(&client, &owner_token, "My Book", "Me").await;

    let response = client
        .put(format!("{}/books/{}", BASE_URL, book_id))
        .header("Authorization", format!("Bearer {}", other_token))
        .json(&json!({ "title": "Hijacked" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 403);

    let response = client
        .delete(format!("{}/books/{}", BASE_URL, book_id))
        .header("Authorization", format!("Bearer {}", other_token))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 403);

    // Owner deletion cascades review and loans
    let response = client
        .delete(format!("{}/books/{}", BASE_URL, book_id))
        .header("Authorization", format!("Bearer {}", owner_token))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);

    let response = client
        .get(format!("{}/books/{}", BASE_URL, book_id))
        .header("Authorization", format!("Bearer {}", owner_token))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_wishlist_ordering_and_removal_guard() {
    let client = Client::new();
    let (token, _, _) = register_user(&client, "wisher").await;
    let (other_token, _, _) = register_user(&client, "meddler").await;

    for (title, priority) in [("Low", 1), ("High", 3), ("Medium", 2)] {
        let response = client
            .post(format!("{}/wishlist", BASE_URL))
            .header("Authorization", format!("Bearer {}", token))
            .json(&json!({ "title": title, "author": "Someone", "priority": priority }))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), 201);
    }

    let response = client
        .get(format!("{}/wishlist", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    let items: Value = response.json().await.expect("Failed to parse response");
    let items = items.as_array().expect("Expected array");
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["title"], "High");
    assert_eq!(items[1]["title"], "Medium");
    assert_eq!(items[2]["title"], "Low");

    // Removal is guarded by ownership
    let item_id = items[0]["id"].as_i64().expect("No item id");
    let response = client
        .delete(format!("{}/wishlist/{}", BASE_URL, item_id))
        .header("Authorization", format!("Bearer {}", other_token))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 403);

    let response = client
        .delete(format!("{}/wishlist/{}", BASE_URL, item_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_contact_request_rejected_for_own_book() {
    let client = Client::new();
    let (owner_token, _, _) = register_user(&client, "contact_owner").await;
    let (visitor_token, _, _) = register_user(&client, "contact_visitor").await;
    let book_id = create_book(&client, &owner_token, "For Trade", "Swapper").await;

    // Owners cannot contact themselves
    let response = client
        .post(format!("{}/books/{}/contact", BASE_URL, book_id))
        .header("Authorization", format!("Bearer {}", owner_token))
        .json(&json!({ "message": "Hello me" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 403);

    // Make the catalog public so the visitor can see the book
    let response = client
        .post(format!("{}/account/visibility", BASE_URL))
        .header("Authorization", format!("Bearer {}", owner_token))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let response = client
        .post(format!("{}/books/{}/contact", BASE_URL, book_id))
        .header("Authorization", format!("Bearer {}", visitor_token))
        .json(&json!({ "message": "Is this still available?" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let request: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(request["status"], "pending");
    assert_eq!(request["book_id"], book_id);

    // It shows up in the owner's received list
    let response = client
        .get(format!("{}/contacts/received", BASE_URL))
        .header("Authorization", format!("Bearer {}", owner_token))
        .send()
        .await
        .expect("Failed to send request");

    let received: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(received.as_array().expect("Expected array").len(), 1);
}

#[tokio::test]
#[ignore]
async fn test_public_owners_listing() {
    let client = Client::new();
    let (public_token, public_name, _) = register_user(&client, "pub_owner").await;
    let (_, private_name, _) = register_user(&client, "priv_owner").await;
    let (viewer_token, _, _) = register_user(&client, "browser").await;

    create_book(&client, &public_token, "Shared One", "Author").await;
    create_book(&client, &public_token, "Shared Two", "Author").await;

    let response = client
        .post(format!("{}/account/visibility", BASE_URL))
        .header("Authorization", format!("Bearer {}", public_token))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let response = client
        .get(format!("{}/catalogs/public", BASE_URL))
        .header("Authorization", format!("Bearer {}", viewer_token))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let owners: Value = response.json().await.expect("Failed to parse response");
    let owners = owners.as_array().expect("Expected array");

    // The public librarian appears, annotated with their book count
    let listed = owners
        .iter()
        .find(|o| o["username"] == public_name.as_str())
        .expect("Public owner missing from listing");
    assert_eq!(listed["book_count"], 2);

    // Private catalogs stay out of the listing
    assert!(owners.iter().all(|o| o["username"] != private_name.as_str()));

    // The requester never sees their own catalog in the listing
    let response = client
        .get(format!("{}/catalogs/public", BASE_URL))
        .header("Authorization", format!("Bearer {}", public_token))
        .send()
        .await
        .expect("Failed to send request");

    let owners: Value = response.json().await.expect("Failed to parse response");
    assert!(owners
        .as_array()
        .expect("Expected array")
        .iter()
        .all(|o| o["username"] != public_name.as_str()));
}

#[tokio::test]
#[ignore]
async fn test_contacts_sent_listing() {
    let client = Client::new();
    let (owner_token, _, _) = register_user(&client, "sent_owner").await;
    let (visitor_token, _, _) = register_user(&client, "sent_visitor").await;
    let book_id = create_book(&client, &owner_token, "On Offer", "Dealer").await;

    let response = client
        .post(format!("{}/account/visibility", BASE_URL))
        .header("Authorization", format!("Bearer {}", owner_token))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let response = client
        .post(format!("{}/books/{}/contact", BASE_URL, book_id))
        .header("Authorization", format!("Bearer {}", visitor_token))
        .json(&json!({ "message": "Would you trade this?" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let sent: Value = client
        .get(format!("{}/contacts/sent", BASE_URL))
        .header("Authorization", format!("Bearer {}", visitor_token))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    let sent = sent.as_array().expect("Expected array");
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0]["book_id"], book_id);
    assert_eq!(sent[0]["status"], "pending");

    // The owner sent nothing
    let sent: Value = client
        .get(format!("{}/contacts/sent", BASE_URL))
        .header("Authorization", format!("Bearer {}", owner_token))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert!(sent.as_array().expect("Expected array").is_empty());
}

#[tokio::test]
#[ignore]
async fn test_admin_lists_users_with_book_counts() {
    let client = Client::new();
    let admin = admin_token(&client).await;
    let (token, username, _) = register_user(&client, "counted").await;
    create_book(&client, &token, "Only Book", "Author").await;

    // The listing is admin-only
    let response = client
        .get(format!("{}/users", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 403);

    let response = client
        .get(format!("{}/users", BASE_URL))
        .header("Authorization", format!("Bearer {}", admin))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let users: Value = response.json().await.expect("Failed to parse response");
    let listed = users
        .as_array()
        .expect("Expected array")
        .iter()
        .find(|u| u["username"] == username.as_str())
        .cloned()
        .expect("Registered user missing from listing");
    assert_eq!(listed["book_count"], 1);
    assert_eq!(listed["role"], "librarian");
}

#[tokio::test]
#[ignore]
async fn test_dashboard_counts() {
    let client = Client::new();
    let (token, _, _) = register_user(&client, "dash").await;

    create_book(&client, &token, "Book A", "Author A").await;
    create_book(&client, &token, "Book B", "Author B").await;

    let response = client
        .post(format!("{}/wishlist", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "title": "Wanted", "author": "Somebody" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .get(format!("{}/dashboard", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["total_books"], 2);
    assert_eq!(body["wishlist_count"], 1);
    assert_eq!(body["recent_books"].as_array().expect("Expected array").len(), 2);
}

#[tokio::test]
#[ignore]
async fn test_unauthorized_access() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}
