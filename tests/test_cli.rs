use std::process::Command;

use mockito::Matcher;
use serde_json::{json, Value};

const BIN: &str = env!("CARGO_BIN_EXE_meal-finder");

fn lookup_body() -> String {
    json!({
        "meals": [{
            "idMeal": "52874",
            "strMeal": "Beef and Mustard Pie",
            "strMealThumb": "https://example.com/pie.jpg",
            "strCategory": "Beef",
            "strArea": "British",
            "strTags": "Meat,Pie",
            "strInstructions": "Preheat the oven.\r\nBrown the beef.",
            "strYoutube": "https://www.youtube.com/watch?v=nMyBC9staMU",
            "strIngredient1": "Beef",
            "strMeasure1": "1kg",
            "strIngredient2": "Mustard",
            "strMeasure2": "2 tbsp",
            "strIngredient3": "",
            "strMeasure3": ""
        }]
    })
    .to_string()
}

#[tokio::test]
async fn test_cli_prints_expanded_results() {
    let mut server = mockito::Server::new_async().await;
    let _filter = server
        .mock("GET", "/filter.php")
        .match_query(Matcher::UrlEncoded("i".into(), "beef".into()))
        .with_status(200)
        .with_body(r#"{"meals": [{"idMeal": "52874", "strMeal": "Beef and Mustard Pie", "strMealThumb": ""}]}"#)
        .create_async()
        .await;
    let _lookup = server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::UrlEncoded("i".into(), "52874".into()))
        .with_status(200)
        .with_body(lookup_body())
        .create_async()
        .await;

    let output = Command::new(BIN)
        .args(["Beef", "--mood", "comfort", "--expand-all", "--base-url", server.url().as_str()])
        .env("RUST_LOG", "error")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Recipes with beef; time: Any; mood: Comfort; diet: None"));
    assert!(stdout.contains("Found 1 recipe(s)"));
    assert!(stdout.contains("Beef and Mustard Pie [Beef / British] (~6 min)  #52874"));
    assert!(stdout.contains("    - 2 tbsp Mustard"));
    assert!(stdout.contains("    Brown the beef."));
    assert!(stdout.contains("video: https://www.youtube.com/watch?v=nMyBC9staMU"));
}

#[tokio::test]
async fn test_cli_json_output() {
    let mut server = mockito::Server::new_async().await;
    let _filter = server
        .mock("GET", "/filter.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"meals": [{"idMeal": "52874", "strMeal": "Beef and Mustard Pie", "strMealThumb": ""}]}"#)
        .create_async()
        .await;
    let _lookup = server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(lookup_body())
        .create_async()
        .await;

    let output = Command::new(BIN)
        .args(["beef", "--json", "--diet", "Gluten-Free", "--base-url", server.url().as_str()])
        .env("RUST_LOG", "error")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["criteria"]["diet"], "Gluten-Free");
    assert_eq!(report["criteria"]["time"], "Any");
    assert_eq!(report["results"][0]["id"], "52874");
    assert_eq!(report["results"][0]["ingredients"][1]["measure"], "2 tbsp");
    assert_eq!(report["results"][0]["tags"], json!(["Meat", "Pie"]));
}

#[tokio::test]
async fn test_cli_repeated_expand_keeps_card_open() {
    let mut server = mockito::Server::new_async().await;
    let _filter = server
        .mock("GET", "/filter.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"meals": [{"idMeal": "52874", "strMeal": "Beef and Mustard Pie", "strMealThumb": ""}]}"#)
        .create_async()
        .await;
    let _lookup = server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(lookup_body())
        .create_async()
        .await;

    let output = Command::new(BIN)
        .args([
            "beef",
            "--expand",
            "52874",
            "--expand",
            "52874",
            "--base-url",
            server.url().as_str(),
        ])
        .env("RUST_LOG", "error")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("  ingredients:"));
    assert!(stdout.contains("    - 1kg Beef"));
}

#[test]
fn test_cli_rejects_blank_ingredients() {
    let output = Command::new(BIN)
        .args([" , ", "--base-url", "http://127.0.0.1:9"])
        .env("RUST_LOG", "error")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!output.status.success());
    assert!(stdout.contains("Error: Please enter at least one ingredient."));
}

#[test]
fn test_cli_rejects_unknown_mood() {
    let output = Command::new(BIN)
        .args(["beef", "--mood", "grumpy"])
        .output()
        .expect("Failed to execute command");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("Unknown criterion: grumpy"));
}
