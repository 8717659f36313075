use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use dealership_api::{app, AppState};
use dealership_contract::ContractTerms;
use dealership_store::{ContractFileManager, DealershipFileManager};
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;
use tower::ServiceExt;

const INVENTORY: &str = "\
D & B Used Cars|111 Old Benbrook Rd|817-555-5555
10112|1993|Ford|Explorer|SUV|Red|525123|995.00
44901|2012|Honda|Civic|SUV|Gray|103221|8000.00
66523|2018|Toyota|Camry|Sedan|White|32000|20000.00
";

struct TestApp {
    dir: TempDir,
    router: Router,
}

impl TestApp {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let inventory = dir.path().join("inventory.csv");
        fs::write(&inventory, INVENTORY).unwrap();

        let dealership_files = DealershipFileManager::new(&inventory);
        let dealership = dealership_files.load_dealership().unwrap();
        let contract_files = ContractFileManager::new(dir.path().join("contracts.csv"));

        let state = AppState::new(dealership, dealership_files, contract_files, ContractTerms::default());
        Self { dir, router: app(state) }
    }

    async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
        (status, value)
    }

    fn read(&self, name: &str) -> String {
        fs::read_to_string(self.dir.path().join(name)).unwrap_or_default()
    }
}

#[tokio::test]
async fn test_dealership_summary() {
    let app = TestApp::new();
    let (status, body) = app.send("GET", "/v1/dealership", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "D & B Used Cars");
    assert_eq!(body["vehicle_count"], 3);
}

#[tokio::test]
async fn test_vehicle_search() {
    let app = TestApp::new();

    let (status, body) = app.send("GET", "/v1/vehicles?vehicle_type=suv&max_price=5000", None).await;
    assert_eq!(status, StatusCode::OK);
    let vehicles = body.as_array().unwrap();
    assert_eq!(vehicles.len(), 1);
    assert_eq!(vehicles[0]["vin"], 10112);

    let (status, body) = app.send("GET", "/v1/vehicles/66523", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["model"], "Camry");

    let (status, _) = app.send("GET", "/v1/vehicles/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_add_and_remove_vehicle_persists() {
    let app = TestApp::new();
    let vehicle = json!({
        "vin": 77001,
        "year": 2021,
        "make": "Kia",
        "model": "Soul",
        "vehicle_type": "Hatchback",
        "color": "Blue",
        "odometer": 12000,
        "price": 15995.0
    });

    let (status, _) = app.send("POST", "/v1/vehicles", Some(vehicle.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(app.read("inventory.csv").contains("77001|2021|Kia|Soul|Hatchback|Blue|12000|15995.0"));

    let (status, _) = app.send("POST", "/v1/vehicles", Some(vehicle)).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = app.send("DELETE", "/v1/vehicles/77001", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["make"], "Kia");
    assert!(!app.read("inventory.csv").contains("77001"));

    let (status, _) = app.send("DELETE", "/v1/vehicles/77001", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_vehicle_with_separator_rejected() {
    let app = TestApp::new();
    let vehicle = json!({
        "vin": 77002,
        "year": 2021,
        "make": "Kia|Motors",
        "model": "Soul",
        "vehicle_type": "Hatchback",
        "color": "Blue",
        "odometer": 12000,
        "price": 15995.0
    });

    let (status, body) = app.send("POST", "/v1/vehicles", Some(vehicle)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("make"));
}

#[tokio::test]
async fn test_quote_does_not_persist() {
    let app = TestApp::new();
    let request = json!({
        "kind": "SALE",
        "vin": 44901,
        "customer_name": "Dana Wyatt",
        "customer_email": "dana@texas.com",
        "date": "20210928",
        "financed": true
    });

    let (status, body) = app.send("POST", "/v1/contracts/quote", Some(request)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pricing"]["kind"], "SALE");
    assert_eq!(body["pricing"]["sales_tax_amount"], 400.0);
    assert_eq!(body["pricing"]["processing_fee"], 295.0);
    assert_eq!(body["pricing"]["total_price"], 8795.0);
    assert_eq!(body["pricing"]["term_months"], 24);
    let payment = body["pricing"]["monthly_payment"].as_f64().unwrap();
    assert!((payment - 386.834).abs() < 0.001);

    assert_eq!(app.read("contracts.csv"), "");
    let (_, summary) = app.send("GET", "/v1/dealership", None).await;
    assert_eq!(summary["vehicle_count"], 3);
}

#[tokio::test]
async fn test_signing_lease_moves_vehicle_off_lot() {
    let app = TestApp::new();
    let request = json!({
        "kind": "LEASE",
        "vin": 66523,
        "customer_name": "Zachary Westly",
        "customer_email": "zach@texas.com",
        "date": "20210929"
    });

    let (status, body) = app.send("POST", "/v1/contracts", Some(request)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["pricing"]["expected_ending_value"], 10000.0);
    let total = body["pricing"]["total_price"].as_f64().unwrap();
    assert!((total - 11400.0).abs() < 1e-9);

    let record = body["record"].as_str().unwrap();
    assert!(record.starts_with("LEASE|20210929|Zachary Westly|zach@texas.com|66523|2018|Toyota|Camry|"));
    assert_eq!(app.read("contracts.csv"), format!("{}\n", record));
    assert!(!app.read("inventory.csv").contains("66523"));

    let (status, _) = app.send("GET", "/v1/vehicles/66523", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = app.send("GET", "/v1/contracts", None).await;
    assert_eq!(status, StatusCode::OK);
    let contracts = body.as_array().unwrap();
    assert_eq!(contracts.len(), 1);
    assert_eq!(contracts[0]["contract"]["customer_email"], "zach@texas.com");
    assert_eq!(contracts[0]["record"], record);
}

#[tokio::test]
async fn test_cash_sale_defaults() {
    let app = TestApp::new();
    let request = json!({
        "kind": "SALE",
        "vin": 10112,
        "customer_name": "Dana Wyatt",
        "customer_email": "dana@texas.com"
    });

    let (status, body) = app.send("POST", "/v1/contracts", Some(request)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["pricing"]["financed"], false);
    assert_eq!(body["pricing"]["monthly_payment"], 0.0);
    assert_eq!(body["contract"]["date"].as_str().unwrap().len(), 8);
    assert!(body["record"].as_str().unwrap().ends_with("|NO|0.0"));
}

#[tokio::test]
async fn test_contract_validation() {
    let app = TestApp::new();

    let unfinanced_lease = json!({
        "kind": "LEASE",
        "vin": 66523,
        "customer_name": "Zachary Westly",
        "customer_email": "zach@texas.com",
        "financed": false
    });
    let (status, _) = app.send("POST", "/v1/contracts", Some(unfinanced_lease)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let blank_name = json!({
        "kind": "SALE",
        "vin": 66523,
        "customer_name": " ",
        "customer_email": "zach@texas.com"
    });
    let (status, _) = app.send("POST", "/v1/contracts", Some(blank_name)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let unknown_vehicle = json!({
        "kind": "SALE",
        "vin": 1,
        "customer_name": "Zachary Westly",
        "customer_email": "zach@texas.com"
    });
    let (status, _) = app.send("POST", "/v1/contracts", Some(unknown_vehicle)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    assert_eq!(app.read("contracts.csv"), "");
}

#[tokio::test]
async fn test_failed_inventory_save_keeps_vehicle_and_contracts() {
    let app = TestApp::new();
    let inventory = app.dir.path().join("inventory.csv");
    fs::remove_file(&inventory).unwrap();
    fs::create_dir(&inventory).unwrap();

    let request = json!({
        "kind": "LEASE",
        "vin": 66523,
        "customer_name": "Zachary Westly",
        "customer_email": "zach@texas.com",
        "date": "20210929"
    });

    let (status, _) = app.send("POST", "/v1/contracts", Some(request.clone())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, body) = app.send("GET", "/v1/vehicles/66523", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["model"], "Camry");
    assert_eq!(app.read("contracts.csv"), "");

    // Once the file is writable again the same request goes through
    fs::remove_dir(&inventory).unwrap();
    fs::write(&inventory, INVENTORY).unwrap();

    let (status, _) = app.send("POST", "/v1/contracts", Some(request)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(app.read("contracts.csv").lines().count(), 1);
    assert!(!app.read("inventory.csv").contains("66523"));
}

#[tokio::test]
async fn test_failed_contract_append_puts_vehicle_back() {
    let app = TestApp::new();
    fs::create_dir(app.dir.path().join("contracts.csv")).unwrap();

    let request = json!({
        "kind": "SALE",
        "vin": 44901,
        "customer_name": "Dana Wyatt",
        "customer_email": "dana@texas.com",
        "financed": true
    });

    let (status, _) = app.send("POST", "/v1/contracts", Some(request)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, _) = app.send("GET", "/v1/vehicles/44901", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(app.read("inventory.csv").contains("44901|2012|Honda|Civic"));
}
