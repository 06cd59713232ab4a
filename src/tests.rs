//! Integration tests for the portal backend.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde_json::{json, Value};
use tempfile::TempDir;

use crate::config::Config;
use crate::db::{init_database, PreferenceStore};
use crate::portal::SessionStore;
use crate::{create_router, AppState};

/// Test fixture for integration tests.
struct TestFixture {
    client: Client,
    base_url: String,
    _temp_dir: TempDir,
}

impl TestFixture {
    async fn new() -> Self {
        Self::with_delays(Duration::ZERO, Duration::ZERO).await
    }

    async fn with_delays(login_delay: Duration, submit_delay: Duration) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.sqlite");

        let pool = init_database(&db_path).await.expect("Failed to init DB");

        let config = Config {
            db_path,
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            log_level: "warn".to_string(),
            login_delay,
            submit_delay,
            session_ttl: Duration::ZERO,
        };

        let state = AppState {
            sessions: Arc::new(SessionStore::new()),
            preferences: Arc::new(PreferenceStore::new(pool)),
            config: Arc::new(config),
        };

        let app = create_router(state);

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get addr");
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait for server to start
        tokio::time::sleep(Duration::from_millis(100)).await;

        TestFixture {
            client: Client::new(),
            base_url,
            _temp_dir: temp_dir,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get(&self, path: &str) -> (u16, Value) {
        let resp = self.client.get(self.url(path)).send().await.unwrap();
        let status = resp.status().as_u16();
        (status, resp.json().await.unwrap())
    }

    async fn post(&self, path: &str, body: Value) -> (u16, Value) {
        let resp = self
            .client
            .post(self.url(path))
            .json(&body)
            .send()
            .await
            .unwrap();
        let status = resp.status().as_u16();
        (status, resp.json().await.unwrap())
    }

    async fn put(&self, path: &str, body: Value) -> (u16, Value) {
        let resp = self
            .client
            .put(self.url(path))
            .json(&body)
            .send()
            .await
            .unwrap();
        let status = resp.status().as_u16();
        (status, resp.json().await.unwrap())
    }

    async fn delete(&self, path: &str) -> (u16, Value) {
        let resp = self.client.delete(self.url(path)).send().await.unwrap();
        let status = resp.status().as_u16();
        (status, resp.json().await.unwrap())
    }

    async fn start_session(&self, client_id: Option<&str>) -> String {
        let (status, body) = self
            .post("/api/sessions", json!({ "clientId": client_id }))
            .await;
        assert_eq!(status, 200);
        body["data"]["id"].as_str().unwrap().to_string()
    }

    /// Start a session and walk a citizen to the departments step.
    async fn citizen_at_departments(&self, name: &str) -> String {
        let id = self.start_session(None).await;
        let (status, _) = self
            .post(
                &format!("/api/sessions/{}/login/citizen", id),
                json!({ "mobile": "9876543210", "name": name }),
            )
            .await;
        assert_eq!(status, 200);
        self.put(
            &format!("/api/sessions/{}/location/state", id),
            json!({ "stateId": "MH" }),
        )
        .await;
        self.put(
            &format!("/api/sessions/{}/location/district", id),
            json!({ "districtId": "PU" }),
        )
        .await;
        let (status, body) = self
            .post(&format!("/api/sessions/{}/location/continue", id), json!({}))
            .await;
        assert_eq!(status, 200);
        assert_eq!(body["data"]["step"], "departments");
        id
    }
}

fn is_ticket_id(id: &str) -> bool {
    let bytes = id.as_bytes();
    bytes.len() == 10
        && bytes[..3].iter().all(u8::is_ascii_uppercase)
        && bytes[3] == b'-'
        && bytes[4..].iter().all(u8::is_ascii_digit)
}

#[tokio::test]
async fn test_health_check() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn test_list_locales() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture.get("/api/locales").await;
    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    let codes: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["en", "hi", "ta", "te", "bn"]);
}

#[tokio::test]
async fn test_translations_fall_back_to_english() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture.get("/api/translations/bn").await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["auth.welcome"], "স্বাগতম");
    assert_eq!(body["data"]["auth.password"], "Password");
    for (_, value) in body["data"].as_object().unwrap() {
        assert!(!value.as_str().unwrap().is_empty());
    }

    let (status, body) = fixture.get("/api/translations/fr").await;
    assert_eq!(status, 400);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_translation_coverage() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture.get("/api/translations/coverage").await;
    assert_eq!(status, 200);
    let report = body["data"].as_array().unwrap();
    assert_eq!(report.len(), 5);
    assert_eq!(report[0]["locale"], "en");
    assert_eq!(report[0]["missing"].as_array().unwrap().len(), 0);
    assert_eq!(report[3]["locale"], "te");
    assert_eq!(report[3]["translated"], 14);
}

#[tokio::test]
async fn test_location_catalogue() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture.get("/api/locations/states").await;
    assert_eq!(status, 200);
    assert_eq!(body["data"].as_array().unwrap().len(), 5);

    let (status, body) = fixture.get("/api/locations/states/TN/districts").await;
    assert_eq!(status, 200);
    assert_eq!(body["data"][0]["name"], "Chennai");

    let (status, _) = fixture.get("/api/locations/states/ZZ/districts").await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn test_departments_localized() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture.get("/api/departments?locale=ta").await;
    assert_eq!(status, 200);
    assert_eq!(body["data"][0]["id"], "electricity");
    assert_eq!(body["data"][0]["name"], "மின்சாரம்");

    let (status, body) = fixture.get("/api/departments").await;
    assert_eq!(status, 200);
    assert_eq!(body["data"][1]["name"], "Water Supply");

    let (status, _) = fixture.get("/api/departments?locale=xx").await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn test_new_session_starts_at_login() {
    let fixture = TestFixture::new().await;
    let id = fixture.start_session(None).await;

    let (status, body) = fixture.get(&format!("/api/sessions/{}", id)).await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["step"], "login");
    assert_eq!(body["data"]["locale"], "en");
    assert_eq!(body["data"]["page"]["content"]["kind"], "login");
    assert!(body["data"]["page"].get("header").is_none());
}

#[tokio::test]
async fn test_citizen_end_to_end() {
    let fixture = TestFixture::new().await;
    let id = fixture.citizen_at_departments("Asha").await;

    let (_, body) = fixture.get(&format!("/api/sessions/{}", id)).await;
    assert_eq!(body["data"]["user"]["type"], "citizen");
    assert_eq!(body["data"]["user"]["name"], "Asha");
    assert_eq!(body["data"]["location"]["state"], "Maharashtra");
    assert_eq!(body["data"]["location"]["district"], "Pune");
    assert_eq!(
        body["data"]["page"]["content"]["locationLine"],
        "Location: Pune, Maharashtra"
    );

    let (status, body) = fixture
        .post(
            &format!("/api/sessions/{}/departments/electricity", id),
            json!({}),
        )
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["step"], "complaint");

    let (status, _) = fixture
        .put(
            &format!("/api/sessions/{}/complaint", id),
            json!({
                "title": "Broken streetlight",
                "description": "Pole near market is dark"
            }),
        )
        .await;
    assert_eq!(status, 200);

    let (status, body) = fixture
        .post(&format!("/api/sessions/{}/complaint/submit", id), json!({}))
        .await;
    assert_eq!(status, 200);

    let ticket_id = body["data"]["ticket"]["id"].as_str().unwrap();
    assert!(ticket_id.starts_with("ELE-"));
    assert!(is_ticket_id(ticket_id));
    assert_eq!(body["data"]["ticket"]["department"], "Electricity");
    assert_eq!(body["data"]["ticket"]["status"], "submitted");
    assert_eq!(body["data"]["session"]["step"], "departments");
    assert!(body["data"]["session"].get("selectedDepartment").is_none());
    assert_eq!(
        body["notification"]["title"],
        "Complaint Submitted Successfully"
    );
    assert_eq!(
        body["notification"]["description"],
        format!("Your ticket ID is {}", ticket_id)
    );

    // The form was cleared for the next complaint.
    fixture
        .post(
            &format!("/api/sessions/{}/departments/electricity", id),
            json!({}),
        )
        .await;
    let (_, body) = fixture.get(&format!("/api/sessions/{}", id)).await;
    assert_eq!(body["data"]["page"]["content"]["title"]["value"], "");
}

#[tokio::test]
async fn test_complaint_requires_title() {
    let fixture = TestFixture::new().await;
    let id = fixture.citizen_at_departments("Asha").await;
    fixture
        .post(
            &format!("/api/sessions/{}/departments/water_supply", id),
            json!({}),
        )
        .await;
    fixture
        .put(
            &format!("/api/sessions/{}/complaint", id),
            json!({ "title": "   ", "description": "No water since Monday" }),
        )
        .await;

    let (status, body) = fixture
        .post(&format!("/api/sessions/{}/complaint/submit", id), json!({}))
        .await;
    assert_eq!(status, 400);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["notification"]["variant"], "destructive");
    assert_eq!(body["notification"]["title"], "Please fill required fields");

    // Nothing moved and the fields are intact.
    let (_, body) = fixture.get(&format!("/api/sessions/{}", id)).await;
    assert_eq!(body["data"]["step"], "complaint");
    assert_eq!(
        body["data"]["page"]["content"]["details"]["value"],
        "No water since Monday"
    );
}

#[tokio::test]
async fn test_back_navigation_clears_department() {
    let fixture = TestFixture::new().await;
    let id = fixture.citizen_at_departments("Ravi").await;
    fixture
        .post(&format!("/api/sessions/{}/departments/roads_transport", id), json!({}))
        .await;

    let (status, body) = fixture
        .post(&format!("/api/sessions/{}/complaint/back", id), json!({}))
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["step"], "departments");
    assert!(body["data"].get("selectedDepartment").is_none());

    let (status, body) = fixture
        .post(&format!("/api/sessions/{}/complaint/back", id), json!({}))
        .await;
    assert_eq!(status, 409);
    assert_eq!(body["error"]["code"], "INVALID_TRANSITION");
}

#[tokio::test]
async fn test_unknown_department_renders_empty_view() {
    let fixture = TestFixture::new().await;
    let id = fixture.citizen_at_departments("Asha").await;

    let (status, body) = fixture
        .post(&format!("/api/sessions/{}/departments/parks", id), json!({}))
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["step"], "complaint");
    assert_eq!(body["data"]["page"]["content"]["kind"], "empty");

    let (status, _) = fixture
        .post(&format!("/api/sessions/{}/complaint/submit", id), json!({}))
        .await;
    assert_eq!(status, 409);
}

#[tokio::test]
async fn test_attachments() {
    let fixture = TestFixture::new().await;
    let id = fixture.citizen_at_departments("Asha").await;
    fixture
        .post(
            &format!("/api/sessions/{}/departments/sewage_drainage", id),
            json!({}),
        )
        .await;

    let path = format!("/api/sessions/{}/complaint/attachments", id);
    let (status, _) = fixture
        .post(
            &path,
            json!({ "name": "drain.jpg", "size": 524288, "contentType": "image/jpeg" }),
        )
        .await;
    assert_eq!(status, 200);
    let (status, body) = fixture
        .post(&path, json!({ "name": "survey.pdf", "size": 20971520 }))
        .await;
    assert_eq!(status, 200);
    let files = &body["data"]["page"]["content"]["attachments"]["files"];
    assert_eq!(files.as_array().unwrap().len(), 2);
    assert_eq!(files[0]["sizeLabel"], "0.50 MB");

    let (status, body) = fixture
        .post(
            &path,
            json!({ "name": "setup.exe", "size": 1024, "contentType": "application/x-msdownload" }),
        )
        .await;
    assert_eq!(status, 400);
    assert_eq!(
        body["notification"]["description"],
        "Unsupported file type: setup.exe"
    );

    let (status, body) = fixture.delete(&format!("{}/0", path)).await;
    assert_eq!(status, 200);
    let files = &body["data"]["page"]["content"]["attachments"]["files"];
    assert_eq!(files[0]["name"], "survey.pdf");

    let (status, _) = fixture.delete(&format!("{}/5", path)).await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn test_state_change_clears_district() {
    let fixture = TestFixture::new().await;
    let id = fixture.start_session(None).await;
    fixture
        .post(
            &format!("/api/sessions/{}/login/citizen", id),
            json!({ "mobile": "9000000000", "name": "Meena" }),
        )
        .await;

    let (status, body) = fixture
        .post(&format!("/api/sessions/{}/location/continue", id), json!({}))
        .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let state_path = format!("/api/sessions/{}/location/state", id);
    let district_path = format!("/api/sessions/{}/location/district", id);

    let (_, body) = fixture.put(&state_path, json!({ "stateId": "TN" })).await;
    assert_eq!(body["data"]["page"]["content"]["canContinue"], false);
    assert_eq!(body["data"]["page"]["content"]["districtEnabled"], true);

    let (_, body) = fixture
        .put(&district_path, json!({ "districtId": "CH" }))
        .await;
    assert_eq!(body["data"]["page"]["content"]["canContinue"], true);

    let (_, body) = fixture.put(&state_path, json!({ "stateId": "KA" })).await;
    let content = &body["data"]["page"]["content"];
    assert!(content.get("selectedDistrict").is_none());
    assert_eq!(content["canContinue"], false);
    assert_eq!(content["districts"][0]["name"], "Bengaluru");

    let (status, _) = fixture
        .put(&district_path, json!({ "districtId": "CH" }))
        .await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn test_citizen_login_validation() {
    let fixture = TestFixture::new().await;
    let id = fixture.start_session(None).await;

    let (status, body) = fixture
        .post(
            &format!("/api/sessions/{}/login/citizen", id),
            json!({ "mobile": "", "name": "Asha" }),
        )
        .await;
    assert_eq!(status, 400);
    assert_eq!(body["notification"]["title"], "Please fill required fields");

    // Sign-up additionally needs an email.
    let (_, body) = fixture
        .post(&format!("/api/sessions/{}/login/toggle", id), json!({}))
        .await;
    assert_eq!(
        body["data"]["page"]["content"]["cardTitle"],
        "Create Account"
    );
    let (status, _) = fixture
        .post(
            &format!("/api/sessions/{}/login/citizen", id),
            json!({ "mobile": "9876543210", "name": "Asha" }),
        )
        .await;
    assert_eq!(status, 400);

    let (status, body) = fixture
        .post(
            &format!("/api/sessions/{}/login/citizen", id),
            json!({ "mobile": "9876543210", "name": "Asha", "email": "asha@example.in" }),
        )
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["step"], "location");
}

#[tokio::test]
async fn test_staff_dashboard() {
    let fixture = TestFixture::new().await;
    let id = fixture.start_session(None).await;

    let (status, body) = fixture
        .post(
            &format!("/api/sessions/{}/login/staff", id),
            json!({ "employeeId": "EMP-001" }),
        )
        .await;
    assert_eq!(status, 400);
    assert_eq!(body["notification"]["title"], "Please fill all fields");

    let (status, body) = fixture
        .post(
            &format!("/api/sessions/{}/login/staff", id),
            json!({ "employeeId": "EMP-001", "password": "secret" }),
        )
        .await;
    assert_eq!(status, 200);
    let data = &body["data"];
    assert_eq!(data["step"], "staff_dashboard");
    assert_eq!(data["user"]["type"], "staff");
    assert_eq!(data["user"]["department"], "Electricity");
    assert_eq!(data["page"]["header"]["user"]["roleLabel"], "Staff");

    let content = &data["page"]["content"];
    assert_eq!(content["kind"], "staff_dashboard");
    assert_eq!(
        content["welcome"],
        "Welcome back, Staff Member • Electricity Department"
    );
    assert_eq!(content["stats"][1]["value"], 2);
    assert_eq!(content["stats"][2]["value"], 1);
    assert_eq!(content["complaints"].as_array().unwrap().len(), 3);

    // Staff stay parked on the dashboard.
    let (status, _) = fixture
        .post(
            &format!("/api/sessions/{}/departments/electricity", id),
            json!({}),
        )
        .await;
    assert_eq!(status, 409);
}

#[tokio::test]
async fn test_locale_switch_and_persistence() {
    let fixture = TestFixture::new().await;
    let id = fixture.start_session(Some("browser-42")).await;
    let locale_path = format!("/api/sessions/{}/locale", id);

    let (status, body) = fixture.put(&locale_path, json!({ "locale": "hi" })).await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["locale"], "hi");
    assert_eq!(
        body["data"]["page"]["content"]["cardTitle"],
        "स्वागत है"
    );

    // Unsupported codes are ignored.
    let (status, body) = fixture.put(&locale_path, json!({ "locale": "fr" })).await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["locale"], "hi");

    // A reload (new session, same client) restores the preference.
    fixture.delete(&format!("/api/sessions/{}", id)).await;
    let (status, _) = fixture.get(&format!("/api/sessions/{}", id)).await;
    assert_eq!(status, 404);

    let reloaded = fixture.start_session(Some("browser-42")).await;
    let (_, body) = fixture.get(&format!("/api/sessions/{}", reloaded)).await;
    assert_eq!(body["data"]["locale"], "hi");

    let other = fixture.start_session(Some("browser-7")).await;
    let (_, body) = fixture.get(&format!("/api/sessions/{}", other)).await;
    assert_eq!(body["data"]["locale"], "en");
}

#[tokio::test]
async fn test_invalid_transitions() {
    let fixture = TestFixture::new().await;
    let id = fixture.start_session(None).await;

    let (status, body) = fixture
        .put(
            &format!("/api/sessions/{}/location/state", id),
            json!({ "stateId": "MH" }),
        )
        .await;
    assert_eq!(status, 409);
    assert_eq!(body["error"]["code"], "INVALID_TRANSITION");

    let (status, _) = fixture
        .put(
            &format!("/api/sessions/{}/complaint", id),
            json!({ "title": "x" }),
        )
        .await;
    assert_eq!(status, 409);

    let (_, body) = fixture.get(&format!("/api/sessions/{}", id)).await;
    assert_eq!(body["data"]["step"], "login");
}

#[tokio::test]
async fn test_unknown_session() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture
        .get("/api/sessions/00000000-0000-0000-0000-000000000000")
        .await;
    assert_eq!(status, 404);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_concurrent_submission_is_rejected() {
    let fixture = TestFixture::with_delays(Duration::ZERO, Duration::from_millis(400)).await;
    let id = fixture.citizen_at_departments("Asha").await;
    fixture
        .post(
            &format!("/api/sessions/{}/departments/electricity", id),
            json!({}),
        )
        .await;
    fixture
        .put(
            &format!("/api/sessions/{}/complaint", id),
            json!({ "title": "Flicker", "description": "Light flickers all night" }),
        )
        .await;

    let submit_url = fixture.url(&format!("/api/sessions/{}/complaint/submit", id));
    let client = fixture.client.clone();
    let first = tokio::spawn(async move { client.post(submit_url).send().await.unwrap() });

    tokio::time::sleep(Duration::from_millis(100)).await;

    let (_, body) = fixture.get(&format!("/api/sessions/{}", id)).await;
    assert_eq!(body["data"]["busy"], true);
    assert_eq!(
        body["data"]["page"]["content"]["submitLabel"],
        "Submitting..."
    );

    let (status, body) = fixture
        .post(&format!("/api/sessions/{}/complaint/submit", id), json!({}))
        .await;
    assert_eq!(status, 409);
    assert_eq!(body["error"]["code"], "BUSY");

    let first = first.await.unwrap();
    assert_eq!(first.status(), 200);
    let body: Value = first.json().await.unwrap();
    assert_eq!(body["data"]["session"]["busy"], false);
}

#[tokio::test]
async fn test_abandoned_submission_still_completes() {
    let fixture = TestFixture::with_delays(Duration::ZERO, Duration::from_millis(500)).await;
    let id = fixture.citizen_at_departments("Asha").await;
    fixture
        .post(
            &format!("/api/sessions/{}/departments/water_supply", id),
            json!({}),
        )
        .await;
    fixture
        .put(
            &format!("/api/sessions/{}/complaint", id),
            json!({ "title": "Low pressure", "description": "Taps run dry every evening" }),
        )
        .await;

    // The client gives up long before the simulated latency ends.
    let impatient = Client::builder()
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();
    let result = impatient
        .post(fixture.url(&format!("/api/sessions/{}/complaint/submit", id)))
        .send()
        .await;
    assert!(result.is_err());

    tokio::time::sleep(Duration::from_millis(800)).await;

    let (_, body) = fixture.get(&format!("/api/sessions/{}", id)).await;
    assert_eq!(body["data"]["busy"], false);
    assert_eq!(body["data"]["step"], "departments");

    // The session is fully usable again.
    let (status, _) = fixture
        .post(
            &format!("/api/sessions/{}/departments/water_supply", id),
            json!({}),
        )
        .await;
    assert_eq!(status, 200);
    let (status, body) = fixture
        .post(&format!("/api/sessions/{}/complaint/back", id), json!({}))
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["step"], "departments");
}

#[tokio::test]
async fn test_abandoned_login_still_completes() {
    let fixture = TestFixture::with_delays(Duration::from_millis(500), Duration::ZERO).await;
    let id = fixture.start_session(None).await;

    let impatient = Client::builder()
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();
    let result = impatient
        .post(fixture.url(&format!("/api/sessions/{}/login/staff", id)))
        .json(&json!({ "employeeId": "EMP-001", "password": "secret" }))
        .send()
        .await;
    assert!(result.is_err());

    tokio::time::sleep(Duration::from_millis(800)).await;

    let (_, body) = fixture.get(&format!("/api/sessions/{}", id)).await;
    assert_eq!(body["data"]["busy"], false);
    assert_eq!(body["data"]["step"], "staff_dashboard");
}

#[tokio::test]
async fn test_ticket_uses_locale_active_at_issue() {
    let fixture = TestFixture::with_delays(Duration::ZERO, Duration::from_millis(400)).await;
    let id = fixture.citizen_at_departments("Asha").await;
    fixture
        .post(
            &format!("/api/sessions/{}/departments/electricity", id),
            json!({}),
        )
        .await;
    fixture
        .put(
            &format!("/api/sessions/{}/complaint", id),
            json!({ "title": "Sparking wire", "description": "Wire sparks near the school gate" }),
        )
        .await;

    let submit_url = fixture.url(&format!("/api/sessions/{}/complaint/submit", id));
    let client = fixture.client.clone();
    let pending = tokio::spawn(async move { client.post(submit_url).send().await.unwrap() });

    tokio::time::sleep(Duration::from_millis(100)).await;
    let (status, _) = fixture
        .put(&format!("/api/sessions/{}/locale", id), json!({ "locale": "hi" }))
        .await;
    assert_eq!(status, 200);

    let response = pending.await.unwrap();
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["ticket"]["department"], "बिजली");
    assert_eq!(
        body["notification"]["title"],
        "शिकायत सफलतापूर्वक दर्ज की गई"
    );
}
