//! Test helpers: a fake WeCom robot on an ephemeral port plus a one-shot
//! request driver for the full router.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use api::{GITLAB_EVENT_HEADER, core::app_state::AppState, router};
use axum::{
    Json, Router,
    body::Body,
    extract::{Query, State},
    http::{Method, Request, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
    routing::post,
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use wecom_notifier::{Notifier, NotifierConfig};

/// Routing key used by every request in the suite.
pub const KEY: &str = "robot-key";

/// How the fake robot answers.
#[derive(Debug, Clone, Copy)]
pub enum RobotReply {
    Ok,
    Rejected { errcode: i64, errmsg: &'static str },
    Status(StatusCode),
}

/// One message received by the fake robot.
#[derive(Debug, Clone)]
pub struct Delivery {
    pub key: String,
    pub msgtype: String,
    pub content: String,
}

pub struct FakeRobot {
    pub url: String,
    received: Arc<Mutex<Vec<Delivery>>>,
}

impl FakeRobot {
    pub fn deliveries(&self) -> Vec<Delivery> {
        self.received.lock().unwrap().clone()
    }
}

#[derive(Clone)]
struct RobotState {
    received: Arc<Mutex<Vec<Delivery>>>,
    reply: RobotReply,
}

async fn robot_send(
    State(state): State<RobotState>,
    Query(query): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> Response {
    state.received.lock().unwrap().push(Delivery {
        key: query.get("key").cloned().unwrap_or_default(),
        msgtype: body["msgtype"].as_str().unwrap_or_default().to_string(),
        content: body["markdown"]["content"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
    });

    match state.reply {
        RobotReply::Ok => Json(json!({"errcode": 0, "errmsg": "ok"})).into_response(),
        RobotReply::Rejected { errcode, errmsg } => {
            Json(json!({"errcode": errcode, "errmsg": errmsg})).into_response()
        }
        RobotReply::Status(status) => (status, "robot unavailable").into_response(),
    }
}

/// Spawns a fake robot answering with `reply`.
pub async fn spawn_fake_robot(reply: RobotReply) -> FakeRobot {
    let received = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/cgi-bin/webhook/send", post(robot_send))
        .with_state(RobotState {
            received: received.clone(),
            reply,
        });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake robot");
    let addr = listener.local_addr().expect("fake robot addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake robot server");
    });

    FakeRobot {
        url: format!("http://{addr}/cgi-bin/webhook/send"),
        received,
    }
}

/// Full application router wired to a fresh fake robot.
pub async fn test_app(reply: RobotReply) -> (Router, FakeRobot) {
    let robot = spawn_fake_robot(reply).await;
    let cfg = NotifierConfig {
        webhook_url: robot.url.clone(),
        timeout_secs: 5,
        dry_run: false,
    };
    let notifier = Notifier::from_config(&cfg).expect("notifier");
    (router(AppState::new(notifier)), robot)
}

/// Sends one webhook through the router and returns status and body text.
pub async fn send_hook(app: Router, event: Option<&str>, body: &str) -> (StatusCode, String) {
    let mut req = Request::builder()
        .method(Method::POST)
        .uri(format!("/wechat/gitlab/{KEY}"))
        .header(CONTENT_TYPE, "application/json");
    if let Some(event) = event {
        req = req.header(GITLAB_EVENT_HEADER, event);
    }

    let resp = app
        .oneshot(req.body(Body::from(body.to_owned())).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}
