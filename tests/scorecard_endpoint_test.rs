use axum::http::StatusCode;
use scorebook::api::{self, AppState};
use scorebook::config::Config;
use scorebook::db::init_db;
use scorebook::domain::{
    BallEvent, Batsman, Bowler, InningsScore, Match, MatchId, MatchStatus, PlayerUid, Team,
    TeamSide, Toss, TossDecision, User,
};
use scorebook::Repository;
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

struct TestApp {
    app: axum::Router,
    state: AppState,
    _temp: TempDir,
}

fn test_config(db_path: String) -> Config {
    Config {
        port: 0,
        database_path: db_path,
        scorecard_cache_capacity: 16,
        min_strike_rate_balls: 10,
    }
}

async fn setup_test_app() -> TestApp {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir
        .path()
        .join("test.db")
        .to_string_lossy()
        .to_string();
    let pool = init_db(&db_path).await.expect("init_db failed");

    let repo = Arc::new(Repository::new(pool));
    let state = AppState::new(repo, test_config(db_path));
    let app = api::create_router(state.clone());

    TestApp {
        app,
        state,
        _temp: temp_dir,
    }
}

async fn request(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let req = axum::http::Request::builder()
        .method("GET")
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();

    let res = app.oneshot(req).await.unwrap();
    let status = res.status();
    let body = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

fn team(name: &str, players: &[&str]) -> Team {
    Team {
        name: name.to_string(),
        players: players.iter().map(|p| PlayerUid::from(*p)).collect(),
    }
}

/// Lions batted first (18/1 off 2 overs); Tigers are chasing live.
fn chase_in_progress() -> Match {
    let mut first = vec![BallEvent::runs(2, "l1"); 6];
    first.extend(vec![
        BallEvent::runs(1, "l2"),
        BallEvent::wicket("l2"),
        BallEvent::wide(1),
        BallEvent::runs(4, "l3"),
        BallEvent::runs(0, "l1"),
        BallEvent::runs(0, "l1"),
        BallEvent::runs(0, "l1"),
    ]);
    let innings1 = InningsScore::from_events(first)
        .with_totals(18, 1, 2, 0)
        .with_bowlers(vec![
            Bowler::new("t1", 1, 0, 12, 0),
            Bowler::new("t2", 1, 0, 6, 1),
        ]);

    let innings2 = InningsScore::from_events(vec![
        BallEvent::runs(6, "t1"),
        BallEvent::runs(1, "t1"),
        BallEvent::runs(0, "t2"),
    ])
    .with_totals(7, 0, 0, 3)
    .with_bowlers(vec![Bowler::new("l1", 0, 3, 7, 0)]);

    Match {
        id: MatchId::new("final"),
        team_a: team("Lions", &["l1", "l2", "l3", "l4"]),
        team_b: team("Tigers", &["t1", "t2", "t3"]),
        total_overs: 2,
        status: MatchStatus::Live,
        toss: Some(Toss {
            winner: TeamSide::B,
            decision: TossDecision::Bowl,
        }),
        current_innings: 2,
        innings1,
        innings2: Some(innings2),
        current_batsmen: vec![
            Batsman::new("t1", 7, 2, false),
            Batsman::new("t2", 0, 1, true),
        ],
        umpire_uid: Some(PlayerUid::from("ump")),
    }
}

async fn seed(state: &AppState) {
    state.repo.upsert_match(&chase_in_progress()).await.unwrap();
    for user in [
        User::new("l1", "Lena", "lena"),
        User::new("l2", "", "leo_2"),
        User::new("t1", "Tomas", "tomas"),
    ] {
        state.repo.upsert_user(&user).await.unwrap();
    }
}

#[tokio::test]
async fn test_list_matches_with_status_filter() {
    let test = setup_test_app().await;
    seed(&test.state).await;

    let (status, body) = request(test.app.clone(), "/v1/matches").await;
    assert_eq!(status, StatusCode::OK);
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"], "final");
    assert_eq!(list[0]["teamA"], "Lions");
    assert_eq!(list[0]["innings1"]["runs"], 18);
    assert_eq!(list[0]["innings2"]["balls"], 3);

    let (_, body) = request(test.app.clone(), "/v1/matches?status=completed").await;
    assert!(body.as_array().unwrap().is_empty());

    let (status, body) = request(test.app, "/v1/matches?status=abandoned").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("status"));
}

#[tokio::test]
async fn test_completed_innings_scorecard() {
    let test = setup_test_app().await;
    seed(&test.state).await;

    let (status, card) = request(test.app, "/v1/matches/final/scorecard?innings=1").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(card["inningsNumber"], 1);
    assert_eq!(card["isLive"], false);
    assert_eq!(card["runRate"], 9.0);

    let batting = card["batting"].as_array().unwrap();
    let order: Vec<&str> = batting.iter().map(|b| b["uid"].as_str().unwrap()).collect();
    assert_eq!(order, vec!["l1", "l2", "l3"]);

    // The live overlay names t1, not l1, so l1 derives from the log.
    assert_eq!(batting[0]["name"], "Lena");
    assert_eq!(batting[0]["runs"], 12);
    assert_eq!(batting[0]["balls"], 9);
    assert_eq!(batting[0]["dots"], 3);
    assert_eq!(batting[1]["name"], "leo_2");
    assert_eq!(batting[1]["isOut"], true);
    assert_eq!(batting[2]["name"], "Unknown");

    assert_eq!(card["didNotBat"][0]["uid"], "l4");
    assert_eq!(card["extras"]["wides"], 1);
    assert_eq!(card["fallOfWickets"][0]["score"], 13);
    assert_eq!(card["fallOfWickets"][0]["name"], "leo_2");
    assert_eq!(card["overSummary"].as_array().unwrap().len(), 2);
    assert_eq!(card["bowling"][1]["economy"], 6.0);
    assert!(card.get("target").is_none());
}

#[tokio::test]
async fn test_live_chase_scorecard_defaults_to_current_innings() {
    let test = setup_test_app().await;
    seed(&test.state).await;

    let (status, card) = request(test.app, "/v1/matches/final/scorecard").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(card["inningsNumber"], 2);
    assert_eq!(card["isLive"], true);
    assert_eq!(card["target"], 19);
    assert_eq!(card["requiredRunRate"], 8.0);

    let batting = card["batting"].as_array().unwrap();
    assert_eq!(batting[0]["uid"], "t1");
    assert_eq!(batting[0]["strikeRate"], 350.0);
    assert_eq!(batting[0]["sixes"], 1);
    assert_eq!(batting[1]["dots"], 1);
    assert_eq!(card["didNotBat"][0]["uid"], "t3");
}

#[tokio::test]
async fn test_scorecard_is_served_from_cache() {
    let test = setup_test_app().await;
    seed(&test.state).await;

    request(test.app.clone(), "/v1/matches/final/scorecard?innings=1").await;
    request(test.app.clone(), "/v1/matches/final/scorecard?innings=1").await;
    assert_eq!(test.state.cache.len(), 1);

    let mut updated = chase_in_progress();
    updated
        .innings2
        .as_mut()
        .unwrap()
        .ball_events
        .push(BallEvent::runs(4, "t2"));
    test.state.repo.upsert_match(&updated).await.unwrap();

    let (_, card) = request(test.app.clone(), "/v1/matches/final/scorecard?innings=2").await;
    assert_eq!(card["batting"][1]["fours"], 1);
    assert_eq!(test.state.cache.len(), 2);
}

#[tokio::test]
async fn test_scorecard_errors() {
    let test = setup_test_app().await;
    seed(&test.state).await;

    let (status, _) = request(test.app.clone(), "/v1/matches/missing/scorecard").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = request(test.app.clone(), "/v1/matches/final/scorecard?innings=3").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "innings must be 1 or 2");

    let mut first_innings_only = chase_in_progress();
    first_innings_only.id = MatchId::new("early");
    first_innings_only.innings2 = None;
    first_innings_only.current_innings = 1;
    test.state.repo.upsert_match(&first_innings_only).await.unwrap();

    let (status, _) = request(test.app, "/v1/matches/early/scorecard?innings=2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_highlights_span_both_innings() {
    let test = setup_test_app().await;
    seed(&test.state).await;

    let (status, body) = request(test.app, "/v1/matches/final/highlights").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["topScorer"]["uid"], "l1");
    assert_eq!(body["topScorer"]["name"], "Lena");
    assert_eq!(body["bestBowler"]["uid"], "t2");
    assert_eq!(body["bestBowler"]["wickets"], 1);
    assert_eq!(body["highestPartnership"]["runs"], 13);
    assert_eq!(body["highestPartnership"]["batsman1Name"], "Lena");
    assert!(body["bestStrikeRate"].is_null());
}

#[tokio::test]
async fn test_run_rate_comparison() {
    let test = setup_test_app().await;
    seed(&test.state).await;

    let (status, body) = request(test.app, "/v1/matches/final/run-rate").await;
    assert_eq!(status, StatusCode::OK);

    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["overNumber"], 1);
    assert_eq!(rows[0]["firstInnings"]["cumulativeRuns"], 12);
    assert_eq!(rows[0]["secondInnings"]["cumulativeRuns"], 7);
    assert_eq!(rows[0]["secondInnings"]["runRate"], 14.0);
    assert!(rows[1]["secondInnings"].is_null());
    assert_eq!(rows[1]["firstInnings"]["runRate"], 9.0);
}
