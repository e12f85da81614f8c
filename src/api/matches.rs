use crate::api::AppState;
use crate::compile::{MatchHighlights, Scorecard};
use crate::domain::{InningsScore, Match, MatchId, MatchStatus, PlayerUid, User};
use crate::engine::{compare_run_rates, RunRateComparison};
use crate::error::AppError;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMatchesQuery {
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorecardQuery {
    pub innings: Option<u8>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InningsTotalsDto {
    pub runs: u32,
    pub wickets: u32,
    pub overs: u32,
    pub balls: u32,
}

impl From<&InningsScore> for InningsTotalsDto {
    fn from(innings: &InningsScore) -> Self {
        InningsTotalsDto {
            runs: innings.runs,
            wickets: innings.wickets,
            overs: innings.overs,
            balls: innings.balls,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummaryDto {
    pub id: String,
    pub team_a: String,
    pub team_b: String,
    pub status: MatchStatus,
    pub total_overs: u32,
    pub current_innings: u8,
    pub innings1: InningsTotalsDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub innings2: Option<InningsTotalsDto>,
}

impl From<&Match> for MatchSummaryDto {
    fn from(m: &Match) -> Self {
        MatchSummaryDto {
            id: m.id.as_str().to_string(),
            team_a: m.team_a.name.clone(),
            team_b: m.team_b.name.clone(),
            status: m.status,
            total_overs: m.total_overs,
            current_innings: m.current_innings,
            innings1: InningsTotalsDto::from(&m.innings1),
            innings2: m.innings2.as_ref().map(InningsTotalsDto::from),
        }
    }
}

pub async fn list_matches(
    Query(params): Query<ListMatchesQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<MatchSummaryDto>>, AppError> {
    let status = params
        .status
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(MatchStatus::from_str)
        .transpose()
        .map_err(|_| {
            AppError::BadRequest(
                "status must be one of: upcoming, toss, live, completed".to_string(),
            )
        })?;

    let matches = state.repo.list_matches(status).await?;
    Ok(Json(matches.iter().map(MatchSummaryDto::from).collect()))
}

pub async fn get_scorecard(
    Path(id): Path<String>,
    Query(params): Query<ScorecardQuery>,
    State(state): State<AppState>,
) -> Result<Json<Arc<Scorecard>>, AppError> {
    let m = load_match(&state, &id).await?;
    let innings_number = params.innings.unwrap_or(m.current_innings);
    if !(1..=2).contains(&innings_number) {
        return Err(AppError::BadRequest("innings must be 1 or 2".to_string()));
    }

    let players = load_players(&state, &m).await?;
    let scorecard = state
        .cache
        .get_or_compile(&m, innings_number, &players)
        .ok_or_else(|| {
            AppError::NotFound(format!("innings {} of match {} has not started", innings_number, id))
        })?;

    Ok(Json(scorecard))
}

pub async fn get_highlights(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MatchHighlights>, AppError> {
    let m = load_match(&state, &id).await?;
    let players = load_players(&state, &m).await?;

    Ok(Json(MatchHighlights::compile(
        &m,
        &players,
        state.config.min_strike_rate_balls,
    )))
}

pub async fn get_run_rate(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<RunRateComparison>>, AppError> {
    let m = load_match(&state, &id).await?;
    Ok(Json(compare_run_rates(&m.innings1, m.innings2.as_ref())))
}

async fn load_match(state: &AppState, id: &str) -> Result<Match, AppError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(AppError::BadRequest("match id is required".to_string()));
    }

    state
        .repo
        .get_match(&MatchId::new(id))
        .await
        .map_err(|e| {
            tracing::error!(match_id = %id, error = %e, "Failed to load match");
            AppError::Internal(format!("Failed to load match: {}", e))
        })?
        .ok_or_else(|| AppError::NotFound(format!("match {}", id)))
}

/// Users referenced anywhere in the match, for name resolution.
async fn load_players(state: &AppState, m: &Match) -> Result<Vec<User>, AppError> {
    let uids = referenced_uids(m);
    Ok(state.repo.query_users(&uids).await?)
}

fn referenced_uids(m: &Match) -> Vec<PlayerUid> {
    let innings = std::iter::once(&m.innings1).chain(m.innings2.as_ref());
    let mut uids: Vec<PlayerUid> = m
        .team_a
        .players
        .iter()
        .chain(m.team_b.players.iter())
        .cloned()
        .chain(m.current_batsmen.iter().map(|b| b.uid.clone()))
        .chain(innings.flat_map(|i| {
            i.ball_events
                .iter()
                .filter_map(|b| b.batsman_uid.clone())
                .chain(i.bowlers.iter().map(|b| b.uid.clone()))
        }))
        .collect();
    uids.sort_unstable();
    uids.dedup();
    uids
}
