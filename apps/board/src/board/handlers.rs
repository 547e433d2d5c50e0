use axum::{
    extract::State,
    http::HeaderMap,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

use crate::api_client::EDIT_TOKEN_HEADER;
use crate::board::chips::{Chip, ChipToggleSet};
use crate::board::filters::{GuildFilterForm, PlayerFilterForm};
use crate::board::needs::{NeedRecord, NeedsList, NO_NEEDS_YET};
use crate::board::panel::{CreationReceipt, PanelResponse, ResultsPanel};
use crate::board::payload::{assemble_guild, assemble_player, GuildForm, PlayerForm};
use crate::board::progress::{parse_progress, ProgressMap};
use crate::board::render::{render_guild, render_player, Fragment};
use crate::board::selection::{
    populate_classes, populate_specs, SelectOption, Selection, SelectionController, SelectionMode,
};
use crate::board::taxonomy::{vocabulary, Vocabulary};
use crate::errors::{AppError, AppJson, AppPath, AppQuery};
use crate::models::application::{ApplicationEntity, ApplicationPayload};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct OptionsQuery {
    #[serde(default)]
    pub mode: SelectionMode,
    pub class: Option<String>,
}

#[derive(Deserialize)]
pub struct SeqQuery {
    pub seq: Option<u64>,
}

#[derive(Deserialize)]
pub struct ClassChangeRequest {
    #[serde(default)]
    pub mode: SelectionMode,
    #[serde(default)]
    pub selection: Selection,
    pub new_class: Option<String>,
}

#[derive(Deserialize)]
pub struct SpecPickRequest {
    #[serde(default)]
    pub mode: SelectionMode,
    #[serde(default)]
    pub selection: Selection,
    pub spec: Option<String>,
}

#[derive(Serialize)]
pub struct SelectionView {
    pub mode: SelectionMode,
    pub selection: Selection,
    pub spec_options: Vec<SelectOption>,
}

impl From<SelectionController> for SelectionView {
    fn from(controller: SelectionController) -> Self {
        Self {
            mode: controller.mode(),
            selection: controller.selection().clone(),
            spec_options: controller.spec_options().to_vec(),
        }
    }
}

#[derive(Deserialize)]
pub struct ChipToggleRequest {
    pub labels: Vec<String>,
    #[serde(default)]
    pub on: Vec<String>,
    pub label: String,
}

#[derive(Serialize)]
pub struct ChipsView {
    pub chips: Vec<Chip>,
    pub on: Vec<String>,
}

#[derive(Deserialize)]
pub struct NeedInput {
    pub class: String,
    #[serde(default)]
    pub spec: String,
    #[serde(default)]
    pub role: String,
    pub prio: i64,
}

#[derive(Deserialize)]
pub struct NeedAddRequest {
    #[serde(default)]
    pub needs: Vec<NeedRecord>,
    pub need: NeedInput,
}

#[derive(Deserialize)]
pub struct NeedRemoveRequest {
    #[serde(default)]
    pub needs: Vec<NeedRecord>,
    pub index: usize,
}

#[derive(Serialize)]
pub struct NeedsView {
    pub needs: Vec<NeedRecord>,
    pub lines: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
}

impl From<&NeedsList> for NeedsView {
    fn from(list: &NeedsList) -> Self {
        Self {
            needs: list.snapshot(),
            lines: list.lines(),
            placeholder: list.is_empty().then_some(NO_NEEDS_YET),
        }
    }
}

#[derive(Deserialize)]
pub struct ProgressPreviewRequest {
    #[serde(default)]
    pub text: String,
}

fn edit_token(headers: &HeaderMap) -> Result<String, AppError> {
    headers
        .get(EDIT_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AppError::Validation(format!("Missing {EDIT_TOKEN_HEADER} header")))
}

/// GET /board/vocab
pub async fn handle_vocab() -> Json<Vocabulary> {
    Json(vocabulary())
}

/// GET /board/options/classes
pub async fn handle_class_options(
    AppQuery(q): AppQuery<OptionsQuery>,
) -> Json<Vec<SelectOption>> {
    Json(populate_classes(q.mode.offers_any()))
}

/// GET /board/options/specs
pub async fn handle_spec_options(
    AppQuery(q): AppQuery<OptionsQuery>,
) -> Json<Vec<SelectOption>> {
    Json(populate_specs(q.class.as_deref(), q.mode.offers_any()))
}

/// POST /board/selection/class
pub async fn handle_class_change(
    AppJson(req): AppJson<ClassChangeRequest>,
) -> Result<Json<SelectionView>, AppError> {
    let mut controller = SelectionController::restore(req.mode, &req.selection)?;
    controller.on_class_changed(req.new_class.as_deref())?;
    Ok(Json(controller.into()))
}

/// POST /board/selection/spec
pub async fn handle_spec_pick(
    AppJson(req): AppJson<SpecPickRequest>,
) -> Result<Json<SelectionView>, AppError> {
    let class_only = Selection {
        class: req.selection.class,
        spec: None,
    };
    let mut controller = SelectionController::restore(req.mode, &class_only)?;
    controller.pick_spec(req.spec.as_deref())?;
    Ok(Json(controller.into()))
}

/// POST /board/chips/toggle
pub async fn handle_chip_toggle(
    AppJson(req): AppJson<ChipToggleRequest>,
) -> Result<Json<ChipsView>, AppError> {
    let mut chips = ChipToggleSet::with_selected(req.labels, &req.on);
    chips
        .toggle(&req.label)
        .ok_or_else(|| AppError::Validation(format!("Unknown chip '{}'", req.label)))?;
    Ok(Json(ChipsView {
        chips: chips.chips().to_vec(),
        on: chips.current_on(),
    }))
}

/// POST /board/needs/add
pub async fn handle_need_add(
    AppJson(req): AppJson<NeedAddRequest>,
) -> Result<Json<NeedsView>, AppError> {
    let NeedInput {
        class,
        spec,
        role,
        prio,
    } = req.need;
    let selection = SelectionController::restore(
        SelectionMode::Declare,
        &Selection {
            class: Some(class),
            spec: Some(spec),
        },
    )?;
    let Selection { class, spec } = selection.selection().clone();

    let mut needs = NeedsList::from(req.needs);
    needs.add(
        class.unwrap_or_default(),
        spec.unwrap_or_default(),
        role,
        prio,
    );
    Ok(Json(NeedsView::from(&needs)))
}

/// POST /board/needs/remove
pub async fn handle_need_remove(
    AppJson(req): AppJson<NeedRemoveRequest>,
) -> Result<Json<NeedsView>, AppError> {
    let mut needs = NeedsList::from(req.needs);
    needs.remove_at(req.index)?;
    Ok(Json(NeedsView::from(&needs)))
}

/// POST /board/progress/preview
pub async fn handle_progress_preview(
    AppJson(req): AppJson<ProgressPreviewRequest>,
) -> Json<ProgressMap> {
    Json(parse_progress(&req.text))
}

/// GET /board/guilds
pub async fn handle_search_guilds(
    State(state): State<AppState>,
    AppQuery(form): AppQuery<GuildFilterForm>,
    AppQuery(seq): AppQuery<SeqQuery>,
) -> Result<Json<PanelResponse>, AppError> {
    let guilds = state.api.list_guilds(&form.to_params()).await?;
    let fragments = guilds.iter().map(render_guild).collect();
    Ok(Json(PanelResponse {
        seq: seq.seq,
        panel: ResultsPanel::from_fragments(fragments),
    }))
}

/// GET /board/players
pub async fn handle_search_players(
    State(state): State<AppState>,
    AppQuery(form): AppQuery<PlayerFilterForm>,
    AppQuery(seq): AppQuery<SeqQuery>,
) -> Result<Json<PanelResponse>, AppError> {
    let players = state.api.list_players(&form.to_params()).await?;
    let fragments = players.iter().map(render_player).collect();
    Ok(Json(PanelResponse {
        seq: seq.seq,
        panel: ResultsPanel::from_fragments(fragments),
    }))
}

/// GET /board/guilds/:id
pub async fn handle_get_guild(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<Fragment>, AppError> {
    let guild = state.api.get_guild(id).await?;
    Ok(Json(render_guild(&guild)))
}

/// GET /board/players/:id
pub async fn handle_get_player(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<Fragment>, AppError> {
    let player = state.api.get_player(id).await?;
    Ok(Json(render_player(&player)))
}

/// POST /board/guilds
pub async fn handle_create_guild(
    State(state): State<AppState>,
    AppJson(form): AppJson<GuildForm>,
) -> Result<Json<CreationReceipt>, AppError> {
    let payload = assemble_guild(&form);
    let created = state.api.create_guild(&payload).await?;
    info!("Guild {} created ({} needs)", created.guild.id, payload.needs.len());
    Ok(Json(CreationReceipt::guild(created.guild.id, created.edit_token)))
}

/// POST /board/players
pub async fn handle_create_player(
    State(state): State<AppState>,
    AppJson(form): AppJson<PlayerForm>,
) -> Result<Json<CreationReceipt>, AppError> {
    let payload = assemble_player(&form)?;
    let created = state.api.create_player(&payload).await?;
    info!("Player {} created", created.player.id);
    Ok(Json(CreationReceipt::player(
        created.player.id,
        created.edit_token,
    )))
}

/// PUT /board/guilds/:id
pub async fn handle_update_guild(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    headers: HeaderMap,
    AppJson(form): AppJson<GuildForm>,
) -> Result<Json<Fragment>, AppError> {
    let token = edit_token(&headers)?;
    let guild = state
        .api
        .update_guild(id, &token, &assemble_guild(&form))
        .await?;
    Ok(Json(render_guild(&guild)))
}

/// PUT /board/players/:id
pub async fn handle_update_player(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    headers: HeaderMap,
    AppJson(form): AppJson<PlayerForm>,
) -> Result<Json<Fragment>, AppError> {
    let token = edit_token(&headers)?;
    let payload = assemble_player(&form)?;
    let player = state.api.update_player(id, &token, &payload).await?;
    Ok(Json(render_player(&player)))
}

/// DELETE /board/guilds/:id
pub async fn handle_delete_guild(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    headers: HeaderMap,
) -> Result<Json<Value>, AppError> {
    let token = edit_token(&headers)?;
    let deleted = state.api.delete_guild(id, &token).await?;
    info!("Guild {id} delete requested (deleted={deleted})");
    Ok(Json(json!({ "deleted": deleted })))
}

/// DELETE /board/players/:id
pub async fn handle_delete_player(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    headers: HeaderMap,
) -> Result<Json<Value>, AppError> {
    let token = edit_token(&headers)?;
    let deleted = state.api.delete_player(id, &token).await?;
    info!("Player {id} delete requested (deleted={deleted})");
    Ok(Json(json!({ "deleted": deleted })))
}

/// POST /board/applications
pub async fn handle_apply(
    State(state): State<AppState>,
    AppJson(mut req): AppJson<ApplicationPayload>,
) -> Result<Json<ApplicationEntity>, AppError> {
    req.message = req.message.trim().to_string();
    let application = state.api.apply(&req).await?;
    Ok(Json(application))
}

/// GET /board/guilds/:id/applications
pub async fn handle_guild_applications(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    headers: HeaderMap,
) -> Result<Json<Vec<ApplicationEntity>>, AppError> {
    let token = edit_token(&headers)?;
    Ok(Json(state.api.guild_applications(id, &token).await?))
}

/// GET /board/upstream/health
pub async fn handle_upstream_health(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let ok = state.api.health().await?;
    Ok(Json(json!({ "upstream": ok })))
}
