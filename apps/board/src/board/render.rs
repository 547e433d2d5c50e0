//! Guild and player cards as declarative fragments.
//!
//! Rendering is total: absent, `null` and empty values all drop their line,
//! badge or action instead of producing placeholder text.

use serde::Serialize;

use crate::board::needs::NeedRecord;
use crate::models::guild::GuildEntity;
use crate::models::player::PlayerEntity;

const META_SEPARATOR: &str = " | ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    /// Plain text, e.g. the in-game contact.
    Text { text: String },
    /// External link, opened in a new tab without referrer.
    Link { label: String, href: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fragment {
    pub id: i64,
    pub title: String,
    pub meta: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub badges: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<Action>,
}

fn present(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}

fn title(name: &str, realm: &str) -> String {
    match present(realm) {
        Some(realm) => format!("{} ({realm})", name.trim()),
        None => name.trim().to_string(),
    }
}

fn join_meta(segments: Vec<Option<String>>) -> String {
    segments
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(META_SEPARATOR)
}

fn link(label: &str, href: &str) -> Option<Action> {
    present(href).map(|href| Action::Link {
        label: label.to_string(),
        href: href.to_string(),
    })
}

/// Raid days as given (they arrive in canonical order), then the time window.
fn schedule(guild: &GuildEntity) -> Option<String> {
    let days = guild
        .raid_days
        .iter()
        .filter_map(|d| present(d))
        .collect::<Vec<_>>()
        .join(", ");
    let window = match (present(&guild.raid_time_start), present(&guild.raid_time_end)) {
        (None, None) => String::new(),
        (start, end) => format!("{}-{}", start.unwrap_or(""), end.unwrap_or("")),
    };
    let line = format!("{days} {window}");
    present(&line).map(str::to_string)
}

pub fn render_guild(guild: &GuildEntity) -> Fragment {
    let meta = join_meta(vec![
        present(&guild.faction).map(str::to_string),
        present(&guild.language).map(str::to_string),
        schedule(guild),
        present(&guild.loot_system).map(|loot| format!("Loot: {loot}")),
    ]);

    let progress = guild
        .progress
        .iter()
        .filter(|(instance, status)| present(instance).is_some() && present(status).is_some())
        .map(|(instance, status)| format!("{instance} {status}"));
    let needs = guild.needs.iter().map(NeedRecord::badge);

    let contact = present(&guild.contact_character).map(|c| Action::Text {
        text: format!("Contact: {c}"),
    });
    let actions = [
        contact,
        link("Discord", &guild.discord),
        link("Website", &guild.website),
    ]
    .into_iter()
    .flatten()
    .collect();

    Fragment {
        id: guild.id,
        title: title(&guild.name, &guild.realm),
        meta,
        badges: progress.chain(needs).collect(),
        note: present(&guild.description).map(str::to_string),
        actions,
    }
}

pub fn render_player(player: &PlayerEntity) -> Fragment {
    let class_spec = format!("{} {}", player.class_name.trim(), player.spec.trim());
    let meta = join_meta(vec![
        present(&player.faction).map(str::to_string),
        present(&player.language).map(str::to_string),
        present(&class_spec).map(str::to_string),
        present(&player.role).map(|role| format!("Role: {role}")),
        player.skill_rating.map(|n| format!("Skill: {n}/5")),
    ]);

    let professions = player
        .professions
        .iter()
        .filter_map(|p| present(p))
        .map(str::to_string);
    let attunements = player
        .attunements
        .iter()
        .filter_map(|a| present(a))
        .map(|a| format!("Attune: {a}"));
    let availability = player
        .availability
        .iter()
        .filter_map(|d| present(d))
        .map(|d| format!("Avail: {d}"));

    Fragment {
        id: player.id,
        title: title(&player.name, &player.realm),
        meta,
        badges: professions.chain(attunements).chain(availability).collect(),
        note: present(&player.note).map(str::to_string),
        actions: link("Logs", &player.logs_url).into_iter().collect(),
    }
}
