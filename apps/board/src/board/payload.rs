//! Turns a creation-form snapshot into the body the remote API expects.

use serde::Deserialize;

use crate::board::chips::ChipToggleSet;
use crate::board::needs::{NeedRecord, NeedsList};
use crate::board::progress::parse_progress;
use crate::board::selection::{Selection, SelectionController, SelectionError, SelectionMode};
use crate::board::taxonomy::{ATTUNEMENTS, DAYS};
use crate::models::guild::GuildPayload;
use crate::models::player::PlayerPayload;

/// The guild-creation form as the browser holds it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GuildForm {
    pub name: String,
    pub realm: String,
    pub faction: String,
    pub language: String,
    /// Labels of the raid-day chips that are on.
    pub raid_days: Vec<String>,
    pub raid_time_start: String,
    pub raid_time_end: String,
    /// Raw progress notation, e.g. `Kara=Cleared; SSC=3/6`.
    pub progress_text: String,
    pub needs: Vec<NeedRecord>,
    pub loot_system: String,
    pub contact_character: String,
    pub discord: String,
    pub website: String,
    pub description: String,
}

/// The player-profile form as the browser holds it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlayerForm {
    pub name: String,
    pub realm: String,
    pub faction: String,
    pub language: String,
    pub class_name: String,
    pub spec: String,
    pub role: String,
    pub skill_rating: i64,
    /// Comma-separated, e.g. `Alchemy, Herbalism`.
    pub professions_text: String,
    pub attunements: Vec<String>,
    pub availability: Vec<String>,
    pub logs_url: String,
    pub note: String,
}

fn trimmed(value: &str) -> String {
    value.trim().to_string()
}

pub fn assemble_guild(form: &GuildForm) -> GuildPayload {
    let raid_days = ChipToggleSet::with_selected(DAYS.iter().copied(), &form.raid_days);
    let needs = NeedsList::from(form.needs.clone());

    GuildPayload {
        name: trimmed(&form.name),
        realm: trimmed(&form.realm),
        faction: form.faction.clone(),
        language: form.language.clone(),
        raid_days: raid_days.current_on(),
        raid_time_start: trimmed(&form.raid_time_start),
        raid_time_end: trimmed(&form.raid_time_end),
        progress: parse_progress(&form.progress_text),
        needs: needs.snapshot(),
        loot_system: trimmed(&form.loot_system),
        contact_character: trimmed(&form.contact_character),
        discord: trimmed(&form.discord),
        website: trimmed(&form.website),
        description: trimmed(&form.description),
    }
}

/// Fails only when the (class, spec) pair is one the selectors could not have produced.
pub fn assemble_player(form: &PlayerForm) -> Result<PlayerPayload, SelectionError> {
    let selection = SelectionController::restore(
        SelectionMode::Declare,
        &Selection {
            class: Some(form.class_name.clone()),
            spec: Some(form.spec.clone()),
        },
    )?;
    let Selection { class, spec } = selection.selection().clone();

    let attunements = ChipToggleSet::with_selected(ATTUNEMENTS.iter().copied(), &form.attunements);
    let availability = ChipToggleSet::with_selected(DAYS.iter().copied(), &form.availability);

    Ok(PlayerPayload {
        name: trimmed(&form.name),
        realm: trimmed(&form.realm),
        faction: form.faction.clone(),
        language: form.language.clone(),
        class_name: class.unwrap_or_default(),
        spec: spec.unwrap_or_default(),
        role: form.role.clone(),
        skill_rating: form.skill_rating,
        professions: split_professions(&form.professions_text),
        attunements: attunements.current_on(),
        availability: availability.current_on(),
        logs_url: trimmed(&form.logs_url),
        note: trimmed(&form.note),
    })
}

pub fn split_professions(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guild_form() -> GuildForm {
        GuildForm {
            name: "  Ashen Vanguard ".to_string(),
            realm: "Everlook".to_string(),
            faction: "Horde".to_string(),
            language: "DE".to_string(),
            raid_days: vec!["Thu".to_string(), "Mon".to_string()],
            raid_time_start: "20:00".to_string(),
            raid_time_end: "23:00 ".to_string(),
            progress_text: "Kara=Cleared; SSC=3/6;".to_string(),
            needs: vec![NeedRecord::new("Priest", "Holy", "Heal", 1)],
            loot_system: "Loot Council".to_string(),
            discord: " https://discord.gg/ashen ".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_assemble_guild() {
        let payload = assemble_guild(&guild_form());
        assert_eq!(payload.name, "Ashen Vanguard");
        assert_eq!(payload.raid_days, ["Mon", "Thu"]);
        assert_eq!(payload.raid_time_end, "23:00");
        assert_eq!(payload.progress.len(), 2);
        assert_eq!(payload.progress["SSC"], "3/6");
        assert_eq!(payload.needs.len(), 1);
        assert_eq!(payload.discord, "https://discord.gg/ashen");
        assert!(payload.website.is_empty());
    }

    #[test]
    fn test_guild_form_decodes_partial_json() {
        let form: GuildForm = serde_json::from_str(r#"{"name": "Solo"}"#).unwrap();
        let payload = assemble_guild(&form);
        assert_eq!(payload.name, "Solo");
        assert!(payload.raid_days.is_empty());
        assert!(payload.progress.is_empty());
    }

    #[test]
    fn test_assemble_player() {
        let form = PlayerForm {
            name: "Thrall".to_string(),
            realm: "Everlook".to_string(),
            class_name: "Shaman".to_string(),
            spec: "Enhancement".to_string(),
            role: "DPS".to_string(),
            skill_rating: 4,
            professions_text: "Alchemy, , Herbalism ".to_string(),
            attunements: vec!["TK".to_string(), "Karazhan".to_string()],
            availability: vec!["Sun".to_string(), "Wed".to_string()],
            ..Default::default()
        };
        let payload = assemble_player(&form).unwrap();
        assert_eq!(payload.class_name, "Shaman");
        assert_eq!(payload.spec, "Enhancement");
        assert_eq!(payload.professions, ["Alchemy", "Herbalism"]);
        assert_eq!(payload.attunements, ["Karazhan", "TK"]);
        assert_eq!(payload.availability, ["Wed", "Sun"]);
        assert_eq!(payload.skill_rating, 4);
    }

    #[test]
    fn test_assemble_player_rejects_foreign_spec() {
        let form = PlayerForm {
            class_name: "Mage".to_string(),
            spec: "Fury".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            assemble_player(&form),
            Err(SelectionError::SpecNotOffered { .. })
        ));
    }

    #[test]
    fn test_assemble_player_defaults_missing_spec() {
        let form = PlayerForm {
            class_name: "Rogue".to_string(),
            ..Default::default()
        };
        assert_eq!(assemble_player(&form).unwrap().spec, "Assassination");
    }

    #[test]
    fn test_split_professions_empty() {
        assert!(split_professions("").is_empty());
        assert!(split_professions(" , ").is_empty());
    }
}
