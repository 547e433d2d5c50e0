use serde::{Deserialize, Serialize};

use crate::board::needs::NeedRecord;
use crate::board::progress::ProgressMap;
use crate::models::null_as_default;

/// A guild as the remote API returns it. Every field tolerates `null` or absence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuildEntity {
    #[serde(default)]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub realm: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub faction: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub language: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub raid_days: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub raid_time_start: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub raid_time_end: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub progress: ProgressMap,
    #[serde(default, deserialize_with = "null_as_default")]
    pub needs: Vec<NeedRecord>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub loot_system: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub contact_character: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub discord: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub website: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

/// Body of `POST /api/guilds` and `PUT /api/guilds/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuildPayload {
    pub name: String,
    pub realm: String,
    pub faction: String,
    pub language: String,
    pub raid_days: Vec<String>,
    pub raid_time_start: String,
    pub raid_time_end: String,
    pub progress: ProgressMap,
    pub needs: Vec<NeedRecord>,
    pub loot_system: String,
    pub contact_character: String,
    pub discord: String,
    pub website: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GuildCreated {
    pub guild: GuildEntity,
    pub edit_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guild_entity_tolerates_nulls_and_gaps() {
        let json = r#"{
            "id": 7,
            "name": "Ashen Vanguard",
            "realm": "Everlook",
            "faction": "Horde",
            "raid_days": null,
            "progress": {"SSC": "4/6"},
            "needs": [{"class": "Priest", "spec": "Holy", "role": "Heal", "prio": 1}],
            "discord": null
        }"#;
        let guild: GuildEntity = serde_json::from_str(json).unwrap();
        assert_eq!(guild.id, 7);
        assert!(guild.raid_days.is_empty());
        assert_eq!(guild.progress["SSC"], "4/6");
        assert_eq!(guild.needs[0].prio, Some(1));
        assert!(guild.discord.is_empty());
        assert!(guild.language.is_empty());
    }

    #[test]
    fn test_guild_list_survives_loose_need_records() {
        let json = r#"[
            {"id": 1, "name": "A"},
            {"id": 2, "name": "B", "needs": [
                {"class": "", "class_name": "Mage", "role": "DPS", "prio": 2},
                {"class": "Priest", "role": "Heal", "prio": "3"}
            ]}
        ]"#;
        let guilds: Vec<GuildEntity> = serde_json::from_str(json).unwrap();
        assert_eq!(guilds.len(), 2);
        assert_eq!(guilds[1].needs[0].badge(), "Need: Mage (DPS) Prio 2");
        assert_eq!(guilds[1].needs[1].prio, Some(3));
    }

    #[test]
    fn test_guild_created_decodes() {
        let json = r#"{"guild": {"id": 3, "name": "Nightfall"}, "edit_token": "tok-123"}"#;
        let created: GuildCreated = serde_json::from_str(json).unwrap();
        assert_eq!(created.guild.id, 3);
        assert_eq!(created.edit_token, "tok-123");
    }
}
