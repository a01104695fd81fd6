//! Read-only catalogs.
//!
//! Catalogs are built once (from vectors or a data directory) and passed to
//! whoever needs them. There is no process-wide registry.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{info, warn};

use tekra_core::components::{Ability, Combatant};

use crate::content::{ArcadeWave, EventFile, GameEvent, RaidBoss};
use crate::error::CatalogError;
use crate::story::{StoryChapter, StoryFile, StoryStage};

pub const ABILITIES_FILE: &str = "abilities.json";
pub const PLAYERS_FILE: &str = "players.json";
pub const ENEMIES_FILE: &str = "enemies.json";
pub const RAIDS_FILE: &str = "raids.json";
pub const ARCADE_FILE: &str = "arcade.json";
pub const EVENTS_FILE: &str = "events.json";
pub const STORY_FILE: &str = "story.json";

/// All abilities, in catalog order.
#[derive(Debug, Clone, Default)]
pub struct AbilityCatalog {
    abilities: Vec<Ability>,
}

impl AbilityCatalog {
    pub fn new(abilities: Vec<Ability>) -> Result<Self, CatalogError> {
        ensure_unique("ability", abilities.iter().map(|a| a.id.as_str()))?;
        Ok(Self { abilities })
    }

    pub fn get(&self, id: &str) -> Option<&Ability> {
        self.abilities.iter().find(|a| a.id == id)
    }

    pub fn all(&self) -> &[Ability] {
        &self.abilities
    }

    pub fn len(&self) -> usize {
        self.abilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.abilities.is_empty()
    }

    /// Abilities `combatant` may draw, in catalog order. Empty when no
    /// group matches. Ids are already unique, see `new`.
    pub fn pool_for(&self, combatant: &Combatant) -> Vec<&Ability> {
        self.abilities
            .iter()
            .filter(|a| combatant.can_draw_from(&a.group))
            .collect()
    }
}

/// Playable heroes and standalone enemies.
#[derive(Debug, Clone, Default)]
pub struct FighterCatalog {
    players: Vec<Combatant>,
    enemies: Vec<Combatant>,
}

impl FighterCatalog {
    pub fn new(players: Vec<Combatant>, enemies: Vec<Combatant>) -> Result<Self, CatalogError> {
        ensure_unique("player", players.iter().map(|c| c.id.as_str()))?;
        ensure_unique("enemy", enemies.iter().map(|c| c.id.as_str()))?;
        Ok(Self { players, enemies })
    }

    pub fn players(&self) -> &[Combatant] {
        &self.players
    }

    pub fn player(&self, id: &str) -> Option<&Combatant> {
        self.players.iter().find(|c| c.id == id)
    }

    pub fn enemy(&self, id: &str) -> Option<&Combatant> {
        self.enemies.iter().find(|c| c.id == id)
    }
}

/// Everything the engine's collaborators load from a data directory.
#[derive(Debug, Clone, Default)]
pub struct ContentLibrary {
    pub abilities: AbilityCatalog,
    pub fighters: FighterCatalog,
    pub raids: Vec<RaidBoss>,
    pub arcade: Vec<ArcadeWave>,
    pub events: Vec<GameEvent>,
    pub chapters: Vec<StoryChapter>,
}

impl ContentLibrary {
    /// Load a data directory. `abilities.json` and `players.json` are
    /// required and must not be empty; every other file is optional.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let dir = dir.as_ref();

        let abilities: Vec<Ability> = read_json(&dir.join(ABILITIES_FILE))?;
        if abilities.is_empty() {
            return Err(CatalogError::Empty("ability"));
        }
        let players: Vec<Combatant> = read_json(&dir.join(PLAYERS_FILE))?;
        if players.is_empty() {
            return Err(CatalogError::Empty("player"));
        }
        let enemies: Vec<Combatant> = read_optional_json(&dir.join(ENEMIES_FILE))?;
        let raids: Vec<RaidBoss> = read_optional_json(&dir.join(RAIDS_FILE))?;
        let arcade: Vec<ArcadeWave> = read_optional_json(&dir.join(ARCADE_FILE))?;
        let events: EventFile = read_optional_json(&dir.join(EVENTS_FILE))?;
        let story: StoryFile = read_optional_json(&dir.join(STORY_FILE))?;

        ensure_unique("raid boss", raids.iter().map(|r| r.id.as_str()))?;

        let library = Self {
            abilities: AbilityCatalog::new(abilities)?,
            fighters: FighterCatalog::new(players, enemies)?,
            raids,
            arcade,
            events: events.events,
            chapters: story.chapters,
        };
        info!(
            abilities = library.abilities.len(),
            players = library.fighters.players().len(),
            raids = library.raids.len(),
            arcade_waves = library.arcade.len(),
            events = library.events.len(),
            chapters = library.chapters.len(),
            "Content library loaded from {}",
            dir.display()
        );
        Ok(library)
    }

    pub fn raid_boss(&self, id: &str) -> Option<&RaidBoss> {
        self.raids.iter().find(|r| r.id == id)
    }

    pub fn arcade_wave(&self, id: &str) -> Option<&ArcadeWave> {
        self.arcade.iter().find(|w| w.id == id)
    }

    pub fn event(&self, id: &str) -> Option<&GameEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Find a story stage and the chapter it belongs to.
    pub fn story_stage(&self, stage_id: &str) -> Option<(&StoryChapter, &StoryStage)> {
        self.chapters
            .iter()
            .find_map(|chapter| chapter.stage(stage_id).map(|stage| (chapter, stage)))
    }

    /// Any enemy by id: standalone enemies first, then arcade rounds, then
    /// raid bosses at their base stats.
    pub fn enemy(&self, id: &str) -> Option<Combatant> {
        if let Some(enemy) = self.fighters.enemy(id) {
            return Some(enemy.clone());
        }
        let arcade_enemy = self
            .arcade
            .iter()
            .flat_map(|wave| wave.rounds.iter().flatten())
            .find(|c| c.id == id);
        if let Some(enemy) = arcade_enemy {
            return Some(enemy.clone());
        }
        self.raid_boss(id).map(|boss| boss.to_combatant(1.0))
    }
}

fn ensure_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn read_optional_json<T: DeserializeOwned + Default>(path: &Path) -> Result<T, CatalogError> {
    if !path.exists() {
        warn!("Optional content file {} not found, using empty set", path.display());
        return Ok(T::default());
    }
    read_json(path)
}
