#[cfg(test)]
mod tests {
    use std::fs;

    use tekra_core::components::{Ability, Combatant};
    use tekra_core::enums::AbilityCategory;

    use crate::catalog::*;
    use crate::content::{GameEvent, RaidBoss};
    use crate::difficulty::DifficultyRating;
    use crate::error::CatalogError;
    use crate::progress::{level_for_xp, PlayerProgress, ProgressSink};
    use crate::story::{StoryDifficulty, StoryStage};
    use tekra_core::types::Reward;

    fn ability(id: &str, group: &str) -> Ability {
        Ability::new(id, id.to_uppercase(), 10.0, AbilityCategory::Punch, 1.0).in_group(group)
    }

    // ---- Ability catalog ----

    #[test]
    fn test_pool_for_filters_by_group() {
        let catalog = AbilityCatalog::new(vec![
            ability("jab", "generic"),
            ability("uppercut", "tekra_core"),
            ability("slam", "boss"),
        ])
        .unwrap();
        let hero = Combatant::new("tekra_core", "Tekra", 100.0, 10.0)
            .with_ability_groups(["tekra_core", "generic"]);
        let ids: Vec<&str> = catalog.pool_for(&hero).iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["jab", "uppercut"]);
    }

    #[test]
    fn test_pool_for_empty_without_groups() {
        let catalog = AbilityCatalog::new(vec![ability("jab", "generic")]).unwrap();
        let loner = Combatant::new("loner", "Loner", 100.0, 10.0);
        assert!(catalog.pool_for(&loner).is_empty());
    }

    #[test]
    fn test_duplicate_ability_rejected() {
        let err = AbilityCatalog::new(vec![ability("jab", "generic"), ability("jab", "boss")])
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { kind: "ability", .. }));
    }

    // ---- Directory loading ----

    const ABILITIES: &str = r#"[
        {"id":"jab","title":"Jab","damage":10,"type":"punch","cooldown":1.0},
        {"id":"kick","title":"Kick","damage":18,"type":"kick","cooldown":2.0}
    ]"#;

    const PLAYERS: &str = r#"[
        {"id":"tekra_core","name":"Tekra","max_health":120,"attack":12,
         "poses":["idle","punch"],"ability_groups":["generic"]}
    ]"#;

    #[test]
    fn test_load_dir_with_required_files_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(ABILITIES_FILE), ABILITIES).unwrap();
        fs::write(dir.path().join(PLAYERS_FILE), PLAYERS).unwrap();

        let library = ContentLibrary::load_dir(dir.path()).unwrap();
        assert_eq!(library.abilities.len(), 2);
        assert_eq!(library.fighters.players().len(), 1);
        assert!(library.raids.is_empty());
        assert!(library.events.is_empty());
        assert!(library.chapters.is_empty());
    }

    #[test]
    fn test_load_dir_full_content() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(ABILITIES_FILE), ABILITIES).unwrap();
        fs::write(dir.path().join(PLAYERS_FILE), PLAYERS).unwrap();
        fs::write(
            dir.path().join(RAIDS_FILE),
            r#"[{"id":"frost_king","name":"Frost King","max_health":200,"attack":15,"background":"ice"}]"#,
        )
        .unwrap();
        fs::write(
            dir.path().join(ARCADE_FILE),
            r#"[{"id":"w1","title":"Wave 1","rounds":[
                [{"id":"thug","name":"Thug","max_health":80,"attack":8}],
                [{"id":"brute","name":"Brute","max_health":120,"attack":11}]
            ]}]"#,
        )
        .unwrap();
        fs::write(
            dir.path().join(EVENTS_FILE),
            r#"{"events":[{"id":"e1","title":"Night Market","background":"market"}]}"#,
        )
        .unwrap();
        fs::write(
            dir.path().join(STORY_FILE),
            r#"{"chapters":[{"id":"c1","title":"Awakening","background":"dojo","stages":[
                {"id":"s1","title":"Gatekeeper","enemy":"story_gatekeeper","base_health":90,
                 "base_attack":9,"recommended_level":2,"rewards":{"xp":40,"coins":15}}
            ]}]}"#,
        )
        .unwrap();

        let library = ContentLibrary::load_dir(dir.path()).unwrap();
        let boss = library.raid_boss("frost_king").unwrap();
        assert!(boss.poses.contains("special"), "Default poses applied");
        assert_eq!(library.arcade_wave("w1").unwrap().total_rounds(), 2);
        assert_eq!(library.event("e1").unwrap().enemy_id, None);

        let (chapter, stage) = library.story_stage("s1").unwrap();
        assert_eq!(chapter.id, "c1");
        assert_eq!(stage.resolved_background(chapter), "dojo");
        assert_eq!(stage.rewards, Reward::new(40, 15));

        assert_eq!(library.enemy("brute").unwrap().max_health, 120.0);
        assert_eq!(library.enemy("frost_king").unwrap().max_health, 200.0);
        assert!(library.enemy("nobody").is_none());
    }

    #[test]
    fn test_load_dir_missing_abilities() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(PLAYERS_FILE), PLAYERS).unwrap();
        let err = ContentLibrary::load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_load_dir_empty_abilities() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(ABILITIES_FILE), "[]").unwrap();
        fs::write(dir.path().join(PLAYERS_FILE), PLAYERS).unwrap();
        let err = ContentLibrary::load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Empty("ability")));
    }

    #[test]
    fn test_load_dir_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(ABILITIES_FILE), "{ not json").unwrap();
        fs::write(dir.path().join(PLAYERS_FILE), PLAYERS).unwrap();
        let err = ContentLibrary::load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
        assert!(err.to_string().contains(ABILITIES_FILE));
    }

    // ---- Content ----

    #[test]
    fn test_raid_boss_combatant() {
        let boss = RaidBoss {
            id: "frost_king".into(),
            name: "Frost King".into(),
            max_health: 200.0,
            attack: 15.0,
            background: "ice".into(),
            poses: ["idle"].iter().map(|p| p.to_string()).collect(),
        };
        let fighter = boss.to_combatant(1.5);
        assert_eq!(fighter.max_health, 300.0);
        assert_eq!(fighter.attack, 22.5);
        assert!(fighter.can_draw_from("frost_king"));
        assert!(fighter.can_draw_from("boss"));
        assert!(fighter.can_draw_from("generic"));
    }

    #[test]
    fn test_event_fallback_enemy() {
        let event = GameEvent {
            id: "e1".into(),
            title: "Night Market".into(),
            description: String::new(),
            enemy_id: None,
            background: "market".into(),
        };
        let enemy = event.fallback_enemy();
        assert_eq!(enemy.name, "Night Market");
        assert_eq!(enemy.max_health, 100.0);
        assert_eq!(enemy.attack, 20.0);
    }

    fn stage(boss: bool) -> StoryStage {
        StoryStage {
            id: "s1".into(),
            title: "Gatekeeper".into(),
            enemy: "story_gatekeeper".into(),
            base_health: 100.0,
            base_attack: 10.0,
            boss,
            difficulties: vec![StoryDifficulty::Normal, StoryDifficulty::Boss],
            recommended_level: 3,
            unlocks_character: None,
            rewards: Reward::new(40, 15),
            background: None,
        }
    }

    #[test]
    fn test_story_enemy_difficulty_multipliers() {
        let normal = stage(false).make_enemy(StoryDifficulty::Normal);
        assert_eq!(normal.max_health, 100.0);
        assert_eq!(normal.attack, 10.0);
        assert!(!normal.supports_pose("special"));

        let elite = stage(false).make_enemy(StoryDifficulty::Elite);
        assert!((elite.max_health - 130.0).abs() < 1e-9);
        assert!((elite.attack - 12.0).abs() < 1e-9);

        let boss = stage(true).make_enemy(StoryDifficulty::Boss);
        assert_eq!(boss.max_health, 200.0);
        assert_eq!(boss.attack, 15.0);
        assert!(boss.supports_pose("special"));
        assert_eq!(boss.id, "story_gatekeeper");
    }

    #[test]
    fn test_difficulty_rating_boundaries() {
        assert_eq!(DifficultyRating::evaluate(10, 4), DifficultyRating::Easy);
        assert_eq!(DifficultyRating::evaluate(9, 4), DifficultyRating::Fair);
        assert_eq!(DifficultyRating::evaluate(6, 4), DifficultyRating::Fair);
        assert_eq!(DifficultyRating::evaluate(5, 4), DifficultyRating::Hard);
        assert_eq!(DifficultyRating::evaluate(2, 4), DifficultyRating::Hard);
        assert_eq!(DifficultyRating::evaluate(1, 4), DifficultyRating::Impossible);
        assert_eq!(DifficultyRating::Impossible.label(), "SUICIDE");
    }

    // ---- Progress ----

    #[test]
    fn test_level_thresholds() {
        assert_eq!(level_for_xp(0), 1);
        assert_eq!(level_for_xp(99), 1);
        assert_eq!(level_for_xp(100), 2);
        assert_eq!(level_for_xp(449), 3);
        assert_eq!(level_for_xp(1000), 6);
        assert_eq!(level_for_xp(50_000), 6);
    }

    #[test]
    fn test_progress_rewards_and_level() {
        let mut progress = PlayerProgress::default();
        progress.add_xp(75);
        progress.add_xp(75);
        progress.add_coins(20);
        assert_eq!(progress.xp, 150);
        assert_eq!(progress.coins, 20);
        assert_eq!(progress.player_level(), 2);
        assert_eq!(progress.unlocked_levels, 2);

        progress.add_xp(0);
        assert_eq!(progress.xp, 150);
    }

    #[test]
    fn test_progress_milestones_are_idempotent() {
        let mut progress = PlayerProgress::new("tekra_core");
        progress.complete_stage("s1");
        progress.complete_stage("s1");
        progress.unlock_character("kaze");
        progress.unlock_character("kaze");
        progress.unlock_character("tekra_core");
        assert_eq!(progress.completed_stages, vec!["s1".to_string()]);
        assert_eq!(
            progress.unlocked_characters,
            vec!["tekra_core".to_string(), "kaze".to_string()]
        );
        assert!(progress.is_stage_completed("s1"));
        assert!(progress.is_character_unlocked("kaze"));
    }
}
