//! End-to-end scenarios across the store and the systems.

use pgg_ecs::components::{PlayerInfo, ProvinceInfo, Renderable, Selected, Transform, layer, palette};
use pgg_ecs::glam::IVec2;
use pgg_ecs::{ComponentKind, EntitySet, GameWorld};
use pgg_systems::hud::{selected_province, turn_panel};
use pgg_systems::selection::select_at;
use pgg_systems::{DrawCommand, MapGenerator, PlayerSpec, TurnSystem, draw_list, spawn_players};

#[test]
fn test_three_by_two_grid_scenario() {
    let tile = 32;
    let mut world = GameWorld::new();
    let mut generator = MapGenerator::new(3, 2, tile, 0.0).with_seed(0);
    generator.update(&mut world);

    let provinces = world.entities_with(&[ComponentKind::ProvinceInfo]);
    assert_eq!(provinces.len(), 6);

    let mut seen = Vec::new();
    for entity in provinces {
        let info = world.get_component::<ProvinceInfo>(entity).unwrap();
        let transform = world.get_component::<Transform>(entity).unwrap();
        let renderable = world.get_component::<Renderable>(entity).unwrap();

        let (x, y) = (transform.position.x / tile, transform.position.y / tile);
        assert_eq!(transform.position, IVec2::new(x * tile, y * tile));
        assert_eq!(info.name, format!("P-{x}-{y}"));
        assert_eq!(renderable.color, palette::PROVINCE_NEUTRAL);
        assert_eq!(renderable.layer, layer::MAP);
        seen.push((x, y));
    }
    seen.sort();
    assert_eq!(seen, vec![(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]);
}

#[test]
fn test_generation_twice_leaves_state_unchanged() {
    let mut world = GameWorld::new();
    let mut generator = MapGenerator::new(8, 5, 16, 0.1).with_seed(99);
    generator.update(&mut world);

    let snapshot = |world: &GameWorld| {
        let mut rows: Vec<(u64, Transform, String)> = world
            .query::<(Transform, ProvinceInfo)>()
            .into_iter()
            .map(|e| {
                (
                    e.id(),
                    *world.get_component::<Transform>(e).unwrap(),
                    world.get_component::<ProvinceInfo>(e).unwrap().name.clone(),
                )
            })
            .collect();
        rows.sort_by_key(|row| row.0);
        (world.entity_count(), rows)
    };

    let before = snapshot(&world);
    generator.update(&mut world);
    assert_eq!(snapshot(&world), before);
}

#[test]
fn test_players_and_map_coexist() {
    let mut world = GameWorld::new();
    let roster = [
        PlayerSpec::named("A").with_turn_order(2),
        PlayerSpec::named("B").with_turn_order(0),
        PlayerSpec::named("C").with_turn_order(1),
    ];
    let players = spawn_players(&mut world, &roster);
    MapGenerator::new(4, 4, 32, 0.0).with_seed(1).update(&mut world);

    let mut turns = TurnSystem::new();
    turns.update(&world);
    assert_eq!(turns.players(), &[players[1], players[2], players[0]]);

    // Players have no transform, so they are not drawn.
    assert_eq!(draw_list(&world).len(), 16);
    assert!(
        draw_list(&world)
            .iter()
            .all(|cmd| matches!(cmd, DrawCommand::Rect { .. }))
    );

    for _ in 0..3 {
        turns.end_turn(&world);
    }
    assert_eq!(turns.turn_number(), Some(2));
    let panel = turn_panel(&world, &turns).unwrap();
    assert_eq!(panel.player_name, "B");
}

#[test]
fn test_capture_and_inspect_province() {
    let mut world = GameWorld::new();
    let players = spawn_players(&mut world, &[PlayerSpec::named("Red")]);
    MapGenerator::new(2, 2, 32, 0.0).with_seed(4).update(&mut world);

    let picked = select_at(&mut world, IVec2::new(40, 40)).unwrap();
    if let Some(info) = world.get_component_mut::<ProvinceInfo>(picked) {
        info.owner = Some(players[0]);
    }
    if let Some(player) = world.get_component_mut::<PlayerInfo>(players[0]) {
        player.gold -= 30;
    }

    let panel = selected_province(&world).unwrap();
    assert_eq!(panel.name, "P-1-1");
    assert_eq!(panel.owner_label(), "Red");
    assert_eq!(panel.owner_color, palette::PLAYER_ONE);
    assert_eq!(
        world.get_component::<PlayerInfo>(players[0]).map(|p| p.gold),
        Some(70)
    );
}

#[test]
fn test_deleted_province_vanishes_everywhere() {
    let mut world = GameWorld::new();
    MapGenerator::new(2, 1, 32, 0.0).with_seed(2).update(&mut world);
    let victim = select_at(&mut world, IVec2::new(1, 1)).unwrap();

    world.delete_entity(victim);
    world.delete_entity(victim);

    assert_eq!(selected_province(&world), None);
    assert_eq!(draw_list(&world).len(), 1);
    assert!(!world.query::<(Transform,)>().contains(&victim));
    assert_eq!(world.query::<(Selected,)>(), EntitySet::new());
    for kind in ComponentKind::ALL {
        assert!(!world.has_kind(victim, kind));
    }
}
