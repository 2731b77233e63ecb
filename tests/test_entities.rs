use coin_collector::entities::*;

#[test]
fn entity_clone_and_eq() {
    // Enums derive PartialEq — equality comparisons must work
    assert_eq!(ObjectKind::Coin, ObjectKind::Coin);
    assert_ne!(ObjectKind::Coin, ObjectKind::Monster);
    assert_eq!(SpriteKind::Robot, SpriteKind::Robot);
    assert_ne!(SpriteKind::Coin, SpriteKind::Monster);
    assert_eq!(GameKey::Left, GameKey::Left);
    assert_ne!(GameKey::Left, GameKey::Right);
    assert_eq!(LoopSignal::Continue, LoopSignal::Continue);
    assert_ne!(LoopSignal::Continue, LoopSignal::Terminate);
    assert_eq!(
        InputEvent::KeyDown(GameKey::Left),
        InputEvent::KeyDown(GameKey::Left)
    );
    assert_ne!(
        InputEvent::KeyDown(GameKey::Left),
        InputEvent::KeyUp(GameKey::Left)
    );

    // Clone must produce an equal value
    let kind = ObjectKind::Monster;
    assert_eq!(kind.clone(), ObjectKind::Monster);
}

#[test]
fn sprite_table_enum_lookup() {
    let table = SpriteTable::default();
    assert_eq!(table.size(SpriteKind::Robot), table.robot);
    assert_eq!(table.size(SpriteKind::Coin), table.coin);
    assert_eq!(table.size(SpriteKind::Monster), table.monster);
}

#[test]
fn default_sprite_dimensions_are_positive() {
    let table = SpriteTable::default();
    for kind in [SpriteKind::Robot, SpriteKind::Coin, SpriteKind::Monster] {
        let size = table.size(kind);
        assert!(size.width > 0);
        assert!(size.height > 0);
    }
}

#[test]
fn game_state_clone_is_independent() {
    let original = GameState {
        player: Player {
            x: 0,
            y: 420,
            moving_left: false,
            moving_right: false,
            lives: 3,
        },
        coins: FallingObjectSet::empty(ObjectKind::Coin),
        monsters: FallingObjectSet::empty(ObjectKind::Monster),
        score: 0,
        missed_coins: 0,
        last_spawn_ms: 0,
        width: 640,
        height: 480,
        sprites: SpriteTable::default(),
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.x = 99;
    cloned.score = 999;
    cloned.coins.objects.push(FallingObject { x: 5, y: 5 });

    assert_eq!(original.player.x, 0);
    assert_eq!(original.score, 0);
    assert!(original.coins.objects.is_empty());
}
