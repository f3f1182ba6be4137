use std::f64::consts::PI;

use salvo::{Board, Coordinate, FireError, PlacementError, Player, Ship, ShotResult};

fn fleet_player() -> Player {
    let mut player = Player::new("toto");
    player.place_ship(Coordinate::new(0, 0), 2, 0.0).unwrap();
    player.place_ship(Coordinate::new(4, 1), 3, PI / 2.0).unwrap();
    player
}

#[test]
fn test_new_player_is_empty() {
    let player = Player::new("toto");
    assert_eq!(player.name(), "toto");
    assert_eq!(player.to_string(), "toto");
    assert!(player.ships().is_empty());
    assert_eq!(player.missed_fire_count(), 0);
    assert_eq!(player.win_count(), 0);
    assert!(player
        .board()
        .cells()
        .iter()
        .all(|c| !c.is_checked() && !c.is_occupied()));
}

#[test]
fn test_place_ship_rejects_overlap() {
    let mut player = fleet_player();
    assert_eq!(
        player.place_ship(Coordinate::new(1, 0), 3, PI / 2.0),
        Err(PlacementError::Overlap(Coordinate::new(1, 0)))
    );
    assert_eq!(player.ships().len(), 2);
    assert_eq!(player.next_ship_id(), 2);
}

#[test]
fn test_add_ship_built_elsewhere() {
    let mut player = Player::new("toto");
    let mut ship = Ship::new(player.next_ship_id(), Coordinate::new(2, 2), 1, 0.0);
    ship.build(player.board()).unwrap();
    assert_eq!(player.add_ship(ship), Ok(()));
    assert_eq!(
        player.receive_fire(Coordinate::new(2, 2)),
        Ok(ShotResult::Sunk)
    );
    assert!(player.loose());
}

#[test]
fn test_add_ship_rejects_foreign_id() {
    let mut player = Player::new("toto");
    let mut ship = Ship::new(7, Coordinate::new(2, 2), 1, 0.0);
    ship.build(player.board()).unwrap();
    assert_eq!(
        player.add_ship(ship),
        Err(PlacementError::UnexpectedId {
            expected: 0,
            found: 7
        })
    );
    assert!(player.ships().is_empty());
    assert!(!player.board().get_cell(Coordinate::new(2, 2)).unwrap().is_occupied());
    assert_eq!(player.receive_fire(Coordinate::new(2, 2)), Ok(ShotResult::Miss));
}

#[test]
fn test_add_ship_rejects_overlap_with_fleet() {
    let mut player = Player::new("toto");
    player.place_ship(Coordinate::new(0, 0), 1, 0.0).unwrap();

    // built against an empty board, so it does not see the first ship
    let mut ship = Ship::new(1, Coordinate::new(0, 0), 2, 0.0);
    ship.build(&Board::new()).unwrap();
    let before = player.board().clone();
    assert_eq!(
        player.add_ship(ship),
        Err(PlacementError::Overlap(Coordinate::new(0, 0)))
    );
    assert_eq!(player.ships().len(), 1);
    assert_eq!(player.board(), &before);

    assert_eq!(player.receive_fire(Coordinate::new(0, 0)), Ok(ShotResult::Sunk));
    assert!(player.loose());
}

#[test]
fn test_add_ship_rejects_unbuilt_ship() {
    let mut player = Player::new("toto");
    let ship = Ship::new(0, Coordinate::new(1, 1), 2, 0.0);
    assert_eq!(player.add_ship(ship), Err(PlacementError::NotBuilt));
    assert!(player.ships().is_empty());
}

#[test]
fn test_receive_fire_miss_hit_sunk() {
    let mut player = fleet_player();
    assert_eq!(player.receive_fire(Coordinate::new(2, 2)), Ok(ShotResult::Miss));
    assert_eq!(player.receive_fire(Coordinate::new(0, 0)), Ok(ShotResult::Hit));
    assert!(player.ships()[0].parts()[0].is_hit());
    assert!(!player.ships()[0].sank());
    assert_eq!(player.receive_fire(Coordinate::new(1, 0)), Ok(ShotResult::Sunk));
    assert!(player.ships()[0].sank());
}

#[test]
fn test_receive_fire_twice_is_rejected() {
    let mut player = fleet_player();
    let target = Coordinate::new(4, 2);
    assert_eq!(player.receive_fire(target), Ok(ShotResult::Hit));
    assert_eq!(
        player.receive_fire(target),
        Err(FireError::AlreadyFired(target))
    );
    let hits: usize = player
        .ships()
        .iter()
        .map(|s| s.parts().iter().filter(|p| p.is_hit()).count())
        .sum();
    assert_eq!(hits, 1);
}

#[test]
fn test_loose_only_when_every_ship_sank() {
    let mut player = fleet_player();
    assert!(!player.loose());
    player.receive_fire(Coordinate::new(0, 0)).unwrap();
    player.receive_fire(Coordinate::new(1, 0)).unwrap();
    assert!(!player.loose(), "one ship still afloat");
    for y in 1..4 {
        player.receive_fire(Coordinate::new(4, y)).unwrap();
    }
    assert!(player.loose());
}

#[test]
fn test_counters() {
    let mut player = Player::new("toto");
    player.add_miss();
    player.add_miss();
    assert_eq!(player.missed_fire_count(), 2);
    player.reset_miss();
    assert_eq!(player.missed_fire_count(), 0);
    player.add_win();
    assert_eq!(player.win_count(), 1);
}

#[test]
fn test_reset_keeps_name_and_wins() {
    let mut player = fleet_player();
    player.receive_fire(Coordinate::new(0, 0)).unwrap();
    player.add_miss();
    player.add_win();
    player.reset();

    assert_eq!(player.name(), "toto");
    assert_eq!(player.win_count(), 1);
    assert_eq!(player.missed_fire_count(), 0);
    assert!(player.ships().is_empty());
    assert!(player
        .board()
        .cells()
        .iter()
        .all(|c| !c.is_checked() && !c.is_occupied()));
}

#[test]
fn test_hint_points_at_checked_cell() {
    let mut player = fleet_player();
    assert_eq!(player.hint(), None);
    player.receive_fire(Coordinate::new(3, 3)).unwrap();
    player.receive_fire(Coordinate::new(0, 4)).unwrap();
    assert_eq!(player.hint(), Some(Coordinate::new(3, 3)));
}
