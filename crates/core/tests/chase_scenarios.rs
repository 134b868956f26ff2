use glam::Vec3;
use warren_core::{
    FollowConfig, PathFollower, RoomBox, RoomRayCaster, Steering, TargetRegistry, build_room,
};

const DT: f32 = 0.1;

/// U-shaped room: two vertical legs joined by a bridge across the top. An
/// agent in one leg cannot see into the other until it rounds the corner.
fn u_shaped_room() -> warren_core::Room {
    build_room(vec![
        RoomBox { left: 0, right: 6, bottom: 0, top: 6 },
        RoomBox { left: 0, right: 6, bottom: 6, top: 12 },
        RoomBox { left: 6, right: 12, bottom: 6, top: 12 },
        RoomBox { left: 12, right: 18, bottom: 6, top: 12 },
        RoomBox { left: 12, right: 18, bottom: 0, top: 6 },
    ])
}

fn open_room() -> warren_core::Room {
    build_room(vec![RoomBox { left: -8, right: 8, bottom: -8, top: 8 }])
}

fn step(position: Vec3, facing: f32, speed: f32) -> Vec3 {
    position + Vec3::new(facing.sin(), 0.0, facing.cos()) * speed * DT
}

#[test]
fn test_clear_line_of_sight_walks_straight_without_planning() {
    let room = open_room();
    let rays = RoomRayCaster::new(&room);
    let mut targets = TargetRegistry::new();
    let target = targets.register(Vec3::new(5.0, 0.0, 0.0));

    let mut follower = PathFollower::new(target, FollowConfig::default());
    let mut position = Vec3::new(-5.0, 0.0, 0.0);

    // Run well past several repath intervals: with a clear view the planner
    // must never be consulted and every tick walks toward the target.
    for _ in 0..40 {
        match follower.tick(DT, position, &room, &targets, &rays) {
            Steering::Forward { facing } => {
                position = step(position, facing, follower.config().move_speed);
            }
            Steering::Hold => panic!("sighted follower should never hold"),
        }
        assert!(follower.pending_waypoints().is_empty(), "no path should ever be planned");
    }

    let remaining = Vec3::new(5.0, 0.0, 0.0).distance(position);
    assert!(remaining < 2.0, "follower should close most of the gap, {remaining} left");
}

#[test]
fn test_blocked_view_plans_on_the_first_full_interval() {
    let room = u_shaped_room();
    let rays = RoomRayCaster::new(&room);
    let mut targets = TargetRegistry::new();
    let target = targets.register(Vec3::new(15.0, 0.0, 3.0));

    let config = FollowConfig::default();
    let mut follower = PathFollower::new(target, config);
    let position = Vec3::new(3.0, 0.0, 3.0);

    // Until the repath interval elapses there is no plan, so a blocked
    // follower holds in place.
    let mut elapsed = 0.0;
    while elapsed + DT < config.repath_interval {
        assert_eq!(follower.tick(DT, position, &room, &targets, &rays), Steering::Hold);
        elapsed += DT;
    }

    // The tick that crosses the interval replans and starts moving.
    let steering = follower.tick(DT, position, &room, &targets, &rays);
    assert!(steering.is_moving(), "expected movement after the first replan, got {steering:?}");
    assert!(!follower.pending_waypoints().is_empty());
}

#[test]
fn test_blocked_follower_traverses_the_u_bend_and_reaches_the_target() {
    let room = u_shaped_room();
    let rays = RoomRayCaster::new(&room);
    let mut targets = TargetRegistry::new();
    let target_position = Vec3::new(15.0, 0.0, 3.0);
    let target = targets.register(target_position);

    let mut follower = PathFollower::new(target, FollowConfig::default());
    let mut position = Vec3::new(3.0, 0.0, 3.0);
    let mut advanced_through_waypoints = false;

    for _ in 0..600 {
        if let Steering::Forward { facing } =
            follower.tick(DT, position, &room, &targets, &rays)
        {
            position = step(position, facing, follower.config().move_speed);
        }
        if follower.waypoint_index() > 0 {
            advanced_through_waypoints = true;
        }
        if target_position.distance(position) < 1.0 {
            break;
        }
    }

    assert!(advanced_through_waypoints, "the route around the bend needs waypoints");
    let remaining = target_position.distance(position);
    assert!(remaining < 1.0, "follower never arrived, {remaining} away after the run");
}

#[test]
fn test_waypoint_index_advances_within_the_arrival_radius() {
    let room = u_shaped_room();
    let rays = RoomRayCaster::new(&room);
    let mut targets = TargetRegistry::new();
    let target = targets.register(Vec3::new(15.0, 0.0, 3.0));

    let config = FollowConfig { repath_interval: 0.1, ..FollowConfig::default() };
    let mut follower = PathFollower::new(target, config);

    // First tick replans from the box-0 center, which is itself the first
    // waypoint, so standing on it advances the index immediately.
    let start = Vec3::new(3.0, 0.0, 3.0);
    let steering = follower.tick(0.1, start, &room, &targets, &rays);
    assert!(steering.is_moving());
    assert_eq!(follower.waypoint_index(), 1);
}

#[test]
fn test_destroyed_target_halts_the_follower() {
    let room = open_room();
    let rays = RoomRayCaster::new(&room);
    let mut targets = TargetRegistry::new();
    let target = targets.register(Vec3::new(5.0, 0.0, 0.0));

    let mut follower = PathFollower::new(target, FollowConfig::default());
    let position = Vec3::new(-5.0, 0.0, 0.0);

    assert!(follower.tick(DT, position, &room, &targets, &rays).is_moving());

    targets.remove(target);
    assert_eq!(follower.tick(DT, position, &room, &targets, &rays), Steering::Hold);
}

#[test]
fn test_target_outside_the_room_keeps_the_follower_holding() {
    let room = u_shaped_room();
    let rays = RoomRayCaster::new(&room);
    let mut targets = TargetRegistry::new();
    // Off every box: lookups fail, so replanning never produces a route.
    let target = targets.register(Vec3::new(40.0, 0.0, 35.0));

    let mut follower = PathFollower::new(target, FollowConfig::default());
    let position = Vec3::new(3.0, 0.0, 3.0);

    for _ in 0..30 {
        assert_eq!(follower.tick(DT, position, &room, &targets, &rays), Steering::Hold);
    }
    assert!(follower.pending_waypoints().is_empty());
}
