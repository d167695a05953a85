#[cfg(test)]
mod tests {
    use glam::DVec3;

    use crate::commands::PlayerCommand;
    use crate::components::{Body, Explosion, Ship, Timed};
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::SimEvent;
    use crate::state::{EntityView, FrameSnapshot};
    use crate::tuning::{Lifetimes, Tuning};
    use crate::types::{sign, SimTime};

    #[test]
    fn test_player_command_tagged_json() {
        let cmd = PlayerCommand::FirePlasma {
            direction: DVec3::new(0.1, -0.05, -1.0),
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"type\":\"FirePlasma\""), "got {json}");

        let back: PlayerCommand =
            serde_json::from_str(r#"{"type":"SetTimeScale","scale":2.0}"#).unwrap();
        assert!(matches!(back, PlayerCommand::SetTimeScale { scale } if scale == 2.0));

        let back: PlayerCommand = serde_json::from_str(r#"{"type":"Pause"}"#).unwrap();
        assert!(matches!(back, PlayerCommand::Pause));
    }

    #[test]
    fn test_sim_event_serde() {
        let events = vec![
            SimEvent::ShipSpawned {
                position: DVec3::new(3.0, -4.0, -100.0),
            },
            SimEvent::EnemyFired {
                position: DVec3::new(1.0, 2.0, -20.0),
            },
            SimEvent::PlasmaFired {
                direction: DVec3::new(0.0, 0.0, -1.0),
            },
            SimEvent::ShipDestroyed {
                position: DVec3::ZERO,
            },
        ];
        let json = serde_json::to_string(&events).unwrap();
        let back: Vec<SimEvent> = serde_json::from_str(&json).unwrap();
        assert_eq!(events, back);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        time.advance(0.5);
        time.advance(0.25);
        assert_eq!(time.frame, 2);
        assert_eq!(time.now, 0.75);
        assert_eq!(time.dt, 0.25);
    }

    #[test]
    fn test_sim_time_never_runs_backwards() {
        let mut time = SimTime::default();
        time.advance(1.0);
        time.advance(-0.5);
        assert_eq!(time.now, 1.0);
        assert_eq!(time.dt, 0.0);
        assert_eq!(time.frame, 2);
    }

    #[test]
    fn test_sign_of_zero_is_zero() {
        assert_eq!(sign(0.0), 0.0);
        assert_eq!(sign(-0.0), 0.0);
        assert_eq!(sign(3.5), 1.0);
        assert_eq!(sign(-0.001), -1.0);
    }

    #[test]
    fn test_tuning_defaults_match_constants() {
        let tuning = Tuning::default();
        assert_eq!(tuning.ship_spawn_interval, SHIP_SPAWN_INTERVAL);
        assert_eq!(tuning.hit_radius, HIT_RADIUS);
        assert_eq!(tuning.enemy_target_offset, ENEMY_TARGET_OFFSET);
        assert_eq!(tuning.ttl.for_kind(EntityKind::Ship), SHIP_TTL);
        assert_eq!(tuning.ttl.for_kind(EntityKind::Explosion), EXPLOSION_TTL);
        assert_eq!(tuning.ttl.for_kind(EntityKind::Dust), DUST_TTL);
    }

    #[test]
    fn test_partial_tuning_keeps_defaults() {
        let json = r#"{ "hit_radius": 4.0, "ttl": { "ship": 6.0 } }"#;
        let tuning: Tuning = serde_json::from_str(json).unwrap();
        assert_eq!(tuning.hit_radius, 4.0);
        assert_eq!(tuning.ttl.ship, 6.0);
        assert_eq!(tuning.ttl.dust, Lifetimes::default().dust);
        assert_eq!(tuning.ship_speed, SHIP_SPEED);
    }

    #[test]
    fn test_timed_age() {
        let body = Body::new(2.0, DVec3::ONE);
        assert_eq!(body.position, body.origin);
        assert_eq!(body.age(3.5), 1.5);

        let ship = Ship {
            body: Body::new(4.0, DVec3::ZERO),
            last_fire_time: 5.0,
        };
        assert_eq!(ship.spawn_time(), 4.0);

        let explosion = Explosion::new(1.0, DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(explosion.scale, 0.0);
        assert_eq!(explosion.age(1.25), 0.25);
    }

    #[test]
    fn test_snapshot_entity_count() {
        let view = |kind| EntityView {
            kind,
            position: DVec3::ZERO,
            scale: 1.0,
            age: 0.0,
        };
        let snapshot = FrameSnapshot {
            ships: vec![view(EntityKind::Ship); 2],
            dust: vec![view(EntityKind::Dust); 3],
            explosions: vec![view(EntityKind::Explosion)],
            ..Default::default()
        };
        assert_eq!(snapshot.entity_count(), 6);
        assert_eq!(snapshot.views(EntityKind::Dust).len(), 3);
        assert!(snapshot.views(EntityKind::PlayerProjectile).is_empty());
        assert_eq!(snapshot.phase, GamePhase::Active);
    }
}
