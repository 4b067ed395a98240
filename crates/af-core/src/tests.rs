//! Unit tests for af-core.

// ── Typed IDs ─────────────────────────────────────────────────────────────────

mod ids {
    use crate::{AntId, RoomId, TunnelId};

    #[test]
    fn index_roundtrip() {
        let r = RoomId(7);
        assert_eq!(r.index(), 7);
        assert_eq!(RoomId::try_from(7usize).unwrap(), r);
        assert_eq!(usize::from(r), 7);
    }

    #[test]
    fn default_is_invalid() {
        assert_eq!(RoomId::default(), RoomId::INVALID);
        assert_eq!(TunnelId::default(), TunnelId::INVALID);
        assert_eq!(AntId::default(), AntId::INVALID);
    }

    #[test]
    fn ids_are_ordered() {
        assert!(RoomId(1) < RoomId(2));
        assert!(RoomId(2) < RoomId::INVALID);
    }

    #[test]
    fn ant_number_is_one_based() {
        assert_eq!(AntId(0).number(), 1);
        assert_eq!(AntId(41).number(), 42);
    }

    #[test]
    fn display_includes_type_name() {
        assert_eq!(RoomId(3).to_string(), "RoomId(3)");
    }
}

// ── Turn arithmetic ───────────────────────────────────────────────────────────

mod turn {
    use crate::Turn;

    #[test]
    fn offset_and_add() {
        assert_eq!(Turn::ZERO.offset(5), Turn(5));
        assert_eq!(Turn(2) + 3, Turn(5));
    }

    #[test]
    fn sub_counts_elapsed_turns() {
        assert_eq!(Turn(9) - Turn(4), 5);
    }

    #[test]
    fn display() {
        assert_eq!(Turn(3).to_string(), "turn 3");
    }
}

// ── SolveConfig validation ────────────────────────────────────────────────────

mod config {
    use crate::{ConfigError, SolveConfig};

    #[test]
    fn default_is_valid() {
        assert!(SolveConfig::default().validate().is_ok());
    }

    #[test]
    fn path_bound_below_two_rejected() {
        let cfg = SolveConfig { max_path_rooms: Some(1), ..Default::default() };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::PathBoundTooSmall(1))
        ));
    }

    #[test]
    fn path_bound_of_two_accepted() {
        // A direct start-end tunnel is a 2-room path; the tightest legal bound.
        let cfg = SolveConfig { max_path_rooms: Some(2), ..Default::default() };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_candidate_cap_rejected() {
        let cfg = SolveConfig { max_candidate_paths: 0, ..Default::default() };
        assert!(matches!(cfg.validate(), Err(ConfigError::ZeroCandidateCap)));
    }
}

// ── GridPoint ─────────────────────────────────────────────────────────────────

mod grid {
    use crate::GridPoint;

    #[test]
    fn display() {
        assert_eq!(GridPoint::new(3, -4).to_string(), "(3, -4)");
    }
}
