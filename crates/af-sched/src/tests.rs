//! Unit tests for af-sched.

mod helpers {
    use af_core::GridPoint;
    use af_graph::{FarmGraph, FarmGraphBuilder};
    use af_route::{select_paths, PathSet};

    fn farm(rooms: &[&str], tunnels: &[(&str, &str)]) -> FarmGraph {
        let mut b = FarmGraphBuilder::new();
        for name in rooms {
            b.add_room(name, GridPoint::new(0, 0)).unwrap();
        }
        b.mark_start(b.room_id(rooms[0]).unwrap()).unwrap();
        b.mark_end(b.room_id(rooms[rooms.len() - 1]).unwrap()).unwrap();
        for &(a, c) in tunnels {
            let a = b.room_id(a).unwrap();
            let c = b.room_id(c).unwrap();
            b.add_tunnel(a, c).unwrap();
        }
        b.build().unwrap()
    }

    /// Two disjoint 2-hop routes.
    pub fn diamond_set(ants: u32) -> (FarmGraph, PathSet) {
        let g = farm(
            &["start", "a", "b", "end"],
            &[("start", "a"), ("a", "end"), ("start", "b"), ("b", "end")],
        );
        let set = select_paths(&g, ants, &Default::default()).unwrap();
        (g, set)
    }

    /// One 2-hop route only.
    pub fn line_set(ants: u32) -> (FarmGraph, PathSet) {
        let g = farm(&["start", "mid", "end"], &[("start", "mid"), ("mid", "end")]);
        let set = select_paths(&g, ants, &Default::default()).unwrap();
        (g, set)
    }
}

// ── Assignment ────────────────────────────────────────────────────────────────

mod assignment {
    use af_core::{AntId, Turn};
    use af_route::PathSet;

    use crate::{AntAssignment, SchedError};

    #[test]
    fn zero_ants_zero_turns() {
        let (_, set) = super::helpers::diamond_set(2);
        let a = AntAssignment::new(&set, 0).unwrap();
        assert_eq!(a.ant_count(), 0);
        assert_eq!(a.total_turns(), Turn::ZERO);
    }

    #[test]
    fn empty_set_with_ants_rejected() {
        let set = PathSet::default();
        assert!(matches!(
            AntAssignment::new(&set, 3),
            Err(SchedError::EmptyPathSet { ants: 3 })
        ));
    }

    #[test]
    fn splits_evenly_across_equal_paths() {
        let (_, set) = super::helpers::diamond_set(2);
        let a = AntAssignment::new(&set, 2).unwrap();
        assert_eq!(a.path_for(AntId(0)), 0);
        assert_eq!(a.path_for(AntId(1)), 1);
        assert_eq!(a.total_turns(), Turn(2));
    }

    #[test]
    fn ties_go_to_the_shortest_path() {
        // With equal projected completions the first (shortest) path wins,
        // so ant 0 always lands on path 0.
        let (_, set) = super::helpers::diamond_set(4);
        let a = AntAssignment::new(&set, 4).unwrap();
        assert_eq!(a.path_for(AntId(0)), 0);
        assert_eq!(a.ants_on(0).len(), 2);
        assert_eq!(a.ants_on(1).len(), 2);
        // Two ants per 2-hop path: 2 + 2 − 1 = 3 turns.
        assert_eq!(a.total_turns(), Turn(3));
    }

    #[test]
    fn single_path_queues_everyone() {
        let (_, set) = super::helpers::line_set(3);
        let a = AntAssignment::new(&set, 3).unwrap();
        assert_eq!(a.ants_on(0), &[AntId(0), AntId(1), AntId(2)]);
        // 3 ants over 2 hops: 3 + 2 − 1 = 4 turns.
        assert_eq!(a.total_turns(), Turn(4));
    }

    #[test]
    fn total_matches_projection_formula() {
        for ants in [1, 2, 3, 5, 8, 13] {
            let (_, set) = super::helpers::diamond_set(ants);
            let a = AntAssignment::new(&set, ants).unwrap();
            assert_eq!(a.total_turns(), set.projected_turns(ants), "ants = {ants}");
        }
    }
}

// ── Turn planning ─────────────────────────────────────────────────────────────

mod planning {
    use af_core::{AntId, Turn};

    use crate::{AntAssignment, AntMove, TurnPlanner};

    fn all_turns(planner: &mut TurnPlanner) -> Vec<(Turn, Vec<AntMove>)> {
        std::iter::from_fn(|| planner.next_turn()).collect()
    }

    #[test]
    fn diamond_two_ants_two_turns() {
        let (g, set) = super::helpers::diamond_set(2);
        let assignment = AntAssignment::new(&set, 2).unwrap();
        let mut planner = TurnPlanner::new(&set, &assignment);

        let turns = all_turns(&mut planner);
        assert_eq!(turns.len(), 2);
        assert!(planner.is_done());

        // Turn 1: both ants step onto their interior rooms.
        let (t1, moves1) = &turns[0];
        assert_eq!(*t1, Turn(1));
        let interiors: Vec<_> = moves1.iter().map(|m| g.room_name(m.dest)).collect();
        assert_eq!(moves1.len(), 2);
        assert!(interiors.contains(&"a") && interiors.contains(&"b"));

        // Turn 2: both reach the end.
        let (_, moves2) = &turns[1];
        assert!(moves2.iter().all(|m| m.dest == g.end()));
    }

    #[test]
    fn one_release_per_path_per_turn() {
        let (g, set) = super::helpers::line_set(3);
        let assignment = AntAssignment::new(&set, 3).unwrap();
        let mut planner = TurnPlanner::new(&set, &assignment);

        let turns = all_turns(&mut planner);
        assert_eq!(turns.len(), 4); // 3 + 2 − 1

        // Exactly one ant enters the interior room each of turns 1–3.
        let mid = g.room_id("mid").unwrap();
        for (i, (_, moves)) in turns.iter().take(3).enumerate() {
            let entering: Vec<_> = moves.iter().filter(|m| m.dest == mid).collect();
            assert_eq!(entering.len(), 1, "turn {}", i + 1);
            assert_eq!(entering[0].ant, AntId(i as u32));
        }
    }

    #[test]
    fn moves_sorted_by_ant_id() {
        let (_, set) = super::helpers::diamond_set(6);
        let assignment = AntAssignment::new(&set, 6).unwrap();
        let mut planner = TurnPlanner::new(&set, &assignment);
        while let Some((_, moves)) = planner.next_turn() {
            assert!(moves.windows(2).all(|w| w[0].ant < w[1].ant));
        }
    }

    #[test]
    fn turn_count_matches_assignment() {
        for ants in [1, 2, 4, 7] {
            let (_, set) = super::helpers::diamond_set(ants);
            let assignment = AntAssignment::new(&set, ants).unwrap();
            let mut planner = TurnPlanner::new(&set, &assignment);
            let mut last = Turn::ZERO;
            while let Some((turn, _)) = planner.next_turn() {
                last = turn;
            }
            assert_eq!(last, assignment.total_turns(), "ants = {ants}");
        }
    }

    #[test]
    fn zero_ants_yields_no_turns() {
        let (_, set) = super::helpers::diamond_set(2);
        let assignment = AntAssignment::new(&set, 0).unwrap();
        let mut planner = TurnPlanner::new(&set, &assignment);
        assert!(planner.is_done());
        assert!(planner.next_turn().is_none());
    }
}
