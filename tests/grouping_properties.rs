// Property checks over generated rosters: every run must conserve people,
// respect the size bounds and satisfy the role minimums in every group
use std::collections::HashMap;

use group_planner::models::{Location, MeetingPoint, Person, Role};
use group_planner::utils::seed::RandomSeed;
use group_planner::utils::travel_cost::SpeedModel;
use group_planner::{meets_requirements, AutoGrouper, GroupingConfig, GroupingOutcome, Strategy};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn generate_roster(seed: u64, count: u32) -> (Vec<Person>, Vec<MeetingPoint>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let center = Location::new(50.85, 4.35);

    let people = (0..count)
        .map(|id| {
            let location = Location::new(
                center.lat + rng.gen_range(-0.05..0.05),
                center.lon + rng.gen_range(-0.08..0.08),
            );
            let roles: Vec<Role> = Role::ALL
                .iter()
                .copied()
                .filter(|_| rng.gen_bool(0.3))
                .collect();
            Person::with_roles(id, format!("Person {}", id), location, &roles)
        })
        .collect();

    let meeting_points = (0..4)
        .map(|id| {
            let location = Location::new(
                center.lat + rng.gen_range(-0.04..0.04),
                center.lon + rng.gen_range(-0.06..0.06),
            );
            MeetingPoint::new(100 + id, format!("Hall {}", id), location)
        })
        .collect();

    (people, meeting_points)
}

fn config() -> GroupingConfig {
    let mut config = GroupingConfig::default();
    config.distance_threshold_km = 3.0;
    config.min_group_size = 4;
    config.max_group_size = 9;
    config.min_elders = 1;
    config.min_leaders = 1;
    config.min_helpers = 1;
    config
}

fn check_outcome(outcome: &GroupingOutcome, people: &[Person], config: &GroupingConfig) {
    let by_id: HashMap<u32, &Person> = people.iter().map(|p| (p.id, p)).collect();

    // Conservation: each person exactly once across groups and unassigned
    let mut seen: Vec<u32> = outcome
        .groups
        .iter()
        .flat_map(|g| g.members.iter().copied())
        .chain(outcome.unassigned.iter().copied())
        .collect();
    seen.sort_unstable();
    let mut expected: Vec<u32> = people.iter().map(|p| p.id).collect();
    expected.sort_unstable();
    assert_eq!(seen, expected);

    for group in &outcome.groups {
        assert!(group.size() >= config.min_group_size);
        assert!(group.size() <= config.max_group_size);

        let members: Vec<&Person> = group.members.iter().map(|id| by_id[id]).collect();
        assert!(meets_requirements(members.iter().copied(), config));
        assert!(members.iter().all(|p| p.group == Some(group.id)));
    }

    for id in &outcome.unassigned {
        assert_eq!(by_id[id].group, None);
    }
}

#[test]
fn test_proximity_properties() {
    for seed in 0..8 {
        let (mut people, mut meeting_points) = generate_roster(seed, 60);
        let config = config();

        let outcome = AutoGrouper::new(config.clone())
            .with_seed_selector(RandomSeed::seeded(seed))
            .auto_group(
                &mut people,
                &mut meeting_points,
                Strategy::ProximityOnly,
                true,
            )
            .unwrap();

        check_outcome(&outcome, &people, &config);
        assert!(outcome.groups.iter().all(|g| g.meeting_point.is_none()));
    }
}

#[test]
fn test_meeting_anchored_properties() {
    for seed in 0..8 {
        let (mut people, mut meeting_points) = generate_roster(seed, 60);
        let config = config();

        let outcome = AutoGrouper::new(config.clone())
            .with_estimator(SpeedModel::walking())
            .with_seed_selector(RandomSeed::seeded(seed))
            .auto_group(
                &mut people,
                &mut meeting_points,
                Strategy::MeetingAnchored,
                true,
            )
            .unwrap();

        check_outcome(&outcome, &people, &config);

        // An anchor is used at most once and is written back
        let mut anchors: Vec<u32> = outcome
            .anchored_groups()
            .filter_map(|g| g.meeting_point)
            .collect();
        let anchored = anchors.len();
        anchors.sort_unstable();
        anchors.dedup();
        assert_eq!(anchors.len(), anchored);
        for group in outcome.anchored_groups() {
            let anchor = meeting_points
                .iter()
                .find(|m| Some(m.id) == group.meeting_point)
                .unwrap();
            assert_eq!(anchor.group, Some(group.id));
        }
    }
}

#[test]
fn test_anchored_groups_come_first() {
    let (mut people, mut meeting_points) = generate_roster(3, 80);

    let outcome = AutoGrouper::new(config())
        .auto_group(
            &mut people,
            &mut meeting_points,
            Strategy::MeetingAnchored,
            true,
        )
        .unwrap();

    let first_unanchored = outcome
        .groups
        .iter()
        .position(|g| g.meeting_point.is_none())
        .unwrap_or(outcome.groups.len());
    assert!(outcome.groups[first_unanchored..]
        .iter()
        .all(|g| g.meeting_point.is_none()));
}

#[test]
fn test_keep_existing_leaves_earlier_groups_alone() {
    let (mut people, mut meeting_points) = generate_roster(9, 40);
    let config = config();
    let mut grouper = AutoGrouper::new(config.clone());

    let first = grouper
        .auto_group(
            &mut people,
            &mut meeting_points,
            Strategy::MeetingAnchored,
            true,
        )
        .unwrap();
    let before: Vec<_> = people.iter().map(|p| p.group).collect();

    let newcomers = generate_roster(10, 12).0.into_iter().map(|mut p| {
        p.id += 1000;
        p
    });
    people.extend(newcomers);

    match grouper.auto_group(
        &mut people,
        &mut meeting_points,
        Strategy::ProximityOnly,
        false,
    ) {
        Ok(second) => {
            assert_eq!(second.retained.len(), before.iter().filter(|g| g.is_some()).count());
            let highest = first.groups.iter().map(|g| g.id).max().unwrap_or(0);
            assert!(second.groups.iter().all(|g| g.id > highest));
            assert!(second
                .groups
                .iter()
                .flat_map(|g| g.members.iter())
                .all(|id| *id >= 1000 || before[*id as usize].is_none()));
        }
        Err(err) => panic!("second run failed: {}", err),
    }

    for (person, group) in people.iter().zip(&before) {
        if group.is_some() {
            assert_eq!(person.group, *group);
        }
    }
}
