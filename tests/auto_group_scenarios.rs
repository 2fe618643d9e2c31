// Integration tests for the auto-grouping scenarios
use group_planner::models::{Location, MeetingPoint, Person, Role};
use group_planner::utils::seed::RandomSeed;
use group_planner::utils::travel_cost::CostTable;
use group_planner::{
    auto_group, AutoGrouper, GroupingConfig, GroupingError, GroupingStatus, Strategy,
};

// Roughly 0.11 km per step at this latitude
const STEP: f64 = 0.001;

fn person_near(id: u32, base: &Location, step: u32, roles: &[Role]) -> Person {
    Person::with_roles(
        id,
        format!("Person {}", id),
        Location::new(base.lat + (step % 3) as f64 * STEP, base.lon + (step / 3) as f64 * STEP),
        roles,
    )
}

#[test]
fn test_ten_people_three_elders_proximity() {
    let base = Location::new(52.37, 4.89);
    let mut people: Vec<Person> = (0..10)
        .map(|i| {
            let roles: &[Role] = if i % 3 == 0 && i < 9 { &[Role::Elder] } else { &[] };
            person_near(i, &base, i, roles)
        })
        .collect();
    assert_eq!(people.iter().filter(|p| p.has_role(Role::Elder)).count(), 3);

    let mut config = GroupingConfig::with_sizes(2, 20);
    config.min_elders = 1;

    let outcome =
        auto_group(&mut people, &mut [], &config, Strategy::ProximityOnly, true).unwrap();

    assert_eq!(outcome.status, GroupingStatus::Grouped);
    assert!(!outcome.groups.is_empty());
    for group in &outcome.groups {
        let elders = group
            .members
            .iter()
            .filter(|id| people[**id as usize].has_role(Role::Elder))
            .count();
        assert!(elders >= 1, "group {} has no elder", group.id);
    }
}

#[test]
fn test_single_person_is_insufficient() {
    let mut people = vec![Person::new(1, "Solo", Location::new(0.0, 0.0))];
    people[0].group = Some(5);
    let config = GroupingConfig::with_sizes(2, 10);

    let result = auto_group(&mut people, &mut [], &config, Strategy::ProximityOnly, true);

    assert!(matches!(
        result,
        Err(GroupingError::InsufficientPeople {
            available: 1,
            required: 2
        })
    ));
    assert_eq!(people[0].group, Some(5));
}

#[test]
fn test_tight_cluster_forms_one_group() {
    let base = Location::new(48.8566, 2.3522);
    // All within about 0.3 km of each other
    let mut people: Vec<Person> = (0..5).map(|i| person_near(i, &base, i, &[])).collect();
    let mut config = GroupingConfig::with_sizes(5, 12);
    config.distance_threshold_km = 1.0;

    let outcome =
        auto_group(&mut people, &mut [], &config, Strategy::ProximityOnly, true).unwrap();

    assert_eq!(outcome.groups.len(), 1);
    assert_eq!(outcome.groups[0].size(), 5);
    assert!(outcome.unassigned.is_empty());
}

#[test]
fn test_two_meeting_points_split_ten_ten() {
    let north = Location::new(52.50, 5.00);
    let south = Location::new(52.00, 5.00);
    let mut people: Vec<Person> = (0..10)
        .map(|i| person_near(i, &south, i, &[]))
        .chain((10..20).map(|i| person_near(i, &north, i - 10, &[])))
        .collect();
    let mut meeting_points = vec![
        MeetingPoint::new(1, "North hall", north),
        MeetingPoint::new(2, "South hall", south),
    ];
    let config = GroupingConfig::with_sizes(10, 20);

    let outcome = auto_group(
        &mut people,
        &mut meeting_points,
        &config,
        Strategy::MeetingAnchored,
        true,
    )
    .unwrap();

    assert_eq!(outcome.groups.len(), 2);
    let mut north_members = outcome.groups[0].members.clone();
    north_members.sort_unstable();
    let mut south_members = outcome.groups[1].members.clone();
    south_members.sort_unstable();

    assert_eq!(outcome.groups[0].meeting_point, Some(1));
    assert_eq!(north_members, (10..20).collect::<Vec<u32>>());
    assert_eq!(outcome.groups[1].meeting_point, Some(2));
    assert_eq!(south_members, (0..10).collect::<Vec<u32>>());
    assert_eq!(meeting_points[0].group, Some(outcome.groups[0].id));
    assert_eq!(meeting_points[1].group, Some(outcome.groups[1].id));
}

#[test]
fn test_impossible_requirements_form_nothing() {
    let base = Location::new(40.7128, -74.0060);
    let mut meeting_points = vec![MeetingPoint::new(1, "Hall", base)];
    let mut config = GroupingConfig::with_sizes(2, 10);
    config.min_elders = 5;

    for strategy in [Strategy::ProximityOnly, Strategy::MeetingAnchored] {
        let mut people: Vec<Person> = (0..8)
            .map(|i| {
                let roles: &[Role] = if i < 2 { &[Role::Elder] } else { &[] };
                person_near(i, &base, i, roles)
            })
            .collect();

        let outcome =
            auto_group(&mut people, &mut meeting_points, &config, strategy, true).unwrap();

        assert_eq!(outcome.status, GroupingStatus::NoValidGroupsFormed);
        assert!(outcome.groups.is_empty());
        assert_eq!(outcome.unassigned.len(), 8);
        assert!(people.iter().all(|p| p.group.is_none()));
        assert_eq!(meeting_points[0].group, None);
    }
}

#[test]
fn test_rerun_with_reset_is_idempotent() {
    let base = Location::new(51.5074, -0.1278);
    let mut people: Vec<Person> = (0..9).map(|i| person_near(i, &base, i, &[])).collect();
    let config = GroupingConfig::with_sizes(3, 4);

    let first = auto_group(&mut people, &mut [], &config, Strategy::ProximityOnly, true).unwrap();
    let assigned_once: Vec<_> = people.iter().map(|p| p.group).collect();
    let second = auto_group(&mut people, &mut [], &config, Strategy::ProximityOnly, true).unwrap();
    let assigned_twice: Vec<_> = people.iter().map(|p| p.group).collect();

    assert_eq!(first, second);
    assert_eq!(assigned_once, assigned_twice);
}

#[test]
fn test_family_assignment_untouched() {
    let base = Location::new(51.5074, -0.1278);
    let mut people: Vec<Person> = (0..4).map(|i| person_near(i, &base, i, &[])).collect();
    people[1].family = Some(42);
    let config = GroupingConfig::with_sizes(2, 4);

    AutoGrouper::new(config)
        .with_seed_selector(RandomSeed::seeded(5))
        .auto_group(&mut people, &mut [], Strategy::ProximityOnly, true)
        .unwrap();

    assert_eq!(people[1].family, Some(42));
    assert!(people.iter().all(|p| p.group.is_some()));
}

#[test]
fn test_cost_table_overrides_geographic_ranking() {
    let base = Location::new(45.4642, 9.19);
    let mut people: Vec<Person> = (0..6).map(|i| person_near(i, &base, i, &[])).collect();
    let mut meeting_points = vec![MeetingPoint::new(1, "Hall", base)];
    // Routed times put the farthest people closest to the hall
    let table: CostTable = (0..6)
        .map(|i| ((i, 1), 60.0 - i as f64 * 10.0))
        .collect();
    let config = GroupingConfig::with_sizes(3, 3);

    let outcome = AutoGrouper::new(config)
        .with_estimator(table)
        .auto_group(&mut people, &mut meeting_points, Strategy::MeetingAnchored, true)
        .unwrap();

    assert_eq!(outcome.groups.len(), 2);
    assert_eq!(outcome.groups[0].meeting_point, Some(1));
    assert_eq!(outcome.groups[0].members, vec![5, 4, 3]);
    assert_eq!(outcome.groups[1].meeting_point, None);
    assert_eq!(outcome.groups[1].members, vec![0, 1, 2]);
    assert_eq!(meeting_points[0].group, Some(outcome.groups[0].id));
}
