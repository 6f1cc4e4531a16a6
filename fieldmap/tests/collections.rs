//! Element-wise mapping of `Vec` values.

use fieldmap::{MapError, Mapper, Reflect};
use rstest::{fixture, rstest};

#[derive(Clone, Default, Reflect)]
struct Employee {
    name: String,
    salary: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Reflect)]
struct Badge {
    name: String,
}

#[derive(Clone, Default, Reflect)]
struct Team {
    members: Vec<Employee>,
}

#[derive(Clone, Debug, Default, PartialEq, Reflect)]
struct Roster {
    members: Vec<Badge>,
}

#[fixture]
fn mapper() -> Mapper {
    Mapper::default()
}

fn badge(name: &str) -> Badge {
    Badge { name: name.into() }
}

fn employee(name: &str) -> Employee {
    Employee {
        name: name.into(),
        salary: 1,
    }
}

#[rstest]
fn elements_keep_length_and_order(mapper: Mapper) -> anyhow::Result<()> {
    let team = Team {
        members: vec![employee("Ada"), employee("Grace"), employee("Edsger")],
    };
    let roster: Roster = mapper.map_into(&team)?;
    assert_eq!(
        roster.members,
        vec![badge("Ada"), badge("Grace"), badge("Edsger")]
    );
    Ok(())
}

#[rstest]
fn mapping_replaces_existing_elements(mapper: Mapper) -> anyhow::Result<()> {
    let mut roster = Roster {
        members: vec![badge("stale"), badge("also stale")],
    };
    mapper.map(&Team { members: vec![employee("Ada")] }, &mut roster)?;
    assert_eq!(roster.members, vec![badge("Ada")]);
    Ok(())
}

#[rstest]
fn empty_source_with_compatible_elements_empties_the_destination(
    mapper: Mapper,
) -> anyhow::Result<()> {
    let mut badges = vec![badge("stale")];
    mapper.map(&Vec::<Employee>::new(), &mut badges)?;
    assert!(badges.is_empty());
    Ok(())
}

#[rstest]
fn empty_source_with_incompatible_elements_fails(mapper: Mapper) {
    let mut numbers: Vec<u32> = vec![1];
    assert_eq!(
        mapper.map(&Vec::<String>::new(), &mut numbers),
        Err(MapError::UnsupportedKind)
    );
    assert_eq!(numbers, vec![1]);
}

#[rstest]
fn failing_element_leaves_the_destination_unchanged(mapper: Mapper) {
    let mut wide: Vec<i64> = vec![9];
    assert_eq!(
        mapper.map(&vec![1_i32, 2], &mut wide),
        Err(MapError::UnsupportedKind)
    );
    assert_eq!(wide, vec![9]);
}

#[rstest]
fn non_collection_source_is_rejected(mapper: Mapper) {
    let mut bytes: Vec<u8> = Vec::new();
    assert_eq!(
        mapper.map(&5_u8, &mut bytes),
        Err(MapError::UnsupportedKind)
    );
}

#[rstest]
fn optional_elements_keep_their_gaps(mapper: Mapper) -> anyhow::Result<()> {
    let source = vec![Some(employee("Ada")), None, Some(employee("Grace"))];
    let mut badges: Vec<Option<Badge>> = Vec::new();
    mapper.map(&source, &mut badges)?;
    assert_eq!(badges, vec![Some(badge("Ada")), None, Some(badge("Grace"))]);
    Ok(())
}

#[derive(Clone, Default, Reflect)]
struct Readings {
    label: String,
    values: Vec<i32>,
}

#[derive(Clone, Debug, Default, PartialEq, Reflect)]
struct WideReadings {
    label: String,
    values: Vec<i64>,
}

#[rstest]
fn failing_collection_field_is_skipped_inside_a_struct(mapper: Mapper) -> anyhow::Result<()> {
    let readings = Readings {
        label: "probe".into(),
        values: vec![1, 2],
    };
    let mut wide = WideReadings::default();
    let report = mapper.map_with_report(&readings, &mut wide)?;
    assert_eq!(
        wide,
        WideReadings {
            label: "probe".into(),
            values: Vec::new()
        }
    );
    let paths: Vec<String> = report.iter().map(|skip| skip.path().to_string()).collect();
    assert_eq!(paths, vec!["values"]);
    Ok(())
}
