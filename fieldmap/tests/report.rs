//! Diagnostics for fields skipped during best-effort mapping.

use fieldmap::{MapError, Mapper, PathSegment, Reflect};
use rstest::{fixture, rstest};

#[derive(Clone, Default, Reflect)]
struct RawItem {
    name: String,
    age: String,
}

#[derive(Clone, Debug, Default, PartialEq, Reflect)]
struct Item {
    name: String,
    age: u32,
}

#[derive(Clone, Default, Reflect)]
struct RawBatch {
    items: Vec<RawItem>,
}

#[derive(Clone, Debug, Default, PartialEq, Reflect)]
struct Batch {
    items: Vec<Item>,
}

#[fixture]
fn mapper() -> Mapper {
    Mapper::default()
}

fn raw(name: &str, age: &str) -> RawItem {
    RawItem {
        name: name.into(),
        age: age.into(),
    }
}

#[fixture]
fn batch() -> RawBatch {
    RawBatch {
        items: vec![raw("Ada", "36"), raw("Grace", "85")],
    }
}

#[rstest]
fn report_lists_skipped_fields_with_paths(mapper: Mapper, batch: RawBatch) -> anyhow::Result<()> {
    let mut destination = Batch::default();
    let report = mapper.map_with_report(&batch, &mut destination)?;

    let rendered: Vec<String> = report.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            "items[0].age: destination kind is not supported for this source",
            "items[1].age: destination kind is not supported for this source",
        ]
    );
    let second = report
        .skipped()
        .get(1)
        .ok_or_else(|| anyhow::anyhow!("second skipped field missing"))?;
    assert_eq!(
        second.path().segments(),
        &[
            PathSegment::Field("items"),
            PathSegment::Index(1),
            PathSegment::Field("age")
        ]
    );
    assert_eq!(second.error(), MapError::UnsupportedKind);

    let names: Vec<&str> = destination.items.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, vec!["Ada", "Grace"]);
    Ok(())
}

#[rstest]
fn complete_mapping_has_an_empty_report(mapper: Mapper) -> anyhow::Result<()> {
    let item = Item {
        name: "Ada".into(),
        age: 36,
    };
    let mut destination = Item::default();
    let report = mapper.map_with_report(&item, &mut destination)?;
    assert!(report.is_complete());
    assert_eq!(report.into_iter().count(), 0);
    Ok(())
}

#[rstest]
fn leaf_source_skips_every_struct_field(mapper: Mapper) -> anyhow::Result<()> {
    let mut destination = Item::default();
    let report = mapper.map_with_report(&42_u32, &mut destination)?;
    let paths: Vec<String> = report
        .into_iter()
        .map(|skip| skip.path().to_string())
        .collect();
    assert_eq!(paths, vec!["name", "age"]);
    assert_eq!(destination, Item::default());
    Ok(())
}

#[rstest]
fn probe_diagnostics_stay_out_of_the_report(mapper: Mapper) -> anyhow::Result<()> {
    let mut destination = Batch::default();
    let report = mapper.map_with_report(&RawBatch::default(), &mut destination)?;
    assert!(report.is_complete());
    Ok(())
}

#[cfg(feature = "serde")]
#[rstest]
fn report_serialises_to_json(mapper: Mapper, batch: RawBatch) -> anyhow::Result<()> {
    let mut destination = Batch::default();
    let report = mapper.map_with_report(&batch, &mut destination)?;
    let json = serde_json::to_value(&report)?;
    assert_eq!(
        json["skipped"][0],
        serde_json::json!({
            "path": [{ "Field": "items" }, { "Index": 0 }, { "Field": "age" }],
            "error": "UnsupportedKind",
        })
    );
    Ok(())
}
