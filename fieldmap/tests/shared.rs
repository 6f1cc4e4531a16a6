//! Destinations held in shared `Arc` storage.

use std::sync::Arc;

use fieldmap::{MapError, Mapper, Reflect};
use rstest::{fixture, rstest};

#[derive(Clone, Debug, Default, PartialEq, Reflect)]
struct Settings {
    level: u8,
}

#[derive(Clone, Default, Reflect)]
struct Source {
    settings: Settings,
}

#[derive(Clone, Debug, Default, PartialEq, Reflect)]
struct Holder {
    settings: Arc<Settings>,
}

#[fixture]
fn mapper() -> Mapper {
    Mapper::default()
}

#[fixture]
fn source() -> Source {
    Source {
        settings: Settings { level: 3 },
    }
}

#[rstest]
fn shared_destination_is_not_addressable(mapper: Mapper) {
    let mut destination = Arc::new(Settings::default());
    let other = Arc::clone(&destination);
    assert_eq!(
        mapper.map(&Settings { level: 3 }, &mut destination),
        Err(MapError::NotAddressableDestination)
    );
    assert_eq!(*other, Settings::default());
}

#[rstest]
fn uniquely_owned_destination_is_written_through(mapper: Mapper) -> anyhow::Result<()> {
    let mut destination = Arc::new(Settings::default());
    mapper.map(&Settings { level: 3 }, &mut destination)?;
    assert_eq!(destination.level, 3);
    Ok(())
}

#[rstest]
fn shared_field_is_skipped_and_reported(mapper: Mapper, source: Source) -> anyhow::Result<()> {
    let mut holder = Holder::default();
    let other = Arc::clone(&holder.settings);
    let report = mapper.map_with_report(&source, &mut holder)?;
    assert_eq!(*other, Settings::default());
    let errors: Vec<MapError> = report.iter().map(|skip| skip.error()).collect();
    assert_eq!(errors, vec![MapError::NotAddressableDestination]);
    Ok(())
}

#[rstest]
fn unshared_field_is_mapped(mapper: Mapper, source: Source) -> anyhow::Result<()> {
    let holder: Holder = mapper.map_into(&source)?;
    assert_eq!(holder.settings.level, 3);
    Ok(())
}

#[derive(Clone, Default, Reflect)]
struct Label {
    text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Reflect)]
struct SharedLabel {
    text: Arc<String>,
}

#[rstest]
fn leaf_is_written_into_a_unique_arc(mapper: Mapper) -> anyhow::Result<()> {
    let label: SharedLabel = mapper.map_into(&Label {
        text: "hello".into(),
    })?;
    assert_eq!(label.text.as_str(), "hello");
    Ok(())
}

#[rstest]
fn leaf_into_a_shared_arc_field_is_not_addressable(mapper: Mapper) -> anyhow::Result<()> {
    let mut label = SharedLabel::default();
    let other = Arc::clone(&label.text);
    let report = mapper.map_with_report(
        &Label {
            text: "hello".into(),
        },
        &mut label,
    )?;
    assert!(other.is_empty());
    let errors: Vec<MapError> = report.iter().map(|skip| skip.error()).collect();
    assert_eq!(errors, vec![MapError::NotAddressableDestination]);
    Ok(())
}

#[rstest]
fn arc_field_is_replaced_from_an_arc_source(mapper: Mapper) -> anyhow::Result<()> {
    let source = SharedLabel {
        text: Arc::new("shared".into()),
    };
    let mut label = SharedLabel::default();
    let other = Arc::clone(&label.text);
    mapper.map(&source, &mut label)?;
    assert!(Arc::ptr_eq(&label.text, &source.text));
    assert!(other.is_empty());
    Ok(())
}
