//! Trybuild fixture verifying `#[fieldmap(crate = "...")]` works with a
//! dependency rename via `use ... as`.

use fieldmap as mapping;
use mapping::Reflect;

#[derive(Clone, Default, Reflect)]
#[fieldmap(crate = "mapping")]
struct Source {
    name: String,
    count: u32,
}

#[derive(Clone, Default, Reflect)]
#[fieldmap(crate = "mapping")]
struct Destination {
    name: String,
}

fn main() {
    let source = Source {
        name: "hello".into(),
        count: 1,
    };
    let result: mapping::MapResult<Destination> = mapping::Mapper::default().map_into(&source);
    let _ = result;
}
