use std::{collections::HashMap, marker::PhantomData};

use fieldtags::{
    capture::type_at, count::count_fields, describe, Annotate, Error, Record, Reflect, Tag, Tags,
    TypeToken,
};

#[derive(Tag)]
struct Key;

#[derive(Tag)]
struct Bound<T>(PhantomData<T>);

#[derive(Record)]
#[allow(dead_code)]
struct Named {
    _id: Annotate<Key>,
    id: u64,
    name: String,
    scores: HashMap<String, f32>,
}

#[derive(Record)]
#[allow(dead_code)]
struct Tuple(u8, Annotate<Bound<u8>>, Option<u8>);

#[derive(Record)]
struct Unit;

#[derive(Record)]
#[allow(dead_code)]
struct Generic<T> {
    _value: Annotate<Bound<T>>,
    value: T,
    values: Vec<T>,
}

#[derive(Record)]
#[allow(dead_code)]
struct Fixed<const N: usize> {
    bytes: [u8; N],
}

#[derive(Record)]
#[allow(dead_code)]
struct Trailing<L: Tags> {
    value: i32,
    _trailer: Annotate<L>,
}

#[test]
fn named_struct() {
    assert_eq!(Named::TOKEN, TypeToken::of::<Named>());
    assert_eq!(count_fields::<Named>(), Ok(4));

    let description = Named::describe().unwrap();
    assert_eq!(description.field_count(), 3);
    assert!(description.field(0).unwrap().has_annotation::<Key>());
    assert!(description.field(2).unwrap().is::<HashMap<String, f32>>());
    assert_eq!(type_at::<Named>(0), Ok(<Annotate<Key>>::TOKEN));
}

#[test]
fn tuple_struct() {
    let description = describe::<Tuple>().unwrap();
    assert_eq!(description.field_count(), 2);
    assert!(description.field(0).unwrap().is::<u8>());
    assert!(description.field(1).unwrap().is::<Option<u8>>());
    assert!(description.field(1).unwrap().has_annotation::<Bound<u8>>());
}

#[test]
fn unit_struct() {
    assert_eq!(count_fields::<Unit>(), Ok(0));
    assert!(describe::<Unit>().unwrap().fields().is_empty());
}

#[test]
fn generic_struct() {
    let strings = describe::<Generic<String>>().unwrap();
    let bytes = describe::<Generic<u8>>().unwrap();
    assert_ne!(strings.record(), bytes.record());

    assert!(strings.field(0).unwrap().is::<String>());
    assert!(strings.field(0).unwrap().has_annotation::<Bound<String>>());
    assert!(strings.field(1).unwrap().is::<Vec<String>>());
    assert!(bytes.field(0).unwrap().has_annotation::<Bound<u8>>());
    assert!(bytes.field(0).unwrap().has_family_of::<Bound<()>>());
}

#[test]
fn const_generic_struct() {
    let description = describe::<Fixed<4>>().unwrap();
    assert!(description.field(0).unwrap().is::<[u8; 4]>());
    assert!(!description.field(0).unwrap().is::<[u8; 8]>());
}

#[test]
fn generic_dangling_annotation() {
    assert_eq!(count_fields::<Trailing<(Key,)>>(), Ok(2));
    assert_eq!(
        describe::<Trailing<(Key,)>>(),
        Err(Error::DanglingAnnotation {
            record: TypeToken::of::<Trailing<(Key,)>>().name(),
        })
    );
}
