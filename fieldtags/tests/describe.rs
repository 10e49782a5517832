use std::{collections::BTreeMap, marker::PhantomData, ptr};

use fieldtags::{
    capture, count, describe, Annotate, Error, FieldDescriptor, Record, Reflect, Seq, Tag,
    TypeToken,
};
use serde::Serialize;

#[derive(Tag)]
struct TagA;

#[derive(Tag)]
struct TagFamily<T>(PhantomData<T>);

type TagB = TagFamily<i8>;
type TagC = TagFamily<char>;

#[derive(Record)]
#[allow(dead_code)]
struct Annotated {
    _x: Annotate<TagA>,
    x: i32,
    _y: Annotate<(TagB, TagC)>,
    y: f64,
    z: f64,
}

#[derive(Record)]
struct Nothing {}

#[derive(Record)]
#[allow(dead_code)]
struct Four {
    a: bool,
    b: Option<String>,
    c: BTreeMap<u16, Vec<u8>>,
    d: Box<str>,
}

#[derive(Record)]
#[allow(dead_code)]
struct Outer {
    _inner: Annotate<TagA>,
    inner: Four,
    tuple: (u8, Annotated),
}

#[test_log::test]
fn annotated_record() {
    let description = describe::<Annotated>().unwrap();
    assert_eq!(*description.record(), Annotated::TOKEN);
    assert_eq!(description.field_count(), 3);

    let x = description.field(0).unwrap();
    assert_eq!(*x.ty(), i32::TOKEN);
    assert_eq!(x.annotations().as_slice(), [TagA::TOKEN]);

    let y = description.field(1).unwrap();
    assert_eq!(*y.ty(), f64::TOKEN);
    assert_eq!(y.annotations().as_slice(), [TagB::TOKEN, TagC::TOKEN]);

    let z = description.field(2).unwrap();
    assert_eq!(*z.ty(), f64::TOKEN);
    assert!(z.annotations().is_empty());
}

#[test]
fn record_without_fields() {
    let description = describe::<Nothing>().unwrap();
    assert_eq!(description.field_count(), 0);
    assert!(description.fields().is_empty());
    assert_eq!(
        description.field(0),
        Err(Error::IndexOutOfRange { index: 0, len: 0 })
    );
}

#[test]
fn record_without_markers() {
    let description = describe::<Four>().unwrap();
    assert_eq!(description.field_count(), 4);
    assert!(description
        .fields()
        .iter()
        .all(|field| field.annotations().is_empty()));
    assert_eq!(
        description.types().as_slice(),
        [
            bool::TOKEN,
            <Option<String>>::TOKEN,
            <BTreeMap<u16, Vec<u8>>>::TOKEN,
            <Box<str>>::TOKEN,
        ]
    );
}

#[test]
fn queries() {
    let description = describe::<Annotated>().unwrap();
    let x = description.field(0).unwrap();
    let y = description.field(1).unwrap();

    assert!(x.has_annotation::<TagA>());
    assert!(!x.has_annotation::<TagB>());
    assert!(!x.has_family_of::<TagFamily<()>>());
    assert!(y.has_family_of::<TagFamily<()>>());
    assert!(y.has_family(TagC::FAMILY));

    // The first match in declaration order.
    assert_eq!(y.find_family_of::<TagFamily<()>>(), Ok(TagB::TOKEN));
    assert_eq!(
        x.find_family(TagB::FAMILY),
        Err(Error::AnnotationNotFound {
            family: TagB::FAMILY.path(),
        })
    );
}

#[test]
fn nested_records_are_opaque_fields() {
    let description = describe::<Outer>().unwrap();
    assert_eq!(description.field_count(), 2);

    let inner = description.field(0).unwrap();
    assert!(inner.is::<Four>());
    assert!(inner.has_annotation::<TagA>());
    assert!(description.field(1).unwrap().is::<(u8, Annotated)>());

    // Describing the outer record leaves the inner ones to their own description.
    assert_eq!(describe::<Four>().unwrap().field_count(), 4);
}

#[test]
fn tuples_are_records() {
    type Pair = (Annotate<TagA>, String);
    let description = describe::<Pair>().unwrap();
    assert_eq!(description.field_count(), 1);
    assert_eq!(
        *description.field(0).unwrap(),
        FieldDescriptor::of::<String, TagA>().unwrap()
    );
}

#[test]
fn descriptions_are_shared() {
    let first = describe::<Annotated>().unwrap();
    let second = Annotated::describe().unwrap();
    assert!(ptr::eq(first, second));
    assert!(capture::is_captured::<Annotated>());
}

#[test]
fn counting_and_capture() {
    assert_eq!(count::count_fields::<Annotated>(), Ok(5));
    assert_eq!(
        count::count_fields::<Annotated>(),
        count::count_fields::<Annotated>()
    );
    assert!(count::accepts::<Annotated>(5));
    assert!(!count::accepts::<Annotated>(4));
    assert!(!count::accepts::<Annotated>(6));

    let slots = capture::capture_field_types::<Annotated>(5).unwrap();
    assert_eq!(
        slots.as_slice(),
        [
            <Annotate<TagA>>::TOKEN,
            i32::TOKEN,
            <Annotate<(TagB, TagC)>>::TOKEN,
            f64::TOKEN,
            f64::TOKEN,
        ]
    );
    assert_eq!(capture::type_at::<Annotated>(3), Ok(f64::TOKEN));
    assert_eq!(
        capture::type_at::<Annotated>(5),
        Err(Error::SlotNotCaptured {
            record: Annotated::TOKEN.name(),
            index: 5,
        })
    );
}

#[test]
fn grouping_by_hand() {
    let slots: Seq<'_, TypeToken> = [
        u8::TOKEN,
        <Annotate<TagA>>::TOKEN,
        <Annotate<TagC>>::TOKEN,
        u16::TOKEN,
    ]
    .into_iter()
    .collect();
    let runs = slots.group_while(TypeToken::is_annotation);
    assert_eq!(runs.len(), 2);
    assert_eq!(runs.flatten(), slots);

    let fields = fieldtags::group_fields(Annotated::TOKEN, &slots).unwrap();
    assert_eq!(fields.len(), 2);
    assert_eq!(
        *fields.get(1).unwrap(),
        FieldDescriptor::of::<u16, (TagA, TagC)>().unwrap()
    );
}

#[test]
fn display() {
    assert_eq!(
        describe::<Annotated>().unwrap().to_string(),
        "Annotated { i32 #[TagA], f64 #[TagFamily<i8>] #[TagFamily<char>], f64 }"
    );
    assert_eq!(describe::<Nothing>().unwrap().to_string(), "Nothing { }");
}

#[test]
fn serialize_within_another_document() {
    #[derive(Serialize)]
    struct Schema {
        version: u32,
        records: Vec<&'static fieldtags::RecordDescription>,
    }

    let schema = Schema {
        version: 1,
        records: vec![
            describe::<Annotated>().unwrap(),
            describe::<Nothing>().unwrap(),
        ],
    };
    assert_eq!(
        serde_json::to_value(&schema).unwrap(),
        serde_json::json!({
            "version": 1,
            "records": [
                {
                    "record": "Annotated",
                    "fields": [
                        { "type": "i32", "annotations": ["TagA"] },
                        {
                            "type": "f64",
                            "annotations": ["TagFamily<i8>", "TagFamily<char>"]
                        },
                        { "type": "f64", "annotations": [] }
                    ]
                },
                { "record": "Nothing", "fields": [] }
            ]
        })
    );
}

mod docs {
    #[derive(fieldtags::Tag)]
    pub struct Doc;
}

fn documented_field() -> &'static FieldDescriptor {
    #[derive(Tag)]
    struct Doc;

    #[derive(Record)]
    #[allow(dead_code)]
    struct Documented {
        _value: Annotate<Doc>,
        value: u32,
    }

    describe::<Documented>().unwrap().field(0).unwrap()
}

#[test]
fn function_local_tags_have_their_own_family() {
    #[derive(Tag)]
    struct Doc;

    let field = documented_field();
    assert_eq!(field.annotations().len(), 1);
    assert_eq!(field.annotations().head().unwrap().to_string(), "Doc");

    assert!(!field.has_family_of::<Doc>());
    assert!(!field.has_annotation::<Doc>());
    assert!(field.find_family_of::<Doc>().is_err());
    assert!(!field.has_family_of::<docs::Doc>());
    assert_ne!(Doc::FAMILY, docs::Doc::FAMILY);
}
