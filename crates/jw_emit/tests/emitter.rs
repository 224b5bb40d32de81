use std::borrow::Cow;
use std::rc::Rc;

use jw_emit::{CircularRefPolicy, EmitError, EmitOptions, JsonEmitter, JsonSink, JsonWriter,
    NamingPolicy, TypeHandlers, to_string, to_string_pretty};
use jw_reflect::ops::{DynamicList, DynamicMap, DynamicStruct, List};
use jw_reflect::{Reflect, ReflectRef, reflect_enum};

fn emit(value: &dyn Reflect) -> String {
    to_string(value, &EmitOptions::default()).expect("emission succeeds")
}

// -----------------------------------------------------------------------------
// Shapes

#[test]
fn scalars_at_the_root() {
    assert_eq!(emit(&42_u8), "42");
    assert_eq!(emit(&-3_i64), "-3");
    assert_eq!(emit(&3.0_f64), "3");
    assert_eq!(emit(&19.99_f64), "19.99");
    assert_eq!(emit(&1.5_f32), "1.5");
    assert_eq!(emit(&true), "true");
    assert_eq!(emit(&"plain text"), r#""plain text""#);
    assert_eq!(emit(&()), "null");
}

#[test]
fn object_with_camel_cased_properties() {
    let mut person = DynamicStruct::new();
    person.insert("Name", "Ann".to_string());
    person.insert("Tags", vec!["x".to_string(), "y".to_string()]);

    assert_eq!(emit(&person), r#"{"name":"Ann","tags":["x","y"]}"#);
}

#[test]
fn map_keys_stay_in_insertion_order_and_form_an_object() {
    let mut map = DynamicMap::new();
    map.insert("1".to_string(), "first".to_string());
    map.insert("2".to_string(), "second".to_string());

    assert_eq!(emit(&map), r#"{"1":"first","2":"second"}"#);
}

#[test]
fn numeric_map_keys_use_their_textual_form() {
    let mut map = DynamicMap::new();
    map.insert(10_u32, true);

    assert_eq!(emit(&map), r#"{"10":true}"#);
}

#[test]
fn key_naming_policy_applies_to_map_keys() {
    let mut map = DynamicMap::new();
    map.insert("Some_Key".to_string(), 1_u8);

    let options = EmitOptions::default().with_key_naming(NamingPolicy::CamelCase);
    assert_eq!(to_string(&map, &options).unwrap(), r#"{"someKey":1}"#);
}

#[test]
fn preserve_naming_leaves_member_names_alone() {
    let mut person = DynamicStruct::new();
    person.insert("Name", "Ann".to_string());

    let options = EmitOptions::default().with_property_naming(NamingPolicy::Preserve);
    assert_eq!(to_string(&person, &options).unwrap(), r#"{"Name":"Ann"}"#);
}

#[test]
fn nested_lists_and_structs() {
    let mut inner = DynamicStruct::new();
    inner.insert("ok", true);

    let mut list = DynamicList::new();
    list.push(1_u8);
    list.push(inner);

    let mut outer = DynamicStruct::new();
    outer.insert("items", list);

    assert_eq!(emit(&outer), r#"{"items":[1,{"ok":true}]}"#);
}

// -----------------------------------------------------------------------------
// Null handling

#[test]
fn null_members_are_emitted_with_their_name() {
    let mut person = DynamicStruct::new();
    person.insert("name", "Ann".to_string());
    person.insert("nickname", Option::<String>::None);

    assert_eq!(emit(&person), r#"{"name":"Ann","nickname":null}"#);
}

#[test]
fn null_at_root_and_in_arrays_is_a_bare_token() {
    assert_eq!(emit(&Option::<i32>::None), "null");
    assert_eq!(emit(&vec![Some(1_i32), None, Some(3)]), "[1,null,3]");
}

// -----------------------------------------------------------------------------
// Enums and undefined values

enum Status {
    Open,
    Closed,
}
reflect_enum!(Status { Open, Closed });

#[test]
fn enums_emit_their_variant_name() {
    assert_eq!(emit(&Status::Open), r#""Open""#);
    assert_eq!(emit(&Status::Closed), r#""Closed""#);

    let mut order = DynamicStruct::new();
    order.insert("status", Status::Open);
    assert_eq!(emit(&order), r#"{"status":"Open"}"#);
}

struct Blob;

impl Reflect for Blob {
    fn type_path(&self) -> Cow<'static, str> {
        Cow::Borrowed("emitter::Blob")
    }
    fn type_ident(&self) -> Cow<'static, str> {
        Cow::Borrowed("Blob")
    }
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Opaque(self)
    }
}

#[test]
fn unclassifiable_values_degrade_to_the_undefined_marker() {
    assert_eq!(emit(&Blob), r#""$Undefined""#);

    let mut holder = DynamicStruct::new();
    holder.insert("void", Blob);
    assert_eq!(emit(&holder), r#"{"void":"$Undefined"}"#);
}

#[test]
fn member_less_structs_are_undefined() {
    assert_eq!(emit(&DynamicStruct::new()), r#""$Undefined""#);
}

// -----------------------------------------------------------------------------
// Scalar ecosystem types

#[test]
fn ecosystem_scalars_have_canonical_text_forms() {
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use uuid::Uuid;

    let instant = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
    assert_eq!(emit(&instant), r#""2024-05-01T12:30:00+00:00""#);

    let id = Uuid::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
    assert_eq!(emit(&id), r#""67e55044-10b1-426f-9247-bb680e5fe0c8""#);

    let price = Decimal::new(250, 2); // 2.50
    assert_eq!(emit(&price), "2.5");

    let pause = std::time::Duration::from_millis(1500);
    assert_eq!(emit(&pause), r#""1.5s""#);
}

#[test]
fn non_finite_floats_are_fatal() {
    let error = to_string(&f64::NAN, &EmitOptions::default()).unwrap_err();
    assert!(matches!(error, EmitError::NonFiniteNumber(_)));

    let error = to_string(&f64::INFINITY, &EmitOptions::default()).unwrap_err();
    assert!(matches!(error, EmitError::NonFiniteNumber(_)));
}

// -----------------------------------------------------------------------------
// Wrapper transparency

#[test]
fn wrappers_emit_as_their_referent() {
    assert_eq!(emit(&Box::new(vec![1_u8, 2])), "[1,2]");
    assert_eq!(emit(&Rc::new("shared".to_string())), r#""shared""#);

    let value = String::from("borrowed");
    assert_eq!(emit(&&value), r#""borrowed""#);
}

#[test]
fn shared_values_are_tracked_across_the_whole_document() {
    let shared = Rc::new(vec![1_u8, 2]);

    let mut holder = DynamicStruct::new();
    holder.insert("first", Rc::clone(&shared));
    holder.insert("second", Rc::clone(&shared));

    // The default policy suppresses the second occurrence of the same value.
    assert_eq!(emit(&holder), r#"{"first":[1,2]}"#);

    // Writing values anyway emits both occurrences.
    let options = EmitOptions::default().with_circular_refs(CircularRefPolicy::WriteValue);
    assert_eq!(
        to_string(&holder, &options).unwrap(),
        r#"{"first":[1,2],"second":[1,2]}"#
    );
}

// -----------------------------------------------------------------------------
// String escaping

#[test]
fn strings_are_escaped_exactly_once() {
    let mut holder = DynamicStruct::new();
    holder.insert("text", "a\"b\\c\nd".to_string());

    let json = emit(&holder);
    assert_eq!(json, "{\"text\":\"a\\\"b\\\\c\\nd\"}");

    let doc: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(doc["text"], "a\"b\\c\nd");
}

// -----------------------------------------------------------------------------
// Extraction fallback

struct FlakySeq(Vec<i32>);

impl Reflect for FlakySeq {
    fn type_path(&self) -> Cow<'static, str> {
        Cow::Borrowed("emitter::FlakySeq")
    }
    fn type_ident(&self) -> Cow<'static, str> {
        Cow::Borrowed("FlakySeq")
    }
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::List(self)
    }
}

impl List for FlakySeq {
    fn len(&self) -> usize {
        self.0.len()
    }
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        self.0.get(index).map(|element| element as &dyn Reflect)
    }
    fn iter(&self) -> Option<Box<dyn Iterator<Item = &dyn Reflect> + '_>> {
        None
    }
}

struct DeadSeq;

impl Reflect for DeadSeq {
    fn type_path(&self) -> Cow<'static, str> {
        Cow::Borrowed("emitter::DeadSeq")
    }
    fn type_ident(&self) -> Cow<'static, str> {
        Cow::Borrowed("DeadSeq")
    }
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::List(self)
    }
}

impl List for DeadSeq {
    fn len(&self) -> usize {
        3
    }
    fn get(&self, _index: usize) -> Option<&dyn Reflect> {
        None
    }
    fn iter(&self) -> Option<Box<dyn Iterator<Item = &dyn Reflect> + '_>> {
        None
    }
}

#[test]
fn broken_enumerators_fall_back_to_indexed_access() {
    assert_eq!(emit(&FlakySeq(vec![7, 8, 9])), "[7,8,9]");
}

#[test]
fn fully_broken_sequences_emit_empty_not_an_error() {
    assert_eq!(emit(&DeadSeq), "[]");
}

// -----------------------------------------------------------------------------
// Interception

#[test]
fn handlers_replace_claimed_values() {
    let handlers = TypeHandlers::new().register(
        |value| value.type_ident() == "String",
        |sink, _value, property| {
            if let Some(property) = property {
                sink.property_name(property.name())?;
            }
            sink.write_string("[redacted]")?;
            Ok(())
        },
    );

    let mut account = DynamicStruct::new();
    account.insert("user", "ann".to_string());
    account.insert("active", true);

    let emitter = JsonEmitter::with_processor(EmitOptions::default(), &handlers);
    let mut buffer = Vec::new();
    let mut writer = JsonWriter::new(&mut buffer);
    emitter.write(&mut writer, &account).unwrap();

    assert_eq!(
        String::from_utf8(buffer).unwrap(),
        r#"{"user":"[redacted]","active":true}"#
    );
}

#[test]
fn handlers_that_emit_nothing_drop_the_member() {
    let handlers = TypeHandlers::new().register(|value| value.type_ident() == "DeadSeq", |_, _, _| Ok(()));

    let mut holder = DynamicStruct::new();
    holder.insert("broken", DeadSeq);
    holder.insert("ok", 1_u8);

    let emitter = JsonEmitter::with_processor(EmitOptions::default(), &handlers);
    let mut buffer = Vec::new();
    let mut writer = JsonWriter::new(&mut buffer);
    emitter.write(&mut writer, &holder).unwrap();

    assert_eq!(String::from_utf8(buffer).unwrap(), r#"{"ok":1}"#);
}

#[test]
fn handler_failures_abort_the_write() {
    let handlers = TypeHandlers::new().register(
        |value| value.type_ident() == "Blob",
        |_, value, _| Err(EmitError::custom(value, "refused")),
    );

    let emitter = JsonEmitter::with_processor(EmitOptions::default(), &handlers);
    let mut buffer = Vec::new();
    let mut writer = JsonWriter::new(&mut buffer);
    let error = emitter.write(&mut writer, &Blob).unwrap_err();

    assert!(matches!(error, EmitError::Custom { .. }));
}

// -----------------------------------------------------------------------------
// Pretty output

#[test]
fn pretty_output_round_trips() {
    let mut person = DynamicStruct::new();
    person.insert("name", "Ann".to_string());
    person.insert("age", 39_u8);

    let json = to_string_pretty(&person, &EmitOptions::default()).unwrap();
    assert_eq!(json, "{\n  \"name\": \"Ann\",\n  \"age\": 39\n}");
}
