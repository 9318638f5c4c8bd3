use stringable::{Converter, ErrorKind, Factory, Namespace, StringableError, Target, TypeKey};
use stringable_types::test_utils::{Apple, Banana, Stone, YesNo};

fn yes_no(value: &mut bool) -> Result<Converter<'_>, StringableError> {
    Ok(Box::new(YesNo(value)))
}

#[test]
fn factory_uses_custom_adaptors() {
    let mut factory = Factory::new();
    factory.adapt(yes_no);
    assert!(factory.contains(&TypeKey::of::<bool>()));

    let mut flag = false;
    let mut converter = factory.resolve(&mut flag).unwrap();
    assert_eq!(converter.marshal_string().unwrap(), "no");
    converter.unmarshal_string("yes").unwrap();
    drop(converter);
    assert!(flag);
}

#[test]
fn factory_falls_back_to_builtins() {
    let factory = Factory::new();
    let mut ratio = 0.25f32;
    let mut converter = factory.resolve(&mut ratio).unwrap();
    assert_eq!(converter.marshal_string().unwrap(), "0.25");
    let err = converter.unmarshal_string("quarter").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
}

#[test]
fn factory_accepts_half_composites() {
    let factory = Factory::new();

    let mut apple = Apple;
    let converter = factory.resolve(&mut apple).unwrap();
    assert_eq!(converter.marshal_string().unwrap(), "apple");

    let mut banana = Banana::default();
    let mut converter = factory.resolve(&mut banana).unwrap();
    let err = converter.marshal_string().unwrap_err();
    assert!(matches!(err, StringableError::NotStringMarshaler(_)));
    converter.unmarshal_string("ripe").unwrap();
    drop(converter);
    assert_eq!(banana.content, "ripe");
}

#[test]
fn factory_rejects_bad_targets() {
    let factory = Factory::new();

    let n = 1u8;
    let err = factory.resolve(Target::by_value(&n)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotPointer);

    let err = factory.resolve(None::<&mut u8>).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NilPointer);

    let mut stone = Stone::default();
    let err = factory.resolve(&mut stone).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedType);
}

#[test]
fn factory_from_namespace_keeps_registrations() {
    let mut ns = Namespace::new();
    ns.adapt(yes_no);
    let factory = Factory::from(ns);

    let mut flag = true;
    let converter = factory.resolve(&mut flag).unwrap();
    assert_eq!(converter.marshal_string().unwrap(), "yes");
}
