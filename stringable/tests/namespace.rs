use stringable::{
    AnyAdaptor, Converter, ErrorKind, Namespace, Options, StringMarshaler, StringUnmarshaler,
    StringableError, Target, TypeKey,
};
use stringable_types::test_utils::{Apple, Banana, Cherry, Orange, Stone, YesNo};

fn yes_no(value: &mut bool) -> Result<Converter<'_>, StringableError> {
    Ok(Box::new(YesNo(value)))
}

fn yes_no_namespace() -> Namespace {
    let mut ns = Namespace::new();
    ns.adapt(yes_no);
    ns
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Custom adaptors
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn custom_adaptor_overrides_builtin() {
    let ns = yes_no_namespace();
    let mut flag = true;
    let mut converter = ns.resolve(&mut flag, Options::empty()).unwrap();
    assert_eq!(converter.marshal_string().unwrap(), "yes");

    converter.unmarshal_string("no").unwrap();
    assert_eq!(converter.marshal_string().unwrap(), "no");

    let err = converter.unmarshal_string("false").unwrap_err();
    assert!(matches!(err, StringableError::InvalidValue { .. }));
    assert!(err.to_string().contains("invalid value"), "{err}");
    drop(converter);
    assert!(!flag);
}

#[test]
fn custom_adaptor_stays_in_its_namespace() {
    let _custom = yes_no_namespace();
    let other = Namespace::new();

    let mut flag = true;
    let converter = other.resolve(&mut flag, Options::empty()).unwrap();
    assert_eq!(converter.marshal_string().unwrap(), "true");
    drop(converter);

    let converter = stringable::resolve(&mut flag).unwrap();
    assert_eq!(converter.marshal_string().unwrap(), "true");
}

#[test]
fn last_registration_wins() {
    fn plain(value: &mut bool) -> Result<Converter<'_>, StringableError> {
        Ok(Box::new(stringable_codecs::Bool::new(value)))
    }

    let mut ns = yes_no_namespace();
    ns.adapt(plain);
    assert_eq!(ns.len(), 1);
    assert!(ns.contains(&TypeKey::of::<bool>()));

    let mut flag = false;
    let converter = ns.resolve(&mut flag, Options::empty()).unwrap();
    assert_eq!(converter.marshal_string().unwrap(), "false");
}

#[test]
fn register_under_wrong_key_is_a_type_mismatch() {
    let mut ns = Namespace::new();
    ns.register(TypeKey::of::<i32>(), AnyAdaptor::new(yes_no));

    let mut n = 7i32;
    let err = ns.resolve(&mut n, Options::empty()).unwrap_err();
    match err {
        StringableError::TypeMismatch { expected, found } => {
            assert_eq!(expected, "bool");
            assert_eq!(found, "i32");
        }
        other => panic!("expected TypeMismatch, got {other:?}"),
    }
}

#[test]
fn adaptor_error_is_returned_without_fallback() {
    fn refuse(_: &mut Orange) -> Result<Converter<'_>, StringableError> {
        Err(StringableError::other("refused"))
    }

    let mut ns = Namespace::new();
    ns.adapt(refuse);

    // Orange could be composed, but a matching adaptor ends resolution.
    let mut orange = Orange::default();
    let err = ns.resolve(&mut orange, Options::empty()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Other);
    assert_eq!(err.to_string(), "refused");
}

#[test]
fn new_namespace_is_empty() {
    let ns = Namespace::new();
    assert!(ns.is_empty());
    assert!(!ns.contains(&TypeKey::of::<bool>()));
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Target shape
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn by_value_is_not_a_pointer() {
    let ns = yes_no_namespace();
    let flag = true;
    let err = ns.resolve(Target::by_value(&flag), Options::empty()).unwrap_err();
    assert!(matches!(err, StringableError::NotPointer("bool")));
}

#[test]
fn nil_is_a_nil_pointer() {
    let ns = Namespace::new();
    let err = ns.resolve(None::<&mut bool>, Options::empty()).unwrap_err();
    assert!(matches!(err, StringableError::NilPointer("bool")));

    let err = ns.resolve(Target::nil::<Apple>(), Options::empty()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NilPointer);
}

#[test]
fn existing_converter_is_returned_as_is() {
    let ns = Namespace::new();
    let mut flag = true;
    let mut custom = YesNo(&mut flag);
    let mut converter = ns
        .resolve(Target::converter(&mut custom), Options::NO_HYBRID)
        .unwrap();
    converter.unmarshal_string("no").unwrap();
    drop(converter);
    drop(custom);
    assert!(!flag);
}

#[test]
fn stringable_value_resolves_to_itself() {
    let ns = Namespace::new();
    let mut cherry = Cherry::default();
    let mut converter = ns.resolve(&mut cherry, Options::NO_HYBRID).unwrap();
    converter.unmarshal_string("red").unwrap();
    assert_eq!(
        converter.marshal_string().unwrap(),
        "marshal_string:unmarshal_string:red"
    );
    drop(converter);
    assert_eq!(cherry.content, "unmarshal_string:red");
}

#[test]
fn native_pair_resolves_to_itself_without_hybrid() {
    #[derive(Default)]
    struct Label(String);

    impl StringMarshaler for Label {
        fn marshal_string(&self) -> Result<String, StringableError> {
            Ok(self.0.clone())
        }
    }

    impl StringUnmarshaler for Label {
        fn unmarshal_string(&mut self, s: &str) -> Result<(), StringableError> {
            self.0 = s.to_uppercase();
            Ok(())
        }
    }

    stringable::probe!(Label => string_marshaler, string_unmarshaler);

    let ns = Namespace::new();
    let mut label = Label::default();
    for options in [
        Options::NO_HYBRID,
        Options::COMPLETE_HYBRID,
        Options::NO_HYBRID | Options::COMPLETE_HYBRID,
    ] {
        let mut converter = ns.resolve(&mut label, options).unwrap();
        converter.unmarshal_string("draft").unwrap();
        assert_eq!(converter.marshal_string().unwrap(), "DRAFT");
    }
    assert_eq!(label.0, "DRAFT");
}

#[test]
fn opaque_value_needs_an_adaptor() {
    struct Celsius(f64);

    fn celsius(value: &mut Celsius) -> Result<Converter<'_>, StringableError> {
        Ok(Box::new(stringable_codecs::Number::new(&mut value.0)))
    }

    let mut reading = Celsius(21.5);
    let err = Namespace::new()
        .resolve(Target::opaque(&mut reading), Options::empty())
        .unwrap_err();
    assert!(matches!(err, StringableError::UnsupportedType(_)));

    let mut ns = Namespace::new();
    ns.adapt(celsius);
    let mut converter = ns
        .resolve(Target::opaque(&mut reading), Options::empty())
        .unwrap();
    assert_eq!(converter.marshal_string().unwrap(), "21.5");
    converter.unmarshal_string("-3").unwrap();
    drop(converter);
    assert_eq!(reading.0, -3.0);
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Options
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn no_hybrid_rejects_composable_types() {
    let ns = Namespace::new();
    let mut apple = Apple;
    let err = ns.resolve(&mut apple, Options::NO_HYBRID).unwrap_err();
    assert!(matches!(err, StringableError::UnsupportedType(_)));

    let mut orange = Orange::default();
    assert!(ns.resolve(&mut orange, Options::empty()).is_ok());
    let err = ns.resolve(&mut orange, Options::NO_HYBRID).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedType);
}

#[test]
fn no_hybrid_keeps_builtins() {
    let ns = Namespace::new();
    let mut n = 5u64;
    let converter = ns.resolve(&mut n, Options::NO_HYBRID).unwrap();
    assert_eq!(converter.marshal_string().unwrap(), "5");
}

#[test]
fn complete_hybrid_requires_both_halves() {
    let ns = Namespace::new();

    let mut apple = Apple;
    let err = ns.resolve(&mut apple, Options::COMPLETE_HYBRID).unwrap_err();
    assert!(matches!(err, StringableError::MissingUnmarshaler(_)));

    let mut banana = Banana::default();
    let err = ns.resolve(&mut banana, Options::COMPLETE_HYBRID).unwrap_err();
    assert!(matches!(err, StringableError::MissingMarshaler(_)));

    let mut orange = Orange::default();
    let mut converter = ns.resolve(&mut orange, Options::COMPLETE_HYBRID).unwrap();
    converter.unmarshal_string("juice").unwrap();
    assert_eq!(converter.marshal_string().unwrap(), "juice");
}

#[test]
fn options_combine() {
    let ns = Namespace::new();
    let mut orange = Orange::default();
    let err = ns
        .resolve(&mut orange, Options::NO_HYBRID | Options::COMPLETE_HYBRID)
        .unwrap_err();
    assert!(matches!(err, StringableError::UnsupportedType(_)));
}

#[test]
fn capability_free_type_is_unsupported() {
    let ns = Namespace::new();
    let mut stone = Stone::default();
    let err = ns.resolve(&mut stone, Options::empty()).unwrap_err();
    assert!(matches!(err, StringableError::UnsupportedType(name) if name.ends_with("Stone")));
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Sharing
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn registered_namespace_is_shareable_across_threads() {
    let ns = std::sync::Arc::new(yes_no_namespace());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let ns = ns.clone();
            std::thread::spawn(move || {
                let mut flag = i % 2 == 0;
                let converter = ns.resolve(&mut flag, Options::empty()).unwrap();
                converter.marshal_string().unwrap()
            })
        })
        .collect();
    let rendered: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(rendered, ["yes", "no", "yes", "no"]);
}
