use petlisting_core::{Pet, PetInput, Sex};

#[test]
fn pet_input_uses_camel_case_wire_fields() {
    let value = serde_json::json!({
        "name": "Luna",
        "species": "dog",
        "sex": "female",
        "specialNeeds": "diet",
        "vaccinated": true,
        "primaryPhotoUrl": "https://img.example/luna.jpg",
        "extraPhotos": ["1.jpg", "2.jpg"],
        "ownerId": 5
    });

    let input: PetInput = serde_json::from_value(value).unwrap();
    assert_eq!(input.name.as_deref(), Some("Luna"));
    assert_eq!(input.sex, Some(Sex::Female));
    assert_eq!(input.special_needs.as_deref(), Some("diet"));
    assert_eq!(input.vaccinated, Some(true));
    assert_eq!(input.sterilized, None);
    assert_eq!(
        input.extra_photos,
        Some(vec!["1.jpg".to_string(), "2.jpg".to_string()])
    );
    assert_eq!(input.owner_id, Some(5));
}

#[test]
fn pet_input_accepts_empty_object() {
    let input: PetInput = serde_json::from_str("{}").unwrap();
    assert_eq!(input, PetInput::default());
}

#[test]
fn pet_input_rejects_unknown_sex() {
    let result = serde_json::from_str::<PetInput>(r#"{"sex": "unknown"}"#);
    assert!(result.is_err());
}

#[test]
fn pet_serializes_owner_as_plain_id() {
    let input = PetInput {
        name: Some("Rex".to_string()),
        sex: Some(Sex::Male),
        ..PetInput::default()
    };
    let mut pet = Pet::from_input(&input, 9);
    pet.id = Some(1);

    let json = serde_json::to_value(&pet).unwrap();
    assert_eq!(json["id"], 1);
    assert_eq!(json["ownerId"], 9);
    assert_eq!(json["sex"], "male");
    assert_eq!(json["extraPhotos"], serde_json::Value::Null);

    let decoded: Pet = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, pet);
}
