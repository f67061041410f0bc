#![allow(dead_code)]

use record_store::RawFields;

pub fn fields(pairs: &[(&str, &str)]) -> RawFields {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn inception() -> RawFields {
    fields(&[("name", "Inception"), ("year", "2010"), ("genre", "Sci-Fi")])
}

pub fn leo() -> RawFields {
    fields(&[
        ("name", "Leo"),
        ("gender", "male"),
        ("date_of_birth", "1974-11-11"),
    ])
}
