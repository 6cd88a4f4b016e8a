use crate::kernel::language::{file_icon, language_hint, LanguageId};

#[test]
fn hint_maps_known_extensions() {
    let cases = [
        ("escrow.rs", "rust"),
        ("Cargo.toml", "toml"),
        ("app.js", "javascript"),
        ("README.md", "plaintext"),
        ("Makefile", "plaintext"),
        ("archive.rs.bak", "plaintext"),
    ];

    for (name, expected) in cases {
        assert_eq!(language_hint(name), expected, "{name}");
    }
}

#[test]
fn hint_uses_last_extension_only() {
    assert_eq!(LanguageId::from_name("lib.test.rs"), LanguageId::Rust);
}

#[test]
fn icons_fall_back_to_generic_document() {
    assert_eq!(file_icon("rs"), "🦀");
    assert_eq!(file_icon("json"), "🔧");
    assert_eq!(file_icon("lock"), "📄");
    assert_eq!(file_icon(""), "📄");
}
