fn main() {
    // Validate the embedded katakana table at compile time.
    validate_toml(
        "src/translit/default_katakana.toml",
        include_str!("src/translit/default_katakana.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}
