use super::{load_settings_from_file, Settings};

use std::{
    env, fs,
    time::{SystemTime, UNIX_EPOCH},
};

fn temp_root(label: &str) -> std::path::PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    env::temp_dir().join(format!("chef_server_{label}_{suffix}"))
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let root = temp_root("missing");
    let path = root.join("server.toml");
    let settings = load_settings_from_file(path.to_string_lossy().as_ref()).expect("settings");
    let defaults = Settings::default();
    assert_eq!(settings.server_bind, defaults.server_bind);
    assert_eq!(settings.max_body_bytes, defaults.max_body_bytes);
    assert_eq!(settings.mail.smtp_port, 587);
    assert_eq!(settings.mail.to, defaults.mail.to);
}

#[test]
fn file_values_override_defaults() {
    let root = temp_root("file");
    fs::create_dir_all(&root).expect("temp root");
    let path = root.join("server.toml");
    fs::write(
        &path,
        r#"
server_bind = "0.0.0.0:8080"

[mail]
smtp_host = "mail.example.com"
smtp_username = "relay@example.com"
to = ["ops@example.com", "owner@example.com"]
"#,
    )
    .expect("write settings");

    let settings = load_settings_from_file(path.to_string_lossy().as_ref()).expect("settings");
    assert_eq!(settings.server_bind, "0.0.0.0:8080");
    assert_eq!(settings.mail.smtp_host, "mail.example.com");
    assert_eq!(settings.mail.smtp_username, "relay@example.com");
    assert_eq!(settings.mail.smtp_port, 587);
    assert_eq!(settings.mail.to.len(), 2);

    fs::remove_dir_all(root).expect("cleanup");
}
