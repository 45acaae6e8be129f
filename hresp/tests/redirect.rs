use assert_cmd::Command;

#[test]
fn should_short_circuit_the_body_on_redirect() {
    Command::cargo_bin("hresp")
        .unwrap()
        .args(["301", "-b", "never sent", "-r", "https://example.com/new"])
        .assert()
        .success()
        .stdout("HTTP/1.1 301 Moved Permanently\r\nLocation: https://example.com/new\r\n\r\n");
}

#[test]
fn should_keep_the_given_status_code_on_redirect() {
    Command::cargo_bin("hresp")
        .unwrap()
        .args(["-r", "/login"])
        .assert()
        .success()
        .stdout("HTTP/1.1 200 OK\r\nLocation: /login\r\n\r\n");
}

#[test]
fn should_emit_stored_headers_before_the_location_header() {
    Command::cargo_bin("hresp")
        .unwrap()
        .args(["307", "-H", "Cache-Control: no-store", "-r", "/login"])
        .assert()
        .success()
        .stdout(
            "HTTP/1.1 307 Temporary Redirect\r\nCache-Control: no-store\r\nLocation: /login\r\n\r\n",
        );
}
