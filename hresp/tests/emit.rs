use assert_cmd::Command;
use indoc::indoc;

#[test]
fn should_emit_a_complete_response_to_stdout() {
    Command::cargo_bin("hresp")
        .unwrap()
        .args(["404", "-H", "X-Debug: 1", "-b", "Not Found"])
        .assert()
        .success()
        .stdout("HTTP/1.1 404 Not Found\r\nX-Debug: 1\r\n\r\nNot Found");
}

#[test]
fn should_default_to_status_200_with_no_body() {
    Command::cargo_bin("hresp")
        .unwrap()
        .assert()
        .success()
        .stdout("HTTP/1.1 200 OK\r\n\r\n");
}

#[test]
fn should_emit_the_body_verbatim() {
    let body = indoc!(
        r##"
        <html>
          <body>
            <h1>It works</h1>
          </body>
        </html>
    "##
    );

    Command::cargo_bin("hresp")
        .unwrap()
        .args(["-H", "Content-Type: text/html", "-b", body])
        .assert()
        .success()
        .stdout(format!(
            "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\n\r\n{}",
            body
        ));
}

#[test]
fn should_emit_duplicate_header_lines_in_the_given_order() {
    Command::cargo_bin("hresp")
        .unwrap()
        .args([
            "-H",
            "Set-Cookie: a=1",
            "-H",
            "X-Req: 2",
            "-H",
            "Set-Cookie: a=1",
        ])
        .assert()
        .success()
        .stdout("HTTP/1.1 200 OK\r\nSet-Cookie: a=1\r\nX-Req: 2\r\nSet-Cookie: a=1\r\n\r\n");
}

#[test]
fn should_emit_unknown_for_uncurated_status_codes() {
    Command::cargo_bin("hresp")
        .unwrap()
        .arg("418")
        .assert()
        .success()
        .stdout("HTTP/1.1 418 Unknown\r\n\r\n");
}

#[test]
fn should_log_the_status_line_to_stderr() {
    Command::cargo_bin("hresp")
        .unwrap()
        .args(["404", "-b", "nope"])
        .assert()
        .success()
        .stderr("HTTP/1.1 404 Not Found... sent\n");
}

#[test]
fn should_narrate_header_lines_with_verbose() {
    Command::cargo_bin("hresp")
        .unwrap()
        .args(["-v", "-H", "A: 1", "-H", "B: 2"])
        .assert()
        .success()
        .stderr("header lines:\nA: 1\nB: 2\nHTTP/1.1 200 OK... sent\n");
}

#[test]
fn should_suppress_logs_with_quiet() {
    Command::cargo_bin("hresp")
        .unwrap()
        .args(["404", "-b", "nope", "-q"])
        .assert()
        .success()
        .stderr("");
}
