use anyhow::Result;
use assert_cmd::Command;
use temp_dir::TempDir;

#[test]
fn should_output_to_new_file() -> Result<()> {
    let workdir = TempDir::new()?;
    let out = workdir.path().join("response.bin");

    Command::cargo_bin("hresp")
        .unwrap()
        .args(["404", "-b", "nope", "-o"])
        .arg(out.to_str().unwrap())
        .assert()
        .success()
        .stdout("");

    let result = std::fs::read_to_string(out)?;
    assert_eq!(&result, "HTTP/1.1 404 Not Found\r\n\r\nnope");

    Ok(())
}

#[test]
fn should_output_to_and_overwrite_existing_file() -> Result<()> {
    let workdir = TempDir::new()?;
    let out = workdir.path().join("response.bin");
    std::fs::write(&out, "original content")?;

    Command::cargo_bin("hresp")
        .unwrap()
        .args(["204", "-o"])
        .arg(out.to_str().unwrap())
        .assert()
        .success();

    let result = std::fs::read_to_string(&out)?;
    assert_eq!(&result, "HTTP/1.1 204 No Content\r\n\r\n");

    Ok(())
}
