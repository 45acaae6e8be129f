use std::fs::File;
use std::io::{self, Write};
use std::mem;

use anyhow::{Context, Result};
use clap::Parser;
use hresp::{Args, Config};
use itertools::Itertools;

use hresp_core::{reason_phrase, Content, Response, WireSink};

fn main() -> Result<()> {
    let mut args = Args::parse();
    let headers = mem::take(&mut args.headers);
    let body = mem::take(&mut args.body);
    let file = mem::take(&mut args.file);
    let redirect = mem::take(&mut args.redirect);
    let out = mem::take(&mut args.out);
    let status = args.status;
    let config = args.into();

    do_it(status, headers, body, file, redirect, out, config)
}

fn do_it(
    status: u16,
    headers: Vec<String>,
    body: Option<String>,
    file: Option<String>,
    redirect: Option<String>,
    out: Option<String>,
    config: Config,
) -> Result<()> {
    let response = build_response(status, headers, body, file, redirect, &config)?;

    if !response.headers().is_empty() {
        config.logln(
            2,
            format!("header lines:\n{}", response.headers().iter().join("\n")),
        );
    }

    let reason = reason_phrase(response.status_code()).unwrap_or("Unknown");
    config.log(
        1,
        format!("HTTP/1.1 {} {}... ", response.status_code(), reason),
    );

    match out {
        Some(path) => {
            let target = File::create(&path)
                .with_context(|| format!("failed to create '{}'", path))?;
            emit(response, target)?;
        }
        None => emit(response, io::stdout().lock())?,
    }

    config.logln(1, "sent");

    Ok(())
}

fn build_response(
    status: u16,
    headers: Vec<String>,
    body: Option<String>,
    file: Option<String>,
    redirect: Option<String>,
    config: &Config,
) -> Result<Response> {
    let mut response = Response::default();
    response.set_status_code(status)?;

    for header in headers {
        response.add_header(header);
    }

    if let Some(body) = body {
        response.set_content(body);
    }

    if let Some(path) = file {
        config.logln(2, format!("streaming body from '{}'", &path));
        let source = File::open(&path)
            .with_context(|| format!("failed to open '{}'", path))?;
        response.set_content(Content::stream(source));
    }

    if let Some(url) = redirect {
        config.logln(2, format!("redirecting to '{}'", &url));
        response.set_redirect(url);
    }

    Ok(response)
}

fn emit<W: Write>(response: Response, out: W) -> Result<()> {
    let mut sink = WireSink::new(out);
    response.send(&mut sink)?;
    sink.finish()?;

    Ok(())
}
