// src/download.rs
//! Cover image download.
//!
//! The body is streamed into `<dest>.part` and renamed onto `dest` only once
//! it is complete, so `false` never leaves a file at `dest`.

use std::{
    ffi::OsString,
    fs::{self, File},
    io::{BufWriter, Read, Write},
    path::{Path, PathBuf},
};

use reqwest::{blocking::Client, header::CONTENT_TYPE, StatusCode};

use crate::config::consts::{DOWNLOAD_CHUNK, LOG_MSG_MAX};
use crate::core::sanitize::truncate_chars;
use crate::error::Result;

/// `true` only if the server answered 200 with an `image/*` content type and
/// the whole body landed at `dest`.
pub fn download_image(client: &Client, url: &str, dest: &Path) -> bool {
    match try_download(client, url, dest) {
        Ok(saved) => saved,
        Err(e) => {
            log::warn!("Image download failed: {}", truncate_chars(&e.to_string(), LOG_MSG_MAX));
            false
        }
    }
}

fn try_download(client: &Client, url: &str, dest: &Path) -> Result<bool> {
    let mut resp = client.get(url).send()?;

    if resp.status() != StatusCode::OK {
        log::debug!("Image {url}: HTTP {}", resp.status());
        return Ok(false);
    }
    let content_type = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    if !content_type.contains("image") {
        log::debug!("Image {url}: content type {content_type:?} is not an image");
        return Ok(false);
    }

    let part = part_path(dest);
    let written = write_body(&mut resp, &part).and_then(|()| Ok(fs::rename(&part, dest)?));
    if let Err(e) = written {
        let _ = fs::remove_file(&part);
        return Err(e);
    }
    Ok(true)
}

/// Copy `body` to `path` in fixed-size chunks.
pub fn write_body(body: &mut impl Read, path: &Path) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    let mut buf = [0u8; DOWNLOAD_CHUNK];
    let mut first = true;
    loop {
        let n = body.read(&mut buf)?;
        if n == 0 {
            break;
        }
        if first {
            sniff_format(&buf[..n], path);
            first = false;
        }
        out.write_all(&buf[..n])?;
    }
    out.flush()?;
    Ok(())
}

fn sniff_format(head: &[u8], path: &Path) {
    match image::guess_format(head) {
        Ok(format) => log::debug!("{}: {format:?}", path.display()),
        Err(_) => log::warn!("{}: body does not look like a known image format", path.display()),
    }
}

fn part_path(dest: &Path) -> PathBuf {
    let mut s: OsString = dest.as_os_str().to_owned();
    s.push(".part");
    PathBuf::from(s)
}
