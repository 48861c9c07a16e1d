use std::{
    fs::{self, File},
    io::{self, BufWriter, Read as _, Write as _},
    path::Path,
};

use anyhow::Context;
use serde::Serialize;

use crate::command::InputArg;

/// Writes `value` as pretty JSON to `output_path`, `-` selects stdout.
pub fn save_json<T>(value: &T, output_path: &Path) -> anyhow::Result<()>
where
    T: Serialize,
{
    if output_path == Path::new("-") {
        write_json(io::stdout().lock(), value).context("Failed to write JSON to stdout")
    } else {
        create_parent_dir(output_path)?;
        let file = File::create(output_path).with_context(|| {
            format!("Failed to create output file: {}", output_path.display())
        })?;
        write_json(BufWriter::new(file), value)
            .with_context(|| format!("Failed to write JSON to {}", output_path.display()))
    }
}

fn write_json<W, T>(mut writer: W, value: &T) -> anyhow::Result<()>
where
    W: io::Write,
    T: Serialize,
{
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Makes sure the input file exists, downloading it unless `--offline` is set.
///
/// An existing file is reused as is.
pub fn ensure_input(arg: &InputArg) -> anyhow::Result<()> {
    if arg.input.is_file() {
        log::info!("Using local input file: {}", arg.input.display());
        return Ok(());
    }
    anyhow::ensure!(
        !arg.offline,
        "Input file not found: {} (download disabled by --offline)",
        arg.input.display()
    );
    download(&arg.url, &arg.input)
}

/// Downloads `url` into `path`, creating parent directories as needed.
pub fn download(url: &str, path: &Path) -> anyhow::Result<()> {
    log::info!("Downloading {url}");
    let response = ureq::get(url)
        .call()
        .with_context(|| format!("Failed to download {url}"))?;

    let mut body = Vec::new();
    response
        .into_reader()
        .read_to_end(&mut body)
        .with_context(|| format!("Failed to read response body from {url}"))?;

    create_parent_dir(path)?;
    fs::write(path, &body)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    log::info!("Saved {} bytes to {}", body.len(), path.display());
    Ok(())
}

pub fn create_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{
        io::{Read as _, Write as _},
        net::TcpListener,
        path::PathBuf,
        thread,
    };

    use super::*;

    /// Serves `response` to a single request and returns the URL to fetch.
    fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut request = [0; 4096];
                let _ = stream.read(&mut request);
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{addr}/presidents.csv")
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("lifespan-util-{}-{name}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_ensure_input_reuses_existing_file() {
        let dir = scratch_dir("cached");
        let input = dir.join("input.csv");
        create_parent_dir(&input).unwrap();
        fs::write(&input, "PRESIDENT,BIRTH DATE,DEATH DATE\n").unwrap();

        let arg = InputArg {
            input: input.clone(),
            url: "http://127.0.0.1:9/unreachable.csv".to_owned(),
            offline: true,
        };
        ensure_input(&arg).unwrap();
        assert_eq!(
            fs::read_to_string(&input).unwrap(),
            "PRESIDENT,BIRTH DATE,DEATH DATE\n"
        );
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_ensure_input_offline_without_file_fails() {
        let dir = scratch_dir("offline");
        let arg = InputArg {
            input: dir.join("missing.csv"),
            url: "http://127.0.0.1:9/unreachable.csv".to_owned(),
            offline: true,
        };
        let err = ensure_input(&arg).unwrap_err();
        assert!(err.to_string().contains("--offline"));
    }

    #[test]
    fn test_save_json_to_file() {
        let dir = scratch_dir("json");
        let path = dir.join("out").join("summary.json");
        save_json(&serde_json::json!({ "mean": 1.5 }), &path).unwrap();
        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["mean"], 1.5);
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_download_writes_body() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Length: 31\r\nConnection: close\r\n\r\nPRESIDENT,BIRTH DATE,DEATH DATE",
        );
        let dir = scratch_dir("download");
        let path = dir.join("nested").join("input.csv");
        download(&url, &path).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "PRESIDENT,BIRTH DATE,DEATH DATE"
        );
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_download_rejects_error_status() {
        let url =
            serve_once("HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        let dir = scratch_dir("not-found");
        let path = dir.join("input.csv");
        let err = download(&url, &path).unwrap_err();
        assert!(err.to_string().contains("Failed to download"));
        assert!(!path.exists());
    }
}
