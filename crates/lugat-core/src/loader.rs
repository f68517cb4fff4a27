use std::path::PathBuf;

use crate::dictionary::Dictionary;
use crate::error::LoadError;

/// Fetches the raw word list document
#[async_trait::async_trait]
pub trait ResourceFetcher: Send + Sync {
    async fn fetch(&self) -> Result<String, LoadError>;

    /// Human readable location, used in logs
    fn location(&self) -> String;
}

pub struct FileFetcher {
    path: PathBuf,
}

impl FileFetcher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl ResourceFetcher for FileFetcher {
    async fn fetch(&self) -> Result<String, LoadError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(LoadError::FileNotFound(self.path.display().to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

pub struct HttpFetcher {
    client: reqwest::Client,
    url: String,
}

impl HttpFetcher {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait::async_trait]
impl ResourceFetcher for HttpFetcher {
    async fn fetch(&self) -> Result<String, LoadError> {
        let response = self.client.get(&self.url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }

    fn location(&self) -> String {
        self.url.clone()
    }
}

/// Loads the dictionary once at startup
pub struct DictionaryLoader {
    fetcher: Box<dyn ResourceFetcher>,
}

impl DictionaryLoader {
    pub fn new(fetcher: Box<dyn ResourceFetcher>) -> Self {
        Self { fetcher }
    }

    /// Pick a fetcher from a path or an http(s) URL
    pub fn from_source(source: &str) -> Self {
        let fetcher: Box<dyn ResourceFetcher> =
            if source.starts_with("http://") || source.starts_with("https://") {
                Box::new(HttpFetcher::new(source))
            } else {
                Box::new(FileFetcher::new(source))
            };
        Self::new(fetcher)
    }

    pub fn location(&self) -> String {
        self.fetcher.location()
    }

    pub async fn load(&self) -> Result<Dictionary, LoadError> {
        tracing::info!("Loading dictionary from {}", self.fetcher.location());
        let json = self.fetcher.fetch().await?;
        let dict = Dictionary::from_json(&json)?;
        tracing::info!("Loaded {} dictionary entries", dict.len());
        Ok(dict)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;

    /// Answers a single request with `status` and `body`, returns the URL
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::<u8>::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{addr}/semantic.json")
    }

    fn http_loader(url: &str) -> DictionaryLoader {
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        DictionaryLoader::new(Box::new(HttpFetcher::with_client(client, url)))
    }

    #[tokio::test]
    async fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"tree": {{"type": "noun", "description": "A tall plant."}}}}"#
        )
        .unwrap();

        let loader = DictionaryLoader::from_source(&file.path().display().to_string());
        let dict = loader.load().await.unwrap();

        assert_eq!(dict.len(), 1);
        assert!(dict.get("tree").is_some());
    }

    #[tokio::test]
    async fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("semantic.json");

        let loader = DictionaryLoader::new(Box::new(FileFetcher::new(&path)));

        assert!(matches!(
            loader.load().await,
            Err(LoadError::FileNotFound(p)) if p == path.display().to_string()
        ));
    }

    #[tokio::test]
    async fn malformed_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"tree\": ").unwrap();

        let loader = DictionaryLoader::new(Box::new(FileFetcher::new(file.path())));

        assert!(matches!(loader.load().await, Err(LoadError::Parse(_))));
    }

    #[test]
    fn urls_use_http_fetcher() {
        let loader = DictionaryLoader::from_source("https://example.org/semantic.json");
        assert_eq!(loader.location(), "https://example.org/semantic.json");
    }

    #[tokio::test]
    async fn loads_over_http() {
        let url = serve_once(
            "200 OK",
            r#"{"tree": {"type": "noun", "origin": "Old English", "description": "A tall plant."}}"#,
        )
        .await;

        let dict = http_loader(&url).load().await.unwrap();

        assert_eq!(dict.len(), 1);
        assert_eq!(dict.get("tree").and_then(|e| e.origin.as_deref()), Some("Old English"));
    }

    #[tokio::test]
    async fn http_error_status_is_reported() {
        let url = serve_once("404 Not Found", "").await;

        assert!(matches!(http_loader(&url).load().await, Err(LoadError::Http(_))));
    }

    #[tokio::test]
    async fn refused_connection_is_an_http_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = http_loader(&format!("http://{addr}/semantic.json")).load().await;

        assert!(matches!(result, Err(LoadError::Http(_))));
    }
}
